//! Architecture-neutral register handle.
//!
//! A `Register` wraps one of the per-architecture register namespaces and
//! carries an explicit `Invalid` sentinel for "absent" (no base register,
//! no segment override, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::mips::MipsReg;
use crate::core::x86::X86Reg;

/// Broad register classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisterKind {
    /// General purpose registers (rax, t0, ...)
    General,
    /// Scalar floating point registers (st(0), f12, ...)
    Float,
    /// SIMD registers (xmm, ymm, zmm, mm, MSA w*)
    Vector,
    /// Status/flags registers and condition codes
    Flags,
    /// Segment registers
    Segment,
    /// Control registers
    Control,
    /// Debug registers
    Debug,
    /// AVX-512 opmask registers
    Mask,
    /// Multiply/divide accumulators (hi, lo, ac*)
    Accumulator,
    /// Program counter
    ProgramCounter,
}

impl fmt::Display for RegisterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterKind::General => write!(f, "General"),
            RegisterKind::Float => write!(f, "Float"),
            RegisterKind::Vector => write!(f, "Vector"),
            RegisterKind::Flags => write!(f, "Flags"),
            RegisterKind::Segment => write!(f, "Segment"),
            RegisterKind::Control => write!(f, "Control"),
            RegisterKind::Debug => write!(f, "Debug"),
            RegisterKind::Mask => write!(f, "Mask"),
            RegisterKind::Accumulator => write!(f, "Accumulator"),
            RegisterKind::ProgramCounter => write!(f, "ProgramCounter"),
        }
    }
}

/// A register of any supported architecture.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Register {
    /// Absent register.
    #[default]
    Invalid,
    X86(X86Reg),
    Mips(MipsReg),
}

impl Register {
    /// Display name; `""` for the sentinel.
    pub fn name(self) -> &'static str {
        match self {
            Register::Invalid => "",
            Register::X86(r) => r.name(),
            Register::Mips(r) => r.name(),
        }
    }

    pub fn is_valid(self) -> bool {
        self != Register::Invalid
    }

    /// Width in bits where it does not depend on mode; MIPS GPRs report
    /// the 64-bit width.
    pub fn size(self) -> u16 {
        match self {
            Register::Invalid => 0,
            Register::X86(r) => r.size(),
            Register::Mips(r) => r.size(64),
        }
    }

    /// The x86 register, if this is one.
    pub fn as_x86(self) -> Option<X86Reg> {
        match self {
            Register::X86(r) => Some(r),
            _ => None,
        }
    }

    /// The MIPS register, if this is one.
    pub fn as_mips(self) -> Option<MipsReg> {
        match self {
            Register::Mips(r) => Some(r),
            _ => None,
        }
    }

    /// Register class; `None` for the sentinel.
    pub fn kind(self) -> Option<RegisterKind> {
        let name = self.name();
        match self {
            Register::Invalid => None,
            Register::X86(r) => Some(match r {
                X86Reg::Eflags | X86Reg::Fpsw => RegisterKind::Flags,
                X86Reg::Ip | X86Reg::Eip | X86Reg::Rip => RegisterKind::ProgramCounter,
                X86Reg::Es | X86Reg::Cs | X86Reg::Ss | X86Reg::Ds | X86Reg::Fs | X86Reg::Gs => {
                    RegisterKind::Segment
                }
                _ if name.starts_with("cr") => RegisterKind::Control,
                _ if name.starts_with("dr") => RegisterKind::Debug,
                _ if name.starts_with("st(") => RegisterKind::Float,
                _ if name.starts_with('k') => RegisterKind::Mask,
                _ if name.starts_with("mm")
                    || name.starts_with("xmm")
                    || name.starts_with("ymm")
                    || name.starts_with("zmm") =>
                {
                    RegisterKind::Vector
                }
                _ => RegisterKind::General,
            }),
            Register::Mips(r) => Some(match r {
                MipsReg::Hi | MipsReg::Lo => RegisterKind::Accumulator,
                MipsReg::Pc => RegisterKind::ProgramCounter,
                _ if r.is_gpr() => RegisterKind::General,
                _ if name.starts_with("fcc") => RegisterKind::Flags,
                _ if name.starts_with("ac") => RegisterKind::Accumulator,
                _ if name.starts_with('f') => RegisterKind::Float,
                _ => RegisterKind::Vector,
            }),
        }
    }
}

impl From<X86Reg> for Register {
    fn from(r: X86Reg) -> Self {
        if r.is_valid() {
            Register::X86(r)
        } else {
            Register::Invalid
        }
    }
}

impl From<MipsReg> for Register {
    fn from(r: MipsReg) -> Self {
        if r.is_valid() {
            Register::Mips(r)
        } else {
            Register::Invalid
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display name of any register; `""` for the sentinel.
pub fn register_name(reg: Register) -> &'static str {
    reg.name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sentinel() {
        assert_eq!(Register::default(), Register::Invalid);
        assert_eq!(Register::from(X86Reg::Invalid), Register::Invalid);
        assert_eq!(Register::from(MipsReg::Invalid), Register::Invalid);
        assert_eq!(register_name(Register::Invalid), "");
        assert!(Register::Invalid.kind().is_none());
    }

    #[test]
    fn test_names_and_kinds() {
        let rax = Register::from(X86Reg::Rax);
        assert_eq!(rax.name(), "rax");
        assert_eq!(rax.kind(), Some(RegisterKind::General));
        assert_eq!(Register::from(X86Reg::Ymm3).kind(), Some(RegisterKind::Vector));
        assert_eq!(Register::from(X86Reg::K2).kind(), Some(RegisterKind::Mask));
        assert_eq!(Register::from(X86Reg::Cr4).kind(), Some(RegisterKind::Control));
        assert_eq!(Register::from(X86Reg::Fs).kind(), Some(RegisterKind::Segment));

        let sp = Register::from(MipsReg::Sp);
        assert_eq!(sp.to_string(), "sp");
        assert_eq!(sp.kind(), Some(RegisterKind::General));
        assert_eq!(Register::from(MipsReg::F4).kind(), Some(RegisterKind::Float));
        assert_eq!(Register::from(MipsReg::Fcc1).kind(), Some(RegisterKind::Flags));
        assert_eq!(Register::from(MipsReg::Lo).kind(), Some(RegisterKind::Accumulator));
    }

    #[test]
    fn test_accessors() {
        let r = Register::from(X86Reg::Ecx);
        assert_eq!(r.as_x86(), Some(X86Reg::Ecx));
        assert_eq!(r.as_mips(), None);
        assert_eq!(r.size(), 32);
    }
}
