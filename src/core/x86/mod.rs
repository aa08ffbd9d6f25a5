//! x86 constant namespaces and per-instruction detail.

pub mod flags;
pub mod mnemonic;
pub mod regs;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use flags::{eflag_name, EFlags};
pub use mnemonic::X86Mnemonic;
pub use regs::X86Reg;

/// Which encoding scheme produced an instruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum X86Encoding {
    #[default]
    Legacy,
    Vex,
    Evex,
    Xop,
}

impl fmt::Display for X86Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            X86Encoding::Legacy => write!(f, "legacy"),
            X86Encoding::Vex => write!(f, "vex"),
            X86Encoding::Evex => write!(f, "evex"),
            X86Encoding::Xop => write!(f, "xop"),
        }
    }
}

/// EVEX embedded broadcast factor on a memory operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvxBroadcast {
    OneTo2,
    OneTo4,
    OneTo8,
    OneTo16,
}

impl AvxBroadcast {
    /// Broadcast for a given element count; other counts have no encoding.
    pub fn from_count(count: u16) -> Option<Self> {
        match count {
            2 => Some(AvxBroadcast::OneTo2),
            4 => Some(AvxBroadcast::OneTo4),
            8 => Some(AvxBroadcast::OneTo8),
            16 => Some(AvxBroadcast::OneTo16),
            _ => None,
        }
    }

    pub fn count(self) -> u16 {
        match self {
            AvxBroadcast::OneTo2 => 2,
            AvxBroadcast::OneTo4 => 4,
            AvxBroadcast::OneTo8 => 8,
            AvxBroadcast::OneTo16 => 16,
        }
    }
}

impl fmt::Display for AvxBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1to{}", self.count())
    }
}

id_enum! {
    /// Legacy SSE `cmpps`/`cmpsd` predicate (imm8 bits 0..3).
    pub enum SseCc {
        Eq = "eq", Lt = "lt", Le = "le", Unord = "unord",
        Neq = "neq", Nlt = "nlt", Nle = "nle", Ord = "ord",
    }
}

id_enum! {
    /// VEX/EVEX `vcmp*` predicate (imm8 bits 0..5).
    pub enum AvxCc {
        Eq = "eq", Lt = "lt", Le = "le", Unord = "unord",
        Neq = "neq", Nlt = "nlt", Nle = "nle", Ord = "ord",
        EqUq = "eq_uq", Nge = "nge", Ngt = "ngt", False = "false",
        NeqOq = "neq_oq", Ge = "ge", Gt = "gt", True = "true",
        EqOs = "eq_os", LtOq = "lt_oq", LeOq = "le_oq", UnordS = "unord_s",
        NeqUs = "neq_us", NltUq = "nlt_uq", NleUq = "nle_uq", OrdS = "ord_s",
        EqUs = "eq_us", NgeUq = "nge_uq", NgtUq = "ngt_uq", FalseOs = "false_os",
        NeqOs = "neq_os", GeOq = "ge_oq", GtOq = "gt_oq", TrueUs = "true_us",
    }
}

id_enum! {
    /// XOP `vpcom*` predicate (imm8 bits 0..3).
    pub enum XopCc {
        Lt = "lt", Le = "le", Gt = "gt", Ge = "ge",
        Eq = "eq", Neq = "neq", False = "false", True = "true",
    }
}

id_enum! {
    /// EVEX static rounding mode.
    pub enum AvxRm {
        Rn = "rn", Rd = "rd", Ru = "ru", Rz = "rz",
    }
}

impl SseCc {
    pub fn from_imm(imm: u8) -> Self {
        Self::ALL[(imm & 7) as usize]
    }
}

impl AvxCc {
    pub fn from_imm(imm: u8) -> Self {
        Self::ALL[(imm & 0x1f) as usize]
    }
}

impl XopCc {
    pub fn from_imm(imm: u8) -> Self {
        Self::ALL[(imm & 7) as usize]
    }
}

impl AvxRm {
    pub fn from_ll(ll: u8) -> Self {
        Self::ALL[(ll & 3) as usize]
    }
}

/// x86-specific decode detail.
///
/// Prefix slots follow the usual grouping: `[0]` rep/lock, `[1]` segment,
/// `[2]` operand-size, `[3]` address-size. Unused bytes are zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct X86Detail {
    pub prefix: [u8; 4],
    /// Opcode bytes including escapes (`0F`, `0F 38`, ...), zero padded.
    pub opcode: [u8; 4],
    pub rex: u8,
    /// Effective address size in bytes.
    pub addr_size: u8,
    pub modrm: u8,
    pub sib: u8,
    pub disp: i64,
    pub sib_index: X86Reg,
    /// Zero when no SIB byte is present.
    pub sib_scale: i8,
    pub sib_base: X86Reg,
    pub encoding: X86Encoding,
    pub sse_cc: SseCc,
    pub avx_cc: AvxCc,
    pub xop_cc: XopCc,
    pub avx_sae: bool,
    pub avx_rm: AvxRm,
    pub eflags: EFlags,
    /// EVEX write mask (`k1`..`k7`), `Invalid` when unmasked.
    pub opmask: X86Reg,
}

impl X86Detail {
    /// Prefix bytes actually present, in slot order.
    pub fn prefixes(&self) -> impl Iterator<Item = u8> + '_ {
        self.prefix.iter().copied().filter(|b| *b != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_from_imm() {
        assert_eq!(SseCc::from_imm(0), SseCc::Eq);
        assert_eq!(SseCc::from_imm(0x0f), SseCc::Ord);
        assert_eq!(AvxCc::from_imm(0x1e), AvxCc::GtOq);
        assert_eq!(AvxCc::from_imm(0x0b), AvxCc::False);
        assert_eq!(XopCc::from_imm(5), XopCc::Neq);
        assert_eq!(AvxRm::from_ll(3), AvxRm::Rz);
    }

    #[test]
    fn test_broadcast() {
        assert_eq!(AvxBroadcast::from_count(8), Some(AvxBroadcast::OneTo8));
        assert_eq!(AvxBroadcast::from_count(3), None);
        assert_eq!(AvxBroadcast::OneTo16.to_string(), "1to16");
    }

    #[test]
    fn test_prefix_iteration_skips_empty_slots() {
        let detail = X86Detail {
            prefix: [0xf3, 0, 0x66, 0],
            ..Default::default()
        };
        assert_eq!(detail.prefixes().collect::<Vec<_>>(), vec![0xf3, 0x66]);
    }
}
