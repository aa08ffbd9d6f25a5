//! Instruction and Operand types for decoded machine instructions.
//!
//! An `Instruction` is the immutable record produced by one successful decode:
//! mnemonic, ordered operands, encoded length, and the static side-effect
//! metadata (implicit registers, groups, flags) of the matched encoding.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::disassembler::Architecture;
use crate::core::group::Group;
use crate::core::mips::{MipsDetail, MipsMnemonic};
use crate::core::register::Register;
use crate::core::x86::{AvxBroadcast, X86Detail, X86Mnemonic};

/// Access types for operands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Access {
    /// Operand is not accessed (address-only operands such as `lea`'s source)
    #[default]
    None,
    /// Read access
    Read,
    /// Write access
    Write,
    /// Read and write access
    ReadWrite,
}

impl Access {
    pub fn is_read(self) -> bool {
        matches!(self, Access::Read | Access::ReadWrite)
    }

    pub fn is_write(self) -> bool {
        matches!(self, Access::Write | Access::ReadWrite)
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::None => write!(f, "None"),
            Access::Read => write!(f, "Read"),
            Access::Write => write!(f, "Write"),
            Access::ReadWrite => write!(f, "ReadWrite"),
        }
    }
}

/// Memory addressing components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryRef {
    /// Explicit segment override, `Invalid` when none.
    pub segment: Register,
    pub base: Register,
    pub index: Register,
    /// Index scale, 1 when there is no scaled index.
    pub scale: u8,
    pub disp: i64,
}

impl Default for MemoryRef {
    fn default() -> Self {
        Self {
            segment: Register::Invalid,
            base: Register::Invalid,
            index: Register::Invalid,
            scale: 1,
            disp: 0,
        }
    }
}

impl MemoryRef {
    /// Scale only when it changes the address computation.
    pub fn reported_scale(&self) -> Option<u8> {
        (self.scale != 1).then_some(self.scale)
    }

    /// Registers participating in the address computation.
    pub fn registers(&self) -> impl Iterator<Item = Register> {
        [self.segment, self.base, self.index]
            .into_iter()
            .filter(|r| r.is_valid())
    }
}

/// Operand payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OperandKind {
    Register(Register),
    Immediate(i64),
    Memory(MemoryRef),
    FloatImmediate(f64),
}

impl OperandKind {
    /// Short tag for the variant.
    pub fn tag(&self) -> &'static str {
        match self {
            OperandKind::Register(_) => "Register",
            OperandKind::Immediate(_) => "Immediate",
            OperandKind::Memory(_) => "Memory",
            OperandKind::FloatImmediate(_) => "FloatImmediate",
        }
    }
}

/// Structured operand representation for instructions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Operand {
    pub kind: OperandKind,
    /// Size in bits (0 for address-only memory operands)
    pub size: u16,
    pub access: Access,
    /// EVEX embedded broadcast on a memory source
    pub avx_bcast: Option<AvxBroadcast>,
    /// EVEX zeroing-masking on the destination
    pub avx_zero_opmask: bool,
    /// EVEX write mask register on the destination, `Invalid` otherwise
    pub mask: Register,
}

impl Operand {
    fn with_kind(kind: OperandKind, size: u16, access: Access) -> Self {
        Self {
            kind,
            size,
            access,
            avx_bcast: None,
            avx_zero_opmask: false,
            mask: Register::Invalid,
        }
    }

    /// Create a register operand
    pub fn register(reg: impl Into<Register>, size: u16, access: Access) -> Self {
        Self::with_kind(OperandKind::Register(reg.into()), size, access)
    }

    /// Create an immediate operand (always read)
    pub fn immediate(value: i64, size: u16) -> Self {
        Self::with_kind(OperandKind::Immediate(value), size, Access::Read)
    }

    /// Create a memory operand
    pub fn memory(mem: MemoryRef, size: u16, access: Access) -> Self {
        Self::with_kind(OperandKind::Memory(mem), size, access)
    }

    /// Create a floating point immediate operand
    pub fn float_immediate(value: f64, size: u16) -> Self {
        Self::with_kind(OperandKind::FloatImmediate(value), size, Access::Read)
    }

    pub fn is_register(&self) -> bool {
        matches!(self.kind, OperandKind::Register(_))
    }

    pub fn is_immediate(&self) -> bool {
        matches!(self.kind, OperandKind::Immediate(_))
    }

    pub fn is_memory(&self) -> bool {
        matches!(self.kind, OperandKind::Memory(_))
    }

    /// The register of a register operand.
    pub fn reg(&self) -> Option<Register> {
        match self.kind {
            OperandKind::Register(r) => Some(r),
            _ => None,
        }
    }

    /// The value of an immediate operand.
    pub fn imm(&self) -> Option<i64> {
        match self.kind {
            OperandKind::Immediate(v) => Some(v),
            _ => None,
        }
    }

    /// The addressing components of a memory operand.
    pub fn mem(&self) -> Option<&MemoryRef> {
        match &self.kind {
            OperandKind::Memory(m) => Some(m),
            _ => None,
        }
    }
}

/// Instruction identifier of any supported architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mnemonic {
    X86(X86Mnemonic),
    Mips(MipsMnemonic),
}

impl Mnemonic {
    pub fn name(self) -> &'static str {
        match self {
            Mnemonic::X86(m) => m.name(),
            Mnemonic::Mips(m) => m.name(),
        }
    }
}

impl From<X86Mnemonic> for Mnemonic {
    fn from(m: X86Mnemonic) -> Self {
        Mnemonic::X86(m)
    }
}

impl From<MipsMnemonic> for Mnemonic {
    fn from(m: MipsMnemonic) -> Self {
        Mnemonic::Mips(m)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display name of any mnemonic.
pub fn mnemonic_name(m: Mnemonic) -> &'static str {
    m.name()
}

/// Architecture-specific decode detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum ArchDetail {
    /// Detail was switched off for this engine.
    #[default]
    None,
    X86(X86Detail),
    Mips(MipsDetail),
}

/// Decoded instruction at a specific address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Address this instruction was decoded at
    pub address: u64,
    /// Raw bytes of the instruction
    pub bytes: Vec<u8>,
    pub mnemonic: Mnemonic,
    /// Formatted operand text
    pub op_str: String,
    /// Structured operands, in encoding order
    pub operands: Vec<Operand>,
    /// Encoded length in bytes
    pub length: u16,
    pub arch: Architecture,
    /// Semantic groups; empty when detail is off
    pub groups: Vec<Group>,
    /// Implicitly read registers; empty when detail is off
    pub regs_read: Vec<Register>,
    /// Implicitly written registers; empty when detail is off
    pub regs_write: Vec<Register>,
    pub detail: ArchDetail,
}

impl Instruction {
    /// Encoded length in bytes.
    pub fn len(&self) -> usize {
        self.length as usize
    }

    /// Always false for a decoded instruction.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Address of the following instruction.
    pub fn end_address(&self) -> u64 {
        self.address.wrapping_add(self.length as u64)
    }

    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    pub fn has_operands(&self) -> bool {
        !self.operands.is_empty()
    }

    pub fn in_group(&self, group: Group) -> bool {
        self.groups.contains(&group)
    }

    pub fn is_branch(&self) -> bool {
        self.in_group(Group::Jump)
    }

    pub fn is_call(&self) -> bool {
        self.in_group(Group::Call)
    }

    pub fn is_return(&self) -> bool {
        self.in_group(Group::Ret) || self.in_group(Group::Iret)
    }

    /// Implicit reads plus explicit operand reads and every register used
    /// to form a memory address.
    pub fn all_registers_read(&self) -> Vec<Register> {
        let mut out = Vec::new();
        let mut push = |r: Register| {
            if r.is_valid() && !out.contains(&r) {
                out.push(r);
            }
        };
        self.regs_read.iter().copied().for_each(&mut push);
        for op in &self.operands {
            match op.kind {
                OperandKind::Register(r) if op.access.is_read() => push(r),
                OperandKind::Memory(m) => m.registers().for_each(&mut push),
                _ => {}
            }
            if op.mask.is_valid() {
                push(op.mask);
            }
        }
        out
    }

    /// Implicit writes plus explicit register operands that are written.
    pub fn all_registers_written(&self) -> Vec<Register> {
        let mut out = Vec::new();
        let mut push = |r: Register| {
            if r.is_valid() && !out.contains(&r) {
                out.push(r);
            }
        };
        self.regs_write.iter().copied().for_each(&mut push);
        for op in &self.operands {
            if let OperandKind::Register(r) = op.kind {
                if op.access.is_write() {
                    push(r);
                }
            }
        }
        out
    }

    /// Listing line: address, hex bytes, mnemonic and operands.
    pub fn disassembly(&self) -> String {
        let mut result = format!("{:08x}: {:<24}", self.address, hex::encode(&self.bytes));
        result.push_str(&self.to_string());
        result
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.op_str.is_empty() {
            write!(f, "{}", self.mnemonic)
        } else {
            write!(f, "{} {}", self.mnemonic, self.op_str)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::x86::X86Reg;

    fn sample() -> Instruction {
        let mem = MemoryRef {
            base: X86Reg::Rbx.into(),
            index: X86Reg::Rcx.into(),
            scale: 4,
            disp: 0x10,
            ..Default::default()
        };
        Instruction {
            address: 0x401000,
            bytes: vec![0x8b, 0x44, 0x8b, 0x10],
            mnemonic: X86Mnemonic::Mov.into(),
            op_str: "eax, dword ptr [rbx + rcx*4 + 0x10]".to_string(),
            operands: vec![
                Operand::register(X86Reg::Eax, 32, Access::Write),
                Operand::memory(mem, 32, Access::Read),
            ],
            length: 4,
            arch: Architecture::X86,
            groups: vec![],
            regs_read: vec![],
            regs_write: vec![],
            detail: ArchDetail::None,
        }
    }

    #[test]
    fn test_memory_scale_reporting() {
        let plain = MemoryRef::default();
        assert_eq!(plain.scale, 1);
        assert_eq!(plain.reported_scale(), None);
        let scaled = MemoryRef {
            scale: 8,
            ..Default::default()
        };
        assert_eq!(scaled.reported_scale(), Some(8));
    }

    #[test]
    fn test_register_accounting() {
        let insn = sample();
        let read = insn.all_registers_read();
        assert_eq!(
            read,
            vec![Register::X86(X86Reg::Rbx), Register::X86(X86Reg::Rcx)]
        );
        assert_eq!(
            insn.all_registers_written(),
            vec![Register::X86(X86Reg::Eax)]
        );
    }

    #[test]
    fn test_display_and_listing() {
        let insn = sample();
        assert_eq!(insn.to_string(), "mov eax, dword ptr [rbx + rcx*4 + 0x10]");
        assert_eq!(insn.len(), 4);
        assert_eq!(insn.end_address(), 0x401004);
        let line = insn.disassembly();
        assert!(line.starts_with("00401000: 8b448b10"));
        assert!(line.ends_with("mov eax, dword ptr [rbx + rcx*4 + 0x10]"));
    }

    #[test]
    fn test_operand_accessors() {
        let op = Operand::immediate(-2, 8);
        assert!(op.is_immediate());
        assert_eq!(op.imm(), Some(-2));
        assert_eq!(op.access, Access::Read);
        assert_eq!(op.kind.tag(), "Immediate");
        assert!(op.reg().is_none());
    }
}
