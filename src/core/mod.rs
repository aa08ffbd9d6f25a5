//! Core data types for scatha.
//!
//! Architecture-neutral records (instructions, operands, registers, groups),
//! the per-architecture constant namespaces, and the `Disassembler` contract.

pub mod disassembler;
pub mod group;
pub mod instruction;
pub mod mips;
pub mod register;
pub mod x86;

pub use disassembler::{
    Architecture, DecodeError, DecodeErrorKind, DecodeResult, Disassembler, Mode,
};
pub use group::Group;
pub use instruction::{
    mnemonic_name, Access, ArchDetail, Instruction, MemoryRef, Mnemonic, Operand, OperandKind,
};
pub use register::{register_name, Register, RegisterKind};

/// Display name of an instruction group; `""` for the sentinel.
pub fn group_name(group: Group) -> &'static str {
    group.name()
}
