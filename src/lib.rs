//! Table-driven multi-architecture machine code disassembler.
//!
//! Decodes x86 (16/32/64-bit, legacy/VEX/EVEX/XOP) and MIPS (32/64-bit,
//! either byte order, release 6) one instruction at a time into structured
//! records. [`Engine`] is the entry point.

#[macro_use]
mod macros;

/// Core data types module
pub mod core;

/// Decoders, configuration and the engine
pub mod disasm;

pub mod error;
pub mod logging;

pub use crate::core::{
    group_name, mnemonic_name, register_name, Architecture, DecodeError, DecodeErrorKind,
    DecodeResult, Disassembler, Instruction, Mode, Operand, OperandKind,
};
pub use crate::core::x86::eflag_name;
pub use disasm::config::{DecodeOptions, DisassemblerConfig, ErrorPolicy};
pub use disasm::engine::{Disassembly, Engine, Item};
pub use error::{Result, ScathaError};
