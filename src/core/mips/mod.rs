//! MIPS constant namespaces and per-instruction detail.

pub mod mnemonic;
pub mod regs;

use serde::{Deserialize, Serialize};

pub use mnemonic::MipsMnemonic;
pub use regs::MipsReg;

/// MIPS-specific decode detail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MipsDetail {
    /// Instruction word in host order.
    pub raw: u32,
    /// Control transfer that executes the following instruction first.
    pub delay_slot: bool,
}
