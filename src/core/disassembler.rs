//! Disassembler trait, architecture/mode selection and decode errors.
//!
//! This module defines the `Disassembler` trait shared by every decoder
//! engine together with the error type a single-instruction decode reports.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::core::instruction::Instruction;
use crate::error::ScathaError;

/// Failure of a single-instruction decode.
///
/// `offset` is always the instruction's start offset in the input buffer;
/// the cursor has been restored there when the error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum DecodeError {
    /// Not enough bytes for the next prefix, opcode or selector unit
    #[error("underrun at offset {offset:#x}: needed {needed} byte(s), {available} available")]
    Underrun {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// Prefix scan exceeded the architecture bound
    #[error("excessive prefixes at offset {offset:#x}: {count} prefix bytes")]
    ExcessivePrefixes { offset: usize, count: usize },
    /// No encoding table entry matches
    #[error("unknown opcode at offset {offset:#x}")]
    UnknownOpcode { offset: usize },
    /// Ran out of bytes inside ModRM/SIB/displacement/immediate
    #[error("truncated operand at offset {offset:#x}: needed {needed} byte(s), {available} available")]
    TruncatedOperand {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

/// Fieldless classification of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecodeErrorKind {
    Underrun,
    ExcessivePrefixes,
    UnknownOpcode,
    TruncatedOperand,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeErrorKind::Underrun => write!(f, "Underrun"),
            DecodeErrorKind::ExcessivePrefixes => write!(f, "ExcessivePrefixes"),
            DecodeErrorKind::UnknownOpcode => write!(f, "UnknownOpcode"),
            DecodeErrorKind::TruncatedOperand => write!(f, "TruncatedOperand"),
        }
    }
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::Underrun { .. } => DecodeErrorKind::Underrun,
            DecodeError::ExcessivePrefixes { .. } => DecodeErrorKind::ExcessivePrefixes,
            DecodeError::UnknownOpcode { .. } => DecodeErrorKind::UnknownOpcode,
            DecodeError::TruncatedOperand { .. } => DecodeErrorKind::TruncatedOperand,
        }
    }

    /// Instruction start offset the failure refers to.
    pub fn offset(&self) -> usize {
        match *self {
            DecodeError::Underrun { offset, .. }
            | DecodeError::ExcessivePrefixes { offset, .. }
            | DecodeError::UnknownOpcode { offset }
            | DecodeError::TruncatedOperand { offset, .. } => offset,
        }
    }

    /// Same error re-anchored at `start`.
    pub fn at(self, start: usize) -> Self {
        match self {
            DecodeError::Underrun {
                needed, available, ..
            } => DecodeError::Underrun {
                offset: start,
                needed,
                available,
            },
            DecodeError::ExcessivePrefixes { count, .. } => {
                DecodeError::ExcessivePrefixes {
                    offset: start,
                    count,
                }
            }
            DecodeError::UnknownOpcode { .. } => DecodeError::UnknownOpcode { offset: start },
            DecodeError::TruncatedOperand {
                needed, available, ..
            } => DecodeError::TruncatedOperand {
                offset: start,
                needed,
                available,
            },
        }
    }

    /// Reclassify an underrun as a truncated operand.
    pub(crate) fn into_truncated(self) -> Self {
        match self {
            DecodeError::Underrun {
                offset,
                needed,
                available,
            } => DecodeError::TruncatedOperand {
                offset,
                needed,
                available,
            },
            other => other,
        }
    }
}

/// Result type for single-instruction decoding
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Instruction-set families supported by the decoders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// x86 family (16, 32 and 64-bit modes)
    X86,
    /// MIPS32 / MIPS64
    Mips,
}

impl Architecture {
    /// Check that a mode set is meaningful for this architecture.
    pub fn validate_mode(self, mode: Mode) -> crate::error::Result<()> {
        let unsupported = || ScathaError::UnsupportedMode { arch: self, mode };
        match self {
            Architecture::X86 => {
                let widths = (mode & Mode::WIDTHS).bits().count_ones();
                let extra = mode - Mode::WIDTHS;
                if widths != 1 || !extra.is_empty() {
                    return Err(unsupported());
                }
            }
            Architecture::Mips => {
                if mode.contains(Mode::MICRO) || mode.contains(Mode::MODE_16) {
                    return Err(unsupported());
                }
                let widths = (mode & (Mode::MIPS32 | Mode::MIPS64)).bits().count_ones();
                if widths != 1 {
                    return Err(unsupported());
                }
            }
        }
        Ok(())
    }

    /// Smallest encoded instruction in bytes.
    pub fn min_instruction_length(self) -> usize {
        match self {
            Architecture::X86 => 1,
            Architecture::Mips => 4,
        }
    }

    /// Largest encoded instruction in bytes.
    pub fn max_instruction_length(self) -> usize {
        match self {
            Architecture::X86 => 15,
            Architecture::Mips => 4,
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Architecture::X86 => write!(f, "x86"),
            Architecture::Mips => write!(f, "mips"),
        }
    }
}

impl FromStr for Architecture {
    type Err = ScathaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x86" | "x86_64" | "x64" | "amd64" | "i386" => Ok(Architecture::X86),
            "mips" | "mips32" | "mips64" | "mipsel" => Ok(Architecture::Mips),
            _ => Err(ScathaError::UnsupportedArchitecture(s.to_string())),
        }
    }
}

bitflags! {
    /// Decode mode flags. Bit values follow the widely used engine constants
    /// so configurations can be shared with other tooling.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Mode: u32 {
        const LITTLE_ENDIAN = 0;
        const MODE_16 = 1 << 1;
        const MODE_32 = 1 << 2;
        const MODE_64 = 1 << 3;
        const MICRO = 1 << 4;
        const MIPS3 = 1 << 5;
        const MIPS32R6 = 1 << 6;
        const BIG_ENDIAN = 1 << 31;
        const MIPS32 = Self::MODE_32.bits();
        const MIPS64 = Self::MODE_64.bits();
    }
}

impl Mode {
    const WIDTHS: Mode = Mode::MODE_16.union(Mode::MODE_32).union(Mode::MODE_64);

    /// Native register / address width in bits.
    pub fn bits_width(self) -> u16 {
        if self.contains(Mode::MODE_64) {
            64
        } else if self.contains(Mode::MODE_16) {
            16
        } else {
            32
        }
    }

    pub fn is_big_endian(self) -> bool {
        self.contains(Mode::BIG_ENDIAN)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::MODE_64
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Core disassembler trait that provides a common interface for instruction decoding
pub trait Disassembler {
    /// Disassemble a single instruction from the start of `bytes`.
    ///
    /// `address` is only used for display and relative-target computation.
    fn disassemble_instruction(&self, address: u64, bytes: &[u8]) -> DecodeResult<Instruction>;

    /// Get the maximum instruction length for this architecture in bytes
    fn max_instruction_length(&self) -> usize {
        self.architecture().max_instruction_length()
    }

    /// Get the minimum instruction length for this architecture in bytes
    fn min_instruction_length(&self) -> usize {
        self.architecture().min_instruction_length()
    }

    /// Get the architecture this disassembler supports
    fn architecture(&self) -> Architecture;

    /// Get the mode set this disassembler decodes with
    fn mode(&self) -> Mode;

    /// Get a human-readable name for this disassembler
    fn name(&self) -> &str {
        "scatha"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::Underrun {
            offset: 0x10,
            needed: 1,
            available: 0,
        };
        assert_eq!(
            err.to_string(),
            "underrun at offset 0x10: needed 1 byte(s), 0 available"
        );
        assert_eq!(
            DecodeError::UnknownOpcode { offset: 3 }.to_string(),
            "unknown opcode at offset 0x3"
        );
    }

    #[test]
    fn test_decode_error_kind_and_anchor() {
        let err = DecodeError::TruncatedOperand {
            offset: 7,
            needed: 4,
            available: 2,
        };
        assert_eq!(err.kind(), DecodeErrorKind::TruncatedOperand);
        let moved = err.at(2);
        assert_eq!(moved.offset(), 2);
        assert_eq!(moved.kind(), DecodeErrorKind::TruncatedOperand);

        let under = DecodeError::Underrun {
            offset: 0,
            needed: 1,
            available: 0,
        };
        assert_eq!(under.into_truncated().kind(), DecodeErrorKind::TruncatedOperand);
        assert_eq!(
            DecodeError::UnknownOpcode { offset: 0 }.into_truncated().kind(),
            DecodeErrorKind::UnknownOpcode
        );
    }

    #[test]
    fn test_architecture_parse_and_display() {
        assert_eq!("x86".parse::<Architecture>().unwrap(), Architecture::X86);
        assert_eq!("MIPS".parse::<Architecture>().unwrap(), Architecture::Mips);
        assert!("arm".parse::<Architecture>().is_err());
        assert_eq!(Architecture::Mips.to_string(), "mips");
    }

    #[test]
    fn test_mode_validation() {
        assert!(Architecture::X86.validate_mode(Mode::MODE_64).is_ok());
        assert!(Architecture::X86.validate_mode(Mode::MODE_16).is_ok());
        assert!(Architecture::X86
            .validate_mode(Mode::MODE_32 | Mode::MODE_64)
            .is_err());
        assert!(Architecture::X86
            .validate_mode(Mode::MODE_32 | Mode::BIG_ENDIAN)
            .is_err());
        assert!(Architecture::Mips
            .validate_mode(Mode::MIPS32 | Mode::BIG_ENDIAN)
            .is_ok());
        assert!(Architecture::Mips
            .validate_mode(Mode::MIPS64 | Mode::MIPS32R6)
            .is_ok());
        assert!(Architecture::Mips
            .validate_mode(Mode::MIPS32 | Mode::MICRO)
            .is_err());
        assert!(Architecture::Mips.validate_mode(Mode::LITTLE_ENDIAN).is_err());
    }

    #[test]
    fn test_mode_bits_match_engine_constants() {
        assert_eq!(Mode::MODE_16.bits(), 2);
        assert_eq!(Mode::MODE_32.bits(), 4);
        assert_eq!(Mode::MODE_64.bits(), 8);
        assert_eq!(Mode::MIPS32R6.bits(), 64);
        assert_eq!(Mode::BIG_ENDIAN.bits(), 0x8000_0000);
        assert_eq!(Mode::MIPS32, Mode::MODE_32);
        assert_eq!((Mode::MODE_32 | Mode::BIG_ENDIAN).bits_width(), 32);
        assert!((Mode::MIPS64 | Mode::BIG_ENDIAN).is_big_endian());
    }
}
