//! Error types for the scatha disassembler crate.
//!
//! Per-instruction decode failures are [`DecodeError`] values; everything
//! around them (engine construction, configuration loading) reports a
//! [`ScathaError`].

use thiserror::Error;

use crate::core::disassembler::{Architecture, DecodeError, Mode};

/// Main error type for scatha operations.
#[derive(Debug, Error)]
pub enum ScathaError {
    /// Architecture name not recognised
    #[error("Unsupported architecture: {0}")]
    UnsupportedArchitecture(String),

    /// Mode set not valid for the architecture
    #[error("Unsupported mode for {arch}: {mode:?}")]
    UnsupportedMode { arch: Architecture, mode: Mode },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration (de)serialization errors
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Single-instruction decode failure
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Result type alias for scatha operations
pub type Result<T> = std::result::Result<T, ScathaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScathaError::UnsupportedArchitecture("arm".to_string());
        assert_eq!(err.to_string(), "Unsupported architecture: arm");
    }

    #[test]
    fn test_decode_error_conversion() {
        let err: ScathaError = DecodeError::UnknownOpcode { offset: 0x20 }.into();
        assert!(matches!(err, ScathaError::Decode(_)));
        assert_eq!(err.to_string(), "Decode error: unknown opcode at offset 0x20");
    }

    #[test]
    fn test_unsupported_mode_mentions_arch() {
        let err = ScathaError::UnsupportedMode {
            arch: Architecture::Mips,
            mode: Mode::MICRO,
        };
        assert!(err.to_string().starts_with("Unsupported mode for mips"));
    }
}
