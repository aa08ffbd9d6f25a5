//! Engine configuration.
//!
//! Architecture/mode selection plus the caller-level decode policy. Loaded
//! from JSON; every field of [`DecodeOptions`] has a default so partial
//! documents are accepted.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::disassembler::{Architecture, Mode};
use crate::error::Result;

/// What a batch loop does when an instruction fails to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Return what was decoded so far together with the failure.
    #[default]
    Stop,
    /// Record the byte at the failing offset and resume one byte later.
    SkipByte,
}

/// Per-engine decode options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Compute groups, implicit registers and architecture detail (default: true).
    pub detail: bool,
    /// Batch failure policy (default: stop).
    pub on_error: ErrorPolicy,
    /// Upper bound on decoded instructions per batch, 0 for none (default: 0).
    pub max_instructions: usize,
    /// Display text for bytes skipped under [`ErrorPolicy::SkipByte`] (default: ".byte").
    pub skip_data_mnemonic: String,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            detail: true,
            on_error: ErrorPolicy::Stop,
            max_instructions: 0,
            skip_data_mnemonic: ".byte".to_string(),
        }
    }
}

impl DecodeOptions {
    /// Batch cap with 0 mapped to unbounded.
    pub fn instruction_limit(&self) -> usize {
        if self.max_instructions == 0 {
            usize::MAX
        } else {
            self.max_instructions
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisassemblerConfig {
    pub architecture: Architecture,
    pub mode: Mode,
    #[serde(default)]
    pub options: DecodeOptions,
}

impl Default for DisassemblerConfig {
    fn default() -> Self {
        Self {
            architecture: Architecture::X86,
            mode: Mode::MODE_64,
            options: DecodeOptions::default(),
        }
    }
}

impl DisassemblerConfig {
    pub fn new(architecture: Architecture, mode: Mode) -> Self {
        Self {
            architecture,
            mode,
            options: DecodeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse a JSON document.
    ///
    /// The architecture/mode pair is not checked here; `Engine::from_config`
    /// rejects unsupported combinations.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScathaError;

    #[test]
    fn test_defaults() {
        let config = DisassemblerConfig::default();
        assert_eq!(config.architecture, Architecture::X86);
        assert_eq!(config.mode, Mode::MODE_64);
        assert!(config.options.detail);
        assert_eq!(config.options.on_error, ErrorPolicy::Stop);
        assert_eq!(config.options.skip_data_mnemonic, ".byte");
        assert_eq!(config.options.instruction_limit(), usize::MAX);
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "architecture": "mips",
            "mode": "MIPS32 | BIG_ENDIAN",
            "options": { "on_error": "skip_byte", "max_instructions": 8 }
        }"#;
        let config = DisassemblerConfig::from_json_str(json).unwrap();
        assert_eq!(config.architecture, Architecture::Mips);
        assert_eq!(config.mode, Mode::MIPS32 | Mode::BIG_ENDIAN);
        assert_eq!(config.options.on_error, ErrorPolicy::SkipByte);
        assert_eq!(config.options.instruction_limit(), 8);
        assert!(config.options.detail);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = DisassemblerConfig::new(Architecture::X86, Mode::MODE_32).with_options(
            DecodeOptions {
                detail: false,
                ..Default::default()
            },
        );
        let json = config.to_json().unwrap();
        assert_eq!(DisassemblerConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json() {
        let err = DisassemblerConfig::from_json_str("{\"architecture\": \"arm\"}").unwrap_err();
        assert!(matches!(err, ScathaError::Config(_)));
    }
}
