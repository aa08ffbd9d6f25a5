//! The public decoding engine.
//!
//! An [`Engine`] binds one architecture/mode decoder to a set of
//! [`DecodeOptions`] and offers single-instruction decoding plus the batch
//! loops built on it: collect-all with a failure policy, a lazy iterator,
//! and parallel decoding of independent buffers.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::core::disassembler::{Architecture, DecodeError, DecodeResult, Disassembler, Mode};
use crate::core::instruction::Instruction;
use crate::disasm::config::{DecodeOptions, DisassemblerConfig, ErrorPolicy};
use crate::disasm::cursor::Cursor;
use crate::disasm::registry::{self, Backend};
use crate::error::{Result, ScathaError};

/// One entry of a batch result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Instruction(Instruction),
    /// A byte stepped over under [`ErrorPolicy::SkipByte`].
    Skipped { offset: usize, address: u64, byte: u8 },
}

impl Item {
    /// Bytes of input this item covers.
    pub fn len(&self) -> usize {
        match self {
            Item::Instruction(insn) => insn.len(),
            Item::Skipped { .. } => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn address(&self) -> u64 {
        match self {
            Item::Instruction(insn) => insn.address,
            Item::Skipped { address, .. } => *address,
        }
    }

    pub fn as_instruction(&self) -> Option<&Instruction> {
        match self {
            Item::Instruction(insn) => Some(insn),
            Item::Skipped { .. } => None,
        }
    }
}

/// Result of [`Engine::disasm_all`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disassembly {
    pub items: Vec<Item>,
    /// Failure that ended a [`ErrorPolicy::Stop`] batch.
    pub error: Option<DecodeError>,
    /// Bytes covered by `items`.
    pub consumed: usize,
    /// Display text used for skipped bytes.
    pub data_mnemonic: String,
}

impl Disassembly {
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.items.iter().filter_map(Item::as_instruction)
    }

    pub fn instruction_count(&self) -> usize {
        self.instructions().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.items.len() - self.instruction_count()
    }

    /// Listing lines in `address: bytes  text` form.
    pub fn lines(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| match item {
                Item::Instruction(insn) => insn.disassembly(),
                Item::Skipped { address, byte, .. } => format!(
                    "{:08x}: {:<24}{} {:#04x}",
                    address,
                    hex::encode([*byte]),
                    self.data_mnemonic,
                    byte
                ),
            })
            .collect()
    }
}

impl fmt::Display for Disassembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        if let Some(err) = &self.error {
            writeln!(f, "; {err}")?;
        }
        Ok(())
    }
}

/// Decoder for one architecture/mode with its options.
#[derive(Debug, Clone)]
pub struct Engine {
    backend: Backend,
    options: DecodeOptions,
}

impl Engine {
    /// Engine with default options. Fails with `UnsupportedMode` for an
    /// invalid architecture/mode pair.
    pub fn new(arch: Architecture, mode: Mode) -> Result<Self> {
        Self::from_config(&DisassemblerConfig::new(arch, mode))
    }

    pub fn from_config(config: &DisassemblerConfig) -> Result<Self> {
        let backend = registry::for_arch(config.architecture, config.mode)?;
        if config.options.skip_data_mnemonic.trim().is_empty() {
            return Err(ScathaError::InvalidInput(
                "skip_data_mnemonic must not be empty".to_string(),
            ));
        }
        debug!(
            arch = %config.architecture,
            mode = %config.mode,
            detail = config.options.detail,
            policy = ?config.options.on_error,
            "engine created"
        );
        Ok(Self {
            backend,
            options: config.options.clone(),
        })
    }

    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn architecture(&self) -> Architecture {
        self.backend.architecture()
    }

    pub fn mode(&self) -> Mode {
        self.backend.mode()
    }

    /// Decode the instruction at `offset`, returning it with the offset of
    /// the next instruction.
    ///
    /// `address` is the address of `bytes[offset]`.
    pub fn decode_one(
        &self,
        bytes: &[u8],
        offset: usize,
        address: u64,
    ) -> DecodeResult<(Instruction, usize)> {
        if offset > bytes.len() {
            return Err(DecodeError::Underrun {
                offset,
                needed: self.backend.min_instruction_length(),
                available: 0,
            });
        }
        let mut cur = Cursor::at(bytes, offset);
        let insn = self.decode_at(&mut cur, address)?;
        Ok((insn, cur.position()))
    }

    /// Decode at the cursor. On failure the cursor stays at the
    /// instruction start.
    pub fn decode_at(&self, cur: &mut Cursor<'_>, address: u64) -> DecodeResult<Instruction> {
        self.backend.decode(cur, address, self.options.detail)
    }

    /// Decode the whole buffer under the configured failure policy.
    ///
    /// `address` is the address of `bytes[0]`.
    pub fn disasm_all(&self, bytes: &[u8], address: u64) -> Disassembly {
        let span = crate::span_trace!(
            "disasm",
            arch = %self.architecture(),
            mode = %self.mode(),
            len = bytes.len()
        );
        let _guard = span.enter();

        let limit = self.options.instruction_limit();
        let mut cur = Cursor::new(bytes);
        let mut items = Vec::new();
        let mut error = None;
        while !cur.is_empty() && items.len() < limit {
            let offset = cur.position();
            let here = address.wrapping_add(offset as u64);
            match self.decode_at(&mut cur, here) {
                Ok(insn) => items.push(Item::Instruction(insn)),
                Err(err) => match self.options.on_error {
                    ErrorPolicy::Stop => {
                        error = Some(err);
                        break;
                    }
                    ErrorPolicy::SkipByte => {
                        items.push(Item::Skipped {
                            offset,
                            address: here,
                            byte: bytes[offset],
                        });
                        cur = Cursor::at(bytes, offset + 1);
                    }
                },
            }
        }

        let out = Disassembly {
            items,
            error,
            consumed: cur.position(),
            data_mnemonic: self.options.skip_data_mnemonic.clone(),
        };
        debug!(
            instructions = out.instruction_count(),
            skipped = out.skipped_count(),
            consumed = out.consumed,
            failed = out.error.is_some(),
            "batch complete"
        );
        out
    }

    /// Lazily decode from the start of `bytes`, ending after the first
    /// failure.
    pub fn iter<'e, 'a>(&'e self, bytes: &'a [u8], address: u64) -> Iter<'e, 'a> {
        Iter {
            engine: self,
            cur: Cursor::new(bytes),
            address,
            done: false,
        }
    }

    /// Decode independent buffers concurrently; results keep input order.
    pub fn disasm_many_parallel(&self, inputs: &[(&[u8], u64)]) -> Vec<Disassembly> {
        let out: Vec<Disassembly> = inputs
            .par_iter()
            .map(|(bytes, address)| self.disasm_all(bytes, *address))
            .collect();
        debug!(buffers = out.len(), "parallel batch complete");
        out
    }
}

impl Disassembler for Engine {
    fn disassemble_instruction(&self, address: u64, bytes: &[u8]) -> DecodeResult<Instruction> {
        self.decode_at(&mut Cursor::new(bytes), address)
    }

    fn max_instruction_length(&self) -> usize {
        self.backend.max_instruction_length()
    }

    fn min_instruction_length(&self) -> usize {
        self.backend.min_instruction_length()
    }

    fn architecture(&self) -> Architecture {
        self.backend.architecture()
    }

    fn mode(&self) -> Mode {
        self.backend.mode()
    }
}

/// Iterator returned by [`Engine::iter`].
pub struct Iter<'e, 'a> {
    engine: &'e Engine,
    cur: Cursor<'a>,
    address: u64,
    done: bool,
}

impl Iter<'_, '_> {
    /// Offset of the next instruction.
    pub fn position(&self) -> usize {
        self.cur.position()
    }
}

impl Iterator for Iter<'_, '_> {
    type Item = DecodeResult<Instruction>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.cur.is_empty() {
            return None;
        }
        let here = self.address.wrapping_add(self.cur.position() as u64);
        let result = self.engine.decode_at(&mut self.cur, here);
        self.done = result.is_err();
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::disassembler::DecodeErrorKind;

    fn x64() -> Engine {
        Engine::new(Architecture::X86, Mode::MODE_64).unwrap()
    }

    #[test]
    fn test_decode_one_returns_next_offset() {
        let engine = x64();
        let (insn, next) = engine.decode_one(&[0x90], 0, 0x1000).unwrap();
        assert_eq!(insn.mnemonic.name(), "nop");
        assert_eq!(next, 1);
        assert_eq!(insn.end_address(), 0x1001);

        let bytes = [0x90, 0x48, 0x89, 0xd8];
        let (insn, next) = engine.decode_one(&bytes, 1, 0x1001).unwrap();
        assert_eq!(insn.to_string(), "mov rax, rbx");
        assert_eq!(next, 4);
    }

    #[test]
    fn test_decode_one_out_of_range() {
        let err = x64().decode_one(&[0x90], 5, 0).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::Underrun);
        assert_eq!(err.offset(), 5);
        let err = x64().decode_one(&[], 0, 0).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::Underrun);
    }

    #[test]
    fn test_stop_policy() {
        // nop; ud slot 0f 04; nop
        let bytes = [0x90, 0x0f, 0x04, 0x90];
        let out = x64().disasm_all(&bytes, 0x1000);
        assert_eq!(out.instruction_count(), 1);
        assert_eq!(out.consumed, 1);
        let err = out.error.unwrap();
        assert_eq!(err.kind(), DecodeErrorKind::UnknownOpcode);
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn test_skip_byte_policy() {
        let bytes = [0x90, 0x0f, 0x04, 0x90];
        let engine = x64().with_options(DecodeOptions {
            on_error: ErrorPolicy::SkipByte,
            ..Default::default()
        });
        let out = engine.disasm_all(&bytes, 0x1000);
        assert!(out.error.is_none());
        assert_eq!(out.consumed, bytes.len());
        let total: usize = out.items.iter().map(Item::len).sum();
        assert_eq!(total, bytes.len());
        // 0f 04 is unknown; 04 90 then decodes as add al, 0x90
        assert_eq!(
            out.items[1],
            Item::Skipped {
                offset: 1,
                address: 0x1001,
                byte: 0x0f
            }
        );
        let text: Vec<String> = out.instructions().map(|i| i.to_string()).collect();
        assert_eq!(text, ["nop", "add al, 0x90"]);
        assert!(out.lines()[1].ends_with(".byte 0x0f"));
    }

    #[test]
    fn test_instruction_limit() {
        let engine = x64().with_options(DecodeOptions {
            max_instructions: 2,
            ..Default::default()
        });
        let out = engine.disasm_all(&[0x90; 8], 0);
        assert_eq!(out.items.len(), 2);
        assert_eq!(out.consumed, 2);
        assert!(out.error.is_none());
    }

    #[test]
    fn test_iter_stops_at_first_error() {
        let engine = x64();
        let bytes = [0x90, 0xc3, 0xb8, 0x01];
        let results: Vec<_> = engine.iter(&bytes, 0).collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok() && results[1].is_ok());
        assert_eq!(
            results[2].as_ref().unwrap_err().kind(),
            DecodeErrorKind::TruncatedOperand
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let engine = Engine::new(Architecture::Mips, Mode::MIPS32 | Mode::BIG_ENDIAN).unwrap();
        let a = [0x27, 0xbd, 0xff, 0xe0, 0x03, 0xe0, 0x00, 0x08];
        let b = [0x00, 0x00, 0x00, 0x00];
        let inputs: Vec<(&[u8], u64)> = vec![(&a[..], 0x400000), (&b[..], 0x500000)];
        let parallel = engine.disasm_many_parallel(&inputs);
        assert_eq!(parallel.len(), 2);
        assert_eq!(parallel[0], engine.disasm_all(&a, 0x400000));
        assert_eq!(parallel[1], engine.disasm_all(&b, 0x500000));
    }

    #[test]
    fn test_disassembler_trait() {
        let engine = Engine::new(Architecture::X86, Mode::MODE_32).unwrap();
        let d: &dyn Disassembler = &engine;
        assert_eq!(d.name(), "scatha");
        assert_eq!(d.max_instruction_length(), 15);
        let insn = d.disassemble_instruction(0, &[0x55]).unwrap();
        assert_eq!(insn.to_string(), "push ebp");
    }

    #[test]
    fn test_rejects_micro_mips() {
        assert!(Engine::new(Architecture::Mips, Mode::MIPS32 | Mode::MICRO).is_err());
    }
}
