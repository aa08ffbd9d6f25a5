//! Decoder selection by architecture.

use crate::core::disassembler::{Architecture, DecodeResult, Mode};
use crate::core::instruction::Instruction;
use crate::disasm::cursor::Cursor;
use crate::disasm::decoder::{decode_one, ArchDecoder};
use crate::disasm::mips::MipsDecoder;
use crate::disasm::x86::X86Decoder;
use crate::error::Result;

/// One concrete decoder per supported architecture.
#[derive(Debug, Clone, Copy)]
pub enum Backend {
    X86(X86Decoder),
    Mips(MipsDecoder),
}

impl Backend {
    pub fn architecture(&self) -> Architecture {
        match self {
            Backend::X86(d) => d.architecture(),
            Backend::Mips(d) => d.architecture(),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Backend::X86(d) => d.mode(),
            Backend::Mips(d) => d.mode(),
        }
    }

    pub fn min_instruction_length(&self) -> usize {
        match self {
            Backend::X86(d) => d.min_instruction_length(),
            Backend::Mips(d) => d.min_instruction_length(),
        }
    }

    pub fn max_instruction_length(&self) -> usize {
        match self {
            Backend::X86(d) => d.max_instruction_length(),
            Backend::Mips(d) => d.max_instruction_length(),
        }
    }

    /// Decode one instruction at the cursor; see [`decode_one`].
    pub fn decode(
        &self,
        cur: &mut Cursor<'_>,
        address: u64,
        detail: bool,
    ) -> DecodeResult<Instruction> {
        match self {
            Backend::X86(d) => decode_one(d, cur, address, detail),
            Backend::Mips(d) => decode_one(d, cur, address, detail),
        }
    }
}

/// Select the decoder for an architecture, validating the mode set.
pub fn for_arch(arch: Architecture, mode: Mode) -> Result<Backend> {
    Ok(match arch {
        Architecture::X86 => Backend::X86(X86Decoder::new(mode)?),
        Architecture::Mips => Backend::Mips(MipsDecoder::new(mode)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScathaError;

    #[test]
    fn test_for_arch() {
        let backend = for_arch(Architecture::X86, Mode::MODE_32).unwrap();
        assert_eq!(backend.architecture(), Architecture::X86);
        assert_eq!(backend.max_instruction_length(), 15);

        let backend = for_arch(Architecture::Mips, Mode::MIPS64 | Mode::BIG_ENDIAN).unwrap();
        assert_eq!(backend.mode(), Mode::MIPS64 | Mode::BIG_ENDIAN);
        assert_eq!(backend.min_instruction_length(), 4);
    }

    #[test]
    fn test_rejects_bad_modes() {
        let err = for_arch(Architecture::Mips, Mode::MIPS32 | Mode::MICRO).unwrap_err();
        assert!(matches!(err, ScathaError::UnsupportedMode { .. }));
        assert!(for_arch(Architecture::X86, Mode::MIPS32R6).is_err());
    }

    #[test]
    fn test_dispatch() {
        let backend = for_arch(Architecture::X86, Mode::MODE_64).unwrap();
        let bytes = [0x90, 0xc3];
        let mut cur = Cursor::new(&bytes);
        assert_eq!(backend.decode(&mut cur, 0, false).unwrap().mnemonic.name(), "nop");
        assert_eq!(backend.decode(&mut cur, 1, false).unwrap().mnemonic.name(), "ret");
        assert!(cur.is_empty());
    }
}
