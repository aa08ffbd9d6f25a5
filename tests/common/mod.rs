//! Common test utilities and helpers.
//!
//! Engine constructors for the modes the integration tests exercise, plus
//! small byte-building helpers.

#![allow(dead_code)]

use scatha::{Architecture, DecodeOptions, Engine, ErrorPolicy, Mode};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn x86_64() -> Engine {
    Engine::new(Architecture::X86, Mode::MODE_64).unwrap()
}

pub fn x86_32() -> Engine {
    Engine::new(Architecture::X86, Mode::MODE_32).unwrap()
}

pub fn x86_16() -> Engine {
    Engine::new(Architecture::X86, Mode::MODE_16).unwrap()
}

pub fn mips32_be() -> Engine {
    Engine::new(Architecture::Mips, Mode::MIPS32 | Mode::BIG_ENDIAN).unwrap()
}

pub fn mips32_le() -> Engine {
    Engine::new(Architecture::Mips, Mode::MIPS32).unwrap()
}

pub fn mips64_be() -> Engine {
    Engine::new(Architecture::Mips, Mode::MIPS64 | Mode::BIG_ENDIAN).unwrap()
}

pub fn mips32_r6() -> Engine {
    Engine::new(
        Architecture::Mips,
        Mode::MIPS32 | Mode::MIPS32R6 | Mode::BIG_ENDIAN,
    )
    .unwrap()
}

/// Same engine with the skip-one-byte recovery policy.
pub fn skipping(engine: Engine) -> Engine {
    let options = DecodeOptions {
        on_error: ErrorPolicy::SkipByte,
        ..engine.options().clone()
    };
    engine.with_options(options)
}

/// Bytes from a hex string; spaces are ignored.
pub fn hex_bytes(text: &str) -> Vec<u8> {
    hex::decode(text.replace(' ', "")).unwrap()
}

/// Serialize instruction words in the requested byte order.
pub fn mips_bytes(words: &[u32], big_endian: bool) -> Vec<u8> {
    words
        .iter()
        .flat_map(|w| {
            if big_endian {
                w.to_be_bytes()
            } else {
                w.to_le_bytes()
            }
        })
        .collect()
}

/// `mnemonic op_str` of every instruction in a fully decodable buffer.
pub fn listing(engine: &Engine, bytes: &[u8], address: u64) -> Vec<String> {
    let out = engine.disasm_all(bytes, address);
    assert!(out.error.is_none(), "unexpected failure: {:?}", out.error);
    out.instructions().map(|insn| insn.to_string()).collect()
}

/// Creates a temporary file with the given content.
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file
}
