#![no_main]
use libfuzzer_sys::fuzz_target;

use scatha::{Architecture, DecodeOptions, Engine, ErrorPolicy, Mode};

// The first byte picks the engine, the rest is decoded.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, code)) = data.split_first() else {
        return;
    };
    let (arch, mode) = match selector % 5 {
        0 => (Architecture::X86, Mode::MODE_16),
        1 => (Architecture::X86, Mode::MODE_32),
        2 => (Architecture::X86, Mode::MODE_64),
        3 => (Architecture::Mips, Mode::MIPS32 | Mode::BIG_ENDIAN),
        _ => (Architecture::Mips, Mode::MIPS64 | Mode::MIPS32R6),
    };
    let Ok(engine) = Engine::new(arch, mode) else {
        return;
    };
    let engine = engine.with_options(DecodeOptions {
        on_error: ErrorPolicy::SkipByte,
        ..Default::default()
    });

    let out = engine.disasm_all(code, 0x1000);
    let total: usize = out.items.iter().map(|item| item.len()).sum();
    assert_eq!(total, code.len());
    for insn in out.instructions() {
        assert!(!insn.is_empty());
        let _ = insn.to_string();
    }
});
