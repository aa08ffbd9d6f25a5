//! Cross-check against reference decoders: iced-x86 for x86 lengths and
//! mnemonics, capstone for MIPS mnemonics.

mod common;

use capstone::{Arch, Capstone, Endian, NO_EXTRA_MODE};
use common::*;
use scatha::Engine;

// Encodings covering legacy, escape, SSE, VEX and EVEX forms.
const X86_64_CORPUS: &[&str] = &[
    "4831c0",
    "55",
    "4889e5",
    "4883ec20",
    "488b448b10",
    "488d05f9ffffff",
    "e800000000",
    "c3",
    "90",
    "0f05",
    "7502",
    "0f8500010000",
    "64488b042528000000",
    "4c8b4c2408",
    "66890c24",
    "c6040801",
    "f00fb10a",
    "0f28c1",
    "660fefc0",
    "f20f58c1",
    "c5f877",
    "c5fdefc0",
    "c4e27d18c0",
    "62f17548efc2",
    "62f174c958c2",
    "d9e8",
    "dd45f8",
    "f348a5",
    "0fa2",
    "480fafc1",
];

fn iced_decode(bitness: u32, bytes: &[u8]) -> iced_x86::Instruction {
    use iced_x86::{Decoder, DecoderOptions};
    let mut decoder = Decoder::new(bitness, bytes, DecoderOptions::NONE);
    let instr = decoder.decode();
    assert!(!instr.is_invalid(), "iced rejects {}", hex::encode(bytes));
    instr
}

#[test]
fn x86_lengths_match_iced() {
    let engine = x86_64();
    for text in X86_64_CORPUS {
        let bytes = hex_bytes(text);
        let reference = iced_decode(64, &bytes);
        let (insn, next) = engine
            .decode_one(&bytes, 0, 0)
            .unwrap_or_else(|e| panic!("{text}: {e}"));
        assert_eq!(next, reference.len(), "length of {text}");
        assert_eq!(insn.len(), bytes.len(), "{text} has trailing bytes");
    }
}

#[test]
fn x86_mnemonics_match_iced() {
    let engine = x86_64();
    for text in X86_64_CORPUS {
        let bytes = hex_bytes(text);
        let reference = format!("{:?}", iced_decode(64, &bytes).mnemonic()).to_lowercase();
        let (insn, _) = engine.decode_one(&bytes, 0, 0).unwrap();
        assert_eq!(insn.mnemonic.name(), reference, "mnemonic of {text}");
    }
}

#[test]
fn x86_32bit_stream_lengths_match_iced() {
    let stream = hex_bytes("5589e583ec08c745fc00000000b8010000008b4dfc01c8c9c3");
    let out = x86_32().disasm_all(&stream, 0);
    assert!(out.error.is_none());
    let mut offset = 0;
    for insn in out.instructions() {
        let reference = iced_decode(32, &stream[offset..]);
        assert_eq!(insn.len(), reference.len(), "at offset {offset}");
        offset += insn.len();
    }
    assert_eq!(offset, stream.len());
}

const MIPS32_CORPUS: &[u32] = &[
    0x27bd_ffe0, // addiu
    0xafbf_001c, // sw
    0x8fbf_001c, // lw
    0x3c1c_0042, // lui
    0x3442_1234, // ori
    0x0085_1021, // addu
    0x0085_102a, // slt
    0x0085_1026, // xor
    0x0002_1080, // sll
    0x1085_0003, // beq
    0x1485_0003, // bne
    0x0c10_0000, // jal
    0x3042_ffff, // andi
    0x0085_0018, // mult
    0x0000_1010, // mfhi
    0x460e_6000, // add.s
    0x4680_1021, // cvt.d.w
    0xc480_0008, // lwc1
];

const MIPS32R6_CORPUS: &[u32] = &[
    0x27bd_ffe0, // addiu
    0xafbf_001c, // sw
    0x8fbf_001c, // lw
    0x0085_1098, // mul
    0x6085_0004, // bnec
    0x5c85_0004, // bltc
    0x5885_0004, // bgec
    0x20a4_0004, // bovc
    0x2085_0004, // beqc
    0x2005_0004, // beqzalc
    0x1885_0004, // bgeuc
    0x1c85_0004, // bltuc
    0xc800_0001, // bc
];

fn compare_mips(mode: capstone::Mode, engine: &Engine, corpus: &[u32]) {
    let cs = Capstone::new_raw(Arch::MIPS, mode, NO_EXTRA_MODE, Some(Endian::Big)).unwrap();
    let bytes = mips_bytes(corpus, true);
    let reference = cs.disasm_all(&bytes, 0x1000).unwrap();
    let ours = engine.disasm_all(&bytes, 0x1000);
    assert!(ours.error.is_none());
    assert_eq!(reference.len(), ours.instruction_count());
    for (theirs, mine) in reference.iter().zip(ours.instructions()) {
        assert_eq!(
            mine.mnemonic.name(),
            theirs.mnemonic().unwrap_or(""),
            "at {:#x}",
            mine.address
        );
        assert_eq!(mine.address, theirs.address());
        assert_eq!(mine.bytes, theirs.bytes());
    }
}

#[test]
fn mips_mnemonics_match_capstone() {
    compare_mips(capstone::Mode::Mips32, &mips32_be(), MIPS32_CORPUS);
}

#[test]
fn mips_release6_mnemonics_match_capstone() {
    compare_mips(capstone::Mode::Mips32R6, &mips32_r6(), MIPS32R6_CORPUS);
}
