//! Property tests over arbitrary input bytes and generated MIPS words.

mod common;

use common::*;
use proptest::prelude::*;
use scatha::core::mips::MipsReg;
use scatha::{DecodeErrorKind, Disassembler, Engine, Item};

fn engines() -> Vec<Engine> {
    vec![x86_64(), x86_32(), x86_16(), mips32_be(), mips32_le(), mips64_be(), mips32_r6()]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn decoding_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        for engine in engines() {
            let a = engine.disasm_all(&bytes, 0x1000);
            let b = engine.disasm_all(&bytes, 0x1000);
            prop_assert_eq!(a.items, b.items);
            prop_assert_eq!(a.error, b.error);
        }
    }

    #[test]
    fn failures_leave_position_unchanged(bytes in prop::collection::vec(any::<u8>(), 0..24)) {
        for engine in engines() {
            match engine.decode_one(&bytes, 0, 0) {
                Ok((insn, next)) => {
                    prop_assert_eq!(next, insn.len());
                    prop_assert_eq!(&insn.bytes[..], &bytes[..next]);
                    prop_assert!(insn.len() <= engine.max_instruction_length());
                    prop_assert!(insn.len() >= engine.min_instruction_length());
                }
                Err(err) => {
                    prop_assert_eq!(err.offset(), 0);
                    let again = engine.decode_one(&bytes, 0, 0).unwrap_err();
                    prop_assert_eq!(err, again);
                }
            }
        }
    }

    #[test]
    fn lengths_account_for_consumed_bytes(bytes in prop::collection::vec(any::<u8>(), 0..96)) {
        for engine in engines() {
            let out = engine.disasm_all(&bytes, 0);
            let total: usize = out.items.iter().map(Item::len).sum();
            prop_assert_eq!(total, out.consumed);
            if let Some(err) = &out.error {
                prop_assert_eq!(err.offset(), out.consumed);
            } else {
                prop_assert_eq!(out.consumed, bytes.len());
            }

            // with skipping every byte is accounted for
            let out = skipping(engine).disasm_all(&bytes, 0);
            prop_assert!(out.error.is_none());
            let total: usize = out.items.iter().map(Item::len).sum();
            prop_assert_eq!(total, bytes.len());
        }
    }

    #[test]
    fn short_mips_buffers_underrun(bytes in prop::collection::vec(any::<u8>(), 0..4)) {
        let err = mips32_be().decode_one(&bytes, 0, 0).unwrap_err();
        prop_assert_eq!(err.kind(), DecodeErrorKind::Underrun);
    }

    #[test]
    fn iterator_agrees_with_batch(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let engine = x86_64();
        let batch = engine.disasm_all(&bytes, 0x40_0000);
        let lazy: Vec<_> = engine.iter(&bytes, 0x40_0000).collect();
        let ok: Vec<_> = lazy.iter().filter_map(|r| r.as_ref().ok()).collect();
        prop_assert_eq!(ok.len(), batch.instruction_count());
        for (a, b) in ok.iter().zip(batch.instructions()) {
            prop_assert_eq!(*a, b);
        }
        prop_assert_eq!(lazy.last().and_then(|r| r.as_ref().err()), batch.error.as_ref());
    }
}

// Small assembler for the round trip below. Field layout follows the
// standard R/I/J formats.

fn r_type(rs: u32, rt: u32, rd: u32, sa: u32, funct: u32) -> u32 {
    (rs << 21) | (rt << 16) | (rd << 11) | (sa << 6) | funct
}

fn i_type(op: u32, rs: u32, rt: u32, imm: u16) -> u32 {
    (op << 26) | (rs << 21) | (rt << 16) | imm as u32
}

fn reg(n: u32) -> String {
    format!("${}", MipsReg::gpr(n).name())
}

fn imm(value: i64) -> String {
    let small = |v: u64| if v <= 9 { v.to_string() } else { format!("0x{v:x}") };
    if value < 0 {
        format!("-{}", small(value.unsigned_abs()))
    } else {
        small(value as u64)
    }
}

#[derive(Debug, Clone)]
enum Asm {
    Addu(u32, u32, u32),
    Xor(u32, u32, u32),
    Slt(u32, u32, u32),
    Sll(u32, u32, u32),
    Addiu(u32, u32, i16),
    Ori(u32, u32, u16),
    Lw(u32, u32, i16),
    Sw(u32, u32, i16),
    Bne(u32, u32, i16),
}

impl Asm {
    fn encode(&self) -> u32 {
        match *self {
            Asm::Addu(d, s, t) => r_type(s, t, d, 0, 0x21),
            Asm::Xor(d, s, t) => r_type(s, t, d, 0, 0x26),
            Asm::Slt(d, s, t) => r_type(s, t, d, 0, 0x2a),
            Asm::Sll(d, t, sa) => r_type(0, t, d, sa, 0x00),
            Asm::Addiu(t, s, v) => i_type(0x09, s, t, v as u16),
            Asm::Ori(t, s, v) => i_type(0x0d, s, t, v),
            Asm::Lw(t, base, off) => i_type(0x23, base, t, off as u16),
            Asm::Sw(t, base, off) => i_type(0x2b, base, t, off as u16),
            Asm::Bne(s, t, off) => i_type(0x05, s, t, off as u16),
        }
    }

    fn text(&self, address: u64) -> String {
        match *self {
            Asm::Addu(d, s, t) => format!("addu {}, {}, {}", reg(d), reg(s), reg(t)),
            Asm::Xor(d, s, t) => format!("xor {}, {}, {}", reg(d), reg(s), reg(t)),
            Asm::Slt(d, s, t) => format!("slt {}, {}, {}", reg(d), reg(s), reg(t)),
            Asm::Sll(d, t, sa) => format!("sll {}, {}, {}", reg(d), reg(t), imm(sa as i64)),
            Asm::Addiu(t, s, v) => format!("addiu {}, {}, {}", reg(t), reg(s), imm(v as i64)),
            Asm::Ori(t, s, v) => format!("ori {}, {}, {}", reg(t), reg(s), imm(v as i64)),
            Asm::Lw(t, b, off) => format!("lw {}, {}({})", reg(t), imm(off as i64), reg(b)),
            Asm::Sw(t, b, off) => format!("sw {}, {}({})", reg(t), imm(off as i64), reg(b)),
            Asm::Bne(s, t, off) => {
                let target = (address as i64 + 4 + ((off as i64) << 2)) as u64 & 0xffff_ffff;
                format!("bne {}, {}, {}", reg(s), reg(t), imm(target as i64))
            }
        }
    }
}

fn asm() -> impl Strategy<Value = Asm> {
    // register zero is excluded where it would select an alias
    let nz = 1u32..32;
    let any_reg = 0u32..32;
    prop_oneof![
        (nz.clone(), nz.clone(), nz.clone()).prop_map(|(d, s, t)| Asm::Addu(d, s, t)),
        (any_reg.clone(), any_reg.clone(), any_reg.clone()).prop_map(|(d, s, t)| Asm::Xor(d, s, t)),
        (any_reg.clone(), any_reg.clone(), any_reg.clone()).prop_map(|(d, s, t)| Asm::Slt(d, s, t)),
        (nz.clone(), any_reg.clone(), 0u32..32).prop_map(|(d, t, sa)| Asm::Sll(d, t, sa)),
        (any_reg.clone(), any_reg.clone(), any::<i16>()).prop_map(|(t, s, v)| Asm::Addiu(t, s, v)),
        (any_reg.clone(), any_reg.clone(), any::<u16>()).prop_map(|(t, s, v)| Asm::Ori(t, s, v)),
        (any_reg.clone(), any_reg.clone(), any::<i16>()).prop_map(|(t, b, o)| Asm::Lw(t, b, o)),
        (any_reg.clone(), any_reg, any::<i16>()).prop_map(|(t, b, o)| Asm::Sw(t, b, o)),
        (nz.clone(), nz, any::<i16>()).prop_map(|(s, t, o)| Asm::Bne(s, t, o)),
    ]
}

proptest! {
    #[test]
    fn mips_encodings_decode_to_their_source(
        program in prop::collection::vec(asm(), 1..16),
        big_endian in any::<bool>(),
    ) {
        let engine = if big_endian { mips32_be() } else { mips32_le() };
        let words: Vec<u32> = program.iter().map(Asm::encode).collect();
        let base = 0x0040_0000u64;
        let lines = listing(&engine, &mips_bytes(&words, big_endian), base);
        prop_assert_eq!(lines.len(), program.len());
        for (i, (line, src)) in lines.iter().zip(&program).enumerate() {
            prop_assert_eq!(line, &src.text(base + 4 * i as u64));
        }
    }
}
