//! End-to-end decode scenarios through the public engine.

mod common;

use common::*;
use scatha::core::x86::X86Reg;
use scatha::{DecodeErrorKind, Item, OperandKind};

#[test]
fn nop_at_0x1000() {
    let engine = x86_64();
    let (insn, next) = engine.decode_one(&[0x90], 0, 0x1000).unwrap();
    assert_eq!(insn.mnemonic.name(), "nop");
    assert_eq!(insn.operands.len(), 0);
    assert_eq!(insn.length, 1);
    assert_eq!(insn.address, 0x1000);
    assert_eq!(insn.end_address(), 0x1001);
    assert_eq!(next, 1);
}

#[test]
fn truncated_move_immediate() {
    // mov eax, imm32 with two of four immediate bytes
    let engine = x86_32();
    let bytes = [0xb8, 0x78, 0x56];
    let err = engine.decode_one(&bytes, 0, 0).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::TruncatedOperand);
    assert_eq!(err.offset(), 0);

    // the same failure again: no hidden state
    assert_eq!(engine.decode_one(&bytes, 0, 0).unwrap_err(), err);
}

#[test]
fn unknown_opcode_then_skip_one_byte() {
    let engine = x86_64();
    // d6 (salc) is invalid in 64-bit mode
    let bytes = [0xd6, 0x48, 0x31, 0xc0];
    let err = engine.decode_one(&bytes, 0, 0x2000).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::UnknownOpcode);
    let (insn, next) = engine.decode_one(&bytes, 1, 0x2001).unwrap();
    assert_eq!(insn.to_string(), "xor rax, rax");
    assert_eq!(next, 4);

    let out = skipping(x86_64()).disasm_all(&bytes, 0x2000);
    assert!(matches!(out.items[0], Item::Skipped { offset: 0, byte: 0xd6, .. }));
    assert_eq!(out.instruction_count(), 1);
}

#[test]
fn lengths_sum_to_buffer_length() {
    // push rbp; mov rbp, rsp; sub rsp, 0x10; mov dword ptr [rbp - 4], edi;
    // mov eax, dword ptr [rbp - 4]; leave; ret
    let bytes = hex_bytes("55 4889e5 4883ec10 897dfc 8b45fc c9 c3");
    let out = x86_64().disasm_all(&bytes, 0x401000);
    assert!(out.error.is_none());
    let total: usize = out.instructions().map(|i| i.length as usize).sum();
    assert_eq!(total, bytes.len());
    assert_eq!(out.consumed, bytes.len());
    assert_eq!(
        listing(&x86_64(), &bytes, 0x401000),
        [
            "push rbp",
            "mov rbp, rsp",
            "sub rsp, 0x10",
            "mov dword ptr [rbp - 4], edi",
            "mov eax, dword ptr [rbp - 4]",
            "leave",
            "ret",
        ]
    );
}

#[test]
fn short_buffers_underrun() {
    let engine = x86_64();
    let err = engine.decode_one(&[], 0, 0).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::Underrun);

    let engine = mips32_be();
    for len in 0..4 {
        let bytes = vec![0u8; len];
        let err = engine.decode_one(&bytes, 0, 0).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::Underrun, "len {len}");
        assert_eq!(err.offset(), 0);
    }
}

#[test]
fn operand_structure() {
    let (insn, _) = x86_64()
        .decode_one(&hex_bytes("8b448b10"), 0, 0)
        .unwrap();
    assert_eq!(insn.operands.len(), 2);
    assert_eq!(insn.operands[0].kind, OperandKind::Register(X86Reg::Eax.into()));
    let mem = insn.operands[1].mem().unwrap();
    assert_eq!(mem.base, X86Reg::Rbx.into());
    assert_eq!(mem.index, X86Reg::Rcx.into());
    assert_eq!(mem.reported_scale(), Some(4));
    assert_eq!(mem.disp, 0x10);
    assert_eq!(insn.operands[1].size, 32);
}

#[test]
fn listing_output() {
    let out = skipping(mips32_be()).disasm_all(
        &[0x27, 0xbd, 0xff, 0xe0, 0xff],
        0x400000,
    );
    let lines = out.lines();
    assert_eq!(lines[0], "00400000: 27bdffe0                addiu $sp, $sp, -0x20");
    assert_eq!(lines[1], "00400004: ff                      .byte 0xff");
    assert_eq!(out.consumed, 5);
}
