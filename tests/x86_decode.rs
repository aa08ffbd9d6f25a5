//! x86 decoding across modes and encodings.

mod common;

use common::*;
use scatha::core::instruction::ArchDetail;
use scatha::core::x86::{X86Encoding, X86Reg};
use scatha::core::Group;
use scatha::{DecodeErrorKind, Instruction};

fn one(engine: &scatha::Engine, hex: &str) -> Instruction {
    let bytes = hex_bytes(hex);
    let (insn, next) = engine.decode_one(&bytes, 0, 0x1000).unwrap();
    assert_eq!(next, bytes.len(), "{hex} decoded as {insn}");
    insn
}

fn text(engine: &scatha::Engine, hex: &str) -> String {
    one(engine, hex).to_string()
}

#[test]
fn legacy_64bit() {
    let e = x86_64();
    assert_eq!(text(&e, "4831c0"), "xor rax, rax");
    assert_eq!(text(&e, "0f05"), "syscall");
    assert_eq!(text(&e, "f30f1efa"), "endbr64");
    assert_eq!(text(&e, "64488b042528000000"), "mov rax, qword ptr fs:[0x28]");
    assert_eq!(text(&e, "e800000000"), "call 0x1005");
    assert_eq!(text(&e, "488d05f9ffffff"), "lea rax, [rip - 7]");
}

#[test]
fn lock_prefix_is_recorded_in_detail() {
    let insn = one(&x86_64(), "f00fb10a");
    assert_eq!(insn.to_string(), "cmpxchg dword ptr [rdx], ecx");
    let ArchDetail::X86(detail) = &insn.detail else {
        panic!("expected x86 detail");
    };
    assert_eq!(detail.prefix[0], 0xf0);
    assert_eq!(detail.encoding, X86Encoding::Legacy);
}

#[test]
fn legacy_32_and_16bit() {
    assert_eq!(text(&x86_32(), "55"), "push ebp");
    assert_eq!(text(&x86_32(), "89e5"), "mov ebp, esp");
    assert_eq!(text(&x86_16(), "b83412"), "mov ax, 0x1234");
    assert_eq!(text(&x86_16(), "8b07"), "mov ax, word ptr [bx]");
    assert_eq!(text(&x86_16(), "66b878563412"), "mov eax, 0x12345678");
}

#[test]
fn sse_and_x87() {
    let e = x86_64();
    assert_eq!(text(&e, "0f28c1"), "movaps xmm0, xmm1");
    assert_eq!(text(&e, "660fefc0"), "pxor xmm0, xmm0");
    assert_eq!(text(&e, "d9e8"), "fld1");
    assert_eq!(text(&e, "dd45f8"), "fld qword ptr [rbp - 8]");
    assert!(one(&e, "d9e8").in_group(Group::Fpu));
}

#[test]
fn vex_evex_xop() {
    let e = x86_64();
    assert_eq!(text(&e, "c5f877"), "vzeroupper");
    assert_eq!(text(&e, "c5fdefc0"), "vpxor ymm0, ymm0, ymm0");
    assert_eq!(text(&e, "62f17548efc2"), "vpxord zmm0, zmm1, zmm2");
    assert_eq!(text(&e, "8fe878c2c105"), "vprotd xmm0, xmm1, 5");

    let insn = one(&e, "62f174c958c2");
    assert_eq!(insn.to_string(), "vaddps zmm0 {k1} {z}, zmm1, zmm2");
    assert_eq!(insn.operands[0].mask, X86Reg::K1.into());
    assert!(insn.operands[0].avx_zero_opmask);
    let ArchDetail::X86(detail) = &insn.detail else {
        panic!("expected x86 detail");
    };
    assert_eq!(detail.encoding, X86Encoding::Evex);
}

#[test]
fn prefix_bound() {
    let e = x86_64();
    let mut bytes = vec![0x66; 15];
    bytes.push(0x90);
    let err = e.decode_one(&bytes, 0, 0).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::ExcessivePrefixes);
    assert_eq!(err.offset(), 0);

    let mut bytes = vec![0x66; 14];
    bytes.push(0x90);
    let (insn, next) = e.decode_one(&bytes, 0, 0).unwrap();
    assert_eq!(insn.length, 15);
    assert_eq!(next, 15);
}

#[test]
fn failures_anchor_at_instruction_start() {
    let e = x86_64();
    // nop, then a ModRM instruction cut after its opcode
    let bytes = [0x90, 0x48, 0x8b];
    let err = e.decode_one(&bytes, 1, 0).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::TruncatedOperand);
    assert_eq!(err.offset(), 1);

    // escape byte with nothing after it
    let err = e.decode_one(&[0x0f], 0, 0).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::Underrun);
}

#[test]
fn mode_restricted_opcodes() {
    // 40 is inc eax outside 64-bit mode and a REX prefix inside it
    assert_eq!(text(&x86_32(), "40"), "inc eax");
    assert_eq!(text(&x86_64(), "4090"), "nop");
    // push es does not exist in 64-bit mode
    assert_eq!(text(&x86_32(), "06"), "push es");
    let err = x86_64().decode_one(&[0x06], 0, 0).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::UnknownOpcode);
    // salc exists only outside 64-bit mode
    assert_eq!(text(&x86_32(), "d6"), "salc");
    let err = x86_64().decode_one(&[0xd6], 0, 0).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::UnknownOpcode);
}

#[test]
fn control_and_debug_register_moves() {
    assert_eq!(text(&x86_64(), "0f20c0"), "mov rax, cr0");
    assert_eq!(text(&x86_64(), "0f22d8"), "mov cr3, rax");
    assert_eq!(text(&x86_32(), "0f21f8"), "mov eax, dr7");
    // the mod bits are ignored: no SIB or displacement follows
    assert_eq!(text(&x86_64(), "0f237c"), "mov dr7, rsp");
    assert_eq!(text(&x86_32(), "0f2000"), "mov eax, cr0");
}

#[test]
fn missing_group_selector_is_underrun() {
    let err = x86_64().decode_one(&[0x90, 0x0f, 0x01], 1, 0).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::Underrun);
    assert_eq!(err.offset(), 1);
}

#[test]
fn side_effects() {
    let insn = one(&x86_64(), "f348a5");
    assert_eq!(insn.mnemonic.name(), "movsq");
    let read = insn.all_registers_read();
    assert!(read.contains(&X86Reg::Rsi.into()));
    assert!(read.contains(&X86Reg::Rcx.into()));
    assert!(insn.all_registers_written().contains(&X86Reg::Rcx.into()));

    let insn = one(&x86_64(), "c3");
    assert!(insn.is_return());
    assert!(insn.regs_read.contains(&X86Reg::Rsp.into()));
}
