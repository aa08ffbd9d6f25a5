//! MIPS decoding through the public engine.

mod common;

use common::*;
use scatha::core::instruction::ArchDetail;
use scatha::core::mips::{MipsMnemonic, MipsReg};
use scatha::core::{Group, Register};
use scatha::{DecodeErrorKind, Instruction, Item};

fn one(engine: &scatha::Engine, word: u32, big_endian: bool) -> Instruction {
    let bytes = mips_bytes(&[word], big_endian);
    let (insn, next) = engine.decode_one(&bytes, 0, 0x1000).unwrap();
    assert_eq!(next, 4);
    insn
}

fn be(word: u32) -> String {
    one(&mips32_be(), word, true).to_string()
}

#[test]
fn function_listing_both_byte_orders() {
    let words = [
        0x27bd_ffe0, // addiu $sp, $sp, -0x20
        0xafbf_001c, // sw $ra, 0x1c($sp)
        0x0c10_0000, // jal 0x400000
        0x0000_0000, // nop
        0x8fbf_001c, // lw $ra, 0x1c($sp)
        0x03e0_0008, // jr $ra
        0x27bd_0020, // addiu $sp, $sp, 0x20
    ];
    let expected = vec![
        "addiu $sp, $sp, -0x20",
        "sw $ra, 0x1c($sp)",
        "jal 0x400000",
        "nop",
        "lw $ra, 0x1c($sp)",
        "jr $ra",
        "addiu $sp, $sp, 0x20",
    ];
    assert_eq!(listing(&mips32_be(), &mips_bytes(&words, true), 0x1000), expected);
    assert_eq!(listing(&mips32_le(), &mips_bytes(&words, false), 0x1000), expected);

    // the same bytes read in the wrong order are a different program
    let swapped = mips32_le().disasm_all(&mips_bytes(&words, true), 0x1000);
    assert_ne!(
        swapped.instructions().map(|i| i.to_string()).collect::<Vec<_>>(),
        expected
    );
}

#[test]
fn bitfield_and_system_instructions() {
    assert_eq!(be(0x7c82_3900), "ext $v0, $a0, 4, 8");
    assert_eq!(be(0x7c82_5904), "ins $v0, $a0, 4, 8");
    assert_eq!(be(0x7c04_1420), "seb $v0, $a0");
    assert_eq!(be(0x4008_6000), "mfc0 $t0, $12, 0");
    assert_eq!(be(0x0000_000c), "syscall");
    assert_eq!(be(0x0000_000f), "sync");
    assert_eq!(be(0xc088_0000), "ll $t0, 0($a0)");
}

#[test]
fn groups_follow_isa_and_semantics() {
    let insn = one(&mips32_be(), 0x0c10_0000, true);
    assert!(insn.is_call());
    assert!(insn.in_group(Group::Stdenc));
    assert!(insn.in_group(Group::Mips32));
    assert!(!insn.in_group(Group::NotMips32r6));
    assert_eq!(insn.regs_write, vec![Register::from(MipsReg::Ra)]);

    let insn = one(&mips32_be(), 0x1085_0003, true);
    assert!(insn.is_branch());
    assert!(insn.in_group(Group::BranchRelative));

    let insn = one(&mips32_be(), 0x0085_0018, true);
    assert!(insn.in_group(Group::NotMips32r6));
    assert!(insn.all_registers_written().contains(&MipsReg::Lo.into()));

    let insn = one(&mips64_be(), 0x67bd_ffd0, true);
    assert!(insn.in_group(Group::Mips64));
    assert!(insn.in_group(Group::Gp64Bit));

    let insn = one(&mips32_r6(), 0x0085_1098, true);
    assert!(insn.in_group(Group::Mips32r6));
}

#[test]
fn delay_slots_in_detail() {
    let insn = one(&mips32_be(), 0x03e0_0008, true);
    assert!(insn.is_return());
    let ArchDetail::Mips(detail) = &insn.detail else {
        panic!("expected mips detail");
    };
    assert!(detail.delay_slot);
    assert_eq!(detail.raw, 0x03e0_0008);

    let insn = one(&mips32_r6(), 0xc800_0001, true);
    let ArchDetail::Mips(detail) = &insn.detail else {
        panic!("expected mips detail");
    };
    assert!(!detail.delay_slot);
}

#[test]
fn release6_reassigns_encodings() {
    let r6 = mips32_r6();
    let bytes = mips_bytes(&[0x0085_0018], true);
    let err = r6.decode_one(&bytes, 0, 0).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::UnknownOpcode);

    assert_eq!(one(&r6, 0x0085_1098, true).mnemonic, MipsMnemonic::Mul.into());
    assert_eq!(one(&mips32_be(), 0x0085_0018, true).mnemonic, MipsMnemonic::Mult.into());
}

#[test]
fn sixty_four_bit_rows_need_mips64() {
    let bytes = mips_bytes(&[0xdfbf_0028], true);
    let err = mips32_be().decode_one(&bytes, 0, 0).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::UnknownOpcode);
    assert_eq!(
        one(&mips64_be(), 0xdfbf_0028, true).to_string(),
        "ld $ra, 0x28($sp)"
    );
}

#[test]
fn skip_policy_walks_byte_by_byte() {
    // sd is 64-bit only, so every misaligned window starting with 0xff fails
    let mut bytes = vec![0xff; 4];
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    let out = skipping(mips32_be()).disasm_all(&bytes, 0x400);
    assert!(out.error.is_none());
    assert_eq!(out.skipped_count(), 4);
    assert_eq!(out.instruction_count(), 1);
    assert!(matches!(out.items[3], Item::Skipped { offset: 3, address: 0x403, byte: 0xff }));
    assert_eq!(out.items[4].address(), 0x404);
    assert_eq!(out.consumed, 8);
}

#[test]
fn trailing_partial_word() {
    let mut bytes = mips_bytes(&[0x0000_0000], true);
    bytes.extend_from_slice(&[0x27, 0xbd]);
    let out = mips32_be().disasm_all(&bytes, 0);
    assert_eq!(out.instruction_count(), 1);
    let err = out.error.unwrap();
    assert_eq!(err.kind(), DecodeErrorKind::Underrun);
    assert_eq!(err.offset(), 4);
}
