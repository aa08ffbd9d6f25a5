//! Table-driven MIPS decoder for MIPS32/MIPS64, both byte orders, and
//! release 6.
//!
//! Instructions are one 32-bit word. There are no prefixes; the matcher
//! selects the row with the most fixed bits among those valid for the ISA
//! generation, which is how aliases (`move`, `b`, `nop`) win over their
//! base encodings.

mod format;
mod operands;
pub mod tables;

use crate::core::disassembler::{Architecture, DecodeError, DecodeResult, Mode};
use crate::core::group::Group;
use crate::core::instruction::{ArchDetail, Instruction, Operand};
use crate::core::mips::MipsDetail;
use crate::core::register::Register;
use crate::disasm::cursor::Cursor;
use crate::disasm::decoder::ArchDecoder;

pub use format::signed_imm;
use tables::{Entry, Isa, Loc};

/// Per-instruction scratch state.
#[derive(Debug, Clone, Copy, Default)]
pub struct MipsContext {
    pub start: usize,
    /// Instruction word in host order.
    pub word: u32,
}

/// MIPS decoder bound to one mode.
#[derive(Debug, Clone, Copy)]
pub struct MipsDecoder {
    mode: Mode,
}

impl MipsDecoder {
    /// `mode` needs exactly one of `MIPS32`/`MIPS64`; `MICRO` is rejected.
    pub fn new(mode: Mode) -> crate::error::Result<Self> {
        Architecture::Mips.validate_mode(mode)?;
        Ok(Self { mode })
    }

    pub fn gpr_bits(&self) -> u16 {
        self.mode.bits_width()
    }

    pub fn is_r6(&self) -> bool {
        self.mode.contains(Mode::MIPS32R6)
    }

    fn accepts(&self, entry: &Entry) -> bool {
        let isa = match entry.isa {
            Isa::Any => true,
            Isa::PreR6 => !self.is_r6(),
            Isa::R6 => self.is_r6(),
        };
        isa && (!entry.wide || self.gpr_bits() == 64)
    }

    /// Most specific accepted row; ties keep the earlier row.
    fn lookup(&self, word: u32) -> Option<&'static Entry> {
        let mut best: Option<(u32, &'static Entry)> = None;
        for &(score, entry) in tables::candidates(word) {
            if !entry.matches(word) || !self.accepts(entry) {
                continue;
            }
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, entry));
            }
        }
        best.map(|(_, entry)| entry)
    }
}

fn groups(entry: &Entry) -> Vec<Group> {
    let mut out = entry.groups.to_vec();
    let mut add = |g: Group| {
        if !out.contains(&g) {
            out.push(g);
        }
    };
    add(Group::Stdenc);
    match entry.isa {
        Isa::PreR6 => add(Group::NotMips32r6),
        Isa::R6 => add(Group::Mips32r6),
        Isa::Any => {}
    }
    if entry.wide {
        add(Group::Mips64);
        add(Group::Gp64Bit);
        if entry.r2 {
            add(Group::Mips64r2);
        }
    } else {
        add(Group::Mips32);
        if entry.r2 {
            add(Group::Mips32r2);
        }
    }
    if entry
        .ops
        .iter()
        .any(|op| matches!(op.loc, Loc::Br16 | Loc::Br21 | Loc::Br26))
    {
        add(Group::BranchRelative);
    }
    out
}

impl ArchDecoder for MipsDecoder {
    type Context = MipsContext;
    type Entry = Entry;

    fn architecture(&self) -> Architecture {
        Architecture::Mips
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn new_context(&self, start: usize) -> MipsContext {
        MipsContext {
            start,
            ..Default::default()
        }
    }

    fn scan_prefixes(&self, _cur: &mut Cursor<'_>, _ctx: &mut MipsContext) -> DecodeResult<()> {
        Ok(())
    }

    fn match_opcode(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &mut MipsContext,
    ) -> DecodeResult<&'static Entry> {
        ctx.word = cur.read_u32(self.mode.is_big_endian())?;
        self.lookup(ctx.word)
            .ok_or(DecodeError::UnknownOpcode { offset: ctx.start })
    }

    fn decode_operands(
        &self,
        _cur: &mut Cursor<'_>,
        ctx: &mut MipsContext,
        entry: &'static Entry,
        address: u64,
    ) -> DecodeResult<Vec<Operand>> {
        operands::decode(ctx.word, entry, address, self.gpr_bits())
    }

    fn assemble(
        &self,
        ctx: MipsContext,
        entry: &'static Entry,
        operands: Vec<Operand>,
        bytes: &[u8],
        address: u64,
        detail_on: bool,
    ) -> Instruction {
        let op_str = format::op_str(entry, &operands);
        let (groups, regs_read, regs_write, detail) = if detail_on {
            (
                groups(entry),
                entry.imp_read.iter().map(|&r| Register::from(r)).collect(),
                entry.imp_write.iter().map(|&r| Register::from(r)).collect(),
                ArchDetail::Mips(MipsDetail {
                    raw: ctx.word,
                    delay_slot: entry.delay,
                }),
            )
        } else {
            (Vec::new(), Vec::new(), Vec::new(), ArchDetail::None)
        };
        Instruction {
            address,
            bytes: bytes.to_vec(),
            mnemonic: entry.mnemonic.into(),
            op_str,
            operands,
            length: bytes.len() as u16,
            arch: Architecture::Mips,
            groups,
            regs_read,
            regs_write,
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::disassembler::DecodeErrorKind;
    use crate::core::mips::{MipsMnemonic, MipsReg};
    use crate::disasm::decoder::decode_one;

    const BE32: Mode = Mode::MIPS32.union(Mode::BIG_ENDIAN);
    const LE32: Mode = Mode::MIPS32;
    const BE64: Mode = Mode::MIPS64.union(Mode::BIG_ENDIAN);
    const R6: Mode = Mode::MIPS32.union(Mode::MIPS32R6).union(Mode::BIG_ENDIAN);

    fn decode(word: u32, mode: Mode, address: u64) -> DecodeResult<Instruction> {
        let decoder = MipsDecoder::new(mode).unwrap();
        let bytes = if mode.is_big_endian() {
            word.to_be_bytes()
        } else {
            word.to_le_bytes()
        };
        let mut cur = Cursor::new(&bytes);
        decode_one(&decoder, &mut cur, address, true)
    }

    fn text(word: u32, mode: Mode) -> String {
        decode(word, mode, 0x1000).unwrap().to_string()
    }

    #[test]
    fn test_prologue() {
        assert_eq!(text(0x27bd_ffe0, BE32), "addiu $sp, $sp, -0x20");
        assert_eq!(text(0xafbf_001c, BE32), "sw $ra, 0x1c($sp)");
        assert_eq!(text(0x8fbf_001c, BE32), "lw $ra, 0x1c($sp)");
        assert_eq!(text(0x03e0_0008, BE32), "jr $ra");
        assert_eq!(text(0x0000_0000, BE32), "nop");
    }

    #[test]
    fn test_byte_order() {
        let bytes = [0xe0, 0xff, 0xbd, 0x27];
        let decoder = MipsDecoder::new(LE32).unwrap();
        let mut cur = Cursor::new(&bytes);
        let insn = decode_one(&decoder, &mut cur, 0, true).unwrap();
        assert_eq!(insn.mnemonic.name(), "addiu");
        assert_eq!(cur.position(), 4);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(text(0x0080_1025, BE32), "move $v0, $a0");
        assert_eq!(text(0x0080_1021, BE32), "move $v0, $a0");
        assert_eq!(text(0x1000_0003, BE32), "b 0x1010");
        assert_eq!(text(0x1080_0003, BE32), "beqz $a0, 0x1010");
        assert_eq!(text(0x1085_0003, BE32), "beq $a0, $a1, 0x1010");
        assert_eq!(text(0x0411_0003, BE32), "bal 0x1010");
        assert_eq!(text(0x0004_1023, BE32), "negu $v0, $a0");
        assert_eq!(text(0x0080_1027, BE32), "not $v0, $a0");
        assert_eq!(text(0x0320_f809, BE32), "jalr $t9");
        assert_eq!(text(0x0320_2009, BE32), "jalr $a0, $t9");
    }

    #[test]
    fn test_immediates_and_shifts() {
        assert_eq!(text(0x3c1c_0042, BE32), "lui $gp, 0x42");
        assert_eq!(text(0x3042_ffff, BE32), "andi $v0, $v0, 0xffff");
        assert_eq!(text(0x0002_1080, BE32), "sll $v0, $v0, 2");
        assert_eq!(text(0x2402_0001, BE32), "addiu $v0, $zero, 1");
    }

    #[test]
    fn test_release6_encodings() {
        // mul $v0, $a0, $a1
        assert_eq!(text(0x0085_1098, R6), "mul $v0, $a0, $a1");
        assert_eq!(
            decode(0x0085_1098, BE32, 0).unwrap_err().kind(),
            DecodeErrorKind::UnknownOpcode
        );
        // mult $a0, $a1 is gone in release 6
        assert_eq!(text(0x0085_0018, BE32), "mult $a0, $a1");
        assert!(decode(0x0085_0018, R6, 0).is_err());
        // jr $ra is jalr $zero, $ra
        assert_eq!(text(0x03e0_0009, R6), "jr $ra");
        // bc +1
        assert_eq!(text(0xc800_0001, R6), "bc 0x1008");
    }

    #[test]
    fn test_release6_compact_branches() {
        assert_eq!(text(0x6085_0004, R6), "bnec $a0, $a1, 0x1014");
        assert_eq!(text(0x5c85_0004, R6), "bltc $a0, $a1, 0x1014");
        assert_eq!(text(0x5885_0004, R6), "bgec $a0, $a1, 0x1014");
        // rs >= rt selects the overflow test, rs == 0 the link form
        assert_eq!(text(0x20a4_0004, R6), "bovc $a1, $a0, 0x1014");
        assert_eq!(text(0x2085_0004, R6), "beqc $a0, $a1, 0x1014");
        assert_eq!(text(0x2005_0004, R6), "beqzalc $a1, 0x1014");
        assert_eq!(text(0x6005_0004, R6), "bnezalc $a1, 0x1014");
        assert_eq!(text(0x6000_0004, R6), "bnvc $zero, $zero, 0x1014");
        // blez/bgtz keep rt == 0; the other rs/rt relations branch compactly
        assert_eq!(text(0x1880_0004, R6), "blez $a0, 0x1014");
        assert_eq!(text(0x1805_0004, R6), "blezalc $a1, 0x1014");
        assert_eq!(text(0x18a5_0004, R6), "bgezalc $a1, 0x1014");
        assert_eq!(text(0x1885_0004, R6), "bgeuc $a0, $a1, 0x1014");
        assert_eq!(text(0x1c05_0004, R6), "bgtzalc $a1, 0x1014");
        assert_eq!(text(0x1ca5_0004, R6), "bltzalc $a1, 0x1014");
        assert_eq!(text(0x1c85_0004, R6), "bltuc $a0, $a1, 0x1014");
        assert_eq!(text(0x5805_0004, R6), "blezc $a1, 0x1014");
        assert_eq!(text(0x58a5_0004, R6), "bgezc $a1, 0x1014");
        assert_eq!(text(0x5c05_0004, R6), "bgtzc $a1, 0x1014");
        assert_eq!(text(0x5ca5_0004, R6), "bltzc $a1, 0x1014");
        // rt == 0 is reserved on the old branch-likely opcodes
        assert_eq!(
            decode(0x5880_0004, R6, 0).unwrap_err().kind(),
            DecodeErrorKind::UnknownOpcode
        );
        // the same words keep their pre-release 6 meaning
        assert_eq!(text(0x20a4_0004, BE32), "addi $a0, $a1, 4");
        assert_eq!(text(0x5880_0004, BE32), "blezl $a0, 0x1014");

        let insn = decode(0x2005_0004, R6, 0).unwrap();
        assert!(insn.is_call());
        assert!(insn.regs_write.contains(&MipsReg::Ra.into()));
        let ArchDetail::Mips(detail) = insn.detail else {
            panic!("expected mips detail");
        };
        assert!(!detail.delay_slot);
    }

    #[test]
    fn test_release6_atomics_and_debug() {
        assert_eq!(text(0x7c88_0036, R6), "ll $t0, 0($a0)");
        assert_eq!(text(0x7c88_0436, R6), "ll $t0, 8($a0)");
        assert_eq!(text(0x7c88_fe26, R6), "sc $t0, -4($a0)");
        assert_eq!(text(0x0000_000e, R6), "sdbbp");
        assert!(decode(0x0000_000e, BE32, 0).is_err());
        // ll moved off primary opcode 0x30
        assert!(decode(0xc088_0000, R6, 0).is_err());
        assert_eq!(text(0xc088_0000, BE32), "ll $t0, 0($a0)");
    }

    #[test]
    fn test_traps() {
        assert_eq!(text(0x0085_0034, BE32), "teq $a0, $a1");
        assert_eq!(text(0x038f_6ab6, BE32), "tne $gp, $t7, 0x1aa");
        assert_eq!(text(0x048e_0005, BE32), "tnei $a0, 5");
        assert!(decode(0x048e_0005, R6, 0).is_err());
        let insn = decode(0x038f_6ab6, BE32, 0).unwrap();
        assert!(insn.in_group(Group::Int));
        assert_eq!(insn.operands[2].imm(), Some(0x1aa));
    }

    #[test]
    fn test_branch_likely_and_link() {
        assert_eq!(text(0x0492_0004, BE32), "bltzall $a0, 0x1014");
        assert_eq!(text(0x0493_0004, BE32), "bgezall $a0, 0x1014");
        let insn = decode(0x0493_0004, BE32, 0).unwrap();
        assert!(insn.is_call());
        assert!(insn.regs_write.contains(&MipsReg::Ra.into()));
        assert!(decode(0x0493_0004, R6, 0).is_err());
    }

    #[test]
    fn test_doubleword_needs_mips64() {
        // daddiu $sp, $sp, -0x30
        assert_eq!(text(0x67bd_ffd0, BE64), "daddiu $sp, $sp, -0x30");
        assert_eq!(
            decode(0x67bd_ffd0, BE32, 0).unwrap_err().kind(),
            DecodeErrorKind::UnknownOpcode
        );
        assert_eq!(text(0xdfbf_0028, BE64), "ld $ra, 0x28($sp)");
    }

    #[test]
    fn test_floating_point() {
        // add.s $f0, $f12, $f14
        assert_eq!(text(0x460e_6000, BE32), "add.s $f0, $f12, $f14");
        // c.eq.d $fcc0, $f12, $f14
        assert_eq!(text(0x462e_6032, BE32), "c.eq.d $fcc0, $f12, $f14");
        // cvt.d.w $f0, $f2
        assert_eq!(text(0x4680_1021, BE32), "cvt.d.w $f0, $f2");
        // lwc1 $f0, 8($a0)
        assert_eq!(text(0xc480_0008, BE32), "lwc1 $f0, 8($a0)");
    }

    #[test]
    fn test_detail() {
        let insn = decode(0x0c10_0000, BE32, 0x0040_0000).unwrap();
        assert_eq!(insn.mnemonic, MipsMnemonic::Jal.into());
        assert!(insn.is_call());
        assert!(insn.regs_write.contains(&MipsReg::Ra.into()));
        let ArchDetail::Mips(detail) = insn.detail else {
            panic!("expected mips detail");
        };
        assert_eq!(detail.raw, 0x0c10_0000);
        assert!(detail.delay_slot);

        let insn = decode(0x1085_0003, BE32, 0).unwrap();
        assert!(insn.in_group(Group::BranchRelative));
        assert!(insn.is_branch());

        let insn = decode(0x0085_0018, BE32, 0).unwrap();
        assert!(insn.regs_write.contains(&MipsReg::Hi.into()));
        assert!(insn.in_group(Group::NotMips32r6));

        let insn = decode(0xc800_0001, R6, 0).unwrap();
        let ArchDetail::Mips(detail) = insn.detail else {
            panic!("expected mips detail");
        };
        assert!(!detail.delay_slot);
    }

    #[test]
    fn test_unknown_and_underrun() {
        // primary opcode 0x3b is PC-relative in release 6 only
        let err = decode(0xec00_0000, BE32, 0).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::UnknownOpcode);
        assert_eq!(err.offset(), 0);

        let decoder = MipsDecoder::new(BE32).unwrap();
        let bytes = [0x27, 0xbd, 0xff];
        let mut cur = Cursor::new(&bytes);
        let err = decode_one(&decoder, &mut cur, 0, true).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::Underrun);
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn test_mode_rules() {
        assert!(MipsDecoder::new(Mode::MIPS32 | Mode::MICRO).is_err());
        assert!(MipsDecoder::new(Mode::MODE_16).is_err());
        assert!(MipsDecoder::new(R6).unwrap().is_r6());
        assert_eq!(MipsDecoder::new(BE64).unwrap().gpr_bits(), 64);
    }
}
