//! Field extraction and operand construction for MIPS instruction words.

use crate::core::disassembler::{DecodeError, DecodeResult};
use crate::core::instruction::{MemoryRef, Operand};
use crate::core::mips::MipsReg;
use crate::disasm::mips::tables::{Entry, Loc, OpSpec};

pub fn rs(word: u32) -> u32 {
    (word >> 21) & 0x1f
}

pub fn rt(word: u32) -> u32 {
    (word >> 16) & 0x1f
}

pub fn rd(word: u32) -> u32 {
    (word >> 11) & 0x1f
}

pub fn sa(word: u32) -> u32 {
    (word >> 6) & 0x1f
}

/// Sign-extend the low `bits` of `value`.
pub fn sign_extend(value: u32, bits: u32) -> i64 {
    let shift = 64 - bits;
    ((value as i64) << shift) >> shift
}

/// Truncate an address to the register width.
pub fn wrap(addr: u64, gpr_bits: u16) -> u64 {
    if gpr_bits >= 64 {
        addr
    } else {
        addr & 0xffff_ffff
    }
}

fn gpr(num: u32, gpr_bits: u16, spec: &OpSpec) -> Operand {
    Operand::register(MipsReg::gpr(num), gpr_bits, spec.access)
}

fn fpr(num: u32, gpr_bits: u16, spec: &OpSpec) -> Operand {
    let reg = MipsReg::fpr(num);
    Operand::register(reg, reg.size(gpr_bits), spec.access)
}

fn target(value: u64, gpr_bits: u16) -> Operand {
    Operand::immediate(wrap(value, gpr_bits) as i64, gpr_bits)
}

fn relative(address: u64, offset: i64) -> u64 {
    address.wrapping_add(offset as u64)
}

fn memory(word: u32, disp: i64, bits: u16, spec: &OpSpec) -> Operand {
    let mem = MemoryRef {
        base: MipsReg::gpr(rs(word)).into(),
        disp,
        ..Default::default()
    };
    Operand::memory(mem, bits, spec.access)
}

fn slot(word: u32, spec: &OpSpec, address: u64, gpr_bits: u16) -> DecodeResult<Operand> {
    let next = address.wrapping_add(4);
    Ok(match spec.loc {
        Loc::Rs => gpr(rs(word), gpr_bits, spec),
        Loc::Rt => gpr(rt(word), gpr_bits, spec),
        Loc::Rd => gpr(rd(word), gpr_bits, spec),
        Loc::Fs => fpr(rd(word), gpr_bits, spec),
        Loc::Ft => fpr(rt(word), gpr_bits, spec),
        Loc::Fd => fpr(sa(word), gpr_bits, spec),
        Loc::Sa | Loc::Pos => Operand::immediate(sa(word) as i64, 8),
        Loc::Sa2 => Operand::immediate(((word >> 6) & 3) as i64 + 1, 8),
        Loc::Simm => Operand::immediate(sign_extend(word & 0xffff, 16), 16),
        Loc::Uimm => Operand::immediate((word & 0xffff) as i64, 16),
        Loc::Mem(bits) => memory(word, sign_extend(word & 0xffff, 16), bits, spec),
        Loc::Mem9(bits) => memory(word, sign_extend((word >> 7) & 0x1ff, 9), bits, spec),
        Loc::Br16 => target(relative(next, sign_extend(word & 0xffff, 16) << 2), gpr_bits),
        Loc::Br21 => target(
            relative(next, sign_extend(word & 0x1f_ffff, 21) << 2),
            gpr_bits,
        ),
        Loc::Br26 => target(
            relative(next, sign_extend(word & 0x3ff_ffff, 26) << 2),
            gpr_bits,
        ),
        Loc::Jump26 => {
            let region = next & !0x0fff_ffff;
            target(region | (((word & 0x3ff_ffff) as u64) << 2), gpr_bits)
        }
        Loc::Pc19 => target(
            relative(address, sign_extend(word & 0x7_ffff, 19) << 2),
            gpr_bits,
        ),
        Loc::RawRd => Operand::immediate(rd(word) as i64, 8),
        Loc::Sel => Operand::immediate((word & 7) as i64, 8),
        Loc::FccBr => Operand::register(MipsReg::fcc((word >> 18) & 7), 1, spec.access),
        Loc::FccCmp => Operand::register(MipsReg::fcc((word >> 8) & 7), 1, spec.access),
        Loc::ExtSize => Operand::immediate(rd(word) as i64 + 1, 8),
        Loc::InsSize => {
            let (msb, lsb) = (rd(word), sa(word));
            if msb < lsb {
                return Err(DecodeError::UnknownOpcode { offset: 0 });
            }
            Operand::immediate((msb - lsb + 1) as i64, 8)
        }
        Loc::Hint => Operand::immediate(rt(word) as i64, 8),
        Loc::Code10 => Operand::immediate(((word >> 6) & 0x3ff) as i64, 16),
    })
}

/// Build the operand list of `entry` for `word` decoded at `address`.
pub fn decode(word: u32, entry: &Entry, address: u64, gpr_bits: u16) -> DecodeResult<Vec<Operand>> {
    entry
        .ops
        .iter()
        .map(|spec| slot(word, spec, address, gpr_bits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instruction::Access;
    use crate::core::mips::MipsMnemonic;
    use crate::disasm::mips::tables::all_entries;

    fn entry(m: MipsMnemonic, word: u32) -> &'static Entry {
        all_entries()
            .find(|e| e.mnemonic == m && e.matches(word))
            .unwrap()
    }

    #[test]
    fn test_fields() {
        // addiu $sp, $sp, -0x20
        let word = 0x27bd_ffe0;
        assert_eq!(rs(word), 29);
        assert_eq!(rt(word), 29);
        assert_eq!(sign_extend(word & 0xffff, 16), -0x20);
        assert_eq!(sign_extend(0x1ff, 9), -1);
        assert_eq!(sign_extend(0xff, 9), 0xff);
    }

    #[test]
    fn test_memory_operand() {
        // lw $ra, 0x1c($sp)
        let word = 0x8fbf_001c;
        let ops = decode(word, entry(MipsMnemonic::Lw, word), 0, 32).unwrap();
        assert_eq!(ops[0].reg(), Some(MipsReg::Ra.into()));
        assert_eq!(ops[0].access, Access::Write);
        let mem = ops[1].mem().unwrap();
        assert_eq!(mem.base, MipsReg::Sp.into());
        assert_eq!(mem.disp, 0x1c);
        assert_eq!(ops[1].size, 32);
    }

    #[test]
    fn test_branch_targets() {
        // beq $a0, $a1, -1 instruction at 0x1000 targets 0x1000
        let word = 0x1085_ffff;
        let ops = decode(word, entry(MipsMnemonic::Beq, word), 0x1000, 32).unwrap();
        assert_eq!(ops[2].imm(), Some(0x1000));

        // j 0x400000 from 0x00400020
        let word = 0x0810_0000;
        let ops = decode(word, entry(MipsMnemonic::J, word), 0x0040_0020, 32).unwrap();
        assert_eq!(ops[0].imm(), Some(0x0040_0000));

        // negative target wraps to 32 bits in 32-bit mode
        let word = 0x1000_fffe;
        let ops = decode(word, entry(MipsMnemonic::B, word), 0, 32).unwrap();
        assert_eq!(ops[0].imm(), Some(0xffff_fffc));
        let ops = decode(word, entry(MipsMnemonic::B, word), 0, 64).unwrap();
        assert_eq!(ops[0].imm(), Some(-4));
    }

    #[test]
    fn test_bitfield_sizes() {
        // ext $v0, $a0, 3, 5
        let word = 0x7c82_20c0;
        let ops = decode(word, entry(MipsMnemonic::Ext, word), 0, 32).unwrap();
        assert_eq!(ops[2].imm(), Some(3));
        assert_eq!(ops[3].imm(), Some(5));

        // ins $v0, $a0, 3, 5 (msb 7)
        let word = 0x7c82_38c4;
        let ops = decode(word, entry(MipsMnemonic::Ins, word), 0, 32).unwrap();
        assert_eq!(ops[3].imm(), Some(5));

        // msb below lsb
        let word = 0x7c82_10c4;
        assert!(decode(word, entry(MipsMnemonic::Ins, word), 0, 32).is_err());
    }
}
