//! x86 operand decoding: ModRM/SIB addressing, registers, immediates and
//! EVEX decorations.

use crate::core::disassembler::{DecodeError, DecodeResult};
use crate::core::instruction::{Access, MemoryRef, Operand};
use crate::core::register::Register;
use crate::core::x86::{AvxBroadcast, X86Reg};
use crate::disasm::cursor::Cursor;
use crate::disasm::x86::context::X86Context;
use crate::disasm::x86::tables::{Enc, Entry, Imp, OpSpec, BCST64, L, S};

/// Longest legal x86 instruction in bytes.
pub const MAX_LENGTH: usize = 15;

const BX_SI: [(X86Reg, X86Reg); 8] = [
    (X86Reg::Bx, X86Reg::Si),
    (X86Reg::Bx, X86Reg::Di),
    (X86Reg::Bp, X86Reg::Si),
    (X86Reg::Bp, X86Reg::Di),
    (X86Reg::Si, X86Reg::Invalid),
    (X86Reg::Di, X86Reg::Invalid),
    (X86Reg::Bp, X86Reg::Invalid),
    (X86Reg::Bx, X86Reg::Invalid),
];

/// Memory form of the r/m operand, before EVEX disp8 scaling.
#[derive(Debug, Clone, Copy)]
struct RmAddr {
    mem: MemoryRef,
    /// The displacement was a single byte.
    disp8: bool,
}

/// Size of an operand slot in bits.
pub fn resolve_size(ctx: &X86Context, sz: S) -> u16 {
    match sz {
        S::B => 8,
        S::W => 16,
        S::D => 32,
        S::Q => 64,
        S::V => ctx.osz,
        S::Z => {
            if ctx.osz == 16 {
                16
            } else {
                32
            }
        }
        S::Y => {
            if ctx.osz == 64 {
                64
            } else {
                32
            }
        }
        S::A => ctx.asz,
        S::Mw => {
            if ctx.is64() {
                64
            } else {
                32
            }
        }
        S::T => 80,
        S::X => 128,
        S::Yy => 256,
        S::Zz => 512,
        S::Vl => ctx.vl,
        S::Half => ctx.vl / 2,
        S::Quarter => ctx.vl / 4,
        S::Eighth => ctx.vl / 8,
        S::Far => ctx.osz + 16,
        S::Desc => {
            if ctx.is64() {
                80
            } else {
                48
            }
        }
        S::Bits(bits) => bits,
    }
}

/// Register class wide enough to hold `bits`.
fn vec_bits(bits: u16) -> u16 {
    match bits {
        0..=128 => 128,
        129..=256 => 256,
        _ => 512,
    }
}

fn read_modrm_addr(cur: &mut Cursor<'_>, ctx: &mut X86Context) -> DecodeResult<Option<RmAddr>> {
    let Some(modrm) = ctx.modrm else {
        return Ok(None);
    };
    let md = modrm >> 6;
    if md == 3 {
        return Ok(None);
    }
    let rm = modrm & 7;
    let mut mem = MemoryRef {
        segment: ctx.segment.map_or(Register::Invalid, Register::from),
        ..Default::default()
    };

    if ctx.asz == 16 {
        let disp_size = match (md, rm) {
            (0, 6) => 2,
            (0, _) => 0,
            (1, _) => 1,
            _ => 2,
        };
        if !(md == 0 && rm == 6) {
            let (base, index) = BX_SI[rm as usize];
            mem.base = base.into();
            mem.index = index.into();
        }
        if disp_size > 0 {
            mem.disp = cur.read_signed(disp_size)?;
        }
        ctx.disp = mem.disp;
        return Ok(Some(RmAddr {
            mem,
            disp8: disp_size == 1,
        }));
    }

    let mut disp_size = match md {
        1 => 1,
        2 => 4,
        _ => 0,
    };
    if rm == 4 {
        let sib = cur.read_u8()?;
        ctx.sib = Some(sib);
        let index = ((sib >> 3) & 7) | ctx.x_ext();
        if index != 4 {
            mem.index = X86Reg::gpr(index, ctx.asz, true).into();
            mem.scale = 1 << (sib >> 6);
        }
        let base = (sib & 7) | ctx.b_ext();
        if md == 0 && base & 7 == 5 {
            disp_size = 4;
        } else {
            mem.base = X86Reg::gpr(base, ctx.asz, true).into();
        }
    } else if md == 0 && rm == 5 {
        disp_size = 4;
        if ctx.is64() {
            mem.base = X86Reg::ip(ctx.asz).into();
        }
    } else {
        mem.base = X86Reg::gpr(rm | ctx.b_ext(), ctx.asz, true).into();
    }
    if disp_size > 0 {
        mem.disp = cur.read_signed(disp_size)?;
    }
    ctx.disp = mem.disp;
    Ok(Some(RmAddr {
        mem,
        disp8: disp_size == 1,
    }))
}

/// Decode the operand slots of `entry` in declaration order.
pub fn decode(
    cur: &mut Cursor<'_>,
    ctx: &mut X86Context,
    entry: &Entry,
    address: u64,
) -> DecodeResult<Vec<Operand>> {
    let mut decoder = OperandDecoder {
        cur,
        ctx,
        entry,
        address,
        rm_addr: None,
    };
    let operands = decoder.run().map_err(DecodeError::into_truncated)?;

    let length = cur_len(decoder.cur, decoder.ctx);
    if length > MAX_LENGTH {
        return Err(DecodeError::ExcessivePrefixes {
            offset: decoder.ctx.start,
            count: decoder.ctx.prefix_count,
        });
    }
    Ok(operands)
}

fn cur_len(cur: &Cursor<'_>, ctx: &X86Context) -> usize {
    cur.position() - ctx.start
}

struct OperandDecoder<'c, 'a, 'x> {
    cur: &'c mut Cursor<'a>,
    ctx: &'x mut X86Context,
    entry: &'x Entry,
    address: u64,
    rm_addr: Option<RmAddr>,
}

impl OperandDecoder<'_, '_, '_> {
    fn unknown(&self) -> DecodeError {
        DecodeError::UnknownOpcode {
            offset: self.ctx.start,
        }
    }

    fn run(&mut self) -> DecodeResult<Vec<Operand>> {
        if !self.entry.ops.iter().any(|op| op.loc == L::Rx) {
            self.rm_addr = read_modrm_addr(self.cur, self.ctx)?;
        }

        let mut operands = Vec::with_capacity(self.entry.ops.len() + 1);
        for spec in self.entry.ops {
            self.slot(spec, &mut operands)?;
        }

        let ctx = &*self.ctx;
        if ctx.enc == Enc::Evex && (ctx.opmask != X86Reg::Invalid || ctx.vex.z) {
            if let Some(dest) = operands.first_mut() {
                dest.mask = ctx.opmask.into();
                dest.avx_zero_opmask = ctx.vex.z;
            }
        }
        Ok(operands)
    }

    fn slot(&mut self, spec: &OpSpec, out: &mut Vec<Operand>) -> DecodeResult<()> {
        let size = resolve_size(self.ctx, spec.sz);
        let access = spec.access;
        let ctx = &*self.ctx;
        let reg_field = ctx.modrm_reg();
        let rm_field = ctx.modrm_rm();
        let operand = match spec.loc {
            L::E => match self.rm_addr {
                Some(_) => self.memory_operand(size, access)?,
                None => {
                    let reg = X86Reg::gpr(rm_field | ctx.b_ext(), size, ctx.has_rex());
                    Operand::register(reg, size, access)
                }
            },
            L::M => match self.rm_addr {
                Some(_) => self.memory_operand(size, access)?,
                None => return Err(self.unknown()),
            },
            L::R => match self.rm_addr {
                Some(_) => return Err(self.unknown()),
                None => {
                    let reg = X86Reg::gpr(rm_field | ctx.b_ext(), size, ctx.has_rex());
                    Operand::register(reg, size, access)
                }
            },
            L::Rx => {
                let reg = X86Reg::gpr(rm_field | ctx.b_ext(), size, ctx.has_rex());
                Operand::register(reg, size, access)
            }
            L::G => {
                let reg = X86Reg::gpr(reg_field | ctx.r_ext(), size, ctx.has_rex());
                Operand::register(reg, size, access)
            }
            L::Op => {
                let num = (ctx.opcode & 7) | ctx.b_ext();
                Operand::register(X86Reg::gpr(num, size, ctx.has_rex()), size, access)
            }
            L::Acc => Operand::register(X86Reg::gpr(0, size, false), size, access),
            L::Fixed(reg) => Operand::register(reg, size, access),
            L::Seg => {
                let reg = X86Reg::segment(reg_field);
                if reg == X86Reg::Invalid {
                    return Err(self.unknown());
                }
                Operand::register(reg, size, access)
            }
            L::Cr => Operand::register(X86Reg::control(reg_field | ctx.r_ext()), size, access),
            L::Dr => Operand::register(X86Reg::debug(reg_field | ctx.r_ext()), size, access),
            L::Vr => {
                let hi = if ctx.enc == Enc::Evex && ctx.vex.r2 { 16 } else { 0 };
                let reg = X86Reg::vector(reg_field | ctx.r_ext() | hi, vec_bits(size));
                Operand::register(reg, reg.size(), access)
            }
            L::Wr | L::Ur => match self.rm_addr {
                Some(_) if spec.loc == L::Ur => return Err(self.unknown()),
                Some(_) => self.memory_operand(size, access)?,
                None => {
                    let hi = if ctx.enc == Enc::Evex && ctx.vex.x { 16 } else { 0 };
                    let reg = X86Reg::vector(rm_field | ctx.b_ext() | hi, vec_bits(size));
                    Operand::register(reg, reg.size(), access)
                }
            },
            L::Hr => {
                let reg = X86Reg::vector(ctx.vvvv(), vec_bits(size));
                Operand::register(reg, reg.size(), access)
            }
            L::Is4 => {
                let imm = self.cur.read_u8()?;
                self.ctx.imm8 = Some(imm);
                let mask = if self.ctx.is64() { 15 } else { 7 };
                let reg = X86Reg::vector((imm >> 4) & mask, vec_bits(size));
                Operand::register(reg, reg.size(), access)
            }
            L::P => Operand::register(X86Reg::mmx(reg_field), 64, access),
            L::Qm | L::N => match self.rm_addr {
                Some(_) if spec.loc == L::N => return Err(self.unknown()),
                Some(_) => self.memory_operand(size, access)?,
                None => Operand::register(X86Reg::mmx(rm_field), 64, access),
            },
            L::K => Operand::register(X86Reg::opmask(reg_field), size, access),
            L::Km => match self.rm_addr {
                Some(_) => self.memory_operand(size, access)?,
                None => Operand::register(X86Reg::opmask(rm_field), size, access),
            },
            L::Kv => Operand::register(X86Reg::opmask(ctx.vvvv()), size, access),
            L::Bg => Operand::register(X86Reg::gpr(ctx.vvvv(), size, true), size, access),
            L::St0 => Operand::register(X86Reg::St0, 80, access),
            L::Sti => Operand::register(X86Reg::st(rm_field), 80, access),
            L::One => Operand::immediate(1, 8),
            L::Imm => {
                let value = self.cur.read_unsigned(usize::from(size / 8))?;
                if size == 8 {
                    self.ctx.imm8 = Some(value as u8);
                }
                Operand::immediate(value as i64, size)
            }
            L::ImmSx => {
                let value = self.cur.read_signed(usize::from(size / 8))?;
                Operand::immediate(value, ctx.osz)
            }
            L::Rel => {
                let disp = self.cur.read_signed(usize::from(size / 8))?;
                let consumed = cur_len(self.cur, self.ctx) as u64;
                let mut target = self
                    .address
                    .wrapping_add(consumed)
                    .wrapping_add(disp as u64);
                if self.ctx.osz == 16 {
                    target &= 0xffff;
                } else if !self.ctx.is64() {
                    target &= 0xffff_ffff;
                }
                Operand::immediate(target as i64, self.ctx.osz)
            }
            L::Moffs => {
                let offset = self.cur.read_unsigned(usize::from(ctx.asz / 8))?;
                let mem = MemoryRef {
                    segment: ctx.segment.map_or(Register::Invalid, Register::from),
                    disp: offset as i64,
                    ..Default::default()
                };
                Operand::memory(mem, size, access)
            }
            L::FarPtr => {
                let osz = ctx.osz;
                let offset = self.cur.read_unsigned(if osz == 16 { 2 } else { 4 })?;
                let selector = self.cur.read_u16_le()?;
                out.push(Operand::immediate(i64::from(selector), 16));
                Operand::immediate(offset as i64, osz)
            }
            L::SrcStr => {
                let mem = MemoryRef {
                    segment: ctx.segment.map_or(Register::Invalid, Register::from),
                    base: X86Reg::gpr(6, ctx.asz, false).into(),
                    ..Default::default()
                };
                Operand::memory(mem, size, access)
            }
            L::DstStr => {
                let mem = MemoryRef {
                    segment: X86Reg::Es.into(),
                    base: X86Reg::gpr(7, ctx.asz, false).into(),
                    ..Default::default()
                };
                Operand::memory(mem, size, access)
            }
        };
        out.push(operand);
        Ok(())
    }

    /// The r/m memory operand, with EVEX broadcast and disp8*N applied.
    fn memory_operand(&mut self, size: u16, access: Access) -> DecodeResult<Operand> {
        let Some(RmAddr { mut mem, disp8 }) = self.rm_addr else {
            return Err(self.unknown());
        };
        let ctx = &mut *self.ctx;
        let mut size = size;
        let mut bcast = None;
        if ctx.enc == Enc::Evex && ctx.vex.bcst {
            let element = if self.entry.has(BCST64) { 64 } else { 32 };
            bcast = Some(AvxBroadcast::from_count(size / element).ok_or(
                DecodeError::UnknownOpcode { offset: ctx.start },
            )?);
            size = element;
        }
        if ctx.enc == Enc::Evex && disp8 {
            let scale = i64::from((size / 8).max(1));
            mem.disp *= scale;
            ctx.disp = mem.disp;
        }
        let mut op = Operand::memory(mem, size, access);
        op.avx_bcast = bcast;
        Ok(op)
    }
}

/// Resolve implicit register slots against the decode state.
pub fn implicit_registers(ctx: &X86Context, imps: &[Imp], out: &mut Vec<Register>) {
    for imp in imps {
        let reg = match *imp {
            Imp::R(reg) => reg,
            Imp::Ax => X86Reg::gpr(0, ctx.osz, false),
            Imp::Dx => X86Reg::gpr(2, ctx.osz, false),
            Imp::Cx => X86Reg::gpr(1, ctx.asz, false),
            Imp::Si => X86Reg::gpr(6, ctx.asz, false),
            Imp::Di => X86Reg::gpr(7, ctx.asz, false),
            Imp::Sp => X86Reg::gpr(4, ctx.mode_bits, false),
            Imp::Bp => X86Reg::gpr(5, ctx.mode_bits, false),
            Imp::Ip => X86Reg::ip(ctx.mode_bits),
            Imp::Flags => X86Reg::Eflags,
        };
        let reg = Register::from(reg);
        if !out.contains(&reg) {
            out.push(reg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::disassembler::DecodeErrorKind;
    use crate::core::instruction::OperandKind;
    use crate::disasm::x86::{matcher, prefix};

    fn operands_at(bytes: &[u8], mode: u16, address: u64) -> DecodeResult<(Vec<Operand>, usize)> {
        let mut cur = Cursor::new(bytes);
        let mut ctx = X86Context::new(0, mode);
        prefix::scan(&mut cur, &mut ctx)?;
        let entry = matcher::match_opcode(&mut cur, &mut ctx)?;
        let ops = decode(&mut cur, &mut ctx, entry, address)?;
        Ok((ops, cur.position()))
    }

    fn operands(bytes: &[u8], mode: u16) -> Vec<Operand> {
        operands_at(bytes, mode, 0).unwrap().0
    }

    fn reg(op: &Operand) -> X86Reg {
        match op.reg() {
            Some(Register::X86(r)) => r,
            other => panic!("not an x86 register: {other:?}"),
        }
    }

    #[test]
    fn test_register_forms() {
        // mov rbx, rax
        let ops = operands(&[0x48, 0x89, 0xc3], 64);
        assert_eq!(reg(&ops[0]), X86Reg::Rbx);
        assert_eq!(reg(&ops[1]), X86Reg::Rax);
        assert_eq!(ops[0].access, Access::Write);
        assert_eq!(ops[0].size, 64);

        // mov r9d, r10d with REX.RB
        let ops = operands(&[0x45, 0x89, 0xd1], 64);
        assert_eq!(reg(&ops[0]), X86Reg::R9d);
        assert_eq!(reg(&ops[1]), X86Reg::R10d);

        // mov spl, al needs REX to reach spl
        let ops = operands(&[0x40, 0x88, 0xc4], 64);
        assert_eq!(reg(&ops[0]), X86Reg::Spl);
        let ops = operands(&[0x88, 0xc4], 64);
        assert_eq!(reg(&ops[0]), X86Reg::Ah);
    }

    #[test]
    fn test_sib_addressing() {
        // mov eax, [rbx + rcx*4 + 0x10]
        let (ops, len) = operands_at(&[0x8b, 0x44, 0x8b, 0x10], 64, 0).unwrap();
        assert_eq!(len, 4);
        let mem = ops[1].mem().unwrap();
        assert_eq!(mem.base, X86Reg::Rbx.into());
        assert_eq!(mem.index, X86Reg::Rcx.into());
        assert_eq!(mem.scale, 4);
        assert_eq!(mem.disp, 0x10);
        assert_eq!(ops[1].size, 32);

        // mov eax, [rsp]: SIB with no index
        let ops = operands(&[0x8b, 0x04, 0x24], 64);
        let mem = ops[1].mem().unwrap();
        assert_eq!(mem.base, X86Reg::Rsp.into());
        assert_eq!(mem.index, Register::Invalid);
        assert_eq!(mem.scale, 1);

        // mov eax, [rcx*2 + 0x100]: no base, disp32
        let ops = operands(&[0x8b, 0x04, 0x4d, 0x00, 0x01, 0x00, 0x00], 64);
        let mem = ops[1].mem().unwrap();
        assert_eq!(mem.base, Register::Invalid);
        assert_eq!(mem.index, X86Reg::Rcx.into());
        assert_eq!(mem.disp, 0x100);
    }

    #[test]
    fn test_rip_relative_and_absolute() {
        let ops = operands(&[0x8b, 0x05, 0x10, 0x00, 0x00, 0x00], 64);
        let mem = ops[1].mem().unwrap();
        assert_eq!(mem.base, X86Reg::Rip.into());
        assert_eq!(mem.disp, 0x10);

        let ops = operands(&[0x8b, 0x05, 0x10, 0x00, 0x00, 0x00], 32);
        let mem = ops[1].mem().unwrap();
        assert_eq!(mem.base, Register::Invalid);
        assert_eq!(mem.disp, 0x10);
    }

    #[test]
    fn test_16bit_addressing() {
        // mov ax, [bp + di - 2]
        let ops = operands(&[0x8b, 0x43, 0xfe], 16);
        let mem = ops[1].mem().unwrap();
        assert_eq!(mem.base, X86Reg::Bp.into());
        assert_eq!(mem.index, X86Reg::Di.into());
        assert_eq!(mem.disp, -2);
        assert_eq!(reg(&ops[0]), X86Reg::Ax);

        // mov ax, [0x1234]
        let ops = operands(&[0x8b, 0x06, 0x34, 0x12], 16);
        let mem = ops[1].mem().unwrap();
        assert_eq!(mem.base, Register::Invalid);
        assert_eq!(mem.disp, 0x1234);
    }

    #[test]
    fn test_immediates() {
        // add eax, -1 (sign-extended imm8)
        let ops = operands(&[0x83, 0xc0, 0xff], 64);
        assert_eq!(ops[1].imm(), Some(-1));
        assert_eq!(ops[1].size, 32);

        // movabs rax, imm64
        let ops = operands(&[0x48, 0xb8, 1, 2, 3, 4, 5, 6, 7, 8], 64);
        assert_eq!(ops[1].imm(), Some(0x0807060504030201));
        assert_eq!(ops[1].size, 64);
    }

    #[test]
    fn test_relative_targets() {
        // jmp +2 at 0x1000
        let (ops, _) = operands_at(&[0xeb, 0x02], 64, 0x1000).unwrap();
        assert_eq!(ops[0].imm(), Some(0x1004));
        // call -5 at 0x1000 targets itself
        let (ops, _) = operands_at(&[0xe8, 0xfb, 0xff, 0xff, 0xff], 64, 0x1000).unwrap();
        assert_eq!(ops[0].imm(), Some(0x1000));
        // wraps to 32 bits outside long mode
        let (ops, _) = operands_at(&[0xeb, 0xfc], 32, 0).unwrap();
        assert_eq!(ops[0].imm(), Some(0xffff_fffe));
    }

    #[test]
    fn test_truncated_immediate() {
        let err = operands_at(&[0xb8, 0x01, 0x02], 32, 0).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TruncatedOperand);
        let err = operands_at(&[0x8b, 0x44, 0x8b], 64, 0).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TruncatedOperand);
    }

    #[test]
    fn test_overlong_instruction() {
        let mut bytes = vec![0x66; 11];
        bytes.extend_from_slice(&[0x81, 0x84, 0x24, 0, 0, 0, 0, 1, 2]);
        let err = operands_at(&bytes, 64, 0).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::ExcessivePrefixes);
    }

    #[test]
    fn test_string_operands() {
        // movsb
        let ops = operands(&[0xa4], 64);
        let dst = ops[0].mem().unwrap();
        assert_eq!(dst.segment, X86Reg::Es.into());
        assert_eq!(dst.base, X86Reg::Rdi.into());
        let src = ops[1].mem().unwrap();
        assert_eq!(src.base, X86Reg::Rsi.into());
        assert_eq!(src.segment, Register::Invalid);
    }

    #[test]
    fn test_far_pointer() {
        // ljmp 0x10:0x1000 in 32-bit mode
        let ops = operands(&[0xea, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00], 32);
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].imm(), Some(0x10));
        assert_eq!(ops[1].imm(), Some(0x1000));
    }

    #[test]
    fn test_evex_decorations() {
        // vaddps zmm0 {k1}{z}, zmm1, zmm2
        let ops = operands(&[0x62, 0xf1, 0x74, 0xc9, 0x58, 0xc2], 64);
        assert_eq!(reg(&ops[0]), X86Reg::Zmm0);
        assert_eq!(ops[0].mask, X86Reg::K1.into());
        assert!(ops[0].avx_zero_opmask);
        assert_eq!(reg(&ops[1]), X86Reg::Zmm1);
        assert_eq!(reg(&ops[2]), X86Reg::Zmm2);

        // vaddps zmm0, zmm1, dword ptr [rax]{1to16}
        let ops = operands(&[0x62, 0xf1, 0x74, 0x58, 0x58, 0x00], 64);
        assert_eq!(ops[2].avx_bcast, Some(AvxBroadcast::OneTo16));
        assert_eq!(ops[2].size, 32);

        // vaddps zmm0, zmm1, [rax + 0x40]: disp8 scaled by 64
        let ops = operands(&[0x62, 0xf1, 0x74, 0x48, 0x58, 0x40, 0x01], 64);
        assert_eq!(ops[2].mem().unwrap().disp, 0x40);
        assert!(matches!(ops[2].kind, OperandKind::Memory(_)));
    }

    #[test]
    fn test_implicit_registers() {
        let mut ctx = X86Context::new(0, 64);
        ctx.osz = 32;
        ctx.asz = 64;
        let mut regs = Vec::new();
        implicit_registers(&ctx, &[Imp::Ax, Imp::Cx, Imp::Sp, Imp::Sp], &mut regs);
        assert_eq!(
            regs,
            vec![
                Register::from(X86Reg::Eax),
                X86Reg::Rcx.into(),
                X86Reg::Rsp.into()
            ]
        );
    }
}
