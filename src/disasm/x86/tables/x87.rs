//! x87 escape opcodes `D8`..`DF`.
//!
//! Memory forms are selected by ModRM.reg; register forms either by
//! ModRM.reg with `st(i)` in r/m, or by the full ModRM byte.

use super::*;
use crate::core::group::Group as Gr;
use crate::core::x86::flags::sets::*;
use crate::core::x86::X86Mnemonic as I;
use crate::core::x86::X86Reg as Rg;
use L::*;
use S::*;

const FPU: &[Gr] = &[Gr::Fpu];

/// Memory form `/reg`.
const fn fm(opcode: u8, reg: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    op(opcode, m, ops).ext(reg).mem().groups(FPU)
}

/// Register form `/reg` with `st(i)` in r/m.
const fn fr(opcode: u8, reg: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    op(opcode, m, ops).ext(reg).reg_form().groups(FPU)
}

/// Register form matched on the whole ModRM byte.
const fn fx(opcode: u8, modrm: u8, m: X86Mnemonic) -> Entry {
    op(opcode, m, &[]).modrm(modrm).groups(FPU)
}

const M32: &[OpSpec] = &[r(M, D)];
const M64: &[OpSpec] = &[r(M, Q)];
const M16: &[OpSpec] = &[r(M, W)];
const ST0_STI: &[OpSpec] = &[rw(St0, T), r(Sti, T)];
const STI_ST0: &[OpSpec] = &[rw(Sti, T), r(St0, T)];
const CMP_STI: &[OpSpec] = &[r(Sti, T)];
const FCMOV: &[OpSpec] = &[w(St0, T), r(Sti, T)];
const FCOMI_OPS: &[OpSpec] = &[r(St0, T), r(Sti, T)];

pub static TABLE: &[Entry] = &[
    // D8
    fm(0xd8, 0, I::Fadd, M32),
    fm(0xd8, 1, I::Fmul, M32),
    fm(0xd8, 2, I::Fcom, M32),
    fm(0xd8, 3, I::Fcomp, M32),
    fm(0xd8, 4, I::Fsub, M32),
    fm(0xd8, 5, I::Fsubr, M32),
    fm(0xd8, 6, I::Fdiv, M32),
    fm(0xd8, 7, I::Fdivr, M32),
    fr(0xd8, 0, I::Fadd, ST0_STI),
    fr(0xd8, 1, I::Fmul, ST0_STI),
    fr(0xd8, 2, I::Fcom, CMP_STI),
    fr(0xd8, 3, I::Fcomp, CMP_STI),
    fr(0xd8, 4, I::Fsub, ST0_STI),
    fr(0xd8, 5, I::Fsubr, ST0_STI),
    fr(0xd8, 6, I::Fdiv, ST0_STI),
    fr(0xd8, 7, I::Fdivr, ST0_STI),
    // D9
    fm(0xd9, 0, I::Fld, M32),
    fm(0xd9, 2, I::Fst, &[w(M, D)]),
    fm(0xd9, 3, I::Fstp, &[w(M, D)]),
    fm(0xd9, 4, I::Fldenv, &[r(M, Bits(0))]),
    fm(0xd9, 5, I::Fldcw, M16),
    fm(0xd9, 6, I::Fnstenv, &[w(M, Bits(0))]),
    fm(0xd9, 7, I::Fnstcw, &[w(M, W)]),
    fr(0xd9, 0, I::Fld, &[r(Sti, T)]),
    fr(0xd9, 1, I::Fxch, &[rw(Sti, T)]),
    fx(0xd9, 0xd0, I::Fnop),
    fx(0xd9, 0xe0, I::Fchs),
    fx(0xd9, 0xe1, I::Fabs),
    fx(0xd9, 0xe4, I::Ftst),
    fx(0xd9, 0xe5, I::Fxam),
    fx(0xd9, 0xe8, I::Fld1),
    fx(0xd9, 0xe9, I::Fldl2t),
    fx(0xd9, 0xea, I::Fldl2e),
    fx(0xd9, 0xeb, I::Fldpi),
    fx(0xd9, 0xec, I::Fldlg2),
    fx(0xd9, 0xed, I::Fldln2),
    fx(0xd9, 0xee, I::Fldz),
    fx(0xd9, 0xf0, I::F2xm1),
    fx(0xd9, 0xf1, I::Fyl2x),
    fx(0xd9, 0xf2, I::Fptan),
    fx(0xd9, 0xf3, I::Fpatan),
    fx(0xd9, 0xf4, I::Fxtract),
    fx(0xd9, 0xf5, I::Fprem1),
    fx(0xd9, 0xf6, I::Fdecstp),
    fx(0xd9, 0xf7, I::Fincstp),
    fx(0xd9, 0xf8, I::Fprem),
    fx(0xd9, 0xf9, I::Fyl2xp1),
    fx(0xd9, 0xfa, I::Fsqrt),
    fx(0xd9, 0xfb, I::Fsincos),
    fx(0xd9, 0xfc, I::Frndint),
    fx(0xd9, 0xfd, I::Fscale),
    fx(0xd9, 0xfe, I::Fsin),
    fx(0xd9, 0xff, I::Fcos),
    // DA
    fm(0xda, 0, I::Fiadd, M32),
    fm(0xda, 1, I::Fimul, M32),
    fm(0xda, 2, I::Ficom, M32),
    fm(0xda, 3, I::Ficomp, M32),
    fm(0xda, 4, I::Fisub, M32),
    fm(0xda, 5, I::Fisubr, M32),
    fm(0xda, 6, I::Fidiv, M32),
    fm(0xda, 7, I::Fidivr, M32),
    fr(0xda, 0, I::Fcmovb, FCMOV).flags(FCMOV_B),
    fr(0xda, 1, I::Fcmove, FCMOV).flags(FCMOV_E),
    fr(0xda, 2, I::Fcmovbe, FCMOV).flags(FCMOV_BE),
    fr(0xda, 3, I::Fcmovu, FCMOV).flags(FCMOV_U),
    fx(0xda, 0xe9, I::Fucompp),
    // DB
    fm(0xdb, 0, I::Fild, M32),
    fm(0xdb, 1, I::Fisttp, &[w(M, D)]),
    fm(0xdb, 2, I::Fist, &[w(M, D)]),
    fm(0xdb, 3, I::Fistp, &[w(M, D)]),
    fm(0xdb, 5, I::Fld, &[r(M, T)]),
    fm(0xdb, 7, I::Fstp, &[w(M, T)]),
    fr(0xdb, 0, I::Fcmovnb, FCMOV).flags(FCMOV_B),
    fr(0xdb, 1, I::Fcmovne, FCMOV).flags(FCMOV_E),
    fr(0xdb, 2, I::Fcmovnbe, FCMOV).flags(FCMOV_BE),
    fr(0xdb, 3, I::Fcmovnu, FCMOV).flags(FCMOV_U),
    fx(0xdb, 0xe2, I::Fnclex),
    fx(0xdb, 0xe3, I::Fninit),
    fr(0xdb, 5, I::Fucomi, FCOMI_OPS).flags(FCOMI),
    fr(0xdb, 6, I::Fcomi, FCOMI_OPS).flags(FCOMI),
    // DC
    fm(0xdc, 0, I::Fadd, M64),
    fm(0xdc, 1, I::Fmul, M64),
    fm(0xdc, 2, I::Fcom, M64),
    fm(0xdc, 3, I::Fcomp, M64),
    fm(0xdc, 4, I::Fsub, M64),
    fm(0xdc, 5, I::Fsubr, M64),
    fm(0xdc, 6, I::Fdiv, M64),
    fm(0xdc, 7, I::Fdivr, M64),
    fr(0xdc, 0, I::Fadd, STI_ST0),
    fr(0xdc, 1, I::Fmul, STI_ST0),
    fr(0xdc, 4, I::Fsubr, STI_ST0),
    fr(0xdc, 5, I::Fsub, STI_ST0),
    fr(0xdc, 6, I::Fdivr, STI_ST0),
    fr(0xdc, 7, I::Fdiv, STI_ST0),
    // DD
    fm(0xdd, 0, I::Fld, M64),
    fm(0xdd, 1, I::Fisttp, &[w(M, Q)]),
    fm(0xdd, 2, I::Fst, &[w(M, Q)]),
    fm(0xdd, 3, I::Fstp, &[w(M, Q)]),
    fm(0xdd, 4, I::Frstor, &[r(M, Bits(0))]),
    fm(0xdd, 6, I::Fnsave, &[w(M, Bits(0))]),
    fm(0xdd, 7, I::Fnstsw, &[w(M, W)]),
    fr(0xdd, 0, I::Ffree, &[r(Sti, T)]),
    fr(0xdd, 2, I::Fst, &[w(Sti, T)]),
    fr(0xdd, 3, I::Fstp, &[w(Sti, T)]),
    fr(0xdd, 4, I::Fucom, CMP_STI),
    fr(0xdd, 5, I::Fucomp, CMP_STI),
    // DE
    fm(0xde, 0, I::Fiadd, M16),
    fm(0xde, 1, I::Fimul, M16),
    fm(0xde, 2, I::Ficom, M16),
    fm(0xde, 3, I::Ficomp, M16),
    fm(0xde, 4, I::Fisub, M16),
    fm(0xde, 5, I::Fisubr, M16),
    fm(0xde, 6, I::Fidiv, M16),
    fm(0xde, 7, I::Fidivr, M16),
    fr(0xde, 0, I::Faddp, STI_ST0),
    fr(0xde, 1, I::Fmulp, STI_ST0),
    fx(0xde, 0xd9, I::Fcompp),
    fr(0xde, 4, I::Fsubrp, STI_ST0),
    fr(0xde, 5, I::Fsubp, STI_ST0),
    fr(0xde, 6, I::Fdivrp, STI_ST0),
    fr(0xde, 7, I::Fdivp, STI_ST0),
    // DF
    fm(0xdf, 0, I::Fild, M16),
    fm(0xdf, 1, I::Fisttp, &[w(M, W)]),
    fm(0xdf, 2, I::Fist, &[w(M, W)]),
    fm(0xdf, 3, I::Fistp, &[w(M, W)]),
    fm(0xdf, 4, I::Fbld, &[r(M, T)]),
    fm(0xdf, 5, I::Fild, M64),
    fm(0xdf, 6, I::Fbstp, &[w(M, T)]),
    fm(0xdf, 7, I::Fistp, &[w(M, Q)]),
    op(0xdf, I::Fnstsw, &[w(Fixed(Rg::Ax), W)]).modrm(0xe0).groups(FPU),
    fr(0xdf, 5, I::Fucomip, FCOMI_OPS).flags(FCOMI),
    fr(0xdf, 6, I::Fcomip, FCOMI_OPS).flags(FCOMI),
];
