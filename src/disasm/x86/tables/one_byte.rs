//! Primary opcode map (one-byte opcodes).

use super::*;
use crate::core::group::Group as Gr;
use crate::core::x86::flags::sets::*;
use crate::core::x86::X86Mnemonic as I;
use crate::core::x86::X86Reg as Rg;
use L::*;
use S::*;

const SP: &[Imp] = &[Imp::Sp];
const SP_IP: &[Imp] = &[Imp::Sp, Imp::Ip];
const SP_BP: &[Imp] = &[Imp::Sp, Imp::Bp];
const SI: &[Imp] = &[Imp::Si];
const DI: &[Imp] = &[Imp::Di];
const SI_DI: &[Imp] = &[Imp::Si, Imp::Di];
const CX: &[Imp] = &[Imp::Cx];
const AX: &[Imp] = &[Imp::Ax];
const AX_DX: &[Imp] = &[Imp::Ax, Imp::Dx];
const AL: &[Imp] = &[Imp::R(Rg::Al)];
const AH: &[Imp] = &[Imp::R(Rg::Ah)];
const AX16: &[Imp] = &[Imp::R(Rg::Ax)];

const JUMP: &[Gr] = &[Gr::Jump];
const CALL: &[Gr] = &[Gr::Call];
const RET: &[Gr] = &[Gr::Ret];
const INTR: &[Gr] = &[Gr::Int];
const PRIV: &[Gr] = &[Gr::Privilege];

pub static TABLE: &[Entry] = &[
    // ALU block 00..3F
    op(0x00, I::Add, &[rw(E, B), r(G, B)]).flags(ARITH),
    op(0x01, I::Add, &[rw(E, V), r(G, V)]).flags(ARITH),
    op(0x02, I::Add, &[rw(G, B), r(E, B)]).flags(ARITH),
    op(0x03, I::Add, &[rw(G, V), r(E, V)]).flags(ARITH),
    op(0x04, I::Add, &[rw(Acc, B), r(Imm, B)]).flags(ARITH),
    op(0x05, I::Add, &[rw(Acc, V), r(ImmSx, Z)]).flags(ARITH),
    op(0x06, I::Push, &[r(Fixed(Rg::Es), W)]).not64().reads(SP).writes(SP),
    op(0x07, I::Pop, &[w(Fixed(Rg::Es), W)]).not64().reads(SP).writes(SP),
    op(0x08, I::Or, &[rw(E, B), r(G, B)]).flags(LOGIC),
    op(0x09, I::Or, &[rw(E, V), r(G, V)]).flags(LOGIC),
    op(0x0a, I::Or, &[rw(G, B), r(E, B)]).flags(LOGIC),
    op(0x0b, I::Or, &[rw(G, V), r(E, V)]).flags(LOGIC),
    op(0x0c, I::Or, &[rw(Acc, B), r(Imm, B)]).flags(LOGIC),
    op(0x0d, I::Or, &[rw(Acc, V), r(ImmSx, Z)]).flags(LOGIC),
    op(0x0e, I::Push, &[r(Fixed(Rg::Cs), W)]).not64().reads(SP).writes(SP),
    op(0x10, I::Adc, &[rw(E, B), r(G, B)]).flags(ARITH_CARRY),
    op(0x11, I::Adc, &[rw(E, V), r(G, V)]).flags(ARITH_CARRY),
    op(0x12, I::Adc, &[rw(G, B), r(E, B)]).flags(ARITH_CARRY),
    op(0x13, I::Adc, &[rw(G, V), r(E, V)]).flags(ARITH_CARRY),
    op(0x14, I::Adc, &[rw(Acc, B), r(Imm, B)]).flags(ARITH_CARRY),
    op(0x15, I::Adc, &[rw(Acc, V), r(ImmSx, Z)]).flags(ARITH_CARRY),
    op(0x16, I::Push, &[r(Fixed(Rg::Ss), W)]).not64().reads(SP).writes(SP),
    op(0x17, I::Pop, &[w(Fixed(Rg::Ss), W)]).not64().reads(SP).writes(SP),
    op(0x18, I::Sbb, &[rw(E, B), r(G, B)]).flags(ARITH_CARRY),
    op(0x19, I::Sbb, &[rw(E, V), r(G, V)]).flags(ARITH_CARRY),
    op(0x1a, I::Sbb, &[rw(G, B), r(E, B)]).flags(ARITH_CARRY),
    op(0x1b, I::Sbb, &[rw(G, V), r(E, V)]).flags(ARITH_CARRY),
    op(0x1c, I::Sbb, &[rw(Acc, B), r(Imm, B)]).flags(ARITH_CARRY),
    op(0x1d, I::Sbb, &[rw(Acc, V), r(ImmSx, Z)]).flags(ARITH_CARRY),
    op(0x1e, I::Push, &[r(Fixed(Rg::Ds), W)]).not64().reads(SP).writes(SP),
    op(0x1f, I::Pop, &[w(Fixed(Rg::Ds), W)]).not64().reads(SP).writes(SP),
    op(0x20, I::And, &[rw(E, B), r(G, B)]).flags(LOGIC),
    op(0x21, I::And, &[rw(E, V), r(G, V)]).flags(LOGIC),
    op(0x22, I::And, &[rw(G, B), r(E, B)]).flags(LOGIC),
    op(0x23, I::And, &[rw(G, V), r(E, V)]).flags(LOGIC),
    op(0x24, I::And, &[rw(Acc, B), r(Imm, B)]).flags(LOGIC),
    op(0x25, I::And, &[rw(Acc, V), r(ImmSx, Z)]).flags(LOGIC),
    op(0x27, I::Daa, &[]).not64().flags(DECIMAL).reads(AL).writes(AL),
    op(0x28, I::Sub, &[rw(E, B), r(G, B)]).flags(ARITH),
    op(0x29, I::Sub, &[rw(E, V), r(G, V)]).flags(ARITH),
    op(0x2a, I::Sub, &[rw(G, B), r(E, B)]).flags(ARITH),
    op(0x2b, I::Sub, &[rw(G, V), r(E, V)]).flags(ARITH),
    op(0x2c, I::Sub, &[rw(Acc, B), r(Imm, B)]).flags(ARITH),
    op(0x2d, I::Sub, &[rw(Acc, V), r(ImmSx, Z)]).flags(ARITH),
    op(0x2f, I::Das, &[]).not64().flags(DECIMAL).reads(AL).writes(AL),
    op(0x30, I::Xor, &[rw(E, B), r(G, B)]).flags(LOGIC),
    op(0x31, I::Xor, &[rw(E, V), r(G, V)]).flags(LOGIC),
    op(0x32, I::Xor, &[rw(G, B), r(E, B)]).flags(LOGIC),
    op(0x33, I::Xor, &[rw(G, V), r(E, V)]).flags(LOGIC),
    op(0x34, I::Xor, &[rw(Acc, B), r(Imm, B)]).flags(LOGIC),
    op(0x35, I::Xor, &[rw(Acc, V), r(ImmSx, Z)]).flags(LOGIC),
    op(0x37, I::Aaa, &[]).not64().flags(ASCII_ADJUST).reads(AL).writes(AX16),
    op(0x38, I::Cmp, &[r(E, B), r(G, B)]).flags(ARITH),
    op(0x39, I::Cmp, &[r(E, V), r(G, V)]).flags(ARITH),
    op(0x3a, I::Cmp, &[r(G, B), r(E, B)]).flags(ARITH),
    op(0x3b, I::Cmp, &[r(G, V), r(E, V)]).flags(ARITH),
    op(0x3c, I::Cmp, &[r(Acc, B), r(Imm, B)]).flags(ARITH),
    op(0x3d, I::Cmp, &[r(Acc, V), r(ImmSx, Z)]).flags(ARITH),
    op(0x3f, I::Aas, &[]).not64().flags(ASCII_ADJUST).reads(AL).writes(AX16),
    // 40..5F
    op(0x40, I::Inc, &[rw(Op, V)]).plus_r().not64().flags(INCDEC),
    op(0x48, I::Dec, &[rw(Op, V)]).plus_r().not64().flags(INCDEC),
    op(0x50, I::Push, &[r(Op, V)]).plus_r().attrs(DEF64).reads(SP).writes(SP),
    op(0x58, I::Pop, &[w(Op, V)]).plus_r().attrs(DEF64).reads(SP).writes(SP),
    // 60..6F
    op(0x60, I::Pushal, &[])
        .not64()
        .alt_osz([I::Pushaw, I::Pushal, I::Pushal])
        .reads(SP)
        .writes(SP),
    op(0x61, I::Popal, &[])
        .not64()
        .alt_osz([I::Popaw, I::Popal, I::Popal])
        .reads(SP)
        .writes(SP),
    op(0x62, I::Bound, &[r(G, V), r(M, V)]).mem().not64(),
    op(0x63, I::Arpl, &[rw(E, W), r(G, W)]).not64().flags(ZF_ONLY),
    op(0x63, I::Movsxd, &[w(G, V), r(E, D)]).only64(),
    op(0x68, I::Push, &[r(ImmSx, Z)]).attrs(DEF64).reads(SP).writes(SP),
    op(0x69, I::Imul, &[w(G, V), r(E, V), r(ImmSx, Z)]).flags(MUL),
    op(0x6a, I::Push, &[r(ImmSx, B)]).attrs(DEF64).reads(SP).writes(SP),
    op(0x6b, I::Imul, &[w(G, V), r(E, V), r(ImmSx, B)]).flags(MUL),
    op(0x6c, I::Insb, &[w(DstStr, B), r(Fixed(Rg::Dx), W)])
        .attrs(REP)
        .flags(STRING)
        .reads(DI)
        .writes(DI),
    op(0x6d, I::Insd, &[w(DstStr, Z), r(Fixed(Rg::Dx), W)])
        .alt_osz([I::Insw, I::Insd, I::Insd])
        .attrs(REP)
        .flags(STRING)
        .reads(DI)
        .writes(DI),
    op(0x6e, I::Outsb, &[r(Fixed(Rg::Dx), W), r(SrcStr, B)])
        .attrs(REP)
        .flags(STRING)
        .reads(SI)
        .writes(SI),
    op(0x6f, I::Outsd, &[r(Fixed(Rg::Dx), W), r(SrcStr, Z)])
        .alt_osz([I::Outsw, I::Outsd, I::Outsd])
        .attrs(REP)
        .flags(STRING)
        .reads(SI)
        .writes(SI),
    // Group 1
    op(0x80, I::Add, &[rw(E, B), r(Imm, B)]).ext(0).flags(ARITH),
    op(0x80, I::Or, &[rw(E, B), r(Imm, B)]).ext(1).flags(LOGIC),
    op(0x80, I::Adc, &[rw(E, B), r(Imm, B)]).ext(2).flags(ARITH_CARRY),
    op(0x80, I::Sbb, &[rw(E, B), r(Imm, B)]).ext(3).flags(ARITH_CARRY),
    op(0x80, I::And, &[rw(E, B), r(Imm, B)]).ext(4).flags(LOGIC),
    op(0x80, I::Sub, &[rw(E, B), r(Imm, B)]).ext(5).flags(ARITH),
    op(0x80, I::Xor, &[rw(E, B), r(Imm, B)]).ext(6).flags(LOGIC),
    op(0x80, I::Cmp, &[r(E, B), r(Imm, B)]).ext(7).flags(ARITH),
    op(0x81, I::Add, &[rw(E, V), r(ImmSx, Z)]).ext(0).flags(ARITH),
    op(0x81, I::Or, &[rw(E, V), r(ImmSx, Z)]).ext(1).flags(LOGIC),
    op(0x81, I::Adc, &[rw(E, V), r(ImmSx, Z)]).ext(2).flags(ARITH_CARRY),
    op(0x81, I::Sbb, &[rw(E, V), r(ImmSx, Z)]).ext(3).flags(ARITH_CARRY),
    op(0x81, I::And, &[rw(E, V), r(ImmSx, Z)]).ext(4).flags(LOGIC),
    op(0x81, I::Sub, &[rw(E, V), r(ImmSx, Z)]).ext(5).flags(ARITH),
    op(0x81, I::Xor, &[rw(E, V), r(ImmSx, Z)]).ext(6).flags(LOGIC),
    op(0x81, I::Cmp, &[r(E, V), r(ImmSx, Z)]).ext(7).flags(ARITH),
    op(0x82, I::Add, &[rw(E, B), r(Imm, B)]).ext(0).not64().flags(ARITH),
    op(0x82, I::Or, &[rw(E, B), r(Imm, B)]).ext(1).not64().flags(LOGIC),
    op(0x82, I::Adc, &[rw(E, B), r(Imm, B)]).ext(2).not64().flags(ARITH_CARRY),
    op(0x82, I::Sbb, &[rw(E, B), r(Imm, B)]).ext(3).not64().flags(ARITH_CARRY),
    op(0x82, I::And, &[rw(E, B), r(Imm, B)]).ext(4).not64().flags(LOGIC),
    op(0x82, I::Sub, &[rw(E, B), r(Imm, B)]).ext(5).not64().flags(ARITH),
    op(0x82, I::Xor, &[rw(E, B), r(Imm, B)]).ext(6).not64().flags(LOGIC),
    op(0x82, I::Cmp, &[r(E, B), r(Imm, B)]).ext(7).not64().flags(ARITH),
    op(0x83, I::Add, &[rw(E, V), r(ImmSx, B)]).ext(0).flags(ARITH),
    op(0x83, I::Or, &[rw(E, V), r(ImmSx, B)]).ext(1).flags(LOGIC),
    op(0x83, I::Adc, &[rw(E, V), r(ImmSx, B)]).ext(2).flags(ARITH_CARRY),
    op(0x83, I::Sbb, &[rw(E, V), r(ImmSx, B)]).ext(3).flags(ARITH_CARRY),
    op(0x83, I::And, &[rw(E, V), r(ImmSx, B)]).ext(4).flags(LOGIC),
    op(0x83, I::Sub, &[rw(E, V), r(ImmSx, B)]).ext(5).flags(ARITH),
    op(0x83, I::Xor, &[rw(E, V), r(ImmSx, B)]).ext(6).flags(LOGIC),
    op(0x83, I::Cmp, &[r(E, V), r(ImmSx, B)]).ext(7).flags(ARITH),
    // 84..8F
    op(0x84, I::Test, &[r(E, B), r(G, B)]).flags(LOGIC),
    op(0x85, I::Test, &[r(E, V), r(G, V)]).flags(LOGIC),
    op(0x86, I::Xchg, &[rw(E, B), rw(G, B)]),
    op(0x87, I::Xchg, &[rw(E, V), rw(G, V)]),
    op(0x88, I::Mov, &[w(E, B), r(G, B)]),
    op(0x89, I::Mov, &[w(E, V), r(G, V)]),
    op(0x8a, I::Mov, &[w(G, B), r(E, B)]),
    op(0x8b, I::Mov, &[w(G, V), r(E, V)]),
    op(0x8c, I::Mov, &[w(M, W), r(Seg, W)]).mem(),
    op(0x8c, I::Mov, &[w(R, V), r(Seg, W)]).reg_form(),
    op(0x8d, I::Lea, &[w(G, V), n(M, Bits(0))]).mem(),
    op(0x8e, I::Mov, &[w(Seg, W), r(E, W)]),
    op(0x8f, I::Pop, &[w(E, V)]).ext(0).attrs(DEF64).reads(SP).writes(SP),
    // 90..9F
    op(0x90, I::Nop, &[]).no_rex_b(),
    op(0x90, I::Pause, &[]).pfx(Pfx::F3).no_rex_b(),
    op(0x90, I::Xchg, &[rw(Op, V), rw(Acc, V)]).plus_r(),
    op(0x98, I::Cwde, &[])
        .alt_osz([I::Cbw, I::Cwde, I::Cdqe])
        .reads(AX)
        .writes(AX),
    op(0x99, I::Cdq, &[])
        .alt_osz([I::Cwd, I::Cdq, I::Cqo])
        .reads(AX)
        .writes(&[Imp::Dx]),
    op(0x9a, I::Lcall, &[r(FarPtr, Bits(0))])
        .not64()
        .groups(CALL)
        .reads(SP)
        .writes(SP),
    op(0x9b, I::Wait, &[]),
    op(0x9c, I::Pushfd, &[])
        .alt_osz([I::Pushf, I::Pushfd, I::Pushfq])
        .attrs(DEF64)
        .flags(ALL_TEST)
        .reads(SP)
        .writes(SP),
    op(0x9d, I::Popfd, &[])
        .alt_osz([I::Popf, I::Popfd, I::Popfq])
        .attrs(DEF64)
        .flags(ALL_PRIOR)
        .reads(SP)
        .writes(SP),
    op(0x9e, I::Sahf, &[]).flags(SAHF).reads(AH),
    op(0x9f, I::Lahf, &[]).flags(ALL_TEST).writes(AH),
    // A0..AF
    op(0xa0, I::Mov, &[w(Acc, B), r(Moffs, B)]).not64(),
    op(0xa1, I::Mov, &[w(Acc, V), r(Moffs, V)]).not64(),
    op(0xa2, I::Mov, &[w(Moffs, B), r(Acc, B)]).not64(),
    op(0xa3, I::Mov, &[w(Moffs, V), r(Acc, V)]).not64(),
    op(0xa0, I::Movabs, &[w(Acc, B), r(Moffs, B)]).only64(),
    op(0xa1, I::Movabs, &[w(Acc, V), r(Moffs, V)]).only64(),
    op(0xa2, I::Movabs, &[w(Moffs, B), r(Acc, B)]).only64(),
    op(0xa3, I::Movabs, &[w(Moffs, V), r(Acc, V)]).only64(),
    op(0xa4, I::Movsb, &[w(DstStr, B), r(SrcStr, B)])
        .attrs(REP)
        .flags(STRING)
        .reads(SI_DI)
        .writes(SI_DI),
    op(0xa5, I::Movsd, &[w(DstStr, V), r(SrcStr, V)])
        .alt_osz([I::Movsw, I::Movsd, I::Movsq])
        .attrs(REP)
        .flags(STRING)
        .reads(SI_DI)
        .writes(SI_DI),
    op(0xa6, I::Cmpsb, &[r(SrcStr, B), r(DstStr, B)])
        .attrs(REP)
        .flags(STRING_CMP)
        .reads(SI_DI)
        .writes(SI_DI),
    op(0xa7, I::Cmpsd, &[r(SrcStr, V), r(DstStr, V)])
        .alt_osz([I::Cmpsw, I::Cmpsd, I::Cmpsq])
        .attrs(REP)
        .flags(STRING_CMP)
        .reads(SI_DI)
        .writes(SI_DI),
    op(0xa8, I::Test, &[r(Acc, B), r(Imm, B)]).flags(LOGIC),
    op(0xa9, I::Test, &[r(Acc, V), r(ImmSx, Z)]).flags(LOGIC),
    op(0xaa, I::Stosb, &[w(DstStr, B), r(Acc, B)])
        .attrs(REP)
        .flags(STRING)
        .reads(DI)
        .writes(DI),
    op(0xab, I::Stosd, &[w(DstStr, V), r(Acc, V)])
        .alt_osz([I::Stosw, I::Stosd, I::Stosq])
        .attrs(REP)
        .flags(STRING)
        .reads(DI)
        .writes(DI),
    op(0xac, I::Lodsb, &[w(Acc, B), r(SrcStr, B)])
        .attrs(REP)
        .flags(STRING)
        .reads(SI)
        .writes(SI),
    op(0xad, I::Lodsd, &[w(Acc, V), r(SrcStr, V)])
        .alt_osz([I::Lodsw, I::Lodsd, I::Lodsq])
        .attrs(REP)
        .flags(STRING)
        .reads(SI)
        .writes(SI),
    op(0xae, I::Scasb, &[r(Acc, B), r(DstStr, B)])
        .attrs(REP)
        .flags(STRING_CMP)
        .reads(DI)
        .writes(DI),
    op(0xaf, I::Scasd, &[r(Acc, V), r(DstStr, V)])
        .alt_osz([I::Scasw, I::Scasd, I::Scasq])
        .attrs(REP)
        .flags(STRING_CMP)
        .reads(DI)
        .writes(DI),
    // B0..BF
    op(0xb0, I::Mov, &[w(Op, B), r(Imm, B)]).plus_r(),
    op(0xb8, I::Mov, &[w(Op, V), r(Imm, V)]).plus_r(),
    op(0xb8, I::Movabs, &[w(Op, V), r(Imm, V)]).plus_r().w(true).only64(),
    // Group 2
    op(0xc0, I::Rol, &[rw(E, B), r(Imm, B)]).ext(0).flags(ROTATE),
    op(0xc0, I::Ror, &[rw(E, B), r(Imm, B)]).ext(1).flags(ROTATE),
    op(0xc0, I::Rcl, &[rw(E, B), r(Imm, B)]).ext(2).flags(ROTATE_CARRY),
    op(0xc0, I::Rcr, &[rw(E, B), r(Imm, B)]).ext(3).flags(ROTATE_CARRY),
    op(0xc0, I::Shl, &[rw(E, B), r(Imm, B)]).ext(4).flags(SHIFT),
    op(0xc0, I::Shr, &[rw(E, B), r(Imm, B)]).ext(5).flags(SHIFT),
    op(0xc0, I::Sal, &[rw(E, B), r(Imm, B)]).ext(6).flags(SHIFT),
    op(0xc0, I::Sar, &[rw(E, B), r(Imm, B)]).ext(7).flags(SHIFT),
    op(0xc1, I::Rol, &[rw(E, V), r(Imm, B)]).ext(0).flags(ROTATE),
    op(0xc1, I::Ror, &[rw(E, V), r(Imm, B)]).ext(1).flags(ROTATE),
    op(0xc1, I::Rcl, &[rw(E, V), r(Imm, B)]).ext(2).flags(ROTATE_CARRY),
    op(0xc1, I::Rcr, &[rw(E, V), r(Imm, B)]).ext(3).flags(ROTATE_CARRY),
    op(0xc1, I::Shl, &[rw(E, V), r(Imm, B)]).ext(4).flags(SHIFT),
    op(0xc1, I::Shr, &[rw(E, V), r(Imm, B)]).ext(5).flags(SHIFT),
    op(0xc1, I::Sal, &[rw(E, V), r(Imm, B)]).ext(6).flags(SHIFT),
    op(0xc1, I::Sar, &[rw(E, V), r(Imm, B)]).ext(7).flags(SHIFT),
    op(0xd0, I::Rol, &[rw(E, B), r(One, B)]).ext(0).flags(ROTATE),
    op(0xd0, I::Ror, &[rw(E, B), r(One, B)]).ext(1).flags(ROTATE),
    op(0xd0, I::Rcl, &[rw(E, B), r(One, B)]).ext(2).flags(ROTATE_CARRY),
    op(0xd0, I::Rcr, &[rw(E, B), r(One, B)]).ext(3).flags(ROTATE_CARRY),
    op(0xd0, I::Shl, &[rw(E, B), r(One, B)]).ext(4).flags(SHIFT),
    op(0xd0, I::Shr, &[rw(E, B), r(One, B)]).ext(5).flags(SHIFT),
    op(0xd0, I::Sal, &[rw(E, B), r(One, B)]).ext(6).flags(SHIFT),
    op(0xd0, I::Sar, &[rw(E, B), r(One, B)]).ext(7).flags(SHIFT),
    op(0xd1, I::Rol, &[rw(E, V), r(One, B)]).ext(0).flags(ROTATE),
    op(0xd1, I::Ror, &[rw(E, V), r(One, B)]).ext(1).flags(ROTATE),
    op(0xd1, I::Rcl, &[rw(E, V), r(One, B)]).ext(2).flags(ROTATE_CARRY),
    op(0xd1, I::Rcr, &[rw(E, V), r(One, B)]).ext(3).flags(ROTATE_CARRY),
    op(0xd1, I::Shl, &[rw(E, V), r(One, B)]).ext(4).flags(SHIFT),
    op(0xd1, I::Shr, &[rw(E, V), r(One, B)]).ext(5).flags(SHIFT),
    op(0xd1, I::Sal, &[rw(E, V), r(One, B)]).ext(6).flags(SHIFT),
    op(0xd1, I::Sar, &[rw(E, V), r(One, B)]).ext(7).flags(SHIFT),
    op(0xd2, I::Rol, &[rw(E, B), r(Fixed(Rg::Cl), B)]).ext(0).flags(ROTATE),
    op(0xd2, I::Ror, &[rw(E, B), r(Fixed(Rg::Cl), B)]).ext(1).flags(ROTATE),
    op(0xd2, I::Rcl, &[rw(E, B), r(Fixed(Rg::Cl), B)]).ext(2).flags(ROTATE_CARRY),
    op(0xd2, I::Rcr, &[rw(E, B), r(Fixed(Rg::Cl), B)]).ext(3).flags(ROTATE_CARRY),
    op(0xd2, I::Shl, &[rw(E, B), r(Fixed(Rg::Cl), B)]).ext(4).flags(SHIFT),
    op(0xd2, I::Shr, &[rw(E, B), r(Fixed(Rg::Cl), B)]).ext(5).flags(SHIFT),
    op(0xd2, I::Sal, &[rw(E, B), r(Fixed(Rg::Cl), B)]).ext(6).flags(SHIFT),
    op(0xd2, I::Sar, &[rw(E, B), r(Fixed(Rg::Cl), B)]).ext(7).flags(SHIFT),
    op(0xd3, I::Rol, &[rw(E, V), r(Fixed(Rg::Cl), B)]).ext(0).flags(ROTATE),
    op(0xd3, I::Ror, &[rw(E, V), r(Fixed(Rg::Cl), B)]).ext(1).flags(ROTATE),
    op(0xd3, I::Rcl, &[rw(E, V), r(Fixed(Rg::Cl), B)]).ext(2).flags(ROTATE_CARRY),
    op(0xd3, I::Rcr, &[rw(E, V), r(Fixed(Rg::Cl), B)]).ext(3).flags(ROTATE_CARRY),
    op(0xd3, I::Shl, &[rw(E, V), r(Fixed(Rg::Cl), B)]).ext(4).flags(SHIFT),
    op(0xd3, I::Shr, &[rw(E, V), r(Fixed(Rg::Cl), B)]).ext(5).flags(SHIFT),
    op(0xd3, I::Sal, &[rw(E, V), r(Fixed(Rg::Cl), B)]).ext(6).flags(SHIFT),
    op(0xd3, I::Sar, &[rw(E, V), r(Fixed(Rg::Cl), B)]).ext(7).flags(SHIFT),
    // C2..CF
    op(0xc2, I::Ret, &[r(Imm, W)])
        .attrs(FORCE64)
        .groups(RET)
        .reads(SP)
        .writes(SP),
    op(0xc3, I::Ret, &[])
        .attrs(FORCE64)
        .groups(RET)
        .reads(SP)
        .writes(SP),
    op(0xc4, I::Les, &[w(G, Z), r(M, Far)]).mem().not64(),
    op(0xc5, I::Lds, &[w(G, Z), r(M, Far)]).mem().not64(),
    op(0xc6, I::Mov, &[w(E, B), r(Imm, B)]).ext(0),
    op(0xc6, I::Xabort, &[r(Imm, B)]).modrm(0xf8).groups(&[Gr::Rtm]).writes(&[Imp::R(Rg::Eax)]),
    op(0xc7, I::Mov, &[w(E, V), r(ImmSx, Z)]).ext(0),
    op(0xc7, I::Xbegin, &[r(Rel, Z)]).modrm(0xf8).groups(&[Gr::Rtm]).writes(&[Imp::R(Rg::Eax)]),
    op(0xc8, I::Enter, &[r(Imm, W), r(Imm, B)])
        .attrs(DEF64)
        .reads(SP_BP)
        .writes(SP_BP),
    op(0xc9, I::Leave, &[]).attrs(DEF64).reads(SP_BP).writes(SP_BP),
    op(0xca, I::Retf, &[r(Imm, W)]).groups(RET).reads(SP).writes(SP),
    op(0xcb, I::Retf, &[]).groups(RET).reads(SP).writes(SP),
    op(0xcc, I::Int3, &[]).groups(INTR).flags(INT).reads(SP).writes(SP),
    op(0xcd, I::Int, &[r(Imm, B)]).groups(INTR).flags(INT).reads(SP).writes(SP),
    op(0xce, I::Into, &[]).not64().groups(INTR).flags(INTO).reads(SP).writes(SP),
    op(0xcf, I::Iretd, &[])
        .alt_osz([I::Iret, I::Iretd, I::Iretq])
        .groups(&[Gr::Iret])
        .flags(ALL_PRIOR)
        .reads(SP)
        .writes(SP),
    // D4..DF (x87 lives in its own table)
    op(0xd4, I::Aam, &[r(Imm, B)]).not64().flags(ASCII_MULDIV).reads(AL).writes(AX16),
    op(0xd5, I::Aad, &[r(Imm, B)]).not64().flags(ASCII_MULDIV).reads(AX16).writes(AX16),
    op(0xd6, I::Salc, &[]).not64().flags(SALC).writes(AL),
    op(0xd7, I::Xlatb, &[])
        .reads(&[Imp::R(Rg::Al), Imp::R(Rg::Rbx)])
        .writes(AL),
    // E0..EF
    op(0xe0, I::Loopne, &[r(Rel, B)])
        .attrs(FORCE64)
        .flags(LOOPCC)
        .groups(JUMP)
        .reads(CX)
        .writes(CX),
    op(0xe1, I::Loope, &[r(Rel, B)])
        .attrs(FORCE64)
        .flags(LOOPCC)
        .groups(JUMP)
        .reads(CX)
        .writes(CX),
    op(0xe2, I::Loop, &[r(Rel, B)])
        .attrs(FORCE64)
        .groups(JUMP)
        .reads(CX)
        .writes(CX),
    op(0xe3, I::Jecxz, &[r(Rel, B)])
        .alt_asz([I::Jcxz, I::Jecxz, I::Jrcxz])
        .attrs(FORCE64)
        .groups(JUMP)
        .reads(CX),
    op(0xe4, I::In, &[w(Acc, B), r(Imm, B)]),
    op(0xe5, I::In, &[w(Acc, Z), r(Imm, B)]),
    op(0xe6, I::Out, &[r(Imm, B), r(Acc, B)]),
    op(0xe7, I::Out, &[r(Imm, B), r(Acc, Z)]),
    op(0xe8, I::Call, &[r(Rel, Z)])
        .attrs(FORCE64)
        .groups(CALL)
        .reads(SP_IP)
        .writes(SP),
    op(0xe9, I::Jmp, &[r(Rel, Z)]).attrs(FORCE64).groups(JUMP),
    op(0xea, I::Ljmp, &[r(FarPtr, Bits(0))]).not64().groups(JUMP),
    op(0xeb, I::Jmp, &[r(Rel, B)]).attrs(FORCE64).groups(JUMP),
    op(0xec, I::In, &[w(Acc, B), r(Fixed(Rg::Dx), W)]),
    op(0xed, I::In, &[w(Acc, Z), r(Fixed(Rg::Dx), W)]),
    op(0xee, I::Out, &[r(Fixed(Rg::Dx), W), r(Acc, B)]),
    op(0xef, I::Out, &[r(Fixed(Rg::Dx), W), r(Acc, Z)]),
    // F0..FF
    op(0xf1, I::Int1, &[]).groups(INTR).flags(INT),
    op(0xf4, I::Hlt, &[]).groups(PRIV),
    op(0xf5, I::Cmc, &[]).flags(CMC),
    op(0xf6, I::Test, &[r(E, B), r(Imm, B)]).ext(0).flags(LOGIC),
    op(0xf6, I::Test, &[r(E, B), r(Imm, B)]).ext(1).flags(LOGIC),
    op(0xf6, I::Not, &[rw(E, B)]).ext(2),
    op(0xf6, I::Neg, &[rw(E, B)]).ext(3).flags(ARITH),
    op(0xf6, I::Mul, &[r(E, B)]).ext(4).flags(MUL).reads(AL).writes(AX16),
    op(0xf6, I::Imul, &[r(E, B)]).ext(5).flags(MUL).reads(AL).writes(AX16),
    op(0xf6, I::Div, &[r(E, B)]).ext(6).flags(DIV).reads(AX16).writes(AX16),
    op(0xf6, I::Idiv, &[r(E, B)]).ext(7).flags(DIV).reads(AX16).writes(AX16),
    op(0xf7, I::Test, &[r(E, V), r(ImmSx, Z)]).ext(0).flags(LOGIC),
    op(0xf7, I::Test, &[r(E, V), r(ImmSx, Z)]).ext(1).flags(LOGIC),
    op(0xf7, I::Not, &[rw(E, V)]).ext(2),
    op(0xf7, I::Neg, &[rw(E, V)]).ext(3).flags(ARITH),
    op(0xf7, I::Mul, &[r(E, V)]).ext(4).flags(MUL).reads(AX).writes(AX_DX),
    op(0xf7, I::Imul, &[r(E, V)]).ext(5).flags(MUL).reads(AX).writes(AX_DX),
    op(0xf7, I::Div, &[r(E, V)]).ext(6).flags(DIV).reads(AX_DX).writes(AX_DX),
    op(0xf7, I::Idiv, &[r(E, V)]).ext(7).flags(DIV).reads(AX_DX).writes(AX_DX),
    op(0xf8, I::Clc, &[]).flags(CLC),
    op(0xf9, I::Stc, &[]).flags(STC),
    op(0xfa, I::Cli, &[]).flags(CLI),
    op(0xfb, I::Sti, &[]).flags(STI),
    op(0xfc, I::Cld, &[]).flags(CLD),
    op(0xfd, I::Std, &[]).flags(STD),
    op(0xfe, I::Inc, &[rw(E, B)]).ext(0).flags(INCDEC),
    op(0xfe, I::Dec, &[rw(E, B)]).ext(1).flags(INCDEC),
    op(0xff, I::Inc, &[rw(E, V)]).ext(0).flags(INCDEC),
    op(0xff, I::Dec, &[rw(E, V)]).ext(1).flags(INCDEC),
    op(0xff, I::Call, &[r(E, V)])
        .ext(2)
        .attrs(FORCE64)
        .groups(CALL)
        .reads(SP_IP)
        .writes(SP),
    op(0xff, I::Lcall, &[r(M, Far)]).ext(3).mem().groups(CALL).reads(SP).writes(SP),
    op(0xff, I::Jmp, &[r(E, V)]).ext(4).attrs(FORCE64).groups(JUMP),
    op(0xff, I::Ljmp, &[r(M, Far)]).ext(5).mem().groups(JUMP),
    op(0xff, I::Push, &[r(E, V)]).ext(6).attrs(DEF64).reads(SP).writes(SP),
];

/// `jcc rel8`.
pub static JCC: [Entry; 16] = cc_rows(
    op(0x70, I::Invalid, &[r(Rel, B)]).attrs(FORCE64).groups(JUMP),
    0x70,
    JCC_NAMES,
);

pub(super) const JCC_NAMES: [X86Mnemonic; 16] = [
    I::Jo,
    I::Jno,
    I::Jb,
    I::Jae,
    I::Je,
    I::Jne,
    I::Jbe,
    I::Ja,
    I::Js,
    I::Jns,
    I::Jp,
    I::Jnp,
    I::Jl,
    I::Jge,
    I::Jle,
    I::Jg,
];
