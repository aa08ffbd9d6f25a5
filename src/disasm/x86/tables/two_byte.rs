//! Two-byte opcode map (`0F xx`).

use super::one_byte::JCC_NAMES;
use super::*;
use crate::core::group::Group as Gr;
use crate::core::x86::flags::sets::*;
use crate::core::x86::X86Mnemonic as I;
use crate::core::x86::X86Reg as Rg;
use L::*;
use S::*;

const NP: Pfx = Pfx::None;
const P66: Pfx = Pfx::P66;
const PF3: Pfx = Pfx::F3;
const PF2: Pfx = Pfx::F2;

const SP: &[Imp] = &[Imp::Sp];
const EAX_EDX: &[Imp] = &[Imp::R(Rg::Eax), Imp::R(Rg::Edx)];
const ECX: &[Imp] = &[Imp::R(Rg::Ecx)];

const SSE1: &[Gr] = &[Gr::Sse1];
const SSE2: &[Gr] = &[Gr::Sse2];
const SSE3: &[Gr] = &[Gr::Sse3];
const MMX: &[Gr] = &[Gr::Mmx];
const PRIV: &[Gr] = &[Gr::Privilege];
const VM: &[Gr] = &[Gr::Vm];

pub static TABLE: &[Entry] = &[
    // Group 6
    op2(0x00, I::Sldt, &[w(E, W)]).ext(0),
    op2(0x00, I::Str, &[w(E, W)]).ext(1),
    op2(0x00, I::Lldt, &[r(E, W)]).ext(2).groups(PRIV),
    op2(0x00, I::Ltr, &[r(E, W)]).ext(3).groups(PRIV),
    op2(0x00, I::Verr, &[r(E, W)]).ext(4).flags(ZF_ONLY),
    op2(0x00, I::Verw, &[r(E, W)]).ext(5).flags(ZF_ONLY),
    // Group 7
    op2(0x01, I::Sgdt, &[w(M, Desc)]).ext(0).mem(),
    op2(0x01, I::Sidt, &[w(M, Desc)]).ext(1).mem(),
    op2(0x01, I::Lgdt, &[r(M, Desc)]).ext(2).mem().groups(PRIV),
    op2(0x01, I::Lidt, &[r(M, Desc)]).ext(3).mem().groups(PRIV),
    op2(0x01, I::Smsw, &[w(E, W)]).ext(4),
    op2(0x01, I::Lmsw, &[r(E, W)]).ext(6).groups(PRIV),
    op2(0x01, I::Invlpg, &[n(M, Bits(0))]).ext(7).mem().groups(PRIV),
    op2(0x01, I::Vmcall, &[]).modrm(0xc1).groups(VM).flags(VMX),
    op2(0x01, I::Vmlaunch, &[]).modrm(0xc2).groups(VM).flags(VMX),
    op2(0x01, I::Vmresume, &[]).modrm(0xc3).groups(VM).flags(VMX),
    op2(0x01, I::Vmxoff, &[]).modrm(0xc4).groups(VM).flags(VMX),
    op2(0x01, I::Monitor, &[])
        .modrm(0xc8)
        .reads(&[Imp::R(Rg::Rax), Imp::R(Rg::Ecx), Imp::R(Rg::Edx)]),
    op2(0x01, I::Mwait, &[])
        .modrm(0xc9)
        .reads(&[Imp::R(Rg::Eax), Imp::R(Rg::Ecx)]),
    op2(0x01, I::Clac, &[]).modrm(0xca).flags(AC),
    op2(0x01, I::Stac, &[]).modrm(0xcb).flags(AC),
    op2(0x01, I::Xgetbv, &[]).modrm(0xd0).reads(ECX).writes(EAX_EDX),
    op2(0x01, I::Xsetbv, &[])
        .modrm(0xd1)
        .reads(&[Imp::R(Rg::Ecx), Imp::R(Rg::Eax), Imp::R(Rg::Edx)])
        .groups(PRIV),
    op2(0x01, I::Xend, &[]).modrm(0xd5).groups(&[Gr::Rtm]),
    op2(0x01, I::Xtest, &[]).modrm(0xd6).groups(&[Gr::Rtm]).flags(ZF_CF),
    op2(0x01, I::Swapgs, &[]).modrm(0xf8).only64().groups(PRIV),
    op2(0x01, I::Rdtscp, &[])
        .modrm(0xf9)
        .writes(&[Imp::R(Rg::Eax), Imp::R(Rg::Edx), Imp::R(Rg::Ecx)]),
    op2(0x02, I::Lar, &[w(G, V), r(E, W)]).flags(ZF_ONLY),
    op2(0x03, I::Lsl, &[w(G, V), r(E, W)]).flags(ZF_ONLY),
    op2(0x05, I::Syscall, &[])
        .reads(&[Imp::Ip])
        .writes(&[Imp::R(Rg::Rcx), Imp::R(Rg::R11), Imp::Ip]),
    op2(0x06, I::Clts, &[]).groups(PRIV),
    op2(0x07, I::Sysret, &[])
        .reads(&[Imp::R(Rg::Rcx), Imp::R(Rg::R11)])
        .groups(PRIV)
        .flags(ALL_PRIOR),
    op2(0x08, I::Invd, &[]).groups(PRIV),
    op2(0x09, I::Wbinvd, &[]).groups(PRIV),
    op2(0x0b, I::Ud2, &[]),
    op2(0x0d, I::Prefetch, &[r(M, B)]).ext(0).mem(),
    op2(0x0d, I::Prefetchw, &[r(M, B)]).ext(1).mem(),
    // 10..17
    op2(0x10, I::Movups, &[w(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x10, I::Movupd, &[w(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x10, I::Movss, &[w(Vr, X), r(Wr, D)]).pfx(PF3).groups(SSE1),
    op2(0x10, I::Movsd, &[w(Vr, X), r(Wr, Q)]).pfx(PF2).groups(SSE2),
    op2(0x11, I::Movups, &[w(Wr, X), r(Vr, X)]).pfx(NP).groups(SSE1),
    op2(0x11, I::Movupd, &[w(Wr, X), r(Vr, X)]).pfx(P66).groups(SSE2),
    op2(0x11, I::Movss, &[w(Wr, D), r(Vr, X)]).pfx(PF3).groups(SSE1),
    op2(0x11, I::Movsd, &[w(Wr, Q), r(Vr, X)]).pfx(PF2).groups(SSE2),
    op2(0x12, I::Movlps, &[rw(Vr, X), r(M, Q)]).pfx(NP).mem().groups(SSE1),
    op2(0x12, I::Movhlps, &[rw(Vr, X), r(Ur, X)]).pfx(NP).reg_form().groups(SSE1),
    op2(0x12, I::Movlpd, &[rw(Vr, X), r(M, Q)]).pfx(P66).mem().groups(SSE2),
    op2(0x12, I::Movsldup, &[w(Vr, X), r(Wr, X)]).pfx(PF3).groups(SSE3),
    op2(0x12, I::Movddup, &[w(Vr, X), r(Wr, Q)]).pfx(PF2).groups(SSE3),
    op2(0x13, I::Movlps, &[w(M, Q), r(Vr, X)]).pfx(NP).mem().groups(SSE1),
    op2(0x13, I::Movlpd, &[w(M, Q), r(Vr, X)]).pfx(P66).mem().groups(SSE2),
    op2(0x14, I::Unpcklps, &[rw(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x14, I::Unpcklpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x15, I::Unpckhps, &[rw(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x15, I::Unpckhpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x16, I::Movhps, &[rw(Vr, X), r(M, Q)]).pfx(NP).mem().groups(SSE1),
    op2(0x16, I::Movlhps, &[rw(Vr, X), r(Ur, X)]).pfx(NP).reg_form().groups(SSE1),
    op2(0x16, I::Movhpd, &[rw(Vr, X), r(M, Q)]).pfx(P66).mem().groups(SSE2),
    op2(0x16, I::Movshdup, &[w(Vr, X), r(Wr, X)]).pfx(PF3).groups(SSE3),
    op2(0x17, I::Movhps, &[w(M, Q), r(Vr, X)]).pfx(NP).mem().groups(SSE1),
    op2(0x17, I::Movhpd, &[w(M, Q), r(Vr, X)]).pfx(P66).mem().groups(SSE2),
    // 18..1F
    op2(0x18, I::Prefetchnta, &[r(M, B)]).ext(0).mem().groups(SSE1),
    op2(0x18, I::Prefetcht0, &[r(M, B)]).ext(1).mem().groups(SSE1),
    op2(0x18, I::Prefetcht1, &[r(M, B)]).ext(2).mem().groups(SSE1),
    op2(0x18, I::Prefetcht2, &[r(M, B)]).ext(3).mem().groups(SSE1),
    op2(0x1e, I::Endbr64, &[]).pfx(PF3).modrm(0xfa),
    op2(0x1e, I::Endbr32, &[]).pfx(PF3).modrm(0xfb),
    op2(0x1f, I::Nop, &[r(E, V)]).ext(0),
    // 20..2F
    op2(0x20, I::Mov, &[w(Rx, Mw), r(Cr, Mw)]).groups(PRIV),
    op2(0x21, I::Mov, &[w(Rx, Mw), r(Dr, Mw)]).groups(PRIV),
    op2(0x22, I::Mov, &[w(Cr, Mw), r(Rx, Mw)]).groups(PRIV),
    op2(0x23, I::Mov, &[w(Dr, Mw), r(Rx, Mw)]).groups(PRIV),
    op2(0x28, I::Movaps, &[w(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x28, I::Movapd, &[w(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x29, I::Movaps, &[w(Wr, X), r(Vr, X)]).pfx(NP).groups(SSE1),
    op2(0x29, I::Movapd, &[w(Wr, X), r(Vr, X)]).pfx(P66).groups(SSE2),
    op2(0x2a, I::Cvtpi2ps, &[w(Vr, X), r(Qm, Q)]).pfx(NP).groups(SSE1),
    op2(0x2a, I::Cvtpi2pd, &[w(Vr, X), r(Qm, Q)]).pfx(P66).groups(SSE2),
    op2(0x2a, I::Cvtsi2ss, &[w(Vr, X), r(E, Y)]).pfx(PF3).groups(SSE1),
    op2(0x2a, I::Cvtsi2sd, &[w(Vr, X), r(E, Y)]).pfx(PF2).groups(SSE2),
    op2(0x2b, I::Movntps, &[w(M, X), r(Vr, X)]).pfx(NP).mem().groups(SSE1),
    op2(0x2b, I::Movntpd, &[w(M, X), r(Vr, X)]).pfx(P66).mem().groups(SSE2),
    op2(0x2c, I::Cvttps2pi, &[w(P, Q), r(Wr, Q)]).pfx(NP).groups(SSE1),
    op2(0x2c, I::Cvttpd2pi, &[w(P, Q), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x2c, I::Cvttss2si, &[w(G, Y), r(Wr, D)]).pfx(PF3).groups(SSE1),
    op2(0x2c, I::Cvttsd2si, &[w(G, Y), r(Wr, Q)]).pfx(PF2).groups(SSE2),
    op2(0x2d, I::Cvtps2pi, &[w(P, Q), r(Wr, Q)]).pfx(NP).groups(SSE1),
    op2(0x2d, I::Cvtpd2pi, &[w(P, Q), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x2d, I::Cvtss2si, &[w(G, Y), r(Wr, D)]).pfx(PF3).groups(SSE1),
    op2(0x2d, I::Cvtsd2si, &[w(G, Y), r(Wr, Q)]).pfx(PF2).groups(SSE2),
    op2(0x2e, I::Ucomiss, &[r(Vr, X), r(Wr, D)]).pfx(NP).flags(FCOMI).groups(SSE1),
    op2(0x2e, I::Ucomisd, &[r(Vr, X), r(Wr, Q)]).pfx(P66).flags(FCOMI).groups(SSE2),
    op2(0x2f, I::Comiss, &[r(Vr, X), r(Wr, D)]).pfx(NP).flags(FCOMI).groups(SSE1),
    op2(0x2f, I::Comisd, &[r(Vr, X), r(Wr, Q)]).pfx(P66).flags(FCOMI).groups(SSE2),
    // 30..37
    op2(0x30, I::Wrmsr, &[])
        .reads(&[Imp::R(Rg::Ecx), Imp::R(Rg::Eax), Imp::R(Rg::Edx)])
        .groups(PRIV),
    op2(0x31, I::Rdtsc, &[]).writes(EAX_EDX),
    op2(0x32, I::Rdmsr, &[]).reads(ECX).writes(EAX_EDX).groups(PRIV),
    op2(0x33, I::Rdpmc, &[]).reads(ECX).writes(EAX_EDX),
    op2(0x34, I::Sysenter, &[]).groups(&[Gr::Int]),
    op2(0x35, I::Sysexit, &[]).groups(PRIV),
    // 50..5F
    op2(0x50, I::Movmskps, &[w(G, Y), r(Ur, X)]).pfx(NP).reg_form().groups(SSE1),
    op2(0x50, I::Movmskpd, &[w(G, Y), r(Ur, X)]).pfx(P66).reg_form().groups(SSE2),
    op2(0x51, I::Sqrtps, &[w(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x51, I::Sqrtpd, &[w(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x51, I::Sqrtss, &[w(Vr, X), r(Wr, D)]).pfx(PF3).groups(SSE1),
    op2(0x51, I::Sqrtsd, &[w(Vr, X), r(Wr, Q)]).pfx(PF2).groups(SSE2),
    op2(0x52, I::Rsqrtps, &[w(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x52, I::Rsqrtss, &[w(Vr, X), r(Wr, D)]).pfx(PF3).groups(SSE1),
    op2(0x53, I::Rcpps, &[w(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x53, I::Rcpss, &[w(Vr, X), r(Wr, D)]).pfx(PF3).groups(SSE1),
    op2(0x54, I::Andps, &[rw(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x54, I::Andpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x55, I::Andnps, &[rw(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x55, I::Andnpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x56, I::Orps, &[rw(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x56, I::Orpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x57, I::Xorps, &[rw(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x57, I::Xorpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x58, I::Addps, &[rw(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x58, I::Addpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x58, I::Addss, &[rw(Vr, X), r(Wr, D)]).pfx(PF3).groups(SSE1),
    op2(0x58, I::Addsd, &[rw(Vr, X), r(Wr, Q)]).pfx(PF2).groups(SSE2),
    op2(0x59, I::Mulps, &[rw(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x59, I::Mulpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x59, I::Mulss, &[rw(Vr, X), r(Wr, D)]).pfx(PF3).groups(SSE1),
    op2(0x59, I::Mulsd, &[rw(Vr, X), r(Wr, Q)]).pfx(PF2).groups(SSE2),
    op2(0x5a, I::Cvtps2pd, &[w(Vr, X), r(Wr, Q)]).pfx(NP).groups(SSE2),
    op2(0x5a, I::Cvtpd2ps, &[w(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x5a, I::Cvtss2sd, &[w(Vr, X), r(Wr, D)]).pfx(PF3).groups(SSE2),
    op2(0x5a, I::Cvtsd2ss, &[w(Vr, X), r(Wr, Q)]).pfx(PF2).groups(SSE2),
    op2(0x5b, I::Cvtdq2ps, &[w(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE2),
    op2(0x5b, I::Cvtps2dq, &[w(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x5b, I::Cvttps2dq, &[w(Vr, X), r(Wr, X)]).pfx(PF3).groups(SSE2),
    op2(0x5c, I::Subps, &[rw(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x5c, I::Subpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x5c, I::Subss, &[rw(Vr, X), r(Wr, D)]).pfx(PF3).groups(SSE1),
    op2(0x5c, I::Subsd, &[rw(Vr, X), r(Wr, Q)]).pfx(PF2).groups(SSE2),
    op2(0x5d, I::Minps, &[rw(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x5d, I::Minpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x5d, I::Minss, &[rw(Vr, X), r(Wr, D)]).pfx(PF3).groups(SSE1),
    op2(0x5d, I::Minsd, &[rw(Vr, X), r(Wr, Q)]).pfx(PF2).groups(SSE2),
    op2(0x5e, I::Divps, &[rw(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x5e, I::Divpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x5e, I::Divss, &[rw(Vr, X), r(Wr, D)]).pfx(PF3).groups(SSE1),
    op2(0x5e, I::Divsd, &[rw(Vr, X), r(Wr, Q)]).pfx(PF2).groups(SSE2),
    op2(0x5f, I::Maxps, &[rw(Vr, X), r(Wr, X)]).pfx(NP).groups(SSE1),
    op2(0x5f, I::Maxpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x5f, I::Maxss, &[rw(Vr, X), r(Wr, D)]).pfx(PF3).groups(SSE1),
    op2(0x5f, I::Maxsd, &[rw(Vr, X), r(Wr, Q)]).pfx(PF2).groups(SSE2),
    // 6C..7F
    op2(0x6c, I::Punpcklqdq, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x6d, I::Punpckhqdq, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x6e, I::Movd, &[w(P, Q), r(E, D)]).pfx(NP).w(false).groups(MMX),
    op2(0x6e, I::Movq, &[w(P, Q), r(E, Q)]).pfx(NP).w(true).groups(MMX),
    op2(0x6e, I::Movd, &[w(Vr, X), r(E, D)]).pfx(P66).w(false).groups(SSE2),
    op2(0x6e, I::Movq, &[w(Vr, X), r(E, Q)]).pfx(P66).w(true).groups(SSE2),
    op2(0x6f, I::Movq, &[w(P, Q), r(Qm, Q)]).pfx(NP).groups(MMX),
    op2(0x6f, I::Movdqa, &[w(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0x6f, I::Movdqu, &[w(Vr, X), r(Wr, X)]).pfx(PF3).groups(SSE2),
    op2(0x70, I::Pshufw, &[w(P, Q), r(Qm, Q), r(Imm, B)]).pfx(NP).groups(SSE1),
    op2(0x70, I::Pshufd, &[w(Vr, X), r(Wr, X), r(Imm, B)]).pfx(P66).groups(SSE2),
    op2(0x70, I::Pshufhw, &[w(Vr, X), r(Wr, X), r(Imm, B)]).pfx(PF3).groups(SSE2),
    op2(0x70, I::Pshuflw, &[w(Vr, X), r(Wr, X), r(Imm, B)]).pfx(PF2).groups(SSE2),
    op2(0x71, I::Psrlw, &[rw(N, Q), r(Imm, B)]).pfx(NP).ext(2).reg_form().groups(MMX),
    op2(0x71, I::Psraw, &[rw(N, Q), r(Imm, B)]).pfx(NP).ext(4).reg_form().groups(MMX),
    op2(0x71, I::Psllw, &[rw(N, Q), r(Imm, B)]).pfx(NP).ext(6).reg_form().groups(MMX),
    op2(0x71, I::Psrlw, &[rw(Ur, X), r(Imm, B)]).pfx(P66).ext(2).reg_form().groups(SSE2),
    op2(0x71, I::Psraw, &[rw(Ur, X), r(Imm, B)]).pfx(P66).ext(4).reg_form().groups(SSE2),
    op2(0x71, I::Psllw, &[rw(Ur, X), r(Imm, B)]).pfx(P66).ext(6).reg_form().groups(SSE2),
    op2(0x72, I::Psrld, &[rw(N, Q), r(Imm, B)]).pfx(NP).ext(2).reg_form().groups(MMX),
    op2(0x72, I::Psrad, &[rw(N, Q), r(Imm, B)]).pfx(NP).ext(4).reg_form().groups(MMX),
    op2(0x72, I::Pslld, &[rw(N, Q), r(Imm, B)]).pfx(NP).ext(6).reg_form().groups(MMX),
    op2(0x72, I::Psrld, &[rw(Ur, X), r(Imm, B)]).pfx(P66).ext(2).reg_form().groups(SSE2),
    op2(0x72, I::Psrad, &[rw(Ur, X), r(Imm, B)]).pfx(P66).ext(4).reg_form().groups(SSE2),
    op2(0x72, I::Pslld, &[rw(Ur, X), r(Imm, B)]).pfx(P66).ext(6).reg_form().groups(SSE2),
    op2(0x73, I::Psrlq, &[rw(N, Q), r(Imm, B)]).pfx(NP).ext(2).reg_form().groups(MMX),
    op2(0x73, I::Psllq, &[rw(N, Q), r(Imm, B)]).pfx(NP).ext(6).reg_form().groups(MMX),
    op2(0x73, I::Psrlq, &[rw(Ur, X), r(Imm, B)]).pfx(P66).ext(2).reg_form().groups(SSE2),
    op2(0x73, I::Psrldq, &[rw(Ur, X), r(Imm, B)]).pfx(P66).ext(3).reg_form().groups(SSE2),
    op2(0x73, I::Psllq, &[rw(Ur, X), r(Imm, B)]).pfx(P66).ext(6).reg_form().groups(SSE2),
    op2(0x73, I::Pslldq, &[rw(Ur, X), r(Imm, B)]).pfx(P66).ext(7).reg_form().groups(SSE2),
    op2(0x77, I::Emms, &[]).pfx(NP).groups(MMX),
    op2(0x7c, I::Haddpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE3),
    op2(0x7c, I::Haddps, &[rw(Vr, X), r(Wr, X)]).pfx(PF2).groups(SSE3),
    op2(0x7d, I::Hsubpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE3),
    op2(0x7d, I::Hsubps, &[rw(Vr, X), r(Wr, X)]).pfx(PF2).groups(SSE3),
    op2(0x7e, I::Movd, &[w(E, D), r(P, Q)]).pfx(NP).w(false).groups(MMX),
    op2(0x7e, I::Movq, &[w(E, Q), r(P, Q)]).pfx(NP).w(true).groups(MMX),
    op2(0x7e, I::Movd, &[w(E, D), r(Vr, X)]).pfx(P66).w(false).groups(SSE2),
    op2(0x7e, I::Movq, &[w(E, Q), r(Vr, X)]).pfx(P66).w(true).groups(SSE2),
    op2(0x7e, I::Movq, &[w(Vr, X), r(Wr, Q)]).pfx(PF3).groups(SSE2),
    op2(0x7f, I::Movq, &[w(Qm, Q), r(P, Q)]).pfx(NP).groups(MMX),
    op2(0x7f, I::Movdqa, &[w(Wr, X), r(Vr, X)]).pfx(P66).groups(SSE2),
    op2(0x7f, I::Movdqu, &[w(Wr, X), r(Vr, X)]).pfx(PF3).groups(SSE2),
    // A0..AF
    op2(0xa0, I::Push, &[r(Fixed(Rg::Fs), W)]).attrs(DEF64).reads(SP).writes(SP),
    op2(0xa1, I::Pop, &[w(Fixed(Rg::Fs), W)]).attrs(DEF64).reads(SP).writes(SP),
    op2(0xa2, I::Cpuid, &[])
        .reads(&[Imp::R(Rg::Eax), Imp::R(Rg::Ecx)])
        .writes(&[
            Imp::R(Rg::Eax),
            Imp::R(Rg::Ebx),
            Imp::R(Rg::Ecx),
            Imp::R(Rg::Edx),
        ]),
    op2(0xa3, I::Bt, &[r(E, V), r(G, V)]).flags(BITTEST),
    op2(0xa4, I::Shld, &[rw(E, V), r(G, V), r(Imm, B)]).flags(DSHIFT),
    op2(0xa5, I::Shld, &[rw(E, V), r(G, V), r(Fixed(Rg::Cl), B)]).flags(DSHIFT),
    op2(0xa8, I::Push, &[r(Fixed(Rg::Gs), W)]).attrs(DEF64).reads(SP).writes(SP),
    op2(0xa9, I::Pop, &[w(Fixed(Rg::Gs), W)]).attrs(DEF64).reads(SP).writes(SP),
    op2(0xab, I::Bts, &[rw(E, V), r(G, V)]).flags(BITTEST),
    op2(0xac, I::Shrd, &[rw(E, V), r(G, V), r(Imm, B)]).flags(DSHIFT),
    op2(0xad, I::Shrd, &[rw(E, V), r(G, V), r(Fixed(Rg::Cl), B)]).flags(DSHIFT),
    // Group 15
    op2(0xae, I::Fxsave, &[w(M, Bits(0))]).ext(0).mem().w(false),
    op2(0xae, I::Fxsave64, &[w(M, Bits(0))]).ext(0).mem().w(true),
    op2(0xae, I::Fxrstor, &[r(M, Bits(0))]).ext(1).mem().w(false),
    op2(0xae, I::Fxrstor64, &[r(M, Bits(0))]).ext(1).mem().w(true),
    op2(0xae, I::Ldmxcsr, &[r(M, D)]).ext(2).mem().groups(SSE1),
    op2(0xae, I::Stmxcsr, &[w(M, D)]).ext(3).mem().groups(SSE1),
    op2(0xae, I::Xsave, &[w(M, Bits(0))]).ext(4).mem().w(false).reads(EAX_EDX),
    op2(0xae, I::Xsave64, &[w(M, Bits(0))]).ext(4).mem().w(true).reads(EAX_EDX),
    op2(0xae, I::Xrstor, &[r(M, Bits(0))]).ext(5).mem().w(false).reads(EAX_EDX),
    op2(0xae, I::Xrstor64, &[r(M, Bits(0))]).ext(5).mem().w(true).reads(EAX_EDX),
    op2(0xae, I::Xsaveopt, &[w(M, Bits(0))]).ext(6).mem().reads(EAX_EDX),
    op2(0xae, I::Clflush, &[r(M, B)]).ext(7).mem().pfx(NP),
    op2(0xae, I::Lfence, &[]).modrm(0xe8).groups(SSE2),
    op2(0xae, I::Mfence, &[]).modrm(0xf0).groups(SSE2),
    op2(0xae, I::Sfence, &[]).modrm(0xf8).groups(SSE1),
    op2(0xae, I::Rdfsbase, &[w(R, Y)]).pfx(PF3).ext(0).reg_form().only64(),
    op2(0xae, I::Rdgsbase, &[w(R, Y)]).pfx(PF3).ext(1).reg_form().only64(),
    op2(0xae, I::Wrfsbase, &[r(R, Y)]).pfx(PF3).ext(2).reg_form().only64(),
    op2(0xae, I::Wrgsbase, &[r(R, Y)]).pfx(PF3).ext(3).reg_form().only64(),
    op2(0xaf, I::Imul, &[rw(G, V), r(E, V)]).flags(MUL),
    // B0..BF
    op2(0xb0, I::Cmpxchg, &[rw(E, B), r(G, B)])
        .flags(ARITH)
        .reads(&[Imp::R(Rg::Al)])
        .writes(&[Imp::R(Rg::Al)]),
    op2(0xb1, I::Cmpxchg, &[rw(E, V), r(G, V)])
        .flags(ARITH)
        .reads(&[Imp::Ax])
        .writes(&[Imp::Ax]),
    op2(0xb2, I::Lss, &[w(G, Z), r(M, Far)]).mem(),
    op2(0xb3, I::Btr, &[rw(E, V), r(G, V)]).flags(BITTEST),
    op2(0xb4, I::Lfs, &[w(G, Z), r(M, Far)]).mem(),
    op2(0xb5, I::Lgs, &[w(G, Z), r(M, Far)]).mem(),
    op2(0xb6, I::Movzx, &[w(G, V), r(E, B)]),
    op2(0xb7, I::Movzx, &[w(G, V), r(E, W)]),
    op2(0xb8, I::Popcnt, &[w(G, V), r(E, V)]).pfx(PF3).flags(COUNT),
    op2(0xb9, I::Ud1, &[r(G, V), r(E, V)]),
    op2(0xba, I::Bt, &[r(E, V), r(Imm, B)]).ext(4).flags(BITTEST),
    op2(0xba, I::Bts, &[rw(E, V), r(Imm, B)]).ext(5).flags(BITTEST),
    op2(0xba, I::Btr, &[rw(E, V), r(Imm, B)]).ext(6).flags(BITTEST),
    op2(0xba, I::Btc, &[rw(E, V), r(Imm, B)]).ext(7).flags(BITTEST),
    op2(0xbb, I::Btc, &[rw(E, V), r(G, V)]).flags(BITTEST),
    op2(0xbc, I::Bsf, &[w(G, V), r(E, V)]).flags(BITSCAN),
    op2(0xbc, I::Tzcnt, &[w(G, V), r(E, V)]).pfx(PF3).flags(COUNT).groups(&[Gr::Bmi]),
    op2(0xbd, I::Bsr, &[w(G, V), r(E, V)]).flags(BITSCAN),
    op2(0xbd, I::Lzcnt, &[w(G, V), r(E, V)]).pfx(PF3).flags(COUNT),
    op2(0xbe, I::Movsx, &[w(G, V), r(E, B)]),
    op2(0xbf, I::Movsx, &[w(G, V), r(E, W)]),
    // C0..CF
    op2(0xc0, I::Xadd, &[rw(E, B), rw(G, B)]).flags(ARITH),
    op2(0xc1, I::Xadd, &[rw(E, V), rw(G, V)]).flags(ARITH),
    op2(0xc2, I::Cmpps, &[rw(Vr, X), r(Wr, X), r(Imm, B)])
        .pfx(NP)
        .attrs(CC_SSE)
        .groups(SSE1),
    op2(0xc2, I::Cmppd, &[rw(Vr, X), r(Wr, X), r(Imm, B)])
        .pfx(P66)
        .attrs(CC_SSE)
        .groups(SSE2),
    op2(0xc2, I::Cmpss, &[rw(Vr, X), r(Wr, D), r(Imm, B)])
        .pfx(PF3)
        .attrs(CC_SSE)
        .groups(SSE1),
    op2(0xc2, I::Cmpsd, &[rw(Vr, X), r(Wr, Q), r(Imm, B)])
        .pfx(PF2)
        .attrs(CC_SSE)
        .groups(SSE2),
    op2(0xc3, I::Movnti, &[w(M, Y), r(G, Y)]).pfx(NP).mem().groups(SSE2),
    op2(0xc4, I::Pinsrw, &[rw(P, Q), r(R, D), r(Imm, B)]).pfx(NP).reg_form().groups(SSE1),
    op2(0xc4, I::Pinsrw, &[rw(P, Q), r(M, W), r(Imm, B)]).pfx(NP).mem().groups(SSE1),
    op2(0xc4, I::Pinsrw, &[rw(Vr, X), r(R, D), r(Imm, B)]).pfx(P66).reg_form().groups(SSE2),
    op2(0xc4, I::Pinsrw, &[rw(Vr, X), r(M, W), r(Imm, B)]).pfx(P66).mem().groups(SSE2),
    op2(0xc5, I::Pextrw, &[w(G, D), r(N, Q), r(Imm, B)]).pfx(NP).reg_form().groups(SSE1),
    op2(0xc5, I::Pextrw, &[w(G, D), r(Ur, X), r(Imm, B)]).pfx(P66).reg_form().groups(SSE2),
    op2(0xc6, I::Shufps, &[rw(Vr, X), r(Wr, X), r(Imm, B)]).pfx(NP).groups(SSE1),
    op2(0xc6, I::Shufpd, &[rw(Vr, X), r(Wr, X), r(Imm, B)]).pfx(P66).groups(SSE2),
    // Group 9
    op2(0xc7, I::Cmpxchg8b, &[rw(M, Q)])
        .ext(1)
        .mem()
        .w(false)
        .flags(CMPXCHG8)
        .reads(&[Imp::R(Rg::Eax), Imp::R(Rg::Edx), Imp::R(Rg::Ebx), Imp::R(Rg::Ecx)])
        .writes(EAX_EDX),
    op2(0xc7, I::Cmpxchg16b, &[rw(M, X)])
        .ext(1)
        .mem()
        .w(true)
        .flags(CMPXCHG8)
        .reads(&[Imp::R(Rg::Rax), Imp::R(Rg::Rdx), Imp::R(Rg::Rbx), Imp::R(Rg::Rcx)])
        .writes(&[Imp::R(Rg::Rax), Imp::R(Rg::Rdx)]),
    op2(0xc7, I::Vmptrld, &[r(M, Q)]).ext(6).mem().pfx(NP).groups(VM).flags(VMX),
    op2(0xc7, I::Vmclear, &[r(M, Q)]).ext(6).mem().pfx(P66).groups(VM).flags(VMX),
    op2(0xc7, I::Vmxon, &[r(M, Q)]).ext(6).mem().pfx(PF3).groups(VM).flags(VMX),
    op2(0xc7, I::Vmptrst, &[w(M, Q)]).ext(7).mem().pfx(NP).groups(VM).flags(VMX),
    op2(0xc7, I::Rdrand, &[w(R, V)]).ext(6).reg_form().flags(RDRAND),
    op2(0xc7, I::Rdseed, &[w(R, V)]).ext(7).reg_form().flags(RDRAND),
    op2(0xc8, I::Bswap, &[rw(Op, V)]).plus_r(),
    // D0..FF leftovers outside the MMX/SSE2 pairs
    op2(0xd0, I::Addsubpd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE3),
    op2(0xd0, I::Addsubps, &[rw(Vr, X), r(Wr, X)]).pfx(PF2).groups(SSE3),
    op2(0xd6, I::Movq, &[w(Wr, Q), r(Vr, X)]).pfx(P66).groups(SSE2),
    op2(0xd6, I::Movq2dq, &[w(Vr, X), r(N, Q)]).pfx(PF3).reg_form().groups(SSE2),
    op2(0xd6, I::Movdq2q, &[w(P, Q), r(Ur, X)]).pfx(PF2).reg_form().groups(SSE2),
    op2(0xd7, I::Pmovmskb, &[w(G, D), r(N, Q)]).pfx(NP).reg_form().groups(SSE1),
    op2(0xd7, I::Pmovmskb, &[w(G, D), r(Ur, X)]).pfx(P66).reg_form().groups(SSE2),
    op2(0xe6, I::Cvttpd2dq, &[w(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE2),
    op2(0xe6, I::Cvtdq2pd, &[w(Vr, X), r(Wr, Q)]).pfx(PF3).groups(SSE2),
    op2(0xe6, I::Cvtpd2dq, &[w(Vr, X), r(Wr, X)]).pfx(PF2).groups(SSE2),
    op2(0xe7, I::Movntq, &[w(M, Q), r(P, Q)]).pfx(NP).mem().groups(SSE1),
    op2(0xe7, I::Movntdq, &[w(M, X), r(Vr, X)]).pfx(P66).mem().groups(SSE2),
    op2(0xf0, I::Lddqu, &[w(Vr, X), r(M, X)]).pfx(PF2).mem().groups(SSE3),
    op2(0xf7, I::Maskmovq, &[r(P, Q), r(N, Q)])
        .pfx(NP)
        .reg_form()
        .reads(&[Imp::Di])
        .groups(SSE1),
    op2(0xf7, I::Maskmovdqu, &[r(Vr, X), r(Ur, X)])
        .pfx(P66)
        .reg_form()
        .reads(&[Imp::Di])
        .groups(SSE2),
    op2(0xff, I::Ud0, &[r(G, D), r(E, D)]),
];

/// `jcc rel16/32`.
pub static JCC: [Entry; 16] = cc_rows(
    op2(0x80, I::Invalid, &[r(Rel, Z)]).attrs(FORCE64).groups(&[Gr::Jump]),
    0x80,
    JCC_NAMES,
);

/// `setcc r/m8`.
pub static SETCC: [Entry; 16] = cc_rows(
    op2(0x90, I::Invalid, &[w(E, B)]),
    0x90,
    [
        I::Seto,
        I::Setno,
        I::Setb,
        I::Setae,
        I::Sete,
        I::Setne,
        I::Setbe,
        I::Seta,
        I::Sets,
        I::Setns,
        I::Setp,
        I::Setnp,
        I::Setl,
        I::Setge,
        I::Setle,
        I::Setg,
    ],
);

/// `cmovcc r, r/m`.
pub static CMOVCC: [Entry; 16] = cc_rows(
    op2(0x40, I::Invalid, &[w(G, V), r(E, V)]).groups(&[Gr::Cmov]),
    0x40,
    [
        I::Cmovo,
        I::Cmovno,
        I::Cmovb,
        I::Cmovae,
        I::Cmove,
        I::Cmovne,
        I::Cmovbe,
        I::Cmova,
        I::Cmovs,
        I::Cmovns,
        I::Cmovp,
        I::Cmovnp,
        I::Cmovl,
        I::Cmovge,
        I::Cmovle,
        I::Cmovg,
    ],
);

const PACKED_INT: &[(u8, X86Mnemonic)] = &[
    (0x60, I::Punpcklbw),
    (0x61, I::Punpcklwd),
    (0x62, I::Punpckldq),
    (0x63, I::Packsswb),
    (0x64, I::Pcmpgtb),
    (0x65, I::Pcmpgtw),
    (0x66, I::Pcmpgtd),
    (0x67, I::Packuswb),
    (0x68, I::Punpckhbw),
    (0x69, I::Punpckhwd),
    (0x6a, I::Punpckhdq),
    (0x6b, I::Packssdw),
    (0x74, I::Pcmpeqb),
    (0x75, I::Pcmpeqw),
    (0x76, I::Pcmpeqd),
    (0xd1, I::Psrlw),
    (0xd2, I::Psrld),
    (0xd3, I::Psrlq),
    (0xd4, I::Paddq),
    (0xd5, I::Pmullw),
    (0xd8, I::Psubusb),
    (0xd9, I::Psubusw),
    (0xda, I::Pminub),
    (0xdb, I::Pand),
    (0xdc, I::Paddusb),
    (0xdd, I::Paddusw),
    (0xde, I::Pmaxub),
    (0xdf, I::Pandn),
    (0xe0, I::Pavgb),
    (0xe1, I::Psraw),
    (0xe2, I::Psrad),
    (0xe3, I::Pavgw),
    (0xe4, I::Pmulhuw),
    (0xe5, I::Pmulhw),
    (0xe8, I::Psubsb),
    (0xe9, I::Psubsw),
    (0xea, I::Pminsw),
    (0xeb, I::Por),
    (0xec, I::Paddsb),
    (0xed, I::Paddsw),
    (0xee, I::Pmaxsw),
    (0xef, I::Pxor),
    (0xf1, I::Psllw),
    (0xf2, I::Pslld),
    (0xf3, I::Psllq),
    (0xf4, I::Pmuludq),
    (0xf5, I::Pmaddwd),
    (0xf6, I::Psadbw),
    (0xf8, I::Psubb),
    (0xf9, I::Psubw),
    (0xfa, I::Psubd),
    (0xfb, I::Psubq),
    (0xfc, I::Paddb),
    (0xfd, I::Paddw),
    (0xfe, I::Paddd),
];

/// Packed integer ops in both MMX and SSE2 form.
pub static MMX_SSE: [[Entry; 2]; PACKED_INT.len()] =
    mmx_sse_rows(Map::M0F, PACKED_INT, Gr::Sse2);
