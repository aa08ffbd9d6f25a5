//! VEX-encoded rows: AVX/AVX2, FMA, FMA4, BMI1/BMI2 and the opmask
//! instructions.

use super::*;
use crate::core::group::Group as Gr;
use crate::core::x86::flags::sets::*;
use crate::core::x86::X86Mnemonic as I;
use L::*;
use S::*;

const NP: Pfx = Pfx::None;
const P66: Pfx = Pfx::P66;
const PF3: Pfx = Pfx::F3;
const PF2: Pfx = Pfx::F2;

const AVX: &[Gr] = &[Gr::Avx];
const AVX2: &[Gr] = &[Gr::Avx2];
const BMI1: &[Gr] = &[Gr::Bmi];
const BMI2: &[Gr] = &[Gr::Bmi2];
const FMA4: &[Gr] = &[Gr::Fma4];

/// `op v, h, w` over the full vector length.
const PS3: &[OpSpec] = &[w(Vr, Vl), r(Hr, Vl), r(Wr, Vl)];
/// Scalar single: `op xmm, xmm, xmm/m32`.
const SS3: &[OpSpec] = &[w(Vr, X), r(Hr, X), r(Wr, D)];
/// Scalar double: `op xmm, xmm, xmm/m64`.
const SD3: &[OpSpec] = &[w(Vr, X), r(Hr, X), r(Wr, Q)];
const PS3I: &[OpSpec] = &[w(Vr, Vl), r(Hr, Vl), r(Wr, Vl), r(Imm, B)];
const LOAD: &[OpSpec] = &[w(Vr, Vl), r(Wr, Vl)];
const STORE: &[OpSpec] = &[w(Wr, Vl), r(Vr, Vl)];
const LOADI: &[OpSpec] = &[w(Vr, Vl), r(Wr, Vl), r(Imm, B)];
/// Shift by an xmm count.
const SHIFT_X: &[OpSpec] = &[w(Vr, Vl), r(Hr, Vl), r(Wr, X)];
/// Shift by an immediate; destination in vvvv.
const SHIFT_I: &[OpSpec] = &[w(Hr, Vl), r(Ur, Vl), r(Imm, B)];
const BLENDV: &[OpSpec] = &[w(Vr, Vl), r(Hr, Vl), r(Wr, Vl), r(Is4, Vl)];

const fn v0f(opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    vex(Map::M0F, opcode, m, ops).groups(AVX)
}

const fn v38(opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    vex(Map::M0F38, opcode, m, ops).pfx(P66).groups(AVX)
}

const fn v3a(opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    vex(Map::M0F3A, opcode, m, ops).pfx(P66).groups(AVX)
}

pub static TABLE: &[Entry] = &[
    // 0F 10..17
    v0f(0x10, I::Vmovups, LOAD).pfx(NP),
    v0f(0x10, I::Vmovupd, LOAD).pfx(P66),
    v0f(0x10, I::Vmovss, &[w(Vr, X), r(M, D)]).pfx(PF3).mem(),
    v0f(0x10, I::Vmovss, &[w(Vr, X), r(Hr, X), r(Ur, X)]).pfx(PF3).reg_form(),
    v0f(0x10, I::Vmovsd, &[w(Vr, X), r(M, Q)]).pfx(PF2).mem(),
    v0f(0x10, I::Vmovsd, &[w(Vr, X), r(Hr, X), r(Ur, X)]).pfx(PF2).reg_form(),
    v0f(0x11, I::Vmovups, STORE).pfx(NP),
    v0f(0x11, I::Vmovupd, STORE).pfx(P66),
    v0f(0x11, I::Vmovss, &[w(M, D), r(Vr, X)]).pfx(PF3).mem(),
    v0f(0x11, I::Vmovss, &[w(Ur, X), r(Hr, X), r(Vr, X)]).pfx(PF3).reg_form(),
    v0f(0x11, I::Vmovsd, &[w(M, Q), r(Vr, X)]).pfx(PF2).mem(),
    v0f(0x11, I::Vmovsd, &[w(Ur, X), r(Hr, X), r(Vr, X)]).pfx(PF2).reg_form(),
    v0f(0x12, I::Vmovlps, &[w(Vr, X), r(Hr, X), r(M, Q)]).pfx(NP).mem().l(0),
    v0f(0x12, I::Vmovhlps, &[w(Vr, X), r(Hr, X), r(Ur, X)]).pfx(NP).reg_form().l(0),
    v0f(0x12, I::Vmovlpd, &[w(Vr, X), r(Hr, X), r(M, Q)]).pfx(P66).mem().l(0),
    v0f(0x12, I::Vmovsldup, LOAD).pfx(PF3),
    v0f(0x12, I::Vmovddup, &[w(Vr, Vl), r(Wr, Half)]).pfx(PF2),
    v0f(0x13, I::Vmovlps, &[w(M, Q), r(Vr, X)]).pfx(NP).mem().l(0),
    v0f(0x13, I::Vmovlpd, &[w(M, Q), r(Vr, X)]).pfx(P66).mem().l(0),
    v0f(0x14, I::Vunpcklps, PS3).pfx(NP),
    v0f(0x14, I::Vunpcklpd, PS3).pfx(P66),
    v0f(0x15, I::Vunpckhps, PS3).pfx(NP),
    v0f(0x15, I::Vunpckhpd, PS3).pfx(P66),
    v0f(0x16, I::Vmovhps, &[w(Vr, X), r(Hr, X), r(M, Q)]).pfx(NP).mem().l(0),
    v0f(0x16, I::Vmovlhps, &[w(Vr, X), r(Hr, X), r(Ur, X)]).pfx(NP).reg_form().l(0),
    v0f(0x16, I::Vmovhpd, &[w(Vr, X), r(Hr, X), r(M, Q)]).pfx(P66).mem().l(0),
    v0f(0x16, I::Vmovshdup, LOAD).pfx(PF3),
    v0f(0x17, I::Vmovhps, &[w(M, Q), r(Vr, X)]).pfx(NP).mem().l(0),
    v0f(0x17, I::Vmovhpd, &[w(M, Q), r(Vr, X)]).pfx(P66).mem().l(0),
    // 0F 28..2F
    v0f(0x28, I::Vmovaps, LOAD).pfx(NP),
    v0f(0x28, I::Vmovapd, LOAD).pfx(P66),
    v0f(0x29, I::Vmovaps, STORE).pfx(NP),
    v0f(0x29, I::Vmovapd, STORE).pfx(P66),
    v0f(0x2a, I::Vcvtsi2ss, &[w(Vr, X), r(Hr, X), r(E, Y)]).pfx(PF3),
    v0f(0x2a, I::Vcvtsi2sd, &[w(Vr, X), r(Hr, X), r(E, Y)]).pfx(PF2),
    v0f(0x2b, I::Vmovntps, &[w(M, Vl), r(Vr, Vl)]).pfx(NP).mem(),
    v0f(0x2b, I::Vmovntpd, &[w(M, Vl), r(Vr, Vl)]).pfx(P66).mem(),
    v0f(0x2c, I::Vcvttss2si, &[w(G, Y), r(Wr, D)]).pfx(PF3),
    v0f(0x2c, I::Vcvttsd2si, &[w(G, Y), r(Wr, Q)]).pfx(PF2),
    v0f(0x2d, I::Vcvtss2si, &[w(G, Y), r(Wr, D)]).pfx(PF3),
    v0f(0x2d, I::Vcvtsd2si, &[w(G, Y), r(Wr, Q)]).pfx(PF2),
    v0f(0x2e, I::Vucomiss, &[r(Vr, X), r(Wr, D)]).pfx(NP).flags(FCOMI),
    v0f(0x2e, I::Vucomisd, &[r(Vr, X), r(Wr, Q)]).pfx(P66).flags(FCOMI),
    v0f(0x2f, I::Vcomiss, &[r(Vr, X), r(Wr, D)]).pfx(NP).flags(FCOMI),
    v0f(0x2f, I::Vcomisd, &[r(Vr, X), r(Wr, Q)]).pfx(P66).flags(FCOMI),
    // 0F 50..5F
    v0f(0x50, I::Vmovmskps, &[w(G, Y), r(Ur, Vl)]).pfx(NP).reg_form(),
    v0f(0x50, I::Vmovmskpd, &[w(G, Y), r(Ur, Vl)]).pfx(P66).reg_form(),
    v0f(0x51, I::Vsqrtps, LOAD).pfx(NP),
    v0f(0x51, I::Vsqrtpd, LOAD).pfx(P66),
    v0f(0x51, I::Vsqrtss, SS3).pfx(PF3),
    v0f(0x51, I::Vsqrtsd, SD3).pfx(PF2),
    v0f(0x52, I::Vrsqrtps, LOAD).pfx(NP),
    v0f(0x52, I::Vrsqrtss, SS3).pfx(PF3),
    v0f(0x53, I::Vrcpps, LOAD).pfx(NP),
    v0f(0x53, I::Vrcpss, SS3).pfx(PF3),
    v0f(0x54, I::Vandps, PS3).pfx(NP),
    v0f(0x54, I::Vandpd, PS3).pfx(P66),
    v0f(0x55, I::Vandnps, PS3).pfx(NP),
    v0f(0x55, I::Vandnpd, PS3).pfx(P66),
    v0f(0x56, I::Vorps, PS3).pfx(NP),
    v0f(0x56, I::Vorpd, PS3).pfx(P66),
    v0f(0x57, I::Vxorps, PS3).pfx(NP),
    v0f(0x57, I::Vxorpd, PS3).pfx(P66),
    v0f(0x58, I::Vaddps, PS3).pfx(NP),
    v0f(0x58, I::Vaddpd, PS3).pfx(P66),
    v0f(0x58, I::Vaddss, SS3).pfx(PF3),
    v0f(0x58, I::Vaddsd, SD3).pfx(PF2),
    v0f(0x59, I::Vmulps, PS3).pfx(NP),
    v0f(0x59, I::Vmulpd, PS3).pfx(P66),
    v0f(0x59, I::Vmulss, SS3).pfx(PF3),
    v0f(0x59, I::Vmulsd, SD3).pfx(PF2),
    v0f(0x5a, I::Vcvtps2pd, &[w(Vr, Vl), r(Wr, Half)]).pfx(NP),
    v0f(0x5a, I::Vcvtpd2ps, &[w(Vr, Half), r(Wr, Vl)]).pfx(P66),
    v0f(0x5a, I::Vcvtss2sd, SS3).pfx(PF3),
    v0f(0x5a, I::Vcvtsd2ss, SD3).pfx(PF2),
    v0f(0x5b, I::Vcvtdq2ps, LOAD).pfx(NP),
    v0f(0x5b, I::Vcvtps2dq, LOAD).pfx(P66),
    v0f(0x5b, I::Vcvttps2dq, LOAD).pfx(PF3),
    v0f(0x5c, I::Vsubps, PS3).pfx(NP),
    v0f(0x5c, I::Vsubpd, PS3).pfx(P66),
    v0f(0x5c, I::Vsubss, SS3).pfx(PF3),
    v0f(0x5c, I::Vsubsd, SD3).pfx(PF2),
    v0f(0x5d, I::Vminps, PS3).pfx(NP),
    v0f(0x5d, I::Vminpd, PS3).pfx(P66),
    v0f(0x5d, I::Vminss, SS3).pfx(PF3),
    v0f(0x5d, I::Vminsd, SD3).pfx(PF2),
    v0f(0x5e, I::Vdivps, PS3).pfx(NP),
    v0f(0x5e, I::Vdivpd, PS3).pfx(P66),
    v0f(0x5e, I::Vdivss, SS3).pfx(PF3),
    v0f(0x5e, I::Vdivsd, SD3).pfx(PF2),
    v0f(0x5f, I::Vmaxps, PS3).pfx(NP),
    v0f(0x5f, I::Vmaxpd, PS3).pfx(P66),
    v0f(0x5f, I::Vmaxss, SS3).pfx(PF3),
    v0f(0x5f, I::Vmaxsd, SD3).pfx(PF2),
    // 0F 6E..7F
    v0f(0x6e, I::Vmovd, &[w(Vr, X), r(E, D)]).pfx(P66).w(false).l(0),
    v0f(0x6e, I::Vmovq, &[w(Vr, X), r(E, Q)]).pfx(P66).w(true).l(0),
    v0f(0x6f, I::Vmovdqa, LOAD).pfx(P66),
    v0f(0x6f, I::Vmovdqu, LOAD).pfx(PF3),
    v0f(0x70, I::Vpshufd, LOADI).pfx(P66),
    v0f(0x70, I::Vpshufhw, LOADI).pfx(PF3),
    v0f(0x70, I::Vpshuflw, LOADI).pfx(PF2),
    v0f(0x71, I::Vpsrlw, SHIFT_I).pfx(P66).ext(2).reg_form(),
    v0f(0x71, I::Vpsraw, SHIFT_I).pfx(P66).ext(4).reg_form(),
    v0f(0x71, I::Vpsllw, SHIFT_I).pfx(P66).ext(6).reg_form(),
    v0f(0x72, I::Vpsrld, SHIFT_I).pfx(P66).ext(2).reg_form(),
    v0f(0x72, I::Vpsrad, SHIFT_I).pfx(P66).ext(4).reg_form(),
    v0f(0x72, I::Vpslld, SHIFT_I).pfx(P66).ext(6).reg_form(),
    v0f(0x73, I::Vpsrlq, SHIFT_I).pfx(P66).ext(2).reg_form(),
    v0f(0x73, I::Vpsrldq, SHIFT_I).pfx(P66).ext(3).reg_form(),
    v0f(0x73, I::Vpsllq, SHIFT_I).pfx(P66).ext(6).reg_form(),
    v0f(0x73, I::Vpslldq, SHIFT_I).pfx(P66).ext(7).reg_form(),
    v0f(0x77, I::Vzeroupper, &[]).pfx(NP).l(0),
    v0f(0x77, I::Vzeroall, &[]).pfx(NP).l(1),
    v0f(0x7c, I::Vhaddpd, PS3).pfx(P66),
    v0f(0x7c, I::Vhaddps, PS3).pfx(PF2),
    v0f(0x7d, I::Vhsubpd, PS3).pfx(P66),
    v0f(0x7d, I::Vhsubps, PS3).pfx(PF2),
    v0f(0x7e, I::Vmovd, &[w(E, D), r(Vr, X)]).pfx(P66).w(false).l(0),
    v0f(0x7e, I::Vmovq, &[w(E, Q), r(Vr, X)]).pfx(P66).w(true).l(0),
    v0f(0x7e, I::Vmovq, &[w(Vr, X), r(Wr, Q)]).pfx(PF3).l(0),
    v0f(0x7f, I::Vmovdqa, STORE).pfx(P66),
    v0f(0x7f, I::Vmovdqu, STORE).pfx(PF3),
    // 0F C2..F7
    v0f(0xc2, I::Vcmpps, PS3I).pfx(NP).attrs(CC_AVX),
    v0f(0xc2, I::Vcmppd, PS3I).pfx(P66).attrs(CC_AVX),
    v0f(0xc2, I::Vcmpss, &[w(Vr, X), r(Hr, X), r(Wr, D), r(Imm, B)]).pfx(PF3).attrs(CC_AVX),
    v0f(0xc2, I::Vcmpsd, &[w(Vr, X), r(Hr, X), r(Wr, Q), r(Imm, B)]).pfx(PF2).attrs(CC_AVX),
    v0f(0xc6, I::Vshufps, PS3I).pfx(NP),
    v0f(0xc6, I::Vshufpd, PS3I).pfx(P66),
    v0f(0xd0, I::Vaddsubpd, PS3).pfx(P66),
    v0f(0xd0, I::Vaddsubps, PS3).pfx(PF2),
    v0f(0xd1, I::Vpsrlw, SHIFT_X).pfx(P66),
    v0f(0xd2, I::Vpsrld, SHIFT_X).pfx(P66),
    v0f(0xd3, I::Vpsrlq, SHIFT_X).pfx(P66),
    v0f(0xd6, I::Vmovq, &[w(Wr, Q), r(Vr, X)]).pfx(P66).l(0),
    v0f(0xd7, I::Vpmovmskb, &[w(G, D), r(Ur, Vl)]).pfx(P66).reg_form(),
    v0f(0xe1, I::Vpsraw, SHIFT_X).pfx(P66),
    v0f(0xe2, I::Vpsrad, SHIFT_X).pfx(P66),
    v0f(0xe6, I::Vcvttpd2dq, &[w(Vr, Half), r(Wr, Vl)]).pfx(P66),
    v0f(0xe6, I::Vcvtdq2pd, &[w(Vr, Vl), r(Wr, Half)]).pfx(PF3),
    v0f(0xe6, I::Vcvtpd2dq, &[w(Vr, Half), r(Wr, Vl)]).pfx(PF2),
    v0f(0xe7, I::Vmovntdq, &[w(M, Vl), r(Vr, Vl)]).pfx(P66).mem(),
    v0f(0xf0, I::Vlddqu, &[w(Vr, Vl), r(M, Vl)]).pfx(PF2).mem(),
    v0f(0xf1, I::Vpsllw, SHIFT_X).pfx(P66),
    v0f(0xf2, I::Vpslld, SHIFT_X).pfx(P66),
    v0f(0xf3, I::Vpsllq, SHIFT_X).pfx(P66),
    v0f(0xf7, I::Vmaskmovdqu, &[r(Vr, X), r(Ur, X)])
        .pfx(P66)
        .reg_form()
        .l(0)
        .reads(&[Imp::Di]),
    // 0F 38
    v38(0x0c, I::Vpermilps, PS3).w(false),
    v38(0x0d, I::Vpermilpd, PS3).w(false),
    v38(0x0e, I::Vtestps, &[r(Vr, Vl), r(Wr, Vl)]).w(false).flags(PTEST),
    v38(0x0f, I::Vtestpd, &[r(Vr, Vl), r(Wr, Vl)]).w(false).flags(PTEST),
    v38(0x16, I::Vpermps, PS3).w(false).l(1).groups(AVX2),
    v38(0x17, I::Vptest, &[r(Vr, Vl), r(Wr, Vl)]).flags(PTEST),
    v38(0x18, I::Vbroadcastss, &[w(Vr, Vl), r(Wr, D)]).w(false),
    v38(0x19, I::Vbroadcastsd, &[w(Vr, Yy), r(Wr, Q)]).w(false).l(1),
    v38(0x1a, I::Vbroadcastf128, &[w(Vr, Yy), r(M, X)]).w(false).l(1).mem(),
    v38(0x1c, I::Vpabsb, LOAD),
    v38(0x1d, I::Vpabsw, LOAD),
    v38(0x1e, I::Vpabsd, LOAD),
    v38(0x20, I::Vpmovsxbw, &[w(Vr, Vl), r(Wr, Half)]),
    v38(0x21, I::Vpmovsxbd, &[w(Vr, Vl), r(Wr, Quarter)]),
    v38(0x22, I::Vpmovsxbq, &[w(Vr, Vl), r(Wr, Eighth)]),
    v38(0x23, I::Vpmovsxwd, &[w(Vr, Vl), r(Wr, Half)]),
    v38(0x24, I::Vpmovsxwq, &[w(Vr, Vl), r(Wr, Quarter)]),
    v38(0x25, I::Vpmovsxdq, &[w(Vr, Vl), r(Wr, Half)]),
    v38(0x2a, I::Vmovntdqa, &[w(Vr, Vl), r(M, Vl)]).mem(),
    v38(0x2c, I::Vmaskmovps, &[w(Vr, Vl), r(Hr, Vl), r(M, Vl)]).w(false).mem(),
    v38(0x2d, I::Vmaskmovpd, &[w(Vr, Vl), r(Hr, Vl), r(M, Vl)]).w(false).mem(),
    v38(0x2e, I::Vmaskmovps, &[w(M, Vl), r(Hr, Vl), r(Vr, Vl)]).w(false).mem(),
    v38(0x2f, I::Vmaskmovpd, &[w(M, Vl), r(Hr, Vl), r(Vr, Vl)]).w(false).mem(),
    v38(0x30, I::Vpmovzxbw, &[w(Vr, Vl), r(Wr, Half)]),
    v38(0x31, I::Vpmovzxbd, &[w(Vr, Vl), r(Wr, Quarter)]),
    v38(0x32, I::Vpmovzxbq, &[w(Vr, Vl), r(Wr, Eighth)]),
    v38(0x33, I::Vpmovzxwd, &[w(Vr, Vl), r(Wr, Half)]),
    v38(0x34, I::Vpmovzxwq, &[w(Vr, Vl), r(Wr, Quarter)]),
    v38(0x35, I::Vpmovzxdq, &[w(Vr, Vl), r(Wr, Half)]),
    v38(0x36, I::Vpermd, PS3).w(false).l(1).groups(AVX2),
    v38(0x45, I::Vpsrlvd, PS3).w(false).groups(AVX2),
    v38(0x45, I::Vpsrlvq, PS3).w(true).groups(AVX2),
    v38(0x46, I::Vpsravd, PS3).w(false).groups(AVX2),
    v38(0x47, I::Vpsllvd, PS3).w(false).groups(AVX2),
    v38(0x47, I::Vpsllvq, PS3).w(true).groups(AVX2),
    v38(0x58, I::Vpbroadcastd, &[w(Vr, Vl), r(Wr, D)]).w(false).groups(AVX2),
    v38(0x59, I::Vpbroadcastq, &[w(Vr, Vl), r(Wr, Q)]).w(false).groups(AVX2),
    v38(0x5a, I::Vbroadcasti128, &[w(Vr, Yy), r(M, X)]).w(false).l(1).mem().groups(AVX2),
    v38(0x78, I::Vpbroadcastb, &[w(Vr, Vl), r(Wr, B)]).w(false).groups(AVX2),
    v38(0x79, I::Vpbroadcastw, &[w(Vr, Vl), r(Wr, W)]).w(false).groups(AVX2),
    v38(0x8c, I::Vpmaskmovd, &[w(Vr, Vl), r(Hr, Vl), r(M, Vl)]).w(false).mem().groups(AVX2),
    v38(0x8c, I::Vpmaskmovq, &[w(Vr, Vl), r(Hr, Vl), r(M, Vl)]).w(true).mem().groups(AVX2),
    v38(0x8e, I::Vpmaskmovd, &[w(M, Vl), r(Hr, Vl), r(Vr, Vl)]).w(false).mem().groups(AVX2),
    v38(0x8e, I::Vpmaskmovq, &[w(M, Vl), r(Hr, Vl), r(Vr, Vl)]).w(true).mem().groups(AVX2),
    v38(0xdb, I::Vaesimc, &[w(Vr, X), r(Wr, X)]).l(0).groups(&[Gr::Aes]),
    // BMI1 / BMI2
    vex(Map::M0F38, 0xf2, I::Andn, &[w(G, Y), r(Bg, Y), r(E, Y)])
        .pfx(NP)
        .l(0)
        .flags(BMI)
        .groups(BMI1),
    vex(Map::M0F38, 0xf3, I::Blsr, &[w(Bg, Y), r(E, Y)])
        .pfx(NP)
        .ext(1)
        .l(0)
        .flags(BMI)
        .groups(BMI1),
    vex(Map::M0F38, 0xf3, I::Blsmsk, &[w(Bg, Y), r(E, Y)])
        .pfx(NP)
        .ext(2)
        .l(0)
        .flags(BMI)
        .groups(BMI1),
    vex(Map::M0F38, 0xf3, I::Blsi, &[w(Bg, Y), r(E, Y)])
        .pfx(NP)
        .ext(3)
        .l(0)
        .flags(BMI)
        .groups(BMI1),
    vex(Map::M0F38, 0xf5, I::Bzhi, &[w(G, Y), r(E, Y), r(Bg, Y)])
        .pfx(NP)
        .l(0)
        .flags(BMI)
        .groups(BMI2),
    vex(Map::M0F38, 0xf5, I::Pext, &[w(G, Y), r(Bg, Y), r(E, Y)])
        .pfx(PF3)
        .l(0)
        .groups(BMI2),
    vex(Map::M0F38, 0xf5, I::Pdep, &[w(G, Y), r(Bg, Y), r(E, Y)])
        .pfx(PF2)
        .l(0)
        .groups(BMI2),
    vex(Map::M0F38, 0xf6, I::Mulx, &[w(G, Y), w(Bg, Y), r(E, Y)])
        .pfx(PF2)
        .l(0)
        .reads(&[Imp::Dx])
        .groups(BMI2),
    vex(Map::M0F38, 0xf7, I::Bextr, &[w(G, Y), r(E, Y), r(Bg, Y)])
        .pfx(NP)
        .l(0)
        .flags(BMI)
        .groups(BMI1),
    vex(Map::M0F38, 0xf7, I::Shlx, &[w(G, Y), r(E, Y), r(Bg, Y)])
        .pfx(P66)
        .l(0)
        .groups(BMI2),
    vex(Map::M0F38, 0xf7, I::Sarx, &[w(G, Y), r(E, Y), r(Bg, Y)])
        .pfx(PF3)
        .l(0)
        .groups(BMI2),
    vex(Map::M0F38, 0xf7, I::Shrx, &[w(G, Y), r(E, Y), r(Bg, Y)])
        .pfx(PF2)
        .l(0)
        .groups(BMI2),
    vex(Map::M0F3A, 0xf0, I::Rorx, &[w(G, Y), r(E, Y), r(Imm, B)])
        .pfx(PF2)
        .l(0)
        .groups(BMI2),
    // 0F 3A
    v3a(0x00, I::Vpermq, &[w(Vr, Yy), r(Wr, Yy), r(Imm, B)]).w(true).l(1).groups(AVX2),
    v3a(0x01, I::Vpermpd, &[w(Vr, Yy), r(Wr, Yy), r(Imm, B)]).w(true).l(1).groups(AVX2),
    v3a(0x02, I::Vpblendd, PS3I).w(false).groups(AVX2),
    v3a(0x04, I::Vpermilps, LOADI).w(false),
    v3a(0x05, I::Vpermilpd, LOADI).w(false),
    v3a(0x06, I::Vperm2f128, &[w(Vr, Yy), r(Hr, Yy), r(Wr, Yy), r(Imm, B)]).w(false).l(1),
    v3a(0x08, I::Vroundps, LOADI),
    v3a(0x09, I::Vroundpd, LOADI),
    v3a(0x0a, I::Vroundss, &[w(Vr, X), r(Hr, X), r(Wr, D), r(Imm, B)]),
    v3a(0x0b, I::Vroundsd, &[w(Vr, X), r(Hr, X), r(Wr, Q), r(Imm, B)]),
    v3a(0x0c, I::Vblendps, PS3I),
    v3a(0x0d, I::Vblendpd, PS3I),
    v3a(0x0e, I::Vpblendw, PS3I),
    v3a(0x0f, I::Vpalignr, PS3I),
    v3a(0x14, I::Vpextrb, &[w(R, D), r(Vr, X), r(Imm, B)]).reg_form().l(0),
    v3a(0x14, I::Vpextrb, &[w(M, B), r(Vr, X), r(Imm, B)]).mem().l(0),
    v3a(0x15, I::Vpextrw, &[w(R, D), r(Vr, X), r(Imm, B)]).reg_form().l(0),
    v3a(0x15, I::Vpextrw, &[w(M, W), r(Vr, X), r(Imm, B)]).mem().l(0),
    v3a(0x16, I::Vpextrd, &[w(E, D), r(Vr, X), r(Imm, B)]).w(false).l(0),
    v3a(0x16, I::Vpextrq, &[w(E, Q), r(Vr, X), r(Imm, B)]).w(true).l(0),
    v3a(0x17, I::Vextractps, &[w(E, D), r(Vr, X), r(Imm, B)]).l(0),
    v3a(0x18, I::Vinsertf128, &[w(Vr, Yy), r(Hr, Yy), r(Wr, X), r(Imm, B)]).w(false).l(1),
    v3a(0x19, I::Vextractf128, &[w(Wr, X), r(Vr, Yy), r(Imm, B)]).w(false).l(1),
    v3a(0x20, I::Vpinsrb, &[w(Vr, X), r(Hr, X), r(R, D), r(Imm, B)]).reg_form().l(0),
    v3a(0x20, I::Vpinsrb, &[w(Vr, X), r(Hr, X), r(M, B), r(Imm, B)]).mem().l(0),
    v3a(0x21, I::Vinsertps, &[w(Vr, X), r(Hr, X), r(Wr, D), r(Imm, B)]).l(0),
    v3a(0x22, I::Vpinsrd, &[w(Vr, X), r(Hr, X), r(E, D), r(Imm, B)]).w(false).l(0),
    v3a(0x22, I::Vpinsrq, &[w(Vr, X), r(Hr, X), r(E, Q), r(Imm, B)]).w(true).l(0),
    v3a(0x38, I::Vinserti128, &[w(Vr, Yy), r(Hr, Yy), r(Wr, X), r(Imm, B)])
        .w(false)
        .l(1)
        .groups(AVX2),
    v3a(0x39, I::Vextracti128, &[w(Wr, X), r(Vr, Yy), r(Imm, B)])
        .w(false)
        .l(1)
        .groups(AVX2),
    v3a(0x40, I::Vdpps, PS3I),
    v3a(0x41, I::Vdppd, PS3I).l(0),
    v3a(0x42, I::Vmpsadbw, PS3I),
    v3a(0x44, I::Vpclmulqdq, PS3I).groups(&[Gr::Pclmul]),
    v3a(0x46, I::Vperm2i128, &[w(Vr, Yy), r(Hr, Yy), r(Wr, Yy), r(Imm, B)])
        .w(false)
        .l(1)
        .groups(AVX2),
    v3a(0x4a, I::Vblendvps, BLENDV).w(false),
    v3a(0x4b, I::Vblendvpd, BLENDV).w(false),
    v3a(0x4c, I::Vpblendvb, BLENDV).w(false),
    v3a(0xdf, I::Vaeskeygenassist, &[w(Vr, X), r(Wr, X), r(Imm, B)]).l(0).groups(&[Gr::Aes]),
    // FMA4
    v3a(0x68, I::Vfmaddps, BLENDV).w(false).groups(FMA4),
    v3a(0x69, I::Vfmaddpd, BLENDV).w(false).groups(FMA4),
    v3a(0x6a, I::Vfmaddss, &[w(Vr, X), r(Hr, X), r(Wr, D), r(Is4, X)]).w(false).groups(FMA4),
    v3a(0x6b, I::Vfmaddsd, &[w(Vr, X), r(Hr, X), r(Wr, Q), r(Is4, X)]).w(false).groups(FMA4),
    v3a(0x68, I::Vfmaddps, &[w(Vr, Vl), r(Hr, Vl), r(Is4, Vl), r(Wr, Vl)]).w(true).groups(FMA4),
    v3a(0x69, I::Vfmaddpd, &[w(Vr, Vl), r(Hr, Vl), r(Is4, Vl), r(Wr, Vl)]).w(true).groups(FMA4),
    v3a(0x6a, I::Vfmaddss, &[w(Vr, X), r(Hr, X), r(Is4, X), r(Wr, D)]).w(true).groups(FMA4),
    v3a(0x6b, I::Vfmaddsd, &[w(Vr, X), r(Hr, X), r(Is4, X), r(Wr, Q)]).w(true).groups(FMA4),
    // Opmask moves
    v0f(0x90, I::Kmovw, &[w(K, W), r(Km, W)]).pfx(NP).w(false).l(0),
    v0f(0x90, I::Kmovb, &[w(K, B), r(Km, B)]).pfx(P66).w(false).l(0),
    v0f(0x90, I::Kmovq, &[w(K, Q), r(Km, Q)]).pfx(NP).w(true).l(0),
    v0f(0x90, I::Kmovd, &[w(K, D), r(Km, D)]).pfx(P66).w(true).l(0),
    v0f(0x91, I::Kmovw, &[w(M, W), r(K, W)]).pfx(NP).w(false).l(0).mem(),
    v0f(0x91, I::Kmovb, &[w(M, B), r(K, B)]).pfx(P66).w(false).l(0).mem(),
    v0f(0x91, I::Kmovq, &[w(M, Q), r(K, Q)]).pfx(NP).w(true).l(0).mem(),
    v0f(0x91, I::Kmovd, &[w(M, D), r(K, D)]).pfx(P66).w(true).l(0).mem(),
    v0f(0x92, I::Kmovw, &[w(K, W), r(R, D)]).pfx(NP).w(false).l(0).reg_form(),
    v0f(0x92, I::Kmovb, &[w(K, B), r(R, D)]).pfx(P66).w(false).l(0).reg_form(),
    v0f(0x92, I::Kmovd, &[w(K, D), r(R, D)]).pfx(PF2).w(false).l(0).reg_form(),
    v0f(0x92, I::Kmovq, &[w(K, Q), r(R, Q)]).pfx(PF2).w(true).l(0).reg_form(),
    v0f(0x93, I::Kmovw, &[w(G, D), r(Km, W)]).pfx(NP).w(false).l(0).reg_form(),
    v0f(0x93, I::Kmovb, &[w(G, D), r(Km, B)]).pfx(P66).w(false).l(0).reg_form(),
    v0f(0x93, I::Kmovd, &[w(G, D), r(Km, D)]).pfx(PF2).w(false).l(0).reg_form(),
    v0f(0x93, I::Kmovq, &[w(G, Q), r(Km, Q)]).pfx(PF2).w(true).l(0).reg_form(),
];

const PACKED_INT_OPS: &[(u8, X86Mnemonic)] = &[
    (0x60, I::Vpunpcklbw),
    (0x61, I::Vpunpcklwd),
    (0x62, I::Vpunpckldq),
    (0x63, I::Vpacksswb),
    (0x64, I::Vpcmpgtb),
    (0x65, I::Vpcmpgtw),
    (0x66, I::Vpcmpgtd),
    (0x67, I::Vpackuswb),
    (0x68, I::Vpunpckhbw),
    (0x69, I::Vpunpckhwd),
    (0x6a, I::Vpunpckhdq),
    (0x6b, I::Vpackssdw),
    (0x6c, I::Vpunpcklqdq),
    (0x6d, I::Vpunpckhqdq),
    (0x74, I::Vpcmpeqb),
    (0x75, I::Vpcmpeqw),
    (0x76, I::Vpcmpeqd),
    (0xd4, I::Vpaddq),
    (0xd5, I::Vpmullw),
    (0xd8, I::Vpsubusb),
    (0xd9, I::Vpsubusw),
    (0xda, I::Vpminub),
    (0xdb, I::Vpand),
    (0xdc, I::Vpaddusb),
    (0xdd, I::Vpaddusw),
    (0xde, I::Vpmaxub),
    (0xdf, I::Vpandn),
    (0xe0, I::Vpavgb),
    (0xe3, I::Vpavgw),
    (0xe4, I::Vpmulhuw),
    (0xe5, I::Vpmulhw),
    (0xe8, I::Vpsubsb),
    (0xe9, I::Vpsubsw),
    (0xea, I::Vpminsw),
    (0xeb, I::Vpor),
    (0xec, I::Vpaddsb),
    (0xed, I::Vpaddsw),
    (0xee, I::Vpmaxsw),
    (0xef, I::Vpxor),
    (0xf4, I::Vpmuludq),
    (0xf5, I::Vpmaddwd),
    (0xf6, I::Vpsadbw),
    (0xf8, I::Vpsubb),
    (0xf9, I::Vpsubw),
    (0xfa, I::Vpsubd),
    (0xfb, I::Vpsubq),
    (0xfc, I::Vpaddb),
    (0xfd, I::Vpaddw),
    (0xfe, I::Vpaddd),
];

const PACKED_INT38_OPS: &[(u8, X86Mnemonic)] = &[
    (0x00, I::Vpshufb),
    (0x01, I::Vphaddw),
    (0x02, I::Vphaddd),
    (0x03, I::Vphaddsw),
    (0x04, I::Vpmaddubsw),
    (0x05, I::Vphsubw),
    (0x06, I::Vphsubd),
    (0x07, I::Vphsubsw),
    (0x08, I::Vpsignb),
    (0x09, I::Vpsignw),
    (0x0a, I::Vpsignd),
    (0x0b, I::Vpmulhrsw),
    (0x28, I::Vpmuldq),
    (0x29, I::Vpcmpeqq),
    (0x2b, I::Vpackusdw),
    (0x37, I::Vpcmpgtq),
    (0x38, I::Vpminsb),
    (0x39, I::Vpminsd),
    (0x3a, I::Vpminuw),
    (0x3b, I::Vpminud),
    (0x3c, I::Vpmaxsb),
    (0x3d, I::Vpmaxsd),
    (0x3e, I::Vpmaxuw),
    (0x3f, I::Vpmaxud),
    (0x40, I::Vpmulld),
    (0xdc, I::Vaesenc),
    (0xdd, I::Vaesenclast),
    (0xde, I::Vaesdec),
    (0xdf, I::Vaesdeclast),
];

/// `66`-prefixed three-operand packed integer rows.
const fn packed3<const N: usize>(map: Map, rows: &[(u8, X86Mnemonic)]) -> [Entry; N] {
    assert!(rows.len() == N);
    let mut out = [Entry::EMPTY; N];
    let mut i = 0;
    while i < N {
        let (opcode, m) = rows[i];
        out[i] = vex(map, opcode, m, PS3).pfx(P66).groups(AVX);
        i += 1;
    }
    out
}

pub static PACKED_INT: [Entry; PACKED_INT_OPS.len()] = packed3(Map::M0F, PACKED_INT_OPS);
pub static PACKED_INT38: [Entry; PACKED_INT38_OPS.len()] =
    packed3(Map::M0F38, PACKED_INT38_OPS);

/// `(opcode, ps/ss name, pd/sd name, scalar)`.
const FMA_OPS: &[(u8, X86Mnemonic, X86Mnemonic, bool)] = &[
    (0x96, I::Vfmaddsub132ps, I::Vfmaddsub132pd, false),
    (0x97, I::Vfmsubadd132ps, I::Vfmsubadd132pd, false),
    (0x98, I::Vfmadd132ps, I::Vfmadd132pd, false),
    (0x99, I::Vfmadd132ss, I::Vfmadd132sd, true),
    (0x9a, I::Vfmsub132ps, I::Vfmsub132pd, false),
    (0x9b, I::Vfmsub132ss, I::Vfmsub132sd, true),
    (0x9c, I::Vfnmadd132ps, I::Vfnmadd132pd, false),
    (0x9d, I::Vfnmadd132ss, I::Vfnmadd132sd, true),
    (0x9e, I::Vfnmsub132ps, I::Vfnmsub132pd, false),
    (0x9f, I::Vfnmsub132ss, I::Vfnmsub132sd, true),
    (0xa6, I::Vfmaddsub213ps, I::Vfmaddsub213pd, false),
    (0xa7, I::Vfmsubadd213ps, I::Vfmsubadd213pd, false),
    (0xa8, I::Vfmadd213ps, I::Vfmadd213pd, false),
    (0xa9, I::Vfmadd213ss, I::Vfmadd213sd, true),
    (0xaa, I::Vfmsub213ps, I::Vfmsub213pd, false),
    (0xab, I::Vfmsub213ss, I::Vfmsub213sd, true),
    (0xac, I::Vfnmadd213ps, I::Vfnmadd213pd, false),
    (0xad, I::Vfnmadd213ss, I::Vfnmadd213sd, true),
    (0xae, I::Vfnmsub213ps, I::Vfnmsub213pd, false),
    (0xaf, I::Vfnmsub213ss, I::Vfnmsub213sd, true),
    (0xb6, I::Vfmaddsub231ps, I::Vfmaddsub231pd, false),
    (0xb7, I::Vfmsubadd231ps, I::Vfmsubadd231pd, false),
    (0xb8, I::Vfmadd231ps, I::Vfmadd231pd, false),
    (0xb9, I::Vfmadd231ss, I::Vfmadd231sd, true),
    (0xba, I::Vfmsub231ps, I::Vfmsub231pd, false),
    (0xbb, I::Vfmsub231ss, I::Vfmsub231sd, true),
    (0xbc, I::Vfnmadd231ps, I::Vfnmadd231pd, false),
    (0xbd, I::Vfnmadd231ss, I::Vfnmadd231sd, true),
    (0xbe, I::Vfnmsub231ps, I::Vfnmsub231pd, false),
    (0xbf, I::Vfnmsub231ss, I::Vfnmsub231sd, true),
];

const fn fma_rows<const N: usize>(
    rows: &[(u8, X86Mnemonic, X86Mnemonic, bool)],
) -> [[Entry; 2]; N] {
    const PACKED: &[OpSpec] = &[rw(Vr, Vl), r(Hr, Vl), r(Wr, Vl)];
    const SINGLE: &[OpSpec] = &[rw(Vr, X), r(Hr, X), r(Wr, D)];
    const DOUBLE: &[OpSpec] = &[rw(Vr, X), r(Hr, X), r(Wr, Q)];
    assert!(rows.len() == N);
    let mut out = [[Entry::EMPTY; 2]; N];
    let mut i = 0;
    while i < N {
        let (opcode, single, double, scalar) = rows[i];
        let (ops_s, ops_d) = if scalar {
            (SINGLE, DOUBLE)
        } else {
            (PACKED, PACKED)
        };
        out[i][0] = vex(Map::M0F38, opcode, single, ops_s)
            .pfx(P66)
            .w(false)
            .groups(&[Gr::Fma]);
        out[i][1] = vex(Map::M0F38, opcode, double, ops_d)
            .pfx(P66)
            .w(true)
            .groups(&[Gr::Fma]);
        i += 1;
    }
    out
}

pub static FMA: [[Entry; 2]; FMA_OPS.len()] = fma_rows(FMA_OPS);

const K3: &[OpSpec] = &[w(K, Q), r(Kv, Q), r(Km, Q)];
const K2: &[OpSpec] = &[w(K, Q), r(Km, Q)];
const KTEST: &[OpSpec] = &[r(K, Q), r(Km, Q)];

/// `(opcode, [w, b, q, d] names, operands, VEX.L, flags)`.
type KRow = (u8, [X86Mnemonic; 4], &'static [OpSpec], u8, u64);

const K_OPS: &[KRow] = &[
    (0x41, [I::Kandw, I::Kandb, I::Kandq, I::Kandd], K3, 1, 0),
    (0x42, [I::Kandnw, I::Kandnb, I::Kandnq, I::Kandnd], K3, 1, 0),
    (0x44, [I::Knotw, I::Knotb, I::Knotq, I::Knotd], K2, 0, 0),
    (0x45, [I::Korw, I::Korb, I::Korq, I::Kord], K3, 1, 0),
    (0x46, [I::Kxnorw, I::Kxnorb, I::Kxnorq, I::Kxnord], K3, 1, 0),
    (0x47, [I::Kxorw, I::Kxorb, I::Kxorq, I::Kxord], K3, 1, 0),
    (0x4a, [I::Kaddw, I::Kaddb, I::Kaddq, I::Kaddd], K3, 1, 0),
    (0x98, [I::Kortestw, I::Kortestb, I::Kortestq, I::Kortestd], KTEST, 0, ZF_CF),
    (0x99, [I::Ktestw, I::Ktestb, I::Ktestq, I::Ktestd], KTEST, 0, ZF_CF),
];

/// Opmask register-register rows in the four width forms
/// `NP W0`, `66 W0`, `NP W1`, `66 W1`.
const fn k_rows<const N: usize>(rows: &[KRow]) -> [[Entry; 4]; N] {
    const FORMS: [(Pfx, bool); 4] = [
        (Pfx::None, false),
        (Pfx::P66, false),
        (Pfx::None, true),
        (Pfx::P66, true),
    ];
    assert!(rows.len() == N);
    let mut out = [[Entry::EMPTY; 4]; N];
    let mut i = 0;
    while i < N {
        let (opcode, names, ops, l, flags) = rows[i];
        let mut f = 0;
        while f < 4 {
            out[i][f] = vex(Map::M0F, opcode, names[f], ops)
                .pfx(FORMS[f].0)
                .w(FORMS[f].1)
                .l(l)
                .reg_form()
                .flags(flags)
                .groups(&[Gr::Avx512]);
            f += 1;
        }
        i += 1;
    }
    out
}

pub static KMASK: [[Entry; 4]; K_OPS.len()] = k_rows(K_OPS);
