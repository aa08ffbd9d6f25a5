//! EVEX-encoded rows (AVX-512 foundation subset).
//!
//! Every row allows `{k}` write masking unless it clears [`MASK`];
//! broadcast and rounding are opted into per row with [`BCST32`],
//! [`BCST64`], [`ER`] and [`SAE`].

use super::*;
use crate::core::group::Group as Gr;
use crate::core::x86::X86Mnemonic as I;
use L::*;
use S::*;

const NP: Pfx = Pfx::None;
const P66: Pfx = Pfx::P66;
const PF3: Pfx = Pfx::F3;
const PF2: Pfx = Pfx::F2;

const AVX512: &[Gr] = &[Gr::Avx512];

const PS3: &[OpSpec] = &[w(Vr, Vl), r(Hr, Vl), r(Wr, Vl)];
const PS3I: &[OpSpec] = &[w(Vr, Vl), r(Hr, Vl), r(Wr, Vl), r(Imm, B)];
const SS3: &[OpSpec] = &[w(Vr, X), r(Hr, X), r(Wr, D)];
const SD3: &[OpSpec] = &[w(Vr, X), r(Hr, X), r(Wr, Q)];
const LOAD: &[OpSpec] = &[w(Vr, Vl), r(Wr, Vl)];
const STORE: &[OpSpec] = &[w(Wr, Vl), r(Vr, Vl)];
const LOADI: &[OpSpec] = &[w(Vr, Vl), r(Wr, Vl), r(Imm, B)];
const CMP_K: &[OpSpec] = &[w(K, Q), r(Hr, Vl), r(Wr, Vl)];
const CMP_KI: &[OpSpec] = &[w(K, Q), r(Hr, Vl), r(Wr, Vl), r(Imm, B)];
const SHIFT_I: &[OpSpec] = &[w(Hr, Vl), r(Wr, Vl), r(Imm, B)];
const FMA3: &[OpSpec] = &[rw(Vr, Vl), r(Hr, Vl), r(Wr, Vl)];

const fn e0f(opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    evex(Map::M0F, opcode, m, ops).groups(AVX512)
}

const fn e38(opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    evex(Map::M0F38, opcode, m, ops).pfx(P66).groups(AVX512)
}

const fn e3a(opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    evex(Map::M0F3A, opcode, m, ops).pfx(P66).groups(AVX512)
}

pub static TABLE: &[Entry] = &[
    // 0F
    e0f(0x10, I::Vmovups, LOAD).pfx(NP).w(false),
    e0f(0x10, I::Vmovupd, LOAD).pfx(P66).w(true),
    e0f(0x10, I::Vmovss, &[w(Vr, X), r(M, D)]).pfx(PF3).w(false).mem(),
    e0f(0x10, I::Vmovss, &[w(Vr, X), r(Hr, X), r(Ur, X)]).pfx(PF3).w(false).reg_form(),
    e0f(0x10, I::Vmovsd, &[w(Vr, X), r(M, Q)]).pfx(PF2).w(true).mem(),
    e0f(0x10, I::Vmovsd, &[w(Vr, X), r(Hr, X), r(Ur, X)]).pfx(PF2).w(true).reg_form(),
    e0f(0x11, I::Vmovups, STORE).pfx(NP).w(false),
    e0f(0x11, I::Vmovupd, STORE).pfx(P66).w(true),
    e0f(0x11, I::Vmovss, &[w(M, D), r(Vr, X)]).pfx(PF3).w(false).mem(),
    e0f(0x11, I::Vmovsd, &[w(M, Q), r(Vr, X)]).pfx(PF2).w(true).mem(),
    e0f(0x14, I::Vunpcklps, PS3).pfx(NP).w(false).attrs(BCST32),
    e0f(0x14, I::Vunpcklpd, PS3).pfx(P66).w(true).attrs(BCST64),
    e0f(0x15, I::Vunpckhps, PS3).pfx(NP).w(false).attrs(BCST32),
    e0f(0x15, I::Vunpckhpd, PS3).pfx(P66).w(true).attrs(BCST64),
    e0f(0x28, I::Vmovaps, LOAD).pfx(NP).w(false),
    e0f(0x28, I::Vmovapd, LOAD).pfx(P66).w(true),
    e0f(0x29, I::Vmovaps, STORE).pfx(NP).w(false),
    e0f(0x29, I::Vmovapd, STORE).pfx(P66).w(true),
    e0f(0x51, I::Vsqrtps, LOAD).pfx(NP).w(false).attrs(BCST32 | ER),
    e0f(0x51, I::Vsqrtpd, LOAD).pfx(P66).w(true).attrs(BCST64 | ER),
    e0f(0x51, I::Vsqrtss, SS3).pfx(PF3).w(false).attrs(ER),
    e0f(0x51, I::Vsqrtsd, SD3).pfx(PF2).w(true).attrs(ER),
    e0f(0x54, I::Vandps, PS3).pfx(NP).w(false).attrs(BCST32),
    e0f(0x54, I::Vandpd, PS3).pfx(P66).w(true).attrs(BCST64),
    e0f(0x55, I::Vandnps, PS3).pfx(NP).w(false).attrs(BCST32),
    e0f(0x55, I::Vandnpd, PS3).pfx(P66).w(true).attrs(BCST64),
    e0f(0x56, I::Vorps, PS3).pfx(NP).w(false).attrs(BCST32),
    e0f(0x56, I::Vorpd, PS3).pfx(P66).w(true).attrs(BCST64),
    e0f(0x57, I::Vxorps, PS3).pfx(NP).w(false).attrs(BCST32),
    e0f(0x57, I::Vxorpd, PS3).pfx(P66).w(true).attrs(BCST64),
    e0f(0x5a, I::Vcvtps2pd, &[w(Vr, Vl), r(Wr, Half)])
        .pfx(NP)
        .w(false)
        .attrs(BCST32 | SAE),
    e0f(0x5a, I::Vcvtpd2ps, &[w(Vr, Half), r(Wr, Vl)])
        .pfx(P66)
        .w(true)
        .attrs(BCST64 | ER),
    e0f(0x5b, I::Vcvtdq2ps, LOAD).pfx(NP).w(false).attrs(BCST32 | ER),
    e0f(0x5b, I::Vcvtps2dq, LOAD).pfx(P66).w(false).attrs(BCST32 | ER),
    e0f(0x5b, I::Vcvttps2dq, LOAD).pfx(PF3).w(false).attrs(BCST32 | SAE),
    e0f(0x6e, I::Vmovd, &[w(Vr, X), r(E, D)]).pfx(P66).w(false).l(0).no_mask(),
    e0f(0x6e, I::Vmovq, &[w(Vr, X), r(E, Q)]).pfx(P66).w(true).l(0).no_mask(),
    e0f(0x6f, I::Vmovdqa32, LOAD).pfx(P66).w(false),
    e0f(0x6f, I::Vmovdqa64, LOAD).pfx(P66).w(true),
    e0f(0x6f, I::Vmovdqu32, LOAD).pfx(PF3).w(false),
    e0f(0x6f, I::Vmovdqu64, LOAD).pfx(PF3).w(true),
    e0f(0x6f, I::Vmovdqu8, LOAD).pfx(PF2).w(false),
    e0f(0x6f, I::Vmovdqu16, LOAD).pfx(PF2).w(true),
    e0f(0x70, I::Vpshufd, LOADI).pfx(P66).w(false).attrs(BCST32),
    e0f(0x72, I::Vprord, SHIFT_I).pfx(P66).ext(0).w(false).attrs(BCST32),
    e0f(0x72, I::Vprorq, SHIFT_I).pfx(P66).ext(0).w(true).attrs(BCST64),
    e0f(0x72, I::Vprold, SHIFT_I).pfx(P66).ext(1).w(false).attrs(BCST32),
    e0f(0x72, I::Vprolq, SHIFT_I).pfx(P66).ext(1).w(true).attrs(BCST64),
    e0f(0x72, I::Vpsrld, SHIFT_I).pfx(P66).ext(2).w(false).attrs(BCST32),
    e0f(0x72, I::Vpsrad, SHIFT_I).pfx(P66).ext(4).w(false).attrs(BCST32),
    e0f(0x72, I::Vpsraq, SHIFT_I).pfx(P66).ext(4).w(true).attrs(BCST64),
    e0f(0x72, I::Vpslld, SHIFT_I).pfx(P66).ext(6).w(false).attrs(BCST32),
    e0f(0x73, I::Vpsrlq, SHIFT_I).pfx(P66).ext(2).w(true).attrs(BCST64),
    e0f(0x73, I::Vpsllq, SHIFT_I).pfx(P66).ext(6).w(true).attrs(BCST64),
    e0f(0x76, I::Vpcmpeqd, CMP_K).pfx(P66).w(false).attrs(BCST32),
    e0f(0x7e, I::Vmovd, &[w(E, D), r(Vr, X)]).pfx(P66).w(false).l(0).no_mask(),
    e0f(0x7e, I::Vmovq, &[w(E, Q), r(Vr, X)]).pfx(P66).w(true).l(0).no_mask(),
    e0f(0x7e, I::Vmovq, &[w(Vr, X), r(Wr, Q)]).pfx(PF3).w(true).l(0).no_mask(),
    e0f(0x7f, I::Vmovdqa32, STORE).pfx(P66).w(false),
    e0f(0x7f, I::Vmovdqa64, STORE).pfx(P66).w(true),
    e0f(0x7f, I::Vmovdqu32, STORE).pfx(PF3).w(false),
    e0f(0x7f, I::Vmovdqu64, STORE).pfx(PF3).w(true),
    e0f(0x7f, I::Vmovdqu8, STORE).pfx(PF2).w(false),
    e0f(0x7f, I::Vmovdqu16, STORE).pfx(PF2).w(true),
    e0f(0xc2, I::Vcmpps, CMP_KI).pfx(NP).w(false).attrs(BCST32 | SAE | CC_AVX),
    e0f(0xc2, I::Vcmppd, CMP_KI).pfx(P66).w(true).attrs(BCST64 | SAE | CC_AVX),
    e0f(0xc6, I::Vshufps, PS3I).pfx(NP).w(false).attrs(BCST32),
    e0f(0xc6, I::Vshufpd, PS3I).pfx(P66).w(true).attrs(BCST64),
    e0f(0xd6, I::Vmovq, &[w(Wr, Q), r(Vr, X)]).pfx(P66).w(true).l(0).no_mask(),
    e0f(0xe6, I::Vcvttpd2dq, &[w(Vr, Half), r(Wr, Vl)])
        .pfx(P66)
        .w(true)
        .attrs(BCST64 | SAE),
    e0f(0xe6, I::Vcvtdq2pd, &[w(Vr, Vl), r(Wr, Half)]).pfx(PF3).w(false).attrs(BCST32),
    e0f(0xe7, I::Vmovntdq, &[w(M, Vl), r(Vr, Vl)]).pfx(P66).w(false).mem().no_mask(),
    // 0F 38
    e38(0x16, I::Vpermps, PS3).w(false).attrs(BCST32),
    e38(0x16, I::Vpermpd, PS3).w(true).attrs(BCST64),
    e38(0x18, I::Vbroadcastss, &[w(Vr, Vl), r(Wr, D)]).w(false),
    e38(0x19, I::Vbroadcastsd, &[w(Vr, Vl), r(Wr, Q)]).w(true),
    e38(0x1e, I::Vpabsd, LOAD).w(false).attrs(BCST32),
    e38(0x1f, I::Vpabsq, LOAD).w(true).attrs(BCST64),
    e38(0x29, I::Vpcmpeqq, CMP_K).w(true).attrs(BCST64),
    e38(0x36, I::Vpermd, PS3).w(false).attrs(BCST32),
    e38(0x36, I::Vpermq, PS3).w(true).attrs(BCST64),
    e38(0x39, I::Vpminsd, PS3).w(false).attrs(BCST32),
    e38(0x39, I::Vpminsq, PS3).w(true).attrs(BCST64),
    e38(0x3d, I::Vpmaxsd, PS3).w(false).attrs(BCST32),
    e38(0x3d, I::Vpmaxsq, PS3).w(true).attrs(BCST64),
    e38(0x40, I::Vpmulld, PS3).w(false).attrs(BCST32),
    e38(0x40, I::Vpmullq, PS3).w(true).attrs(BCST64),
    e38(0x45, I::Vpsrlvd, PS3).w(false).attrs(BCST32),
    e38(0x45, I::Vpsrlvq, PS3).w(true).attrs(BCST64),
    e38(0x46, I::Vpsravd, PS3).w(false).attrs(BCST32),
    e38(0x46, I::Vpsravq, PS3).w(true).attrs(BCST64),
    e38(0x47, I::Vpsllvd, PS3).w(false).attrs(BCST32),
    e38(0x47, I::Vpsllvq, PS3).w(true).attrs(BCST64),
    e38(0x58, I::Vpbroadcastd, &[w(Vr, Vl), r(Wr, D)]).w(false),
    e38(0x59, I::Vpbroadcastq, &[w(Vr, Vl), r(Wr, Q)]).w(true),
    e38(0x64, I::Vpblendmd, PS3).w(false).attrs(BCST32),
    e38(0x64, I::Vpblendmq, PS3).w(true).attrs(BCST64),
    e38(0x7c, I::Vpbroadcastd, &[w(Vr, Vl), r(R, D)]).w(false).reg_form(),
    e38(0x7c, I::Vpbroadcastq, &[w(Vr, Vl), r(R, Q)]).w(true).reg_form(),
    e38(0xa8, I::Vfmadd213ps, FMA3).w(false).attrs(BCST32 | ER),
    e38(0xa8, I::Vfmadd213pd, FMA3).w(true).attrs(BCST64 | ER),
    e38(0xa9, I::Vfmadd213ss, &[rw(Vr, X), r(Hr, X), r(Wr, D)]).w(false).attrs(ER),
    e38(0xa9, I::Vfmadd213sd, &[rw(Vr, X), r(Hr, X), r(Wr, Q)]).w(true).attrs(ER),
    e38(0xb8, I::Vfmadd231ps, FMA3).w(false).attrs(BCST32 | ER),
    e38(0xb8, I::Vfmadd231pd, FMA3).w(true).attrs(BCST64 | ER),
    e38(0xb9, I::Vfmadd231ss, &[rw(Vr, X), r(Hr, X), r(Wr, D)]).w(false).attrs(ER),
    e38(0xb9, I::Vfmadd231sd, &[rw(Vr, X), r(Hr, X), r(Wr, Q)]).w(true).attrs(ER),
    // 0F 3A
    e3a(0x00, I::Vpermq, LOADI).w(true).attrs(BCST64),
    e3a(0x01, I::Vpermpd, LOADI).w(true).attrs(BCST64),
    e3a(0x03, I::Valignd, PS3I).w(false).attrs(BCST32),
    e3a(0x03, I::Valignq, PS3I).w(true).attrs(BCST64),
    e3a(0x0f, I::Vpalignr, PS3I),
    e3a(0x18, I::Vinsertf32x4, &[w(Vr, Vl), r(Hr, Vl), r(Wr, X), r(Imm, B)]).w(false),
    e3a(0x19, I::Vextractf32x4, &[w(Wr, X), r(Vr, Vl), r(Imm, B)]).w(false),
    e3a(0x1a, I::Vinsertf64x4, &[w(Vr, Zz), r(Hr, Zz), r(Wr, Yy), r(Imm, B)]).w(true).l(2),
    e3a(0x1b, I::Vextractf64x4, &[w(Wr, Yy), r(Vr, Zz), r(Imm, B)]).w(true).l(2),
    e3a(0x1e, I::Vpcmpud, CMP_KI).w(false).attrs(BCST32),
    e3a(0x1e, I::Vpcmpuq, CMP_KI).w(true).attrs(BCST64),
    e3a(0x1f, I::Vpcmpd, CMP_KI).w(false).attrs(BCST32),
    e3a(0x1f, I::Vpcmpq, CMP_KI).w(true).attrs(BCST64),
    e3a(0x25, I::Vpternlogd, &[rw(Vr, Vl), r(Hr, Vl), r(Wr, Vl), r(Imm, B)])
        .w(false)
        .attrs(BCST32),
    e3a(0x25, I::Vpternlogq, &[rw(Vr, Vl), r(Hr, Vl), r(Wr, Vl), r(Imm, B)])
        .w(true)
        .attrs(BCST64),
    e3a(0x38, I::Vinserti32x4, &[w(Vr, Vl), r(Hr, Vl), r(Wr, X), r(Imm, B)]).w(false),
    e3a(0x39, I::Vextracti32x4, &[w(Wr, X), r(Vr, Vl), r(Imm, B)]).w(false),
    e3a(0x3a, I::Vinserti64x4, &[w(Vr, Zz), r(Hr, Zz), r(Wr, Yy), r(Imm, B)]).w(true).l(2),
    e3a(0x3b, I::Vextracti64x4, &[w(Wr, Yy), r(Vr, Zz), r(Imm, B)]).w(true).l(2),
];

/// `(map, opcode, name, EVEX.W, attributes)`.
type IntRow = (Map, u8, X86Mnemonic, Option<bool>, u32);

const PACKED_INT_OPS: &[IntRow] = &[
    (Map::M0F, 0xd4, I::Vpaddq, Some(true), BCST64),
    (Map::M0F, 0xd5, I::Vpmullw, None, 0),
    (Map::M0F, 0xda, I::Vpminub, None, 0),
    (Map::M0F, 0xdb, I::Vpandd, Some(false), BCST32),
    (Map::M0F, 0xdb, I::Vpandq, Some(true), BCST64),
    (Map::M0F, 0xde, I::Vpmaxub, None, 0),
    (Map::M0F, 0xdf, I::Vpandnd, Some(false), BCST32),
    (Map::M0F, 0xdf, I::Vpandnq, Some(true), BCST64),
    (Map::M0F, 0xe0, I::Vpavgb, None, 0),
    (Map::M0F, 0xeb, I::Vpord, Some(false), BCST32),
    (Map::M0F, 0xeb, I::Vporq, Some(true), BCST64),
    (Map::M0F, 0xef, I::Vpxord, Some(false), BCST32),
    (Map::M0F, 0xef, I::Vpxorq, Some(true), BCST64),
    (Map::M0F, 0xf4, I::Vpmuludq, Some(true), BCST64),
    (Map::M0F, 0xf8, I::Vpsubb, None, 0),
    (Map::M0F, 0xf9, I::Vpsubw, None, 0),
    (Map::M0F, 0xfa, I::Vpsubd, Some(false), BCST32),
    (Map::M0F, 0xfb, I::Vpsubq, Some(true), BCST64),
    (Map::M0F, 0xfc, I::Vpaddb, None, 0),
    (Map::M0F, 0xfd, I::Vpaddw, None, 0),
    (Map::M0F, 0xfe, I::Vpaddd, Some(false), BCST32),
    (Map::M0F38, 0x00, I::Vpshufb, None, 0),
    (Map::M0F38, 0x3b, I::Vpminud, Some(false), BCST32),
    (Map::M0F38, 0x3f, I::Vpmaxud, Some(false), BCST32),
];

const fn packed_int_rows<const N: usize>(rows: &[IntRow]) -> [Entry; N] {
    assert!(rows.len() == N);
    let mut out = [Entry::EMPTY; N];
    let mut i = 0;
    while i < N {
        let (map, opcode, m, w, attrs) = rows[i];
        let mut e = evex(map, opcode, m, PS3).pfx(Pfx::P66).attrs(attrs).groups(AVX512);
        e.pat.w = w;
        out[i] = e;
        i += 1;
    }
    out
}

pub static PACKED_INT: [Entry; PACKED_INT_OPS.len()] = packed_int_rows(PACKED_INT_OPS);

/// `(opcode, [ps, pd, ss, sd], rounding control)`.
type ArithRow = (u8, [X86Mnemonic; 4], u32);

const ARITH_OPS: &[ArithRow] = &[
    (0x58, [I::Vaddps, I::Vaddpd, I::Vaddss, I::Vaddsd], ER),
    (0x59, [I::Vmulps, I::Vmulpd, I::Vmulss, I::Vmulsd], ER),
    (0x5c, [I::Vsubps, I::Vsubpd, I::Vsubss, I::Vsubsd], ER),
    (0x5d, [I::Vminps, I::Vminpd, I::Vminss, I::Vminsd], SAE),
    (0x5e, [I::Vdivps, I::Vdivpd, I::Vdivss, I::Vdivsd], ER),
    (0x5f, [I::Vmaxps, I::Vmaxpd, I::Vmaxss, I::Vmaxsd], SAE),
];

/// Floating-point arithmetic in its packed single/double and scalar
/// single/double forms.
const fn arith_rows<const N: usize>(rows: &[ArithRow]) -> [[Entry; 4]; N] {
    assert!(rows.len() == N);
    let mut out = [[Entry::EMPTY; 4]; N];
    let mut i = 0;
    while i < N {
        let (opcode, names, rc) = rows[i];
        out[i][0] = e0f(opcode, names[0], PS3).pfx(NP).w(false).attrs(BCST32 | rc);
        out[i][1] = e0f(opcode, names[1], PS3).pfx(P66).w(true).attrs(BCST64 | rc);
        out[i][2] = e0f(opcode, names[2], SS3).pfx(PF3).w(false).attrs(rc);
        out[i][3] = e0f(opcode, names[3], SD3).pfx(PF2).w(true).attrs(rc);
        i += 1;
    }
    out
}

pub static ARITH: [[Entry; 4]; ARITH_OPS.len()] = arith_rows(ARITH_OPS);
