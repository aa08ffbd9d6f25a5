//! AMD XOP rows (`8F` escape, maps 8, 9 and A).

use super::*;
use crate::core::group::Group as Gr;
use crate::core::x86::flags::sets::BMI;
use crate::core::x86::X86Mnemonic as I;
use L::*;
use S::*;

const XOP: &[Gr] = &[Gr::Xop];

const MAC: &[OpSpec] = &[w(Vr, X), r(Hr, X), r(Wr, X), r(Is4, X)];
const SEL_W0: &[OpSpec] = &[w(Vr, Vl), r(Hr, Vl), r(Wr, Vl), r(Is4, Vl)];
const SEL_W1: &[OpSpec] = &[w(Vr, Vl), r(Hr, Vl), r(Is4, Vl), r(Wr, Vl)];
const PERM_W0: &[OpSpec] = &[w(Vr, X), r(Hr, X), r(Wr, X), r(Is4, X)];
const PERM_W1: &[OpSpec] = &[w(Vr, X), r(Hr, X), r(Is4, X), r(Wr, X)];
const ROT_I: &[OpSpec] = &[w(Vr, X), r(Wr, X), r(Imm, B)];
const COM: &[OpSpec] = &[w(Vr, X), r(Hr, X), r(Wr, X), r(Imm, B)];
const UNARY: &[OpSpec] = &[w(Vr, X), r(Wr, X)];
/// Shift/rotate by vector with the count in r/m (W0).
const VSH_W0: &[OpSpec] = &[w(Vr, X), r(Wr, X), r(Hr, X)];
/// Shift/rotate by vector with the count in vvvv (W1).
const VSH_W1: &[OpSpec] = &[w(Vr, X), r(Hr, X), r(Wr, X)];

const fn x8(opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    xop(Map::Xop8, opcode, m, ops).pfx(Pfx::None).groups(XOP)
}

const fn x9(opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    xop(Map::Xop9, opcode, m, ops).pfx(Pfx::None).groups(XOP)
}

pub static TABLE: &[Entry] = &[
    // map 8: multiply-accumulate
    x8(0x85, I::Vpmacssww, MAC).w(false).l(0),
    x8(0x86, I::Vpmacsswd, MAC).w(false).l(0),
    x8(0x87, I::Vpmacssdql, MAC).w(false).l(0),
    x8(0x8e, I::Vpmacssdd, MAC).w(false).l(0),
    x8(0x8f, I::Vpmacssdqh, MAC).w(false).l(0),
    x8(0x95, I::Vpmacsww, MAC).w(false).l(0),
    x8(0x96, I::Vpmacswd, MAC).w(false).l(0),
    x8(0x97, I::Vpmacsdql, MAC).w(false).l(0),
    x8(0x9e, I::Vpmacsdd, MAC).w(false).l(0),
    x8(0x9f, I::Vpmacsdqh, MAC).w(false).l(0),
    x8(0xa6, I::Vpmadcsswd, MAC).w(false).l(0),
    x8(0xb6, I::Vpmadcswd, MAC).w(false).l(0),
    // map 8: select / permute
    x8(0xa2, I::Vpcmov, SEL_W0).w(false),
    x8(0xa2, I::Vpcmov, SEL_W1).w(true),
    x8(0xa3, I::Vpperm, PERM_W0).w(false).l(0),
    x8(0xa3, I::Vpperm, PERM_W1).w(true).l(0),
    // map 8: rotate by immediate
    x8(0xc0, I::Vprotb, ROT_I).w(false).l(0),
    x8(0xc1, I::Vprotw, ROT_I).w(false).l(0),
    x8(0xc2, I::Vprotd, ROT_I).w(false).l(0),
    x8(0xc3, I::Vprotq, ROT_I).w(false).l(0),
    // map 8: compares
    x8(0xcc, I::Vpcomb, COM).w(false).l(0).attrs(CC_XOP),
    x8(0xcd, I::Vpcomw, COM).w(false).l(0).attrs(CC_XOP),
    x8(0xce, I::Vpcomd, COM).w(false).l(0).attrs(CC_XOP),
    x8(0xcf, I::Vpcomq, COM).w(false).l(0).attrs(CC_XOP),
    x8(0xec, I::Vpcomub, COM).w(false).l(0).attrs(CC_XOP),
    x8(0xed, I::Vpcomuw, COM).w(false).l(0).attrs(CC_XOP),
    x8(0xee, I::Vpcomud, COM).w(false).l(0).attrs(CC_XOP),
    x8(0xef, I::Vpcomuq, COM).w(false).l(0).attrs(CC_XOP),
    // map 9: fraction extract
    x9(0x80, I::Vfrczps, &[w(Vr, Vl), r(Wr, Vl)]).w(false),
    x9(0x81, I::Vfrczpd, &[w(Vr, Vl), r(Wr, Vl)]).w(false),
    x9(0x82, I::Vfrczss, &[w(Vr, X), r(Wr, D)]).w(false).l(0),
    x9(0x83, I::Vfrczsd, &[w(Vr, X), r(Wr, Q)]).w(false).l(0),
    // map 9: horizontal add / subtract
    x9(0xc1, I::Vphaddbw, UNARY).w(false).l(0),
    x9(0xc2, I::Vphaddbd, UNARY).w(false).l(0),
    x9(0xc3, I::Vphaddbq, UNARY).w(false).l(0),
    x9(0xc6, I::Vphaddwd, UNARY).w(false).l(0),
    x9(0xc7, I::Vphaddwq, UNARY).w(false).l(0),
    x9(0xcb, I::Vphadddq, UNARY).w(false).l(0),
    x9(0xd1, I::Vphaddubw, UNARY).w(false).l(0),
    x9(0xd2, I::Vphaddubd, UNARY).w(false).l(0),
    x9(0xd3, I::Vphaddubq, UNARY).w(false).l(0),
    x9(0xd6, I::Vphadduwd, UNARY).w(false).l(0),
    x9(0xd7, I::Vphadduwq, UNARY).w(false).l(0),
    x9(0xdb, I::Vphaddudq, UNARY).w(false).l(0),
    x9(0xe1, I::Vphsubbw, UNARY).w(false).l(0),
    x9(0xe2, I::Vphsubwd, UNARY).w(false).l(0),
    x9(0xe3, I::Vphsubdq, UNARY).w(false).l(0),
    // map A
    xop(Map::XopA, 0x10, I::Bextr, &[w(G, Y), r(E, Y), r(Imm, D)])
        .pfx(Pfx::None)
        .l(0)
        .flags(BMI)
        .groups(&[Gr::Xop, Gr::Bmi]),
];

/// Vector-count shifts and rotates of map 9.
const VSHIFT_OPS: &[(u8, X86Mnemonic)] = &[
    (0x90, I::Vprotb),
    (0x91, I::Vprotw),
    (0x92, I::Vprotd),
    (0x93, I::Vprotq),
    (0x94, I::Vpshlb),
    (0x95, I::Vpshlw),
    (0x96, I::Vpshld),
    (0x97, I::Vpshlq),
    (0x98, I::Vpshab),
    (0x99, I::Vpshaw),
    (0x9a, I::Vpshad),
    (0x9b, I::Vpshaq),
];

/// XOP.W swaps which of r/m and vvvv holds the count.
const fn vshift_rows<const N: usize>(rows: &[(u8, X86Mnemonic)]) -> [[Entry; 2]; N] {
    assert!(rows.len() == N);
    let mut out = [[Entry::EMPTY; 2]; N];
    let mut i = 0;
    while i < N {
        let (opcode, m) = rows[i];
        out[i][0] = x9(opcode, m, VSH_W0).w(false).l(0);
        out[i][1] = x9(opcode, m, VSH_W1).w(true).l(0);
        i += 1;
    }
    out
}

pub static VSHIFT: [[Entry; 2]; VSHIFT_OPS.len()] = vshift_rows(VSHIFT_OPS);
