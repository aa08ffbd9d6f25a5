//! x86 encoding tables.
//!
//! Each row is an [`Entry`]: a [`Pattern`] over the opcode byte and the
//! context that selects it (mandatory prefix, ModRM fields, REX/VEX.W,
//! vector length, mode), plus the operand shapes and static side effects.
//! Rows are written with `const fn` builders and indexed once per process by
//! `(encoding, map, opcode byte)`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::core::group::Group;
use crate::core::instruction::Access;
use crate::core::x86::{X86Mnemonic, X86Reg};

mod evex;
mod one_byte;
mod three_byte;
mod two_byte;
mod vex;
mod x87;
mod xop;

/// Encoding scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Enc {
    Legacy,
    Vex,
    Evex,
    Xop,
}

/// Opcode map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Map {
    Primary,
    M0F,
    M0F38,
    M0F3A,
    Xop8,
    Xop9,
    XopA,
}

/// Mandatory prefix selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pfx {
    Any,
    None,
    P66,
    F3,
    F2,
}

/// ModRM.mod selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModSel {
    Any,
    Mem,
    Reg,
}

/// Processor mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeSel {
    Any,
    Only64,
    Not64,
}

/// Where an operand comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum L {
    /// ModRM r/m: general register or memory
    E,
    /// ModRM reg: general register
    G,
    /// ModRM r/m, memory only
    M,
    /// ModRM r/m, general register only
    R,
    /// ModRM r/m as a general register whatever the mod bits
    /// (moves to and from control/debug registers)
    Rx,
    /// Low three opcode bits (+REX.B): general register
    Op,
    /// Immediate, zero-extended
    Imm,
    /// Immediate, sign-extended to the operand size
    ImmSx,
    /// Relative branch displacement; yields the absolute target
    Rel,
    /// Absolute memory offset of address size
    Moffs,
    /// A fixed register
    Fixed(X86Reg),
    /// Accumulator of the operand size
    Acc,
    /// The constant 1 (shift count)
    One,
    /// ModRM reg: segment register
    Seg,
    /// ModRM reg: control register
    Cr,
    /// ModRM reg: debug register
    Dr,
    /// ModRM reg: vector register
    Vr,
    /// ModRM r/m: vector register or memory
    Wr,
    /// ModRM r/m: vector register only
    Ur,
    /// VEX.vvvv: vector register
    Hr,
    /// imm8[7:4]: vector register
    Is4,
    /// ModRM reg: MMX register
    P,
    /// ModRM r/m: MMX register or memory
    Qm,
    /// ModRM r/m: MMX register only
    N,
    /// ModRM reg: opmask register
    K,
    /// ModRM r/m: opmask register or memory
    Km,
    /// VEX.vvvv: opmask register
    Kv,
    /// VEX.vvvv: general register
    Bg,
    /// st(0)
    St0,
    /// st(i) from ModRM r/m
    Sti,
    /// ptr16:16 / ptr16:32 immediate (two operands)
    FarPtr,
    /// String source `[seg:rsi]`
    SrcStr,
    /// String destination `es:[rdi]`
    DstStr,
}

/// Operand size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum S {
    B,
    W,
    D,
    Q,
    /// Effective operand size (16/32/64)
    V,
    /// 16 for 16-bit operand size, else 32
    Z,
    /// 64 with 64-bit operand size, else 32
    Y,
    /// Effective address size
    A,
    /// 64 in 64-bit mode, else 32 (control/debug register moves)
    Mw,
    /// 80-bit
    T,
    /// 128-bit
    X,
    /// 256-bit
    Yy,
    /// 512-bit
    Zz,
    /// Vector length from VEX.L / EVEX.L'L
    Vl,
    Half,
    Quarter,
    Eighth,
    /// Far pointer m16:16 / m16:32 / m16:64
    Far,
    /// Descriptor table register image (6 or 10 bytes)
    Desc,
    /// Fixed number of bits (0 = unsized)
    Bits(u16),
}

/// One operand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpSpec {
    pub loc: L,
    pub sz: S,
    pub access: Access,
}

pub const fn r(loc: L, sz: S) -> OpSpec {
    OpSpec {
        loc,
        sz,
        access: Access::Read,
    }
}

pub const fn w(loc: L, sz: S) -> OpSpec {
    OpSpec {
        loc,
        sz,
        access: Access::Write,
    }
}

pub const fn rw(loc: L, sz: S) -> OpSpec {
    OpSpec {
        loc,
        sz,
        access: Access::ReadWrite,
    }
}

pub const fn n(loc: L, sz: S) -> OpSpec {
    OpSpec {
        loc,
        sz,
        access: Access::None,
    }
}

/// Implicit register, resolved against the decode context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Imp {
    R(X86Reg),
    /// rAX of the operand size
    Ax,
    /// rDX of the operand size
    Dx,
    /// rCX of the address size
    Cx,
    /// rSI of the address size
    Si,
    /// rDI of the address size
    Di,
    /// Stack pointer of the mode
    Sp,
    /// Frame pointer of the mode
    Bp,
    /// Instruction pointer of the mode
    Ip,
    Flags,
}

/// Width-dependent mnemonic choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alt {
    None,
    /// Chosen by operand size 16/32/64
    Osz([X86Mnemonic; 3]),
    /// Chosen by address size 16/32/64
    Asz([X86Mnemonic; 3]),
}

/// Default operand size is 64 in 64-bit mode.
pub const DEF64: u32 = 1 << 0;
/// Operand size is 64 in 64-bit mode regardless of prefixes.
pub const FORCE64: u32 = 1 << 1;
/// String instruction honouring a rep prefix.
pub const REP: u32 = 1 << 2;
/// Trailing imm8 is an SSE compare predicate.
pub const CC_SSE: u32 = 1 << 3;
/// Trailing imm8 is an AVX compare predicate.
pub const CC_AVX: u32 = 1 << 4;
/// Trailing imm8 is an XOP compare predicate.
pub const CC_XOP: u32 = 1 << 5;
/// EVEX embedded rounding allowed.
pub const ER: u32 = 1 << 6;
/// EVEX suppress-all-exceptions allowed.
pub const SAE: u32 = 1 << 7;
/// EVEX broadcast element is 32 bits.
pub const BCST32: u32 = 1 << 8;
/// EVEX broadcast element is 64 bits.
pub const BCST64: u32 = 1 << 9;
/// EVEX write masking allowed on the destination.
pub const MASK: u32 = 1 << 10;
/// Operand size is fixed at 32 outside of REX.W (ignores 66).
pub const NO66: u32 = 1 << 11;

/// Selection pattern of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub enc: Enc,
    pub map: Map,
    pub opcode: u8,
    /// 0xF8 for `+r` rows
    pub mask: u8,
    pub pfx: Pfx,
    pub reg: Option<u8>,
    pub md: ModSel,
    pub rm: Option<u8>,
    /// REX.W (legacy) or VEX/EVEX/XOP.W
    pub w: Option<bool>,
    /// VEX.L or EVEX.L'L
    pub l: Option<u8>,
    pub mode: ModeSel,
    /// Row applies only without REX.B (plain `nop` vs `xchg r8, rax`)
    pub no_rex_b: bool,
}

impl Pattern {
    /// Number of fixed selector bits; larger is more specific.
    pub fn specificity(&self) -> u32 {
        let mut score = self.mask.count_ones();
        if self.pfx != Pfx::Any {
            score += 8;
        }
        if self.reg.is_some() {
            score += 3;
        }
        if self.md != ModSel::Any {
            score += 1;
        }
        if self.rm.is_some() {
            score += 3;
        }
        if self.w.is_some() {
            score += 1;
        }
        if self.l.is_some() {
            score += 2;
        }
        if self.mode != ModeSel::Any {
            score += 1;
        }
        if self.no_rex_b {
            score += 1;
        }
        score
    }

    /// Whether selecting this row needs the ModRM byte.
    pub fn selects_on_modrm(&self) -> bool {
        self.reg.is_some() || self.rm.is_some() || self.md != ModSel::Any
    }
}

/// One encoding table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub pat: Pattern,
    pub mnemonic: X86Mnemonic,
    pub alt: Alt,
    pub ops: &'static [OpSpec],
    pub eflags: u64,
    pub imp_read: &'static [Imp],
    pub imp_write: &'static [Imp],
    pub groups: &'static [Group],
    pub attrs: u32,
}

impl Entry {
    /// Placeholder used to size const-built arrays.
    pub const EMPTY: Entry = Entry::new(Enc::Legacy, Map::Primary, 0, X86Mnemonic::Invalid, &[]);

    pub const fn new(
        enc: Enc,
        map: Map,
        opcode: u8,
        mnemonic: X86Mnemonic,
        ops: &'static [OpSpec],
    ) -> Self {
        Entry {
            pat: Pattern {
                enc,
                map,
                opcode,
                mask: 0xff,
                pfx: Pfx::Any,
                reg: None,
                md: ModSel::Any,
                rm: None,
                w: None,
                l: None,
                mode: ModeSel::Any,
                no_rex_b: false,
            },
            mnemonic,
            alt: Alt::None,
            ops,
            eflags: 0,
            imp_read: &[],
            imp_write: &[],
            groups: &[],
            attrs: 0,
        }
    }

    /// `+r` row: the low three opcode bits select a register.
    pub const fn plus_r(mut self) -> Self {
        self.pat.mask = 0xf8;
        self
    }

    pub const fn pfx(mut self, pfx: Pfx) -> Self {
        self.pat.pfx = pfx;
        self
    }

    /// `/digit` opcode extension in ModRM.reg.
    pub const fn ext(mut self, reg: u8) -> Self {
        self.pat.reg = Some(reg);
        self
    }

    /// Memory forms only.
    pub const fn mem(mut self) -> Self {
        self.pat.md = ModSel::Mem;
        self
    }

    /// Register forms only.
    pub const fn reg_form(mut self) -> Self {
        self.pat.md = ModSel::Reg;
        self
    }

    /// Full ModRM byte match for register forms (`0F 01 D0` style).
    pub const fn modrm(mut self, byte: u8) -> Self {
        self.pat.md = ModSel::Reg;
        self.pat.reg = Some((byte >> 3) & 7);
        self.pat.rm = Some(byte & 7);
        self
    }

    pub const fn w(mut self, w: bool) -> Self {
        self.pat.w = Some(w);
        self
    }

    pub const fn l(mut self, l: u8) -> Self {
        self.pat.l = Some(l);
        self
    }

    pub const fn only64(mut self) -> Self {
        self.pat.mode = ModeSel::Only64;
        self
    }

    pub const fn not64(mut self) -> Self {
        self.pat.mode = ModeSel::Not64;
        self
    }

    pub const fn no_rex_b(mut self) -> Self {
        self.pat.no_rex_b = true;
        self
    }

    pub const fn flags(mut self, eflags: u64) -> Self {
        self.eflags = eflags;
        self
    }

    pub const fn reads(mut self, imp: &'static [Imp]) -> Self {
        self.imp_read = imp;
        self
    }

    pub const fn writes(mut self, imp: &'static [Imp]) -> Self {
        self.imp_write = imp;
        self
    }

    pub const fn groups(mut self, groups: &'static [Group]) -> Self {
        self.groups = groups;
        self
    }

    pub const fn attrs(mut self, attrs: u32) -> Self {
        self.attrs |= attrs;
        self
    }

    /// Disallow EVEX write masking.
    pub const fn no_mask(mut self) -> Self {
        self.attrs &= !MASK;
        self
    }

    pub const fn alt_osz(mut self, names: [X86Mnemonic; 3]) -> Self {
        self.alt = Alt::Osz(names);
        self
    }

    pub const fn alt_asz(mut self, names: [X86Mnemonic; 3]) -> Self {
        self.alt = Alt::Asz(names);
        self
    }

    pub fn has(&self, attr: u32) -> bool {
        self.attrs & attr != 0
    }

    /// Whether any operand is taken from the ModRM byte.
    pub fn needs_modrm(&self) -> bool {
        self.pat.selects_on_modrm()
            || self.ops.iter().any(|op| {
                matches!(
                    op.loc,
                    L::E | L::G
                        | L::M
                        | L::R
                        | L::Rx
                        | L::Seg
                        | L::Cr
                        | L::Dr
                        | L::Vr
                        | L::Wr
                        | L::Ur
                        | L::P
                        | L::Qm
                        | L::N
                        | L::K
                        | L::Km
                        | L::Sti
                )
            })
    }

    /// Whether an operand is taken from VEX.vvvv.
    pub fn uses_vvvv(&self) -> bool {
        self.ops
            .iter()
            .any(|op| matches!(op.loc, L::Hr | L::Kv | L::Bg))
    }
}

/// Legacy one-byte map row.
pub const fn op(opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    Entry::new(Enc::Legacy, Map::Primary, opcode, m, ops)
}

/// Legacy `0F xx` row.
pub const fn op2(opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    Entry::new(Enc::Legacy, Map::M0F, opcode, m, ops)
}

/// Legacy `0F 38 xx` row.
pub const fn op38(opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    Entry::new(Enc::Legacy, Map::M0F38, opcode, m, ops)
}

/// Legacy `0F 3A xx` row.
pub const fn op3a(opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    Entry::new(Enc::Legacy, Map::M0F3A, opcode, m, ops)
}

/// VEX row in the given map.
pub const fn vex(map: Map, opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    Entry::new(Enc::Vex, map, opcode, m, ops)
}

/// EVEX row in the given map; write masking is allowed by default.
pub const fn evex(map: Map, opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    Entry::new(Enc::Evex, map, opcode, m, ops).attrs(MASK)
}

/// XOP row in the given map.
pub const fn xop(map: Map, opcode: u8, m: X86Mnemonic, ops: &'static [OpSpec]) -> Entry {
    Entry::new(Enc::Xop, map, opcode, m, ops)
}

/// Sixteen condition-code rows `base + cc` sharing one operand shape; the
/// flags read by each condition come from [`CC_TESTS`].
pub const fn cc_rows(
    template: Entry,
    base: u8,
    names: [X86Mnemonic; 16],
) -> [Entry; 16] {
    let mut out = [Entry::EMPTY; 16];
    let mut cc = 0;
    while cc < 16 {
        let mut e = template;
        e.pat.opcode = base + cc as u8;
        e.mnemonic = names[cc];
        e.eflags = template.eflags | CC_TESTS[cc >> 1];
        out[cc] = e;
        cc += 1;
    }
    out
}

/// Flags tested by condition pairs `o/no`, `b/ae`, `e/ne`, `be/a`, `s/ns`,
/// `p/np`, `l/ge`, `le/g`.
pub const CC_TESTS: [u64; 8] = {
    use crate::core::x86::EFlags as F;
    [
        F::TEST_OF.bits(),
        F::TEST_CF.bits(),
        F::TEST_ZF.bits(),
        F::TEST_CF.bits() | F::TEST_ZF.bits(),
        F::TEST_SF.bits(),
        F::TEST_PF.bits(),
        F::TEST_SF.bits() | F::TEST_OF.bits(),
        F::TEST_ZF.bits() | F::TEST_SF.bits() | F::TEST_OF.bits(),
    ]
};

/// A legacy packed-integer instruction available both as MMX (`NP`) and SSE2
/// (`66`) form: `op mm, mm/m64` and `op xmm, xmm/m128`.
pub const fn mmx_sse_rows<const N: usize>(
    map: Map,
    rows: &[(u8, X86Mnemonic)],
    sse: Group,
) -> [[Entry; 2]; N] {
    const MMX_OPS: &[OpSpec] = &[rw(L::P, S::Q), r(L::Qm, S::Q)];
    const SSE_OPS: &[OpSpec] = &[rw(L::Vr, S::X), r(L::Wr, S::X)];
    assert!(rows.len() == N);
    let mut out = [[Entry::EMPTY; 2]; N];
    let mut i = 0;
    while i < N {
        let (opcode, m) = rows[i];
        out[i][0] = Entry::new(Enc::Legacy, map, opcode, m, MMX_OPS)
            .pfx(Pfx::None)
            .groups(&[Group::Mmx]);
        out[i][1] = Entry::new(Enc::Legacy, map, opcode, m, SSE_OPS)
            .pfx(Pfx::P66)
            .groups(match sse {
                Group::Ssse3 => &[Group::Ssse3],
                _ => &[Group::Sse2],
            });
        i += 1;
    }
    out
}

/// Candidate rows for one `(encoding, map, opcode)` key, in declaration
/// order, with their precomputed specificity.
pub type Candidates = Vec<(u32, &'static Entry)>;

static INDEX: Lazy<HashMap<(Enc, Map, u8), Candidates>> = Lazy::new(|| {
    let mut index: HashMap<(Enc, Map, u8), Candidates> = HashMap::new();
    for entry in all_entries() {
        let score = entry.pat.specificity();
        let base = entry.pat.opcode & entry.pat.mask;
        let span = (!entry.pat.mask) as u16 + 1;
        for low in 0..span {
            let opcode = base | low as u8;
            index
                .entry((entry.pat.enc, entry.pat.map, opcode))
                .or_default()
                .push((score, entry));
        }
    }
    index
});

/// Every table row, in declaration order.
pub fn all_entries() -> impl Iterator<Item = &'static Entry> {
    let tables: [&'static [Entry]; 20] = [
        one_byte::TABLE,
        &one_byte::JCC,
        two_byte::TABLE,
        &two_byte::JCC,
        &two_byte::SETCC,
        &two_byte::CMOVCC,
        two_byte::MMX_SSE.as_flattened(),
        three_byte::TABLE,
        three_byte::SSSE3.as_flattened(),
        x87::TABLE,
        vex::TABLE,
        &vex::PACKED_INT,
        &vex::PACKED_INT38,
        vex::FMA.as_flattened(),
        vex::KMASK.as_flattened(),
        evex::TABLE,
        &evex::PACKED_INT,
        evex::ARITH.as_flattened(),
        xop::TABLE,
        xop::VSHIFT.as_flattened(),
    ];
    tables.into_iter().flatten()
}

/// Rows that could match the given opcode key.
pub fn candidates(enc: Enc, map: Map, opcode: u8) -> Option<&'static Candidates> {
    INDEX.get(&(enc, map, opcode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::x86::EFlags;

    #[test]
    fn test_specificity_prefers_fixed_bits() {
        let nop = op(0x90, X86Mnemonic::Nop, &[]).no_rex_b();
        let xchg = op(0x90, X86Mnemonic::Xchg, &[]).plus_r();
        let pause = op(0x90, X86Mnemonic::Pause, &[]).pfx(Pfx::F3);
        assert!(nop.pat.specificity() > xchg.pat.specificity());
        assert!(pause.pat.specificity() > nop.pat.specificity());

        let grp = op(0xd9, X86Mnemonic::Fld, &[]).ext(0).reg_form();
        let fixed = op(0xd9, X86Mnemonic::Fchs, &[]).modrm(0xe0);
        assert!(fixed.pat.specificity() > grp.pat.specificity());
    }

    #[test]
    fn test_cc_rows_assign_flags() {
        let template = op(0, X86Mnemonic::Invalid, &[]);
        let names = [X86Mnemonic::Jo; 16];
        let rows = cc_rows(template, 0x70, names);
        assert_eq!(rows[4].pat.opcode, 0x74);
        assert_eq!(rows[4].eflags, EFlags::TEST_ZF.bits());
        assert_eq!(
            rows[15].eflags,
            (EFlags::TEST_ZF | EFlags::TEST_SF | EFlags::TEST_OF).bits()
        );
    }

    #[test]
    fn test_index_expands_plus_r_rows() {
        for opcode in 0x50..0x58u8 {
            let rows = candidates(Enc::Legacy, Map::Primary, opcode).unwrap();
            assert!(rows.iter().any(|(_, e)| e.mnemonic == X86Mnemonic::Push));
        }
        assert!(candidates(Enc::Legacy, Map::M0F, 0x04).is_none());
    }

    #[test]
    fn test_no_duplicate_patterns() {
        let mut seen = std::collections::HashSet::new();
        for entry in all_entries() {
            let key = format!("{:?}", entry.pat);
            assert!(seen.insert(key.clone()), "duplicate row {key} ({})", entry.mnemonic);
        }
    }

    #[test]
    fn test_modrm_requirement() {
        const ADD_OPS: &[OpSpec] = &[rw(L::E, S::V), r(L::G, S::V)];
        const PUSH_OPS: &[OpSpec] = &[r(L::Op, S::V)];
        let add = op(0x01, X86Mnemonic::Add, ADD_OPS);
        assert!(add.needs_modrm());
        let push = op(0x50, X86Mnemonic::Push, PUSH_OPS).plus_r();
        assert!(!push.needs_modrm());
        assert!(!push.uses_vvvv());
    }
}
