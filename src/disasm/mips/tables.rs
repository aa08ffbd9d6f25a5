//! MIPS encoding tables.
//!
//! Every row is a `(mask, value)` pair over the instruction word. Several
//! rows can match one word (aliases such as `move` over `or`); the row with
//! the most fixed bits wins. Release 6 reassigned a number of encodings, so
//! rows carry the ISA generation they belong to.

use once_cell::sync::Lazy;

use crate::core::group::Group as Gr;
use crate::core::instruction::Access;
use crate::core::mips::{MipsMnemonic as I, MipsReg};

/// ISA generation a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Isa {
    Any,
    /// Removed or reassigned by release 6.
    PreR6,
    /// Release 6 only.
    R6,
}

/// Where an operand comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loc {
    Rs,
    Rt,
    Rd,
    Fs,
    Ft,
    Fd,
    /// Shift amount (bits 10..6)
    Sa,
    /// `lsa` shift amount, stored minus one (bits 7..6)
    Sa2,
    /// Sign-extended 16-bit immediate
    Simm,
    /// Zero-extended 16-bit immediate
    Uimm,
    /// `offset(base)` with a 16-bit offset; memory access width in bits
    Mem(u16),
    /// `offset(base)` with a 9-bit offset (release 6 `ll`/`sc`/`cache`/`pref`)
    Mem9(u16),
    /// 16-bit PC-relative branch target
    Br16,
    /// 21-bit PC-relative branch target
    Br21,
    /// 26-bit PC-relative branch target
    Br26,
    /// 256 MB region jump target
    Jump26,
    /// 19-bit PC-relative address (no delay-slot bias)
    Pc19,
    /// Raw register number in the `rd` field (coprocessor and hardware registers)
    RawRd,
    /// Coprocessor register select (bits 2..0)
    Sel,
    /// FPU condition code in bits 20..18
    FccBr,
    /// FPU condition code in bits 10..8
    FccCmp,
    /// `ext`/`ins` position (bits 10..6)
    Pos,
    /// `ext` size, stored minus one in bits 15..11
    ExtSize,
    /// `ins` size, stored as msb in bits 15..11
    InsSize,
    /// Cache/prefetch operation in the `rt` field
    Hint,
    /// Trap code (bits 15..6)
    Code10,
}

/// Register-field relation a row needs beyond its fixed bits. Release 6
/// packs several compact branches into one opcode and tells them apart by
/// comparing `rs` with `rt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cond {
    Always,
    RsLtRt,
    RsGeRt,
    /// `rs == rt`, both nonzero
    RsEqRt,
    /// `rs != rt`, `rt` nonzero
    RsNeRt,
}

impl Cond {
    pub fn holds(self, word: u32) -> bool {
        let (rs, rt) = ((word >> 21) & 0x1f, (word >> 16) & 0x1f);
        match self {
            Cond::Always => true,
            Cond::RsLtRt => rs < rt,
            Cond::RsGeRt => rs >= rt,
            Cond::RsEqRt => rs == rt && rt != 0,
            Cond::RsNeRt => rs != rt && rt != 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpSpec {
    pub loc: Loc,
    pub access: Access,
}

pub const fn r(loc: Loc) -> OpSpec {
    OpSpec {
        loc,
        access: Access::Read,
    }
}

pub const fn w(loc: Loc) -> OpSpec {
    OpSpec {
        loc,
        access: Access::Write,
    }
}

pub const fn rw(loc: Loc) -> OpSpec {
    OpSpec {
        loc,
        access: Access::ReadWrite,
    }
}

pub const fn n(loc: Loc) -> OpSpec {
    OpSpec {
        loc,
        access: Access::None,
    }
}

/// One encoding table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub mask: u32,
    pub value: u32,
    pub mnemonic: I,
    pub ops: &'static [OpSpec],
    pub isa: Isa,
    pub cond: Cond,
    /// Needs 64-bit GPRs.
    pub wide: bool,
    /// Introduced in release 2.
    pub r2: bool,
    /// Has an architectural delay slot.
    pub delay: bool,
    pub groups: &'static [Gr],
    pub imp_read: &'static [MipsReg],
    pub imp_write: &'static [MipsReg],
}

impl Entry {
    pub const EMPTY: Entry = row(0, 0, I::Invalid, &[]);

    /// Extra fixed bits on top of the row's base pattern.
    pub const fn fix(mut self, mask: u32, value: u32) -> Self {
        self.mask |= mask;
        self.value |= value;
        self
    }

    pub const fn when(mut self, cond: Cond) -> Self {
        self.cond = cond;
        self
    }

    pub const fn pre_r6(mut self) -> Self {
        self.isa = Isa::PreR6;
        self
    }

    pub const fn r6(mut self) -> Self {
        self.isa = Isa::R6;
        self
    }

    pub const fn mips64(mut self) -> Self {
        self.wide = true;
        self
    }

    pub const fn rel2(mut self) -> Self {
        self.r2 = true;
        self
    }

    pub const fn delay(mut self) -> Self {
        self.delay = true;
        self
    }

    pub const fn groups(mut self, groups: &'static [Gr]) -> Self {
        self.groups = groups;
        self
    }

    pub const fn reads(mut self, regs: &'static [MipsReg]) -> Self {
        self.imp_read = regs;
        self
    }

    pub const fn writes(mut self, regs: &'static [MipsReg]) -> Self {
        self.imp_write = regs;
        self
    }

    pub fn matches(&self, word: u32) -> bool {
        word & self.mask == self.value && self.cond.holds(word)
    }

    pub fn specificity(&self) -> u32 {
        self.mask.count_ones()
    }
}

pub const fn row(mask: u32, value: u32, mnemonic: I, ops: &'static [OpSpec]) -> Entry {
    Entry {
        mask,
        value,
        mnemonic,
        ops,
        isa: Isa::Any,
        cond: Cond::Always,
        wide: false,
        r2: false,
        delay: false,
        groups: &[],
        imp_read: &[],
        imp_write: &[],
    }
}

const fn primary(op: u32, m: I, ops: &'static [OpSpec]) -> Entry {
    row(0xfc00_0000, op << 26, m, ops)
}

const fn special(funct: u32, m: I, ops: &'static [OpSpec]) -> Entry {
    row(0xfc00_003f, funct, m, ops)
}

const fn regimm(rt: u32, m: I, ops: &'static [OpSpec]) -> Entry {
    row(0xfc1f_0000, (1 << 26) | (rt << 16), m, ops)
}

const fn special2(funct: u32, m: I, ops: &'static [OpSpec]) -> Entry {
    row(0xfc00_003f, (0x1c << 26) | funct, m, ops)
}

const fn special3(funct: u32, m: I, ops: &'static [OpSpec]) -> Entry {
    row(0xfc00_003f, (0x1f << 26) | funct, m, ops)
}

/// `COP1` register move selected by the `rs` field; low 11 bits are zero.
const fn cop1_move(rs: u32, m: I, ops: &'static [OpSpec]) -> Entry {
    row(0xffe0_07ff, (0x11 << 26) | (rs << 21), m, ops)
}

/// `COP1` arithmetic selected by format and function.
const fn cop1(fmt: u32, funct: u32, m: I, ops: &'static [OpSpec]) -> Entry {
    row(0xffe0_003f, (0x11 << 26) | (fmt << 21) | funct, m, ops)
}

const FMT_S: u32 = 0x10;
const FMT_D: u32 = 0x11;
const FMT_W: u32 = 0x14;
const FMT_L: u32 = 0x15;

/// `rt` field must be zero.
const RT0: u32 = 0x001f_0000;
/// `rs` field must be zero.
const RS0: u32 = 0x03e0_0000;
/// `rd` field must be zero.
const RD0: u32 = 0x0000_f800;
/// `sa` field must be zero.
const SA0: u32 = 0x0000_07c0;

const JUMP: &[Gr] = &[Gr::Jump];
const CALL: &[Gr] = &[Gr::Call];
const RET: &[Gr] = &[Gr::Ret];
const PRIV: &[Gr] = &[Gr::Privilege];
const INT: &[Gr] = &[Gr::Int];
const BITCOUNT: &[Gr] = &[Gr::BitCount];

const HI_LO: &[MipsReg] = &[MipsReg::Hi, MipsReg::Lo];
const HI: &[MipsReg] = &[MipsReg::Hi];
const LO: &[MipsReg] = &[MipsReg::Lo];
const RA: &[MipsReg] = &[MipsReg::Ra];

use Loc::*;

const R3: &[OpSpec] = &[w(Rd), r(Rs), r(Rt)];
const SHIFT: &[OpSpec] = &[w(Rd), r(Rt), n(Sa)];
const SHIFTV: &[OpSpec] = &[w(Rd), r(Rt), r(Rs)];
const RS_RT: &[OpSpec] = &[r(Rs), r(Rt)];
const TRAP: &[OpSpec] = &[r(Rs), r(Rt), n(Code10)];
const TRAP_IMM: &[OpSpec] = &[r(Rs), r(Simm)];
const RD_RS: &[OpSpec] = &[w(Rd), r(Rs)];
const RD_RT: &[OpSpec] = &[w(Rd), r(Rt)];
const IMM_S: &[OpSpec] = &[w(Rt), r(Rs), r(Simm)];
const IMM_U: &[OpSpec] = &[w(Rt), r(Rs), r(Uimm)];
const BR_RS_RT: &[OpSpec] = &[r(Rs), r(Rt), r(Br16)];
const BR_RS: &[OpSpec] = &[r(Rs), r(Br16)];
const BR: &[OpSpec] = &[r(Br16)];
const BR_RT: &[OpSpec] = &[r(Rt), r(Br16)];
const F3: &[OpSpec] = &[w(Fd), r(Fs), r(Ft)];
const F2: &[OpSpec] = &[w(Fd), r(Fs)];
const FCMP: &[OpSpec] = &[w(FccCmp), r(Fs), r(Ft)];

const LOAD8: &[OpSpec] = &[w(Rt), r(Mem(8))];
const LOAD16: &[OpSpec] = &[w(Rt), r(Mem(16))];
const LOAD32: &[OpSpec] = &[w(Rt), r(Mem(32))];
const LOAD64: &[OpSpec] = &[w(Rt), r(Mem(64))];
const STORE8: &[OpSpec] = &[r(Rt), w(Mem(8))];
const STORE16: &[OpSpec] = &[r(Rt), w(Mem(16))];
const STORE32: &[OpSpec] = &[r(Rt), w(Mem(32))];
const STORE64: &[OpSpec] = &[r(Rt), w(Mem(64))];

const fn load(op: u32, m: I, bits: u16) -> Entry {
    let ops = match bits {
        8 => LOAD8,
        16 => LOAD16,
        32 => LOAD32,
        _ => LOAD64,
    };
    primary(op, m, ops)
}

const fn store(op: u32, m: I, bits: u16) -> Entry {
    let ops = match bits {
        8 => STORE8,
        16 => STORE16,
        32 => STORE32,
        _ => STORE64,
    };
    primary(op, m, ops)
}

pub static TABLE: &[Entry] = &[
    // SPECIAL: shifts and their aliases
    row(0xffff_ffff, 0, I::Nop, &[]),
    row(0xffff_ffff, 0x40, I::Ssnop, &[]),
    row(0xffff_ffff, 0xc0, I::Ehb, &[]).rel2(),
    row(0xffff_ffff, 0x140, I::Pause, &[]).rel2(),
    special(0x00, I::Sll, SHIFT).fix(RS0, 0),
    special(0x02, I::Srl, SHIFT).fix(RS0, 0),
    special(0x02, I::Rotr, SHIFT).fix(RS0, 1 << 21).rel2(),
    special(0x03, I::Sra, SHIFT).fix(RS0, 0),
    special(0x04, I::Sllv, SHIFTV).fix(SA0, 0),
    special(0x06, I::Srlv, SHIFTV).fix(SA0, 0),
    special(0x06, I::Rotrv, SHIFTV).fix(SA0, 1 << 6).rel2(),
    special(0x07, I::Srav, SHIFTV).fix(SA0, 0),
    special(0x05, I::Lsa, &[w(Rd), r(Rs), r(Rt), n(Sa2)]).fix(0x700, 0).r6(),
    special(0x15, I::Dlsa, &[w(Rd), r(Rs), r(Rt), n(Sa2)]).fix(0x700, 0).r6().mips64(),
    // SPECIAL: register jumps
    special(0x08, I::Jr, &[r(Rs)]).fix(RT0 | RD0, 0).pre_r6().delay().groups(JUMP),
    row(0xffff_f83f, 0x03e0_0008, I::Jr, &[r(Rs)]).pre_r6().delay().groups(RET),
    special(0x09, I::Jr, &[r(Rs)]).fix(RT0 | RD0, 0).r6().delay().groups(JUMP),
    row(0xffff_f83f, 0x03e0_0009, I::Jr, &[r(Rs)]).r6().delay().groups(RET),
    special(0x09, I::Jalr, &[w(Rd), r(Rs)]).fix(RT0, 0).delay().groups(CALL),
    special(0x09, I::Jalr, &[r(Rs)])
        .fix(RT0 | RD0, 31 << 11)
        .delay()
        .groups(CALL)
        .writes(RA),
    // SPECIAL: conditional moves / selects
    special(0x0a, I::Movz, R3).fix(SA0, 0).pre_r6(),
    special(0x0b, I::Movn, R3).fix(SA0, 0).pre_r6(),
    special(0x35, I::Seleqz, R3).fix(SA0, 0).r6(),
    special(0x37, I::Selnez, R3).fix(SA0, 0).r6(),
    // SPECIAL: system
    special(0x0c, I::Syscall, &[]).groups(INT),
    special(0x0d, I::Break, &[]).groups(INT),
    special(0x0e, I::Sdbbp, &[]).r6().groups(INT),
    special(0x0f, I::Sync, &[]).fix(RS0 | RT0 | RD0, 0),
    // SPECIAL: hi/lo
    special(0x10, I::Mfhi, &[w(Rd)]).fix(RS0 | RT0 | SA0, 0).pre_r6().reads(HI),
    special(0x11, I::Mthi, &[r(Rs)]).fix(RT0 | RD0 | SA0, 0).pre_r6().writes(HI),
    special(0x12, I::Mflo, &[w(Rd)]).fix(RS0 | RT0 | SA0, 0).pre_r6().reads(LO),
    special(0x13, I::Mtlo, &[r(Rs)]).fix(RT0 | RD0 | SA0, 0).pre_r6().writes(LO),
    special(0x10, I::Clz, RD_RS).fix(RT0 | SA0, 1 << 6).r6().groups(BITCOUNT),
    special(0x11, I::Clo, RD_RS).fix(RT0 | SA0, 1 << 6).r6().groups(BITCOUNT),
    special(0x12, I::Dclz, RD_RS).fix(RT0 | SA0, 1 << 6).r6().mips64().groups(BITCOUNT),
    special(0x13, I::Dclo, RD_RS).fix(RT0 | SA0, 1 << 6).r6().mips64().groups(BITCOUNT),
    special(0x14, I::Dsllv, SHIFTV).fix(SA0, 0).mips64(),
    special(0x16, I::Dsrlv, SHIFTV).fix(SA0, 0).mips64(),
    special(0x16, I::Drotrv, SHIFTV).fix(SA0, 1 << 6).mips64().rel2(),
    special(0x17, I::Dsrav, SHIFTV).fix(SA0, 0).mips64(),
    // SPECIAL: multiply / divide, pre-release 6 (hi/lo)
    special(0x18, I::Mult, RS_RT).fix(RD0 | SA0, 0).pre_r6().writes(HI_LO),
    special(0x19, I::Multu, RS_RT).fix(RD0 | SA0, 0).pre_r6().writes(HI_LO),
    special(0x1a, I::Div, RS_RT).fix(RD0 | SA0, 0).pre_r6().writes(HI_LO),
    special(0x1b, I::Divu, RS_RT).fix(RD0 | SA0, 0).pre_r6().writes(HI_LO),
    special(0x1c, I::Dmult, RS_RT).fix(RD0 | SA0, 0).pre_r6().mips64().writes(HI_LO),
    special(0x1d, I::Dmultu, RS_RT).fix(RD0 | SA0, 0).pre_r6().mips64().writes(HI_LO),
    special(0x1e, I::Ddiv, RS_RT).fix(RD0 | SA0, 0).pre_r6().mips64().writes(HI_LO),
    special(0x1f, I::Ddivu, RS_RT).fix(RD0 | SA0, 0).pre_r6().mips64().writes(HI_LO),
    // SPECIAL: multiply / divide, release 6 (three operand)
    special(0x18, I::Mul, R3).fix(SA0, 2 << 6).r6(),
    special(0x18, I::Muh, R3).fix(SA0, 3 << 6).r6(),
    special(0x19, I::Mulu, R3).fix(SA0, 2 << 6).r6(),
    special(0x19, I::Muhu, R3).fix(SA0, 3 << 6).r6(),
    special(0x1a, I::Div, R3).fix(SA0, 2 << 6).r6(),
    special(0x1a, I::Mod, R3).fix(SA0, 3 << 6).r6(),
    special(0x1b, I::Divu, R3).fix(SA0, 2 << 6).r6(),
    special(0x1b, I::Modu, R3).fix(SA0, 3 << 6).r6(),
    special(0x1c, I::Dmul, R3).fix(SA0, 2 << 6).r6().mips64(),
    special(0x1c, I::Dmuh, R3).fix(SA0, 3 << 6).r6().mips64(),
    special(0x1d, I::Dmulu, R3).fix(SA0, 2 << 6).r6().mips64(),
    special(0x1d, I::Dmuhu, R3).fix(SA0, 3 << 6).r6().mips64(),
    special(0x1e, I::Ddiv, R3).fix(SA0, 2 << 6).r6().mips64(),
    special(0x1e, I::Dmod, R3).fix(SA0, 3 << 6).r6().mips64(),
    special(0x1f, I::Ddivu, R3).fix(SA0, 2 << 6).r6().mips64(),
    special(0x1f, I::Dmodu, R3).fix(SA0, 3 << 6).r6().mips64(),
    // SPECIAL: three-register ALU
    special(0x20, I::Add, R3).fix(SA0, 0),
    special(0x21, I::Addu, R3).fix(SA0, 0),
    special(0x22, I::Sub, R3).fix(SA0, 0),
    special(0x23, I::Subu, R3).fix(SA0, 0),
    special(0x24, I::And, R3).fix(SA0, 0),
    special(0x25, I::Or, R3).fix(SA0, 0),
    special(0x26, I::Xor, R3).fix(SA0, 0),
    special(0x27, I::Nor, R3).fix(SA0, 0),
    special(0x2a, I::Slt, R3).fix(SA0, 0),
    special(0x2b, I::Sltu, R3).fix(SA0, 0),
    special(0x2c, I::Dadd, R3).fix(SA0, 0).mips64(),
    special(0x2d, I::Daddu, R3).fix(SA0, 0).mips64(),
    special(0x2e, I::Dsub, R3).fix(SA0, 0).mips64(),
    special(0x2f, I::Dsubu, R3).fix(SA0, 0).mips64(),
    // SPECIAL: ALU aliases
    special(0x21, I::Move, RD_RS).fix(RT0 | SA0, 0),
    special(0x25, I::Move, RD_RS).fix(RT0 | SA0, 0),
    special(0x2d, I::Move, RD_RS).fix(RT0 | SA0, 0).mips64(),
    special(0x22, I::Neg, RD_RT).fix(RS0 | SA0, 0),
    special(0x23, I::Negu, RD_RT).fix(RS0 | SA0, 0),
    special(0x2f, I::Dnegu, RD_RT).fix(RS0 | SA0, 0).mips64(),
    special(0x27, I::Not, RD_RS).fix(RT0 | SA0, 0),
    // SPECIAL: traps
    special(0x30, I::Tge, TRAP).groups(INT),
    special(0x31, I::Tgeu, TRAP).groups(INT),
    special(0x32, I::Tlt, TRAP).groups(INT),
    special(0x33, I::Tltu, TRAP).groups(INT),
    special(0x34, I::Teq, TRAP).groups(INT),
    special(0x36, I::Tne, TRAP).groups(INT),
    // SPECIAL: doubleword shifts
    special(0x38, I::Dsll, SHIFT).fix(RS0, 0).mips64(),
    special(0x3a, I::Dsrl, SHIFT).fix(RS0, 0).mips64(),
    special(0x3a, I::Drotr, SHIFT).fix(RS0, 1 << 21).mips64().rel2(),
    special(0x3b, I::Dsra, SHIFT).fix(RS0, 0).mips64(),
    special(0x3c, I::Dsll32, SHIFT).fix(RS0, 0).mips64(),
    special(0x3e, I::Dsrl32, SHIFT).fix(RS0, 0).mips64(),
    special(0x3e, I::Drotr32, SHIFT).fix(RS0, 1 << 21).mips64().rel2(),
    special(0x3f, I::Dsra32, SHIFT).fix(RS0, 0).mips64(),
    // REGIMM
    regimm(0x00, I::Bltz, BR_RS).delay().groups(JUMP),
    regimm(0x01, I::Bgez, BR_RS).delay().groups(JUMP),
    regimm(0x02, I::Bltzl, BR_RS).pre_r6().delay().groups(JUMP),
    regimm(0x03, I::Bgezl, BR_RS).pre_r6().delay().groups(JUMP),
    regimm(0x08, I::Tgei, TRAP_IMM).pre_r6().groups(INT),
    regimm(0x09, I::Tgeiu, TRAP_IMM).pre_r6().groups(INT),
    regimm(0x0a, I::Tlti, TRAP_IMM).pre_r6().groups(INT),
    regimm(0x0b, I::Tltiu, TRAP_IMM).pre_r6().groups(INT),
    regimm(0x0c, I::Teqi, TRAP_IMM).pre_r6().groups(INT),
    regimm(0x0e, I::Tnei, TRAP_IMM).pre_r6().groups(INT),
    regimm(0x10, I::Bltzal, BR_RS).pre_r6().delay().groups(CALL).writes(RA),
    regimm(0x11, I::Bgezal, BR_RS).pre_r6().delay().groups(CALL).writes(RA),
    regimm(0x11, I::Bal, BR).fix(RS0, 0).delay().groups(CALL).writes(RA),
    regimm(0x12, I::Bltzall, BR_RS).pre_r6().delay().groups(CALL).writes(RA),
    regimm(0x13, I::Bgezall, BR_RS).pre_r6().delay().groups(CALL).writes(RA),
    regimm(0x1f, I::Synci, &[n(Mem(0))]).rel2(),
    // jumps and branches
    primary(0x02, I::J, &[r(Jump26)]).delay().groups(JUMP),
    primary(0x03, I::Jal, &[r(Jump26)]).delay().groups(CALL).writes(RA),
    primary(0x04, I::Beq, BR_RS_RT).delay().groups(JUMP),
    primary(0x04, I::B, BR).fix(RS0 | RT0, 0).delay().groups(JUMP),
    primary(0x04, I::Beqz, BR_RS).fix(RT0, 0).delay().groups(JUMP),
    primary(0x05, I::Bne, BR_RS_RT).delay().groups(JUMP),
    primary(0x05, I::Bnez, BR_RS).fix(RT0, 0).delay().groups(JUMP),
    primary(0x06, I::Blez, BR_RS).fix(RT0, 0).delay().groups(JUMP),
    primary(0x07, I::Bgtz, BR_RS).fix(RT0, 0).delay().groups(JUMP),
    primary(0x14, I::Beql, BR_RS_RT).pre_r6().delay().groups(JUMP),
    primary(0x15, I::Bnel, BR_RS_RT).pre_r6().delay().groups(JUMP),
    primary(0x16, I::Blezl, BR_RS).fix(RT0, 0).pre_r6().delay().groups(JUMP),
    primary(0x17, I::Bgtzl, BR_RS).fix(RT0, 0).pre_r6().delay().groups(JUMP),
    // release 6 compact branches
    primary(0x32, I::Bc, &[r(Br26)]).r6().groups(JUMP),
    primary(0x3a, I::Balc, &[r(Br26)]).r6().groups(CALL).writes(RA),
    primary(0x36, I::Beqzc, &[r(Rs), r(Br21)]).r6().groups(JUMP),
    primary(0x36, I::Jic, &[r(Rt), r(Simm)]).fix(RS0, 0).r6().groups(JUMP),
    primary(0x3e, I::Bnezc, &[r(Rs), r(Br21)]).r6().groups(JUMP),
    primary(0x3e, I::Jialc, &[r(Rt), r(Simm)]).fix(RS0, 0).r6().groups(CALL).writes(RA),
    // release 6 compact branches on the old addi/daddi opcodes
    primary(0x08, I::Bovc, BR_RS_RT).when(Cond::RsGeRt).r6().groups(JUMP),
    primary(0x08, I::Beqc, BR_RS_RT).when(Cond::RsLtRt).r6().groups(JUMP),
    primary(0x08, I::Beqzalc, BR_RT)
        .fix(RS0, 0)
        .when(Cond::RsLtRt)
        .r6()
        .groups(CALL)
        .writes(RA),
    primary(0x18, I::Bnvc, BR_RS_RT).when(Cond::RsGeRt).r6().groups(JUMP),
    primary(0x18, I::Bnec, BR_RS_RT).when(Cond::RsLtRt).r6().groups(JUMP),
    primary(0x18, I::Bnezalc, BR_RT)
        .fix(RS0, 0)
        .when(Cond::RsLtRt)
        .r6()
        .groups(CALL)
        .writes(RA),
    // release 6 compact branches sharing blez/bgtz; rt == 0 stays blez/bgtz
    primary(0x06, I::Blezalc, BR_RT)
        .fix(RS0, 0)
        .when(Cond::RsNeRt)
        .r6()
        .groups(CALL)
        .writes(RA),
    primary(0x06, I::Bgezalc, BR_RT).when(Cond::RsEqRt).r6().groups(CALL).writes(RA),
    primary(0x06, I::Bgeuc, BR_RS_RT).when(Cond::RsNeRt).r6().groups(JUMP),
    primary(0x07, I::Bgtzalc, BR_RT)
        .fix(RS0, 0)
        .when(Cond::RsNeRt)
        .r6()
        .groups(CALL)
        .writes(RA),
    primary(0x07, I::Bltzalc, BR_RT).when(Cond::RsEqRt).r6().groups(CALL).writes(RA),
    primary(0x07, I::Bltuc, BR_RS_RT).when(Cond::RsNeRt).r6().groups(JUMP),
    // release 6 compact branches on the old blezl/bgtzl opcodes
    primary(0x16, I::Blezc, BR_RT).fix(RS0, 0).when(Cond::RsNeRt).r6().groups(JUMP),
    primary(0x16, I::Bgezc, BR_RT).when(Cond::RsEqRt).r6().groups(JUMP),
    primary(0x16, I::Bgec, BR_RS_RT).when(Cond::RsNeRt).r6().groups(JUMP),
    primary(0x17, I::Bgtzc, BR_RT).fix(RS0, 0).when(Cond::RsNeRt).r6().groups(JUMP),
    primary(0x17, I::Bltzc, BR_RT).when(Cond::RsEqRt).r6().groups(JUMP),
    primary(0x17, I::Bltc, BR_RS_RT).when(Cond::RsNeRt).r6().groups(JUMP),
    // immediate ALU
    primary(0x08, I::Addi, IMM_S).pre_r6(),
    primary(0x09, I::Addiu, IMM_S),
    primary(0x0a, I::Slti, IMM_S),
    primary(0x0b, I::Sltiu, IMM_S),
    primary(0x0c, I::Andi, IMM_U),
    primary(0x0d, I::Ori, IMM_U),
    primary(0x0e, I::Xori, IMM_U),
    primary(0x0f, I::Lui, &[w(Rt), r(Uimm)]).fix(RS0, 0),
    primary(0x0f, I::Aui, IMM_U).r6(),
    primary(0x18, I::Daddi, IMM_S).pre_r6().mips64(),
    primary(0x19, I::Daddiu, IMM_S).mips64(),
    // release 6 PC-relative
    row(0xfc18_0000, 0xec00_0000, I::Addiupc, &[w(Rs), r(Pc19)]).r6(),
    row(0xfc18_0000, 0xec08_0000, I::Lwpc, &[w(Rs), r(Pc19)]).r6(),
    row(0xfc18_0000, 0xec10_0000, I::Lwupc, &[w(Rs), r(Pc19)]).r6().mips64(),
    row(0xfc1f_0000, 0xec1e_0000, I::Auipc, &[w(Rs), r(Uimm)]).r6(),
    row(0xfc1f_0000, 0xec1f_0000, I::Aluipc, &[w(Rs), r(Uimm)]).r6(),
    // COP0
    row(0xffe0_07f8, 0x4000_0000, I::Mfc0, &[w(Rt), n(RawRd), n(Sel)]).groups(PRIV),
    row(0xffe0_07f8, 0x4020_0000, I::Dmfc0, &[w(Rt), n(RawRd), n(Sel)])
        .mips64()
        .groups(PRIV),
    row(0xffe0_07f8, 0x4080_0000, I::Mtc0, &[r(Rt), n(RawRd), n(Sel)]).groups(PRIV),
    row(0xffe0_07f8, 0x40a0_0000, I::Dmtc0, &[r(Rt), n(RawRd), n(Sel)])
        .mips64()
        .groups(PRIV),
    row(0xffe0_ffff, 0x4160_6000, I::Di, &[w(Rt)]).rel2().groups(PRIV),
    row(0xffe0_ffff, 0x4160_6020, I::Ei, &[w(Rt)]).rel2().groups(PRIV),
    row(0xffff_ffff, 0x4200_0001, I::Tlbr, &[]).groups(PRIV),
    row(0xffff_ffff, 0x4200_0002, I::Tlbwi, &[]).groups(PRIV),
    row(0xffff_ffff, 0x4200_0006, I::Tlbwr, &[]).groups(PRIV),
    row(0xffff_ffff, 0x4200_0008, I::Tlbp, &[]).groups(PRIV),
    row(0xffff_ffff, 0x4200_0018, I::Eret, &[]).groups(&[Gr::Privilege, Gr::Iret]),
    row(0xffff_ffff, 0x4200_001f, I::Deret, &[]).groups(&[Gr::Privilege, Gr::Iret]),
    row(0xfe00_003f, 0x4200_0020, I::Wait, &[]).groups(PRIV),
    // COP1 moves
    cop1_move(0x00, I::Mfc1, &[w(Rt), r(Fs)]),
    cop1_move(0x01, I::Dmfc1, &[w(Rt), r(Fs)]).mips64(),
    cop1_move(0x02, I::Cfc1, &[w(Rt), n(RawRd)]),
    cop1_move(0x03, I::Mfhc1, &[w(Rt), r(Fs)]).rel2(),
    cop1_move(0x04, I::Mtc1, &[r(Rt), w(Fs)]),
    cop1_move(0x05, I::Dmtc1, &[r(Rt), w(Fs)]).mips64(),
    cop1_move(0x06, I::Ctc1, &[r(Rt), n(RawRd)]),
    cop1_move(0x07, I::Mthc1, &[r(Rt), w(Fs)]).rel2(),
    // COP1 branches
    row(0xffe3_0000, 0x4500_0000, I::Bc1f, &[r(FccBr), r(Br16)])
        .pre_r6()
        .delay()
        .groups(JUMP),
    row(0xffe3_0000, 0x4501_0000, I::Bc1t, &[r(FccBr), r(Br16)])
        .pre_r6()
        .delay()
        .groups(JUMP),
    row(0xffe3_0000, 0x4502_0000, I::Bc1fl, &[r(FccBr), r(Br16)])
        .pre_r6()
        .delay()
        .groups(JUMP),
    row(0xffe3_0000, 0x4503_0000, I::Bc1tl, &[r(FccBr), r(Br16)])
        .pre_r6()
        .delay()
        .groups(JUMP),
    row(0xffe0_0000, 0x4520_0000, I::Bc1eqz, &[r(Ft), r(Br16)])
        .r6()
        .delay()
        .groups(JUMP),
    row(0xffe0_0000, 0x45a0_0000, I::Bc1nez, &[r(Ft), r(Br16)])
        .r6()
        .delay()
        .groups(JUMP),
    // COP1 arithmetic
    cop1(FMT_S, 0x00, I::AddS, F3),
    cop1(FMT_D, 0x00, I::AddD, F3),
    cop1(FMT_S, 0x01, I::SubS, F3),
    cop1(FMT_D, 0x01, I::SubD, F3),
    cop1(FMT_S, 0x02, I::MulS, F3),
    cop1(FMT_D, 0x02, I::MulD, F3),
    cop1(FMT_S, 0x03, I::DivS, F3),
    cop1(FMT_D, 0x03, I::DivD, F3),
    cop1(FMT_S, 0x04, I::SqrtS, F2).fix(RT0, 0),
    cop1(FMT_D, 0x04, I::SqrtD, F2).fix(RT0, 0),
    cop1(FMT_S, 0x05, I::AbsS, F2).fix(RT0, 0),
    cop1(FMT_D, 0x05, I::AbsD, F2).fix(RT0, 0),
    cop1(FMT_S, 0x06, I::MovS, F2).fix(RT0, 0),
    cop1(FMT_D, 0x06, I::MovD, F2).fix(RT0, 0),
    cop1(FMT_S, 0x07, I::NegS, F2).fix(RT0, 0),
    cop1(FMT_D, 0x07, I::NegD, F2).fix(RT0, 0),
    cop1(FMT_S, 0x08, I::RoundLS, F2).fix(RT0, 0),
    cop1(FMT_D, 0x08, I::RoundLD, F2).fix(RT0, 0),
    cop1(FMT_S, 0x09, I::TruncLS, F2).fix(RT0, 0),
    cop1(FMT_D, 0x09, I::TruncLD, F2).fix(RT0, 0),
    cop1(FMT_S, 0x0a, I::CeilLS, F2).fix(RT0, 0),
    cop1(FMT_D, 0x0a, I::CeilLD, F2).fix(RT0, 0),
    cop1(FMT_S, 0x0b, I::FloorLS, F2).fix(RT0, 0),
    cop1(FMT_D, 0x0b, I::FloorLD, F2).fix(RT0, 0),
    cop1(FMT_S, 0x0c, I::RoundWS, F2).fix(RT0, 0),
    cop1(FMT_D, 0x0c, I::RoundWD, F2).fix(RT0, 0),
    cop1(FMT_S, 0x0d, I::TruncWS, F2).fix(RT0, 0),
    cop1(FMT_D, 0x0d, I::TruncWD, F2).fix(RT0, 0),
    cop1(FMT_S, 0x0e, I::CeilWS, F2).fix(RT0, 0),
    cop1(FMT_D, 0x0e, I::CeilWD, F2).fix(RT0, 0),
    cop1(FMT_S, 0x0f, I::FloorWS, F2).fix(RT0, 0),
    cop1(FMT_D, 0x0f, I::FloorWD, F2).fix(RT0, 0),
    // COP1 conversions
    cop1(FMT_D, 0x20, I::CvtSD, F2).fix(RT0, 0),
    cop1(FMT_W, 0x20, I::CvtSW, F2).fix(RT0, 0),
    cop1(FMT_L, 0x20, I::CvtSL, F2).fix(RT0, 0),
    cop1(FMT_S, 0x21, I::CvtDS, F2).fix(RT0, 0),
    cop1(FMT_W, 0x21, I::CvtDW, F2).fix(RT0, 0),
    cop1(FMT_L, 0x21, I::CvtDL, F2).fix(RT0, 0),
    cop1(FMT_S, 0x24, I::CvtWS, F2).fix(RT0, 0),
    cop1(FMT_D, 0x24, I::CvtWD, F2).fix(RT0, 0),
    cop1(FMT_S, 0x25, I::CvtLS, F2).fix(RT0, 0),
    cop1(FMT_D, 0x25, I::CvtLD, F2).fix(RT0, 0),
    // branch-likely, doubleword loads
    primary(0x1a, I::Ldl, &[rw(Rt), r(Mem(64))]).pre_r6().mips64(),
    primary(0x1b, I::Ldr, &[rw(Rt), r(Mem(64))]).pre_r6().mips64(),
    // SPECIAL2 (removed by release 6)
    special2(0x00, I::Madd, RS_RT).fix(RD0 | SA0, 0).pre_r6().reads(HI_LO).writes(HI_LO),
    special2(0x01, I::Maddu, RS_RT).fix(RD0 | SA0, 0).pre_r6().reads(HI_LO).writes(HI_LO),
    special2(0x02, I::Mul, R3).fix(SA0, 0).pre_r6().writes(HI_LO),
    special2(0x04, I::Msub, RS_RT).fix(RD0 | SA0, 0).pre_r6().reads(HI_LO).writes(HI_LO),
    special2(0x05, I::Msubu, RS_RT).fix(RD0 | SA0, 0).pre_r6().reads(HI_LO).writes(HI_LO),
    special2(0x20, I::Clz, RD_RS).fix(SA0, 0).pre_r6().groups(BITCOUNT),
    special2(0x21, I::Clo, RD_RS).fix(SA0, 0).pre_r6().groups(BITCOUNT),
    special2(0x24, I::Dclz, RD_RS).fix(SA0, 0).pre_r6().mips64().groups(BITCOUNT),
    special2(0x25, I::Dclo, RD_RS).fix(SA0, 0).pre_r6().mips64().groups(BITCOUNT),
    special2(0x3f, I::Sdbbp, &[]).pre_r6().groups(INT),
    // SPECIAL3
    special3(0x00, I::Ext, &[w(Rt), r(Rs), n(Pos), n(ExtSize)]).rel2(),
    special3(0x03, I::Dext, &[w(Rt), r(Rs), n(Pos), n(ExtSize)]).rel2().mips64(),
    special3(0x04, I::Ins, &[rw(Rt), r(Rs), n(Pos), n(InsSize)]).rel2(),
    special3(0x07, I::Dins, &[rw(Rt), r(Rs), n(Pos), n(InsSize)]).rel2().mips64(),
    special3(0x20, I::Bitswap, RD_RT).fix(RS0 | SA0, 0).r6(),
    special3(0x20, I::Wsbh, RD_RT).fix(RS0 | SA0, 0x02 << 6).rel2(),
    special3(0x20, I::Seb, RD_RT).fix(RS0 | SA0, 0x10 << 6).rel2(),
    special3(0x20, I::Seh, RD_RT).fix(RS0 | SA0, 0x18 << 6).rel2(),
    special3(0x24, I::Dsbh, RD_RT).fix(RS0 | SA0, 0x02 << 6).rel2().mips64(),
    special3(0x24, I::Dshd, RD_RT).fix(RS0 | SA0, 0x05 << 6).rel2().mips64(),
    special3(0x3b, I::Rdhwr, &[w(Rt), n(RawRd)]).fix(RS0, 0).rel2(),
    special3(0x25, I::Cache, &[n(Hint), n(Mem9(0))]).fix(0x40, 0).r6().groups(PRIV),
    special3(0x35, I::Pref, &[n(Hint), n(Mem9(0))]).fix(0x40, 0).r6(),
    special3(0x36, I::Ll, &[w(Rt), r(Mem9(32))]).fix(0x40, 0).r6(),
    special3(0x26, I::Sc, &[rw(Rt), w(Mem9(32))]).fix(0x40, 0).r6(),
    special3(0x37, I::Lld, &[w(Rt), r(Mem9(64))]).fix(0x40, 0).r6().mips64(),
    special3(0x27, I::Scd, &[rw(Rt), w(Mem9(64))]).fix(0x40, 0).r6().mips64(),
    // loads and stores
    load(0x20, I::Lb, 8),
    load(0x21, I::Lh, 16),
    primary(0x22, I::Lwl, &[rw(Rt), r(Mem(32))]).pre_r6(),
    load(0x23, I::Lw, 32),
    load(0x24, I::Lbu, 8),
    load(0x25, I::Lhu, 16),
    primary(0x26, I::Lwr, &[rw(Rt), r(Mem(32))]).pre_r6(),
    load(0x27, I::Lwu, 32).mips64(),
    store(0x28, I::Sb, 8),
    store(0x29, I::Sh, 16),
    store(0x2a, I::Swl, 32).pre_r6(),
    store(0x2b, I::Sw, 32),
    store(0x2c, I::Sdl, 64).pre_r6().mips64(),
    store(0x2d, I::Sdr, 64).pre_r6().mips64(),
    store(0x2e, I::Swr, 32).pre_r6(),
    primary(0x2f, I::Cache, &[n(Hint), n(Mem(0))]).pre_r6().groups(PRIV),
    load(0x30, I::Ll, 32).pre_r6(),
    primary(0x31, I::Lwc1, &[w(Ft), r(Mem(32))]),
    primary(0x33, I::Pref, &[n(Hint), n(Mem(0))]).pre_r6(),
    load(0x34, I::Lld, 64).pre_r6().mips64(),
    primary(0x35, I::Ldc1, &[w(Ft), r(Mem(64))]),
    load(0x37, I::Ld, 64).mips64(),
    primary(0x38, I::Sc, &[rw(Rt), w(Mem(32))]).pre_r6(),
    primary(0x39, I::Swc1, &[r(Ft), w(Mem(32))]),
    primary(0x3c, I::Scd, &[rw(Rt), w(Mem(64))]).pre_r6().mips64(),
    primary(0x3d, I::Sdc1, &[r(Ft), w(Mem(64))]),
    store(0x3f, I::Sd, 64).mips64(),
];

/// `c.cond.fmt` predicates in encoding order, single then double.
const FP_COMPARE: [[I; 16]; 2] = [
    [
        I::CFS, I::CUnS, I::CEqS, I::CUeqS, I::COltS, I::CUltS, I::COleS, I::CUleS,
        I::CSfS, I::CNgleS, I::CSeqS, I::CNglS, I::CLtS, I::CNgeS, I::CLeS, I::CNgtS,
    ],
    [
        I::CFD, I::CUnD, I::CEqD, I::CUeqD, I::COltD, I::CUltD, I::COleD, I::CUleD,
        I::CSfD, I::CNgleD, I::CSeqD, I::CNglD, I::CLtD, I::CNgeD, I::CLeD, I::CNgtD,
    ],
];

/// Release 6 `cmp.cond.fmt` predicates 0..7, single then double.
const FP_CMP_R6: [[I; 8]; 2] = [
    [
        I::CmpAfS, I::CmpUnS, I::CmpEqS, I::CmpUeqS, I::CmpLtS, I::CmpUltS, I::CmpLeS,
        I::CmpUleS,
    ],
    [
        I::CmpAfD, I::CmpUnD, I::CmpEqD, I::CmpUeqD, I::CmpLtD, I::CmpUltD, I::CmpLeD,
        I::CmpUleD,
    ],
];

const fn compare_rows() -> [Entry; 48] {
    let mut out = [Entry::EMPTY; 48];
    let mut i = 0;
    while i < 32 {
        let (fmt, cond) = (i / 16, i % 16);
        let value = (0x11 << 26) | ((FMT_S + fmt as u32) << 21) | 0x30 | cond as u32;
        out[i] = row(0xffe0_00ff, value, FP_COMPARE[fmt][cond], FCMP).pre_r6();
        i += 1;
    }
    while i < 48 {
        let (fmt, cond) = ((i - 32) / 8, (i - 32) % 8);
        out[i] = cop1(FMT_W + fmt as u32, cond as u32, FP_CMP_R6[fmt][cond], F3).r6();
        i += 1;
    }
    out
}

pub static COMPARE: [Entry; 48] = compare_rows();

/// Candidate rows per primary opcode (bits 31..26), in declaration order,
/// with their specificity.
static INDEX: Lazy<Vec<Vec<(u32, &'static Entry)>>> = Lazy::new(|| {
    let mut index = vec![Vec::new(); 64];
    for entry in all_entries() {
        index[(entry.value >> 26) as usize].push((entry.specificity(), entry));
    }
    index
});

pub fn all_entries() -> impl Iterator<Item = &'static Entry> {
    TABLE.iter().chain(COMPARE.iter())
}

/// Rows whose primary opcode matches `word`.
pub fn candidates(word: u32) -> &'static [(u32, &'static Entry)] {
    INDEX
        .get((word >> 26) as usize)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
