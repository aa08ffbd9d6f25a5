//! Per-instruction x86 decode state.

use crate::core::x86::{AvxRm, X86Reg};
use crate::disasm::x86::tables::{Enc, Map, Pfx};

/// Fields of a VEX, EVEX or XOP prefix, stored with their inversions
/// already undone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VexFields {
    pub r: bool,
    pub x: bool,
    pub b: bool,
    /// EVEX.R'
    pub r2: bool,
    /// EVEX.V'
    pub v2: bool,
    pub w: bool,
    pub vvvv: u8,
    /// VEX.L or EVEX.L'L
    pub l: u8,
    pub pp: u8,
    /// EVEX.aaa
    pub aaa: u8,
    /// EVEX.z
    pub z: bool,
    /// EVEX.b
    pub bcst: bool,
}

/// Scratch state for one x86 instruction.
#[derive(Debug, Clone)]
pub struct X86Context {
    pub start: usize,
    /// Processor mode width: 16, 32 or 64.
    pub mode_bits: u16,
    pub prefix_count: usize,
    /// Prefix slots: rep/lock, segment, operand size, address size.
    pub prefix: [u8; 4],
    pub lock: bool,
    /// Last of `F2`/`F3` seen.
    pub rep: Option<u8>,
    pub opsize: bool,
    pub adsize: bool,
    pub segment: Option<X86Reg>,
    pub rex: u8,
    pub enc: Enc,
    pub vex: VexFields,
    pub map: Map,
    pub opcode: u8,
    pub opcode_bytes: [u8; 4],
    pub opcode_len: usize,
    pub modrm: Option<u8>,
    pub sib: Option<u8>,
    pub disp: i64,
    /// Effective operand size in bits.
    pub osz: u16,
    /// Effective address size in bits.
    pub asz: u16,
    /// Vector length in bits for `S::Vl`.
    pub vl: u16,
    /// Last imm8 read, for predicates and `is4` registers.
    pub imm8: Option<u8>,
    pub rounding: Option<AvxRm>,
    pub sae: bool,
    pub opmask: X86Reg,
}

impl X86Context {
    pub fn new(start: usize, mode_bits: u16) -> Self {
        Self {
            start,
            mode_bits,
            prefix_count: 0,
            prefix: [0; 4],
            lock: false,
            rep: None,
            opsize: false,
            adsize: false,
            segment: None,
            rex: 0,
            enc: Enc::Legacy,
            vex: VexFields::default(),
            map: Map::Primary,
            opcode: 0,
            opcode_bytes: [0; 4],
            opcode_len: 0,
            modrm: None,
            sib: None,
            disp: 0,
            osz: if mode_bits == 16 { 16 } else { 32 },
            asz: mode_bits,
            vl: 128,
            imm8: None,
            rounding: None,
            sae: false,
            opmask: X86Reg::Invalid,
        }
    }

    pub fn is64(&self) -> bool {
        self.mode_bits == 64
    }

    pub fn push_opcode_byte(&mut self, byte: u8) {
        if self.opcode_len < self.opcode_bytes.len() {
            self.opcode_bytes[self.opcode_len] = byte;
            self.opcode_len += 1;
        }
    }

    /// Mandatory-prefix selector: VEX-style `pp`, else the last of
    /// `F2`/`F3`, else `66`.
    pub fn mandatory(&self) -> Pfx {
        match self.enc {
            Enc::Legacy => match self.rep {
                Some(0xf3) => Pfx::F3,
                Some(_) => Pfx::F2,
                None if self.opsize => Pfx::P66,
                None => Pfx::None,
            },
            _ => match self.vex.pp {
                1 => Pfx::P66,
                2 => Pfx::F3,
                3 => Pfx::F2,
                _ => Pfx::None,
            },
        }
    }

    /// REX.W or the VEX/EVEX/XOP W bit.
    pub fn w(&self) -> bool {
        match self.enc {
            Enc::Legacy => self.rex & 8 != 0,
            _ => self.vex.w,
        }
    }

    fn ext(&self, rex_bit: u8, vex_bit: bool) -> u8 {
        let set = match self.enc {
            Enc::Legacy => self.rex & rex_bit != 0,
            _ => vex_bit,
        };
        if set {
            8
        } else {
            0
        }
    }

    /// ModRM.reg extension (REX.R / VEX.R).
    pub fn r_ext(&self) -> u8 {
        self.ext(4, self.vex.r)
    }

    /// SIB.index extension (REX.X / VEX.X).
    pub fn x_ext(&self) -> u8 {
        self.ext(2, self.vex.x)
    }

    /// ModRM.rm / SIB.base / opcode register extension (REX.B / VEX.B).
    pub fn b_ext(&self) -> u8 {
        self.ext(1, self.vex.b)
    }

    /// Whether any REX prefix is in effect (selects `spl`.. over `ah`..).
    pub fn has_rex(&self) -> bool {
        self.rex != 0
    }

    /// Whether EVEX.b applies to a register-form r/m operand.
    pub fn evex_reg_control(&self) -> bool {
        self.enc == Enc::Evex && self.vex.bcst && self.modrm.is_some_and(|m| m >> 6 == 3)
    }

    pub fn modrm_mod(&self) -> u8 {
        self.modrm.map_or(0, |m| m >> 6)
    }

    pub fn modrm_reg(&self) -> u8 {
        self.modrm.map_or(0, |m| (m >> 3) & 7)
    }

    pub fn modrm_rm(&self) -> u8 {
        self.modrm.map_or(0, |m| m & 7)
    }

    /// vvvv including EVEX.V'; only the low three bits outside 64-bit mode.
    pub fn vvvv(&self) -> u8 {
        let hi = if self.vex.v2 { 16 } else { 0 };
        let v = self.vex.vvvv | hi;
        if self.is64() {
            v
        } else {
            v & 7
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandatory_prefix_precedence() {
        let mut ctx = X86Context::new(0, 64);
        assert_eq!(ctx.mandatory(), Pfx::None);
        ctx.opsize = true;
        assert_eq!(ctx.mandatory(), Pfx::P66);
        ctx.rep = Some(0xf2);
        assert_eq!(ctx.mandatory(), Pfx::F2);
        ctx.rep = Some(0xf3);
        assert_eq!(ctx.mandatory(), Pfx::F3);

        ctx.enc = Enc::Vex;
        ctx.vex.pp = 1;
        assert_eq!(ctx.mandatory(), Pfx::P66);
    }

    #[test]
    fn test_register_extensions() {
        let mut ctx = X86Context::new(0, 64);
        ctx.rex = 0x4d;
        assert!(ctx.w());
        assert_eq!(ctx.r_ext(), 8);
        assert_eq!(ctx.x_ext(), 0);
        assert_eq!(ctx.b_ext(), 8);

        ctx.enc = Enc::Vex;
        ctx.vex.x = true;
        assert_eq!(ctx.x_ext(), 8);
        assert_eq!(ctx.r_ext(), 0);
    }

    #[test]
    fn test_vvvv_is_masked_outside_long_mode() {
        let mut ctx = X86Context::new(0, 32);
        ctx.vex.vvvv = 0xb;
        assert_eq!(ctx.vvvv(), 3);
        ctx.mode_bits = 64;
        ctx.vex.v2 = true;
        assert_eq!(ctx.vvvv(), 27);
    }
}
