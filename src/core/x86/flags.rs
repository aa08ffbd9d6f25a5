//! EFLAGS effect bitset reported for decoded x86 instructions.

use bitflags::bitflags;

bitflags! {
    /// How an instruction touches each EFLAGS bit.
    ///
    /// `MODIFY_*` writes a computed value, `PRIOR_*` restores a saved value,
    /// `RESET_*`/`SET_*` force 0/1, `TEST_*` reads, `UNDEFINED_*` leaves the
    /// flag architecturally undefined.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
    pub struct EFlags: u64 {
        const MODIFY_AF = 1 << 0;
        const MODIFY_CF = 1 << 1;
        const MODIFY_SF = 1 << 2;
        const MODIFY_ZF = 1 << 3;
        const MODIFY_PF = 1 << 4;
        const MODIFY_OF = 1 << 5;
        const MODIFY_TF = 1 << 6;
        const MODIFY_IF = 1 << 7;
        const MODIFY_DF = 1 << 8;
        const MODIFY_NT = 1 << 9;
        const MODIFY_RF = 1 << 10;
        const PRIOR_OF = 1 << 11;
        const PRIOR_SF = 1 << 12;
        const PRIOR_ZF = 1 << 13;
        const PRIOR_AF = 1 << 14;
        const PRIOR_PF = 1 << 15;
        const PRIOR_CF = 1 << 16;
        const PRIOR_TF = 1 << 17;
        const PRIOR_IF = 1 << 18;
        const PRIOR_DF = 1 << 19;
        const PRIOR_NT = 1 << 20;
        const RESET_OF = 1 << 21;
        const RESET_CF = 1 << 22;
        const RESET_DF = 1 << 23;
        const RESET_IF = 1 << 24;
        const RESET_SF = 1 << 25;
        const RESET_AF = 1 << 26;
        const RESET_TF = 1 << 27;
        const RESET_NT = 1 << 28;
        const RESET_PF = 1 << 29;
        const SET_CF = 1 << 30;
        const SET_DF = 1 << 31;
        const SET_IF = 1 << 32;
        const TEST_OF = 1 << 33;
        const TEST_SF = 1 << 34;
        const TEST_ZF = 1 << 35;
        const TEST_PF = 1 << 36;
        const TEST_CF = 1 << 37;
        const TEST_NT = 1 << 38;
        const TEST_DF = 1 << 39;
        const UNDEFINED_OF = 1 << 40;
        const UNDEFINED_SF = 1 << 41;
        const UNDEFINED_ZF = 1 << 42;
        const UNDEFINED_PF = 1 << 43;
        const UNDEFINED_AF = 1 << 44;
        const UNDEFINED_CF = 1 << 45;
    }
}

/// Highest defined bit position.
pub const EFLAGS_LAST_BIT: u32 = 45;

impl EFlags {
    /// Flags whose prior value the instruction consumes.
    pub fn reads_flags(self) -> bool {
        self.intersects(
            EFlags::TEST_OF
                | EFlags::TEST_SF
                | EFlags::TEST_ZF
                | EFlags::TEST_PF
                | EFlags::TEST_CF
                | EFlags::TEST_NT
                | EFlags::TEST_DF,
        )
    }

    /// True when any flag is written (computed, forced, restored or clobbered).
    pub fn writes_flags(self) -> bool {
        !(self
            - (EFlags::TEST_OF
                | EFlags::TEST_SF
                | EFlags::TEST_ZF
                | EFlags::TEST_PF
                | EFlags::TEST_CF
                | EFlags::TEST_NT
                | EFlags::TEST_DF))
            .is_empty()
    }

    /// Short display names of every set bit, lowest bit first.
    pub fn names(self) -> Vec<&'static str> {
        (0..=EFLAGS_LAST_BIT)
            .map(|bit| EFlags::from_bits_retain(1u64 << bit))
            .filter(|flag| self.contains(*flag))
            .map(eflag_name)
            .collect()
    }
}

/// Short name of a single EFLAGS effect bit (`MOD_CF`, `UNDEF_OF`, ...).
///
/// Returns `""` for zero, for combinations and for unknown bits.
pub fn eflag_name(flag: EFlags) -> &'static str {
    const NAMES: [&str; 46] = [
        "MOD_AF", "MOD_CF", "MOD_SF", "MOD_ZF", "MOD_PF", "MOD_OF", "MOD_TF", "MOD_IF", "MOD_DF",
        "MOD_NT", "MOD_RF", "PRIOR_OF", "PRIOR_SF", "PRIOR_ZF", "PRIOR_AF", "PRIOR_PF",
        "PRIOR_CF", "PRIOR_TF", "PRIOR_IF", "PRIOR_DF", "PRIOR_NT", "RESET_OF", "RESET_CF",
        "RESET_DF", "RESET_IF", "RESET_SF", "RESET_AF", "RESET_TF", "RESET_NT", "RESET_PF",
        "SET_CF", "SET_DF", "SET_IF", "TEST_OF", "TEST_SF", "TEST_ZF", "TEST_PF", "TEST_CF",
        "TEST_NT", "TEST_DF", "UNDEF_OF", "UNDEF_SF", "UNDEF_ZF", "UNDEF_PF", "UNDEF_AF",
        "UNDEF_CF",
    ];
    let bits = flag.bits();
    if bits.count_ones() != 1 {
        return "";
    }
    NAMES
        .get(bits.trailing_zeros() as usize)
        .copied()
        .unwrap_or("")
}

/// Commonly shared effect sets used by the opcode tables.
pub(crate) mod sets {
    use super::EFlags;

    const fn bits(f: EFlags) -> u64 {
        f.bits()
    }

    /// add/sub/cmp/neg family.
    pub const ARITH: u64 = bits(EFlags::MODIFY_AF)
        | bits(EFlags::MODIFY_CF)
        | bits(EFlags::MODIFY_SF)
        | bits(EFlags::MODIFY_ZF)
        | bits(EFlags::MODIFY_PF)
        | bits(EFlags::MODIFY_OF);
    /// adc/sbb also consume CF.
    pub const ARITH_CARRY: u64 = ARITH | bits(EFlags::TEST_CF);
    /// and/or/xor/test.
    pub const LOGIC: u64 = bits(EFlags::RESET_OF)
        | bits(EFlags::RESET_CF)
        | bits(EFlags::MODIFY_SF)
        | bits(EFlags::MODIFY_ZF)
        | bits(EFlags::MODIFY_PF)
        | bits(EFlags::UNDEFINED_AF);
    /// inc/dec leave CF alone.
    pub const INCDEC: u64 = bits(EFlags::MODIFY_AF)
        | bits(EFlags::MODIFY_SF)
        | bits(EFlags::MODIFY_ZF)
        | bits(EFlags::MODIFY_PF)
        | bits(EFlags::MODIFY_OF);
    /// Shifts by a variable count.
    pub const SHIFT: u64 = bits(EFlags::MODIFY_CF)
        | bits(EFlags::MODIFY_SF)
        | bits(EFlags::MODIFY_ZF)
        | bits(EFlags::MODIFY_PF)
        | bits(EFlags::MODIFY_OF)
        | bits(EFlags::UNDEFINED_AF);
    /// Rotates touch only CF and OF.
    pub const ROTATE: u64 = bits(EFlags::MODIFY_CF) | bits(EFlags::MODIFY_OF);
    pub const ROTATE_CARRY: u64 = ROTATE | bits(EFlags::TEST_CF);
    /// mul/imul.
    pub const MUL: u64 = bits(EFlags::MODIFY_CF)
        | bits(EFlags::MODIFY_OF)
        | bits(EFlags::UNDEFINED_SF)
        | bits(EFlags::UNDEFINED_ZF)
        | bits(EFlags::UNDEFINED_PF)
        | bits(EFlags::UNDEFINED_AF);
    /// div/idiv.
    pub const DIV: u64 = bits(EFlags::UNDEFINED_OF)
        | bits(EFlags::UNDEFINED_SF)
        | bits(EFlags::UNDEFINED_ZF)
        | bits(EFlags::UNDEFINED_PF)
        | bits(EFlags::UNDEFINED_AF)
        | bits(EFlags::UNDEFINED_CF);
    /// bt/bts/btr/btc.
    pub const BITTEST: u64 = bits(EFlags::MODIFY_CF)
        | bits(EFlags::UNDEFINED_OF)
        | bits(EFlags::UNDEFINED_SF)
        | bits(EFlags::UNDEFINED_AF)
        | bits(EFlags::UNDEFINED_PF);
    /// bsf/bsr.
    pub const BITSCAN: u64 = bits(EFlags::MODIFY_ZF)
        | bits(EFlags::UNDEFINED_OF)
        | bits(EFlags::UNDEFINED_SF)
        | bits(EFlags::UNDEFINED_AF)
        | bits(EFlags::UNDEFINED_PF)
        | bits(EFlags::UNDEFINED_CF);
    /// popcnt/lzcnt/tzcnt.
    pub const COUNT: u64 = bits(EFlags::MODIFY_ZF)
        | bits(EFlags::MODIFY_CF)
        | bits(EFlags::RESET_OF)
        | bits(EFlags::RESET_SF)
        | bits(EFlags::RESET_AF)
        | bits(EFlags::RESET_PF);
    /// ucomiss/comisd and fcomi families.
    pub const FCOMI: u64 = bits(EFlags::MODIFY_ZF)
        | bits(EFlags::MODIFY_PF)
        | bits(EFlags::MODIFY_CF)
        | bits(EFlags::RESET_OF)
        | bits(EFlags::RESET_SF)
        | bits(EFlags::RESET_AF);
    /// BMI1 andn/bextr/bls*.
    pub const BMI: u64 = bits(EFlags::MODIFY_SF)
        | bits(EFlags::MODIFY_ZF)
        | bits(EFlags::MODIFY_CF)
        | bits(EFlags::RESET_OF)
        | bits(EFlags::UNDEFINED_AF)
        | bits(EFlags::UNDEFINED_PF);
    /// Restores the whole flags image (popf/iret).
    pub const ALL_PRIOR: u64 = bits(EFlags::PRIOR_OF)
        | bits(EFlags::PRIOR_SF)
        | bits(EFlags::PRIOR_ZF)
        | bits(EFlags::PRIOR_AF)
        | bits(EFlags::PRIOR_PF)
        | bits(EFlags::PRIOR_CF)
        | bits(EFlags::PRIOR_TF)
        | bits(EFlags::PRIOR_IF)
        | bits(EFlags::PRIOR_DF)
        | bits(EFlags::PRIOR_NT);
    /// sahf.
    pub const SAHF: u64 = bits(EFlags::MODIFY_SF)
        | bits(EFlags::MODIFY_ZF)
        | bits(EFlags::MODIFY_AF)
        | bits(EFlags::MODIFY_PF)
        | bits(EFlags::MODIFY_CF);
    /// Reads every status flag (pushf/lahf).
    pub const ALL_TEST: u64 = bits(EFlags::TEST_OF)
        | bits(EFlags::TEST_SF)
        | bits(EFlags::TEST_ZF)
        | bits(EFlags::TEST_PF)
        | bits(EFlags::TEST_CF)
        | bits(EFlags::TEST_NT)
        | bits(EFlags::TEST_DF);
    /// String instructions consult DF.
    pub const STRING: u64 = bits(EFlags::TEST_DF);
    /// cmps/scas.
    pub const STRING_CMP: u64 = ARITH | STRING;
    /// Decimal adjust after addition/subtraction.
    pub const DECIMAL: u64 = bits(EFlags::MODIFY_AF)
        | bits(EFlags::MODIFY_CF)
        | bits(EFlags::MODIFY_SF)
        | bits(EFlags::MODIFY_ZF)
        | bits(EFlags::MODIFY_PF)
        | bits(EFlags::UNDEFINED_OF)
        | bits(EFlags::TEST_CF);
    /// aaa/aas.
    pub const ASCII_ADJUST: u64 = bits(EFlags::MODIFY_AF)
        | bits(EFlags::MODIFY_CF)
        | bits(EFlags::UNDEFINED_OF)
        | bits(EFlags::UNDEFINED_SF)
        | bits(EFlags::UNDEFINED_ZF)
        | bits(EFlags::UNDEFINED_PF);
    /// aam/aad.
    pub const ASCII_MULDIV: u64 = bits(EFlags::MODIFY_SF)
        | bits(EFlags::MODIFY_ZF)
        | bits(EFlags::MODIFY_PF)
        | bits(EFlags::UNDEFINED_OF)
        | bits(EFlags::UNDEFINED_AF)
        | bits(EFlags::UNDEFINED_CF);
    /// cmpxchg family.
    pub const CMPXCHG8: u64 = bits(EFlags::MODIFY_ZF);
    /// adcx/adox.
    pub const ADCX: u64 = bits(EFlags::MODIFY_CF) | bits(EFlags::TEST_CF);
    pub const ADOX: u64 = bits(EFlags::MODIFY_OF) | bits(EFlags::TEST_OF);
    /// ptest/vtestps.
    pub const PTEST: u64 = bits(EFlags::MODIFY_ZF)
        | bits(EFlags::MODIFY_CF)
        | bits(EFlags::RESET_OF)
        | bits(EFlags::RESET_SF)
        | bits(EFlags::RESET_AF)
        | bits(EFlags::RESET_PF);
    /// rdrand/rdseed.
    pub const RDRAND: u64 = bits(EFlags::MODIFY_CF)
        | bits(EFlags::RESET_OF)
        | bits(EFlags::RESET_SF)
        | bits(EFlags::MODIFY_ZF)
        | bits(EFlags::RESET_AF)
        | bits(EFlags::RESET_PF);
    /// Double-precision shifts (shld/shrd).
    pub const DSHIFT: u64 = SHIFT | bits(EFlags::UNDEFINED_OF);
    pub const CLC: u64 = bits(EFlags::RESET_CF);
    pub const STC: u64 = bits(EFlags::SET_CF);
    /// salc fills al from CF.
    pub const SALC: u64 = bits(EFlags::TEST_CF);
    pub const CMC: u64 = bits(EFlags::MODIFY_CF) | bits(EFlags::TEST_CF);
    pub const CLD: u64 = bits(EFlags::RESET_DF);
    pub const STD: u64 = bits(EFlags::SET_DF);
    pub const CLI: u64 = bits(EFlags::RESET_IF);
    pub const STI: u64 = bits(EFlags::SET_IF);
    /// Software interrupts clear TF and IF.
    pub const INT: u64 = bits(EFlags::RESET_TF) | bits(EFlags::RESET_IF) | bits(EFlags::RESET_NT);
    /// into consults OF.
    pub const INTO: u64 = INT | bits(EFlags::TEST_OF);
    /// loope/loopne.
    pub const LOOPCC: u64 = bits(EFlags::TEST_ZF);
    /// verr/verw/lar/lsl report through ZF.
    pub const ZF_ONLY: u64 = bits(EFlags::MODIFY_ZF);
    /// x87 fcmov on CF/ZF/PF.
    pub const FCMOV_B: u64 = bits(EFlags::TEST_CF);
    pub const FCMOV_E: u64 = bits(EFlags::TEST_ZF);
    pub const FCMOV_BE: u64 = bits(EFlags::TEST_CF) | bits(EFlags::TEST_ZF);
    pub const FCMOV_U: u64 = bits(EFlags::TEST_PF);
    /// VMX instructions report status in CF/ZF.
    pub const VMX: u64 = bits(EFlags::MODIFY_CF)
        | bits(EFlags::MODIFY_ZF)
        | bits(EFlags::RESET_PF)
        | bits(EFlags::RESET_AF)
        | bits(EFlags::RESET_SF)
        | bits(EFlags::RESET_OF);
    /// xtest/kortest style ZF/CF result.
    pub const ZF_CF: u64 = PTEST;
    /// pcmpistri/pcmpestri.
    pub const PCMPSTR: u64 = bits(EFlags::MODIFY_CF)
        | bits(EFlags::MODIFY_ZF)
        | bits(EFlags::MODIFY_SF)
        | bits(EFlags::MODIFY_OF)
        | bits(EFlags::RESET_AF)
        | bits(EFlags::RESET_PF);
    /// stac/clac toggle AC, which has no slot here; they still write flags.
    pub const AC: u64 = bits(EFlags::MODIFY_RF);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eflag_names() {
        assert_eq!(eflag_name(EFlags::MODIFY_CF), "MOD_CF");
        assert_eq!(eflag_name(EFlags::UNDEFINED_OF), "UNDEF_OF");
        assert_eq!(eflag_name(EFlags::SET_IF), "SET_IF");
        assert_eq!(eflag_name(EFlags::PRIOR_NT), "PRIOR_NT");
        assert_eq!(eflag_name(EFlags::empty()), "");
        assert_eq!(eflag_name(EFlags::MODIFY_CF | EFlags::MODIFY_OF), "");
    }

    #[test]
    fn test_every_bit_named() {
        for bit in 0..=EFLAGS_LAST_BIT {
            let flag = EFlags::from_bits_retain(1 << bit);
            assert!(!eflag_name(flag).is_empty(), "bit {bit} has no name");
        }
        assert_eq!(EFlags::all().bits().count_ones(), EFLAGS_LAST_BIT + 1);
    }

    #[test]
    fn test_read_write_classification() {
        let logic = EFlags::from_bits_retain(sets::LOGIC);
        assert!(logic.writes_flags());
        assert!(!logic.reads_flags());

        let adc = EFlags::from_bits_retain(sets::ARITH_CARRY);
        assert!(adc.reads_flags());
        assert!(adc.writes_flags());

        let jcc = EFlags::TEST_ZF;
        assert!(jcc.reads_flags());
        assert!(!jcc.writes_flags());
    }

    #[test]
    fn test_names_in_bit_order() {
        let f = EFlags::MODIFY_OF | EFlags::MODIFY_AF | EFlags::UNDEFINED_CF;
        assert_eq!(f.names(), vec!["MOD_AF", "MOD_OF", "UNDEF_CF"]);
    }
}
