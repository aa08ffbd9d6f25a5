//! MIPS register namespace (ABI names).

id_enum! {
    /// MIPS register identifier.
    pub enum MipsReg {
        Zero = "zero", At = "at", V0 = "v0", V1 = "v1",
        A0 = "a0", A1 = "a1", A2 = "a2", A3 = "a3",
        T0 = "t0", T1 = "t1", T2 = "t2", T3 = "t3",
        T4 = "t4", T5 = "t5", T6 = "t6", T7 = "t7",
        S0 = "s0", S1 = "s1", S2 = "s2", S3 = "s3",
        S4 = "s4", S5 = "s5", S6 = "s6", S7 = "s7",
        T8 = "t8", T9 = "t9", K0 = "k0", K1 = "k1",
        Gp = "gp", Sp = "sp", Fp = "fp", Ra = "ra",

        F0 = "f0", F1 = "f1", F2 = "f2", F3 = "f3",
        F4 = "f4", F5 = "f5", F6 = "f6", F7 = "f7",
        F8 = "f8", F9 = "f9", F10 = "f10", F11 = "f11",
        F12 = "f12", F13 = "f13", F14 = "f14", F15 = "f15",
        F16 = "f16", F17 = "f17", F18 = "f18", F19 = "f19",
        F20 = "f20", F21 = "f21", F22 = "f22", F23 = "f23",
        F24 = "f24", F25 = "f25", F26 = "f26", F27 = "f27",
        F28 = "f28", F29 = "f29", F30 = "f30", F31 = "f31",

        Fcc0 = "fcc0", Fcc1 = "fcc1", Fcc2 = "fcc2", Fcc3 = "fcc3",
        Fcc4 = "fcc4", Fcc5 = "fcc5", Fcc6 = "fcc6", Fcc7 = "fcc7",

        Hi = "hi", Lo = "lo",
        Ac0 = "ac0", Ac1 = "ac1", Ac2 = "ac2", Ac3 = "ac3",
        Pc = "pc",

        W0 = "w0", W1 = "w1", W2 = "w2", W3 = "w3",
        W4 = "w4", W5 = "w5", W6 = "w6", W7 = "w7",
        W8 = "w8", W9 = "w9", W10 = "w10", W11 = "w11",
        W12 = "w12", W13 = "w13", W14 = "w14", W15 = "w15",
        W16 = "w16", W17 = "w17", W18 = "w18", W19 = "w19",
        W20 = "w20", W21 = "w21", W22 = "w22", W23 = "w23",
        W24 = "w24", W25 = "w25", W26 = "w26", W27 = "w27",
        W28 = "w28", W29 = "w29", W30 = "w30", W31 = "w31",
    }
}

use MipsReg::*;

const GPR: [MipsReg; 32] = [
    Zero, At, V0, V1, A0, A1, A2, A3, T0, T1, T2, T3, T4, T5, T6, T7, S0, S1, S2, S3, S4, S5, S6,
    S7, T8, T9, K0, K1, Gp, Sp, Fp, Ra,
];
const FPR: [MipsReg; 32] = [
    F0, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15, F16, F17, F18, F19, F20,
    F21, F22, F23, F24, F25, F26, F27, F28, F29, F30, F31,
];
const FCC: [MipsReg; 8] = [Fcc0, Fcc1, Fcc2, Fcc3, Fcc4, Fcc5, Fcc6, Fcc7];
const ACC: [MipsReg; 4] = [Ac0, Ac1, Ac2, Ac3];
const MSA: [MipsReg; 32] = [
    W0, W1, W2, W3, W4, W5, W6, W7, W8, W9, W10, W11, W12, W13, W14, W15, W16, W17, W18, W19, W20,
    W21, W22, W23, W24, W25, W26, W27, W28, W29, W30, W31,
];

impl MipsReg {
    /// General purpose register from a 5-bit field.
    pub fn gpr(num: u32) -> MipsReg {
        GPR[(num & 0x1f) as usize]
    }

    /// Floating point register from a 5-bit field.
    pub fn fpr(num: u32) -> MipsReg {
        FPR[(num & 0x1f) as usize]
    }

    /// FPU condition code from a 3-bit field.
    pub fn fcc(num: u32) -> MipsReg {
        FCC[(num & 7) as usize]
    }

    pub fn acc(num: u32) -> MipsReg {
        ACC[(num & 3) as usize]
    }

    pub fn msa(num: u32) -> MipsReg {
        MSA[(num & 0x1f) as usize]
    }

    /// Hardware number of a general purpose register.
    pub fn gpr_number(self) -> Option<u32> {
        GPR.iter().position(|r| *r == self).map(|i| i as u32)
    }

    pub fn is_gpr(self) -> bool {
        GPR.contains(&self)
    }

    /// Register width in bits for the given GPR width (32 or 64).
    pub fn size(self, gpr_bits: u16) -> u16 {
        if GPR.contains(&self) || matches!(self, Hi | Lo | Pc) {
            gpr_bits
        } else if FPR.contains(&self) || ACC.contains(&self) {
            64
        } else if FCC.contains(&self) {
            1
        } else if MSA.contains(&self) {
            128
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abi_names() {
        assert_eq!(MipsReg::gpr(0), Zero);
        assert_eq!(MipsReg::gpr(29).name(), "sp");
        assert_eq!(MipsReg::gpr(31).name(), "ra");
        assert_eq!(MipsReg::gpr(30).name(), "fp");
        assert_eq!(MipsReg::fpr(12).name(), "f12");
        assert_eq!(MipsReg::from_name("t9"), Some(T9));
        assert_eq!(MipsReg::from_name("$t9"), None);
    }

    #[test]
    fn test_gpr_numbers_roundtrip() {
        for n in 0..32 {
            assert_eq!(MipsReg::gpr(n).gpr_number(), Some(n));
        }
        assert_eq!(F3.gpr_number(), None);
        assert!(!Hi.is_gpr());
    }

    #[test]
    fn test_sizes() {
        assert_eq!(Sp.size(32), 32);
        assert_eq!(Sp.size(64), 64);
        assert_eq!(F0.size(32), 64);
        assert_eq!(W7.size(32), 128);
        assert_eq!(Invalid.size(64), 0);
    }
}
