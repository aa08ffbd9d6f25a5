//! x86 register namespace.

id_enum! {
    /// x86 register identifier.
    pub enum X86Reg {
        Al = "al", Cl = "cl", Dl = "dl", Bl = "bl",
        Ah = "ah", Ch = "ch", Dh = "dh", Bh = "bh",
        Spl = "spl", Bpl = "bpl", Sil = "sil", Dil = "dil",
        R8b = "r8b", R9b = "r9b", R10b = "r10b", R11b = "r11b",
        R12b = "r12b", R13b = "r13b", R14b = "r14b", R15b = "r15b",

        Ax = "ax", Cx = "cx", Dx = "dx", Bx = "bx",
        Sp = "sp", Bp = "bp", Si = "si", Di = "di",
        R8w = "r8w", R9w = "r9w", R10w = "r10w", R11w = "r11w",
        R12w = "r12w", R13w = "r13w", R14w = "r14w", R15w = "r15w",

        Eax = "eax", Ecx = "ecx", Edx = "edx", Ebx = "ebx",
        Esp = "esp", Ebp = "ebp", Esi = "esi", Edi = "edi",
        R8d = "r8d", R9d = "r9d", R10d = "r10d", R11d = "r11d",
        R12d = "r12d", R13d = "r13d", R14d = "r14d", R15d = "r15d",

        Rax = "rax", Rcx = "rcx", Rdx = "rdx", Rbx = "rbx",
        Rsp = "rsp", Rbp = "rbp", Rsi = "rsi", Rdi = "rdi",
        R8 = "r8", R9 = "r9", R10 = "r10", R11 = "r11",
        R12 = "r12", R13 = "r13", R14 = "r14", R15 = "r15",

        Ip = "ip", Eip = "eip", Rip = "rip",
        Eflags = "flags",

        Es = "es", Cs = "cs", Ss = "ss", Ds = "ds", Fs = "fs", Gs = "gs",

        Cr0 = "cr0", Cr1 = "cr1", Cr2 = "cr2", Cr3 = "cr3",
        Cr4 = "cr4", Cr5 = "cr5", Cr6 = "cr6", Cr7 = "cr7",
        Cr8 = "cr8", Cr9 = "cr9", Cr10 = "cr10", Cr11 = "cr11",
        Cr12 = "cr12", Cr13 = "cr13", Cr14 = "cr14", Cr15 = "cr15",

        Dr0 = "dr0", Dr1 = "dr1", Dr2 = "dr2", Dr3 = "dr3",
        Dr4 = "dr4", Dr5 = "dr5", Dr6 = "dr6", Dr7 = "dr7",
        Dr8 = "dr8", Dr9 = "dr9", Dr10 = "dr10", Dr11 = "dr11",
        Dr12 = "dr12", Dr13 = "dr13", Dr14 = "dr14", Dr15 = "dr15",

        St0 = "st(0)", St1 = "st(1)", St2 = "st(2)", St3 = "st(3)",
        St4 = "st(4)", St5 = "st(5)", St6 = "st(6)", St7 = "st(7)",
        Fpsw = "fpsw",

        Mm0 = "mm0", Mm1 = "mm1", Mm2 = "mm2", Mm3 = "mm3",
        Mm4 = "mm4", Mm5 = "mm5", Mm6 = "mm6", Mm7 = "mm7",

        K0 = "k0", K1 = "k1", K2 = "k2", K3 = "k3",
        K4 = "k4", K5 = "k5", K6 = "k6", K7 = "k7",

        Xmm0 = "xmm0", Xmm1 = "xmm1", Xmm2 = "xmm2", Xmm3 = "xmm3",
        Xmm4 = "xmm4", Xmm5 = "xmm5", Xmm6 = "xmm6", Xmm7 = "xmm7",
        Xmm8 = "xmm8", Xmm9 = "xmm9", Xmm10 = "xmm10", Xmm11 = "xmm11",
        Xmm12 = "xmm12", Xmm13 = "xmm13", Xmm14 = "xmm14", Xmm15 = "xmm15",
        Xmm16 = "xmm16", Xmm17 = "xmm17", Xmm18 = "xmm18", Xmm19 = "xmm19",
        Xmm20 = "xmm20", Xmm21 = "xmm21", Xmm22 = "xmm22", Xmm23 = "xmm23",
        Xmm24 = "xmm24", Xmm25 = "xmm25", Xmm26 = "xmm26", Xmm27 = "xmm27",
        Xmm28 = "xmm28", Xmm29 = "xmm29", Xmm30 = "xmm30", Xmm31 = "xmm31",

        Ymm0 = "ymm0", Ymm1 = "ymm1", Ymm2 = "ymm2", Ymm3 = "ymm3",
        Ymm4 = "ymm4", Ymm5 = "ymm5", Ymm6 = "ymm6", Ymm7 = "ymm7",
        Ymm8 = "ymm8", Ymm9 = "ymm9", Ymm10 = "ymm10", Ymm11 = "ymm11",
        Ymm12 = "ymm12", Ymm13 = "ymm13", Ymm14 = "ymm14", Ymm15 = "ymm15",
        Ymm16 = "ymm16", Ymm17 = "ymm17", Ymm18 = "ymm18", Ymm19 = "ymm19",
        Ymm20 = "ymm20", Ymm21 = "ymm21", Ymm22 = "ymm22", Ymm23 = "ymm23",
        Ymm24 = "ymm24", Ymm25 = "ymm25", Ymm26 = "ymm26", Ymm27 = "ymm27",
        Ymm28 = "ymm28", Ymm29 = "ymm29", Ymm30 = "ymm30", Ymm31 = "ymm31",

        Zmm0 = "zmm0", Zmm1 = "zmm1", Zmm2 = "zmm2", Zmm3 = "zmm3",
        Zmm4 = "zmm4", Zmm5 = "zmm5", Zmm6 = "zmm6", Zmm7 = "zmm7",
        Zmm8 = "zmm8", Zmm9 = "zmm9", Zmm10 = "zmm10", Zmm11 = "zmm11",
        Zmm12 = "zmm12", Zmm13 = "zmm13", Zmm14 = "zmm14", Zmm15 = "zmm15",
        Zmm16 = "zmm16", Zmm17 = "zmm17", Zmm18 = "zmm18", Zmm19 = "zmm19",
        Zmm20 = "zmm20", Zmm21 = "zmm21", Zmm22 = "zmm22", Zmm23 = "zmm23",
        Zmm24 = "zmm24", Zmm25 = "zmm25", Zmm26 = "zmm26", Zmm27 = "zmm27",
        Zmm28 = "zmm28", Zmm29 = "zmm29", Zmm30 = "zmm30", Zmm31 = "zmm31",
    }
}

use X86Reg::*;

const GPR8: [X86Reg; 16] = [
    Al, Cl, Dl, Bl, Spl, Bpl, Sil, Dil, R8b, R9b, R10b, R11b, R12b, R13b, R14b, R15b,
];
const GPR8_LEGACY: [X86Reg; 8] = [Al, Cl, Dl, Bl, Ah, Ch, Dh, Bh];
const GPR16: [X86Reg; 16] = [
    Ax, Cx, Dx, Bx, Sp, Bp, Si, Di, R8w, R9w, R10w, R11w, R12w, R13w, R14w, R15w,
];
const GPR32: [X86Reg; 16] = [
    Eax, Ecx, Edx, Ebx, Esp, Ebp, Esi, Edi, R8d, R9d, R10d, R11d, R12d, R13d, R14d, R15d,
];
const GPR64: [X86Reg; 16] = [
    Rax, Rcx, Rdx, Rbx, Rsp, Rbp, Rsi, Rdi, R8, R9, R10, R11, R12, R13, R14, R15,
];
const SEGMENT: [X86Reg; 6] = [Es, Cs, Ss, Ds, Fs, Gs];
const CONTROL: [X86Reg; 16] = [
    Cr0, Cr1, Cr2, Cr3, Cr4, Cr5, Cr6, Cr7, Cr8, Cr9, Cr10, Cr11, Cr12, Cr13, Cr14, Cr15,
];
const DEBUG: [X86Reg; 16] = [
    Dr0, Dr1, Dr2, Dr3, Dr4, Dr5, Dr6, Dr7, Dr8, Dr9, Dr10, Dr11, Dr12, Dr13, Dr14, Dr15,
];
const X87: [X86Reg; 8] = [St0, St1, St2, St3, St4, St5, St6, St7];
const MMX: [X86Reg; 8] = [Mm0, Mm1, Mm2, Mm3, Mm4, Mm5, Mm6, Mm7];
const OPMASK: [X86Reg; 8] = [K0, K1, K2, K3, K4, K5, K6, K7];
const XMM: [X86Reg; 32] = [
    Xmm0, Xmm1, Xmm2, Xmm3, Xmm4, Xmm5, Xmm6, Xmm7, Xmm8, Xmm9, Xmm10, Xmm11, Xmm12, Xmm13,
    Xmm14, Xmm15, Xmm16, Xmm17, Xmm18, Xmm19, Xmm20, Xmm21, Xmm22, Xmm23, Xmm24, Xmm25, Xmm26,
    Xmm27, Xmm28, Xmm29, Xmm30, Xmm31,
];
const YMM: [X86Reg; 32] = [
    Ymm0, Ymm1, Ymm2, Ymm3, Ymm4, Ymm5, Ymm6, Ymm7, Ymm8, Ymm9, Ymm10, Ymm11, Ymm12, Ymm13,
    Ymm14, Ymm15, Ymm16, Ymm17, Ymm18, Ymm19, Ymm20, Ymm21, Ymm22, Ymm23, Ymm24, Ymm25, Ymm26,
    Ymm27, Ymm28, Ymm29, Ymm30, Ymm31,
];
const ZMM: [X86Reg; 32] = [
    Zmm0, Zmm1, Zmm2, Zmm3, Zmm4, Zmm5, Zmm6, Zmm7, Zmm8, Zmm9, Zmm10, Zmm11, Zmm12, Zmm13,
    Zmm14, Zmm15, Zmm16, Zmm17, Zmm18, Zmm19, Zmm20, Zmm21, Zmm22, Zmm23, Zmm24, Zmm25, Zmm26,
    Zmm27, Zmm28, Zmm29, Zmm30, Zmm31,
];

impl X86Reg {
    /// General purpose register `num` (0..16) of `bits` width.
    ///
    /// Byte registers 4..8 select `ah`..`bh` unless a REX prefix is present,
    /// in which case they select `spl`..`dil`.
    pub fn gpr(num: u8, bits: u16, rex: bool) -> X86Reg {
        let n = (num & 0xf) as usize;
        match bits {
            8 if !rex && n < 8 => GPR8_LEGACY[n],
            8 => GPR8[n],
            16 => GPR16[n],
            32 => GPR32[n],
            64 => GPR64[n],
            _ => Invalid,
        }
    }

    /// Segment register from a 3-bit selector; 6 and 7 are reserved.
    pub fn segment(num: u8) -> X86Reg {
        SEGMENT.get(num as usize).copied().unwrap_or(Invalid)
    }

    pub fn control(num: u8) -> X86Reg {
        CONTROL[(num & 0xf) as usize]
    }

    pub fn debug(num: u8) -> X86Reg {
        DEBUG[(num & 0xf) as usize]
    }

    pub fn st(num: u8) -> X86Reg {
        X87[(num & 7) as usize]
    }

    pub fn mmx(num: u8) -> X86Reg {
        MMX[(num & 7) as usize]
    }

    pub fn opmask(num: u8) -> X86Reg {
        OPMASK[(num & 7) as usize]
    }

    /// Vector register `num` (0..32) of `bits` width (128, 256 or 512).
    pub fn vector(num: u8, bits: u16) -> X86Reg {
        let n = (num & 0x1f) as usize;
        match bits {
            512 => ZMM[n],
            256 => YMM[n],
            _ => XMM[n],
        }
    }

    /// Instruction pointer for an address width.
    pub fn ip(bits: u16) -> X86Reg {
        match bits {
            16 => Ip,
            32 => Eip,
            _ => Rip,
        }
    }

    /// Register width in bits; 0 for the sentinel.
    pub fn size(self) -> u16 {
        if GPR8.contains(&self) || GPR8_LEGACY.contains(&self) {
            8
        } else if GPR16.contains(&self) || SEGMENT.contains(&self) || matches!(self, Ip | Fpsw)
        {
            16
        } else if GPR32.contains(&self) || matches!(self, Eip | Eflags) {
            32
        } else if GPR64.contains(&self)
            || CONTROL.contains(&self)
            || DEBUG.contains(&self)
            || MMX.contains(&self)
            || OPMASK.contains(&self)
            || self == Rip
        {
            64
        } else if X87.contains(&self) {
            80
        } else if XMM.contains(&self) {
            128
        } else if YMM.contains(&self) {
            256
        } else if ZMM.contains(&self) {
            512
        } else {
            0
        }
    }

    /// The full-width general purpose register containing this one
    /// (`al` -> `rax`, `r9d` -> `r9`). Non-GPRs map to themselves.
    pub fn widest(self) -> X86Reg {
        let position = |table: &[X86Reg]| table.iter().position(|r| *r == self);
        if let Some(i) = position(&GPR8_LEGACY) {
            return GPR64[i & 3];
        }
        for table in [&GPR8, &GPR16, &GPR32] {
            if let Some(i) = position(table) {
                return GPR64[i];
            }
        }
        self
    }

    /// Stack-relative registers used to pick the default `ss` segment.
    pub fn is_stack_base(self) -> bool {
        matches!(self.widest(), Rsp | Rbp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpr_selection() {
        assert_eq!(X86Reg::gpr(0, 64, false), Rax);
        assert_eq!(X86Reg::gpr(9, 32, true), R9d);
        assert_eq!(X86Reg::gpr(4, 8, false), Ah);
        assert_eq!(X86Reg::gpr(4, 8, true), Spl);
        assert_eq!(X86Reg::gpr(12, 16, true), R12w);
        assert_eq!(X86Reg::gpr(1, 80, false), Invalid);
    }

    #[test]
    fn test_sizes_and_names() {
        assert_eq!(Rax.size(), 64);
        assert_eq!(Ah.size(), 8);
        assert_eq!(Xmm17.size(), 128);
        assert_eq!(Zmm3.size(), 512);
        assert_eq!(St3.size(), 80);
        assert_eq!(Invalid.size(), 0);
        assert_eq!(St1.name(), "st(1)");
        assert_eq!(X86Reg::from_name("r15d"), Some(R15d));
        assert_eq!(X86Reg::from_name("st(7)"), Some(St7));
    }

    #[test]
    fn test_widest_and_segments() {
        assert_eq!(Bh.widest(), Rbx);
        assert_eq!(R10w.widest(), R10);
        assert_eq!(Xmm1.widest(), Xmm1);
        assert!(Ebp.is_stack_base());
        assert!(!Esi.is_stack_base());
        assert_eq!(X86Reg::segment(4), Fs);
        assert_eq!(X86Reg::segment(6), Invalid);
        assert_eq!(X86Reg::vector(20, 256), Ymm20);
    }
}
