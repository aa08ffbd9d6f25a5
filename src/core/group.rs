//! Instruction groups (semantic categories attached to decoded instructions).

id_enum! {
    /// Instruction group identifier.
    ///
    /// The first block is shared by every architecture; the rest are
    /// architecture feature groups.
    pub enum Group {
        Jump = "jump",
        Call = "call",
        Ret = "ret",
        Int = "int",
        Iret = "iret",
        Privilege = "privilege",
        BranchRelative = "branch_relative",

        // x86
        Vm = "vm",
        Fpu = "fpu",
        Mmx = "mmx",
        Sse1 = "sse1",
        Sse2 = "sse2",
        Sse3 = "sse3",
        Ssse3 = "ssse3",
        Sse41 = "sse41",
        Sse42 = "sse42",
        Aes = "aes",
        Pclmul = "pclmul",
        Avx = "avx",
        Avx2 = "avx2",
        Avx512 = "avx512",
        Fma = "fma",
        Fma4 = "fma4",
        Xop = "xop",
        Bmi = "bmi",
        Bmi2 = "bmi2",
        Adx = "adx",
        Rtm = "rtm",
        Cmov = "cmov",
        Mode64 = "mode64",
        Not64BitMode = "not64bitmode",

        // MIPS
        Mips32 = "mips32",
        Mips64 = "mips64",
        Mips32r2 = "mips32r2",
        Mips32r6 = "mips32r6",
        NotMips32r6 = "notmips32r6",
        Mips64r2 = "mips64r2",
        BitCount = "bitcount",
        Stdenc = "stdenc",
        Fp64Bit = "fp64bit",
        Gp64Bit = "gp64bit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_names() {
        assert_eq!(Group::Jump.name(), "jump");
        assert_eq!(Group::BranchRelative.to_string(), "branch_relative");
        assert_eq!(Group::Invalid.name(), "");
        assert!(!Group::Invalid.is_valid());
    }

    #[test]
    fn test_group_reverse_lookup() {
        assert_eq!(Group::from_name("avx2"), Some(Group::Avx2));
        assert_eq!(Group::from_name("notmips32r6"), Some(Group::NotMips32r6));
        assert_eq!(Group::from_name("nonsense"), None);
        assert_eq!(Group::from_name(""), None);
    }
}
