//! MIPS mnemonic namespace.
//!
//! Names follow the assembler spelling, including the dotted floating point
//! forms (`add.s`, `c.eq.d`, `cvt.d.w`). Aliases such as `move`, `b` and
//! `nop` are first-class mnemonics.

id_enum! {
    /// MIPS instruction mnemonic.
    pub enum MipsMnemonic {
        AbsD = "abs.d",
        AbsS = "abs.s",
        Add = "add",
        AddD = "add.d",
        AddS = "add.s",
        Addi = "addi",
        Addiu = "addiu",
        Addiupc = "addiupc",
        Addu = "addu",
        Aluipc = "aluipc",
        And = "and",
        Andi = "andi",
        Aui = "aui",
        Auipc = "auipc",
        B = "b",
        Bal = "bal",
        Balc = "balc",
        Bc = "bc",
        Bc1eqz = "bc1eqz",
        Bc1f = "bc1f",
        Bc1fl = "bc1fl",
        Bc1nez = "bc1nez",
        Bc1t = "bc1t",
        Bc1tl = "bc1tl",
        Beq = "beq",
        Beqc = "beqc",
        Beql = "beql",
        Beqz = "beqz",
        Beqzalc = "beqzalc",
        Beqzc = "beqzc",
        Bgec = "bgec",
        Bgeuc = "bgeuc",
        Bgez = "bgez",
        Bgezal = "bgezal",
        Bgezalc = "bgezalc",
        Bgezall = "bgezall",
        Bgezc = "bgezc",
        Bgezl = "bgezl",
        Bgtz = "bgtz",
        Bgtzalc = "bgtzalc",
        Bgtzc = "bgtzc",
        Bgtzl = "bgtzl",
        Bitswap = "bitswap",
        Blez = "blez",
        Blezalc = "blezalc",
        Blezc = "blezc",
        Blezl = "blezl",
        Bltc = "bltc",
        Bltuc = "bltuc",
        Bltz = "bltz",
        Bltzal = "bltzal",
        Bltzalc = "bltzalc",
        Bltzall = "bltzall",
        Bltzc = "bltzc",
        Bltzl = "bltzl",
        Bne = "bne",
        Bnec = "bnec",
        Bnel = "bnel",
        Bnez = "bnez",
        Bnezalc = "bnezalc",
        Bnezc = "bnezc",
        Bnvc = "bnvc",
        Bovc = "bovc",
        Break = "break",
        CEqD = "c.eq.d",
        CEqS = "c.eq.s",
        CFD = "c.f.d",
        CFS = "c.f.s",
        CLeD = "c.le.d",
        CLeS = "c.le.s",
        CLtD = "c.lt.d",
        CLtS = "c.lt.s",
        CNgeD = "c.nge.d",
        CNgeS = "c.nge.s",
        CNglD = "c.ngl.d",
        CNglS = "c.ngl.s",
        CNgleD = "c.ngle.d",
        CNgleS = "c.ngle.s",
        CNgtD = "c.ngt.d",
        CNgtS = "c.ngt.s",
        COleD = "c.ole.d",
        COleS = "c.ole.s",
        COltD = "c.olt.d",
        COltS = "c.olt.s",
        CSeqD = "c.seq.d",
        CSeqS = "c.seq.s",
        CSfD = "c.sf.d",
        CSfS = "c.sf.s",
        CUeqD = "c.ueq.d",
        CUeqS = "c.ueq.s",
        CUleD = "c.ule.d",
        CUleS = "c.ule.s",
        CUltD = "c.ult.d",
        CUltS = "c.ult.s",
        CUnD = "c.un.d",
        CUnS = "c.un.s",
        Cache = "cache",
        CeilLD = "ceil.l.d",
        CeilLS = "ceil.l.s",
        CeilWD = "ceil.w.d",
        CeilWS = "ceil.w.s",
        Cfc1 = "cfc1",
        Clo = "clo",
        Clz = "clz",
        CmpAfD = "cmp.af.d",
        CmpAfS = "cmp.af.s",
        CmpEqD = "cmp.eq.d",
        CmpEqS = "cmp.eq.s",
        CmpLeD = "cmp.le.d",
        CmpLeS = "cmp.le.s",
        CmpLtD = "cmp.lt.d",
        CmpLtS = "cmp.lt.s",
        CmpUeqD = "cmp.ueq.d",
        CmpUeqS = "cmp.ueq.s",
        CmpUleD = "cmp.ule.d",
        CmpUleS = "cmp.ule.s",
        CmpUltD = "cmp.ult.d",
        CmpUltS = "cmp.ult.s",
        CmpUnD = "cmp.un.d",
        CmpUnS = "cmp.un.s",
        Ctc1 = "ctc1",
        CvtDL = "cvt.d.l",
        CvtDS = "cvt.d.s",
        CvtDW = "cvt.d.w",
        CvtLD = "cvt.l.d",
        CvtLS = "cvt.l.s",
        CvtSD = "cvt.s.d",
        CvtSL = "cvt.s.l",
        CvtSW = "cvt.s.w",
        CvtWD = "cvt.w.d",
        CvtWS = "cvt.w.s",
        Dadd = "dadd",
        Daddi = "daddi",
        Daddiu = "daddiu",
        Daddu = "daddu",
        Dclo = "dclo",
        Dclz = "dclz",
        Ddiv = "ddiv",
        Ddivu = "ddivu",
        Deret = "deret",
        Dext = "dext",
        Di = "di",
        Dins = "dins",
        Div = "div",
        DivD = "div.d",
        DivS = "div.s",
        Divu = "divu",
        Dlsa = "dlsa",
        Dmfc0 = "dmfc0",
        Dmfc1 = "dmfc1",
        Dmod = "dmod",
        Dmodu = "dmodu",
        Dmtc0 = "dmtc0",
        Dmtc1 = "dmtc1",
        Dmuh = "dmuh",
        Dmuhu = "dmuhu",
        Dmul = "dmul",
        Dmult = "dmult",
        Dmultu = "dmultu",
        Dmulu = "dmulu",
        Dnegu = "dnegu",
        Drotr = "drotr",
        Drotr32 = "drotr32",
        Drotrv = "drotrv",
        Dsbh = "dsbh",
        Dshd = "dshd",
        Dsll = "dsll",
        Dsll32 = "dsll32",
        Dsllv = "dsllv",
        Dsra = "dsra",
        Dsra32 = "dsra32",
        Dsrav = "dsrav",
        Dsrl = "dsrl",
        Dsrl32 = "dsrl32",
        Dsrlv = "dsrlv",
        Dsub = "dsub",
        Dsubu = "dsubu",
        Ehb = "ehb",
        Ei = "ei",
        Eret = "eret",
        Ext = "ext",
        FloorLD = "floor.l.d",
        FloorLS = "floor.l.s",
        FloorWD = "floor.w.d",
        FloorWS = "floor.w.s",
        Ins = "ins",
        J = "j",
        Jal = "jal",
        Jalr = "jalr",
        Jialc = "jialc",
        Jic = "jic",
        Jr = "jr",
        Lb = "lb",
        Lbu = "lbu",
        Ld = "ld",
        Ldc1 = "ldc1",
        Ldl = "ldl",
        Ldr = "ldr",
        Lh = "lh",
        Lhu = "lhu",
        Ll = "ll",
        Lld = "lld",
        Lsa = "lsa",
        Lui = "lui",
        Lw = "lw",
        Lwc1 = "lwc1",
        Lwl = "lwl",
        Lwpc = "lwpc",
        Lwr = "lwr",
        Lwu = "lwu",
        Lwupc = "lwupc",
        Madd = "madd",
        Maddu = "maddu",
        Mfc0 = "mfc0",
        Mfc1 = "mfc1",
        Mfhc1 = "mfhc1",
        Mfhi = "mfhi",
        Mflo = "mflo",
        Mod = "mod",
        Modu = "modu",
        MovD = "mov.d",
        MovS = "mov.s",
        Move = "move",
        Movn = "movn",
        Movz = "movz",
        Msub = "msub",
        Msubu = "msubu",
        Mtc0 = "mtc0",
        Mtc1 = "mtc1",
        Mthc1 = "mthc1",
        Mthi = "mthi",
        Mtlo = "mtlo",
        Muh = "muh",
        Muhu = "muhu",
        Mul = "mul",
        MulD = "mul.d",
        MulS = "mul.s",
        Mult = "mult",
        Multu = "multu",
        Mulu = "mulu",
        Neg = "neg",
        NegD = "neg.d",
        NegS = "neg.s",
        Negu = "negu",
        Nop = "nop",
        Nor = "nor",
        Not = "not",
        Or = "or",
        Ori = "ori",
        Pause = "pause",
        Pref = "pref",
        Rdhwr = "rdhwr",
        Rotr = "rotr",
        Rotrv = "rotrv",
        RoundLD = "round.l.d",
        RoundLS = "round.l.s",
        RoundWD = "round.w.d",
        RoundWS = "round.w.s",
        Sb = "sb",
        Sc = "sc",
        Scd = "scd",
        Sd = "sd",
        Sdbbp = "sdbbp",
        Sdc1 = "sdc1",
        Sdl = "sdl",
        Sdr = "sdr",
        Seb = "seb",
        Seh = "seh",
        Seleqz = "seleqz",
        Selnez = "selnez",
        Sh = "sh",
        Sll = "sll",
        Sllv = "sllv",
        Slt = "slt",
        Slti = "slti",
        Sltiu = "sltiu",
        Sltu = "sltu",
        SqrtD = "sqrt.d",
        SqrtS = "sqrt.s",
        Sra = "sra",
        Srav = "srav",
        Srl = "srl",
        Srlv = "srlv",
        Ssnop = "ssnop",
        Sub = "sub",
        SubD = "sub.d",
        SubS = "sub.s",
        Subu = "subu",
        Sw = "sw",
        Swc1 = "swc1",
        Swl = "swl",
        Swr = "swr",
        Sync = "sync",
        Synci = "synci",
        Syscall = "syscall",
        Teq = "teq",
        Teqi = "teqi",
        Tge = "tge",
        Tgei = "tgei",
        Tgeiu = "tgeiu",
        Tgeu = "tgeu",
        Tlbp = "tlbp",
        Tlbr = "tlbr",
        Tlbwi = "tlbwi",
        Tlbwr = "tlbwr",
        Tlt = "tlt",
        Tlti = "tlti",
        Tltiu = "tltiu",
        Tltu = "tltu",
        Tne = "tne",
        Tnei = "tnei",
        TruncLD = "trunc.l.d",
        TruncLS = "trunc.l.s",
        TruncWD = "trunc.w.d",
        TruncWS = "trunc.w.s",
        Wait = "wait",
        Wsbh = "wsbh",
        Xor = "xor",
        Xori = "xori",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_names() {
        assert_eq!(MipsMnemonic::AddS.name(), "add.s");
        assert_eq!(MipsMnemonic::CvtDW.name(), "cvt.d.w");
        assert_eq!(MipsMnemonic::CUeqD.name(), "c.ueq.d");
        assert_eq!(MipsMnemonic::TruncWS.name(), "trunc.w.s");
        assert_eq!(MipsMnemonic::from_name("cmp.lt.s"), Some(MipsMnemonic::CmpLtS));
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for m in MipsMnemonic::ALL {
            assert!(seen.insert(m.name()), "duplicate mnemonic {m}");
        }
        assert_eq!(MipsMnemonic::Invalid.name(), "");
    }
}
