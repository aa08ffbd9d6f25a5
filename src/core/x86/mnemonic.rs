//! x86 mnemonic namespace.

id_enum! {
    /// x86 instruction mnemonic, named as printed in Intel syntax.
    pub enum X86Mnemonic {
        Aaa = "aaa", Aad = "aad", Aam = "aam", Aas = "aas", Adc = "adc", Adcx = "adcx",
        Add = "add", Addpd = "addpd", Addps = "addps", Addsd = "addsd", Addss = "addss",
        Addsubpd = "addsubpd", Addsubps = "addsubps", Adox = "adox", Aesdec = "aesdec",
        Aesdeclast = "aesdeclast", Aesenc = "aesenc", Aesenclast = "aesenclast",
        Aesimc = "aesimc", Aeskeygenassist = "aeskeygenassist", And = "and", Andn = "andn",
        Andnpd = "andnpd", Andnps = "andnps", Andpd = "andpd", Andps = "andps", Arpl = "arpl",
        Bextr = "bextr", Blendpd = "blendpd", Blendps = "blendps", Blendvpd = "blendvpd",
        Blendvps = "blendvps", Blsi = "blsi", Blsmsk = "blsmsk", Blsr = "blsr", Bound = "bound",
        Bsf = "bsf", Bsr = "bsr", Bswap = "bswap", Bt = "bt", Btc = "btc", Btr = "btr",
        Bts = "bts", Bzhi = "bzhi",
        Call = "call", Cbw = "cbw", Cdq = "cdq", Cdqe = "cdqe", Clac = "clac", Clc = "clc",
        Cld = "cld", Clflush = "clflush", Cli = "cli", Clts = "clts", Cmc = "cmc",
        Cmova = "cmova", Cmovae = "cmovae", Cmovb = "cmovb", Cmovbe = "cmovbe", Cmove = "cmove",
        Cmovg = "cmovg", Cmovge = "cmovge", Cmovl = "cmovl", Cmovle = "cmovle",
        Cmovne = "cmovne", Cmovno = "cmovno", Cmovnp = "cmovnp", Cmovns = "cmovns",
        Cmovo = "cmovo", Cmovp = "cmovp", Cmovs = "cmovs", Cmp = "cmp", Cmppd = "cmppd",
        Cmpps = "cmpps", Cmpsb = "cmpsb", Cmpsd = "cmpsd", Cmpsq = "cmpsq", Cmpss = "cmpss",
        Cmpsw = "cmpsw", Cmpxchg = "cmpxchg", Cmpxchg16b = "cmpxchg16b",
        Cmpxchg8b = "cmpxchg8b", Comisd = "comisd", Comiss = "comiss", Cpuid = "cpuid",
        Cqo = "cqo", Crc32 = "crc32", Cvtdq2pd = "cvtdq2pd", Cvtdq2ps = "cvtdq2ps",
        Cvtpd2dq = "cvtpd2dq", Cvtpd2pi = "cvtpd2pi", Cvtpd2ps = "cvtpd2ps",
        Cvtpi2pd = "cvtpi2pd", Cvtpi2ps = "cvtpi2ps", Cvtps2dq = "cvtps2dq",
        Cvtps2pd = "cvtps2pd", Cvtps2pi = "cvtps2pi", Cvtsd2si = "cvtsd2si",
        Cvtsd2ss = "cvtsd2ss", Cvtsi2sd = "cvtsi2sd", Cvtsi2ss = "cvtsi2ss",
        Cvtss2sd = "cvtss2sd", Cvtss2si = "cvtss2si", Cvttpd2dq = "cvttpd2dq",
        Cvttpd2pi = "cvttpd2pi", Cvttps2dq = "cvttps2dq", Cvttps2pi = "cvttps2pi",
        Cvttsd2si = "cvttsd2si", Cvttss2si = "cvttss2si", Cwd = "cwd", Cwde = "cwde",
        Daa = "daa", Das = "das", Dec = "dec", Div = "div", Divpd = "divpd", Divps = "divps",
        Divsd = "divsd", Divss = "divss", Dppd = "dppd", Dpps = "dpps",
        Emms = "emms", Endbr32 = "endbr32", Endbr64 = "endbr64", Enter = "enter",
        Extractps = "extractps",
        F2xm1 = "f2xm1", Fabs = "fabs", Fadd = "fadd", Faddp = "faddp", Fbld = "fbld",
        Fbstp = "fbstp", Fchs = "fchs", Fcmovb = "fcmovb", Fcmovbe = "fcmovbe",
        Fcmove = "fcmove", Fcmovnb = "fcmovnb", Fcmovnbe = "fcmovnbe", Fcmovne = "fcmovne",
        Fcmovnu = "fcmovnu", Fcmovu = "fcmovu", Fcom = "fcom", Fcomi = "fcomi",
        Fcomip = "fcomip", Fcomp = "fcomp", Fcompp = "fcompp", Fcos = "fcos",
        Fdecstp = "fdecstp", Fdiv = "fdiv", Fdivp = "fdivp", Fdivr = "fdivr", Fdivrp = "fdivrp",
        Ffree = "ffree", Fiadd = "fiadd", Ficom = "ficom", Ficomp = "ficomp", Fidiv = "fidiv",
        Fidivr = "fidivr", Fild = "fild", Fimul = "fimul", Fincstp = "fincstp", Fist = "fist",
        Fistp = "fistp", Fisttp = "fisttp", Fisub = "fisub", Fisubr = "fisubr", Fld = "fld",
        Fld1 = "fld1", Fldcw = "fldcw", Fldenv = "fldenv", Fldl2e = "fldl2e", Fldl2t = "fldl2t",
        Fldlg2 = "fldlg2", Fldln2 = "fldln2", Fldpi = "fldpi", Fldz = "fldz", Fmul = "fmul",
        Fmulp = "fmulp", Fnclex = "fnclex", Fninit = "fninit", Fnop = "fnop", Fnsave = "fnsave",
        Fnstcw = "fnstcw", Fnstenv = "fnstenv", Fnstsw = "fnstsw", Fpatan = "fpatan",
        Fprem = "fprem", Fprem1 = "fprem1", Fptan = "fptan", Frndint = "frndint",
        Frstor = "frstor", Fscale = "fscale", Fsin = "fsin", Fsincos = "fsincos",
        Fsqrt = "fsqrt", Fst = "fst", Fstp = "fstp", Fsub = "fsub", Fsubp = "fsubp",
        Fsubr = "fsubr", Fsubrp = "fsubrp", Ftst = "ftst", Fucom = "fucom", Fucomi = "fucomi",
        Fucomip = "fucomip", Fucomp = "fucomp", Fucompp = "fucompp", Fxam = "fxam",
        Fxch = "fxch", Fxrstor = "fxrstor", Fxrstor64 = "fxrstor64", Fxsave = "fxsave",
        Fxsave64 = "fxsave64", Fxtract = "fxtract", Fyl2x = "fyl2x", Fyl2xp1 = "fyl2xp1",
        Haddpd = "haddpd", Haddps = "haddps", Hlt = "hlt", Hsubpd = "hsubpd", Hsubps = "hsubps",
        Idiv = "idiv", Imul = "imul", In = "in", Inc = "inc", Insb = "insb", Insd = "insd",
        Insertps = "insertps", Insw = "insw", Int = "int", Int1 = "int1", Int3 = "int3",
        Into = "into", Invd = "invd", Invlpg = "invlpg", Iret = "iret", Iretd = "iretd",
        Iretq = "iretq",
        Ja = "ja", Jae = "jae", Jb = "jb", Jbe = "jbe", Jcxz = "jcxz", Je = "je",
        Jecxz = "jecxz", Jg = "jg", Jge = "jge", Jl = "jl", Jle = "jle", Jmp = "jmp",
        Jne = "jne", Jno = "jno", Jnp = "jnp", Jns = "jns", Jo = "jo", Jp = "jp",
        Jrcxz = "jrcxz", Js = "js",
        Kaddb = "kaddb", Kaddd = "kaddd", Kaddq = "kaddq", Kaddw = "kaddw", Kandb = "kandb",
        Kandd = "kandd", Kandnb = "kandnb", Kandnd = "kandnd", Kandnq = "kandnq",
        Kandnw = "kandnw", Kandq = "kandq", Kandw = "kandw", Kmovb = "kmovb", Kmovd = "kmovd",
        Kmovq = "kmovq", Kmovw = "kmovw", Knotb = "knotb", Knotd = "knotd", Knotq = "knotq",
        Knotw = "knotw", Korb = "korb", Kord = "kord", Korq = "korq", Kortestb = "kortestb",
        Kortestd = "kortestd", Kortestq = "kortestq", Kortestw = "kortestw", Korw = "korw",
        Ktestb = "ktestb", Ktestd = "ktestd", Ktestq = "ktestq", Ktestw = "ktestw",
        Kxnorb = "kxnorb", Kxnord = "kxnord", Kxnorq = "kxnorq", Kxnorw = "kxnorw",
        Kxorb = "kxorb", Kxord = "kxord", Kxorq = "kxorq", Kxorw = "kxorw",
        Lahf = "lahf", Lar = "lar", Lcall = "lcall", Lddqu = "lddqu", Ldmxcsr = "ldmxcsr",
        Lds = "lds", Lea = "lea", Leave = "leave", Les = "les", Lfence = "lfence", Lfs = "lfs",
        Lgdt = "lgdt", Lgs = "lgs", Lidt = "lidt", Ljmp = "ljmp", Lldt = "lldt", Lmsw = "lmsw",
        Lodsb = "lodsb", Lodsd = "lodsd", Lodsq = "lodsq", Lodsw = "lodsw", Loop = "loop",
        Loope = "loope", Loopne = "loopne", Lsl = "lsl", Lss = "lss", Ltr = "ltr",
        Lzcnt = "lzcnt",
        Maskmovdqu = "maskmovdqu", Maskmovq = "maskmovq", Maxpd = "maxpd", Maxps = "maxps",
        Maxsd = "maxsd", Maxss = "maxss", Mfence = "mfence", Minpd = "minpd", Minps = "minps",
        Minsd = "minsd", Minss = "minss", Monitor = "monitor", Mov = "mov", Movabs = "movabs",
        Movapd = "movapd", Movaps = "movaps", Movbe = "movbe", Movd = "movd",
        Movddup = "movddup", Movdq2q = "movdq2q", Movdqa = "movdqa", Movdqu = "movdqu",
        Movhlps = "movhlps", Movhpd = "movhpd", Movhps = "movhps", Movlhps = "movlhps",
        Movlpd = "movlpd", Movlps = "movlps", Movmskpd = "movmskpd", Movmskps = "movmskps",
        Movntdq = "movntdq", Movntdqa = "movntdqa", Movnti = "movnti", Movntpd = "movntpd",
        Movntps = "movntps", Movntq = "movntq", Movq = "movq", Movq2dq = "movq2dq",
        Movsb = "movsb", Movsd = "movsd", Movshdup = "movshdup", Movsldup = "movsldup",
        Movsq = "movsq", Movss = "movss", Movsw = "movsw", Movsx = "movsx", Movsxd = "movsxd",
        Movupd = "movupd", Movups = "movups", Movzx = "movzx", Mpsadbw = "mpsadbw", Mul = "mul",
        Mulpd = "mulpd", Mulps = "mulps", Mulsd = "mulsd", Mulss = "mulss", Mulx = "mulx",
        Mwait = "mwait",
        Neg = "neg", Nop = "nop", Not = "not",
        Or = "or", Orpd = "orpd", Orps = "orps", Out = "out", Outsb = "outsb", Outsd = "outsd",
        Outsw = "outsw",
        Pabsb = "pabsb", Pabsd = "pabsd", Pabsw = "pabsw", Packssdw = "packssdw",
        Packsswb = "packsswb", Packusdw = "packusdw", Packuswb = "packuswb", Paddb = "paddb",
        Paddd = "paddd", Paddq = "paddq", Paddsb = "paddsb", Paddsw = "paddsw",
        Paddusb = "paddusb", Paddusw = "paddusw", Paddw = "paddw", Palignr = "palignr",
        Pand = "pand", Pandn = "pandn", Pause = "pause", Pavgb = "pavgb", Pavgw = "pavgw",
        Pblendvb = "pblendvb", Pblendw = "pblendw", Pclmulqdq = "pclmulqdq",
        Pcmpeqb = "pcmpeqb", Pcmpeqd = "pcmpeqd", Pcmpeqq = "pcmpeqq", Pcmpeqw = "pcmpeqw",
        Pcmpestri = "pcmpestri", Pcmpestrm = "pcmpestrm", Pcmpgtb = "pcmpgtb",
        Pcmpgtd = "pcmpgtd", Pcmpgtq = "pcmpgtq", Pcmpgtw = "pcmpgtw", Pcmpistri = "pcmpistri",
        Pcmpistrm = "pcmpistrm", Pdep = "pdep", Pext = "pext", Pextrb = "pextrb",
        Pextrd = "pextrd", Pextrq = "pextrq", Pextrw = "pextrw", Phaddd = "phaddd",
        Phaddsw = "phaddsw", Phaddw = "phaddw", Phminposuw = "phminposuw", Phsubd = "phsubd",
        Phsubsw = "phsubsw", Phsubw = "phsubw", Pinsrb = "pinsrb", Pinsrd = "pinsrd",
        Pinsrq = "pinsrq", Pinsrw = "pinsrw", Pmaddubsw = "pmaddubsw", Pmaddwd = "pmaddwd",
        Pmaxsb = "pmaxsb", Pmaxsd = "pmaxsd", Pmaxsw = "pmaxsw", Pmaxub = "pmaxub",
        Pmaxud = "pmaxud", Pmaxuw = "pmaxuw", Pminsb = "pminsb", Pminsd = "pminsd",
        Pminsw = "pminsw", Pminub = "pminub", Pminud = "pminud", Pminuw = "pminuw",
        Pmovmskb = "pmovmskb", Pmovsxbd = "pmovsxbd", Pmovsxbq = "pmovsxbq",
        Pmovsxbw = "pmovsxbw", Pmovsxdq = "pmovsxdq", Pmovsxwd = "pmovsxwd",
        Pmovsxwq = "pmovsxwq", Pmovzxbd = "pmovzxbd", Pmovzxbq = "pmovzxbq",
        Pmovzxbw = "pmovzxbw", Pmovzxdq = "pmovzxdq", Pmovzxwd = "pmovzxwd",
        Pmovzxwq = "pmovzxwq", Pmuldq = "pmuldq", Pmulhrsw = "pmulhrsw", Pmulhuw = "pmulhuw",
        Pmulhw = "pmulhw", Pmulld = "pmulld", Pmullw = "pmullw", Pmuludq = "pmuludq",
        Pop = "pop", Popal = "popal", Popaw = "popaw", Popcnt = "popcnt", Popf = "popf",
        Popfd = "popfd", Popfq = "popfq", Por = "por", Prefetch = "prefetch",
        Prefetchnta = "prefetchnta", Prefetcht0 = "prefetcht0", Prefetcht1 = "prefetcht1",
        Prefetcht2 = "prefetcht2", Prefetchw = "prefetchw", Psadbw = "psadbw",
        Pshufb = "pshufb", Pshufd = "pshufd", Pshufhw = "pshufhw", Pshuflw = "pshuflw",
        Pshufw = "pshufw", Psignb = "psignb", Psignd = "psignd", Psignw = "psignw",
        Pslld = "pslld", Pslldq = "pslldq", Psllq = "psllq", Psllw = "psllw", Psrad = "psrad",
        Psraw = "psraw", Psrld = "psrld", Psrldq = "psrldq", Psrlq = "psrlq", Psrlw = "psrlw",
        Psubb = "psubb", Psubd = "psubd", Psubq = "psubq", Psubsb = "psubsb", Psubsw = "psubsw",
        Psubusb = "psubusb", Psubusw = "psubusw", Psubw = "psubw", Ptest = "ptest",
        Punpckhbw = "punpckhbw", Punpckhdq = "punpckhdq", Punpckhqdq = "punpckhqdq",
        Punpckhwd = "punpckhwd", Punpcklbw = "punpcklbw", Punpckldq = "punpckldq",
        Punpcklqdq = "punpcklqdq", Punpcklwd = "punpcklwd", Push = "push", Pushal = "pushal",
        Pushaw = "pushaw", Pushf = "pushf", Pushfd = "pushfd", Pushfq = "pushfq", Pxor = "pxor",
        Rcl = "rcl", Rcpps = "rcpps", Rcpss = "rcpss", Rcr = "rcr", Rdfsbase = "rdfsbase",
        Rdgsbase = "rdgsbase", Rdmsr = "rdmsr", Rdpmc = "rdpmc", Rdrand = "rdrand",
        Rdseed = "rdseed", Rdtsc = "rdtsc", Rdtscp = "rdtscp", Ret = "ret", Retf = "retf",
        Rol = "rol", Ror = "ror", Rorx = "rorx", Roundpd = "roundpd", Roundps = "roundps",
        Roundsd = "roundsd", Roundss = "roundss", Rsqrtps = "rsqrtps", Rsqrtss = "rsqrtss",
        Sahf = "sahf", Sal = "sal", Salc = "salc", Sar = "sar", Sarx = "sarx", Sbb = "sbb", Scasb = "scasb",
        Scasd = "scasd", Scasq = "scasq", Scasw = "scasw", Seta = "seta", Setae = "setae",
        Setb = "setb", Setbe = "setbe", Sete = "sete", Setg = "setg", Setge = "setge",
        Setl = "setl", Setle = "setle", Setne = "setne", Setno = "setno", Setnp = "setnp",
        Setns = "setns", Seto = "seto", Setp = "setp", Sets = "sets", Sfence = "sfence",
        Sgdt = "sgdt", Shl = "shl", Shld = "shld", Shlx = "shlx", Shr = "shr", Shrd = "shrd",
        Shrx = "shrx", Shufpd = "shufpd", Shufps = "shufps", Sidt = "sidt", Sldt = "sldt",
        Smsw = "smsw", Sqrtpd = "sqrtpd", Sqrtps = "sqrtps", Sqrtsd = "sqrtsd",
        Sqrtss = "sqrtss", Stac = "stac", Stc = "stc", Std = "std", Sti = "sti",
        Stmxcsr = "stmxcsr", Stosb = "stosb", Stosd = "stosd", Stosq = "stosq", Stosw = "stosw",
        Str = "str", Sub = "sub", Subpd = "subpd", Subps = "subps", Subsd = "subsd",
        Subss = "subss", Swapgs = "swapgs", Syscall = "syscall", Sysenter = "sysenter",
        Sysexit = "sysexit", Sysret = "sysret",
        Test = "test", Tzcnt = "tzcnt",
        Ucomisd = "ucomisd", Ucomiss = "ucomiss", Ud0 = "ud0", Ud1 = "ud1", Ud2 = "ud2",
        Unpckhpd = "unpckhpd", Unpckhps = "unpckhps", Unpcklpd = "unpcklpd",
        Unpcklps = "unpcklps",
        Vaddpd = "vaddpd", Vaddps = "vaddps", Vaddsd = "vaddsd", Vaddss = "vaddss",
        Vaddsubpd = "vaddsubpd", Vaddsubps = "vaddsubps", Vaesdec = "vaesdec",
        Vaesdeclast = "vaesdeclast", Vaesenc = "vaesenc", Vaesenclast = "vaesenclast",
        Vaesimc = "vaesimc", Vaeskeygenassist = "vaeskeygenassist", Valignd = "valignd",
        Valignq = "valignq", Vandnpd = "vandnpd", Vandnps = "vandnps", Vandpd = "vandpd",
        Vandps = "vandps", Vblendpd = "vblendpd", Vblendps = "vblendps",
        Vblendvpd = "vblendvpd", Vblendvps = "vblendvps", Vbroadcastf128 = "vbroadcastf128",
        Vbroadcasti128 = "vbroadcasti128", Vbroadcastsd = "vbroadcastsd",
        Vbroadcastss = "vbroadcastss", Vcmppd = "vcmppd", Vcmpps = "vcmpps", Vcmpsd = "vcmpsd",
        Vcmpss = "vcmpss", Vcomisd = "vcomisd", Vcomiss = "vcomiss", Vcvtdq2pd = "vcvtdq2pd",
        Vcvtdq2ps = "vcvtdq2ps", Vcvtpd2dq = "vcvtpd2dq", Vcvtpd2ps = "vcvtpd2ps",
        Vcvtps2dq = "vcvtps2dq", Vcvtps2pd = "vcvtps2pd", Vcvtsd2si = "vcvtsd2si",
        Vcvtsd2ss = "vcvtsd2ss", Vcvtsi2sd = "vcvtsi2sd", Vcvtsi2ss = "vcvtsi2ss",
        Vcvtss2sd = "vcvtss2sd", Vcvtss2si = "vcvtss2si", Vcvttpd2dq = "vcvttpd2dq",
        Vcvttps2dq = "vcvttps2dq", Vcvttsd2si = "vcvttsd2si", Vcvttss2si = "vcvttss2si",
        Vdivpd = "vdivpd", Vdivps = "vdivps", Vdivsd = "vdivsd", Vdivss = "vdivss",
        Vdppd = "vdppd", Vdpps = "vdpps", Verr = "verr", Verw = "verw",
        Vextractf128 = "vextractf128", Vextractf32x4 = "vextractf32x4",
        Vextractf64x4 = "vextractf64x4", Vextracti128 = "vextracti128",
        Vextracti32x4 = "vextracti32x4", Vextracti64x4 = "vextracti64x4",
        Vextractps = "vextractps", Vfmadd132pd = "vfmadd132pd", Vfmadd132ps = "vfmadd132ps",
        Vfmadd132sd = "vfmadd132sd", Vfmadd132ss = "vfmadd132ss", Vfmadd213pd = "vfmadd213pd",
        Vfmadd213ps = "vfmadd213ps", Vfmadd213sd = "vfmadd213sd", Vfmadd213ss = "vfmadd213ss",
        Vfmadd231pd = "vfmadd231pd", Vfmadd231ps = "vfmadd231ps", Vfmadd231sd = "vfmadd231sd",
        Vfmadd231ss = "vfmadd231ss", Vfmaddpd = "vfmaddpd", Vfmaddps = "vfmaddps",
        Vfmaddsd = "vfmaddsd", Vfmaddss = "vfmaddss", Vfmaddsub132pd = "vfmaddsub132pd",
        Vfmaddsub132ps = "vfmaddsub132ps", Vfmaddsub213pd = "vfmaddsub213pd",
        Vfmaddsub213ps = "vfmaddsub213ps", Vfmaddsub231pd = "vfmaddsub231pd",
        Vfmaddsub231ps = "vfmaddsub231ps", Vfmsub132pd = "vfmsub132pd",
        Vfmsub132ps = "vfmsub132ps", Vfmsub132sd = "vfmsub132sd", Vfmsub132ss = "vfmsub132ss",
        Vfmsub213pd = "vfmsub213pd", Vfmsub213ps = "vfmsub213ps", Vfmsub213sd = "vfmsub213sd",
        Vfmsub213ss = "vfmsub213ss", Vfmsub231pd = "vfmsub231pd", Vfmsub231ps = "vfmsub231ps",
        Vfmsub231sd = "vfmsub231sd", Vfmsub231ss = "vfmsub231ss",
        Vfmsubadd132pd = "vfmsubadd132pd", Vfmsubadd132ps = "vfmsubadd132ps",
        Vfmsubadd213pd = "vfmsubadd213pd", Vfmsubadd213ps = "vfmsubadd213ps",
        Vfmsubadd231pd = "vfmsubadd231pd", Vfmsubadd231ps = "vfmsubadd231ps",
        Vfnmadd132pd = "vfnmadd132pd", Vfnmadd132ps = "vfnmadd132ps",
        Vfnmadd132sd = "vfnmadd132sd", Vfnmadd132ss = "vfnmadd132ss",
        Vfnmadd213pd = "vfnmadd213pd", Vfnmadd213ps = "vfnmadd213ps",
        Vfnmadd213sd = "vfnmadd213sd", Vfnmadd213ss = "vfnmadd213ss",
        Vfnmadd231pd = "vfnmadd231pd", Vfnmadd231ps = "vfnmadd231ps",
        Vfnmadd231sd = "vfnmadd231sd", Vfnmadd231ss = "vfnmadd231ss",
        Vfnmsub132pd = "vfnmsub132pd", Vfnmsub132ps = "vfnmsub132ps",
        Vfnmsub132sd = "vfnmsub132sd", Vfnmsub132ss = "vfnmsub132ss",
        Vfnmsub213pd = "vfnmsub213pd", Vfnmsub213ps = "vfnmsub213ps",
        Vfnmsub213sd = "vfnmsub213sd", Vfnmsub213ss = "vfnmsub213ss",
        Vfnmsub231pd = "vfnmsub231pd", Vfnmsub231ps = "vfnmsub231ps",
        Vfnmsub231sd = "vfnmsub231sd", Vfnmsub231ss = "vfnmsub231ss", Vfrczpd = "vfrczpd",
        Vfrczps = "vfrczps", Vfrczsd = "vfrczsd", Vfrczss = "vfrczss", Vhaddpd = "vhaddpd",
        Vhaddps = "vhaddps", Vhsubpd = "vhsubpd", Vhsubps = "vhsubps",
        Vinsertf128 = "vinsertf128", Vinsertf32x4 = "vinsertf32x4",
        Vinsertf64x4 = "vinsertf64x4", Vinserti128 = "vinserti128",
        Vinserti32x4 = "vinserti32x4", Vinserti64x4 = "vinserti64x4", Vinsertps = "vinsertps",
        Vlddqu = "vlddqu", Vmaskmovdqu = "vmaskmovdqu", Vmaskmovpd = "vmaskmovpd",
        Vmaskmovps = "vmaskmovps", Vmaxpd = "vmaxpd", Vmaxps = "vmaxps", Vmaxsd = "vmaxsd",
        Vmaxss = "vmaxss", Vmcall = "vmcall", Vmclear = "vmclear", Vminpd = "vminpd",
        Vminps = "vminps", Vminsd = "vminsd", Vminss = "vminss", Vmlaunch = "vmlaunch",
        Vmovapd = "vmovapd", Vmovaps = "vmovaps", Vmovd = "vmovd", Vmovddup = "vmovddup",
        Vmovdqa = "vmovdqa", Vmovdqa32 = "vmovdqa32", Vmovdqa64 = "vmovdqa64",
        Vmovdqu = "vmovdqu", Vmovdqu16 = "vmovdqu16", Vmovdqu32 = "vmovdqu32",
        Vmovdqu64 = "vmovdqu64", Vmovdqu8 = "vmovdqu8", Vmovhlps = "vmovhlps",
        Vmovhpd = "vmovhpd", Vmovhps = "vmovhps", Vmovlhps = "vmovlhps", Vmovlpd = "vmovlpd",
        Vmovlps = "vmovlps", Vmovmskpd = "vmovmskpd", Vmovmskps = "vmovmskps",
        Vmovntdq = "vmovntdq", Vmovntdqa = "vmovntdqa", Vmovntpd = "vmovntpd",
        Vmovntps = "vmovntps", Vmovq = "vmovq", Vmovsd = "vmovsd", Vmovshdup = "vmovshdup",
        Vmovsldup = "vmovsldup", Vmovss = "vmovss", Vmovupd = "vmovupd", Vmovups = "vmovups",
        Vmpsadbw = "vmpsadbw", Vmptrld = "vmptrld", Vmptrst = "vmptrst", Vmresume = "vmresume",
        Vmulpd = "vmulpd", Vmulps = "vmulps", Vmulsd = "vmulsd", Vmulss = "vmulss",
        Vmxoff = "vmxoff", Vmxon = "vmxon", Vorpd = "vorpd", Vorps = "vorps", Vpabsb = "vpabsb",
        Vpabsd = "vpabsd", Vpabsq = "vpabsq", Vpabsw = "vpabsw", Vpackssdw = "vpackssdw",
        Vpacksswb = "vpacksswb", Vpackusdw = "vpackusdw", Vpackuswb = "vpackuswb",
        Vpaddb = "vpaddb", Vpaddd = "vpaddd", Vpaddq = "vpaddq", Vpaddsb = "vpaddsb",
        Vpaddsw = "vpaddsw", Vpaddusb = "vpaddusb", Vpaddusw = "vpaddusw", Vpaddw = "vpaddw",
        Vpalignr = "vpalignr", Vpand = "vpand", Vpandd = "vpandd", Vpandn = "vpandn",
        Vpandnd = "vpandnd", Vpandnq = "vpandnq", Vpandq = "vpandq", Vpavgb = "vpavgb",
        Vpavgw = "vpavgw", Vpblendd = "vpblendd", Vpblendmd = "vpblendmd",
        Vpblendmq = "vpblendmq", Vpblendvb = "vpblendvb", Vpblendw = "vpblendw",
        Vpbroadcastb = "vpbroadcastb", Vpbroadcastd = "vpbroadcastd",
        Vpbroadcastq = "vpbroadcastq", Vpbroadcastw = "vpbroadcastw", Vpclmulqdq = "vpclmulqdq",
        Vpcmov = "vpcmov", Vpcmpd = "vpcmpd", Vpcmpeqb = "vpcmpeqb", Vpcmpeqd = "vpcmpeqd",
        Vpcmpeqq = "vpcmpeqq", Vpcmpeqw = "vpcmpeqw", Vpcmpgtb = "vpcmpgtb",
        Vpcmpgtd = "vpcmpgtd", Vpcmpgtq = "vpcmpgtq", Vpcmpgtw = "vpcmpgtw", Vpcmpq = "vpcmpq",
        Vpcmpud = "vpcmpud", Vpcmpuq = "vpcmpuq", Vpcomb = "vpcomb", Vpcomd = "vpcomd",
        Vpcomq = "vpcomq", Vpcomub = "vpcomub", Vpcomud = "vpcomud", Vpcomuq = "vpcomuq",
        Vpcomuw = "vpcomuw", Vpcomw = "vpcomw", Vperm2f128 = "vperm2f128",
        Vperm2i128 = "vperm2i128", Vpermd = "vpermd", Vpermilpd = "vpermilpd",
        Vpermilps = "vpermilps", Vpermpd = "vpermpd", Vpermps = "vpermps", Vpermq = "vpermq",
        Vpextrb = "vpextrb", Vpextrd = "vpextrd", Vpextrq = "vpextrq", Vpextrw = "vpextrw",
        Vphaddbd = "vphaddbd", Vphaddbq = "vphaddbq", Vphaddbw = "vphaddbw",
        Vphaddd = "vphaddd", Vphadddq = "vphadddq", Vphaddsw = "vphaddsw",
        Vphaddubd = "vphaddubd", Vphaddubq = "vphaddubq", Vphaddubw = "vphaddubw",
        Vphaddudq = "vphaddudq", Vphadduwd = "vphadduwd", Vphadduwq = "vphadduwq",
        Vphaddw = "vphaddw", Vphaddwd = "vphaddwd", Vphaddwq = "vphaddwq",
        Vphsubbw = "vphsubbw", Vphsubd = "vphsubd", Vphsubdq = "vphsubdq",
        Vphsubsw = "vphsubsw", Vphsubw = "vphsubw", Vphsubwd = "vphsubwd", Vpinsrb = "vpinsrb",
        Vpinsrd = "vpinsrd", Vpinsrq = "vpinsrq", Vpmacsdd = "vpmacsdd",
        Vpmacsdqh = "vpmacsdqh", Vpmacsdql = "vpmacsdql", Vpmacssdd = "vpmacssdd",
        Vpmacssdqh = "vpmacssdqh", Vpmacssdql = "vpmacssdql", Vpmacsswd = "vpmacsswd",
        Vpmacssww = "vpmacssww", Vpmacswd = "vpmacswd", Vpmacsww = "vpmacsww",
        Vpmadcsswd = "vpmadcsswd", Vpmadcswd = "vpmadcswd", Vpmaddubsw = "vpmaddubsw",
        Vpmaddwd = "vpmaddwd", Vpmaskmovd = "vpmaskmovd", Vpmaskmovq = "vpmaskmovq",
        Vpmaxsb = "vpmaxsb", Vpmaxsd = "vpmaxsd", Vpmaxsq = "vpmaxsq", Vpmaxsw = "vpmaxsw",
        Vpmaxub = "vpmaxub", Vpmaxud = "vpmaxud", Vpmaxuw = "vpmaxuw", Vpminsb = "vpminsb",
        Vpminsd = "vpminsd", Vpminsq = "vpminsq", Vpminsw = "vpminsw", Vpminub = "vpminub",
        Vpminud = "vpminud", Vpminuw = "vpminuw", Vpmovmskb = "vpmovmskb",
        Vpmovsxbd = "vpmovsxbd", Vpmovsxbq = "vpmovsxbq", Vpmovsxbw = "vpmovsxbw",
        Vpmovsxdq = "vpmovsxdq", Vpmovsxwd = "vpmovsxwd", Vpmovsxwq = "vpmovsxwq",
        Vpmovzxbd = "vpmovzxbd", Vpmovzxbq = "vpmovzxbq", Vpmovzxbw = "vpmovzxbw",
        Vpmovzxdq = "vpmovzxdq", Vpmovzxwd = "vpmovzxwd", Vpmovzxwq = "vpmovzxwq",
        Vpmuldq = "vpmuldq", Vpmulhrsw = "vpmulhrsw", Vpmulhuw = "vpmulhuw",
        Vpmulhw = "vpmulhw", Vpmulld = "vpmulld", Vpmullq = "vpmullq", Vpmullw = "vpmullw",
        Vpmuludq = "vpmuludq", Vpor = "vpor", Vpord = "vpord", Vporq = "vporq",
        Vpperm = "vpperm", Vprold = "vprold", Vprolq = "vprolq", Vprord = "vprord",
        Vprorq = "vprorq", Vprotb = "vprotb", Vprotd = "vprotd", Vprotq = "vprotq",
        Vprotw = "vprotw", Vpsadbw = "vpsadbw", Vpshab = "vpshab", Vpshad = "vpshad",
        Vpshaq = "vpshaq", Vpshaw = "vpshaw", Vpshlb = "vpshlb", Vpshld = "vpshld",
        Vpshlq = "vpshlq", Vpshlw = "vpshlw", Vpshufb = "vpshufb", Vpshufd = "vpshufd",
        Vpshufhw = "vpshufhw", Vpshuflw = "vpshuflw", Vpsignb = "vpsignb", Vpsignd = "vpsignd",
        Vpsignw = "vpsignw", Vpslld = "vpslld", Vpslldq = "vpslldq", Vpsllq = "vpsllq",
        Vpsllvd = "vpsllvd", Vpsllvq = "vpsllvq", Vpsllw = "vpsllw", Vpsrad = "vpsrad",
        Vpsraq = "vpsraq", Vpsravd = "vpsravd", Vpsravq = "vpsravq", Vpsraw = "vpsraw",
        Vpsrld = "vpsrld", Vpsrldq = "vpsrldq", Vpsrlq = "vpsrlq", Vpsrlvd = "vpsrlvd",
        Vpsrlvq = "vpsrlvq", Vpsrlw = "vpsrlw", Vpsubb = "vpsubb", Vpsubd = "vpsubd",
        Vpsubq = "vpsubq", Vpsubsb = "vpsubsb", Vpsubsw = "vpsubsw", Vpsubusb = "vpsubusb",
        Vpsubusw = "vpsubusw", Vpsubw = "vpsubw", Vpternlogd = "vpternlogd",
        Vpternlogq = "vpternlogq", Vptest = "vptest", Vpunpckhbw = "vpunpckhbw",
        Vpunpckhdq = "vpunpckhdq", Vpunpckhqdq = "vpunpckhqdq", Vpunpckhwd = "vpunpckhwd",
        Vpunpcklbw = "vpunpcklbw", Vpunpckldq = "vpunpckldq", Vpunpcklqdq = "vpunpcklqdq",
        Vpunpcklwd = "vpunpcklwd", Vpxor = "vpxor", Vpxord = "vpxord", Vpxorq = "vpxorq",
        Vrcpps = "vrcpps", Vrcpss = "vrcpss", Vroundpd = "vroundpd", Vroundps = "vroundps",
        Vroundsd = "vroundsd", Vroundss = "vroundss", Vrsqrtps = "vrsqrtps",
        Vrsqrtss = "vrsqrtss", Vshufpd = "vshufpd", Vshufps = "vshufps", Vsqrtpd = "vsqrtpd",
        Vsqrtps = "vsqrtps", Vsqrtsd = "vsqrtsd", Vsqrtss = "vsqrtss", Vsubpd = "vsubpd",
        Vsubps = "vsubps", Vsubsd = "vsubsd", Vsubss = "vsubss", Vtestpd = "vtestpd",
        Vtestps = "vtestps", Vucomisd = "vucomisd", Vucomiss = "vucomiss",
        Vunpckhpd = "vunpckhpd", Vunpckhps = "vunpckhps", Vunpcklpd = "vunpcklpd",
        Vunpcklps = "vunpcklps", Vxorpd = "vxorpd", Vxorps = "vxorps", Vzeroall = "vzeroall",
        Vzeroupper = "vzeroupper",
        Wait = "wait", Wbinvd = "wbinvd", Wrfsbase = "wrfsbase", Wrgsbase = "wrgsbase",
        Wrmsr = "wrmsr",
        Xabort = "xabort", Xadd = "xadd", Xbegin = "xbegin", Xchg = "xchg", Xend = "xend",
        Xgetbv = "xgetbv", Xlatb = "xlatb", Xor = "xor", Xorpd = "xorpd", Xorps = "xorps",
        Xrstor = "xrstor", Xrstor64 = "xrstor64", Xsave = "xsave", Xsave64 = "xsave64",
        Xsaveopt = "xsaveopt", Xsetbv = "xsetbv", Xtest = "xtest",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for m in X86Mnemonic::ALL {
            assert_eq!(m.name(), m.name().to_lowercase());
            assert!(seen.insert(m.name()), "duplicate mnemonic {}", m.name());
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(X86Mnemonic::from_name("nop"), Some(X86Mnemonic::Nop));
        assert_eq!(X86Mnemonic::from_name("vpternlogd"), Some(X86Mnemonic::Vpternlogd));
        assert_eq!(X86Mnemonic::from_name("bogus"), None);
        assert_eq!(X86Mnemonic::Invalid.name(), "");
        assert_eq!(X86Mnemonic::Movabs.to_string(), "movabs");
    }
}
