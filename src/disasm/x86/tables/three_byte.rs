//! Three-byte opcode maps (`0F 38 xx` and `0F 3A xx`).

use super::*;
use crate::core::group::Group as Gr;
use crate::core::x86::flags::sets::*;
use crate::core::x86::X86Mnemonic as I;
use crate::core::x86::X86Reg as Rg;
use L::*;
use S::*;

const P66: Pfx = Pfx::P66;

const SSE41: &[Gr] = &[Gr::Sse41];
const SSE42: &[Gr] = &[Gr::Sse42];
const AES: &[Gr] = &[Gr::Aes];

const PCMPSTR_E: &[Imp] = &[Imp::R(Rg::Eax), Imp::R(Rg::Edx)];

pub static TABLE: &[Entry] = &[
    // 0F 38
    op38(0x10, I::Pblendvb, &[rw(Vr, X), r(Wr, X), r(Fixed(Rg::Xmm0), X)]).pfx(P66).groups(SSE41),
    op38(0x14, I::Blendvps, &[rw(Vr, X), r(Wr, X), r(Fixed(Rg::Xmm0), X)]).pfx(P66).groups(SSE41),
    op38(0x15, I::Blendvpd, &[rw(Vr, X), r(Wr, X), r(Fixed(Rg::Xmm0), X)]).pfx(P66).groups(SSE41),
    op38(0x17, I::Ptest, &[r(Vr, X), r(Wr, X)]).pfx(P66).flags(PTEST).groups(SSE41),
    op38(0x20, I::Pmovsxbw, &[w(Vr, X), r(Wr, Q)]).pfx(P66).groups(SSE41),
    op38(0x21, I::Pmovsxbd, &[w(Vr, X), r(Wr, D)]).pfx(P66).groups(SSE41),
    op38(0x22, I::Pmovsxbq, &[w(Vr, X), r(Wr, W)]).pfx(P66).groups(SSE41),
    op38(0x23, I::Pmovsxwd, &[w(Vr, X), r(Wr, Q)]).pfx(P66).groups(SSE41),
    op38(0x24, I::Pmovsxwq, &[w(Vr, X), r(Wr, D)]).pfx(P66).groups(SSE41),
    op38(0x25, I::Pmovsxdq, &[w(Vr, X), r(Wr, Q)]).pfx(P66).groups(SSE41),
    op38(0x28, I::Pmuldq, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE41),
    op38(0x29, I::Pcmpeqq, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE41),
    op38(0x2a, I::Movntdqa, &[w(Vr, X), r(M, X)]).pfx(P66).mem().groups(SSE41),
    op38(0x2b, I::Packusdw, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE41),
    op38(0x30, I::Pmovzxbw, &[w(Vr, X), r(Wr, Q)]).pfx(P66).groups(SSE41),
    op38(0x31, I::Pmovzxbd, &[w(Vr, X), r(Wr, D)]).pfx(P66).groups(SSE41),
    op38(0x32, I::Pmovzxbq, &[w(Vr, X), r(Wr, W)]).pfx(P66).groups(SSE41),
    op38(0x33, I::Pmovzxwd, &[w(Vr, X), r(Wr, Q)]).pfx(P66).groups(SSE41),
    op38(0x34, I::Pmovzxwq, &[w(Vr, X), r(Wr, D)]).pfx(P66).groups(SSE41),
    op38(0x35, I::Pmovzxdq, &[w(Vr, X), r(Wr, Q)]).pfx(P66).groups(SSE41),
    op38(0x37, I::Pcmpgtq, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE42),
    op38(0x38, I::Pminsb, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE41),
    op38(0x39, I::Pminsd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE41),
    op38(0x3a, I::Pminuw, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE41),
    op38(0x3b, I::Pminud, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE41),
    op38(0x3c, I::Pmaxsb, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE41),
    op38(0x3d, I::Pmaxsd, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE41),
    op38(0x3e, I::Pmaxuw, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE41),
    op38(0x3f, I::Pmaxud, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE41),
    op38(0x40, I::Pmulld, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE41),
    op38(0x41, I::Phminposuw, &[w(Vr, X), r(Wr, X)]).pfx(P66).groups(SSE41),
    op38(0xdb, I::Aesimc, &[w(Vr, X), r(Wr, X)]).pfx(P66).groups(AES),
    op38(0xdc, I::Aesenc, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(AES),
    op38(0xdd, I::Aesenclast, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(AES),
    op38(0xde, I::Aesdec, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(AES),
    op38(0xdf, I::Aesdeclast, &[rw(Vr, X), r(Wr, X)]).pfx(P66).groups(AES),
    op38(0xf0, I::Movbe, &[w(G, V), r(M, V)]).mem(),
    op38(0xf1, I::Movbe, &[w(M, V), r(G, V)]).mem(),
    op38(0xf0, I::Crc32, &[rw(G, Y), r(E, B)]).pfx(Pfx::F2).groups(SSE42),
    op38(0xf1, I::Crc32, &[rw(G, Y), r(E, V)]).pfx(Pfx::F2).groups(SSE42),
    op38(0xf6, I::Adcx, &[rw(G, Y), r(E, Y)]).pfx(P66).flags(ADCX).groups(&[Gr::Adx]),
    op38(0xf6, I::Adox, &[rw(G, Y), r(E, Y)]).pfx(Pfx::F3).flags(ADOX).groups(&[Gr::Adx]),
    // 0F 3A
    op3a(0x08, I::Roundps, &[w(Vr, X), r(Wr, X), r(Imm, B)]).pfx(P66).groups(SSE41),
    op3a(0x09, I::Roundpd, &[w(Vr, X), r(Wr, X), r(Imm, B)]).pfx(P66).groups(SSE41),
    op3a(0x0a, I::Roundss, &[w(Vr, X), r(Wr, D), r(Imm, B)]).pfx(P66).groups(SSE41),
    op3a(0x0b, I::Roundsd, &[w(Vr, X), r(Wr, Q), r(Imm, B)]).pfx(P66).groups(SSE41),
    op3a(0x0c, I::Blendps, &[rw(Vr, X), r(Wr, X), r(Imm, B)]).pfx(P66).groups(SSE41),
    op3a(0x0d, I::Blendpd, &[rw(Vr, X), r(Wr, X), r(Imm, B)]).pfx(P66).groups(SSE41),
    op3a(0x0e, I::Pblendw, &[rw(Vr, X), r(Wr, X), r(Imm, B)]).pfx(P66).groups(SSE41),
    op3a(0x0f, I::Palignr, &[rw(P, Q), r(Qm, Q), r(Imm, B)])
        .pfx(Pfx::None)
        .groups(&[Gr::Ssse3]),
    op3a(0x0f, I::Palignr, &[rw(Vr, X), r(Wr, X), r(Imm, B)])
        .pfx(P66)
        .groups(&[Gr::Ssse3]),
    op3a(0x14, I::Pextrb, &[w(R, D), r(Vr, X), r(Imm, B)]).pfx(P66).reg_form().groups(SSE41),
    op3a(0x14, I::Pextrb, &[w(M, B), r(Vr, X), r(Imm, B)]).pfx(P66).mem().groups(SSE41),
    op3a(0x15, I::Pextrw, &[w(R, D), r(Vr, X), r(Imm, B)]).pfx(P66).reg_form().groups(SSE41),
    op3a(0x15, I::Pextrw, &[w(M, W), r(Vr, X), r(Imm, B)]).pfx(P66).mem().groups(SSE41),
    op3a(0x16, I::Pextrd, &[w(E, D), r(Vr, X), r(Imm, B)]).pfx(P66).w(false).groups(SSE41),
    op3a(0x16, I::Pextrq, &[w(E, Q), r(Vr, X), r(Imm, B)]).pfx(P66).w(true).groups(SSE41),
    op3a(0x17, I::Extractps, &[w(E, D), r(Vr, X), r(Imm, B)]).pfx(P66).groups(SSE41),
    op3a(0x20, I::Pinsrb, &[rw(Vr, X), r(R, D), r(Imm, B)]).pfx(P66).reg_form().groups(SSE41),
    op3a(0x20, I::Pinsrb, &[rw(Vr, X), r(M, B), r(Imm, B)]).pfx(P66).mem().groups(SSE41),
    op3a(0x21, I::Insertps, &[rw(Vr, X), r(Wr, D), r(Imm, B)]).pfx(P66).groups(SSE41),
    op3a(0x22, I::Pinsrd, &[rw(Vr, X), r(E, D), r(Imm, B)]).pfx(P66).w(false).groups(SSE41),
    op3a(0x22, I::Pinsrq, &[rw(Vr, X), r(E, Q), r(Imm, B)]).pfx(P66).w(true).groups(SSE41),
    op3a(0x40, I::Dpps, &[rw(Vr, X), r(Wr, X), r(Imm, B)]).pfx(P66).groups(SSE41),
    op3a(0x41, I::Dppd, &[rw(Vr, X), r(Wr, X), r(Imm, B)]).pfx(P66).groups(SSE41),
    op3a(0x42, I::Mpsadbw, &[rw(Vr, X), r(Wr, X), r(Imm, B)]).pfx(P66).groups(SSE41),
    op3a(0x44, I::Pclmulqdq, &[rw(Vr, X), r(Wr, X), r(Imm, B)])
        .pfx(P66)
        .groups(&[Gr::Pclmul]),
    op3a(0x60, I::Pcmpestrm, &[r(Vr, X), r(Wr, X), r(Imm, B)])
        .pfx(P66)
        .flags(PCMPSTR)
        .reads(PCMPSTR_E)
        .writes(&[Imp::R(Rg::Xmm0)])
        .groups(SSE42),
    op3a(0x61, I::Pcmpestri, &[r(Vr, X), r(Wr, X), r(Imm, B)])
        .pfx(P66)
        .flags(PCMPSTR)
        .reads(PCMPSTR_E)
        .writes(&[Imp::R(Rg::Ecx)])
        .groups(SSE42),
    op3a(0x62, I::Pcmpistrm, &[r(Vr, X), r(Wr, X), r(Imm, B)])
        .pfx(P66)
        .flags(PCMPSTR)
        .writes(&[Imp::R(Rg::Xmm0)])
        .groups(SSE42),
    op3a(0x63, I::Pcmpistri, &[r(Vr, X), r(Wr, X), r(Imm, B)])
        .pfx(P66)
        .flags(PCMPSTR)
        .writes(&[Imp::R(Rg::Ecx)])
        .groups(SSE42),
    op3a(0xdf, I::Aeskeygenassist, &[w(Vr, X), r(Wr, X), r(Imm, B)])
        .pfx(P66)
        .groups(AES),
];

const SSSE3_OPS: &[(u8, X86Mnemonic)] = &[
    (0x00, I::Pshufb),
    (0x01, I::Phaddw),
    (0x02, I::Phaddd),
    (0x03, I::Phaddsw),
    (0x04, I::Pmaddubsw),
    (0x05, I::Phsubw),
    (0x06, I::Phsubd),
    (0x07, I::Phsubsw),
    (0x08, I::Psignb),
    (0x09, I::Psignw),
    (0x0a, I::Psignd),
    (0x0b, I::Pmulhrsw),
    (0x1c, I::Pabsb),
    (0x1d, I::Pabsw),
    (0x1e, I::Pabsd),
];

/// SSSE3 packed integer ops in both MMX and XMM form.
pub static SSSE3: [[Entry; 2]; SSSE3_OPS.len()] =
    mmx_sse_rows(Map::M0F38, SSSE3_OPS, Gr::Ssse3);
