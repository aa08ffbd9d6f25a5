//! Table-driven x86 decoder for 16, 32 and 64-bit modes.
//!
//! Prefix scanning folds legacy/REX bytes and VEX/EVEX/XOP payloads into an
//! [`X86Context`]; the matcher picks the most specific row of the encoding
//! tables; operands are decoded slot by slot and rendered in Intel syntax.

pub mod context;
mod format;
mod matcher;
mod operands;
pub mod prefix;
pub mod tables;

use crate::core::disassembler::{Architecture, DecodeResult, Mode};
use crate::core::group::Group;
use crate::core::instruction::{ArchDetail, Instruction, Operand};
use crate::core::register::Register;
use crate::core::x86::{
    AvxCc, AvxRm, EFlags, SseCc, X86Detail, X86Encoding, X86Mnemonic, X86Reg, XopCc,
};
use crate::disasm::cursor::Cursor;
use crate::disasm::decoder::ArchDecoder;

pub use context::X86Context;
pub use format::{hex_or_small, size_name};
use tables::{Alt, Enc, Entry, ModeSel, CC_AVX, CC_SSE, CC_XOP, L, REP};

/// x86 decoder bound to one processor mode.
#[derive(Debug, Clone, Copy)]
pub struct X86Decoder {
    mode: Mode,
}

impl X86Decoder {
    /// `mode` must carry exactly one of the 16/32/64-bit flags.
    pub fn new(mode: Mode) -> crate::error::Result<Self> {
        Architecture::X86.validate_mode(mode)?;
        Ok(Self { mode })
    }

    pub fn bits(&self) -> u16 {
        self.mode.bits_width()
    }
}

fn width_index(bits: u16) -> usize {
    match bits {
        16 => 0,
        32 => 1,
        _ => 2,
    }
}

fn mnemonic(ctx: &X86Context, entry: &Entry) -> X86Mnemonic {
    match entry.alt {
        Alt::None => entry.mnemonic,
        Alt::Osz(names) => names[width_index(ctx.osz)],
        Alt::Asz(names) => names[width_index(ctx.asz)],
    }
}

fn groups(entry: &Entry) -> Vec<Group> {
    let mut out = entry.groups.to_vec();
    let mut add = |g: Group| {
        if !out.contains(&g) {
            out.push(g);
        }
    };
    match entry.pat.mode {
        ModeSel::Only64 => add(Group::Mode64),
        ModeSel::Not64 => add(Group::Not64BitMode),
        ModeSel::Any => {}
    }
    if entry.ops.iter().any(|op| op.loc == L::Rel) {
        add(Group::BranchRelative);
    }
    out
}

fn implicit_regs(ctx: &X86Context, entry: &Entry) -> (Vec<Register>, Vec<Register>) {
    let eflags = EFlags::from_bits_retain(entry.eflags);
    let mut read = Vec::new();
    let mut write = Vec::new();
    operands::implicit_registers(ctx, entry.imp_read, &mut read);
    operands::implicit_registers(ctx, entry.imp_write, &mut write);
    let flags = Register::from(X86Reg::Eflags);
    if eflags.reads_flags() && !read.contains(&flags) {
        read.push(flags);
    }
    if eflags.writes_flags() && !write.contains(&flags) {
        write.push(flags);
    }
    if entry.has(REP) && ctx.rep.is_some() {
        let count = Register::from(X86Reg::gpr(1, ctx.asz, false));
        for regs in [&mut read, &mut write] {
            if !regs.contains(&count) {
                regs.push(count);
            }
        }
    }
    (read, write)
}

fn detail(ctx: &X86Context, entry: &Entry, operands: &[Operand]) -> X86Detail {
    let mut detail = X86Detail {
        prefix: ctx.prefix,
        opcode: ctx.opcode_bytes,
        rex: ctx.rex,
        addr_size: (ctx.asz / 8) as u8,
        modrm: ctx.modrm.unwrap_or(0),
        sib: ctx.sib.unwrap_or(0),
        disp: ctx.disp,
        encoding: match ctx.enc {
            Enc::Legacy => X86Encoding::Legacy,
            Enc::Vex => X86Encoding::Vex,
            Enc::Evex => X86Encoding::Evex,
            Enc::Xop => X86Encoding::Xop,
        },
        avx_sae: ctx.sae,
        avx_rm: ctx.rounding.unwrap_or(AvxRm::Invalid),
        eflags: EFlags::from_bits_retain(entry.eflags),
        opmask: ctx.opmask,
        ..Default::default()
    };
    if let Some(sib) = ctx.sib {
        detail.sib_scale = 1 << (sib >> 6);
        if let Some(mem) = operands.iter().find_map(Operand::mem) {
            if let Register::X86(index) = mem.index {
                detail.sib_index = index;
            }
            if let Register::X86(base) = mem.base {
                detail.sib_base = base;
            }
        }
    }
    if let Some(imm) = ctx.imm8 {
        if entry.has(CC_SSE) {
            detail.sse_cc = SseCc::from_imm(imm);
        } else if entry.has(CC_AVX) {
            detail.avx_cc = AvxCc::from_imm(imm);
        } else if entry.has(CC_XOP) {
            detail.xop_cc = XopCc::from_imm(imm);
        }
    }
    detail
}

impl ArchDecoder for X86Decoder {
    type Context = X86Context;
    type Entry = Entry;

    fn architecture(&self) -> Architecture {
        Architecture::X86
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn new_context(&self, start: usize) -> X86Context {
        X86Context::new(start, self.bits())
    }

    fn scan_prefixes(&self, cur: &mut Cursor<'_>, ctx: &mut X86Context) -> DecodeResult<()> {
        prefix::scan(cur, ctx)
    }

    fn match_opcode(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &mut X86Context,
    ) -> DecodeResult<&'static Entry> {
        matcher::match_opcode(cur, ctx)
    }

    fn decode_operands(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &mut X86Context,
        entry: &'static Entry,
        address: u64,
    ) -> DecodeResult<Vec<Operand>> {
        operands::decode(cur, ctx, entry, address)
    }

    fn assemble(
        &self,
        ctx: X86Context,
        entry: &'static Entry,
        operands: Vec<Operand>,
        bytes: &[u8],
        address: u64,
        detail_on: bool,
    ) -> Instruction {
        let op_str = format::op_str(&ctx, entry, &operands);
        let (groups, regs_read, regs_write, detail) = if detail_on {
            let (read, write) = implicit_regs(&ctx, entry);
            (
                groups(entry),
                read,
                write,
                ArchDetail::X86(detail(&ctx, entry, &operands)),
            )
        } else {
            (Vec::new(), Vec::new(), Vec::new(), ArchDetail::None)
        };
        Instruction {
            address,
            bytes: bytes.to_vec(),
            mnemonic: mnemonic(&ctx, entry).into(),
            op_str,
            operands,
            length: bytes.len() as u16,
            arch: Architecture::X86,
            groups,
            regs_read,
            regs_write,
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::disassembler::DecodeErrorKind;
    use crate::disasm::decoder::decode_one;

    fn decode(bytes: &[u8], mode: Mode, address: u64) -> DecodeResult<Instruction> {
        let decoder = X86Decoder::new(mode).unwrap();
        let mut cur = Cursor::new(bytes);
        decode_one(&decoder, &mut cur, address, true)
    }

    fn text(bytes: &[u8], mode: Mode) -> String {
        decode(bytes, mode, 0x1000).unwrap().to_string()
    }

    #[test]
    fn test_nop() {
        let insn = decode(&[0x90], Mode::MODE_64, 0x1000).unwrap();
        assert_eq!(insn.mnemonic.name(), "nop");
        assert!(insn.operands.is_empty());
        assert_eq!(insn.length, 1);
        assert_eq!(insn.end_address(), 0x1001);
        assert_eq!(insn.op_str, "");
    }

    #[test]
    fn test_intel_text() {
        let m64 = Mode::MODE_64;
        assert_eq!(text(&[0x48, 0x89, 0xd8], m64), "mov rax, rbx");
        assert_eq!(
            text(&[0x8b, 0x44, 0x8b, 0x10], m64),
            "mov eax, dword ptr [rbx + rcx*4 + 0x10]"
        );
        assert_eq!(text(&[0x48, 0x83, 0xec, 0x28], m64), "sub rsp, 0x28");
        assert_eq!(text(&[0xc3], m64), "ret");
        assert_eq!(text(&[0x55], m64), "push rbp");
        assert_eq!(text(&[0xe8, 0x00, 0x00, 0x00, 0x00], m64), "call 0x1005");
        assert_eq!(
            text(&[0x48, 0x8d, 0x05, 0xf9, 0xff, 0xff, 0xff], m64),
            "lea rax, [rip - 7]"
        );
        assert_eq!(text(&[0x55], Mode::MODE_32), "push ebp");
        assert_eq!(text(&[0x40], Mode::MODE_32), "inc eax");
    }

    #[test]
    fn test_width_dependent_mnemonics() {
        assert_eq!(text(&[0x98], Mode::MODE_64), "cwde");
        assert_eq!(text(&[0x48, 0x98], Mode::MODE_64), "cdqe");
        assert_eq!(text(&[0x66, 0x98], Mode::MODE_64), "cbw");
    }

    #[test]
    fn test_evex_text() {
        assert_eq!(
            text(&[0x62, 0xf1, 0x74, 0xc9, 0x58, 0xc2], Mode::MODE_64),
            "vaddps zmm0 {k1} {z}, zmm1, zmm2"
        );
        assert_eq!(
            text(&[0x62, 0xf1, 0x74, 0x78, 0x58, 0xc2], Mode::MODE_64),
            "vaddps zmm0, zmm1, zmm2, {rz-sae}"
        );
    }

    #[test]
    fn test_truncated_immediate_restores_cursor() {
        let decoder = X86Decoder::new(Mode::MODE_32).unwrap();
        let bytes = [0xb8, 0x01, 0x02];
        let mut cur = Cursor::new(&bytes);
        let err = decode_one(&decoder, &mut cur, 0, true).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TruncatedOperand);
        assert_eq!(err.offset(), 0);
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn test_detail() {
        let insn = decode(&[0xf3, 0x48, 0xa5], Mode::MODE_64, 0).unwrap();
        assert_eq!(insn.mnemonic.name(), "movsq");
        assert!(insn.regs_read.contains(&X86Reg::Rcx.into()));
        assert!(insn.regs_write.contains(&X86Reg::Rcx.into()));
        let ArchDetail::X86(detail) = &insn.detail else {
            panic!("expected x86 detail");
        };
        assert_eq!(detail.prefix[0], 0xf3);
        assert_eq!(detail.rex, 0x48);
        assert_eq!(detail.addr_size, 8);

        let insn = decode(&[0x01, 0xc8], Mode::MODE_64, 0).unwrap();
        assert!(insn.regs_write.contains(&X86Reg::Eflags.into()));
        let ArchDetail::X86(detail) = &insn.detail else {
            panic!("expected x86 detail");
        };
        assert!(detail.eflags.contains(EFlags::MODIFY_CF));

        let insn = decode(&[0x8b, 0x44, 0x8b, 0x10], Mode::MODE_64, 0).unwrap();
        let ArchDetail::X86(detail) = &insn.detail else {
            panic!("expected x86 detail");
        };
        assert_eq!(detail.sib_scale, 4);
        assert_eq!(detail.sib_index, X86Reg::Rcx);
        assert_eq!(detail.sib_base, X86Reg::Rbx);
        assert_eq!(detail.disp, 0x10);
    }

    #[test]
    fn test_compare_predicate() {
        // cmpps xmm0, xmm1, 2
        let insn = decode(&[0x0f, 0xc2, 0xc1, 0x02], Mode::MODE_64, 0).unwrap();
        let ArchDetail::X86(detail) = &insn.detail else {
            panic!("expected x86 detail");
        };
        assert_eq!(detail.sse_cc, SseCc::Le);
    }

    #[test]
    fn test_detail_off() {
        let decoder = X86Decoder::new(Mode::MODE_64).unwrap();
        let bytes = [0x01, 0xc8];
        let mut cur = Cursor::new(&bytes);
        let insn = decode_one(&decoder, &mut cur, 0, false).unwrap();
        assert_eq!(insn.detail, ArchDetail::None);
        assert!(insn.regs_write.is_empty());
        assert_eq!(insn.op_str, "eax, ecx");
    }

    #[test]
    fn test_invalid_mode_rejected() {
        assert!(X86Decoder::new(Mode::MODE_32 | Mode::MODE_64).is_err());
        assert!(X86Decoder::new(Mode::MIPS32R6 | Mode::MODE_32).is_err());
    }
}
