//! Opcode matching: read the opcode bytes, pick the most specific table row
//! and fix the operand/address/vector sizes it implies.

use crate::core::disassembler::{DecodeError, DecodeResult};
use crate::core::x86::{AvxRm, X86Reg};
use crate::disasm::cursor::Cursor;
use crate::disasm::x86::context::X86Context;
use crate::disasm::x86::tables::{
    self, Enc, Entry, Map, ModSel, ModeSel, Pattern, Pfx, BCST32, BCST64, DEF64, ER, FORCE64,
    MASK, NO66, SAE,
};

/// Whether `pat` accepts the decode state; `modrm` is the peeked ModRM byte.
fn accepts(ctx: &X86Context, pat: &Pattern, modrm: Option<u8>) -> bool {
    if pat.pfx != Pfx::Any && pat.pfx != ctx.mandatory() {
        return false;
    }
    if pat.selects_on_modrm() {
        let Some(m) = modrm else {
            return false;
        };
        if pat.reg.is_some_and(|reg| reg != (m >> 3) & 7) {
            return false;
        }
        if pat.rm.is_some_and(|rm| rm != m & 7) {
            return false;
        }
        let is_reg = m >> 6 == 3;
        match pat.md {
            ModSel::Mem if is_reg => return false,
            ModSel::Reg if !is_reg => return false,
            _ => {}
        }
    }
    if pat.w.is_some_and(|w| w != ctx.w()) {
        return false;
    }
    if pat.l.is_some_and(|l| l != ctx.vex.l) {
        return false;
    }
    match pat.mode {
        ModeSel::Only64 if !ctx.is64() => return false,
        ModeSel::Not64 if ctx.is64() => return false,
        _ => {}
    }
    !(pat.no_rex_b && ctx.b_ext() != 0)
}

fn read_opcode(cur: &mut Cursor<'_>, ctx: &mut X86Context) -> DecodeResult<()> {
    let mut byte = cur.read_u8()?;
    ctx.push_opcode_byte(byte);
    if ctx.enc == Enc::Legacy {
        ctx.map = Map::Primary;
        if byte == 0x0f {
            byte = cur.read_u8()?;
            ctx.push_opcode_byte(byte);
            ctx.map = Map::M0F;
            if byte == 0x38 || byte == 0x3a {
                ctx.map = if byte == 0x38 { Map::M0F38 } else { Map::M0F3A };
                byte = cur.read_u8()?;
                ctx.push_opcode_byte(byte);
            }
        }
    }
    ctx.opcode = byte;
    Ok(())
}

/// Select the table row for the instruction at the cursor and consume its
/// ModRM byte.
pub fn match_opcode(cur: &mut Cursor<'_>, ctx: &mut X86Context) -> DecodeResult<&'static Entry> {
    read_opcode(cur, ctx)?;
    let unknown = DecodeError::UnknownOpcode { offset: ctx.start };
    let rows = tables::candidates(ctx.enc, ctx.map, ctx.opcode).ok_or(unknown)?;

    let modrm = cur.peek_u8().ok();
    let mut best: Option<(u32, &'static Entry)> = None;
    // rows left undecided by a missing ModRM byte: one that only needs it
    // for operands has matched, one that selects on it has not
    let (mut starved_operand, mut starved_selector) = (false, false);
    for &(score, entry) in rows {
        if modrm.is_none() && entry.needs_modrm() {
            if entry.pat.selects_on_modrm() {
                starved_selector = true;
            } else if accepts(ctx, &entry.pat, None) {
                starved_operand = true;
            }
            continue;
        }
        if !accepts(ctx, &entry.pat, modrm) {
            continue;
        }
        if best.map_or(true, |(top, _)| score > top) {
            best = Some((score, entry));
        }
    }
    let entry = match best {
        Some((_, entry)) => entry,
        None if starved_operand => {
            return Err(DecodeError::TruncatedOperand {
                offset: ctx.start,
                needed: 1,
                available: 0,
            })
        }
        None if starved_selector => {
            return Err(DecodeError::Underrun {
                offset: ctx.start,
                needed: 1,
                available: 0,
            })
        }
        None => return Err(unknown),
    };

    if entry.needs_modrm() {
        ctx.modrm = Some(cur.read_u8().map_err(DecodeError::into_truncated)?);
    }
    validate(ctx, entry)?;
    consume_mandatory_prefix(ctx, entry);
    resolve_sizes(ctx, entry)?;
    Ok(entry)
}

/// Encoding constraints that the pattern alone cannot express.
fn validate(ctx: &X86Context, entry: &Entry) -> DecodeResult<()> {
    let unknown = Err(DecodeError::UnknownOpcode { offset: ctx.start });
    if ctx.enc == Enc::Legacy {
        return Ok(());
    }
    if !entry.uses_vvvv() && (ctx.vex.vvvv != 0 || ctx.vex.v2) {
        return unknown;
    }
    if ctx.enc == Enc::Evex {
        if (ctx.vex.aaa != 0 || ctx.vex.z) && !entry.has(MASK) {
            return unknown;
        }
        if ctx.vex.bcst {
            let allowed = if ctx.modrm_mod() == 3 {
                ER | SAE
            } else {
                BCST32 | BCST64
            };
            if !entry.has(allowed) {
                return unknown;
            }
        }
    }
    Ok(())
}

/// A prefix used to select the row no longer acts as a size/rep prefix.
fn consume_mandatory_prefix(ctx: &mut X86Context, entry: &Entry) {
    if ctx.enc != Enc::Legacy {
        return;
    }
    match entry.pat.pfx {
        Pfx::P66 => ctx.opsize = false,
        Pfx::F2 | Pfx::F3 => ctx.rep = None,
        _ => {}
    }
}

fn resolve_sizes(ctx: &mut X86Context, entry: &Entry) -> DecodeResult<()> {
    let long = ctx.is64();
    ctx.osz = match ctx.enc {
        Enc::Legacy => {
            let rex_w = ctx.rex & 8 != 0;
            if long && (entry.has(FORCE64) || rex_w) {
                64
            } else if entry.has(NO66) {
                32
            } else if ctx.opsize {
                if ctx.mode_bits == 16 {
                    32
                } else {
                    16
                }
            } else if long && entry.has(DEF64) {
                64
            } else if ctx.mode_bits == 16 {
                16
            } else {
                32
            }
        }
        _ if long && ctx.vex.w => 64,
        _ => 32,
    };
    ctx.asz = match (ctx.mode_bits, ctx.adsize) {
        (64, true) => 32,
        (64, false) => 64,
        (32, true) => 16,
        (32, false) => 32,
        (_, true) => 32,
        (_, false) => 16,
    };

    ctx.vl = match ctx.enc {
        Enc::Legacy => 128,
        Enc::Vex | Enc::Xop => {
            if ctx.vex.l == 0 {
                128
            } else {
                256
            }
        }
        Enc::Evex if ctx.evex_reg_control() => {
            if entry.has(ER) {
                ctx.rounding = Some(AvxRm::from_ll(ctx.vex.l));
            } else {
                ctx.sae = true;
            }
            512
        }
        Enc::Evex => match ctx.vex.l {
            0 => 128,
            1 => 256,
            2 => 512,
            _ => return Err(DecodeError::UnknownOpcode { offset: ctx.start }),
        },
    };
    if ctx.enc == Enc::Evex && ctx.vex.aaa != 0 {
        ctx.opmask = X86Reg::opmask(ctx.vex.aaa);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::disassembler::DecodeErrorKind;
    use crate::core::x86::X86Mnemonic;
    use crate::disasm::x86::prefix;

    fn select(bytes: &[u8], mode: u16) -> DecodeResult<(X86Context, &'static Entry, usize)> {
        let mut cur = Cursor::new(bytes);
        let mut ctx = X86Context::new(0, mode);
        prefix::scan(&mut cur, &mut ctx)?;
        let entry = match_opcode(&mut cur, &mut ctx)?;
        Ok((ctx, entry, cur.position()))
    }

    fn mnemonic(bytes: &[u8], mode: u16) -> X86Mnemonic {
        select(bytes, mode).unwrap().1.mnemonic
    }

    #[test]
    fn test_most_specific_row_wins() {
        assert_eq!(mnemonic(&[0x90], 64), X86Mnemonic::Nop);
        assert_eq!(mnemonic(&[0x41, 0x90], 64), X86Mnemonic::Xchg);
        assert_eq!(mnemonic(&[0xf3, 0x90], 64), X86Mnemonic::Pause);
        assert_eq!(mnemonic(&[0x91], 64), X86Mnemonic::Xchg);
        assert_eq!(mnemonic(&[0xd9, 0xe0], 64), X86Mnemonic::Fchs);
        assert_eq!(mnemonic(&[0xd9, 0xc1], 64), X86Mnemonic::Fld);
    }

    #[test]
    fn test_mandatory_prefix_selects_row() {
        assert_eq!(mnemonic(&[0x0f, 0x58, 0xc1], 64), X86Mnemonic::Addps);
        assert_eq!(mnemonic(&[0x66, 0x0f, 0x58, 0xc1], 64), X86Mnemonic::Addpd);
        assert_eq!(mnemonic(&[0xf3, 0x0f, 0x58, 0xc1], 64), X86Mnemonic::Addss);
        assert_eq!(mnemonic(&[0xf2, 0x0f, 0x58, 0xc1], 64), X86Mnemonic::Addsd);
        // The last of F2/F3 wins.
        assert_eq!(mnemonic(&[0xf2, 0xf3, 0x0f, 0x58, 0xc1], 64), X86Mnemonic::Addss);

        let (ctx, _, _) = select(&[0x66, 0x0f, 0x58, 0xc1], 64).unwrap();
        assert!(!ctx.opsize);
        assert_eq!(ctx.osz, 32);
    }

    #[test]
    fn test_operand_size_rules() {
        let (ctx, _, _) = select(&[0x48, 0x01, 0xc0], 64).unwrap();
        assert_eq!(ctx.osz, 64);
        let (ctx, _, _) = select(&[0x66, 0x01, 0xc0], 64).unwrap();
        assert_eq!(ctx.osz, 16);
        let (ctx, _, _) = select(&[0x66, 0x01, 0xc0], 16).unwrap();
        assert_eq!(ctx.osz, 32);
        let (ctx, _, _) = select(&[0x50], 64).unwrap();
        assert_eq!(ctx.osz, 64);
        let (ctx, _, _) = select(&[0x66, 0x50], 64).unwrap();
        assert_eq!(ctx.osz, 16);
        let (ctx, _, _) = select(&[0x67, 0x8b, 0x00], 64).unwrap();
        assert_eq!(ctx.asz, 32);
        let (ctx, _, _) = select(&[0x67, 0x8b, 0x00], 32).unwrap();
        assert_eq!(ctx.asz, 16);
    }

    #[test]
    fn test_mode_restricted_rows() {
        assert_eq!(mnemonic(&[0x40], 32), X86Mnemonic::Inc);
        assert_eq!(mnemonic(&[0x06], 32), X86Mnemonic::Push);
        assert_eq!(
            select(&[0x06], 64).unwrap_err().kind(),
            DecodeErrorKind::UnknownOpcode
        );
        assert_eq!(mnemonic(&[0x63, 0xc1], 64), X86Mnemonic::Movsxd);
        assert_eq!(mnemonic(&[0x63, 0xc1], 32), X86Mnemonic::Arpl);
    }

    #[test]
    fn test_missing_modrm_is_truncated_operand() {
        let err = select(&[0x01], 64).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TruncatedOperand);
        let err = select(&[0x0f], 64).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::Underrun);
    }

    #[test]
    fn test_missing_selector_modrm_is_underrun() {
        // group 7 picks its row from ModRM.reg
        let err = select(&[0x0f, 0x01], 64).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::Underrun);
        assert_eq!(err.offset(), 0);
        // group 1 immediate
        let err = select(&[0x80], 32).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::Underrun);
    }

    #[test]
    fn test_unknown_opcode() {
        let err = select(&[0x0f, 0x04], 64).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::UnknownOpcode);
    }

    #[test]
    fn test_vex_rows_and_vvvv_check() {
        assert_eq!(mnemonic(&[0xc5, 0xf8, 0x77], 64), X86Mnemonic::Vzeroupper);
        assert_eq!(mnemonic(&[0xc5, 0xfc, 0x77], 64), X86Mnemonic::Vzeroall);
        // vzeroupper with vvvv != 1111
        let err = select(&[0xc5, 0xf0, 0x77], 64).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::UnknownOpcode);
    }

    #[test]
    fn test_evex_rounding_and_masking() {
        // vaddps zmm0, zmm1, zmm2, {rz-sae}
        let (ctx, entry, _) = select(&[0x62, 0xf1, 0x74, 0x78, 0x58, 0xc2], 64).unwrap();
        assert_eq!(entry.mnemonic, X86Mnemonic::Vaddps);
        assert_eq!(ctx.rounding, Some(AvxRm::Rz));
        assert_eq!(ctx.vl, 512);

        let (ctx, _, _) = select(&[0x62, 0xf1, 0x74, 0xc9, 0x58, 0xc2], 64).unwrap();
        assert_eq!(ctx.opmask, X86Reg::K1);
        assert_eq!(ctx.vl, 512);
    }
}
