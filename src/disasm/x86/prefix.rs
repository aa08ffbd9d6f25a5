//! Legacy/REX prefix scan and VEX, EVEX and XOP prefix decoding.

use crate::core::disassembler::{DecodeError, DecodeResult};
use crate::core::x86::X86Reg;
use crate::disasm::cursor::Cursor;
use crate::disasm::x86::context::X86Context;
use crate::disasm::x86::tables::{Enc, Map};

/// More legacy/REX prefix bytes than this is rejected.
pub const MAX_PREFIXES: usize = 14;

fn segment_override(byte: u8) -> Option<X86Reg> {
    match byte {
        0x26 => Some(X86Reg::Es),
        0x2e => Some(X86Reg::Cs),
        0x36 => Some(X86Reg::Ss),
        0x3e => Some(X86Reg::Ds),
        0x64 => Some(X86Reg::Fs),
        0x65 => Some(X86Reg::Gs),
        _ => None,
    }
}

/// Consume legacy and REX prefixes, then a VEX/EVEX/XOP prefix if one
/// follows.
pub fn scan(cur: &mut Cursor<'_>, ctx: &mut X86Context) -> DecodeResult<()> {
    loop {
        let byte = cur.peek_u8()?;
        if ctx.is64() && (0x40..=0x4f).contains(&byte) {
            ctx.rex = byte;
        } else {
            match byte {
                0xf0 => {
                    ctx.lock = true;
                    ctx.prefix[0] = byte;
                }
                0xf2 | 0xf3 => {
                    ctx.rep = Some(byte);
                    ctx.prefix[0] = byte;
                }
                0x66 => {
                    ctx.opsize = true;
                    ctx.prefix[2] = byte;
                }
                0x67 => {
                    ctx.adsize = true;
                    ctx.prefix[3] = byte;
                }
                _ => match segment_override(byte) {
                    Some(seg) => {
                        ctx.segment = Some(seg);
                        ctx.prefix[1] = byte;
                    }
                    None => break,
                },
            }
            // REX only counts when it immediately precedes the opcode.
            ctx.rex = 0;
        }
        cur.consume(1)?;
        ctx.prefix_count += 1;
        if ctx.prefix_count > MAX_PREFIXES {
            return Err(DecodeError::ExcessivePrefixes {
                offset: ctx.start,
                count: ctx.prefix_count,
            });
        }
    }

    let byte = cur.peek_u8()?;
    let enc = match byte {
        0xc4 | 0xc5 | 0x62 if ctx.is64() || cur.peek_bits(8, 2).is_ok_and(|b| b == 3) => {
            if byte == 0x62 {
                Enc::Evex
            } else {
                Enc::Vex
            }
        }
        0x8f if cur.peek_at(1).is_ok_and(|b| b & 0x1f >= 8) => Enc::Xop,
        _ => return Ok(()),
    };
    if ctx.rex != 0 || ctx.opsize || ctx.lock || ctx.rep.is_some() {
        return Err(DecodeError::UnknownOpcode { offset: ctx.start });
    }
    cur.consume(1)?;
    ctx.enc = enc;
    match (enc, byte) {
        (Enc::Vex, 0xc5) => vex2(cur, ctx),
        (Enc::Evex, _) => evex(cur, ctx),
        _ => vex3(cur, ctx),
    }
}

fn vex2(cur: &mut Cursor<'_>, ctx: &mut X86Context) -> DecodeResult<()> {
    let b1 = cur.read_u8()?;
    ctx.vex.r = b1 & 0x80 == 0;
    ctx.vex.vvvv = (!b1 >> 3) & 0xf;
    ctx.vex.l = (b1 >> 2) & 1;
    ctx.vex.pp = b1 & 3;
    ctx.map = Map::M0F;
    long_mode_only(ctx);
    Ok(())
}

/// Three-byte VEX (`C4`) and XOP (`8F`) share one layout.
fn vex3(cur: &mut Cursor<'_>, ctx: &mut X86Context) -> DecodeResult<()> {
    let payload = cur.consume(2)?;
    let (b1, b2) = (payload[0], payload[1]);
    ctx.vex.r = b1 & 0x80 == 0;
    ctx.vex.x = b1 & 0x40 == 0;
    ctx.vex.b = b1 & 0x20 == 0;
    ctx.map = match (ctx.enc, b1 & 0x1f) {
        (Enc::Vex, 1) => Map::M0F,
        (Enc::Vex, 2) => Map::M0F38,
        (Enc::Vex, 3) => Map::M0F3A,
        (Enc::Xop, 8) => Map::Xop8,
        (Enc::Xop, 9) => Map::Xop9,
        (Enc::Xop, 0xa) => Map::XopA,
        _ => return Err(DecodeError::UnknownOpcode { offset: ctx.start }),
    };
    ctx.vex.w = b2 & 0x80 != 0;
    ctx.vex.vvvv = (!b2 >> 3) & 0xf;
    ctx.vex.l = (b2 >> 2) & 1;
    ctx.vex.pp = b2 & 3;
    long_mode_only(ctx);
    Ok(())
}

fn evex(cur: &mut Cursor<'_>, ctx: &mut X86Context) -> DecodeResult<()> {
    let payload = cur.consume(3)?;
    let (p0, p1, p2) = (payload[0], payload[1], payload[2]);
    if p0 & 0x0c != 0 || p1 & 0x04 == 0 {
        return Err(DecodeError::UnknownOpcode { offset: ctx.start });
    }
    ctx.vex.r = p0 & 0x80 == 0;
    ctx.vex.x = p0 & 0x40 == 0;
    ctx.vex.b = p0 & 0x20 == 0;
    ctx.vex.r2 = p0 & 0x10 == 0;
    ctx.map = match p0 & 3 {
        1 => Map::M0F,
        2 => Map::M0F38,
        3 => Map::M0F3A,
        _ => return Err(DecodeError::UnknownOpcode { offset: ctx.start }),
    };
    ctx.vex.w = p1 & 0x80 != 0;
    ctx.vex.vvvv = (!p1 >> 3) & 0xf;
    ctx.vex.pp = p1 & 3;
    ctx.vex.z = p2 & 0x80 != 0;
    ctx.vex.l = (p2 >> 5) & 3;
    ctx.vex.bcst = p2 & 0x10 != 0;
    ctx.vex.v2 = p2 & 0x08 == 0;
    ctx.vex.aaa = p2 & 7;
    long_mode_only(ctx);
    Ok(())
}

/// Register extension bits are ignored outside 64-bit mode.
fn long_mode_only(ctx: &mut X86Context) {
    if !ctx.is64() {
        ctx.vex.r = false;
        ctx.vex.x = false;
        ctx.vex.b = false;
        ctx.vex.r2 = false;
        ctx.vex.v2 = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::disassembler::DecodeErrorKind;
    use crate::disasm::x86::tables::Pfx;

    fn scan_bytes(bytes: &[u8], mode: u16) -> (DecodeResult<()>, X86Context, usize) {
        let mut cur = Cursor::new(bytes);
        let mut ctx = X86Context::new(0, mode);
        let res = scan(&mut cur, &mut ctx);
        (res, ctx, cur.position())
    }

    #[test]
    fn test_legacy_prefixes() {
        let (res, ctx, pos) = scan_bytes(&[0xf0, 0x64, 0x66, 0x67, 0x01, 0x00], 64);
        assert!(res.is_ok());
        assert_eq!(pos, 4);
        assert!(ctx.lock);
        assert_eq!(ctx.segment, Some(X86Reg::Fs));
        assert!(ctx.opsize && ctx.adsize);
        assert_eq!(ctx.prefix, [0xf0, 0x64, 0x66, 0x67]);
    }

    #[test]
    fn test_rex_dropped_by_following_legacy_prefix() {
        let (_, ctx, _) = scan_bytes(&[0x48, 0x66, 0x01, 0xc0], 64);
        assert_eq!(ctx.rex, 0);
        let (_, ctx, _) = scan_bytes(&[0x66, 0x48, 0x01, 0xc0], 64);
        assert_eq!(ctx.rex, 0x48);
    }

    #[test]
    fn test_rex_bytes_are_opcodes_in_32bit_mode() {
        let (_, ctx, pos) = scan_bytes(&[0x48, 0x90], 32);
        assert_eq!(ctx.rex, 0);
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_prefix_limit() {
        let mut bytes = vec![0x66; 15];
        bytes.push(0x90);
        let (res, _, _) = scan_bytes(&bytes, 64);
        assert_eq!(res.unwrap_err().kind(), DecodeErrorKind::ExcessivePrefixes);

        let mut bytes = vec![0x66; 14];
        bytes.push(0x90);
        assert!(scan_bytes(&bytes, 64).0.is_ok());
    }

    #[test]
    fn test_vex_fields() {
        // vaddps ymm1, ymm2, ymm3
        let (res, ctx, pos) = scan_bytes(&[0xc5, 0xec, 0x58, 0xcb], 64);
        assert!(res.is_ok());
        assert_eq!(pos, 2);
        assert_eq!(ctx.enc, Enc::Vex);
        assert_eq!(ctx.vex.vvvv, 2);
        assert_eq!(ctx.vex.l, 1);
        assert_eq!(ctx.mandatory(), Pfx::None);
    }

    #[test]
    fn test_evex_fields() {
        // vaddps zmm0 {k1}{z}, zmm1, zmm2
        let (res, ctx, pos) = scan_bytes(&[0x62, 0xf1, 0x74, 0xc9, 0x58, 0xc2], 64);
        assert!(res.is_ok());
        assert_eq!(pos, 4);
        assert_eq!(ctx.enc, Enc::Evex);
        assert_eq!(ctx.map, Map::M0F);
        assert_eq!(ctx.vex.vvvv, 1);
        assert_eq!(ctx.vex.l, 2);
        assert_eq!(ctx.vex.aaa, 1);
        assert!(ctx.vex.z);
        assert!(!ctx.vex.w);
    }

    #[test]
    fn test_c4_is_les_in_32bit_mode() {
        let (res, ctx, pos) = scan_bytes(&[0xc4, 0x06], 32);
        assert!(res.is_ok());
        assert_eq!(ctx.enc, Enc::Legacy);
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_8f_is_pop_unless_xop_map() {
        let (_, ctx, _) = scan_bytes(&[0x8f, 0xc0], 64);
        assert_eq!(ctx.enc, Enc::Legacy);
        let (_, ctx, _) = scan_bytes(&[0x8f, 0xe8, 0x78, 0xc0, 0xc1, 0x01], 64);
        assert_eq!(ctx.enc, Enc::Xop);
        assert_eq!(ctx.map, Map::Xop8);
    }

    #[test]
    fn test_rex_before_vex_rejected() {
        let (res, _, _) = scan_bytes(&[0x48, 0xc5, 0xf8, 0x77], 64);
        assert_eq!(res.unwrap_err().kind(), DecodeErrorKind::UnknownOpcode);
        let (res, _, _) = scan_bytes(&[0x66, 0xc5, 0xf8, 0x77], 64);
        assert_eq!(res.unwrap_err().kind(), DecodeErrorKind::UnknownOpcode);
    }

    #[test]
    fn test_truncated_vex_payload_is_underrun() {
        let (res, _, _) = scan_bytes(&[0xc4, 0xe2], 64);
        assert_eq!(res.unwrap_err().kind(), DecodeErrorKind::Underrun);
    }
}
