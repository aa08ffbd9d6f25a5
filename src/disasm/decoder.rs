//! The architecture-neutral single-instruction decode pipeline.
//!
//! Each architecture supplies the four stages through [`ArchDecoder`];
//! [`decode_one`] runs them in order and owns the failure contract: on any
//! error the cursor is moved back to the instruction start and the error is
//! anchored there.

use tracing::trace;

use crate::core::disassembler::{Architecture, DecodeError, DecodeResult, Mode};
use crate::core::instruction::{Instruction, Operand};
use crate::disasm::cursor::Cursor;

/// One architecture's prefix scanner, opcode matcher, operand decoder and
/// instruction assembler.
///
/// `Context` is the per-instruction scratch state; it is created fresh for
/// every decode and dropped after assembly. `Entry` is the static encoding
/// table row selected by the matcher.
pub trait ArchDecoder: Send + Sync {
    type Context;
    type Entry: 'static;

    fn architecture(&self) -> Architecture;

    fn mode(&self) -> Mode;

    fn min_instruction_length(&self) -> usize {
        self.architecture().min_instruction_length()
    }

    fn max_instruction_length(&self) -> usize {
        self.architecture().max_instruction_length()
    }

    /// Fresh scratch state for an instruction starting at `start`.
    fn new_context(&self, start: usize) -> Self::Context;

    /// Consume and fold prefix bytes.
    fn scan_prefixes(&self, cur: &mut Cursor<'_>, ctx: &mut Self::Context) -> DecodeResult<()>;

    /// Consume opcode and selector bytes and pick the table entry.
    fn match_opcode(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &mut Self::Context,
    ) -> DecodeResult<&'static Self::Entry>;

    /// Decode the entry's operand slots in declaration order.
    fn decode_operands(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &mut Self::Context,
        entry: &'static Self::Entry,
        address: u64,
    ) -> DecodeResult<Vec<Operand>>;

    /// Build the record; cannot fail.
    fn assemble(
        &self,
        ctx: Self::Context,
        entry: &'static Self::Entry,
        operands: Vec<Operand>,
        bytes: &[u8],
        address: u64,
        detail: bool,
    ) -> Instruction;
}

/// Decode one instruction at the cursor.
///
/// On success the cursor sits after the instruction. On failure it is back
/// at the instruction start and the error's offset is that start.
pub fn decode_one<D: ArchDecoder>(
    decoder: &D,
    cur: &mut Cursor<'_>,
    address: u64,
    detail: bool,
) -> DecodeResult<Instruction> {
    let start = cur.position();
    match run_stages(decoder, cur, start, address, detail) {
        Ok(insn) => Ok(insn),
        Err(err) => {
            cur.restore(start);
            let err = err.at(start);
            trace!(
                arch = %decoder.architecture(),
                offset = start,
                address,
                kind = %err.kind(),
                "decode failed"
            );
            Err(err)
        }
    }
}

fn run_stages<D: ArchDecoder>(
    decoder: &D,
    cur: &mut Cursor<'_>,
    start: usize,
    address: u64,
    detail: bool,
) -> DecodeResult<Instruction> {
    let min = decoder.min_instruction_length();
    if cur.remaining() < min {
        return Err(DecodeError::Underrun {
            offset: start,
            needed: min,
            available: cur.remaining(),
        });
    }

    let mut ctx = decoder.new_context(start);
    decoder.scan_prefixes(cur, &mut ctx)?;
    let entry = decoder.match_opcode(cur, &mut ctx)?;
    let operands = decoder.decode_operands(cur, &mut ctx, entry, address)?;
    let bytes = cur.since(start);
    Ok(decoder.assemble(ctx, entry, operands, bytes, address, detail))
}
