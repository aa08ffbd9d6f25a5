//! Bounded byte cursor over an immutable input buffer.
//!
//! Every read is all-or-nothing: a failed `consume` leaves the position
//! untouched, so a decoder can always report the exact offset it stopped at.

use crate::core::disassembler::{DecodeError, DecodeResult};

/// Read position over a borrowed byte buffer. One cursor serves one decode
/// session; it is cheap to copy for lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Cursor starting at `pos`, clamped to the end of the buffer.
    pub fn at(data: &'a [u8], pos: usize) -> Self {
        Self {
            data,
            pos: pos.min(data.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The whole underlying buffer.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Bytes between `start` and the current position.
    pub fn since(&self, start: usize) -> &'a [u8] {
        &self.data[start.min(self.pos)..self.pos]
    }

    /// Move back to an earlier position (instruction start on failure).
    pub(crate) fn restore(&mut self, pos: usize) {
        self.pos = pos.min(self.data.len());
    }

    fn underrun(&self, needed: usize) -> DecodeError {
        DecodeError::Underrun {
            offset: self.pos,
            needed,
            available: self.remaining(),
        }
    }

    /// Look at the next `n` bytes without moving.
    pub fn peek(&self, n: usize) -> DecodeResult<&'a [u8]> {
        if n > self.remaining() {
            return Err(self.underrun(n));
        }
        Ok(&self.data[self.pos..self.pos + n])
    }

    /// Byte `ahead` positions past the current one.
    pub fn peek_at(&self, ahead: usize) -> DecodeResult<u8> {
        self.data
            .get(self.pos + ahead)
            .copied()
            .ok_or_else(|| self.underrun(ahead + 1))
    }

    pub fn peek_u8(&self) -> DecodeResult<u8> {
        self.peek_at(0)
    }

    /// `count` bits (at most 32) starting `bit_offset` bits past the current
    /// position, most significant bit of each byte first.
    pub fn peek_bits(&self, bit_offset: usize, count: u32) -> DecodeResult<u32> {
        debug_assert!(count <= 32);
        let first = bit_offset / 8;
        let last = (bit_offset + count as usize).div_ceil(8);
        let bytes = self.peek(last.max(first + 1))?;
        let mut acc: u64 = 0;
        for b in &bytes[first..last.max(first + 1)] {
            acc = (acc << 8) | *b as u64;
        }
        let span = (last.max(first + 1) - first) * 8;
        let shift = span - (bit_offset % 8) - count as usize;
        let mask = if count == 32 {
            u32::MAX as u64
        } else {
            (1u64 << count) - 1
        };
        Ok(((acc >> shift) & mask) as u32)
    }

    /// Take the next `n` bytes; on underrun the position is unchanged.
    pub fn consume(&mut self, n: usize) -> DecodeResult<&'a [u8]> {
        let bytes = self.peek(n)?;
        self.pos += n;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.consume(1)?[0])
    }

    pub fn read_u16_le(&mut self) -> DecodeResult<u16> {
        let b = self.consume(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_u32_le(&mut self) -> DecodeResult<u32> {
        let b = self.consume(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_u64_le(&mut self) -> DecodeResult<u64> {
        let b = self.consume(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(b);
        Ok(u64::from_le_bytes(raw))
    }

    /// 32-bit word in the requested byte order.
    pub fn read_u32(&mut self, big_endian: bool) -> DecodeResult<u32> {
        let b = self.consume(4)?;
        let raw = [b[0], b[1], b[2], b[3]];
        Ok(if big_endian {
            u32::from_be_bytes(raw)
        } else {
            u32::from_le_bytes(raw)
        })
    }

    /// Little-endian signed integer of `size` bytes (1, 2, 4 or 8),
    /// sign-extended to 64 bits.
    pub fn read_signed(&mut self, size: usize) -> DecodeResult<i64> {
        Ok(match size {
            1 => self.read_u8()? as i8 as i64,
            2 => self.read_u16_le()? as i16 as i64,
            4 => self.read_u32_le()? as i32 as i64,
            _ => self.read_u64_le()? as i64,
        })
    }

    /// Little-endian unsigned integer of `size` bytes (1, 2, 4 or 8).
    pub fn read_unsigned(&mut self, size: usize) -> DecodeResult<u64> {
        Ok(match size {
            1 => self.read_u8()? as u64,
            2 => self.read_u16_le()? as u64,
            4 => self.read_u32_le()? as u64,
            _ => self.read_u64_le()?,
        })
    }
}
