//! Bounds-checked read cursor over a compressed payload.
//!
//! Every read either yields the requested bytes or fails with
//! [`DecodeError::UnexpectedEndOfInput`]; the cursor never reads past the end
//! of the slice and never panics on hostile input.

use super::types::{LSIC_CONTINUE, OFFSET_SIZE};
use crate::error::DecodeError;

/// Forward-only reader over the payload that follows the container header.
#[derive(Debug, Clone)]
pub struct PayloadCursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> PayloadCursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Take the next `size` bytes.
    #[inline]
    pub fn take(&mut self, size: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < size {
            return Err(DecodeError::UnexpectedEndOfInput);
        }
        let taken = &self.input[self.pos..self.pos + size];
        self.pos += size;
        Ok(taken)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let byte = *self
            .input
            .get(self.pos)
            .ok_or(DecodeError::UnexpectedEndOfInput)?;
        self.pos += 1;
        Ok(byte)
    }

    /// Read a little-endian `u16` (the back-reference offset field).
    #[inline]
    pub fn read_le16(&mut self) -> Result<u16, DecodeError> {
        let bytes = self.take(OFFSET_SIZE)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Decode a Linear Small-Integer Code length extension.
    ///
    /// Each `0xFF` byte adds 255 and continues; the first byte below `0xFF`
    /// is added and terminates the value. The running sum is checked, so a
    /// long run of `0xFF` on a 32-bit target fails instead of wrapping.
    pub fn read_lsic(&mut self) -> Result<usize, DecodeError> {
        let mut length: usize = 0;
        loop {
            let byte = self.read_u8()?;
            length = length
                .checked_add(byte as usize)
                .ok_or(DecodeError::UnexpectedEndOfInput)?;
            if byte != LSIC_CONTINUE {
                return Ok(length);
            }
        }
    }
}
