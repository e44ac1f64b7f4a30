//! Append-only output arena for one decode.
//!
//! The buffer is both the write target and the source of back-reference
//! copies. It is bounded by the declared decompressed size: any append that
//! would grow it past that size is rejected with
//! [`DecodeError::SizeMismatch`] rather than truncated.

use crate::error::DecodeError;

/// Largest up-front reservation made without a payload-derived hint.
pub const INITIAL_RESERVE_MAX: usize = 1 << 20;

/// Growable output owned by a single decode loop.
#[derive(Debug)]
pub struct DecodedBuffer {
    buf: Vec<u8>,
    declared: usize,
}

impl DecodedBuffer {
    /// Create a buffer for `declared` bytes of output.
    ///
    /// Reserves at most [`INITIAL_RESERVE_MAX`] bytes; the rest grows on
    /// demand.
    pub fn with_declared_size(declared: usize) -> Self {
        Self::with_capacity_hint(declared, INITIAL_RESERVE_MAX)
    }

    /// Create a buffer for `declared` bytes, reserving `min(declared, hint)`.
    pub fn with_capacity_hint(declared: usize, hint: usize) -> Self {
        Self {
            buf: Vec::with_capacity(declared.min(hint)),
            declared,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn declared_size(&self) -> usize {
        self.declared
    }

    /// `true` once the declared size has been produced.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.buf.len() == self.declared
    }

    #[inline]
    fn check_room(&self, additional: usize) -> Result<(), DecodeError> {
        let attempted = self.buf.len().saturating_add(additional);
        if attempted > self.declared {
            return Err(DecodeError::SizeMismatch {
                declared: self.declared,
                attempted,
            });
        }
        Ok(())
    }

    /// Append a literal run verbatim.
    pub fn append_literal(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        self.check_room(bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Copy `length` bytes starting `offset` bytes back from the current end.
    ///
    /// When `length > offset` the source window overlaps the bytes being
    /// written, so the copy runs one byte at a time and each appended byte
    /// becomes a source for the ones after it (offset 1 repeats a single
    /// byte). Otherwise the whole source range is already final and is copied
    /// in one go.
    pub fn append_back_reference(&mut self, offset: usize, length: usize) -> Result<(), DecodeError> {
        let available = self.buf.len();
        if offset == 0 || offset > available {
            return Err(DecodeError::OffsetOutOfRange { offset, available });
        }
        self.check_room(length)?;

        let start = available - offset;
        if offset >= length {
            self.buf.extend_from_within(start..start + length);
        } else {
            for i in start..start + length {
                let b = self.buf[i];
                self.buf.push(b);
            }
        }
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Hand the decoded bytes to the caller.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
