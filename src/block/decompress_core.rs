//! LZ4 block sequence decoder.
//!
//! Replays a payload of sequences into a [`DecodedBuffer`] until exactly
//! `declared_size` bytes have been produced:
//!
//! ```text
//! token | [LSIC literal ext] | literals | offset (LE16) | [LSIC match ext]
//! ```
//!
//! - the high nibble of the token is the literal run length;
//! - a sequence whose literals complete the declared size ends the block,
//!   with no offset or match following it;
//! - otherwise the low nibble plus [`MINMATCH`] is the match length, copied
//!   from `offset` bytes back in the output.
//!
//! Reaching the declared size stops decoding unconditionally. Payload bytes
//! after that point are never read.
//!
//! # Security boundary
//!
//! This is the path that sees untrusted bytes. Every length and offset is
//! validated before use; malformed or truncated input returns a
//! [`DecodeError`] and never panics.

use super::cursor::PayloadCursor;
use super::output::DecodedBuffer;
use super::types::{max_decoded_len, Token, MINMATCH};
use crate::error::DecodeError;

/// Decode a complete block payload into a fresh buffer of `declared_size` bytes.
///
/// Up-front capacity is bounded by what `payload` can possibly expand to, so
/// an oversized `declared_size` fails on the payload instead of allocating.
pub fn decompress_block(payload: &[u8], declared_size: usize) -> Result<Vec<u8>, DecodeError> {
    let mut cursor = PayloadCursor::new(payload);
    let mut out = DecodedBuffer::with_capacity_hint(declared_size, max_decoded_len(payload.len()));

    while !out.is_complete() {
        decode_sequence(&mut cursor, &mut out)?;
    }

    Ok(out.into_inner())
}

/// Decode one sequence: a literal run and, unless the run completes the
/// output, a back-reference.
pub fn decode_sequence(
    cursor: &mut PayloadCursor<'_>,
    out: &mut DecodedBuffer,
) -> Result<(), DecodeError> {
    let token = Token(cursor.read_u8()?);

    // ── Literals ─────────────────────────────────────────────────────────────
    let mut lit_length = token.literal_code();
    if token.literal_saturated() {
        lit_length = lit_length
            .checked_add(cursor.read_lsic()?)
            .ok_or(DecodeError::UnexpectedEndOfInput)?;
    }
    let literals = cursor.take(lit_length)?;
    out.append_literal(literals)?;

    if out.is_complete() {
        // Last sequence: literals only.
        return Ok(());
    }

    // ── Match ────────────────────────────────────────────────────────────────
    let offset = cursor.read_le16()? as usize;

    let mut match_length = token.match_code() + MINMATCH;
    if token.match_saturated() {
        match_length = match_length
            .checked_add(cursor.read_lsic()?)
            .ok_or(DecodeError::UnexpectedEndOfInput)?;
    }

    out.append_back_reference(offset, match_length)
}
