//! Error taxonomy for mozLz4 decoding.
//!
//! Every failure is terminal for the `decompress` call that produced it: the
//! in-progress output is dropped and only the error reaches the caller.

use thiserror::Error;

/// Errors returned by [`crate::decompress`] and [`crate::Decoder::decompress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input does not start with `b"mozLz40\0"` (and is not a cut-off
    /// prefix of it).
    #[error("invalid signature for mozLz4 container")]
    InvalidSignature,

    /// The input is a prefix of the 12-byte container header.
    #[error("input truncated: mozLz4 header needs 12 bytes")]
    Truncated,

    /// The payload ended in the middle of a sequence.
    #[error("unexpected end of compressed payload")]
    UnexpectedEndOfInput,

    /// A back-reference points before the start of the output, or has offset 0.
    #[error("back-reference offset {offset} out of range ({available} bytes decoded)")]
    OffsetOutOfRange { offset: usize, available: usize },

    /// A literal run or match would grow the output past the declared size.
    #[error("decoded size {attempted} overshoots declared size {declared}")]
    SizeMismatch { declared: usize, attempted: usize },

    /// The header declares more output than the configured cap allows.
    #[error("declared size {declared} exceeds maximum of {max} bytes")]
    DeclaredSizeTooLarge { declared: u64, max: u64 },
}
