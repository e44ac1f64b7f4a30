//! LZ4 block decoding.
//!
//! The sequence decoder that sits inside a mozLz4 container: token parsing,
//! LSIC length extension, and overlap-safe back-reference copies.

pub mod cursor;
pub mod decompress_core;
pub mod output;
pub mod types;

// Re-export the most important public API items at the module level.
pub use cursor::PayloadCursor;
pub use decompress_core::{decode_sequence, decompress_block};
pub use output::DecodedBuffer;
pub use types::{max_decoded_len, Token, LZ4_DISTANCE_MAX, MINMATCH};
