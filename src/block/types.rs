//! LZ4 block-format constants and token helpers.
//!
//! A token byte packs two 4-bit length codes: the high nibble is the literal
//! run length, the low nibble is the match length minus [`MINMATCH`]. A nibble
//! equal to [`RUN_MASK`] / [`ML_MASK`] is saturated and continues in LSIC
//! extension bytes.

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum match length encoded in an LZ4 block.
pub const MINMATCH: usize = 4;

pub const MB: usize = 1 << 20;

/// Width of the match-length field in a token.
pub const ML_BITS: u32 = 4;
pub const ML_MASK: u32 = (1u32 << ML_BITS) - 1;
pub const RUN_BITS: u32 = 8 - ML_BITS;
pub const RUN_MASK: u32 = (1u32 << RUN_BITS) - 1;

/// LSIC continuation byte: adds 255 and requests another byte.
pub const LSIC_CONTINUE: u8 = 0xFF;

/// Size of the little-endian back-reference offset field.
pub const OFFSET_SIZE: usize = 2;

/// Largest distance a 16-bit offset can express.
pub const LZ4_DISTANCE_MAX: usize = 65_535;

/// Upper bound on decoded bytes per payload byte. Every LSIC byte adds at
/// most 255 to a length, and a sequence's fixed fields yield at most 18.
pub const MAX_EXPANSION: usize = 255;

/// Most output a payload of `payload_len` bytes can decode to.
#[inline]
pub fn max_decoded_len(payload_len: usize) -> usize {
    payload_len.saturating_mul(MAX_EXPANSION)
}

// ─────────────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────────────

/// One sequence token, split into its two nibbles.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Token(pub u8);

impl Token {
    /// Literal-length code (high nibble), before any LSIC extension.
    #[inline]
    pub fn literal_code(self) -> usize {
        (self.0 >> ML_BITS) as usize
    }

    /// Match-length code (low nibble), before adding [`MINMATCH`].
    #[inline]
    pub fn match_code(self) -> usize {
        (self.0 & ML_MASK as u8) as usize
    }

    #[inline]
    pub fn literal_saturated(self) -> bool {
        self.literal_code() == RUN_MASK as usize
    }

    #[inline]
    pub fn match_saturated(self) -> bool {
        self.match_code() == ML_MASK as usize
    }
}
