//! mozLz4 container header: magic signature and declared decompressed size.
//!
//! ```text
//! offset  size  field
//! 0       8     magic  b"mozLz40\0"
//! 8       4     declared decompressed size, u32 little-endian
//! 12      ..    LZ4 block payload
//! ```

use crate::error::DecodeError;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Container signature.
pub const MAGIC: [u8; 8] = *b"mozLz40\0";
pub const MAGIC_SIZE: usize = MAGIC.len();

/// Byte length of the declared-size field.
pub const SIZE_FIELD_SIZE: usize = 4;

/// Total header size; the payload starts here.
pub const HEADER_SIZE: usize = MAGIC_SIZE + SIZE_FIELD_SIZE;

// ─────────────────────────────────────────────────────────────────────────────
// Byte-order helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a little-endian `u32` from `src` at byte `offset`.
#[inline]
pub fn read_le32(src: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        src[offset],
        src[offset + 1],
        src[offset + 2],
        src[offset + 3],
    ])
}

/// Write a little-endian `u32` into `dst` at byte `offset`.
#[inline]
pub fn write_le32(dst: &mut [u8], offset: usize, value: u32) {
    dst[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

// ─────────────────────────────────────────────────────────────────────────────
// Header
// ─────────────────────────────────────────────────────────────────────────────

/// The fixed 12-byte prefix of a container.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ContainerHeader {
    /// Decompressed length promised by the writer.
    pub declared_size: u32,
}

impl ContainerHeader {
    /// Validate and decode the header at the start of `input`.
    ///
    /// Only the first [`HEADER_SIZE`] bytes are inspected.
    ///
    /// - a non-empty, cut-off prefix of the signature → [`DecodeError::Truncated`]
    /// - any other input whose first 8 bytes are not the signature, empty
    ///   input included → [`DecodeError::InvalidSignature`]
    /// - correct signature but fewer than 12 bytes → [`DecodeError::Truncated`]
    pub fn parse(input: &[u8]) -> Result<Self, DecodeError> {
        if input.len() < MAGIC_SIZE {
            if !input.is_empty() && MAGIC.starts_with(input) {
                return Err(DecodeError::Truncated);
            }
            return Err(DecodeError::InvalidSignature);
        }
        if input[..MAGIC_SIZE] != MAGIC {
            return Err(DecodeError::InvalidSignature);
        }
        if input.len() < HEADER_SIZE {
            return Err(DecodeError::Truncated);
        }
        Ok(Self {
            declared_size: read_le32(input, MAGIC_SIZE),
        })
    }

    /// Serialise the header.
    pub fn to_bytes(self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[..MAGIC_SIZE].copy_from_slice(&MAGIC);
        write_le32(&mut out, MAGIC_SIZE, self.declared_size);
        out
    }
}
