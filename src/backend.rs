//! Interchangeable block decoders behind one contract.
//!
//! A [`BlockBackend`] turns a validated payload and its declared size into
//! exactly `declared_size` bytes, or a [`DecodeError`]. Two implementations
//! exist:
//!
//! | Backend            | Implementation                               |
//! |--------------------|----------------------------------------------|
//! | [`SoftwareBackend`] | this crate's sequence decoder               |
//! | `Lz4FlexBackend`   | `lz4_flex` block decoder (`accelerated` feature) |
//!
//! The choice is made once, through [`crate::DecoderConfig::backend`]; the
//! facade dispatches on [`Backend`] in a single place.
//!
//! Both backends return the same bytes and the same errors for every input.
//! The accelerated path only trusts `lz4_flex` when it reports success with
//! exactly the declared size; any other outcome is re-decoded by the software
//! backend, which then supplies the result or the precise error.

use std::fmt;
use std::str::FromStr;

use crate::block::decompress_block;
#[cfg(feature = "accelerated")]
use crate::block::max_decoded_len;
use crate::error::DecodeError;

/// Capability: decode one LZ4 block of known output size.
pub trait BlockBackend {
    /// Short identifier, used in CLI diagnostics.
    fn name(&self) -> &'static str;

    /// Decode `payload` into exactly `declared_size` bytes.
    ///
    /// Implementations must not allocate more than `payload` can decode to,
    /// so an untrusted `declared_size` cannot force a large allocation.
    fn decompress_block(&self, payload: &[u8], declared_size: usize) -> Result<Vec<u8>, DecodeError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Software
// ─────────────────────────────────────────────────────────────────────────────

/// Safe, dependency-free sequence decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftwareBackend;

impl BlockBackend for SoftwareBackend {
    fn name(&self) -> &'static str {
        "software"
    }

    fn decompress_block(&self, payload: &[u8], declared_size: usize) -> Result<Vec<u8>, DecodeError> {
        decompress_block(payload, declared_size)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// lz4_flex
// ─────────────────────────────────────────────────────────────────────────────

/// Block decoder backed by `lz4_flex`.
#[cfg(feature = "accelerated")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Lz4FlexBackend;

#[cfg(feature = "accelerated")]
impl BlockBackend for Lz4FlexBackend {
    fn name(&self) -> &'static str {
        "accelerated"
    }

    fn decompress_block(&self, payload: &[u8], declared_size: usize) -> Result<Vec<u8>, DecodeError> {
        // No payload this short can fill `declared_size`; skip the zeroed
        // allocation and let the software decoder report why.
        if declared_size > max_decoded_len(payload.len()) {
            return SoftwareBackend.decompress_block(payload, declared_size);
        }
        let mut out = vec![0u8; declared_size];
        match lz4_flex::block::decompress_into(payload, &mut out) {
            Ok(written) if written == declared_size => Ok(out),
            // Short output, trailing payload, or a malformed block: let the
            // software decoder decide what the caller sees.
            _ => SoftwareBackend.decompress_block(payload, declared_size),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Which [`BlockBackend`] a decoder uses.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Backend {
    #[default]
    Software,
    #[cfg(feature = "accelerated")]
    Accelerated,
}

impl Backend {
    /// Every backend compiled into this build.
    pub fn available() -> &'static [Backend] {
        &[
            Backend::Software,
            #[cfg(feature = "accelerated")]
            Backend::Accelerated,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Backend::Software => SoftwareBackend.name(),
            #[cfg(feature = "accelerated")]
            Backend::Accelerated => Lz4FlexBackend.name(),
        }
    }

    /// Decode with the selected implementation.
    pub fn decompress_block(self, payload: &[u8], declared_size: usize) -> Result<Vec<u8>, DecodeError> {
        match self {
            Backend::Software => SoftwareBackend.decompress_block(payload, declared_size),
            #[cfg(feature = "accelerated")]
            Backend::Accelerated => Lz4FlexBackend.decompress_block(payload, declared_size),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Backend::available()
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Backend::available().iter().map(|b| b.name()).collect();
                format!("unknown backend '{}' (available: {})", s, names.join(", "))
            })
    }
}
