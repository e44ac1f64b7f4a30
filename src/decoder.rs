//! Decoder facade: container bytes in, decompressed bytes out.
//!
//! [`Decoder::decompress`] validates the header, gates the declared size on
//! the configured cap before anything is allocated, then hands the payload to
//! the configured backend. A `Decoder` holds no mutable state, so one value
//! can be shared by any number of threads.

use crate::config::DecoderConfig;
use crate::container::Container;
use crate::error::DecodeError;

/// A configured mozLz4 decoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a complete mozLz4 container.
    ///
    /// On success the returned buffer is exactly the declared size. On any
    /// error nothing partial is returned.
    pub fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let container = Container::parse(input)?;
        let declared_size = self.check_declared_size(container.declared_size())?;
        self.config
            .backend
            .decompress_block(container.payload, declared_size)
    }

    /// Apply the size cap to a header's declared size.
    fn check_declared_size(&self, declared: u32) -> Result<usize, DecodeError> {
        let max = self.config.max_decompressed_size;
        let too_large = DecodeError::DeclaredSizeTooLarge {
            declared: u64::from(declared),
            max,
        };
        if u64::from(declared) > max {
            return Err(too_large);
        }
        usize::try_from(declared).map_err(|_| too_large)
    }
}

/// Decode a mozLz4 container with the default configuration.
///
/// Equivalent to `Decoder::default().decompress(input)`.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    Decoder::default().decompress(input)
}
