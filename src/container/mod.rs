//! The mozLz4 container: a 12-byte header followed by one LZ4 block.
//!
//! [`Container::parse`] is a pure view over the input: it validates the
//! header and splits off the payload without allocating.

pub mod header;

pub use header::{ContainerHeader, HEADER_SIZE, MAGIC};

use crate::error::DecodeError;

/// Borrowed view over a complete container.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Container<'a> {
    pub header: ContainerHeader,
    /// Compressed sequences, `input.len() - HEADER_SIZE` bytes.
    pub payload: &'a [u8],
}

impl<'a> Container<'a> {
    pub fn parse(input: &'a [u8]) -> Result<Self, DecodeError> {
        let header = ContainerHeader::parse(input)?;
        Ok(Self {
            header,
            payload: &input[HEADER_SIZE..],
        })
    }

    #[inline]
    pub fn declared_size(&self) -> u32 {
        self.header.declared_size
    }
}

/// Prepend a container header to an already-compressed LZ4 block.
///
/// The block itself must come from an LZ4 block compressor; this crate does
/// not compress.
pub fn wrap_block(declared_size: u32, block: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE + block.len());
    out.extend_from_slice(&ContainerHeader { declared_size }.to_bytes());
    out.extend_from_slice(block);
    out
}
