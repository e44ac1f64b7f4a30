// mozlz4: decoder for Firefox mozLz4 compressed JSON containers

pub mod block;
pub mod container;
pub mod error;
pub mod config;
pub mod backend;
pub mod decoder;
pub mod file;
pub mod util;
pub mod cli;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use backend::{Backend, BlockBackend, SoftwareBackend};
#[cfg(feature = "accelerated")]
pub use backend::Lz4FlexBackend;
pub use config::{DecoderConfig, DEFAULT_MAX_DECOMPRESSED_SIZE};
pub use container::{Container, ContainerHeader, HEADER_SIZE, MAGIC};
pub use decoder::{decompress, Decoder};
pub use error::DecodeError;
pub use file::FileError;
