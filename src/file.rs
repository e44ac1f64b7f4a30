//! File-level helpers around the in-memory decoder.
//!
//! The decoder itself has no filesystem awareness; this module reads whole
//! files (or any `Read`), decodes them, and writes results only after a
//! decode has fully succeeded, so a failed decode never leaves a partial
//! output file behind.
//!
//! # Public API
//! - [`decompress_reader`]  - decode everything an `R: Read` yields
//! - [`decompress_file`]    - decode one file into memory
//! - [`decompress_to_file`] - decode one file into another
//! - [`read_header`]        - header and sizes, without decoding
//! - [`output_path_for`]    - `bookmarks.jsonlz4` → `bookmarks.json`

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::container::{ContainerHeader, HEADER_SIZE};
use crate::decoder::Decoder;
use crate::error::DecodeError;

/// Extension Firefox gives compressed JSON backups.
pub const JSONLZ4_EXTENSION: &str = "jsonlz4";
/// Extension appended to decoded outputs.
pub const JSON_EXTENSION: &str = "json";
/// Extensions recognised when expanding directories.
pub const MOZLZ4_EXTENSIONS: [&str; 4] = ["jsonlz4", "mozlz4", "baklz4", "mozlz4a"];

/// Errors from the file helpers.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("{0} already exists; use --force to overwrite")]
    OutputExists(PathBuf),
}

// ─────────────────────────────────────────────────────────────────────────────
// Naming
// ─────────────────────────────────────────────────────────────────────────────

/// Output path for a decoded `input`.
///
/// A `.jsonlz4` extension (any case) is replaced by `.json`; any other name
/// gets `.json` appended, so `backup.baklz4` becomes `backup.baklz4.json`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let is_jsonlz4 = input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(JSONLZ4_EXTENSION));
    if is_jsonlz4 {
        return input.with_extension(JSON_EXTENSION);
    }
    let mut name = input.as_os_str().to_os_string();
    name.push(".");
    name.push(JSON_EXTENSION);
    PathBuf::from(name)
}

/// `true` if `path` carries one of [`MOZLZ4_EXTENSIONS`].
pub fn has_mozlz4_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| MOZLZ4_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoding
// ─────────────────────────────────────────────────────────────────────────────

/// Read `reader` to the end and decode the bytes as one container.
pub fn decompress_reader<R: Read>(mut reader: R, decoder: &Decoder) -> Result<Vec<u8>, FileError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(decoder.decompress(&data)?)
}

pub fn decompress_file(path: &Path, decoder: &Decoder) -> Result<Vec<u8>, FileError> {
    let data = fs::read(path)?;
    Ok(decoder.decompress(&data)?)
}

/// Decode `src` and write the result to `dst`.
///
/// Refuses to replace an existing `dst` unless `overwrite` is set. Returns
/// the number of decoded bytes written.
pub fn decompress_to_file(
    src: &Path,
    dst: &Path,
    decoder: &Decoder,
    overwrite: bool,
) -> Result<u64, FileError> {
    if !overwrite && dst.exists() {
        return Err(FileError::OutputExists(dst.to_path_buf()));
    }
    let decoded = decompress_file(src, decoder)?;
    fs::write(dst, &decoded)?;
    Ok(decoded.len() as u64)
}

// ─────────────────────────────────────────────────────────────────────────────
// Header inspection
// ─────────────────────────────────────────────────────────────────────────────

/// Header of a container file plus its on-disk size.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FileInfo {
    pub header: ContainerHeader,
    pub file_size: u64,
}

impl FileInfo {
    /// Compressed payload length (file size minus the 12-byte header).
    pub fn payload_size(&self) -> u64 {
        self.file_size.saturating_sub(HEADER_SIZE as u64)
    }

    /// Decoded size divided by file size; 0.0 for an empty file.
    pub fn ratio(&self) -> f64 {
        if self.file_size == 0 {
            return 0.0;
        }
        f64::from(self.header.declared_size) / self.file_size as f64
    }
}

/// Read and validate only the header of the container at `path`.
pub fn read_header(path: &Path) -> Result<FileInfo, FileError> {
    let file = File::open(path)?;
    let file_size = file.metadata()?.len();
    let mut prefix = Vec::with_capacity(HEADER_SIZE);
    file.take(HEADER_SIZE as u64).read_to_end(&mut prefix)?;
    let header = ContainerHeader::parse(&prefix)?;
    Ok(FileInfo { header, file_size })
}
