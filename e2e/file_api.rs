//! E2E Test Suite: File API
//!
//! Exercises `mozlz4::file` against real files in a temporary directory:
//! decoding to memory and to disk, output naming, overwrite protection, and
//! header inspection without decoding.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use mozlz4::container::wrap_block;
use mozlz4::file::{
    decompress_file, decompress_reader, decompress_to_file, output_path_for, read_header,
    FileError,
};
use mozlz4::{DecodeError, Decoder, DecoderConfig, HEADER_SIZE};
use tempfile::TempDir;

fn container_for(data: &[u8]) -> Vec<u8> {
    wrap_block(data.len() as u32, &lz4_flex::block::compress(data))
}

fn sample_json() -> Vec<u8> {
    br#"{"type":"text/x-moz-place","title":"Rust","uri":"https://www.rust-lang.org/"},"#
        .repeat(250)
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: decode a file into memory
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decompress_file_to_memory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bookmarks-2026-10-01.jsonlz4");
    let json = sample_json();
    fs::write(&path, container_for(&json)).unwrap();

    let out = decompress_file(&path, &Decoder::default()).expect("decode should succeed");
    assert_eq!(out, json);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: any reader works
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decompress_reader_cursor() {
    let json = sample_json();
    let raw = container_for(&json);
    let out = decompress_reader(Cursor::new(raw), &Decoder::default()).unwrap();
    assert_eq!(out, json);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: decode to a sibling .json file
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decompress_to_file_default_name() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("search.jsonlz4");
    let json = b"{\"engines\":[]}".to_vec();
    fs::write(&src, container_for(&json)).unwrap();

    let dst = output_path_for(&src);
    assert_eq!(dst, dir.path().join("search.json"));

    let written = decompress_to_file(&src, &dst, &Decoder::default(), false).unwrap();
    assert_eq!(written, json.len() as u64);
    assert_eq!(fs::read(&dst).unwrap(), json);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: no overwrite without permission
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decompress_to_file_refuses_existing() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("s.mozlz4");
    let dst = dir.path().join("s.mozlz4.json");
    fs::write(&src, container_for(b"fresh")).unwrap();
    fs::write(&dst, b"stale").unwrap();

    let err = decompress_to_file(&src, &dst, &Decoder::default(), false).unwrap_err();
    assert!(matches!(err, FileError::OutputExists(ref p) if p == &dst), "{err}");
    assert_eq!(fs::read(&dst).unwrap(), b"stale");

    decompress_to_file(&src, &dst, &Decoder::default(), true).unwrap();
    assert_eq!(fs::read(&dst).unwrap(), b"fresh");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: a failed decode leaves no output behind
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_failed_decode_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("broken.jsonlz4");
    let dst = dir.path().join("broken.json");
    fs::write(&src, wrap_block(100, &[0xF0, 0x20, b'x'])).unwrap();

    let err = decompress_to_file(&src, &dst, &Decoder::default(), false).unwrap_err();
    assert!(matches!(
        err,
        FileError::Decode(DecodeError::UnexpectedEndOfInput)
    ));
    assert!(!dst.exists());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 6: missing input is an I/O error
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = decompress_file(&dir.path().join("nope.jsonlz4"), &Decoder::default()).unwrap_err();
    match err {
        FileError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected Io, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 7: header inspection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_read_header_reports_sizes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("h.jsonlz4");
    let json = sample_json();
    let raw = container_for(&json);
    fs::write(&path, &raw).unwrap();

    let info = read_header(&path).unwrap();
    assert_eq!(info.header.declared_size as usize, json.len());
    assert_eq!(info.file_size, raw.len() as u64);
    assert_eq!(info.payload_size(), (raw.len() - HEADER_SIZE) as u64);
    assert!(info.ratio() > 1.0);
}

#[test]
fn test_read_header_rejects_non_container() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.json");
    fs::write(&path, b"{\"not\":\"compressed\"}").unwrap();
    assert!(matches!(
        read_header(&path),
        Err(FileError::Decode(DecodeError::InvalidSignature))
    ));

    let short = dir.path().join("short.jsonlz4");
    fs::write(&short, b"mozLz40\0\x01").unwrap();
    assert!(matches!(
        read_header(&short),
        Err(FileError::Decode(DecodeError::Truncated))
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 8: configured cap applies to file decoding
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_cap_applies_to_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("big.jsonlz4");
    fs::write(&path, container_for(&sample_json())).unwrap();

    let decoder = Decoder::new(DecoderConfig::new().with_max_decompressed_size(64));
    assert!(matches!(
        decompress_file(&path, &decoder),
        Err(FileError::Decode(DecodeError::DeclaredSizeTooLarge { max: 64, .. }))
    ));
}

#[test]
fn test_output_naming_rules() {
    assert_eq!(
        output_path_for(Path::new("recovery.jsonlz4")),
        Path::new("recovery.json")
    );
    assert_eq!(
        output_path_for(Path::new("recovery.baklz4")),
        Path::new("recovery.baklz4.json")
    );
}
