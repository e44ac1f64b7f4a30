//! E2E Test Suite: Error Handling & Edge Cases
//!
//! Malformed containers must produce a `DecodeError`, never a panic and never
//! partial output. Covers every header failure, every payload failure, and a
//! sweep of truncations and single-byte corruptions over a valid container.

use mozlz4::container::wrap_block;
use mozlz4::{decompress, DecodeError, Decoder, DecoderConfig, MAGIC};

fn valid_container() -> (Vec<u8>, Vec<u8>) {
    let data = b"{\"windows\":[{\"tabs\":[{\"entries\":[]}]}],\"selectedWindow\":1}".repeat(40);
    let raw = wrap_block(data.len() as u32, &lz4_flex::block::compress(&data));
    (data, raw)
}

// ═════════════════════════════════════════════════════════════════════════════
// Header
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_every_short_prefix_is_truncated() {
    let (_, raw) = valid_container();
    for n in 1..12 {
        assert_eq!(decompress(&raw[..n]), Err(DecodeError::Truncated), "prefix {n}");
    }
}

#[test]
fn test_short_non_container_is_bad_signature() {
    for raw in [&b""[..], b"{}\n", b"PK\x03\x04", b"[]"] {
        assert_eq!(decompress(raw), Err(DecodeError::InvalidSignature), "{raw:?}");
    }
}

#[test]
fn test_each_magic_byte_matters() {
    let (_, raw) = valid_container();
    for i in 0..MAGIC.len() {
        let mut bad = raw.clone();
        bad[i] ^= 0x20;
        assert_eq!(decompress(&bad), Err(DecodeError::InvalidSignature), "byte {i}");
    }
}

#[test]
fn test_declared_size_over_cap() {
    let (data, raw) = valid_container();
    let cap = data.len() as u64 - 1;
    let decoder = Decoder::new(DecoderConfig::new().with_max_decompressed_size(cap));
    assert_eq!(
        decoder.decompress(&raw),
        Err(DecodeError::DeclaredSizeTooLarge {
            declared: data.len() as u64,
            max: cap
        })
    );
}

// ═════════════════════════════════════════════════════════════════════════════
// Payload
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_declared_size_larger_than_content() {
    let (data, raw) = valid_container();
    let mut bad = raw.clone();
    bad[8..12].copy_from_slice(&(data.len() as u32 + 1).to_le_bytes());
    assert_eq!(decompress(&bad), Err(DecodeError::UnexpectedEndOfInput));
}

#[test]
fn test_declared_size_smaller_than_content() {
    let (data, raw) = valid_container();
    let mut bad = raw.clone();
    bad[8..12].copy_from_slice(&(data.len() as u32 - 1).to_le_bytes());
    assert!(matches!(
        decompress(&bad),
        Err(DecodeError::SizeMismatch { .. })
    ));
}

#[test]
fn test_every_truncation_fails_cleanly() {
    let (_, raw) = valid_container();
    for n in 12..raw.len() {
        assert!(decompress(&raw[..n]).is_err(), "truncated to {n} bytes decoded");
    }
}

#[test]
fn test_single_byte_corruption_never_panics() {
    let (data, raw) = valid_container();
    for i in 12..raw.len() {
        for flip in [0x01u8, 0x80, 0xFF] {
            let mut bad = raw.clone();
            bad[i] ^= flip;
            if let Ok(out) = decompress(&bad) {
                assert_eq!(out.len(), data.len());
            }
        }
    }
}

#[test]
fn test_offset_zero() {
    let raw = wrap_block(8, &[0x10, b'x', 0x00, 0x00]);
    assert_eq!(
        decompress(&raw),
        Err(DecodeError::OffsetOutOfRange {
            offset: 0,
            available: 1
        })
    );
}

#[test]
fn test_offset_past_start() {
    let raw = wrap_block(8, &[0x10, b'x', 0xFF, 0xFF]);
    assert_eq!(
        decompress(&raw),
        Err(DecodeError::OffsetOutOfRange {
            offset: 0xFFFF,
            available: 1
        })
    );
}

#[test]
fn test_lsic_overflow_attempt() {
    // A long run of continuation bytes with nothing after it.
    let mut block = vec![0xF0u8];
    block.extend(std::iter::repeat(0xFF).take(100_000));
    let raw = wrap_block(1000, &block);
    assert_eq!(decompress(&raw), Err(DecodeError::UnexpectedEndOfInput));
}
