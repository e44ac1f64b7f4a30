//! E2E Test Suite: Round trip against an independent LZ4 compressor
//!
//! Containers are built from `lz4_flex` block output, then decoded through
//! the public facade. Covers empty input, single bytes, highly repetitive
//! data, incompressible data, long matches, and offsets near the 64 KiB
//! window limit.

use mozlz4::block::LZ4_DISTANCE_MAX;
use mozlz4::container::wrap_block;
use mozlz4::{decompress, Backend, Decoder, DecoderConfig};

fn roundtrip(data: &[u8]) {
    let raw = wrap_block(data.len() as u32, &lz4_flex::block::compress(data));
    for &backend in Backend::available() {
        let decoder = Decoder::new(DecoderConfig::new().with_backend(backend));
        let out = decoder
            .decompress(&raw)
            .unwrap_or_else(|e| panic!("{backend} failed on {} bytes: {e}", data.len()));
        assert_eq!(out.len(), data.len());
        assert!(out == data, "{backend}: content differs for {} bytes", data.len());
    }
}

/// Deterministic pseudo-random bytes (xorshift32).
fn noise(len: usize, mut seed: u32) -> Vec<u8> {
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed as u8
        })
        .collect()
}

#[test]
fn test_empty() {
    roundtrip(&[]);
}

#[test]
fn test_small_sizes() {
    for len in 1..=32 {
        roundtrip(&noise(len, len as u32 + 1));
    }
}

#[test]
fn test_single_repeated_byte() {
    roundtrip(&vec![b'='; 1 << 20]);
}

#[test]
fn test_incompressible() {
    roundtrip(&noise(200_000, 0x9E37_79B9));
}

#[test]
fn test_text() {
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. "
        .repeat(2000)
        .into_bytes();
    roundtrip(&text);
}

#[test]
fn test_match_at_window_limit() {
    // A block of noise repeated after exactly LZ4_DISTANCE_MAX bytes.
    let chunk = noise(1024, 7);
    let mut data = chunk.clone();
    data.extend(noise(LZ4_DISTANCE_MAX - chunk.len(), 11));
    data.extend(&chunk);
    roundtrip(&data);
}

#[test]
fn test_mixed_session_like_payload() {
    let mut data = Vec::new();
    for i in 0..500u32 {
        data.extend_from_slice(b"{\"url\":\"https://example.org/page/");
        data.extend_from_slice(i.to_string().as_bytes());
        data.extend_from_slice(b"\",\"title\":\"Page\",\"scroll\":\"0,");
        data.extend(noise(8, i + 1).iter().map(|b| b'0' + b % 10));
        data.extend_from_slice(b"\"},");
    }
    roundtrip(&data);
}

#[test]
fn test_facade_matches_decoder() {
    let data = noise(10_000, 3).repeat(3);
    let raw = wrap_block(data.len() as u32, &lz4_flex::block::compress(&data));
    assert_eq!(decompress(&raw).unwrap(), Decoder::default().decompress(&raw).unwrap());
}
