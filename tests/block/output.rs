// Unit tests for the append-only output buffer.
//
//   - literal appends and declared-size bound
//   - back-reference range checks (offset 0, offset past start)
//   - overlapping copies (offset < length) vs. plain copies

use mozlz4::block::output::DecodedBuffer;
use mozlz4::DecodeError;

#[test]
fn offset_one_repeats_last_byte() {
    let mut out = DecodedBuffer::with_declared_size(11);
    out.append_literal(b"A").unwrap();
    out.append_back_reference(1, 10).unwrap();
    assert_eq!(out.as_slice(), b"AAAAAAAAAAA");
    assert!(out.is_complete());
}

#[test]
fn distance_five_copies_from_window_start() {
    let mut out = DecodedBuffer::with_declared_size(9);
    out.append_literal(b"BCDEF").unwrap();
    out.append_back_reference(5, 4).unwrap();
    assert_eq!(&out.as_slice()[5..8], b"BCD");
    assert_eq!(out.as_slice(), b"BCDEFBCDE");
}

#[test]
fn offset_equal_to_length_uses_finalised_bytes() {
    let mut out = DecodedBuffer::with_declared_size(12);
    out.append_literal(b"abcdef").unwrap();
    out.append_back_reference(6, 6).unwrap();
    assert_eq!(out.as_slice(), b"abcdefabcdef");
}

#[test]
fn overlap_with_period_three() {
    let mut out = DecodedBuffer::with_declared_size(3 + 10);
    out.append_literal(b"abc").unwrap();
    out.append_back_reference(3, 10).unwrap();
    assert_eq!(out.as_slice(), b"abcabcabcabca");
}

#[test]
fn match_overshoot_rejected() {
    let mut out = DecodedBuffer::with_declared_size(6);
    out.append_literal(b"ab").unwrap();
    assert_eq!(
        out.append_back_reference(1, 5),
        Err(DecodeError::SizeMismatch {
            declared: 6,
            attempted: 7
        })
    );
    assert_eq!(out.len(), 2);
}

#[test]
fn back_reference_on_empty_buffer() {
    let mut out = DecodedBuffer::with_declared_size(4);
    assert_eq!(
        out.append_back_reference(1, 4),
        Err(DecodeError::OffsetOutOfRange {
            offset: 1,
            available: 0
        })
    );
}

#[test]
fn into_inner_returns_bytes() {
    let mut out = DecodedBuffer::with_declared_size(3);
    out.append_literal(b"xyz").unwrap();
    assert_eq!(out.declared_size(), 3);
    assert_eq!(out.into_inner(), b"xyz".to_vec());
}
