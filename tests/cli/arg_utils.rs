// Integration tests for size-string parsing (flags and MOZLZ4_MAX_SIZE).

use mozlz4::cli::arg_utils::size_value_parser;
use mozlz4::util::size::{parse_size, read_size_from_str};

#[test]
fn bare_numbers() {
    assert_eq!(parse_size("0"), Some(0));
    assert_eq!(parse_size("4096"), Some(4096));
    assert_eq!(parse_size("18446744073709551615"), Some(u64::MAX));
}

#[test]
fn binary_suffixes() {
    assert_eq!(parse_size("1K"), Some(1024));
    assert_eq!(parse_size("3MB"), Some(3 << 20));
    assert_eq!(parse_size("256MiB"), Some(256 << 20));
    assert_eq!(parse_size("4G"), Some(4 << 30));
}

#[test]
fn lowercase_suffix_is_left_unparsed() {
    assert_eq!(read_size_from_str("8k"), Some((8, "k")));
    assert_eq!(parse_size("8k"), None);
}

#[test]
fn value_parser_messages() {
    assert_eq!(size_value_parser("64K"), Ok(65536));
    let err = size_value_parser("huge").unwrap_err();
    assert!(err.contains("huge"), "{err}");
}
