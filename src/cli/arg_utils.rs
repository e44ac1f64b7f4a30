//! Argument parsing helpers for the CLI.

use crate::util::size::parse_size;

/// `clap` value parser for size arguments.
pub fn size_value_parser(s: &str) -> Result<u64, String> {
    parse_size(s).ok_or_else(|| format!("invalid size '{}' (expected e.g. 4096, 64K, 100M, 1G)", s))
}
