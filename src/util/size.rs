//! Byte-count strings with binary suffixes.
//!
//! Shared by the `MOZLZ4_MAX_SIZE` environment override and the CLI's
//! `--max-size` flag.

/// Parse a leading unsigned integer with an optional size suffix.
///
/// Recognised suffixes (case-sensitive, matching the usual CLI spelling):
///   `K` / `KB` / `KiB`  → multiply by 1 024
///   `M` / `MB` / `MiB`  → multiply by 1 048 576
///   `G` / `GB` / `GiB`  → multiply by 1 073 741 824
///
/// Returns the value and the unparsed remainder, or `None` when `s` does not
/// start with a digit or the value overflows `u64`.
pub fn read_size_from_str(s: &str) -> Option<(u64, &str)> {
    let bytes = s.as_bytes();
    let mut i = 0usize;

    if i >= bytes.len() || !bytes[i].is_ascii_digit() {
        return None;
    }

    let mut result: u64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        result = result
            .checked_mul(10)?
            .checked_add(u64::from(bytes[i] - b'0'))?;
        i += 1;
    }

    if i < bytes.len() {
        let shift = match bytes[i] {
            b'K' => Some(10),
            b'M' => Some(20),
            b'G' => Some(30),
            _ => None,
        };
        if let Some(shift) = shift {
            result = result.checked_mul(1u64 << shift)?;
            i += 1;
            if i < bytes.len() && bytes[i] == b'i' {
                i += 1;
            }
            if i < bytes.len() && bytes[i] == b'B' {
                i += 1;
            }
        }
    }

    Some((result, &s[i..]))
}

/// Parse a complete size string; trailing garbage is rejected.
pub fn parse_size(s: &str) -> Option<u64> {
    match read_size_from_str(s.trim())? {
        (value, "") => Some(value),
        _ => None,
    }
}
