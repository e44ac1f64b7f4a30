// Integration tests for CLI identity constants.
//
// The display level is a process-wide atomic that `run` also sets; tests in
// this binary run concurrently, so only the lib's unit tests mutate it.

use mozlz4::cli::constants::{
    DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX, PROGRAM_NAME, STDIO_MARK, VERSION_STRING,
};

#[test]
fn identity() {
    assert_eq!(PROGRAM_NAME, "mozlz4");
    assert_eq!(STDIO_MARK, "-");
    assert_eq!(VERSION_STRING, env!("CARGO_PKG_VERSION"));
}

#[test]
fn display_level_range() {
    assert_eq!(DISPLAY_LEVEL_DEFAULT, 2);
    assert_eq!(DISPLAY_LEVEL_MAX, 4);
}
