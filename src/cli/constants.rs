// cli/constants.rs: Program identity and the display-level globals.
//
// The library core never prints. Everything the binary reports goes through
// the macros below, filtered by a process-wide display level.

use std::sync::atomic::{AtomicU32, Ordering};

// ── String / identity constants ───────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "mozlz4";
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Name used for standard input / standard output on the command line.
pub const STDIO_MARK: &str = "-";

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal (per-file results);
// 3 = verbose (sizes, backend); 4 = debug
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;
pub const DISPLAY_LEVEL_MAX: u32 = 4;

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level, clamped to [`DISPLAY_LEVEL_MAX`].
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level.min(DISPLAY_LEVEL_MAX), Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────
//
//   displayout!(...)      → stdout, unconditional (listings, --version)
//   display!(...)         → stderr, unconditional
//   displaylevel!(l, ...) → stderr when display_level() >= l

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
