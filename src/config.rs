// config.rs: Decoder defaults and the runtime `DecoderConfig`.
//
// Compile-time defaults live here as constants; `DecoderConfig` carries the
// values a caller may override (size cap, backend). The size cap can also be
// set through the MOZLZ4_MAX_SIZE environment variable, which the CLI reads
// before applying its own flags.

use crate::backend::Backend;
use crate::block::types::MB;
use crate::util::size::parse_size;

// Default upper bound on the declared decompressed size.
// Firefox bookmark backups are a few MiB at most; 256 MiB leaves ample room
// while keeping a forged header from forcing a 4 GiB allocation.
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: u64 = 256 * MB as u64;

// Environment variable overriding DEFAULT_MAX_DECOMPRESSED_SIZE.
// Accepts a byte count with an optional K/M/G suffix ("64M", "1GiB").
pub const MAX_DECOMPRESSED_SIZE_ENV: &str = "MOZLZ4_MAX_SIZE";

// Default number of worker threads for multi-file CLI runs.
// 0 = one per logical core (rayon's default).
pub const NB_WORKERS_DEFAULT: usize = 0;

/// Settings for a [`crate::Decoder`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DecoderConfig {
    /// Largest declared size accepted before any allocation happens.
    pub max_decompressed_size: u64,
    /// Block decoder implementation.
    pub backend: Backend,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
            backend: Backend::default(),
        }
    }
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_decompressed_size(mut self, max: u64) -> Self {
        self.max_decompressed_size = max;
        self
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Defaults, with the size cap taken from `MOZLZ4_MAX_SIZE` when set.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MAX_DECOMPRESSED_SIZE_ENV).ok().as_deref())
    }

    /// Testable core of [`DecoderConfig::from_env`].
    ///
    /// `None` or an unparsable value leaves the default cap in place.
    pub fn from_env_value(env_val: Option<&str>) -> Self {
        let config = Self::default();
        match env_val.and_then(parse_size) {
            Some(max) => config.with_max_decompressed_size(max),
            None => config,
        }
    }
}
