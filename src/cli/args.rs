//! Command-line arguments for the `mozlz4` binary.
//!
//! Parsing is done by `clap`; this module adds the cross-argument checks clap
//! cannot express on its own (an explicit `--output` needs exactly one input)
//! and the conversions into runtime settings: the operation mode, the
//! display level, and the [`DecoderConfig`].

use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::{ArgAction, Parser};

use crate::backend::Backend;
use crate::cli::arg_utils::size_value_parser;
use crate::cli::constants::{DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX, STDIO_MARK};
use crate::cli::op_mode::{determine_op_mode, OpMode};
use crate::config::{DecoderConfig, NB_WORKERS_DEFAULT};

/// Decompress Firefox mozLz4 files (.jsonlz4, .mozlz4, .baklz4).
#[derive(Parser, Debug, Clone)]
#[command(name = "mozlz4", version, about, long_about = None)]
pub struct Cli {
    /// Input files (`-` reads standard input)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Write decoded data to standard output
    #[arg(short = 'c', long)]
    pub stdout: bool,

    /// Output file (single input only)
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Overwrite existing output files
    #[arg(short, long)]
    pub force: bool,

    /// Test integrity: decode but write nothing
    #[arg(short, long)]
    pub test: bool,

    /// List header information without decoding
    #[arg(short, long, conflicts_with_all = ["test", "stdout", "output"])]
    pub list: bool,

    /// Recurse into directories, picking up mozLz4 files
    #[arg(short, long)]
    pub recursive: bool,

    /// Worker threads for multiple inputs (0 = one per core)
    #[arg(short = 'T', long, default_value_t = NB_WORKERS_DEFAULT)]
    pub threads: usize,

    /// Largest accepted declared size, e.g. 64M (default 256M, env MOZLZ4_MAX_SIZE)
    #[arg(long, value_parser = size_value_parser)]
    pub max_size: Option<u64>,

    /// Block decoder backend
    #[arg(long, default_value_t = Backend::Software)]
    pub backend: Backend,

    /// Increase verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn op_mode(&self) -> OpMode {
        determine_op_mode(self.list, self.test)
    }

    /// Display level after applying `-v` / `-q`.
    pub fn display_level(&self) -> u32 {
        (DISPLAY_LEVEL_DEFAULT + u32::from(self.verbose))
            .saturating_sub(u32::from(self.quiet))
            .min(DISPLAY_LEVEL_MAX)
    }

    /// Decoder settings: defaults, then `MOZLZ4_MAX_SIZE`, then flags.
    pub fn decoder_config(&self, env_max_size: Option<&str>) -> DecoderConfig {
        let mut config = DecoderConfig::from_env_value(env_max_size).with_backend(self.backend);
        if let Some(max) = self.max_size {
            config = config.with_max_decompressed_size(max);
        }
        config
    }

    /// Checks that depend on the expanded input list.
    pub fn validate(&self, nb_inputs: usize) -> anyhow::Result<()> {
        if self.output.is_some() && nb_inputs != 1 {
            bail!("--output requires exactly one input file (got {})", nb_inputs);
        }
        Ok(())
    }

    /// Where decoded output for `input` goes: `None` means standard output.
    pub fn output_for(&self, input: &Path) -> Option<PathBuf> {
        if self.stdout {
            return None;
        }
        if let Some(out) = &self.output {
            return if is_stdio(out) { None } else { Some(out.clone()) };
        }
        if is_stdio(input) {
            return None;
        }
        Some(crate::file::output_path_for(input))
    }
}

/// `true` for the `-` placeholder.
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_MARK
}
