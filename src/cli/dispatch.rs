//! Operation dispatch for the `mozlz4` binary.
//!
//! [`run`] expands the inputs, builds the decoder, and processes every file
//! independently: a failure on one input is reported and the rest still run.
//! Decoding happens on a `rayon` pool; reports and any standard-output data
//! are emitted afterwards on the calling thread in input order.
//!
//! Returns the process exit code: 0 when every input succeeded, 1 otherwise.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;

use crate::cli::args::{is_stdio, Cli};
use crate::cli::constants::{set_display_level, PROGRAM_NAME};
use crate::cli::op_mode::OpMode;
use crate::config::MAX_DECOMPRESSED_SIZE_ENV;
use crate::decoder::Decoder;
use crate::file::{decompress_file, decompress_reader, read_header, FileError, FileInfo};
use crate::util::create_file_list;
use crate::{display, displaylevel, displayout};

/// What a successfully processed input produced.
#[derive(Debug)]
enum Outcome {
    /// Written to a file.
    Written { output: PathBuf, size: u64 },
    /// Held for standard output.
    Stdout(Vec<u8>),
    /// Decoded and discarded (`--test`).
    Tested { size: u64 },
}

/// Run the CLI with already-parsed arguments.
pub fn run(cli: &Cli) -> i32 {
    set_display_level(cli.display_level());

    let env_max = std::env::var(MAX_DECOMPRESSED_SIZE_ENV).ok();
    let decoder = Decoder::new(cli.decoder_config(env_max.as_deref()));

    let inputs = match create_file_list(&cli.files, cli.recursive) {
        Ok(list) => list,
        Err(e) => {
            display!("{}: {}\n", PROGRAM_NAME, e);
            return 1;
        }
    };
    // Usage errors abort the whole run and are printed whatever the level.
    if inputs.is_empty() {
        display!("{}: no input files\n", PROGRAM_NAME);
        return 1;
    }
    if let Err(e) = cli.validate(inputs.len()) {
        display!("{}: {:#}\n", PROGRAM_NAME, e);
        return 1;
    }

    displaylevel!(
        3,
        "{} inputs, backend {}, max declared size {} bytes\n",
        inputs.len(),
        decoder.config().backend,
        decoder.config().max_decompressed_size
    );

    let failures = match cli.op_mode() {
        OpMode::List => list_files(&inputs),
        mode => decode_files(cli, &decoder, &inputs, mode),
    };

    if failures > 0 {
        displaylevel!(2, "{} of {} files failed\n", failures, inputs.len());
        1
    } else {
        0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decompress / test
// ─────────────────────────────────────────────────────────────────────────────

fn decode_files(cli: &Cli, decoder: &Decoder, inputs: &[PathBuf], mode: OpMode) -> usize {
    let results: Vec<anyhow::Result<Outcome>> = match rayon::ThreadPoolBuilder::new()
        .num_threads(cli.threads)
        .build()
    {
        Ok(pool) => pool.install(|| {
            inputs
                .par_iter()
                .map(|input| process_one(cli, decoder, input, mode))
                .collect()
        }),
        Err(e) => {
            displaylevel!(3, "thread pool unavailable ({}), running single-threaded\n", e);
            inputs
                .iter()
                .map(|input| process_one(cli, decoder, input, mode))
                .collect()
        }
    };

    let mut failures = 0;
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(Outcome::Written { output, size }) => {
                displaylevel!(2, "{}: OK -> {} ({} bytes)\n", input.display(), output.display(), size);
            }
            Ok(Outcome::Stdout(data)) => {
                if let Err(e) = stdout.write_all(&data).and_then(|()| stdout.flush()) {
                    displaylevel!(1, "{}: writing to stdout: {}\n", input.display(), e);
                    failures += 1;
                    continue;
                }
                displaylevel!(3, "{}: OK ({} bytes)\n", input.display(), data.len());
            }
            Ok(Outcome::Tested { size }) => {
                displaylevel!(2, "{}: OK ({} bytes)\n", input.display(), size);
            }
            Err(e) => {
                displaylevel!(1, "{:#}\n", e);
                failures += 1;
            }
        }
    }
    failures
}

fn process_one(cli: &Cli, decoder: &Decoder, input: &Path, mode: OpMode) -> anyhow::Result<Outcome> {
    let output = match mode {
        OpMode::Test => None,
        _ => cli.output_for(input),
    };

    // Refuse before decoding so an existing file costs no work.
    if let Some(out) = &output {
        if !cli.force && out.exists() {
            return Err(FileError::OutputExists(out.clone()))
                .with_context(|| input.display().to_string());
        }
    }

    let decoded = read_and_decode(decoder, input).with_context(|| input.display().to_string())?;
    let size = decoded.len() as u64;

    match (mode, output) {
        (OpMode::Test, _) => Ok(Outcome::Tested { size }),
        (_, Some(out)) => {
            std::fs::write(&out, &decoded)
                .with_context(|| format!("{}: writing {}", input.display(), out.display()))?;
            Ok(Outcome::Written { output: out, size })
        }
        (_, None) => Ok(Outcome::Stdout(decoded)),
    }
}

fn read_and_decode(decoder: &Decoder, input: &Path) -> Result<Vec<u8>, FileError> {
    if is_stdio(input) {
        decompress_reader(io::stdin().lock(), decoder)
    } else {
        decompress_file(input, decoder)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// List
// ─────────────────────────────────────────────────────────────────────────────

fn list_files(inputs: &[PathBuf]) -> usize {
    let mut failures = 0;
    displayout!("{:>12} {:>12} {:>8}  {}\n", "Compressed", "Declared", "Ratio", "Filename");
    for input in inputs {
        match read_header(input) {
            Ok(info) => displayout!("{}\n", format_info_row(&info, input)),
            Err(e) => {
                displaylevel!(1, "{}: {}\n", input.display(), e);
                failures += 1;
            }
        }
    }
    failures
}

/// One `--list` table row.
pub fn format_info_row(info: &FileInfo, path: &Path) -> String {
    format!(
        "{:>12} {:>12} {:>7.2}x  {}",
        info.file_size,
        info.header.declared_size,
        info.ratio(),
        path.display()
    )
}
