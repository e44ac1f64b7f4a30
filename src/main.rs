//! Binary entry point for the `mozlz4` command-line tool.
//!
//! Decodes Firefox mozLz4 containers (`bookmarks-*.jsonlz4`,
//! `search.json.mozlz4`, `recovery.baklz4`, …) to plain files:
//!
//! ```text
//! mozlz4 bookmarks.jsonlz4            # → bookmarks.json
//! mozlz4 -c search.json.mozlz4 | jq . # → stdout
//! mozlz4 -r -t ~/.mozilla/firefox     # integrity check of every backup
//! mozlz4 -l *.jsonlz4                 # header summary
//! ```
//!
//! Argument parsing is done by [`Cli`]; [`run`] performs the work and yields
//! the process exit code.

use clap::Parser;

use mozlz4::cli::args::Cli;
use mozlz4::cli::dispatch::run;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}
