//! Command-line interface for the `mozlz4` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings and the shared `DISPLAY_LEVEL` atomic with its display macros. |
//! | [`arg_utils`] | `clap` value parser for size flags (`64K`, `100M`). |
//! | [`op_mode`]   | `OpMode` enum: decompress, test, or list. |
//! | [`args`]      | `Cli` - the `clap` argument definition plus cross-argument validation. |
//! | [`dispatch`]  | `run` - expands inputs and drives the per-file work. |
//!
//! Typical call sequence: `Cli::parse` → `dispatch::run` → exit code.

pub mod constants;
pub mod arg_utils;
pub mod op_mode;
pub mod args;
pub mod dispatch;
