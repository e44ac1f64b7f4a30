// Integration tests for the clap argument definition.
//
//   - flag spellings and conflicts
//   - display level from -v / -q
//   - decoder settings layering: default, environment, --max-size
//   - output path selection and --output validation

use std::path::{Path, PathBuf};

use clap::Parser;
use mozlz4::cli::args::{is_stdio, Cli};
use mozlz4::cli::op_mode::OpMode;
use mozlz4::{Backend, DEFAULT_MAX_DECOMPRESSED_SIZE};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn try_parse(argv: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("mozlz4").chain(argv.iter().copied()))
}

fn parse(argv: &[&str]) -> Cli {
    try_parse(argv).expect("parse should succeed")
}

// ─────────────────────────────────────────────────────────────────────────────
// Flags
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn defaults() {
    let cli = parse(&["bookmarks.jsonlz4"]);
    assert_eq!(cli.files, vec![PathBuf::from("bookmarks.jsonlz4")]);
    assert!(!cli.stdout && !cli.force && !cli.test && !cli.list && !cli.recursive);
    assert_eq!(cli.threads, 0);
    assert_eq!(cli.max_size, None);
    assert_eq!(cli.backend, Backend::Software);
    assert_eq!(cli.op_mode(), OpMode::Decompress);
}

#[test]
fn short_flags_aggregate() {
    let cli = parse(&["-cfr", "dir"]);
    assert!(cli.stdout && cli.force && cli.recursive);
}

#[test]
fn modes() {
    assert_eq!(parse(&["-t", "a"]).op_mode(), OpMode::Test);
    assert_eq!(parse(&["--list", "a", "b"]).op_mode(), OpMode::List);
}

#[test]
fn inputs_are_required() {
    assert!(try_parse(&[]).is_err());
}

#[test]
fn conflicting_flags_rejected() {
    assert!(try_parse(&["-c", "-o", "out.json", "a"]).is_err());
    assert!(try_parse(&["-l", "-t", "a"]).is_err());
    assert!(try_parse(&["-l", "-c", "a"]).is_err());
}

#[test]
fn max_size_accepts_suffixes() {
    assert_eq!(parse(&["--max-size", "64M", "a"]).max_size, Some(64 << 20));
    assert!(try_parse(&["--max-size", "sixty", "a"]).is_err());
}

#[test]
fn backend_by_name() {
    assert_eq!(parse(&["--backend", "software", "a"]).backend, Backend::Software);
    assert!(try_parse(&["--backend", "nope", "a"]).is_err());
}

#[test]
fn threads_flag() {
    assert_eq!(parse(&["-T", "3", "a", "b"]).threads, 3);
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived settings
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn display_level_bounds() {
    assert_eq!(parse(&["a"]).display_level(), 2);
    assert_eq!(parse(&["-v", "a"]).display_level(), 3);
    assert_eq!(parse(&["-vvvvvv", "a"]).display_level(), 4);
    assert_eq!(parse(&["-q", "a"]).display_level(), 1);
    assert_eq!(parse(&["-qqqqq", "a"]).display_level(), 0);
}

#[test]
fn decoder_config_layering() {
    let cli = parse(&["a"]);
    assert_eq!(
        cli.decoder_config(None).max_decompressed_size,
        DEFAULT_MAX_DECOMPRESSED_SIZE
    );
    assert_eq!(cli.decoder_config(Some("1M")).max_decompressed_size, 1 << 20);

    let cli = parse(&["--max-size", "2K", "a"]);
    assert_eq!(cli.decoder_config(Some("1M")).max_decompressed_size, 2048);
}

#[test]
fn output_requires_single_input() {
    let cli = parse(&["-o", "out.json", "a", "b"]);
    let err = cli.validate(2).unwrap_err();
    assert!(err.to_string().contains("exactly one"), "{err}");
    assert!(cli.validate(1).is_ok());
}

#[test]
fn output_paths() {
    let cli = parse(&["x"]);
    assert_eq!(
        cli.output_for(Path::new("p/search.json.mozlz4")),
        Some(PathBuf::from("p/search.json.mozlz4.json"))
    );
    assert_eq!(cli.output_for(Path::new("-")), None);

    let cli = parse(&["-c", "x"]);
    assert_eq!(cli.output_for(Path::new("a.jsonlz4")), None);

    let cli = parse(&["-o", "dest.json", "x"]);
    assert_eq!(
        cli.output_for(Path::new("a.jsonlz4")),
        Some(PathBuf::from("dest.json"))
    );

    let cli = parse(&["-o", "-", "x"]);
    assert_eq!(cli.output_for(Path::new("a.jsonlz4")), None);
}

#[test]
fn stdio_placeholder() {
    assert!(is_stdio(Path::new("-")));
    assert!(!is_stdio(Path::new("./-")));
}
