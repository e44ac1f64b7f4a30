// Integration tests for the CLI driver, called in-process.
//
//   - exit codes for success, partial failure, and bad usage
//   - outputs written only for inputs that decode
//   - --force, --test, --list, --recursive

use std::fs;
use std::path::Path;

use clap::Parser;
use mozlz4::cli::args::Cli;
use mozlz4::cli::dispatch::{format_info_row, run};
use mozlz4::container::wrap_block;
use mozlz4::file::read_header;
use tempfile::TempDir;

fn cli(argv: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("mozlz4").chain(argv.iter().copied())).unwrap()
}

fn write_container(path: &Path, data: &[u8]) {
    let block = lz4_flex::block::compress(data);
    fs::write(path, wrap_block(data.len() as u32, &block)).unwrap();
}

fn s(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn decodes_to_json_sibling() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bookmarks.jsonlz4");
    write_container(&input, b"{\"children\":[]}");

    assert_eq!(run(&cli(&["-q", s(&input)])), 0);
    assert_eq!(
        fs::read(dir.path().join("bookmarks.json")).unwrap(),
        b"{\"children\":[]}"
    );
}

#[test]
fn one_bad_file_does_not_stop_the_rest() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.jsonlz4");
    let bad = dir.path().join("bad.jsonlz4");
    write_container(&good, b"[1,2,3]");
    fs::write(&bad, b"not a container at all").unwrap();

    assert_eq!(run(&cli(&["-qq", s(&bad), s(&good)])), 1);
    assert!(dir.path().join("good.json").exists());
    assert!(!dir.path().join("bad.json").exists());
}

#[test]
fn existing_output_needs_force() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("a.jsonlz4");
    let output = dir.path().join("a.json");
    write_container(&input, b"new");
    fs::write(&output, b"old").unwrap();

    assert_eq!(run(&cli(&["-qq", s(&input)])), 1);
    assert_eq!(fs::read(&output).unwrap(), b"old");

    assert_eq!(run(&cli(&["-qq", "-f", s(&input)])), 0);
    assert_eq!(fs::read(&output).unwrap(), b"new");
}

#[test]
fn test_mode_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("t.jsonlz4");
    write_container(&input, b"{}");

    assert_eq!(run(&cli(&["-qq", "-t", s(&input)])), 0);
    assert!(!dir.path().join("t.json").exists());
}

#[test]
fn test_mode_flags_corruption() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("t.jsonlz4");
    fs::write(&input, wrap_block(10, &[0x10, b'a', 0x05, 0x00])).unwrap();
    assert_eq!(run(&cli(&["-qq", "-t", s(&input)])), 1);
}

#[test]
fn explicit_output_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.mozlz4");
    let output = dir.path().join("elsewhere.txt");
    write_container(&input, b"payload");

    assert_eq!(run(&cli(&["-qq", "-o", s(&output), s(&input)])), 0);
    assert_eq!(fs::read(&output).unwrap(), b"payload");
}

#[test]
fn explicit_output_with_two_inputs_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.jsonlz4");
    let b = dir.path().join("b.jsonlz4");
    write_container(&a, b"a");
    write_container(&b, b"b");
    let out = dir.path().join("o.json");
    assert_eq!(run(&cli(&["-qq", "-o", s(&out), s(&a), s(&b)])), 1);
    assert!(!out.exists());
}

#[test]
fn recursive_picks_up_backups() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("bookmarkbackups");
    fs::create_dir(&sub).unwrap();
    write_container(&sub.join("b1.jsonlz4"), b"one");
    write_container(&sub.join("b2.jsonlz4"), b"two");
    fs::write(sub.join("readme.txt"), b"skip me").unwrap();

    assert_eq!(run(&cli(&["-qq", "-r", "-T", "2", s(dir.path())])), 0);
    assert_eq!(fs::read(sub.join("b1.json")).unwrap(), b"one");
    assert_eq!(fs::read(sub.join("b2.json")).unwrap(), b"two");
}

#[test]
fn max_size_flag_rejects_large_documents() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("big.jsonlz4");
    write_container(&input, &vec![b' '; 4096]);
    assert_eq!(run(&cli(&["-qq", "--max-size", "1K", s(&input)])), 1);
    assert!(!dir.path().join("big.json").exists());
}

#[test]
fn list_mode_reads_headers() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("l.jsonlz4");
    write_container(&input, &b"x".repeat(1000));
    assert_eq!(run(&cli(&["-qq", "-l", s(&input)])), 0);
    assert!(!dir.path().join("l.json").exists());

    let info = read_header(&input).unwrap();
    assert_eq!(info.header.declared_size, 1000);
    let row = format_info_row(&info, &input);
    assert!(row.contains("1000"), "{row}");
    assert!(row.ends_with(s(&input)), "{row}");
}

#[test]
fn list_mode_fails_on_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.jsonlz4");
    assert_eq!(run(&cli(&["-qq", "-l", s(&missing)])), 1);
}
