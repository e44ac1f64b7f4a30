// e2e/cli_integration.rs: CLI integration tests
//
// Runs the `mozlz4` binary as a black box with std::process::Command.
// Covers default output naming, stdout and stdin streaming, test and list
// modes, overwrite protection, partial failures, and exit codes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use mozlz4::container::wrap_block;
use tempfile::TempDir;

/// Locate the `mozlz4` binary produced by Cargo.
fn mozlz4_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_mozlz4") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("mozlz4");
    p
}

fn container_for(data: &[u8]) -> Vec<u8> {
    wrap_block(data.len() as u32, &lz4_flex::block::compress(data))
}

/// TempDir holding `bookmarks.jsonlz4` and the JSON it decodes to.
fn make_backup() -> (TempDir, PathBuf, Vec<u8>) {
    let dir = TempDir::new().unwrap();
    let json = br#"{"guid":"root________","children":[{"title":"Mozilla","uri":"https://www.mozilla.org/"}]}"#
        .repeat(50);
    let path = dir.path().join("bookmarks.jsonlz4");
    fs::write(&path, container_for(&json)).unwrap();
    (dir, path, json)
}

fn arg(p: &Path) -> &str {
    p.to_str().unwrap()
}

// ── 1. Default decompression ─────────────────────────────────────────────────

#[test]
fn test_cli_writes_json_next_to_input() {
    let (dir, input, json) = make_backup();
    let status = Command::new(mozlz4_bin())
        .arg(arg(&input))
        .status()
        .expect("failed to run mozlz4");
    assert!(status.success());
    assert_eq!(fs::read(dir.path().join("bookmarks.json")).unwrap(), json);
}

// ── 2. Stdout / stdin ────────────────────────────────────────────────────────

#[test]
fn test_cli_stdout() {
    let (_dir, input, json) = make_backup();
    let out = Command::new(mozlz4_bin())
        .args(["-c", arg(&input)])
        .output()
        .expect("failed to run mozlz4");
    assert!(out.status.success());
    assert_eq!(out.stdout, json);
}

#[test]
fn test_cli_stdin_to_stdout() {
    let (_dir, input, json) = make_backup();
    let raw = fs::read(&input).unwrap();
    let mut child = Command::new(mozlz4_bin())
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn mozlz4");
    child.stdin.take().unwrap().write_all(&raw).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, json);
}

// ── 3. Test mode ─────────────────────────────────────────────────────────────

#[test]
fn test_cli_test_mode() {
    let (dir, input, _) = make_backup();
    let status = Command::new(mozlz4_bin())
        .args(["-t", arg(&input)])
        .status()
        .unwrap();
    assert!(status.success());
    assert!(!dir.path().join("bookmarks.json").exists());
}

#[test]
fn test_cli_test_mode_detects_corruption() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("corrupt.jsonlz4");
    fs::write(&input, wrap_block(64, &[0x10, b'a', 0x09, 0x00])).unwrap();
    let out = Command::new(mozlz4_bin())
        .args(["-t", arg(&input)])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("offset 9"), "stderr: {stderr}");
}

// ── 4. List mode ─────────────────────────────────────────────────────────────

#[test]
fn test_cli_list() {
    let (_dir, input, json) = make_backup();
    let out = Command::new(mozlz4_bin())
        .args(["-l", arg(&input)])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Declared"), "stdout: {stdout}");
    assert!(stdout.contains(&json.len().to_string()), "stdout: {stdout}");
    assert!(stdout.contains("bookmarks.jsonlz4"), "stdout: {stdout}");
}

// ── 5. Overwrite protection ──────────────────────────────────────────────────

#[test]
fn test_cli_refuses_to_overwrite() {
    let (dir, input, json) = make_backup();
    let output = dir.path().join("bookmarks.json");
    fs::write(&output, b"keep").unwrap();

    let out = Command::new(mozlz4_bin()).arg(arg(&input)).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("already exists"));
    assert_eq!(fs::read(&output).unwrap(), b"keep");

    let status = Command::new(mozlz4_bin())
        .args(["-f", arg(&input)])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&output).unwrap(), json);
}

// ── 6. Partial failure ───────────────────────────────────────────────────────

#[test]
fn test_cli_continues_after_failure() {
    let (dir, good, json) = make_backup();
    let bad = dir.path().join("aaa.jsonlz4");
    fs::write(&bad, b"{\"plain\":\"json\"}").unwrap();

    let out = Command::new(mozlz4_bin())
        .args([arg(&bad), arg(&good)])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("aaa.jsonlz4"), "stderr: {stderr}");
    assert!(stderr.contains("signature"), "stderr: {stderr}");
    assert_eq!(fs::read(dir.path().join("bookmarks.json")).unwrap(), json);
    assert!(!dir.path().join("aaa.json").exists());
}

// ── 7. Size cap ──────────────────────────────────────────────────────────────

#[test]
fn test_cli_max_size_flag_and_env() {
    let (dir, input, _) = make_backup();

    let out = Command::new(mozlz4_bin())
        .args(["-t", "--max-size", "1K", arg(&input)])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("exceeds maximum"));

    let out = Command::new(mozlz4_bin())
        .args(["-t", arg(&input)])
        .env("MOZLZ4_MAX_SIZE", "1K")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));

    // The flag wins over the environment.
    let status = Command::new(mozlz4_bin())
        .args(["-t", "--max-size", "1M", arg(&input)])
        .env("MOZLZ4_MAX_SIZE", "1K")
        .status()
        .unwrap();
    assert!(status.success());
    drop(dir);
}

// ── 8. Usage errors ──────────────────────────────────────────────────────────

#[test]
fn test_cli_no_arguments_is_usage_error() {
    let out = Command::new(mozlz4_bin()).output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn test_cli_unknown_backend() {
    let (_dir, input, _) = make_backup();
    let out = Command::new(mozlz4_bin())
        .args(["--backend", "quantum", arg(&input)])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("software"));
}

#[test]
fn test_cli_version() {
    let out = Command::new(mozlz4_bin()).arg("--version").output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_usage_errors_print_even_when_quiet() {
    let (dir, input, _) = make_backup();
    let out = Command::new(mozlz4_bin())
        .args(["-qqq", "-o", "x.json", arg(&input), arg(&input)])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("exactly one"));

    let empty = dir.path().join("empty");
    fs::create_dir(&empty).unwrap();
    let out = Command::new(mozlz4_bin())
        .args(["-qqq", "-r", arg(&empty)])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("no input files"));
}
