#![cfg(feature = "cli")]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "lenprefix-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn run_with_stdin(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lenprefix"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("lenprefix should start");

    {
        let mut stdin = child.stdin.take().expect("stdin should be piped");
        stdin.write_all(input).expect("stdin should accept input");
    }

    child.wait_with_output().expect("lenprefix should finish")
}

#[test]
fn frames_stdin_to_stdout() {
    let out = run_with_stdin(&[], b"abc");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(out.stdout, b"3:abc");
}

#[test]
fn empty_stdin_is_zero_frame() {
    let out = run_with_stdin(&[], b"");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"0:");
}

#[test]
fn binary_input_passes_through_unescaped() {
    let input: Vec<u8> = (0..=255u8).chain(*b"a\x00:b\n").collect();
    let out = run_with_stdin(&[], &input);
    assert!(out.status.success());

    let mut expected = format!("{}:", input.len()).into_bytes();
    expected.extend_from_slice(&input);
    assert_eq!(out.stdout, expected);
}

#[test]
fn large_input_crosses_read_chunks() {
    let input = vec![b'a'; 100_000];
    let out = run_with_stdin(&[], &input);
    assert!(out.status.success());
    assert_eq!(&out.stdout[..7], b"100000:");
    assert_eq!(out.stdout.len(), 7 + input.len());
}

#[test]
fn logs_stay_off_stdout() {
    let out = run_with_stdin(&["--log-level", "trace", "--log-format", "json"], b"xyz");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"3:xyz");
    assert!(String::from_utf8_lossy(&out.stderr).contains("encoded input"));
}

#[test]
fn reads_and_writes_files() {
    let dir = unique_temp_dir("files");
    let input = dir.join("in.bin");
    let output = dir.join("out.bin");
    std::fs::write(&input, b"hello").expect("input should be writable");

    let status = Command::new(env!("CARGO_BIN_EXE_lenprefix"))
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .status()
        .expect("lenprefix should run");

    assert!(status.success());
    assert_eq!(std::fs::read(&output).expect("output should exist"), b"5:hello");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn input_and_output_may_be_the_same_file() {
    let dir = unique_temp_dir("same-file");
    let data = dir.join("data.bin");
    std::fs::write(&data, b"hello").expect("data should be writable");

    let status = Command::new(env!("CARGO_BIN_EXE_lenprefix"))
        .arg("--input")
        .arg(&data)
        .arg("--output")
        .arg(&data)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .status()
        .expect("lenprefix should run");

    assert!(status.success());
    assert_eq!(std::fs::read(&data).expect("data should exist"), b"5:hello");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
#[cfg(unix)]
fn failed_read_leaves_existing_output_untouched() {
    let dir = unique_temp_dir("failed-read");
    let output = dir.join("out.bin");
    std::fs::write(&output, b"precious").expect("output should be writable");

    // Opening a directory succeeds on unix; reading from it fails with EISDIR.
    let out = Command::new(env!("CARGO_BIN_EXE_lenprefix"))
        .arg("--input")
        .arg(&dir)
        .arg("--output")
        .arg(&output)
        .stdin(Stdio::null())
        .output()
        .expect("lenprefix should run");

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("error: reading input failed"));
    assert_eq!(std::fs::read(&output).expect("output should exist"), b"precious");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_file_fails_without_output() {
    let dir = unique_temp_dir("missing");
    let out = Command::new(env!("CARGO_BIN_EXE_lenprefix"))
        .arg("--input")
        .arg(dir.join("absent.bin"))
        .stdin(Stdio::null())
        .output()
        .expect("lenprefix should run");

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("error: failed opening"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn rejects_unexpected_arguments() {
    let out = run_with_stdin(&["surprise"], b"");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}
