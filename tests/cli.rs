use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_fastq_remove_ids");

fn run_with_stdin(args: &[&str], stdin: &[u8]) -> std::process::Output {
    let mut child = Command::new(BIN)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn filters_stdin_to_stdout() {
    let dir = tempdir().unwrap();
    let accnos = dir.path().join("accnos.txt");
    fs::write(&accnos, "readA\n").unwrap();

    let out = run_with_stdin(
        &[accnos.to_str().unwrap()],
        b"@readA\nAC\n+\n!!\n@readB x\nGT\n+\n##\n",
    );
    assert!(out.status.success());
    assert_eq!(out.stdout, b"@readB x\nGT\n+\n##\n");
}

#[test]
fn dash_selects_standard_streams() {
    let dir = tempdir().unwrap();
    let accnos = dir.path().join("accnos.txt");
    fs::write(&accnos, "").unwrap();

    let out = run_with_stdin(
        &["-i", "-", "-o", "-", accnos.to_str().unwrap()],
        b"@r1\nA\n+\n!\n",
    );
    assert!(out.status.success());
    assert_eq!(out.stdout, b"@r1\nA\n+\n!\n");
}

#[test]
fn malformed_stdin_exits_nonzero() {
    let dir = tempdir().unwrap();
    let accnos = dir.path().join("accnos.txt");
    fs::write(&accnos, "").unwrap();

    let out = run_with_stdin(&[accnos.to_str().unwrap()], b"@r1\nACGT\n+\n!!!\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("does not match"));
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_accnos_is_a_usage_error() {
    let out = run_with_stdin(&[], b"");
    assert_eq!(out.status.code(), Some(2));
}
