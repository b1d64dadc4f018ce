//! End-to-end tests of the command-line binary

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tsv-transpose"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn transposes_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.tsv");
    let output = dir.path().join("out.tsv");
    fs::write(&input, "id\tx\ty\nr1\t1\t2\nr2\t3\n").unwrap();

    let status = bin()
        .arg(&input)
        .arg(&output)
        .args(["--line-ending", "lf"])
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "id\tr1\tr2\nx\t1\t3\ny\t2\n");
}

#[test]
fn reads_stdin_and_writes_stdout() {
    for args in [&["-"][..], &[][..]] {
        let mut child = bin()
            .args(args)
            .args(["--line-ending", "lf"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(b"a\tb\tc\r\nd\te\r\n")
            .unwrap();

        let out = child.wait_with_output().unwrap();
        assert!(out.status.success());
        assert_eq!(out.stdout, b"a\td\nb\te\nc\n");
        assert!(out.stderr.is_empty());
    }
}

#[test]
fn empty_input_produces_no_output() {
    let out = bin().stdin(Stdio::null()).output().unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_input_exits_with_one_and_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.tsv");
    let output = dir.path().join("out.tsv");

    let out = bin().arg(&input).arg(&output).output().unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("can't open input file"), "stderr: {stderr}");
}

#[test]
fn unwritable_output_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.tsv");
    fs::write(&input, "a\tb\n").unwrap();

    let out = bin()
        .arg(&input)
        .arg(dir.path().join("absent").join("out.tsv"))
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("can't open output file"), "stderr: {stderr}");
}

#[test]
fn extra_arguments_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.tsv");
    let output = dir.path().join("out.tsv");
    fs::write(&input, "a\tb\n").unwrap();

    let out = bin()
        .arg(&input)
        .arg(&output)
        .args(["third", "fourth", "--line-ending", "lf"])
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(fs::read_to_string(&output).unwrap(), "a\nb\n");
    assert!(!dir.path().join("third").exists());
}

#[test]
fn hyphen_path_after_separator() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("-x.tsv"), "1\t2\n").unwrap();

    let out = bin()
        .current_dir(dir.path())
        .args(["--line-ending", "lf", "--", "-x.tsv", "-y.tsv"])
        .output()
        .unwrap();

    assert!(out.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("-y.tsv")).unwrap(), "1\n2\n");
}
