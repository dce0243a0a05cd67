// tests/cli.rs
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn text_stats() -> Command {
    Command::new(env!("CARGO_BIN_EXE_text_stats"))
}

fn sample_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn shows_help() {
    text_stats()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--freq"))
        .stdout(predicate::str::contains("--top"));
}

#[test]
fn analyzes_file_argument() {
    let file = sample_file("First paragraph.\n\nSecond paragraph.\n\nThird.");
    text_stats()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("=== テキスト統計 ==="))
        .stdout(predicate::str::contains("段落数:         3"))
        .stdout(predicate::str::contains("単語出現頻度").not());
}

#[test]
fn reads_stdin_when_no_file_given() {
    text_stats()
        .write_stdin("最初の文。次の文。最後。")
        .assert()
        .success()
        .stdout(predicate::str::contains("文数:           3"))
        .stdout(predicate::str::contains("単語数:         1"));
}

#[test]
fn dash_reads_stdin() {
    text_stats()
        .arg("-")
        .write_stdin("hello こんにちは world")
        .assert()
        .success()
        .stdout(predicate::str::contains("単語数:         3"));
}

#[test]
fn frequency_block_respects_top() {
    text_stats()
        .args(["--freq", "--top", "2"])
        .write_stdin("apple banana apple cherry apple banana")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== 単語出現頻度 ===\n  apple: 3\n  banana: 2\n"))
        .stdout(predicate::str::contains("cherry").not());
}

#[test]
fn json_output_is_machine_readable() {
    let output = text_stats()
        .args(["--format", "json", "--freq"])
        .write_stdin("Hello world.")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["stats"]["characters"], 12);
    assert_eq!(value["stats"]["characters_no_spaces"], 11);
    assert_eq!(value["stats"]["words"], 2);
    assert_eq!(value["stats"]["lines"], 1);
    assert_eq!(value["stats"]["sentences"], 1);
    assert_eq!(value["stats"]["paragraphs"], 1);
    assert_eq!(value["frequencies"][0]["word"], "hello");
}

#[test]
fn empty_input_reports_zeros() {
    text_stats()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("文字数:         0"))
        .stdout(predicate::str::contains("行数:           0"));
}

#[test]
fn missing_file_fails_without_report() {
    let dir = tempfile::tempdir().unwrap();
    text_stats()
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn invalid_utf8_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0x66, 0x6F, 0x80]).unwrap();
    text_stats()
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn invalid_top_value_is_rejected() {
    text_stats()
        .args(["--top", "lots"])
        .write_stdin("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid number"));
}
