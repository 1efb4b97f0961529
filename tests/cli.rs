use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn bfx() -> Command {
    Command::cargo_bin("bfx").unwrap()
}

/// Write `contents` to a temp file and hand back its handle.
fn script(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    bfx()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn runs_a_script_from_a_file() {
    let file = script("++++++++[>++++++++<-]>+.");
    bfx().arg(file.path()).assert().success().stdout("A");
}

#[test]
fn comments_may_hide_brackets() {
    let file = script("+++ /* not a loop: ] */ .");
    bfx().arg(file.path()).assert().success().stdout("\u{3}");
}

#[test]
fn reads_stdin_one_line_at_a_time() {
    let file = script(",.>,.");
    bfx()
        .arg(file.path())
        .write_stdin("Hi\n")
        .assert()
        .success()
        .stdout("Hi");
}

#[test]
fn dump_goes_to_stderr_not_stdout() {
    let file = script("+++#");
    bfx()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("pc=0003 ptr=0000")
                .and(predicate::str::contains("0000000: 03")),
        );
}

#[test]
fn program_output_stays_clear_of_diagnostics() {
    let file = script("+++#.");
    bfx()
        .arg(file.path())
        .assert()
        .success()
        .stdout("\u{3}")
        .stderr(predicate::str::contains("\u{3}").not());
}

#[test]
fn unbalanced_brackets_fail_to_load() {
    let file = script("[++");
    bfx()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("loop begin/end"));
}

#[test]
fn strict_mode_reports_underflow() {
    let file = script("-");
    bfx()
        .arg("--strict")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("underflow"));
}

#[test]
fn permissive_mode_ignores_underflow() {
    let file = script("-.");
    bfx().arg(file.path()).assert().success().stdout("\u{0}");
}

#[test]
fn exhausted_input_is_an_error() {
    let file = script(",");
    bfx()
        .arg(file.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input exhausted"));
}

#[test]
fn missing_script_file_fails() {
    bfx()
        .arg("no-such-script.bfx")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
