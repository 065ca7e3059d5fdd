// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{BROKEN, ONE_WHILE, TempDir, sample_tree};

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_count_loops"));
    cmd.env_remove("COUNT_LOOPS_LOG");
    cmd
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("count_loops"))
        .stdout(predicate::str::contains("--no-cpp"));
}

#[test]
fn shows_version() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn reports_sample_tree_as_json() {
    let dir = sample_tree();
    let output = bin().args(["--no-cpp", "--compact"]).arg(dir.path()).assert().success().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["totals"]["totfiles"], 2);
    assert_eq!(value["totals"]["totwhile"], 3);
    assert_eq!(value["totals"]["totdowhile"], 1);
    assert_eq!(value["totals"]["totfor"], 2);
}

#[test]
fn skipped_file_warns_but_succeeds() {
    let dir = TempDir::new("count_loops_cli_skip");
    dir.write_file("ok.c", ONE_WHILE);
    dir.write_file("bad.c", BROKEN);

    bin()
        .args(["--no-cpp", "--compact"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""filename":"ok.c""#))
        .stdout(predicate::str::contains("bad.c").not())
        .stderr(predicate::str::contains("bad.c"));
}

#[test]
fn quiet_silences_warnings() {
    let dir = TempDir::new("count_loops_cli_quiet");
    dir.write_file("bad.c", BROKEN);

    bin().args(["--no-cpp", "-qq"]).arg(dir.path()).assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn missing_root_fails() {
    let dir = TempDir::new("count_loops_cli_missing");
    bin().arg("--no-cpp").arg(dir.path().join("absent")).assert().failure().stderr(predicate::str::contains("Error"));
}

#[test]
fn invalid_define_is_rejected_by_parser() {
    bin().args(["-D", "1BAD", "."]).assert().failure();
}

#[test]
fn missing_preprocessor_skips_files() {
    let dir = TempDir::new("count_loops_cli_nocpp");
    dir.write_file("a.c", ONE_WHILE);

    bin()
        .args(["--cpp", "/definitely/not/a/cpp", "--compact"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""totfiles":0"#));
}

#[test]
fn writes_output_file() {
    let dir = TempDir::new("count_loops_cli_out");
    dir.write_file("src/a.c", ONE_WHILE);
    let out = dir.path().join("report.json");

    bin()
        .args(["--no-cpp", "-o"])
        .arg(&out)
        .arg(dir.path().join("src"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let text = std::fs::read_to_string(out).unwrap();
    assert!(text.contains("\"numwhile\": 1"));
}

#[test]
fn csv_format_prints_rows() {
    let dir = sample_tree();
    bin()
        .args(["--no-cpp", "--format", "csv"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("filename,numwhile,numdowhile,numfor\n"))
        .stdout(predicate::str::contains("\"b.c\",3,1,0\n"));
}

#[test]
fn dirs_format_prints_directory_totals() {
    let dir = sample_tree();
    bin()
        .args(["--no-cpp", "--format", "dirs", "--dir-depth", "1"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sub\",1,3,1,0,4\n"))
        .stdout(predicate::str::contains("\".\",1,0,0,2,2\n"));
}
