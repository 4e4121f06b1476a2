//! Integration tests for the conway_term binary, driven through stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn life_cmd() -> Command {
    Command::cargo_bin("conway_term").unwrap()
}

#[test]
fn test_startup_shows_help_and_board() {
    life_cmd()
        .write_stdin("q")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Commands"))
        .stdout(predicate::str::contains("+...............\n................\n"));
}

#[test]
fn test_nohelp_prints_only_board() {
    life_cmd()
        .args(["--nohelp", "2", "3"])
        .write_stdin("q")
        .assert()
        .success()
        .stdout("+..\n...\n\n");
}

#[test]
fn test_single_size_makes_square_grid() {
    life_cmd()
        .args(["--nohelp", "3"])
        .write_stdin("q")
        .assert()
        .success()
        .stdout("+..\n...\n...\n\n");
}

#[test]
fn test_edit_and_step() {
    // Draw a horizontal blinker on row 2, hide the cursor, step once
    life_cmd()
        .args(["--nohelp", "5"])
        .write_stdin("ssdxdxdxv\rf\rq")
        .assert()
        .success()
        .stdout(predicate::str::contains(".....\n.....\n.ooo.\n.....\n.....\n\n"))
        .stdout(predicate::str::contains(".....\n..o..\n..o..\n..o..\n.....\n\n"));
}

#[test]
fn test_unrecognized_character_is_reported() {
    life_cmd()
        .args(["--nohelp", "2"])
        .write_stdin("?q")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized character: ? #63"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    life_cmd().args(["--nohelp"]).write_stdin("x").assert().success();
}

#[test]
fn test_debug_info() {
    life_cmd()
        .args(["--nohelp", "--delay", "100", "4", "6"])
        .write_stdin("lz")
        .assert()
        .success()
        .stdout(predicate::str::contains("rows           : 4"))
        .stdout(predicate::str::contains("columns        : 7"))
        .stdout(predicate::str::contains("printer delay  : 100 ms"));
}

#[test]
fn test_run_mode_stops_on_enter() {
    life_cmd()
        .args(["--nohelp", "--pattern", "glider", "8"])
        .write_stdin("r\n\nzq")
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Debug Info"));
}

#[test]
fn test_board_script() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("blinker.txt");
    fs::write(&script, "c\n5\n5\n\n\n.ooo.\n").unwrap();

    life_cmd()
        .arg("--nohelp")
        .arg(&script)
        .write_stdin("v\rf\rq")
        .assert()
        .success()
        .stdout(predicate::str::contains(".....\n.....\n.ooo.\n.....\n.....\n\n"))
        .stdout(predicate::str::contains(".....\n..o..\n..o..\n..o..\n.....\n\n"));
}

#[test]
fn test_command_script() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("draw.txt");
    fs::write(&script, "i\nx # top-left corner\nsdx\n").unwrap();

    life_cmd()
        .args(["--nohelp", "3"])
        .arg(&script)
        .write_stdin("q")
        .assert()
        .success()
        .stdout("o..\n.X.\n...\n\n");
}

#[test]
fn test_bad_script_is_logged_and_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("broken.txt");
    fs::write(&script, "c\nwide\n3\n").unwrap();

    life_cmd()
        .args(["--nohelp", "2"])
        .arg(&script)
        .write_stdin("q")
        .assert()
        .success()
        .stdout("+.\n..\n\n")
        .stderr(predicate::str::contains("script not applied"));
}

#[test]
fn test_missing_file_is_treated_as_size() {
    life_cmd()
        .args(["--nohelp", "no-such-file.txt", "2"])
        .write_stdin("q")
        .assert()
        .success()
        .stdout("+.\n..\n..\n..\n..\n..\n..\n..\n..\n..\n\n");
}

#[test]
fn test_hyphenated_arguments_are_ignored() {
    life_cmd()
        .args(["--nohelp", "-x", "3", "--nohelp"])
        .write_stdin("q")
        .assert()
        .success()
        .stdout("+..\n...\n...\n...\n...\n...\n...\n...\n...\n...\n\n");
}

#[test]
fn test_oversized_grid_falls_back_to_default() {
    life_cmd()
        .args(["--nohelp", "5000000000"])
        .write_stdin("z")
        .assert()
        .success()
        .stdout(predicate::str::contains("rows           : 10"))
        .stdout(predicate::str::contains("columns        : 16"))
        .stderr(predicate::str::contains("using the default 10x16 grid"));
}
