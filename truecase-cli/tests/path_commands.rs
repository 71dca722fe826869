//! Integration tests for the string-level path commands:
//! `normalize`, `join`, `tokenize` and `split`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// normalize
// ============================================================================

#[test]
fn test_normalize_unix() {
    let env = TestEnv::new();

    env.unix_command()
        .args(["normalize", "a\\b/c\\"])
        .assert()
        .success()
        .stdout("a/b/c/\n");
}

#[test]
fn test_normalize_windows() {
    let env = TestEnv::new();

    env.command()
        .args(["--separator", "windows", "normalize", "a/b\\c"])
        .assert()
        .success()
        .stdout("a\\b\\c\n");
}

#[test]
fn test_normalize_trailing() {
    let env = TestEnv::new();

    env.unix_command()
        .args(["normalize", "--trailing", "maps"])
        .assert()
        .success()
        .stdout("maps/\n");
}

#[test]
fn test_normalize_trailing_without_room() {
    let env = TestEnv::new();

    env.unix_command()
        .args(["--capacity", "4", "normalize", "--trailing", "maps"])
        .assert()
        .success()
        .stdout("maps\n");
}

// ============================================================================
// join
// ============================================================================

#[test]
fn test_join() {
    let env = TestEnv::new();

    env.unix_command()
        .args(["join", "usr\\local", "Aria"])
        .assert()
        .success()
        .stdout("usr/local/Aria/\n");
}

#[test]
fn test_join_truncates_to_capacity() {
    let env = TestEnv::new();

    env.unix_command()
        .args(["--capacity", "6", "join", "maps", "office"])
        .assert()
        .success()
        .stdout("maps/o\n");
}

#[test]
fn test_zero_capacity_rejected() {
    let env = TestEnv::new();

    env.unix_command()
        .args(["--capacity", "0", "join", "a", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity"));
}

// ============================================================================
// tokenize
// ============================================================================

#[test]
fn test_tokenize_lines() {
    let env = TestEnv::new();

    env.unix_command()
        .args(["tokenize", "//usr\\\\local/./Aria/"])
        .assert()
        .success()
        .stdout("usr\nlocal\n.\nAria\n");
}

#[test]
fn test_tokenize_json() {
    let env = TestEnv::new();

    let output = env
        .unix_command()
        .args(["tokenize", "--json", "maps/office.map"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, ["maps", "office.map"]);
}

#[test]
fn test_tokenize_empty() {
    let env = TestEnv::new();

    env.unix_command()
        .args(["tokenize", "--json", "///"])
        .assert()
        .success()
        .stdout("[]\n");
}

// ============================================================================
// split
// ============================================================================

#[test]
fn test_split() {
    let env = TestEnv::new();

    env.unix_command()
        .args(["split", "maps\\lab/floor1.map"])
        .assert()
        .success()
        .stdout("maps/lab\nfloor1.map\n");
}

#[test]
fn test_split_bare_name() {
    let env = TestEnv::new();

    env.unix_command()
        .args(["split", "floor1.map"])
        .assert()
        .success()
        .stdout("\nfloor1.map\n");
}

#[test]
fn test_split_empty_path() {
    let env = TestEnv::new();

    env.unix_command()
        .args(["split", ""])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("must not be empty"));
}
