//! Integration tests for the `resolve` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_resolve_prints_true_case() {
    let env = TestEnv::new().with_robot_tree();

    env.unix_command()
        .args(["resolve", "MAPS/office.map"])
        .assert()
        .success()
        .stdout("Maps/Office.MAP\n");
}

#[test]
fn test_resolve_accepts_alternate_separator() {
    let env = TestEnv::new().with_robot_tree();

    env.unix_command()
        .args(["resolve", "maps\\lab\\floor1.MAP"])
        .assert()
        .success()
        .stdout("Maps/Lab/Floor1.map\n");
}

#[test]
fn test_resolve_nested_with_windows_separator() {
    let env = TestEnv::new().with_robot_tree();

    env.command()
        .args(["--separator", "windows", "resolve", "maps\\lab\\floor1.MAP"])
        .assert()
        .success()
        .stdout("Maps\\Lab\\Floor1.map\n");
}

#[test]
fn test_resolve_strips_quotes() {
    let env = TestEnv::new().with_robot_tree();

    env.unix_command()
        .args(["resolve", "\"params/P3DX.P\""])
        .assert()
        .success()
        .stdout("Params/p3dx.p\n");
}

#[test]
fn test_resolve_full_path() {
    let env = TestEnv::new().with_robot_tree();

    let output = env
        .unix_command()
        .args(["resolve", "--full", "params/p3dx.p"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let printed = String::from_utf8(output.stdout).unwrap();
    let printed = std::path::PathBuf::from(printed.trim_end());
    assert!(printed.is_file());
    assert!(printed.ends_with("p3dx.p"));
}

#[test]
fn test_resolve_with_base_dir() {
    let env = TestEnv::new().with_robot_tree();
    let maps = env.path().join("Maps");

    env.unix_command()
        .arg("--base-dir")
        .arg(&maps)
        .args(["resolve", "lab"])
        .assert()
        .success()
        .stdout("Lab\n");
}

#[test]
fn test_resolve_missing_component() {
    let env = TestEnv::new().with_robot_tree();

    env.unix_command()
        .args(["resolve", "maps/garage.map"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'garage.map' does not exist"));
}

#[test]
fn test_resolve_hidden_entry() {
    let env = TestEnv::new().with_robot_tree();

    env.unix_command()
        .args(["resolve", ".hidden"])
        .assert()
        .code(1);
}

#[test]
fn test_resolve_verbose_logs_steps() {
    let env = TestEnv::new().with_robot_tree();

    env.unix_command()
        .args(["--verbose", "resolve", "maps"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG: Matched 'maps' to 'Maps'"));
}

#[test]
fn test_resolve_quiet_still_reports_error() {
    let env = TestEnv::new().with_robot_tree();

    env.unix_command()
        .args(["--quiet", "resolve", "nothing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("INFO").not());
}
