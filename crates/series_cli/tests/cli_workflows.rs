//! End-to-end tests of the `tseries` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn cli_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tseries")
}

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(cli_bin())
        .current_dir(dir)
        .env_remove("TSERIES_POLICY")
        .env_remove("TSERIES_FORMAT")
        .env_remove("TSERIES_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to spawn tseries")
}

fn assert_cli_success(output: &Output) {
    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn stdout_rows(output: &Output) -> Vec<Vec<String>> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.split_whitespace().map(str::to_string).collect())
        .collect()
}

#[test]
fn query_linear_interpolates_and_clamps() {
    let dir = TempDir::new().unwrap();
    let data = write_file(&dir, "data.csv", "x,y\n20,100\n0,0\n10,10\n");

    let output = run_cli(
        dir.path(),
        &["query", "-i", data.to_str().unwrap(), "-p", "linear", "-f", "csv", "--", "-5", "15", "25"],
    );
    assert_cli_success(&output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "x,y\n-5,0\n15,55\n25,100\n"
    );
}

#[test]
fn query_step_first_inserted_wins_on_tie() {
    let dir = TempDir::new().unwrap();
    let data = write_file(&dir, "data.csv", "x,y\n1,10\n5,50\n");

    let output = run_cli(
        dir.path(),
        &["query", "-i", data.to_str().unwrap(), "-p", "step", "3", "4"],
    );
    assert_cli_success(&output);
    let rows = stdout_rows(&output);
    assert_eq!(rows[1], vec!["3", "10"]);
    assert_eq!(rows[2], vec!["4", "50"]);
}

#[test]
fn query_exact_missing_key_fails() {
    let dir = TempDir::new().unwrap();
    let data = write_file(&dir, "data.csv", "x,y\n1,10\n5,50\n");

    let output = run_cli(
        dir.path(),
        &["query", "-i", data.to_str().unwrap(), "-p", "exact", "3"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: No value at x = 3"), "stderr:\n{stderr}");
    assert!(!stderr.contains("NoValueAt"));
}

#[test]
fn query_json_output() {
    let dir = TempDir::new().unwrap();
    let data = write_file(&dir, "data.csv", "x,y\n0,0\n10,100\n");

    let output = run_cli(
        dir.path(),
        &["query", "-i", data.to_str().unwrap(), "-f", "json", "5"],
    );
    assert_cli_success(&output);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["x"].as_f64(), Some(5.0));
    assert_eq!(value[0]["y"].as_f64(), Some(50.0));
}

#[test]
fn config_file_in_working_directory_is_used() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "tseries.toml", "policy = \"step\"\ndelimiter = \";\"\n");
    let data = write_file(&dir, "data.csv", "x;y\n1;10\n4;40\n");

    let output = run_cli(dir.path(), &["query", "-i", data.to_str().unwrap(), "3"]);
    assert_cli_success(&output);
    assert_eq!(stdout_rows(&output)[1], vec!["3", "40"]);
}

#[test]
fn env_and_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "custom.toml", "policy = \"exact\"\n");
    let data = write_file(&dir, "data.csv", "x,y\n1,10\n4,40\n");

    let env_output = Command::new(cli_bin())
        .current_dir(dir.path())
        .env("TSERIES_POLICY", "step")
        .env_remove("RUST_LOG")
        .args(["-c", config.to_str().unwrap(), "query", "-i", data.to_str().unwrap(), "3"])
        .output()
        .unwrap();
    assert_cli_success(&env_output);
    assert_eq!(stdout_rows(&env_output)[1], vec!["3", "40"]);

    let flag_output = run_cli(
        dir.path(),
        &["-c", config.to_str().unwrap(), "query", "-i", data.to_str().unwrap(), "-p", "linear", "2.5"],
    );
    assert_cli_success(&flag_output);
    assert_eq!(stdout_rows(&flag_output)[1], vec!["2.5", "25"]);
}

#[test]
fn show_linear_sorts_and_leaves_file_order_for_step() {
    let dir = TempDir::new().unwrap();
    let data = write_file(&dir, "data.csv", "x,y\n5,50\n1,10\n");

    let linear = run_cli(dir.path(), &["show", "-i", data.to_str().unwrap(), "-p", "linear"]);
    assert_cli_success(&linear);
    let rows = stdout_rows(&linear);
    assert_eq!(rows, vec![vec!["x", "y"], vec!["1", "10"], vec!["5", "50"]]);

    let step = run_cli(dir.path(), &["show", "-i", data.to_str().unwrap(), "-p", "step"]);
    assert_cli_success(&step);
    let rows = stdout_rows(&step);
    assert_eq!(rows, vec![vec!["x", "y"], vec!["5", "50"], vec!["1", "10"]]);
}

#[test]
fn check_reports_domain() {
    let dir = TempDir::new().unwrap();
    let data = write_file(&dir, "data.csv", "x,y\n5,50\n-1,10\n2,0\n");

    let output = run_cli(dir.path(), &["check", "-i", data.to_str().unwrap()]);
    assert_cli_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Points:  3"));
    assert!(stdout.contains("Domain:  [-1, 5]"));
    assert!(stdout.contains("Sorted:  no"));
    assert!(stdout.contains("exact    ok     y(2) = 0"));
    assert!(stdout.contains("step     ok     y(2) = 0"));
    assert!(stdout.contains("linear   ok     y(2) = 0"));
}

#[test]
fn check_reports_missing_midpoint_for_exact() {
    let dir = TempDir::new().unwrap();
    let data = write_file(&dir, "data.csv", "x,y
0,0
4,40
");

    let output = run_cli(dir.path(), &["check", "-i", data.to_str().unwrap()]);
    assert_cli_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("exact    ok     y(2) = no value"));
    assert!(stdout.contains("step     ok     y(2) = 0"));
    assert!(stdout.contains("linear   ok     y(2) = 20"));
}

#[test]
fn check_rejects_duplicate_keys() {
    let dir = TempDir::new().unwrap();
    let data = write_file(&dir, "data.csv", "x,y\n1,10\n1,20\n");

    let output = run_cli(dir.path(), &["check", "-i", data.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Duplicate key x = 1"), "stderr:\n{stderr}");
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &["query", "-i", "missing.csv", "1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: File not found: missing.csv"), "stderr:\n{stderr}");
}
