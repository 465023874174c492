//! Integration tests for the galley CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("task execution"));
}

/// Test bare invocation prints help instead of erroring
#[test]
fn test_no_subcommand_shows_help() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("galley"));
}

/// Test the version subcommand, plain and detailed
#[test]
fn test_version_command() {
    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("galley"));

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.args(["version", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust edition"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test the modes listing names all three modes with their program ids
#[test]
fn test_modes_lists_all_three() {
    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.arg("modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("sequential (1)"))
        .stdout(predicate::str::contains("concurrent (2)"))
        .stdout(predicate::str::contains("synchronized (3)"));
}

/// Test a sequential run prints exactly the classic lines, in order
#[test]
fn test_run_sequential_prints_contract_lines() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.current_dir(temp_dir.path())
        .args([
            "run",
            "--mode",
            "sequential",
            "--task",
            "espresso:30",
            "--task",
            "bagel:50",
        ])
        .assert()
        .success()
        .stdout(
            "Creating espresso...\nCreated espresso!\nCreating bagel...\nCreated bagel!\nTotal time = 0 seconds\n",
        );
}

/// Test the classic five-line scenario on the built-in workload. Slow by
/// nature: the tasks really sleep 2000ms and 3000ms.
#[test]
fn test_default_workload_sequential_reports_five_seconds() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["run", "--mode", "sequential"])
        .assert()
        .success()
        .stdout(
            "Creating coffee...\nCreated coffee!\nCreating toast...\nCreated toast!\nTotal time = 5 seconds\n",
        );
}

/// Test a concurrent run joins every task before the total line
#[test]
fn test_run_concurrent_joins_all_tasks_before_total() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    let assert = cmd
        .current_dir(temp_dir.path())
        .args([
            "run",
            "--mode",
            "concurrent",
            "--task",
            "quick:30",
            "--task",
            "slow:120",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let quick_done = stdout.find("Created quick!").expect("quick must finish");
    let slow_done = stdout.find("Created slow!").expect("slow must finish");
    let total = stdout.find("Total time =").expect("total line must be printed");
    assert!(quick_done < slow_done, "shorter task should finish first:\n{stdout}");
    assert!(slow_done < total, "total line must come last:\n{stdout}");
}

/// Test the classic program ids work as --mode aliases
#[test]
fn test_run_accepts_numeric_mode_alias() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["run", "--mode", "3", "--task", "espresso:20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating espresso..."));
}

/// Test the JSON report replaces the total line but not the task output
#[test]
fn test_run_json_report() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.current_dir(temp_dir.path())
        .args([
            "run",
            "--mode",
            "sequential",
            "--task",
            "espresso:20",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created espresso!"))
        .stdout(predicate::str::contains("\"mode\": \"sequential\""))
        .stdout(predicate::str::contains("\"elapsed_ms\""))
        .stdout(predicate::str::contains("Total time =").not());
}

/// Test unknown modes are rejected at parse time
#[test]
fn test_invalid_mode_is_rejected() {
    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.args(["run", "--mode", "warp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

/// Test malformed --task specs are rejected with the expected shape
#[test]
fn test_invalid_task_spec_is_rejected() {
    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.args(["run", "--task", "espresso"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name:millis"));
}

/// Test a repository config file supplies the workload
#[test]
fn test_config_file_controls_the_workload() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("galley.toml"),
        "[run]\nmode = \"sequential\"\n\n[[run.tasks]]\nname = \"crumpet\"\nduration_ms = 25\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating crumpet..."))
        .stdout(predicate::str::contains("Total time = 0 seconds"));
}

/// Test GALLEY_RUN_MODE beats the config file
#[test]
fn test_env_mode_override_wins() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("galley.toml"),
        "[run]\nmode = \"concurrent\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("GALLEY_RUN_MODE", "sequential")
        .args(["-v", "run", "--task", "tiny:10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("program 1"));
}

/// Test config init writes the template and respects --force
#[test]
fn test_config_init_creates_and_respects_force() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    let config_path = temp_dir.path().join("galley.toml");
    assert!(config_path.exists());
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[run]"));
    assert!(content.contains("coffee"));

    // A second init must refuse to clobber the file.
    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

/// Test config show prints the merged configuration
#[test]
fn test_config_show_prints_merged_configuration() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("galley.toml"),
        "[[run.tasks]]\nname = \"espresso\"\nduration_ms = 40\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("espresso"));
}

/// Test the global --config flag points at a custom file
#[test]
fn test_config_flag_points_at_custom_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("custom.toml"),
        "[[run.tasks]]\nname = \"maple\"\nduration_ms = 15\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["config", "show", "--config", "custom.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("maple"));
}

/// Test config validate rejects empty task names
#[test]
fn test_config_validate_rejects_empty_names() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("galley.toml"),
        "[[run.tasks]]\nname = \"\"\nduration_ms = 10\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

/// Test --quiet silences chrome but never the workload output
#[test]
fn test_quiet_run_still_prints_the_contract() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("galley").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["-q", "run", "--task", "tiny:10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating tiny..."))
        .stdout(predicate::str::contains("Total time = 0 seconds"));
}
