//! Integration tests for the pipstrap binary.
//!
//! A fake `python` script stands in for the real interpreter. It appends
//! each argument vector to a log file and exits with the status given by
//! `FAKE_UPGRADE_EXIT` / `FAKE_INSTALL_EXIT`.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]
#![cfg(unix)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_PYTHON: &str = r#"#!/bin/sh
echo "$*" >> "$FAKE_PIP_LOG"
case "$*" in
  *--upgrade*) exit "${FAKE_UPGRADE_EXIT:-0}" ;;
  *) exit "${FAKE_INSTALL_EXIT:-0}" ;;
esac
"#;

struct FakePython {
    dir: TempDir,
}

impl FakePython {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("python");
        fs::write(&script, FAKE_PYTHON).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        Self { dir }
    }

    fn path(&self) -> PathBuf {
        self.dir.path().join("python")
    }

    fn log(&self) -> PathBuf {
        self.dir.path().join("pip.log")
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("pipstrap"));
        cmd.env_remove("PIPSTRAP_PYTHON")
            .env("FAKE_PIP_LOG", self.log())
            .arg("--python")
            .arg(self.path());
        cmd
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pipstrap"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pip modules"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pipstrap"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn no_args_upgrades_then_installs_in_one_batch() -> Result<(), Box<dyn std::error::Error>> {
    let python = FakePython::new();
    python
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing required pip modules..."))
        .stdout(predicate::str::contains(
            "Successfully installed modules: [pyModbusTCP, cbor2, pyzmq]",
        ));

    assert_eq!(
        python.calls(),
        vec![
            "-m pip install --upgrade pip".to_string(),
            "-m pip install pyModbusTCP cbor2 pyzmq".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn install_subcommand_matches_default() -> Result<(), Box<dyn std::error::Error>> {
    let python = FakePython::new();
    python.command().arg("install").assert().success();

    assert_eq!(python.calls().len(), 2);
    Ok(())
}

#[test]
fn upgrade_failure_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let python = FakePython::new();
    python
        .command()
        .env("FAKE_UPGRADE_EXIT", "1")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Successfully").not())
        .stdout(predicate::str::contains(
            "Failed to install pip modules: [pyModbusTCP, cbor2, pyzmq]",
        ));

    assert_eq!(python.calls(), vec!["-m pip install --upgrade pip".to_string()]);
    Ok(())
}

#[test]
fn install_failure_reports_full_list_on_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let python = FakePython::new();
    let expected_detail = format!(
        "Error: Command '{} -m pip install pyModbusTCP cbor2 pyzmq' returned non-zero exit status 2",
        display(&python.path())
    );
    python
        .command()
        .env("FAKE_INSTALL_EXIT", "2")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Failed to install pip modules: [pyModbusTCP, cbor2, pyzmq].",
        ))
        .stdout(predicate::str::contains(expected_detail))
        .stdout(predicate::str::contains("Successfully").not());
    Ok(())
}

#[test]
fn missing_interpreter_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let missing = temp.path().join("no-such-python");
    let mut cmd = Command::new(cargo_bin("pipstrap"));
    cmd.arg("--python").arg(&missing);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Failed to install pip modules"))
        .stdout(predicate::str::contains(display(&missing)));
    Ok(())
}

#[test]
fn python_can_come_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let python = FakePython::new();
    let mut cmd = Command::new(cargo_bin("pipstrap"));
    cmd.env("PIPSTRAP_PYTHON", python.path())
        .env("FAKE_PIP_LOG", python.log());
    cmd.assert().success();

    assert_eq!(python.calls().len(), 2);
    Ok(())
}

#[test]
fn dry_run_runs_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let python = FakePython::new();
    python
        .command()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: "))
        .stdout(predicate::str::contains("-m pip install --upgrade pip"))
        .stdout(predicate::str::contains(
            "Successfully installed modules: [pyModbusTCP, cbor2, pyzmq]",
        ));

    assert!(python.calls().is_empty());
    Ok(())
}

#[test]
fn quiet_hides_progress_but_not_errors() -> Result<(), Box<dyn std::error::Error>> {
    let python = FakePython::new();
    python
        .command()
        .arg("--quiet")
        .env("FAKE_INSTALL_EXIT", "1")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Installing required pip modules").not())
        .stdout(predicate::str::contains("Failed to install pip modules"));
    Ok(())
}

#[test]
fn quiet_still_reports_success() -> Result<(), Box<dyn std::error::Error>> {
    let python = FakePython::new();
    python
        .command()
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing required pip modules").not())
        .stdout(predicate::str::contains(
            "Successfully installed modules: [pyModbusTCP, cbor2, pyzmq]",
        ));
    Ok(())
}

#[test]
fn normal_mode_does_not_echo_commands() -> Result<(), Box<dyn std::error::Error>> {
    let python = FakePython::new();
    python
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("$ ").not());
    Ok(())
}

#[test]
fn verbose_echoes_commands() -> Result<(), Box<dyn std::error::Error>> {
    let python = FakePython::new();
    python
        .command()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "$ {} -m pip install pyModbusTCP cbor2 pyzmq",
            display(&python.path())
        )));
    Ok(())
}

#[test]
fn positional_arguments_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let python = FakePython::new();
    python.command().args(["install", "requests"]).assert().code(2);

    assert!(python.calls().is_empty());
    Ok(())
}

#[test]
fn completions_generates_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pipstrap"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pipstrap"));
    Ok(())
}
