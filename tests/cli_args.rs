//! Tests for the `ppi` binary.
//!
//! These run the real executable inside a scratch directory and check exit
//! codes, streams and the generated files.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn ppi_cmd(dir: &Path, lang: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ppi"));
    cmd.current_dir(dir).env("LANG", lang).env_remove("PPI_LOG");
    cmd
}

fn run(dir: &Path, lang: &str, args: &[&str]) -> Output {
    ppi_cmd(dir, lang)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_no_args_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), "en_US.UTF-8", &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: ppi [options] <name>"));
}

#[test]
fn test_help_lists_options() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), "en_US.UTF-8", &["-h"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--git-init"));
    assert!(stdout.contains("Initialize project as git-repo."));
}

#[test]
fn test_unknown_locale_falls_back_to_english() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), "sv_SE.UTF-8", &["--version"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(&format!(
        "ppi {}, python project generator.",
        env!("CARGO_PKG_VERSION")
    )));
}

#[test]
fn test_finnish_error() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), "fi_FI.UTF-8", &["---x", "proj"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("virheelliset argumentit: '---x'"),
        "Expected Finnish invalid argument error, got: {}",
        stderr
    );
    assert!(!dir.path().join("proj").exists());
}

#[test]
fn test_creates_project() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), "en_US.UTF-8", &["--annotate", "myapp"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"myapp\" created!"));
    assert!(dir.path().join("myapp/myapp/main.py").is_file());
    assert!(dir.path().join("myapp/docs/myapp.1.md").is_file());
}

#[test]
fn test_flags_without_project_exit_with_error() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), "en_US.UTF-8", &["-qi"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_git_init_when_git_is_available() {
    let has_git = Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    if !has_git {
        return;
    }

    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), "en_US.UTF-8", &["-iq", "repo"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(dir.path().join("repo/.git").is_dir());
}

#[test]
fn test_git_missing_reports_error_and_keeps_files() {
    let dir = TempDir::new().unwrap();
    let output = ppi_cmd(dir.path(), "en_US.UTF-8")
        .env("PATH", "")
        .args(["-i", "proj"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("ppi: error: failed to run git"),
        "Expected git failure, got: {}",
        stderr
    );
    assert!(dir.path().join("proj/setup.py").is_file());
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_is_invalid() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let dir = TempDir::new().unwrap();
    let output = ppi_cmd(dir.path(), "en_US.UTF-8")
        .arg(OsString::from_vec(vec![b'p', 0xff]))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ppi: error: invalid arguments: 'p\u{FFFD}'"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
