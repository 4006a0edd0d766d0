//! `git init` for freshly generated projects.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::info;

/// Initialize `dir` as a git repository, quietly.
pub fn init(dir: &Path) -> Result<()> {
    let status = Command::new("git")
        .arg("init")
        .arg("--quiet")
        .arg(dir)
        .status()
        .context("failed to run git")?;

    if !status.success() {
        bail!("git init exited with {status}");
    }

    info!(dir = %dir.display(), "initialized git repository");
    Ok(())
}
