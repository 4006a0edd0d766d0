//! Project skeleton writer.
//!
//! Lays out a new Python project under `<root>/<name>`:
//!
//! ```text
//! <name>/
//!   <name>/__init__.py
//!   <name>/main.py
//!   docs/<name>.1.md
//!   README.md  CHANGELOG.md  MANIFEST.in
//!   setup.py  pyproject.toml  Makefile  .gitignore
//! ```

mod pyproject;
mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{debug, info};

pub use pyproject::{BuildSystem, PyProject};

/// Errors that can occur while writing the project skeleton.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("'{path}' already exists")]
    AlreadyExists { path: PathBuf },

    #[error("Failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render pyproject.toml: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Failed to format man page date: {0}")]
    Date(#[from] time::error::Format),
}

/// How the skeleton is generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Write `setup.py` and `main.py` with type hints.
    pub annotate: bool,
}

/// Create the project `name` inside `root`.
///
/// Returns the project directory. Fails without touching anything if that
/// directory (or a file with the same name) already exists.
pub fn create(root: &Path, name: &str, options: ScaffoldOptions) -> Result<PathBuf, ScaffoldError> {
    let project = root.join(name);
    if project.exists() {
        return Err(ScaffoldError::AlreadyExists { path: project });
    }

    let date = man_page_date()?;
    let pyproject = PyProject::default().to_toml()?;

    let package = project.join(name);
    let docs = project.join("docs");
    make_dir(&package)?;
    make_dir(&docs)?;

    let files = [
        (project.join("README.md"), templates::readme()),
        (project.join("CHANGELOG.md"), templates::changelog()),
        (project.join("MANIFEST.in"), templates::manifest()),
        (project.join("setup.py"), templates::setup_py(name, options.annotate)),
        (project.join("pyproject.toml"), pyproject),
        (project.join("Makefile"), templates::makefile(name)),
        (docs.join(format!("{name}.1.md")), templates::man_page(name, &date)),
        (package.join("__init__.py"), templates::init_py()),
        (package.join("main.py"), templates::main_py(name, options.annotate)),
        (project.join(".gitignore"), templates::gitignore()),
    ];

    for (path, content) in &files {
        write_file(path, content)?;
    }

    info!(project = %project.display(), files = files.len(), "project created");
    Ok(project)
}

/// Month and year for the man page header, e.g. "Oct 2026".
fn man_page_date() -> Result<String, ScaffoldError> {
    let format = format_description!("[month repr:short] [year]");
    Ok(OffsetDateTime::now_utc().format(format)?)
}

fn make_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path).map_err(|e| ScaffoldError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    fs::write(path, content).map_err(|e| ScaffoldError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "wrote file");
    Ok(())
}
