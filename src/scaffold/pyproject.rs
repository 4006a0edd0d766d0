//! `pyproject.toml` model.
//!
//! Only the `[build-system]` table is emitted; project metadata stays in
//! `setup.py` so the two never disagree.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PyProject {
    #[serde(rename = "build-system")]
    pub build_system: BuildSystem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSystem {
    pub requires: Vec<String>,
    #[serde(rename = "build-backend")]
    pub build_backend: String,
}

impl Default for PyProject {
    fn default() -> Self {
        Self {
            build_system: BuildSystem {
                requires: vec!["setuptools>=61.0".into(), "wheel".into()],
                build_backend: "setuptools.build_meta".into(),
            },
        }
    }
}

impl PyProject {
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_build_system_table() {
        let text = PyProject::default().to_toml().unwrap();
        assert!(text.contains("[build-system]"));
        assert!(text.contains("build-backend = \"setuptools.build_meta\""));

        let parsed: PyProject = toml::from_str(&text).unwrap();
        assert_eq!(parsed, PyProject::default());
    }
}
