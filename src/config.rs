//! Runtime settings.
//!
//! `ppi` has no configuration file; everything comes from the environment.

use crate::locale::Locale;

/// Program name printed in every message.
pub const PROGRAM: &str = "ppi";

/// Program version printed by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Locale selector.
pub const LANG_ENV: &str = "LANG";

/// Path of the log file. Logging is off when unset.
pub const LOG_ENV: &str = "PPI_LOG";

/// Settings resolved from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub locale: Locale,
    pub log_path: Option<String>,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(LANG_ENV).ok().as_deref(),
            std::env::var(LOG_ENV).ok().as_deref(),
        )
    }

    /// Build settings from explicit variable values.
    pub fn from_vars(lang: Option<&str>, log_path: Option<&str>) -> Self {
        Self {
            locale: Locale::from_lang(lang),
            log_path: log_path.filter(|p| !p.is_empty()).map(String::from),
        }
    }
}
