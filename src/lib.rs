//! ppi — Python project initializer.
//!
//! Generates a skeleton Python project from a single project name.

pub mod args;
pub mod config;
pub mod dispatch;
pub mod git;
pub mod locale;
pub mod logging;
pub mod report;
pub mod scaffold;
