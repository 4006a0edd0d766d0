//! Turns [`ParsedOptions`] into output, files and an exit status.
//!
//! Precedence is fixed:
//!
//! ```text
//! no arguments → invalid → extra → help → version → project → usage
//! ```
//!
//! Argument errors short-circuit before help, version or the project name
//! are even looked at.

use std::io::Write;
use std::path::PathBuf;

use crossterm::style::Stylize;
use tracing::{info, warn};

use crate::args::ParsedOptions;
use crate::git;
use crate::locale::{Locale, Texts};
use crate::scaffold::{self, ScaffoldError, ScaffoldOptions};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// What to do for a parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NoArguments,
    InvalidArguments,
    ExtraArguments,
    ShowHelp,
    ShowVersion,
    Scaffold,
    ShowUsage,
}

impl Action {
    pub fn exit_code(self) -> i32 {
        match self {
            Action::ShowHelp | Action::ShowVersion | Action::Scaffold => EXIT_SUCCESS,
            Action::NoArguments
            | Action::InvalidArguments
            | Action::ExtraArguments
            | Action::ShowUsage => EXIT_ERROR,
        }
    }
}

/// Pick the action for `options`.
pub fn decide(options: &ParsedOptions) -> Action {
    if options.is_empty_invocation() {
        Action::NoArguments
    } else if options.has_errors() {
        // Invalid arguments are reported before surplus positionals.
        if options.invalid_arguments().is_empty() {
            Action::ExtraArguments
        } else {
            Action::InvalidArguments
        }
    } else if options.help() {
        Action::ShowHelp
    } else if options.version() {
        Action::ShowVersion
    } else if options.project().is_some() {
        Action::Scaffold
    } else {
        Action::ShowUsage
    }
}

/// The command-line front end: texts in one locale, projects under one root.
#[derive(Debug, Clone)]
pub struct App {
    pub program: String,
    pub version: String,
    pub locale: Locale,
    /// Directory the project is created in.
    pub root: PathBuf,
    /// Style the success line for a terminal.
    pub color: bool,
}

impl App {
    pub fn new(program: &str, version: &str, locale: Locale, root: PathBuf) -> Self {
        Self {
            program: program.to_string(),
            version: version.to_string(),
            locale,
            root,
            color: false,
        }
    }

    /// Enable or disable terminal styling of the success line.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn texts(&self) -> Texts<'_> {
        self.locale.texts(&self.program, &self.version)
    }

    /// Carry out the action for `options` and return the exit status.
    ///
    /// Write failures on `out`/`err` are ignored; there is nowhere left to
    /// report them.
    pub fn run(&self, options: &ParsedOptions, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
        let action = decide(options);
        info!(?action, "dispatching");

        let texts = self.texts();
        match action {
            Action::NoArguments | Action::ShowUsage => {
                self.usage_error(err, None);
            }
            Action::InvalidArguments => {
                let message = texts.invalid_arguments(options.invalid_arguments());
                self.usage_error(err, Some(&message));
            }
            Action::ExtraArguments => {
                let message = texts.extra_arguments(options.extra_arguments());
                self.usage_error(err, Some(&message));
            }
            Action::ShowHelp => {
                let _ = writeln!(out, "{}", texts.description());
                let _ = writeln!(out, "{}", texts.usage());
                let _ = write!(out, "{}", texts.help());
            }
            Action::ShowVersion => {
                let _ = writeln!(out, "{}", texts.description());
            }
            Action::Scaffold => {
                return self.scaffold(options, out, err);
            }
        }

        action.exit_code()
    }

    /// Description, usage, optional message and the help hint, all on `err`.
    fn usage_error(&self, err: &mut dyn Write, message: Option<&str>) {
        let texts = self.texts();
        let _ = writeln!(err, "{}", texts.description());
        let _ = writeln!(err, "{}", texts.usage());
        if let Some(message) = message {
            let _ = writeln!(err, "{message}");
        }
        let _ = writeln!(err, "{}", texts.additional_help());
    }

    fn scaffold(&self, options: &ParsedOptions, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
        let texts = self.texts();
        let Some(name) = options.project() else {
            return EXIT_ERROR;
        };

        let scaffold_options = ScaffoldOptions {
            annotate: options.annotate(),
        };
        let project = match scaffold::create(&self.root, name, scaffold_options) {
            Ok(project) => project,
            Err(ScaffoldError::AlreadyExists { .. }) => {
                warn!(project = name, "project directory already exists");
                let _ = writeln!(err, "{}", texts.directory_exists(name));
                return EXIT_ERROR;
            }
            Err(e) => {
                warn!(error = %e, "scaffold failed");
                let _ = writeln!(err, "{}", texts.failure(&e.to_string()));
                return EXIT_ERROR;
            }
        };

        if options.git_init() {
            if let Err(e) = git::init(&project) {
                warn!(error = %e, "git init failed");
                let _ = writeln!(err, "{}", texts.failure(&format!("{e:#}")));
                return EXIT_ERROR;
            }
        }

        if !options.quiet() {
            let message = texts.success(name);
            if self.color {
                let _ = writeln!(out, "{}", message.yellow().bold());
            } else {
                let _ = writeln!(out, "{message}");
            }
        }

        EXIT_SUCCESS
    }
}
