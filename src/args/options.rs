//! The finished, read-only result of one parse pass.

use crate::args::registry::Flag;

/// Flags, project name and argument errors collected from the command line.
///
/// Built once by [`parse_args`](crate::args::parse_args); callers only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    project: Option<String>,
    help: bool,
    version: bool,
    quiet: bool,
    git_init: bool,
    annotate: bool,
    invalid_arguments: Vec<String>,
    extra_arguments: Vec<String>,
    empty_invocation: bool,
}

impl ParsedOptions {
    pub(super) fn new(empty_invocation: bool) -> Self {
        Self {
            empty_invocation,
            ..Self::default()
        }
    }

    /// Set a flag. Setting it again is not an error.
    pub(super) fn set(&mut self, flag: Flag) {
        match flag {
            Flag::Help => self.help = true,
            Flag::Version => self.version = true,
            Flag::Quiet => self.quiet = true,
            Flag::GitInit => self.git_init = true,
            Flag::Annotate => self.annotate = true,
        }
    }

    pub(super) fn push_invalid(&mut self, token: String) {
        self.invalid_arguments.push(token);
    }

    /// First positional wins; the rest are extra.
    pub(super) fn push_positional(&mut self, token: String) {
        if self.project.is_none() {
            self.project = Some(token);
        } else {
            self.extra_arguments.push(token);
        }
    }

    /// Name of the project to scaffold, if one was given.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn help(&self) -> bool {
        self.help
    }

    pub fn version(&self) -> bool {
        self.version
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn git_init(&self) -> bool {
        self.git_init
    }

    pub fn annotate(&self) -> bool {
        self.annotate
    }

    /// Query a flag by its registry identity.
    pub fn is_set(&self, flag: Flag) -> bool {
        match flag {
            Flag::Help => self.help,
            Flag::Version => self.version,
            Flag::Quiet => self.quiet,
            Flag::GitInit => self.git_init,
            Flag::Annotate => self.annotate,
        }
    }

    /// Malformed tokens, unknown short letters (as `-<letter>`) and unknown
    /// long tokens, in the order they were encountered.
    pub fn invalid_arguments(&self) -> &[String] {
        &self.invalid_arguments
    }

    /// Positional tokens after the project name.
    pub fn extra_arguments(&self) -> &[String] {
        &self.extra_arguments
    }

    /// True when either error list is non-empty.
    pub fn has_errors(&self) -> bool {
        !self.invalid_arguments.is_empty() || !self.extra_arguments.is_empty()
    }

    /// True when nothing followed the program name.
    pub fn is_empty_invocation(&self) -> bool {
        self.empty_invocation
    }
}
