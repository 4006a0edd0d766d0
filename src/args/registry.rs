//! Flag registry — single source of truth for all flags.
//!
//! The vocabulary is closed: five boolean switches, each reachable through
//! one short letter and one long name. No flag takes a value.

/// A boolean switch understood by `ppi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Print the help text.
    Help,
    /// Print the program version.
    Version,
    /// Don't print the success message.
    Quiet,
    /// Run `git init` in the generated project.
    GitInit,
    /// Generate Python sources with type hints.
    Annotate,
}

/// A single flag definition.
#[derive(Debug, Clone, Copy)]
pub struct FlagDef {
    /// Long form including the prefix (e.g., "--git-init").
    pub long: &'static str,
    /// Short letter without the prefix (e.g., 'i').
    pub short: char,
    /// The switch this definition sets.
    pub flag: Flag,
}

const REGISTRY: [FlagDef; 5] = [
    FlagDef {
        long: "--annotate",
        short: 'a',
        flag: Flag::Annotate,
    },
    FlagDef {
        long: "--quiet",
        short: 'q',
        flag: Flag::Quiet,
    },
    FlagDef {
        long: "--git-init",
        short: 'i',
        flag: Flag::GitInit,
    },
    FlagDef {
        long: "--help",
        short: 'h',
        flag: Flag::Help,
    },
    FlagDef {
        long: "--version",
        short: 'V',
        flag: Flag::Version,
    },
];

/// The complete flag registry, in the order help text lists it.
pub fn flag_registry() -> &'static [FlagDef] {
    &REGISTRY
}

impl FlagDef {
    /// Check if this definition matches a whole long token (e.g., "--quiet").
    pub fn matches_long(&self, token: &str) -> bool {
        token == self.long
    }

    /// Check if this definition matches a single short letter.
    pub fn matches_short(&self, letter: char) -> bool {
        letter == self.short
    }
}

/// Find the flag for a whole long token.
pub fn lookup_long(token: &str) -> Option<Flag> {
    REGISTRY
        .iter()
        .find(|d| d.matches_long(token))
        .map(|d| d.flag)
}

/// Find the flag for a short letter. Letters are case-sensitive.
pub fn lookup_short(letter: char) -> Option<Flag> {
    REGISTRY
        .iter()
        .find(|d| d.matches_short(letter))
        .map(|d| d.flag)
}
