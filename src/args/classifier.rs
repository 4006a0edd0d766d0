//! Argument classifier — raw args → classified args.
//!
//! Classification is purely lexical: only the run of leading hyphens decides
//! the class. Nothing is looked up in the registry here.

use std::ffi::OsString;

/// Syntactic class of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgClass {
    /// Exactly one leading hyphen; every following character is a letter.
    ShortOption,
    /// Exactly two leading hyphens; matched as a whole name.
    LongOption,
    /// No leading hyphen.
    Positional,
    /// Three or more leading hyphens. Always invalid.
    Malformed,
}

/// A token together with its class and its position in the argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedArg {
    /// Index in the original argument vector (the program name is index 0).
    pub index: usize,
    pub class: ArgClass,
    pub token: String,
}

/// Result of classifying raw arguments.
///
/// Every token is stored once, in its original order. The group accessors
/// filter that list, so each group can be read any number of times.
#[derive(Debug, Clone, Default)]
pub struct ClassifyResult {
    /// Classified arguments in order.
    pub args: Vec<ClassifiedArg>,
}

impl ClassifyResult {
    /// Tokens of one class, in their original relative order.
    pub fn group(&self, class: ArgClass) -> Vec<&str> {
        self.args
            .iter()
            .filter(|a| a.class == class)
            .map(|a| a.token.as_str())
            .collect()
    }

    pub fn malformed(&self) -> Vec<&str> {
        self.group(ArgClass::Malformed)
    }

    pub fn long(&self) -> Vec<&str> {
        self.group(ArgClass::LongOption)
    }

    pub fn short(&self) -> Vec<&str> {
        self.group(ArgClass::ShortOption)
    }

    pub fn positional(&self) -> Vec<&str> {
        self.group(ArgClass::Positional)
    }

    /// True when nothing followed the program name.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

/// Count the run of hyphens at the start of `token`.
///
/// Stops at the first non-hyphen character or at the end of the string, so
/// hyphen-only tokens like `"-"` or `"---"` are counted in full.
pub fn leading_hyphens(token: &str) -> usize {
    token.chars().take_while(|&c| c == '-').count()
}

/// Class of a single token.
pub fn class_of(token: &str) -> ArgClass {
    match leading_hyphens(token) {
        0 => ArgClass::Positional,
        1 => ArgClass::ShortOption,
        2 => ArgClass::LongOption,
        _ => ArgClass::Malformed,
    }
}

/// Classify a full argument vector. Index 0 (the program name) is skipped.
pub fn classify(argv: &[String]) -> ClassifyResult {
    let args = argv
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, token)| ClassifiedArg {
            index,
            class: class_of(token),
            token: token.clone(),
        })
        .collect();

    ClassifyResult { args }
}

/// Classify an argument vector as the OS handed it over.
///
/// A token that is not valid UTF-8 can be neither a flag nor a project
/// name. It is classified [`ArgClass::Malformed`] and carried in its lossy
/// rendering, so it is reported as invalid.
pub fn classify_os(argv: &[OsString]) -> ClassifyResult {
    let args = argv
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, raw)| match raw.to_str() {
            Some(token) => ClassifiedArg {
                index,
                class: class_of(token),
                token: token.to_string(),
            },
            None => ClassifiedArg {
                index,
                class: ArgClass::Malformed,
                token: raw.to_string_lossy().into_owned(),
            },
        })
        .collect();

    ClassifyResult { args }
}
