//! Pipeline — ties the argument stages together.

use std::ffi::OsString;

use tracing::debug;

use crate::args::classifier::{classify, classify_os, ClassifyResult};
use crate::args::options::ParsedOptions;
use crate::args::resolver::resolve;

/// Parse a full argument vector (program name at index 0).
///
/// This is the main entry point for the argument pipeline. It performs no
/// I/O and never fails: malformed, unknown and surplus tokens end up in
/// [`ParsedOptions::invalid_arguments`] and
/// [`ParsedOptions::extra_arguments`] for the caller to report.
pub fn parse_args(argv: &[String]) -> ParsedOptions {
    // Stage 1: Classify tokens by their leading hyphens
    let classified = classify(argv);
    resolve_classified(&classified)
}

/// Same as [`parse_args`], for arguments straight from
/// [`std::env::args_os`]. Tokens that are not valid UTF-8 are reported as
/// invalid arguments.
pub fn parse_args_os(argv: &[OsString]) -> ParsedOptions {
    // Stage 1: Classify tokens, non-UTF-8 ones as malformed
    let classified = classify_os(argv);
    resolve_classified(&classified)
}

fn resolve_classified(classified: &ClassifyResult) -> ParsedOptions {
    debug!(
        short = classified.short().len(),
        long = classified.long().len(),
        positional = classified.positional().len(),
        malformed = classified.malformed().len(),
        "classified arguments"
    );

    // Stage 2: Resolve flags and positionals
    let options = resolve(classified);
    debug!(
        project = options.project(),
        invalid = options.invalid_arguments().len(),
        extra = options.extra_arguments().len(),
        "resolved arguments"
    );

    options
}
