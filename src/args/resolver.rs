//! Resolvers — classified args → flags, project name and argument errors.
//!
//! Tokens are resolved in their original command-line order, whatever their
//! class, so `invalid_arguments` lists offenders in encounter order.

use crate::args::classifier::{ArgClass, ClassifiedArg, ClassifyResult};
use crate::args::options::ParsedOptions;
use crate::args::registry::{lookup_long, lookup_short};

/// Resolve every classified token into a fresh [`ParsedOptions`].
pub fn resolve(classified: &ClassifyResult) -> ParsedOptions {
    let mut options = ParsedOptions::new(classified.is_empty());

    for arg in &classified.args {
        resolve_one(&mut options, arg);
    }

    options
}

fn resolve_one(options: &mut ParsedOptions, arg: &ClassifiedArg) {
    match arg.class {
        ArgClass::ShortOption => resolve_short(options, &arg.token),
        ArgClass::LongOption => resolve_long(options, &arg.token),
        ArgClass::Positional => options.push_positional(arg.token.clone()),
        ArgClass::Malformed => options.push_invalid(arg.token.clone()),
    }
}

/// Each letter after the hyphen is tried on its own. An unknown letter is
/// recorded and the rest of the token is still resolved.
fn resolve_short(options: &mut ParsedOptions, token: &str) {
    let letters = token.strip_prefix('-').unwrap_or(token);

    for letter in letters.chars() {
        match lookup_short(letter) {
            Some(flag) => options.set(flag),
            None => options.push_invalid(format!("-{letter}")),
        }
    }
}

fn resolve_long(options: &mut ParsedOptions, token: &str) {
    match lookup_long(token) {
        Some(flag) => options.set(flag),
        None => options.push_invalid(token.to_string()),
    }
}
