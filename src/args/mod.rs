//! Command-line argument handling for ppi.
//!
//! A single pass turns the raw argument vector into [`ParsedOptions`]:
//!
//! ```text
//! argv → Classify → Resolve → ParsedOptions
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.
//! Nothing here prints, exits or touches the filesystem.

mod classifier;
mod options;
mod pipeline;
mod registry;
mod resolver;

pub use classifier::{
    class_of, classify, classify_os, leading_hyphens, ArgClass, ClassifiedArg, ClassifyResult,
};
pub use options::ParsedOptions;
pub use pipeline::{parse_args, parse_args_os};
pub use registry::{flag_registry, lookup_long, lookup_short, Flag, FlagDef};
pub use resolver::resolve;
