//! Argument handling pipeline.
//!
//! ```text
//! argv → Substitute placeholder → Expand @files (recursively) → Invocation
//! ```
//!
//! Each stage is a plain function or value type that can be unit-tested
//! independently of the process environment.

mod expander;
mod pipeline;
mod placeholder;

pub use expander::{ArgExpander, ExpandError};
pub use pipeline::{build_invocation, Invocation};
pub use placeholder::Placeholder;
