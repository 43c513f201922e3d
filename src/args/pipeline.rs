//! Pipeline — ties all argument processing stages together.

use std::path::PathBuf;

use crate::args::expander::{ArgExpander, ExpandError};
use crate::args::placeholder::Placeholder;
use crate::config::Settings;

/// Ready-to-serialize compiler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Compiler to execute.
    pub tool: PathBuf,
    /// Final argument list, to be written into a response file.
    pub args: Vec<String>,
    /// Response files that were inlined, in the order they were opened.
    pub expanded_files: Vec<PathBuf>,
}

/// Build the compiler invocation from raw wrapper arguments.
///
/// This is the main entry point for argument processing.
///
/// # Arguments
///
/// * `raw_args` - Arguments the wrapper was called with, without argv[0]
/// * `cwd` - Working directory substituted for the placeholder
/// * `settings` - Resolved wrapper settings
pub fn build_invocation(
    raw_args: &[String],
    cwd: &str,
    settings: &Settings,
) -> Result<Invocation, ExpandError> {
    // Stage 1: Placeholder bound to the working directory
    let placeholder = Placeholder::new(settings.placeholder.as_str(), cwd);

    // Stage 2: Substitute and inline response files
    let mut expander = ArgExpander::new(placeholder, settings.max_nesting);
    let args = expander.expand_all(raw_args)?;

    tracing::info!(
        raw = raw_args.len(),
        expanded = args.len(),
        response_files = expander.expanded_files().len(),
        "Arguments processed"
    );

    Ok(Invocation {
        tool: settings.tool.clone(),
        args,
        expanded_files: expander.into_expanded_files(),
    })
}
