//! Placeholder substitution: `{BAZEL_EXECUTION_ROOT}` → working directory.

use std::borrow::Cow;

/// A literal token and the text that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    token: String,
    replacement: String,
}

impl Placeholder {
    pub fn new(token: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            replacement: replacement.into(),
        }
    }

    /// Replace every occurrence of the token in `arg`.
    ///
    /// Matches are found left to right without overlap; inserted text is
    /// never rescanned. An empty token matches nothing.
    pub fn apply<'a>(&self, arg: &'a str) -> Cow<'a, str> {
        if self.token.is_empty() || !arg.contains(self.token.as_str()) {
            return Cow::Borrowed(arg);
        }
        Cow::Owned(arg.replace(self.token.as_str(), &self.replacement))
    }
}
