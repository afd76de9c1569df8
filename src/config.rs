use crate::errors::{Error, Result};
use crate::matcher::{Matcher, Replacement};

/// Immutable configuration for one replace batch.
///
/// One `Options` value fans out to `from.len() × resolved-files.len()`
/// independent substitution attempts, each yielding one
/// [`ReplaceResult`](crate::replacer::ReplaceResult).
#[derive(Debug, Clone)]
pub struct Options {
    /// Glob patterns (or literal paths when `disable_globs` is set) naming the
    /// files to process. Patterns starting with `!` exclude previously matched
    /// paths.
    pub files: Vec<String>,
    /// One or more matchers. Every matcher is applied against every resolved
    /// file, independently (a cross product, not a per-file selection).
    pub from: Vec<Matcher>,
    /// The replacement applied for every matcher.
    pub to: Replacement,
    /// Compute results but never write to disk.
    pub dry: bool,
    /// Treat `files` entries as literal paths; no filesystem access or
    /// existence check happens during resolution.
    pub disable_globs: bool,
    /// Glob patterns whose matches are excluded from the resolved file list.
    pub ignore: Vec<String>,
    /// Case-insensitive matching for `Matcher::Literal` clauses only;
    /// precompiled patterns are used exactly as supplied.
    pub ignore_case: bool,
    /// Match/replace counts are always computed by the engine; this flag only
    /// controls whether the CLI front end prints the count lines.
    pub count_matches: bool,
    /// Optional cap on the number of parallel worker threads. Defaults to the
    /// number of logical CPU cores.
    pub workers: Option<usize>,
}

impl Options {
    /// Creates options with the given file patterns, matchers and replacement,
    /// and all flags at their defaults.
    pub fn new(
        files: impl IntoIterator<Item = impl Into<String>>,
        from: impl IntoIterator<Item = Matcher>,
        to: impl Into<Replacement>,
    ) -> Self {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            from: from.into_iter().collect(),
            to: to.into(),
            dry: false,
            disable_globs: false,
            ignore: Vec::new(),
            ignore_case: false,
            count_matches: false,
            workers: None,
        }
    }

    /// Checks the configuration invariants before any file I/O is attempted.
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(Error::Config("no input files given".to_string()));
        }
        if self.from.is_empty() {
            return Err(Error::Config("no `from` clause given".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_files() {
        let options = Options::new(Vec::<String>::new(), [Matcher::literal("a")], "b");
        assert!(matches!(options.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_from() {
        let options = Options::new(["*.txt"], [], "b");
        assert!(matches!(options.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_accepts_minimal_options() {
        let options = Options::new(["*.txt"], [Matcher::literal("a")], "b");
        assert!(options.validate().is_ok());
    }
}
