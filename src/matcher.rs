use crate::errors::Result;
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// The "from" side of a replacement: what text to find.
///
/// A closed set of variants rather than runtime type inspection; the
/// substitution engine dispatches on it exactly once per (matcher, file) pair.
#[derive(Clone)]
pub enum Matcher {
    /// A pattern source string, compiled with global-match semantics.
    ///
    /// `ignore_case` applies to this variant only.
    Literal(String),
    /// A precompiled regex, used exactly as supplied.
    ///
    /// The `ignore_case` flag is silently ignored for this variant; case
    /// sensitivity of a precompiled pattern is the caller's responsibility.
    Pattern(Regex),
    /// A function of the file path, producing the effective matcher per file.
    Computed(Arc<dyn Fn(&Path) -> Matcher + Send + Sync>),
}

/// The "to" side of a replacement: what to substitute for each match.
#[derive(Clone)]
pub enum Replacement {
    /// A literal template. Supports `$1`-style capture group references.
    Literal(String),
    /// A function of (matched text, file path), called exactly once per match.
    Computed(Arc<dyn Fn(&str, &Path) -> String + Send + Sync>),
}

impl Matcher {
    /// Builds a matcher from a pattern source string.
    pub fn literal(pattern: impl Into<String>) -> Self {
        Matcher::Literal(pattern.into())
    }

    /// Builds a matcher from a function computing the pattern per file.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Path) -> Matcher + Send + Sync + 'static,
    {
        Matcher::Computed(Arc::new(f))
    }

    /// Resolves this matcher to a concrete regex for `file`.
    ///
    /// `Computed` matchers are invoked with the file path and their result is
    /// resolved in turn, so a computed matcher may hand back either a pattern
    /// source string or a precompiled regex.
    pub fn resolve(&self, file: &Path, ignore_case: bool) -> Result<Regex> {
        match self {
            Matcher::Literal(source) => Ok(RegexBuilder::new(source)
                .case_insensitive(ignore_case)
                .build()?),
            Matcher::Pattern(regex) => Ok(regex.clone()),
            Matcher::Computed(f) => f(file).resolve(file, ignore_case),
        }
    }
}

impl Replacement {
    /// Builds a replacement from a literal template string.
    pub fn literal(template: impl Into<String>) -> Self {
        Replacement::Literal(template.into())
    }

    /// Builds a replacement from a per-match function.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&str, &Path) -> String + Send + Sync + 'static,
    {
        Replacement::Computed(Arc::new(f))
    }
}

impl From<&str> for Matcher {
    fn from(pattern: &str) -> Self {
        Matcher::Literal(pattern.to_string())
    }
}

impl From<String> for Matcher {
    fn from(pattern: String) -> Self {
        Matcher::Literal(pattern)
    }
}

impl From<Regex> for Matcher {
    fn from(regex: Regex) -> Self {
        Matcher::Pattern(regex)
    }
}

impl From<&str> for Replacement {
    fn from(template: &str) -> Self {
        Replacement::Literal(template.to_string())
    }
}

impl From<String> for Replacement {
    fn from(template: String) -> Self {
        Replacement::Literal(template)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Matcher::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Matcher::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Replacement::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}
