use crate::errors::Result;
use crate::matcher::{Matcher, Replacement};
use regex::Captures;
use std::path::Path;

/// The outcome of substituting one matcher into one file's contents.
///
/// Pure data; the transaction runner attaches the file path and decides
/// whether anything is written back to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// The contents after every match has been replaced.
    pub new_contents: String,
    /// Total number of non-overlapping matches found.
    pub match_count: usize,
    /// Matches whose matched text differs from the literal replacement
    /// template. Computed replacements count every match, since "differs"
    /// cannot be evaluated without invoking the function.
    pub replace_count: usize,
    /// Whether `new_contents` differs byte-for-byte from the input.
    pub changed: bool,
}

/// Applies `from`/`to` to `contents`, producing new contents plus counts.
///
/// The matcher is resolved per file (computed matchers receive `file`), then
/// every non-overlapping match is replaced left to right. Literal replacements
/// expand `$1`-style capture references; computed replacements are invoked
/// exactly once per match with the matched text and the file path.
///
/// No side effects of its own; the caller-supplied replacement function may
/// have side effects, which is not this function's concern.
pub fn substitute(
    contents: &str,
    from: &Matcher,
    to: &Replacement,
    file: &Path,
    ignore_case: bool,
) -> Result<Substitution> {
    let regex = from.resolve(file, ignore_case)?;

    let mut match_count = 0;
    let mut replace_count = 0;

    let new_contents = match to {
        Replacement::Literal(template) => {
            // Counting compares matched text against the raw template, not
            // its capture-expanded form, matching conventional replace tools.
            for found in regex.find_iter(contents) {
                match_count += 1;
                if found.as_str() != template {
                    replace_count += 1;
                }
            }
            regex.replace_all(contents, template.as_str()).into_owned()
        }
        Replacement::Computed(f) => regex
            .replace_all(contents, |caps: &Captures| {
                match_count += 1;
                replace_count += 1;
                f(&caps[0], file)
            })
            .into_owned(),
    };

    let changed = new_contents != contents;

    Ok(Substitution {
        new_contents,
        match_count,
        replace_count,
        changed,
    })
}
