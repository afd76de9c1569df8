use crate::errors::Result;
use crate::replacer::ReplaceResult;
use std::fmt::Write;

/// Renders results as the line-block text format printed by the CLI.
///
/// Every result gets a `file:` line; the `replace count:` / `match count:`
/// lines are added only when `show_counts` is set (counts are always computed
/// by the engine, the flag is display-only).
pub fn format_text(results: &[ReplaceResult], show_counts: bool) -> String {
    let mut out = String::new();
    for result in results {
        writeln!(out, "file: {}", result.file.display()).ok();
        if show_counts {
            writeln!(out, "replace count: {}", result.replace_count).ok();
            writeln!(out, "match count: {}", result.match_count).ok();
        }
    }
    out
}

/// Renders results as a pretty-printed JSON array.
pub fn format_json(results: &[ReplaceResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
