use crate::errors::Result;
use glob::Pattern;
use std::collections::HashSet;
use std::path::PathBuf;

/// Expands glob patterns into a concrete, deduplicated list of file paths.
///
/// - When `disable_globs` is set, the patterns are returned verbatim as
///   literal paths; no filesystem access or existence check happens here
///   (a nonexistent path surfaces later as a read failure).
/// - Otherwise each pattern is expanded against the filesystem in order.
///   A pattern starting with `!` removes previously matched paths instead of
///   adding new ones, and anything matching a pattern in `ignore` is skipped.
///   Only regular files are returned.
///
/// The first pattern that matched a path decides its position in the output;
/// later patterns matching the same path do not duplicate it.
pub fn resolve_paths(
    patterns: &[String],
    ignore: &[String],
    disable_globs: bool,
) -> Result<Vec<PathBuf>> {
    if disable_globs {
        return Ok(patterns.iter().map(PathBuf::from).collect());
    }

    let ignore_patterns = ignore
        .iter()
        .map(|p| Pattern::new(p))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        if let Some(negated) = pattern.strip_prefix('!') {
            let exclude = Pattern::new(negated)?;
            files.retain(|path: &PathBuf| {
                if exclude.matches_path(path) {
                    seen.remove(path);
                    false
                } else {
                    true
                }
            });
            continue;
        }

        for entry in glob::glob(pattern)? {
            let path = entry?;
            if !path.is_file() {
                continue;
            }
            if ignore_patterns.iter().any(|p| p.matches_path(&path)) {
                continue;
            }
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn glob_in(dir: &TempDir, suffix: &str) -> String {
        format!("{}/{}", dir.path().display(), suffix)
    }

    #[test]
    fn test_expands_glob_to_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("c.md"), "c").unwrap();

        let files = resolve_paths(&[glob_in(&temp_dir, "*.txt")], &[], false).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "txt"));
    }

    #[test]
    fn test_directories_are_not_returned() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();

        let files = resolve_paths(&[glob_in(&temp_dir, "*")], &[], false).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.txt"));
    }

    #[test]
    fn test_negation_removes_previous_matches() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("keep.txt"), "k").unwrap();
        fs::write(temp_dir.path().join("drop.txt"), "d").unwrap();

        let files = resolve_paths(
            &[glob_in(&temp_dir, "*.txt"), format!("!{}", glob_in(&temp_dir, "drop*"))],
            &[],
            false,
        )
        .unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.txt"));
    }

    #[test]
    fn test_ignore_patterns_are_excluded() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join("a.bak.txt"), "a").unwrap();

        let files = resolve_paths(
            &[glob_in(&temp_dir, "*.txt")],
            &[glob_in(&temp_dir, "*.bak.txt")],
            false,
        )
        .unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.txt"));
    }

    #[test]
    fn test_overlapping_patterns_deduplicate() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();

        let files = resolve_paths(
            &[glob_in(&temp_dir, "*.txt"), glob_in(&temp_dir, "a.*")],
            &[],
            false,
        )
        .unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_disable_globs_passes_paths_verbatim() {
        // No existence check: a missing path is passed through untouched.
        let files = resolve_paths(
            &["no/such/file.txt".to_string(), "*.literal".to_string()],
            &[],
            true,
        )
        .unwrap();

        assert_eq!(
            files,
            vec![PathBuf::from("no/such/file.txt"), PathBuf::from("*.literal")]
        );
    }

    #[test]
    fn test_invalid_pattern_is_fatal() {
        assert!(resolve_paths(&["[".to_string()], &[], false).is_err());
    }
}
