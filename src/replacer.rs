use crate::config::Options;
use crate::engine;
use crate::errors::{Error, Result};
use crate::matcher::{Matcher, Replacement};
use crate::resolver;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The result of one (matcher, file) substitution attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceResult {
    /// The file the matcher was applied to.
    pub file: PathBuf,
    /// Total number of matches found in the file.
    pub match_count: usize,
    /// Matches counted as actual replacements (see the engine's counting
    /// rules for literal vs computed replacements).
    pub replace_count: usize,
    /// Whether the final contents differ from what was read.
    pub changed: bool,
}

/// Outcome of one (matcher, file) transaction. Failures are scoped to the
/// pair; they never abort sibling transactions.
pub type PairOutcome = std::result::Result<ReplaceResult, Error>;

/// Processes a single file: read, substitute, conditionally write back.
///
/// The file is read whole and decoded as UTF-8. If the substitution changed
/// nothing, or `dry` is set, the filesystem is left untouched. Otherwise the
/// new contents are written atomically: a temporary file in the same
/// directory, permissions copied over, then persisted over the original.
pub fn process_file(
    file: &Path,
    from: &Matcher,
    to: &Replacement,
    dry: bool,
    ignore_case: bool,
) -> Result<ReplaceResult> {
    let contents = fs::read_to_string(file).map_err(|e| Error::processing(file, e))?;

    let substitution = engine::substitute(&contents, from, to, file, ignore_case)?;

    let result = ReplaceResult {
        file: file.to_path_buf(),
        match_count: substitution.match_count,
        replace_count: substitution.replace_count,
        changed: substitution.changed,
    };

    if !result.changed || dry {
        return Ok(result);
    }

    write_atomic(file, &substitution.new_contents).map_err(|e| Error::Processing {
        path: file.to_path_buf(),
        source: e.into(),
    })?;

    Ok(result)
}

/// Writes `contents` over `file` via a temporary file in the same directory,
/// so a crash mid-write cannot leave the original truncated.
fn write_atomic(file: &Path, contents: &str) -> Result<()> {
    let parent = match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(contents.as_bytes())?;

    // Preserve file permissions
    let perms = fs::metadata(file)?.permissions();
    fs::set_permissions(temp_file.path(), perms)?;

    temp_file.persist(file)?;
    Ok(())
}

/// Runs a full replace batch described by `options`.
///
/// Resolves the file list once, then applies EVERY matcher against EVERY
/// resolved file (a cross product) with one transaction per pair, fanned out
/// on a Rayon thread pool. The returned list is ordered deterministically:
/// outer loop over matchers, inner loop over files, regardless of the order
/// in which transactions actually complete.
///
/// Configuration and glob-resolution errors fail the whole batch. Per-pair
/// I/O failures are isolated: they appear as `Err` entries at their pairing's
/// position while the rest of the batch completes.
///
/// No file-level locking is performed: when several matchers touch the same
/// file, each transaction reads the contents current at its start and the
/// last write wins.
pub fn run(options: &Options) -> Result<Vec<PairOutcome>> {
    options.validate()?;

    if options.dry {
        println!("[dry mode] no files will be overwritten");
    }

    let files = resolver::resolve_paths(&options.files, &options.ignore, options.disable_globs)?;

    let pairs: Vec<(&Matcher, &PathBuf)> = options
        .from
        .iter()
        .flat_map(|from| files.iter().map(move |file| (from, file)))
        .collect();

    let transact = |&(from, file): &(&Matcher, &PathBuf)| {
        process_file(file, from, &options.to, options.dry, options.ignore_case)
    };

    let outcomes = match options.workers {
        Some(workers) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
            pool.install(|| pairs.par_iter().map(transact).collect())
        }
        None => pairs.par_iter().map(transact).collect(),
    };

    Ok(outcomes)
}
