use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in the `resub` crate.
///
/// This enum uses `thiserror` to neatly wrap various kinds of errors that can occur,
/// from I/O issues to glob and regex compilation problems.
#[derive(Error, Debug)]
pub enum Error {
    /// An error related to file system I/O.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An error that occurred during regex compilation.
    #[error("Pattern compilation failed: {0}")]
    Regex(#[from] regex::Error),

    /// An invalid glob pattern was supplied for `files` or `ignore`.
    #[error("Invalid glob pattern: {0}")]
    GlobPattern(#[from] glob::PatternError),

    /// An error that occurred while walking the filesystem during glob expansion.
    #[error("Glob expansion failed: {0}")]
    GlobWalk(#[from] glob::GlobError),

    /// A general configuration-related error.
    #[error("Config error: {0}")]
    Config(String),

    /// An error scoped to a single (matcher, file) transaction.
    ///
    /// These do not abort sibling transactions; the orchestrator surfaces them
    /// alongside the successful results.
    #[error("File processing failed for {path}: {source}")]
    Processing {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An error that occurred while building the Rayon thread pool.
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// An error related to persisting a temporary file.
    #[error("Tempfile error: {0}")]
    TempFile(#[from] tempfile::PersistError),

    /// An error related to JSON serialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, resub::errors::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Config(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Config(s.to_string())
    }
}

impl Error {
    /// Wraps an error as a per-file processing failure for `path`.
    pub fn processing(
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::Processing {
            path: path.into(),
            source: Box::new(source),
        }
    }
}
