//! `resub` is a library for glob-driven regex find-and-replace across files.
//!
//! It provides the core logic for the `resub` command-line tool but can also
//! be used as a standalone library. The main components are:
//!
//! - `resolver`: Expands glob patterns (with `!` negation and an ignore list)
//!   into a deduplicated list of file paths.
//! - `engine`: The pure substitution engine, producing new contents plus
//!   match/replace counts for one matcher against one file's contents.
//! - `replacer`: Per-file read-substitute-write transactions and the
//!   orchestrator that fans them out over the (matcher × file) cross product.
//! - `matcher`: The `from`/`to` variants — literal strings, precompiled
//!   regexes, and per-file/per-match functions (functions are library-only;
//!   the CLI constructs literals).
//!
//! The library is designed to be fast, using parallel processing with Rayon
//! and atomic in-place writes via `tempfile`.
//!
//! ```no_run
//! use resub::{Matcher, Options, replacer};
//!
//! let options = Options::new(["src/**/*.rs"], [Matcher::literal("old_name")], "new_name");
//! let outcomes = replacer::run(&options)?;
//! for outcome in outcomes {
//!     let result = outcome?;
//!     println!("{}: {} replacements", result.file.display(), result.replace_count);
//! }
//! # Ok::<(), resub::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod matcher;
pub mod output;
pub mod replacer;
pub mod resolver;

// Re-export main types for easier access by library users.
pub use config::Options;
pub use engine::{Substitution, substitute};
pub use errors::{Error, Result};
pub use matcher::{Matcher, Replacement};
pub use replacer::{PairOutcome, ReplaceResult, run};
pub use resolver::resolve_paths;
