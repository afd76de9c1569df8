use clap::Parser;

/// Find and replace text across files with glob patterns and regexes.
///
/// `resub` expands glob patterns into a file list, then applies every `--from`
/// pattern against every file in parallel, rewriting matches in place (or just
/// reporting them with `--dry`).
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Regex find & replace across globbed files",
    long_about = "resub - glob-driven regex search and replace.

Expands glob patterns into files and rewrites every match of each --from
pattern, in parallel, with atomic per-file writes.

QUICK EXAMPLES:
  resub --from='fox' --to='🦊' foo.md
  resub --from='v\\d+\\.\\d+\\.\\d+' --to='v2.0.0' foo.css
  resub --from='blob' --to='blog' 'some/**/[gb]lob/*' '!some/glob/foo'
  resub --from='test' --to='TEST' --dry --count-matches '*.txt'"
)]
pub struct Args {
    /// File paths or glob patterns to process. Prefix a pattern with `!` to
    /// exclude its matches from earlier patterns.
    pub files: Vec<String>,

    /// Regex pattern or string to find (can be set multiple times).
    #[arg(long = "from")]
    pub from: Vec<String>,

    /// Replacement string; supports `$1`-style capture references.
    #[arg(long = "to", required = true)]
    pub to: String,

    /// Dry run: compute and report changes without modifying any file.
    #[arg(long)]
    pub dry: bool,

    /// Disable glob expansion; treat inputs as literal file paths.
    #[arg(long = "no-glob")]
    pub no_glob: bool,

    /// Print match and replacement counts for each file.
    #[arg(long = "count-matches")]
    pub count_matches: bool,

    /// Ignore files matching this glob pattern (can be set multiple times).
    #[arg(long = "ignore")]
    pub ignore: Vec<String>,

    /// Search case-insensitively (applies to string patterns only).
    #[arg(long = "ignore-case")]
    pub ignore_case: bool,

    /// Emit results as a JSON array instead of text.
    #[arg(long)]
    pub json: bool,

    /// The number of parallel worker threads to use. Defaults to the number
    /// of logical CPU cores.
    #[arg(short = 'w', long = "workers", env = "RESUB_WORKERS")]
    pub workers: Option<usize>,
}

/// Parses command-line arguments and returns the populated `Args` struct.
pub fn parse_args() -> Args {
    Args::parse()
}
