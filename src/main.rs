//! The main entry point for the `resub` command-line application.
//!
//! This file is responsible for parsing command-line arguments, constructing
//! the library `Options`, and printing results. All substitution logic lives
//! in the `resub` library.

use anyhow::Context;
use resub::cli;
use resub::{Matcher, Options, Replacement, output, replacer};
use std::process;

fn main() -> anyhow::Result<()> {
    let args = cli::parse_args();

    if args.files.is_empty() {
        eprintln!("Specify one or more file paths");
        process::exit(1);
    }
    if args.from.is_empty() {
        eprintln!("Specify at least `--from`");
        process::exit(1);
    }

    let options = Options {
        files: args.files,
        from: args.from.into_iter().map(Matcher::Literal).collect(),
        to: Replacement::Literal(args.to),
        dry: args.dry,
        disable_globs: args.no_glob,
        ignore: args.ignore,
        ignore_case: args.ignore_case,
        count_matches: args.count_matches,
        workers: args.workers,
    };

    let outcomes = replacer::run(&options).context("replace batch failed")?;

    let mut results = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(result) => results.push(result),
            // Per-pair failures are reported but do not fail the run.
            Err(e) => eprintln!("{e}"),
        }
    }

    if args.json {
        println!("{}", output::format_json(&results)?);
    } else {
        print!("{}", output::format_text(&results, options.count_matches));
    }

    Ok(())
}
