use std::env;

use anyhow::Result;
use clap::Parser;
use msascore::{compare, score};

pub fn run_in_repo_root(args: &str) -> Result<()> {
    // Fixture paths are relative to the repo root, not to this crate.
    env::set_current_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/.."))?;

    if args.starts_with("score ") {
        let args = score::Cli::parse_from(args.split_whitespace());
        score::cli(args)?;
    } else if args.starts_with("compare ") {
        let args = compare::Cli::parse_from(args.split_whitespace());
        compare::cli(args)?;
    }

    Ok(())
}
