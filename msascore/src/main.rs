use anyhow::Result;
use clap::Parser;
use msascore::{compare, score};

#[derive(Parser)]
#[command(version, about = "Scoring and comparative evaluation of multiple sequence alignments")]
enum Cli {
    /// Score existing aligned fasta files.
    Score(score::Cli),

    /// Run external alignment engines on unaligned input and compare their outputs.
    Compare(compare::Cli),
}

fn main() -> Result<()> {
    match Cli::parse() {
        Cli::Score(cli) => score::cli(cli),
        Cli::Compare(cli) => compare::cli(cli),
    }
}
