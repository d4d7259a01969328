use std::{fs, path::PathBuf};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use lib_msascore::{report::AlignmentMetrics, scoring::score_alignment_file};
use log::{LevelFilter, error, info};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// The aligned fasta files to score.
    #[clap(required = true)]
    alignments: Vec<PathBuf>,

    /// The file to store the computed metrics in toml format.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct ScoreSummary {
    alignments: Vec<AlignmentMetrics>,
}

pub fn cli(cli: Cli) -> Result<()> {
    // The logger may already be initialised when several commands run in the
    // same process, as in the integration tests.
    let _ = TermLogger::init(
        cli.log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let mut scored = Vec::new();
    for path in &cli.alignments {
        match score_alignment_file(path) {
            Ok(metrics) => {
                println!("--- Scoring Results ({}) ---", metrics.source);
                println!("  Gap Percentage: {:.3}%", metrics.scores.gap_percentage);
                println!("  Match Percentage: {:.3}%", metrics.scores.match_percentage);
                println!(
                    "  Average Shannon Entropy: {:.4}",
                    metrics.scores.average_entropy
                );
                scored.push(metrics);
            }
            Err(score_error) => error!("Skipping {path:?}: {score_error}"),
        }
    }

    ensure!(!scored.is_empty(), "No alignment could be scored");

    if let Some(output) = &cli.output {
        let summary = ScoreSummary { alignments: scored };
        fs::write(output, toml::to_string(&summary)?)
            .with_context(|| format!("Unable to write metrics file {output:?}"))?;
        info!("Metrics written to {output:?}");
    }

    Ok(())
}
