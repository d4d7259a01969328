use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use lib_msascore::{
    engine::{AlignmentEngine, Engine, EngineKind},
    pipeline::run_comparison,
};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

const FASTA_EXTENSIONS: [&str; 3] = ["fasta", "fa", "fna"];

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// The path to an unaligned fasta file, or a directory of fasta files
    /// (.fasta, .fa, .fna).
    #[clap(long, short = 'i')]
    input: PathBuf,

    /// The directory in which the engine outputs are stored.
    #[clap(long, short = 'd')]
    output_directory: PathBuf,

    /// The alignment engines to run and compare.
    #[clap(long, short = 'e', default_value = "all")]
    engines: Vec<EngineSelector>,

    /// The number of threads passed to engines that support multithreading.
    #[clap(long, default_value = "8")]
    threads: usize,

    /// The file to store the comparative report in toml format.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineSelector {
    TCoffee,
    Mafft,
    ClustalOmega,
    All,
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

    let inputs = discover_inputs(&cli.input)?;
    let engine_kinds = select_engines(&cli.engines);
    ensure!(!engine_kinds.is_empty(), "No alignment engines selected");

    fs::create_dir_all(&cli.output_directory).with_context(|| {
        format!(
            "Unable to create output directory {:?}",
            cli.output_directory
        )
    })?;

    let engines = engine_kinds
        .iter()
        .map(|&kind| Engine::new(kind, cli.threads))
        .collect::<Vec<_>>();
    let engines = engines
        .iter()
        .map(|engine| engine as &dyn AlignmentEngine)
        .collect::<Vec<_>>();

    let report = run_comparison(&inputs, &engines, &cli.output_directory)?;

    // The comparative table is only meaningful when engines compete.
    if engines.len() > 1 && !report.entries.is_empty() {
        println!("{report}");
    }

    if let Some(output) = &cli.output {
        fs::write(output, toml::to_string(&report)?)
            .with_context(|| format!("Unable to write report file {output:?}"))?;
        info!("Comparative report written to {output:?}");
    }

    Ok(())
}

fn discover_inputs(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_owned()]);
    }
    ensure!(path.is_dir(), "Input path {path:?} not found");

    let mut inputs = Vec::new();
    for entry in
        fs::read_dir(path).with_context(|| format!("Unable to read input directory {path:?}"))?
    {
        let entry_path = entry?.path();
        let is_fasta = entry_path
            .extension()
            .and_then(OsStr::to_str)
            .map(|extension| FASTA_EXTENSIONS.contains(&extension))
            .unwrap_or(false);

        if entry_path.is_file() && is_fasta {
            inputs.push(entry_path);
        }
    }

    // Directory iteration order is platform-dependent.
    inputs.sort();
    ensure!(!inputs.is_empty(), "No fasta files found in {path:?}");
    Ok(inputs)
}

fn select_engines(selectors: &[EngineSelector]) -> Vec<EngineKind> {
    let mut kinds = Vec::new();
    let mut push = |kind: EngineKind, kinds: &mut Vec<EngineKind>| {
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    };

    for selector in selectors {
        match selector {
            EngineSelector::TCoffee => push(EngineKind::TCoffee, &mut kinds),
            EngineSelector::Mafft => push(EngineKind::Mafft, &mut kinds),
            EngineSelector::ClustalOmega => push(EngineKind::ClustalOmega, &mut kinds),
            EngineSelector::All => {
                for kind in EngineKind::ALL {
                    push(kind, &mut kinds);
                }
            }
        }
    }

    kinds
}
