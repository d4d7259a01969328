use std::{
    fs::File,
    path::Path,
    process::{Command, ExitStatus, Stdio},
};

use log::debug;
use thiserror::Error;

/// An external alignment tool: it consumes an unaligned fasta file and either
/// produces an aligned fasta file at the requested location or fails.
pub trait AlignmentEngine {
    /// Human-readable engine name for reports and messages.
    fn name(&self) -> &str;

    /// Short lowercase tag used in output file names.
    fn output_label(&self) -> &str;

    fn align(&self, input: &Path, output: &Path) -> Result<(), EngineError>;
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unable to start {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed with {status}: {stderr}")]
    Failed {
        program: &'static str,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Unable to create engine output file {path:?}: {source}")]
    Output {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    TCoffee,
    Mafft,
    ClustalOmega,
}

impl EngineKind {
    /// All supported engines, in the order they run when all are requested.
    pub const ALL: [Self; 3] = [Self::TCoffee, Self::Mafft, Self::ClustalOmega];

    pub fn name(self) -> &'static str {
        match self {
            Self::TCoffee => "T-Coffee",
            Self::Mafft => "MAFFT",
            Self::ClustalOmega => "Clustal Omega",
        }
    }

    pub fn output_label(self) -> &'static str {
        match self {
            Self::TCoffee => "tcoffee",
            Self::Mafft => "mafft",
            Self::ClustalOmega => "clustal",
        }
    }

    fn program(self) -> &'static str {
        match self {
            Self::TCoffee => "t_coffee",
            Self::Mafft => "mafft",
            Self::ClustalOmega => "clustalo",
        }
    }
}

/// A subprocess invocation of one of the supported alignment engines.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    kind: EngineKind,
    threads: usize,
}

impl Engine {
    pub fn new(kind: EngineKind, threads: usize) -> Self {
        Self { kind, threads }
    }

    fn run(&self, mut command: Command) -> Result<(), EngineError> {
        let program = self.kind.program();
        debug!("Running {command:?}");

        let output = command
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|error| EngineError::Spawn {
                program,
                source: error,
            })?;

        check_status(program, output.status, &output.stderr)
    }

    // MAFFT writes the alignment to stdout, so its invocation redirects
    // stdout into the output file instead of capturing it.
    fn run_mafft(&self, input: &Path, output_path: &Path) -> Result<(), EngineError> {
        let program = self.kind.program();
        let output_file = File::create(output_path).map_err(|error| EngineError::Output {
            path: output_path.to_owned(),
            source: error,
        })?;

        let mut command = Command::new(program);
        command.arg("--auto").arg(input);
        debug!("Running {command:?}");

        let child = command
            .stdout(Stdio::from(output_file))
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| EngineError::Spawn {
                program,
                source: error,
            })?;
        let output = child
            .wait_with_output()
            .map_err(|error| EngineError::Spawn {
                program,
                source: error,
            })?;

        check_status(program, output.status, &output.stderr)
    }
}

impl AlignmentEngine for Engine {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn output_label(&self) -> &str {
        self.kind.output_label()
    }

    fn align(&self, input: &Path, output: &Path) -> Result<(), EngineError> {
        match self.kind {
            EngineKind::TCoffee => {
                let mut command = Command::new(self.kind.program());
                command
                    .arg("-seq")
                    .arg(input)
                    .arg("-method=t_coffee_msa")
                    .arg("-output")
                    .arg("fasta_aln")
                    .arg("-outfile")
                    .arg(output)
                    .arg("-multi_core")
                    .arg(self.threads.to_string());
                self.run(command)
            }
            EngineKind::Mafft => self.run_mafft(input, output),
            EngineKind::ClustalOmega => {
                let mut command = Command::new(self.kind.program());
                command
                    .arg("-i")
                    .arg(input)
                    .arg("-o")
                    .arg(output)
                    .arg("--force")
                    .arg(format!("--threads={}", self.threads));
                self.run(command)
            }
        }
    }
}

fn check_status(
    program: &'static str,
    status: ExitStatus,
    stderr: &[u8],
) -> Result<(), EngineError> {
    if status.success() {
        Ok(())
    } else {
        Err(EngineError::Failed {
            program,
            status,
            stderr: String::from_utf8_lossy(stderr).trim().to_string(),
        })
    }
}
