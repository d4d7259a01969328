use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to read alignment file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Alignment {path:?} contains rows of unequal length")]
    RaggedAlignment { path: PathBuf },

    #[error("No input alignments to process")]
    NoInputs,

    #[error("No alignment engines selected")]
    NoEngines,
}
