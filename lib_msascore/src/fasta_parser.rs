use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, warn};

use crate::{
    alignment_matrix::AlignmentMatrix,
    error::{Error, Result},
};

/// Parses an aligned fasta file into an [`AlignmentMatrix`].
///
/// Each record is a `>` header line followed by one or more sequence lines,
/// which are concatenated with all embedded whitespace removed to form one
/// row. A file without any sequence data yields an empty matrix and a warning
/// rather than an error; only I/O failures are fatal.
///
/// Row lengths are not validated here, see [`AlignmentMatrix::is_rectangular`].
pub fn parse_fasta_alignment(path: impl AsRef<Path>) -> Result<AlignmentMatrix> {
    let path = path.as_ref();
    debug!("Parsing aligned fasta file {path:?}");

    let file = File::open(path).map_err(|error| Error::Read {
        path: path.to_owned(),
        source: error,
    })?;

    let matrix = parse_fasta_rows(BufReader::new(file)).map_err(|error| Error::Read {
        path: path.to_owned(),
        source: error,
    })?;

    if matrix.is_empty() {
        warn!("Alignment file {path:?} contains no sequence data");
    }

    Ok(matrix)
}

fn parse_fasta_rows(reader: impl BufRead) -> std::io::Result<AlignmentMatrix> {
    let mut rows = Vec::new();
    let mut current_row = Vec::new();

    for line in reader.lines() {
        let line = line?;

        if line.starts_with('>') {
            // A new record; the accumulator is empty for header-only records.
            if !current_row.is_empty() {
                rows.push(current_row);
                current_row = Vec::new();
            }
        } else {
            current_row.extend(
                line.bytes()
                    .filter(|character| !character.is_ascii_whitespace()),
            );
        }
    }

    if !current_row.is_empty() {
        rows.push(current_row);
    }

    Ok(AlignmentMatrix::new(rows))
}
