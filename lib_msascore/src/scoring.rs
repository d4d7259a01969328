use std::path::Path;

use crate::{
    alignment_matrix::AlignmentMatrix,
    column_statistics::ColumnStatistics,
    error::{Error, Result},
    fasta_parser::parse_fasta_alignment,
    report::AlignmentMetrics,
};

/// Whole-alignment quality metrics.
///
/// The match percentage is the sum over all columns of the consensus symbol's
/// count, relative to the total number of positions. Columns with tied
/// majorities therefore contribute only one majority's count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentScores {
    /// Fraction of gap symbols over all positions, in percent.
    pub gap_percentage: f64,
    /// Summed per-column consensus counts over all positions, in percent.
    pub match_percentage: f64,
    /// Mean per-column Shannon entropy, in bits. Lower means more conserved.
    pub average_entropy: f64,
}

impl AlignmentScores {
    const ZERO: Self = Self {
        gap_percentage: 0.0,
        match_percentage: 0.0,
        average_entropy: 0.0,
    };
}

/// Scores a rectangular alignment matrix.
///
/// An empty alignment (zero rows or zero width) scores `(0, 0, 0)`. Panics on
/// a ragged matrix; callers validate with [`AlignmentMatrix::is_rectangular`]
/// before scoring and reject ragged input themselves.
pub fn score_alignment(matrix: &AlignmentMatrix) -> AlignmentScores {
    assert!(
        matrix.is_rectangular(),
        "Alignment matrix rows have unequal lengths"
    );

    let width = matrix.width();
    let row_count = matrix.row_count();
    if width == 0 || row_count == 0 {
        return AlignmentScores::ZERO;
    }

    let mut gap_count = 0;
    let mut match_count = 0;
    let mut entropy_sum = 0.0;

    for column_index in 0..width {
        let statistics = ColumnStatistics::from_column(matrix, column_index);
        gap_count += statistics.gap_count;
        match_count += statistics.consensus_count();
        entropy_sum += statistics.entropy;
    }

    let total_positions = (width * row_count) as f64;
    AlignmentScores {
        gap_percentage: 100.0 * gap_count as f64 / total_positions,
        match_percentage: 100.0 * match_count as f64 / total_positions,
        average_entropy: entropy_sum / width as f64,
    }
}

/// Parses and scores one alignment file.
///
/// A contentless file scores `(0, 0, 0)`; a ragged alignment is rejected with
/// an attributable error instead of reaching the scorer's precondition.
pub fn score_alignment_file(path: impl AsRef<Path>) -> Result<AlignmentMetrics> {
    let path = path.as_ref();
    let matrix = parse_fasta_alignment(path)?;

    if !matrix.is_rectangular() {
        return Err(Error::RaggedAlignment {
            path: path.to_owned(),
        });
    }

    Ok(AlignmentMetrics {
        source: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        scores: score_alignment(&matrix),
    })
}
