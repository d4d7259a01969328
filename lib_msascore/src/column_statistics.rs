use crate::alignment_matrix::{AlignmentMatrix, GAP};

/// Symbol statistics of one alignment column.
///
/// The consensus is the symbol with the strictly greatest count; on ties the
/// symbol encountered first when scanning the column top to bottom wins.
/// This makes consensus selection deterministic and independent of any
/// container iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStatistics {
    /// Distinct symbols with their counts, in first-seen scan order.
    pub frequencies: Vec<(u8, usize)>,
    pub row_count: usize,
    pub gap_count: usize,
    pub consensus: Option<(u8, usize)>,
    /// Shannon entropy of the symbol distribution, in bits.
    pub entropy: f64,
}

impl ColumnStatistics {
    /// Computes the statistics of column `index`.
    ///
    /// Panics if any row is shorter than `index + 1`; passing an out-of-range
    /// column index is a contract violation, not a runtime condition.
    pub fn from_column(matrix: &AlignmentMatrix, index: usize) -> Self {
        let mut frequencies = Vec::<(u8, usize)>::new();
        let mut gap_count = 0;

        for (row_index, row) in matrix.rows().iter().enumerate() {
            assert!(
                index < row.len(),
                "Column index {index} is out of range for row {row_index} of length {}",
                row.len()
            );
            let symbol = row[index];

            if symbol == GAP {
                gap_count += 1;
            }

            if let Some((_, count)) = frequencies
                .iter_mut()
                .find(|(existing, _)| *existing == symbol)
            {
                *count += 1;
            } else {
                frequencies.push((symbol, 1));
            }
        }

        let row_count = matrix.row_count();
        let consensus = consensus(&frequencies);
        let entropy = shannon_entropy(&frequencies, row_count);

        Self {
            frequencies,
            row_count,
            gap_count,
            consensus,
            entropy,
        }
    }

    pub fn consensus_count(&self) -> usize {
        self.consensus.map(|(_, count)| count).unwrap_or(0)
    }
}

fn consensus(frequencies: &[(u8, usize)]) -> Option<(u8, usize)> {
    let mut consensus: Option<(u8, usize)> = None;
    for &(symbol, count) in frequencies {
        // Strictly greater, so ties keep the first-seen symbol.
        if consensus.map(|(_, best)| count > best).unwrap_or(true) {
            consensus = Some((symbol, count));
        }
    }
    consensus
}

fn shannon_entropy(frequencies: &[(u8, usize)], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    frequencies
        .iter()
        .map(|&(_, count)| {
            let probability = count as f64 / total as f64;
            -probability * probability.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use crate::alignment_matrix::AlignmentMatrix;

    use super::ColumnStatistics;

    fn matrix(rows: &[&str]) -> AlignmentMatrix {
        rows.iter().collect()
    }

    #[test]
    fn test_conserved_column() {
        let statistics = ColumnStatistics::from_column(&matrix(&["A", "A", "A"]), 0);
        assert_eq!(statistics.frequencies, [(b'A', 3)]);
        assert_eq!(statistics.consensus, Some((b'A', 3)));
        assert_eq!(statistics.gap_count, 0);
        assert_eq!(statistics.entropy, 0.0);
    }

    #[test]
    fn test_all_distinct_column_has_log2_n_entropy() {
        let statistics = ColumnStatistics::from_column(&matrix(&["A", "C", "G", "T"]), 0);
        assert_eq!(statistics.consensus_count(), 1);
        assert!((statistics.entropy - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_gap_counts_as_ordinary_symbol() {
        let statistics = ColumnStatistics::from_column(&matrix(&["-", "-", "A"]), 0);
        assert_eq!(statistics.gap_count, 2);
        assert_eq!(statistics.consensus, Some((b'-', 2)));
    }

    #[test]
    fn test_tie_breaks_to_first_seen_symbol() {
        let statistics = ColumnStatistics::from_column(&matrix(&["T", "A", "T", "A"]), 0);
        assert_eq!(statistics.consensus, Some((b'T', 2)));

        let statistics = ColumnStatistics::from_column(&matrix(&["A", "T", "T", "A"]), 0);
        assert_eq!(statistics.consensus, Some((b'A', 2)));
    }

    #[test]
    fn test_two_thirds_entropy() {
        let statistics = ColumnStatistics::from_column(&matrix(&["T", "T", "A"]), 0);
        let expected = -(2.0 / 3.0 * (2.0f64 / 3.0).log2() + 1.0 / 3.0 * (1.0f64 / 3.0).log2());
        assert!((statistics.entropy - expected).abs() < 1e-12);
    }

    #[test]
    fn test_later_column_statistics() {
        let statistics = ColumnStatistics::from_column(&matrix(&["AC", "AG", "AG"]), 1);
        assert_eq!(statistics.frequencies, [(b'C', 1), (b'G', 2)]);
        assert_eq!(statistics.consensus, Some((b'G', 2)));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_column_panics() {
        ColumnStatistics::from_column(&matrix(&["AC", "A"]), 1);
    }
}
