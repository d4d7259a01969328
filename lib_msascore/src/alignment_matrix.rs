pub const GAP: u8 = b'-';

/// A multiple sequence alignment: one row per sequence, one column per
/// alignment position.
///
/// Rows are not validated to be of equal length on construction; callers that
/// require a rectangular matrix must check [`is_rectangular`](Self::is_rectangular)
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    rows: Vec<Vec<u8>>,
}

impl AlignmentMatrix {
    pub fn new(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The alignment width, taken from the first row. Zero for an empty matrix.
    pub fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True iff every row has the same length as the first.
    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| row.len() == width)
    }
}

impl<Row: AsRef<[u8]>> FromIterator<Row> for AlignmentMatrix {
    fn from_iter<RowSource: IntoIterator<Item = Row>>(rows: RowSource) -> Self {
        Self::new(rows.into_iter().map(|row| row.as_ref().to_vec()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::AlignmentMatrix;

    #[test]
    fn test_dimensions() {
        let matrix: AlignmentMatrix = ["AC-GT", "AC-GT", "AC-GA"].into_iter().collect();
        assert_eq!(matrix.row_count(), 3);
        assert_eq!(matrix.width(), 5);
        assert!(!matrix.is_empty());
        assert!(matrix.is_rectangular());
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = AlignmentMatrix::new(Vec::new());
        assert_eq!(matrix.row_count(), 0);
        assert_eq!(matrix.width(), 0);
        assert!(matrix.is_empty());
        assert!(matrix.is_rectangular());
    }

    #[test]
    fn test_ragged_matrix() {
        let matrix: AlignmentMatrix = ["ACGT", "ACG"].into_iter().collect();
        assert!(!matrix.is_rectangular());
    }
}
