//! In-memory pixel matrix
//!
//! A [`PixelMatrix`] holds rows of textual color tokens. Tokens are kept as
//! text so the validator can pass through the original spelling of valid
//! tokens; decoding to RGB happens only at the image boundary.

use thiserror::Error;

/// Error type for matrix construction and validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Input had no rows, or none of its rows had any tokens
    #[error("empty input: a .pxlm file needs at least one row of pixels")]
    EmptyInput,
    /// A row's token count differs from the width set by the first row
    #[error("Inconsistent row width at line {line}. Expected {expected}, got {actual}.")]
    InconsistentRowWidth {
        /// 1-based line number of the offending row
        line: usize,
        expected: usize,
        actual: usize,
    },
    /// Rows of different lengths were handed to code that needs a rectangle
    #[error("malformed matrix: line {} has {actual} pixels, expected {expected}", .row + 1)]
    MalformedMatrix {
        /// 0-based row index; the message shows it as a 1-based line
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// A rectangular grid of color tokens.
///
/// Invariants, upheld by every constructor:
/// - at least one row and at least one column
/// - every row has the same number of tokens as row 0
///
/// The matrix is immutable once built; repairs produce a new matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMatrix {
    rows: Vec<Vec<String>>,
}

impl PixelMatrix {
    /// Build a matrix from rows, checking that they form a rectangle.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::EmptyInput`] if there are no rows
    /// - [`MatrixError::MalformedMatrix`] for the first row whose length
    ///   differs from row 0
    /// - [`MatrixError::EmptyInput`] if the rows agree but hold no tokens
    pub fn new(rows: Vec<Vec<String>>) -> Result<Self, MatrixError> {
        let expected = rows.first().ok_or(MatrixError::EmptyInput)?.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(MatrixError::MalformedMatrix { row, expected, actual: r.len() });
        }
        if expected == 0 {
            return Err(MatrixError::EmptyInput);
        }
        Ok(Self { rows })
    }

    /// Number of tokens per row (the length of row 0).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Iterate over all tokens in row-major order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flat_map(|row| row.iter().map(String::as_str))
    }

    /// Token at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<&str> {
        self.rows.get(y)?.get(x).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_new_rectangular() {
        let m = PixelMatrix::new(vec![row(&["000000", "FFFFFF"]), row(&["111111", "222222"])])
            .unwrap();
        assert_eq!(m.width(), 2);
        assert_eq!(m.height(), 2);
        assert_eq!(m.get(1, 1), Some("222222"));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_new_empty() {
        assert_eq!(PixelMatrix::new(vec![]), Err(MatrixError::EmptyInput));
        assert_eq!(PixelMatrix::new(vec![row(&[]), row(&[])]), Err(MatrixError::EmptyInput));
    }

    #[test]
    fn test_new_ragged() {
        let err = PixelMatrix::new(vec![
            row(&["000000", "FFFFFF"]),
            row(&["000000", "FFFFFF"]),
            row(&["000000"]),
        ])
        .unwrap_err();
        assert_eq!(err, MatrixError::MalformedMatrix { row: 2, expected: 2, actual: 1 });
    }

    #[test]
    fn test_tokens_row_major() {
        let m = PixelMatrix::new(vec![row(&["A", "B"]), row(&["C", "D"])]).unwrap();
        assert_eq!(m.tokens().collect::<Vec<_>>(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_inconsistent_row_width_message() {
        let err = MatrixError::InconsistentRowWidth { line: 2, expected: 2, actual: 1 };
        assert_eq!(err.to_string(), "Inconsistent row width at line 2. Expected 2, got 1.");
    }

    #[test]
    fn test_malformed_matrix_message_is_one_based() {
        let err = MatrixError::MalformedMatrix { row: 0, expected: 2, actual: 3 };
        assert_eq!(err.to_string(), "malformed matrix: line 1 has 3 pixels, expected 2");
    }
}
