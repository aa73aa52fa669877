//! Serialization of pixel matrices to `.pxlm` text

use crate::matrix::PixelMatrix;

/// Serialize a matrix as `.pxlm` text.
///
/// Tokens are written exactly as stored, one row per line separated by
/// single spaces, and the output always ends with one newline.
///
/// ```
/// use pxlm::matrix::PixelMatrix;
/// use pxlm::writer::write_matrix;
///
/// let matrix = PixelMatrix::new(vec![vec!["000000".into(), "FFFFFF".into()]]).unwrap();
/// assert_eq!(write_matrix(&matrix), "000000 FFFFFF\n");
/// ```
pub fn write_matrix(matrix: &PixelMatrix) -> String {
    // 6 hex digits plus a separator per token
    let mut out = String::with_capacity(matrix.width() * matrix.height() * 7);
    for row in matrix.rows() {
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}
