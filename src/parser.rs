//! Parsing and validation of `.pxlm` text
//!
//! Two entry points read the same line-oriented format:
//!
//! - [`validate`] infers the width from the first row, rejects rows of any
//!   other width and repairs tokens of the wrong length. This backs the
//!   `validate` command.
//! - [`read_matrix`] only checks that the rows form a rectangle and leaves
//!   every token untouched. Export uses it so malformed tokens surface as
//!   decode errors instead of being silently blackened.

use crate::color::{has_token_len, is_valid_token, BLACK};
use crate::matrix::{MatrixError, PixelMatrix};

/// Options controlling token repair during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairOptions {
    /// Token written in place of a repaired pixel
    pub fill: String,
    /// Also repair six-character tokens containing non-hex characters
    pub repair_non_hex: bool,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self { fill: BLACK.to_string(), repair_non_hex: false }
    }
}

/// Position and original text of a token noticed during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIssue {
    /// 1-based line number
    pub line: usize,
    /// 1-based token position within the line
    pub column: usize,
    /// The token as it appeared in the input
    pub token: String,
}

/// Result of validating a `.pxlm` document.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// The corrected matrix
    pub matrix: PixelMatrix,
    /// Tokens replaced with the fill token
    pub repaired: Vec<TokenIssue>,
    /// Six-character tokens kept verbatim even though they are not hex
    pub suspicious: Vec<TokenIssue>,
}

impl ValidationReport {
    pub fn width(&self) -> usize {
        self.matrix.width()
    }

    pub fn height(&self) -> usize {
        self.matrix.height()
    }

    /// True when the corrected matrix is identical to the input.
    pub fn is_clean(&self) -> bool {
        self.repaired.is_empty()
    }
}

const LINE_ENDS: &[char] = &['\r', '\n'];

/// Split text into rows of whitespace-separated tokens.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. A trailing line ending does
/// not start a new row. Blank lines in the middle are rows with no tokens.
pub fn split_rows(content: &str) -> Vec<Vec<&str>> {
    let mut rows = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        let end = rest.find(LINE_ENDS).unwrap_or(rest.len());
        rows.push(rest[..end].split_whitespace().collect());
        rest = &rest[end..];
        rest = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix(LINE_ENDS))
            .unwrap_or(rest);
    }
    rows
}

/// Validate and repair `.pxlm` text with the default repair options.
///
/// ```
/// use pxlm::parser::validate;
///
/// let report = validate("AABBCC 12\nddeeff 000000\n").unwrap();
/// assert_eq!(report.width(), 2);
/// assert_eq!(report.matrix.get(1, 0), Some("000000"));
/// assert_eq!(report.matrix.get(0, 1), Some("ddeeff"));
/// ```
///
/// # Errors
///
/// - [`MatrixError::EmptyInput`] if there are no lines, or no line has any
///   tokens
/// - [`MatrixError::InconsistentRowWidth`] for the first row whose token
///   count differs from the first row, even when the first row is blank
pub fn validate(content: &str) -> Result<ValidationReport, MatrixError> {
    validate_with_options(content, &RepairOptions::default())
}

/// Validate and repair `.pxlm` text.
///
/// Every row must have as many tokens as the first. Each token whose length
/// is not six characters is replaced with `options.fill`; valid tokens keep
/// their original casing. Width errors abort the whole validation.
pub fn validate_with_options(
    content: &str,
    options: &RepairOptions,
) -> Result<ValidationReport, MatrixError> {
    let rows = split_rows(content);
    let width = rows.first().ok_or(MatrixError::EmptyInput)?.len();

    let mut corrected = Vec::with_capacity(rows.len());
    let mut repaired = Vec::new();
    let mut suspicious = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        let line = i + 1;
        if row.len() != width {
            return Err(MatrixError::InconsistentRowWidth { line, expected: width, actual: row.len() });
        }

        let mut out = Vec::with_capacity(width);
        for (j, &token) in row.iter().enumerate() {
            let issue = || TokenIssue { line, column: j + 1, token: token.to_string() };

            if !has_token_len(token) {
                repaired.push(issue());
                out.push(options.fill.clone());
            } else if !is_valid_token(token) {
                if options.repair_non_hex {
                    repaired.push(issue());
                    out.push(options.fill.clone());
                } else {
                    suspicious.push(issue());
                    out.push(token.to_string());
                }
            } else {
                out.push(token.to_string());
            }
        }
        corrected.push(out);
    }

    for issue in &repaired {
        log::debug!(
            "line {}, pixel {}: replaced '{}' with '{}'",
            issue.line,
            issue.column,
            issue.token,
            options.fill
        );
    }
    for issue in &suspicious {
        log::warn!(
            "line {}, pixel {}: '{}' is not a hex color and will fail on export",
            issue.line,
            issue.column,
            issue.token
        );
    }

    // Rows all agree by now; a zero width means every line was blank
    let matrix = PixelMatrix::new(corrected)?;
    Ok(ValidationReport { matrix, repaired, suspicious })
}

/// Read `.pxlm` text as-is, without repairing any token.
///
/// # Errors
///
/// - [`MatrixError::EmptyInput`] if there are no lines, or no line has any
///   tokens
/// - [`MatrixError::MalformedMatrix`] if the rows differ in length
pub fn read_matrix(content: &str) -> Result<PixelMatrix, MatrixError> {
    let owned = split_rows(content)
        .into_iter()
        .map(|row| row.into_iter().map(String::from).collect())
        .collect();
    PixelMatrix::new(owned)
}
