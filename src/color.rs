//! Color token parsing and formatting
//!
//! A color token is exactly six hex digits packing an 8-bit red, green and
//! blue channel (`RRGGBB`). Digits are accepted in either case on input;
//! [`encode`] always produces uppercase.

use image::Rgb;
use thiserror::Error;

/// Number of characters in a color token.
pub const TOKEN_LEN: usize = 6;

/// Token substituted for pixels that cannot be read during repair.
pub const BLACK: &str = "000000";

/// Error type for strict color token decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Token is not exactly six hex digits
    #[error("invalid color token '{token}': expected 6 hex digits (RRGGBB)")]
    InvalidColorToken { token: String },
}

impl ColorError {
    fn invalid(token: &str) -> Self {
        ColorError::InvalidColorToken { token: token.to_string() }
    }
}

/// Decode a color token into an RGB triple.
///
/// # Examples
///
/// ```
/// use pxlm::color::decode;
///
/// assert_eq!(decode("ff0080").unwrap(), image::Rgb([255, 0, 128]));
/// assert!(decode("ff008").is_err());
/// assert!(decode("GG0080").is_err());
/// ```
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorToken`] unless the token is exactly six
/// ASCII hex digits.
pub fn decode(token: &str) -> Result<Rgb<u8>, ColorError> {
    if !is_valid_token(token) {
        return Err(ColorError::invalid(token));
    }

    // All six bytes are ASCII hex digits, so byte slicing is on char boundaries
    let r = parse_hex_pair(&token[0..2]).ok_or_else(|| ColorError::invalid(token))?;
    let g = parse_hex_pair(&token[2..4]).ok_or_else(|| ColorError::invalid(token))?;
    let b = parse_hex_pair(&token[4..6]).ok_or_else(|| ColorError::invalid(token))?;
    Ok(Rgb([r, g, b]))
}

/// Decode a color token, falling back to black instead of failing.
///
/// Tokens of the wrong length become black, the same rule the validator
/// applies through [`has_token_len`]. A six-character token with non-hex
/// digits also becomes black here, because an RGB value has no way to carry
/// it. The validator works on text and never calls this: it keeps such a
/// token verbatim, and it fails later in strict [`decode`].
pub fn decode_lenient(token: &str) -> Rgb<u8> {
    if !has_token_len(token) {
        return Rgb([0, 0, 0]);
    }
    decode(token).unwrap_or(Rgb([0, 0, 0]))
}

/// Format an RGB triple as an uppercase `RRGGBB` token.
///
/// ```
/// use pxlm::color::encode;
///
/// assert_eq!(encode(image::Rgb([255, 0, 128])), "FF0080");
/// assert_eq!(encode(image::Rgb([1, 2, 3])), "010203");
/// ```
pub fn encode(rgb: Rgb<u8>) -> String {
    let [r, g, b] = rgb.0;
    format!("{:02X}{:02X}{:02X}", r, g, b)
}

/// Whether a token has the right length to survive repair.
///
/// Length is counted in characters, so multi-byte input is measured the way
/// a reader would count it.
pub fn has_token_len(token: &str) -> bool {
    token.chars().count() == TOKEN_LEN
}

/// Whether a token would decode strictly.
pub fn is_valid_token(token: &str) -> bool {
    token.len() == TOKEN_LEN && token.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a single hex digit (0-9, A-F, a-f) to its value
fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a two-character hex string to u8 (0-255)
fn parse_hex_pair(s: &str) -> Option<u8> {
    let bytes = s.as_bytes();
    let high = parse_hex_digit(*bytes.first()?)?;
    let low = parse_hex_digit(*bytes.get(1)?)?;
    Some(high * 16 + low)
}
