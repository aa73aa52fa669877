//! Conversion between pixel matrices and raw RGB image buffers
//!
//! [`RawImageBuffer`] is the hand-off point with the `image` crate: the
//! codec decodes a container (PNG, JPEG, WebP, ...) into 8-bit RGB and this
//! module maps those pixels to color tokens, or back.

use crate::color::{decode, encode, ColorError};
use crate::matrix::PixelMatrix;
use image::{Rgb, RgbImage};
use thiserror::Error;

/// Error type for image bridge conversions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// Image has zero width or height
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    /// Pixel data length does not match the declared dimensions
    #[error("pixel buffer holds {actual} pixels, expected {expected} for {width}x{height}")]
    BufferSizeMismatch { width: u32, height: u32, expected: usize, actual: usize },
    /// Matrix is too large to describe as an image
    #[error("matrix of {width}x{height} pixels exceeds the maximum image size")]
    DimensionOverflow { width: usize, height: usize },
    /// A token could not be decoded strictly
    #[error("pixel ({x}, {y}): {source}")]
    InvalidPixel {
        x: usize,
        y: usize,
        #[source]
        source: ColorError,
    },
}

/// Row-major 8-bit RGB pixels with their dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb<u8>>,
}

impl RawImageBuffer {
    /// Create a buffer, checking that `pixels` holds exactly `width * height` entries.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb<u8>>) -> Result<Self, BridgeError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(BridgeError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb<u8>] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Take the pixels of a decoded RGB image.
    pub fn from_rgb_image(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self { width, height, pixels: image.pixels().copied().collect() }
    }

    /// Hand the pixels to the codec as an RGB image.
    pub fn to_rgb_image(&self) -> RgbImage {
        let width = self.width as usize;
        RgbImage::from_fn(self.width, self.height, |x, y| {
            self.pixels[y as usize * width + x as usize]
        })
    }
}

/// Map an image buffer to a matrix of uppercase color tokens.
///
/// ```
/// use image::Rgb;
/// use pxlm::bridge::{from_image, RawImageBuffer};
///
/// let buffer = RawImageBuffer::new(2, 1, vec![Rgb([0, 0, 0]), Rgb([255, 255, 255])]).unwrap();
/// let matrix = from_image(&buffer).unwrap();
/// assert_eq!(matrix.rows(), &[vec!["000000".to_string(), "FFFFFF".to_string()]]);
/// ```
///
/// # Errors
///
/// Returns [`BridgeError::EmptyImage`] if either dimension is zero.
pub fn from_image(buffer: &RawImageBuffer) -> Result<PixelMatrix, BridgeError> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(BridgeError::EmptyImage { width: buffer.width, height: buffer.height });
    }

    let rows = buffer
        .pixels
        .chunks(buffer.width as usize)
        .map(|row| row.iter().map(|&px| encode(px)).collect())
        .collect();

    PixelMatrix::new(rows).map_err(|_| BridgeError::BufferSizeMismatch {
        width: buffer.width,
        height: buffer.height,
        expected: buffer.width as usize * buffer.height as usize,
        actual: buffer.pixels.len(),
    })
}

/// Decode every token of a matrix into an image buffer.
///
/// Decoding is strict: the first token that is not six hex digits aborts the
/// conversion and no buffer is produced.
///
/// # Errors
///
/// - [`BridgeError::InvalidPixel`] for the first undecodable token
/// - [`BridgeError::DimensionOverflow`] if a dimension does not fit in `u32`
pub fn to_image(matrix: &PixelMatrix) -> Result<RawImageBuffer, BridgeError> {
    let overflow =
        || BridgeError::DimensionOverflow { width: matrix.width(), height: matrix.height() };
    let width = u32::try_from(matrix.width()).map_err(|_| overflow())?;
    let height = u32::try_from(matrix.height()).map_err(|_| overflow())?;

    let mut pixels = Vec::with_capacity(matrix.width() * matrix.height());
    for (y, row) in matrix.rows().iter().enumerate() {
        for (x, token) in row.iter().enumerate() {
            let px = decode(token).map_err(|source| BridgeError::InvalidPixel { x, y, source })?;
            pixels.push(px);
        }
    }

    RawImageBuffer::new(width, height, pixels)
}
