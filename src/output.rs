//! File I/O and output path generation
//!
//! Everything that touches the filesystem lives here so the parser, writer
//! and bridge stay pure. Image containers are read and written through the
//! `image` crate; the container format is inferred from the file extension.

use crate::bridge::RawImageBuffer;
use image::GenericImageView;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension used for pixel matrix files.
pub const PXLM_EXTENSION: &str = "pxlm";

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Check if a path has the `.pxlm` extension.
pub fn is_pxlm_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(PXLM_EXTENSION)
}

/// Read a `.pxlm` file as text.
pub fn read_pxlm(path: &Path) -> Result<String, OutputError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Write `.pxlm` text to a file, replacing any existing file.
///
/// # Arguments
///
/// * `path` - The output file path
/// * `content` - Serialized matrix text
/// * `create_dirs` - Create missing parent directories first
pub fn write_pxlm(path: &Path, content: &str, create_dirs: bool) -> Result<(), OutputError> {
    if create_dirs {
        ensure_parent_dir(path)?;
    }
    std::fs::write(path, content)?;
    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Decode an image file into 8-bit RGB pixels.
///
/// Any color type the codec understands is accepted; alpha and palette
/// information is flattened to RGB by the codec.
pub fn load_image(path: &Path) -> Result<RawImageBuffer, OutputError> {
    let image = image::open(path)?;
    let (width, height) = image.dimensions();
    log::debug!("decoded {} ({}x{}, {:?})", path.display(), width, height, image.color());
    Ok(RawImageBuffer::from_rgb_image(&image.to_rgb8()))
}

/// Encode an RGB buffer to an image file.
///
/// The container format comes from the extension of `path`; unknown
/// extensions are reported as an image error.
///
/// # Arguments
///
/// * `buffer` - The pixels to save
/// * `path` - The output file path
/// * `create_dirs` - Create missing parent directories first
pub fn save_image(
    buffer: &RawImageBuffer,
    path: &Path,
    create_dirs: bool,
) -> Result<(), OutputError> {
    // Fail on the extension before creating any directories
    let format = image::ImageFormat::from_path(path)?;
    if create_dirs {
        ensure_parent_dir(path)?;
    }

    buffer.to_rgb_image().save_with_format(path, format)?;
    log::debug!("encoded {}x{} image as {:?}", buffer.width(), buffer.height(), format);
    Ok(())
}

/// Generate the path of the corrected copy written by `validate`.
///
/// The suffix goes between the file stem and the extension:
/// `art/logo.pxlm` becomes `art/logo_corrected.pxlm`. A path without an
/// extension gets `.pxlm` appended after the suffix.
pub fn corrected_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| PXLM_EXTENSION.to_string());
    let file_name = format!("{}{}.{}", stem, suffix, ext);

    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
