//! File-level operations: validate, image to `.pxlm`, `.pxlm` to image
//!
//! Each operation reads its input once, transforms it in memory and writes
//! one output file. Nothing is written when any step fails.

use std::path::{Path, PathBuf};

use crate::bridge::{from_image, to_image, RawImageBuffer};
use crate::config::PxlmConfig;
use crate::matrix::PixelMatrix;
use crate::output::{corrected_path, load_image, read_pxlm, save_image, write_pxlm};
use crate::parser::{read_matrix, validate_with_options, ValidationReport};
use crate::writer::write_matrix;
use crate::PxlmError;

/// Result of validating a file on disk.
#[derive(Debug, Clone)]
pub struct ValidateOutcome {
    /// Where the corrected copy was written
    pub corrected_path: PathBuf,
    pub report: ValidationReport,
}

/// Validate a `.pxlm` file and write the corrected copy next to it.
///
/// The copy is named after the input with `config.validate.suffix` before
/// the extension. On a width error nothing is written.
pub fn validate_file(path: &Path, config: &PxlmConfig) -> Result<ValidateOutcome, PxlmError> {
    let content = read_pxlm(path)?;
    let report = validate_with_options(&content, &config.validate.repair_options())?;

    let corrected = corrected_path(path, &config.validate.suffix);
    write_pxlm(&corrected, &write_matrix(&report.matrix), config.export.create_dirs)?;
    log::info!(
        "validated {} ({}x{}, {} repaired)",
        path.display(),
        report.width(),
        report.height(),
        report.repaired.len()
    );

    Ok(ValidateOutcome { corrected_path: corrected, report })
}

/// Convert an image file to a `.pxlm` file.
pub fn image_to_pxlm(
    image_path: &Path,
    output: &Path,
    config: &PxlmConfig,
) -> Result<PixelMatrix, PxlmError> {
    let buffer = load_image(image_path)?;
    let matrix = from_image(&buffer)?;
    write_pxlm(output, &write_matrix(&matrix), config.export.create_dirs)?;
    log::info!("converted {} to {}", image_path.display(), output.display());
    Ok(matrix)
}

/// Convert a `.pxlm` file to an image file.
///
/// Tokens are decoded strictly; run [`validate_file`] first to repair
/// tokens of the wrong length.
pub fn pxlm_to_image(
    pxlm_path: &Path,
    output: &Path,
    config: &PxlmConfig,
) -> Result<RawImageBuffer, PxlmError> {
    let content = read_pxlm(pxlm_path)?;
    let matrix = read_matrix(&content)?;
    let buffer = to_image(&matrix)?;
    save_image(&buffer, output, config.export.create_dirs)?;
    log::info!("converted {} to {}", pxlm_path.display(), output.display());
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::BridgeError;
    use crate::matrix::MatrixError;
    use image::Rgb;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_file_writes_sibling() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("art.pxlm");
        fs::write(&input, "AABBCC 12\nddeeff 000000\n").unwrap();

        let outcome = validate_file(&input, &PxlmConfig::default()).unwrap();
        assert_eq!(outcome.corrected_path, dir.path().join("art_corrected.pxlm"));
        assert_eq!(outcome.report.repaired.len(), 1);
        assert_eq!(
            fs::read_to_string(&outcome.corrected_path).unwrap(),
            "AABBCC 000000\nddeeff 000000\n"
        );
        // Input is left alone
        assert_eq!(fs::read_to_string(&input).unwrap(), "AABBCC 12\nddeeff 000000\n");
    }

    #[test]
    fn test_validate_file_width_error_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.pxlm");
        fs::write(&input, "AABBCC DDEEFF\n000000\n").unwrap();

        let err = validate_file(&input, &PxlmConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            PxlmError::Matrix(MatrixError::InconsistentRowWidth { line: 2, expected: 2, actual: 1 })
        ));
        assert!(!dir.path().join("bad_corrected.pxlm").exists());
    }

    #[test]
    fn test_validate_file_custom_suffix_and_fill() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("art.pxlm");
        fs::write(&input, "x\n").unwrap();

        let mut config = PxlmConfig::default();
        config.validate.suffix = "_fixed".to_string();
        config.validate.fill = "FFFFFF".to_string();

        let outcome = validate_file(&input, &config).unwrap();
        assert_eq!(outcome.corrected_path, dir.path().join("art_fixed.pxlm"));
        assert_eq!(fs::read_to_string(&outcome.corrected_path).unwrap(), "FFFFFF\n");
    }

    #[test]
    fn test_image_round_trip_through_files() {
        let dir = tempdir().unwrap();
        let png = dir.path().join("in.png");
        let pxlm = dir.path().join("out/in.pxlm");
        let back = dir.path().join("back.png");

        let buffer = RawImageBuffer::new(
            3,
            2,
            vec![
                Rgb([0, 0, 0]),
                Rgb([255, 255, 255]),
                Rgb([18, 52, 86]),
                Rgb([120, 154, 188]),
                Rgb([1, 2, 3]),
                Rgb([254, 128, 7]),
            ],
        )
        .unwrap();
        save_image(&buffer, &png, true).unwrap();

        let matrix = image_to_pxlm(&png, &pxlm, &PxlmConfig::default()).unwrap();
        assert_eq!((matrix.width(), matrix.height()), (3, 2));
        assert_eq!(
            fs::read_to_string(&pxlm).unwrap(),
            "000000 FFFFFF 123456\n789ABC 010203 FE8007\n"
        );

        let decoded = pxlm_to_image(&pxlm, &back, &PxlmConfig::default()).unwrap();
        assert_eq!(decoded, buffer);
        assert_eq!(load_image(&back).unwrap(), buffer);
    }

    #[test]
    fn test_pxlm_to_image_rejects_short_token() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("art.pxlm");
        let output = dir.path().join("art.png");
        fs::write(&input, "000000 FFF\n").unwrap();

        let err = pxlm_to_image(&input, &output, &PxlmConfig::default()).unwrap_err();
        assert!(matches!(err, PxlmError::Bridge(BridgeError::InvalidPixel { x: 1, y: 0, .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_pxlm_to_image_ragged_rows() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("art.pxlm");
        fs::write(&input, "000000 000000\n000000\n").unwrap();

        let err = pxlm_to_image(&input, &dir.path().join("art.png"), &PxlmConfig::default())
            .unwrap_err();
        assert!(matches!(err, PxlmError::Matrix(MatrixError::MalformedMatrix { .. })));
    }

    #[test]
    fn test_image_to_pxlm_missing_input() {
        let dir = tempdir().unwrap();
        let err = image_to_pxlm(
            &dir.path().join("missing.png"),
            &dir.path().join("out.pxlm"),
            &PxlmConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PxlmError::Output(_)));
    }
}
