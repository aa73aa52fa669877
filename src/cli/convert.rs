//! Image conversion command implementations (image_to_pxlm, pxlm_to_image)

use std::path::Path;
use std::process::ExitCode;

use crate::bridge::BridgeError;
use crate::config::PxlmConfig;
use crate::convert::{image_to_pxlm, pxlm_to_image};
use crate::output::is_pxlm_file;
use crate::PxlmError;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the image_to_pxlm command
pub fn run_image_to_pxlm(image_path: &Path, output_pxlm: &Path, config: &PxlmConfig) -> ExitCode {
    if !is_pxlm_file(output_pxlm) {
        log::warn!("output '{}' does not have a .pxlm extension", output_pxlm.display());
    }

    match image_to_pxlm(image_path, output_pxlm, config) {
        Ok(matrix) => {
            println!("Image converted to .pxlm: {}", output_pxlm.display());
            println!("Width: {}, Height: {}", matrix.width(), matrix.height());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the pxlm_to_image command
pub fn run_pxlm_to_image(pxlm_path: &Path, output_image: &Path, config: &PxlmConfig) -> ExitCode {
    match pxlm_to_image(pxlm_path, output_image, config) {
        Ok(_) => {
            println!(".pxlm converted to image: {}", output_image.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, PxlmError::Bridge(BridgeError::InvalidPixel { .. })) {
                eprintln!(
                    "Hint: 'pxlm validate {}' repairs pixels of the wrong length",
                    pxlm_path.display()
                );
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}
