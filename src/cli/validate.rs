//! Validate command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::PxlmConfig;
use crate::convert::validate_file;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the validate command
pub fn run_validate(filepath: &Path, config: &PxlmConfig) -> ExitCode {
    let outcome = match validate_file(filepath, config) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let report = &outcome.report;
    println!("File validated and corrected: {}", outcome.corrected_path.display());
    println!("Width: {}, Height: {}", report.width(), report.height());

    if !report.repaired.is_empty() {
        println!("Repaired {} pixel(s) with {}", report.repaired.len(), config.validate.fill);
    }

    ExitCode::from(EXIT_SUCCESS)
}
