//! Configuration schema types for `pxlm.toml`
//!
//! Every section and field is optional; an empty file is a valid config.

use crate::color::{is_valid_token, BLACK};
use crate::parser::RepairOptions;
use serde::{Deserialize, Serialize};

/// Settings for the `validate` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateConfig {
    /// Inserted between the file stem and extension of the corrected copy
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Token written in place of repaired pixels
    #[serde(default = "default_fill")]
    pub fill: String,
    /// Also repair six-character tokens that are not hex
    #[serde(default)]
    pub repair_non_hex: bool,
}

fn default_suffix() -> String {
    "_corrected".to_string()
}

fn default_fill() -> String {
    BLACK.to_string()
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self { suffix: default_suffix(), fill: default_fill(), repair_non_hex: false }
    }
}

impl ValidateConfig {
    /// Repair options for the parser.
    pub fn repair_options(&self) -> RepairOptions {
        RepairOptions { fill: self.fill.clone(), repair_non_hex: self.repair_non_hex }
    }
}

/// Settings shared by commands that write files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Create missing parent directories for output files
    #[serde(default = "default_true")]
    pub create_dirs: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { create_dirs: true }
    }
}

/// Complete pxlm.toml configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PxlmConfig {
    /// Validation settings
    #[serde(default)]
    pub validate: ValidateConfig,
    /// Output settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "validate.fill")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pxlm.toml: '{}' {}", self.field, self.message)
    }
}

impl PxlmConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.validate.suffix.is_empty() {
            errors.push(ConfigValidationError {
                field: "validate.suffix".to_string(),
                message: "must be non-empty, or the corrected file would overwrite the input"
                    .to_string(),
            });
        }

        if self.validate.suffix.contains(['/', '\\']) {
            errors.push(ConfigValidationError {
                field: "validate.suffix".to_string(),
                message: "must not contain path separators".to_string(),
            });
        }

        if !is_valid_token(&self.validate.fill) {
            errors.push(ConfigValidationError {
                field: "validate.fill".to_string(),
                message: format!("'{}' is not a 6-digit hex color", self.validate.fill),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
