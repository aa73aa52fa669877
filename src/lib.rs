//! PXLM - plain-text pixel matrices
//!
//! This library provides functionality to:
//! - Parse, validate and repair `.pxlm` pixel matrix text
//! - Serialize pixel matrices back to `.pxlm` text
//! - Convert between pixel matrices and raster images (PNG, JPEG, ...)

pub mod bridge;
pub mod cli;
pub mod color;
pub mod config;
pub mod convert;
pub mod matrix;
pub mod output;
pub mod parser;
pub mod writer;

use thiserror::Error;

/// Any error produced by a pxlm operation.
#[derive(Debug, Error)]
pub enum PxlmError {
    #[error(transparent)]
    Color(#[from] color::ColorError),
    #[error(transparent)]
    Matrix(#[from] matrix::MatrixError),
    #[error(transparent)]
    Bridge(#[from] bridge::BridgeError),
    #[error(transparent)]
    Output(#[from] output::OutputError),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
