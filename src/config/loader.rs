//! Configuration loading and discovery for `pxlm.toml`
//!
//! A config file is optional. When no path is given, the nearest
//! `pxlm.toml` above the working directory is used, then the per-user one;
//! with neither present every setting takes its default.

use super::schema::PxlmConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "pxlm.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse pxlm.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Locate the `pxlm.toml` that applies to the working directory.
///
/// The nearest one in the working directory or any ancestor wins. Failing
/// that, the per-user file from [`find_xdg_config`] is used.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir()
        .ok()
        .and_then(|cwd| find_config_from(&cwd))
        .or_else(find_xdg_config)
}

/// Per-user config at `$XDG_CONFIG_HOME/pxlm/pxlm.toml`, with
/// `~/.config` standing in for an unset `XDG_CONFIG_HOME`.
pub fn find_xdg_config() -> Option<PathBuf> {
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("pxlm").join(CONFIG_FILE_NAME)).filter(|path| path.is_file())
}

/// First `pxlm.toml` found in `start` or one of its ancestors.
pub fn find_config_from(start: &Path) -> Option<PathBuf> {
    start.ancestors().map(|dir| dir.join(CONFIG_FILE_NAME)).find(|path| path.is_file())
}

/// Load configuration from a pxlm.toml file.
///
/// If a path is provided, loads from that file and fails if it is missing.
/// Otherwise, uses [`find_config`] and falls back to defaults when nothing
/// is found.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("art/pxlm.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<PxlmConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            log::debug!("loading config from {}", p.display());
            load_config_file(&p)
        }
        None => Ok(PxlmConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<PxlmConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse and validate configuration text.
pub fn parse_config(contents: &str) -> Result<PxlmConfig, ConfigError> {
    let config: PxlmConfig = toml::from_str(contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}
