//! Configuration for pxlm
//!
//! Provides types and loading for the optional `pxlm.toml` file.

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, ConfigError};
pub use schema::*;
