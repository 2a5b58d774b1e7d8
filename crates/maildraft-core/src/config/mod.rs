//! Configuration module for the drafting client
//!
//! Supports JSON configuration files with environment-based credential
//! resolution and startup validation. Configuration is an explicit value
//! handed to the dispatcher at construction, never ambient process state.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;

use crate::errors::DraftError;
use std::path::Path;

/// Load a configuration from a JSON file
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<DraftConfig, DraftError> {
    ConfigLoader::from_file(path).await
}
