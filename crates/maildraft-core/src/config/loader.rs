//! Configuration loader for JSON files
//!
//! Loading and validation happen before any operator interaction; a missing
//! or malformed file is a fatal precondition failure for the whole run.

use crate::config::types::DraftConfig;
use crate::errors::DraftError;
use std::path::Path;
use tokio::fs;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a JSON file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<DraftConfig, DraftError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            DraftError::ConfigError(format!(
                "failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_str(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_str(content: &str) -> Result<DraftConfig, DraftError> {
        let config: DraftConfig = serde_json::from_str(content)
            .map_err(|e| DraftError::ConfigError(format!("failed to parse JSON config: {}", e)))?;

        config.validate()?;

        Ok(config)
    }
}
