//! Configuration type definitions for the drafting client
//!
//! Every field beyond the endpoint and credential has a default, so a
//! minimal configuration is just the `api` block.

use crate::composer::CollectionMode;
use crate::errors::DraftError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftConfig {
    pub api: ApiConfig,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub parameters: ModelParameters,
    #[serde(default = "default_prompt_file")]
    pub prompt_file: PathBuf,
    #[serde(default)]
    pub composer: ComposerConfig,
}

/// Endpoint location and credential for the completion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl ApiConfig {
    /// Resolve the credential: an inline key wins, otherwise the named
    /// environment variable is consulted.
    pub fn resolved_key(&self) -> Result<String, DraftError> {
        self.api_key
            .clone()
            .or_else(|| {
                self.api_key_env
                    .as_ref()
                    .and_then(|var| std::env::var(var).ok())
            })
            .ok_or_else(|| {
                DraftError::ConfigError(
                    "no API key found, set api.api_key or api.api_key_env".to_string(),
                )
            })
    }
}

/// Generation parameters forwarded verbatim in the request body.
///
/// `temperature` is optional on the wire: a JSON `null` omits it entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelParameters {
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: Option<f32>,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposerConfig {
    #[serde(default)]
    pub mode: CollectionMode,
    #[serde(default = "default_end_marker")]
    pub end_marker: String,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            mode: CollectionMode::default(),
            end_marker: default_end_marker(),
        }
    }
}

impl DraftConfig {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.api.base_url.trim().is_empty() {
            return Err(DraftError::ConfigError(
                "api.base_url must not be empty".to_string(),
            ));
        }
        if self.api.api_key.is_none() && self.api.api_key_env.is_none() {
            return Err(DraftError::ConfigError(
                "either api.api_key or api.api_key_env must be set".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(DraftError::ConfigError(
                "model must not be empty".to_string(),
            ));
        }
        if self.composer.end_marker.is_empty() {
            return Err(DraftError::ConfigError(
                "composer.end_marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_max_tokens() -> u32 {
    300
}

fn default_temperature() -> Option<f32> {
    Some(1.7)
}

fn default_prompt_file() -> PathBuf {
    PathBuf::from("prompt.txt")
}

fn default_end_marker() -> String {
    "e".to_string()
}
