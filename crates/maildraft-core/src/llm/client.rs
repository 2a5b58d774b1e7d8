use crate::config::DraftConfig;
use crate::core_types::Message;
use crate::errors::DraftError;
use crate::llm::ChatCompletion;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

/// HTTP client for OpenAI-compatible chat-completion endpoints.
///
/// Built from an explicit configuration value at startup; holds everything a
/// single dispatch needs so the run loop never touches ambient state.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
    temperature: Option<f32>,
    max_tokens: u32,
}

impl CompletionClient {
    pub fn new(api_key: String, api_base: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            model,
            temperature: None,
            max_tokens: 300,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Build a client from configuration, resolving the credential.
    pub fn from_config(config: &DraftConfig) -> Result<Self, DraftError> {
        let api_key = config.api.resolved_key()?;

        let mut client = Self::new(api_key, config.api.base_url.clone(), config.model.clone())
            .with_max_tokens(config.parameters.max_tokens);
        if let Some(temperature) = config.parameters.temperature {
            client = client.with_temperature(temperature);
        }

        Ok(client)
    }

    fn build_request_body(&self, messages: &[Message]) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": self.max_tokens,
        });

        if let Some(temperature) = self.temperature {
            body["temperature"] = temperature.into();
        }

        body
    }

    fn parse_reply(response: &Value) -> Result<String, DraftError> {
        let choices = response["choices"]
            .as_array()
            .ok_or_else(|| DraftError::ParsingError("no choices array in response".to_string()))?;

        let first = choices
            .first()
            .ok_or_else(|| DraftError::ParsingError("empty choices array".to_string()))?;

        let content = first["message"]["content"].as_str().ok_or_else(|| {
            DraftError::ParsingError("first choice has no message content".to_string())
        })?;

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl ChatCompletion for CompletionClient {
    async fn complete(&self, messages: Vec<Message>) -> Result<String, DraftError> {
        let url = format!("{}/chat/completions", self.api_base);
        let body = self.build_request_body(&messages);

        log::debug!("completion request to {}", url);
        log::debug!(
            "request body: {}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| DraftError::TransportError(e.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| DraftError::TransportError(format!("failed to read response: {}", e)))?;

        log::debug!("completion response ({}): {}", status, response_text);

        if !status.is_success() {
            return Err(DraftError::StatusError {
                status: status.to_string(),
                body: response_text,
            });
        }

        let response_json: Value = serde_json::from_str(&response_text)
            .map_err(|e| DraftError::ParsingError(format!("invalid JSON response: {}", e)))?;

        Self::parse_reply(&response_json)
    }
}
