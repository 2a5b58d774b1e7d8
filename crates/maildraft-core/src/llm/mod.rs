//! Chat-completion dispatch abstraction and client.
//!
//! Defines the completion trait the run loop programs against and the one
//! HTTP-backed client speaking the OpenAI-style chat-completion protocol.

pub use crate::core_types::Message;
use crate::errors::DraftError;
use async_trait::async_trait;

pub mod client;

pub use client::CompletionClient;

/// One request-reply cycle against a chat-completion endpoint.
///
/// Implementations perform exactly one blocking exchange: no retries, no
/// streaming, no timeout policy beyond the underlying transport defaults.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Dispatch the finalized message list and return the trimmed text of
    /// the first completion choice.
    async fn complete(&self, messages: Vec<Message>) -> Result<String, DraftError>;
}
