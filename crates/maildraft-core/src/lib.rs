//! Core library for the maildraft drafting client.
//!
//! This crate provides the building blocks for a single-shot, interactive
//! drafting session against an OpenAI-compatible chat-completion endpoint:
//! collect operator input from the console, assemble it into a two-message
//! conversation, dispatch one request, surface the reply or a typed failure.
//!
//! # Architecture Overview
//!
//! - **Conversation composition**: console input collection policies and
//!   message assembly
//! - **Request dispatch**: a provider-agnostic completion trait with one
//!   HTTP-backed client
//! - **Configuration system**: JSON configuration with credential resolution
//!   and validation
//! - **Instruction loading**: the fixed system prompt sourced from a text file

pub mod composer;
pub mod config;
pub mod core_types;
pub mod errors;
pub mod llm;
pub mod prompt;

pub use composer::{build_messages, CollectionMode, Composer};
pub use config::{ConfigLoader, DraftConfig};
pub use core_types::{Message, Role};
pub use errors::DraftError;
pub use llm::{ChatCompletion, CompletionClient};

#[cfg(test)]
pub mod test_utils;
