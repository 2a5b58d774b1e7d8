//! Error types for failure handling across the drafting pipeline
//!
//! Startup errors (configuration, instruction file) are fatal and abort the
//! process before any operator interaction. Dispatch errors are caught at the
//! dispatcher boundary, rendered human-readable, and never crash the run.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DraftError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Instruction error: {0}")]
    InstructionError(String),
    #[error("Could not reach completion endpoint: {0}")]
    TransportError(String),
    #[error("Completion request failed with status {status}: {body}")]
    StatusError { status: String, body: String },
    #[error("Parsing error: {0}")]
    ParsingError(String),
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for DraftError {
    fn from(err: std::io::Error) -> Self {
        DraftError::IoError(err.to_string())
    }
}
