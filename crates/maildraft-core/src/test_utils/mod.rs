//! Shared fixtures for exercising the dispatcher against a local endpoint.

pub mod mock_completion_server;

pub use mock_completion_server::{CannedResponse, MockCompletionServer};
