//! Fixed-instruction loading
//!
//! The system message is sourced from a plain-text file named in the
//! configuration. Its trimmed contents become the instruction verbatim; a
//! missing or empty file aborts the run before any operator interaction.

use crate::errors::DraftError;
use std::path::Path;
use tokio::fs;

pub async fn load_instruction<P: AsRef<Path>>(path: P) -> Result<String, DraftError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).await.map_err(|e| {
        DraftError::InstructionError(format!(
            "failed to read instruction file {}: {}",
            path.display(),
            e
        ))
    })?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(DraftError::InstructionError(format!(
            "instruction file {} is empty",
            path.display()
        )));
    }

    Ok(trimmed.to_string())
}
