//! Conversation composition from interactive console input
//!
//! Turns operator-supplied text into the finalized ordered message pair sent
//! to the completion endpoint. Two collection policies exist and must not be
//! mixed within one run: multiline section collection (email body, then a
//! rewriting direction, each terminated by an end-marker line) and iterative
//! yes/no accumulation (one fragment per round until the operator declines).
//!
//! The composer is generic over its line source and prompt sink so tests can
//! drive it with in-memory buffers; production wires stdin and stdout.

use crate::core_types::Message;
use crate::errors::DraftError;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// Input collection policy, selected by configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMode {
    /// Email body and direction collected as separate multiline sections.
    #[default]
    MultilineSections,
    /// Fragments accumulated one per round, gated by a y/n continuation ask.
    IterativeYesNo,
}

pub struct Composer<R, W> {
    input: R,
    output: W,
    end_marker: String,
}

impl<R: BufRead, W: Write> Composer<R, W> {
    pub fn new(input: R, output: W, end_marker: impl Into<String>) -> Self {
        Self {
            input,
            output,
            end_marker: end_marker.into(),
        }
    }

    /// Run the configured collection policy to completion and return the
    /// accumulated prompt text.
    pub fn compose(&mut self, mode: CollectionMode) -> Result<String, DraftError> {
        match mode {
            CollectionMode::MultilineSections => self.collect_sections(),
            CollectionMode::IterativeYesNo => self.collect_iterative(),
        }
    }

    /// Collect the email body and the rewriting direction as two multiline
    /// sections and join them under labeled headers.
    pub fn collect_sections(&mut self) -> Result<String, DraftError> {
        let body = self.collect_multiline("Email body")?;
        let direction = self.collect_multiline("Direction")?;
        Ok(format!("Email:\n{}\n\nDirection:\n{}", body, direction))
    }

    /// Read lines until one is exactly equal to the end marker, then return
    /// the collected lines joined with line breaks.
    ///
    /// Termination is full-line string equality: a line merely containing the
    /// marker, or the marker with surrounding whitespace, does not terminate.
    /// An immediate end marker yields an empty string, which is valid.
    pub fn collect_multiline(&mut self, label: &str) -> Result<String, DraftError> {
        writeln!(
            self.output,
            "{} (finish with '{}' on its own line):",
            label, self.end_marker
        )?;
        let mut lines = Vec::new();
        loop {
            let line = self.read_line()?;
            if line == self.end_marker {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    /// Accumulate fragments one round at a time: the first is labeled
    /// "Email:", every later one is appended as " Direction: ..." with a
    /// single separating space. The loop continues only while the trimmed,
    /// lowercased continuation answer is exactly "y".
    pub fn collect_iterative(&mut self) -> Result<String, DraftError> {
        let mut accumulated = String::new();
        loop {
            if accumulated.is_empty() {
                writeln!(self.output, "Email:")?;
                let fragment = self.read_line()?;
                accumulated = format!("Email: {}", fragment);
            } else {
                writeln!(self.output, "Direction:")?;
                let fragment = self.read_line()?;
                accumulated.push_str(" Direction: ");
                accumulated.push_str(&fragment);
            }
            writeln!(self.output, "Add another direction? [y/n]")?;
            let answer = self.read_line()?;
            if answer.trim().to_lowercase() != "y" {
                break;
            }
        }
        Ok(accumulated)
    }

    fn read_line(&mut self) -> Result<String, DraftError> {
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(DraftError::IoError(
                "unexpected end of input during composition".to_string(),
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Assemble the finalized conversation: the fixed instruction as the system
/// message, the accumulated prompt as the user message, in that order.
pub fn build_messages(system_text: &str, user_text: &str) -> Vec<Message> {
    vec![Message::system(system_text), Message::user(user_text)]
}
