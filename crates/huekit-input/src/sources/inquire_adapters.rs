//! Rich prompts backed by [inquire](https://crates.io/crates/inquire).
//!
//! Esc and Ctrl+C both surface as [`InputError::PromptCancelled`]. Both
//! sources step aside when stdin is not a terminal, so a chain falls through
//! to its default in scripts and pipes.

use std::fmt::Display;
use std::io::IsTerminal;

use clap::ArgMatches;
use inquire::{InquireError, Select, Text};

use crate::collector::{InputCollector, InputSourceKind};
use crate::InputError;

fn map_inquire_error(e: InquireError) -> InputError {
    match e {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            InputError::PromptCancelled
        }
        other => InputError::PromptFailed(other.to_string()),
    }
}

/// Single line of free text.
///
/// The default is pre-filled by inquire and returned for an empty answer, so
/// this source only yields `None` when no default was given.
pub struct InquireText {
    message: String,
    default: Option<String>,
}

impl InquireText {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: None,
        }
    }

    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

impl InputCollector<String> for InquireText {
    fn kind(&self) -> InputSourceKind {
        InputSourceKind::Prompt
    }

    fn is_available(&self, _matches: &ArgMatches) -> bool {
        std::io::stdin().is_terminal()
    }

    fn collect(&self, _matches: &ArgMatches) -> Result<Option<String>, InputError> {
        let prompt = Text::new(&self.message);
        let prompt = match &self.default {
            Some(default) => prompt.with_default(default),
            None => prompt,
        };

        let answer = prompt.prompt().map_err(map_inquire_error)?;
        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    fn can_retry(&self) -> bool {
        true
    }
}

/// Arrow-key single choice; the cursor starts on the first option.
pub struct InquireSelect<T> {
    message: String,
    options: Vec<T>,
}

impl<T: Display + Clone + Send + Sync + 'static> InquireSelect<T> {
    pub fn new(message: impl Into<String>, options: Vec<T>) -> Self {
        Self {
            message: message.into(),
            options,
        }
    }
}

impl<T: Display + Clone + Send + Sync + 'static> InputCollector<T> for InquireSelect<T> {
    fn kind(&self) -> InputSourceKind {
        InputSourceKind::Prompt
    }

    fn is_available(&self, _matches: &ArgMatches) -> bool {
        std::io::stdin().is_terminal() && !self.options.is_empty()
    }

    fn collect(&self, matches: &ArgMatches) -> Result<Option<T>, InputError> {
        if !self.is_available(matches) {
            return Ok(None);
        }

        Select::new(&self.message, self.options.clone())
            .with_starting_cursor(0)
            .prompt()
            .map(Some)
            .map_err(map_inquire_error)
    }
}
