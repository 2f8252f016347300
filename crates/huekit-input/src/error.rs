//! Error types for input collection.

/// Errors that can occur during input collection.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// User cancelled an interactive prompt.
    #[error("Prompt cancelled by user.")]
    PromptCancelled,

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    PromptFailed(String),

    /// Input validation failed.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// No input was provided and no default is available.
    #[error("No input provided and no default available.")]
    NoInput,
}

impl InputError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationFailed(msg.into())
    }

    /// Whether the user backed out of a prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::PromptCancelled)
    }
}
