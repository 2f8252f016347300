//! Input source implementations.
//!
//! - [`ArgSource`] - Read from CLI arguments
//! - [`TextPromptSource`], [`SelectPromptSource`] - Line-based terminal prompts
//! - [`InquireText`], [`InquireSelect`] - Rich TUI prompts (requires `inquire` feature)

mod arg;
mod prompt;

#[cfg(feature = "inquire")]
mod inquire_adapters;

pub use arg::ArgSource;
pub use prompt::{MockTerminal, RealTerminal, SelectPromptSource, TerminalIO, TextPromptSource};

#[cfg(feature = "inquire")]
pub use inquire_adapters::{InquireSelect, InquireText};
