//! Prompt chains for the huekit scaffolder.
//!
//! Every answer huekit needs is resolved through an [`InputChain`]: a command
//! line override is tried first, then an interactive prompt, then a default.
//!
//! ```ignore
//! use huekit_input::{ArgSource, InputChain, TextPromptSource};
//!
//! let step = InputChain::<String>::new()
//!     .try_source(ArgSource::new("step"))
//!     .try_source(TextPromptSource::new("set colour step"))
//!     .default("0.2".to_string())
//!     .resolve(&matches)?;
//! ```
//!
//! # Features
//!
//! - **`inquire`** (default) - Rich TUI prompts ([`InquireText`], [`InquireSelect`])
//!
//! # Testing
//!
//! The plain prompts read through [`TerminalIO`], so a scripted
//! [`MockTerminal`] can drive a whole prompt session:
//!
//! ```
//! use std::sync::Arc;
//! use huekit_input::{MockTerminal, TextPromptSource};
//!
//! let terminal = Arc::new(MockTerminal::with_responses(["src/theme", "0.3"]));
//! let path = TextPromptSource::with_shared_terminal("path?", Arc::clone(&terminal));
//! let step = TextPromptSource::with_shared_terminal("step?", terminal);
//! ```

mod chain;
mod collector;
mod error;
pub mod sources;

pub use chain::InputChain;
pub use collector::{InputCollector, InputSourceKind, ResolvedInput};
pub use error::InputError;

pub use sources::{
    ArgSource, MockTerminal, RealTerminal, SelectPromptSource, TerminalIO, TextPromptSource,
};

#[cfg(feature = "inquire")]
pub use sources::{InquireSelect, InquireText};
