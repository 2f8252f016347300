//! The [`InputCollector`] trait and what a resolved value carries.

use std::fmt;

use clap::ArgMatches;

use crate::InputError;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSourceKind {
    /// A command line override such as `--step 0.4`.
    Arg,
    /// An interactive answer.
    Prompt,
    /// The chain's fallback value.
    Default,
}

impl fmt::Display for InputSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Arg => "argument",
            Self::Prompt => "prompt",
            Self::Default => "default",
        })
    }
}

/// One place an [`InputChain`](crate::InputChain) can take a value from.
///
/// `collect` returns `Ok(None)` to pass to the next source and `Err` only
/// for real failures. Backing out of a prompt is
/// [`InputError::PromptCancelled`], never `Ok(None)`, so a cancelled
/// question does not silently take its default.
///
/// Interactive collectors return `true` from [`can_retry`](Self::can_retry):
/// a value failing validation then asks again instead of aborting.
///
/// ```ignore
/// use huekit_input::{InputCollector, InputError, InputSourceKind};
/// use clap::ArgMatches;
///
/// struct FixedValue(String);
///
/// impl InputCollector<String> for FixedValue {
///     fn kind(&self) -> InputSourceKind { InputSourceKind::Arg }
///
///     fn is_available(&self, _: &ArgMatches) -> bool { true }
///
///     fn collect(&self, _: &ArgMatches) -> Result<Option<String>, InputError> {
///         Ok(Some(self.0.clone()))
///     }
/// }
/// ```
pub trait InputCollector<T>: Send + Sync {
    /// Reported in [`ResolvedInput::source`].
    fn kind(&self) -> InputSourceKind;

    /// `false` when the source cannot answer in this run, e.g. no TTY or
    /// the argument was not given.
    fn is_available(&self, matches: &ArgMatches) -> bool;

    fn collect(&self, matches: &ArgMatches) -> Result<Option<T>, InputError>;

    /// Source-specific check, run before the chain's own validators.
    fn validate(&self, _value: &T) -> Result<(), String> {
        Ok(())
    }

    fn can_retry(&self) -> bool {
        false
    }
}

/// A value together with the kind of source that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput<T> {
    pub value: T,
    pub source: InputSourceKind,
}
