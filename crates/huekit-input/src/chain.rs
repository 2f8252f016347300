//! Input chain builder for composing multiple sources.
//!
//! The [`InputChain`] tries its sources in order until one provides input,
//! falling back to a default value when none does.

use std::fmt;

use clap::ArgMatches;

use crate::collector::{InputCollector, InputSourceKind, ResolvedInput};
use crate::InputError;

/// Validator function type.
type ValidatorFn<T> = Box<dyn Fn(&T) -> Result<(), String> + Send + Sync>;

/// Chain multiple input sources with fallback behavior.
///
/// Sources are tried in the order they were added. The first source that
/// returns `Some(value)` wins. If all sources return `None`, the chain
/// uses the default value or returns [`InputError::NoInput`].
///
/// Errors from a source abort the chain. In particular a cancelled prompt
/// surfaces as [`InputError::PromptCancelled`] and never falls through to
/// the default.
///
/// ```ignore
/// use huekit_input::{InputChain, ArgSource, TextPromptSource};
///
/// let target = InputChain::<String>::new()
///     .try_source(ArgSource::new("out"))
///     .try_source(TextPromptSource::new("generate to which path?"))
///     .default("src/styles".to_string())
///     .resolve(&matches)?;
/// ```
pub struct InputChain<T> {
    sources: Vec<(Box<dyn InputCollector<T>>, InputSourceKind)>,
    validators: Vec<ValidatorFn<T>>,
    default: Option<T>,
}

impl<T: Clone + Send + Sync + 'static> InputChain<T> {
    /// Create a new empty input chain.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            validators: Vec::new(),
            default: None,
        }
    }

    /// Add a source to the chain.
    ///
    /// Sources are tried in the order they are added.
    pub fn try_source<C: InputCollector<T> + 'static>(mut self, source: C) -> Self {
        let kind = source.kind();
        self.sources.push((Box::new(source), kind));
        self
    }

    /// Add a validation rule.
    ///
    /// Interactive sources re-prompt when a rule fails; other sources turn
    /// the failure into [`InputError::ValidationFailed`].
    pub fn validate<F>(mut self, f: F, error_msg: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let msg = error_msg.into();
        self.validators.push(Box::new(move |value| {
            if f(value) {
                Ok(())
            } else {
                Err(msg.clone())
            }
        }));
        self
    }

    /// Set a default value to use when no source provides input.
    pub fn default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Resolve the chain and return the input value.
    pub fn resolve(&self, matches: &ArgMatches) -> Result<T, InputError> {
        self.resolve_with_source(matches).map(|r| r.value)
    }

    /// Resolve the chain and return the input with source metadata.
    pub fn resolve_with_source(
        &self,
        matches: &ArgMatches,
    ) -> Result<ResolvedInput<T>, InputError> {
        for (source, kind) in &self.sources {
            if !source.is_available(matches) {
                continue;
            }

            // Interactive sources loop here until they produce a valid value,
            // return None, or fail.
            while let Some(value) = source.collect(matches)? {
                match self.check(source.as_ref(), &value) {
                    Ok(()) => {
                        return Ok(ResolvedInput {
                            value,
                            source: *kind,
                        })
                    }
                    Err(msg) if source.can_retry() => {
                        eprintln!("Invalid: {}", msg);
                    }
                    Err(msg) => return Err(InputError::ValidationFailed(msg)),
                }
            }
        }

        if let Some(value) = &self.default {
            return Ok(ResolvedInput {
                value: value.clone(),
                source: InputSourceKind::Default,
            });
        }

        Err(InputError::NoInput)
    }

    fn check(&self, source: &dyn InputCollector<T>, value: &T) -> Result<(), String> {
        source.validate(value)?;
        self.validators.iter().try_for_each(|validator| validator(value))
    }
}

impl<T: Clone + Send + Sync + 'static> Default for InputChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for InputChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputChain")
            .field(
                "sources",
                &self.sources.iter().map(|(_, k)| k).collect::<Vec<_>>(),
            )
            .field("validators", &self.validators.len())
            .field("has_default", &self.default.is_some())
            .finish()
    }
}
