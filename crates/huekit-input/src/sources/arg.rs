//! CLI argument input source.

use clap::ArgMatches;

use crate::collector::{InputCollector, InputSourceKind};
use crate::InputError;

/// Collect input from a CLI argument.
///
/// Available when the user passed the argument, which lets a flag such as
/// `--step 0.4` skip the matching prompt entirely.
#[derive(Debug, Clone)]
pub struct ArgSource {
    name: String,
}

impl ArgSource {
    /// Create a new argument source.
    ///
    /// The `name` should match the argument id defined in clap.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl InputCollector<String> for ArgSource {
    fn kind(&self) -> InputSourceKind {
        InputSourceKind::Arg
    }

    fn is_available(&self, matches: &ArgMatches) -> bool {
        matches!(matches.try_get_one::<String>(&self.name), Ok(Some(_)))
    }

    fn collect(&self, matches: &ArgMatches) -> Result<Option<String>, InputError> {
        Ok(matches
            .try_get_one::<String>(&self.name)
            .ok()
            .flatten()
            .cloned())
    }
}
