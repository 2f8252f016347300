//! Error types for huekit.

use std::path::PathBuf;

use huekit_input::InputError;

/// Errors raised while loading the palette catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog is not valid JSON or does not match the palette schema.
    #[error("palette catalog is malformed")]
    Parse(#[from] serde_json::Error),

    /// The catalog holds no palettes.
    #[error("palette catalog is empty")]
    Empty,

    /// Two palettes share a name.
    #[error("palette '{0}' is defined more than once")]
    DuplicateName(String),

    /// A palette has no hue colours.
    #[error("palette '{0}' has no hues")]
    NoHues(String),

    /// An entry is not a `#RRGGBB` colour.
    #[error("palette '{palette}' has invalid colour '{value}' (expected #RRGGBB)")]
    InvalidColor { palette: String, value: String },
}

/// Any failure that ends a huekit run with a non-zero exit status.
///
/// User cancellation is not an error; the prompt layer reports it as
/// [`Prompted::Cancelled`](crate::prompts::Prompted::Cancelled).
#[derive(Debug, thiserror::Error)]
pub enum HuekitError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Input(#[from] InputError),

    /// Filesystem failure with the path it happened on.
    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a status line failed.
    #[error("failed to write output")]
    Output(#[source] std::io::Error),

    /// The install location of the running binary could not be determined.
    #[error("cannot locate the huekit executable")]
    ExecutableLocation(#[source] std::io::Error),
}

impl HuekitError {
    /// Build a closure that wraps an I/O error with its action and path.
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io {
            action,
            path,
            source,
        }
    }
}
