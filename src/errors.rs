use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing a screenshot
#[derive(Error, Debug)]
pub enum ShotError {
    /// Error when reading or writing a file
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error when a configuration value breaks an invariant
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error when a configuration file cannot be parsed
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Error raised by the grammar engine while tokenizing
    #[error("Tokenization failed: {0}")]
    Tokenize(String),

    /// Error when a font cannot be loaded or parsed
    #[error("Font error: {0}")]
    Font(String),

    /// Error when no usable font was found on the system
    #[error("No monospace font found; pass one explicitly with --font")]
    FontNotFound,

    /// Error when the metrics provider cannot measure a string
    #[error("Text measurement failed: {0}")]
    Metrics(String),

    /// Error when the canvas cannot be allocated
    #[error("Canvas error: {0}")]
    Canvas(String),

    /// Error when encoding the final image
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

impl ShotError {
    /// Wrap an [`io::Error`] together with the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<syntect::parsing::ParsingError> for ShotError {
    fn from(err: syntect::parsing::ParsingError) -> Self {
        ShotError::Tokenize(err.to_string())
    }
}

impl From<syntect::parsing::ScopeError> for ShotError {
    fn from(err: syntect::parsing::ScopeError) -> Self {
        ShotError::Tokenize(format!("{err:?}"))
    }
}

impl From<syntect::parsing::ParseScopeError> for ShotError {
    fn from(err: syntect::parsing::ParseScopeError) -> Self {
        ShotError::Tokenize(format!("invalid scope: {err:?}"))
    }
}

/// Type alias for Result with `ShotError`
pub type Result<T> = std::result::Result<T, ShotError>;
