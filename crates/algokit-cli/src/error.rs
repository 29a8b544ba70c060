//! Error types for algokit-cli

use thiserror::Error;

/// Result type alias for algokit-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in algokit-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from one of the algorithm crates
    #[error(transparent)]
    Core(#[from] algokit_core::Error),

    /// A TOML document could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value could not be rendered as TOML
    #[error("TOML render error: {0}")]
    TomlRender(#[from] toml::ser::Error),

    /// A JSON document could not be parsed or rendered
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A graph file has an extension other than `.json` or `.toml`
    #[error("Unsupported graph file format: {path} (expected .json or .toml)")]
    UnsupportedFormat {
        /// The offending file
        path: String,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Core(algokit_core::Error::config(message))
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<std::path::Path>) -> Self {
        Error::Core(algokit_core::Error::io_with_path(source, path))
    }
}
