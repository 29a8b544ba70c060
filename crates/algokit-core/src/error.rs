//! Error types for the Algokit crates.

use std::path::{Path, PathBuf};

/// Errors that can occur when running an Algokit algorithm.
///
/// Marked `#[non_exhaustive]` so new failure modes can be added without
/// breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An argument violates a precondition of the algorithm.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What is wrong with the input
        message: String,
    },

    /// Two sequences that must be paired element-wise differ in length.
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Name of the sequence that has the wrong length
        what: &'static str,
        /// Length required by the other sequence
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// A positional access fell outside the collection.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length of the collection
        len: usize,
    },

    /// An inclusive range whose start lies after its end.
    #[error("Invalid range: start {start} is greater than end {end}")]
    InvalidRange {
        /// Range start
        start: usize,
        /// Range end
        end: usize,
    },

    /// A named element (vertex, set member, config key) is absent.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of element ("vertex", "element", ...)
        kind: &'static str,
        /// Debug rendering of the missing element
        id: String,
    },

    /// The algorithm requires a connected graph.
    #[error("Graph is disconnected: reached {reached} of {total} vertices")]
    Disconnected {
        /// Vertices reachable from the start vertex
        reached: usize,
        /// Vertices in the graph
        total: usize,
    },

    /// A negative edge weight was given to an algorithm that forbids it.
    #[error("Negative edge weight on {edge}")]
    NegativeWeight {
        /// Debug rendering of the offending edge
        edge: String,
    },

    /// A checked arithmetic operation overflowed.
    #[error("Arithmetic overflow in {operation}")]
    Overflow {
        /// The operation that overflowed
        operation: &'static str,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific file.
    #[error("I/O error on {path}: {source}")]
    IoPath {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for Algokit operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error was caused by the caller's input.
    ///
    /// Input errors are deterministic: retrying with the same arguments
    /// fails the same way.
    pub fn is_input_error(&self) -> bool {
        match self {
            Error::InvalidInput { .. }
            | Error::LengthMismatch { .. }
            | Error::IndexOutOfRange { .. }
            | Error::InvalidRange { .. }
            | Error::NotFound { .. }
            | Error::Disconnected { .. }
            | Error::NegativeWeight { .. }
            | Error::Overflow { .. } => true,
            Error::Config { .. }
            | Error::Io(_)
            | Error::IoPath { .. }
            | Error::Serialization(_) => false,
        }
    }

    /// Creates a new invalid-input error.
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a not-found error for an element of the given kind.
    pub fn not_found<T: std::fmt::Debug + ?Sized>(kind: &'static str, id: &T) -> Self {
        Error::NotFound {
            kind,
            id: format!("{id:?}"),
        }
    }

    /// Creates an overflow error for the named operation.
    pub fn overflow(operation: &'static str) -> Self {
        Error::Overflow { operation }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
