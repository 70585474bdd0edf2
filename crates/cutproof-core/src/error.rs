//! Error handling for Cutproof
//!
//! Provides error types for the loading pipeline:
//! - Load errors (source retrieval / mesh decode)
//! - A unified error type used in public APIs
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Malformed G-code tokens and degenerate paths are deliberately *not*
//! represented here: the interpreter ignores the former and the path
//! builder substitutes a fallback segment for the latter.

use thiserror::Error;

/// Load error type
///
/// Represents failures while populating a resource slot. Both variants
/// are recovered at the resource-lifecycle boundary: the slot is cleared
/// and the error surfaced to the presentation layer. Neither is fatal.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    /// The underlying byte/text source could not be retrieved
    /// (missing file, network failure).
    #[error("Failed to read source '{source_name}': {reason}")]
    SourceRead {
        /// Human-readable name of the source (path, asset name).
        source_name: String,
        /// The reason retrieval failed.
        reason: String,
    },

    /// The mesh decoder rejected the bytes. Propagated from the external
    /// decoder capability, never generated by this core.
    #[error("Failed to decode model data: {reason}")]
    Decode {
        /// The reason the decoder rejected the input.
        reason: String,
    },
}

impl LoadError {
    /// Build a `SourceRead` error from an I/O failure.
    pub fn source_read(source_name: impl Into<String>, err: &std::io::Error) -> Self {
        LoadError::SourceRead {
            source_name: source_name.into(),
            reason: err.to_string(),
        }
    }

    /// Build a `Decode` error with the given reason.
    pub fn decode(reason: impl Into<String>) -> Self {
        LoadError::Decode {
            reason: reason.into(),
        }
    }
}

/// Main error type for Cutproof
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Resource load error
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a source-retrieval error
    pub fn is_source_read(&self) -> bool {
        matches!(self, Error::Load(LoadError::SourceRead { .. }))
    }

    /// Check if this is a decode error
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Load(LoadError::Decode { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
