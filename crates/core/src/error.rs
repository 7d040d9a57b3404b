//! Error types for the BPE tokenizer library.

use crate::core::merges::{Pair, TokenId};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// A caller-supplied argument is outside its valid domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Model file header does not carry the expected format tag
    #[error("Version mismatch: expected {expected:?}, found {found:?}")]
    VersionMismatch { expected: String, found: String },

    /// A merge line in a model file could not be interpreted
    #[error("Malformed model at line {line}: {reason}")]
    MalformedModel { line: usize, reason: String },

    /// Token ID absent from the vocabulary
    #[error("Unknown token ID {id} at position {position}")]
    UnknownToken { id: TokenId, position: usize },

    /// The pair already has a merge assigned
    #[error("Duplicate merge for pair ({0})")]
    DuplicateMerge(Pair),
}

impl TokenizerError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
