//! Error types for the learned chess engine
//!
//! Covers position parsing, move application, terminal positions, and
//! snapshot persistence.

use crate::types::GameStatus;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while choosing moves or persisting the value table
#[derive(Error, Debug)]
pub enum BrainError {
    /// The position string could not be parsed or describes an illegal setup
    #[error("Invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },

    /// A move is not legal in the given position
    #[error("Illegal move {mv}")]
    IllegalMove { mv: String },

    /// The side to move has no legal moves
    #[error("No legal moves available ({status})")]
    NoLegalMoves { status: GameStatus },

    /// Unrecognised side name
    #[error("Unknown side: {0:?} (expected \"white\" or \"black\")")]
    InvalidSide(String),

    /// Snapshot file could not be read or written
    #[error("Snapshot I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot content could not be encoded or decoded
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BrainError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BrainError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for learned engine operations
pub type BrainResult<T> = Result<T, BrainError>;
