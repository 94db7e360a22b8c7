//! Error types for the move rules
//!
//! Covers the failures of coordinate-addressed selection. Invalid squares
//! encountered during move computation itself are never errors; they are
//! filtered silently as unreachable.

use thiserror::Error;

/// Errors that can occur when resolving a selection gesture
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    /// Selection targeted a coordinate outside the board
    #[error("Coordinate ({row}, {col}) is off the board")]
    OffBoard { row: i8, col: i8 },

    /// Selection targeted an empty square
    #[error("No piece at ({row}, {col})")]
    NoPieceAt { row: i8, col: i8 },
}

/// Result type alias for rules operations
pub type RulesResult<T> = Result<T, RulesError>;
