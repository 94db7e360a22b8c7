//! Chess move rules - Pure game logic without UI coupling
//!
//! Computes the set of squares a chess piece may move or capture to under
//! basic movement rules, given the piece and a snapshot of board occupancy.
//! Destinations are pseudo-legal: piece-movement rules only, no check
//! detection, castling, en passant, or promotion.
//!
//! # Architecture
//!
//! The crate keeps a clean separation between rule logic and the embedding
//! application:
//! - **Pure functions** for move computation (easy to unit test)
//! - **Lightweight [`BoardState`]** for snapshot-based queries
//! - **[`HighlightSink`] trait** as the seam to the rendering layer
//!
//! Computation is synchronous and read-only: a call is a bounded function of
//! the snapshot over at most 64 squares, safe to repeat and to share across
//! read-only callers.

pub mod board;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod selection;
pub mod types;

// Re-export commonly used items
pub use board::{BoardState, Occupancy};
pub use error::{RulesError, RulesResult};
pub use move_gen::{can_reach, possible_moves};
pub use selection::{select_at, select_piece, HighlightSink, Selection};
pub use types::{Coord, Destination, MoveKind, Piece, PieceKind, Side};
