//! Rook move generation
//!
//! Rooks are sliding pieces that move horizontally and vertically until
//! blocked by another piece or the board edge.

use super::sliding;
use crate::board::BoardState;
use crate::constants::ROOK_DIRS;
use crate::types::{Coord, Destination};

/// Generate rook moves from a given square
///
/// Delegates to the common sliding logic with the four orthogonal rays.
pub fn generate_rook_moves(from: Coord, board: &BoardState, moves: &mut Vec<Destination>) {
    sliding::generate_sliding_moves(from, &ROOK_DIRS, board, moves);
}
