//! Bishop move generation
//!
//! Bishops are sliding pieces that move diagonally until blocked by another
//! piece or the board edge.

use super::sliding;
use crate::board::BoardState;
use crate::constants::BISHOP_DIRS;
use crate::types::{Coord, Destination};

/// Generate bishop moves from a given square
///
/// Delegates to the common sliding logic with the four diagonal rays.
pub fn generate_bishop_moves(from: Coord, board: &BoardState, moves: &mut Vec<Destination>) {
    sliding::generate_sliding_moves(from, &BISHOP_DIRS, board, moves);
}
