//! Queen move generation
//!
//! Queens combine the movement patterns of bishops and rooks. The rook and
//! bishop rays are disjoint, so the union never duplicates a destination.

use super::bishop;
use super::rook;
use crate::board::BoardState;
use crate::types::{Coord, Destination};

/// Generate queen moves from a given square
pub fn generate_queen_moves(from: Coord, board: &BoardState, moves: &mut Vec<Destination>) {
    // Queen moves like both bishop and rook
    bishop::generate_bishop_moves(from, board, moves);
    rook::generate_rook_moves(from, board, moves);
}
