//! King move generation
//!
//! Kings move one square in any direction, giving at most eight
//! destinations. Castling is out of scope for this rule set, and squares
//! attacked by the opponent are not screened out (the destinations are
//! pseudo-legal).

use super::stepping;
use crate::board::BoardState;
use crate::constants::KING_OFFSETS;
use crate::types::{Coord, Destination};

/// Generate king moves from a given square
pub fn generate_king_moves(from: Coord, board: &BoardState, moves: &mut Vec<Destination>) {
    stepping::generate_stepping_moves(from, &KING_OFFSETS, board, moves);
}
