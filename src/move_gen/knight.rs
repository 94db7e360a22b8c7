//! Knight move generation
//!
//! Knights move in an L-shape pattern: 2 squares in one direction, then 1
//! square perpendicular. They jump over pieces, so only the destination
//! square's occupancy matters.

use super::stepping;
use crate::board::BoardState;
use crate::constants::KNIGHT_OFFSETS;
use crate::types::{Coord, Destination};

/// Generate knight moves from a given square
pub fn generate_knight_moves(from: Coord, board: &BoardState, moves: &mut Vec<Destination>) {
    stepping::generate_stepping_moves(from, &KNIGHT_OFFSETS, board, moves);
}
