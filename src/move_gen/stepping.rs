//! Stepping piece move generation
//!
//! Common functionality for the single-step pieces (knights and kings).
//! A fixed offset list is evaluated in one shot: each target is valid when it
//! lies on the board and is not occupied by a friendly piece. No obstruction
//! logic applies; nothing is ever "in the way" of a single step.
//!
//! Offset evaluation order does not affect the result as a set; the output
//! order only matters for test determinism.

use crate::board::{BoardState, Occupancy};
use crate::types::{Coord, Destination, MoveKind};

/// Evaluate a fixed offset list from an origin, appending reachable squares
pub fn generate_stepping_moves(
    from: Coord,
    offsets: &[(i8, i8)],
    board: &BoardState,
    moves: &mut Vec<Destination>,
) {
    for &(d_row, d_col) in offsets {
        let target = from.offset(d_row, d_col);

        if !target.is_on_board() {
            continue;
        }

        match board.occupancy_at(target) {
            Occupancy::Empty => moves.push(Destination::new(target, MoveKind::Move)),
            Occupancy::Enemy => moves.push(Destination::new(target, MoveKind::Capture)),
            Occupancy::Friendly => {}
        }
    }
}
