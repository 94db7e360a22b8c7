//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! Each ray direction is walked independently, one step at a time:
//! 1. Step to the next coordinate in the direction
//! 2. Stop the ray at the board edge
//! 3. Record empty squares as moves and keep stepping
//! 4. Record an enemy-occupied square as a capture, then stop (pieces
//!    cannot be jumped)
//! 5. Stop silently at a friendly-occupied square
//!
//! The directions are independent, so the result is the union of at most
//! four ray walks per caller.

use crate::board::{BoardState, Occupancy};
use crate::types::{Coord, Destination, MoveKind};

/// Walk a set of ray directions from an origin, appending reachable squares
///
/// # Arguments
///
/// * `from` - Origin coordinate of the sliding piece
/// * `dirs` - (row, column) deltas, one per ray
/// * `board` - The board snapshot to query
/// * `moves` - Output vector to append valid destinations to
pub fn generate_sliding_moves(
    from: Coord,
    dirs: &[(i8, i8)],
    board: &BoardState,
    moves: &mut Vec<Destination>,
) {
    for &(d_row, d_col) in dirs {
        let mut current = from.offset(d_row, d_col);

        while current.is_on_board() {
            match board.occupancy_at(current) {
                Occupancy::Empty => {
                    moves.push(Destination::new(current, MoveKind::Move));
                }
                Occupancy::Enemy => {
                    // Capture ends the ray; the piece behind stays shielded
                    moves.push(Destination::new(current, MoveKind::Capture));
                    break;
                }
                Occupancy::Friendly => break,
            }

            current = current.offset(d_row, d_col);
        }
    }
}
