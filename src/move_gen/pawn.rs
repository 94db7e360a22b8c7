//! Pawn move generation
//!
//! Pawns are the only piece whose moves and captures use different squares:
//!
//! - **Forward push**: one square toward higher rows, onto an empty square
//! - **Double push**: two squares from the starting row, both the
//!   intermediate and destination squares empty
//! - **Captures**: one square diagonally forward, onto an enemy piece only
//!
//! The model is single-sided: every pawn advances in the fixed forward
//! direction and shares one starting row. A pawn standing on the starting
//! row is offered the double push regardless of its move history; nothing
//! tracks forfeiture. No en passant, no promotion.

use crate::board::BoardState;
use crate::constants::{PAWN_FORWARD, PAWN_START_ROW};
use crate::types::{Coord, Destination, MoveKind};

/// Generate pawn moves from a given square
pub fn generate_pawn_moves(from: Coord, board: &BoardState, moves: &mut Vec<Destination>) {
    // Single push onto an empty square
    let ahead = from.offset(PAWN_FORWARD, 0);
    if ahead.is_on_board() && board.is_empty(ahead) {
        moves.push(Destination::new(ahead, MoveKind::Move));
    }

    // Double push from the starting row; the intermediate square is checked
    // again on its own rather than reusing the single-push result
    if from.row == PAWN_START_ROW {
        let two_ahead = from.offset(2 * PAWN_FORWARD, 0);
        if board.is_empty(ahead) && board.is_empty(two_ahead) {
            moves.push(Destination::new(two_ahead, MoveKind::Move));
        }
    }

    // Diagonal captures, enemy-occupied squares only
    for d_col in [1, -1] {
        let diagonal = from.offset(PAWN_FORWARD, d_col);
        if diagonal.is_on_board() && board.is_enemy(diagonal) {
            moves.push(Destination::new(diagonal, MoveKind::Capture));
        }
    }
}
