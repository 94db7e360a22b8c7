//! Selection gesture flow
//!
//! Connects a piece-selection gesture to the move generators and the
//! highlight renderer. The renderer itself is external; it plugs in through
//! [`HighlightSink`] and is expected to draw plain-move and capture
//! destinations in two distinguishable styles.

use tracing::debug;

use crate::board::BoardState;
use crate::error::{RulesError, RulesResult};
use crate::move_gen::possible_moves;
use crate::types::{Coord, Destination, MoveKind, Piece, Side};

/// Receiver for computed highlights
///
/// Implemented by the embedding renderer. `clear` removes every marker from
/// the previous gesture; it is invoked exactly once per selection, before any
/// marking.
pub trait HighlightSink {
    fn clear(&mut self);
    fn mark_move(&mut self, coord: Coord);
    fn mark_capture(&mut self, coord: Coord);
}

/// Currently selected piece and its computed destinations
#[derive(Debug, Default)]
pub struct Selection {
    pub selected: Option<Piece>,
    pub possible_moves: Vec<Destination>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.selected = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }
}

/// Handle a selection gesture on a piece
///
/// Previous highlights are cleared first, once per gesture. Enemy pieces are
/// not selectable: the gesture still clears, then leaves the selection empty
/// with no destinations. Friendly pieces are selected with their computed
/// destinations marked on the sink.
pub fn select_piece(
    selection: &mut Selection,
    piece: Piece,
    board: &BoardState,
    sink: &mut impl HighlightSink,
) {
    // Clear all previous highlights
    sink.clear();
    selection.clear();
    debug!("[SELECT] Selection cleared");

    if piece.side == Side::Enemy {
        debug!(
            "[SELECT] Ignoring enemy piece at ({}, {})",
            piece.pos.row, piece.pos.col
        );
        return;
    }

    let moves = possible_moves(&piece, board);

    for dest in &moves {
        match dest.kind {
            MoveKind::Move => sink.mark_move(dest.coord),
            MoveKind::Capture => sink.mark_capture(dest.coord),
        }
    }

    selection.selected = Some(piece);
    selection.possible_moves = moves;
}

/// Handle a selection gesture addressed by coordinate
///
/// Resolves the square to a piece before delegating to [`select_piece`].
/// Off-board coordinates and empty squares are reported as errors so the
/// caller can tell a bad gesture apart from a legal selection with no moves.
pub fn select_at(
    selection: &mut Selection,
    coord: Coord,
    board: &BoardState,
    sink: &mut impl HighlightSink,
) -> RulesResult<()> {
    if !coord.is_on_board() {
        return Err(RulesError::OffBoard {
            row: coord.row,
            col: coord.col,
        });
    }

    let piece = *board.piece_at(coord).ok_or(RulesError::NoPieceAt {
        row: coord.row,
        col: coord.col,
    })?;

    select_piece(selection, piece, board, sink);
    Ok(())
}
