//! Board state representation for move computation

use crate::types::{Coord, Piece, Side};

/// What occupies a queried square, from the selecting player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Empty,
    Friendly,
    Enemy,
}

/// Snapshot of the pieces on the board at the instant a computation starts
///
/// Queries scan the piece list linearly; at chess scale (at most 32 live
/// pieces) this is cheap enough that no coordinate index is kept. The
/// snapshot must stay stable for the duration of one computation; the move
/// generators never mutate it.
pub struct BoardState {
    pub pieces: Vec<Piece>,
}

impl BoardState {
    pub fn new(pieces: Vec<Piece>) -> Self {
        BoardState { pieces }
    }

    /// Combined occupancy query for a square
    ///
    /// Off-board coordinates report `Empty` rather than erroring; the move
    /// generators gate destinations on [`Coord::is_on_board`] separately, so
    /// a missing square never contributes to a result.
    pub fn occupancy_at(&self, coord: Coord) -> Occupancy {
        match self.piece_at(coord) {
            None => Occupancy::Empty,
            Some(piece) if piece.side == Side::Enemy => Occupancy::Enemy,
            Some(_) => Occupancy::Friendly,
        }
    }

    pub fn is_empty(&self, coord: Coord) -> bool {
        self.occupancy_at(coord) == Occupancy::Empty
    }

    /// True iff the square holds an enemy piece specifically
    ///
    /// Pawn diagonals use this: an empty or friendly diagonal square must
    /// never read as a capture target.
    pub fn is_enemy(&self, coord: Coord) -> bool {
        self.occupancy_at(coord) == Occupancy::Enemy
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.pos == coord)
    }
}
