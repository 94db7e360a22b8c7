//! Type definitions for chess move computation
//!
//! Provides the board coordinate type and the piece/move enums shared by the
//! move generators and the selection flow.

use crate::constants::BOARD_SIZE;

/// Board coordinate as (row, column), each in range 0-7
///
/// Stored as `i8` so that stepping off the board during move generation
/// produces a representable (but off-board) value instead of wrapping.
/// Off-board coordinates are only ever transient: they are tested with
/// [`Coord::is_on_board`] and never appear in a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    /// Create a coordinate from row and column indices
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let origin = Coord::new(3, 3); // row 3, column 3
    /// ```
    pub fn new(row: i8, col: i8) -> Self {
        Coord { row, col }
    }

    /// True iff both components lie in 0-7
    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// The coordinate one step away by the given deltas
    ///
    /// The result may be off the board; callers gate with
    /// [`Coord::is_on_board`] before using it.
    pub fn offset(self, d_row: i8, d_col: i8) -> Self {
        Coord {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl From<(i8, i8)> for Coord {
    fn from((row, col): (i8, i8)) -> Self {
        Coord::new(row, col)
    }
}

/// Which side a piece fights for, relative to the selecting player
///
/// The model is player-relative rather than white/black: the player selects
/// Friendly pieces, and Enemy pieces are capture targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Friendly,
    Enemy,
}

/// The six chess piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// A piece snapshot: kind, side, and current board position
///
/// The move generators only ever read these; creation, movement and removal
/// belong to the owning registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub pos: Coord,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side, pos: Coord) -> Self {
        Piece { kind, side, pos }
    }
}

/// How a destination square is reached
///
/// `Move` targets an empty square; `Capture` targets a square occupied by an
/// enemy piece. The highlight renderer draws the two with distinct styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    Move,
    Capture,
}

/// A reachable destination square for the selected piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    pub coord: Coord,
    pub kind: MoveKind,
}

impl Destination {
    pub fn new(coord: Coord, kind: MoveKind) -> Self {
        Destination { coord, kind }
    }

    pub fn is_capture(self) -> bool {
        self.kind == MoveKind::Capture
    }
}
