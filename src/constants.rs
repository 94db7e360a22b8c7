//! Movement constants
//!
//! Direction vectors and offset tables consumed by the move generators.
//! All deltas are (row, column) pairs; positive row is the pawn's forward
//! direction.

/// Board side length in squares
pub const BOARD_SIZE: i8 = 8;

/// Ray directions for rook movement: the four orthogonals
pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Ray directions for bishop movement: the four diagonals
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Knight offsets: the eight L-shaped jumps (2+1 in perpendicular axes)
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// King offsets: the eight unit steps (orthogonal + diagonal)
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// Pawn forward direction in rows
///
/// The model is single-sided: every pawn advances toward higher rows,
/// matching the player-relative board orientation.
pub const PAWN_FORWARD: i8 = 1;

/// Row a pawn must stand on to be offered the double push
pub const PAWN_START_ROW: i8 = 1;
