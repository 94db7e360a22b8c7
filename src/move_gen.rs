//! Move generation, decomposed by piece type
//!
//! The dispatcher selects the generator matching the piece kind and returns
//! the aggregated destination set. Generators append into a shared output
//! vector and only ever read the board snapshot.
//!
//! ## Module Organization
//!
//! - `sliding` - shared ray walk for the sliding pieces
//! - `rook` / `bishop` / `queen` - direction sets over the sliding walk
//! - `stepping` - shared offset filter for the single-step pieces
//! - `knight` / `king` - offset tables over the stepping filter
//! - `pawn` - asymmetric push/capture rules

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;
mod stepping;


use tracing::debug;

use crate::board::BoardState;
use crate::types::{Coord, Destination, Piece, PieceKind};

/// Compute every square the piece may move or capture to
///
/// Destinations are pseudo-legal: permitted by piece-movement rules alone,
/// with no king-safety screening. The returned coordinates are unique, each
/// tagged as a plain move or a capture.
///
/// Piece kinds are a closed enumeration, so dispatch is exhaustive; there is
/// no unknown-kind failure path.
pub fn possible_moves(piece: &Piece, board: &BoardState) -> Vec<Destination> {
    let mut moves = Vec::new();

    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(piece.pos, board, &mut moves),
        PieceKind::Rook => rook::generate_rook_moves(piece.pos, board, &mut moves),
        PieceKind::Knight => knight::generate_knight_moves(piece.pos, board, &mut moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(piece.pos, board, &mut moves),
        PieceKind::Queen => queen::generate_queen_moves(piece.pos, board, &mut moves),
        PieceKind::King => king::generate_king_moves(piece.pos, board, &mut moves),
    }

    debug!(
        "[RULES] {:?} at ({}, {}): {} destinations",
        piece.kind,
        piece.pos.row,
        piece.pos.col,
        moves.len()
    );

    moves
}

/// Check whether the piece may move or capture to a specific square
///
/// Convenience membership test over [`possible_moves`]; useful for
/// validating a drop target against the same rules that produced the
/// highlights.
pub fn can_reach(piece: &Piece, target: Coord, board: &BoardState) -> bool {
    possible_moves(piece, board)
        .iter()
        .any(|dest| dest.coord == target)
}
