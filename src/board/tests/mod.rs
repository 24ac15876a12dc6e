//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Jumps, slides, blockers and the legality layer
//! - `special.rs` - Castling, pawns, en passant, promotion and roses
//! - `make_unmake.rs` - Apply/undo correctness
//! - `conclusion.rs` - Checkmate, stalemate and draw rules
//! - `search.rs` - Candidate moves and the negamax opponent
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod movegen;
mod search;

use crate::board::{Coordinate, Move, Position};

pub(super) fn position(text: &str) -> Position {
    Position::from_notation(text).expect("valid test notation")
}

pub(super) fn c(x: i64, y: i64) -> Coordinate {
    Coordinate::new(x, y)
}

/// Every legal move of every piece of the side to move, slides probed at
/// a handful of distances.
pub(super) fn sample_moves(pos: &mut Position) -> Vec<Move> {
    let pieces: Vec<_> = pos.board().pieces_of(pos.turn()).collect();
    let mut moves = Vec::new();
    for piece in pieces {
        let Some(legal) = pos.calculate(piece.coords) else {
            continue;
        };
        for dest in &legal.individual {
            moves.push(Move::from_destination(piece.piece_type, piece.coords, dest));
        }
        for &dir in legal.sliding.keys() {
            for steps in [-7, -2, -1, 1, 2, 7] {
                let Some(end) = piece.coords.step(dir, steps) else {
                    continue;
                };
                if let Some(dest) = pos.check_if_move_legal(&legal, piece.coords, end) {
                    moves.push(Move::from_destination(piece.piece_type, piece.coords, &dest));
                }
            }
        }
    }
    moves
}
