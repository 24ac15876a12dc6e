//! Check detection.
//!
//! A square is attacked when some piece of the attacking color could capture
//! on it: jumps and blocker-bounded slides from the moveset, diagonal pawn
//! steps and rose walks. Castling and en passant never attack.

use log::error;

use super::make_unmake::{MoveOptions, UndoOptions};
use super::state::Position;
use super::types::{Color, Coordinate, Destination, Move, Piece, PieceKind};

impl Position {
    /// Whether any `by` piece attacks `target`.
    #[must_use]
    pub fn is_square_attacked(&self, target: Coordinate, by: Color) -> bool {
        self.board
            .pieces_of(by)
            .any(|piece| self.piece_attacks(&piece, target))
    }

    fn piece_attacks(&self, piece: &Piece, target: Coordinate) -> bool {
        if piece.coords == target || piece.piece_type.is_void() {
            return false;
        }
        match piece.kind() {
            PieceKind::Pawn => {
                let forward = piece.color().pawn_direction();
                forward != 0
                    && target.y.checked_sub(piece.coords.y) == Some(forward)
                    && target.x.abs_diff(piece.coords.x) == 1
            }
            PieceKind::Rose => self
                .rose_destinations(piece)
                .iter()
                .any(|dest| dest.coords == target),
            kind => {
                let Some(moveset) = self.movesets.get(kind) else {
                    return false;
                };
                if moveset
                    .individual
                    .iter()
                    .any(|&(dx, dy)| piece.coords.offset(dx, dy) == Some(target))
                {
                    return true;
                }
                moveset.sliding.iter().any(|(&dir, range)| {
                    let Some(steps) = dir.steps_between(piece.coords, target) else {
                        return false;
                    };
                    range.contains(steps)
                        && moveset.ignore.allows_distance(steps.unsigned_abs())
                        && self
                            .slide_bounds(piece, dir, range, moveset.blocking)
                            .allows(steps)
                })
            }
        }
    }

    /// Whether any royal of `color` is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let attacker = color.opponent();
        self.royals_of(color)
            .into_iter()
            .any(|royal| self.is_square_attacked(royal, attacker))
    }

    /// Play `piece` to `dest` on the board, test `color` for check, and take
    /// the move back. A move that cannot be applied counts as unsafe.
    pub fn would_move_cause_check(&mut self, piece: &Piece, dest: &Destination, color: Color) -> bool {
        let mv = Move::from_destination(piece.piece_type, piece.coords, dest);
        if self.apply_move(&mv, MoveOptions::SIMULATED).is_err() {
            return true;
        }
        let in_check = self.is_in_check(color);
        if let Err(err) = self.undo_last_move(UndoOptions::SIMULATED) {
            error!("failed to take back probe move {mv:?}: {err}");
        }
        in_check
    }
}
