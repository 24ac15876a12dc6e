use super::super::lines::split_line;
use super::super::state::Position;
use super::super::types::{Destination, Direction, Piece, PieceKind, Special};

/// Minimum distance between a castling royal and its partner.
const CASTLE_MIN_DISTANCE: u64 = 3;

impl Position {
    /// Castling destinations for a royal that still holds its special
    /// right. The partner is the nearest piece on the royal's row on each
    /// side; the royal lands two squares towards it.
    pub(crate) fn castling_destinations(&mut self, king: &Piece) -> Vec<Destination> {
        let mut dests = Vec::new();
        if !self.special_rights.has(king.coords) {
            return dests;
        }
        let color = king.color();

        let (left, right) = {
            let row = self.board.colinear(Direction::HORIZONTAL, king.coords);
            let (left, right) = split_line(&row, Direction::HORIZONTAL, king.coords);
            (left.last().copied(), right.first().copied())
        };

        let guarded = self.opponent_plays_for_checkmate(color);
        if guarded && self.is_in_check(color) {
            return dests;
        }

        for (dir, partner) in [(-1i8, left), (1i8, right)] {
            let Some(rook) = partner else {
                continue;
            };
            if rook.x.abs_diff(king.coords.x) < CASTLE_MIN_DISTANCE {
                continue;
            }
            let Some(rook_type) = self.board.get(rook) else {
                continue;
            };
            if !self.special_rights.has(rook)
                || rook_type.color != color
                || rook_type.kind == PieceKind::Pawn
            {
                continue;
            }

            let step = i64::from(dir);
            if guarded {
                let Some(transit) = king.coords.offset(step, 0) else {
                    continue;
                };
                if self.would_move_cause_check(king, &Destination::plain(transit), color) {
                    continue;
                }
            }
            let Some(landing) = king.coords.offset(2 * step, 0) else {
                continue;
            };
            dests.push(Destination::with_special(landing, Special::Castle { dir, rook }));
        }
        dests
    }
}
