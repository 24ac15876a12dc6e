use log::error;

use super::super::state::Position;
use super::super::types::{Coordinate, Destination, Piece, Special};

impl Position {
    /// Pushes, double pushes, diagonal captures and en passant.
    pub(crate) fn pawn_destinations(&self, pawn: &Piece) -> Vec<Destination> {
        let mut dests = Vec::new();
        let color = pawn.color();
        let forward = color.pawn_direction();
        if forward == 0 {
            return dests;
        }
        let from = pawn.coords;

        if let Some(single) = from.offset(0, forward) {
            if !self.board.is_occupied(single) {
                dests.push(Destination::plain(single));
                if self.special_rights.has(from) {
                    if let Some(double) = single.offset(0, forward) {
                        if !self.board.is_occupied(double) {
                            dests.push(Destination::plain(double));
                        }
                    }
                }
            }
        }

        for side in [-1, 1] {
            let Some(diagonal) = from.offset(side, forward) else {
                continue;
            };
            if self.en_passant == Some(diagonal) {
                if let Some(dest) = self.en_passant_destination(pawn, diagonal, forward) {
                    dests.push(dest);
                    continue;
                }
            }
            if let Some(target) = self.board.get(diagonal) {
                if target.color != color && !target.is_void() {
                    dests.push(Destination::plain(diagonal));
                }
            }
        }
        dests
    }

    fn en_passant_destination(
        &self,
        pawn: &Piece,
        target: Coordinate,
        forward: i64,
    ) -> Option<Destination> {
        if self.board.is_occupied(target) {
            error!("en passant target {target} is occupied, skipping capture");
            return None;
        }
        let victim = target.offset(0, -forward)?;
        let captured = self.board.get(victim)?;
        if captured.color != pawn.color().opponent() {
            return None;
        }
        let offset = if forward > 0 { -1 } else { 1 };
        Some(Destination::with_special(target, Special::EnPassant(offset)))
    }
}
