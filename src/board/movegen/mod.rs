//! Legal move calculation on the unbounded board.
//!
//! Raw moves come from a piece's moveset: jump offsets become destinations
//! and every slide direction becomes a pair of step bounds found by walking
//! the line index outwards to the nearest blockers. Special moves (castling,
//! pawn pushes and captures, rose walks) are merged on top, and the full
//! legality layer finally drops destinations that are friendly-occupied or
//! that would expose a royal.

mod kings;
mod pawns;
mod roses;
mod sliders;

use std::collections::BTreeMap;

use super::error::MoveError;
use super::make_unmake::MoveOptions;
use super::movesets::IgnorePolicy;
use super::rules::WinCondition;
use super::state::Position;
use super::types::{Color, Coordinate, Destination, Direction, Move, Piece, PieceKind, PieceType, Special};

/// Inclusive signed step window along a canonical slide direction.
///
/// `None` on either side means the slide is unbounded that way. Zero steps
/// is never a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StepBounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl StepBounds {
    #[must_use]
    pub const fn unbounded() -> Self {
        StepBounds {
            min: None,
            max: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn allows(&self, steps: i64) -> bool {
        steps != 0
            && self.min.map_or(true, |min| steps >= min)
            && self.max.map_or(true, |max| steps <= max)
    }

    /// True when no non-zero step fits in the window.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let nearest_forward = self.min.map_or(1, |min| min.max(1));
        let nearest_backward = self.max.map_or(-1, |max| max.min(-1));
        !self.allows(nearest_forward) && !self.allows(nearest_backward)
    }
}

/// Everything a piece can do from its square, before a destination is
/// picked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegalMoves {
    pub individual: Vec<Destination>,
    pub sliding: BTreeMap<Direction, StepBounds>,
    pub ignore: IgnorePolicy,
}

impl LegalMoves {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individual.is_empty() && self.sliding.values().all(StepBounds::is_empty)
    }
}

impl Position {
    /// Geometric moves of `piece`: jump destinations and blocker-bounded
    /// slide windows. Occupancy of jump targets is not checked here.
    #[must_use]
    pub fn legal_moves(&self, piece: &Piece) -> LegalMoves {
        if piece.piece_type.is_void() {
            return LegalMoves::default();
        }
        let Some(moveset) = self.movesets.get(piece.kind()) else {
            return LegalMoves::default();
        };

        let individual = moveset
            .individual
            .iter()
            .filter_map(|&(dx, dy)| piece.coords.offset(dx, dy))
            .map(Destination::plain)
            .collect();

        let sliding = moveset
            .sliding
            .iter()
            .map(|(&dir, range)| (dir, self.slide_bounds(piece, dir, range, moveset.blocking)))
            .collect();

        LegalMoves {
            individual,
            sliding,
            ignore: moveset.ignore,
        }
    }

    /// Castling, pawn and rose moves of `piece` as finished moves.
    pub fn special_moves(&mut self, piece: &Piece) -> Vec<Move> {
        self.special_destinations(piece)
            .iter()
            .map(|dest| Move::from_destination(piece.piece_type, piece.coords, dest))
            .collect()
    }

    pub(crate) fn special_destinations(&mut self, piece: &Piece) -> Vec<Destination> {
        let mut dests = match piece.kind() {
            PieceKind::King | PieceKind::RoyalCentaur => self.castling_destinations(piece),
            PieceKind::Pawn => self.pawn_destinations(piece),
            PieceKind::Rose => self.rose_destinations(piece),
            _ => Vec::new(),
        };
        for dest in &mut dests {
            self.finalize_destination(piece.piece_type, dest);
        }
        dests
    }

    /// Full legal moves of the piece on `coords`, or `None` for an empty
    /// square.
    ///
    /// Special moves replace raw moves to the same square. Jumps onto
    /// friendly pieces or voids are removed, and when the opponent plays
    /// for checkmate so are jumps that leave a royal attacked. Slides stay
    /// as windows; test single squares with [`Position::check_if_move_legal`].
    pub fn calculate(&mut self, coords: Coordinate) -> Option<LegalMoves> {
        let piece = self.piece_at(coords)?;
        let mut legal = self.legal_moves(&piece);

        for special in self.special_destinations(&piece) {
            legal.individual.retain(|dest| dest.coords != special.coords);
            legal.individual.push(special);
        }

        let color = piece.color();
        legal
            .individual
            .retain(|dest| match self.board.get(dest.coords) {
                Some(occupant) => occupant.color != color && !occupant.is_void(),
                None => true,
            });

        if self.opponent_plays_for_checkmate(color) {
            let candidates = std::mem::take(&mut legal.individual);
            for dest in candidates {
                if !self.would_move_cause_check(&piece, &dest, color) {
                    legal.individual.push(dest);
                }
            }
        }
        Some(legal)
    }

    /// The destination record for moving from `start` to `end`, if `legal`
    /// (as returned by [`Position::calculate`] for `start`) permits it.
    pub fn check_if_move_legal(
        &mut self,
        legal: &LegalMoves,
        start: Coordinate,
        end: Coordinate,
    ) -> Option<Destination> {
        if let Some(dest) = legal.individual.iter().find(|dest| dest.coords == end) {
            return Some(*dest);
        }

        let piece = self.piece_at(start)?;
        let color = piece.color();
        if let Some(occupant) = self.board.get(end) {
            if occupant.color == color || occupant.is_void() {
                return None;
            }
        }

        for (&dir, bounds) in &legal.sliding {
            let Some(steps) = dir.steps_between(start, end) else {
                continue;
            };
            if !bounds.allows(steps) || !legal.ignore.allows_distance(steps.unsigned_abs()) {
                continue;
            }
            let dest = Destination::plain(end);
            let guarded = legal.ignore == IgnorePolicy::RoyalSafety
                || self.opponent_plays_for_checkmate(color);
            if guarded && self.would_move_cause_check(&piece, &dest, color) {
                return None;
            }
            return Some(dest);
        }
        None
    }

    /// Validate and play a move for the side to move.
    ///
    /// `promotion` picks the promoted kind when the move promotes; it must
    /// be one of the allowed promotions. Without it the first allowed kind
    /// is used.
    pub fn play_move(
        &mut self,
        start: Coordinate,
        end: Coordinate,
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveError> {
        let piece = self
            .piece_at(start)
            .ok_or(MoveError::NoPieceAtStart { coords: start })?;
        let illegal = MoveError::IllegalMove { start, end };
        if piece.color() != self.turn {
            return Err(illegal);
        }
        let legal = self.calculate(start).ok_or(MoveError::NoPieceAtStart { coords: start })?;
        let mut dest = self
            .check_if_move_legal(&legal, start, end)
            .ok_or_else(|| illegal.clone())?;

        if let (Some(kind), Some(_)) = (promotion, dest.specials.promotion) {
            if !self.rules.promotions_allowed.contains(&kind) {
                return Err(illegal);
            }
            dest.specials
                .insert(Special::Promotion(PieceType::new(kind, piece.color())));
        }

        let mv = Move::from_destination(piece.piece_type, start, &dest);
        self.apply_move(&mv, MoveOptions::default())?;
        Ok(mv)
    }

    /// Whether a `piece_type` arriving on rank `y` promotes.
    #[must_use]
    pub fn is_pawn_promotion(&self, piece_type: PieceType, y: i64) -> bool {
        piece_type.kind == PieceKind::Pawn && self.rules.promotion.is_promotion_rank(piece_type.color, y)
    }

    fn finalize_destination(&self, piece_type: PieceType, dest: &mut Destination) {
        // Added on top of any en passant payload already attached.
        if dest.specials.promotion.is_some() || !self.is_pawn_promotion(piece_type, dest.coords.y) {
            return;
        }
        if let Some(&kind) = self.rules.promotions_allowed.first() {
            dest.specials
                .insert(Special::Promotion(PieceType::new(kind, piece_type.color)));
        }
    }

    #[inline]
    pub(crate) fn opponent_plays_for_checkmate(&self, color: Color) -> bool {
        self.rules
            .win_conditions
            .has(color.opponent(), WinCondition::Checkmate)
    }
}
