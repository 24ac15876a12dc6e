use log::{error, trace};

use super::error::MoveError;
use super::state::{Position, UnmakeInfo};
use super::types::{Coordinate, Move, Piece, PieceKind, PieceType};
use super::zobrist::{self, ZOBRIST};

/// Options for [`Position::apply_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOptions {
    /// Recompute the cached game conclusion afterwards.
    pub update_data: bool,
    /// Search-internal move; not logged.
    pub simulated: bool,
}

impl MoveOptions {
    /// What the search and the legality checks use.
    pub const SIMULATED: MoveOptions = MoveOptions {
        update_data: false,
        simulated: true,
    };
}

impl Default for MoveOptions {
    fn default() -> Self {
        MoveOptions {
            update_data: true,
            simulated: false,
        }
    }
}

/// Options for [`Position::undo_last_move`]. Pass the same `update_data`
/// the move was applied with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoOptions {
    /// Restore the cached game conclusion.
    pub update_data: bool,
}

impl UndoOptions {
    pub const SIMULATED: UndoOptions = UndoOptions { update_data: false };
}

impl Default for UndoOptions {
    fn default() -> Self {
        UndoOptions { update_data: true }
    }
}

impl Position {
    fn invariant_violation(mv: &Move, detail: String) -> MoveError {
        error!("discarding move {mv:?}: {detail}");
        MoveError::InvariantViolation { detail }
    }

    /// Apply `mv` and push it onto the move journal.
    ///
    /// Nothing is mutated when an error is returned.
    pub fn apply_move(&mut self, mv: &Move, opts: MoveOptions) -> Result<(), MoveError> {
        let moving = self
            .board
            .get(mv.start)
            .ok_or(MoveError::NoPieceAtStart { coords: mv.start })?;

        // Validate special payloads before touching anything.
        let en_passant_square = match mv.en_passant() {
            Some(offset) => {
                if self.board.is_occupied(mv.end) {
                    return Err(Self::invariant_violation(
                        mv,
                        format!("en passant capture onto occupied square {}", mv.end),
                    ));
                }
                let square = mv.end.offset(0, i64::from(offset)).ok_or_else(|| {
                    Self::invariant_violation(mv, "en passant square overflows".to_string())
                })?;
                Some(square)
            }
            None => None,
        };
        let castle = match mv.castle() {
            Some((dir, rook)) => {
                let rook_type = self.board.get(rook).ok_or_else(|| {
                    Self::invariant_violation(mv, format!("castling partner missing at {rook}"))
                })?;
                let rook_to = mv.end.offset(-i64::from(dir), 0).ok_or_else(|| {
                    Self::invariant_violation(mv, "castling square overflows".to_string())
                })?;
                Some((rook, rook_to, rook_type))
            }
            None => None,
        };

        let previous_hash = self.hash;
        let previous_en_passant = self.en_passant;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_conclusion = self.conclusion;
        let mut hash = self.hash ^ ZOBRIST.black_to_move_key;
        if let Some(ep) = self.en_passant {
            hash ^= zobrist::en_passant_key(ep);
        }

        let captured = if let Some(square) = en_passant_square {
            self.board.take(square).map(|pt| Piece::new(pt, square))
        } else if castle.is_some() {
            None
        } else {
            self.board.take(mv.end).map(|pt| Piece::new(pt, mv.end))
        };
        if let Some(piece) = captured {
            hash ^= zobrist::piece_key(piece.piece_type, piece.coords);
        }

        self.board.take(mv.start);
        hash ^= zobrist::piece_key(moving, mv.start);
        let placed = mv.promotion().unwrap_or(moving);
        self.board.place(mv.end, placed);
        hash ^= zobrist::piece_key(placed, mv.end);

        if let Some((rook, rook_to, rook_type)) = castle {
            self.board.take(rook);
            self.board.place(rook_to, rook_type);
            hash ^= zobrist::piece_key(rook_type, rook);
            hash ^= zobrist::piece_key(rook_type, rook_to);
        }

        let mut revoked_rights = Vec::new();
        let touched = [
            Some(mv.start),
            Some(mv.end),
            captured.map(|p| p.coords),
            castle.map(|(rook, _, _)| rook),
        ];
        for square in touched.into_iter().flatten() {
            if self.special_rights.remove(square) {
                hash ^= zobrist::special_right_key(square);
                revoked_rights.push(square);
            }
        }

        self.en_passant = double_push_target(moving, mv);
        if let Some(ep) = self.en_passant {
            hash ^= zobrist::en_passant_key(ep);
        }

        if moving.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.turn = self.turn.opponent();
        self.hash = hash;
        let previous_repetition_count = self.repetition_counts.record(hash);

        self.history.push((
            *mv,
            UnmakeInfo {
                moved: moving,
                captured,
                revoked_rights,
                previous_en_passant,
                previous_halfmove_clock,
                previous_hash,
                made_hash: hash,
                previous_repetition_count,
                previous_conclusion,
            },
        ));

        if !opts.simulated {
            trace!("applied {mv:?}, captured {captured:?}");
        }
        if opts.update_data {
            self.conclusion = self.conclusion();
        }
        Ok(())
    }

    /// Take back the most recent move, returning it.
    pub fn undo_last_move(&mut self, opts: UndoOptions) -> Result<Move, MoveError> {
        let (mv, info) = self.history.pop().ok_or(MoveError::NothingToUndo)?;

        self.repetition_counts
            .restore(info.made_hash, info.previous_repetition_count);
        self.turn = self.turn.opponent();
        self.en_passant = info.previous_en_passant;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.hash = info.previous_hash;

        self.board.take(mv.end);
        self.board.place(mv.start, info.moved);
        if let Some((dir, rook)) = mv.castle() {
            if let Some(rook_to) = mv.end.offset(-i64::from(dir), 0) {
                if let Some(rook_type) = self.board.take(rook_to) {
                    self.board.place(rook, rook_type);
                }
            }
        }
        if let Some(piece) = info.captured {
            self.board.place(piece.coords, piece.piece_type);
        }
        for square in info.revoked_rights {
            self.special_rights.insert(square);
        }

        if opts.update_data {
            self.conclusion = info.previous_conclusion;
        }
        Ok(mv)
    }

    /// Take back every move in the journal.
    pub fn undo_all(&mut self, opts: UndoOptions) -> Result<(), MoveError> {
        while !self.history.is_empty() {
            self.undo_last_move(opts)?;
        }
        Ok(())
    }
}

/// The square a pawn skipped over with a double push, if `mv` is one.
fn double_push_target(moving: PieceType, mv: &Move) -> Option<Coordinate> {
    if moving.kind != PieceKind::Pawn || mv.start.x != mv.end.x {
        return None;
    }
    let dy = mv.end.y.checked_sub(mv.start.y)?;
    if dy.abs() != 2 {
        return None;
    }
    mv.start.offset(0, dy / 2)
}
