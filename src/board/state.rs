use std::borrow::Cow;
use std::collections::BTreeMap;

use super::conclusion::Conclusion;
use super::error::ConfigurationError;
use super::history::RepetitionTable;
use super::lines::LineIndex;
use super::movesets::Movesets;
use super::rules::GameRules;
use super::types::{Color, Coordinate, Direction, Move, Piece, PieceType, SpecialRights};
use super::zobrist::{self, ZOBRIST};

/// Everything needed to take back one applied move.
#[derive(Clone, Debug, PartialEq)]
pub struct UnmakeInfo {
    pub(crate) moved: PieceType,
    pub(crate) captured: Option<Piece>,
    pub(crate) revoked_rights: Vec<Coordinate>,
    pub(crate) previous_en_passant: Option<Coordinate>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_hash: u64,
    pub(crate) made_hash: u64,
    pub(crate) previous_repetition_count: u32,
    pub(crate) previous_conclusion: Conclusion,
}

impl UnmakeInfo {
    /// The piece the move captured, with the square it stood on.
    #[must_use]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
}

/// Coordinate map of all pieces plus the line-family index over them.
///
/// The two always hold the same set of squares.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: BTreeMap<Coordinate, PieceType>,
    pub(crate) lines: LineIndex,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Board::default()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, coords: Coordinate) -> Option<PieceType> {
        self.pieces.get(&coords).copied()
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, coords: Coordinate) -> bool {
        self.pieces.contains_key(&coords)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Put a piece on a square, returning whatever stood there.
    pub(crate) fn place(&mut self, coords: Coordinate, piece_type: PieceType) -> Option<PieceType> {
        let previous = self.pieces.insert(coords, piece_type);
        if previous.is_none() {
            self.lines.add(coords);
        }
        previous
    }

    pub(crate) fn take(&mut self, coords: Coordinate) -> Option<PieceType> {
        let removed = self.pieces.remove(&coords);
        if removed.is_some() {
            self.lines.remove(coords);
        }
        removed
    }

    /// All pieces in coordinate order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.pieces
            .iter()
            .map(|(&coords, &piece_type)| Piece::new(piece_type, coords))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// Pieces on the line through `coords` along `dir`, sorted along it.
    ///
    /// Indexed directions borrow from the line index; any other direction
    /// falls back to a scan of every piece.
    #[must_use]
    pub fn colinear(&self, dir: Direction, coords: Coordinate) -> Cow<'_, [Coordinate]> {
        if let Some(line) = self.lines.line(dir, coords) {
            return Cow::Borrowed(line);
        }
        let key = dir.line_key(coords);
        let mut line: Vec<Coordinate> = self
            .pieces
            .keys()
            .copied()
            .filter(|c| dir.line_key(*c) == key)
            .collect();
        line.sort_by_key(|c| dir.position_along(*c));
        Cow::Owned(line)
    }

    #[must_use]
    pub fn line_index(&self) -> &LineIndex {
        &self.lines
    }
}

/// A game in progress: board, side to move, rights and rules.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) special_rights: SpecialRights,
    pub(crate) en_passant: Option<Coordinate>,
    pub(crate) rules: GameRules,
    pub(crate) movesets: Movesets,
    pub(crate) halfmove_clock: u32,
    pub(crate) hash: u64,
    pub(crate) repetition_counts: RepetitionTable,
    pub(crate) history: Vec<(Move, UnmakeInfo)>,
    pub(crate) conclusion: Conclusion,
}

impl Position {
    /// An empty board under `rules`, white to move.
    pub fn new(rules: GameRules) -> Result<Self, ConfigurationError> {
        rules.validate()?;
        Ok(Position::with_valid_rules(rules))
    }

    pub(crate) fn with_valid_rules(rules: GameRules) -> Self {
        let movesets = Movesets::for_limit(rules.slide_limit);
        let mut position = Position {
            board: Board::new(),
            turn: Color::White,
            special_rights: SpecialRights::none(),
            en_passant: None,
            rules,
            movesets,
            halfmove_clock: 0,
            hash: 0,
            repetition_counts: RepetitionTable::new(),
            history: Vec::new(),
            conclusion: Conclusion::Undetermined,
        };
        position.reset_hash();
        position
    }

    /// Recompute the hash from scratch and restart repetition tracking.
    pub(crate) fn reset_hash(&mut self) {
        self.hash = self.calculate_hash();
        self.repetition_counts = RepetitionTable::new();
        self.repetition_counts.record(self.hash);
    }

    pub(crate) fn calculate_hash(&self) -> u64 {
        let mut hash = 0;
        for piece in self.board.pieces() {
            hash ^= zobrist::piece_key(piece.piece_type, piece.coords);
        }
        for coords in self.special_rights.iter() {
            hash ^= zobrist::special_right_key(coords);
        }
        if let Some(ep) = self.en_passant {
            hash ^= zobrist::en_passant_key(ep);
        }
        if self.turn == Color::Black {
            hash ^= ZOBRIST.black_to_move_key;
        }
        hash
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn special_rights(&self) -> &SpecialRights {
        &self.special_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Coordinate> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[inline]
    #[must_use]
    pub fn movesets(&self) -> &Movesets {
        &self.movesets
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Conclusion cached by the last data-updating move.
    #[inline]
    #[must_use]
    pub fn game_conclusion(&self) -> Conclusion {
        self.conclusion
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|(mv, _)| mv)
    }

    #[must_use]
    pub fn piece_at(&self, coords: Coordinate) -> Option<Piece> {
        self.board.get(coords).map(|pt| Piece::new(pt, coords))
    }

    /// Squares of every royal piece of `color`.
    #[must_use]
    pub fn royals_of(&self, color: Color) -> Vec<Coordinate> {
        self.board
            .pieces_of(color)
            .filter(|p| p.kind().is_royal())
            .map(|p| p.coords)
            .collect()
    }

    /// Number of real (non-void) pieces of `color`.
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.board
            .pieces_of(color)
            .filter(|p| !p.piece_type.is_void())
            .count()
    }

    pub(crate) fn repetition_count(&self) -> u32 {
        self.repetition_counts.count(self.hash)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::with_valid_rules(GameRules::default())
    }
}
