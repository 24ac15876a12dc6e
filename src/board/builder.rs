//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing notation.
//!
//! # Example
//! ```
//! use infinite_engine::board::{Color, Coordinate, PieceKind, PositionBuilder};
//!
//! let position = PositionBuilder::new()
//!     .piece(Coordinate::new(5, 1), PieceKind::King, Color::White)
//!     .piece(Coordinate::new(5, 8), PieceKind::King, Color::Black)
//!     .piece_with_right(Coordinate::new(1, 2), PieceKind::Pawn, Color::White)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.board().len(), 3);
//! ```

use super::error::ConfigurationError;
use super::rules::GameRules;
use super::state::Position;
use super::types::{Color, Coordinate, PieceKind, PieceType};

/// A fluent builder for constructing [`Position`]s.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Coordinate, PieceType)>,
    rights: Vec<Coordinate>,
    side_to_move: Color,
    en_passant: Option<Coordinate>,
    halfmove_clock: u32,
    rules: GameRules,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// An empty board under the default rules, white to move.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            rights: Vec::new(),
            side_to_move: Color::White,
            en_passant: None,
            halfmove_clock: 0,
            rules: GameRules::default(),
        }
    }

    /// The classical setup on files 1-8, white on ranks 1-2. Kings, rooks
    /// and pawns hold their special rights.
    #[must_use]
    pub fn starting_position() -> Self {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut builder = Self::new();
        for (x, kind) in (1..).zip(back_rank) {
            let special = matches!(kind, PieceKind::King | PieceKind::Rook);
            for (color, y) in [(Color::White, 1), (Color::Black, 8)] {
                builder = builder.place(Coordinate::new(x, y), PieceType::new(kind, color), special);
            }
            for (color, y) in [(Color::White, 2), (Color::Black, 7)] {
                builder = builder.place(
                    Coordinate::new(x, y),
                    PieceType::new(PieceKind::Pawn, color),
                    true,
                );
            }
        }
        builder
    }

    fn place(mut self, coords: Coordinate, piece_type: PieceType, special: bool) -> Self {
        self = self.clear(coords);
        self.pieces.push((coords, piece_type));
        if special {
            self.rights.push(coords);
        }
        self
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(self, coords: Coordinate, kind: PieceKind, color: Color) -> Self {
        self.place(coords, PieceType::new(kind, color), false)
    }

    /// Place a piece that still holds its special right.
    #[must_use]
    pub fn piece_with_right(self, coords: Coordinate, kind: PieceKind, color: Color) -> Self {
        self.place(coords, PieceType::new(kind, color), true)
    }

    /// Place a void marker.
    #[must_use]
    pub fn void(self, coords: Coordinate) -> Self {
        self.place(coords, PieceType::VOID, false)
    }

    /// Remove the piece (and its right) from a square.
    #[must_use]
    pub fn clear(mut self, coords: Coordinate) -> Self {
        self.pieces.retain(|(sq, _)| *sq != coords);
        self.rights.retain(|sq| *sq != coords);
        self
    }

    /// Grant the special right to whatever ends up on `coords`.
    #[must_use]
    pub fn special_right(mut self, coords: Coordinate) -> Self {
        if !self.rights.contains(&coords) {
            self.rights.push(coords);
        }
        self
    }

    #[must_use]
    pub fn revoke_right(mut self, coords: Coordinate) -> Self {
        self.rights.retain(|sq| *sq != coords);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Coordinate) -> Self {
        self.en_passant = Some(target);
        self
    }

    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant = None;
        self
    }

    /// Set the halfmove clock (for the move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Use `rules` for the built position.
    pub fn rules(mut self, rules: GameRules) -> Result<Self, ConfigurationError> {
        rules.validate()?;
        self.rules = rules;
        Ok(self)
    }

    /// Build the position.
    ///
    /// Rights on empty squares are dropped. The cached conclusion is
    /// computed for the side to move.
    #[must_use]
    pub fn build(self) -> Position {
        let mut position = Position::with_valid_rules(self.rules);
        for (coords, piece_type) in self.pieces {
            position.board.place(coords, piece_type);
        }
        for coords in self.rights {
            if position.board.is_occupied(coords) {
                position.special_rights.insert(coords);
            }
        }
        position.turn = self.side_to_move;
        position.en_passant = self.en_passant;
        position.halfmove_clock = self.halfmove_clock;
        position.reset_hash();
        position.conclusion = position.conclusion();
        position
    }
}
