//! Piece kinds, colors and placed pieces.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coordinate;

/// Piece kinds of the catalog.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    King,
    Giraffe,
    Camel,
    Zebra,
    Knightrider,
    Amazon,
    Queen,
    RoyalQueen,
    Hawk,
    Chancellor,
    Archbishop,
    Centaur,
    RoyalCentaur,
    Rose,
    Knight,
    Guard,
    Huygen,
    Rook,
    Bishop,
    Pawn,
    /// Non-capturable blocking marker, always neutral.
    Void,
}

impl PieceKind {
    /// All kinds in index order
    pub const ALL: [PieceKind; 21] = [
        PieceKind::King,
        PieceKind::Giraffe,
        PieceKind::Camel,
        PieceKind::Zebra,
        PieceKind::Knightrider,
        PieceKind::Amazon,
        PieceKind::Queen,
        PieceKind::RoyalQueen,
        PieceKind::Hawk,
        PieceKind::Chancellor,
        PieceKind::Archbishop,
        PieceKind::Centaur,
        PieceKind::RoyalCentaur,
        PieceKind::Rose,
        PieceKind::Knight,
        PieceKind::Guard,
        PieceKind::Huygen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Pawn,
        PieceKind::Void,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Pieces whose capture (or checkmate) decides the game.
    #[inline]
    #[must_use]
    pub const fn is_royal(self) -> bool {
        matches!(
            self,
            PieceKind::King | PieceKind::RoyalQueen | PieceKind::RoyalCentaur
        )
    }

    /// Notation code, uppercase.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            PieceKind::King => "K",
            PieceKind::Giraffe => "GI",
            PieceKind::Camel => "CA",
            PieceKind::Zebra => "ZE",
            PieceKind::Knightrider => "NR",
            PieceKind::Amazon => "AM",
            PieceKind::Queen => "Q",
            PieceKind::RoyalQueen => "RQ",
            PieceKind::Hawk => "HA",
            PieceKind::Chancellor => "CH",
            PieceKind::Archbishop => "AR",
            PieceKind::Centaur => "CE",
            PieceKind::RoyalCentaur => "RC",
            PieceKind::Rose => "RO",
            PieceKind::Knight => "N",
            PieceKind::Guard => "GU",
            PieceKind::Huygen => "HU",
            PieceKind::Rook => "R",
            PieceKind::Bishop => "B",
            PieceKind::Pawn => "P",
            PieceKind::Void => "VO",
        }
    }

    /// Parse a notation code, ignoring case.
    #[must_use]
    pub fn from_code(code: &str) -> Option<PieceKind> {
        let upper = code.to_ascii_uppercase();
        PieceKind::ALL.into_iter().find(|kind| kind.code() == upper)
    }
}

/// Piece colors. `Neutral` is reserved for voids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
    Neutral,
}

impl Color {
    /// The two colors that take turns
    pub const PLAYERS: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::Neutral => Color::Neutral,
        }
    }

    /// Pawn forward direction along y (+1 for White, -1 for Black, 0 for Neutral)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i64 {
        match self {
            Color::White => 1,
            Color::Black => -1,
            Color::Neutral => 0,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A kind together with its color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceType {
    pub kind: PieceKind,
    pub color: Color,
}

impl PieceType {
    /// Number of distinct (kind, color) slots
    pub(crate) const SLOTS: usize = PieceKind::ALL.len() * 3;

    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        PieceType { kind, color }
    }

    pub const VOID: PieceType = PieceType::new(PieceKind::Void, Color::Neutral);

    #[inline]
    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(self.kind, PieceKind::Void)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.kind.index() * 3 + self.color.index()
    }

    /// Notation code: uppercase for White, lowercase otherwise.
    #[must_use]
    pub fn code(self) -> String {
        match self.color {
            Color::White => self.kind.code().to_string(),
            Color::Black | Color::Neutral => self.kind.code().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// A piece standing on a square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub piece_type: PieceType,
    pub coords: Coordinate,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(piece_type: PieceType, coords: Coordinate) -> Self {
        Piece { piece_type, coords }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.piece_type.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.piece_type.color
    }
}
