//! Moves, candidate destinations and special-move payloads.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coordinate;
use super::piece::PieceType;

/// One special-move payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Special {
    /// Castling toward `dir` (-1 left, +1 right) with the piece on `rook`.
    Castle { dir: i8, rook: Coordinate },
    /// En passant; the captured pawn stands at `end.y + offset`.
    EnPassant(i8),
    /// Pawn promotion into the given type.
    Promotion(PieceType),
}

/// The special payloads attached to a move, at most one of each kind.
///
/// Kinds combine freely: an en passant capture that lands on a promotion
/// rank carries both.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Specials {
    pub castle: Option<(i8, Coordinate)>,
    pub en_passant: Option<i8>,
    pub promotion: Option<PieceType>,
}

impl Specials {
    pub const NONE: Specials = Specials {
        castle: None,
        en_passant: None,
        promotion: None,
    };

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.castle.is_none() && self.en_passant.is_none() && self.promotion.is_none()
    }

    /// Attach `special`, replacing a payload of the same kind.
    pub fn insert(&mut self, special: Special) {
        match special {
            Special::Castle { dir, rook } => self.castle = Some((dir, rook)),
            Special::EnPassant(offset) => self.en_passant = Some(offset),
            Special::Promotion(promoted) => self.promotion = Some(promoted),
        }
    }

    /// Copy every payload present in `other`; kinds it lacks are kept.
    pub fn merge(&mut self, other: &Specials) {
        for special in other.iter() {
            self.insert(special);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Special> {
        [
            self.castle.map(|(dir, rook)| Special::Castle { dir, rook }),
            self.en_passant.map(Special::EnPassant),
            self.promotion.map(Special::Promotion),
        ]
        .into_iter()
        .flatten()
    }
}

impl From<Special> for Specials {
    fn from(special: Special) -> Self {
        let mut specials = Specials::NONE;
        specials.insert(special);
        specials
    }
}

/// A square a piece may move to, possibly tagged with special payloads.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Destination {
    pub coords: Coordinate,
    pub specials: Specials,
}

impl Destination {
    #[inline]
    #[must_use]
    pub const fn plain(coords: Coordinate) -> Self {
        Destination {
            coords,
            specials: Specials::NONE,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_special(coords: Coordinate, special: Special) -> Self {
        Destination {
            coords,
            specials: Specials::from(special),
        }
    }
}

/// A finalized move record.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub piece_type: PieceType,
    pub start: Coordinate,
    pub end: Coordinate,
    pub specials: Specials,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(piece_type: PieceType, start: Coordinate, end: Coordinate) -> Self {
        Move {
            piece_type,
            start,
            end,
            specials: Specials::NONE,
        }
    }

    /// Build a move toward `dest`, carrying over its special payloads.
    #[must_use]
    pub fn from_destination(piece_type: PieceType, start: Coordinate, dest: &Destination) -> Self {
        let mut mv = Move::new(piece_type, start, dest.coords);
        transfer_special_to_move(dest, &mut mv);
        mv
    }

    /// The probe destination equivalent to this move.
    #[must_use]
    pub fn destination(&self) -> Destination {
        let mut dest = Destination::plain(self.end);
        transfer_special_to_destination(self, &mut dest);
        dest
    }

    #[inline]
    #[must_use]
    pub const fn castle(&self) -> Option<(i8, Coordinate)> {
        self.specials.castle
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(&self) -> Option<i8> {
        self.specials.en_passant
    }

    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceType> {
        self.specials.promotion
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {}", self.piece_type, self)?;
        if let Some((dir, rook)) = self.castle() {
            write!(f, " castle {dir} rook {rook}")?;
        }
        if let Some(offset) = self.en_passant() {
            write!(f, " ep {offset}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}>{}", self.start, self.end)?;
        if let Some(promoted) = self.promotion() {
            write!(f, "={promoted}")?;
        }
        Ok(())
    }
}

// Payloads are plain values, so every transfer below is a full copy: the
// source and target never share anything mutable.

/// Copy the special payloads of a destination onto a move.
pub fn transfer_special_to_move(dest: &Destination, mv: &mut Move) {
    mv.specials.merge(&dest.specials);
}

/// Copy the special payloads of a move onto a destination.
pub fn transfer_special_to_destination(mv: &Move, dest: &mut Destination) {
    dest.specials.merge(&mv.specials);
}

/// Copy the special payloads from one destination to another.
pub fn transfer_special_between(src: &Destination, dst: &mut Destination) {
    dst.specials.merge(&src.specials);
}
