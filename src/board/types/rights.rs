//! Special-move rights (castling, pawn double push), keyed by square.

use std::collections::HashSet;

use super::coord::Coordinate;

/// Squares whose occupant still holds its first-move-only special right.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SpecialRights(HashSet<Coordinate>);

impl SpecialRights {
    #[must_use]
    pub fn none() -> Self {
        SpecialRights(HashSet::new())
    }

    #[inline]
    #[must_use]
    pub fn has(&self, coords: Coordinate) -> bool {
        self.0.contains(&coords)
    }

    /// Grant the right, returning `true` if it was not held before.
    #[inline]
    pub fn insert(&mut self, coords: Coordinate) -> bool {
        self.0.insert(coords)
    }

    /// Revoke the right, returning `true` if it was held.
    #[inline]
    pub fn remove(&mut self, coords: Coordinate) -> bool {
        self.0.remove(&coords)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Coordinate> for SpecialRights {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        SpecialRights(iter.into_iter().collect())
    }
}
