//! Coordinates and line directions on an unbounded board.
//!
//! Coordinates are plain `i64` pairs. Every arithmetic helper is checked:
//! a square that would overflow simply does not exist, it is never wrapped.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A square on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    #[inline]
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Coordinate { x, y }
    }

    /// Translate by a fixed offset, `None` on overflow.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: i64, dy: i64) -> Option<Coordinate> {
        Some(Coordinate {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Walk `steps` times along `dir`, `None` on overflow.
    #[inline]
    #[must_use]
    pub fn step(self, dir: Direction, steps: i64) -> Option<Coordinate> {
        self.offset(dir.dx.checked_mul(steps)?, dir.dy.checked_mul(steps)?)
    }

    /// The `"x,y"` string key, as used for deduplicating coordinate sets.
    #[must_use]
    pub fn key(self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn chebyshev_distance(self, other: Coordinate) -> u64 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    #[must_use]
    pub fn manhattan_distance(self, other: Coordinate) -> u64 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Coordinate { x, y }
    }
}

/// A line direction in canonical form: `dx > 0`, or `dx == 0` and `dy > 0`.
///
/// Mirrored vectors such as `(-1, 0)` and `(1, 0)` describe the same line and
/// only the canonical one is ever stored. Travel along the negative direction
/// is expressed with negative step counts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Direction {
    pub dx: i64,
    pub dy: i64,
}

impl Direction {
    pub const HORIZONTAL: Direction = Direction { dx: 1, dy: 0 };
    pub const VERTICAL: Direction = Direction { dx: 0, dy: 1 };
    pub const DIAGONAL: Direction = Direction { dx: 1, dy: 1 };
    pub const ANTI_DIAGONAL: Direction = Direction { dx: 1, dy: -1 };

    /// Every line family the board index keeps: the four base directions
    /// plus the knightrider lines.
    pub const INDEXED: [Direction; 8] = [
        Direction::HORIZONTAL,
        Direction::VERTICAL,
        Direction::DIAGONAL,
        Direction::ANTI_DIAGONAL,
        Direction { dx: 1, dy: 2 },
        Direction { dx: 1, dy: -2 },
        Direction { dx: 2, dy: 1 },
        Direction { dx: 2, dy: -1 },
    ];

    /// Canonicalize an arbitrary non-zero vector.
    #[must_use]
    pub fn canonical(dx: i64, dy: i64) -> Option<Direction> {
        if dx == 0 && dy == 0 {
            return None;
        }
        if dx < 0 || (dx == 0 && dy < 0) {
            Some(Direction {
                dx: dx.checked_neg()?,
                dy: dy.checked_neg()?,
            })
        } else {
            Some(Direction { dx, dy })
        }
    }

    /// Value shared by every square on the same line with this direction.
    #[inline]
    #[must_use]
    pub fn line_key(self, c: Coordinate) -> i128 {
        i128::from(self.dx) * i128::from(c.y) - i128::from(self.dy) * i128::from(c.x)
    }

    /// Scalar that orders squares along a line of this direction.
    #[inline]
    #[must_use]
    pub fn position_along(self, c: Coordinate) -> i64 {
        if self.dx != 0 {
            c.x
        } else {
            c.y
        }
    }

    /// Signed step count `k` with `from + k * self == to`, if one exists.
    #[must_use]
    pub fn steps_between(self, from: Coordinate, to: Coordinate) -> Option<i64> {
        let ddx = i128::from(to.x) - i128::from(from.x);
        let ddy = i128::from(to.y) - i128::from(from.y);
        let (dx, dy) = (i128::from(self.dx), i128::from(self.dy));
        let k = if dx != 0 {
            if ddx % dx != 0 {
                return None;
            }
            ddx / dx
        } else {
            if ddx != 0 || ddy % dy != 0 {
                return None;
            }
            ddy / dy
        };
        if k * dy != ddy {
            return None;
        }
        i64::try_from(k).ok()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.dx, self.dy)
    }
}

/// Intersection of two integer lines, when it falls on a whole-step square of
/// the first line. Parallel lines never intersect.
#[must_use]
pub fn line_intersection(
    a: Coordinate,
    da: Direction,
    b: Coordinate,
    db: Direction,
) -> Option<Coordinate> {
    let denom = i128::from(da.dx) * i128::from(db.dy) - i128::from(da.dy) * i128::from(db.dx);
    if denom == 0 {
        return None;
    }
    let (ex, ey) = (
        i128::from(b.x) - i128::from(a.x),
        i128::from(b.y) - i128::from(a.y),
    );
    let num = ex * i128::from(db.dy) - ey * i128::from(db.dx);
    if num % denom != 0 {
        return None;
    }
    let s = num / denom;
    let x = i128::from(a.x) + s * i128::from(da.dx);
    let y = i128::from(a.y) + s * i128::from(da.dy);
    let point = Coordinate::new(i64::try_from(x).ok()?, i64::try_from(y).ok()?);
    // Only squares reachable in whole steps along `db` are real crossings.
    db.steps_between(b, point)?;
    Some(point)
}
