//! Per-kind movement templates.
//!
//! Every call to [`movesets_for`] builds a fresh catalog, so a caller that
//! customizes its copy never affects another game.

use std::collections::{BTreeMap, HashMap};

use super::error::ConfigurationError;
use super::rules::SlideLimit;
use super::types::{Color, Direction, PieceKind, PieceType};

const KNIGHT: [(i64, i64); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const GUARD: [(i64, i64); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

const HAWK: [(i64, i64); 16] = [
    (-3, 0),
    (-2, 0),
    (2, 0),
    (3, 0),
    (0, -3),
    (0, -2),
    (0, 2),
    (0, 3),
    (-2, -2),
    (-2, 2),
    (2, -2),
    (2, 2),
    (-3, -3),
    (-3, 3),
    (3, -3),
    (3, 3),
];

const ORTHOGONAL: [Direction; 2] = [Direction::HORIZONTAL, Direction::VERTICAL];
const DIAGONAL: [Direction; 2] = [Direction::DIAGONAL, Direction::ANTI_DIAGONAL];
const KNIGHTRIDER: [Direction; 4] = [
    Direction { dx: 1, dy: 2 },
    Direction { dx: 1, dy: -2 },
    Direction { dx: 2, dy: 1 },
    Direction { dx: 2, dy: -1 },
];

/// Leaper offsets `(a, b)` expanded to all eight sign/axis combinations.
fn leaper(a: i64, b: i64) -> Vec<(i64, i64)> {
    vec![
        (-a, b),
        (-b, a),
        (b, a),
        (a, b),
        (-a, -b),
        (-b, -a),
        (b, -a),
        (a, -b),
    ]
}

/// Signed step range along a canonical direction, inclusive.
///
/// Floats so that an unlimited slide is `[-inf, inf]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideRange {
    pub min: f64,
    pub max: f64,
}

impl SlideRange {
    #[must_use]
    pub fn symmetric(limit: SlideLimit) -> Self {
        SlideRange {
            min: -limit.get(),
            max: limit.get(),
        }
    }

    /// Whether a signed step count lies inside the range.
    #[inline]
    #[must_use]
    pub fn contains(&self, steps: i64) -> bool {
        let steps = steps as f64;
        steps >= self.min && steps <= self.max
    }
}

/// What a piece standing on a slide line does to the slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Blocking {
    /// The slider passes through.
    PassThrough = 0,
    /// The slider stops on the square before the blocker.
    StopBefore = 1,
    /// The slider may capture the blocker but goes no further.
    StopAfter = 2,
}

/// How blockers on a slide line are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BlockingPolicy {
    /// Friendly pieces and voids stop before, enemies stop after.
    #[default]
    Standard,
    /// Only pieces at a prime distance block; the rest are jumped over.
    PrimeDistance,
}

impl BlockingPolicy {
    /// Resolve a blocker at `distance` steps from a slider of color `friendly`.
    #[must_use]
    pub fn resolve(self, friendly: Color, blocker: PieceType, distance: u64) -> Blocking {
        if self == BlockingPolicy::PrimeDistance && !is_prime(distance) {
            return Blocking::PassThrough;
        }
        if blocker.color == friendly || blocker.is_void() {
            Blocking::StopBefore
        } else {
            Blocking::StopAfter
        }
    }
}

/// Per-square veto applied after blocking and range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum IgnorePolicy {
    #[default]
    None,
    /// Only prime distances are legal landing squares.
    PrimeDistance,
    /// Squares where the moving royal would stand in check are illegal.
    RoyalSafety,
}

impl IgnorePolicy {
    /// The geometric part of the veto. `RoyalSafety` needs a position and is
    /// resolved by the legality layer.
    #[inline]
    #[must_use]
    pub fn allows_distance(self, distance: u64) -> bool {
        match self {
            IgnorePolicy::PrimeDistance => is_prime(distance),
            IgnorePolicy::None | IgnorePolicy::RoyalSafety => true,
        }
    }
}

#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5u64;
    while i.saturating_mul(i) <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Movement template of one piece kind.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PieceMoveset {
    /// Jump offsets.
    pub individual: Vec<(i64, i64)>,
    /// Slide directions and their signed step ranges.
    pub sliding: BTreeMap<Direction, SlideRange>,
    pub blocking: BlockingPolicy,
    pub ignore: IgnorePolicy,
}

impl PieceMoveset {
    fn jumps(individual: Vec<(i64, i64)>) -> Self {
        PieceMoveset {
            individual,
            ..PieceMoveset::default()
        }
    }

    fn slides(mut self, directions: &[Direction], limit: SlideLimit) -> Self {
        for &dir in directions {
            self.sliding.insert(dir, SlideRange::symmetric(limit));
        }
        self
    }

    #[must_use]
    pub fn has_slides(&self) -> bool {
        !self.sliding.is_empty()
    }
}

/// Movesets for every kind in a game. Voids have none.
#[derive(Clone, Debug, PartialEq)]
pub struct Movesets(HashMap<PieceKind, PieceMoveset>);

impl Movesets {
    /// Build the default catalog under a validated slide limit.
    #[must_use]
    pub fn for_limit(limit: SlideLimit) -> Self {
        let mut sets = HashMap::new();

        sets.insert(PieceKind::Pawn, PieceMoveset::default());
        sets.insert(PieceKind::Rose, PieceMoveset::default());
        sets.insert(PieceKind::Knight, PieceMoveset::jumps(KNIGHT.to_vec()));
        sets.insert(PieceKind::Hawk, PieceMoveset::jumps(HAWK.to_vec()));
        sets.insert(PieceKind::King, PieceMoveset::jumps(GUARD.to_vec()));
        sets.insert(PieceKind::Guard, PieceMoveset::jumps(GUARD.to_vec()));
        sets.insert(PieceKind::Camel, PieceMoveset::jumps(leaper(3, 1)));
        sets.insert(PieceKind::Giraffe, PieceMoveset::jumps(leaper(4, 1)));
        sets.insert(PieceKind::Zebra, PieceMoveset::jumps(leaper(3, 2)));

        let centaur: Vec<_> = GUARD.iter().chain(KNIGHT.iter()).copied().collect();
        sets.insert(PieceKind::Centaur, PieceMoveset::jumps(centaur.clone()));
        sets.insert(PieceKind::RoyalCentaur, PieceMoveset::jumps(centaur));

        let both = [ORTHOGONAL, DIAGONAL].concat();
        sets.insert(
            PieceKind::Rook,
            PieceMoveset::default().slides(&ORTHOGONAL, limit),
        );
        sets.insert(
            PieceKind::Bishop,
            PieceMoveset::default().slides(&DIAGONAL, limit),
        );
        sets.insert(PieceKind::Queen, PieceMoveset::default().slides(&both, limit));
        sets.insert(
            PieceKind::RoyalQueen,
            PieceMoveset {
                ignore: IgnorePolicy::RoyalSafety,
                ..PieceMoveset::default()
            }
            .slides(&both, limit),
        );
        sets.insert(
            PieceKind::Chancellor,
            PieceMoveset::jumps(KNIGHT.to_vec()).slides(&ORTHOGONAL, limit),
        );
        sets.insert(
            PieceKind::Archbishop,
            PieceMoveset::jumps(KNIGHT.to_vec()).slides(&DIAGONAL, limit),
        );
        sets.insert(
            PieceKind::Amazon,
            PieceMoveset::jumps(KNIGHT.to_vec()).slides(&both, limit),
        );
        sets.insert(
            PieceKind::Knightrider,
            PieceMoveset::default().slides(&KNIGHTRIDER, limit),
        );
        sets.insert(
            PieceKind::Huygen,
            PieceMoveset {
                blocking: BlockingPolicy::PrimeDistance,
                ignore: IgnorePolicy::PrimeDistance,
                ..PieceMoveset::default()
            }
            .slides(&ORTHOGONAL, limit),
        );

        Movesets(sets)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, kind: PieceKind) -> Option<&PieceMoveset> {
        self.0.get(&kind)
    }

    #[inline]
    pub fn get_mut(&mut self, kind: PieceKind) -> Option<&mut PieceMoveset> {
        self.0.get_mut(&kind)
    }

    /// Every slide direction used by any kind in the catalog.
    #[must_use]
    pub fn slide_directions(&self) -> Vec<Direction> {
        let mut dirs: Vec<Direction> = self
            .0
            .values()
            .flat_map(|set| set.sliding.keys().copied())
            .collect();
        dirs.sort_unstable();
        dirs.dedup();
        dirs
    }
}

impl Default for Movesets {
    fn default() -> Self {
        Movesets::for_limit(SlideLimit::UNLIMITED)
    }
}

/// Build a fresh catalog for a raw slide limit. NaN is rejected.
pub fn movesets_for(slide_limit: f64) -> Result<Movesets, ConfigurationError> {
    Ok(Movesets::for_limit(SlideLimit::new(slide_limit)?))
}
