use crate::board::types::{Color, Coordinate, Move, PieceKind};

/// Search score; positive favours the defender.
pub type Score = i64;

/// Score of a won or drawn line. Negation stays in range.
pub const SCORE_INFINITY: Score = Score::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceMetric {
    Chebyshev,
    Manhattan,
}

/// Distance term for one attacker kind: `distance * weight`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistanceWeight {
    pub metric: DistanceMetric,
    pub weight: i64,
}

impl DistanceWeight {
    #[must_use]
    pub const fn chebyshev(weight: i64) -> Self {
        DistanceWeight {
            metric: DistanceMetric::Chebyshev,
            weight,
        }
    }

    #[must_use]
    pub const fn manhattan(weight: i64) -> Self {
        DistanceWeight {
            metric: DistanceMetric::Manhattan,
            weight,
        }
    }

    #[must_use]
    pub fn score(&self, from: Coordinate, to: Coordinate) -> Score {
        let distance = match self.metric {
            DistanceMetric::Chebyshev => from.chebyshev_distance(to),
            DistanceMetric::Manhattan => from.manhattan_distance(to),
        };
        i64::try_from(distance)
            .unwrap_or(i64::MAX)
            .saturating_mul(self.weight)
    }
}

#[derive(Clone, Debug)]
pub struct SearchParams {
    pub depth: u32,
    /// Color of the lone royal the engine plays.
    pub defender: Color,
    pub material_penalty: i64,
    pub weights: Vec<(PieceKind, DistanceWeight)>,
    /// Long-range kinds that box the royal in when working together.
    pub boxers: Vec<PieceKind>,
    /// Weight every boxer gets once more than one is on the board.
    pub boxer_weight: DistanceWeight,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 2,
            defender: Color::Black,
            material_penalty: 100,
            weights: vec![
                (PieceKind::King, DistanceWeight::chebyshev(4)),
                (PieceKind::Guard, DistanceWeight::chebyshev(4)),
                (PieceKind::Knight, DistanceWeight::chebyshev(3)),
                (PieceKind::Hawk, DistanceWeight::chebyshev(2)),
            ],
            boxers: vec![
                PieceKind::Queen,
                PieceKind::Chancellor,
                PieceKind::Rook,
                PieceKind::RoyalQueen,
            ],
            boxer_weight: DistanceWeight::manhattan(1),
        }
    }
}

impl SearchParams {
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_defender(mut self, defender: Color) -> Self {
        self.defender = defender;
        self
    }

    #[must_use]
    pub fn weight_for(&self, kind: PieceKind) -> Option<DistanceWeight> {
        self.weights
            .iter()
            .find(|(weighted, _)| *weighted == kind)
            .map(|&(_, weight)| weight)
    }

    #[must_use]
    pub fn is_boxer(&self, kind: PieceKind) -> bool {
        self.boxers.contains(&kind)
    }
}

/// Outcome of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: Score,
    pub nodes: u64,
}
