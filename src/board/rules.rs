//! Game rule configuration.
//!
//! A [`GameRules`] value travels with every [`Position`](super::Position):
//! it decides promotion squares, slide limits, what each color plays for,
//! and the draw rules. Everything here derives `Serialize`/`Deserialize`
//! behind the `serde` feature so drivers can load rules from JSON.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;
use super::types::{Color, PieceKind};

/// Maximum number of steps any slider may travel.
///
/// Always a number; positive infinity (the default) means unlimited.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideLimit(f64);

impl SlideLimit {
    pub const UNLIMITED: SlideLimit = SlideLimit(f64::INFINITY);

    /// Validate a numeric limit. NaN is rejected.
    pub fn new(limit: f64) -> Result<Self, ConfigurationError> {
        if limit.is_nan() {
            return Err(ConfigurationError::SlideLimitNotNumeric {
                found: limit.to_string(),
            });
        }
        Ok(SlideLimit(limit))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn is_unlimited(self) -> bool {
        self.0 == f64::INFINITY
    }
}

impl Default for SlideLimit {
    fn default() -> Self {
        SlideLimit::UNLIMITED
    }
}

impl FromStr for SlideLimit {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let not_numeric = || ConfigurationError::SlideLimitNotNumeric {
            found: s.to_string(),
        };
        let value = match trimmed.to_ascii_lowercase().as_str() {
            "inf" | "infinity" | "+inf" | "+infinity" => f64::INFINITY,
            "-inf" | "-infinity" => f64::NEG_INFINITY,
            // f64 parsing alone would also accept "nan"
            other => other.parse::<f64>().map_err(|_| not_numeric())?,
        };
        SlideLimit::new(value).map_err(|_| not_numeric())
    }
}

impl fmt::Display for SlideLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == f64::INFINITY {
            f.write_str("infinity")
        } else if self.0 == f64::NEG_INFINITY {
            f.write_str("-infinity")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// JSON has no infinity literal, so non-finite limits travel as text.
#[cfg(feature = "serde")]
impl Serialize for SlideLimit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_str(&self.to_string())
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for SlideLimit {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        let parsed = match Repr::deserialize(deserializer)? {
            Repr::Number(n) => SlideLimit::new(n),
            Repr::Text(s) => s.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

/// Where pawns promote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PromotionRule {
    /// Pawns never promote.
    None,
    /// One promotion rank per color; a missing rank means no promotion.
    Ranks {
        white: Option<i64>,
        black: Option<i64>,
    },
    /// Boards stacked every `spacing` ranks (the five-dimensional layout).
    /// The rank repeats on every board: `y mod spacing == rank mod spacing`.
    Stacked {
        spacing: i64,
        white: Option<i64>,
        black: Option<i64>,
    },
}

impl PromotionRule {
    /// The classical layout: white promotes on 8, black on 1.
    pub const CLASSICAL: PromotionRule = PromotionRule::Ranks {
        white: Some(8),
        black: Some(1),
    };

    pub fn stacked(
        spacing: i64,
        white: Option<i64>,
        black: Option<i64>,
    ) -> Result<Self, ConfigurationError> {
        if spacing <= 0 {
            return Err(ConfigurationError::InvalidPromotionSpacing { spacing });
        }
        Ok(PromotionRule::Stacked {
            spacing,
            white,
            black,
        })
    }

    /// The promotion rank of `color`. Neutral pieces have none.
    #[must_use]
    pub fn rank_for(&self, color: Color) -> Option<i64> {
        let (white, black) = match *self {
            PromotionRule::None => return None,
            PromotionRule::Ranks { white, black } => (white, black),
            PromotionRule::Stacked { white, black, .. } => (white, black),
        };
        match color {
            Color::White => white,
            Color::Black => black,
            Color::Neutral => None,
        }
    }

    /// Whether a pawn of `color` arriving on rank `y` promotes.
    #[must_use]
    pub fn is_promotion_rank(&self, color: Color, y: i64) -> bool {
        let Some(rank) = self.rank_for(color) else {
            return false;
        };
        match *self {
            PromotionRule::Stacked { spacing, .. } if spacing > 0 => {
                y.rem_euclid(spacing) == rank.rem_euclid(spacing)
            }
            PromotionRule::Stacked { .. } => false,
            _ => y == rank,
        }
    }
}

/// Ways a color can win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WinCondition {
    Checkmate,
    RoyalCapture,
    AllPiecesCaptured,
}

impl WinCondition {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            WinCondition::Checkmate => "checkmate",
            WinCondition::RoyalCapture => "royalcapture",
            WinCondition::AllPiecesCaptured => "allpiecescaptured",
        }
    }
}

impl fmt::Display for WinCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Win conditions each color plays for.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WinConditions {
    pub white: Vec<WinCondition>,
    pub black: Vec<WinCondition>,
}

impl WinConditions {
    #[must_use]
    pub fn both(conditions: &[WinCondition]) -> Self {
        WinConditions {
            white: conditions.to_vec(),
            black: conditions.to_vec(),
        }
    }

    #[must_use]
    pub fn for_color(&self, color: Color) -> &[WinCondition] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
            Color::Neutral => &[],
        }
    }

    #[must_use]
    pub fn has(&self, color: Color, condition: WinCondition) -> bool {
        self.for_color(color).contains(&condition)
    }
}

impl Default for WinConditions {
    fn default() -> Self {
        WinConditions::both(&[WinCondition::Checkmate])
    }
}

/// The full rule set of a game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameRules {
    pub promotion: PromotionRule,
    pub promotions_allowed: Vec<PieceKind>,
    pub slide_limit: SlideLimit,
    pub win_conditions: WinConditions,
    /// Half-moves without capture or pawn move before a draw.
    pub move_rule: Option<u32>,
    /// Occurrences of the same position that draw the game.
    pub repetition_limit: u32,
}

impl GameRules {
    /// Classical rules on an unbounded board.
    #[must_use]
    pub fn classical() -> Self {
        GameRules {
            promotion: PromotionRule::CLASSICAL,
            promotions_allowed: vec![
                PieceKind::Queen,
                PieceKind::Rook,
                PieceKind::Bishop,
                PieceKind::Knight,
            ],
            slide_limit: SlideLimit::UNLIMITED,
            win_conditions: WinConditions::default(),
            move_rule: Some(100),
            repetition_limit: 3,
        }
    }

    /// Re-check values that may have bypassed the validating constructors,
    /// for example after deserialization.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        SlideLimit::new(self.slide_limit.get())?;
        if let PromotionRule::Stacked { spacing, .. } = self.promotion {
            if spacing <= 0 {
                return Err(ConfigurationError::InvalidPromotionSpacing { spacing });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn with_slide_limit(mut self, limit: SlideLimit) -> Self {
        self.slide_limit = limit;
        self
    }

    #[must_use]
    pub fn with_promotion(mut self, promotion: PromotionRule) -> Self {
        self.promotion = promotion;
        self
    }

    #[must_use]
    pub fn with_win_conditions(mut self, win_conditions: WinConditions) -> Self {
        self.win_conditions = win_conditions;
        self
    }
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules::classical()
    }
}
