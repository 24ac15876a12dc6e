//! Game conclusion: decisive results and draws.

use std::collections::BTreeSet;
use std::fmt;

use super::movegen::{LegalMoves, StepBounds};
use super::rules::WinCondition;
use super::state::Position;
use super::types::{line_intersection, Color, Direction, Piece};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawKind {
    Stalemate,
    Repetition,
    MoveRule,
}

impl DrawKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DrawKind::Stalemate => "stalemate",
            DrawKind::Repetition => "repetition",
            DrawKind::MoveRule => "moverule",
        }
    }
}

/// State of the game as seen from the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Conclusion {
    #[default]
    Undetermined,
    Decisive {
        winner: Color,
        condition: WinCondition,
    },
    Draw(DrawKind),
}

impl Conclusion {
    #[inline]
    #[must_use]
    pub fn is_over(self) -> bool {
        self != Conclusion::Undetermined
    }

    #[inline]
    #[must_use]
    pub fn is_draw(self) -> bool {
        matches!(self, Conclusion::Draw(_))
    }

    #[must_use]
    pub fn winner(self) -> Option<Color> {
        match self {
            Conclusion::Decisive { winner, .. } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conclusion::Undetermined => f.write_str("undetermined"),
            Conclusion::Decisive { winner, condition } => write!(f, "{winner} {condition}"),
            Conclusion::Draw(kind) => write!(f, "draw {}", kind.name()),
        }
    }
}

impl Position {
    /// Evaluate the position for the side to move.
    ///
    /// Checked in order: royal capture, all pieces captured, no legal move
    /// (checkmate or stalemate), repetition, move rule.
    pub fn conclusion(&mut self) -> Conclusion {
        let mover = self.turn;
        let winner = mover.opponent();

        if self.rules.win_conditions.has(winner, WinCondition::RoyalCapture)
            && self.royals_of(mover).is_empty()
        {
            return Conclusion::Decisive {
                winner,
                condition: WinCondition::RoyalCapture,
            };
        }
        if self
            .rules
            .win_conditions
            .has(winner, WinCondition::AllPiecesCaptured)
            && self.piece_count(mover) == 0
        {
            return Conclusion::Decisive {
                winner,
                condition: WinCondition::AllPiecesCaptured,
            };
        }
        if !self.has_any_legal_move(mover) {
            if self.rules.win_conditions.has(winner, WinCondition::Checkmate)
                && self.is_in_check(mover)
            {
                return Conclusion::Decisive {
                    winner,
                    condition: WinCondition::Checkmate,
                };
            }
            return Conclusion::Draw(DrawKind::Stalemate);
        }

        let limit = self.rules.repetition_limit;
        if limit > 0 && self.repetition_count() >= limit {
            return Conclusion::Draw(DrawKind::Repetition);
        }
        if let Some(rule) = self.rules.move_rule {
            if self.halfmove_clock >= rule {
                return Conclusion::Draw(DrawKind::MoveRule);
            }
        }
        Conclusion::Undetermined
    }

    /// Whether `color` has at least one legal move.
    ///
    /// Slides can reach infinitely many squares, so each slide is probed at
    /// a finite set of step counts: the nearest steps, the window ends, and
    /// every crossing with a line through an own royal or an enemy piece
    /// together with its neighbours. Check status along a slide only
    /// changes at such crossings.
    pub fn has_any_legal_move(&mut self, color: Color) -> bool {
        let pieces: Vec<Piece> = self
            .board
            .pieces_of(color)
            .filter(|piece| !piece.piece_type.is_void())
            .collect();

        for piece in pieces {
            let Some(legal) = self.calculate(piece.coords) else {
                continue;
            };
            if !legal.individual.is_empty() {
                return true;
            }
            if self.any_slide_legal(&piece, &legal) {
                return true;
            }
        }
        false
    }

    fn any_slide_legal(&mut self, piece: &Piece, legal: &LegalMoves) -> bool {
        for (&dir, bounds) in &legal.sliding {
            if bounds.is_empty() {
                continue;
            }
            for steps in self.slide_probes(piece, dir, bounds) {
                let Some(end) = piece.coords.step(dir, steps) else {
                    continue;
                };
                if self.check_if_move_legal(legal, piece.coords, end).is_some() {
                    return true;
                }
            }
        }
        false
    }

    fn slide_probes(&self, piece: &Piece, dir: Direction, bounds: &StepBounds) -> BTreeSet<i64> {
        let mut marks: BTreeSet<i64> = [1, 2, 3].into_iter().collect();
        marks.extend(bounds.min);
        marks.extend(bounds.max);

        let mut directions: Vec<Direction> = Direction::INDEXED.to_vec();
        directions.extend(self.movesets.slide_directions());
        directions.sort_unstable();
        directions.dedup();

        let color = piece.color();
        let anchors = self
            .board
            .pieces()
            .filter(|other| {
                other.coords != piece.coords
                    && (other.color() == color.opponent()
                        || (other.color() == color && other.kind().is_royal()))
            })
            .map(|other| other.coords);

        for anchor in anchors {
            marks.extend(dir.steps_between(piece.coords, anchor));
            for &cross in &directions {
                if let Some(point) = line_intersection(piece.coords, dir, anchor, cross) {
                    marks.extend(dir.steps_between(piece.coords, point));
                }
            }
        }

        let mut probes = BTreeSet::new();
        for mark in marks {
            for steps in [Some(mark), mark.checked_neg()].into_iter().flatten() {
                for delta in [-1, 0, 1] {
                    if let Some(candidate) = steps.checked_add(delta) {
                        if bounds.allows(candidate) {
                            probes.insert(candidate);
                        }
                    }
                }
            }
        }
        probes
    }
}
