use crate::board::conclusion::Conclusion;
use crate::board::error::SearchError;
use crate::board::make_unmake::{MoveOptions, UndoOptions};
use crate::board::state::Position;
use crate::board::types::Move;

use super::eval::evaluate;
use super::intersections::candidate_moves;
use super::params::{Score, SearchParams, SCORE_INFINITY};

/// Search context for one root search.
pub struct SearchContext<'a> {
    pub position: &'a mut Position,
    pub params: &'a SearchParams,
    pub nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub fn new(position: &'a mut Position, params: &'a SearchParams) -> Self {
        SearchContext {
            position,
            params,
            nodes: 0,
        }
    }

    /// Negamax with alpha-beta pruning.
    ///
    /// `color` is +1 when the defender is to move and -1 otherwise. Every
    /// move is taken back before the next sibling is tried, including on a
    /// cutoff or an error from the subtree.
    pub fn negamax(
        &mut self,
        depth: u32,
        mut alpha: Score,
        beta: Score,
        color: Score,
    ) -> Result<Score, SearchError> {
        self.nodes += 1;
        let attacker = self.params.defender.opponent();
        match self.position.conclusion() {
            Conclusion::Decisive { winner, .. } if winner == attacker => {
                return Ok(color * -SCORE_INFINITY);
            }
            Conclusion::Decisive { .. } | Conclusion::Draw(_) => {
                return Ok(color * SCORE_INFINITY);
            }
            Conclusion::Undetermined => {}
        }
        if depth == 0 {
            let eval = evaluate(self.position, self.params)?;
            return Ok(color.saturating_mul(eval));
        }

        for mv in self.node_moves(color)? {
            self.position.apply_move(&mv, MoveOptions::SIMULATED)?;
            let child = self.negamax(depth - 1, beta.saturating_neg(), alpha.saturating_neg(), -color);
            self.position.undo_last_move(UndoOptions::SIMULATED)?;
            let score = child?.saturating_neg();
            if score >= beta {
                return Ok(beta);
            }
            if score > alpha {
                alpha = score;
            }
        }
        Ok(alpha)
    }

    /// The defender plays every legal royal move; the attacker only moves
    /// onto intersections.
    pub(crate) fn node_moves(&mut self, color: Score) -> Result<Vec<Move>, SearchError> {
        if color == 1 {
            defender_moves(self.position, self.params)
        } else {
            Ok(candidate_moves(self.position))
        }
    }
}

/// Every legal move of the defender's royal.
pub fn defender_moves(
    position: &mut Position,
    params: &SearchParams,
) -> Result<Vec<Move>, SearchError> {
    let defender = params.defender;
    let royal = position
        .royals_of(defender)
        .first()
        .copied()
        .ok_or(SearchError::NoDefender { color: defender })?;
    let Some(piece) = position.piece_at(royal) else {
        return Ok(Vec::new());
    };
    let Some(legal) = position.calculate(royal) else {
        return Ok(Vec::new());
    };
    Ok(legal
        .individual
        .iter()
        .map(|dest| Move::from_destination(piece.piece_type, royal, dest))
        .collect())
}
