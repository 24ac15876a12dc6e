//! Automated opponent for lone-royal endgames.
//!
//! The engine plays the single royal of the defending color against an
//! army. It runs a fixed-depth negamax with alpha-beta pruning, the
//! defender enumerating every legal royal move and the attacker limited to
//! moves onto construction-line intersections.

mod eval;
mod intersections;
mod negamax;
mod params;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::error::SearchError;
use super::make_unmake::{MoveOptions, UndoOptions};
use super::state::Position;
use super::types::Move;

pub use eval::evaluate;
pub use intersections::{candidate_moves, get_intersections};
pub use negamax::{defender_moves, SearchContext};
pub use params::{
    DistanceMetric, DistanceWeight, Score, SearchParams, SearchResult, SCORE_INFINITY,
};

/// Pick a move for the defender with default parameters at `depth`.
pub fn choose_move(position: &mut Position, depth: u32) -> Result<Move, SearchError> {
    let params = SearchParams::default().with_depth(depth);
    let mut rng = rand::thread_rng();
    calculate(position, &params, &mut rng).map(|result| result.best_move)
}

/// Root search: score every defender move and keep the best.
///
/// The fallback is a uniformly random legal move, so a lost position still
/// yields a move. The position is left exactly as it was passed in.
pub fn calculate<R: Rng + ?Sized>(
    position: &mut Position,
    params: &SearchParams,
    rng: &mut R,
) -> Result<SearchResult, SearchError> {
    let moves = defender_moves(position, params)?;
    let mut best_move = *moves.choose(rng).ok_or(SearchError::NoLegalMoves)?;
    let mut best_score = -SCORE_INFINITY;

    let mut ctx = SearchContext::new(position, params);
    let child_depth = params.depth.saturating_sub(1);
    for mv in moves {
        ctx.position.apply_move(&mv, MoveOptions::SIMULATED)?;
        let child = ctx.negamax(child_depth, -SCORE_INFINITY, SCORE_INFINITY, -1);
        ctx.position.undo_last_move(UndoOptions::SIMULATED)?;
        let score = child?.saturating_neg();
        debug!("root move {mv} scores {score}");
        if score > best_score {
            best_score = score;
            best_move = mv;
        }
    }

    Ok(SearchResult {
        best_move,
        score: best_score,
        nodes: ctx.nodes,
    })
}
