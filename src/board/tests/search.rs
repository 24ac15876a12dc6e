//! Search tests: candidate squares, negamax and the root move choice.

use rand::prelude::*;

use super::{c, position};
use crate::board::search::{
    calculate, candidate_moves, choose_move, defender_moves, evaluate, get_intersections, Score,
    SearchContext, SearchParams, SCORE_INFINITY,
};
use crate::board::{Color, Conclusion, MoveOptions, Position, SearchError, UndoOptions};

const SMALL: &str = "b k0,0|R5,3|K9,9";

/// Plain negamax without pruning, scored the same way as the engine.
fn reference_negamax(
    position: &mut Position,
    params: &SearchParams,
    depth: u32,
    color: Score,
) -> Score {
    let attacker = params.defender.opponent();
    match position.conclusion() {
        Conclusion::Decisive { winner, .. } if winner == attacker => return color * -SCORE_INFINITY,
        Conclusion::Decisive { .. } | Conclusion::Draw(_) => return color * SCORE_INFINITY,
        Conclusion::Undetermined => {}
    }
    if depth == 0 {
        return color * evaluate(position, params).unwrap();
    }
    let moves = SearchContext::new(position, params)
        .node_moves(color)
        .unwrap();
    let mut best = -SCORE_INFINITY;
    for mv in moves {
        position.apply_move(&mv, MoveOptions::SIMULATED).unwrap();
        let score = -reference_negamax(position, params, depth - 1, -color);
        position.undo_last_move(UndoOptions::SIMULATED).unwrap();
        best = best.max(score);
    }
    best
}

#[test]
fn test_candidate_moves_land_on_intersections() {
    let mut pos = position("w R5,3|K9,9|k0,0");
    let intersections = get_intersections(&pos);
    let moves = candidate_moves(&mut pos);
    assert!(!moves.is_empty());
    for mv in &moves {
        assert!(intersections.contains(&mv.end), "{mv} is off the grid");
        assert_eq!(mv.piece_type.color, Color::White);
        let legal = pos.calculate(mv.start).unwrap();
        assert!(pos.check_if_move_legal(&legal, mv.start, mv.end).is_some());
    }
}

#[test]
fn test_intersections_are_unique() {
    let pos = position(SMALL);
    let mut found = get_intersections(&pos);
    let total = found.len();
    found.sort_unstable();
    found.dedup();
    assert_eq!(found.len(), total);
    assert!(found.contains(&c(0, 0)));
}

#[test]
fn test_leaf_score_sign() {
    let params = SearchParams::default();
    let mut pos = position(SMALL);
    let eval = evaluate(&mut pos, &params).unwrap();
    let mut ctx = SearchContext::new(&mut pos, &params);
    assert_eq!(ctx.negamax(0, -SCORE_INFINITY, SCORE_INFINITY, 1), Ok(eval));
    assert_eq!(ctx.negamax(0, -SCORE_INFINITY, SCORE_INFINITY, -1), Ok(-eval));
    assert_eq!(ctx.nodes, 2);
}

#[test]
fn test_alpha_beta_matches_plain_negamax() {
    let params = SearchParams::default();
    for depth in 1..=3 {
        let mut pos = position(SMALL);
        let expected = reference_negamax(&mut pos, &params, depth, 1);
        let mut ctx = SearchContext::new(&mut pos, &params);
        let score = ctx
            .negamax(depth, -SCORE_INFINITY, SCORE_INFINITY, 1)
            .unwrap();
        assert_eq!(score, expected, "depth {depth}");
    }
}

#[test]
fn test_depth_one_picks_best_evaluation() {
    let params = SearchParams::default().with_depth(1);
    let mut pos = position(SMALL);
    let mut best = -SCORE_INFINITY;
    for mv in defender_moves(&mut pos, &params).unwrap() {
        pos.apply_move(&mv, MoveOptions::SIMULATED).unwrap();
        best = best.max(evaluate(&mut pos, &params).unwrap());
        pos.undo_last_move(UndoOptions::SIMULATED).unwrap();
    }
    let result = calculate(&mut pos, &params, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(result.score, best);
}

#[test]
fn test_colors_are_symmetric() {
    let mut black = position("b k0,0|R5,3|K9,9");
    let mut white = position("w K0,0|r5,3|k9,9");
    let black_params = SearchParams::default();
    let white_params = SearchParams::default().with_defender(Color::White);

    let a = calculate(&mut black, &black_params, &mut StdRng::seed_from_u64(3)).unwrap();
    let b = calculate(&mut white, &white_params, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(a.score, b.score);
    assert_eq!(a.best_move.end, b.best_move.end);
    assert_eq!(a.nodes, b.nodes);
}

#[test]
fn test_lost_position_still_returns_legal_move() {
    // Any king step lets the rook mate along the file.
    let params = SearchParams::default();
    let mut pos = position("b k0,0|R1,-100|R-1,-100|R5,50|K25,25");
    let legal = defender_moves(&mut pos, &params).unwrap();
    assert_eq!(legal.len(), 2);

    for seed in 0..4 {
        let result = calculate(&mut pos, &params, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(result.score, -SCORE_INFINITY);
        assert!(legal.contains(&result.best_move));
    }
}

#[test]
fn test_choose_move_leaves_position_untouched() {
    let mut pos = position(SMALL);
    let before = pos.clone();
    let mv = choose_move(&mut pos, 2).unwrap();
    assert_eq!(mv.start, c(0, 0));
    assert_eq!(pos.board(), before.board());
    assert_eq!(pos.hash(), before.hash());
    assert_eq!(pos.turn(), before.turn());
    assert_eq!(pos.move_count(), 0);
    assert_eq!(pos.game_conclusion(), before.game_conclusion());

    pos.play_move(mv.start, mv.end, None).unwrap();
}

#[test]
fn test_search_errors() {
    let mut rng = StdRng::seed_from_u64(0);
    let params = SearchParams::default();

    let mut no_royal = position("b K0,0|R5,5|n3,3");
    assert_eq!(
        calculate(&mut no_royal, &params, &mut rng).map(|r| r.best_move),
        Err(SearchError::NoDefender {
            color: Color::Black
        })
    );

    let mut stalemated = position("b R1,20|R-1,20|R20,1|R20,-1|k0,0");
    assert_eq!(
        calculate(&mut stalemated, &params, &mut rng).map(|r| r.best_move),
        Err(SearchError::NoLegalMoves)
    );
}
