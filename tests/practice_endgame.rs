use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;

use infinite_engine::board::search::{
    calculate, candidate_moves, defender_moves, SearchParams, SCORE_INFINITY,
};
use infinite_engine::board::{Coordinate, Position, SearchError};

#[derive(Deserialize)]
struct EndgameSet {
    positions: Vec<Endgame>,
}

#[derive(Deserialize)]
struct Endgame {
    name: String,
    position: String,
    depth: u32,
    #[serde(default)]
    best: Option<[i64; 2]>,
    #[serde(default)]
    lost: bool,
    #[serde(default)]
    error: Option<String>,
}

fn error_name(err: &SearchError) -> &'static str {
    match err {
        SearchError::NoDefender { .. } => "no defender",
        SearchError::NoLegalMoves => "no legal moves",
        SearchError::Board(_) => "board",
    }
}

#[test]
fn endgame_suite() {
    let data = include_str!("data/endgames.json");
    let set: EndgameSet = serde_json::from_str(data).expect("parse endgames.json");

    for case in set.positions {
        let mut position = Position::from_notation(&case.position)
            .unwrap_or_else(|err| panic!("{}: {err}", case.name));
        let params = SearchParams::default().with_depth(case.depth);
        let mut rng = StdRng::seed_from_u64(11);
        let result = calculate(&mut position, &params, &mut rng);

        if let Some(expected) = &case.error {
            let err = result.expect_err(&case.name);
            assert_eq!(error_name(&err), expected, "{}", case.name);
            continue;
        }

        let result = result.unwrap_or_else(|err| panic!("{}: {err}", case.name));
        let legal = defender_moves(&mut position, &params).unwrap();
        assert!(legal.contains(&result.best_move), "{}", case.name);
        if let Some([x, y]) = case.best {
            assert_eq!(result.best_move.end, Coordinate::new(x, y), "{}", case.name);
        }
        if case.lost {
            assert_eq!(result.score, -SCORE_INFINITY, "{}", case.name);
        }
        assert_eq!(position.move_count(), 0, "{}: search left moves behind", case.name);
        position
            .play_move(result.best_move.start, result.best_move.end, None)
            .unwrap_or_else(|err| panic!("{}: {err}", case.name));
    }
}

#[test]
fn engine_survives_random_attacker() {
    let mut position = Position::from_notation("b k0,0|Q5,3|R-4,6|K9,9").unwrap();
    let params = SearchParams::default().with_depth(2);
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..5 {
        if position.game_conclusion().is_over() {
            break;
        }
        let reply = calculate(&mut position, &params, &mut rng).unwrap();
        position
            .play_move(reply.best_move.start, reply.best_move.end, None)
            .unwrap();
        position.validate().unwrap();

        if position.game_conclusion().is_over() {
            break;
        }
        let attacker_moves = candidate_moves(&mut position);
        let mv = *attacker_moves.choose(&mut rng).expect("attacker has a move");
        position.play_move(mv.start, mv.end, None).unwrap();
        position.validate().unwrap();
    }
    assert!(position.move_count() >= 2);
}
