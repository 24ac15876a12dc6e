//! Move generation tests: jumps, slides, blockers and the legality layer.

use super::{c, position};
use crate::board::{
    Color, Direction, GameRules, MoveError, PieceKind, PositionBuilder, SlideLimit, StepBounds,
    WinCondition, WinConditions,
};

#[test]
fn test_legal_moves_deterministic() {
    let mut pos = position("w Q0,0|n3,3|R0,-7|K40,1|k-40,-1");
    let queen = pos.piece_at(c(0, 0)).unwrap();
    let first = pos.legal_moves(&queen);
    let second = pos.legal_moves(&queen);
    assert_eq!(first, second);
    assert_eq!(pos.calculate(c(0, 0)), pos.calculate(c(0, 0)));
}

#[test]
fn test_rook_bounds_from_blockers() {
    let mut pos = position("w R0,0|p0,5|N-3,0");
    let legal = pos.calculate(c(0, 0)).unwrap();
    assert!(legal.individual.is_empty());
    assert_eq!(
        legal.sliding[&Direction::VERTICAL],
        StepBounds {
            min: None,
            max: Some(5)
        }
    );
    assert_eq!(
        legal.sliding[&Direction::HORIZONTAL],
        StepBounds {
            min: Some(-2),
            max: None
        }
    );

    assert!(pos.check_if_move_legal(&legal, c(0, 0), c(0, 5)).is_some());
    assert!(pos.check_if_move_legal(&legal, c(0, 0), c(0, 6)).is_none());
    assert!(pos
        .check_if_move_legal(&legal, c(0, 0), c(0, -1_000_000_000))
        .is_some());
    assert!(pos.check_if_move_legal(&legal, c(0, 0), c(-3, 0)).is_none());
    assert!(pos.check_if_move_legal(&legal, c(0, 0), c(-2, 0)).is_some());
    assert!(pos.check_if_move_legal(&legal, c(0, 0), c(1, 1)).is_none());
}

#[test]
fn test_slide_limit_rule() {
    let rules = GameRules::default().with_slide_limit(SlideLimit::new(3.0).unwrap());
    let mut pos = PositionBuilder::new()
        .piece(c(0, 0), PieceKind::Rook, Color::White)
        .rules(rules)
        .unwrap()
        .build();
    let legal = pos.calculate(c(0, 0)).unwrap();
    assert_eq!(
        legal.sliding[&Direction::VERTICAL],
        StepBounds {
            min: Some(-3),
            max: Some(3)
        }
    );
    assert!(pos.check_if_move_legal(&legal, c(0, 0), c(0, -3)).is_some());
    assert!(pos.check_if_move_legal(&legal, c(0, 0), c(0, 4)).is_none());
}

#[test]
fn test_knight_skips_friendly_square() {
    let mut pos = position("w N0,0|B1,2|b2,1");
    let legal = pos.calculate(c(0, 0)).unwrap();
    assert_eq!(legal.individual.len(), 7);
    assert!(legal.individual.iter().all(|d| d.coords != c(1, 2)));
    assert!(legal.individual.iter().any(|d| d.coords == c(2, 1)));
}

#[test]
fn test_void_blocks_and_cannot_be_captured() {
    let mut pos = position("w R0,0|vo0,3");
    let legal = pos.calculate(c(0, 0)).unwrap();
    assert_eq!(legal.sliding[&Direction::VERTICAL].max, Some(2));
    assert!(pos.check_if_move_legal(&legal, c(0, 0), c(0, 3)).is_none());
    assert!(pos.calculate(c(0, 3)).unwrap().is_empty());
}

#[test]
fn test_huygen_prime_distances() {
    let mut pos = position("w HU0,0|p0,4|p0,5");
    let legal = pos.calculate(c(0, 0)).unwrap();
    assert_eq!(legal.sliding[&Direction::VERTICAL].max, Some(5));
    for (y, expected) in [(1, false), (2, true), (3, true), (4, false), (5, true), (7, false)] {
        assert_eq!(
            pos.check_if_move_legal(&legal, c(0, 0), c(0, y)).is_some(),
            expected,
            "huygen to 0,{y}"
        );
    }
    assert!(pos.check_if_move_legal(&legal, c(0, 0), c(-7, 0)).is_some());
    assert!(pos.check_if_move_legal(&legal, c(0, 0), c(-9, 0)).is_none());
}

#[test]
fn test_pinned_rook_stays_on_line() {
    let mut pos = position("w K0,0|R0,1|r0,8|k9,9");
    let legal = pos.calculate(c(0, 1)).unwrap();
    assert!(pos.check_if_move_legal(&legal, c(0, 1), c(5, 1)).is_none());
    assert!(pos.check_if_move_legal(&legal, c(0, 1), c(0, 4)).is_some());
    assert!(pos.check_if_move_legal(&legal, c(0, 1), c(0, 8)).is_some());
}

#[test]
fn test_king_avoids_attacked_squares() {
    let mut pos = position("w K0,0|r5,1|k9,9");
    let legal = pos.calculate(c(0, 0)).unwrap();
    assert_eq!(legal.individual.len(), 5);
    assert!(legal.individual.iter().all(|d| d.coords.y != 1));
}

#[test]
fn test_royal_queen_avoids_attack_without_checkmate_rule() {
    let rules = GameRules::default()
        .with_win_conditions(WinConditions::both(&[WinCondition::RoyalCapture]));
    let mut pos = PositionBuilder::from_notation("w RQ0,0|r5,3|k9,9")
        .unwrap()
        .rules(rules)
        .unwrap()
        .build();
    let legal = pos.calculate(c(0, 0)).unwrap();
    assert!(pos.check_if_move_legal(&legal, c(0, 0), c(0, 3)).is_none());
    assert!(pos.check_if_move_legal(&legal, c(0, 0), c(0, 2)).is_some());
}

#[test]
fn test_play_move_checks_turn_and_legality() {
    let mut pos = position("w K0,0|R3,3|k9,9");
    assert_eq!(
        pos.play_move(c(9, 9), c(8, 8), None),
        Err(MoveError::IllegalMove {
            start: c(9, 9),
            end: c(8, 8)
        })
    );
    assert_eq!(
        pos.play_move(c(3, 3), c(4, 4), None),
        Err(MoveError::IllegalMove {
            start: c(3, 3),
            end: c(4, 4)
        })
    );
    assert_eq!(
        pos.play_move(c(1, 1), c(2, 2), None),
        Err(MoveError::NoPieceAtStart { coords: c(1, 1) })
    );

    let mv = pos.play_move(c(3, 3), c(3, 300), None).unwrap();
    assert_eq!(mv.end, c(3, 300));
    assert_eq!(pos.turn(), Color::Black);
    assert_eq!(pos.move_count(), 1);
}
