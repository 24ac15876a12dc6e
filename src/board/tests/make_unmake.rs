//! Apply/undo tests.

use rand::prelude::*;

use super::{c, position, sample_moves};
use crate::board::{
    Color, Conclusion, Move, MoveError, MoveOptions, PieceKind, PieceType, Position, UndoOptions,
};

#[test]
fn test_apply_undo_restores_everything() {
    let mut pos = position("w K4,0+|R0,0+|R7,0+|P1,1+|Q3,3|k4,7+|r0,7+|p2,6+|n5,5");
    let before = pos.clone();
    for mv in sample_moves(&mut pos) {
        pos.apply_move(&mv, MoveOptions::default()).unwrap();
        pos.undo_last_move(UndoOptions::default()).unwrap();
        assert_eq!(pos.board(), before.board(), "board after {mv}");
        assert_eq!(pos.hash(), before.hash(), "hash after {mv}");
        assert_eq!(pos.special_rights(), before.special_rights());
        assert_eq!(pos.en_passant(), before.en_passant());
        assert_eq!(pos.turn(), before.turn());
        assert_eq!(pos.game_conclusion(), before.game_conclusion());
    }
}

#[test]
fn test_incremental_hash_matches_recomputed() {
    let mut pos = position("w K4,0+|R0,0+|R7,0+|P1,1+|k4,7|p2,6+");
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..12 {
        let moves = sample_moves(&mut pos);
        let Some(mv) = moves.choose(&mut rng).copied() else {
            break;
        };
        pos.apply_move(&mv, MoveOptions::default()).unwrap();
        assert_eq!(pos.hash(), pos.calculate_hash());
        pos.validate().unwrap();
    }
    pos.undo_all(UndoOptions::default()).unwrap();
    assert_eq!(pos.move_count(), 0);
    assert_eq!(pos.hash(), pos.calculate_hash());
}

#[test]
fn test_capture_and_undo() {
    let mut pos = position("w R0,0|n0,9|K50,50|k-50,-50");
    let mv = pos.play_move(c(0, 0), c(0, 9), None).unwrap();
    assert_eq!(pos.halfmove_clock(), 0);
    let (_, info) = pos.history.last().unwrap();
    assert_eq!(info.captured().unwrap().coords, c(0, 9));

    assert_eq!(pos.undo_last_move(UndoOptions::default()), Ok(mv));
    assert_eq!(
        pos.piece_at(c(0, 9)).unwrap().piece_type,
        PieceType::new(PieceKind::Knight, Color::Black)
    );
}

#[test]
fn test_halfmove_clock() {
    let mut pos = position("w R0,0|P5,1|K50,50|k-50,-50");
    pos.play_move(c(0, 0), c(0, 3), None).unwrap();
    assert_eq!(pos.halfmove_clock(), 1);
    pos.play_move(c(-50, -50), c(-49, -49), None).unwrap();
    assert_eq!(pos.halfmove_clock(), 2);
    pos.play_move(c(5, 1), c(5, 2), None).unwrap();
    assert_eq!(pos.halfmove_clock(), 0);
}

#[test]
fn test_undo_without_history() {
    let mut pos = Position::default();
    assert_eq!(
        pos.undo_last_move(UndoOptions::default()),
        Err(MoveError::NothingToUndo)
    );
}

#[test]
fn test_missing_start_piece() {
    let mut pos = Position::default();
    let mv = Move::new(
        PieceType::new(PieceKind::Rook, Color::White),
        c(0, 0),
        c(0, 1),
    );
    assert_eq!(
        pos.apply_move(&mv, MoveOptions::default()),
        Err(MoveError::NoPieceAtStart { coords: c(0, 0) })
    );
}

#[test]
fn test_simulated_move_leaves_cached_conclusion() {
    let mut pos = position("w R20,1|R20,-1|R-20,5|K50,50|k0,0");
    let mv = pos.play_move(c(-20, 5), c(-20, 0), None).unwrap();
    assert_eq!(pos.game_conclusion().winner(), Some(Color::White));

    pos.undo_last_move(UndoOptions::default()).unwrap();
    assert_eq!(pos.game_conclusion(), Conclusion::Undetermined);

    pos.apply_move(&mv, MoveOptions::SIMULATED).unwrap();
    assert_eq!(pos.game_conclusion(), Conclusion::Undetermined);
    assert!(pos.conclusion().is_over());
    pos.undo_last_move(UndoOptions::SIMULATED).unwrap();
    assert_eq!(pos.game_conclusion(), Conclusion::Undetermined);
}
