//! Finite candidate squares on the unbounded board.
//!
//! Every piece contributes its file, its rank and its two diagonals as
//! construction lines. The squares where a diagonal crosses another line
//! are where a slider can do something new, so the attacking side only
//! searches moves that land on them.

use std::collections::{BTreeMap, BTreeSet};

use crate::board::state::Position;
use crate::board::types::{transfer_special_to_move, Coordinate, Move, Piece};

/// A diagonal `y = slope * x + intercept` with `slope` of +1 or -1.
type Diagonal = (i128, i128);

/// Integral crossings of every piece diagonal with every other diagonal,
/// file and rank, deduplicated by coordinate key.
#[must_use]
pub fn get_intersections(position: &Position) -> Vec<Coordinate> {
    let mut files = BTreeSet::new();
    let mut ranks = BTreeSet::new();
    let mut diagonals: BTreeSet<Diagonal> = BTreeSet::new();
    for coords in position.board().pieces().map(|piece| piece.coords) {
        let (x, y) = (i128::from(coords.x), i128::from(coords.y));
        files.insert(x);
        ranks.insert(y);
        diagonals.insert((1, y - x));
        diagonals.insert((-1, y + x));
    }

    let mut found: BTreeMap<String, Coordinate> = BTreeMap::new();
    let mut add = |x: i128, y: i128| {
        if let (Ok(x), Ok(y)) = (i64::try_from(x), i64::try_from(y)) {
            let coords = Coordinate::new(x, y);
            found.entry(coords.key()).or_insert(coords);
        }
    };

    for &(slope, intercept) in &diagonals {
        for &y in &ranks {
            add((y - intercept) * slope, y);
        }
        for &x in &files {
            add(x, slope * x + intercept);
        }
        for &(other_slope, other_intercept) in &diagonals {
            if other_slope == slope {
                continue;
            }
            let numerator = other_intercept - intercept;
            let denominator = slope - other_slope;
            if numerator % denominator != 0 {
                continue;
            }
            let x = numerator / denominator;
            add(x, slope * x + intercept);
        }
    }
    found.into_values().collect()
}

/// Moves of the side to move that land on an intersection.
pub fn candidate_moves(position: &mut Position) -> Vec<Move> {
    let intersections = get_intersections(position);
    let pieces: Vec<Piece> = position.board().pieces_of(position.turn()).collect();

    let mut moves = Vec::new();
    for piece in pieces {
        let Some(legal) = position.calculate(piece.coords) else {
            continue;
        };
        for &square in &intersections {
            if square == piece.coords {
                continue;
            }
            if let Some(dest) = position.check_if_move_legal(&legal, piece.coords, square) {
                let mut mv = Move::new(piece.piece_type, piece.coords, square);
                transfer_special_to_move(&dest, &mut mv);
                moves.push(mv);
            }
        }
    }
    moves
}
