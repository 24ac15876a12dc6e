//! Lone-royal evaluation.

use crate::board::error::SearchError;
use crate::board::state::Position;
use crate::board::types::Piece;

use super::params::{Score, SearchParams};

const NEIGHBOURS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Score the position for the defender in `params`.
///
/// Mobility and attackers pressed against the royal count for it, every
/// attacker counts heavily against it, and weighted attackers add their
/// distance from it. With more than one boxer on the board every boxer
/// uses the boxer weight instead of its own.
pub fn evaluate(position: &mut Position, params: &SearchParams) -> Result<Score, SearchError> {
    let defender = params.defender;
    let royal = position
        .royals_of(defender)
        .first()
        .copied()
        .ok_or(SearchError::NoDefender { color: defender })?;
    let attacker = defender.opponent();

    let mut score: Score = 0;
    if let Some(legal) = position.calculate(royal) {
        score = score.saturating_add(legal.individual.len() as Score);
    }

    for (dx, dy) in NEIGHBOURS {
        let pressed = royal
            .offset(dx, dy)
            .and_then(|square| position.piece_at(square))
            .is_some_and(|piece| piece.color() == attacker);
        if pressed {
            score = score.saturating_add(1);
        }
    }

    let attackers: Vec<Piece> = position
        .board()
        .pieces_of(attacker)
        .filter(|piece| !piece.piece_type.is_void())
        .collect();
    let material = (attackers.len() as Score).saturating_mul(params.material_penalty);
    score = score.saturating_sub(material);

    let boxers = attackers
        .iter()
        .filter(|piece| params.is_boxer(piece.kind()))
        .count();
    for piece in &attackers {
        let weight = if boxers > 1 && params.is_boxer(piece.kind()) {
            Some(params.boxer_weight)
        } else {
            params.weight_for(piece.kind())
        };
        if let Some(weight) = weight {
            score = score.saturating_add(weight.score(piece.coords, royal));
        }
    }
    Ok(score)
}
