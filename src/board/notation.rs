//! Compact position notation.
//!
//! `<turn> <pieces> [ep=<x>,<y>]`, for example `w K5,1+|r1,8+|vo0,0 ep=3,6`.
//! Pieces are separated by `|`; each is a code (uppercase for white,
//! lowercase for black, `vo` for voids), the square, and a trailing `+` when
//! it holds its special right. An empty board is written `-`.

use std::collections::HashSet;

use super::builder::PositionBuilder;
use super::error::NotationError;
use super::state::Position;
use super::types::{Color, Coordinate, PieceKind, PieceType};

fn parse_coordinate(text: &str) -> Option<Coordinate> {
    let (x, y) = text.split_once(',')?;
    Some(Coordinate::new(x.parse().ok()?, y.parse().ok()?))
}

fn parse_piece(token: &str) -> Result<(Coordinate, PieceType, bool), NotationError> {
    let (body, special) = match token.strip_suffix('+') {
        Some(body) => (body, true),
        None => (token, false),
    };
    let split = body
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(body.len());
    let (code, square) = body.split_at(split);
    let invalid_piece = || NotationError::InvalidPiece {
        token: token.to_string(),
    };

    let kind = PieceKind::from_code(code).ok_or_else(invalid_piece)?;
    let color = if kind == PieceKind::Void {
        Color::Neutral
    } else if code.chars().all(|c| c.is_ascii_uppercase()) {
        Color::White
    } else if code.chars().all(|c| c.is_ascii_lowercase()) {
        Color::Black
    } else {
        return Err(invalid_piece());
    };
    let coords = parse_coordinate(square).ok_or_else(|| NotationError::InvalidCoordinate {
        token: token.to_string(),
    })?;
    Ok((coords, PieceType::new(kind, color), special))
}

impl PositionBuilder {
    /// A builder holding the position written in `text`.
    pub fn from_notation(text: &str) -> Result<Self, NotationError> {
        let mut tokens = text.split_whitespace();
        let turn = tokens.next().ok_or(NotationError::Empty)?;
        let side = match turn {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(NotationError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        let mut builder = PositionBuilder::new().side_to_move(side);

        if let Some(pieces) = tokens.next().filter(|field| *field != "-") {
            let mut seen = HashSet::new();
            for token in pieces.split('|') {
                let (coords, piece_type, special) = parse_piece(token)?;
                if !seen.insert(coords) {
                    return Err(NotationError::DuplicateSquare { coords });
                }
                builder = builder.piece(coords, piece_type.kind, piece_type.color);
                if special {
                    builder = builder.special_right(coords);
                }
            }
        }

        for token in tokens {
            let target = token.strip_prefix("ep=").and_then(parse_coordinate);
            match target {
                Some(target) => builder = builder.en_passant(target),
                None if token.starts_with("ep=") => {
                    return Err(NotationError::InvalidCoordinate {
                        token: token.to_string(),
                    })
                }
                None => {
                    return Err(NotationError::UnexpectedToken {
                        token: token.to_string(),
                    })
                }
            }
        }
        Ok(builder)
    }
}

impl Position {
    /// Parse a position under the default rules.
    pub fn from_notation(text: &str) -> Result<Self, NotationError> {
        Ok(PositionBuilder::from_notation(text)?.build())
    }

    #[must_use]
    pub fn to_notation(&self) -> String {
        let turn = if self.turn == Color::White { "w" } else { "b" };
        let pieces: Vec<String> = self
            .board
            .pieces()
            .map(|piece| {
                let right = if self.special_rights.has(piece.coords) { "+" } else { "" };
                format!("{}{}{right}", piece.piece_type.code(), piece.coords)
            })
            .collect();
        let mut text = if pieces.is_empty() {
            format!("{turn} -")
        } else {
            format!("{turn} {}", pieces.join("|"))
        };
        if let Some(ep) = self.en_passant {
            text.push_str(&format!(" ep={ep}"));
        }
        text
    }
}
