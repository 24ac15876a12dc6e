use super::error::MoveError;
use super::lines::LineIndex;
use super::state::{Board, Position};

fn violation(detail: String) -> MoveError {
    MoveError::InvariantViolation { detail }
}

impl Board {
    /// Rebuild the line index from the piece map and compare.
    pub fn validate_index(&self) -> Result<(), MoveError> {
        let mut rebuilt = LineIndex::new();
        for &coords in self.pieces.keys() {
            rebuilt.add(coords);
        }
        if rebuilt != self.lines {
            return Err(violation(format!(
                "line index has {} lines, piece map implies {}",
                self.lines.len(),
                rebuilt.len()
            )));
        }
        for ((dir, key), line) in self.lines.iter() {
            if line.iter().any(|c| dir.line_key(*c) != *key) {
                return Err(violation(format!("line {dir} holds a square off the line")));
            }
        }
        Ok(())
    }
}

impl Position {
    /// Check the board index, special rights, en passant target and hash
    /// against each other.
    pub fn validate(&self) -> Result<(), MoveError> {
        self.board.validate_index()?;
        if let Some(coords) = self.special_rights.iter().find(|c| !self.board.is_occupied(*c)) {
            return Err(violation(format!("special right on empty square {coords}")));
        }
        if let Some(ep) = self.en_passant {
            if self.board.is_occupied(ep) {
                return Err(violation(format!("en passant target {ep} is occupied")));
            }
        }
        let expected = self.calculate_hash();
        if expected != self.hash {
            return Err(violation(format!(
                "hash {:#018x} does not match recomputed {expected:#018x}",
                self.hash
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::{Color, Coordinate, PieceKind, PieceType};

    #[test]
    fn test_detects_stale_index() {
        let mut board = Board::new();
        board.place(
            Coordinate::new(1, 1),
            PieceType::new(PieceKind::Rook, Color::White),
        );
        assert!(board.validate_index().is_ok());
        board.pieces.remove(&Coordinate::new(1, 1));
        assert!(board.validate_index().is_err());
    }

    #[test]
    fn test_detects_stale_hash() {
        let mut position = Position::default();
        assert!(position.validate().is_ok());
        position.hash ^= 1;
        assert!(position.validate().is_err());
    }
}
