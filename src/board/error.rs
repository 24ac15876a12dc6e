//! Error types for board configuration, mutation and search.

use std::fmt;

use super::types::{Color, Coordinate};

/// Error type for invalid game rule input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Slide limit is not a number (NaN or unparsable text)
    SlideLimitNotNumeric { found: String },
    /// Stacked promotion layout with a non-positive board spacing
    InvalidPromotionSpacing { spacing: i64 },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::SlideLimitNotNumeric { found } => {
                write!(f, "Slide limit must be a number, found '{found}'")
            }
            ConfigurationError::InvalidPromotionSpacing { spacing } => {
                write!(f, "Promotion board spacing must be positive, found {spacing}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Error type for applying and undoing moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the move's start square
    NoPieceAtStart { coords: Coordinate },
    /// The piece on the start square cannot reach the destination
    IllegalMove { start: Coordinate, end: Coordinate },
    /// The move describes an impossible board state; it was not applied
    InvariantViolation { detail: String },
    /// Undo was requested with an empty move journal
    NothingToUndo,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAtStart { coords } => {
                write!(f, "No piece at start square {coords}")
            }
            MoveError::IllegalMove { start, end } => {
                write!(f, "Illegal move {start}>{end}")
            }
            MoveError::InvariantViolation { detail } => {
                write!(f, "Board invariant violated: {detail}")
            }
            MoveError::NothingToUndo => write!(f, "No move to undo"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for compact position notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Empty notation string
    Empty,
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Unknown piece code
    InvalidPiece { token: String },
    /// Coordinates that are not two comma-separated integers
    InvalidCoordinate { token: String },
    /// Two pieces placed on the same square
    DuplicateSquare { coords: Coordinate },
    /// Unknown trailing token
    UnexpectedToken { token: String },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "Empty position notation"),
            NotationError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            NotationError::InvalidPiece { token } => {
                write!(f, "Invalid piece code in '{token}'")
            }
            NotationError::InvalidCoordinate { token } => {
                write!(f, "Invalid coordinates in '{token}'")
            }
            NotationError::DuplicateSquare { coords } => {
                write!(f, "Square {coords} is occupied twice")
            }
            NotationError::UnexpectedToken { token } => {
                write!(f, "Unexpected token '{token}'")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for the automated opponent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The side to move has no royal piece to defend with
    NoDefender { color: Color },
    /// The defending royal has no legal move
    NoLegalMoves,
    /// A move failed to apply or undo; the board may be inconsistent
    Board(MoveError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoDefender { color } => {
                write!(f, "No royal piece found for {color}")
            }
            SearchError::NoLegalMoves => write!(f, "Defending royal has no legal move"),
            SearchError::Board(err) => write!(f, "Board error during search: {err}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for SearchError {
    fn from(err: MoveError) -> Self {
        SearchError::Board(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_configuration_error_slide_limit() {
        let err = ConfigurationError::SlideLimitNotNumeric {
            found: "lots".to_string(),
        };
        assert!(err.to_string().contains("'lots'"));
    }

    #[test]
    fn test_configuration_error_spacing() {
        let err = ConfigurationError::InvalidPromotionSpacing { spacing: -3 };
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_move_error_no_piece() {
        let err = MoveError::NoPieceAtStart {
            coords: Coordinate::new(4, -9),
        };
        assert!(err.to_string().contains("4,-9"));
    }

    #[test]
    fn test_move_error_illegal() {
        let err = MoveError::IllegalMove {
            start: Coordinate::new(1, 1),
            end: Coordinate::new(1, 9),
        };
        assert!(err.to_string().contains("1,1>1,9"));
    }

    #[test]
    fn test_move_error_invariant() {
        let err = MoveError::InvariantViolation {
            detail: "en passant onto 5,5".to_string(),
        };
        assert!(err.to_string().contains("en passant onto 5,5"));
    }

    #[test]
    fn test_notation_error_side() {
        let err = NotationError::InvalidSideToMove {
            found: "x".to_string(),
        };
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_notation_error_duplicate() {
        let err = NotationError::DuplicateSquare {
            coords: Coordinate::new(0, 0),
        };
        assert!(err.to_string().contains("0,0"));
    }

    #[test]
    fn test_search_error_wraps_move_error() {
        let err: SearchError = MoveError::NothingToUndo.into();
        assert_eq!(err, SearchError::Board(MoveError::NothingToUndo));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("No move to undo"));
    }

    #[test]
    fn test_search_error_no_defender() {
        let err = SearchError::NoDefender {
            color: Color::Black,
        };
        assert!(err.to_string().contains("black"));
        assert!(err.source().is_none());
    }
}
