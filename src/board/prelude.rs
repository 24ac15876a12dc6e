//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use infinite_engine::board::prelude::*;
//!
//! let position = PositionBuilder::new()
//!     .piece(Coordinate::new(0, 0), PieceKind::King, Color::Black)
//!     .build();
//! assert_eq!(position.turn(), Color::White);
//! ```

pub use super::{
    choose_move, Color, Conclusion, ConfigurationError, Coordinate, GameRules, Move, MoveError,
    MoveOptions, NotationError, Piece, PieceKind, PieceType, Position, PositionBuilder,
    SearchError, SearchParams, UndoOptions,
};
