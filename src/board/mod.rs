//! Unbounded-board chess rules and the lone-royal opponent.
//!
//! Squares are unbounded integer coordinates, so nothing here enumerates
//! the board. Pieces are kept in a coordinate map plus a line index that
//! groups them by line, which is what slide generation and the search's
//! candidate squares are computed from.
//!
//! # Example
//! ```
//! use infinite_engine::board::{choose_move, Position};
//!
//! let mut position = Position::from_notation("b k0,0|Q3,5|K9,9").unwrap();
//! let reply = choose_move(&mut position, 1).unwrap();
//! assert_eq!(reply.start.x, 0);
//! ```

mod attacks;
mod builder;
mod conclusion;
mod debug;
mod error;
mod history;
mod lines;
mod make_unmake;
mod movegen;
mod movesets;
mod notation;
pub mod prelude;
mod rules;
pub mod search;
mod state;
mod types;
mod zobrist;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use conclusion::{Conclusion, DrawKind};
pub use error::{ConfigurationError, MoveError, NotationError, SearchError};
pub use rules::{GameRules, PromotionRule, SlideLimit, WinCondition, WinConditions};
pub use state::{Board, Position};
pub use types::{
    line_intersection, transfer_special_between, transfer_special_to_destination,
    transfer_special_to_move, Color, Coordinate, Destination, Direction, Move, Piece, PieceKind,
    PieceType, Special, SpecialRights, Specials,
};

// Move generation and mutation
pub use lines::{split_line, LineIndex};
pub use make_unmake::{MoveOptions, UndoOptions};
pub use movegen::{LegalMoves, StepBounds};
pub use movesets::{
    is_prime, movesets_for, Blocking, BlockingPolicy, IgnorePolicy, Movesets, PieceMoveset,
    SlideRange,
};

// Public API - search functions and configuration
pub use search::{
    calculate, candidate_moves, choose_move, get_intersections, SearchParams, SearchResult,
};

// Journal entries, exposed for callers inspecting history (not in prelude)
pub use state::UnmakeInfo;
