//! Core board types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Coordinate` and `Direction` - unbounded squares and line families
//! - `PieceKind`, `Color`, `PieceType`, `Piece` - the piece catalog
//! - `Move`, `Destination`, `Special`, `Specials` - move representation
//! - `SpecialRights` - first-move rights

mod coord;
mod moves;
mod piece;
mod rights;

pub use coord::{line_intersection, Coordinate, Direction};
pub use moves::{
    transfer_special_between, transfer_special_to_destination, transfer_special_to_move,
    Destination, Move, Special, Specials,
};
pub use piece::{Color, Piece, PieceKind, PieceType};
pub use rights::SpecialRights;
