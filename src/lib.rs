pub mod board;

pub use board::{Color, Coordinate, Move, Piece, PieceKind, Position};
