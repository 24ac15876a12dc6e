//! Zobrist hashing for positions on an unbounded board.
//!
//! The board has no square table to key, so each square key is derived by
//! mixing a per-feature random key with the square's coordinates.

use once_cell::sync::Lazy;
use rand::prelude::*;

use super::types::{Coordinate, PieceType};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type slot]
    pub(crate) piece_keys: [u64; PieceType::SLOTS],
    pub(crate) black_to_move_key: u64,
    pub(crate) special_right_key: u64,
    pub(crate) en_passant_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut piece_keys = [0; PieceType::SLOTS];
        for key in &mut piece_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key: rng.gen(),
            special_right_key: rng.gen(),
            en_passant_key: rng.gen(),
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
fn square_mix(feature_key: u64, coords: Coordinate) -> u64 {
    // Casts reinterpret the bits; negative coordinates stay distinct.
    let y_mix = splitmix64(coords.y as u64);
    splitmix64(feature_key ^ splitmix64((coords.x as u64) ^ y_mix.rotate_left(17)))
}

#[inline]
pub(crate) fn piece_key(piece_type: PieceType, coords: Coordinate) -> u64 {
    square_mix(ZOBRIST.piece_keys[piece_type.index()], coords)
}

#[inline]
pub(crate) fn special_right_key(coords: Coordinate) -> u64 {
    square_mix(ZOBRIST.special_right_key, coords)
}

#[inline]
pub(crate) fn en_passant_key(coords: Coordinate) -> u64 {
    square_mix(ZOBRIST.en_passant_key, coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::{Color, PieceKind};

    #[test]
    fn test_keys_distinguish_squares_and_types() {
        let rook = PieceType::new(PieceKind::Rook, Color::White);
        let black_rook = PieceType::new(PieceKind::Rook, Color::Black);
        let a = Coordinate::new(1, 2);
        let b = Coordinate::new(2, 1);
        assert_ne!(piece_key(rook, a), piece_key(rook, b));
        assert_ne!(piece_key(rook, a), piece_key(black_rook, a));
        assert_ne!(special_right_key(a), en_passant_key(a));
        assert_eq!(piece_key(rook, a), piece_key(rook, Coordinate::new(1, 2)));
    }
}
