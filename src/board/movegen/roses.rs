use super::super::state::Position;
use super::super::types::{Destination, Piece};

/// Knight offsets in wheel order; consecutive spokes turn by one knight
/// step around the circle.
const ROSE_WHEEL: [(i64, i64); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

/// Steps per walk. Eight would close the circle.
const ROSE_STEPS: usize = 7;

impl Position {
    /// Rose destinations: from every spoke, walk the wheel clockwise and
    /// anticlockwise until a piece stops the walk.
    pub(crate) fn rose_destinations(&self, rose: &Piece) -> Vec<Destination> {
        let color = rose.color();
        let mut dests: Vec<Destination> = Vec::new();

        for first_spoke in 0..ROSE_WHEEL.len() {
            for rotation in [1usize, ROSE_WHEEL.len() - 1] {
                let mut square = rose.coords;
                let mut spoke = first_spoke;
                for _ in 0..ROSE_STEPS {
                    let (dx, dy) = ROSE_WHEEL[spoke];
                    let Some(next) = square.offset(dx, dy) else {
                        break;
                    };
                    square = next;
                    let occupant = self.board.get(square);
                    let capturable = occupant.map_or(true, |pt| pt.color != color && !pt.is_void());
                    // Linear scan; fine at 8 spokes x 7 steps, not for bigger wheels.
                    if capturable && !dests.iter().any(|dest| dest.coords == square) {
                        dests.push(Destination::plain(square));
                    }
                    if occupant.is_some() {
                        break;
                    }
                    spoke = (spoke + rotation) % ROSE_WHEEL.len();
                }
            }
        }
        dests
    }
}
