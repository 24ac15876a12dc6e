use super::super::lines::split_line;
use super::super::movesets::{Blocking, BlockingPolicy, SlideRange};
use super::super::state::Position;
use super::super::types::{Coordinate, Direction, Piece};
use super::StepBounds;

impl StepBounds {
    /// The window a slide range allows on an empty board.
    #[must_use]
    pub fn from_range(range: &SlideRange) -> Self {
        let max = (range.max != f64::INFINITY).then(|| range.max.floor() as i64);
        let min = (range.min != f64::NEG_INFINITY).then(|| range.min.ceil() as i64);
        StepBounds { min, max }
    }

    fn clamp_forward(mut self, limit: Option<i64>) -> Self {
        if let Some(limit) = limit {
            self.max = Some(self.max.map_or(limit, |max| max.min(limit)));
        }
        self
    }

    fn clamp_backward(mut self, limit: Option<i64>) -> Self {
        if let Some(limit) = limit {
            let lowest = limit.saturating_neg();
            self.min = Some(self.min.map_or(lowest, |min| min.max(lowest)));
        }
        self
    }
}

impl Position {
    /// Step window for `piece` sliding along `dir`, bounded by `range` and
    /// by the nearest blocker on each side of the line.
    pub(crate) fn slide_bounds(
        &self,
        piece: &Piece,
        dir: Direction,
        range: &SlideRange,
        blocking: BlockingPolicy,
    ) -> StepBounds {
        let line = self.board.colinear(dir, piece.coords);
        let (behind, ahead) = split_line(&line, dir, piece.coords);
        let forward = self.blocker_limit(piece, dir, ahead.iter(), blocking);
        let backward = self.blocker_limit(piece, dir, behind.iter().rev(), blocking);
        StepBounds::from_range(range)
            .clamp_forward(forward)
            .clamp_backward(backward)
    }

    /// Steps to the last reachable square before the first piece that
    /// blocks, walking `squares` outward from `piece`.
    fn blocker_limit<'a>(
        &self,
        piece: &Piece,
        dir: Direction,
        squares: impl Iterator<Item = &'a Coordinate>,
        blocking: BlockingPolicy,
    ) -> Option<i64> {
        for &square in squares {
            let Some(blocker) = self.board.get(square) else {
                continue;
            };
            let Some(steps) = dir.steps_between(piece.coords, square) else {
                continue;
            };
            let distance = steps.unsigned_abs();
            let reach = i64::try_from(distance).unwrap_or(i64::MAX);
            match blocking.resolve(piece.color(), blocker, distance) {
                Blocking::PassThrough => continue,
                Blocking::StopBefore => return Some(reach - 1),
                Blocking::StopAfter => return Some(reach),
            }
        }
        None
    }
}
