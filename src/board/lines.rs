//! Line-family index over occupied squares.
//!
//! Every occupied square is filed under one line per indexed direction. A
//! line is identified by `(direction, line_key)` and keeps its squares sorted
//! by their scalar position along the direction, so a slider finds its
//! nearest blockers with a binary search over the pieces on its own line.

use std::collections::HashMap;

use super::types::{Coordinate, Direction};

/// Squares grouped by line, each group sorted along its direction.
///
/// Empty groups are dropped, so two indexes over the same squares compare
/// equal regardless of the order in which squares were added and removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineIndex {
    lines: HashMap<(Direction, i128), Vec<Coordinate>>,
}

impl LineIndex {
    #[must_use]
    pub fn new() -> Self {
        LineIndex::default()
    }

    #[inline]
    #[must_use]
    pub fn is_indexed(dir: Direction) -> bool {
        Direction::INDEXED.contains(&dir)
    }

    pub fn add(&mut self, coords: Coordinate) {
        for dir in Direction::INDEXED {
            let line = self.lines.entry((dir, dir.line_key(coords))).or_default();
            let pos = dir.position_along(coords);
            if let Err(at) = line.binary_search_by_key(&pos, |c| dir.position_along(*c)) {
                line.insert(at, coords);
            }
        }
    }

    pub fn remove(&mut self, coords: Coordinate) {
        for dir in Direction::INDEXED {
            let key = (dir, dir.line_key(coords));
            let Some(line) = self.lines.get_mut(&key) else {
                continue;
            };
            let pos = dir.position_along(coords);
            if let Ok(at) = line.binary_search_by_key(&pos, |c| dir.position_along(*c)) {
                line.remove(at);
            }
            if line.is_empty() {
                self.lines.remove(&key);
            }
        }
    }

    /// The sorted squares on the line through `coords` along `dir`.
    ///
    /// `None` when `dir` is not an indexed direction.
    #[must_use]
    pub fn line(&self, dir: Direction, coords: Coordinate) -> Option<&[Coordinate]> {
        if !Self::is_indexed(dir) {
            return None;
        }
        Some(
            self.lines
                .get(&(dir, dir.line_key(coords)))
                .map_or(&[][..], Vec::as_slice),
        )
    }

    /// Number of non-empty lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&(Direction, i128), &Vec<Coordinate>)> {
        self.lines.iter()
    }
}

/// Split a sorted line around `coords`: squares strictly behind (nearest
/// last) and strictly ahead (nearest first) along `dir`.
#[must_use]
pub fn split_line(
    line: &[Coordinate],
    dir: Direction,
    coords: Coordinate,
) -> (&[Coordinate], &[Coordinate]) {
    let pos = dir.position_along(coords);
    let lower = line.partition_point(|c| dir.position_along(*c) < pos);
    let upper = line.partition_point(|c| dir.position_along(*c) <= pos);
    (&line[..lower], &line[upper..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_sorted() {
        let mut index = LineIndex::new();
        for x in [5, -3, 9, 0] {
            index.add(Coordinate::new(x, 2));
        }
        let row = index
            .line(Direction::HORIZONTAL, Coordinate::new(100, 2))
            .unwrap();
        let xs: Vec<i64> = row.iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![-3, 0, 5, 9]);
    }

    #[test]
    fn test_remove_restores_equality() {
        let mut index = LineIndex::new();
        index.add(Coordinate::new(0, 0));
        let before = index.clone();
        index.add(Coordinate::new(3, 3));
        index.remove(Coordinate::new(3, 3));
        assert_eq!(index, before);
    }

    #[test]
    fn test_knightrider_lines_group_by_step() {
        let mut index = LineIndex::new();
        index.add(Coordinate::new(0, 0));
        index.add(Coordinate::new(2, 4));
        index.add(Coordinate::new(1, 1));
        let line = index
            .line(Direction { dx: 1, dy: 2 }, Coordinate::new(0, 0))
            .unwrap();
        assert_eq!(line, &[Coordinate::new(0, 0), Coordinate::new(2, 4)]);
        assert!(index
            .line(Direction { dx: 3, dy: 1 }, Coordinate::new(0, 0))
            .is_none());
    }

    #[test]
    fn test_split_line() {
        let line = [
            Coordinate::new(-4, 0),
            Coordinate::new(0, 0),
            Coordinate::new(6, 0),
        ];
        let (behind, ahead) = split_line(&line, Direction::HORIZONTAL, Coordinate::new(0, 0));
        assert_eq!(behind, &[Coordinate::new(-4, 0)]);
        assert_eq!(ahead, &[Coordinate::new(6, 0)]);

        let (behind, ahead) = split_line(&line, Direction::HORIZONTAL, Coordinate::new(2, 0));
        assert_eq!(behind.len(), 2);
        assert_eq!(ahead.len(), 1);
    }
}
