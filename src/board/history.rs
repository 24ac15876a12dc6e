//! Position occurrence counts for repetition draws.

use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable::default()
    }

    /// Times the position with this hash has occurred.
    pub(crate) fn count(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    /// Record one more occurrence, returning the count before it.
    pub(crate) fn record(&mut self, hash: u64) -> u32 {
        let entry = self.counts.entry(hash).or_insert(0);
        let previous = *entry;
        *entry = previous.saturating_add(1);
        previous
    }

    /// Put back a count returned by [`record`](Self::record). Zero counts
    /// are dropped so an undone game compares equal to the original.
    pub(crate) fn restore(&mut self, hash: u64, count: u32) {
        if count == 0 {
            self.counts.remove(&hash);
        } else {
            self.counts.insert(hash, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_restore() {
        let mut table = RepetitionTable::new();
        assert_eq!(table.record(7), 0);
        assert_eq!(table.record(7), 1);
        assert_eq!(table.count(7), 2);
        table.restore(7, 1);
        assert_eq!(table.count(7), 1);
        table.restore(7, 0);
        assert_eq!(table, RepetitionTable::new());
    }
}
