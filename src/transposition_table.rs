//! Shared transposition table (SPEC_FULL.md ss4.6, ss5): direct-mapped,
//! keyed by Zobrist hash, guarded by a single reader-writer lock so root
//! tasks can probe concurrently while writes stay rare and brief.

use parking_lot::RwLock;

use crate::config::TT_SIZE;
use crate::moves::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    pub hash: u64,
    pub depth: u32,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

struct Table {
    slots: Vec<Option<TTEntry>>,
    mask: usize,
}

impl Table {
    fn new(size: usize) -> Self {
        let size = size.next_power_of_two();
        Table {
            slots: vec![None; size],
            mask: size - 1,
        }
    }

    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }
}

/// A transposition table shared by reference across root-move search
/// tasks. Probes take a shared read lock; stores take an exclusive write
/// lock, held only for the duration of the single slot update.
pub struct TranspositionTable {
    inner: RwLock<Table>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        TranspositionTable {
            inner: RwLock::new(Table::new(TT_SIZE)),
        }
    }

    #[must_use]
    pub fn with_capacity(entries: usize) -> Self {
        TranspositionTable {
            inner: RwLock::new(Table::new(entries)),
        }
    }

    /// Looks up `hash`; returns `None` on a miss or a colliding occupant of
    /// the same slot (the index, not the hash, is the collision point).
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<TTEntry> {
        let table = self.inner.read();
        let idx = table.index(hash);
        match table.slots[idx] {
            Some(entry) if entry.hash == hash => {
                #[cfg(feature = "logging")]
                log::trace!("tt hit at {hash:#x}, depth {}", entry.depth);
                Some(entry)
            }
            _ => None,
        }
    }

    /// Stores an entry for `hash`, replacing the current occupant of its
    /// slot only if the new search reached at least as deep (depth is the
    /// replacement priority; there is no separate generation counter since
    /// the table may be reused verbatim across turns, per SPEC_FULL.md ss5).
    pub fn store(&self, hash: u64, depth: u32, score: i32, bound: Bound, best_move: Option<Move>) {
        let mut table = self.inner.write();
        let idx = table.index(hash);
        let should_replace = match &table.slots[idx] {
            Some(existing) => depth >= existing.depth,
            None => true,
        };
        if should_replace {
            table.slots[idx] = Some(TTEntry {
                hash,
                depth,
                score,
                bound,
                best_move,
            });
        }
    }

    /// Drops every entry; callers may choose to do this between engine
    /// turns, or let stale shallower entries persist and be overwritten.
    pub fn clear(&self) {
        let mut table = self.inner.write();
        for slot in &mut table.slots {
            *slot = None;
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_misses_on_empty_table() {
        let tt = TranspositionTable::with_capacity(16);
        assert!(tt.probe(42).is_none());
    }

    #[test]
    fn store_then_probe_round_trips() {
        let tt = TranspositionTable::with_capacity(16);
        tt.store(42, 4, 100, Bound::Exact, None);
        let entry = tt.probe(42).unwrap();
        assert_eq!(entry.depth, 4);
        assert_eq!(entry.score, 100);
        assert_eq!(entry.bound, Bound::Exact);
    }

    #[test]
    fn shallower_store_does_not_overwrite_deeper_entry() {
        let tt = TranspositionTable::with_capacity(16);
        tt.store(7, 8, 50, Bound::Exact, None);
        tt.store(7, 2, 999, Bound::Exact, None);
        assert_eq!(tt.probe(7).unwrap().depth, 8);
    }

    #[test]
    fn clear_removes_all_entries() {
        let tt = TranspositionTable::with_capacity(16);
        tt.store(7, 8, 50, Bound::Exact, None);
        tt.clear();
        assert!(tt.probe(7).is_none());
    }
}
