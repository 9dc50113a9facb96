//! LRU Slot Selection Module
//!
//! Picks the slot that the eviction fallback writes into: the first vacant
//! slot of a table, or failing that its least recently used occupant.

use crate::cache::CacheEntry;

// == Slot ==
/// Outcome of scanning one table for an insertion target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// An empty slot; filling it grows the cache.
    Vacant(usize),
    /// The least recently used occupant; overwriting it is an eviction.
    Victim(usize),
}

impl Slot {
    /// Returns the slot index.
    pub fn index(self) -> usize {
        match self {
            Slot::Vacant(index) | Slot::Victim(index) => index,
        }
    }
}

// == Find Slot ==
/// Scans `table` front to back.
///
/// Stops at the first empty slot. Otherwise returns the occupant with the
/// smallest access timestamp; on equal timestamps the lowest index wins.
/// `table` must not be empty.
pub fn find_slot<K, V>(table: &[Option<CacheEntry<K, V>>]) -> Slot {
    debug_assert!(!table.is_empty(), "cannot scan an empty table");

    let mut lru_index = 0;
    let mut oldest = u64::MAX;

    for (index, slot) in table.iter().enumerate() {
        match slot {
            None => return Slot::Vacant(index),
            Some(entry) => {
                let accessed = entry.last_access();
                if accessed < oldest {
                    oldest = accessed;
                    lru_index = index;
                }
            }
        }
    }

    Slot::Victim(lru_index)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: u32, accessed: u64) -> Option<CacheEntry<u32, u32>> {
        let entry = CacheEntry::new(key, key);
        entry.set_last_access(accessed);
        Some(entry)
    }

    #[test]
    fn test_empty_slot_preferred() {
        let table = vec![entry(1, 10), None, entry(3, 1)];
        assert_eq!(find_slot(&table), Slot::Vacant(1));
    }

    #[test]
    fn test_first_empty_slot_wins() {
        let table: Vec<Option<CacheEntry<u32, u32>>> = vec![None, None, None];
        assert_eq!(find_slot(&table), Slot::Vacant(0));
    }

    #[test]
    fn test_oldest_entry_is_victim() {
        let table = vec![entry(1, 30), entry(2, 10), entry(3, 20)];
        assert_eq!(find_slot(&table), Slot::Victim(1));
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let table = vec![entry(1, 50), entry(2, 5), entry(3, 5), entry(4, 5)];
        assert_eq!(find_slot(&table), Slot::Victim(1));
    }

    #[test]
    fn test_empty_slot_after_oldest_still_preferred() {
        // The scan stops at the first gap even if an older entry came before it
        let table = vec![entry(1, 1), entry(2, 2), None];
        assert_eq!(find_slot(&table), Slot::Vacant(2));
    }

    #[test]
    fn test_single_slot_table() {
        let table = vec![entry(9, 100)];
        assert_eq!(find_slot(&table), Slot::Victim(0));
        assert_eq!(find_slot(&table).index(), 0);
    }
}
