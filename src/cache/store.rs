//! Cache Store Module
//!
//! Two-table cuckoo hash cache with bounded relocation and LRU fallback
//! eviction.
//!
//! Every key has exactly two home slots: `hash1(key)` in table A and
//! `hash2(key)` in table B. Inserts try both homes, then kick the table A
//! occupant and re-home it, up to [`MAX_LOOP`] times. When the kick chain
//! runs out, or both tables are full, one table is picked at random and the
//! carried pair overwrites that table's first empty slot or, failing that,
//! its least recently used entry.

use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::cache::lru::{find_slot, Slot};
use crate::cache::{CacheEntry, CacheStats};
use crate::error::{CacheError, Result};

// == Constants ==
/// Maximum kicks attempted by a single put before falling back to eviction.
pub const MAX_LOOP: usize = 100;

/// Fixed-key SipHash builder; hashing depends only on the key.
pub type DefaultBuildHasher = BuildHasherDefault<DefaultHasher>;

type Table<K, V> = Vec<Option<CacheEntry<K, V>>>;

// == Tables ==
/// Both slot arrays, guarded together by the cache's lock.
#[derive(Debug)]
struct Tables<K, V> {
    a: Table<K, V>,
    b: Table<K, V>,
}

impl<K: Eq, V> Tables<K, V> {
    fn new(capacity: usize) -> Self {
        Self {
            a: empty_table(capacity),
            b: empty_table(capacity),
        }
    }

    /// Looks `key` up in its two home slots.
    fn find(&self, h1: usize, h2: usize, key: &K) -> Option<&CacheEntry<K, V>> {
        self.a[h1]
            .as_ref()
            .filter(|entry| entry.key() == key)
            .or_else(|| self.b[h2].as_ref().filter(|entry| entry.key() == key))
    }

    fn find_mut(&mut self, h1: usize, h2: usize, key: &K) -> Option<&mut CacheEntry<K, V>> {
        if self.a[h1].as_ref().is_some_and(|entry| entry.key() == key) {
            return self.a[h1].as_mut();
        }
        self.b[h2].as_mut().filter(|entry| entry.key() == key)
    }

    /// Clears whichever home slot holds `key`.
    fn take(&mut self, h1: usize, h2: usize, key: &K) -> Option<CacheEntry<K, V>> {
        if self.a[h1].as_ref().is_some_and(|entry| entry.key() == key) {
            self.a[h1].take()
        } else if self.b[h2].as_ref().is_some_and(|entry| entry.key() == key) {
            self.b[h2].take()
        } else {
            None
        }
    }

    #[cfg(test)]
    fn occupied(&self) -> usize {
        self.a.iter().chain(self.b.iter()).filter(|slot| slot.is_some()).count()
    }
}

fn empty_table<K, V>(capacity: usize) -> Table<K, V> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

// == Placement ==
/// Result of offering a pair to a single slot.
enum Placement<K, V> {
    /// The slot was empty and now holds the pair.
    Inserted,
    /// The slot already held the key; its value was replaced.
    Updated,
    /// The slot holds a different key; the pair is handed back.
    Occupied(K, V),
}

fn try_place<K: Eq, V>(slot: &mut Option<CacheEntry<K, V>>, key: K, value: V) -> Placement<K, V> {
    match *slot {
        Some(ref mut entry) if *entry.key() == key => {
            entry.set_value(value);
            Placement::Updated
        }
        Some(_) => Placement::Occupied(key, value),
        None => {
            *slot = Some(CacheEntry::new(key, value));
            Placement::Inserted
        }
    }
}

// == Cuckoo Cache ==
/// Fixed-capacity, thread-safe cuckoo hash cache.
///
/// `get` takes the lock in shared mode; `put` and `remove` take it
/// exclusively. Size and eviction counters are atomics so the accessors
/// never block.
#[derive(Debug)]
pub struct CuckooCache<K, V, S = DefaultBuildHasher> {
    /// Slots per table
    capacity: usize,
    tables: RwLock<Tables<K, V>>,
    hasher: S,
    /// Occupied slots across both tables
    size: AtomicUsize,
    /// Forced evictions, never decreases
    evictions: AtomicU64,
}

impl<K, V> CuckooCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    // == Constructor ==
    /// Creates a cache with `capacity` slots in each of its two tables.
    ///
    /// Returns [`CacheError::InvalidConfig`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_hasher(capacity, DefaultBuildHasher::default())
    }
}

impl<K, V, S> CuckooCache<K, V, S>
where
    K: Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    /// Creates a cache that hashes keys with `hasher`.
    pub fn with_hasher(capacity: usize, hasher: S) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "Cache capacity must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            capacity,
            tables: RwLock::new(Tables::new(capacity)),
            hasher,
            size: AtomicUsize::new(0),
            evictions: AtomicU64::new(0),
        })
    }

    // == Hashing ==
    /// Returns the key's home indices `(hash1, hash2)`.
    fn slots(&self, key: &K) -> (usize, usize) {
        let hash = self.hasher.hash_one(key);
        let capacity = self.capacity as u64;
        let h1 = hash % capacity;
        let h2 = hash.wrapping_mul(31).wrapping_add(17) % capacity;
        (h1 as usize, h2 as usize)
    }

    // == Get ==
    /// Returns a clone of the value stored for `key`, refreshing its access time.
    pub fn get(&self, key: &K) -> Option<V> {
        let (h1, h2) = self.slots(key);
        let tables = self.tables.read();
        tables.find(h1, h2, key).map(|entry| entry.value().clone())
    }

    // == Put ==
    /// Maps `key` to `value`.
    ///
    /// An existing mapping is updated in place. A new key is placed in an
    /// empty home slot if one exists; otherwise the table A occupant is
    /// kicked and re-homed, bounded by [`MAX_LOOP`] kicks, after which the
    /// carried pair goes through the LRU fallback. Never fails.
    pub fn put(&self, key: K, value: V) {
        let mut guard = self.tables.write();
        let tables = &mut *guard;

        let (h1, h2) = self.slots(&key);
        if let Some(entry) = tables.find_mut(h1, h2, &key) {
            entry.set_value(value);
            return;
        }

        if self.size.load(Ordering::Relaxed) >= self.capacity * 2 {
            self.evict_and_insert(tables, key, value);
            return;
        }

        let (mut key, mut value) = (key, value);
        for _ in 0..MAX_LOOP {
            let (h1, h2) = self.slots(&key);

            match try_place(&mut tables.a[h1], key, value) {
                Placement::Inserted => return self.record_insert(),
                Placement::Updated => return,
                Placement::Occupied(k, v) => (key, value) = (k, v),
            }

            match try_place(&mut tables.b[h2], key, value) {
                Placement::Inserted => return self.record_insert(),
                Placement::Updated => return,
                Placement::Occupied(k, v) => (key, value) = (k, v),
            }

            // Both homes taken by other keys: displace table A's occupant
            if let Some(occupant) = tables.a[h1].as_mut() {
                let displaced = std::mem::replace(occupant, CacheEntry::new(key, value));
                (key, value) = displaced.into_parts();
            }
        }

        trace!(max_loop = MAX_LOOP, "Relocation chain exhausted, falling back to eviction");
        self.evict_and_insert(tables, key, value);
    }

    fn record_insert(&self) {
        self.size.fetch_add(1, Ordering::Relaxed);
    }

    // == Evict And Insert ==
    /// Writes the pair into a uniformly chosen table's first empty slot, or
    /// over that table's least recently used entry.
    fn evict_and_insert(&self, tables: &mut Tables<K, V>, key: K, value: V) {
        let (name, table) = if rand::random::<bool>() {
            ("A", &mut tables.a)
        } else {
            ("B", &mut tables.b)
        };

        let slot = find_slot(table);
        match slot {
            Slot::Vacant(_) => self.record_insert(),
            Slot::Victim(index) => {
                let total = self.evictions.fetch_add(1, Ordering::Relaxed) + 1;
                debug!(table = name, index, total, "Evicted least recently used entry");
            }
        }

        table[slot.index()] = Some(CacheEntry::new(key, value));
    }

    // == Remove ==
    /// Removes the mapping for `key`. Absent keys are ignored.
    pub fn remove(&self, key: &K) {
        let (h1, h2) = self.slots(key);
        let mut tables = self.tables.write();
        if tables.take(h1, h2, key).is_some() {
            self.size.fetch_sub(1, Ordering::Relaxed);
        }
    }
}

impl<K, V, S> CuckooCache<K, V, S> {
    // == Accessors ==
    /// Returns the number of occupied slots.
    pub fn size(&self) -> usize {
        self.size.load(Ordering::Relaxed)
    }

    /// Returns true if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the number of forced evictions so far.
    pub fn eviction_count(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Returns the number of slots in each table.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats::new(self.size(), self.eviction_count(), self.capacity)
    }
}
