//! Cache Entry Module
//!
//! Defines a single table slot's contents: a key/value pair plus the
//! last-access timestamp used by LRU eviction.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

// == Cache Entry ==
/// A key/value pair stored in one slot of a cuckoo table.
///
/// The key is fixed at construction. The value is only mutated while the
/// owning cache holds its exclusive lock, but the access timestamp is atomic
/// so that readers holding the shared lock can refresh it.
#[derive(Debug)]
pub struct CacheEntry<K, V> {
    key: K,
    value: V,
    /// Monotonic nanoseconds of the last read or write
    last_access: AtomicU64,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            last_access: AtomicU64::new(monotonic_nanos()),
        }
    }

    /// Returns the entry's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    // == Value Access ==
    /// Returns the value and marks the entry as recently used.
    pub fn value(&self) -> &V {
        self.touch();
        &self.value
    }

    /// Replaces the value and marks the entry as recently used.
    pub fn set_value(&mut self, value: V) {
        self.value = value;
        self.touch();
    }

    // == Access Time ==
    /// Returns the last access time in monotonic nanoseconds.
    pub fn last_access(&self) -> u64 {
        self.last_access.load(Ordering::Relaxed)
    }

    /// Refreshes the last access time.
    ///
    /// Last writer wins; concurrent touches never tear the stored value.
    pub fn touch(&self) {
        self.last_access.store(monotonic_nanos(), Ordering::Relaxed);
    }

    /// Consumes the entry, yielding its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    #[cfg(test)]
    pub(crate) fn set_last_access(&self, nanos: u64) {
        self.last_access.store(nanos, Ordering::Relaxed);
    }
}

// == Utility Functions ==
/// Returns nanoseconds elapsed since the first call in this process.
///
/// Successive calls return strictly increasing values, even when the
/// underlying clock has not advanced between them.
pub fn monotonic_nanos() -> u64 {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    static LAST: AtomicU64 = AtomicU64::new(0);

    let now = EPOCH.get_or_init(Instant::now).elapsed().as_nanos() as u64;
    let mut last = LAST.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}
