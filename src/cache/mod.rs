//! Cache Module
//!
//! Fixed-capacity cuckoo hash cache with LRU fallback eviction.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::{monotonic_nanos, CacheEntry};
pub use lru::{find_slot, Slot};
pub use stats::CacheStats;
pub use store::{CuckooCache, DefaultBuildHasher, MAX_LOOP};

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
