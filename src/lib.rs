//! Cuckoo Cache - A fixed-capacity, thread-safe key/value cache
//!
//! Two-table cuckoo hashing with bounded relocation and LRU fallback
//! eviction, plus a small REST service around it.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::CuckooCache;
pub use config::Config;
pub use error::{CacheError, Result};
