//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing JSON response bodies. Cache values
//! themselves are returned as plain text.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the stats endpoint (GET /api/cache/stats)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Occupied slots across both tables
    pub size: usize,
    /// Forced evictions since startup
    pub eviction_count: u64,
    /// Slots per table
    pub capacity: usize,
    /// Configured expiration in milliseconds, if any
    pub expiration_ms: Option<u64>,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a cache snapshot
    pub fn new(stats: CacheStats, expiration_ms: Option<u64>) -> Self {
        Self {
            size: stats.size,
            eviction_count: stats.evictions,
            capacity: stats.capacity,
            expiration_ms,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
