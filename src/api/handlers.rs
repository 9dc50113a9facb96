//! API Handlers
//!
//! HTTP request handlers that forward to the shared cuckoo cache.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::cache::{CuckooCache, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{HealthResponse, StatsResponse};

/// Key whose path collides with the stats route
const STATS_KEY: &str = "stats";

/// Application state shared across all handlers.
///
/// The cache synchronizes internally, so handlers share it through a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache
    pub cache: Arc<CuckooCache<String, String>>,
    /// Configuration the cache was built from
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: CuckooCache<String, String>, config: Config) -> Self {
        Self {
            cache: Arc::new(cache),
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configuration is invalid, e.g. a zero capacity.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let cache = CuckooCache::new(config.capacity)?;
        Ok(Self::new(cache, config.clone()))
    }
}

/// Handler for PUT /api/cache/:key
///
/// Stores the raw request body as the value for `key`.
pub async fn put_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    value: String,
) -> Result<StatusCode> {
    store_value(&state, key, value)
}

fn store_value(state: &AppState, key: String, value: String) -> Result<StatusCode> {
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidRequest(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    if value.len() > MAX_VALUE_SIZE {
        return Err(CacheError::InvalidRequest(format!(
            "Value exceeds maximum size of {} bytes",
            MAX_VALUE_SIZE
        )));
    }

    debug!(key = %key, bytes = value.len(), "Storing value");
    state.cache.put(key, value);

    Ok(StatusCode::OK)
}

/// Handler for GET /api/cache/:key
///
/// Returns the stored value as plain text, or 404 if the key is absent.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<String> {
    state.cache.get(&key).ok_or(CacheError::NotFound(key))
}

/// Handler for DELETE /api/cache/:key
///
/// Removing an absent key still succeeds.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> StatusCode {
    state.cache.remove(&key);
    StatusCode::OK
}

/// Handler for PUT /api/cache/stats
///
/// Only GET on this path serves statistics; PUT stores under the key `stats`.
pub async fn put_stats_key_handler(
    State(state): State<AppState>,
    value: String,
) -> Result<StatusCode> {
    store_value(&state, STATS_KEY.to_string(), value)
}

/// Handler for DELETE /api/cache/stats
pub async fn delete_stats_key_handler(State(state): State<AppState>) -> StatusCode {
    state.cache.remove(&STATS_KEY.to_string());
    StatusCode::OK
}

/// Handler for GET /api/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(
        state.cache.stats(),
        state.config.expiration_ms,
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
