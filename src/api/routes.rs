//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_handler, delete_stats_key_handler, get_handler, health_handler, put_handler,
    put_stats_key_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /api/cache/:key` - Store the request body under `key`
/// - `GET /api/cache/:key` - Retrieve a value by key
/// - `DELETE /api/cache/:key` - Delete a key
/// - `GET /api/cache/stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// The static `stats` route answers GET with statistics; PUT and DELETE on it
/// still address the key `stats`.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/cache/stats",
            get(stats_handler)
                .put(put_stats_key_handler)
                .delete(delete_stats_key_handler),
        )
        .route(
            "/api/cache/:key",
            put(put_handler).get(get_handler).delete(delete_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
