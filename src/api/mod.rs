//! API Module
//!
//! HTTP handlers and routing that expose the cuckoo cache over REST.
//!
//! # Endpoints
//! - `PUT /api/cache/:key` - Store a value (raw request body)
//! - `GET /api/cache/:key` - Retrieve a value by key
//! - `DELETE /api/cache/:key` - Delete a key
//! - `GET /api/cache/stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
