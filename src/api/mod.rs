//! HTTP API module
//!
//! Provides the read-only JSON endpoints of the service.
//!
//! # Endpoints
//! - `GET /health` — health check
//! - `GET /info` — service and runtime information

pub mod handlers;

use axum::{Router, routing::get};

/// Creates the main Axum router with all endpoints
///
/// The handlers are stateless, so the router carries no shared state.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/info", get(handlers::info))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_router() {
        let _router = create_router();
        // If we get here without panicking, the router was created successfully
    }
}
