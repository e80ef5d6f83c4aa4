// SPDX-License-Identifier: MIT

//! # Rust Service
//!
//! Small demo web service exposing two read-only JSON endpoints,
//! `GET /health` and `GET /info`. One of a family of sibling services
//! implemented in different languages behind a shared frontend.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `config`: configuration management
//! - `error`: error types
//! - `version`: runtime and framework version lookups
//! - `prelude`: commonly used types

mod api;
mod config;
mod error;
mod version;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router
pub use api::create_router;

/// Endpoint response structures (public for tests)
pub use api::handlers::{BusinessLogic, HealthResponse, InfoResponse};

/// Build-time version strings
pub use version::{framework_version, runtime_version};
