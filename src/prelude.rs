// SPDX-License-Identifier: MIT

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use rust_service::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// HTTP surface
pub use crate::api::create_router;
pub use crate::api::handlers::{BusinessLogic, HealthResponse, InfoResponse};

// Version lookups
pub use crate::version::{framework_version, runtime_version};
