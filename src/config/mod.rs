// SPDX-License-Identifier: MIT

//! Configuration module
//!
//! Loads configuration from environment variables.


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8083";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const PORT: &str = "PORT";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// `SERVER_ADDR` takes precedence; `PORT` (the sibling services
    /// configure by port alone) binds to all interfaces.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let server_addr = resolve_server_addr(
            std::env::var(env_vars::SERVER_ADDR).ok(),
            std::env::var(env_vars::PORT).ok(),
        );

        Config { server_addr }
    }
}

fn resolve_server_addr(server_addr: Option<String>, port: Option<String>) -> String {
    if let Some(addr) = server_addr {
        return addr;
    }
    if let Some(port) = port {
        match port.parse::<u16>() {
            Ok(port) => return format!("0.0.0.0:{port}"),
            Err(_) => {
                tracing::warn!("Invalid PORT value '{}'. Using default address.", port);
            }
        }
    }
    defaults::SERVER_ADDR.to_string()
}
