//! Process configuration
//!
//! The service takes its listening port from the `PORT` environment
//! variable; the bind address is fixed.

use std::env;
use std::net::SocketAddr;

/// Default listening port
pub const DEFAULT_PORT: u16 = 10000;

/// Fixed bind address
pub const BIND_ADDRESS: &str = "0.0.0.0";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listening port (default: 10000)
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Socket address to bind
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(
            BIND_ADDRESS.parse().expect("BIND_ADDRESS is a valid IP"),
            self.port,
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}
