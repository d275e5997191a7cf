//! Configuration data models
//!
//! This module defines all configuration structures used by the dashboard.

#![allow(missing_docs)]

pub mod access;
pub mod auth;
pub mod backend;
pub mod dashboard;
pub mod logging;
pub mod metrics;
pub mod server;

// Re-export all configuration types
pub use access::*;
pub use auth::*;
pub use backend::*;
pub use dashboard::*;
pub use logging::*;
pub use metrics::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default backend request timeout in seconds
pub fn default_timeout() -> u64 {
    10
}

pub(crate) fn default_true() -> bool {
    true
}
