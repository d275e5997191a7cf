//! # squadboard
//!
//! Decision and data layer for a role-gated club analytics dashboard.
//!
//! - **Access control**: a closed set of roles, a registry mapping dashboard
//!   surfaces to the roles allowed on them, and a pure evaluator. Surfaces
//!   without a rule are denied to everyone.
//! - **Profile resolution**: maps the signed-in identity to a club profile,
//!   discarding results that arrive after the identity has changed.
//! - **Route guards**: pure allow/pending/redirect decisions plus a thin
//!   shell that performs the redirect and notification.
//! - **Calculators**: disciplinary risk, squad availability, shot
//!   conversion and training attendance over raw backend records.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use squadboard::{Config, server::HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/dashboard.yaml").await?;
//!     HttpServer::new(&config).await?.start().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Evaluating access directly
//!
//! ```rust
//! use squadboard::auth::rbac::{Role, has_access};
//!
//! assert!(has_access(Some(Role::Coach), &[Role::Admin, Role::Coach]));
//! assert!(!has_access(None, &[Role::Admin]));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{DashboardError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information embedded by the build script
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since the epoch
    pub build_time: &'static str,
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("SQUADBOARD_BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("SQUADBOARD_GIT_HASH").unwrap_or("unknown"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
