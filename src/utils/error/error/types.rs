//! Error types for the dashboard

use thiserror::Error;

/// Result type alias for the dashboard
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Main error type for the dashboard
///
/// The first four variants form the access/data taxonomy the UI reacts to:
/// absent records, backend failures, role denials and registry gaps. None of
/// them is fatal; callers degrade to an empty state, a retry affordance or a
/// redirect.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Record absent (e.g. no contract row for a player)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network or backend error, retryable
    #[error("Fetch failure: {0}")]
    FetchFailure(String),

    /// Role check failed
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// A route or capability has no entry in the role registry
    #[error("Configuration gap: {0}")]
    ConfigurationGap(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing or invalid credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JWT errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),

    /// Not implemented errors
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}
