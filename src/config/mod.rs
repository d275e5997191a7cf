//! Configuration management for the dashboard
//!
//! Configuration is read from a YAML file, then selected values are
//! overridden from `SQUADBOARD_*` environment variables, then validated.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{DashboardError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Environment variables recognised by [`Config::apply_env`]
pub const ENV_VARS: &[&str] = &[
    "SQUADBOARD_HOST",
    "SQUADBOARD_PORT",
    "SQUADBOARD_BACKEND_URL",
    "SQUADBOARD_BACKEND_API_KEY",
    "SQUADBOARD_JWT_SECRET",
    "SQUADBOARD_ENVIRONMENT",
    "SQUADBOARD_LOG_LEVEL",
    "SQUADBOARD_LOG_JSON",
];

/// Main configuration struct for the dashboard
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Dashboard configuration
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load configuration from file, apply environment overrides and validate
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DashboardError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config = Self::from_yaml_str(&content)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from YAML without validating it
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let dashboard: DashboardConfig = serde_yaml::from_str(content)
            .map_err(|e| DashboardError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(Self { dashboard })
    }

    /// Override values from the environment
    ///
    /// `lookup` is normally `std::env::var`; tests pass a map instead.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = &mut self.dashboard;

        if let Some(host) = lookup("SQUADBOARD_HOST") {
            d.server.host = host;
        }
        if let Some(port) = lookup("SQUADBOARD_PORT") {
            d.server.port = port
                .parse()
                .map_err(|_| DashboardError::Config(format!("Invalid SQUADBOARD_PORT: {}", port)))?;
        }
        if let Some(url) = lookup("SQUADBOARD_BACKEND_URL") {
            d.backend.url = url;
        }
        if let Some(key) = lookup("SQUADBOARD_BACKEND_API_KEY") {
            d.backend.api_key = key;
        }
        if let Some(secret) = lookup("SQUADBOARD_JWT_SECRET") {
            d.auth.jwt_secret = secret;
        }
        if let Some(env) = lookup("SQUADBOARD_ENVIRONMENT") {
            d.auth.environment = env.parse().map_err(DashboardError::Config)?;
        }
        if let Some(level) = lookup("SQUADBOARD_LOG_LEVEL") {
            d.logging.level = level;
        }
        if let Some(json) = lookup("SQUADBOARD_LOG_JSON") {
            d.logging.json = matches!(json.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.dashboard.server
    }

    /// Get backend configuration
    pub fn backend(&self) -> &BackendConfig {
        &self.dashboard.backend
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.dashboard.auth
    }

    /// Get access configuration
    pub fn access(&self) -> &AccessConfig {
        &self.dashboard.access
    }

    /// Get metrics configuration
    pub fn metrics(&self) -> &MetricsConfig {
        &self.dashboard.metrics
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.dashboard.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        let d = &self.dashboard;
        d.server
            .validate()
            .map_err(|e| DashboardError::Config(format!("Server config error: {}", e)))?;
        d.server
            .cors
            .validate()
            .map_err(|e| DashboardError::Config(format!("CORS config error: {}", e)))?;
        d.backend
            .validate()
            .map_err(|e| DashboardError::Config(format!("Backend config error: {}", e)))?;
        d.auth
            .validate()
            .map_err(|e| DashboardError::Config(format!("Auth config error: {}", e)))?;
        d.access
            .validate()
            .map_err(|e| DashboardError::Config(format!("Access config error: {}", e)))?;
        d.metrics
            .validate()
            .map_err(|e| DashboardError::Config(format!("Metrics config error: {}", e)))?;
        d.logging
            .validate()
            .map_err(|e| DashboardError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.dashboard)
            .map_err(|e| DashboardError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
