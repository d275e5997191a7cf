//! Top-level dashboard configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Hosted backend configuration
    #[serde(default)]
    pub backend: BackendConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Route guard and registry configuration
    #[serde(default)]
    pub access: AccessConfig,
    /// Metric calculator settings
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
