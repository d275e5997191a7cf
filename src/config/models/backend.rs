//! Hosted backend configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the hosted backend (REST endpoint lives under `/rest/v1`)
    #[serde(default)]
    pub url: String,
    /// Public API key sent with every request
    #[serde(default)]
    pub api_key: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Serve records from memory instead of the hosted backend
    #[serde(default)]
    pub in_memory: bool,
    /// JSON or YAML file of `table -> [records]` loaded into the in-memory backend
    #[serde(default)]
    pub seed_file: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            timeout: default_timeout(),
            in_memory: false,
            seed_file: None,
        }
    }
}

impl BackendConfig {
    /// REST endpoint root
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }
}
