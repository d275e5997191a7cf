//! Access control configuration

use crate::auth::rbac::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Route guard targets and registry overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_landing")]
    pub default_landing: String,
    #[serde(default = "default_access_denied_path")]
    pub access_denied_path: String,
    /// Per-surface overrides; an empty list denies everyone
    #[serde(default)]
    pub routes: BTreeMap<String, Vec<Role>>,
    /// Surfaces that must have a rule, checked at startup
    #[serde(default)]
    pub required_surfaces: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            default_landing: default_landing(),
            access_denied_path: default_access_denied_path(),
            routes: BTreeMap::new(),
            required_surfaces: vec![],
        }
    }
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_landing() -> String {
    "/dashboard".to_string()
}

fn default_access_denied_path() -> String {
    "/unauthorized".to_string()
}
