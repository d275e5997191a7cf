//! Authentication configuration

use crate::auth::rbac::Role;
use serde::{Deserialize, Serialize};

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment: {}", other)),
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Development or production
    #[serde(default)]
    pub environment: Environment,
    /// Shared secret the auth provider signs access tokens with
    #[serde(default)]
    pub jwt_secret: String,
    /// Expected `aud` claim
    #[serde(default = "default_audience")]
    pub jwt_audience: String,
    /// Stand-in actor used instead of real sign-in (development only)
    #[serde(default)]
    pub dev_override: Option<DevOverrideConfig>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            jwt_secret: String::new(),
            jwt_audience: default_audience(),
            dev_override: None,
        }
    }
}

impl AuthConfig {
    /// Whether the development stand-in replaces real sign-in
    pub fn demo_mode(&self) -> bool {
        self.environment.is_development() && self.dev_override.is_some()
    }
}

/// Development stand-in actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevOverrideConfig {
    #[serde(default = "default_dev_user_id")]
    pub user_id: String,
    pub role: Role,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub player_id: Option<String>,
}

fn default_audience() -> String {
    "authenticated".to_string()
}

fn default_dev_user_id() -> String {
    "dev-user".to_string()
}
