//! Authentication and access control validators

use super::trait_def::Validate;
use crate::auth::rbac::AccessControl;
use crate::config::models::*;
use tracing::{debug, warn};

const MIN_SECRET_LEN: usize = 32;

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating auth configuration");

        if self.dev_override.is_some() && !self.environment.is_development() {
            return Err("dev_override is only permitted in the development environment".to_string());
        }

        if self.jwt_audience.is_empty() {
            return Err("JWT audience cannot be empty".to_string());
        }

        // Demo mode never verifies tokens.
        if self.demo_mode() {
            if self.jwt_secret.is_empty() {
                warn!("Demo mode active: requests are served as the configured stand-in actor");
            }
            return Ok(());
        }

        if self.jwt_secret.is_empty() {
            return Err("JWT secret cannot be empty".to_string());
        }

        if self.jwt_secret.len() < MIN_SECRET_LEN {
            return Err(format!(
                "JWT secret should be at least {} characters long",
                MIN_SECRET_LEN
            ));
        }

        if let Some(stand_in) = &self.dev_override {
            if stand_in.user_id.is_empty() {
                return Err("dev_override.user_id cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for AccessConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating access configuration");

        for (name, path) in [
            ("login_path", &self.login_path),
            ("default_landing", &self.default_landing),
            ("access_denied_path", &self.access_denied_path),
        ] {
            if !path.starts_with('/') {
                return Err(format!("{} must start with '/', got {:?}", name, path));
            }
        }

        if self.default_landing == self.login_path {
            return Err("default_landing cannot be the login path".to_string());
        }

        if let Some(path) = self.routes.keys().find(|p| p.trim().is_empty()) {
            return Err(format!("Route override has an empty path: {:?}", path));
        }

        let access = AccessControl::new(self);
        let missing = access
            .registry()
            .missing(self.required_surfaces.iter().map(String::as_str));
        if !missing.is_empty() {
            return Err(format!(
                "Required surfaces have no access rule: {}",
                missing.join(", ")
            ));
        }

        Ok(())
    }
}
