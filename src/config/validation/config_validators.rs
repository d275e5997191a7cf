//! Validators for server, backend, metrics and logging sections

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(0) = self.workers {
            return Err("Worker count must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.allow_credentials && self.allows_all_origins() {
            return Err(
                "CORS cannot allow credentials while accepting every origin".to_string(),
            );
        }

        for origin in self.allowed_origins.iter().filter(|o| o.as_str() != "*") {
            url::Url::parse(origin).map_err(|e| format!("Invalid CORS origin {}: {}", origin, e))?;
        }

        Ok(())
    }
}

impl Validate for BackendConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating backend configuration");

        if self.timeout == 0 {
            return Err("Backend timeout must be greater than 0".to_string());
        }

        if self.in_memory {
            return Ok(());
        }

        if self.url.is_empty() {
            return Err("Backend URL cannot be empty".to_string());
        }

        let parsed =
            url::Url::parse(&self.url).map_err(|e| format!("Invalid backend URL: {}", e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!(
                "Backend URL must use http or https, got {}",
                parsed.scheme()
            ));
        }

        if self.api_key.is_empty() {
            return Err("Backend API key cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for MetricsConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(0) = self.training_target_sessions {
            return Err("Training target sessions must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level {}: {}", self.level, e))
    }
}
