//! Helper functions for creating specific error types

use super::types::DashboardError;

/// Helper functions for creating specific errors
impl DashboardError {
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn fetch_failure<S: Into<String>>(message: S) -> Self {
        Self::FetchFailure(message.into())
    }

    pub fn access_denied<S: Into<String>>(message: S) -> Self {
        Self::AccessDenied(message.into())
    }

    pub fn configuration_gap<S: Into<String>>(message: S) -> Self {
        Self::ConfigurationGap(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn not_implemented<S: Into<String>>(message: S) -> Self {
        Self::NotImplemented(message.into())
    }
}

impl DashboardError {
    /// Whether the operation that produced this error may be retried as-is
    pub fn is_retryable(&self) -> bool {
        match self {
            DashboardError::FetchFailure(_) => true,
            DashboardError::HttpClient(e) => {
                e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
            }
            _ => false,
        }
    }

    /// Whether the error only means "record absent"
    pub fn is_not_found(&self) -> bool {
        matches!(self, DashboardError::NotFound(_))
    }
}
