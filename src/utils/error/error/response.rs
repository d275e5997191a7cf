//! HTTP response handling for errors

use super::types::DashboardError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for DashboardError {
    fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = self.parts();

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                retryable: self.is_retryable(),
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

impl DashboardError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            DashboardError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            DashboardError::FetchFailure(_) => {
                (StatusCode::BAD_GATEWAY, "FETCH_FAILURE", self.to_string())
            }
            DashboardError::AccessDenied(_) => {
                (StatusCode::FORBIDDEN, "ACCESS_DENIED", self.to_string())
            }
            // Operators see the detail in the logs; callers only learn they were denied
            DashboardError::ConfigurationGap(_) => (
                StatusCode::FORBIDDEN,
                "ACCESS_DENIED",
                "Access denied".to_string(),
            ),
            DashboardError::Unauthorized(_) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", self.to_string())
            }
            DashboardError::Jwt(_) => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Invalid or expired session token".to_string(),
            ),
            DashboardError::Validation(_) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", self.to_string())
            }
            DashboardError::NotImplemented(_) => {
                (StatusCode::NOT_IMPLEMENTED, "NOT_IMPLEMENTED", self.to_string())
            }
            DashboardError::HttpClient(_) => (
                StatusCode::BAD_GATEWAY,
                "FETCH_FAILURE",
                "Backend request failed".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        }
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub retryable: bool,
    pub timestamp: i64,
}
