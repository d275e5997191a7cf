//! Health check endpoint

use crate::server::routes::ApiResponse;
use actix_web::{HttpResponse, Result as ActixResult};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(flatten)]
    pub build: crate::BuildInfo,
}

/// Liveness probe; does not touch the backend
pub async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    Ok(HttpResponse::Ok().json(ApiResponse::success(HealthStatus {
        status: "healthy",
        timestamp: chrono::Utc::now(),
        build: crate::build_info(),
    })))
}
