//! HTTP route modules

pub mod access;
pub mod health;
pub mod players;
pub mod squad;

use actix_web::web;
use chrono::NaiveDate;
use serde::Deserialize;

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: None,
        }
    }

    /// Create a successful response with metadata
    pub fn success_with_meta(data: T, meta: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: Some(meta),
        }
    }
}

/// Optional reference date for date-dependent figures
#[derive(Debug, Default, Deserialize)]
pub struct AsOfQuery {
    pub as_of: Option<NaiveDate>,
}

impl AsOfQuery {
    pub fn date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}

/// Register the `/api/v1` routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/me", web::get().to(access::me))
            .route("/access", web::get().to(access::check_access))
            .route("/players", web::get().to(players::list_players))
            .route("/players/{id}/discipline", web::get().to(players::player_discipline))
            .route("/players/{id}/shooting", web::get().to(players::player_shooting))
            .route("/players/{id}/attendance", web::get().to(players::player_attendance))
            .route("/players/{id}/contract", web::get().to(players::player_contract))
            .route("/squad/availability", web::get().to(squad::availability))
            .route("/squad/discipline", web::get().to(squad::discipline))
            .route("/dashboard/summary", web::get().to(squad::dashboard_summary)),
    );
}
