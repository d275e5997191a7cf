//! Player-scoped endpoints
//!
//! Squad-wide roles may read any player; player accounts only their own.

use crate::core::analytics::{
    AttendanceSummary, DisciplinarySummary, MetricValue, ShootingSummary, attendance_summary,
    development_progress, shot_conversion, summarize_discipline,
};
use crate::server::actor::{authorize, authorize_player};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Serialize;

const SQUAD_SURFACE: &str = "/players";

fn player_surface(player_id: &str) -> String {
    format!("/players/{}", player_id)
}

/// Whole squad
pub async fn list_players(req: HttpRequest, state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    authorize(&req, &state, SQUAD_SURFACE).await?;
    let players = state.repository.players().await?;
    let count = players.len();

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_meta(
        players,
        serde_json::json!({ "count": count }),
    )))
}

#[derive(Debug, Serialize)]
pub struct PlayerDiscipline {
    pub player_id: String,
    #[serde(flatten)]
    pub summary: DisciplinarySummary,
    pub risk_label: &'static str,
}

pub async fn player_discipline(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let player_id = path.into_inner();
    authorize_player(&req, &state, &player_surface(&player_id), &player_id).await?;

    let records = state.repository.discipline(Some(&player_id)).await?;
    let summary = summarize_discipline(&records);

    Ok(HttpResponse::Ok().json(ApiResponse::success(PlayerDiscipline {
        player_id,
        risk_label: summary.risk.label(),
        summary,
    })))
}

#[derive(Debug, Serialize)]
pub struct PlayerShooting {
    pub player_id: String,
    pub matches: usize,
    #[serde(flatten)]
    pub summary: ShootingSummary,
}

pub async fn player_shooting(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let player_id = path.into_inner();
    authorize_player(&req, &state, &player_surface(&player_id), &player_id).await?;

    let stats = state.repository.match_stats(Some(&player_id)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(PlayerShooting {
        player_id,
        matches: stats.len(),
        summary: shot_conversion(&stats),
    })))
}

#[derive(Debug, Serialize)]
pub struct PlayerAttendance {
    pub player_id: String,
    #[serde(flatten)]
    pub summary: AttendanceSummary,
    pub development_progress: MetricValue,
}

pub async fn player_attendance(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let player_id = path.into_inner();
    authorize_player(&req, &state, &player_surface(&player_id), &player_id).await?;

    let records = state.repository.attendance(Some(&player_id)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(PlayerAttendance {
        player_id,
        summary: attendance_summary(&records),
        development_progress: development_progress(&records, state.training_target()),
    })))
}

/// Contract, or `null` data when the player has none
pub async fn player_contract(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let player_id = path.into_inner();
    authorize_player(&req, &state, &player_surface(&player_id), &player_id).await?;

    let contract = state.repository.contract(&player_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(contract)))
}
