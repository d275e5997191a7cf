//! Squad-level endpoints

use crate::core::analytics::{
    AvailabilitySummary, DisciplinarySummary, SummaryInputs, dashboard_summary as summarize,
    discipline_by_player, squad_availability,
};
use crate::server::actor::authorize;
use crate::server::routes::{ApiResponse, AsOfQuery};
use crate::server::state::AppState;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize)]
pub struct Availability {
    pub as_of: NaiveDate,
    #[serde(flatten)]
    pub summary: AvailabilitySummary,
}

pub async fn availability(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<AsOfQuery>,
) -> ActixResult<HttpResponse> {
    authorize(&req, &state, "/injuries").await?;

    let (players, injuries) = futures::try_join!(
        state.repository.players(),
        state.repository.injuries(None)
    )?;
    let as_of = query.date();

    Ok(HttpResponse::Ok().json(ApiResponse::success(Availability {
        as_of,
        summary: squad_availability(&players, &injuries, as_of),
    })))
}

#[derive(Debug, Serialize)]
pub struct SquadDisciplineRow {
    pub player_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    #[serde(flatten)]
    pub summary: DisciplinarySummary,
    pub risk_label: &'static str,
}

/// Per-player card counts, highest risk first
pub async fn discipline(req: HttpRequest, state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    authorize(&req, &state, "/discipline").await?;

    let (players, records) = futures::try_join!(
        state.repository.players(),
        state.repository.discipline(None)
    )?;
    let names: HashMap<&str, String> = players
        .iter()
        .map(|p| (p.id.as_str(), p.full_name()))
        .collect();

    let mut rows: Vec<SquadDisciplineRow> = discipline_by_player(&records)
        .into_iter()
        .map(|(player_id, summary)| SquadDisciplineRow {
            player_name: names.get(player_id.as_str()).cloned(),
            risk_label: summary.risk.label(),
            player_id,
            summary,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.summary
            .risk
            .cmp(&a.summary.risk)
            .then(b.summary.total_cards.cmp(&a.summary.total_cards))
            .then(a.player_id.cmp(&b.player_id))
    });

    Ok(HttpResponse::Ok().json(ApiResponse::success(rows)))
}

/// Landing-page figures
pub async fn dashboard_summary(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<AsOfQuery>,
) -> ActixResult<HttpResponse> {
    authorize(&req, &state, "/dashboard").await?;

    let repo = &state.repository;
    let (players, injuries, discipline, match_stats, attendance, matches, goals) = futures::try_join!(
        repo.players(),
        repo.injuries(None),
        repo.discipline(None),
        repo.match_stats(None),
        repo.attendance(None),
        repo.matches(),
        repo.goals(None),
    )?;

    let summary = summarize(
        SummaryInputs {
            players: &players,
            injuries: &injuries,
            discipline: &discipline,
            match_stats: &match_stats,
            attendance: &attendance,
            matches: &matches,
            goals: &goals,
        },
        query.date(),
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(summary)))
}
