//! Typed fetches over the backend client


use crate::auth::profile::{ActorProfile, ProfileSource};
use crate::auth::rbac::Role;
use crate::core::backend::{Backend, Query};
use crate::core::models::{
    Contract, DisciplinaryRecord, Goal, Injury, MatchRecord, Player, PlayerMatchStat,
    TrainingAttendance, tables,
};
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Club data access
#[derive(Clone)]
pub struct ClubRepository {
    backend: Arc<dyn Backend>,
}

impl ClubRepository {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    /// Whole squad, by surname
    pub async fn players(&self) -> Result<Vec<Player>> {
        self.fetch(Query::table(tables::PLAYERS).order_by("last_name", true))
            .await
    }

    /// One player; absence is `NotFound`
    pub async fn player(&self, player_id: &str) -> Result<Player> {
        let row = self
            .backend
            .select_one(&Query::table(tables::PLAYERS).eq("id", player_id))
            .await?;
        row.and_then(|row| decode::<Player>(tables::PLAYERS, row))
            .ok_or_else(|| DashboardError::not_found(format!("player {}", player_id)))
    }

    /// Fixtures, most recent first
    pub async fn matches(&self) -> Result<Vec<MatchRecord>> {
        self.fetch(Query::table(tables::MATCHES).order_by("match_date", false))
            .await
    }

    pub async fn goals(&self, player_id: Option<&str>) -> Result<Vec<Goal>> {
        self.fetch(Query::table(tables::GOALS).eq_opt("player_id", player_id))
            .await
    }

    pub async fn match_stats(&self, player_id: Option<&str>) -> Result<Vec<PlayerMatchStat>> {
        self.fetch(Query::table(tables::MATCH_STATS).eq_opt("player_id", player_id))
            .await
    }

    pub async fn injuries(&self, player_id: Option<&str>) -> Result<Vec<Injury>> {
        self.fetch(Query::table(tables::INJURIES).eq_opt("player_id", player_id))
            .await
    }

    pub async fn discipline(&self, player_id: Option<&str>) -> Result<Vec<DisciplinaryRecord>> {
        self.fetch(Query::table(tables::DISCIPLINE).eq_opt("player_id", player_id))
            .await
    }

    pub async fn attendance(&self, player_id: Option<&str>) -> Result<Vec<TrainingAttendance>> {
        self.fetch(
            Query::table(tables::ATTENDANCE)
                .eq_opt("player_id", player_id)
                .order_by("session_date", true),
        )
        .await
    }

    /// A player's contract, if one exists
    pub async fn contract(&self, player_id: &str) -> Result<Option<Contract>> {
        let row = self
            .backend
            .select_one(&Query::table(tables::CONTRACTS).eq("player_id", player_id))
            .await?;
        Ok(row.and_then(|row| decode(tables::CONTRACTS, row)))
    }

    async fn fetch<T: DeserializeOwned>(&self, query: Query) -> Result<Vec<T>> {
        let rows = self.backend.select(&query).await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| decode(&query.table, row))
            .collect())
    }
}

/// Malformed rows are logged and skipped rather than failing the whole fetch
fn decode<T: DeserializeOwned>(table: &str, row: Value) -> Option<T> {
    match serde_json::from_value(row) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(table, error = %e, "Skipping malformed row");
            None
        }
    }
}

/// `profiles` row; the role column is free text upstream
#[derive(Debug, Deserialize)]
struct ProfileRow {
    id: String,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    player_id: Option<String>,
}

impl From<ProfileRow> for ActorProfile {
    fn from(row: ProfileRow) -> Self {
        let role = match row.role.as_deref() {
            Some(raw) => Role::parse_lenient(raw).unwrap_or_else(|| {
                warn!(user_id = %row.id, role = raw, "Unrecognised role on profile, treating as unassigned");
                Role::Unassigned
            }),
            None => Role::Unassigned,
        };

        ActorProfile {
            id: row.id,
            role,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            player_id: row.player_id,
        }
    }
}

#[async_trait]
impl ProfileSource for ClubRepository {
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<ActorProfile>> {
        let row = self
            .backend
            .select_one(&Query::table(tables::PROFILES).eq("id", user_id))
            .await?;

        match row {
            Some(row) => {
                let row: ProfileRow = serde_json::from_value(row)?;
                Ok(Some(row.into()))
            }
            None => Ok(None),
        }
    }
}
