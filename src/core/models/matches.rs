use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fixture the club played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub opponent: String,
    pub match_date: NaiveDate,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub home: Option<bool>,
    #[serde(default)]
    pub goals_for: Option<u32>,
    #[serde(default)]
    pub goals_against: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub match_id: String,
    pub player_id: String,
    #[serde(default)]
    pub minute: Option<u32>,
    #[serde(default)]
    pub assist_player_id: Option<String>,
}

/// Per-player, per-match counting stats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerMatchStat {
    pub player_id: String,
    pub match_id: String,
    #[serde(default)]
    pub minutes_played: u32,
    #[serde(default)]
    pub shots: u32,
    #[serde(default)]
    pub shots_on_target: u32,
    #[serde(default)]
    pub goals: u32,
}
