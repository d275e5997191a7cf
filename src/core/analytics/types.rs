//! Calculator output types

use serde::{Deserialize, Serialize};

/// Suspension risk derived from a player's cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    AtRisk,
    Critical,
}

impl RiskLevel {
    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::AtRisk => "AT RISK",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplinarySummary {
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub total_cards: u32,
    pub risk: RiskLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySummary {
    pub total_players: usize,
    pub injured: usize,
    pub available: usize,
    /// Available over total, one decimal
    pub availability_percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShootingSummary {
    pub shots: u32,
    pub shots_on_target: u32,
    pub goals: u32,
    /// Goals over shots, percent
    pub conversion_rate: f64,
    /// Shots on target over shots, percent
    pub on_target_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub sessions: usize,
    pub attended: usize,
    pub absent: usize,
    pub excused: usize,
    /// Attended over non-excused sessions, percent
    pub attendance_rate: f64,
}

/// A metric that may not have a data source yet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "value")]
pub enum MetricValue {
    Computed(f64),
    NotImplemented,
}

impl MetricValue {
    pub fn value(&self) -> Option<f64> {
        match self {
            MetricValue::Computed(v) => Some(*v),
            MetricValue::NotImplemented => None,
        }
    }
}

/// Squad-level figures for the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub squad_size: usize,
    pub availability: AvailabilitySummary,
    pub players_at_risk: usize,
    pub players_critical: usize,
    pub shooting: ShootingSummary,
    pub attendance: AttendanceSummary,
    pub matches_played: usize,
    pub goals_scored: usize,
}
