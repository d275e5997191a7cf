use super::types::{DashboardSummary, RiskLevel};
use super::{attendance_summary, discipline_by_player, shot_conversion, squad_availability};
use crate::core::models::{
    DisciplinaryRecord, Goal, Injury, MatchRecord, Player, PlayerMatchStat, TrainingAttendance,
};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Raw records behind the landing page
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryInputs<'a> {
    pub players: &'a [Player],
    pub injuries: &'a [Injury],
    pub discipline: &'a [DisciplinaryRecord],
    pub match_stats: &'a [PlayerMatchStat],
    pub attendance: &'a [TrainingAttendance],
    pub matches: &'a [MatchRecord],
    pub goals: &'a [Goal],
}

/// Squad-level figures; players are counted once by id and records for ids
/// outside the squad do not affect the risk counts
pub fn dashboard_summary(inputs: SummaryInputs<'_>, today: NaiveDate) -> DashboardSummary {
    let squad: HashSet<&str> = inputs.players.iter().map(|p| p.id.as_str()).collect();
    let risks = discipline_by_player(inputs.discipline);
    let count_risk = |level: RiskLevel| {
        risks
            .iter()
            .filter(|(player_id, s)| s.risk == level && squad.contains(player_id.as_str()))
            .count()
    };
    let availability = squad_availability(inputs.players, inputs.injuries, today);

    DashboardSummary {
        squad_size: availability.total_players,
        availability,
        players_at_risk: count_risk(RiskLevel::AtRisk),
        players_critical: count_risk(RiskLevel::Critical),
        shooting: shot_conversion(inputs.match_stats),
        attendance: attendance_summary(inputs.attendance),
        matches_played: inputs.matches.iter().filter(|m| m.match_date <= today).count(),
        goals_scored: inputs.goals.len(),
    }
}
