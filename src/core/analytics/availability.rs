use super::percentage;
use super::types::AvailabilitySummary;
use crate::core::models::{Injury, Player};
use chrono::NaiveDate;
use std::collections::HashSet;

/// How much of the squad is fit on `today`
///
/// Injuries for players outside `players` are ignored and a player with
/// several open injuries counts once.
pub fn squad_availability(players: &[Player], injuries: &[Injury], today: NaiveDate) -> AvailabilitySummary {
    let squad: HashSet<&str> = players.iter().map(|p| p.id.as_str()).collect();

    let injured: HashSet<&str> = injuries
        .iter()
        .filter(|injury| injury.sidelines_on(today))
        .map(|injury| injury.player_id.as_str())
        .filter(|id| squad.contains(id))
        .collect();

    let total_players = squad.len();
    let available = total_players - injured.len();

    AvailabilitySummary {
        total_players,
        injured: injured.len(),
        available,
        availability_percentage: percentage(available, total_players),
    }
}
