use super::round1;
use super::types::ShootingSummary;
use crate::core::models::PlayerMatchStat;
use std::collections::BTreeMap;

/// Shooting totals and rates across the given match stats
pub fn shot_conversion(stats: &[PlayerMatchStat]) -> ShootingSummary {
    let mut summary = ShootingSummary::default();
    for stat in stats {
        summary.shots = summary.shots.saturating_add(stat.shots);
        summary.shots_on_target = summary.shots_on_target.saturating_add(stat.shots_on_target);
        summary.goals = summary.goals.saturating_add(stat.goals);
    }

    if summary.shots > 0 {
        let shots = f64::from(summary.shots);
        summary.conversion_rate = round1(f64::from(summary.goals) * 100.0 / shots);
        summary.on_target_rate = round1(f64::from(summary.shots_on_target) * 100.0 / shots);
    }

    summary
}

pub fn shot_conversion_by_player(stats: &[PlayerMatchStat]) -> BTreeMap<String, ShootingSummary> {
    let mut grouped: BTreeMap<String, Vec<PlayerMatchStat>> = BTreeMap::new();
    for stat in stats {
        grouped.entry(stat.player_id.clone()).or_default().push(stat.clone());
    }

    grouped
        .into_iter()
        .map(|(player_id, stats)| (player_id, shot_conversion(&stats)))
        .collect()
}
