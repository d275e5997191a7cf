use super::types::{DisciplinarySummary, RiskLevel};
use crate::core::models::{CardType, DisciplinaryRecord};
use std::collections::BTreeMap;

const CRITICAL_TOTAL: u32 = 5;
const AT_RISK_TOTAL: u32 = 4;

/// Any red, or five cards in total, is critical; exactly four is at risk
pub fn risk_level(yellow_cards: u32, red_cards: u32) -> RiskLevel {
    let total = yellow_cards + red_cards;
    if red_cards > 0 || total >= CRITICAL_TOTAL {
        RiskLevel::Critical
    } else if total == AT_RISK_TOTAL {
        RiskLevel::AtRisk
    } else {
        RiskLevel::Safe
    }
}

/// Card counts and risk for one set of records
///
/// Unrecognised card types are ignored.
pub fn summarize_discipline(records: &[DisciplinaryRecord]) -> DisciplinarySummary {
    let (yellow_cards, red_cards) =
        records
            .iter()
            .filter_map(DisciplinaryRecord::card)
            .fold((0, 0), |(y, r), card| match card {
                CardType::Yellow => (y + 1, r),
                CardType::Red => (y, r + 1),
            });

    DisciplinarySummary {
        yellow_cards,
        red_cards,
        total_cards: yellow_cards + red_cards,
        risk: risk_level(yellow_cards, red_cards),
    }
}

/// Per-player summaries, keyed by player id
pub fn discipline_by_player(records: &[DisciplinaryRecord]) -> BTreeMap<String, DisciplinarySummary> {
    let mut grouped: BTreeMap<&str, Vec<DisciplinaryRecord>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.player_id.as_str())
            .or_default()
            .push(record.clone());
    }

    grouped
        .into_iter()
        .map(|(player_id, records)| (player_id.to_string(), summarize_discipline(&records)))
        .collect()
}
