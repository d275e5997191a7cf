//! Derived-metric calculators
//!
//! Pure functions from raw club records to the small summaries the dashboard
//! widgets display. Nothing here touches the backend or holds state, so every
//! call recomputes from its inputs.

mod attendance;
mod availability;
mod discipline;
mod shooting;
mod summary;
mod types;

pub use attendance::{attendance_summary, development_progress};
pub use availability::squad_availability;
pub use discipline::{discipline_by_player, risk_level, summarize_discipline};
pub use shooting::{shot_conversion, shot_conversion_by_player};
pub use summary::{SummaryInputs, dashboard_summary};
pub use types::*;

/// Percentage rounded to one decimal; 0.0 when the denominator is zero
pub(crate) fn percentage(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    round1(numerator as f64 * 100.0 / denominator as f64)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
