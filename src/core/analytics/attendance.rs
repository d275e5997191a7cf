use super::types::{AttendanceSummary, MetricValue};
use super::{percentage, round1};
use crate::core::models::{AttendanceStatus, TrainingAttendance};

pub fn attendance_summary(records: &[TrainingAttendance]) -> AttendanceSummary {
    let mut summary = AttendanceSummary {
        sessions: records.len(),
        ..Default::default()
    };

    for record in records {
        match record.status {
            AttendanceStatus::Attended => summary.attended += 1,
            AttendanceStatus::Absent => summary.absent += 1,
            AttendanceStatus::Excused => summary.excused += 1,
        }
    }

    summary.attendance_rate = percentage(summary.attended, summary.sessions - summary.excused);
    summary
}

/// Attended sessions as a share of the configured target, capped at 100
///
/// Without a target there is no meaningful figure to show.
pub fn development_progress(records: &[TrainingAttendance], target_sessions: Option<u32>) -> MetricValue {
    let Some(target) = target_sessions.filter(|t| *t > 0) else {
        return MetricValue::NotImplemented;
    };

    let attended = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Attended)
        .count();

    let pct = attended as f64 * 100.0 / f64::from(target);
    MetricValue::Computed(round1(pct.min(100.0)))
}
