//! Club record models
//!
//! Rows as the hosted backend returns them. Optional columns default to
//! `None` so partially filled rows still decode.

mod matches;
mod squad;
mod welfare;

pub use matches::{Goal, MatchRecord, PlayerMatchStat};
pub use squad::{Contract, Player};
pub use welfare::{AttendanceStatus, CardType, DisciplinaryRecord, Injury, InjuryStatus, TrainingAttendance};

/// Backend table names
pub mod tables {
    pub const PLAYERS: &str = "players";
    pub const MATCHES: &str = "matches";
    pub const GOALS: &str = "goals";
    pub const MATCH_STATS: &str = "player_match_stats";
    pub const INJURIES: &str = "injuries";
    pub const DISCIPLINE: &str = "disciplinary_records";
    pub const ATTENDANCE: &str = "training_attendance";
    pub const CONTRACTS: &str = "contracts";
    pub const PROFILES: &str = "profiles";
}
