//! Test fixtures and data factories
//!
//! All factories create real records, not mocks.

use chrono::NaiveDate;
use serde_json::{Value, json};
use squadboard::Config;
use squadboard::auth::{JwtVerifier, SessionIdentity};
use squadboard::core::MemoryBackend;
use squadboard::core::models::{
    AttendanceStatus, DisciplinaryRecord, Injury, InjuryStatus, Player, PlayerMatchStat,
    TrainingAttendance,
};

/// JWT secret shared by `test_config` and `token_for`
pub const TEST_SECRET: &str = "integration-secret-with-at-least-32-chars";

/// Factory for club records
pub struct SquadFactory;

impl SquadFactory {
    pub fn player(id: &str, first: &str, last: &str) -> Player {
        Player {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            position: None,
            squad_number: None,
            date_of_birth: None,
            nationality: None,
        }
    }

    pub fn card(player_id: &str, card_type: &str) -> DisciplinaryRecord {
        DisciplinaryRecord {
            player_id: player_id.to_string(),
            card_type: card_type.to_string(),
            match_id: None,
        }
    }

    pub fn cards(player_id: &str, yellow: usize, red: usize) -> Vec<DisciplinaryRecord> {
        let mut records = vec![Self::card(player_id, "yellow"); yellow];
        records.extend(vec![Self::card(player_id, "red"); red]);
        records
    }

    pub fn injury(player_id: &str, status: InjuryStatus, expected_return: Option<NaiveDate>) -> Injury {
        Injury {
            id: format!("injury-{}", player_id),
            player_id: player_id.to_string(),
            injury_type: None,
            status,
            injury_date: None,
            expected_return,
        }
    }

    pub fn stat(player_id: &str, shots: u32, on_target: u32, goals: u32) -> PlayerMatchStat {
        PlayerMatchStat {
            player_id: player_id.to_string(),
            match_id: "m1".to_string(),
            minutes_played: 90,
            shots,
            shots_on_target: on_target,
            goals,
        }
    }

    pub fn session(player_id: &str, day: u32, status: AttendanceStatus) -> TrainingAttendance {
        TrainingAttendance {
            player_id: player_id.to_string(),
            session_date: date(2024, 3, day),
            status,
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rows<T: serde::Serialize>(records: &[T]) -> Vec<Value> {
    records.iter().map(|r| serde_json::to_value(r).unwrap()).collect()
}

/// A small club: one account per role, three players, some history
pub fn seeded_backend() -> MemoryBackend {
    let players = vec![
        SquadFactory::player("p1", "Ada", "Hale"),
        SquadFactory::player("p2", "Ben", "Zola"),
        SquadFactory::player("p3", "Cleo", "Marsh"),
    ];

    let mut discipline = SquadFactory::cards("p1", 4, 0);
    discipline.extend(SquadFactory::cards("p3", 1, 1));

    MemoryBackend::new()
        .with_table(
            "profiles",
            vec![
                json!({"id": "admin-1", "role": "admin", "first_name": "Ava"}),
                json!({"id": "mgmt-1", "role": "management"}),
                json!({"id": "pd-1", "role": "performance_director"}),
                json!({"id": "analyst-1", "role": "analyst"}),
                json!({"id": "coach-1", "role": "coach", "first_name": "Sam", "last_name": "Reid"}),
                json!({"id": "player-1", "role": "player", "player_id": "p1"}),
                json!({"id": "legacy-1", "role": "scout"}),
            ],
        )
        .with_table("players", rows(&players))
        .with_table("disciplinary_records", rows(&discipline))
        .with_table(
            "injuries",
            rows(&[SquadFactory::injury("p2", InjuryStatus::Active, None)]),
        )
        .with_table(
            "player_match_stats",
            rows(&[
                SquadFactory::stat("p1", 6, 3, 2),
                SquadFactory::stat("p2", 2, 1, 0),
            ]),
        )
        .with_table(
            "training_attendance",
            rows(&[
                SquadFactory::session("p1", 4, AttendanceStatus::Attended),
                SquadFactory::session("p1", 5, AttendanceStatus::Attended),
                SquadFactory::session("p1", 6, AttendanceStatus::Excused),
                SquadFactory::session("p1", 7, AttendanceStatus::Absent),
            ]),
        )
        .with_table(
            "contracts",
            vec![json!({"id": "c1", "player_id": "p1", "end_date": "2026-06-30", "weekly_wage": 12000.0})],
        )
        .with_table(
            "matches",
            vec![json!({"id": "m1", "opponent": "Rovers", "match_date": "2024-03-02"})],
        )
        .with_table(
            "goals",
            vec![
                json!({"id": "g1", "match_id": "m1", "player_id": "p1"}),
                json!({"id": "g2", "match_id": "m1", "player_id": "p1"}),
            ],
        )
}

/// Production-mode config that verifies tokens signed with `TEST_SECRET`
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.dashboard.backend.in_memory = true;
    config.dashboard.auth.jwt_secret = TEST_SECRET.to_string();
    config.dashboard.metrics.training_target_sessions = Some(4);
    config
}

/// Bearer token for `user_id`
pub fn token_for(user_id: &str) -> String {
    JwtVerifier::new(test_config().auth())
        .issue_token(&SessionIdentity::new(user_id), 300)
        .unwrap()
}
