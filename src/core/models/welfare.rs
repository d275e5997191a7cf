//! Injuries, discipline and training attendance

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum InjuryStatus {
    Active,
    Recovering,
    Cleared,
}

impl InjuryStatus {
    /// Case-insensitive, whitespace-trimmed
    pub fn parse(value: &str) -> Option<InjuryStatus> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(InjuryStatus::Active),
            "recovering" => Some(InjuryStatus::Recovering),
            "cleared" => Some(InjuryStatus::Cleared),
            _ => None,
        }
    }
}

impl TryFrom<String> for InjuryStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        InjuryStatus::parse(&value).ok_or_else(|| format!("unknown injury status: {}", value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Injury {
    pub id: String,
    pub player_id: String,
    #[serde(default)]
    pub injury_type: Option<String>,
    pub status: InjuryStatus,
    #[serde(default)]
    pub injury_date: Option<NaiveDate>,
    #[serde(default)]
    pub expected_return: Option<NaiveDate>,
}

impl Injury {
    /// Whether this injury keeps the player out on `today`
    ///
    /// Uncleared injuries count until the day of the expected return.
    pub fn sidelines_on(&self, today: NaiveDate) -> bool {
        if self.status == InjuryStatus::Cleared {
            return false;
        }
        self.expected_return.is_none_or(|back| back > today)
    }
}

/// A card shown to a player
///
/// `card_type` is kept as stored; see [`CardType::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplinaryRecord {
    pub player_id: String,
    pub card_type: String,
    #[serde(default)]
    pub match_id: Option<String>,
}

impl DisciplinaryRecord {
    pub fn card(&self) -> Option<CardType> {
        CardType::parse(&self.card_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Yellow,
    Red,
}

impl CardType {
    /// Case-insensitive, whitespace-trimmed; anything else is `None`
    pub fn parse(value: &str) -> Option<CardType> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("yellow") {
            Some(CardType::Yellow)
        } else if value.eq_ignore_ascii_case("red") {
            Some(CardType::Red)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AttendanceStatus {
    Attended,
    Absent,
    Excused,
}

impl AttendanceStatus {
    /// Case-insensitive, whitespace-trimmed; "present" means attended
    pub fn parse(value: &str) -> Option<AttendanceStatus> {
        match value.trim().to_ascii_lowercase().as_str() {
            "attended" | "present" => Some(AttendanceStatus::Attended),
            "absent" => Some(AttendanceStatus::Absent),
            "excused" => Some(AttendanceStatus::Excused),
            _ => None,
        }
    }
}

impl TryFrom<String> for AttendanceStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AttendanceStatus::parse(&value)
            .ok_or_else(|| format!("unknown attendance status: {}", value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingAttendance {
    pub player_id: String,
    pub session_date: NaiveDate,
    pub status: AttendanceStatus,
}
