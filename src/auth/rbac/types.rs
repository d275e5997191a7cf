//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Actor category controlling feature visibility
///
/// The set is closed. Roles only change through an administrative action
/// outside this crate, so a value is fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Club administrator
    Admin,
    /// Board and executive staff
    Management,
    /// Head of performance
    PerformanceDirector,
    /// Data and video analysts
    Analyst,
    /// Coaching staff
    Coach,
    /// Squad member, sees own data only
    Player,
    /// Signed-up account that has not been given a role yet
    Unassigned,
}

impl Role {
    /// Every role, in declaration order
    pub const ALL: [Role; 7] = [
        Role::Admin,
        Role::Management,
        Role::PerformanceDirector,
        Role::Analyst,
        Role::Coach,
        Role::Player,
        Role::Unassigned,
    ];

    /// Every role except `Unassigned`
    pub const ASSIGNED: [Role; 6] = [
        Role::Admin,
        Role::Management,
        Role::PerformanceDirector,
        Role::Analyst,
        Role::Coach,
        Role::Player,
    ];

    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Management => "management",
            Role::PerformanceDirector => "performance_director",
            Role::Analyst => "analyst",
            Role::Coach => "coach",
            Role::Player => "player",
            Role::Unassigned => "unassigned",
        }
    }

    /// Parse a role read from external data; anything unknown is `None`
    pub fn parse_lenient(value: &str) -> Option<Role> {
        value.parse().ok()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string is not one of the known roles
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// A gated feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Browse the whole squad
    ViewAllPlayers,
    /// Restricted to the actor's own player record
    OwnDataOnly,
    /// Side-by-side player comparison
    ComparePlayers,
    /// Team-level analytics widgets
    ViewTeamAnalytics,
    /// Advanced analytics (xG models, load monitoring)
    ViewAdvancedAnalytics,
    /// User administration
    ManageUsers,
}

impl Capability {
    /// Every capability
    pub const ALL: [Capability; 6] = [
        Capability::ViewAllPlayers,
        Capability::OwnDataOnly,
        Capability::ComparePlayers,
        Capability::ViewTeamAnalytics,
        Capability::ViewAdvancedAnalytics,
        Capability::ManageUsers,
    ];

    /// The fixed set of roles that hold this capability
    pub fn allowed_roles(&self) -> &'static [Role] {
        use Role::*;

        match self {
            Capability::ViewAllPlayers => &[Admin, Management, PerformanceDirector, Analyst, Coach],
            Capability::OwnDataOnly => &[Player],
            Capability::ComparePlayers => &[Admin, PerformanceDirector, Analyst, Coach],
            Capability::ViewTeamAnalytics => {
                &[Admin, Management, PerformanceDirector, Analyst, Coach]
            }
            Capability::ViewAdvancedAnalytics => &[Admin, PerformanceDirector, Analyst],
            Capability::ManageUsers => &[Admin],
        }
    }

    /// Human readable name
    pub fn description(&self) -> &'static str {
        match self {
            Capability::ViewAllPlayers => "View all players",
            Capability::OwnDataOnly => "View own data only",
            Capability::ComparePlayers => "Compare players",
            Capability::ViewTeamAnalytics => "View team analytics",
            Capability::ViewAdvancedAnalytics => "View advanced analytics",
            Capability::ManageUsers => "Manage users",
        }
    }
}

/// Why a check was denied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DenialReason {
    /// No role was available for the actor
    NoRole,
    /// The role is not in the allowed set
    RoleNotPermitted { role: Role },
    /// The surface has no registry entry
    NotRegistered { path: String },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::NoRole => write!(f, "no role resolved for actor"),
            DenialReason::RoleNotPermitted { role } => write!(f, "role {} is not permitted", role),
            DenialReason::NotRegistered { path } => {
                write!(f, "no access rule registered for {}", path)
            }
        }
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Role that was evaluated
    pub role: Option<Role>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<DenialReason>,
}

impl PermissionCheck {
    pub(super) fn granted(role: Role) -> Self {
        Self {
            granted: true,
            role: Some(role),
            denial_reason: None,
        }
    }

    pub(super) fn denied(role: Option<Role>, reason: DenialReason) -> Self {
        Self {
            granted: false,
            role,
            denial_reason: Some(reason),
        }
    }

    /// Whether the denial came from a missing registry entry
    pub fn is_configuration_gap(&self) -> bool {
        matches!(self.denial_reason, Some(DenialReason::NotRegistered { .. }))
    }
}
