//! Profile types

use crate::auth::rbac::Role;
use crate::auth::session::SessionIdentity;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The signed-in actor's club profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorProfile {
    /// Provider user id
    pub id: String,
    /// Club role
    pub role: Role,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Linked squad record for player accounts
    #[serde(default)]
    pub player_id: Option<String>,
}

impl ActorProfile {
    /// Profile for an account with no profile row yet
    pub fn unassigned(identity: &SessionIdentity) -> Self {
        Self {
            id: identity.user_id.clone(),
            role: Role::Unassigned,
            first_name: None,
            last_name: None,
            email: identity.email.clone(),
            player_id: None,
        }
    }

    /// "First Last", falling back to the email or id
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !name.is_empty() {
            name
        } else {
            self.email.clone().unwrap_or_else(|| self.id.clone())
        }
    }
}

/// Resolution state published by a [`ProfileResolver`](super::ProfileResolver)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "detail")]
pub enum ProfileState {
    /// A fetch for the current identity is in flight
    Loading,
    /// Profile for the current identity
    Resolved(ActorProfile),
    /// The fetch failed; the message is safe to show
    Error(String),
    /// No identity is active
    SignedOut,
}

impl ProfileState {
    pub fn profile(&self) -> Option<&ActorProfile> {
        match self {
            ProfileState::Resolved(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.profile().map(|profile| profile.role)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ProfileState::Loading)
    }
}

/// Where profiles come from
///
/// `Ok(None)` means the account has no profile row, which is not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<ActorProfile>>;
}
