//! Pure access evaluation
//!
//! Nothing here performs I/O or keeps state; every answer is a lookup over
//! the role list it is given.

use super::types::{Capability, Role};

/// Whether `role` is one of `allowed_roles`
///
/// An absent role never has access, whatever the list contains.
pub fn has_access(role: Option<Role>, allowed_roles: &[Role]) -> bool {
    match role {
        Some(role) => allowed_roles.contains(&role),
        None => false,
    }
}

/// Whether `role` holds `capability`
pub fn has_capability(role: Option<Role>, capability: Capability) -> bool {
    has_access(role, capability.allowed_roles())
}

pub fn can_view_all_players(role: Option<Role>) -> bool {
    has_capability(role, Capability::ViewAllPlayers)
}

pub fn is_own_data_only(role: Option<Role>) -> bool {
    has_capability(role, Capability::OwnDataOnly)
}

pub fn can_compare_players(role: Option<Role>) -> bool {
    has_capability(role, Capability::ComparePlayers)
}

pub fn can_view_team_analytics(role: Option<Role>) -> bool {
    has_capability(role, Capability::ViewTeamAnalytics)
}

pub fn can_view_advanced_analytics(role: Option<Role>) -> bool {
    has_capability(role, Capability::ViewAdvancedAnalytics)
}

pub fn can_manage_users(role: Option<Role>) -> bool {
    has_capability(role, Capability::ManageUsers)
}

/// Whether an actor may read data scoped to `target_player_id`
///
/// Squad-wide roles may read any player. Own-data roles may read only the
/// player record linked to their account.
pub fn can_view_player_data(
    role: Option<Role>,
    own_player_id: Option<&str>,
    target_player_id: &str,
) -> bool {
    if can_view_all_players(role) {
        return true;
    }
    is_own_data_only(role) && own_player_id == Some(target_player_id)
}

/// All capabilities held by `role`
pub fn capabilities_for(role: Role) -> Vec<Capability> {
    Capability::ALL
        .into_iter()
        .filter(|capability| capability.allowed_roles().contains(&role))
        .collect()
}
