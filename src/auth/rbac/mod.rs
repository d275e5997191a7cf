//! Role-Based Access Control (RBAC) system
//!
//! Roles, capabilities, the route registry and the pure access evaluator.

mod evaluator;
mod registry;
mod system;
mod types;

// Re-export public types and functions
pub use evaluator::{
    can_compare_players, can_manage_users, can_view_advanced_analytics, can_view_all_players,
    can_view_player_data, can_view_team_analytics, capabilities_for, has_access, has_capability,
    is_own_data_only,
};
pub(crate) use registry::normalize_path;
pub use registry::{RoleRegistry, default_routes};
pub use system::AccessControl;
pub use types::{Capability, DenialReason, PermissionCheck, Role, UnknownRole};
