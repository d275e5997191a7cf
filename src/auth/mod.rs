//! Authentication and authorization
//!
//! Session identity, profile resolution, role-based access control and route
//! guards.

pub mod guard;
pub mod jwt;
pub mod profile;
pub mod rbac;
pub mod session;

// Re-export commonly used types
pub use guard::{GuardContext, GuardDecision, GuardKind, GuardPaths, Notice, RouteGuard};
pub use jwt::JwtVerifier;
pub use profile::{ActorProfile, ProfileResolver, ProfileSource, ProfileState};
pub use rbac::{AccessControl, Capability, PermissionCheck, Role, RoleRegistry};
pub use session::{SessionIdentity, SessionProvider, SessionState, WatchSession};

use crate::config::AuthConfig;

/// Development stand-in profile, if one applies
///
/// Honoured only in development; production configs with an override are
/// rejected by validation, and this returns `None` for them regardless.
pub fn stand_in_profile(config: &AuthConfig) -> Option<ActorProfile> {
    if !config.environment.is_development() {
        return None;
    }

    config.dev_override.as_ref().map(|dev| ActorProfile {
        id: dev.user_id.clone(),
        role: dev.role,
        first_name: dev.first_name.clone(),
        last_name: dev.last_name.clone(),
        email: dev.email.clone(),
        player_id: dev.player_id.clone(),
    })
}
