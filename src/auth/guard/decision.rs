//! Pure guard decisions

use crate::auth::profile::ProfileState;
use crate::auth::rbac::{RoleRegistry, has_access};
use crate::auth::session::SessionState;
use crate::config::AccessConfig;
use serde::Serialize;
use tracing::{debug, warn};

/// Well-known navigation targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardPaths {
    /// Sign-in page
    pub login: String,
    /// Where denied actors are sent
    pub default_landing: String,
    /// Used when the default landing itself is denied
    pub access_denied: String,
}

impl Default for GuardPaths {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            default_landing: "/dashboard".to_string(),
            access_denied: "/unauthorized".to_string(),
        }
    }
}

impl From<&AccessConfig> for GuardPaths {
    fn from(config: &AccessConfig) -> Self {
        Self {
            login: config.login_path.clone(),
            default_landing: config.default_landing.clone(),
            access_denied: config.access_denied_path.clone(),
        }
    }
}

/// Everything a guard looks at, passed explicitly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardContext {
    pub session: SessionState,
    pub profile: ProfileState,
    /// A development stand-in actor is active
    pub demo_mode: bool,
}

/// One-time message shown alongside a redirect
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Notice {
    /// The role may not open the requested route
    AccessDenied { path: String },
    /// The auth provider reported an error
    SessionError { message: String },
    /// The profile could not be loaded
    ProfileUnavailable { message: String },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::AccessDenied { path } => {
                format!("You do not have permission to view {}", path)
            }
            Notice::SessionError { message } => format!("Please sign in again: {}", message),
            Notice::ProfileUnavailable { message } => {
                format!("Could not load your profile: {}", message)
            }
        }
    }
}

/// Navigation instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub to: String,
    /// Originating location, for returning after sign-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

/// Outcome of a guard evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "decision")]
pub enum GuardDecision {
    /// Render the route
    Allow,
    /// Resolution in progress: render a neutral loading state
    Pending,
    /// Profile could not be loaded: render a retry affordance
    Unavailable { message: String },
    /// Navigate elsewhere
    Redirect(Redirect),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            GuardDecision::Redirect(redirect) => Some(redirect),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.redirect().and_then(|redirect| redirect.notice.as_ref())
    }
}

/// Which guard variant protects a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    /// Any signed-in actor
    Authenticated,
    /// Signed-in actor whose role the registry allows
    Role,
}

/// Authentication-only guard
pub fn decide_authenticated(path: &str, ctx: &GuardContext, paths: &GuardPaths) -> GuardDecision {
    if ctx.demo_mode {
        return GuardDecision::Allow;
    }

    match &ctx.session {
        SessionState::Loading => GuardDecision::Pending,
        SessionState::Active(_) => GuardDecision::Allow,
        SessionState::SignedOut => GuardDecision::Redirect(Redirect {
            to: paths.login.clone(),
            return_to: Some(path.to_string()),
            notice: None,
        }),
        SessionState::Failed(message) => GuardDecision::Redirect(Redirect {
            to: paths.login.clone(),
            return_to: Some(path.to_string()),
            notice: Some(Notice::SessionError {
                message: message.clone(),
            }),
        }),
    }
}

/// Role guard: authentication plus a registry check
///
/// Surfaces missing from the registry are denied for every role.
pub fn decide_role(
    path: &str,
    ctx: &GuardContext,
    registry: &RoleRegistry,
    paths: &GuardPaths,
) -> GuardDecision {
    let authenticated = decide_authenticated(path, ctx, paths);
    if !authenticated.is_allowed() {
        return authenticated;
    }

    let profile = match &ctx.profile {
        // Session is active but the resolver has not caught up yet
        ProfileState::Loading | ProfileState::SignedOut => return GuardDecision::Pending,
        ProfileState::Error(message) => {
            return GuardDecision::Unavailable {
                message: message.clone(),
            };
        }
        ProfileState::Resolved(profile) => profile,
    };

    let Some(allowed) = registry.lookup(path) else {
        warn!(path, "Route has no access rule, denying");
        return deny(path, paths);
    };

    if has_access(Some(profile.role), allowed) {
        GuardDecision::Allow
    } else {
        debug!("Role {} denied {}", profile.role, path);
        deny(path, paths)
    }
}

/// Dispatch on the guard variant
pub fn decide(
    kind: GuardKind,
    path: &str,
    ctx: &GuardContext,
    registry: &RoleRegistry,
    paths: &GuardPaths,
) -> GuardDecision {
    match kind {
        GuardKind::Authenticated => decide_authenticated(path, ctx, paths),
        GuardKind::Role => decide_role(path, ctx, registry, paths),
    }
}

fn deny(path: &str, paths: &GuardPaths) -> GuardDecision {
    let to = if same_route(path, &paths.default_landing) {
        paths.access_denied.clone()
    } else {
        paths.default_landing.clone()
    };

    GuardDecision::Redirect(Redirect {
        to,
        return_to: None,
        notice: Some(Notice::AccessDenied {
            path: path.to_string(),
        }),
    })
}

fn same_route(a: &str, b: &str) -> bool {
    crate::auth::rbac::normalize_path(a) == crate::auth::rbac::normalize_path(b)
}
