//! Per-request actor resolution and guard enforcement

use crate::auth::profile::resolve_profile;
use crate::auth::rbac::can_view_player_data;
use crate::auth::guard::decide_role;
use crate::auth::{ActorProfile, GuardContext, GuardDecision, SessionState};
use crate::server::AppState;
use crate::utils::error::{DashboardError, Result};
use actix_web::{HttpMessage, HttpRequest};
use tracing::debug;

/// Session stored by the session middleware, signed out if absent
pub fn session_of(req: &HttpRequest) -> SessionState {
    req.extensions()
        .get::<SessionState>()
        .cloned()
        .unwrap_or(SessionState::SignedOut)
}

/// Resolve the actor and assemble the guard context
pub async fn guard_context(req: &HttpRequest, state: &AppState) -> GuardContext {
    let session = session_of(req);
    let profile = resolve_profile(
        &state.repository,
        state.stand_in.as_ref(),
        session.identity(),
    )
    .await;

    GuardContext {
        session,
        profile,
        demo_mode: state.demo_mode(),
    }
}

/// Require a signed-in actor whose role may open `surface`
pub async fn authorize(req: &HttpRequest, state: &AppState, surface: &str) -> Result<ActorProfile> {
    let ctx = guard_context(req, state).await;
    let decision = decide_role(surface, &ctx, state.access.registry(), &state.paths);
    into_profile(decision, ctx, state, surface)
}

/// [`authorize`], then restrict own-data roles to their linked player
pub async fn authorize_player(
    req: &HttpRequest,
    state: &AppState,
    surface: &str,
    player_id: &str,
) -> Result<ActorProfile> {
    let profile = authorize(req, state, surface).await?;

    if can_view_player_data(Some(profile.role), profile.player_id.as_deref(), player_id) {
        Ok(profile)
    } else {
        debug!("{} ({}) may not read player {}", profile.id, profile.role, player_id);
        Err(DashboardError::access_denied(format!("player {}", player_id)))
    }
}

fn into_profile(
    decision: GuardDecision,
    ctx: GuardContext,
    state: &AppState,
    surface: &str,
) -> Result<ActorProfile> {
    match decision {
        GuardDecision::Allow => ctx
            .profile
            .profile()
            .cloned()
            .ok_or_else(|| DashboardError::unauthorized("Sign in required")),
        GuardDecision::Pending => Err(DashboardError::unauthorized("Session is not established")),
        GuardDecision::Unavailable { message } => Err(DashboardError::fetch_failure(message)),
        GuardDecision::Redirect(redirect) if redirect.to == state.paths.login => {
            Err(DashboardError::unauthorized(
                redirect
                    .notice
                    .map(|notice| notice.message())
                    .unwrap_or_else(|| "Sign in required".to_string()),
            ))
        }
        // Re-run the registry check to tell a gap from a plain denial
        GuardDecision::Redirect(_) => match state.access.authorize_route(ctx.profile.role(), surface) {
            Err(e) => Err(e),
            Ok(_) => Err(DashboardError::access_denied(surface.to_string())),
        },
    }
}
