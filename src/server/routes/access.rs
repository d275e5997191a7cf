//! Actor and access-decision endpoints

use crate::auth::guard::decide_role;
use crate::auth::rbac::capabilities_for;
use crate::auth::{ActorProfile, Capability, GuardDecision, ProfileState, Role, SessionState};
use crate::server::actor::guard_context;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::DashboardError;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub profile: ActorProfile,
    pub display_name: String,
    pub capabilities: Vec<Capability>,
    /// Registered surfaces the role may open
    pub surfaces: Vec<String>,
    pub demo_mode: bool,
}

/// The signed-in actor, their capabilities and reachable surfaces
pub async fn me(req: HttpRequest, state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let ctx = guard_context(&req, &state).await;

    let profile = match ctx.profile {
        ProfileState::Resolved(profile) => profile,
        ProfileState::Error(message) => return Err(DashboardError::fetch_failure(message).into()),
        ProfileState::Loading | ProfileState::SignedOut => {
            let reason = match ctx.session {
                SessionState::Failed(message) => message,
                _ => "Sign in required".to_string(),
            };
            return Err(DashboardError::unauthorized(reason).into());
        }
    };

    let response = MeResponse {
        display_name: profile.display_name(),
        capabilities: capabilities_for(profile.role),
        surfaces: state
            .access
            .registry()
            .surfaces_for(profile.role)
            .into_iter()
            .map(str::to_string)
            .collect(),
        demo_mode: ctx.demo_mode,
        profile,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

#[derive(Debug, Deserialize)]
pub struct AccessQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct AccessResponse {
    pub path: String,
    pub role: Option<Role>,
    pub decision: GuardDecision,
}

/// Route-guard decision for `path`, as the front end should apply it
pub async fn check_access(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<AccessQuery>,
) -> ActixResult<HttpResponse> {
    let path = query.into_inner().path;
    if path.trim().is_empty() {
        return Err(DashboardError::validation("path is required").into());
    }

    let ctx = guard_context(&req, &state).await;
    let decision = decide_role(&path, &ctx, state.access.registry(), &state.paths);
    debug!("Access check for {}: {:?}", path, decision);

    Ok(HttpResponse::Ok().json(ApiResponse::success(AccessResponse {
        role: ctx.profile.role(),
        path,
        decision,
    })))
}
