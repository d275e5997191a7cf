//! Session middleware
//!
//! Turns the bearer token into a [`SessionState`] stored in the request
//! extensions. It never rejects a request; guards downstream decide what a
//! missing or failed session means for the route.

use super::helpers::extract_bearer;
use crate::auth::{SessionIdentity, SessionState};
use crate::server::AppState;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{HttpMessage, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, warn};

/// Session middleware for Actix-web
pub struct SessionMiddleware;

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = SessionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService { service }))
    }
}

/// Service implementation for session middleware
pub struct SessionMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let session = match req.app_data::<web::Data<AppState>>() {
            Some(state) => session_for(&req, state),
            None => SessionState::SignedOut,
        };

        req.extensions_mut().insert(session);
        Box::pin(self.service.call(req))
    }
}

fn session_for(req: &ServiceRequest, state: &AppState) -> SessionState {
    if let Some(stand_in) = &state.stand_in {
        return SessionState::Active(SessionIdentity {
            user_id: stand_in.id.clone(),
            email: stand_in.email.clone(),
        });
    }

    let Some(token) = extract_bearer(req.headers()) else {
        return SessionState::SignedOut;
    };

    let Some(verifier) = &state.verifier else {
        warn!("Bearer token presented but no verifier is configured");
        return SessionState::Failed("Token verification is not configured".to_string());
    };

    match verifier.verify_session(&token) {
        Ok(identity) => {
            debug!("Session active for {}", identity.user_id);
            SessionState::Active(identity)
        }
        Err(e) => {
            debug!("Rejected session token: {}", e);
            SessionState::Failed("Invalid or expired session token".to_string())
        }
    }
}
