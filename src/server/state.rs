//! Application state shared across HTTP handlers

use crate::auth::{AccessControl, ActorProfile, GuardPaths, JwtVerifier, stand_in_profile};
use crate::config::Config;
use crate::core::{Backend, ClubRepository};
use std::sync::Arc;
use tracing::{info, warn};

/// HTTP server state shared across handlers
///
/// Everything here is read-only after startup; per-request work never
/// writes to it.
#[derive(Clone)]
pub struct AppState {
    /// Dashboard configuration (shared read-only)
    pub config: Arc<Config>,
    /// Role registry and evaluator
    pub access: Arc<AccessControl>,
    /// Club data access
    pub repository: ClubRepository,
    /// Bearer token verifier; absent in demo mode
    pub verifier: Option<Arc<JwtVerifier>>,
    /// Development stand-in actor
    pub stand_in: Option<ActorProfile>,
    /// Guard navigation targets
    pub paths: GuardPaths,
}

impl AppState {
    pub fn new(config: Config, backend: Arc<dyn Backend>) -> Self {
        let access = AccessControl::new(config.access());
        let stand_in = stand_in_profile(config.auth());

        let verifier = if config.auth().jwt_secret.is_empty() {
            None
        } else {
            Some(Arc::new(JwtVerifier::new(config.auth())))
        };

        match &stand_in {
            Some(profile) => warn!(
                "Development stand-in active: every request is served as {} ({})",
                profile.id, profile.role
            ),
            None => info!("Sessions are verified from bearer tokens"),
        }

        Self {
            paths: GuardPaths::from(config.access()),
            config: Arc::new(config),
            access: Arc::new(access),
            repository: ClubRepository::new(backend),
            verifier,
            stand_in,
        }
    }

    pub fn demo_mode(&self) -> bool {
        self.stand_in.is_some()
    }

    /// Training sessions counted as full development progress
    pub fn training_target(&self) -> Option<u32> {
        self.config.metrics().training_target_sessions
    }
}
