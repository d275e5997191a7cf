//! Profile resolver state machine

use super::types::{ActorProfile, ProfileSource, ProfileState};
use crate::auth::session::{SessionIdentity, SessionState};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Resolve the profile for one identity
///
/// A stand-in profile short-circuits without touching `source`. A profile
/// row belonging to someone other than `identity` is rejected.
pub async fn resolve_profile(
    source: &dyn ProfileSource,
    stand_in: Option<&ActorProfile>,
    identity: Option<&SessionIdentity>,
) -> ProfileState {
    if let Some(profile) = stand_in {
        return ProfileState::Resolved(profile.clone());
    }

    let Some(identity) = identity else {
        return ProfileState::SignedOut;
    };

    match source.fetch_profile(&identity.user_id).await {
        Ok(Some(profile)) if profile.id == identity.user_id => ProfileState::Resolved(profile),
        Ok(Some(profile)) => {
            warn!(
                expected = %identity.user_id,
                received = %profile.id,
                "Profile source returned a profile for a different user"
            );
            ProfileState::Error("Profile does not match the signed-in user".to_string())
        }
        Ok(None) => {
            info!("No profile row for user {}, treating as unassigned", identity.user_id);
            ProfileState::Resolved(ActorProfile::unassigned(identity))
        }
        Err(e) => {
            warn!("Failed to fetch profile for {}: {}", identity.user_id, e);
            ProfileState::Error(e.to_string())
        }
    }
}

#[derive(Debug, Default)]
struct IdentityTracker {
    identity: Option<SessionIdentity>,
    generation: u64,
}

/// Owns the profile state for one session
///
/// Every identity change bumps a generation counter. A fetch remembers the
/// generation it started under and its result is dropped if the counter has
/// moved on, so a slow fetch for a previous actor can never overwrite the
/// current one.
pub struct ProfileResolver {
    source: Arc<dyn ProfileSource>,
    stand_in: Option<ActorProfile>,
    tracker: Mutex<IdentityTracker>,
    state: watch::Sender<ProfileState>,
}

impl std::fmt::Debug for ProfileResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileResolver")
            .field("stand_in", &self.stand_in.is_some())
            .field("state", &*self.state.borrow())
            .finish()
    }
}

impl ProfileResolver {
    /// Create a resolver; with a stand-in it starts out resolved
    pub fn new(source: Arc<dyn ProfileSource>, stand_in: Option<ActorProfile>) -> Self {
        let initial = match &stand_in {
            Some(profile) => {
                info!("Using development stand-in profile {}", profile.id);
                ProfileState::Resolved(profile.clone())
            }
            None => ProfileState::Loading,
        };
        let (state, _) = watch::channel(initial);

        Self {
            source,
            stand_in,
            tracker: Mutex::new(IdentityTracker::default()),
            state,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> ProfileState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every published state
    pub fn subscribe(&self) -> watch::Receiver<ProfileState> {
        self.state.subscribe()
    }

    /// Identity the resolver is currently tracking
    pub fn current_identity(&self) -> Option<SessionIdentity> {
        self.tracker.lock().identity.clone()
    }

    /// Switch to `identity` and resolve its profile
    ///
    /// The previous profile is cleared before the fetch starts.
    pub async fn set_identity(&self, identity: Option<SessionIdentity>) {
        if self.stand_in.is_some() {
            return;
        }

        let generation = {
            let mut tracker = self.tracker.lock();
            if tracker.identity == identity && self.state.borrow().profile().is_some() {
                return;
            }
            tracker.identity = identity.clone();
            tracker.generation += 1;

            let placeholder = if identity.is_some() {
                ProfileState::Loading
            } else {
                ProfileState::SignedOut
            };
            self.state.send_replace(placeholder);
            tracker.generation
        };

        if let Some(identity) = identity {
            self.fetch(generation, identity).await;
        }
    }

    /// Re-fetch the profile for the current identity
    pub async fn refresh(&self) {
        if self.stand_in.is_some() {
            return;
        }

        let (generation, identity) = {
            let mut tracker = self.tracker.lock();
            tracker.generation += 1;
            (tracker.generation, tracker.identity.clone())
        };

        match identity {
            Some(identity) => {
                self.publish_if_current(generation, ProfileState::Loading);
                self.fetch(generation, identity).await;
            }
            None => {
                self.publish_if_current(generation, ProfileState::SignedOut);
            }
        }
    }

    /// Apply a session snapshot from the auth provider
    pub async fn apply_session(&self, session: &SessionState) {
        match session {
            SessionState::Active(identity) => self.set_identity(Some(identity.clone())).await,
            SessionState::SignedOut => self.set_identity(None).await,
            SessionState::Loading => self.invalidate(ProfileState::Loading),
            SessionState::Failed(message) => self.invalidate(ProfileState::Error(message.clone())),
        }
    }

    /// Follow a session channel until its sender is dropped
    pub async fn run(&self, mut session: watch::Receiver<SessionState>) {
        let initial = session.borrow_and_update().clone();
        self.apply_session(&initial).await;

        while session.changed().await.is_ok() {
            let next = session.borrow_and_update().clone();
            self.apply_session(&next).await;
        }

        debug!("Session channel closed, profile resolver stopping");
    }

    /// Forget the current identity and publish `state`
    fn invalidate(&self, state: ProfileState) {
        if self.stand_in.is_some() {
            return;
        }

        let mut tracker = self.tracker.lock();
        tracker.identity = None;
        tracker.generation += 1;
        self.state.send_replace(state);
    }

    async fn fetch(&self, generation: u64, identity: SessionIdentity) {
        let state = resolve_profile(self.source.as_ref(), None, Some(&identity)).await;
        self.publish_if_current(generation, state);
    }

    fn publish_if_current(&self, generation: u64, state: ProfileState) -> bool {
        let tracker = self.tracker.lock();
        if tracker.generation != generation {
            debug!(
                stale = generation,
                current = tracker.generation,
                "Discarding profile result for a superseded identity"
            );
            return false;
        }

        self.state.send_replace(state);
        true
    }
}
