//! Session state and the provider seam
//!
//! The hosted auth provider owns sign-in and sign-out. This module only models
//! what the rest of the crate needs to know about it: who the actor is, and
//! whether that is still being worked out.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

/// Identity of an authenticated actor, as issued by the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// Provider user id (`sub`)
    pub user_id: String,
    /// Email, when the provider exposes it
    pub email: Option<String>,
}

impl SessionIdentity {
    pub fn new<S: Into<String>>(user_id: S) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
        }
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Session as seen by guards and resolvers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "detail")]
pub enum SessionState {
    /// The provider has not reported yet
    Loading,
    /// No one is signed in
    SignedOut,
    /// An actor is signed in
    Active(SessionIdentity),
    /// The provider reported an error
    Failed(String),
}

impl SessionState {
    pub fn identity(&self) -> Option<&SessionIdentity> {
        match self {
            SessionState::Active(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }
}

/// Source of session identity with change notification
pub trait SessionProvider: Send + Sync {
    /// Current session snapshot
    fn current(&self) -> SessionState;

    /// Receiver notified on sign-in, sign-out and errors
    fn subscribe(&self) -> watch::Receiver<SessionState>;
}

/// In-process session provider backed by a watch channel
///
/// The front end (or a test) pushes auth events in; resolvers subscribe.
#[derive(Debug)]
pub struct WatchSession {
    sender: watch::Sender<SessionState>,
}

impl WatchSession {
    /// New provider in the `Loading` state
    pub fn new() -> Self {
        let (sender, _) = watch::channel(SessionState::Loading);
        Self { sender }
    }

    pub fn sign_in(&self, identity: SessionIdentity) {
        debug!("Session signed in: {}", identity.user_id);
        self.sender.send_replace(SessionState::Active(identity));
    }

    pub fn sign_out(&self) {
        debug!("Session signed out");
        self.sender.send_replace(SessionState::SignedOut);
    }

    pub fn fail<S: Into<String>>(&self, message: S) {
        self.sender.send_replace(SessionState::Failed(message.into()));
    }
}

impl Default for WatchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProvider for WatchSession {
    fn current(&self) -> SessionState {
        self.sender.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.sender.subscribe()
    }
}
