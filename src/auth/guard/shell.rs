//! Effectful guard shell

use super::decision::{GuardContext, GuardDecision, GuardKind, GuardPaths, Notice, decide};
use crate::auth::rbac::AccessControl;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Performs redirects
pub trait Navigator: Send + Sync {
    fn redirect(&self, to: &str, return_to: Option<&str>);
}

/// Shows transient notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// One navigation to a route
///
/// Re-evaluating the same attempt (e.g. on re-render) reuses its id, which is
/// what keeps notifications to one per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationAttempt {
    pub id: u64,
    pub path: String,
}

/// How many recent attempts keep their "already notified" mark
const NOTIFIED_WINDOW: u64 = 1024;

/// Applies guard decisions through a navigator and a notifier
pub struct RouteGuard {
    access: Arc<AccessControl>,
    paths: GuardPaths,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    next_attempt: AtomicU64,
    notified: Mutex<HashSet<u64>>,
}

impl RouteGuard {
    pub fn new(
        access: Arc<AccessControl>,
        paths: GuardPaths,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            access,
            paths,
            navigator,
            notifier,
            next_attempt: AtomicU64::new(1),
            notified: Mutex::new(HashSet::new()),
        }
    }

    /// Start a new navigation attempt to `path`
    pub fn begin(&self, path: &str) -> NavigationAttempt {
        NavigationAttempt {
            id: self.next_attempt.fetch_add(1, Ordering::Relaxed),
            path: path.to_string(),
        }
    }

    /// Evaluate `attempt` and carry out the result
    pub fn enforce(
        &self,
        kind: GuardKind,
        attempt: &NavigationAttempt,
        ctx: &GuardContext,
    ) -> GuardDecision {
        let decision = decide(kind, &attempt.path, ctx, self.access.registry(), &self.paths);

        match &decision {
            GuardDecision::Redirect(redirect) => {
                debug!("Redirecting {} -> {}", attempt.path, redirect.to);
                self.navigator
                    .redirect(&redirect.to, redirect.return_to.as_deref());
                if let Some(notice) = &redirect.notice {
                    self.notify_once(attempt, notice);
                }
            }
            GuardDecision::Unavailable { message } => {
                let notice = Notice::ProfileUnavailable {
                    message: message.clone(),
                };
                self.notify_once(attempt, &notice);
            }
            GuardDecision::Allow | GuardDecision::Pending => {}
        }

        decision
    }

    fn notify_once(&self, attempt: &NavigationAttempt, notice: &Notice) {
        let mut notified = self.notified.lock();
        if !notified.insert(attempt.id) {
            return;
        }

        let oldest = self
            .next_attempt
            .load(Ordering::Relaxed)
            .saturating_sub(NOTIFIED_WINDOW);
        notified.retain(|id| *id >= oldest);
        drop(notified);

        self.notifier.notify(notice);
    }
}
