//! Route guards
//!
//! The decision is a pure function of the route, the session and the profile
//! state. [`RouteGuard`] is the thin shell that turns a decision into a
//! navigation and a notification.

mod decision;
mod shell;

pub use decision::{
    GuardContext, GuardDecision, GuardKind, GuardPaths, Notice, Redirect, decide,
    decide_authenticated, decide_role,
};
pub use shell::{NavigationAttempt, Navigator, Notifier, RouteGuard};
