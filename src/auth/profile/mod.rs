//! Actor profile resolution
//!
//! Maps a session identity to the actor's club profile (and so their role),
//! or to a deterministic stand-in when a development override is configured.

mod resolver;
mod types;

pub use resolver::{ProfileResolver, resolve_profile};
pub use types::{ActorProfile, ProfileSource, ProfileState};

#[cfg(test)]
pub use types::MockProfileSource;
