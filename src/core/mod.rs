//! Core functionality for the dashboard
//!
//! Club record models, the backend query client, typed repository fetches
//! and the derived-metric calculators.

pub mod analytics;
pub mod backend;
pub mod models;
pub mod repository;

pub use backend::{Backend, MemoryBackend, Query, RestBackend};
pub use repository::ClubRepository;
