//! HTTP server implementation
//!
//! Exposes the access decisions and calculators as a JSON API for the
//! single-page front end.

pub mod actor;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;


pub use server::HttpServer;
pub use state::AppState;
