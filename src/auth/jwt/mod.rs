//! JWT session token handling
//!
//! Verifies access tokens issued by the hosted auth provider and turns them
//! into session identities.

mod handler;
pub mod types;


pub use types::{Claims, JwtVerifier};
