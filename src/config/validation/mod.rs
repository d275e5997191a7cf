//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `config_validators`: server, CORS, backend, metrics and logging
//! - `auth_validators`: authentication and access control
//! - `tests`: test suite for all validators

mod auth_validators;
mod config_validators;
mod trait_def;

pub use trait_def::Validate;
