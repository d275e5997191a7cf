//! Integration tests for squadboard
//!
//! These tests exercise the public API across module boundaries: the
//! registry through configuration, guards over real profile resolution,
//! the repository over HTTP, and the HTTP API end to end.

pub mod access_control_tests;
pub mod analytics_tests;
pub mod backend_tests;
pub mod config_tests;
pub mod guard_tests;
