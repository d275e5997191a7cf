//! Error handling utilities
//!
//! This module provides the dashboard error taxonomy and its HTTP mapping.

pub mod error;

// Re-export commonly used types
pub use error::*;
