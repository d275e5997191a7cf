//! Common test utilities for squadboard
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::fixtures::{SquadFactory, seeded_backend};
//!
//! let backend = seeded_backend();
//! let player = SquadFactory::player("p1", "Ada", "Hale");
//! ```

pub mod fixtures;
pub mod recorders;

pub use fixtures::{SquadFactory, TEST_SECRET, seeded_backend, test_config, token_for};
pub use recorders::{RecordingNavigator, RecordingNotifier};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
