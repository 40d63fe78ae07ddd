//! Common test utilities for devops-authz
//!
//! - In-memory SQLite database support
//! - Seed fixtures describing a small platform
//! - Assertions over capability matrices

pub mod assertions;
pub mod database;
pub mod fixtures;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::PlatformFixture;

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
