//! Configuration data models
//!
//! This module defines all configuration structures used by the authorization core.

#![allow(missing_docs)]

pub mod logging;
pub mod rbac;
pub mod storage;

// Re-export all configuration types
pub use logging::*;
pub use rbac::*;
pub use storage::*;

/// Default database URL, an in-memory SQLite database
pub fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_log_level() -> String {
    "info".to_string()
}
