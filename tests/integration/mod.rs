//! Integration tests for devops-authz
//!
//! These tests drive the public API over real stores: the in-memory store and
//! an in-memory SQLite database.

pub mod config_tests;
pub mod database_tests;
pub mod service_tests;
