//! Core data models for the authorization core
//!
//! These are the read-only inputs the permission aggregation works on. They are
//! owned by external stores; a single request reads them and never mutates them.

pub mod collaboration;
pub mod role;


pub use collaboration::*;
pub use role::*;
