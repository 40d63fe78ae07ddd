//! Utility modules
//!
//! - **error**: the crate error type
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
