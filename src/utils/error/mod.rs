//! Error handling utilities
//!
//! This module defines the error type shared by the authorization core, the
//! storage backends and the configuration layer.

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{AuthzError, Result};
