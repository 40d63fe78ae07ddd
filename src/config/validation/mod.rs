//! Configuration validation
//!
//! The validation is organized into several submodules:
//! - `trait_def`: Core Validate trait definition
//! - `storage_validators`: Storage and database validators
//! - `config_validators`: RBAC and logging validators
//! - `tests`: Test suite for all validators

mod config_validators;
mod storage_validators;
mod trait_def;

pub use trait_def::Validate;
