//! # devops-authz
//!
//! Permission aggregation core for a multi-tenant DevOps platform.
//!
//! A user's role bindings, the rules of the roles they reference, public
//! projects and collaboration-mode grants are merged into one answer per
//! question:
//!
//! - **Capability matrix**: [`AuthorizationService::get_user_auth_info`] returns
//!   either the system-admin short-circuit or per-project action flags plus
//!   system-level flags.
//! - **Collaboration checks**: whether a collaboration instance grants an action
//!   on a named workflow or environment, or on any of them.
//! - **Project visibility**: the projects a user may see, optionally narrowed to
//!   those where a given verb is granted.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use devops_authz::{AuthorizationService, Config, storage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/authz.yaml").await?;
//!     let store = storage::open_store(config.storage()).await?;
//!     let service = AuthorizationService::new(store, config.rbac());
//!
//!     let info = service.get_user_auth_info("alice").await?;
//!     println!("{}", serde_json::to_string_pretty(&info)?);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::AuthorizationService;
pub use auth::rbac::{
    AuthorizedEnvs, AuthorizedResources, AuthorizedWorkflows, ProjectActions, ProjectCapability,
    SystemActions, SystemCapability,
};
pub use config::Config;
pub use core::models::{
    CollaborationInstance, CollaborationMode, GENERAL_NAMESPACE, Role, RoleBinding, Rule,
    WILDCARD,
};
pub use storage::{AuthzStore, InMemoryStore, SeedData};
pub use utils::error::{AuthzError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build information for version output
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info() {
        let info = build_info();
        assert!(!info.version.is_empty());
        assert_eq!(info.version, VERSION);
        assert!(!info.git_hash.is_empty());
    }

    #[test]
    fn test_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(NAME, "devops-authz");
        assert_eq!(DESCRIPTION, env!("CARGO_PKG_DESCRIPTION"));
    }
}
