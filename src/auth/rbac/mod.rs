//! Role-based permission resolution
//!
//! The three components here read the stores and never write to them:
//! [`PermissionAggregator`] builds the capability matrix of a user,
//! [`CollaborationChecker`] answers resource-level collaboration checks and
//! [`ProjectVisibilityResolver`] lists the projects a user may see.

mod actions;
mod aggregator;
mod capability;
mod collaboration;
mod verbs;
mod visibility;

// Re-export public types and structs
pub use actions::{AuthorizedResources, ProjectActions, SystemActions};
pub use aggregator::PermissionAggregator;
pub use capability::{Capability, CapabilitySet};
pub use collaboration::{AuthorizedEnvs, AuthorizedWorkflows, CollaborationChecker};
pub use verbs::{
    PROJECT_VERB_TABLE, PUBLIC_VIEW_CAPABILITIES, ProjectCapability, SYSTEM_VERB_TABLE,
    SystemCapability,
};
pub use visibility::ProjectVisibilityResolver;
