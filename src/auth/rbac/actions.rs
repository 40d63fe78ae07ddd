//! Capability matrices returned by the permission aggregator

use super::capability::CapabilitySet;
use super::verbs::{PUBLIC_VIEW_CAPABILITIES, ProjectCapability, SystemCapability};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Per-project action matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectActions {
    /// Set when the user holds the project admin role in this project.
    ///
    /// The flag is recorded as-is; it does not switch on any capability.
    /// Callers that treat project admins as all-powerful check it themselves.
    pub is_project_admin: bool,
    #[serde(flatten)]
    pub capabilities: CapabilitySet<ProjectCapability>,
}

impl ProjectActions {
    /// OR the capability behind `verb` into the matrix.
    ///
    /// Returns `false` when the verb is not a project verb.
    pub fn grant_verb(&mut self, verb: &str) -> bool {
        match ProjectCapability::from_verb(verb) {
            Some(capability) => {
                self.capabilities.insert(capability);
                true
            }
            None => {
                debug!(verb, "ignoring verb without a project capability");
                false
            }
        }
    }

    /// Force the public-project view verbs on
    pub fn grant_public_view(&mut self) {
        self.capabilities.extend(PUBLIC_VIEW_CAPABILITIES);
    }

    pub fn allows(&self, capability: ProjectCapability) -> bool {
        self.capabilities.contains(capability)
    }

    /// OR another matrix into this one, admin flag included
    pub fn merge(&mut self, other: &Self) {
        self.is_project_admin |= other.is_project_admin;
        self.capabilities.merge(&other.capabilities);
    }
}

/// System-wide action matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SystemActions {
    pub capabilities: CapabilitySet<SystemCapability>,
}

impl SystemActions {
    /// OR the capability behind `verb` into the matrix.
    ///
    /// Returns `false` when the verb is not a system verb.
    pub fn grant_verb(&mut self, verb: &str) -> bool {
        match SystemCapability::from_verb(verb) {
            Some(capability) => {
                self.capabilities.insert(capability);
                true
            }
            None => {
                debug!(verb, "ignoring verb without a system capability");
                false
            }
        }
    }

    pub fn allows(&self, capability: SystemCapability) -> bool {
        self.capabilities.contains(capability)
    }
}

/// Everything a user may do, system-wide and per project.
///
/// A system admin carries neither matrix; anyone else carries both. The two
/// constructors are the only way to build a value, so both shapes can never
/// be mixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizedResources {
    is_system_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_actions: Option<SystemActions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_auth_info: Option<HashMap<String, ProjectActions>>,
}

impl AuthorizedResources {
    /// Result for a system admin (or an internal caller)
    pub fn system_admin() -> Self {
        Self {
            is_system_admin: true,
            system_actions: None,
            project_auth_info: None,
        }
    }

    /// Result for a regular user
    pub fn scoped(
        system_actions: SystemActions,
        project_auth_info: HashMap<String, ProjectActions>,
    ) -> Self {
        Self {
            is_system_admin: false,
            system_actions: Some(system_actions),
            project_auth_info: Some(project_auth_info),
        }
    }

    pub fn is_system_admin(&self) -> bool {
        self.is_system_admin
    }

    /// `None` for system admins
    pub fn system_actions(&self) -> Option<&SystemActions> {
        self.system_actions.as_ref()
    }

    /// `None` for system admins
    pub fn project_auth_info(&self) -> Option<&HashMap<String, ProjectActions>> {
        self.project_auth_info.as_ref()
    }

    pub fn project(&self, project_key: &str) -> Option<&ProjectActions> {
        self.project_auth_info
            .as_ref()
            .and_then(|projects| projects.get(project_key))
    }

    /// Answer "can this user do `capability` in `project_key`" from the matrix
    pub fn allows_project(&self, project_key: &str, capability: ProjectCapability) -> bool {
        self.is_system_admin
            || self
                .project(project_key)
                .is_some_and(|actions| actions.allows(capability))
    }

    pub fn allows_system(&self, capability: SystemCapability) -> bool {
        self.is_system_admin
            || self
                .system_actions
                .as_ref()
                .is_some_and(|actions| actions.allows(capability))
    }

    pub fn is_project_admin(&self, project_key: &str) -> bool {
        self.project(project_key)
            .is_some_and(|actions| actions.is_project_admin)
    }
}
