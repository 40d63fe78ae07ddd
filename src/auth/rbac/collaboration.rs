//! Collaboration-mode permission checks
//!
//! These checks read the user's collaboration instance for one project and
//! answer from its per-resource verb lists. They never consult roles.

use crate::core::models::{
    CollaborationInstance, CollaborationResource, GrantedResource, collaboration_verbs,
};
use crate::storage::CollaborationInstanceStore;
use crate::utils::error::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Workflows a user may view through collaboration mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthorizedWorkflows {
    /// Product workflows
    pub workflow_names: Vec<String>,
    /// Custom workflows
    pub custom_workflow_names: Vec<String>,
}

/// Environments a user may read or edit through collaboration mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthorizedEnvs {
    pub read_envs: Vec<String>,
    pub edit_envs: Vec<String>,
}

#[derive(Clone)]
pub struct CollaborationChecker {
    instances: Arc<dyn CollaborationInstanceStore>,
}

impl CollaborationChecker {
    pub fn new(instances: Arc<dyn CollaborationInstanceStore>) -> Self {
        Self { instances }
    }

    /// Whether the named resource in `project_key` allows `action` for `user_id`.
    ///
    /// Unknown resource types and names that are not granted answer `false`.
    #[instrument(skip(self))]
    pub async fn check_collaboration_mode_permission(
        &self,
        user_id: &str,
        project_key: &str,
        resource: &str,
        resource_name: &str,
        action: &str,
    ) -> Result<bool> {
        let instance = self.instances.find_instance(user_id, project_key).await?;
        let Some(resource) = CollaborationResource::parse(resource) else {
            debug!("Unknown collaboration resource type");
            return Ok(false);
        };
        Ok(instance.allows_named(resource, resource_name, action))
    }

    /// Whether any resource of the given type in `project_key` allows `action`
    #[instrument(skip(self))]
    pub async fn check_permission_given_by_collaboration_mode(
        &self,
        user_id: &str,
        project_key: &str,
        resource: &str,
        action: &str,
    ) -> Result<bool> {
        let instance = self.instances.find_instance(user_id, project_key).await?;
        let Some(resource) = CollaborationResource::parse(resource) else {
            debug!("Unknown collaboration resource type");
            return Ok(false);
        };
        Ok(instance.allows_any(resource, action))
    }

    /// Workflows the user may view, split into product and custom workflows
    #[instrument(skip(self))]
    pub async fn list_authorized_workflows(
        &self,
        user_id: &str,
        project_key: &str,
    ) -> Result<AuthorizedWorkflows> {
        let instance = self.instances.find_instance(user_id, project_key).await?;
        Ok(authorized_workflows(&instance))
    }

    /// Environments the user may view and those whose config they may edit
    #[instrument(skip(self))]
    pub async fn list_authorized_envs(
        &self,
        user_id: &str,
        project_key: &str,
    ) -> Result<AuthorizedEnvs> {
        let instance = self.instances.find_instance(user_id, project_key).await?;
        Ok(authorized_envs(&instance))
    }
}

fn authorized_workflows(instance: &CollaborationInstance) -> AuthorizedWorkflows {
    let mut result = AuthorizedWorkflows::default();
    for workflow in &instance.workflows {
        if !workflow.allows(collaboration_verbs::VIEW) {
            continue;
        }
        if workflow.is_custom() {
            result.custom_workflow_names.push(workflow.name.clone());
        } else {
            result.workflow_names.push(workflow.name.clone());
        }
    }
    result
}

fn authorized_envs(instance: &CollaborationInstance) -> AuthorizedEnvs {
    let mut result = AuthorizedEnvs::default();
    for env in &instance.products {
        if env.allows(collaboration_verbs::VIEW) {
            result.read_envs.push(env.name.clone());
        }
        if env.allows(collaboration_verbs::EDIT_CONFIG) {
            result.edit_envs.push(env.name.clone());
        }
    }
    result
}
