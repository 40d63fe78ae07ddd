//! Authorization entry points
//!
//! [`AuthorizationService`] bundles the permission aggregator, the
//! collaboration checker and the project visibility resolver over one set of
//! stores, so request handlers hold a single value.

pub mod rbac;


use crate::config::RbacConfig;
use crate::storage::{
    AuthzStore, CollaborationInstanceStore, CollaborationModeStore, RoleBindingStore, RoleStore,
};
use crate::utils::error::Result;
use rbac::{
    AuthorizedEnvs, AuthorizedResources, AuthorizedWorkflows, CollaborationChecker,
    PermissionAggregator, ProjectCapability, ProjectVisibilityResolver,
};
use std::sync::Arc;
use tracing::info;

/// Main authorization service
#[derive(Clone)]
pub struct AuthorizationService {
    aggregator: PermissionAggregator,
    collaboration: CollaborationChecker,
    visibility: ProjectVisibilityResolver,
}

impl AuthorizationService {
    /// Build the service over a complete backend
    pub fn new(store: Arc<dyn AuthzStore>, config: &RbacConfig) -> Self {
        info!(
            backend = store.backend_name(),
            "Initializing authorization service"
        );
        Self::from_parts(
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            &config.public_project_prefix,
        )
    }

    /// Build the service from individual stores
    pub fn from_parts(
        roles: Arc<dyn RoleStore>,
        bindings: Arc<dyn RoleBindingStore>,
        instances: Arc<dyn CollaborationInstanceStore>,
        modes: Arc<dyn CollaborationModeStore>,
        public_project_prefix: &str,
    ) -> Self {
        Self {
            aggregator: PermissionAggregator::new(
                bindings.clone(),
                roles.clone(),
                public_project_prefix,
            ),
            collaboration: CollaborationChecker::new(instances.clone()),
            visibility: ProjectVisibilityResolver::new(
                bindings,
                roles,
                instances,
                modes,
                public_project_prefix,
            ),
        }
    }

    /// Capability matrix of a user; an empty id is an internal caller
    pub async fn get_user_auth_info(&self, user_id: &str) -> Result<AuthorizedResources> {
        self.aggregator.get_user_auth_info(user_id).await
    }

    /// Whether the user may perform `capability` in `project_key`.
    ///
    /// Computes the matrix once; callers with several questions should call
    /// [`Self::get_user_auth_info`] and query the result instead.
    pub async fn can(
        &self,
        user_id: &str,
        project_key: &str,
        capability: ProjectCapability,
    ) -> Result<bool> {
        let info = self.aggregator.get_user_auth_info(user_id).await?;
        Ok(info.allows_project(project_key, capability))
    }

    pub async fn check_collaboration_mode_permission(
        &self,
        user_id: &str,
        project_key: &str,
        resource: &str,
        resource_name: &str,
        action: &str,
    ) -> Result<bool> {
        self.collaboration
            .check_collaboration_mode_permission(
                user_id,
                project_key,
                resource,
                resource_name,
                action,
            )
            .await
    }

    pub async fn check_permission_given_by_collaboration_mode(
        &self,
        user_id: &str,
        project_key: &str,
        resource: &str,
        action: &str,
    ) -> Result<bool> {
        self.collaboration
            .check_permission_given_by_collaboration_mode(user_id, project_key, resource, action)
            .await
    }

    pub async fn list_authorized_workflows(
        &self,
        user_id: &str,
        project_key: &str,
    ) -> Result<AuthorizedWorkflows> {
        self.collaboration
            .list_authorized_workflows(user_id, project_key)
            .await
    }

    pub async fn list_authorized_envs(
        &self,
        user_id: &str,
        project_key: &str,
    ) -> Result<AuthorizedEnvs> {
        self.collaboration
            .list_authorized_envs(user_id, project_key)
            .await
    }

    /// Projects visible to the user
    pub async fn list_authorized_projects(&self, user_id: &str) -> Result<Vec<String>> {
        self.visibility.list_authorized_projects(user_id).await
    }

    /// Projects where the user may perform `verb` on `resource`
    pub async fn list_authorized_projects_by_verb(
        &self,
        user_id: &str,
        resource: &str,
        verb: &str,
    ) -> Result<Vec<String>> {
        self.visibility
            .list_authorized_projects_by_verb(user_id, resource, verb)
            .await
    }
}
