//! Project visibility
//!
//! Lists the projects a user may see by unioning the namespaces of their role
//! bindings, the public projects and the projects of their collaboration
//! modes. The two listings that are allowed to fail are handled differently:
//! a public project failure counts as an empty list, a collaboration mode
//! failure ends the union early with whatever was gathered so far.

use super::aggregator::group_by_namespace;
use crate::core::models::{CollaborationResource, PROJECT_ADMIN_ROLE, is_project_namespace};
use crate::storage::{
    CollaborationInstanceStore, CollaborationModeStore, RoleBindingStore, RoleStore,
};
use crate::utils::error::Result;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

#[derive(Clone)]
pub struct ProjectVisibilityResolver {
    bindings: Arc<dyn RoleBindingStore>,
    roles: Arc<dyn RoleStore>,
    instances: Arc<dyn CollaborationInstanceStore>,
    modes: Arc<dyn CollaborationModeStore>,
    public_project_prefix: String,
}

impl ProjectVisibilityResolver {
    pub fn new(
        bindings: Arc<dyn RoleBindingStore>,
        roles: Arc<dyn RoleStore>,
        instances: Arc<dyn CollaborationInstanceStore>,
        modes: Arc<dyn CollaborationModeStore>,
        public_project_prefix: impl Into<String>,
    ) -> Self {
        Self {
            bindings,
            roles,
            instances,
            modes,
            public_project_prefix: public_project_prefix.into(),
        }
    }

    /// Every project `user_id` may see, sorted and without duplicates
    #[instrument(skip(self))]
    pub async fn list_authorized_projects(&self, user_id: &str) -> Result<Vec<String>> {
        let bindings = self.bindings.list_user_role_bindings(user_id).await?;
        let mut projects: BTreeSet<String> = bindings
            .into_iter()
            .map(|binding| binding.namespace)
            .filter(|namespace| is_project_namespace(namespace))
            .collect();

        match self
            .bindings
            .list_public_project_bindings(&self.public_project_prefix)
            .await
        {
            Ok(public) => projects.extend(public.into_iter().map(|binding| binding.namespace)),
            Err(e) => warn!("Failed to list public projects, treating as none: {}", e),
        }

        match self.modes.list_user_collaboration_modes(user_id).await {
            Ok(modes) => projects.extend(modes.into_iter().map(|mode| mode.project_name)),
            Err(e) => warn!(
                "Failed to list collaboration modes, returning role and public projects: {}",
                e
            ),
        }

        Ok(finish(projects))
    }

    /// Projects where `user_id` may perform `verb` on `resource`.
    ///
    /// A project qualifies when the user is project admin there, holds a role
    /// there whose rules grant the verb, or is a member of a collaboration
    /// mode whose instance grants the action on some resource of that type.
    /// An unqualified verb is qualified as `resource:verb` for the role lookup.
    #[instrument(skip(self))]
    pub async fn list_authorized_projects_by_verb(
        &self,
        user_id: &str,
        resource: &str,
        verb: &str,
    ) -> Result<Vec<String>> {
        let (qualified_verb, action) = match verb.split_once(':') {
            Some((_, action)) => (verb.to_string(), action),
            None => (format!("{}:{}", resource, verb), verb),
        };

        let bindings = self.bindings.list_user_role_bindings(user_id).await?;
        let mut projects = BTreeSet::new();

        for (namespace, role_names) in group_by_namespace(&bindings) {
            if !is_project_namespace(namespace) {
                continue;
            }
            if role_names.contains(PROJECT_ADMIN_ROLE) {
                projects.insert(namespace.to_string());
                continue;
            }
            let granting = self.roles.list_roles_by_verb(namespace, &qualified_verb).await?;
            if granting.iter().any(|role| role_names.contains(role.name.as_str())) {
                projects.insert(namespace.to_string());
            }
        }

        if let Some(resource) = CollaborationResource::parse(resource) {
            self.extend_with_collaboration(user_id, resource, action, &mut projects).await;
        } else {
            debug!("Resource type has no collaboration grants");
        }

        Ok(finish(projects))
    }

    async fn extend_with_collaboration(
        &self,
        user_id: &str,
        resource: CollaborationResource,
        action: &str,
        projects: &mut BTreeSet<String>,
    ) {
        let modes = match self.modes.list_user_collaboration_modes(user_id).await {
            Ok(modes) => modes,
            Err(e) => {
                warn!("Failed to list collaboration modes, skipping them: {}", e);
                return;
            }
        };

        for mode in modes {
            if projects.contains(&mode.project_name) {
                continue;
            }
            let found = self.instances.find_instance(user_id, &mode.project_name).await;
            match found {
                Ok(instance) if instance.allows_any(resource, action) => {
                    projects.insert(mode.project_name);
                }
                Ok(_) => {}
                Err(e) => warn!(
                    project = %mode.project_name,
                    "Failed to read collaboration instance, skipping project: {}",
                    e
                ),
            }
        }
    }
}

/// Drop reserved namespaces and return the set as a list
fn finish(mut projects: BTreeSet<String>) -> Vec<String> {
    projects.retain(|project| is_project_namespace(project));
    projects.into_iter().collect()
}
