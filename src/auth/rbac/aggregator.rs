//! Permission aggregation
//!
//! Merges a user's role bindings, the rules of the bound roles and the public
//! project list into one [`AuthorizedResources`] value. Every call builds its
//! own maps and drops them on return; nothing read from the stores is cached.

use super::actions::{AuthorizedResources, ProjectActions, SystemActions};
use crate::core::models::{
    GENERAL_NAMESPACE, PROJECT_ADMIN_ROLE, RoleBinding, is_project_namespace, is_system_admin_role,
};
use crate::storage::{RoleBindingStore, RoleStore};
use crate::utils::error::Result;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Role names grouped by the namespace they are bound in
pub(super) type NamespacedRoles<'a> = BTreeMap<&'a str, BTreeSet<&'a str>>;

/// Group binding role names by namespace
pub(super) fn group_by_namespace(bindings: &[RoleBinding]) -> NamespacedRoles<'_> {
    let mut grouped: NamespacedRoles<'_> = BTreeMap::new();
    for binding in bindings {
        grouped
            .entry(binding.namespace.as_str())
            .or_default()
            .insert(binding.role_name.as_str());
    }
    grouped
}

/// Computes the capability matrix of a user
#[derive(Clone)]
pub struct PermissionAggregator {
    bindings: Arc<dyn RoleBindingStore>,
    roles: Arc<dyn RoleStore>,
    public_project_prefix: String,
}

impl PermissionAggregator {
    pub fn new(
        bindings: Arc<dyn RoleBindingStore>,
        roles: Arc<dyn RoleStore>,
        public_project_prefix: impl Into<String>,
    ) -> Self {
        Self {
            bindings,
            roles,
            public_project_prefix: public_project_prefix.into(),
        }
    }

    /// Compute everything `user_id` may do.
    ///
    /// An empty id is an internal caller and is answered as system admin
    /// without touching any store. A failed public project listing counts as
    /// no public projects; any other store failure aborts the call.
    #[instrument(skip(self))]
    pub async fn get_user_auth_info(&self, user_id: &str) -> Result<AuthorizedResources> {
        if user_id.is_empty() {
            debug!("Empty user id, answering as internal caller");
            return Ok(AuthorizedResources::system_admin());
        }

        let bindings = self.bindings.list_user_role_bindings(user_id).await?;
        let namespaced_roles = group_by_namespace(&bindings);

        let is_admin = namespaced_roles.iter().any(|(namespace, role_names)| {
            role_names
                .iter()
                .any(|role_name| is_system_admin_role(role_name, namespace))
        });
        if is_admin {
            debug!("User holds the system admin role");
            return Ok(AuthorizedResources::system_admin());
        }

        let mut system_actions = SystemActions::default();
        let mut project_actions: HashMap<String, ProjectActions> = HashMap::new();

        for (namespace, role_names) in &namespaced_roles {
            if !is_project_namespace(namespace) {
                continue;
            }
            let actions = project_actions.entry(namespace.to_string()).or_default();
            for role_name in role_names {
                if *role_name == PROJECT_ADMIN_ROLE {
                    actions.is_project_admin = true;
                }
                self.merge_project_role(actions, namespace, role_name).await?;
            }
        }

        self.merge_public_projects(&mut project_actions).await;

        if let Some(role_names) = namespaced_roles.get(GENERAL_NAMESPACE) {
            for role_name in role_names {
                match self.roles.get_role(GENERAL_NAMESPACE, role_name).await? {
                    Some(role) => {
                        for verb in role.verbs() {
                            system_actions.grant_verb(verb);
                        }
                    }
                    None => debug!(role_name, "System role not found, skipping"),
                }
            }
        }

        debug!(projects = project_actions.len(), "Aggregated user permissions");
        Ok(AuthorizedResources::scoped(system_actions, project_actions))
    }

    async fn merge_project_role(
        &self,
        actions: &mut ProjectActions,
        namespace: &str,
        role_name: &str,
    ) -> Result<()> {
        match self.roles.get_role(namespace, role_name).await? {
            Some(role) => {
                for verb in role.verbs() {
                    actions.grant_verb(verb);
                }
            }
            None => debug!(namespace, role_name, "Bound role not found, skipping"),
        }
        Ok(())
    }

    async fn merge_public_projects(&self, project_actions: &mut HashMap<String, ProjectActions>) {
        let public = match self
            .bindings
            .list_public_project_bindings(&self.public_project_prefix)
            .await
        {
            Ok(public) => public,
            Err(e) => {
                warn!("Failed to list public projects, treating as none: {}", e);
                return;
            }
        };

        for binding in public {
            if !is_project_namespace(&binding.namespace) {
                continue;
            }
            project_actions
                .entry(binding.namespace)
                .or_default()
                .grant_public_view();
        }
    }
}
