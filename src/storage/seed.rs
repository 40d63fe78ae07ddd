//! YAML seed data
//!
//! A seed file lists roles, bindings and collaboration data to load into a
//! store at startup:
//!
//! ```yaml
//! roles:
//!   - namespace: project-a
//!     name: dev
//!     rules:
//!       - verbs: ["workflow:view", "workflow:execute"]
//! role_bindings:
//!   - { user_id: alice, namespace: project-a, role_name: dev }
//!   - { user_id: "*", namespace: project-b, role_name: read-only }
//! ```

use super::AuthzStore;
use crate::core::models::{CollaborationInstance, CollaborationMode, Role, RoleBinding};
use crate::utils::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Seed data for an authorization store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub role_bindings: Vec<RoleBinding>,
    #[serde(default)]
    pub collaboration_instances: Vec<CollaborationInstance>,
    #[serde(default)]
    pub collaboration_modes: Vec<CollaborationMode>,
}

impl SeedData {
    /// Load and validate seed data from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading seed data from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            AuthzError::config(format!("Failed to read seed file {:?}: {}", path, e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate seed data from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let seed: Self = serde_yaml::from_str(content)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Reject records with empty identifiers
    pub fn validate(&self) -> Result<()> {
        for role in &self.roles {
            if role.namespace.is_empty() || role.name.is_empty() {
                return Err(AuthzError::validation(
                    "Role namespace and name cannot be empty",
                ));
            }
        }

        for binding in &self.role_bindings {
            if binding.user_id.is_empty()
                || binding.namespace.is_empty()
                || binding.role_name.is_empty()
            {
                return Err(AuthzError::validation(format!(
                    "Incomplete role binding: {:?}",
                    binding
                )));
            }
        }

        for instance in &self.collaboration_instances {
            if instance.user_id.is_empty() || instance.project_key.is_empty() {
                return Err(AuthzError::validation(
                    "Collaboration instance needs a user and a project",
                ));
            }
        }

        for mode in &self.collaboration_modes {
            if mode.name.is_empty() || mode.project_name.is_empty() {
                return Err(AuthzError::validation(
                    "Collaboration mode needs a name and a project",
                ));
            }
        }

        Ok(())
    }

    /// Write every record into `store`
    pub async fn apply(&self, store: &dyn AuthzStore) -> Result<()> {
        debug!(
            roles = self.roles.len(),
            bindings = self.role_bindings.len(),
            instances = self.collaboration_instances.len(),
            modes = self.collaboration_modes.len(),
            "Applying seed data"
        );

        for role in &self.roles {
            store.put_role(role.clone()).await?;
        }
        for binding in &self.role_bindings {
            store.add_role_binding(binding.clone()).await?;
        }
        for instance in &self.collaboration_instances {
            store.put_collaboration_instance(instance.clone()).await?;
        }
        for mode in &self.collaboration_modes {
            store.put_collaboration_mode(mode.clone()).await?;
        }

        info!(backend = store.backend_name(), "Seed data applied");
        Ok(())
    }
}
