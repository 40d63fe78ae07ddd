//! In-memory implementation of the authorization store.
//!
//! All state lives in `HashMap`s guarded by `tokio::sync::RwLock` and is lost on
//! restart. Reads take read locks and run concurrently; writes are serialized
//! per map. Used for local development, seeded demos and tests.

use super::{
    AuthzStore, CollaborationInstanceStore, CollaborationModeStore, RoleBindingStore, RoleStore,
};
use crate::core::models::{CollaborationInstance, CollaborationMode, Role, RoleBinding};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type RoleKey = (String, String);
type InstanceKey = (String, String);

/// In-memory authorization store
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    /// Roles keyed by `(namespace, name)`
    roles: Arc<RwLock<HashMap<RoleKey, Role>>>,
    /// Bindings in insertion order, user and public bindings alike
    bindings: Arc<RwLock<Vec<RoleBinding>>>,
    /// Collaboration instances keyed by `(user_id, project_key)`
    instances: Arc<RwLock<HashMap<InstanceKey, CollaborationInstance>>>,
    /// Collaboration modes keyed by `(project_name, name)`
    modes: Arc<RwLock<HashMap<(String, String), CollaborationMode>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored bindings, public ones included
    pub async fn binding_count(&self) -> usize {
        self.bindings.read().await.len()
    }
}

#[async_trait]
impl RoleStore for InMemoryStore {
    async fn get_role(&self, namespace: &str, name: &str) -> Result<Option<Role>> {
        Ok(self
            .roles
            .read()
            .await
            .get(&(namespace.to_string(), name.to_string()))
            .cloned())
    }

    async fn list_roles_by_verb(&self, namespace: &str, verb: &str) -> Result<Vec<Role>> {
        Ok(self
            .roles
            .read()
            .await
            .values()
            .filter(|role| role.namespace == namespace && role.grants(verb))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RoleBindingStore for InMemoryStore {
    async fn list_user_role_bindings(&self, user_id: &str) -> Result<Vec<RoleBinding>> {
        Ok(self
            .bindings
            .read()
            .await
            .iter()
            .filter(|binding| binding.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_public_project_bindings(&self, prefix: &str) -> Result<Vec<RoleBinding>> {
        Ok(self
            .bindings
            .read()
            .await
            .iter()
            .filter(|binding| binding.is_public() && binding.namespace.starts_with(prefix))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CollaborationInstanceStore for InMemoryStore {
    async fn find_instance(
        &self,
        user_id: &str,
        project_key: &str,
    ) -> Result<CollaborationInstance> {
        Ok(self
            .instances
            .read()
            .await
            .get(&(user_id.to_string(), project_key.to_string()))
            .cloned()
            .unwrap_or_else(|| CollaborationInstance::empty(user_id, project_key)))
    }
}

#[async_trait]
impl CollaborationModeStore for InMemoryStore {
    async fn list_user_collaboration_modes(
        &self,
        user_id: &str,
    ) -> Result<Vec<CollaborationMode>> {
        Ok(self
            .modes
            .read()
            .await
            .values()
            .filter(|mode| mode.has_member(user_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AuthzStore for InMemoryStore {
    async fn put_role(&self, role: Role) -> Result<()> {
        self.roles
            .write()
            .await
            .insert((role.namespace.clone(), role.name.clone()), role);
        Ok(())
    }

    async fn add_role_binding(&self, binding: RoleBinding) -> Result<()> {
        let mut bindings = self.bindings.write().await;
        if !bindings.contains(&binding) {
            bindings.push(binding);
        }
        Ok(())
    }

    async fn put_collaboration_instance(&self, instance: CollaborationInstance) -> Result<()> {
        self.instances.write().await.insert(
            (instance.user_id.clone(), instance.project_key.clone()),
            instance,
        );
        Ok(())
    }

    async fn put_collaboration_mode(&self, mode: CollaborationMode) -> Result<()> {
        self.modes
            .write()
            .await
            .insert((mode.project_name.clone(), mode.name.clone()), mode);
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
