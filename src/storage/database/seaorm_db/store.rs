//! Store trait implementations over the SeaORM operations

use crate::core::models::{CollaborationInstance, CollaborationMode, Role, RoleBinding};
use crate::storage::{
    AuthzStore, CollaborationInstanceStore, CollaborationModeStore, RoleBindingStore, RoleStore,
};
use crate::utils::error::Result;
use async_trait::async_trait;

use super::types::SeaOrmDatabase;

#[async_trait]
impl RoleStore for SeaOrmDatabase {
    async fn get_role(&self, namespace: &str, name: &str) -> Result<Option<Role>> {
        self.find_role(namespace, name).await
    }

    async fn list_roles_by_verb(&self, namespace: &str, verb: &str) -> Result<Vec<Role>> {
        self.find_roles_by_verb(namespace, verb).await
    }
}

#[async_trait]
impl RoleBindingStore for SeaOrmDatabase {
    async fn list_user_role_bindings(&self, user_id: &str) -> Result<Vec<RoleBinding>> {
        self.find_user_bindings(user_id).await
    }

    async fn list_public_project_bindings(&self, prefix: &str) -> Result<Vec<RoleBinding>> {
        self.find_public_bindings(prefix).await
    }
}

#[async_trait]
impl CollaborationInstanceStore for SeaOrmDatabase {
    async fn find_instance(
        &self,
        user_id: &str,
        project_key: &str,
    ) -> Result<CollaborationInstance> {
        self.find_collaboration_instance(user_id, project_key).await
    }
}

#[async_trait]
impl CollaborationModeStore for SeaOrmDatabase {
    async fn list_user_collaboration_modes(
        &self,
        user_id: &str,
    ) -> Result<Vec<CollaborationMode>> {
        self.find_user_collaboration_modes(user_id).await
    }
}

#[async_trait]
impl AuthzStore for SeaOrmDatabase {
    async fn put_role(&self, role: Role) -> Result<()> {
        self.upsert_role(role).await
    }

    async fn add_role_binding(&self, binding: RoleBinding) -> Result<()> {
        self.insert_binding(binding).await
    }

    async fn put_collaboration_instance(&self, instance: CollaborationInstance) -> Result<()> {
        self.upsert_collaboration_instance(instance).await
    }

    async fn put_collaboration_mode(&self, mode: CollaborationMode) -> Result<()> {
        self.upsert_collaboration_mode(mode).await
    }

    async fn health_check(&self) -> Result<()> {
        SeaOrmDatabase::health_check(self).await
    }

    fn backend_name(&self) -> &'static str {
        self.backend_type.name()
    }
}
