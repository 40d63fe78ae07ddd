//! Storage layer for the authorization core
//!
//! The core reads roles, role bindings and collaboration data through the
//! traits below and never caches what it reads. Two backends implement them:
//! an in-memory store for development and tests, and a SeaORM store for
//! SQLite/PostgreSQL deployments.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;
/// YAML seed data module
pub mod seed;


use crate::config::{StorageBackend, StorageConfig};
use crate::core::models::{CollaborationInstance, CollaborationMode, Role, RoleBinding};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

pub use database::Database;
pub use memory::InMemoryStore;
pub use seed::SeedData;

/// Role definitions, scoped by namespace
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Get a role by namespace and name; `None` when it does not exist
    async fn get_role(&self, namespace: &str, name: &str) -> Result<Option<Role>>;

    /// List the roles in `namespace` whose rules grant `verb`
    async fn list_roles_by_verb(&self, namespace: &str, verb: &str) -> Result<Vec<Role>>;
}

/// User-to-role associations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleBindingStore: Send + Sync {
    /// List every binding held by `user_id`
    async fn list_user_role_bindings(&self, user_id: &str) -> Result<Vec<RoleBinding>>;

    /// List public-project bindings whose namespace starts with `prefix`
    async fn list_public_project_bindings(&self, prefix: &str) -> Result<Vec<RoleBinding>>;
}

/// Per-user, per-project collaboration grants
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollaborationInstanceStore: Send + Sync {
    /// Find the instance for a (user, project) pair.
    ///
    /// A missing instance is returned as [`CollaborationInstance::empty`].
    async fn find_instance(&self, user_id: &str, project_key: &str)
    -> Result<CollaborationInstance>;
}

/// Collaboration-mode memberships
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollaborationModeStore: Send + Sync {
    /// List the collaboration modes `user_id` is a member of
    async fn list_user_collaboration_modes(&self, user_id: &str)
    -> Result<Vec<CollaborationMode>>;
}

/// A complete backend: every read interface plus the writes used for seeding
#[async_trait]
pub trait AuthzStore:
    RoleStore + RoleBindingStore + CollaborationInstanceStore + CollaborationModeStore
{
    /// Create or replace a role
    async fn put_role(&self, role: Role) -> Result<()>;

    /// Add a binding; adding an existing binding is a no-op
    async fn add_role_binding(&self, binding: RoleBinding) -> Result<()>;

    /// Create or replace the instance for its (user, project) pair
    async fn put_collaboration_instance(&self, instance: CollaborationInstance) -> Result<()>;

    /// Create or replace a collaboration mode, keyed by (project, name)
    async fn put_collaboration_mode(&self, mode: CollaborationMode) -> Result<()>;

    async fn health_check(&self) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}

/// Open the configured backend and apply the seed file, if any
pub async fn open_store(config: &StorageConfig) -> Result<Arc<dyn AuthzStore>> {
    info!("Initializing storage layer");

    let store: Arc<dyn AuthzStore> = match config.backend {
        StorageBackend::Memory => {
            debug!("Using in-memory store");
            Arc::new(InMemoryStore::new())
        }
        StorageBackend::Database => {
            debug!("Connecting to database");
            let db = Database::new(&config.database).await?;
            db.migrate().await?;
            Arc::new(db)
        }
    };

    if let Some(path) = &config.seed_file {
        let seed = SeedData::from_file(path).await?;
        seed.apply(store.as_ref()).await?;
    }

    info!(backend = store.backend_name(), "Storage layer initialized");
    Ok(store)
}
