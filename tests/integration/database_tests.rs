//! Database integration tests
//!
//! Tests the SeaORM store using a real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::{PlatformFixture, TestDatabase};
    use crate::common::database::test_db_config;
    use devops_authz::storage::database::{Database, DatabaseBackendType};
    use devops_authz::storage::{
        CollaborationInstanceStore, CollaborationModeStore, RoleBindingStore, RoleStore,
    };
    use devops_authz::{AuthzStore, RoleBinding};

    /// Test basic database connection and health check
    #[tokio::test]
    async fn test_database_health_check() {
        let db = Database::new(&test_db_config()).await;
        assert!(db.is_ok(), "Failed to create database: {:?}", db.err());

        let db = db.unwrap();
        assert_eq!(db.backend_type(), DatabaseBackendType::SQLite);

        let migrate_result = db.migrate().await;
        assert!(
            migrate_result.is_ok(),
            "Migration failed: {:?}",
            migrate_result.err()
        );

        let health = db.health_check().await;
        assert!(health.is_ok(), "Health check failed: {:?}", health.err());
    }

    /// Migrations can run twice
    #[tokio::test]
    async fn test_database_migration_is_idempotent() {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create database");
        assert!(db.migrate().await.is_ok());
        assert!(db.migrate().await.is_ok());
    }

    /// Health check fails before the tables exist
    #[tokio::test]
    async fn test_health_check_without_migrations() {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create database");
        assert!(db.health_check().await.is_err());
    }

    #[tokio::test]
    async fn test_seeded_reads() {
        let test_db = TestDatabase::seeded().await;
        let db = test_db.db();

        let bindings = db.list_user_role_bindings("bob").await.unwrap();
        assert_eq!(bindings.len(), 2);

        let role = db.get_role("shop", "dev").await.unwrap().unwrap();
        assert!(role.grants("workflow:execute"));
        assert!(role.grants("not-a-verb"));

        let public = db.list_public_project_bindings("").await.unwrap();
        let namespaces: Vec<_> = public.iter().map(|b| b.namespace.as_str()).collect();
        assert_eq!(namespaces, vec!["pub-docs", "sandbox"]);

        let modes = db.list_user_collaboration_modes("dave").await.unwrap();
        assert_eq!(modes.len(), 1);
        assert_eq!(modes[0].members, vec!["carol", "dave"]);

        let instance = db.find_instance("carol", "shop").await.unwrap();
        assert_eq!(instance.workflows.len(), 2);
        assert_eq!(instance.products.len(), 2);
    }

    /// Re-applying the seed leaves the data unchanged
    #[tokio::test]
    async fn test_seed_is_repeatable() {
        let test_db = TestDatabase::seeded().await;
        PlatformFixture::seed().apply(test_db.db()).await.unwrap();

        let bindings = test_db.db().list_user_role_bindings("alice").await.unwrap();
        assert_eq!(bindings.len(), 2);
        let modes = test_db.db().list_user_collaboration_modes("carol").await.unwrap();
        assert_eq!(modes.len(), 1);
    }

    #[tokio::test]
    async fn test_binding_without_role_row() {
        let test_db = TestDatabase::new().await;
        let db = test_db.db();
        db.add_role_binding(RoleBinding::new("erin", "shop", "ghost"))
            .await
            .unwrap();

        assert!(db.get_role("shop", "ghost").await.unwrap().is_none());
        assert_eq!(db.backend_name(), "sqlite");
    }

    #[tokio::test]
    async fn test_close() {
        let db = Database::new(&test_db_config()).await.unwrap();
        assert!(db.close().await.is_ok());
    }
}
