//! Test database utilities
//!
//! Each test gets an isolated in-memory SQLite database with migrations applied.

use devops_authz::config::DatabaseConfig;
use devops_authz::storage::database::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new migrated in-memory database
    pub async fn new() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Create a database seeded with [`super::PlatformFixture`] data
    pub async fn seeded() -> Self {
        let db = Self::new().await;
        super::PlatformFixture::seed()
            .apply(db.db())
            .await
            .expect("Failed to seed test database");
        db
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get Arc to the underlying database
    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }
}

/// Config for a single-connection in-memory SQLite database
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: 5,
    }
}
