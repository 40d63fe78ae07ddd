use sea_orm::DatabaseConnection;
use sea_orm::prelude::DateTimeWithTimeZone;

/// SeaORM-based database implementation
#[derive(Debug)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

impl DatabaseBackendType {
    /// Detect the backend from a connection URL
    pub fn from_url(url: &str) -> Self {
        if url.starts_with("sqlite:") {
            Self::SQLite
        } else {
            Self::PostgreSQL
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::PostgreSQL => "postgres",
            Self::SQLite => "sqlite",
        }
    }
}

/// Timestamp for `created_at`/`updated_at` columns
pub(super) fn now() -> DateTimeWithTimeZone {
    chrono::Utc::now().into()
}
