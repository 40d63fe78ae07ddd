//! Storage configuration

use super::{default_connection_timeout, default_database_url, default_max_connections};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which store implementation backs the authorization core
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local maps, lost on exit
    #[default]
    Memory,
    /// SQLite or PostgreSQL through SeaORM
    Database,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "database" | "db" => Ok(Self::Database),
            other => Err(format!("Unknown storage backend: {}", other)),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Database => write!(f, "database"),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Backend selection
    #[serde(default)]
    pub backend: StorageBackend,
    /// Database configuration, used by the database backend
    #[serde(default)]
    pub database: DatabaseConfig,
    /// YAML seed file applied after the store is opened
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

impl StorageConfig {
    /// Merge storage configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.backend != StorageBackend::default() {
            self.backend = other.backend;
        }
        self.database = self.database.merge(other.database);
        if other.seed_file.is_some() {
            self.seed_file = other.seed_file;
        }
        self
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (`sqlite:` or `postgres://`)
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// Merge database configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.url.is_empty() && other.url != default_database_url() {
            self.url = other.url;
        }
        if other.max_connections != default_max_connections() {
            self.max_connections = other.max_connections;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        self
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.connection_timeout, 5);
        assert!(config.is_sqlite());
    }

    #[test]
    fn test_database_config_merge_keeps_non_default_values() {
        let base = DatabaseConfig {
            url: "postgres://localhost/authz".to_string(),
            max_connections: 20,
            connection_timeout: 5,
        };
        let merged = base.merge(DatabaseConfig {
            connection_timeout: 30,
            ..Default::default()
        });

        assert_eq!(merged.url, "postgres://localhost/authz");
        assert_eq!(merged.max_connections, 20);
        assert_eq!(merged.connection_timeout, 30);
        assert!(!merged.is_sqlite());
    }

    #[test]
    fn test_storage_backend_parsing() {
        assert_eq!(
            "memory".parse::<StorageBackend>().unwrap(),
            StorageBackend::Memory
        );
        assert_eq!(
            "Database".parse::<StorageBackend>().unwrap(),
            StorageBackend::Database
        );
        assert!("redis".parse::<StorageBackend>().is_err());
        assert_eq!(StorageBackend::Database.to_string(), "database");
    }

    #[test]
    fn test_storage_config_yaml() {
        let yaml = r#"
backend: database
database:
  url: "sqlite://data/authz.db?mode=rwc"
seed_file: seed.yaml
"#;
        let config: StorageConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.backend, StorageBackend::Database);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.seed_file, Some(PathBuf::from("seed.yaml")));
    }

    #[test]
    fn test_storage_config_merge() {
        let base = StorageConfig {
            seed_file: Some(PathBuf::from("base.yaml")),
            ..Default::default()
        };
        let merged = base.merge(StorageConfig {
            backend: StorageBackend::Database,
            ..Default::default()
        });
        assert_eq!(merged.backend, StorageBackend::Database);
        assert_eq!(merged.seed_file, Some(PathBuf::from("base.yaml")));
    }
}
