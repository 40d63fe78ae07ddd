//! Storage configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

const SUPPORTED_URL_SCHEMES: [&str; 3] = ["sqlite:", "postgres://", "postgresql://"];

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        debug!(backend = %self.backend, "Validating storage configuration");

        if self.backend == StorageBackend::Database {
            self.database.validate()?;
        }

        if let Some(seed_file) = &self.seed_file {
            if seed_file.as_os_str().is_empty() {
                return Err("Seed file path cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        if !SUPPORTED_URL_SCHEMES
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
        {
            return Err(format!(
                "Unsupported database URL, expected one of {:?}",
                SUPPORTED_URL_SCHEMES
            ));
        }

        if self.max_connections == 0 {
            return Err("Database max connections must be greater than 0".to_string());
        }

        if self.max_connections > 1000 {
            return Err("Database max connections should not exceed 1000".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Database connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
