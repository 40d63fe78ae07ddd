//! RBAC and logging validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::core::models::WILDCARD;
use tracing_subscriber::EnvFilter;

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        if self.public_project_prefix.contains(WILDCARD) {
            return Err("Public project prefix cannot contain the wildcard".to_string());
        }

        if self
            .public_project_prefix
            .chars()
            .any(char::is_whitespace)
        {
            return Err("Public project prefix cannot contain whitespace".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))
    }
}
