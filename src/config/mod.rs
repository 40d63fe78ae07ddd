//! Configuration management for the authorization core
//!
//! Configuration comes from a YAML file, from `AUTHZ_*` environment variables,
//! or from a file with the environment applied on top (every set variable wins).

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub rbac: RbacConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AuthzError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| AuthzError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from `AUTHZ_*` environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `AUTHZ_*` environment variables on top of this configuration.
    ///
    /// Every variable that is set wins, including `false` and empty values.
    pub fn with_env_overrides(self) -> Result<Self> {
        let config = self.apply_lookup(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from a variable lookup; unset variables keep defaults
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().apply_lookup(lookup)
    }

    /// Overwrite the fields whose variable is set
    pub(crate) fn apply_lookup<F>(self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self;

        if let Some(backend) = lookup("AUTHZ_STORAGE_BACKEND") {
            config.storage.backend =
                StorageBackend::from_str(&backend).map_err(AuthzError::Config)?;
        }
        if let Some(url) = lookup("AUTHZ_DATABASE_URL") {
            config.storage.database.url = url;
        }
        if let Some(max) = lookup("AUTHZ_DATABASE_MAX_CONNECTIONS") {
            config.storage.database.max_connections =
                parse_var("AUTHZ_DATABASE_MAX_CONNECTIONS", &max)?;
        }
        if let Some(timeout) = lookup("AUTHZ_DATABASE_CONNECTION_TIMEOUT") {
            config.storage.database.connection_timeout =
                parse_var("AUTHZ_DATABASE_CONNECTION_TIMEOUT", &timeout)?;
        }
        if let Some(seed_file) = lookup("AUTHZ_SEED_FILE") {
            config.storage.seed_file = Some(PathBuf::from(seed_file));
        }
        if let Some(prefix) = lookup("AUTHZ_PUBLIC_PROJECT_PREFIX") {
            config.rbac.public_project_prefix = prefix;
        }
        if let Some(level) = lookup("AUTHZ_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(json) = lookup("AUTHZ_LOG_JSON") {
            config.logging.json = parse_var("AUTHZ_LOG_JSON", &json)?;
        }

        Ok(config)
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    pub fn rbac(&self) -> &RbacConfig {
        &self.rbac
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.storage
            .validate()
            .map_err(|e| AuthzError::Config(format!("Storage config error: {}", e)))?;

        self.rbac
            .validate()
            .map_err(|e| AuthzError::Config(format!("RBAC config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| AuthzError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration.
    ///
    /// Values of `other` that equal the defaults do not override `self`; use
    /// [`Config::with_env_overrides`] to layer the environment over a file.
    pub fn merge(mut self, other: Self) -> Self {
        self.storage = self.storage.merge(other.storage);
        self.rbac = self.rbac.merge(other.rbac);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AuthzError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AuthzError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| AuthzError::Config(format!("Invalid value for {}: {}", key, e)))
}
