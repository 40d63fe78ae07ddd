//! Error type definitions

use thiserror::Error;

/// Result type alias for the authorization crate
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Main error type for the authorization crate
///
/// Missing users, roles and collaboration instances are not errors: stores
/// report them as `None` or empty collections and callers branch on that.
#[derive(Error, Debug)]
pub enum AuthzError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Store read/write failures that are not database driver errors
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
