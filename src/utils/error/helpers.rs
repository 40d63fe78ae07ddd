//! Helper functions for creating specific error types

use super::types::AuthzError;

impl AuthzError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error came from a backing store rather than from local input
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Database(_))
    }
}
