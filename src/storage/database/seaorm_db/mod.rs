// Module declarations
mod binding_ops;
mod collaboration_ops;
mod connection;
mod role_ops;
mod store;
#[cfg(all(test, feature = "sqlite"))]
mod tests;
mod types;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
