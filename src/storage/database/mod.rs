//! Database storage implementation using SeaORM
//!
//! Roles, bindings and collaboration data live in five tables created by the
//! bundled migrations. SQLite and PostgreSQL are supported.

/// Database entities module
pub mod entities;
/// Database migration module
pub mod migration;
/// SeaORM database implementation module
pub mod seaorm_db;

// Re-export the main database interface
pub use seaorm_db::DatabaseBackendType;
pub use seaorm_db::SeaOrmDatabase as Database;
