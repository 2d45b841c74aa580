//! # taskboard-database
//!
//! PostgreSQL access layer: connection pool management, the migration
//! runner, and repositories.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::notification::NotificationRepository;
