//! # Infrastructure Layer
//!
//! Concrete implementations behind the core abstractions: the MySQL
//! customer store and the connection pool it runs on.

use thiserror::Error;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::connection::DatabasePool;
pub use database::mysql::MySqlCustomerRepository;

/// Errors raised while building infrastructure components
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
