//! # Infrastructure Layer
//!
//! Concrete persistence for the EstateHub backend, following the same
//! clean-architecture split as the core crate: core defines repository
//! traits, this crate implements them on MySQL through SQLx.
//!
//! - **Database**: connection pool, schema bootstrap and MySQL repositories

use estate_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, MySqlPropertyRepository, MySqlUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Database {
            message: err.to_string(),
        }
    }
}
