//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

mod filters;
pub mod property_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use property_repository_impl::MySqlPropertyRepository;
pub use user_repository_impl::MySqlUserRepository;

use estate_core::errors::DomainError;

/// Wrap a SQLx error with the failed operation
pub(crate) fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        DomainError::Database {
            message: format!("{context}: {e}"),
        }
    }
}
