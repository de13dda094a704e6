//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Schema bootstrap
//! - Repository implementations

pub mod connection;
pub mod mysql;
pub mod schema;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlPropertyRepository, MySqlUserRepository};
