//! Shared utilities and common types for the EstateHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Pagination value types
//! - Validation helpers (email, phone, URLs)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, ListingConfig,
    LoggingConfig, ServerConfig, StorageBackend,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, HealthStatus, Paginated, Pagination, PaginationError};
pub use utils::validation;
