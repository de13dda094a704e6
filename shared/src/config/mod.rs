//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and token lifetime
//! - `database` - Storage backend selection and MySQL pool settings
//! - `environment` - Environment detection and logging configuration
//! - `listing` - Page sizes and list limits for property endpoints
//! - `server` - HTTP server and CORS configuration
//!
//! Every sub-configuration can be built from environment variables through
//! its `from_env` constructor; defaults are used for anything missing or
//! unparsable.

pub mod auth;
pub mod database;
pub mod environment;
pub mod listing;
pub mod server;

pub use auth::{AuthConfig, JwtConfig};
pub use database::{DatabaseConfig, StorageBackend};
pub use environment::{Environment, LoggingConfig};
pub use listing::ListingConfig;
pub use server::{CorsConfig, ServerConfig};

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is unset or cannot be parsed.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
