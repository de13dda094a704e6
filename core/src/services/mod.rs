//! Business services containing domain logic and use cases.

pub mod auth;
pub mod property;
pub mod search;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use property::PropertyService;
pub use token::{IssuedToken, TokenService};
