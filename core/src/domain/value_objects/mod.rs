//! Value objects representing immutable domain concepts.

pub mod account;
pub mod auth_response;
pub mod criteria;
pub mod principal;
pub mod sort_option;

// Re-export commonly used types
pub use account::{ProfileUpdate, Registration};
pub use auth_response::AuthResponse;
pub use criteria::{EnumFilter, FilterCriteria};
pub use principal::Principal;
pub use sort_option::SortOption;
