//! Authentication service module
//!
//! - Email/password registration and login
//! - Profile management and admin user listing
//! - Resolving bearer tokens into a [`Principal`](crate::domain::value_objects::Principal)

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::{hash_password, verify_password};
pub use service::AuthService;
