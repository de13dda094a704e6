//! Repository interfaces and their in-memory implementations.

pub mod property;
pub mod user;

pub use property::{InMemoryPropertyRepository, PropertyRepository};
pub use user::{InMemoryUserRepository, UserRepository};
