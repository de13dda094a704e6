//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;
use estate_shared::{Paginated, Pagination};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by normalized (lower-cased) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Check if an account exists for a normalized email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))` - Duplicate email
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Page through users in registration order
    async fn list(&self, pagination: Pagination) -> Result<Paginated<User>, DomainError>;
}
