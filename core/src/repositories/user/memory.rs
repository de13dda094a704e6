//! In-memory user repository

use async_trait::async_trait;
use estate_shared::{Paginated, Pagination};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// User repository backed by a vector in registration order
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.email == email))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        // Checked under the write lock so concurrent registrations cannot race
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| DomainError::not_found("User"))?;
        *slot = user.clone();
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() != before)
    }

    async fn list(&self, pagination: Pagination) -> Result<Paginated<User>, DomainError> {
        let users = self.users.read().await;
        let (start, end) = pagination.bounds(users.len());
        Ok(Paginated::new(
            users[start..end].to_vec(),
            pagination,
            users.len() as u64,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::UserRole;

    fn user(email: &str) -> User {
        User::new(
            "Test".to_string(),
            email.to_string(),
            None,
            String::new(),
            UserRole::Buyer,
        )
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("a@example.com")).await.unwrap();

        let err = repo.create(user("a@example.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::EmailAlreadyRegistered)));
        assert!(repo.exists_by_email("a@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_pages_in_registration_order() {
        let repo = InMemoryUserRepository::new();
        for i in 0..5 {
            repo.create(user(&format!("u{i}@example.com"))).await.unwrap();
        }

        let page = repo.list(Pagination::new(2, 2).unwrap()).await.unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
        let emails: Vec<_> = page.items.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, ["u2@example.com", "u3@example.com"]);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = InMemoryUserRepository::new();
        let mut created = repo.create(user("b@example.com")).await.unwrap();
        created.name = "Renamed".to_string();
        repo.update(created.clone()).await.unwrap();
        assert_eq!(repo.find_by_id(created.id).await.unwrap().unwrap().name, "Renamed");

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.update(created).await.is_err());
    }
}
