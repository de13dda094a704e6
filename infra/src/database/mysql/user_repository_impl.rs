//! MySQL implementation of the UserRepository trait.
//!
//! Emails are stored already normalized; the unique key on `email` backs
//! the duplicate-registration check.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use estate_core::domain::entities::user::{User, UserRole};
use estate_core::errors::{AuthError, DomainError};
use estate_core::repositories::UserRepository;
use estate_shared::{Paginated, Pagination};

use super::db_error;

const COLUMNS: &str = "id, name, email, phone, password_hash, role, created_at, updated_at";

/// MySQL implementation of UserRepository
#[derive(Clone)]
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let read = |column: &str, e: &dyn std::fmt::Display| DomainError::Database {
            message: format!("Failed to get users.{column}: {e}"),
        };

        let id: String = row.try_get("id").map_err(|e| read("id", &e))?;
        let role: String = row.try_get("role").map_err(|e| read("role", &e))?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| read("id", &e))?,
            name: row.try_get("name").map_err(|e| read("name", &e))?,
            email: row.try_get("email").map_err(|e| read("email", &e))?,
            phone: row.try_get("phone").map_err(|e| read("phone", &e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| read("password_hash", &e))?,
            role: role.parse::<UserRole>().map_err(|e| read("role", &e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| read("created_at", &e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| read("updated_at", &e))?,
        })
    }

    async fn find_one(&self, column: &str, value: String) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE {column} = ? LIMIT 1");

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("User lookup failed"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.find_one("id", id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", email.to_string()).await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("User existence check failed"))?;

        Ok(count > 0)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = format!("INSERT INTO users ({COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?)");

        let result = sqlx::query(&query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.phone)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(user),
            // A concurrent registration won the unique key on email
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(AuthError::EmailAlreadyRegistered.into())
            }
            Err(e) => Err(db_error("Failed to create user")(e)),
        }
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                name = ?,
                phone = ?,
                password_hash = ?,
                role = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.name)
            .bind(&user.phone)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update user"))?;

        if result.rows_affected() == 0 && self.find_by_id(user.id).await?.is_none() {
            return Err(DomainError::not_found("User"));
        }

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete user"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, pagination: Pagination) -> Result<Paginated<User>, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("User count failed"))?;

        let query = format!("SELECT {COLUMNS} FROM users ORDER BY seq ASC LIMIT ? OFFSET ?");
        let rows = sqlx::query(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("User listing failed"))?;

        let users = rows
            .iter()
            .map(Self::row_to_user)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated::new(users, pagination, u64::try_from(total).unwrap_or(0)))
    }
}
