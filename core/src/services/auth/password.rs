//! bcrypt password hashing
//!
//! Both operations run on the blocking thread pool; a single hash at the
//! default cost takes long enough to stall every task on an async worker.

use tokio::task;

use crate::errors::DomainError;

/// Hash `password` with the given bcrypt work factor
pub async fn hash_password(password: &str, cost: u32) -> Result<String, DomainError> {
    let password = password.to_string();
    task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::internal(format!("password hashing task failed: {e}")))?
        .map_err(|e| DomainError::internal(format!("password hashing failed: {e}")))
}

/// Check `password` against a stored hash. A malformed hash never matches.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, DomainError> {
    let (password, hash) = (password.to_string(), hash.to_string());
    task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
        .await
        .map_err(|e| DomainError::internal(format!("password verification task failed: {e}")))
}
