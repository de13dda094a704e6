//! Account inputs accepted by the auth service.

use crate::domain::entities::user::UserRole;

/// Self-service registration request
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    /// Defaults to buyer; admin is never self-assigned
    pub role: Option<UserRole>,
}

/// Profile fields a user may change; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
}
