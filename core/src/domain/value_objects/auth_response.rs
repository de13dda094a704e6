//! Authentication result returned after register and login.

use chrono::{DateTime, Utc};

use crate::domain::entities::user::User;

/// Issued access token together with the authenticated user
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub token: String,

    /// When the access token stops being accepted
    pub expires_at: DateTime<Utc>,

    pub user: User,
}
