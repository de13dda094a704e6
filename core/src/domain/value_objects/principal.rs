//! Authenticated caller attached to a request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::property::Property;
use crate::domain::entities::user::{User, UserRole};

/// Verified `{id, role}` of the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl Principal {
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether the caller may create listings
    pub fn can_publish(&self) -> bool {
        self.role.can_publish()
    }

    /// Owning agent or admin
    pub fn can_manage(&self, property: &Property) -> bool {
        self.is_admin() || property.is_listed_by(self.user_id)
    }

    /// Self or admin
    pub fn can_manage_user(&self, user_id: Uuid) -> bool {
        self.is_admin() || self.user_id == user_id
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.role)
    }
}
