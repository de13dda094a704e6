//! User entity representing a registered account.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::property::AgentInfo;
use crate::errors::ValidationError;

/// Role of a user in the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Browses listings only
    #[default]
    Buyer,
    /// Lists their own properties
    Owner,
    /// Lists properties on behalf of owners
    Agent,
    /// Unrestricted mutation rights
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Buyer => "buyer",
            UserRole::Owner => "owner",
            UserRole::Agent => "agent",
            UserRole::Admin => "admin",
        }
    }

    /// Owners, agents and admins may publish listings
    pub fn can_publish(&self) -> bool {
        matches!(self, UserRole::Owner | UserRole::Agent | UserRole::Admin)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buyer" => Ok(UserRole::Buyer),
            "owner" => Ok(UserRole::Owner),
            "agent" => Ok(UserRole::Agent),
            "admin" => Ok(UserRole::Admin),
            _ => Err(ValidationError::InvalidFormat {
                field: "role".to_string(),
            }),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Login email, stored lower-cased and unique
    pub email: String,

    /// Optional contact phone
    pub phone: Option<String>,

    /// bcrypt hash of the password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    pub role: UserRole,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        password_hash: String,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates profile fields; `None` leaves a field unchanged and an empty
    /// phone clears it
    pub fn update_profile(&mut self, name: Option<String>, phone: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(phone) = phone {
            self.phone = if phone.trim().is_empty() { None } else { Some(phone) };
        }
        self.updated_at = Utc::now();
    }

    /// Contact snapshot stored on listings created by this user
    pub fn agent_info(&self) -> AgentInfo {
        AgentInfo {
            id: self.id,
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User::new(
            "Asha Rao".to_string(),
            "asha@example.com".to_string(),
            None,
            "$2b$04$hash".to_string(),
            role,
        )
    }

    #[test]
    fn test_role_permissions() {
        assert!(!UserRole::Buyer.can_publish());
        assert!(UserRole::Owner.can_publish());
        assert!(UserRole::Agent.can_publish());
        assert!(UserRole::Admin.can_publish());
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Agent.is_admin());
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("Agent".parse::<UserRole>().unwrap(), UserRole::Agent);
        assert!("landlord".parse::<UserRole>().is_err());
        assert_eq!(UserRole::default(), UserRole::Buyer);
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let json = serde_json::to_value(user(UserRole::Buyer)).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "buyer");
    }

    #[test]
    fn test_update_profile() {
        let mut user = user(UserRole::Owner);
        user.update_profile(Some("Asha R.".to_string()), Some("+91 90000 00000".to_string()));
        assert_eq!(user.name, "Asha R.");
        assert!(user.phone.is_some());

        user.update_profile(None, Some(" ".to_string()));
        assert_eq!(user.name, "Asha R.");
        assert!(user.phone.is_none());
    }

    #[test]
    fn test_agent_info_snapshot() {
        let user = user(UserRole::Agent);
        let agent = user.agent_info();
        assert_eq!(agent.id, user.id);
        assert_eq!(agent.email, user.email);
    }
}
