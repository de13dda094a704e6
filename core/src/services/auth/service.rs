//! Main authentication service implementation

use std::sync::Arc;

use estate_shared::validation::{is_valid_email, is_valid_phone, non_blank, normalize_email};
use estate_shared::{AuthConfig, Paginated, Pagination};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::domain::value_objects::{AuthResponse, Principal, ProfileUpdate, Registration};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::password::{hash_password, verify_password};

/// Authentication service for accounts and bearer tokens
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthConfig,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>, config: AuthConfig) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Register a new account and issue its first access token
    ///
    /// The role defaults to buyer. Admin accounts cannot be self-registered.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The created user and an access token
    /// * `Err(DomainError)` - Invalid input, forbidden role, or duplicate email
    pub async fn register(&self, registration: Registration) -> DomainResult<AuthResponse> {
        let role = registration.role.unwrap_or_default();
        if role == UserRole::Admin {
            return Err(AuthError::RoleNotAllowed {
                role: role.to_string(),
            }
            .into());
        }

        let name = non_blank(&registration.name)
            .ok_or_else(|| ValidationError::required("name"))?
            .to_string();

        if !is_valid_email(&registration.email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        let email = normalize_email(&registration.email);

        if registration.password.chars().count() < self.config.min_password_length {
            return Err(ValidationError::TooShort {
                field: "password".to_string(),
                min: self.config.min_password_length,
            }
            .into());
        }

        let phone = validate_phone(registration.phone)?;

        if self.user_repository.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = hash_password(&registration.password, self.config.bcrypt_cost).await?;
        let user = self
            .user_repository
            .create(User::new(name, email, phone, password_hash, role))
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        self.respond_with_token(user)
    }

    /// Authenticate with email and password
    ///
    /// Unknown emails and wrong passwords produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let email = normalize_email(email);

        let Some(user) = self.user_repository.find_by_email(&email).await? else {
            debug!("login rejected: unknown email");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash).await? {
            warn!(user_id = %user.id, "login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        info!(user_id = %user.id, "User logged in");
        self.respond_with_token(user)
    }

    /// Profile of the authenticated caller
    pub async fn current_user(&self, principal: &Principal) -> DomainResult<User> {
        self.user_repository
            .find_by_id(principal.user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    /// Update the caller's name and/or phone
    pub async fn update_profile(&self, principal: &Principal, update: ProfileUpdate) -> DomainResult<User> {
        let mut user = self.current_user(principal).await?;

        let name = match update.name {
            Some(name) => Some(
                non_blank(&name)
                    .ok_or_else(|| ValidationError::required("name"))?
                    .to_string(),
            ),
            None => None,
        };
        let phone = match update.phone {
            // Blank clears the phone
            Some(phone) if phone.trim().is_empty() => Some(String::new()),
            other => validate_phone(other)?,
        };

        user.update_profile(name, phone);
        let user = self.user_repository.update(user).await?;

        debug!(user_id = %user.id, "Profile updated");
        Ok(user)
    }

    /// Page through all accounts (admin only)
    pub async fn list_users(&self, principal: &Principal, pagination: Pagination) -> DomainResult<Paginated<User>> {
        if !principal.is_admin() {
            return Err(AuthError::InsufficientPermissions.into());
        }
        self.user_repository.list(pagination).await
    }

    /// Delete an account (admin, or the account owner)
    pub async fn delete_user(&self, principal: &Principal, id: Uuid) -> DomainResult<()> {
        if !principal.can_manage_user(id) {
            return Err(AuthError::InsufficientPermissions.into());
        }
        if !self.user_repository.delete(id).await? {
            return Err(DomainError::not_found("User"));
        }

        info!(user_id = %id, deleted_by = %principal.user_id, "User deleted");
        Ok(())
    }

    /// Verify a bearer token and load the caller.
    ///
    /// The role comes from the stored account rather than the token, and a
    /// token whose account no longer exists is rejected.
    pub async fn resolve_principal(&self, token: &str) -> DomainResult<Principal> {
        let claims = self.token_service.verify(token)?;
        let user_id = claims.user_id()?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        Ok(Principal::from(&user))
    }

    fn respond_with_token(&self, user: User) -> DomainResult<AuthResponse> {
        let issued = self.token_service.issue(&user)?;
        Ok(AuthResponse {
            token: issued.token,
            expires_at: issued.expires_at,
            user,
        })
    }
}

/// Trim an optional phone; blank becomes `None`, malformed is rejected
fn validate_phone(phone: Option<String>) -> DomainResult<Option<String>> {
    match phone.as_deref().and_then(non_blank) {
        None => Ok(None),
        Some(phone) if is_valid_phone(phone) => Ok(Some(phone.to_string())),
        Some(_) => Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
        }
        .into()),
    }
}
