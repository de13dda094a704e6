//! Error types for authentication, tokens and input validation

use thiserror::Error;

/// Authentication and authorization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the two cases share one message
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email is already registered")]
    EmailAlreadyRegistered,

    #[error("User not found")]
    UserNotFound,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Role '{role}' is not allowed to perform this action")]
    RoleNotAllowed { role: String },
}

/// JWT errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Value out of range for field: {field} ({constraint})")]
    OutOfRange { field: String, constraint: String },

    #[error("Field {field} must be at least {min} characters long")]
    TooShort { field: String, min: usize },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid {field}: {message}")]
    InvalidPagination { field: String, message: String },

    #[error("Unknown sort option '{value}' (expected newest, oldest, price-desc or price-asc)")]
    UnknownSortOption { value: String },
}

impl ValidationError {
    /// Field the error refers to
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::TooShort { field, .. }
            | ValidationError::InvalidPagination { field, .. } => field,
            ValidationError::InvalidEmail => "email",
            ValidationError::UnknownSortOption { .. } => "sort",
        }
    }

    pub(crate) fn required(field: &str) -> Self {
        ValidationError::RequiredField {
            field: field.to_string(),
        }
    }

    pub(crate) fn out_of_range(field: &str, constraint: &str) -> Self {
        ValidationError::OutOfRange {
            field: field.to_string(),
            constraint: constraint.to_string(),
        }
    }
}
