//! Mapping of domain and request errors to HTTP responses.
//!
//! Every failure leaves the API as an [`ErrorResponse`] body with a stable
//! code from [`error_codes`]. Server-side failures are logged with detail and
//! answered with a generic message.

use std::collections::HashMap;

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use estate_core::errors::{AuthError, DomainError, TokenError};
use estate_shared::{error_codes, ErrorResponse};

/// Error returned by every handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Malformed JSON body, query string or path segment
    #[error("{message}")]
    BadRequest { message: String },

    /// DTO validation failure
    #[error("Invalid request data")]
    Validation(#[from] validator::ValidationErrors),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Domain(err) => domain_code(err),
            ApiError::BadRequest { .. } => error_codes::BAD_REQUEST,
            ApiError::Validation(_) => error_codes::VALIDATION_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Domain(err) if self.status_code().is_server_error() => {
                log::error!("Request failed: {err}");
                ErrorResponse::new(self.code(), "An internal error occurred")
            }
            ApiError::Domain(DomainError::ValidationErr(err)) => {
                ErrorResponse::new(self.code(), err.to_string()).add_detail("field", err.field())
            }
            ApiError::Domain(err) => ErrorResponse::new(self.code(), err.to_string()),
            ApiError::BadRequest { message } => ErrorResponse::new(self.code(), message.clone()),
            ApiError::Validation(errors) => {
                ErrorResponse::new(self.code(), self.to_string()).add_detail("fields", field_messages(errors))
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(err) => domain_status(err),
            ApiError::BadRequest { .. } | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_client_error() {
            log::debug!("Rejected request ({status}): {self}");
        }
        HttpResponse::build(status).json(self.body())
    }
}

fn domain_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound { .. } | DomainError::Auth(AuthError::UserNotFound) => StatusCode::NOT_FOUND,
        DomainError::Unauthorized | DomainError::Auth(AuthError::InvalidCredentials) => {
            StatusCode::UNAUTHORIZED
        }
        DomainError::Token(TokenError::TokenGenerationFailed) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden { .. }
        | DomainError::Auth(AuthError::InsufficientPermissions)
        | DomainError::Auth(AuthError::RoleNotAllowed { .. }) => StatusCode::FORBIDDEN,
        DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
        DomainError::Auth(AuthError::EmailAlreadyRegistered) => StatusCode::CONFLICT,
        DomainError::Internal { .. } | DomainError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn domain_code(err: &DomainError) -> &'static str {
    match err {
        DomainError::Token(TokenError::TokenExpired) => error_codes::TOKEN_EXPIRED,
        DomainError::Token(TokenError::TokenGenerationFailed) => error_codes::INTERNAL_ERROR,
        DomainError::Token(_) => error_codes::TOKEN_INVALID,
        _ => match domain_status(err) {
            StatusCode::NOT_FOUND => error_codes::NOT_FOUND,
            StatusCode::UNAUTHORIZED => error_codes::UNAUTHORIZED,
            StatusCode::FORBIDDEN => error_codes::FORBIDDEN,
            StatusCode::BAD_REQUEST => error_codes::VALIDATION_ERROR,
            StatusCode::CONFLICT => error_codes::CONFLICT,
            _ => error_codes::INTERNAL_ERROR,
        },
    }
}

/// `{field: [message, ...]}` for validator failures
fn field_messages(errors: &validator::ValidationErrors) -> HashMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Error handler for `web::JsonConfig`
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("Malformed JSON body: {err}")).into()
}

/// Error handler for `web::QueryConfig`
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("Invalid query string: {err}")).into()
}

/// Error handler for `web::PathConfig`
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("Invalid path: {err}")).into()
}

/// Default service for unmatched routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
