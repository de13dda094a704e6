use actix_web::{web, HttpResponse};
use estate_core::repositories::{PropertyRepository, UserRepository};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{AuthResponse, RegisterRequest};
use crate::handlers::ApiError;

/// Handler for POST /api/v1/auth/register
///
/// Creates a buyer, owner or agent account and signs it in.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Asha Rao",
///     "email": "asha@example.com",
///     "password": "correct horse",
///     "phone": "+91 98200 00000",
///     "role": "agent"
/// }
/// ```
///
/// # Errors
///
/// - 400 on invalid fields or a short password
/// - 403 when `role` is `admin`
/// - 409 when the email is already registered
pub async fn register<P, U>(
    state: web::Data<AppState<P, U>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let issued = state
        .auth_service
        .register(request.into_registration()?)
        .await?;

    Ok(HttpResponse::Created().json(AuthResponse::from(issued)))
}
