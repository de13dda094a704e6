use actix_web::{web, HttpResponse};
use estate_core::repositories::{PropertyRepository, UserRepository};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{AuthResponse, LoginRequest};
use crate::handlers::ApiError;

/// Handler for POST /api/v1/auth/login
///
/// Unknown emails and wrong passwords both answer 401 with the same message.
pub async fn login<P, U>(
    state: web::Data<AppState<P, U>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    request.validate()?;

    let issued = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(AuthResponse::from(issued)))
}
