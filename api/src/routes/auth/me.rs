use actix_web::{web, HttpResponse};
use estate_core::repositories::{PropertyRepository, UserRepository};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{UpdateProfileRequest, UserResponse};
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/auth/me
pub async fn me<P, U>(
    state: web::Data<AppState<P, U>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let user = state.auth_service.current_user(&auth.principal).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Handler for PUT /api/v1/auth/me
///
/// Updates the caller's name and/or phone; an empty phone clears it.
pub async fn update_me<P, U>(
    state: web::Data<AppState<P, U>>,
    auth: AuthContext,
    request: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let user = state
        .auth_service
        .update_profile(&auth.principal, request.into())
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
