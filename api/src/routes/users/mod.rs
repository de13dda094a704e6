//! Account administration and the caller's own listings

use actix_web::{web, HttpResponse};
use estate_core::domain::value_objects::SortOption;
use estate_core::errors::DomainError;
use estate_core::repositories::{PropertyRepository, UserRepository};
use estate_shared::Pagination;
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::auth::{MessageResponse, UserListResponse};
use crate::dto::property::PropertyListResponse;
use crate::dto::query::{PageQuery, SortedPageQuery};
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/users (admin only)
pub async fn list_users<P, U>(
    state: web::Data<AppState<P, U>>,
    auth: AuthContext,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let pagination = Pagination::with_max_limit(
        query.page.unwrap_or(1),
        query
            .limit
            .unwrap_or_else(|| i64::from(state.listing.default_page_size)),
        state.listing.max_page_size,
    )
    .map_err(DomainError::from)?;
    let users = state
        .auth_service
        .list_users(&auth.principal, pagination)
        .await?;

    Ok(HttpResponse::Ok().json(UserListResponse::from(users)))
}

/// Handler for DELETE /api/v1/users/{id} (admin, or the account itself)
///
/// The user's listings are kept.
pub async fn delete_user<P, U>(
    state: web::Data<AppState<P, U>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let id = Uuid::parse_str(path.trim()).map_err(|_| DomainError::not_found("User"))?;
    state.auth_service.delete_user(&auth.principal, id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}

/// Handler for GET /api/v1/users/me/properties
///
/// The caller's own listings, sorted and paginated like the public search.
pub async fn my_properties<P, U>(
    state: web::Data<AppState<P, U>>,
    auth: AuthContext,
    query: web::Query<SortedPageQuery>,
) -> Result<HttpResponse, ApiError>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let sort = SortOption::parse_optional(query.sort.as_deref()).map_err(DomainError::from)?;
    let page = state
        .property_service
        .list_for_agent(&auth.principal, sort, query.page, query.limit)
        .await?;

    Ok(HttpResponse::Ok().json(PropertyListResponse::from(page)))
}
