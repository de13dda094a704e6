//! Public listing endpoints: search, featured and recent

use actix_web::{web, HttpResponse};
use estate_core::repositories::{PropertyRepository, UserRepository};

use crate::app::AppState;
use crate::dto::property::{PropertyListQuery, PropertyListResponse, RecentQuery};
use crate::handlers::ApiError;

/// Handler for GET /api/v1/properties
///
/// Filters, sorts and paginates listings. Unknown `propertyType`/`status`
/// values yield an empty page; an unknown `sort` or an out-of-range
/// `page`/`limit` is a 400.
pub async fn search<P, U>(
    state: web::Data<AppState<P, U>>,
    query: web::Query<PropertyListQuery>,
) -> Result<HttpResponse, ApiError>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let (criteria, sort) = query.criteria()?;
    let page = state
        .property_service
        .search(criteria, sort, query.page, query.limit)
        .await?;

    Ok(HttpResponse::Ok().json(PropertyListResponse::from(page)))
}

/// Handler for GET /api/v1/properties/featured/list
pub async fn featured<P, U>(state: web::Data<AppState<P, U>>) -> Result<HttpResponse, ApiError>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let properties = state.property_service.featured().await?;
    Ok(HttpResponse::Ok().json(properties))
}

/// Handler for GET /api/v1/properties/recent/list
pub async fn recent<P, U>(
    state: web::Data<AppState<P, U>>,
    query: web::Query<RecentQuery>,
) -> Result<HttpResponse, ApiError>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let properties = state.property_service.recent(query.limit).await?;
    Ok(HttpResponse::Ok().json(properties))
}
