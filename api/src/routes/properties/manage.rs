//! Authenticated listing management

use actix_web::{web, HttpResponse};
use estate_core::domain::entities::property::Property;
use estate_core::repositories::{PropertyRepository, UserRepository};
use validator::Validate;

use crate::app::AppState;
use crate::dto::property::{CreatePropertyRequest, DeletePropertyResponse, UpdatePropertyRequest};
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;

/// Handler for POST /api/v1/properties
///
/// Owners, agents and admins may publish. The caller becomes the listing's
/// agent; responds 201 with the stored record.
pub async fn create_property<P, U>(
    state: web::Data<AppState<P, U>>,
    auth: AuthContext,
    request: web::Json<CreatePropertyRequest>,
) -> Result<HttpResponse, ApiError>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let property = state
        .property_service
        .create(&auth.principal, request.into())
        .await?;

    Ok(HttpResponse::Created().json(property))
}

/// Handler for PUT /api/v1/properties/{id}
///
/// Only the owning agent or an admin may update.
pub async fn update_property<P, U>(
    state: web::Data<AppState<P, U>>,
    auth: AuthContext,
    path: web::Path<String>,
    request: web::Json<UpdatePropertyRequest>,
) -> Result<HttpResponse, ApiError>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let id = Property::parse_id(&path)?;
    let request = request.into_inner();
    request.validate()?;

    let property = state
        .property_service
        .update(&auth.principal, id, request.into())
        .await?;

    Ok(HttpResponse::Ok().json(property))
}

/// Handler for DELETE /api/v1/properties/{id}
pub async fn delete_property<P, U>(
    state: web::Data<AppState<P, U>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let id = Property::parse_id(&path)?;
    state.property_service.delete(&auth.principal, id).await?;

    Ok(HttpResponse::Ok().json(DeletePropertyResponse {
        message: "Property deleted successfully".to_string(),
        id,
    }))
}
