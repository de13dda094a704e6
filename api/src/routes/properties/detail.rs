use actix_web::{web, HttpResponse};
use estate_core::domain::entities::property::Property;
use estate_core::repositories::{PropertyRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::ApiError;

/// Handler for GET /api/v1/properties/{id}
///
/// A malformed id is answered like an unknown one (404).
pub async fn get_property<P, U>(
    state: web::Data<AppState<P, U>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let id = Property::parse_id(&path)?;
    let property = state.property_service.get(id).await?;
    Ok(HttpResponse::Ok().json(property))
}
