//! Liveness and discovery endpoints

use actix_web::{web, HttpResponse};
use estate_core::repositories::{PropertyRepository, UserRepository};
use estate_shared::{HealthResponse, HealthStatus};

use crate::app::AppState;

/// Handler for GET /health
///
/// Reports the storage backend as a component; an unreachable database makes
/// the service unhealthy and answers 503.
pub async fn health_check<P, U>(state: web::Data<AppState<P, U>>) -> HttpResponse
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let storage = state.storage.status().await;
    let response = HealthResponse::healthy("estate-api", env!("CARGO_PKG_VERSION"))
        .with_component(state.storage.name(), storage);

    match response.status {
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(response),
        _ => HttpResponse::Ok().json(response),
    }
}

/// Handler for GET /api/v1/
pub async fn api_index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "EstateHub API v1",
        "endpoints": {
            "health": "/health",
            "properties": {
                "search": { "path": "/api/v1/properties", "method": "GET",
                    "query": ["search", "minPrice", "maxPrice", "bedrooms", "bathrooms",
                              "propertyType", "status", "city", "featured", "sort", "page", "limit"] },
                "detail": { "path": "/api/v1/properties/{id}", "method": "GET" },
                "featured": { "path": "/api/v1/properties/featured/list", "method": "GET" },
                "recent": { "path": "/api/v1/properties/recent/list", "method": "GET", "query": ["limit"] },
                "create": { "path": "/api/v1/properties", "method": "POST", "requires_auth": true },
                "update": { "path": "/api/v1/properties/{id}", "method": "PUT", "requires_auth": true },
                "delete": { "path": "/api/v1/properties/{id}", "method": "DELETE", "requires_auth": true }
            },
            "auth": {
                "register": { "path": "/api/v1/auth/register", "method": "POST" },
                "login": { "path": "/api/v1/auth/login", "method": "POST" },
                "me": { "path": "/api/v1/auth/me", "methods": ["GET", "PUT"], "requires_auth": true }
            },
            "users": {
                "list": { "path": "/api/v1/users", "method": "GET", "requires_auth": true, "role": "admin" },
                "delete": { "path": "/api/v1/users/{id}", "method": "DELETE", "requires_auth": true },
                "my_properties": { "path": "/api/v1/users/me/properties", "method": "GET", "requires_auth": true }
            }
        }
    }))
}
