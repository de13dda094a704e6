//! Integration tests for the middleware stack of the assembled app

mod common;

use actix_web::{
    http::{header, StatusCode},
    test, web, App, HttpResponse,
};
use common::{app, bearer, register, state};
use estate_api::middleware::{AuthContext, JwtAuth, PrincipalResolver, RequestIdMiddleware};
use estate_core::domain::entities::user::UserRole;
use estate_core::services::TokenService;
use estate_shared::JwtConfig;
use serde_json::Value;
use std::sync::Arc;

#[actix_web::test]
async fn test_protected_route_rejects_bad_tokens() {
    let state = state();
    let (_, user) = register(&state, "asha@example.com", UserRole::Buyer).await;
    let app = test::init_service(app(state)).await;

    let expired = TokenService::new(
        JwtConfig::new("integration-test-secret").with_access_expiry_minutes(-10),
    )
    .issue(&user)
    .unwrap()
    .token;
    let foreign = TokenService::new(JwtConfig::new("some-other-secret"))
        .issue(&user)
        .unwrap()
        .token;

    for (authorization, code) in [
        (None, "UNAUTHORIZED"),
        (Some("Basic YWxhZGRpbjpvcGVuc2VzYW1l".to_string()), "UNAUTHORIZED"),
        (Some("Bearer garbage".to_string()), "TOKEN_INVALID"),
        (Some(format!("Bearer {foreign}")), "TOKEN_INVALID"),
        (Some(format!("Bearer {expired}")), "TOKEN_EXPIRED"),
    ] {
        let mut req = test::TestRequest::get().uri("/api/v1/auth/me");
        if let Some(value) = &authorization {
            req = req.insert_header((header::AUTHORIZATION, value.as_str()));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{authorization:?}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], code, "{authorization:?}");
    }
}

#[actix_web::test]
async fn test_error_responses_carry_request_id() {
    let app = test::init_service(app(state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("X-Request-ID", "trace-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-42");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/nowhere").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().contains_key("x-request-id"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_security_and_cors_headers_on_api_responses() {
    let app = test::init_service(app(state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/properties")
        .insert_header(("Origin", "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(!resp.headers().contains_key(header::STRICT_TRANSPORT_SECURITY));
}

#[actix_web::test]
async fn test_health_and_index() {
    let app = test::init_service(app(state())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["components"]["memory"], "healthy");

    let req = test::TestRequest::get().uri("/api/v1/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["endpoints"]["properties"]["search"]["path"], "/api/v1/properties");
}

async fn whoami(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().body(auth.principal.role.to_string())
}

#[actix_web::test]
async fn test_jwt_auth_uses_stored_role() {
    let state = state();
    let (token, _) = register(&state, "asha@example.com", UserRole::Owner).await;
    let resolver: Arc<dyn PrincipalResolver> = state.auth_service.clone();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(resolver))
            .wrap(RequestIdMiddleware)
            .route("/whoami", web::get().to(whoami).wrap(JwtAuth::new())),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, "owner");
}

#[actix_web::test]
async fn test_jwt_auth_without_resolver_is_an_internal_error() {
    let app = test::init_service(
        App::new()
            .wrap(RequestIdMiddleware)
            .route("/whoami", web::get().to(whoami).wrap(JwtAuth::new())),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(bearer("anything"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "An internal error occurred");
}
