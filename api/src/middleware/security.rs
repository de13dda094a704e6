//! Security middleware: HTTPS enforcement and hardening headers.
//!
//! Production rejects plain-HTTP requests unless a trusted proxy reports
//! `X-Forwarded-Proto: https`. Hardening headers are added in every
//! environment; HSTS only when HTTPS is enforced.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{self, HeaderName, HeaderValue},
    Error,
};
use estate_core::errors::DomainError;
use estate_shared::Environment;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use crate::handlers::ApiError;

/// Security middleware factory
#[derive(Debug, Clone, Default)]
pub struct SecurityMiddleware {
    /// Reject requests that did not arrive over HTTPS
    enforce_https: bool,
    /// Peers whose `X-Forwarded-Proto` is believed
    trusted_proxies: Vec<String>,
}

impl SecurityMiddleware {
    /// HTTPS is enforced in production only
    pub fn for_environment(environment: Environment) -> Self {
        let enforce_https = environment.is_production();
        let trusted_proxies = std::env::var("TRUSTED_PROXIES")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        log::info!(
            "Security middleware configured: enforce_https={}, trusted_proxies={:?}",
            enforce_https,
            trusted_proxies
        );

        Self {
            enforce_https,
            trusted_proxies,
        }
    }

    /// Adds a trusted proxy to the whitelist
    pub fn with_trusted_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.trusted_proxies.push(proxy.into());
        self
    }

    pub fn enforcing_https(mut self) -> Self {
        self.enforce_https = true;
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            enforce_https: self.enforce_https,
            trusted_proxies: Rc::new(self.trusted_proxies.clone()),
        }))
    }
}

/// Security middleware service implementation
pub struct SecurityMiddlewareService<S> {
    service: Rc<S>,
    enforce_https: bool,
    trusted_proxies: Rc<Vec<String>>,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let enforce_https = self.enforce_https;
        let trusted_proxies = Rc::clone(&self.trusted_proxies);

        Box::pin(async move {
            if enforce_https && !is_secure_request(&req, &trusted_proxies) {
                log::warn!("Insecure request blocked: {} {}", req.method(), req.path());
                return Err(ApiError::from(DomainError::Forbidden {
                    message: "HTTPS required".to_string(),
                })
                .into());
            }

            let mut response = service.call(req).await?;
            add_security_headers(&mut response, enforce_https);
            Ok(response)
        })
    }
}

/// HTTPS directly, or via a trusted proxy
fn is_secure_request(req: &ServiceRequest, trusted_proxies: &[String]) -> bool {
    // Forwarded headers are not consulted here: only a TLS listener counts
    if req.app_config().secure() {
        return true;
    }

    let forwarded_https = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|proto| proto.eq_ignore_ascii_case("https"));

    forwarded_https
        && req
            .peer_addr()
            .is_some_and(|peer| trusted_proxies.iter().any(|trusted| *trusted == peer.ip().to_string()))
}

fn add_security_headers<B>(response: &mut ServiceResponse<B>, hsts: bool) {
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    // JSON only; nothing may be framed or loaded
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
    );
    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static("camera=(), geolocation=(), microphone=(), payment=()"),
    );

    if hsts {
        headers.insert(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({"status": "ok"}))
    }

    #[actix_web::test]
    async fn test_headers_added_without_hsts_in_development() {
        let app = test::init_service(
            App::new()
                .wrap(SecurityMiddleware::for_environment(Environment::Development))
                .route("/test", web::get().to(ok)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/test").to_request()).await;
        assert!(resp.status().is_success());
        assert_eq!(resp.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
        assert_eq!(resp.headers().get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
        assert!(resp.headers().get(header::STRICT_TRANSPORT_SECURITY).is_none());
    }

    #[actix_web::test]
    async fn test_plain_http_rejected_when_enforced() {
        let app = test::init_service(
            App::new()
                .wrap(SecurityMiddleware::default().enforcing_https())
                .route("/test", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get().uri("/test").to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(err.as_response_error().status_code(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_trusted_proxy_forwarded_https_is_accepted() {
        let app = test::init_service(
            App::new()
                .wrap(
                    SecurityMiddleware::default()
                        .enforcing_https()
                        .with_trusted_proxy("10.0.0.1"),
                )
                .route("/test", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/test")
            .peer_addr("10.0.0.1:4000".parse().unwrap())
            .insert_header(("X-Forwarded-Proto", "https"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert!(resp.headers().get(header::STRICT_TRANSPORT_SECURITY).is_some());

        let spoofed = test::TestRequest::get()
            .uri("/test")
            .peer_addr("192.168.1.9:4000".parse().unwrap())
            .insert_header(("X-Forwarded-Proto", "https"))
            .to_request();
        assert!(test::try_call_service(&app, spoofed).await.is_err());
    }
}
