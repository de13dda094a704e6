//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App,
};
use estate_core::repositories::{
    InMemoryPropertyRepository, InMemoryUserRepository, PropertyRepository, UserRepository,
};
use estate_core::services::{AuthService, PropertyService, TokenService};
use estate_infra::DatabasePool;
use estate_shared::{AuthConfig, CorsConfig, Environment, HealthStatus, ListingConfig};

use crate::handlers::error::{json_error_handler, not_found, path_error_handler, query_error_handler};
use crate::middleware::{
    auth::{JwtAuth, PrincipalResolver},
    cors::create_cors,
    request_id::RequestIdMiddleware,
    security::SecurityMiddleware,
};
use crate::routes::{auth, health, properties, users};

/// Backing store, kept for health reporting
#[derive(Clone)]
pub enum Storage {
    Memory,
    MySql(DatabasePool),
}

impl Storage {
    pub fn name(&self) -> &'static str {
        match self {
            Storage::Memory => "memory",
            Storage::MySql(_) => "mysql",
        }
    }

    pub async fn status(&self) -> HealthStatus {
        match self {
            Storage::Memory => HealthStatus::Healthy,
            Storage::MySql(pool) => match pool.health_check().await {
                Ok(true) => HealthStatus::Healthy,
                Ok(false) => HealthStatus::Degraded,
                Err(_) => HealthStatus::Unhealthy,
            },
        }
    }
}

/// Application state that holds shared services
pub struct AppState<P, U>
where
    P: PropertyRepository,
    U: UserRepository,
{
    pub property_service: Arc<PropertyService<P, U>>,
    pub auth_service: Arc<AuthService<U>>,
    /// Page-size limits shared by every paginated endpoint
    pub listing: ListingConfig,
    pub storage: Storage,
}

impl<P, U> AppState<P, U>
where
    P: PropertyRepository,
    U: UserRepository,
{
    /// Wire services over the given repositories
    pub fn new(
        property_repository: Arc<P>,
        user_repository: Arc<U>,
        auth: AuthConfig,
        listing: ListingConfig,
        storage: Storage,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(auth.jwt.clone()));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            token_service,
            auth,
        ));
        let property_service = Arc::new(PropertyService::new(
            property_repository,
            user_repository,
            listing.clone(),
        ));

        Self {
            property_service,
            auth_service,
            listing,
            storage,
        }
    }
}

impl AppState<InMemoryPropertyRepository, InMemoryUserRepository> {
    /// Process-local state; everything is lost on restart
    pub fn in_memory(auth: AuthConfig, listing: ListingConfig) -> Self {
        Self::new(
            Arc::new(InMemoryPropertyRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            auth,
            listing,
            Storage::Memory,
        )
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<P, U>(
    app_state: web::Data<AppState<P, U>>,
    cors: &CorsConfig,
    environment: Environment,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: PropertyRepository + 'static,
    U: UserRepository + 'static,
{
    let resolver: Arc<dyn PrincipalResolver> = app_state.auth_service.clone();

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(web::Data::new(resolver))
        .app_data(
            web::JsonConfig::default()
                .limit(max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // Innermost first: security, CORS, request id, then access logging
        .wrap(SecurityMiddleware::for_environment(environment))
        .wrap(create_cors(cors))
        .wrap(RequestIdMiddleware)
        .wrap(Logger::new("%a \"%r\" %s %b %T req_id=%{x-request-id}o"))
        // Health check endpoint
        .route("/health", web::get().to(health::health_check::<P, U>))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/properties")
                        .route("", web::get().to(properties::search::<P, U>))
                        .route(
                            "",
                            web::post()
                                .to(properties::create_property::<P, U>)
                                .wrap(JwtAuth::new()),
                        )
                        .route("/featured/list", web::get().to(properties::featured::<P, U>))
                        .route("/recent/list", web::get().to(properties::recent::<P, U>))
                        .route("/{id}", web::get().to(properties::get_property::<P, U>))
                        .route(
                            "/{id}",
                            web::put()
                                .to(properties::update_property::<P, U>)
                                .wrap(JwtAuth::new()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(properties::delete_property::<P, U>)
                                .wrap(JwtAuth::new()),
                        ),
                )
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<P, U>))
                        .route("/login", web::post().to(auth::login::<P, U>))
                        .route("/me", web::get().to(auth::me::<P, U>).wrap(JwtAuth::new()))
                        .route(
                            "/me",
                            web::put().to(auth::update_me::<P, U>).wrap(JwtAuth::new()),
                        ),
                )
                .service(
                    web::scope("/users")
                        .route(
                            "",
                            web::get().to(users::list_users::<P, U>).wrap(JwtAuth::new()),
                        )
                        .route(
                            "/me/properties",
                            web::get()
                                .to(users::my_properties::<P, U>)
                                .wrap(JwtAuth::new()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(users::delete_user::<P, U>)
                                .wrap(JwtAuth::new()),
                        ),
                )
                // API documentation endpoint
                .route("/", web::get().to(health::api_index)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}
