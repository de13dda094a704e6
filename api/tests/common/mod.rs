//! Shared fixtures for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use estate_api::{create_app, AppState, Storage};
use estate_core::domain::entities::property::{
    Features, Location, Property, PropertyDraft, PropertyStatus, PropertyType,
};
use estate_core::domain::entities::user::{User, UserRole};
use estate_core::domain::value_objects::{Principal, Registration};
use estate_core::repositories::{InMemoryPropertyRepository, InMemoryUserRepository, UserRepository};
use estate_core::services::TokenService;
use estate_shared::{AuthConfig, CorsConfig, Environment, JwtConfig, ListingConfig, ServerConfig};
use serde_json::{json, Value};

pub type TestState = web::Data<AppState<InMemoryPropertyRepository, InMemoryUserRepository>>;

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt: JwtConfig::new("integration-test-secret"),
        // Lowest cost bcrypt accepts; keeps registration fast
        bcrypt_cost: 4,
        ..AuthConfig::default()
    }
}

pub fn state() -> TestState {
    web::Data::new(AppState::in_memory(auth_config(), ListingConfig::default()))
}

pub fn app(
    state: TestState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    create_app(
        state,
        &CorsConfig::development(),
        Environment::Development,
        ServerConfig::default().max_payload_size,
    )
}

/// State with an admin account seeded in the user store; returns the
/// admin's token alongside
pub async fn state_with_admin() -> (TestState, String, User) {
    state_with_admin_and_listing(ListingConfig::default()).await
}

pub async fn state_with_admin_and_listing(listing: ListingConfig) -> (TestState, String, User) {
    let users = Arc::new(InMemoryUserRepository::new());
    let admin = users
        .create(User::new(
            "Site Admin".to_string(),
            "admin@estatehub.example".to_string(),
            None,
            "not-a-usable-hash".to_string(),
            UserRole::Admin,
        ))
        .await
        .unwrap();
    let token = TokenService::new(auth_config().jwt).issue(&admin).unwrap().token;

    let state = AppState::new(
        Arc::new(InMemoryPropertyRepository::new()),
        users,
        auth_config(),
        listing,
        Storage::Memory,
    );
    (web::Data::new(state), token, admin)
}

/// Register an account directly through the service; returns its token
pub async fn register(state: &TestState, email: &str, role: UserRole) -> (String, User) {
    let issued = state
        .auth_service
        .register(Registration {
            name: format!("User {email}"),
            email: email.to_string(),
            password: "password123".to_string(),
            phone: None,
            role: Some(role),
        })
        .await
        .unwrap();
    (issued.token, issued.user)
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

pub fn draft(title: &str, city: &str, price: f64) -> PropertyDraft {
    PropertyDraft {
        title: title.to_string(),
        description: format!("{title} in {city}"),
        price,
        location: Location {
            address: "1 Harbour Road".to_string(),
            city: city.to_string(),
            state: "MH".to_string(),
            zip: "400001".to_string(),
            country: "India".to_string(),
            coordinates: None,
        },
        features: Features {
            bedrooms: 3,
            bathrooms: 2.0,
            area: 120.0,
            year_built: 2015,
            property_type: PropertyType::Apartment,
            status: PropertyStatus::ForSale,
        },
        amenities: vec!["parking".to_string()],
        images: vec!["https://images.example.com/1.jpg".to_string()],
        featured: false,
    }
}

/// Publish a listing as `owner`
pub async fn seed(state: &TestState, owner: &User, draft: PropertyDraft) -> Property {
    state
        .property_service
        .create(&Principal::from(owner), draft)
        .await
        .unwrap()
}

/// Valid `POST /properties` body
pub fn create_body(title: &str, city: &str, price: f64) -> Value {
    json!({
        "title": title,
        "description": "Bright and airy",
        "price": price,
        "location": {
            "address": "7 Palm Lane",
            "city": city,
            "state": "GA",
            "zip": "403001",
            "country": "India"
        },
        "features": {
            "bedrooms": 2,
            "bathrooms": 1.5,
            "area": 85.0,
            "yearBuilt": 2010,
            "propertyType": "villa",
            "status": "for-sale"
        },
        "amenities": ["pool", "garden"],
        "images": ["https://images.example.com/villa.jpg"]
    })
}
