//! # EstateHub Core
//!
//! Core business logic and domain layer for the EstateHub backend.
//! This crate contains domain entities, the property search pipeline,
//! business services, repository interfaces and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    AgentInfo, Claims, Coordinates, Features, FeaturesPatch, Location, Property, PropertyDraft,
    PropertyPatch, PropertyStatus, PropertyType, User, UserRole,
};
pub use domain::value_objects::{
    AuthResponse, EnumFilter, FilterCriteria, Principal, ProfileUpdate, Registration, SortOption,
};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{
    InMemoryPropertyRepository, InMemoryUserRepository, PropertyRepository, UserRepository,
};
pub use services::{AuthService, IssuedToken, PropertyService, TokenService};
