//! Domain entities representing core business objects.

pub mod property;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use property::{
    AgentInfo, Coordinates, Features, FeaturesPatch, Location, Property, PropertyDraft,
    PropertyPatch, PropertyStatus, PropertyType,
};
pub use token::Claims;
pub use user::{User, UserRole};
