//! Property entity representing a published real-estate listing.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use estate_shared::validation::is_valid_image_url;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult, ValidationError};

/// Kind of property being listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Plot,
    Penthouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Villa,
        PropertyType::Plot,
        PropertyType::Penthouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Villa => "villa",
            PropertyType::Plot => "plot",
            PropertyType::Penthouse => "penthouse",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "propertyType".to_string(),
            })
    }
}

/// Market status of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyStatus {
    ForSale,
    ForRent,
    Sold,
    Pending,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 4] = [
        PropertyStatus::ForSale,
        PropertyStatus::ForRent,
        PropertyStatus::Sold,
        PropertyStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "for-sale",
            PropertyStatus::ForRent => "for-rent",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "status".to_string(),
            })
    }
}

/// Geographic coordinates of a listing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Postal location of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Physical characteristics and market status of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub bedrooms: u32,
    pub bathrooms: f64,
    /// Floor or plot area, strictly positive
    pub area: f64,
    pub year_built: i32,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
}

/// Partial update of [`Features`]; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturesPatch {
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    pub area: Option<f64>,
    pub year_built: Option<i32>,
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
}

/// Snapshot of the listing agent's contact details taken at creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub email: String,
}

/// Submitted listing data before an id, agent and timestamps are assigned
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: Location,
    pub features: Features,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub featured: bool,
}

/// Partial update of a listing. Id, agent and creation time cannot change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub location: Option<Location>,
    pub features: Option<FeaturesPatch>,
    pub amenities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
}

impl PropertyPatch {
    pub fn is_empty(&self) -> bool {
        *self == PropertyPatch::default()
    }
}

/// Property entity
///
/// Every stored listing is published, so [`Property::validate`] holds for
/// any value returned by a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: Location,
    pub features: Features,
    pub amenities: BTreeSet<String>,
    pub images: Vec<String>,
    pub agent: AgentInfo,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Build and validate a new listing owned by `agent`
    pub fn new(draft: PropertyDraft, agent: AgentInfo) -> DomainResult<Self> {
        let now = Utc::now();
        let property = Self {
            id: Uuid::new_v4(),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            price: draft.price,
            location: trim_location(draft.location),
            features: draft.features,
            amenities: normalize_amenities(draft.amenities),
            images: trim_images(draft.images),
            agent,
            featured: draft.featured,
            created_at: now,
            updated_at: now,
        };

        property.validate()?;
        Ok(property)
    }

    /// Parse a listing id; malformed ids are reported as a missing listing
    pub fn parse_id(raw: &str) -> DomainResult<Uuid> {
        Uuid::parse_str(raw.trim()).map_err(|_| DomainError::not_found("Property"))
    }

    /// Check the listing invariants
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::required("title").into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::out_of_range("price", ">= 0").into());
        }
        if !self.features.area.is_finite() || self.features.area <= 0.0 {
            return Err(ValidationError::out_of_range("features.area", "> 0").into());
        }
        if !self.features.bathrooms.is_finite() || self.features.bathrooms < 0.0 {
            return Err(ValidationError::out_of_range("features.bathrooms", ">= 0").into());
        }
        if self.location.city.trim().is_empty() {
            return Err(ValidationError::required("location.city").into());
        }
        if let Some(coordinates) = self.location.coordinates {
            if !(-90.0..=90.0).contains(&coordinates.lat) {
                return Err(ValidationError::out_of_range("location.coordinates.lat", "-90..=90").into());
            }
            if !(-180.0..=180.0).contains(&coordinates.lng) {
                return Err(ValidationError::out_of_range("location.coordinates.lng", "-180..=180").into());
            }
        }
        if self.images.is_empty() {
            return Err(ValidationError::required("images").into());
        }
        if self.images.iter().any(|url| !is_valid_image_url(url)) {
            return Err(ValidationError::InvalidFormat {
                field: "images".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Apply a partial update. The listing is left untouched when the
    /// result would violate an invariant.
    pub fn apply_patch(&mut self, patch: PropertyPatch) -> DomainResult<()> {
        let mut updated = self.clone();

        if let Some(title) = patch.title {
            updated.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            updated.description = description.trim().to_string();
        }
        if let Some(price) = patch.price {
            updated.price = price;
        }
        if let Some(location) = patch.location {
            updated.location = trim_location(location);
        }
        if let Some(features) = patch.features {
            let target = &mut updated.features;
            if let Some(bedrooms) = features.bedrooms {
                target.bedrooms = bedrooms;
            }
            if let Some(bathrooms) = features.bathrooms {
                target.bathrooms = bathrooms;
            }
            if let Some(area) = features.area {
                target.area = area;
            }
            if let Some(year_built) = features.year_built {
                target.year_built = year_built;
            }
            if let Some(property_type) = features.property_type {
                target.property_type = property_type;
            }
            if let Some(status) = features.status {
                target.status = status;
            }
        }
        if let Some(amenities) = patch.amenities {
            updated.amenities = normalize_amenities(amenities);
        }
        if let Some(images) = patch.images {
            updated.images = trim_images(images);
        }
        if let Some(featured) = patch.featured {
            updated.featured = featured;
        }

        updated.validate()?;
        updated.updated_at = Utc::now();
        *self = updated;
        Ok(())
    }

    /// Whether `user_id` is the listing agent
    pub fn is_listed_by(&self, user_id: Uuid) -> bool {
        self.agent.id == user_id
    }
}

fn trim_location(location: Location) -> Location {
    Location {
        address: location.address.trim().to_string(),
        city: location.city.trim().to_string(),
        state: location.state.trim().to_string(),
        zip: location.zip.trim().to_string(),
        country: location.country.trim().to_string(),
        coordinates: location.coordinates,
    }
}

fn trim_images(images: Vec<String>) -> Vec<String> {
    images.into_iter().map(|url| url.trim().to_string()).collect()
}

fn normalize_amenities(amenities: Vec<String>) -> BTreeSet<String> {
    amenities
        .into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect()
}
