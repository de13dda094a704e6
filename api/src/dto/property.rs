//! Property request and response bodies

use estate_core::domain::entities::property::{
    Features, FeaturesPatch, Location, Property, PropertyDraft, PropertyPatch, PropertyStatus,
    PropertyType,
};
use estate_core::domain::value_objects::{FilterCriteria, SortOption};
use estate_core::errors::DomainResult;
use estate_shared::Paginated;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::query::blank_as_none;

/// `GET /properties` query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListQuery {
    pub search: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub max_price: Option<f64>,
    /// Minimum bedrooms
    #[serde(default, deserialize_with = "blank_as_none")]
    pub bedrooms: Option<u32>,
    /// Minimum bathrooms
    #[serde(default, deserialize_with = "blank_as_none")]
    pub bathrooms: Option<f64>,
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub city: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub featured: Option<bool>,
    pub sort: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<i64>,
}

impl PropertyListQuery {
    /// Split into criteria and sort; an unknown sort is rejected
    pub fn criteria(&self) -> DomainResult<(FilterCriteria, SortOption)> {
        let sort = SortOption::parse_optional(self.sort.as_deref())?;

        let mut criteria = FilterCriteria::new().with_price_range(self.min_price, self.max_price);
        if let Some(search) = &self.search {
            criteria = criteria.with_search(search.as_str());
        }
        if let Some(bedrooms) = self.bedrooms {
            criteria = criteria.with_min_bedrooms(bedrooms);
        }
        if let Some(bathrooms) = self.bathrooms {
            criteria = criteria.with_min_bathrooms(bathrooms);
        }
        if let Some(property_type) = &self.property_type {
            criteria = criteria.with_property_type(property_type);
        }
        if let Some(status) = &self.status {
            criteria = criteria.with_status(status);
        }
        if let Some(city) = &self.city {
            criteria = criteria.with_city(city.as_str());
        }
        if let Some(featured) = self.featured {
            criteria = criteria.with_featured(featured);
        }

        Ok((criteria.normalized(), sort))
    }
}

/// `GET /properties/recent/list` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<i64>,
}

/// `POST /properties` body
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub location: Location,

    pub features: Features,

    #[serde(default)]
    pub amenities: Vec<String>,

    #[validate(length(min = 1, message = "At least one property image is required"))]
    pub images: Vec<String>,

    #[serde(default)]
    pub featured: bool,
}

impl From<CreatePropertyRequest> for PropertyDraft {
    fn from(request: CreatePropertyRequest) -> Self {
        PropertyDraft {
            title: request.title,
            description: request.description,
            price: request.price,
            location: request.location,
            features: request.features,
            amenities: request.amenities,
            images: request.images,
            featured: request.featured,
        }
    }
}

/// Partial `features` in an update body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesUpdate {
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    pub area: Option<f64>,
    pub year_built: Option<i32>,
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
}

/// `PUT /properties/{id}` body; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    /// Replaces the whole location
    pub location: Option<Location>,

    pub features: Option<FeaturesUpdate>,

    pub amenities: Option<Vec<String>>,

    #[validate(length(min = 1, message = "At least one property image is required"))]
    pub images: Option<Vec<String>>,

    pub featured: Option<bool>,
}

impl From<UpdatePropertyRequest> for PropertyPatch {
    fn from(request: UpdatePropertyRequest) -> Self {
        PropertyPatch {
            title: request.title,
            description: request.description,
            price: request.price,
            location: request.location,
            features: request.features.map(|f| FeaturesPatch {
                bedrooms: f.bedrooms,
                bathrooms: f.bathrooms,
                area: f.area,
                year_built: f.year_built,
                property_type: f.property_type,
                status: f.status,
            }),
            amenities: request.amenities,
            images: request.images,
            featured: request.featured,
        }
    }
}

/// Paginated listing envelope: `{properties, page, limit, total, totalPages}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListResponse {
    pub properties: Vec<Property>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl From<Paginated<Property>> for PropertyListResponse {
    fn from(page: Paginated<Property>) -> Self {
        Self {
            properties: page.items,
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}

/// `DELETE /properties/{id}` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePropertyResponse {
    pub message: String,
    pub id: Uuid,
}
