//! Filter criteria for property searches.

use std::str::FromStr;

use estate_shared::validation::non_blank;
use uuid::Uuid;

use crate::domain::entities::property::{Property, PropertyStatus, PropertyType};

/// Filter on a closed enum that keeps values outside the enum.
///
/// An unrecognized value is not an error: it is a filter no record can
/// satisfy, so the search yields an empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumFilter<T> {
    Is(T),
    Unrecognized(String),
}

impl<T: FromStr + PartialEq> EnumFilter<T> {
    /// Parse a raw query value; blank input means "no filter"
    pub fn parse(raw: &str) -> Option<Self> {
        let value = non_blank(raw)?;
        Some(match value.parse::<T>() {
            Ok(parsed) => EnumFilter::Is(parsed),
            Err(_) => EnumFilter::Unrecognized(value.to_string()),
        })
    }

    pub fn matches(&self, value: &T) -> bool {
        match self {
            EnumFilter::Is(expected) => expected == value,
            EnumFilter::Unrecognized(_) => false,
        }
    }
}

/// Optional constraints of a property search; `None` means unconstrained.
///
/// All supplied predicates must hold for a listing to match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of title, description, address or city
    pub search_text: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<f64>,
    pub property_type: Option<EnumFilter<PropertyType>>,
    pub status: Option<EnumFilter<PropertyStatus>>,
    /// Exact city name
    pub city: Option<String>,
    pub featured: Option<bool>,
    /// Listing agent; used for "my listings", never taken from the public query
    pub agent_id: Option<Uuid>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_min_bedrooms(mut self, bedrooms: u32) -> Self {
        self.min_bedrooms = Some(bedrooms);
        self
    }

    pub fn with_min_bathrooms(mut self, bathrooms: f64) -> Self {
        self.min_bathrooms = Some(bathrooms);
        self
    }

    pub fn with_property_type(mut self, raw: &str) -> Self {
        self.property_type = EnumFilter::parse(raw);
        self
    }

    pub fn with_status(mut self, raw: &str) -> Self {
        self.status = EnumFilter::parse(raw);
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn with_agent(mut self, agent_id: Uuid) -> Self {
        self.agent_id = Some(agent_id);
        self
    }

    /// Trim strings, drop blank ones and lower-case the search text.
    /// [`FilterCriteria::matches`] expects normalized criteria.
    pub fn normalized(self) -> Self {
        Self {
            search_text: self
                .search_text
                .as_deref()
                .and_then(non_blank)
                .map(str::to_lowercase),
            city: self.city.as_deref().and_then(non_blank).map(str::to_string),
            ..self
        }
    }

    /// True when no predicate is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `property` satisfies every supplied predicate
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(text) = &self.search_text {
            let haystacks = [
                &property.title,
                &property.description,
                &property.location.address,
                &property.location.city,
            ];
            if !haystacks.iter().any(|h| h.to_lowercase().contains(text.as_str())) {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| property.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| property.price > max) {
            return false;
        }
        if self
            .min_bedrooms
            .is_some_and(|min| property.features.bedrooms < min)
        {
            return false;
        }
        if self
            .min_bathrooms
            .is_some_and(|min| property.features.bathrooms < min)
        {
            return false;
        }
        if let Some(filter) = &self.property_type {
            if !filter.matches(&property.features.property_type) {
                return false;
            }
        }
        if let Some(filter) = &self.status {
            if !filter.matches(&property.features.status) {
                return false;
            }
        }
        if let Some(city) = &self.city {
            if property.location.city != *city {
                return false;
            }
        }
        if self.featured.is_some_and(|f| property.featured != f) {
            return false;
        }
        if self.agent_id.is_some_and(|id| property.agent.id != id) {
            return false;
        }
        true
    }
}
