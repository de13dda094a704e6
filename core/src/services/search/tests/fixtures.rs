//! Listing fixtures shared by the pipeline and service tests

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::property::{
    AgentInfo, Features, Location, Property, PropertyDraft, PropertyStatus, PropertyType,
};

pub(crate) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

pub(crate) fn agent(id: Uuid) -> AgentInfo {
    AgentInfo {
        id,
        name: "Test Agent".to_string(),
        phone: None,
        email: "agent@example.com".to_string(),
    }
}

/// Listing `n`: created `n` minutes after [`base_time`], priced
/// `100_000 + n * 1_000`
pub(crate) fn listing(n: i64, city: &str) -> Property {
    let created_at = base_time() + Duration::minutes(n);
    Property {
        id: Uuid::new_v4(),
        title: format!("Listing {n}"),
        description: "Bright and airy".to_string(),
        price: 100_000.0 + n as f64 * 1_000.0,
        location: Location {
            address: format!("{n} Main Street"),
            city: city.to_string(),
            state: "State".to_string(),
            zip: "00000".to_string(),
            country: "Country".to_string(),
            coordinates: None,
        },
        features: Features {
            bedrooms: (n % 5) as u32,
            bathrooms: (n % 3) as f64 + 0.5,
            area: 80.0 + n as f64,
            year_built: 2000,
            property_type: PropertyType::ALL[(n as usize) % PropertyType::ALL.len()],
            status: PropertyStatus::ALL[(n as usize) % PropertyStatus::ALL.len()],
        },
        amenities: BTreeSet::new(),
        images: vec![format!("https://img.example.com/{n}.jpg")],
        agent: agent(Uuid::nil()),
        featured: n % 4 == 0,
        created_at,
        updated_at: created_at,
    }
}

/// Valid draft for service-level create calls
pub(crate) fn draft(title: &str, city: &str, price: f64) -> PropertyDraft {
    PropertyDraft {
        title: title.to_string(),
        description: "Freshly renovated".to_string(),
        price,
        location: Location {
            address: "1 Harbour Road".to_string(),
            city: city.to_string(),
            state: "State".to_string(),
            zip: "12345".to_string(),
            country: "Country".to_string(),
            coordinates: None,
        },
        features: Features {
            bedrooms: 3,
            bathrooms: 2.0,
            area: 120.0,
            year_built: 2015,
            property_type: PropertyType::House,
            status: PropertyStatus::ForSale,
        },
        amenities: vec!["Garden".to_string()],
        images: vec!["https://img.example.com/house.jpg".to_string()],
        featured: false,
    }
}
