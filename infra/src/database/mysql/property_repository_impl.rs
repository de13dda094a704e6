//! MySQL implementation of the PropertyRepository trait.
//!
//! Amenities and images are stored as JSON text; the agent snapshot and
//! location are flattened into columns.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};
use uuid::Uuid;

use estate_core::domain::entities::property::{
    AgentInfo, Coordinates, Features, Location, Property, PropertyStatus, PropertyType,
};
use estate_core::domain::value_objects::{FilterCriteria, SortOption};
use estate_core::errors::DomainError;
use estate_core::repositories::PropertyRepository;
use estate_shared::{Paginated, Pagination};

use super::db_error;
use super::filters::{order_by, push_page, push_where};

const COLUMNS: &str = "id, title, description, price, address, city, state, zip, country, \
     latitude, longitude, bedrooms, bathrooms, area, year_built, property_type, status, \
     amenities, images, agent_id, agent_name, agent_phone, agent_email, featured, \
     created_at, updated_at";

/// MySQL implementation of PropertyRepository
#[derive(Clone)]
pub struct MySqlPropertyRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlPropertyRepository {
    /// Create a new MySQL property repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Property entity
    fn row_to_property(row: &MySqlRow) -> Result<Property, DomainError> {
        let corrupt = |column: &str, e: &dyn std::fmt::Display| DomainError::Database {
            message: format!("Failed to read properties.{column}: {e}"),
        };
        let text = |column: &str| -> Result<String, DomainError> {
            row.try_get::<String, _>(column).map_err(|e| corrupt(column, &e))
        };

        let id = text("id")?;
        let agent_id = text("agent_id")?;
        let property_type = text("property_type")?;
        let status = text("status")?;
        let amenities: BTreeSet<String> =
            serde_json::from_str(&text("amenities")?).map_err(|e| corrupt("amenities", &e))?;
        let images: Vec<String> =
            serde_json::from_str(&text("images")?).map_err(|e| corrupt("images", &e))?;

        let latitude: Option<f64> = row.try_get("latitude").map_err(|e| corrupt("latitude", &e))?;
        let longitude: Option<f64> = row.try_get("longitude").map_err(|e| corrupt("longitude", &e))?;
        let coordinates = match (latitude, longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        };

        Ok(Property {
            id: Uuid::parse_str(&id).map_err(|e| corrupt("id", &e))?,
            title: text("title")?,
            description: text("description")?,
            price: row.try_get("price").map_err(|e| corrupt("price", &e))?,
            location: Location {
                address: text("address")?,
                city: text("city")?,
                state: text("state")?,
                zip: text("zip")?,
                country: text("country")?,
                coordinates,
            },
            features: Features {
                bedrooms: row.try_get("bedrooms").map_err(|e| corrupt("bedrooms", &e))?,
                bathrooms: row.try_get("bathrooms").map_err(|e| corrupt("bathrooms", &e))?,
                area: row.try_get("area").map_err(|e| corrupt("area", &e))?,
                year_built: row.try_get("year_built").map_err(|e| corrupt("year_built", &e))?,
                property_type: property_type
                    .parse::<PropertyType>()
                    .map_err(|e| corrupt("property_type", &e))?,
                status: status
                    .parse::<PropertyStatus>()
                    .map_err(|e| corrupt("status", &e))?,
            },
            amenities,
            images,
            agent: AgentInfo {
                id: Uuid::parse_str(&agent_id).map_err(|e| corrupt("agent_id", &e))?,
                name: text("agent_name")?,
                phone: row.try_get("agent_phone").map_err(|e| corrupt("agent_phone", &e))?,
                email: text("agent_email")?,
            },
            featured: row.try_get("featured").map_err(|e| corrupt("featured", &e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| corrupt("created_at", &e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| corrupt("updated_at", &e))?,
        })
    }

    fn json(value: &impl serde::Serialize, column: &str) -> Result<String, DomainError> {
        serde_json::to_string(value).map_err(|e| DomainError::Internal {
            message: format!("Failed to encode properties.{column}: {e}"),
        })
    }
}

#[async_trait]
impl PropertyRepository for MySqlPropertyRepository {
    async fn search(
        &self,
        criteria: &FilterCriteria,
        sort: SortOption,
        pagination: Pagination,
    ) -> Result<Paginated<Property>, DomainError> {
        let total = self.count(criteria).await?;
        if total <= pagination.offset() {
            return Ok(Paginated::new(Vec::new(), pagination, total));
        }

        let criteria = criteria.clone().normalized();
        let mut builder = QueryBuilder::<MySql>::new(format!("SELECT {COLUMNS} FROM properties"));
        push_where(&mut builder, &criteria);
        builder.push(order_by(sort));
        push_page(&mut builder, pagination);

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Property search failed"))?;

        let items = rows
            .iter()
            .map(Self::row_to_property)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated::new(items, pagination, total))
    }

    async fn count(&self, criteria: &FilterCriteria) -> Result<u64, DomainError> {
        let criteria = criteria.clone().normalized();
        let mut builder = QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM properties");
        push_where(&mut builder, &criteria);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Property count failed"))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = ? LIMIT 1");

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Property lookup failed"))?;

        row.as_ref().map(Self::row_to_property).transpose()
    }

    async fn create(&self, property: Property) -> Result<Property, DomainError> {
        let query = format!(
            "INSERT INTO properties ({COLUMNS}) VALUES \
             (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        );

        sqlx::query(&query)
            .bind(property.id.to_string())
            .bind(&property.title)
            .bind(&property.description)
            .bind(property.price)
            .bind(&property.location.address)
            .bind(&property.location.city)
            .bind(&property.location.state)
            .bind(&property.location.zip)
            .bind(&property.location.country)
            .bind(property.location.coordinates.map(|c| c.lat))
            .bind(property.location.coordinates.map(|c| c.lng))
            .bind(property.features.bedrooms)
            .bind(property.features.bathrooms)
            .bind(property.features.area)
            .bind(property.features.year_built)
            .bind(property.features.property_type.as_str())
            .bind(property.features.status.as_str())
            .bind(Self::json(&property.amenities, "amenities")?)
            .bind(Self::json(&property.images, "images")?)
            .bind(property.agent.id.to_string())
            .bind(&property.agent.name)
            .bind(&property.agent.phone)
            .bind(&property.agent.email)
            .bind(property.featured)
            .bind(property.created_at)
            .bind(property.updated_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to create property"))?;

        Ok(property)
    }

    async fn update(&self, property: Property) -> Result<Property, DomainError> {
        // id, agent and created_at are immutable and not written
        let query = r#"
            UPDATE properties SET
                title = ?, description = ?, price = ?,
                address = ?, city = ?, state = ?, zip = ?, country = ?,
                latitude = ?, longitude = ?,
                bedrooms = ?, bathrooms = ?, area = ?, year_built = ?,
                property_type = ?, status = ?,
                amenities = ?, images = ?, featured = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&property.title)
            .bind(&property.description)
            .bind(property.price)
            .bind(&property.location.address)
            .bind(&property.location.city)
            .bind(&property.location.state)
            .bind(&property.location.zip)
            .bind(&property.location.country)
            .bind(property.location.coordinates.map(|c| c.lat))
            .bind(property.location.coordinates.map(|c| c.lng))
            .bind(property.features.bedrooms)
            .bind(property.features.bathrooms)
            .bind(property.features.area)
            .bind(property.features.year_built)
            .bind(property.features.property_type.as_str())
            .bind(property.features.status.as_str())
            .bind(Self::json(&property.amenities, "amenities")?)
            .bind(Self::json(&property.images, "images")?)
            .bind(property.featured)
            .bind(property.updated_at)
            .bind(property.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update property"))?;

        if result.rows_affected() == 0 {
            // MySQL reports 0 for unchanged rows too, so confirm the row exists
            if self.find_by_id(property.id).await?.is_none() {
                return Err(DomainError::NotFound {
                    resource: "Property".to_string(),
                });
            }
        }

        Ok(property)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM properties WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete property"))?;

        Ok(result.rows_affected() > 0)
    }
}
