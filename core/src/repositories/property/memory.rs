//! In-memory property repository.
//!
//! Listings are kept in insertion order so the search pipeline's stable
//! sort breaks ties by creation order, the same way the MySQL repository
//! does with its `seq` column.

use async_trait::async_trait;
use estate_shared::{Paginated, Pagination};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::property::Property;
use crate::domain::value_objects::{FilterCriteria, SortOption};
use crate::errors::DomainError;
use crate::services::search;

use super::trait_::PropertyRepository;

/// Property repository backed by a vector behind an async lock
#[derive(Clone, Default)]
pub struct InMemoryPropertyRepository {
    properties: Arc<RwLock<Vec<Property>>>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with `properties`, in order
    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self {
            properties: Arc::new(RwLock::new(properties)),
        }
    }

    pub async fn len(&self) -> usize {
        self.properties.read().await.len()
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn search(
        &self,
        criteria: &FilterCriteria,
        sort: SortOption,
        pagination: Pagination,
    ) -> Result<Paginated<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(search::query(&properties, criteria, sort, pagination))
    }

    async fn count(&self, criteria: &FilterCriteria) -> Result<u64, DomainError> {
        let properties = self.properties.read().await;
        Ok(search::count(&properties, criteria))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(properties.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, property: Property) -> Result<Property, DomainError> {
        let mut properties = self.properties.write().await;
        if properties.iter().any(|p| p.id == property.id) {
            return Err(DomainError::internal(format!(
                "duplicate property id {}",
                property.id
            )));
        }
        properties.push(property.clone());
        Ok(property)
    }

    async fn update(&self, property: Property) -> Result<Property, DomainError> {
        let mut properties = self.properties.write().await;
        let slot = properties
            .iter_mut()
            .find(|p| p.id == property.id)
            .ok_or_else(|| DomainError::not_found("Property"))?;
        *slot = property.clone();
        Ok(property)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut properties = self.properties.write().await;
        let before = properties.len();
        properties.retain(|p| p.id != id);
        Ok(properties.len() != before)
    }
}
