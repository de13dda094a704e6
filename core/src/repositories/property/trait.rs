//! Property repository trait defining the interface for listing persistence.
//!
//! Implementations must reproduce the search pipeline semantics exactly:
//! AND-ed predicates, the selected sort with ties kept in insertion order,
//! and `[offset, offset + limit)` slicing with the total counted before
//! slicing.

use async_trait::async_trait;
use estate_shared::{Paginated, Pagination};
use uuid::Uuid;

use crate::domain::entities::property::Property;
use crate::domain::value_objects::{FilterCriteria, SortOption};
use crate::errors::DomainError;

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Filter, sort and paginate listings
    ///
    /// # Returns
    /// * `Ok(Paginated<Property>)` - The requested page and totals
    /// * `Err(DomainError)` - Database or other error occurred
    async fn search(
        &self,
        criteria: &FilterCriteria,
        sort: SortOption,
        pagination: Pagination,
    ) -> Result<Paginated<Property>, DomainError>;

    /// Number of listings matching `criteria`
    async fn count(&self, criteria: &FilterCriteria) -> Result<u64, DomainError>;

    /// Find a listing by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Property))` - Listing found
    /// * `Ok(None)` - No listing with the given ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError>;

    /// Persist a new listing
    async fn create(&self, property: Property) -> Result<Property, DomainError>;

    /// Replace an existing listing
    ///
    /// # Returns
    /// * `Ok(Property)` - The stored listing
    /// * `Err(DomainError::NotFound)` - No listing with that ID
    async fn update(&self, property: Property) -> Result<Property, DomainError>;

    /// Delete a listing
    ///
    /// # Returns
    /// * `Ok(true)` - Listing was deleted
    /// * `Ok(false)` - Listing not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
