//! Listing use cases: search, lists, and agent-owned CRUD

use std::sync::Arc;

use estate_shared::{ListingConfig, Paginated, Pagination};
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::property::{Property, PropertyDraft, PropertyPatch};
use crate::domain::value_objects::{FilterCriteria, Principal, SortOption};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{PropertyRepository, UserRepository};

/// Property service over a listing repository and the user directory
pub struct PropertyService<P, U>
where
    P: PropertyRepository,
    U: UserRepository,
{
    property_repository: Arc<P>,
    /// Used to snapshot the creating user's contact details
    user_repository: Arc<U>,
    config: ListingConfig,
}

impl<P, U> PropertyService<P, U>
where
    P: PropertyRepository,
    U: UserRepository,
{
    pub fn new(property_repository: Arc<P>, user_repository: Arc<U>, config: ListingConfig) -> Self {
        Self {
            property_repository,
            user_repository,
            config,
        }
    }

    /// Validate raw page/limit, falling back to page 1 and the default size
    pub fn pagination(&self, page: Option<i64>, limit: Option<i64>) -> DomainResult<Pagination> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(i64::from(self.config.default_page_size));
        Ok(Pagination::with_max_limit(page, limit, self.config.max_page_size)?)
    }

    /// Filtered, sorted and paginated listing search
    pub async fn search(
        &self,
        criteria: FilterCriteria,
        sort: SortOption,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> DomainResult<Paginated<Property>> {
        let pagination = self.pagination(page, limit)?;
        let criteria = criteria.normalized();

        let result = self
            .property_repository
            .search(&criteria, sort, pagination)
            .await?;

        debug!(
            total = result.total,
            page = result.page,
            limit = result.limit,
            sort = %sort,
            "Property search"
        );
        Ok(result)
    }

    /// Single listing by id
    pub async fn get(&self, id: Uuid) -> DomainResult<Property> {
        self.property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))
    }

    /// Featured listings, newest first, capped at the configured limit
    pub async fn featured(&self) -> DomainResult<Vec<Property>> {
        let criteria = FilterCriteria::new().with_featured(true);
        let pagination = Pagination::first(self.config.featured_limit);

        let result = self
            .property_repository
            .search(&criteria, SortOption::Newest, pagination)
            .await?;
        Ok(result.items)
    }

    /// Most recently created listings
    pub async fn recent(&self, limit: Option<i64>) -> DomainResult<Vec<Property>> {
        let limit = limit.unwrap_or(i64::from(self.config.recent_limit));
        let pagination = Pagination::with_max_limit(1, limit, self.config.max_page_size)?;

        let result = self
            .property_repository
            .search(&FilterCriteria::new(), SortOption::Newest, pagination)
            .await?;
        Ok(result.items)
    }

    /// Publish a new listing on behalf of `principal`
    pub async fn create(&self, principal: &Principal, draft: PropertyDraft) -> DomainResult<Property> {
        if !principal.can_publish() {
            return Err(AuthError::RoleNotAllowed {
                role: principal.role.to_string(),
            }
            .into());
        }

        let user = self
            .user_repository
            .find_by_id(principal.user_id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        let property = Property::new(draft, user.agent_info())?;
        let property = self.property_repository.create(property).await?;

        info!(property_id = %property.id, agent_id = %property.agent.id, "Property created");
        Ok(property)
    }

    /// Partially update a listing (owning agent or admin)
    pub async fn update(&self, principal: &Principal, id: Uuid, patch: PropertyPatch) -> DomainResult<Property> {
        let mut property = self.get(id).await?;
        ensure_can_manage(principal, &property)?;

        property.apply_patch(patch)?;
        let property = self.property_repository.update(property).await?;

        info!(property_id = %property.id, updated_by = %principal.user_id, "Property updated");
        Ok(property)
    }

    /// Delete a listing (owning agent or admin)
    pub async fn delete(&self, principal: &Principal, id: Uuid) -> DomainResult<()> {
        let property = self.get(id).await?;
        ensure_can_manage(principal, &property)?;

        if !self.property_repository.delete(id).await? {
            // Removed concurrently between the lookup and the delete
            return Err(DomainError::not_found("Property"));
        }

        info!(property_id = %id, deleted_by = %principal.user_id, "Property deleted");
        Ok(())
    }

    /// The caller's own listings, through the same search pipeline
    pub async fn list_for_agent(
        &self,
        principal: &Principal,
        sort: SortOption,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> DomainResult<Paginated<Property>> {
        let criteria = FilterCriteria::new().with_agent(principal.user_id);
        self.search(criteria, sort, page, limit).await
    }

    /// Number of listings matching `criteria`
    pub async fn count(&self, criteria: FilterCriteria) -> DomainResult<u64> {
        self.property_repository.count(&criteria.normalized()).await
    }
}

fn ensure_can_manage(principal: &Principal, property: &Property) -> DomainResult<()> {
    if principal.can_manage(property) {
        Ok(())
    } else {
        Err(AuthError::InsufficientPermissions.into())
    }
}
