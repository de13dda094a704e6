//! Unit tests for property service

use std::sync::Arc;

use estate_shared::ListingConfig;
use uuid::Uuid;

use crate::domain::entities::property::{FeaturesPatch, PropertyPatch, PropertyStatus};
use crate::domain::entities::user::{User, UserRole};
use crate::domain::value_objects::{FilterCriteria, Principal, SortOption};
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{
    InMemoryPropertyRepository, InMemoryUserRepository, PropertyRepository, UserRepository,
};
use crate::services::property::PropertyService;
use crate::services::search::tests::fixtures::{draft, listing};

type Service = PropertyService<InMemoryPropertyRepository, InMemoryUserRepository>;

struct Harness {
    service: Service,
    properties: Arc<InMemoryPropertyRepository>,
    users: Arc<InMemoryUserRepository>,
}

fn harness_with(properties: InMemoryPropertyRepository) -> Harness {
    let properties = Arc::new(properties);
    let users = Arc::new(InMemoryUserRepository::new());
    Harness {
        service: PropertyService::new(properties.clone(), users.clone(), ListingConfig::default()),
        properties,
        users,
    }
}

fn harness() -> Harness {
    harness_with(InMemoryPropertyRepository::new())
}

async fn member(h: &Harness, email: &str, role: UserRole) -> Principal {
    let user = User::new(
        "Member".to_string(),
        email.to_string(),
        Some("+91 98765 43210".to_string()),
        String::new(),
        role,
    );
    let user = h.users.create(user).await.unwrap();
    Principal::from(&user)
}

#[tokio::test]
async fn test_search_applies_defaults_and_validates_pagination() {
    let h = harness_with(InMemoryPropertyRepository::with_properties(
        (0..15).map(|i| listing(i, "Goa")).collect(),
    ));

    let result = h
        .service
        .search(FilterCriteria::new(), SortOption::Newest, None, None)
        .await
        .unwrap();
    assert_eq!(result.page, 1);
    assert_eq!(result.limit, 10);
    assert_eq!(result.items.len(), 10);
    assert_eq!(result.total_pages, 2);

    for (page, limit) in [(Some(0), None), (None, Some(0)), (None, Some(-5)), (None, Some(101))] {
        let err = h
            .service
            .search(FilterCriteria::new(), SortOption::Newest, page, limit)
            .await
            .unwrap_err();
        assert!(
            matches!(err, DomainError::ValidationErr(ValidationError::InvalidPagination { .. })),
            "page={page:?} limit={limit:?}"
        );
    }
}

#[tokio::test]
async fn test_featured_is_capped_and_newest_first() {
    let mut seeded: Vec<_> = (0..10).map(|i| listing(i, "Goa")).collect();
    for property in &mut seeded {
        property.featured = true;
    }
    seeded[3].featured = false;
    let h = harness_with(InMemoryPropertyRepository::with_properties(seeded));

    let featured = h.service.featured().await.unwrap();
    assert_eq!(featured.len(), 6);
    assert!(featured.iter().all(|p| p.featured));
    assert!(featured.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    assert_eq!(featured[0].title, "Listing 9");
}

#[tokio::test]
async fn test_recent_defaults_to_three() {
    let h = harness_with(InMemoryPropertyRepository::with_properties(
        (0..8).map(|i| listing(i, "Goa")).collect(),
    ));

    let recent = h.service.recent(None).await.unwrap();
    let titles: Vec<_> = recent.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Listing 7", "Listing 6", "Listing 5"]);

    assert_eq!(h.service.recent(Some(5)).await.unwrap().len(), 5);
    assert!(h.service.recent(Some(0)).await.is_err());
}

#[tokio::test]
async fn test_create_requires_publishing_role() {
    let h = harness();
    let buyer = member(&h, "buyer@example.com", UserRole::Buyer).await;

    let err = h
        .service
        .create(&buyer, draft("Cottage", "Goa", 90_000.0))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::RoleNotAllowed { .. })));
    assert_eq!(h.properties.len().await, 0);
}

#[tokio::test]
async fn test_create_snapshots_agent() {
    let h = harness();
    let agent = member(&h, "agent@example.com", UserRole::Agent).await;

    let created = h
        .service
        .create(&agent, draft("Cottage", "Goa", 90_000.0))
        .await
        .unwrap();

    assert_eq!(created.agent.id, agent.user_id);
    assert_eq!(created.agent.email, "agent@example.com");
    assert_eq!(h.service.get(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn test_create_for_unknown_user_is_unauthorized() {
    let h = harness();
    let ghost = Principal::new(Uuid::new_v4(), UserRole::Agent);

    let err = h
        .service
        .create(&ghost, draft("Cottage", "Goa", 90_000.0))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));
}

#[tokio::test]
async fn test_create_rejects_invalid_listing() {
    let h = harness();
    let owner = member(&h, "owner@example.com", UserRole::Owner).await;

    let mut no_images = draft("Cottage", "Goa", 90_000.0);
    no_images.images.clear();
    assert!(matches!(
        h.service.create(&owner, no_images).await,
        Err(DomainError::ValidationErr(_))
    ));
}

#[tokio::test]
async fn test_update_authorization() {
    let h = harness();
    let owner = member(&h, "owner@example.com", UserRole::Owner).await;
    let other = member(&h, "other@example.com", UserRole::Agent).await;
    let admin = member(&h, "admin@example.com", UserRole::Admin).await;

    let created = h
        .service
        .create(&owner, draft("Cottage", "Goa", 90_000.0))
        .await
        .unwrap();
    let patch = PropertyPatch {
        price: Some(85_000.0),
        ..Default::default()
    };

    let err = h
        .service
        .update(&other, created.id, patch.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InsufficientPermissions)));

    let updated = h.service.update(&owner, created.id, patch).await.unwrap();
    assert_eq!(updated.price, 85_000.0);

    let by_admin = h
        .service
        .update(
            &admin,
            created.id,
            PropertyPatch {
                features: Some(FeaturesPatch {
                    status: Some(PropertyStatus::Sold),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(by_admin.features.status, PropertyStatus::Sold);
    assert_eq!(by_admin.agent.id, owner.user_id);
    assert_eq!(by_admin.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let h = harness();
    let admin = member(&h, "admin@example.com", UserRole::Admin).await;

    let err = h
        .service
        .update(&admin, Uuid::new_v4(), PropertyPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_update_cannot_remove_all_images() {
    let h = harness();
    let owner = member(&h, "owner@example.com", UserRole::Owner).await;
    let created = h
        .service
        .create(&owner, draft("Cottage", "Goa", 90_000.0))
        .await
        .unwrap();

    let result = h
        .service
        .update(
            &owner,
            created.id,
            PropertyPatch {
                images: Some(Vec::new()),
                ..Default::default()
            },
        )
        .await;
    assert!(result.is_err());
    assert_eq!(h.service.get(created.id).await.unwrap().images, created.images);
}

#[tokio::test]
async fn test_delete_authorization() {
    let h = harness();
    let owner = member(&h, "owner@example.com", UserRole::Owner).await;
    let buyer = member(&h, "buyer@example.com", UserRole::Buyer).await;
    let created = h
        .service
        .create(&owner, draft("Cottage", "Goa", 90_000.0))
        .await
        .unwrap();

    assert!(h.service.delete(&buyer, created.id).await.is_err());
    h.service.delete(&owner, created.id).await.unwrap();
    assert!(matches!(
        h.service.get(created.id).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        h.service.delete(&owner, created.id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_list_for_agent_only_returns_own_listings() {
    let h = harness();
    let first = member(&h, "first@example.com", UserRole::Agent).await;
    let second = member(&h, "second@example.com", UserRole::Agent).await;

    for (i, who) in [&first, &second, &first, &first].into_iter().enumerate() {
        h.service
            .create(who, draft(&format!("Home {i}"), "Goa", 50_000.0 + i as f64))
            .await
            .unwrap();
    }

    let mine = h
        .service
        .list_for_agent(&first, SortOption::PriceAsc, None, None)
        .await
        .unwrap();
    assert_eq!(mine.total, 3);
    assert!(mine.items.iter().all(|p| p.agent.id == first.user_id));
    let titles: Vec<_> = mine.items.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Home 0", "Home 2", "Home 3"]);

    assert_eq!(
        h.service
            .count(FilterCriteria::new().with_agent(second.user_id))
            .await
            .unwrap(),
        1
    );
    assert_eq!(h.properties.count(&FilterCriteria::new()).await.unwrap(), 4);
}
