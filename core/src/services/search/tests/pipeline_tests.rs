use chrono::Duration;
use estate_shared::Pagination;

use super::fixtures::{base_time, listing};
use crate::domain::entities::property::{Property, PropertyType};
use crate::domain::value_objects::{FilterCriteria, SortOption};
use crate::services::search::{count, query};

fn page(page: i64, limit: i64) -> Pagination {
    Pagination::new(page, limit).unwrap()
}

fn collection(n: i64) -> Vec<Property> {
    (0..n).map(|i| listing(i, "Pune")).collect()
}

fn titles(items: &[Property]) -> Vec<String> {
    items.iter().map(|p| p.title.clone()).collect()
}

#[test]
fn test_empty_criteria_returns_first_page_newest_first() {
    let all = collection(12);
    let result = query(&all, &FilterCriteria::new(), SortOption::default(), page(1, 5));

    assert_eq!(result.total, 12);
    assert_eq!(result.total_pages, 3);
    assert_eq!(
        titles(&result.items),
        ["Listing 11", "Listing 10", "Listing 9", "Listing 8", "Listing 7"]
    );
}

#[test]
fn test_search_text_matches_any_field_case_insensitively() {
    let mut all = collection(6);
    all[1].title = "Sunny PENTHOUSE".to_string();
    all[2].description = "Has a penthouse terrace".to_string();
    all[3].location.address = "Penthouse Lane".to_string();
    all[4].location.city = "Penthouseville".to_string();

    let criteria = FilterCriteria::new().with_search("  penthouse ");
    let result = query(&all, &criteria, SortOption::Oldest, page(1, 10));

    assert_eq!(result.total, 4);
    for item in &result.items {
        let fields = [
            &item.title,
            &item.description,
            &item.location.address,
            &item.location.city,
        ];
        assert!(fields.iter().any(|f| f.to_lowercase().contains("penthouse")));
    }
    for excluded in [&all[0], &all[5]] {
        assert!(!result.items.iter().any(|p| p.id == excluded.id));
    }
}

#[test]
fn test_adding_criteria_never_grows_result() {
    let all = collection(40);
    let steps = [
        FilterCriteria::new(),
        FilterCriteria::new().with_price_range(Some(105_000.0), None),
        FilterCriteria::new().with_price_range(Some(105_000.0), Some(130_000.0)),
        FilterCriteria::new()
            .with_price_range(Some(105_000.0), Some(130_000.0))
            .with_min_bedrooms(2),
        FilterCriteria::new()
            .with_price_range(Some(105_000.0), Some(130_000.0))
            .with_min_bedrooms(2)
            .with_min_bathrooms(1.5),
        FilterCriteria::new()
            .with_price_range(Some(105_000.0), Some(130_000.0))
            .with_min_bedrooms(2)
            .with_min_bathrooms(1.5)
            .with_property_type("house"),
    ];

    let sizes: Vec<u64> = steps.iter().map(|c| count(&all, c)).collect();
    assert_eq!(sizes[0], 40);
    assert!(sizes.windows(2).all(|w| w[1] <= w[0]), "sizes: {sizes:?}");
}

#[test]
fn test_pages_cover_filtered_set_exactly_once() {
    let all = collection(23);
    let criteria = FilterCriteria::new().with_min_bedrooms(1);
    let full = query(&all, &criteria, SortOption::PriceDesc, page(1, 100));

    let mut stitched = Vec::new();
    for p in 1..=full.total_pages.max(1) {
        let result = query(&all, &criteria, SortOption::PriceDesc, page(i64::from(p), 4));
        assert_eq!(result.total, full.total);
        stitched.extend(result.items);
    }

    assert_eq!(stitched.len() as u64, full.total);
    assert_eq!(titles(&stitched), titles(&full.items));
}

#[test]
fn test_total_pages_formula() {
    let all = collection(10);
    for limit in 1..=12 {
        let result = query(&all, &FilterCriteria::new(), SortOption::Newest, page(1, limit));
        assert_eq!(result.total_pages as i64, (10 + limit - 1) / limit);
    }

    let empty = query(&[], &FilterCriteria::new(), SortOption::Newest, page(1, 10));
    assert_eq!(empty.total, 0);
    assert_eq!(empty.total_pages, 0);
    assert!(empty.items.is_empty());
}

#[test]
fn test_price_asc_is_reverse_of_price_desc_without_ties() {
    let all = collection(15);
    let asc = query(&all, &FilterCriteria::new(), SortOption::PriceAsc, page(1, 100));
    let desc = query(&all, &FilterCriteria::new(), SortOption::PriceDesc, page(1, 100));

    let mut reversed = titles(&desc.items);
    reversed.reverse();
    assert_eq!(titles(&asc.items), reversed);
    assert!(asc.items.windows(2).all(|w| w[0].price <= w[1].price));
}

#[test]
fn test_ties_keep_collection_order() {
    let mut all = collection(6);
    for property in &mut all {
        property.created_at = base_time();
        property.price = 500_000.0;
    }

    for sort in [
        SortOption::Newest,
        SortOption::Oldest,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
    ] {
        let result = query(&all, &FilterCriteria::new(), sort, page(1, 10));
        assert_eq!(titles(&result.items), titles(&all), "sort {sort}");
    }
}

#[test]
fn test_oldest_sorts_by_creation_ascending() {
    let mut all = collection(4);
    all[0].created_at = base_time() + Duration::days(1);

    let result = query(&all, &FilterCriteria::new(), SortOption::Oldest, page(1, 10));
    assert_eq!(
        titles(&result.items),
        ["Listing 1", "Listing 2", "Listing 3", "Listing 0"]
    );
}

#[test]
fn test_mumbai_second_page() {
    // 25 listings, 10 of them in Mumbai, interleaved with other cities
    let all: Vec<Property> = (0..25)
        .map(|i| {
            let city = if i % 5 < 2 { "Mumbai" } else { "Delhi" };
            listing(i, city)
        })
        .collect();
    let mumbai: Vec<&Property> = all.iter().filter(|p| p.location.city == "Mumbai").collect();
    assert_eq!(mumbai.len(), 10);

    let criteria = FilterCriteria::new().with_city("Mumbai");
    let result = query(&all, &criteria, SortOption::Oldest, page(2, 4));

    assert_eq!(result.total, 10);
    assert_eq!(result.total_pages, 3);
    assert_eq!(result.page, 2);
    assert_eq!(result.limit, 4);
    let expected: Vec<String> = mumbai[4..8].iter().map(|p| p.title.clone()).collect();
    assert_eq!(titles(&result.items), expected);
}

#[test]
fn test_unrecognized_property_type_matches_nothing() {
    let all = collection(10);
    let criteria = FilterCriteria::new().with_property_type("castle");
    let result = query(&all, &criteria, SortOption::Newest, page(1, 10));

    assert!(result.items.is_empty());
    assert_eq!(result.total, 0);
    assert_eq!(result.total_pages, 0);
}

#[test]
fn test_unrecognized_status_matches_nothing() {
    let all = collection(10);
    let criteria = FilterCriteria::new().with_status("for-lease");
    assert_eq!(count(&all, &criteria), 0);
}

#[test]
fn test_inverted_price_bounds_yield_empty_result() {
    let all = collection(10);
    let criteria = FilterCriteria::new().with_price_range(Some(150_000.0), Some(110_000.0));
    let result = query(&all, &criteria, SortOption::Newest, page(1, 10));

    assert_eq!(result.total, 0);
    assert!(result.items.is_empty());
}

#[test]
fn test_price_bounds_are_inclusive() {
    let all = collection(10);
    let criteria = FilterCriteria::new().with_price_range(Some(102_000.0), Some(104_000.0));
    let result = query(&all, &criteria, SortOption::PriceAsc, page(1, 10));

    assert_eq!(titles(&result.items), ["Listing 2", "Listing 3", "Listing 4"]);
}

#[test]
fn test_page_past_end_is_empty_but_counts_total() {
    let all = collection(7);
    let result = query(&all, &FilterCriteria::new(), SortOption::Newest, page(5, 3));

    assert!(result.items.is_empty());
    assert_eq!(result.total, 7);
    assert_eq!(result.total_pages, 3);
}

#[test]
fn test_city_match_is_exact_after_trimming() {
    let mut all = collection(3);
    all[0].location.city = "Mumbai".to_string();
    all[1].location.city = "Navi Mumbai".to_string();
    all[2].location.city = "mumbai".to_string();

    let result = query(
        &all,
        &FilterCriteria::new().with_city("  Mumbai "),
        SortOption::Newest,
        page(1, 10),
    );
    assert_eq!(titles(&result.items), ["Listing 0"]);
}

#[test]
fn test_featured_and_type_filters() {
    let all = collection(20);
    let featured = count(&all, &FilterCriteria::new().with_featured(true));
    assert_eq!(featured, all.iter().filter(|p| p.featured).count() as u64);

    let villas = query(
        &all,
        &FilterCriteria::new().with_property_type("villa"),
        SortOption::Newest,
        page(1, 100),
    );
    assert!(villas
        .items
        .iter()
        .all(|p| p.features.property_type == PropertyType::Villa));
    assert_eq!(villas.total, 4);
}
