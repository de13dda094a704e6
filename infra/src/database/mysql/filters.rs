//! Translation of search criteria into MySQL clauses.
//!
//! Mirrors the in-memory pipeline: every predicate becomes one conjunct,
//! the sort key is followed by `seq` so ties keep insertion order, and an
//! unrecognized enum filter becomes `1 = 0`.

use estate_core::domain::value_objects::{EnumFilter, FilterCriteria, SortOption};
use estate_shared::Pagination;
use sqlx::{MySql, QueryBuilder};

/// Append `WHERE ...` for normalized `criteria`
pub(crate) fn push_where(builder: &mut QueryBuilder<'_, MySql>, criteria: &FilterCriteria) {
    builder.push(" WHERE 1 = 1");

    if let Some(text) = &criteria.search_text {
        let pattern = format!("%{}%", escape_like(text));
        builder.push(" AND (");
        for (i, column) in ["title", "description", "address", "city"].iter().enumerate() {
            if i > 0 {
                builder.push(" OR ");
            }
            // Binary comparison: accents and widths are distinct, as in `str::contains`
            builder.push(format!("LOWER({column}) COLLATE utf8mb4_bin LIKE "));
            builder.push_bind(pattern.clone());
        }
        builder.push(")");
    }
    if let Some(min) = criteria.min_price {
        builder.push(" AND price >= ").push_bind(min);
    }
    if let Some(max) = criteria.max_price {
        builder.push(" AND price <= ").push_bind(max);
    }
    if let Some(min) = criteria.min_bedrooms {
        builder.push(" AND bedrooms >= ").push_bind(min);
    }
    if let Some(min) = criteria.min_bathrooms {
        builder.push(" AND bathrooms >= ").push_bind(min);
    }
    match &criteria.property_type {
        Some(EnumFilter::Is(t)) => {
            builder.push(" AND property_type = ").push_bind(t.as_str());
        }
        Some(EnumFilter::Unrecognized(_)) => {
            builder.push(" AND 1 = 0");
        }
        None => {}
    }
    match &criteria.status {
        Some(EnumFilter::Is(s)) => {
            builder.push(" AND status = ").push_bind(s.as_str());
        }
        Some(EnumFilter::Unrecognized(_)) => {
            builder.push(" AND 1 = 0");
        }
        None => {}
    }
    if let Some(city) = &criteria.city {
        builder.push(" AND city = ").push_bind(city.clone());
    }
    if let Some(featured) = criteria.featured {
        builder.push(" AND featured = ").push_bind(featured);
    }
    if let Some(agent_id) = criteria.agent_id {
        builder.push(" AND agent_id = ").push_bind(agent_id.to_string());
    }
}

/// `ORDER BY` for a sort option, with insertion order as the tie-break
pub(crate) fn order_by(sort: SortOption) -> &'static str {
    match sort {
        SortOption::Newest => " ORDER BY created_at DESC, seq ASC",
        SortOption::Oldest => " ORDER BY created_at ASC, seq ASC",
        SortOption::PriceDesc => " ORDER BY price DESC, seq ASC",
        SortOption::PriceAsc => " ORDER BY price ASC, seq ASC",
    }
}

/// Append `LIMIT ? OFFSET ?`
pub(crate) fn push_page(builder: &mut QueryBuilder<'_, MySql>, pagination: Pagination) {
    builder
        .push(" LIMIT ")
        .push_bind(pagination.limit())
        .push(" OFFSET ")
        .push_bind(pagination.offset());
}

/// Escape LIKE wildcards so search text matches literally
pub(crate) fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
