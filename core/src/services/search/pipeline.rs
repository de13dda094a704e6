use estate_shared::{Paginated, Pagination};
use tracing::trace;

use crate::domain::entities::property::Property;
use crate::domain::value_objects::{FilterCriteria, SortOption};

/// Filter, sort and paginate `all`.
///
/// Criteria are normalized first. Matching listings are ordered with a
/// stable sort, so ties keep their order in `all`. A page past the end is
/// empty while `total` still counts every match.
pub fn query(
    all: &[Property],
    criteria: &FilterCriteria,
    sort: SortOption,
    pagination: Pagination,
) -> Paginated<Property> {
    let criteria = criteria.clone().normalized();

    let mut matched: Vec<&Property> = all.iter().filter(|p| criteria.matches(p)).collect();
    matched.sort_by(|a, b| sort.compare(a, b));

    let total = matched.len();
    let (start, end) = pagination.bounds(total);
    trace!(total, start, end, sort = %sort, "search pipeline");

    let items = matched[start..end].iter().map(|p| (*p).clone()).collect();
    Paginated::new(items, pagination, total as u64)
}

/// Number of listings in `all` matching `criteria`
pub fn count(all: &[Property], criteria: &FilterCriteria) -> u64 {
    let criteria = criteria.clone().normalized();
    all.iter().filter(|p| criteria.matches(p)).count() as u64
}
