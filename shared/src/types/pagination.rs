//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest page size accepted unless a caller supplies its own ceiling
pub const MAX_LIMIT: u32 = 100;

/// Rejected pagination input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("page must be at least 1, got {0}")]
    InvalidPage(i64),

    #[error("limit must be greater than 0, got {0}")]
    InvalidLimit(i64),

    #[error("limit must not exceed {max}, got {limit}")]
    LimitTooLarge { limit: i64, max: u32 },
}

impl PaginationError {
    /// Name of the offending query parameter
    pub fn field(&self) -> &'static str {
        match self {
            PaginationError::InvalidPage(_) => "page",
            PaginationError::InvalidLimit(_) | PaginationError::LimitTooLarge { .. } => "limit",
        }
    }
}

/// Validated pagination parameters (1-indexed page, positive limit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    /// Validate raw page/limit values against [`MAX_LIMIT`]
    pub fn new(page: i64, limit: i64) -> Result<Self, PaginationError> {
        Self::with_max_limit(page, limit, MAX_LIMIT)
    }

    /// Validate raw page/limit values against a caller-supplied ceiling
    pub fn with_max_limit(page: i64, limit: i64, max_limit: u32) -> Result<Self, PaginationError> {
        if page < 1 || page > i64::from(u32::MAX) {
            return Err(PaginationError::InvalidPage(page));
        }
        if limit < 1 {
            return Err(PaginationError::InvalidLimit(limit));
        }
        if limit > i64::from(max_limit) {
            return Err(PaginationError::LimitTooLarge { limit, max: max_limit });
        }

        Ok(Self {
            page: page as u32,
            limit: limit as u32,
        })
    }

    /// First page with the given size; a zero size is raised to 1
    pub fn first(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
        }
    }

    /// Current page number (1-indexed)
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Number of items per page
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items skipped before this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// Half-open index range of this page inside a collection of `total`
    /// items. Both bounds are clamped to `total`, so a page past the end
    /// yields an empty range.
    pub fn bounds(&self, total: usize) -> (usize, usize) {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(total);
        let end = start.saturating_add(self.limit as usize).min(total);
        (start, end)
    }
}

/// Paginated result with metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Items of the requested page
    pub items: Vec<T>,

    /// Current page number
    pub page: u32,

    /// Items per page
    pub limit: u32,

    /// Total number of items across all pages
    pub total: u64,

    /// Total number of pages
    pub total_pages: u32,
}

impl<T> Paginated<T> {
    /// Create a new paginated result
    pub fn new(items: Vec<T>, pagination: Pagination, total: u64) -> Self {
        Self {
            items,
            page: pagination.page(),
            limit: pagination.limit(),
            total,
            total_pages: Self::calculate_total_pages(total, pagination.limit()),
        }
    }

    /// Create an empty result
    pub fn empty(pagination: Pagination) -> Self {
        Self::new(Vec::new(), pagination, 0)
    }

    /// `ceil(total / limit)`, and 0 when there are no items
    pub fn calculate_total_pages(total: u64, limit: u32) -> u32 {
        if total == 0 || limit == 0 {
            return 0;
        }
        let pages = total.div_ceil(u64::from(limit));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether a page after this one exists
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Transform the items using a function
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
        }
    }

    /// Check if the page is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
