//! Listing configuration: page sizes and list limits for property endpoints

use serde::{Deserialize, Serialize};

use super::env_or;

/// Limits applied to property list endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingConfig {
    /// Page size used when the client does not send `limit`
    pub default_page_size: u32,

    /// Largest accepted `limit`
    pub max_page_size: u32,

    /// Number of listings returned by the featured list
    pub featured_limit: u32,

    /// Default number of listings returned by the recent list
    pub recent_limit: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
            featured_limit: 6,
            recent_limit: 3,
        }
    }
}

impl ListingConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_page_size: env_or("LISTING_DEFAULT_PAGE_SIZE", defaults.default_page_size),
            max_page_size: env_or("LISTING_MAX_PAGE_SIZE", defaults.max_page_size),
            featured_limit: env_or("LISTING_FEATURED_LIMIT", defaults.featured_limit),
            recent_limit: env_or("LISTING_RECENT_LIMIT", defaults.recent_limit),
        }
    }
}
