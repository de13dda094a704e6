//! Sort orders available to property lists.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::entities::property::Property;
use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Creation time, newest first
    #[default]
    Newest,
    /// Creation time, oldest first
    Oldest,
    /// Price, highest first
    PriceDesc,
    /// Price, lowest first
    PriceAsc,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::Oldest => "oldest",
            SortOption::PriceDesc => "price-desc",
            SortOption::PriceAsc => "price-asc",
        }
    }

    /// Comparator for this order. Equal keys compare as `Equal` so a stable
    /// sort keeps their original order.
    pub fn compare(&self, a: &Property, b: &Property) -> Ordering {
        match self {
            SortOption::Newest => b.created_at.cmp(&a.created_at),
            SortOption::Oldest => a.created_at.cmp(&b.created_at),
            SortOption::PriceDesc => b.price.total_cmp(&a.price),
            SortOption::PriceAsc => a.price.total_cmp(&b.price),
        }
    }

    /// Parse an optional raw value; blank or missing means the default
    pub fn parse_optional(raw: Option<&str>) -> Result<Self, ValidationError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(SortOption::default()),
            Some(value) => value.parse(),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOption::Newest),
            "oldest" => Ok(SortOption::Oldest),
            "price-desc" => Ok(SortOption::PriceDesc),
            "price-asc" => Ok(SortOption::PriceAsc),
            other => Err(ValidationError::UnknownSortOption {
                value: other.to_string(),
            }),
        }
    }
}
