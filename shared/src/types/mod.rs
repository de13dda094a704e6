//! Type definitions module
//!
//! - `pagination` - Validated page parameters and paginated results
//! - `response` - Health check responses

pub mod pagination;
pub mod response;

pub use pagination::{Paginated, Pagination, PaginationError, MAX_LIMIT};
pub use response::{HealthResponse, HealthStatus};
