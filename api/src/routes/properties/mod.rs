//! Property route handlers
//!
//! - Public browsing (search, featured, recent, detail)
//! - Listing management for owners, agents and admins

pub mod detail;
pub mod list;
pub mod manage;

pub use detail::get_property;
pub use list::{featured, recent, search};
pub use manage::{create_property, delete_property, update_property};
