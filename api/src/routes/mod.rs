//! HTTP route handlers, grouped by resource

pub mod auth;
pub mod health;
pub mod properties;
pub mod users;
