//! HTTP API for the EstateHub listing backend.
//!
//! Exposes the actix-web application factory so the binary and the
//! integration tests build the same app.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState, Storage};
pub use config::Config;
