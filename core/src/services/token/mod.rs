//! Token service module for JWT management
//!
//! HS256 access tokens carrying the user id and role. There are no refresh
//! tokens: clients log in again once a token expires.

mod service;


pub use service::{IssuedToken, TokenService};
