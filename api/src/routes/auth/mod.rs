//! Authentication route handlers
//!
//! This module contains the account endpoints:
//! - Registration and login (token issuance)
//! - Reading and updating the caller's profile

pub mod login;
pub mod me;
pub mod register;

pub use login::login;
pub use me::{me, update_me};
pub use register::register;
