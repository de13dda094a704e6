//! Property listing service

mod service;

#[cfg(test)]
mod tests;

pub use service::PropertyService;
