//! Property filter/sort/paginate pipeline
//!
//! The single implementation of listing search semantics. The in-memory
//! repository calls it directly; the MySQL repository translates the same
//! semantics into SQL.

mod pipeline;

#[cfg(test)]
pub(crate) mod tests;

pub use pipeline::{count, query};
