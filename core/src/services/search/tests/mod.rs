//! Tests for the search pipeline

pub(crate) mod fixtures;
mod pipeline_tests;
