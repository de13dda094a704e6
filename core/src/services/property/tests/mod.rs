//! Tests for property service

mod service_tests;
