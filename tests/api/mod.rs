//! API Integration Tests

mod admin_tests;
mod config_tests;
mod health_tests;
