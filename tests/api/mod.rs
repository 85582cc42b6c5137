//! API Tests
//!
//! HTTP endpoint tests against the in-memory application.

mod persons_api_tests;
