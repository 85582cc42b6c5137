//! Service Tests
//!
//! Behaviour of the countries and persons services.

mod countries_service_tests;
mod store_failure_tests;
