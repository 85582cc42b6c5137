//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CountriesService**: Country reference list and spreadsheet import
//! - **PersonsService**: Person CRUD, search, sorting and export

pub mod countries_service;
pub mod person_sorting;
pub mod persons_service;

// Re-export countries service types
pub use countries_service::{CountriesService, CountriesServiceImpl, CountryError};

// Re-export persons service types
pub use persons_service::{PersonError, PersonsService, PersonsServiceImpl};

// Re-export sorting helpers
pub use person_sorting::{comparator_for, sort_persons, PersonComparator};
