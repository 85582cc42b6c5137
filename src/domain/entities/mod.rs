//! # Domain Entities
//!
//! Core domain entities of the contacts manager.
//! All entities map directly to their corresponding database tables.
//!
//! - **Country**: reference list a person can point at
//! - **Person**: a contact record
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer (PostgreSQL and
//! in-memory), following the dependency inversion principle.

mod country;
mod person;

pub use country::{Country, CountryRepository};
pub use person::{age_on, Person, PersonRepository, DAYS_PER_YEAR};
