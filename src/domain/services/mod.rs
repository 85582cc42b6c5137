//! Domain Services
//!
//! Domain logic that does not belong to a single entity.

mod person_search;

pub use person_search::{contains_ignore_case, parse_search_date, PersonCriteria};
