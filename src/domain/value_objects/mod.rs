//! Value Objects
//!
//! Small immutable types shared by entities and services.

mod gender;
mod person_field;

pub use gender::{Gender, UnknownGender};
pub use person_field::{PersonField, SortOrder, UnknownPersonField};
