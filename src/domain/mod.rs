//! # Domain Layer
//!
//! The domain layer contains the core business rules of the contacts manager.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (Country, Person) and repository traits
//! - **value_objects**: Immutable value types (Gender, PersonField, SortOrder)
//! - **services**: Domain services (person search criteria)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Search predicates form a closed set every store can evaluate

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
