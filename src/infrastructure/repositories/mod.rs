//! Repository Implementations
//!
//! Concrete implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgCountryRepository** / **PgPersonRepository** - PostgreSQL via sqlx
//! - **InMemoryCountryRepository** / **InMemoryPersonRepository** - process-local lists
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgCountryRepository, PgPersonRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let country_repo = PgCountryRepository::new(pool.clone());
//!     let person_repo = PgPersonRepository::new(pool);
//! }
//! ```

pub mod country_repository;
pub mod memory_repository;
pub mod person_repository;

pub use country_repository::PgCountryRepository;
pub use memory_repository::{InMemoryCountryRepository, InMemoryPersonRepository};
pub use person_repository::PgPersonRepository;
