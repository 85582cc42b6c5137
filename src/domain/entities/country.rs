//! Country entity and repository trait.
//!
//! Maps to the `countries` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// A country a person can be associated with.
///
/// Maps to the `countries` table:
/// - id: UUID PRIMARY KEY
/// - name: VARCHAR(100) NOT NULL
/// - seq: BIGSERIAL (insertion order)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Server-generated identifier
    pub id: Uuid,

    /// Country name, unique at insert time (exact match)
    pub name: String,
}

impl Country {
    /// Create a country with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Repository trait for Country data access operations.
///
/// Countries are only ever inserted and read; listing preserves insertion order.
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Insert a new country.
    async fn add_country(&self, country: &Country) -> Result<Country, AppError>;

    /// All countries in insertion order.
    async fn get_all_countries(&self) -> Result<Vec<Country>, AppError>;

    /// Find a country by id.
    async fn get_country_by_id(&self, id: Uuid) -> Result<Option<Country>, AppError>;

    /// Find a country by exact (case-sensitive) name.
    async fn get_country_by_name(&self, name: &str) -> Result<Option<Country>, AppError>;
}
