//! Person entity and repository trait.
//!
//! Maps to the `persons` table in the database schema.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::services::PersonCriteria;
use crate::shared::error::AppError;

/// Average days per year used for age calculation.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Represents a contact.
///
/// Maps to the `persons` table:
/// - id: UUID PRIMARY KEY
/// - name: VARCHAR(40)
/// - email: VARCHAR(40)
/// - date_of_birth: DATE NULL
/// - gender: VARCHAR(10) NULL
/// - country_id: UUID NULL
/// - address: VARCHAR(200) NULL
/// - receive_newsletters: BOOLEAN NOT NULL DEFAULT FALSE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Server-generated identifier
    pub id: Uuid,

    /// Person name
    pub name: String,

    /// Email address
    pub email: String,

    /// Date of birth
    pub date_of_birth: Option<NaiveDate>,

    /// Gender as stored text
    pub gender: Option<String>,

    /// Country reference; not required to resolve
    pub country_id: Option<Uuid>,

    /// Postal address
    pub address: Option<String>,

    /// Newsletter opt-in
    #[serde(default)]
    pub receive_newsletters: bool,
}

impl Person {
    /// Age in whole years as of `today`, if the date of birth is known.
    pub fn age_on(&self, today: NaiveDate) -> Option<i64> {
        self.date_of_birth.map(|dob| age_on(dob, today))
    }
}

/// Whole years between `date_of_birth` and `today` using 365.25-day years.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i64 {
    let days = (today - date_of_birth).num_days() as f64;
    (days / DAYS_PER_YEAR).floor() as i64
}

/// Repository trait for Person data access operations.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Insert a new person.
    async fn add_person(&self, person: &Person) -> Result<Person, AppError>;

    /// All persons in insertion order.
    async fn get_all_persons(&self) -> Result<Vec<Person>, AppError>;

    /// Find a person by id.
    async fn get_person_by_id(&self, id: Uuid) -> Result<Option<Person>, AppError>;

    /// Persons matching a search criterion, in insertion order.
    async fn get_filtered_persons(&self, criteria: &PersonCriteria) -> Result<Vec<Person>, AppError>;

    /// Overwrite the mutable fields of an existing person.
    async fn update_person(&self, person: &Person) -> Result<Person, AppError>;

    /// Delete a person; `false` when nothing matched.
    async fn delete_person_by_id(&self, id: Uuid) -> Result<bool, AppError>;
}
