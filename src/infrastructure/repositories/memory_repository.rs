//! In-Memory Repository Implementations
//!
//! Vec-backed stores guarded by a `parking_lot::RwLock`. Clones share the same
//! underlying list, so one store can back several services. Vectors keep
//! insertion order for listing.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::services::PersonCriteria;
use crate::domain::{Country, CountryRepository, Person, PersonRepository};
use crate::shared::error::AppError;

/// In-memory country repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryCountryRepository {
    countries: Arc<RwLock<Vec<Country>>>,
}

impl InMemoryCountryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing list, e.g. seed data.
    pub fn with_countries(countries: Vec<Country>) -> Self {
        Self {
            countries: Arc::new(RwLock::new(countries)),
        }
    }
}

#[async_trait]
impl CountryRepository for InMemoryCountryRepository {
    async fn add_country(&self, country: &Country) -> Result<Country, AppError> {
        let mut countries = self.countries.write();
        if countries.iter().any(|c| c.id == country.id) {
            return Err(AppError::Conflict(format!(
                "Country {} already exists",
                country.id
            )));
        }
        countries.push(country.clone());
        Ok(country.clone())
    }

    async fn get_all_countries(&self) -> Result<Vec<Country>, AppError> {
        Ok(self.countries.read().clone())
    }

    async fn get_country_by_id(&self, id: Uuid) -> Result<Option<Country>, AppError> {
        Ok(self.countries.read().iter().find(|c| c.id == id).cloned())
    }

    async fn get_country_by_name(&self, name: &str) -> Result<Option<Country>, AppError> {
        Ok(self
            .countries
            .read()
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }
}

/// In-memory person repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersonRepository {
    persons: Arc<RwLock<Vec<Person>>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing list, e.g. seed data.
    pub fn with_persons(persons: Vec<Person>) -> Self {
        Self {
            persons: Arc::new(RwLock::new(persons)),
        }
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn add_person(&self, person: &Person) -> Result<Person, AppError> {
        let mut persons = self.persons.write();
        if persons.iter().any(|p| p.id == person.id) {
            return Err(AppError::Conflict(format!(
                "Person {} already exists",
                person.id
            )));
        }
        persons.push(person.clone());
        Ok(person.clone())
    }

    async fn get_all_persons(&self) -> Result<Vec<Person>, AppError> {
        Ok(self.persons.read().clone())
    }

    async fn get_person_by_id(&self, id: Uuid) -> Result<Option<Person>, AppError> {
        Ok(self.persons.read().iter().find(|p| p.id == id).cloned())
    }

    async fn get_filtered_persons(
        &self,
        criteria: &PersonCriteria,
    ) -> Result<Vec<Person>, AppError> {
        Ok(self
            .persons
            .read()
            .iter()
            .filter(|p| criteria.matches(p))
            .cloned()
            .collect())
    }

    async fn update_person(&self, person: &Person) -> Result<Person, AppError> {
        let mut persons = self.persons.write();
        let slot = persons
            .iter_mut()
            .find(|p| p.id == person.id)
            .ok_or_else(|| AppError::NotFound(format!("Person {} not found", person.id)))?;
        *slot = person.clone();
        Ok(person.clone())
    }

    async fn delete_person_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let mut persons = self.persons.write();
        let before = persons.len();
        persons.retain(|p| p.id != id);
        Ok(persons.len() < before)
    }
}
