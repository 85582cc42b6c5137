//! Persons Service
//!
//! Person lifecycle, free-text search, multi-field sorting and export.
//! Country names are resolved through the injected country repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::dto::{PersonAddRequest, PersonResponse, PersonUpdateRequest};
use crate::application::services::person_sorting::sort_persons;
use crate::domain::services::{contains_ignore_case, PersonCriteria};
use crate::domain::{CountryRepository, Person, PersonField, PersonRepository, SortOrder};
use crate::infrastructure::{metrics, spreadsheet};
use crate::shared::error::AppError;
use crate::shared::validation::validate_request;

/// Persons service trait
#[async_trait]
pub trait PersonsService: Send + Sync {
    /// Validate and add a person.
    async fn add_person(
        &self,
        request: Option<PersonAddRequest>,
    ) -> Result<PersonResponse, PersonError>;

    /// All persons with country names resolved.
    async fn get_all_persons(&self) -> Result<Vec<PersonResponse>, PersonError>;

    /// Look up a person; `None` for a missing or nil id, or no match.
    async fn get_person_by_person_id(
        &self,
        person_id: Option<Uuid>,
    ) -> Result<Option<PersonResponse>, PersonError>;

    /// Persons whose `search_by` field matches `search_string`.
    ///
    /// An unknown field or empty search string returns every person.
    async fn get_filtered_persons(
        &self,
        search_by: Option<&str>,
        search_string: Option<&str>,
    ) -> Result<Vec<PersonResponse>, PersonError>;

    /// Sort persons by a field. Unset field or order returns the input unchanged.
    fn get_sorted_persons(
        &self,
        persons: Vec<PersonResponse>,
        sort_by: Option<&str>,
        sort_order: Option<SortOrder>,
    ) -> Result<Vec<PersonResponse>, PersonError>;

    /// Overwrite every mutable field of an existing person.
    async fn update_person(
        &self,
        request: Option<PersonUpdateRequest>,
    ) -> Result<PersonResponse, PersonError>;

    /// Delete a person; `false` when no person has the id.
    async fn delete_person(&self, person_id: Option<Uuid>) -> Result<bool, PersonError>;

    /// All persons rendered as CSV.
    async fn get_persons_csv(&self) -> Result<Vec<u8>, PersonError>;

    /// All persons rendered as an xlsx workbook.
    async fn get_persons_excel(&self) -> Result<Vec<u8>, PersonError>;
}

/// Persons service errors
#[derive(Debug, thiserror::Error)]
pub enum PersonError {
    #[error("Argument must not be null: {0}")]
    NullArgument(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error(transparent)]
    Store(#[from] AppError),
}

/// PersonsService implementation
pub struct PersonsServiceImpl<P, C>
where
    P: PersonRepository,
    C: CountryRepository,
{
    person_repo: Arc<P>,
    country_repo: Arc<C>,
}

impl<P, C> PersonsServiceImpl<P, C>
where
    P: PersonRepository,
    C: CountryRepository,
{
    pub fn new(person_repo: Arc<P>, country_repo: Arc<C>) -> Self {
        Self {
            person_repo,
            country_repo,
        }
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Map one person, resolving its country with a single lookup.
    async fn to_response(&self, person: Person) -> Result<PersonResponse, PersonError> {
        let country = match person.country_id {
            Some(id) => self
                .country_repo
                .get_country_by_id(id)
                .await?
                .map(|c| c.name),
            None => None,
        };

        Ok(PersonResponse::from_person(person, country, Self::today()))
    }

    /// Map many persons against one snapshot of the country list.
    async fn to_responses(&self, persons: Vec<Person>) -> Result<Vec<PersonResponse>, PersonError> {
        let country_names: HashMap<Uuid, String> = self
            .country_repo
            .get_all_countries()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();
        let today = Self::today();

        Ok(persons
            .into_iter()
            .map(|person| {
                let country = person
                    .country_id
                    .and_then(|id| country_names.get(&id).cloned());
                PersonResponse::from_person(person, country, today)
            })
            .collect())
    }

    /// Turn a `(field, text)` search into store criteria, if it narrows anything.
    async fn build_criteria(
        &self,
        field: PersonField,
        text: &str,
    ) -> Result<Option<PersonCriteria>, PersonError> {
        if field != PersonField::Country {
            return Ok(PersonCriteria::from_text(field, text));
        }

        let country_ids = self
            .country_repo
            .get_all_countries()
            .await?
            .into_iter()
            .filter(|c| contains_ignore_case(&c.name, text))
            .map(|c| c.id)
            .collect();

        Ok(Some(PersonCriteria::CountryIn(country_ids)))
    }
}

#[async_trait]
impl<P, C> PersonsService for PersonsServiceImpl<P, C>
where
    P: PersonRepository + 'static,
    C: CountryRepository + 'static,
{
    async fn add_person(
        &self,
        request: Option<PersonAddRequest>,
    ) -> Result<PersonResponse, PersonError> {
        let request = request.ok_or(PersonError::NullArgument("person_add_request"))?;

        if let Err(message) = validate_request(&request) {
            debug!(%message, "Rejected invalid person");
            return Err(PersonError::InvalidArgument(message));
        }

        let person = request.to_person(Uuid::new_v4());
        let created = self.person_repo.add_person(&person).await?;

        metrics::record_person_mutation("add");
        info!(person_id = %created.id, "Person added");

        self.to_response(created).await
    }

    async fn get_all_persons(&self) -> Result<Vec<PersonResponse>, PersonError> {
        let persons = self.person_repo.get_all_persons().await?;

        self.to_responses(persons).await
    }

    async fn get_person_by_person_id(
        &self,
        person_id: Option<Uuid>,
    ) -> Result<Option<PersonResponse>, PersonError> {
        let Some(person_id) = person_id.filter(|id| !id.is_nil()) else {
            return Ok(None);
        };

        match self.person_repo.get_person_by_id(person_id).await? {
            Some(person) => Ok(Some(self.to_response(person).await?)),
            None => Ok(None),
        }
    }

    async fn get_filtered_persons(
        &self,
        search_by: Option<&str>,
        search_string: Option<&str>,
    ) -> Result<Vec<PersonResponse>, PersonError> {
        let field = search_by
            .and_then(|s| s.parse::<PersonField>().ok())
            .filter(PersonField::is_filterable);
        let text = search_string.filter(|s| !s.trim().is_empty());

        let (Some(field), Some(text)) = (field, text) else {
            return self.get_all_persons().await;
        };

        let Some(criteria) = self.build_criteria(field, text).await? else {
            debug!(search_by = %field, "Search text does not narrow the list");
            return self.get_all_persons().await;
        };

        let persons = self.person_repo.get_filtered_persons(&criteria).await?;
        debug!(search_by = %field, matched = persons.len(), "Persons filtered");

        self.to_responses(persons).await
    }

    fn get_sorted_persons(
        &self,
        persons: Vec<PersonResponse>,
        sort_by: Option<&str>,
        sort_order: Option<SortOrder>,
    ) -> Result<Vec<PersonResponse>, PersonError> {
        let sort_by = sort_by.filter(|s| !s.trim().is_empty());
        let (Some(sort_by), Some(sort_order)) = (sort_by, sort_order) else {
            return Ok(persons);
        };

        let field = sort_by
            .parse::<PersonField>()
            .map_err(|e| PersonError::InvalidArgument(e.to_string()))?;

        Ok(sort_persons(persons, field, sort_order))
    }

    async fn update_person(
        &self,
        request: Option<PersonUpdateRequest>,
    ) -> Result<PersonResponse, PersonError> {
        let request = request.ok_or(PersonError::NullArgument("person_update_request"))?;

        validate_request(&request).map_err(PersonError::InvalidArgument)?;

        let Some(mut person) = self.person_repo.get_person_by_id(request.id).await? else {
            warn!(person_id = %request.id, "Update for unknown person");
            return Err(PersonError::InvalidArgument(
                "Given person id does not exist".to_string(),
            ));
        };

        request.apply_to(&mut person);
        let updated = self.person_repo.update_person(&person).await?;

        metrics::record_person_mutation("update");
        info!(person_id = %updated.id, "Person updated");

        self.to_response(updated).await
    }

    async fn delete_person(&self, person_id: Option<Uuid>) -> Result<bool, PersonError> {
        let person_id = person_id.ok_or(PersonError::NullArgument("person_id"))?;

        if self.person_repo.get_person_by_id(person_id).await?.is_none() {
            return Ok(false);
        }

        let deleted = self.person_repo.delete_person_by_id(person_id).await?;
        if deleted {
            metrics::record_person_mutation("delete");
            info!(person_id = %person_id, "Person deleted");
        }

        Ok(deleted)
    }

    async fn get_persons_csv(&self) -> Result<Vec<u8>, PersonError> {
        let persons = self.get_all_persons().await?;

        spreadsheet::write_persons_csv(&persons).map_err(|e| PersonError::Export(e.to_string()))
    }

    async fn get_persons_excel(&self) -> Result<Vec<u8>, PersonError> {
        let persons = self.get_all_persons().await?;

        spreadsheet::write_persons_excel(&persons).map_err(|e| PersonError::Export(e.to_string()))
    }
}
