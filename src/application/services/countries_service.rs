//! Countries Service
//!
//! Manages the reference list of countries: add with duplicate-name
//! rejection, list, lookup by id, and bulk import from a spreadsheet.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::dto::{CountryAddRequest, CountryResponse};
use crate::domain::CountryRepository;
use crate::infrastructure::{metrics, spreadsheet};
use crate::shared::error::AppError;
use crate::shared::validation::validate_request;

/// Countries service trait
#[async_trait]
pub trait CountriesService: Send + Sync {
    /// Add a country; names must be unique.
    async fn add_country(
        &self,
        request: Option<CountryAddRequest>,
    ) -> Result<CountryResponse, CountryError>;

    /// All countries in insertion order.
    async fn get_all_countries(&self) -> Result<Vec<CountryResponse>, CountryError>;

    /// Look up a country; `None` for a missing id or no match.
    async fn get_country_by_country_id(
        &self,
        country_id: Option<Uuid>,
    ) -> Result<Option<CountryResponse>, CountryError>;

    /// Import country names from the `Countries` worksheet of an xlsx workbook.
    ///
    /// Returns how many countries were inserted; names already present are skipped.
    async fn upload_countries_from_excel(&self, workbook: &[u8]) -> Result<usize, CountryError>;
}

/// Countries service errors
#[derive(Debug, thiserror::Error)]
pub enum CountryError {
    #[error("Argument must not be null: {0}")]
    NullArgument(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Import failed: {0}")]
    Import(String),

    #[error(transparent)]
    Store(#[from] AppError),
}

/// CountriesService implementation
pub struct CountriesServiceImpl<C>
where
    C: CountryRepository,
{
    country_repo: Arc<C>,
}

impl<C> CountriesServiceImpl<C>
where
    C: CountryRepository,
{
    pub fn new(country_repo: Arc<C>) -> Self {
        Self { country_repo }
    }
}

#[async_trait]
impl<C> CountriesService for CountriesServiceImpl<C>
where
    C: CountryRepository + 'static,
{
    async fn add_country(
        &self,
        request: Option<CountryAddRequest>,
    ) -> Result<CountryResponse, CountryError> {
        let request = request.ok_or(CountryError::NullArgument("country_add_request"))?;

        validate_request(&request).map_err(CountryError::InvalidArgument)?;

        let name = request.name.as_deref().unwrap_or_default();
        if self.country_repo.get_country_by_name(name).await?.is_some() {
            warn!(country_name = %name, "Rejected duplicate country");
            return Err(CountryError::InvalidArgument(
                "Given country name already exists".to_string(),
            ));
        }

        let country = self.country_repo.add_country(&request.to_country()).await?;

        info!(country_id = %country.id, country_name = %country.name, "Country added");

        Ok(CountryResponse::from(country))
    }

    async fn get_all_countries(&self) -> Result<Vec<CountryResponse>, CountryError> {
        let countries = self.country_repo.get_all_countries().await?;

        Ok(countries.into_iter().map(CountryResponse::from).collect())
    }

    async fn get_country_by_country_id(
        &self,
        country_id: Option<Uuid>,
    ) -> Result<Option<CountryResponse>, CountryError> {
        let Some(country_id) = country_id else {
            return Ok(None);
        };

        let country = self.country_repo.get_country_by_id(country_id).await?;

        Ok(country.map(CountryResponse::from))
    }

    async fn upload_countries_from_excel(&self, workbook: &[u8]) -> Result<usize, CountryError> {
        let names = spreadsheet::read_country_names(workbook)
            .map_err(|e| CountryError::Import(e.to_string()))?;

        let mut inserted = 0;
        for name in names {
            let request = CountryAddRequest::new(name);
            if let Err(message) = validate_request(&request) {
                debug!(%message, "Invalid country name in workbook, skipping");
                continue;
            }

            let name = request.name.as_deref().unwrap_or_default();
            if self.country_repo.get_country_by_name(name).await?.is_some() {
                debug!(country_name = %name, "Country already present, skipping");
                continue;
            }

            self.country_repo.add_country(&request.to_country()).await?;
            inserted += 1;
        }

        metrics::record_countries_imported(inserted);
        info!(inserted, "Countries imported from workbook");

        Ok(inserted)
    }
}
