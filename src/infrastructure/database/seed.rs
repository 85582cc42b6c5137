//! Startup seeding from JSON files.
//!
//! Works against any repository implementation; rows whose id is already
//! present are left untouched, so seeding is safe to repeat on every start.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::domain::{Country, CountryRepository, Person, PersonRepository};
use crate::shared::error::AppError;

/// Read a JSON array from disk.
pub async fn load_seed_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, AppError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::Internal(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        AppError::Internal(format!("Invalid seed file {}: {}", path.display(), e))
    })
}

/// Insert countries whose id is not yet stored. Returns how many were inserted.
pub async fn seed_countries<C>(repo: &C, countries: Vec<Country>) -> Result<usize, AppError>
where
    C: CountryRepository + ?Sized,
{
    let mut inserted = 0;
    for country in countries {
        if repo.get_country_by_id(country.id).await?.is_none() {
            repo.add_country(&country).await?;
            inserted += 1;
        }
    }

    info!(inserted, "Seeded countries");
    Ok(inserted)
}

/// Insert persons whose id is not yet stored. Returns how many were inserted.
pub async fn seed_persons<P>(repo: &P, persons: Vec<Person>) -> Result<usize, AppError>
where
    P: PersonRepository + ?Sized,
{
    let mut inserted = 0;
    for person in persons {
        if repo.get_person_by_id(person.id).await?.is_none() {
            repo.add_person(&person).await?;
            inserted += 1;
        }
    }

    info!(inserted, "Seeded persons");
    Ok(inserted)
}
