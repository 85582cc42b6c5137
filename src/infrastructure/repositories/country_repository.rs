//! Country Repository Implementation
//!
//! PostgreSQL implementation of the CountryRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Country, CountryRepository};
use crate::shared::error::AppError;

/// Database row representation of the countries table.
#[derive(Debug, sqlx::FromRow)]
struct CountryRow {
    id: Uuid,
    name: String,
}

impl CountryRow {
    fn into_country(self) -> Country {
        Country {
            id: self.id,
            name: self.name,
        }
    }
}

/// PostgreSQL country repository implementation.
#[derive(Clone)]
pub struct PgCountryRepository {
    pool: PgPool,
}

impl PgCountryRepository {
    /// Create a new PgCountryRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for PgCountryRepository {
    async fn add_country(&self, country: &Country) -> Result<Country, AppError> {
        let row = sqlx::query_as::<_, CountryRow>(
            r#"
            INSERT INTO countries (id, name)
            VALUES ($1, $2)
            RETURNING id, name
            "#,
        )
        .bind(country.id)
        .bind(&country.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(format!("Country {} already exists", country.id))
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_country())
    }

    async fn get_all_countries(&self) -> Result<Vec<Country>, AppError> {
        let rows = sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT id, name
            FROM countries
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_country()).collect())
    }

    async fn get_country_by_id(&self, id: Uuid) -> Result<Option<Country>, AppError> {
        let row = sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT id, name
            FROM countries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_country()))
    }

    async fn get_country_by_name(&self, name: &str) -> Result<Option<Country>, AppError> {
        let row = sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT id, name
            FROM countries
            WHERE name = $1
            ORDER BY seq
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_country()))
    }
}
