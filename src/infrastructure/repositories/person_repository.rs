//! Person Repository Implementation
//!
//! PostgreSQL implementation of the PersonRepository trait.
//! Search criteria are translated into a WHERE clause with bound parameters.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::services::PersonCriteria;
use crate::domain::{Person, PersonRepository};
use crate::shared::error::AppError;

const PERSON_COLUMNS: &str =
    "id, name, email, date_of_birth, gender, country_id, address, receive_newsletters";

/// Database row representation of the persons table.
#[derive(Debug, sqlx::FromRow)]
struct PersonRow {
    id: Uuid,
    name: String,
    email: String,
    date_of_birth: Option<NaiveDate>,
    gender: Option<String>,
    country_id: Option<Uuid>,
    address: Option<String>,
    receive_newsletters: bool,
}

impl PersonRow {
    fn into_person(self) -> Person {
        Person {
            id: self.id,
            name: self.name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            country_id: self.country_id,
            address: self.address,
            receive_newsletters: self.receive_newsletters,
        }
    }
}

/// PostgreSQL person repository implementation.
#[derive(Clone)]
pub struct PgPersonRepository {
    pool: PgPool,
}

impl PgPersonRepository {
    /// Create a new PgPersonRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the WHERE clause for a criteria.
fn push_criteria(builder: &mut QueryBuilder<'_, Postgres>, criteria: &PersonCriteria) {
    match criteria {
        PersonCriteria::NameContains(text) => {
            builder
                .push(" WHERE strpos(lower(name), lower(")
                .push_bind(text.clone())
                .push(")) > 0");
        }
        PersonCriteria::EmailContains(text) => {
            builder
                .push(" WHERE strpos(lower(email), lower(")
                .push_bind(text.clone())
                .push(")) > 0");
        }
        PersonCriteria::DateOfBirthOn(date) => {
            builder.push(" WHERE date_of_birth = ").push_bind(*date);
        }
        PersonCriteria::GenderIs(gender) => {
            builder
                .push(" WHERE lower(gender) = lower(")
                .push_bind(gender.clone())
                .push(")");
        }
        PersonCriteria::CountryIn(ids) => {
            builder
                .push(" WHERE country_id = ANY(")
                .push_bind(ids.clone())
                .push(")");
        }
        PersonCriteria::AddressContains(text) => {
            builder
                .push(" WHERE strpos(lower(address), lower(")
                .push_bind(text.clone())
                .push(")) > 0");
        }
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn add_person(&self, person: &Person) -> Result<Person, AppError> {
        let row = sqlx::query_as::<_, PersonRow>(&format!(
            r#"
            INSERT INTO persons ({PERSON_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {PERSON_COLUMNS}
            "#
        ))
        .bind(person.id)
        .bind(&person.name)
        .bind(&person.email)
        .bind(person.date_of_birth)
        .bind(&person.gender)
        .bind(person.country_id)
        .bind(&person.address)
        .bind(person.receive_newsletters)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(format!("Person {} already exists", person.id))
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_person())
    }

    async fn get_all_persons(&self) -> Result<Vec<Person>, AppError> {
        let rows = sqlx::query_as::<_, PersonRow>(&format!(
            "SELECT {PERSON_COLUMNS} FROM persons ORDER BY seq"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_person()).collect())
    }

    async fn get_person_by_id(&self, id: Uuid) -> Result<Option<Person>, AppError> {
        let row = sqlx::query_as::<_, PersonRow>(&format!(
            "SELECT {PERSON_COLUMNS} FROM persons WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_person()))
    }

    async fn get_filtered_persons(
        &self,
        criteria: &PersonCriteria,
    ) -> Result<Vec<Person>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {PERSON_COLUMNS} FROM persons"
        ));
        push_criteria(&mut builder, criteria);
        builder.push(" ORDER BY seq");

        let rows = builder
            .build_query_as::<PersonRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_person()).collect())
    }

    async fn update_person(&self, person: &Person) -> Result<Person, AppError> {
        let row = sqlx::query_as::<_, PersonRow>(&format!(
            r#"
            UPDATE persons
            SET name = $2,
                email = $3,
                date_of_birth = $4,
                gender = $5,
                country_id = $6,
                address = $7,
                receive_newsletters = $8
            WHERE id = $1
            RETURNING {PERSON_COLUMNS}
            "#
        ))
        .bind(person.id)
        .bind(&person.name)
        .bind(&person.email)
        .bind(person.date_of_birth)
        .bind(&person.gender)
        .bind(person.country_id)
        .bind(&person.address)
        .bind(person.receive_newsletters)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Person {} not found", person.id)))?;

        Ok(row.into_person())
    }

    async fn delete_person_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
