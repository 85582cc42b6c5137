//! Response DTOs
//!
//! Data structures returned by the services and serialized by the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::dto::request::PersonUpdateRequest;
use crate::domain::{Country, Gender, Person};

/// Country response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Country> for CountryResponse {
    fn from(country: Country) -> Self {
        Self {
            id: country.id,
            name: country.name,
        }
    }
}

/// Person response
///
/// `country` and `age` are derived when the response is built and are not
/// part of equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub country_id: Option<Uuid>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub receive_newsletters: bool,
    pub age: Option<i64>,
}

impl PersonResponse {
    /// Build a response, computing age as of `today`.
    pub fn from_person(person: Person, country: Option<String>, today: NaiveDate) -> Self {
        let age = person.age_on(today);
        Self {
            id: person.id,
            name: person.name,
            email: person.email,
            date_of_birth: person.date_of_birth,
            gender: person.gender,
            country_id: person.country_id,
            country,
            address: person.address,
            receive_newsletters: person.receive_newsletters,
            age,
        }
    }

    /// Map back into an update request; unknown gender text becomes `None`.
    pub fn to_update_request(&self) -> PersonUpdateRequest {
        PersonUpdateRequest {
            id: self.id,
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            date_of_birth: self.date_of_birth,
            gender: self.gender.as_deref().and_then(Gender::parse_lenient),
            country_id: self.country_id,
            address: self.address.clone(),
            receive_newsletters: self.receive_newsletters,
        }
    }
}

impl PartialEq for PersonResponse {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.email == other.email
            && self.date_of_birth == other.date_of_birth
            && self.gender == other.gender
            && self.country_id == other.country_id
            && self.address == other.address
            && self.receive_newsletters == other.receive_newsletters
    }
}

impl Eq for PersonResponse {}
