//! Request DTOs
//!
//! Data structures for creating and updating entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Country, Gender, Person};

/// Add country request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CountryAddRequest {
    #[validate(
        required(message = "Country name can't be blank"),
        custom(
            function = "crate::shared::validation::not_blank",
            message = "Country name can't be blank"
        ),
        length(min = 1, max = 100, message = "Country name must be 1-100 characters")
    )]
    pub name: Option<String>,
}

impl CountryAddRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Convert into a new country with a fresh id.
    pub fn to_country(&self) -> Country {
        Country::new(self.name.clone().unwrap_or_default())
    }
}

/// Add person request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PersonAddRequest {
    #[validate(
        required(message = "Person name can't be blank"),
        custom(
            function = "crate::shared::validation::not_blank",
            message = "Person name can't be blank"
        ),
        length(min = 1, max = 40, message = "Person name must be 1-40 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Email can't be blank"),
        email(message = "Email should be a proper email address"),
        length(max = 40, message = "Email must be at most 40 characters")
    )]
    pub email: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    pub gender: Option<Gender>,

    pub country_id: Option<Uuid>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,

    #[serde(default)]
    pub receive_newsletters: bool,
}

impl PersonAddRequest {
    /// Convert into a person with the given id. Call after validation.
    pub fn to_person(self, id: Uuid) -> Person {
        Person {
            id,
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            date_of_birth: self.date_of_birth,
            gender: self.gender.map(|g| g.to_string()),
            country_id: self.country_id,
            address: self.address,
            receive_newsletters: self.receive_newsletters,
        }
    }
}

/// Update person request
///
/// Carries every mutable field; an update overwrites all of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PersonUpdateRequest {
    #[serde(default)]
    pub id: Uuid,

    #[validate(
        required(message = "Person name can't be blank"),
        custom(
            function = "crate::shared::validation::not_blank",
            message = "Person name can't be blank"
        ),
        length(min = 1, max = 40, message = "Person name must be 1-40 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Email can't be blank"),
        email(message = "Email should be a proper email address"),
        length(max = 40, message = "Email must be at most 40 characters")
    )]
    pub email: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    pub gender: Option<Gender>,

    pub country_id: Option<Uuid>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,

    #[serde(default)]
    pub receive_newsletters: bool,
}

impl PersonUpdateRequest {
    /// Copy every mutable field onto an existing person. The id is left alone.
    pub fn apply_to(self, person: &mut Person) {
        person.name = self.name.unwrap_or_default();
        person.email = self.email.unwrap_or_default();
        person.date_of_birth = self.date_of_birth;
        person.gender = self.gender.map(|g| g.to_string());
        person.country_id = self.country_id;
        person.address = self.address;
        person.receive_newsletters = self.receive_newsletters;
    }
}
