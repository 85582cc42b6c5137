//! Person search criteria domain service.
//!
//! A search is a `(field, text)` pair coming from the caller. It is turned into
//! a [`PersonCriteria`] that every store understands: the in-memory store calls
//! [`PersonCriteria::matches`], the PostgreSQL store translates it to SQL.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::entities::Person;
use crate::domain::value_objects::PersonField;

/// Date formats accepted for date-of-birth search.
const SEARCH_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Store-level predicate over persons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonCriteria {
    /// Case-insensitive substring of the name.
    NameContains(String),
    /// Case-insensitive substring of the email.
    EmailContains(String),
    /// Exact calendar date of birth.
    DateOfBirthOn(NaiveDate),
    /// Case-insensitive exact gender.
    GenderIs(String),
    /// Country id is one of the given ids.
    CountryIn(Vec<Uuid>),
    /// Case-insensitive substring of the address.
    AddressContains(String),
}

impl PersonCriteria {
    /// Build the criteria for a field whose value is stored on the person row.
    ///
    /// Returns `None` for an empty search text, an unparsable date, and for
    /// fields that are not filterable or need a lookup first (country).
    pub fn from_text(field: PersonField, text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }

        match field {
            PersonField::Name => Some(Self::NameContains(text.to_string())),
            PersonField::Email => Some(Self::EmailContains(text.to_string())),
            PersonField::DateOfBirth => parse_search_date(text).map(Self::DateOfBirthOn),
            PersonField::Gender => Some(Self::GenderIs(text.trim().to_string())),
            PersonField::Address => Some(Self::AddressContains(text.to_string())),
            PersonField::Country | PersonField::ReceiveNewsletters | PersonField::Age => None,
        }
    }

    /// Evaluate the criteria against a person.
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::NameContains(text) => contains_ignore_case(&person.name, text),
            Self::EmailContains(text) => contains_ignore_case(&person.email, text),
            Self::DateOfBirthOn(date) => person.date_of_birth == Some(*date),
            Self::GenderIs(gender) => person
                .gender
                .as_deref()
                .is_some_and(|g| g.to_lowercase() == gender.to_lowercase()),
            Self::CountryIn(ids) => person.country_id.is_some_and(|id| ids.contains(&id)),
            Self::AddressContains(text) => person
                .address
                .as_deref()
                .is_some_and(|a| contains_ignore_case(a, text)),
        }
    }
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Parse a search string as a calendar date.
pub fn parse_search_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    SEARCH_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}
