//! Person field selector used by search and sort.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A searchable or sortable person attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    Name,
    Email,
    DateOfBirth,
    Gender,
    Country,
    Address,
    ReceiveNewsletters,
    Age,
}

impl PersonField {
    /// Fields a search string can be applied to.
    pub const FILTERABLE: [PersonField; 6] = [
        Self::Name,
        Self::Email,
        Self::DateOfBirth,
        Self::Gender,
        Self::Country,
        Self::Address,
    ];

    /// Canonical display name, as used by list views and CSV headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "PersonName",
            Self::Email => "Email",
            Self::DateOfBirth => "DateOfBirth",
            Self::Gender => "Gender",
            Self::Country => "Country",
            Self::Address => "Address",
            Self::ReceiveNewsletters => "ReceiveNewsLetters",
            Self::Age => "Age",
        }
    }

    pub fn is_filterable(&self) -> bool {
        Self::FILTERABLE.contains(self)
    }
}

impl fmt::Display for PersonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognised field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown person field: {0}")]
pub struct UnknownPersonField(pub String);

impl FromStr for PersonField {
    type Err = UnknownPersonField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "personname" | "person_name" | "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "dateofbirth" | "date_of_birth" => Ok(Self::DateOfBirth),
            "gender" => Ok(Self::Gender),
            "country" | "countryid" | "country_id" => Ok(Self::Country),
            "address" => Ok(Self::Address),
            "receivenewsletters" | "receive_newsletters" => Ok(Self::ReceiveNewsletters),
            "age" => Ok(Self::Age),
            _ => Err(UnknownPersonField(s.to_string())),
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "ASC", alias = "asc", alias = "ASCENDING", alias = "ascending")]
    Ascending,
    #[serde(rename = "DESC", alias = "desc", alias = "DESCENDING", alias = "descending")]
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}
