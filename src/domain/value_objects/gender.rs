//! Gender value object.
//!
//! Persons store gender as text; this enum is the closed set of values
//! accepted on input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Gender options offered for a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(alias = "male", alias = "MALE")]
    Male,
    #[serde(alias = "female", alias = "FEMALE")]
    Female,
    #[serde(alias = "other", alias = "OTHER")]
    Other,
}

impl Gender {
    /// Text stored in the `gender` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Parse stored text leniently: unknown values become `None`.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text is not a known gender.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown gender: {0}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(UnknownGender(s.to_string())),
        }
    }
}
