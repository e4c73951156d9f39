//! Client profile: gender plus the two ages premiums are indexed by

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseKeyError, ProfileError};

/// Gender of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(ParseKeyError::new("gender", s)),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = ParseKeyError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        key.parse()
    }
}

/// Client being quoted
///
/// Holds the actual (calendar) age. The insurance age is always one more and
/// is derived on demand, so the two can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Date of birth, when the age was derived from one
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,

    /// Completed years of age
    pub actual_age: u8,

    pub gender: Gender,
}

impl ClientProfile {
    /// Profile from an explicitly stated age
    pub fn with_age(actual_age: u8, gender: Gender) -> Self {
        Self {
            date_of_birth: None,
            actual_age,
            gender,
        }
    }

    /// Profile from a date of birth, aged as of the valuation date
    pub fn from_date_of_birth(
        date_of_birth: NaiveDate,
        as_of: NaiveDate,
        gender: Gender,
    ) -> Result<Self, ProfileError> {
        let actual_age = completed_years(date_of_birth, as_of)?;
        Ok(Self {
            date_of_birth: Some(date_of_birth),
            actual_age,
            gender,
        })
    }

    pub fn actual_age(&self) -> u8 {
        self.actual_age
    }

    /// Actual age + 1
    pub fn insurance_age(&self) -> u8 {
        self.actual_age.saturating_add(1)
    }
}

/// Whole years between birth and the valuation date
pub fn completed_years(date_of_birth: NaiveDate, as_of: NaiveDate) -> Result<u8, ProfileError> {
    let years = as_of
        .years_since(date_of_birth)
        .ok_or(ProfileError::BirthDateInFuture { date_of_birth, as_of })?;
    Ok(u8::try_from(years).unwrap_or(u8::MAX))
}
