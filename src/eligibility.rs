//! Age eligibility per product line
//!
//! Selection screens use these to hide or disable products a client is too
//! young or too old for. Each line is checked against the same age basis its
//! premium is looked up with, so a product is never shown as available under
//! one age and priced under another.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseKeyError;
use crate::profile::ClientProfile;
use crate::rates::{AgeRange, RateBook};

/// Which of the client's two ages a product line is rated on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBasis {
    /// Actual age + 1
    Insurance,
    /// Calendar age
    Actual,
}

/// Product line with its own rate table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductLine {
    #[serde(rename = "health")]
    HealthPlan,
    #[serde(rename = "lifeA")]
    Universal,
    #[serde(rename = "lifeB")]
    Endowment,
    #[serde(rename = "cancerRider")]
    CancerRider,
}

impl ProductLine {
    pub const ALL: [ProductLine; 4] = [
        ProductLine::HealthPlan,
        ProductLine::Universal,
        ProductLine::Endowment,
        ProductLine::CancerRider,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductLine::HealthPlan => "health",
            ProductLine::Universal => "lifeA",
            ProductLine::Endowment => "lifeB",
            ProductLine::CancerRider => "cancerRider",
        }
    }

    pub fn age_basis(&self) -> AgeBasis {
        match self {
            ProductLine::HealthPlan | ProductLine::Universal => AgeBasis::Insurance,
            ProductLine::Endowment | ProductLine::CancerRider => AgeBasis::Actual,
        }
    }

    /// The profile's age on this line's basis
    pub fn age_for(&self, profile: &ClientProfile) -> u8 {
        match self.age_basis() {
            AgeBasis::Insurance => profile.insurance_age(),
            AgeBasis::Actual => profile.actual_age(),
        }
    }
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductLine {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "health" | "healthplan" | "ohs" => Ok(ProductLine::HealthPlan),
            "lifea" | "universal" => Ok(ProductLine::Universal),
            "lifeb" | "endowment" => Ok(ProductLine::Endowment),
            "cancerrider" | "cancer" => Ok(ProductLine::CancerRider),
            _ => Err(ParseKeyError::new("product line", s)),
        }
    }
}

/// Eligibility of one product line for one client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Eligibility {
    pub product_line: ProductLine,
    pub age_basis: AgeBasis,
    /// Client's age on the line's basis
    pub age: u8,
    pub range: Option<AgeRange>,
    pub eligible: bool,
}

impl RateBook {
    /// Ages covered by a product line, scanned from its tables
    pub fn age_range_for(&self, line: ProductLine) -> Option<AgeRange> {
        match line {
            ProductLine::HealthPlan => self.health.coverage_range(),
            ProductLine::Universal => self.universal.coverage_range(),
            ProductLine::Endowment => self.endowment.coverage_range(),
            ProductLine::CancerRider => self.cancer_rider.coverage_range(),
        }
    }

    /// Whether `age`, already on the line's basis, falls inside a band
    pub fn is_age_eligible(&self, line: ProductLine, age: u8) -> bool {
        match line {
            ProductLine::HealthPlan => self.health.is_covered(age),
            ProductLine::Universal => self.universal.is_covered(age),
            ProductLine::Endowment => self.endowment.is_covered(age),
            ProductLine::CancerRider => self.cancer_rider.is_covered(age),
        }
    }

    /// Check one line against a client, picking the right age basis
    pub fn eligibility(&self, line: ProductLine, profile: &ClientProfile) -> Eligibility {
        let age = line.age_for(profile);
        Eligibility {
            product_line: line,
            age_basis: line.age_basis(),
            age,
            range: self.age_range_for(line),
            eligible: self.is_age_eligible(line, age),
        }
    }

    /// Eligibility of every product line for a client
    pub fn eligible_lines(&self, profile: &ClientProfile) -> Vec<Eligibility> {
        ProductLine::ALL
            .into_iter()
            .map(|line| self.eligibility(line, profile))
            .collect()
    }
}
