//! Quote output: one column per displayed health plan plus shared add-ons

use serde::Serialize;

use crate::eligibility::AgeBasis;
use crate::profile::{Gender, LifeInsurance};
use crate::rates::{HealthPlanId, Kyat};

/// One column of the comparison report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteColumn {
    pub plan: HealthPlanId,

    /// Placeholder column standing in for "no health plan"; its health
    /// premium is not a price and renders as a dash
    pub is_default: bool,

    pub health_premium: Kyat,

    /// Shared life insurance premium, same in every column
    pub life_premium: Kyat,

    /// Shared cancer rider premium, same in every column
    pub cancer_rider_premium: Kyat,

    /// health + life + cancer rider
    pub column_total: Kyat,
}

impl QuoteColumn {
    /// Health premium to display, `None` for the placeholder column
    pub fn priced_health_premium(&self) -> Option<Kyat> {
        (!self.is_default).then_some(self.health_premium)
    }
}

/// Priced life insurance line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifePremium {
    pub product: LifeInsurance,
    pub age_basis: AgeBasis,
    /// Age the premium was looked up at
    pub age: u8,
    pub premium: Kyat,
}

/// Priced cancer rider line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CancerRiderPremium {
    pub age: u8,
    pub premium: Kyat,
}

/// Priced quote for one client and selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteResult {
    pub gender: Gender,
    pub actual_age: u8,
    pub insurance_age: u8,

    /// Ascending by plan number; exactly one placeholder when no plan was selected
    pub columns: Vec<QuoteColumn>,

    pub life_insurance: Option<LifePremium>,
    pub cancer_rider: Option<CancerRiderPremium>,

    /// Sum of the selected health plans' own premiums
    pub health_total: Kyat,

    /// Health plans + life insurance once + cancer rider once
    pub total: Kyat,
}

impl QuoteResult {
    /// Life insurance plus cancer rider premium, added to every column
    pub fn add_on_total(&self) -> Kyat {
        self.life_insurance.map_or(0, |l| l.premium) + self.cancer_rider.map_or(0, |c| c.premium)
    }

    /// True when the only column is the placeholder
    pub fn is_placeholder_only(&self) -> bool {
        self.columns.iter().all(|column| column.is_default)
    }
}
