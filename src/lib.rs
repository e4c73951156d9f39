//! Premium Quote - premium lookup and quote aggregation engine
//!
//! This library provides:
//! - Static rate tables for health plans, universal life (Life-A),
//!   endowment (Life-B) and the cancer rider
//! - Age band resolution and coverage ranges derived from the tables
//! - Pure premium lookups per product line
//! - Quote aggregation into comparable per-plan columns
//! - Age eligibility checks for selection screens
//!
//! All lookups are pure functions over immutable tables. A missed lookup
//! (age, plan or key outside a table) prices at zero rather than failing.

pub mod error;
pub mod rates;
pub mod profile;
pub mod eligibility;
pub mod quote;

// Re-export commonly used types
pub use error::{ParseKeyError, ProfileError, RateTableError};
pub use rates::{AgeRange, EndowmentCoverage, HealthPlanId, HealthTier, Kyat, RateBook, UniversalPlan};
pub use profile::{ClientProfile, Gender, LifeInsurance, ProductSelection};
pub use eligibility::{AgeBasis, Eligibility, ProductLine};
pub use quote::{QuoteColumn, QuoteEngine, QuoteResult};

/// Health plan premium for plan 1-7 at an insurance age
pub fn lookup_health_plan_premium(plan_id: u8, insurance_age: u8, gender: Gender) -> Kyat {
    RateBook::standard().health_premium(plan_id, insurance_age, gender)
}

/// Universal life premium at an insurance age
///
/// Keys are matched case-insensitively; an unknown plan or tier prices at 0.
/// `gender` does not affect the rate.
pub fn lookup_life_a_premium(plan_id: &str, health_tier: &str, insurance_age: u8, gender: Gender) -> Kyat {
    match (plan_id.parse::<UniversalPlan>(), health_tier.parse::<HealthTier>()) {
        (Ok(plan), Ok(tier)) => RateBook::standard().universal_premium(plan, tier, insurance_age, gender),
        _ => 0,
    }
}

/// Endowment premium at an actual age; an unknown coverage key prices at 0
pub fn lookup_life_b_premium(plan_id: &str, actual_age: u8, gender: Gender) -> Kyat {
    plan_id
        .parse::<EndowmentCoverage>()
        .map(|coverage| RateBook::standard().endowment_premium(coverage, actual_age, gender))
        .unwrap_or(0)
}

/// Cancer rider premium at an actual age
pub fn lookup_cancer_rider_premium(actual_age: u8, gender: Gender) -> Kyat {
    RateBook::standard().cancer_rider_premium(actual_age, gender)
}

/// Price a selection against the built-in tables; `None` when nothing is selected
pub fn aggregate_quote(profile: &ClientProfile, selection: &ProductSelection) -> Option<QuoteResult> {
    QuoteEngine::standard().aggregate(profile, selection)
}

/// Ages a product line covers
pub fn get_age_range(line: ProductLine) -> Option<AgeRange> {
    RateBook::standard().age_range_for(line)
}

/// Whether an age, on the line's own age basis, is covered
pub fn is_age_eligible(line: ProductLine, age: u8) -> bool {
    RateBook::standard().is_age_eligible(line, age)
}
