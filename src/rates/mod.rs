//! Premium rate tables and lookups for every product line

mod table;
mod health;
mod universal;
mod endowment;
mod cancer;
pub mod loader;

pub use table::{AgeKey, AgeRange, Band, BandError, Kyat, RateTable};
pub use health::{HealthPlanId, HealthPlanRates, PLAN_COUNT};
pub use universal::{HealthTier, UniversalPlan, UniversalRates, TIER_COUNT};
pub use endowment::{EndowmentCoverage, EndowmentRates, COVERAGE_COUNT};
pub use cancer::CancerRiderRates;
pub use loader::LoadedRates;

use std::path::Path;
use std::sync::OnceLock;

use crate::error::RateTableError;
use crate::profile::Gender;

/// Rate tables for all four product lines
///
/// Immutable once built. Lookups on it are pure: the same arguments always
/// produce the same premium, from any thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateBook {
    pub health: HealthPlanRates,
    pub universal: UniversalRates,
    pub endowment: EndowmentRates,
    pub cancer_rider: CancerRiderRates,
}

static STANDARD: OnceLock<RateBook> = OnceLock::new();

impl RateBook {
    /// Rate book built from the compiled-in tables
    pub fn built_in() -> Self {
        Self {
            health: HealthPlanRates::standard(),
            universal: UniversalRates::standard(),
            endowment: EndowmentRates::standard(),
            cancer_rider: CancerRiderRates::standard(),
        }
    }

    /// Process-wide compiled-in rate book, built on first use
    pub fn standard() -> &'static RateBook {
        STANDARD.get_or_init(Self::built_in)
    }

    /// Load tables from CSV files in the default location (data/rates/)
    pub fn from_csv() -> Result<Self, RateTableError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_RATES_PATH))
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, RateTableError> {
        let loaded = LoadedRates::load_from(path)?;
        let book = Self {
            health: loaded.health,
            universal: loaded.universal,
            endowment: loaded.endowment,
            cancer_rider: loaded.cancer_rider,
        };

        log::info!(
            "loaded rate tables from {}: health {:?}, universal {:?}, endowment {:?}, cancer rider {:?}",
            path.display(),
            book.health.coverage_range(),
            book.universal.coverage_range(),
            book.endowment.coverage_range(),
            book.cancer_rider.coverage_range(),
        );
        book.warn_on_coverage_drift(Self::standard());

        Ok(book)
    }

    /// Flag loaded tables whose covered ages differ from the built-in ones
    fn warn_on_coverage_drift(&self, reference: &RateBook) {
        let pairs = [
            ("health plan", self.health.coverage_range(), reference.health.coverage_range()),
            ("universal life", self.universal.coverage_range(), reference.universal.coverage_range()),
            ("endowment", self.endowment.coverage_range(), reference.endowment.coverage_range()),
            ("cancer rider", self.cancer_rider.coverage_range(), reference.cancer_rider.coverage_range()),
        ];
        for (name, loaded, built_in) in pairs {
            if loaded != built_in {
                log::warn!("{name} coverage changed from {built_in:?} to {loaded:?}");
            }
        }
    }

    /// Health plan premium by plan number at insurance age
    pub fn health_premium(&self, plan: u8, insurance_age: u8, gender: Gender) -> Kyat {
        self.health.premium_by_number(plan, insurance_age, gender)
    }

    /// Universal life premium at insurance age
    pub fn universal_premium(
        &self,
        plan: UniversalPlan,
        tier: HealthTier,
        insurance_age: u8,
        gender: Gender,
    ) -> Kyat {
        self.universal.premium(plan, tier, insurance_age, gender)
    }

    /// Endowment premium at actual age
    pub fn endowment_premium(&self, coverage: EndowmentCoverage, actual_age: u8, gender: Gender) -> Kyat {
        self.endowment.premium(coverage, actual_age, gender)
    }

    /// Cancer rider premium at actual age
    pub fn cancer_rider_premium(&self, actual_age: u8, gender: Gender) -> Kyat {
        self.cancer_rider.premium(actual_age, gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_is_shared() {
        let a = RateBook::standard();
        let b = RateBook::standard();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, &RateBook::built_in());
    }

    #[test]
    fn test_csv_matches_built_in() {
        let loaded = RateBook::from_csv().unwrap();
        assert_eq!(loaded, RateBook::built_in());
    }

    #[test]
    fn test_book_lookups_delegate() {
        let book = RateBook::standard();
        assert_eq!(book.health_premium(2, 31, Gender::Male), 94_600);
        assert_eq!(
            book.universal_premium(UniversalPlan::L1000, HealthTier::Default, 31, Gender::Female),
            1_350_000
        );
        assert_eq!(book.endowment_premium(EndowmentCoverage::M100, 30, Gender::Male), 6_117_800);
        assert_eq!(book.cancer_rider_premium(30, Gender::Male), 24_000);
    }

    #[test]
    fn test_rate_book_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RateBook>();
    }
}
