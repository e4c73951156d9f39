//! Universal life (Life-A) premiums
//!
//! Six sum-assured plans, each with its own age-banded table indexed by
//! insurance age. Every band carries three amounts, one per health tier.
//! Rates are the same for both genders.
//!
//! The built-in rows are stand-in figures, not the insurer's rate sheet.
//! Replace them from the issued sheet before quoting real clients, either by
//! loading a CSV directory (`--rates-dir` / `RATES_DIR`) or by editing the
//! rows below.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::table::{span_all, AgeRange, Band, Kyat, RateTable};
use crate::error::ParseKeyError;
use crate::profile::Gender;

/// Number of health tiers per band
pub const TIER_COUNT: usize = 3;

/// Sum-assured plan, keyed in lakh (1 lakh = 100,000 Kyat)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum UniversalPlan {
    #[serde(rename = "1000L")]
    L1000,
    #[serde(rename = "1500L")]
    L1500,
    #[serde(rename = "2000L")]
    L2000,
    #[serde(rename = "3000L")]
    L3000,
    #[serde(rename = "4000L")]
    L4000,
    #[serde(rename = "5000L")]
    L5000,
}

impl UniversalPlan {
    pub const ALL: [UniversalPlan; 6] = [
        UniversalPlan::L1000,
        UniversalPlan::L1500,
        UniversalPlan::L2000,
        UniversalPlan::L3000,
        UniversalPlan::L4000,
        UniversalPlan::L5000,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UniversalPlan::L1000 => "1000L",
            UniversalPlan::L1500 => "1500L",
            UniversalPlan::L2000 => "2000L",
            UniversalPlan::L3000 => "3000L",
            UniversalPlan::L4000 => "4000L",
            UniversalPlan::L5000 => "5000L",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for UniversalPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UniversalPlan {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        UniversalPlan::ALL
            .into_iter()
            .find(|plan| plan.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| ParseKeyError::new("universal life plan", s))
    }
}

impl TryFrom<String> for UniversalPlan {
    type Error = ParseKeyError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        key.parse()
    }
}

/// Underwriting health tier of a universal life quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum HealthTier {
    Minimum,
    #[default]
    Default,
    Maximum,
}

impl HealthTier {
    pub const ALL: [HealthTier; TIER_COUNT] = [HealthTier::Minimum, HealthTier::Default, HealthTier::Maximum];

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthTier::Minimum => "minimum",
            HealthTier::Default => "default",
            HealthTier::Maximum => "maximum",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthTier {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        HealthTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| ParseKeyError::new("health tier", s))
    }
}

impl TryFrom<String> for HealthTier {
    type Error = ParseKeyError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        key.parse()
    }
}

/// One age-banded sub-table per plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversalRates {
    plans: [RateTable<[Kyat; TIER_COUNT]>; 6],
}

impl UniversalRates {
    /// Built-in rate tables
    pub fn standard() -> Self {
        Self {
            plans: [
                RateTable::from_static(PLAN_1000L),
                RateTable::from_static(PLAN_1500L),
                RateTable::from_static(PLAN_2000L),
                RateTable::from_static(PLAN_3000L),
                RateTable::from_static(PLAN_4000L),
                RateTable::from_static(PLAN_5000L),
            ],
        }
    }

    /// Tables in [`UniversalPlan::ALL`] order
    pub fn new(plans: [RateTable<[Kyat; TIER_COUNT]>; 6]) -> Self {
        Self { plans }
    }

    pub fn table(&self, plan: UniversalPlan) -> &RateTable<[Kyat; TIER_COUNT]> {
        &self.plans[plan.index()]
    }

    /// Annual premium at an insurance age; 0 when not covered
    ///
    /// `gender` is accepted for a uniform lookup shape but does not affect the
    /// rate: universal life is priced the same for men and women.
    pub fn premium(&self, plan: UniversalPlan, tier: HealthTier, insurance_age: u8, _gender: Gender) -> Kyat {
        match self.table(plan).values_for(insurance_age) {
            Some(row) => row[tier.index()],
            None => {
                log::trace!("universal {plan}: insurance age {insurance_age} not covered");
                0
            }
        }
    }

    /// Covered by at least one plan
    pub fn is_covered(&self, insurance_age: u8) -> bool {
        self.plans.iter().any(|table| table.is_covered(insurance_age))
    }

    pub fn coverage_range(&self) -> Option<AgeRange> {
        span_all(self.plans.iter().map(RateTable::coverage_range))
    }
}

// Annual premium by insurance age, tiers minimum / default / maximum.
// Ages 61-64 are rated year by year.

const PLAN_1000L: &[Band<[Kyat; TIER_COUNT]>] = &[
    Band::range(0, 10, [    720_000,     800_000,   1_000_000]),
    Band::range(11, 20, [    810_000,     900_000,   1_125_000]),
    Band::range(21, 25, [    900_000,   1_000_000,   1_250_000]),
    Band::range(26, 30, [  1_035_000,   1_150_000,   1_437_500]),
    Band::range(31, 35, [  1_215_000,   1_350_000,   1_687_500]),
    Band::range(36, 40, [  1_440_000,   1_600_000,   2_000_000]),
    Band::range(41, 45, [  1_755_000,   1_950_000,   2_437_500]),
    Band::range(46, 50, [  2_160_000,   2_400_000,   3_000_000]),
    Band::range(51, 55, [  2_700_000,   3_000_000,   3_750_000]),
    Band::range(56, 60, [  3_420_000,   3_800_000,   4_750_000]),
    Band::single(61, [  3_960_000,   4_400_000,   5_500_000]),
    Band::single(62, [  4_230_000,   4_700_000,   5_875_000]),
    Band::single(63, [  4_545_000,   5_050_000,   6_312_500]),
    Band::single(64, [  4_860_000,   5_400_000,   6_750_000]),
];

const PLAN_1500L: &[Band<[Kyat; TIER_COUNT]>] = &[
    Band::range(0, 10, [  1_069_200,   1_188_000,   1_485_000]),
    Band::range(11, 20, [  1_202_800,   1_336_500,   1_670_600]),
    Band::range(21, 25, [  1_336_500,   1_485_000,   1_856_200]),
    Band::range(26, 30, [  1_537_000,   1_707_800,   2_134_700]),
    Band::range(31, 35, [  1_804_300,   2_004_800,   2_505_900]),
    Band::range(36, 40, [  2_138_400,   2_376_000,   2_970_000]),
    Band::range(41, 45, [  2_606_200,   2_895_800,   3_619_700]),
    Band::range(46, 50, [  3_207_600,   3_564_000,   4_455_000]),
    Band::range(51, 55, [  4_009_500,   4_455_000,   5_568_800]),
    Band::range(56, 60, [  5_078_700,   5_643_000,   7_053_800]),
    Band::single(61, [  5_880_600,   6_534_000,   8_167_500]),
    Band::single(62, [  6_281_600,   6_979_500,   8_724_400]),
    Band::single(63, [  6_749_300,   7_499_200,   9_374_100]),
    Band::single(64, [  7_217_100,   8_019_000,  10_023_800]),
];

const PLAN_2000L: &[Band<[Kyat; TIER_COUNT]>] = &[
    Band::range(0, 10, [  1_411_200,   1_568_000,   1_960_000]),
    Band::range(11, 20, [  1_587_600,   1_764_000,   2_205_000]),
    Band::range(21, 25, [  1_764_000,   1_960_000,   2_450_000]),
    Band::range(26, 30, [  2_028_600,   2_254_000,   2_817_500]),
    Band::range(31, 35, [  2_381_400,   2_646_000,   3_307_500]),
    Band::range(36, 40, [  2_822_400,   3_136_000,   3_920_000]),
    Band::range(41, 45, [  3_439_800,   3_822_000,   4_777_500]),
    Band::range(46, 50, [  4_233_600,   4_704_000,   5_880_000]),
    Band::range(51, 55, [  5_292_000,   5_880_000,   7_350_000]),
    Band::range(56, 60, [  6_703_200,   7_448_000,   9_310_000]),
    Band::single(61, [  7_761_600,   8_624_000,  10_780_000]),
    Band::single(62, [  8_290_800,   9_212_000,  11_515_000]),
    Band::single(63, [  8_908_200,   9_898_000,  12_372_500]),
    Band::single(64, [  9_525_600,  10_584_000,  13_230_000]),
];

const PLAN_3000L: &[Band<[Kyat; TIER_COUNT]>] = &[
    Band::range(0, 10, [  2_084_400,   2_316_000,   2_895_000]),
    Band::range(11, 20, [  2_345_000,   2_605_500,   3_256_900]),
    Band::range(21, 25, [  2_605_500,   2_895_000,   3_618_800]),
    Band::range(26, 30, [  2_996_300,   3_329_200,   4_161_600]),
    Band::range(31, 35, [  3_517_400,   3_908_200,   4_885_300]),
    Band::range(36, 40, [  4_168_800,   4_632_000,   5_790_000]),
    Band::range(41, 45, [  5_080_700,   5_645_200,   7_056_600]),
    Band::range(46, 50, [  6_253_200,   6_948_000,   8_685_000]),
    Band::range(51, 55, [  7_816_500,   8_685_000,  10_856_200]),
    Band::range(56, 60, [  9_900_900,  11_001_000,  13_751_200]),
    Band::single(61, [ 11_464_200,  12_738_000,  15_922_500]),
    Band::single(62, [ 12_245_800,  13_606_500,  17_008_100]),
    Band::single(63, [ 13_157_800,  14_619_800,  18_274_700]),
    Band::single(64, [ 14_069_700,  15_633_000,  19_541_200]),
];

const PLAN_4000L: &[Band<[Kyat; TIER_COUNT]>] = &[
    Band::range(0, 10, [  2_750_400,   3_056_000,   3_820_000]),
    Band::range(11, 20, [  3_094_200,   3_438_000,   4_297_500]),
    Band::range(21, 25, [  3_438_000,   3_820_000,   4_775_000]),
    Band::range(26, 30, [  3_953_700,   4_393_000,   5_491_200]),
    Band::range(31, 35, [  4_641_300,   5_157_000,   6_446_200]),
    Band::range(36, 40, [  5_500_800,   6_112_000,   7_640_000]),
    Band::range(41, 45, [  6_704_100,   7_449_000,   9_311_200]),
    Band::range(46, 50, [  8_251_200,   9_168_000,  11_460_000]),
    Band::range(51, 55, [ 10_314_000,  11_460_000,  14_325_000]),
    Band::range(56, 60, [ 13_064_400,  14_516_000,  18_145_000]),
    Band::single(61, [ 15_127_200,  16_808_000,  21_010_000]),
    Band::single(62, [ 16_158_600,  17_954_000,  22_442_500]),
    Band::single(63, [ 17_361_900,  19_291_000,  24_113_800]),
    Band::single(64, [ 18_565_200,  20_628_000,  25_785_000]),
];

const PLAN_5000L: &[Band<[Kyat; TIER_COUNT]>] = &[
    Band::range(0, 10, [  3_402_000,   3_780_000,   4_725_000]),
    Band::range(11, 20, [  3_827_200,   4_252_500,   5_315_600]),
    Band::range(21, 25, [  4_252_500,   4_725_000,   5_906_200]),
    Band::range(26, 30, [  4_890_400,   5_433_800,   6_792_200]),
    Band::range(31, 35, [  5_740_900,   6_378_800,   7_973_400]),
    Band::range(36, 40, [  6_804_000,   7_560_000,   9_450_000]),
    Band::range(41, 45, [  8_292_400,   9_213_800,  11_517_200]),
    Band::range(46, 50, [ 10_206_000,  11_340_000,  14_175_000]),
    Band::range(51, 55, [ 12_757_500,  14_175_000,  17_718_800]),
    Band::range(56, 60, [ 16_159_500,  17_955_000,  22_443_800]),
    Band::single(61, [ 18_711_000,  20_790_000,  25_987_500]),
    Band::single(62, [ 19_986_800,  22_207_500,  27_759_400]),
    Band::single(63, [ 21_475_100,  23_861_200,  29_826_600]),
    Band::single(64, [ 22_963_500,  25_515_000,  31_893_800]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_bands_are_well_formed() {
        for bands in [PLAN_1000L, PLAN_1500L, PLAN_2000L, PLAN_3000L, PLAN_4000L, PLAN_5000L] {
            assert!(RateTable::new(bands.to_vec()).is_ok());
        }
    }

    #[test]
    fn test_reference_rows() {
        let rates = UniversalRates::standard();

        assert_eq!(rates.premium(UniversalPlan::L1000, HealthTier::Default, 5, Gender::Male), 800_000);
        assert_eq!(rates.premium(UniversalPlan::L1000, HealthTier::Default, 31, Gender::Male), 1_350_000);
        assert_eq!(rates.premium(UniversalPlan::L1000, HealthTier::Maximum, 28, Gender::Male), 1_437_500);
        assert_eq!(rates.premium(UniversalPlan::L5000, HealthTier::Minimum, 10, Gender::Male), 3_402_000);
        assert_eq!(rates.premium(UniversalPlan::L5000, HealthTier::Maximum, 64, Gender::Male), 31_893_800);
    }

    #[test]
    fn test_singleton_ages_after_sixty() {
        let table = UniversalRates::standard();
        let table = table.table(UniversalPlan::L1000);

        assert_eq!(table.values_for(61), Some(&[3_960_000, 4_400_000, 5_500_000]));
        assert_eq!(table.values_for(64), Some(&[4_860_000, 5_400_000, 6_750_000]));
    }

    #[test]
    fn test_gender_does_not_change_rate() {
        let rates = UniversalRates::standard();
        for plan in UniversalPlan::ALL {
            for age in [1, 30, 45, 64] {
                assert_eq!(
                    rates.premium(plan, HealthTier::Default, age, Gender::Male),
                    rates.premium(plan, HealthTier::Default, age, Gender::Female)
                );
            }
        }
    }

    #[test]
    fn test_coverage_boundaries() {
        let rates = UniversalRates::standard();

        assert_eq!(rates.coverage_range(), Some(AgeRange::new(0, 64)));
        for plan in UniversalPlan::ALL {
            assert!(rates.premium(plan, HealthTier::Minimum, 0, Gender::Female) > 0);
            assert!(rates.premium(plan, HealthTier::Minimum, 64, Gender::Female) > 0);
            assert_eq!(rates.premium(plan, HealthTier::Minimum, 65, Gender::Female), 0);
        }
    }

    #[test]
    fn test_tiers_are_ordered() {
        let rates = UniversalRates::standard();
        for plan in UniversalPlan::ALL {
            for band in rates.table(plan).bands() {
                let [minimum, default, maximum] = band.values;
                assert!(minimum < default && default < maximum, "{plan} {:?}", band.age);
            }
        }
    }

    #[test]
    fn test_key_parsing_is_case_insensitive() {
        assert_eq!("1000L".parse::<UniversalPlan>(), Ok(UniversalPlan::L1000));
        assert_eq!("5000l".parse::<UniversalPlan>(), Ok(UniversalPlan::L5000));
        assert!("2500L".parse::<UniversalPlan>().is_err());

        assert_eq!("DEFAULT".parse::<HealthTier>(), Ok(HealthTier::Default));
        assert_eq!("Minimum".parse::<HealthTier>(), Ok(HealthTier::Minimum));
        assert!("average".parse::<HealthTier>().is_err());
    }

    #[test]
    fn test_json_keys_match_text_parsing() {
        assert_eq!(serde_json::from_str::<HealthTier>(r#""Default""#).unwrap(), HealthTier::Default);
        assert_eq!(serde_json::from_str::<HealthTier>(r#""MAXIMUM""#).unwrap(), HealthTier::Maximum);
        assert_eq!(serde_json::from_str::<UniversalPlan>(r#""1500l""#).unwrap(), UniversalPlan::L1500);
        assert!(serde_json::from_str::<HealthTier>(r#""average""#).is_err());

        assert_eq!(serde_json::to_string(&HealthTier::Default).unwrap(), r#""default""#);
        assert_eq!(serde_json::to_string(&UniversalPlan::L1500).unwrap(), r#""1500L""#);
    }
}
