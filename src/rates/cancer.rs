//! Cancer rider premiums
//!
//! A single fixed coverage, rated by gender for each single year of actual age.
//!
//! The built-in rows are stand-in figures, not the insurer's rate sheet.
//! Replace them from the issued sheet before quoting real clients, either by
//! loading a CSV directory (`--rates-dir` / `RATES_DIR`) or by editing the
//! rows below.

use super::table::{span_all, AgeRange, Band, Kyat, RateTable};
use crate::profile::Gender;

/// Gender-rated cancer rider table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancerRiderRates {
    male: RateTable<Kyat>,
    female: RateTable<Kyat>,
}

impl CancerRiderRates {
    /// Built-in rate table
    pub fn standard() -> Self {
        Self {
            male: RateTable::from_static(MALE_ROWS),
            female: RateTable::from_static(FEMALE_ROWS),
        }
    }

    pub fn new(male: RateTable<Kyat>, female: RateTable<Kyat>) -> Self {
        Self { male, female }
    }

    pub fn table(&self, gender: Gender) -> &RateTable<Kyat> {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Annual premium at an actual age; 0 when not covered
    pub fn premium(&self, actual_age: u8, gender: Gender) -> Kyat {
        match self.table(gender).values_for(actual_age) {
            Some(&premium) => premium,
            None => {
                log::trace!("cancer rider: age {actual_age} ({gender}) not covered");
                0
            }
        }
    }

    pub fn is_covered(&self, actual_age: u8) -> bool {
        self.male.is_covered(actual_age) || self.female.is_covered(actual_age)
    }

    pub fn coverage_range(&self) -> Option<AgeRange> {
        span_all([self.male.coverage_range(), self.female.coverage_range()])
    }
}

// Annual premium by actual age

const MALE_ROWS: &[Band<Kyat>] = &[
    Band::single(1, 6_100),
    Band::single(2, 6_200),
    Band::single(3, 6_300),
    Band::single(4, 6_500),
    Band::single(5, 6_800),
    Band::single(6, 7_000),
    Band::single(7, 7_300),
    Band::single(8, 7_600),
    Band::single(9, 8_000),
    Band::single(10, 8_400),
    Band::single(11, 8_800),
    Band::single(12, 9_300),
    Band::single(13, 9_800),
    Band::single(14, 10_400),
    Band::single(15, 11_000),
    Band::single(16, 11_600),
    Band::single(17, 12_200),
    Band::single(18, 12_900),
    Band::single(19, 13_600),
    Band::single(20, 14_400),
    Band::single(21, 15_200),
    Band::single(22, 16_000),
    Band::single(23, 16_900),
    Band::single(24, 17_800),
    Band::single(25, 18_800),
    Band::single(26, 19_700),
    Band::single(27, 20_700),
    Band::single(28, 21_800),
    Band::single(29, 22_900),
    Band::single(30, 24_000),
    Band::single(31, 25_200),
    Band::single(32, 26_400),
    Band::single(33, 27_600),
    Band::single(34, 28_800),
    Band::single(35, 30_200),
    Band::single(36, 31_500),
    Band::single(37, 32_900),
    Band::single(38, 34_300),
    Band::single(39, 35_700),
    Band::single(40, 37_200),
    Band::single(41, 38_700),
    Band::single(42, 40_300),
    Band::single(43, 41_900),
    Band::single(44, 43_500),
    Band::single(45, 45_200),
    Band::single(46, 46_800),
    Band::single(47, 48_600),
    Band::single(48, 50_400),
    Band::single(49, 52_200),
    Band::single(50, 54_000),
    Band::single(51, 55_900),
    Band::single(52, 57_800),
    Band::single(53, 59_700),
    Band::single(54, 61_700),
    Band::single(55, 63_800),
    Band::single(56, 65_800),
    Band::single(57, 67_900),
    Band::single(58, 70_000),
    Band::single(59, 72_200),
    Band::single(60, 74_400),
];

const FEMALE_ROWS: &[Band<Kyat>] = &[
    Band::single(1, 6_100),
    Band::single(2, 6_200),
    Band::single(3, 6_300),
    Band::single(4, 6_500),
    Band::single(5, 6_800),
    Band::single(6, 7_000),
    Band::single(7, 7_300),
    Band::single(8, 7_600),
    Band::single(9, 8_000),
    Band::single(10, 8_400),
    Band::single(11, 8_800),
    Band::single(12, 9_300),
    Band::single(13, 9_800),
    Band::single(14, 10_400),
    Band::single(15, 11_000),
    Band::single(16, 11_600),
    Band::single(17, 12_200),
    Band::single(18, 15_200),
    Band::single(19, 16_100),
    Band::single(20, 17_000),
    Band::single(21, 17_900),
    Band::single(22, 18_900),
    Band::single(23, 19_900),
    Band::single(24, 21_000),
    Band::single(25, 22_100),
    Band::single(26, 23_300),
    Band::single(27, 24_500),
    Band::single(28, 25_700),
    Band::single(29, 27_000),
    Band::single(30, 28_300),
    Band::single(31, 29_700),
    Band::single(32, 31_100),
    Band::single(33, 32_500),
    Band::single(34, 34_000),
    Band::single(35, 35_600),
    Band::single(36, 37_200),
    Band::single(37, 38_800),
    Band::single(38, 40_400),
    Band::single(39, 42_100),
    Band::single(40, 43_900),
    Band::single(41, 45_700),
    Band::single(42, 47_500),
    Band::single(43, 49_400),
    Band::single(44, 51_300),
    Band::single(45, 53_300),
    Band::single(46, 55_300),
    Band::single(47, 57_300),
    Band::single(48, 59_400),
    Band::single(49, 61_500),
    Band::single(50, 63_700),
    Band::single(51, 58_700),
    Band::single(52, 60_700),
    Band::single(53, 62_700),
    Band::single(54, 64_800),
    Band::single(55, 66_900),
    Band::single(56, 69_100),
    Band::single(57, 71_300),
    Band::single(58, 73_500),
    Band::single(59, 75_800),
    Band::single(60, 78_100),
];
