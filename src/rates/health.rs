//! Health plan (OHS) premiums
//!
//! Seven plan tiers, rated by gender in five-year bands of insurance age.
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

/// Number of health plan tiers
pub const PLAN_COUNT: usize = 7;

/// Health plan number, 1 through 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HealthPlanId(u8);

impl HealthPlanId {
    /// Plan used to anchor a quote that has no health plan selected
    pub const PLACEHOLDER: HealthPlanId = HealthPlanId(1);

    pub fn new(number: u8) -> Option<Self> {
        (1..=PLAN_COUNT as u8).contains(&number).then_some(HealthPlanId(number))
    }

    pub fn all() -> impl Iterator<Item = HealthPlanId> {
        (1..=PLAN_COUNT as u8).map(HealthPlanId)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for HealthPlanId {
    type Error = ParseKeyError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        HealthPlanId::new(number).ok_or_else(|| ParseKeyError::new("health plan", &number.to_string()))
    }
}

impl From<HealthPlanId> for u8 {
    fn from(plan: HealthPlanId) -> u8 {
        plan.0
    }
}

impl fmt::Display for HealthPlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HealthPlanId {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("plan")
            .or_else(|| trimmed.strip_prefix("Plan"))
            .unwrap_or(trimmed)
            .trim_start_matches(['_', ' ']);
        digits
            .parse::<u8>()
            .ok()
            .and_then(HealthPlanId::new)
            .ok_or_else(|| ParseKeyError::new("health plan", s))
    }
}

/// Gender-rated health plan table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthPlanRates {
    male: RateTable<[Kyat; PLAN_COUNT]>,
    female: RateTable<[Kyat; PLAN_COUNT]>,
}

impl HealthPlanRates {
    /// Built-in rate table
    pub fn standard() -> Self {
        Self {
            male: RateTable::from_static(MALE_BANDS),
            female: RateTable::from_static(FEMALE_BANDS),
        }
    }

    pub fn new(male: RateTable<[Kyat; PLAN_COUNT]>, female: RateTable<[Kyat; PLAN_COUNT]>) -> Self {
        Self { male, female }
    }

    pub fn table(&self, gender: Gender) -> &RateTable<[Kyat; PLAN_COUNT]> {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Annual premium for a plan at an insurance age; 0 when not covered
    pub fn premium(&self, plan: HealthPlanId, insurance_age: u8, gender: Gender) -> Kyat {
        match self.table(gender).values_for(insurance_age) {
            Some(row) => row[plan.index()],
            None => {
                log::trace!("health plan {plan}: insurance age {insurance_age} ({gender}) not covered");
                0
            }
        }
    }

    /// Same as [`premium`](Self::premium) for a raw plan number; unknown plans price at 0
    pub fn premium_by_number(&self, plan: u8, insurance_age: u8, gender: Gender) -> Kyat {
        HealthPlanId::new(plan)
            .map(|plan| self.premium(plan, insurance_age, gender))
            .unwrap_or(0)
    }

    pub fn is_covered(&self, insurance_age: u8) -> bool {
        self.male.is_covered(insurance_age) || self.female.is_covered(insurance_age)
    }

    pub fn coverage_range(&self) -> Option<AgeRange> {
        span_all([self.male.coverage_range(), self.female.coverage_range()])
    }
}

// Annual premium by insurance age band, plans 1-7

const MALE_BANDS: &[Band<[Kyat; PLAN_COUNT]>] = &[
    Band::range(0, 5, [   78_000,   117_800,   158_200,   238_900,   320_600,   403_500,   487_400]),
    Band::range(6, 10, [   54_000,    80_700,   107_300,   160_400,   213_100,   265_500,   317_500]),
    Band::range(11, 15, [   48_000,    71_500,    94_600,   140_800,   186_200,   231_000,   275_000]),
    Band::range(16, 20, [   51_000,    76_100,   100_900,   150_600,   199_700,   248_200,   296_300]),
    Band::range(21, 25, [   54_000,    80_700,   107_300,   160_400,   213_100,   265_500,   317_500]),
    Band::range(26, 30, [   60_000,    90_000,   120_000,   180_000,   240_000,   300_000,   360_000]),
    Band::range(31, 35, [   63_000,    94_600,   126_400,   189_800,   253_400,   317_300,   381_200]),
    Band::range(36, 40, [   69_000,   103_900,   139_100,   209_400,   280_300,   351_700,   423_700]),
    Band::range(41, 45, [   78_000,   117_800,   158_200,   238_900,   320_600,   403_500,   487_400]),
    Band::range(46, 50, [   90_000,   136_400,   183_600,   278_100,   374_400,   472_500,   572_400]),
    Band::range(51, 55, [  108_000,   164_200,   221_800,   337_000,   455_000,   576_000,   699_800]),
    Band::range(56, 60, [  126_000,   192_000,   259_900,   395_800,   535_700,   679_500,   827_300]),
    Band::range(61, 65, [  150_000,   229_000,   310_800,   474_300,   643_200,   817_500,   997_200]),
    Band::range(66, 70, [  180_000,   275_400,   374_400,   572_400,   777_600,   990_000, 1_209_600]),
    Band::range(71, 75, [  216_000,   331_000,   450_700,   690_100,   938_900, 1_197_000, 1_464_500]),
    Band::range(76, 80, [  258_000,   395_900,   539_800,   827_500, 1_127_000, 1_438_500, 1_761_800]),
];

const FEMALE_BANDS: &[Band<[Kyat; PLAN_COUNT]>] = &[
    Band::range(0, 5, [   78_000,   117_800,   158_200,   238_900,   320_600,   403_500,   487_400]),
    Band::range(6, 10, [   54_000,    80_700,   107_300,   160_400,   213_100,   265_500,   317_500]),
    Band::range(11, 15, [   48_000,    71_500,    94_600,   140_800,   186_200,   231_000,   275_000]),
    Band::range(16, 20, [   57_100,    85_200,   113_000,   168_600,   223_600,   278_000,   331_800]),
    Band::range(21, 25, [   60_500,    90_400,   120_200,   179_600,   238_700,   297_400,   355_600]),
    Band::range(26, 30, [   67_200,   100_800,   134_400,   201_600,   268_800,   336_000,   403_200]),
    Band::range(31, 35, [   70_600,   106_000,   141_500,   212_600,   283_900,   355_300,   427_000]),
    Band::range(36, 40, [   77_300,   116_400,   155_800,   234_600,   314_000,   394_000,   474_600]),
    Band::range(41, 45, [   87_400,   131_900,   177_100,   267_500,   359_100,   451_900,   545_900]),
    Band::range(46, 50, [   90_000,   136_400,   183_600,   278_100,   374_400,   472_500,   572_400]),
    Band::range(51, 55, [  108_000,   164_200,   221_800,   337_000,   455_000,   576_000,   699_800]),
    Band::range(56, 60, [  118_400,   180_500,   244_300,   372_100,   503_500,   638_700,   777_600]),
    Band::range(61, 65, [  141_000,   215_300,   292_200,   445_800,   604_600,   768_400,   937_400]),
    Band::range(66, 70, [  169_200,   258_900,   351_900,   538_100,   730_900,   930_600, 1_137_000]),
    Band::range(71, 75, [  203_000,   311_200,   423_700,   648_700,   882_500, 1_125_200, 1_376_600]),
    Band::range(76, 80, [  242_500,   372_200,   507_400,   777_800, 1_059_400, 1_352_200, 1_656_100]),
];
