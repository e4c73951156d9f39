//! Endowment (Life-B) premiums
//!
//! Five coverage amounts, rated by gender for each single year of actual age.
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

/// Number of coverage amounts per row
pub const COVERAGE_COUNT: usize = 5;

/// Endowment coverage amount, keyed in millions of Kyat
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum EndowmentCoverage {
    #[serde(rename = "10M")]
    M10,
    #[serde(rename = "20M")]
    M20,
    #[serde(rename = "50M")]
    M50,
    #[serde(rename = "100M")]
    M100,
    #[serde(rename = "200M")]
    M200,
}

impl EndowmentCoverage {
    pub const ALL: [EndowmentCoverage; COVERAGE_COUNT] = [
        EndowmentCoverage::M10,
        EndowmentCoverage::M20,
        EndowmentCoverage::M50,
        EndowmentCoverage::M100,
        EndowmentCoverage::M200,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EndowmentCoverage::M10 => "10M",
            EndowmentCoverage::M20 => "20M",
            EndowmentCoverage::M50 => "50M",
            EndowmentCoverage::M100 => "100M",
            EndowmentCoverage::M200 => "200M",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EndowmentCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndowmentCoverage {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        EndowmentCoverage::ALL
            .into_iter()
            .find(|coverage| coverage.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| ParseKeyError::new("endowment coverage", s))
    }
}

impl TryFrom<String> for EndowmentCoverage {
    type Error = ParseKeyError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        key.parse()
    }
}

/// Gender-rated endowment table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndowmentRates {
    male: RateTable<[Kyat; COVERAGE_COUNT]>,
    female: RateTable<[Kyat; COVERAGE_COUNT]>,
}

impl EndowmentRates {
    /// Built-in rate table
    pub fn standard() -> Self {
        Self {
            male: RateTable::from_static(MALE_ROWS),
            female: RateTable::from_static(FEMALE_ROWS),
        }
    }

    pub fn new(male: RateTable<[Kyat; COVERAGE_COUNT]>, female: RateTable<[Kyat; COVERAGE_COUNT]>) -> Self {
        Self { male, female }
    }

    pub fn table(&self, gender: Gender) -> &RateTable<[Kyat; COVERAGE_COUNT]> {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Annual premium at an actual age; 0 when not covered
    pub fn premium(&self, coverage: EndowmentCoverage, actual_age: u8, gender: Gender) -> Kyat {
        match self.table(gender).values_for(actual_age) {
            Some(row) => row[coverage.index()],
            None => {
                log::trace!("endowment {coverage}: age {actual_age} ({gender}) not covered");
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

// Annual premium by actual age, coverage 10M / 20M / 50M / 100M / 200M

const MALE_ROWS: &[Band<[Kyat; COVERAGE_COUNT]>] = &[
    Band::single(17, [    520_000,   1_040_000,   2_600_000,   5_200_000,  10_400_000]),
    Band::single(18, [    525_600,   1_051_200,   2_628_100,   5_256_200,  10_512_400]),
    Band::single(19, [    531_500,   1_063_000,   2_657_400,   5_314_800,  10_629_600]),
    Band::single(20, [    537_600,   1_075_200,   2_687_900,   5_375_800,  10_751_600]),
    Band::single(21, [    543_900,   1_087_800,   2_719_600,   5_439_200,  10_878_400]),
    Band::single(22, [    550_500,   1_101_000,   2_752_500,   5_505_000,  11_010_000]),
    Band::single(23, [    557_300,   1_114_600,   2_786_600,   5_573_200,  11_146_400]),
    Band::single(24, [    564_400,   1_128_800,   2_821_900,   5_643_800,  11_287_600]),
    Band::single(25, [    571_700,   1_143_400,   2_858_400,   5_716_800,  11_433_600]),
    Band::single(26, [    579_200,   1_158_400,   2_896_100,   5_792_200,  11_584_400]),
    Band::single(27, [    587_000,   1_174_000,   2_935_000,   5_870_000,  11_740_000]),
    Band::single(28, [    595_000,   1_190_000,   2_975_100,   5_950_200,  11_900_400]),
    Band::single(29, [    603_300,   1_206_600,   3_016_400,   6_032_800,  12_065_600]),
    Band::single(30, [    611_800,   1_223_600,   3_058_900,   6_117_800,  12_235_600]),
    Band::single(31, [    620_500,   1_241_000,   3_102_600,   6_205_200,  12_410_400]),
    Band::single(32, [    629_500,   1_259_000,   3_147_500,   6_295_000,  12_590_000]),
    Band::single(33, [    638_700,   1_277_400,   3_193_600,   6_387_200,  12_774_400]),
    Band::single(34, [    648_200,   1_296_400,   3_240_900,   6_481_800,  12_963_600]),
    Band::single(35, [    657_900,   1_315_800,   3_289_400,   6_578_800,  13_157_600]),
    Band::single(36, [    667_800,   1_335_600,   3_339_100,   6_678_200,  13_356_400]),
    Band::single(37, [    678_000,   1_356_000,   3_390_000,   6_780_000,  13_560_000]),
    Band::single(38, [    688_400,   1_376_800,   3_442_100,   6_884_200,  13_768_400]),
    Band::single(39, [    699_100,   1_398_200,   3_495_400,   6_990_800,  13_981_600]),
    Band::single(40, [    710_000,   1_420_000,   3_549_900,   7_099_800,  14_199_600]),
    Band::single(41, [    721_100,   1_442_200,   3_605_600,   7_211_200,  14_422_400]),
    Band::single(42, [    732_500,   1_465_000,   3_662_500,   7_325_000,  14_650_000]),
    Band::single(43, [    744_100,   1_488_200,   3_720_600,   7_441_200,  14_882_400]),
    Band::single(44, [    756_000,   1_512_000,   3_779_900,   7_559_800,  15_119_600]),
    Band::single(45, [    768_100,   1_536_200,   3_840_400,   7_680_800,  15_361_600]),
    Band::single(46, [    780_400,   1_560_800,   3_902_100,   7_804_200,  15_608_400]),
    Band::single(47, [    793_000,   1_586_000,   3_965_000,   7_930_000,  15_860_000]),
    Band::single(48, [    805_800,   1_611_600,   4_029_100,   8_058_200,  16_116_400]),
    Band::single(49, [    818_900,   1_637_800,   4_094_400,   8_188_800,  16_377_600]),
    Band::single(50, [    832_200,   1_664_400,   4_160_900,   8_321_800,  16_643_600]),
    Band::single(51, [    845_700,   1_691_400,   4_228_600,   8_457_200,  16_914_400]),
    Band::single(52, [    859_500,   1_719_000,   4_297_500,   8_595_000,  17_190_000]),
    Band::single(53, [    873_500,   1_747_000,   4_367_600,   8_735_200,  17_470_400]),
    Band::single(54, [    887_800,   1_775_600,   4_438_900,   8_877_800,  17_755_600]),
    Band::single(55, [    902_300,   1_804_600,   4_511_400,   9_022_800,  18_045_600]),
    Band::single(56, [    917_000,   1_834_000,   4_585_100,   9_170_200,  18_340_400]),
    Band::single(57, [    932_000,   1_864_000,   4_660_000,   9_320_000,  18_640_000]),
    Band::single(58, [    947_200,   1_894_400,   4_736_100,   9_472_200,  18_944_400]),
    Band::single(59, [    962_700,   1_925_400,   4_813_400,   9_626_800,  19_253_600]),
    Band::single(60, [    978_400,   1_956_800,   4_891_900,   9_783_800,  19_567_600]),
    Band::single(61, [    994_300,   1_988_600,   4_971_600,   9_943_200,  19_886_400]),
    Band::single(62, [  1_010_500,   2_021_000,   5_052_500,  10_105_000,  20_210_000]),
    Band::single(63, [  1_026_900,   2_053_800,   5_134_600,  10_269_200,  20_538_400]),
    Band::single(64, [  1_043_600,   2_087_200,   5_217_900,  10_435_800,  20_871_600]),
    Band::single(65, [  1_060_500,   2_121_000,   5_302_400,  10_604_800,  21_209_600]),
];

const FEMALE_ROWS: &[Band<[Kyat; COVERAGE_COUNT]>] = &[
    Band::single(17, [    504_400,   1_008_800,   2_522_000,   5_044_000,  10_088_000]),
    Band::single(18, [    509_900,   1_019_700,   2_549_300,   5_098_500,  10_197_000]),
    Band::single(19, [    515_500,   1_031_100,   2_577_700,   5_155_400,  10_310_700]),
    Band::single(20, [    521_500,   1_042_900,   2_607_300,   5_214_500,  10_429_100]),
    Band::single(21, [    527_600,   1_055_200,   2_638_000,   5_276_000,  10_552_000]),
    Band::single(22, [    534_000,   1_068_000,   2_669_900,   5_339_800,  10_679_700]),
    Band::single(23, [    540_600,   1_081_200,   2_703_000,   5_406_000,  10_812_000]),
    Band::single(24, [    547_400,   1_094_900,   2_737_200,   5_474_500,  10_949_000]),
    Band::single(25, [    554_500,   1_109_100,   2_772_600,   5_545_300,  11_090_600]),
    Band::single(26, [    561_800,   1_123_700,   2_809_200,   5_618_400,  11_236_900]),
    Band::single(27, [    569_400,   1_138_800,   2_847_000,   5_693_900,  11_387_800]),
    Band::single(28, [    577_200,   1_154_300,   2_885_800,   5_771_700,  11_543_400]),
    Band::single(29, [    585_200,   1_170_400,   2_925_900,   5_851_800,  11_703_600]),
    Band::single(30, [    593_400,   1_186_900,   2_967_100,   5_934_300,  11_868_500]),
    Band::single(31, [    601_900,   1_203_800,   3_009_500,   6_019_000,  12_038_100]),
    Band::single(32, [    610_600,   1_221_200,   3_053_100,   6_106_200,  12_212_300]),
    Band::single(33, [    619_600,   1_239_100,   3_097_800,   6_195_600,  12_391_200]),
    Band::single(34, [    628_700,   1_257_500,   3_143_700,   6_287_300,  12_574_700]),
    Band::single(35, [    638_100,   1_276_300,   3_190_700,   6_381_400,  12_762_900]),
    Band::single(36, [    647_800,   1_295_600,   3_238_900,   6_477_900,  12_955_700]),
    Band::single(37, [    657_700,   1_315_300,   3_288_300,   6_576_600,  13_153_200]),
    Band::single(38, [    667_800,   1_335_500,   3_338_800,   6_677_700,  13_355_300]),
    Band::single(39, [    678_100,   1_356_200,   3_390_500,   6_781_100,  13_562_200]),
    Band::single(40, [    688_700,   1_377_400,   3_443_400,   6_886_800,  13_773_600]),
    Band::single(41, [    699_500,   1_399_000,   3_497_400,   6_994_900,  13_989_700]),
    Band::single(42, [    710_500,   1_421_000,   3_552_600,   7_105_200,  14_210_500]),
    Band::single(43, [    721_800,   1_443_600,   3_609_000,   7_218_000,  14_435_900]),
    Band::single(44, [    733_300,   1_466_600,   3_666_500,   7_333_000,  14_666_000]),
    Band::single(45, [    745_000,   1_490_100,   3_725_200,   7_450_400,  14_900_800]),
    Band::single(46, [    757_000,   1_514_000,   3_785_000,   7_570_100,  15_140_100]),
    Band::single(47, [    769_200,   1_538_400,   3_846_000,   7_692_100,  15_384_200]),
    Band::single(48, [    781_600,   1_563_300,   3_908_200,   7_816_500,  15_632_900]),
    Band::single(49, [    794_300,   1_588_600,   3_971_600,   7_943_100,  15_886_300]),
    Band::single(50, [    807_200,   1_614_400,   4_036_100,   8_072_100,  16_144_300]),
    Band::single(51, [    820_300,   1_640_700,   4_101_700,   8_203_500,  16_407_000]),
    Band::single(52, [    833_700,   1_667_400,   4_168_600,   8_337_200,  16_674_300]),
    Band::single(53, [    847_300,   1_694_600,   4_236_600,   8_473_100,  16_946_300]),
    Band::single(54, [    861_100,   1_722_300,   4_305_700,   8_611_500,  17_222_900]),
    Band::single(55, [    875_200,   1_750_400,   4_376_100,   8_752_100,  17_504_200]),
    Band::single(56, [    889_500,   1_779_000,   4_447_500,   8_895_100,  17_790_200]),
    Band::single(57, [    904_000,   1_808_100,   4_520_200,   9_040_400,  18_080_800]),
    Band::single(58, [    918_800,   1_837_600,   4_594_000,   9_188_000,  18_376_100]),
    Band::single(59, [    933_800,   1_867_600,   4_669_000,   9_338_000,  18_676_000]),
    Band::single(60, [    949_000,   1_898_100,   4_745_100,   9_490_300,  18_980_600]),
    Band::single(61, [    964_500,   1_929_000,   4_822_500,   9_644_900,  19_289_800]),
    Band::single(62, [    980_200,   1_960_400,   4_900_900,   9_801_800,  19_603_700]),
    Band::single(63, [    996_100,   1_992_200,   4_980_600,   9_961_100,  19_922_200]),
    Band::single(64, [  1_012_300,   2_024_500,   5_061_400,  10_122_700,  20_245_500]),
    Band::single(65, [  1_028_700,   2_057_300,   5_143_300,  10_286_700,  20_573_300]),
];
