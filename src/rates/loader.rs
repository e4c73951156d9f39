//! CSV-based rate table loader
//!
//! Loads replacement rate tables from CSV files in data/rates/. Every file has
//! a header row and columns are located by header name, so their order is
//! free. Rows whose minimum and maximum age are equal load as single-age bands.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;

use super::cancer::CancerRiderRates;
use super::endowment::{EndowmentCoverage, EndowmentRates, COVERAGE_COUNT};
use super::health::{HealthPlanId, HealthPlanRates, PLAN_COUNT};
use super::table::{Band, Kyat, RateTable};
use super::universal::{HealthTier, UniversalPlan, UniversalRates, TIER_COUNT};
use crate::error::RateTableError;
use crate::profile::Gender;

/// Default path to the rates directory
pub const DEFAULT_RATES_PATH: &str = "data/rates";

pub const HEALTH_PLAN_MALE_FILE: &str = "health_plan_male.csv";
pub const HEALTH_PLAN_FEMALE_FILE: &str = "health_plan_female.csv";
pub const UNIVERSAL_FILE: &str = "universal_life.csv";
pub const ENDOWMENT_MALE_FILE: &str = "endowment_male.csv";
pub const ENDOWMENT_FEMALE_FILE: &str = "endowment_female.csv";
pub const CANCER_RIDER_FILE: &str = "cancer_rider.csv";

fn open(path: &Path, file: &str) -> Result<csv::Reader<File>, RateTableError> {
    let handle = File::open(path.join(file)).map_err(|source| RateTableError::Io {
        file: file.to_string(),
        source,
    })?;
    Ok(csv::Reader::from_reader(handle))
}

fn csv_error(file: &str) -> impl Fn(csv::Error) -> RateTableError + '_ {
    move |source| RateTableError::Csv {
        file: file.to_string(),
        source,
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Parse one field, naming the header column on failure
fn field<T: FromStr>(
    file: &str,
    headers: &StringRecord,
    record: &StringRecord,
    idx: usize,
) -> Result<T, RateTableError> {
    let raw = record.get(idx).unwrap_or("").trim();
    raw.parse().map_err(|_| RateTableError::InvalidValue {
        file: file.to_string(),
        line: line_of(record),
        column: headers.get(idx).unwrap_or("?").to_string(),
        value: raw.to_string(),
    })
}

fn check_width(file: &str, record: &StringRecord, expected: usize) -> Result<(), RateTableError> {
    if record.len() != expected {
        return Err(RateTableError::ColumnCount {
            file: file.to_string(),
            line: line_of(record),
            expected,
            found: record.len(),
        });
    }
    Ok(())
}

/// Index of the header named `name` (case-insensitive); it must appear exactly once
fn column(file: &str, headers: &StringRecord, name: &str) -> Result<usize, RateTableError> {
    let mut matches = headers
        .iter()
        .enumerate()
        .filter(|(_, header)| header.trim().eq_ignore_ascii_case(name))
        .map(|(idx, _)| idx);

    let idx = matches.next().ok_or_else(|| RateTableError::MissingColumn {
        file: file.to_string(),
        column: name.to_string(),
    })?;
    if matches.next().is_some() {
        return Err(RateTableError::DuplicateColumn {
            file: file.to_string(),
            column: name.to_string(),
        });
    }
    Ok(idx)
}

fn band_for<V>(min_age: u8, max_age: u8, values: V) -> Band<V> {
    if min_age == max_age {
        Band::single(min_age, values)
    } else {
        Band::range(min_age, max_age, values)
    }
}

fn build_table<V>(file: &str, bands: Vec<Band<V>>) -> Result<RateTable<V>, RateTableError> {
    RateTable::new(bands).map_err(|source| RateTableError::Bands {
        file: file.to_string(),
        source,
    })
}

/// Load one gender's health plan table
/// Columns: min_age,max_age,plan_1..plan_7 (any order)
pub fn load_health_plan_table(
    path: &Path,
    gender: Gender,
) -> Result<RateTable<[Kyat; PLAN_COUNT]>, RateTableError> {
    let file = match gender {
        Gender::Male => HEALTH_PLAN_MALE_FILE,
        Gender::Female => HEALTH_PLAN_FEMALE_FILE,
    };
    let mut reader = open(path, file)?;
    let headers = reader.headers().map_err(csv_error(file))?.clone();

    let min_col = column(file, &headers, "min_age")?;
    let max_col = column(file, &headers, "max_age")?;
    let mut plan_columns = [0usize; PLAN_COUNT];
    for (slot, plan) in plan_columns.iter_mut().zip(HealthPlanId::all()) {
        *slot = column(file, &headers, &format!("plan_{plan}"))?;
    }

    let mut bands = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error(file))?;
        check_width(file, &record, headers.len())?;

        let min_age: u8 = field(file, &headers, &record, min_col)?;
        let max_age: u8 = field(file, &headers, &record, max_col)?;
        let mut premiums: [Kyat; PLAN_COUNT] = [0; PLAN_COUNT];
        for (premium, &idx) in premiums.iter_mut().zip(&plan_columns) {
            *premium = field(file, &headers, &record, idx)?;
        }
        bands.push(band_for(min_age, max_age, premiums));
    }

    build_table(file, bands)
}

/// Load universal life tables for all plans
/// Columns: plan,min_age,max_age,minimum,default,maximum (any order)
pub fn load_universal_rates(path: &Path) -> Result<UniversalRates, RateTableError> {
    let file = UNIVERSAL_FILE;
    let mut reader = open(path, file)?;
    let headers = reader.headers().map_err(csv_error(file))?.clone();

    let plan_col = column(file, &headers, "plan")?;
    let min_col = column(file, &headers, "min_age")?;
    let max_col = column(file, &headers, "max_age")?;
    let mut tier_columns = [0usize; TIER_COUNT];
    for (slot, tier) in tier_columns.iter_mut().zip(HealthTier::ALL) {
        *slot = column(file, &headers, tier.as_str())?;
    }

    let mut per_plan: [Vec<Band<[Kyat; TIER_COUNT]>>; 6] = Default::default();
    for result in reader.records() {
        let record = result.map_err(csv_error(file))?;
        check_width(file, &record, headers.len())?;

        let plan: UniversalPlan = record[plan_col].parse().map_err(|source| RateTableError::UnknownKey {
            file: file.to_string(),
            source,
        })?;
        let min_age: u8 = field(file, &headers, &record, min_col)?;
        let max_age: u8 = field(file, &headers, &record, max_col)?;
        let mut tiers: [Kyat; TIER_COUNT] = [0; TIER_COUNT];
        for (premium, &idx) in tiers.iter_mut().zip(&tier_columns) {
            *premium = field(file, &headers, &record, idx)?;
        }
        per_plan[plan as usize].push(band_for(min_age, max_age, tiers));
    }

    let mut tables = Vec::with_capacity(UniversalPlan::ALL.len());
    for (plan, bands) in UniversalPlan::ALL.into_iter().zip(per_plan) {
        if bands.is_empty() {
            return Err(RateTableError::MissingPlan {
                file: file.to_string(),
                plan: plan.to_string(),
            });
        }
        tables.push(build_table(file, bands)?);
    }

    let plans: [RateTable<[Kyat; TIER_COUNT]>; 6] = tables
        .try_into()
        .map_err(|_| RateTableError::MissingPlan {
            file: file.to_string(),
            plan: "all".to_string(),
        })?;
    Ok(UniversalRates::new(plans))
}

/// Load one gender's endowment table
/// Columns: age and one column per coverage key (10M..200M), any order
pub fn load_endowment_table(
    path: &Path,
    gender: Gender,
) -> Result<RateTable<[Kyat; COVERAGE_COUNT]>, RateTableError> {
    let file = match gender {
        Gender::Male => ENDOWMENT_MALE_FILE,
        Gender::Female => ENDOWMENT_FEMALE_FILE,
    };
    let mut reader = open(path, file)?;
    let headers = reader.headers().map_err(csv_error(file))?.clone();

    let age_col = column(file, &headers, "age")?;
    // Anything besides age must be a coverage key
    for (idx, header) in headers.iter().enumerate() {
        if idx != age_col {
            header.parse::<EndowmentCoverage>().map_err(|source| RateTableError::UnknownKey {
                file: file.to_string(),
                source,
            })?;
        }
    }
    let mut coverage_columns = [0usize; COVERAGE_COUNT];
    for (slot, coverage) in coverage_columns.iter_mut().zip(EndowmentCoverage::ALL) {
        *slot = column(file, &headers, coverage.as_str())?;
    }

    let mut bands = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error(file))?;
        check_width(file, &record, headers.len())?;

        let age: u8 = field(file, &headers, &record, age_col)?;
        let mut premiums: [Kyat; COVERAGE_COUNT] = [0; COVERAGE_COUNT];
        for (premium, &idx) in premiums.iter_mut().zip(&coverage_columns) {
            *premium = field(file, &headers, &record, idx)?;
        }
        bands.push(Band::single(age, premiums));
    }

    build_table(file, bands)
}

/// Load the cancer rider table
/// Columns: age,female,male (any order)
/// Returns (female, male) tables
pub fn load_cancer_rider_tables(path: &Path) -> Result<(RateTable<Kyat>, RateTable<Kyat>), RateTableError> {
    let file = CANCER_RIDER_FILE;
    let mut reader = open(path, file)?;
    let headers = reader.headers().map_err(csv_error(file))?.clone();

    let age_col = column(file, &headers, "age")?;
    let female_col = column(file, &headers, Gender::Female.as_str())?;
    let male_col = column(file, &headers, Gender::Male.as_str())?;

    let mut female = Vec::new();
    let mut male = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error(file))?;
        check_width(file, &record, headers.len())?;

        let age: u8 = field(file, &headers, &record, age_col)?;
        let female_premium: Kyat = field(file, &headers, &record, female_col)?;
        let male_premium: Kyat = field(file, &headers, &record, male_col)?;
        female.push(Band::single(age, female_premium));
        male.push(Band::single(age, male_premium));
    }

    Ok((build_table(file, female)?, build_table(file, male)?))
}

/// All rate tables as read from one directory
pub struct LoadedRates {
    pub health: HealthPlanRates,
    pub universal: UniversalRates,
    pub endowment: EndowmentRates,
    pub cancer_rider: CancerRiderRates,
}

impl LoadedRates {
    /// Load all tables from the default path
    pub fn load_default() -> Result<Self, RateTableError> {
        Self::load_from(Path::new(DEFAULT_RATES_PATH))
    }

    /// Load all tables from a specific path
    pub fn load_from(path: &Path) -> Result<Self, RateTableError> {
        let (cancer_female, cancer_male) = load_cancer_rider_tables(path)?;
        Ok(Self {
            health: HealthPlanRates::new(
                load_health_plan_table(path, Gender::Male)?,
                load_health_plan_table(path, Gender::Female)?,
            ),
            universal: load_universal_rates(path)?,
            endowment: EndowmentRates::new(
                load_endowment_table(path, Gender::Male)?,
                load_endowment_table(path, Gender::Female)?,
            ),
            cancer_rider: CancerRiderRates::new(cancer_male, cancer_female),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::AgeRange;
    use std::fs;
    use std::path::PathBuf;

    /// Scratch directory holding a copy of the shipped tables
    fn scratch_copy(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("premium_quote_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for entry in fs::read_dir(DEFAULT_RATES_PATH).unwrap() {
            let entry = entry.unwrap();
            fs::copy(entry.path(), dir.join(entry.file_name())).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_default_rates() {
        let result = LoadedRates::load_default();
        assert!(result.is_ok(), "Failed to load rates: {:?}", result.err());

        let loaded = result.unwrap();
        assert_eq!(loaded.health, HealthPlanRates::standard());
        assert_eq!(loaded.universal, UniversalRates::standard());
        assert_eq!(loaded.endowment, EndowmentRates::standard());
        assert_eq!(loaded.cancer_rider, CancerRiderRates::standard());
    }

    #[test]
    fn test_missing_directory_names_file() {
        let err = LoadedRates::load_from(Path::new("does/not/exist")).err().unwrap();
        assert!(matches!(err, RateTableError::Io { ref file, .. } if file == CANCER_RIDER_FILE));
    }

    #[test]
    fn test_endowment_columns_in_any_order() {
        let dir = scratch_copy("reordered");
        fs::write(
            dir.join(ENDOWMENT_MALE_FILE),
            "age,200M,100M,50M,20M,10M\n17,5,4,3,2,1\n18,10,9,8,7,6\n",
        )
        .unwrap();

        let table = load_endowment_table(&dir, Gender::Male).unwrap();
        assert_eq!(table.values_for(17), Some(&[1, 2, 3, 4, 5]));
        assert_eq!(table.values_for(18), Some(&[6, 7, 8, 9, 10]));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_endowment_missing_coverage_column() {
        let dir = scratch_copy("missing_column");
        fs::write(dir.join(ENDOWMENT_FEMALE_FILE), "age,10M,20M,50M,100M\n17,1,2,3,4\n").unwrap();

        let err = load_endowment_table(&dir, Gender::Female).unwrap_err();
        assert!(matches!(err, RateTableError::MissingColumn { ref column, .. } if column == "200M"));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_overlapping_health_bands_rejected() {
        let dir = scratch_copy("overlap");
        fs::write(
            dir.join(HEALTH_PLAN_MALE_FILE),
            "min_age,max_age,plan_1,plan_2,plan_3,plan_4,plan_5,plan_6,plan_7\n\
             0,10,1,2,3,4,5,6,7\n\
             10,20,1,2,3,4,5,6,7\n",
        )
        .unwrap();

        let err = load_health_plan_table(&dir, Gender::Male).unwrap_err();
        assert!(matches!(err, RateTableError::Bands { .. }));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_invalid_premium_reports_column() {
        let dir = scratch_copy("invalid");
        fs::write(dir.join(CANCER_RIDER_FILE), "age,female,male\n1,100,abc\n").unwrap();

        let err = load_cancer_rider_tables(&dir).unwrap_err();
        match err {
            RateTableError::InvalidValue { column, value, line, .. } => {
                assert_eq!(column, "male");
                assert_eq!(value, "abc");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_cancer_rider_gender_columns_by_name() {
        let dir = scratch_copy("cancer_reordered");
        fs::write(dir.join(CANCER_RIDER_FILE), "age,male,female\n1,100,200\n2,110,210\n").unwrap();

        let (female, male) = load_cancer_rider_tables(&dir).unwrap();
        assert_eq!(male.values_for(1), Some(&100));
        assert_eq!(female.values_for(1), Some(&200));
        assert_eq!(male.values_for(2), Some(&110));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_cancer_rider_missing_gender_column() {
        let dir = scratch_copy("cancer_missing");
        fs::write(dir.join(CANCER_RIDER_FILE), "age,female\n1,100\n").unwrap();

        let err = load_cancer_rider_tables(&dir).unwrap_err();
        assert!(matches!(err, RateTableError::MissingColumn { ref column, .. } if column == "male"));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_health_plan_columns_by_name() {
        let dir = scratch_copy("health_reordered");
        fs::write(
            dir.join(HEALTH_PLAN_FEMALE_FILE),
            "plan_7,plan_6,plan_5,plan_4,plan_3,plan_2,plan_1,max_age,min_age\n\
             70,60,50,40,30,20,10,10,0\n",
        )
        .unwrap();

        let table = load_health_plan_table(&dir, Gender::Female).unwrap();
        assert_eq!(table.values_for(4), Some(&[10, 20, 30, 40, 50, 60, 70]));
        assert_eq!(table.coverage_range(), Some(AgeRange::new(0, 10)));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_universal_tier_columns_by_name() {
        let dir = scratch_copy("universal_reordered");
        let mut csv = String::from("maximum,default,minimum,max_age,min_age,plan\n");
        for plan in UniversalPlan::ALL {
            csv.push_str(&format!("3,2,1,64,0,{plan}\n"));
        }
        fs::write(dir.join(UNIVERSAL_FILE), csv).unwrap();

        let rates = load_universal_rates(&dir).unwrap();
        assert_eq!(rates.table(UniversalPlan::L2000).values_for(30), Some(&[1, 2, 3]));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_endowment_repeated_coverage_column() {
        let dir = scratch_copy("duplicate_column");
        fs::write(
            dir.join(ENDOWMENT_MALE_FILE),
            "age,10M,20M,50M,100M,200M,10M\n17,1,2,3,4,5,6\n",
        )
        .unwrap();

        let err = load_endowment_table(&dir, Gender::Male).unwrap_err();
        assert!(matches!(err, RateTableError::DuplicateColumn { ref column, .. } if column == "10M"));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_universal_requires_every_plan() {
        let dir = scratch_copy("universal");
        fs::write(
            dir.join(UNIVERSAL_FILE),
            "plan,min_age,max_age,minimum,default,maximum\n1000L,0,64,1,2,3\n",
        )
        .unwrap();

        let err = load_universal_rates(&dir).err().unwrap();
        assert!(matches!(err, RateTableError::MissingPlan { ref plan, .. } if plan == "1500L"));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_universal_unknown_plan_key() {
        let dir = scratch_copy("universal_key");
        fs::write(
            dir.join(UNIVERSAL_FILE),
            "plan,min_age,max_age,minimum,default,maximum\n9999L,0,64,1,2,3\n",
        )
        .unwrap();

        let err = load_universal_rates(&dir).err().unwrap();
        assert!(matches!(err, RateTableError::UnknownKey { .. }));

        fs::remove_dir_all(dir).ok();
    }
}
