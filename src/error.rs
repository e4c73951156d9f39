//! Error types for the fallible edges of the engine
//!
//! Premium lookups never fail: an age, plan or gender outside a table is a
//! coverage miss and prices at zero. Errors only arise when rate tables are
//! loaded from disk, when a profile is built from a birth date, or when a
//! product key arrives as text.

use thiserror::Error;

use crate::rates::BandError;

/// Failure while loading a rate table from CSV
#[derive(Debug, Error)]
pub enum RateTableError {
    #[error("failed to open {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("{file} line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        file: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{file} line {line}: invalid value {value:?} in column {column}")]
    InvalidValue {
        file: String,
        line: u64,
        column: String,
        value: String,
    },

    #[error("{file}: {source}")]
    UnknownKey {
        file: String,
        #[source]
        source: ParseKeyError,
    },

    #[error("{file}: missing column {column}")]
    MissingColumn { file: String, column: String },

    #[error("{file}: column {column} appears more than once")]
    DuplicateColumn { file: String, column: String },

    #[error("{file}: no rows for plan {plan}")]
    MissingPlan { file: String, plan: String },

    #[error("{file}: {source}")]
    Bands {
        file: String,
        #[source]
        source: BandError,
    },
}

/// Failure while building a client profile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("date of birth {date_of_birth} is after the valuation date {as_of}")]
    BirthDateInFuture {
        date_of_birth: chrono::NaiveDate,
        as_of: chrono::NaiveDate,
    },

    #[error("either an age or a date of birth is required")]
    MissingAge,
}

/// A plan, tier, coverage, gender or product-line key that does not exist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {value:?}")]
pub struct ParseKeyError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseKeyError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
