//! Age-banded rate tables and the age/coverage resolver
//!
//! Every product line prices from a table of bands. A band is keyed either by a
//! single age or by an inclusive age range, and carries the premiums for that
//! age across the product's plans. Bands are disjoint and ascending, so the
//! first band that contains an age is the only one.
//!
//! An age that no band contains is simply not covered. That is never an error:
//! callers price it at zero or hide the product.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whole Myanmar Kyat
pub type Kyat = u64;

/// Age key of a band: one exact age or an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeKey {
    Single(u8),
    Range(u8, u8),
}

impl AgeKey {
    pub fn contains(&self, age: u8) -> bool {
        match *self {
            AgeKey::Single(a) => a == age,
            AgeKey::Range(min, max) => min <= age && age <= max,
        }
    }

    pub fn min_age(&self) -> u8 {
        match *self {
            AgeKey::Single(a) => a,
            AgeKey::Range(min, _) => min,
        }
    }

    pub fn max_age(&self) -> u8 {
        match *self {
            AgeKey::Single(a) => a,
            AgeKey::Range(_, max) => max,
        }
    }
}

/// One row of a rate table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band<V> {
    pub age: AgeKey,
    pub values: V,
}

impl<V> Band<V> {
    pub const fn single(age: u8, values: V) -> Self {
        Self {
            age: AgeKey::Single(age),
            values,
        }
    }

    pub const fn range(min_age: u8, max_age: u8, values: V) -> Self {
        Self {
            age: AgeKey::Range(min_age, max_age),
            values,
        }
    }
}

/// Inclusive age range a table covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min_age: u8,
    pub max_age: u8,
}

impl AgeRange {
    pub fn new(min_age: u8, max_age: u8) -> Self {
        Self { min_age, max_age }
    }

    pub fn contains(&self, age: u8) -> bool {
        self.min_age <= age && age <= self.max_age
    }

    /// Smallest range spanning both
    pub fn span(self, other: AgeRange) -> AgeRange {
        AgeRange {
            min_age: self.min_age.min(other.min_age),
            max_age: self.max_age.max(other.max_age),
        }
    }
}

/// Broken band layout found while building a table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BandError {
    #[error("band {min_age}-{max_age} has its minimum age above its maximum")]
    Inverted { min_age: u8, max_age: u8 },

    #[error("band starting at age {age} overlaps or precedes the band ending at age {previous_max}")]
    OutOfOrder { age: u8, previous_max: u8 },
}

/// Ordered, disjoint age bands with per-band premium values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable<V> {
    bands: Vec<Band<V>>,
}

impl<V> RateTable<V> {
    /// Build a table, checking bands are well formed, ascending and disjoint
    pub fn new(bands: Vec<Band<V>>) -> Result<Self, BandError> {
        let mut previous_max: Option<u8> = None;
        for band in &bands {
            let (min_age, max_age) = (band.age.min_age(), band.age.max_age());
            if min_age > max_age {
                return Err(BandError::Inverted { min_age, max_age });
            }
            if let Some(previous_max) = previous_max {
                if min_age <= previous_max {
                    return Err(BandError::OutOfOrder { age: min_age, previous_max });
                }
            }
            previous_max = Some(max_age);
        }
        Ok(Self { bands })
    }

    /// Build from compiled-in rows; layout is checked by each product's tests
    pub(crate) fn from_static(bands: &[Band<V>]) -> Self
    where
        V: Clone,
    {
        Self {
            bands: bands.to_vec(),
        }
    }

    pub fn bands(&self) -> &[Band<V>] {
        &self.bands
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Band whose single age equals `age` or whose range contains it
    pub fn find_band(&self, age: u8) -> Option<&Band<V>> {
        self.bands.iter().find(|band| band.age.contains(age))
    }

    /// Premium values for `age`, if covered
    pub fn values_for(&self, age: u8) -> Option<&V> {
        self.find_band(age).map(|band| &band.values)
    }

    pub fn is_covered(&self, age: u8) -> bool {
        self.find_band(age).is_some()
    }

    /// Covered range, scanned from the band data; `None` for an empty table
    pub fn coverage_range(&self) -> Option<AgeRange> {
        self.bands
            .iter()
            .map(|band| AgeRange::new(band.age.min_age(), band.age.max_age()))
            .reduce(AgeRange::span)
    }
}

/// Span of several optional ranges, ignoring empty tables
pub(crate) fn span_all<I>(ranges: I) -> Option<AgeRange>
where
    I: IntoIterator<Item = Option<AgeRange>>,
{
    ranges.into_iter().flatten().reduce(AgeRange::span)
}
