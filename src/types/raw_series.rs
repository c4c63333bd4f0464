//! Date-keyed daily series as delivered by a climate data provider.
//!
//! A [`RawSeries`] maps an eight digit `YYYYMMDD` key to one reading. A
//! [`ClimateRecord`] groups the series of several variables under their
//! provider parameter codes.

use crate::engine::error::EngineError;
use crate::types::variable::Variable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One daily series: `YYYYMMDD` key to reading.
///
/// A reading of `None` is the provider's explicit "missing" marker (JSON `null`),
/// which is distinct from a numeric sentinel such as `-999.0`. Both are removed
/// by the sentinel filter before any statistic is computed.
///
/// Keys are kept in ascending order, which for `YYYYMMDD` keys is chronological.
///
/// # Examples
///
/// ```
/// use climascope::RawSeries;
///
/// let series: RawSeries = [("20230704", 21.3), ("20240704", -999.0)].into_iter().collect();
/// assert_eq!(series.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawSeries(BTreeMap<String, Option<f64>>);

impl RawSeries {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts a reading, replacing any previous reading for the same key.
    pub fn insert(&mut self, key: impl Into<String>, reading: Option<f64>) {
        self.0.insert(key.into(), reading);
    }

    pub fn get(&self, key: &str) -> Option<Option<f64>> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(key, reading)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.0.iter().map(|(key, reading)| (key.as_str(), *reading))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for RawSeries {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), Some(value)))
                .collect(),
        )
    }
}

/// A parsed `YYYYMMDD` series key.
///
/// Only the shape is checked (eight ASCII digits). Whether the month/day pair
/// exists in the calendar is left to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateKey {
    /// Parses an eight digit key. Returns `None` for anything else.
    ///
    /// ```
    /// use climascope::DateKey;
    ///
    /// let key = DateKey::parse("19960229").unwrap();
    /// assert_eq!((key.year, key.month, key.day), (1996, 2, 29));
    /// assert!(DateKey::parse("1996-02-29").is_none());
    /// ```
    pub fn parse(key: &str) -> Option<DateKey> {
        if key.len() != 8 || !key.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(DateKey {
            year: key[0..4].parse().ok()?,
            month: key[4..6].parse().ok()?,
            day: key[6..8].parse().ok()?,
        })
    }

    pub fn is_calendar_day(&self, month: u32, day: u32) -> bool {
        self.month == month && self.day == day
    }
}

/// The daily series a provider returned for one location, keyed by parameter code.
///
/// # Examples
///
/// ```
/// use climascope::{ClimateRecord, RawSeries, Variable};
///
/// let mut record = ClimateRecord::new();
/// record.insert_variable(Variable::Temperature, RawSeries::new());
/// assert!(record.series(Variable::Temperature).is_ok());
/// assert!(record.series(Variable::Precipitation).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClimateRecord(BTreeMap<String, RawSeries>);

impl ClimateRecord {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts a series under an arbitrary provider parameter code.
    pub fn insert(&mut self, parameter_code: impl Into<String>, series: RawSeries) {
        self.0.insert(parameter_code.into(), series);
    }

    pub fn insert_variable(&mut self, variable: Variable, series: RawSeries) {
        self.insert(variable.parameter_code(), series);
    }

    /// Returns the series for `variable`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedSource`] if the provider did not deliver the variable.
    pub fn series(&self, variable: Variable) -> Result<&RawSeries, EngineError> {
        self.0
            .get(variable.parameter_code())
            .ok_or_else(|| EngineError::MalformedSource {
                variable,
                reason: format!("parameter '{}' missing", variable.parameter_code()),
            })
    }

    pub fn parameter_codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }
}
