//! Series extraction: picks the readings of one calendar day out of every year.

use crate::engine::error::EngineError;
use crate::types::raw_series::{DateKey, RawSeries};
use crate::types::variable::Variable;

/// One extracted reading, tagged with the year it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayReading {
    pub year: i32,
    pub reading: Option<f64>,
}

/// The readings of one variable for one calendar day across all years of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySample {
    pub variable: Variable,
    pub readings: Vec<DayReading>,
}

impl DailySample {
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// The raw readings in year order, missing markers included.
    pub fn values(&self) -> Vec<Option<f64>> {
        self.readings.iter().map(|r| r.reading).collect()
    }
}

/// Selects every reading of `series` whose key falls on `month`/`day`, in key order.
///
/// Matching only looks at the month and day digits of each key, so leap days are
/// found in leap years and nowhere else.
///
/// # Errors
///
/// Returns [`EngineError::MalformedSource`] if any key is not an eight digit `YYYYMMDD` key.
pub fn extract_day(
    series: &RawSeries,
    variable: Variable,
    month: u32,
    day: u32,
) -> Result<DailySample, EngineError> {
    let mut readings = Vec::new();
    for (key, reading) in series.iter() {
        let date_key = parse_key(key, variable)?;
        if date_key.is_calendar_day(month, day) {
            readings.push(DayReading {
                year: date_key.year,
                reading,
            });
        }
    }
    Ok(DailySample { variable, readings })
}

/// Takes every reading of `series`, ignoring the calendar day.
///
/// # Errors
///
/// Returns [`EngineError::MalformedSource`] if any key is not an eight digit `YYYYMMDD` key.
pub fn extract_all(series: &RawSeries, variable: Variable) -> Result<DailySample, EngineError> {
    let readings = series
        .iter()
        .map(|(key, reading)| {
            parse_key(key, variable).map(|date_key| DayReading {
                year: date_key.year,
                reading,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DailySample { variable, readings })
}

fn parse_key(key: &str, variable: Variable) -> Result<DateKey, EngineError> {
    DateKey::parse(key).ok_or_else(|| EngineError::MalformedSource {
        variable,
        reason: format!("date key '{}' is not in YYYYMMDD form", key),
    })
}
