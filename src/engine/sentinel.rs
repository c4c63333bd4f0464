//! Sentinel filtering: drops readings that are not physical observations.
//!
//! The provider marks missing or invalid readings with large negative fill values
//! (NASA POWER uses `-999`). Anything at or below [`SENTINEL_CEILING`] is treated as
//! such a marker, as is an explicit missing reading.

use crate::engine::extractor::DailySample;
use crate::types::variable::Variable;

/// Readings less than or equal to this value are sentinels.
pub const SENTINEL_CEILING: f64 = -99.0;

/// `true` for a physical reading. `-99.0` itself is a sentinel; `NaN` is never valid.
pub fn is_valid(value: f64) -> bool {
    value > SENTINEL_CEILING
}

/// Returns the valid readings, in their original order.
///
/// Accepts raw `f64` values as well as `Option<f64>` readings, where `None` is an
/// explicit missing marker. Filtering an already filtered array returns it unchanged.
///
/// # Examples
///
/// ```
/// use climascope::filter_sentinels;
///
/// let cleaned = filter_sentinels([20.1, -99.0, -98.999, -999.0]);
/// assert_eq!(cleaned, vec![20.1, -98.999]);
///
/// let cleaned = filter_sentinels([Some(1.5), None, Some(-120.0)]);
/// assert_eq!(cleaned, vec![1.5]);
/// ```
pub fn filter_sentinels<I>(readings: I) -> Vec<f64>
where
    I: IntoIterator,
    I::Item: Into<Option<f64>>,
{
    readings
        .into_iter()
        .filter_map(Into::<Option<f64>>::into)
        .filter(|value| is_valid(*value))
        .collect()
}

/// The valid readings of one extracted sample.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedSample {
    pub variable: Variable,
    pub values: Vec<f64>,
    /// Readings removed as missing or sentinel.
    pub dropped: usize,
}

impl CleanedSample {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub fn clean(sample: &DailySample) -> CleanedSample {
    let values = filter_sentinels(sample.readings.iter().map(|r| r.reading));
    CleanedSample {
        variable: sample.variable,
        dropped: sample.len() - values.len(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::extractor::DayReading;

    #[test]
    fn test_boundary_is_exact() {
        assert!(!is_valid(-99.0));
        assert!(is_valid(-98.999));
        assert!(!is_valid(-99.000001));
        assert!(!is_valid(f64::NAN));
        assert!(is_valid(-60.0));
    }

    #[test]
    fn test_filter_preserves_order() {
        let cleaned = filter_sentinels([20.1, 21.0, -99.0, 19.8, 22.3, 20.5]);
        assert_eq!(cleaned, vec![20.1, 21.0, 19.8, 22.3, 20.5]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let raw = [3.0, -999.0, -50.5, -99.0, 0.0, -98.999, 12.25];
        let once = filter_sentinels(raw);
        let twice = filter_sentinels(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clean_counts_dropped() {
        let sample = DailySample {
            variable: Variable::Precipitation,
            readings: vec![
                DayReading { year: 2001, reading: Some(0.5) },
                DayReading { year: 2002, reading: None },
                DayReading { year: 2003, reading: Some(-999.0) },
                DayReading { year: 2004, reading: Some(4.0) },
            ],
        };
        let cleaned = clean(&sample);
        assert_eq!(cleaned.values, vec![0.5, 4.0]);
        assert_eq!(cleaned.dropped, 2);
        assert_eq!(cleaned.variable, Variable::Precipitation);
    }
}
