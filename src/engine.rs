//! The climate probability engine.
//!
//! A query runs three stages in sequence: [`extractor`] picks the readings of the
//! requested calendar day out of every year, [`sentinel`] drops missing and fill
//! values per variable, and [`estimator`] reduces what is left to probabilities.
//! The engine holds nothing but its configuration, so one instance can serve any
//! number of concurrent queries.

pub mod config;
pub mod error;
pub mod estimator;
pub mod extractor;
pub mod sentinel;

use crate::engine::config::{EngineConfig, FallbackMode};
use crate::engine::error::EngineError;
use crate::engine::estimator::{estimate_extremes, estimate_probability};
use crate::engine::extractor::{extract_all, extract_day};
use crate::engine::sentinel::{clean, CleanedSample};
use crate::types::raw_series::{ClimateRecord, RawSeries};
use crate::types::summary::{ExtremesSummary, ProbabilityEstimate, ProbabilitySummary};
use crate::types::variable::Variable;
use log::debug;

/// Turns raw multi-year daily series into day-of-year probabilities.
///
/// # Examples
///
/// ```
/// use climascope::{ClimateEngine, RawSeries};
///
/// let temps: RawSeries = [
///     ("19990704", 20.1), ("20000704", 21.0), ("20010704", -999.0),
///     ("20020704", 19.8), ("20030704", 22.3), ("20040704", 20.5),
/// ].into_iter().collect();
/// let precs: RawSeries = [
///     ("19990704", 0.5), ("20000704", 2.0), ("20020704", 1.0), ("20030704", 5.5),
/// ].into_iter().collect();
///
/// let summary = ClimateEngine::default().summarize_series(&temps, &precs, 7, 4).unwrap();
/// assert_eq!(summary.samples_found, 5);
/// assert_eq!(summary.avg_temp_celsius, 20.74);
/// assert_eq!(summary.chance_of_rain, 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClimateEngine {
    config: EngineConfig,
}

impl ClimateEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Summarizes one calendar day of a provider record.
    ///
    /// # Errors
    ///
    /// * [`EngineError::MalformedSource`] if the record lacks temperature or precipitation,
    ///   or contains a key that is not `YYYYMMDD`.
    /// * [`EngineError::InsufficientData`] if fewer than the configured minimum of valid
    ///   temperatures, or no valid precipitation, fall on the day.
    pub fn summarize(
        &self,
        record: &ClimateRecord,
        month: u32,
        day: u32,
    ) -> Result<ProbabilitySummary, EngineError> {
        self.summarize_series(
            record.series(Variable::Temperature)?,
            record.series(Variable::Precipitation)?,
            month,
            day,
        )
    }

    /// Same as [`ClimateEngine::summarize`], for series supplied separately.
    pub fn summarize_series(
        &self,
        temperature: &RawSeries,
        precipitation: &RawSeries,
        month: u32,
        day: u32,
    ) -> Result<ProbabilitySummary, EngineError> {
        self.estimate_series(temperature, precipitation, month, day)
            .map(ProbabilitySummary::from)
    }

    /// The unrounded estimate behind [`ClimateEngine::summarize_series`].
    pub fn estimate_series(
        &self,
        temperature: &RawSeries,
        precipitation: &RawSeries,
        month: u32,
        day: u32,
    ) -> Result<ProbabilityEstimate, EngineError> {
        let temps = clean(&extract_day(temperature, Variable::Temperature, month, day)?);
        let precs = clean(&extract_day(precipitation, Variable::Precipitation, month, day)?);
        log_sample(&temps, month, day);
        log_sample(&precs, month, day);

        estimate_probability(&temps.values, &precs.values, &self.config)
    }

    /// Odds of hot, cold and very wet days on one calendar day.
    ///
    /// With [`FallbackMode::WholeRecord`], a record where no temperature key falls
    /// on the day is summarized over all of its keys instead. With
    /// [`FallbackMode::Strict`] that case is an error.
    ///
    /// # Errors
    ///
    /// * [`EngineError::MalformedSource`] as for [`ClimateEngine::summarize`].
    /// * [`EngineError::InsufficientData`] if either cleaned sample is empty.
    pub fn extremes(
        &self,
        record: &ClimateRecord,
        month: u32,
        day: u32,
    ) -> Result<ExtremesSummary, EngineError> {
        let temperature = record.series(Variable::Temperature)?;
        let precipitation = record.series(Variable::Precipitation)?;

        let mut temp_sample = extract_day(temperature, Variable::Temperature, month, day)?;
        let mut prec_sample = extract_day(precipitation, Variable::Precipitation, month, day)?;

        let used_whole_record =
            temp_sample.is_empty() && self.config.fallback_mode == FallbackMode::WholeRecord;
        if used_whole_record {
            debug!(
                "No {:02}-{:02} observations; falling back to the whole record",
                month, day
            );
            temp_sample = extract_all(temperature, Variable::Temperature)?;
            prec_sample = extract_all(precipitation, Variable::Precipitation)?;
        }

        let temps = clean(&temp_sample);
        let precs = clean(&prec_sample);
        log_sample(&temps, month, day);
        log_sample(&precs, month, day);

        estimate_extremes(&temps.values, &precs.values, &self.config, used_whole_record)
            .map(ExtremesSummary::from)
    }
}

fn log_sample(sample: &CleanedSample, month: u32, day: u32) {
    debug!(
        "{} on {:02}-{:02}: {} valid readings ({}), {} dropped",
        sample.variable,
        month,
        day,
        sample.len(),
        sample.variable.unit(),
        sample.dropped
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(temps: &[(&str, f64)], precs: &[(&str, f64)]) -> ClimateRecord {
        let mut record = ClimateRecord::new();
        record.insert_variable(Variable::Temperature, temps.iter().copied().collect());
        record.insert_variable(Variable::Precipitation, precs.iter().copied().collect());
        record
    }

    fn thirty_years(month: u32, day: u32, temp: f64, prec: f64) -> Vec<(String, f64)> {
        (1994..2024)
            .map(|year| (format!("{:04}{:02}{:02}", year, month, day), temp + (year % 3) as f64))
            .chain((1994..2024).map(|year| (format!("{:04}0101", year), prec)))
            .collect()
    }

    #[test]
    fn test_summarize_scenario() -> Result<(), EngineError> {
        let record = record(
            &[
                ("19990704", 20.1),
                ("20000704", 21.0),
                ("20010704", -99.0),
                ("20020704", 19.8),
                ("20030704", 22.3),
                ("20040704", 20.5),
                ("20040705", 35.0),
            ],
            &[
                ("19990704", 0.5),
                ("20000704", 2.0),
                ("20020704", 1.0),
                ("20030704", 5.5),
            ],
        );
        let summary = ClimateEngine::default().summarize(&record, 7, 4)?;
        assert_eq!(
            summary,
            ProbabilitySummary {
                samples_found: 5,
                chance_of_rain: 0.5,
                avg_temp_celsius: 20.74,
            }
        );
        Ok(())
    }

    #[test]
    fn test_summarize_three_valid_temperatures() {
        let record = record(
            &[
                ("20000704", 20.0),
                ("20010704", -999.0),
                ("20020704", 21.0),
                ("20030704", -99.0),
                ("20040704", 22.0),
            ],
            &[("20000704", 3.0)],
        );
        let result = ClimateEngine::default().summarize(&record, 7, 4);
        assert_eq!(
            result,
            Err(EngineError::InsufficientData {
                variable: Variable::Temperature,
                found: 3,
                required: 5,
            })
        );
    }

    #[test]
    fn test_summarize_missing_variable() {
        let mut record = ClimateRecord::new();
        record.insert_variable(Variable::Temperature, RawSeries::new());
        assert!(matches!(
            ClimateEngine::default().summarize(&record, 7, 4),
            Err(EngineError::MalformedSource {
                variable: Variable::Precipitation,
                ..
            })
        ));
    }

    #[test]
    fn test_variables_are_extracted_independently() -> Result<(), EngineError> {
        let temps: Vec<(String, f64)> = (2000..2010)
            .map(|year| (format!("{}0615", year), 25.0))
            .collect();
        let precs: Vec<(String, f64)> = vec![("20000615".into(), 4.0), ("20010615".into(), 0.0)];
        let mut record = ClimateRecord::new();
        record.insert_variable(Variable::Temperature, temps.into_iter().collect());
        record.insert_variable(Variable::Precipitation, precs.into_iter().collect());

        let estimate = ClimateEngine::default().estimate_series(
            record.series(Variable::Temperature)?,
            record.series(Variable::Precipitation)?,
            6,
            15,
        )?;
        assert_eq!(estimate.temperature_samples, 10);
        assert_eq!(estimate.precipitation_samples, 2);
        assert_eq!(estimate.chance_of_rain, 0.5);
        Ok(())
    }

    #[test]
    fn test_extremes_strict_with_no_day_match() {
        let data = thirty_years(3, 10, 33.0, 12.0);
        let series: RawSeries = data.into_iter().collect();
        let mut record = ClimateRecord::new();
        record.insert_variable(Variable::Temperature, series.clone());
        record.insert_variable(Variable::Precipitation, series);

        let result = ClimateEngine::default().extremes(&record, 8, 20);
        assert!(matches!(
            result,
            Err(EngineError::InsufficientData {
                variable: Variable::Temperature,
                found: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_extremes_whole_record_fallback() -> Result<(), EngineError> {
        let record = record(
            &[("20000101", -5.0), ("20000601", 35.0), ("20010601", 20.0), ("20020601", -999.0)],
            &[("20000101", 12.0), ("20000601", 0.0)],
        );
        let engine = ClimateEngine::new(
            EngineConfig::builder()
                .fallback_mode(FallbackMode::WholeRecord)
                .build(),
        );
        let summary = engine.extremes(&record, 8, 20)?;
        assert!(summary.used_whole_record);
        assert_eq!(summary.fallback_mode, FallbackMode::WholeRecord);
        assert_eq!(summary.temperature_samples, 3);
        assert_eq!(summary.prob_hot, 0.333);
        assert_eq!(summary.prob_cold, 0.333);
        assert_eq!(summary.precipitation_samples, 2);
        assert_eq!(summary.prob_wet, 0.5);
        Ok(())
    }

    #[test]
    fn test_extremes_whole_record_not_used_when_day_matches() -> Result<(), EngineError> {
        let record = record(
            &[("20000601", 35.0), ("20010601", 20.0), ("20010101", -20.0)],
            &[("20000601", 0.0)],
        );
        let engine = ClimateEngine::new(
            EngineConfig::builder()
                .fallback_mode(FallbackMode::WholeRecord)
                .build(),
        );
        let summary = engine.extremes(&record, 6, 1)?;
        assert!(!summary.used_whole_record);
        assert_eq!(summary.temperature_samples, 2);
        assert_eq!(summary.prob_hot, 0.5);
        assert_eq!(summary.prob_cold, 0.0);
        Ok(())
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<ClimateEngine>();
    }
}
