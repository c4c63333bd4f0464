//! Result records produced by the probability engine.
//!
//! The estimator works on unrounded [`ProbabilityEstimate`] / [`ExtremesEstimate`]
//! values. Rounding happens exactly once, when an estimate is turned into the
//! presentation records [`ProbabilitySummary`] / [`ExtremesSummary`].

use crate::engine::config::FallbackMode;
use crate::utils::round_to;
use serde::{Deserialize, Serialize};

/// Unrounded output of the probability estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityEstimate {
    /// Number of valid temperature readings.
    pub temperature_samples: usize,
    /// Number of valid precipitation readings. May differ from `temperature_samples`.
    pub precipitation_samples: usize,
    /// Fraction of valid precipitation readings above the rain threshold.
    pub chance_of_rain: f64,
    /// Mean of the valid temperature readings, in °C.
    pub mean_temperature: f64,
}

/// Historical odds for one calendar day, as reported to callers.
///
/// # Examples
///
/// ```
/// use climascope::{ProbabilityEstimate, ProbabilitySummary};
///
/// let estimate = ProbabilityEstimate {
///     temperature_samples: 30,
///     precipitation_samples: 29,
///     chance_of_rain: 0.413793103,
///     mean_temperature: 20.745,
/// };
/// let summary = ProbabilitySummary::from(estimate);
/// assert_eq!(summary.samples_found, 30);
/// assert_eq!(summary.chance_of_rain, 0.414);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilitySummary {
    pub samples_found: usize,
    /// Rounded to 3 decimals.
    pub chance_of_rain: f64,
    /// Rounded to 2 decimals.
    pub avg_temp_celsius: f64,
}

impl From<ProbabilityEstimate> for ProbabilitySummary {
    fn from(estimate: ProbabilityEstimate) -> Self {
        Self {
            samples_found: estimate.temperature_samples,
            chance_of_rain: round_to(estimate.chance_of_rain, 3),
            avg_temp_celsius: round_to(estimate.mean_temperature, 2),
        }
    }
}

/// Unrounded output of the extremes estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremesEstimate {
    pub temperature_samples: usize,
    pub precipitation_samples: usize,
    pub prob_hot: f64,
    pub prob_cold: f64,
    pub prob_wet: f64,
    /// The mode the sample was drawn with.
    pub fallback_mode: FallbackMode,
    /// `true` when the whole record was used because no day matched.
    pub used_whole_record: bool,
}

/// Odds of hot, cold and wet days, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtremesSummary {
    pub temperature_samples: usize,
    pub precipitation_samples: usize,
    pub prob_hot: f64,
    pub prob_cold: f64,
    pub prob_wet: f64,
    pub fallback_mode: FallbackMode,
    pub used_whole_record: bool,
}

impl From<ExtremesEstimate> for ExtremesSummary {
    fn from(estimate: ExtremesEstimate) -> Self {
        Self {
            temperature_samples: estimate.temperature_samples,
            precipitation_samples: estimate.precipitation_samples,
            prob_hot: round_to(estimate.prob_hot, 3),
            prob_cold: round_to(estimate.prob_cold, 3),
            prob_wet: round_to(estimate.prob_wet, 3),
            fallback_mode: estimate.fallback_mode,
            used_whole_record: estimate.used_whole_record,
        }
    }
}
