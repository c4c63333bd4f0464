//! Probability estimation over cleaned daily samples.
//!
//! Both estimators are pure functions of their input slices and the configured
//! thresholds. Each probability is divided by the length of its own variable's
//! sample, so temperature and precipitation may have different denominators.

use crate::engine::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::types::summary::{ExtremesEstimate, ProbabilityEstimate};
use crate::types::variable::Variable;

/// Computes the day's mean temperature and chance of rain.
///
/// # Errors
///
/// Returns [`EngineError::InsufficientData`] for temperature if fewer than
/// [`EngineConfig::effective_min_samples`] temperatures are given, and for
/// precipitation if `precs` is empty.
///
/// # Examples
///
/// ```
/// use climascope::{estimate_probability, EngineConfig};
///
/// let temps = [20.1, 21.0, 19.8, 22.3, 20.5];
/// let precs = [0.5, 2.0, 1.0, 5.5];
/// let estimate = estimate_probability(&temps, &precs, &EngineConfig::default()).unwrap();
/// assert_eq!(estimate.temperature_samples, 5);
/// assert_eq!(estimate.chance_of_rain, 0.5);
/// ```
pub fn estimate_probability(
    temps: &[f64],
    precs: &[f64],
    config: &EngineConfig,
) -> Result<ProbabilityEstimate, EngineError> {
    require(Variable::Temperature, temps, config.effective_min_samples())?;
    require(Variable::Precipitation, precs, 1)?;

    Ok(ProbabilityEstimate {
        temperature_samples: temps.len(),
        precipitation_samples: precs.len(),
        chance_of_rain: fraction(precs, |p| p > config.rain_threshold_mm),
        mean_temperature: mean(temps),
    })
}

/// Computes the odds of hot, cold and very wet days.
///
/// Unlike [`estimate_probability`] there is no minimum sample size beyond a
/// non-empty sample for each variable.
///
/// # Errors
///
/// Returns [`EngineError::InsufficientData`] if either slice is empty.
pub fn estimate_extremes(
    temps: &[f64],
    precs: &[f64],
    config: &EngineConfig,
    used_whole_record: bool,
) -> Result<ExtremesEstimate, EngineError> {
    require(Variable::Temperature, temps, 1)?;
    require(Variable::Precipitation, precs, 1)?;

    Ok(ExtremesEstimate {
        temperature_samples: temps.len(),
        precipitation_samples: precs.len(),
        prob_hot: fraction(temps, |t| t > config.hot_threshold_c),
        prob_cold: fraction(temps, |t| t < config.cold_threshold_c),
        prob_wet: fraction(precs, |p| p > config.wet_threshold_mm),
        fallback_mode: config.fallback_mode,
        used_whole_record,
    })
}

fn require(variable: Variable, values: &[f64], required: usize) -> Result<(), EngineError> {
    if values.len() < required {
        return Err(EngineError::InsufficientData {
            variable,
            found: values.len(),
            required,
        });
    }
    Ok(())
}

// Callers guarantee a non-empty slice.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn fraction(values: &[f64], predicate: impl Fn(f64) -> bool) -> f64 {
    let hits = values.iter().filter(|v| predicate(**v)).count();
    hits as f64 / values.len() as f64
}
