//! Thresholds and policies applied by the [`crate::ClimateEngine`].

use bon::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest temperature sample the engine will ever summarize.
pub const MIN_SAMPLES: usize = 5;

pub const DEFAULT_RAIN_THRESHOLD_MM: f64 = 1.0;
pub const DEFAULT_HOT_THRESHOLD_C: f64 = 32.0;
pub const DEFAULT_COLD_THRESHOLD_C: f64 = 0.0;
pub const DEFAULT_WET_THRESHOLD_MM: f64 = 10.0;

/// What the extremes estimator does when no observation falls on the requested day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackMode {
    /// Only day matches count. An empty match is `InsufficientData`.
    #[default]
    Strict,
    /// If temperature has no day match at all, both variables are taken from the
    /// whole record instead.
    WholeRecord,
}

impl fmt::Display for FallbackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackMode::Strict => write!(f, "strict"),
            FallbackMode::WholeRecord => write!(f, "whole-record"),
        }
    }
}

/// Engine configuration.
///
/// Every field has a default, so a config can be built with only the fields that
/// differ, either through the builder or from a partial JSON document.
///
/// # Examples
///
/// ```
/// use climascope::{EngineConfig, FallbackMode};
///
/// let config = EngineConfig::builder()
///     .hot_threshold_c(35.0)
///     .fallback_mode(FallbackMode::WholeRecord)
///     .build();
/// assert_eq!(config.rain_threshold_mm, 1.0);
/// assert_eq!(config.hot_threshold_c, 35.0);
///
/// let from_json: EngineConfig = serde_json::from_str(r#"{"fallback_mode": "whole-record"}"#).unwrap();
/// assert_eq!(from_json.fallback_mode, FallbackMode::WholeRecord);
/// assert_eq!(from_json.min_samples, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct EngineConfig {
    /// A day is rainy when precipitation is strictly above this, in mm.
    #[builder(default = DEFAULT_RAIN_THRESHOLD_MM)]
    pub rain_threshold_mm: f64,
    /// A day is hot when temperature is strictly above this, in °C.
    #[builder(default = DEFAULT_HOT_THRESHOLD_C)]
    pub hot_threshold_c: f64,
    /// A day is cold when temperature is strictly below this, in °C.
    #[builder(default = DEFAULT_COLD_THRESHOLD_C)]
    pub cold_threshold_c: f64,
    /// A day is very wet when precipitation is strictly above this, in mm.
    #[builder(default = DEFAULT_WET_THRESHOLD_MM)]
    pub wet_threshold_mm: f64,
    /// Minimum valid temperature readings for a summary. Values below
    /// [`MIN_SAMPLES`] are raised to it.
    #[builder(default = MIN_SAMPLES)]
    pub min_samples: usize,
    #[builder(default)]
    pub fallback_mode: FallbackMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl EngineConfig {
    /// The sample floor actually enforced.
    pub fn effective_min_samples(&self) -> usize {
        self.min_samples.max(MIN_SAMPLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.rain_threshold_mm, 1.0);
        assert_eq!(config.hot_threshold_c, 32.0);
        assert_eq!(config.cold_threshold_c, 0.0);
        assert_eq!(config.wet_threshold_mm, 10.0);
        assert_eq!(config.min_samples, 5);
        assert_eq!(config.fallback_mode, FallbackMode::Strict);
    }

    #[test]
    fn test_min_samples_cannot_go_below_floor() {
        let config = EngineConfig::builder().min_samples(2).build();
        assert_eq!(config.effective_min_samples(), MIN_SAMPLES);
        let config = EngineConfig::builder().min_samples(10).build();
        assert_eq!(config.effective_min_samples(), 10);
    }

    #[test]
    fn test_config_from_json() -> Result<(), serde_json::Error> {
        let config: EngineConfig =
            serde_json::from_str(r#"{"rain_threshold_mm": 2.5, "fallback_mode": "strict"}"#)?;
        assert_eq!(config.rain_threshold_mm, 2.5);
        assert_eq!(config.hot_threshold_c, 32.0);
        assert_eq!(config.fallback_mode, FallbackMode::Strict);
        Ok(())
    }

    #[test]
    fn test_unknown_fallback_mode_is_rejected() {
        let parsed = serde_json::from_str::<EngineConfig>(r#"{"fallback_mode": "monthly"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_fallback_mode_display() {
        assert_eq!(FallbackMode::Strict.to_string(), "strict");
        assert_eq!(FallbackMode::WholeRecord.to_string(), "whole-record");
    }
}
