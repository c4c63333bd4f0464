mod climascope;
mod engine;
mod error;
mod types;
mod upstream;
mod utils;

pub use climascope::*;
pub use error::{ClimascopeError, ErrorKind};

pub use engine::config::{
    EngineConfig, FallbackMode, DEFAULT_COLD_THRESHOLD_C, DEFAULT_HOT_THRESHOLD_C,
    DEFAULT_RAIN_THRESHOLD_MM, DEFAULT_WET_THRESHOLD_MM, MIN_SAMPLES,
};
pub use engine::error::EngineError;
pub use engine::estimator::{estimate_extremes, estimate_probability};
pub use engine::extractor::{extract_all, extract_day, DailySample, DayReading};
pub use engine::sentinel::{clean, filter_sentinels, is_valid, CleanedSample, SENTINEL_CEILING};
pub use engine::ClimateEngine;

pub use types::query::Query;
pub use types::raw_series::{ClimateRecord, DateKey, RawSeries};
pub use types::summary::{
    ExtremesEstimate, ExtremesSummary, ProbabilityEstimate, ProbabilitySummary,
};
pub use types::variable::Variable;

pub use upstream::error::UpstreamError;
pub use upstream::nominatim::{NominatimGeocoder, NOMINATIM_SEARCH_URL};
pub use upstream::power::{PowerClient, POWER_DAILY_POINT_URL};
pub use upstream::{ClimateDataSource, Geocoder, Place, PromptExtraction, PromptExtractor};
