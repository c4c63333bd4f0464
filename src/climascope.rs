//! This module provides the main entry point: a client that fetches decades of
//! daily observations for a location and runs the probability engine over them.
//! It can be driven by coordinates, by a place name, or by a free-text prompt.

use crate::engine::config::EngineConfig;
use crate::engine::ClimateEngine;
use crate::error::ClimascopeError;
use crate::types::query::Query;
use crate::types::summary::{ExtremesSummary, ProbabilitySummary};
use crate::upstream::nominatim::NominatimGeocoder;
use crate::upstream::power::PowerClient;
use crate::upstream::{ClimateDataSource, Geocoder, Place, PromptExtractor};
use crate::utils::last_complete_year;
use bon::bon;
use chrono::{Datelike, NaiveDate};
use log::info;
use serde::{Deserialize, Serialize};

/// Number of years before the end year that a query looks back.
pub const DEFAULT_HISTORY_YEARS: i32 = 30;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Serializes as `{"lat": .., "lon": ..}`.
///
/// # Examples
///
/// ```
/// use climascope::LatLon;
///
/// let new_delhi = LatLon(28.6139, 77.2090);
/// assert_eq!(new_delhi.0, 28.6139); // Latitude
/// assert_eq!(new_delhi.1, 77.2090); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Coordinates", into = "Coordinates")]
pub struct LatLon(pub f64, pub f64);

#[derive(Serialize, Deserialize)]
struct Coordinates {
    lat: f64,
    lon: f64,
}

impl From<Coordinates> for LatLon {
    fn from(c: Coordinates) -> Self {
        LatLon(c.lat, c.lon)
    }
}

impl From<LatLon> for Coordinates {
    fn from(l: LatLon) -> Self {
        Coordinates { lat: l.0, lon: l.1 }
    }
}

/// Result of [`Climascope::query`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryReport {
    pub location: LatLon,
    #[serde(flatten)]
    pub summary: ProbabilitySummary,
}

/// Result of [`Climascope::extremes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremesReport {
    pub location: LatLon,
    #[serde(flatten)]
    pub summary: ExtremesSummary,
}

/// Result of [`Climascope::process_prompt`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptReport {
    /// The place name as it appeared in the prompt.
    pub found_location: String,
    pub found_date: NaiveDate,
    /// The geocoder's name for the resolved place.
    pub resolved_name: String,
    #[serde(flatten)]
    pub report: QueryReport,
}

/// The main client: historical day-of-year odds for any location.
///
/// The client owns a [`ClimateDataSource`], a [`Geocoder`] and a [`ClimateEngine`].
/// It keeps no other state, so a single instance can serve concurrent queries.
///
/// Create one with [`Climascope::new()`] for the public NASA POWER and Nominatim
/// services, or with [`Climascope::with_collaborators()`] to plug in your own.
///
/// # Examples
///
/// ```no_run
/// # use climascope::{Climascope, ClimascopeError, LatLon};
/// # #[tokio::main]
/// # async fn main() -> Result<(), ClimascopeError> {
/// let client = Climascope::new()?;
/// let report = client
///     .query()
///     .location(LatLon(28.6139, 77.2090))
///     .month(7)
///     .day(4)
///     .call()
///     .await?;
/// println!("{} years, {:.0}% chance of rain", report.summary.samples_found, report.summary.chance_of_rain * 100.0);
/// # Ok(())
/// # }
/// ```
pub struct Climascope<S, G> {
    source: S,
    geocoder: G,
    engine: ClimateEngine,
    history_years: i32,
}

impl Climascope<PowerClient, NominatimGeocoder> {
    /// Creates a client backed by NASA POWER and OpenStreetMap Nominatim, with the
    /// default engine configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClimascopeError::Upstream`] if an HTTP client cannot be built.
    pub fn new() -> Result<Self, ClimascopeError> {
        Ok(Self::with_collaborators(
            PowerClient::new()?,
            NominatimGeocoder::new()?,
            EngineConfig::default(),
        ))
    }
}

impl<S, G> Climascope<S, G> {
    pub fn with_collaborators(source: S, geocoder: G, config: EngineConfig) -> Self {
        Self {
            source,
            geocoder,
            engine: ClimateEngine::new(config),
            history_years: DEFAULT_HISTORY_YEARS,
        }
    }

    /// Changes how many years before the end year are fetched.
    pub fn with_history_years(mut self, history_years: i32) -> Self {
        self.history_years = history_years;
        self
    }

    pub fn engine(&self) -> &ClimateEngine {
        &self.engine
    }

    fn window(&self, end_year: Option<i32>) -> (i32, i32) {
        let end_year = end_year.unwrap_or_else(last_complete_year);
        (end_year - self.history_years, end_year)
    }
}

#[bon]
impl<S, G> Climascope<S, G>
where
    S: ClimateDataSource,
    G: Geocoder,
{
    /// Historical chance of rain and mean temperature for a calendar day.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The point to query.
    /// * `.month(u32)`, `.day(u32)`: **Required.** The calendar day.
    /// * `.end_year(i32)`: Optional. Last year of the window. Defaults to last year.
    ///
    /// # Errors
    ///
    /// * [`ClimascopeError::InvalidQuery`] for out-of-range coordinates, month or day.
    /// * [`ClimascopeError::Upstream`] if the data source fails.
    /// * [`ClimascopeError::Engine`] for a malformed record or too few observations.
    #[builder]
    pub async fn query(
        &self,
        location: LatLon,
        month: u32,
        day: u32,
        end_year: Option<i32>,
    ) -> Result<QueryReport, ClimascopeError> {
        let query = Query::new(location.0, location.1, month, day)?;
        let (start_year, end_year) = self.window(end_year);

        let record = self
            .source
            .fetch_daily(query.location(), start_year, end_year)
            .await?;
        let summary = self.engine.summarize(&record, query.month, query.day)?;
        info!(
            "{:?} on {:02}-{:02}: {} samples, chance of rain {}",
            location, month, day, summary.samples_found, summary.chance_of_rain
        );

        Ok(QueryReport { location, summary })
    }

    /// Historical odds of hot, cold and very wet days for a calendar day.
    ///
    /// Takes the same builder arguments as [`Climascope::query`]. Whether an empty
    /// day match falls back to the whole record is decided by the engine's
    /// [`crate::FallbackMode`].
    #[builder]
    pub async fn extremes(
        &self,
        location: LatLon,
        month: u32,
        day: u32,
        end_year: Option<i32>,
    ) -> Result<ExtremesReport, ClimascopeError> {
        let query = Query::new(location.0, location.1, month, day)?;
        let (start_year, end_year) = self.window(end_year);

        let record = self
            .source
            .fetch_daily(query.location(), start_year, end_year)
            .await?;
        let summary = self.engine.extremes(&record, query.month, query.day)?;

        Ok(ExtremesReport { location, summary })
    }

    /// Resolves a place name to coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ClimascopeError::InvalidQuery`] for names shorter than two characters,
    /// and [`ClimascopeError::Upstream`] if the geocoder fails or finds nothing.
    pub async fn geocode(&self, query: &str) -> Result<Place, ClimascopeError> {
        let query = query.trim();
        if query.chars().count() < 2 {
            return Err(ClimascopeError::InvalidQuery {
                field: "q",
                value: query.to_string(),
            });
        }
        Ok(self.geocoder.geocode(query).await?)
    }

    /// Answers a free-text question such as "Will it rain in Delhi on July 4th?".
    ///
    /// The `extractor` finds the place and date, the geocoder resolves the place,
    /// and the date's month and day are queried as with [`Climascope::query`].
    ///
    /// # Errors
    ///
    /// Returns [`ClimascopeError::PromptNotUnderstood`] if no place and date are found,
    /// plus any error of [`Climascope::geocode`] or [`Climascope::query`].
    pub async fn process_prompt(
        &self,
        text: &str,
        extractor: &impl PromptExtractor,
    ) -> Result<PromptReport, ClimascopeError> {
        let extraction = extractor
            .extract(text)
            .ok_or(ClimascopeError::PromptNotUnderstood)?;
        let place = self.geocode(&extraction.place).await?;

        let report = self
            .query()
            .location(place.location)
            .month(extraction.date.month())
            .day(extraction.date.day())
            .call()
            .await?;

        Ok(PromptReport {
            found_location: extraction.place,
            found_date: extraction.date,
            resolved_name: place.name,
            report,
        })
    }
}
