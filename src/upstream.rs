//! Collaborators the engine depends on but never calls itself: daily data
//! retrieval, geocoding and prompt extraction.
//!
//! Each one is a trait so the [`crate::Climascope`] client can run against the
//! bundled HTTP implementations ([`power::PowerClient`],
//! [`nominatim::NominatimGeocoder`]) or against in-memory fixtures.

pub mod error;
pub mod nominatim;
pub mod power;

use crate::climascope::LatLon;
use crate::types::raw_series::ClimateRecord;
use crate::upstream::error::UpstreamError;
use chrono::NaiveDate;
use log::warn;
use reqwest::{RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Retrieves multi-year daily temperature and precipitation for a point.
pub trait ClimateDataSource {
    /// Fetches every day from January 1st of `start_year` to December 31st of `end_year`.
    fn fetch_daily(
        &self,
        location: LatLon,
        start_year: i32,
        end_year: i32,
    ) -> impl Future<Output = Result<ClimateRecord, UpstreamError>> + Send;
}

/// A resolved place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub location: LatLon,
}

/// Resolves a free-form place name to coordinates.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> impl Future<Output = Result<Place, UpstreamError>> + Send;
}

/// A place name and date found in free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptExtraction {
    pub place: String,
    pub date: NaiveDate,
}

/// Finds a place and a date in a natural-language prompt.
///
/// Any `Fn(&str) -> Option<PromptExtraction>` is an extractor, so an NLP backend
/// can be plugged in as a closure.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use climascope::{PromptExtraction, PromptExtractor};
///
/// let extractor = |text: &str| {
///     let date = NaiveDate::from_ymd_opt(2025, 7, 4)?;
///     text.contains("Delhi").then(|| PromptExtraction {
///         place: "Delhi".to_string(),
///         date,
///     })
/// };
/// assert!(extractor.extract("Will it rain in Delhi on July 4th?").is_some());
/// assert!(extractor.extract("Will it rain?").is_none());
/// ```
pub trait PromptExtractor {
    fn extract(&self, text: &str) -> Option<PromptExtraction>;
}

impl<F> PromptExtractor for F
where
    F: Fn(&str) -> Option<PromptExtraction>,
{
    fn extract(&self, text: &str) -> Option<PromptExtraction> {
        self(text)
    }
}

/// Sends `request`, turning transport failures and non-success statuses into errors.
pub(crate) async fn send_checked(
    request: RequestBuilder,
    url: &str,
) -> Result<Response, UpstreamError> {
    let response = request
        .send()
        .await
        .map_err(|e| UpstreamError::NetworkRequest(url.to_string(), e))?;

    match response.error_for_status() {
        Ok(resp) => Ok(resp),
        Err(e) => {
            warn!("HTTP error for {}: {:?}", url, e);
            Err(if let Some(status) = e.status() {
                UpstreamError::HttpStatus {
                    url: url.to_string(),
                    status,
                    source: e,
                }
            } else {
                UpstreamError::NetworkRequest(url.to_string(), e)
            })
        }
    }
}
