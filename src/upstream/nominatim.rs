//! OpenStreetMap Nominatim geocoder.

use crate::climascope::LatLon;
use crate::upstream::error::UpstreamError;
use crate::upstream::{send_checked, Geocoder, Place};
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = "ClimaScopeApp/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    display_name: String,
    lat: String,
    lon: String,
}

/// Geocoder backed by a Nominatim `/search` endpoint.
///
/// Nominatim's usage policy requires an identifying `User-Agent`; pass your own
/// with [`NominatimGeocoder::with_url`] when running against the public instance.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    url: String,
}

impl NominatimGeocoder {
    pub fn new() -> Result<Self, UpstreamError> {
        Self::with_url(NOMINATIM_SEARCH_URL, DEFAULT_USER_AGENT)
    }

    pub fn with_url(url: impl Into<String>, user_agent: &str) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()
            .map_err(UpstreamError::ClientBuild)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

fn parse_coordinate(query: &str, value: &str) -> Result<f64, UpstreamError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| UpstreamError::InvalidCoordinate {
            query: query.to_string(),
            value: value.to_string(),
        })
}

fn first_place(query: &str, results: Vec<SearchResult>) -> Result<Place, UpstreamError> {
    let top = results
        .into_iter()
        .next()
        .ok_or_else(|| UpstreamError::LocationNotFound(query.to_string()))?;
    Ok(Place {
        location: LatLon(
            parse_coordinate(query, &top.lat)?,
            parse_coordinate(query, &top.lon)?,
        ),
        name: top.display_name,
    })
}

impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, query: &str) -> Result<Place, UpstreamError> {
        debug!("Geocoding '{}' via {}", query, self.url);
        let request = self
            .client
            .get(&self.url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")]);
        let response = send_checked(request, &self.url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::ResponseBody(self.url.clone(), e))?;
        let results: Vec<SearchResult> =
            serde_json::from_slice(&bytes).map_err(|source| UpstreamError::MalformedPayload {
                url: self.url.clone(),
                source,
            })?;

        let place = first_place(query, results)?;
        info!("Resolved '{}' to {:?}", query, place.location);
        Ok(place)
    }
}
