//! NASA POWER daily point client.
//!
//! Downloads temperature (`T2M`) and precipitation (`PRECTOTCORR`) for a
//! latitude/longitude over a span of whole years. POWER publishes missing
//! values as `-999`, which the engine's sentinel filter removes.

use crate::climascope::LatLon;
use crate::types::raw_series::ClimateRecord;
use crate::types::variable::Variable;
use crate::upstream::error::UpstreamError;
use crate::upstream::{send_checked, ClimateDataSource};
use log::info;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const POWER_DAILY_POINT_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct PowerResponse {
    properties: PowerProperties,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    parameter: ClimateRecord,
}

/// Client for the NASA POWER `temporal/daily/point` endpoint.
#[derive(Debug, Clone)]
pub struct PowerClient {
    client: Client,
    url: String,
}

impl PowerClient {
    /// Creates a client for the public POWER endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::ClientBuild`] if the HTTP client cannot be created.
    pub fn new() -> Result<Self, UpstreamError> {
        Self::with_url(POWER_DAILY_POINT_URL)
    }

    /// Creates a client for a POWER-compatible endpoint at `url`.
    pub fn with_url(url: impl Into<String>) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(UpstreamError::ClientBuild)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn query_params(location: LatLon, start_year: i32, end_year: i32) -> Vec<(&'static str, String)> {
    let parameters = Variable::ALL
        .iter()
        .map(|v| v.parameter_code())
        .collect::<Vec<_>>()
        .join(",");
    vec![
        ("start", format!("{:04}0101", start_year)),
        ("end", format!("{:04}1231", end_year)),
        ("latitude", location.0.to_string()),
        ("longitude", location.1.to_string()),
        ("community", "AG".to_string()),
        ("parameters", parameters),
        ("format", "JSON".to_string()),
    ]
}

/// Decodes a POWER JSON body into the record found under `properties.parameter`.
pub(crate) fn decode_payload(bytes: &[u8], url: &str) -> Result<ClimateRecord, UpstreamError> {
    serde_json::from_slice::<PowerResponse>(bytes)
        .map(|response| response.properties.parameter)
        .map_err(|source| UpstreamError::MalformedRecord {
            url: url.to_string(),
            source,
        })
}

impl ClimateDataSource for PowerClient {
    async fn fetch_daily(
        &self,
        location: LatLon,
        start_year: i32,
        end_year: i32,
    ) -> Result<ClimateRecord, UpstreamError> {
        info!(
            "Fetching POWER daily data for {:?} from {} to {}",
            location, start_year, end_year
        );
        let request = self
            .client
            .get(&self.url)
            .query(&query_params(location, start_year, end_year));
        let response = send_checked(request, &self.url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::ResponseBody(self.url.clone(), e))?;

        let url = self.url.clone();
        let record =
            tokio::task::spawn_blocking(move || decode_payload(&bytes, &url)).await??;
        info!(
            "Decoded POWER record with parameters [{}]",
            record.parameter_codes().collect::<Vec<_>>().join(", ")
        );
        Ok(record)
    }
}
