use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    ResponseBody(String, #[source] reqwest::Error),

    // The climate provider answered, but not with a date-keyed series payload
    #[error("Response from {url} is not a daily series payload")]
    MalformedRecord {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode response from {url}")]
    MalformedPayload {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Location '{0}' not found")]
    LocationNotFound(String),

    #[error("Geocoder returned invalid coordinate '{value}' for '{query}'")]
    InvalidCoordinate { query: String, value: String },

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
