use crate::engine::error::EngineError;
use crate::upstream::error::UpstreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimascopeError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Invalid value '{value}' for '{field}'")]
    InvalidQuery { field: &'static str, value: String },

    #[error("Could not identify a location and a date in the prompt")]
    PromptNotUnderstood,
}

/// Coarse classification of a [`ClimascopeError`], for callers that map failures
/// to responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request itself was unusable, such as an out-of-range day or an unreadable prompt.
    InvalidQuery,
    /// The provider delivered data that is not a date-keyed daily series.
    MalformedSource,
    /// Not enough valid observations for a reliable answer.
    InsufficientData,
    /// A collaborator (dataset, geocoder) could not be reached, failed or found nothing.
    UpstreamUnavailable,
}

impl ClimascopeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClimascopeError::Engine(EngineError::MalformedSource { .. }) => {
                ErrorKind::MalformedSource
            }
            ClimascopeError::Engine(EngineError::InsufficientData { .. }) => {
                ErrorKind::InsufficientData
            }
            ClimascopeError::Upstream(UpstreamError::MalformedRecord { .. }) => {
                ErrorKind::MalformedSource
            }
            ClimascopeError::Upstream(_) => ErrorKind::UpstreamUnavailable,
            ClimascopeError::InvalidQuery { .. } | ClimascopeError::PromptNotUnderstood => {
                ErrorKind::InvalidQuery
            }
        }
    }
}
