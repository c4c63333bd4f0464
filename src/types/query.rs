use crate::climascope::LatLon;
use crate::error::ClimascopeError;
use serde::{Deserialize, Serialize};

/// A request for the historical odds at one location on one calendar day.
///
/// The day is not checked against the month: asking for February 30th is
/// allowed and simply matches no observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub lat: f64,
    pub lon: f64,
    pub month: u32,
    pub day: u32,
}

impl Query {
    /// Creates a validated `Query`.
    ///
    /// # Errors
    ///
    /// Returns [`ClimascopeError::InvalidQuery`] naming the first field that is out of range:
    /// latitude outside [-90, 90], longitude outside [-180, 180], month outside [1, 12]
    /// or day outside [1, 31].
    ///
    /// # Examples
    ///
    /// ```
    /// use climascope::Query;
    ///
    /// assert!(Query::new(28.61, 77.21, 7, 4).is_ok());
    /// assert!(Query::new(91.0, 77.21, 7, 4).is_err());
    /// assert!(Query::new(28.61, 77.21, 2, 30).is_ok());
    /// ```
    pub fn new(lat: f64, lon: f64, month: u32, day: u32) -> Result<Self, ClimascopeError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(invalid("lat", lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(invalid("lon", lon));
        }
        if !(1..=12).contains(&month) {
            return Err(invalid("month", month));
        }
        if !(1..=31).contains(&day) {
            return Err(invalid("day", day));
        }
        Ok(Self {
            lat,
            lon,
            month,
            day,
        })
    }

    pub fn location(&self) -> LatLon {
        LatLon(self.lat, self.lon)
    }
}

fn invalid(field: &'static str, value: impl ToString) -> ClimascopeError {
    ClimascopeError::InvalidQuery {
        field,
        value: value.to_string(),
    }
}
