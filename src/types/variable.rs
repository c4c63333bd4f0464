//! Defines the daily variables the engine reads from a climate record, and the
//! provider parameter codes they are published under.

use std::fmt;

/// A daily climate variable consumed by the probability engine.
///
/// Each variable maps to one parameter code in the NASA POWER daily point API
/// (see [`Variable::parameter_code`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    /// Mean air temperature at 2 meters, in degrees Celsius.
    Temperature,
    /// Bias-corrected total precipitation, in millimeters per day.
    Precipitation,
}

impl Variable {
    /// All variables the engine requires from a record.
    pub const ALL: [Variable; 2] = [Variable::Temperature, Variable::Precipitation];

    /// The provider parameter code the variable is published under.
    pub fn parameter_code(&self) -> &'static str {
        match self {
            Variable::Temperature => "T2M",
            Variable::Precipitation => "PRECTOTCORR",
        }
    }

    pub(crate) fn unit(&self) -> &'static str {
        match self {
            Variable::Temperature => "°C",
            Variable::Precipitation => "mm/day",
        }
    }
}

/// Formats a `Variable` using a lowercase human readable name.
///
/// # Examples
///
/// ```
/// use climascope::Variable;
///
/// assert_eq!(Variable::Temperature.to_string(), "temperature");
/// assert_eq!(format!("{}", Variable::Precipitation), "precipitation");
/// ```
impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variable::Temperature => "temperature",
            Variable::Precipitation => "precipitation",
        };
        write!(f, "{}", name)
    }
}
