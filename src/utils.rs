use chrono::{Datelike, Local};

/// Rounds `value` to `digits` decimal places. Exact ties go to the even digit.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round_ties_even() / factor
}

/// The last fully completed calendar year in local time.
pub fn last_complete_year() -> i32 {
    Local::now().year() - 1
}
