pub mod query;
pub mod raw_series;
pub mod summary;
pub mod variable;
