//! Pure aggregation utilities behind the calendar and chart endpoints.

pub mod boxplot;
pub mod daybucket;
pub mod weight;
