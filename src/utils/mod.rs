//! Shared utilities

pub mod logging;

/// Local calendar date, used as "today" for age and date bounds
#[must_use]
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
