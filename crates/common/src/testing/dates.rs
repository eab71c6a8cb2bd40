//! Date fixtures.

use chrono::NaiveDate;

/// Build a `NaiveDate` from literal components.
///
/// Panics on invalid input, which is the desired behavior for fixtures: a
/// typo in a test date should fail the test immediately.
#[must_use]
#[allow(clippy::expect_used)]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}
