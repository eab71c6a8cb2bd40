//! Month boundaries with validated month numbers.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Error type for month boundary computations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MonthError {
    #[error("Invalid month number: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Date out of supported range: {year}-{month:02}")]
    OutOfRange { year: i32, month: u32 },
}

/// First day of the given calendar month.
pub fn month_start(year: i32, month: u32) -> Result<NaiveDate, MonthError> {
    if !(1..=12).contains(&month) {
        return Err(MonthError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(MonthError::OutOfRange { year, month })
}

/// Last day of the given calendar month.
pub fn month_end(year: i32, month: u32) -> Result<NaiveDate, MonthError> {
    let start = month_start(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|date| date.pred_opt())
        .filter(|end| end >= &start)
        .ok_or(MonthError::OutOfRange { year, month })
}

/// Number of days in the given calendar month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, MonthError> {
    Ok(month_end(year, month)?.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dates::ymd;

    #[test]
    fn month_start_is_first_day() {
        assert_eq!(month_start(2025, 4).unwrap(), ymd(2025, 4, 1));
        assert_eq!(month_start(2025, 12).unwrap(), ymd(2025, 12, 1));
    }

    #[test]
    fn month_end_handles_year_rollover() {
        assert_eq!(month_end(2025, 12).unwrap(), ymd(2025, 12, 31));
    }

    #[test]
    fn month_end_handles_leap_february() {
        assert_eq!(month_end(2024, 2).unwrap(), ymd(2024, 2, 29));
        assert_eq!(month_end(2025, 2).unwrap(), ymd(2025, 2, 28));
    }

    #[test]
    fn days_in_month_matches_calendar() {
        assert_eq!(days_in_month(2025, 4).unwrap(), 30);
        assert_eq!(days_in_month(2025, 7).unwrap(), 31);
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
    }

    #[test]
    fn invalid_month_number_is_rejected() {
        assert_eq!(month_start(2025, 0), Err(MonthError::InvalidMonth(0)));
        assert_eq!(month_end(2025, 13), Err(MonthError::InvalidMonth(13)));
    }
}
