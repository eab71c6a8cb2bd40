//! Monday-aligned week boundaries.
//!
//! The calendar grid is laid out with Monday in column 0, so "start of week"
//! always means the Monday on or before a date, never the locale-dependent
//! first weekday.

use chrono::{Datelike, Days, NaiveDate};

/// Return the Monday on or before `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use slotwise_common::time::week::start_of_week;
///
/// let thursday = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2025, 4, 7).unwrap();
/// assert_eq!(start_of_week(thursday), monday);
/// assert_eq!(start_of_week(monday), monday);
/// ```
#[must_use]
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    // num_days_from_monday is 0..=6, so the subtraction stays in range for
    // any date chrono can represent.
    date.checked_sub_days(Days::new(u64::from(offset))).unwrap_or(date)
}

/// Return the Sunday on or after `date`.
#[must_use]
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    let offset = 6 - date.weekday().num_days_from_monday();
    date.checked_add_days(Days::new(u64::from(offset))).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dates::ymd;

    #[test]
    fn start_of_week_is_identity_on_monday() {
        let monday = ymd(2025, 4, 7);
        assert_eq!(start_of_week(monday), monday);
    }

    #[test]
    fn start_of_week_rolls_back_to_monday() {
        assert_eq!(start_of_week(ymd(2025, 4, 10)), ymd(2025, 4, 7)); // Thursday
        assert_eq!(start_of_week(ymd(2025, 4, 13)), ymd(2025, 4, 7)); // Sunday
    }

    #[test]
    fn start_of_week_crosses_month_boundary() {
        // Apr 2 2025 is a Wednesday; its Monday is Mar 31.
        assert_eq!(start_of_week(ymd(2025, 4, 2)), ymd(2025, 3, 31));
    }

    #[test]
    fn start_of_week_crosses_year_boundary() {
        // Jan 1 2025 is a Wednesday; its Monday is Dec 30 2024.
        assert_eq!(start_of_week(ymd(2025, 1, 1)), ymd(2024, 12, 30));
    }

    #[test]
    fn end_of_week_is_identity_on_sunday() {
        let sunday = ymd(2025, 4, 13);
        assert_eq!(end_of_week(sunday), sunday);
    }

    #[test]
    fn end_of_week_rolls_forward_to_sunday() {
        assert_eq!(end_of_week(ymd(2025, 4, 7)), ymd(2025, 4, 13));
        assert_eq!(end_of_week(ymd(2025, 4, 30)), ymd(2025, 5, 4));
    }

    #[test]
    fn week_bounds_span_seven_days() {
        let date = ymd(2025, 6, 18);
        let span = end_of_week(date) - start_of_week(date);
        assert_eq!(span.num_days(), 6);
    }
}
