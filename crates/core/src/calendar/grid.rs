//! Month grid generation.
//!
//! A month grid covers the full leading and trailing partial weeks of the
//! requested month: it starts on the Monday on/before the 1st and ends on
//! the Sunday on/after the last day, so its length is always a whole number
//! of weeks (4 to 6).

use slotwise_common::time::month::{month_end, month_start};
use slotwise_common::time::range::DateRange;
use slotwise_common::time::week::{end_of_week, start_of_week};
use slotwise_domain::{CalendarGrid, Result, SlotwiseError};

/// Build the Monday-aligned grid for a calendar month.
pub fn month_grid(year: i32, month: u32) -> Result<CalendarGrid> {
    let first_of_month =
        month_start(year, month).map_err(|e| SlotwiseError::InvalidInput(e.to_string()))?;
    let last_of_month =
        month_end(year, month).map_err(|e| SlotwiseError::InvalidInput(e.to_string()))?;

    let range = DateRange::new(start_of_week(first_of_month), end_of_week(last_of_month))
        .map_err(|e| SlotwiseError::Internal(e.to_string()))?;

    CalendarGrid::from_days(range.days().collect())
}

#[cfg(test)]
mod tests {
    use slotwise_common::testing::dates::ymd;
    use slotwise_domain::constants::MAX_GRID_WEEKS;

    use super::*;

    #[test]
    fn april_2025_spans_five_weeks() {
        // Apr 1 2025 is a Tuesday, Apr 30 a Wednesday.
        let grid = month_grid(2025, 4).unwrap();
        assert_eq!(grid.first_day(), ymd(2025, 3, 31));
        assert_eq!(grid.last_day(), ymd(2025, 5, 4));
        assert_eq!(grid.week_count(), 5);
    }

    #[test]
    fn february_2021_fits_exactly_four_weeks() {
        // Feb 2021 starts on a Monday and ends on a Sunday.
        let grid = month_grid(2021, 2).unwrap();
        assert_eq!(grid.first_day(), ymd(2021, 2, 1));
        assert_eq!(grid.last_day(), ymd(2021, 2, 28));
        assert_eq!(grid.week_count(), 4);
    }

    #[test]
    fn june_2025_needs_six_weeks() {
        // Jun 1 2025 is a Sunday, Jun 30 a Monday.
        let grid = month_grid(2025, 6).unwrap();
        assert_eq!(grid.first_day(), ymd(2025, 5, 26));
        assert_eq!(grid.last_day(), ymd(2025, 7, 6));
        assert_eq!(grid.week_count(), MAX_GRID_WEEKS);
    }

    #[test]
    fn grid_rows_start_on_monday() {
        let grid = month_grid(2025, 4).unwrap();
        for week in grid.weeks() {
            assert_eq!(week[0].format("%a").to_string(), "Mon");
            assert_eq!(week[6].format("%a").to_string(), "Sun");
        }
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(matches!(month_grid(2025, 0), Err(SlotwiseError::InvalidInput(_))));
        assert!(matches!(month_grid(2025, 13), Err(SlotwiseError::InvalidInput(_))));
    }
}
