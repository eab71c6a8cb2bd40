//! Inclusive date ranges.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for date range construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Range end {end} precedes start {start}")]
    Inverted { start: NaiveDate, end: NaiveDate },
}

/// An inclusive range of calendar dates.
///
/// Both endpoints are part of the range; a single-day range has
/// `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting inverted endpoints.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if end < start {
            return Err(DateRangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering exactly one day.
    #[must_use]
    pub const fn single(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the range (endpoints included).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days in the range (at least 1).
    #[must_use]
    pub fn len_days(&self) -> u64 {
        // end >= start is guaranteed by construction
        (self.end - self.start).num_days().unsigned_abs() + 1
    }

    /// Iterate over every day in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.len_days()).filter_map(move |offset| start.checked_add_days(Days::new(offset)))
    }
}
