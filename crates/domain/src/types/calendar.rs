//! Calendar grid and highlight region types.
//!
//! The grid is the renderer's source of truth: an ordered run of days laid
//! out row-major, seven columns wide, Monday in column 0. Highlight regions
//! are the drawable rectangles the segmenter emits over that grid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::{DAYS_PER_WEEK, LAST_COLUMN};
use crate::errors::{Result, SlotwiseError};

/// Which subset of the calendar grid is considered active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum ViewMode {
    #[default]
    Month,
    Week,
}

crate::impl_domain_status_conversions!(ViewMode {
    Month => "month",
    Week => "week",
});

/// Shape hint for a highlight region.
///
/// `Single` regions sit on one row. A highlight run that wraps across a row
/// boundary is emitted as a `LeftCap`/`RightCap` pair: the left cap paints
/// the upper row from the run's first column to the right edge, the right
/// cap paints the lower row from the left edge to the run's last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum RegionShape {
    Single,
    LeftCap,
    RightCap,
}

crate::impl_domain_status_conversions!(RegionShape {
    Single => "single",
    LeftCap => "left_cap",
    RightCap => "right_cap",
});

/// A drawable highlight rectangle in grid coordinates.
///
/// All coordinates are 0-based and inclusive. `Single` regions have
/// `row_start == row_end`; cap regions describe a two-row wrapped run, so
/// both records of a pair carry `row_end == row_start + 1` and the shape
/// says which of the two rows the record paints (see [`Self::painted_row`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct HighlightRegion {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
    pub shape: RegionShape,
}

impl HighlightRegion {
    /// Region covering one contiguous run inside a single row.
    #[must_use]
    pub const fn single(row: usize, col_start: usize, col_end: usize) -> Self {
        Self { row_start: row, row_end: row, col_start, col_end, shape: RegionShape::Single }
    }

    /// Region pair for a run that wraps from `top_row` onto the next row.
    ///
    /// The left cap runs from `start_col` to the right edge of `top_row`;
    /// the right cap runs from the left edge to `end_col` on the row below.
    #[must_use]
    pub const fn capped_pair(top_row: usize, start_col: usize, end_col: usize) -> [Self; 2] {
        [
            Self {
                row_start: top_row,
                row_end: top_row + 1,
                col_start: start_col,
                col_end: LAST_COLUMN,
                shape: RegionShape::LeftCap,
            },
            Self {
                row_start: top_row,
                row_end: top_row + 1,
                col_start: 0,
                col_end: end_col,
                shape: RegionShape::RightCap,
            },
        ]
    }

    /// The grid row this record paints.
    #[must_use]
    pub const fn painted_row(&self) -> usize {
        match self.shape {
            RegionShape::Single | RegionShape::LeftCap => self.row_start,
            RegionShape::RightCap => self.row_end,
        }
    }

    /// Number of rows the logical region spans beyond its first row.
    #[must_use]
    pub const fn row_span(&self) -> usize {
        self.row_end - self.row_start
    }

    /// Grid cells covered by this record, as `(row, col)` pairs.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let row = self.painted_row();
        (self.col_start..=self.col_end).map(move |col| (row, col))
    }
}

/// An ordered run of days spanning whole weeks, laid out row-major.
///
/// Index `i` sits at row `i / 7`, column `i % 7`, Monday in column 0. The
/// week-multiple invariant is enforced at construction, so every consumer
/// can rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    days: Vec<NaiveDate>,
}

impl CalendarGrid {
    /// Build a grid from an ordered day sequence.
    ///
    /// Fails fast on an empty sequence or one that is not a whole number of
    /// weeks; a malformed sequence indicates a bug in the producing code,
    /// not a recoverable runtime condition.
    pub fn from_days(days: Vec<NaiveDate>) -> Result<Self> {
        if days.is_empty() {
            return Err(SlotwiseError::InvalidInput("calendar grid must not be empty".into()));
        }
        if days.len() % DAYS_PER_WEEK != 0 {
            return Err(SlotwiseError::InvalidInput(format!(
                "calendar grid length {} is not a multiple of {DAYS_PER_WEEK}",
                days.len()
            )));
        }
        Ok(Self { days })
    }

    /// The grid's days in row-major order.
    #[must_use]
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Total number of day cells.
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Number of week rows.
    #[must_use]
    pub fn week_count(&self) -> usize {
        self.days.len() / DAYS_PER_WEEK
    }

    /// Iterate over the week rows as 7-day slices.
    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.days.chunks_exact(DAYS_PER_WEEK)
    }

    /// Absolute index of `date` in the grid, if present.
    #[must_use]
    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|day| *day == date)
    }

    /// Convert an absolute index to `(row, col)`.
    #[must_use]
    pub const fn row_col(index: usize) -> (usize, usize) {
        (index / DAYS_PER_WEEK, index % DAYS_PER_WEEK)
    }

    /// First day shown on the grid.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        self.days[0]
    }

    /// Last day shown on the grid.
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        self.days[self.days.len() - 1]
    }
}
