//! Highlight segmentation over a calendar grid.
//!
//! Given a grid and a reference date, computes the minimal set of contiguous
//! rectangular regions covering the active period, so the renderer can paint
//! each region as one absolutely positioned block. Both the month page and
//! the standalone picker component consume this single entry point.

use chrono::{Datelike, NaiveDate};
use slotwise_common::time::range::DateRange;
use slotwise_common::time::week::start_of_week;
use slotwise_domain::constants::DAYS_PER_WEEK;
use slotwise_domain::{CalendarGrid, HighlightRegion, ViewMode};

/// Compute the highlight regions for one render of the grid.
///
/// In `Month` mode a day is active iff it belongs to the reference date's
/// calendar month. In `Week` mode the reference date's Monday-started week
/// is highlighted, extended to out-of-month days that fall inside the
/// `visible` range; a week not present in the grid yields no regions.
///
/// Pure and re-entrant: identical inputs produce identical output, and no
/// state is retained between calls.
#[must_use]
pub fn highlight_regions(
    grid: &CalendarGrid,
    reference: NaiveDate,
    mode: ViewMode,
    visible: DateRange,
) -> Vec<HighlightRegion> {
    match mode {
        ViewMode::Month => month_regions(grid, reference),
        ViewMode::Week => week_regions(grid, reference, visible),
    }
}

/// Whether two dates share a calendar month (month and year).
fn same_month(day: NaiveDate, reference: NaiveDate) -> bool {
    day.month() == reference.month() && day.year() == reference.year()
}

/// One `Single` region per row that contains in-month days.
///
/// The in-month run inside a row is contiguous because a calendar month's
/// days are contiguous: a row sees at most one leading and one trailing
/// out-of-month span. Reuse with a non-contiguous active set would need the
/// run scan from week mode instead.
fn month_regions(grid: &CalendarGrid, reference: NaiveDate) -> Vec<HighlightRegion> {
    let mut regions = Vec::with_capacity(grid.week_count());

    for (row, week) in grid.weeks().enumerate() {
        let Some(first) = week.iter().position(|day| same_month(*day, reference)) else {
            continue;
        };
        let last = week.iter().rposition(|day| same_month(*day, reference)).unwrap_or(first);
        regions.push(HighlightRegion::single(row, first, last));
    }

    regions
}

/// Regions for the reference date's week, split where the week wraps onto
/// the next grid row.
fn week_regions(
    grid: &CalendarGrid,
    reference: NaiveDate,
    visible: DateRange,
) -> Vec<HighlightRegion> {
    let Some(start_index) = grid.position_of(start_of_week(reference)) else {
        return Vec::new();
    };

    // A trailing partial week near the grid's end yields fewer than 7 days.
    let slice_end = (start_index + DAYS_PER_WEEK).min(grid.day_count());
    let week = &grid.days()[start_index..slice_end];

    let highlighted =
        week.iter().map(|day| same_month(*day, reference) || visible.contains(*day));

    let mut regions = Vec::new();
    for run in scan_runs(highlighted) {
        let (start_row, start_col) = CalendarGrid::row_col(start_index + run.start);
        let (end_row, end_col) = CalendarGrid::row_col(start_index + run.end);

        if start_row == end_row {
            regions.push(HighlightRegion::single(start_row, start_col, end_col));
        } else {
            // A run of at most 7 days over 7-wide rows crosses one boundary.
            debug_assert_eq!(end_row, start_row + 1);
            regions.extend(HighlightRegion::capped_pair(start_row, start_col, end_col));
        }
    }

    regions
}

/// A maximal contiguous run of set flags, as inclusive indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    start: usize,
    end: usize,
}

/// Collect maximal runs of `true` with a single forward pass.
///
/// Two states: no open run, or a run opened at some start index. A run
/// closes at the index before the first subsequent `false`, or at the final
/// index if the flags end while a run is open.
fn scan_runs(flags: impl Iterator<Item = bool>) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut open: Option<usize> = None;
    let mut last_index = 0;

    for (index, flag) in flags.enumerate() {
        match (open, flag) {
            (None, true) => open = Some(index),
            (Some(start), false) => {
                runs.push(Run { start, end: index - 1 });
                open = None;
            }
            _ => {}
        }
        last_index = index;
    }

    if let Some(start) = open {
        runs.push(Run { start, end: last_index });
    }

    runs
}
