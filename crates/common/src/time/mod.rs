//! Calendar date arithmetic
//!
//! This module provides the date helpers the calendar core is built on:
//! - **[`week`]**: Monday-aligned week boundaries
//! - **[`month`]**: month boundaries and lengths with validated month numbers
//! - **[`range`]**: inclusive date ranges with containment and iteration
//!
//! All functions operate on [`chrono::NaiveDate`]; time zones are a concern
//! of the callers that load event data, not of grid arithmetic.

pub mod month;
pub mod range;
pub mod week;

// Re-export commonly used items
pub use month::{days_in_month, month_end, month_start, MonthError};
pub use range::{DateRange, DateRangeError};
pub use week::{end_of_week, start_of_week};
