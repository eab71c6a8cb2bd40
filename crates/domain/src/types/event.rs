//! Event read models consumed by the calendar renderer.
//!
//! Persistence of organisations, venues, bookings, and events lives behind
//! the repository port in the core crate; these are the flattened rows the
//! renderer receives for a visible date range.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

/// Booking lifecycle state shown on the calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum EventStatus {
    #[default]
    Confirmed,
    Pending,
    Cancelled,
}

crate::impl_domain_status_conversions!(EventStatus {
    Confirmed => "confirmed",
    Pending => "pending",
    Cancelled => "cancelled",
});

/// Event summary for calendar display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct EventSummary {
    pub id: Uuid,
    pub title: String,
    pub venue: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_all_day: bool,
    pub status: EventStatus,
}

impl EventSummary {
    /// The calendar date the event is shown on (its start date, UTC).
    #[must_use]
    pub fn display_date(&self) -> chrono::NaiveDate {
        self.starts_at.date_naive()
    }
}
