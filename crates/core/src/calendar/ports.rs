//! Event data-access port interfaces.
//!
//! The persistence layer (ORM over organisations, venues, bookings, events)
//! lives outside this workspace; it plugs in by implementing these traits.

use async_trait::async_trait;
use slotwise_common::time::range::DateRange;
use slotwise_domain::{EventSummary, Result};

/// Trait for event read operations
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Fetch event summaries whose dates overlap the inclusive range.
    async fn events_in_range(&self, range: DateRange) -> Result<Vec<EventSummary>>;
}
