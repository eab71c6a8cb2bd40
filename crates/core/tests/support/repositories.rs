//! In-memory mocks for the event repository port.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use slotwise_common::time::range::DateRange;
use slotwise_core::EventRepository;
use slotwise_domain::{EventStatus, EventSummary, Result as DomainResult, SlotwiseError};
use uuid::Uuid;

/// In-memory mock for `EventRepository`.
///
/// Stores a fixed set of events and returns those whose dates overlap the
/// requested range. Designed for view-service tests where deterministic
/// responses are required.
#[derive(Default, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<Mutex<Vec<EventSummary>>>,
}

impl InMemoryEventRepository {
    /// Create a new mock seeded with the provided events.
    pub fn new(events: Vec<EventSummary>) -> Self {
        Self { events: Arc::new(Mutex::new(events)) }
    }

    /// Convenience helper for adding a single event to the mock.
    pub fn with_event(self, event: EventSummary) -> Self {
        self.events.lock().unwrap().push(event);
        self
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn events_in_range(&self, range: DateRange) -> DomainResult<Vec<EventSummary>> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| {
                event.starts_at.date_naive() <= range.end()
                    && event.ends_at.date_naive() >= range.start()
            })
            .cloned()
            .collect())
    }
}

/// Mock repository that always fails, for error-path tests.
#[derive(Default, Clone)]
pub struct FailingEventRepository;

#[async_trait]
impl EventRepository for FailingEventRepository {
    async fn events_in_range(&self, _range: DateRange) -> DomainResult<Vec<EventSummary>> {
        Err(SlotwiseError::Repository("connection lost".to_string()))
    }
}

/// Build a one-hour event starting at the given date and hour.
pub fn sample_event(
    title: &str,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    status: EventStatus,
) -> EventSummary {
    let starts_at = Utc
        .with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid fixture timestamp");
    EventSummary {
        id: Uuid::new_v4(),
        title: title.to_string(),
        venue: Some("Main Hall".to_string()),
        starts_at,
        ends_at: starts_at + chrono::Duration::hours(1),
        is_all_day: false,
        status,
    }
}
