//! Calendar view service - core business logic

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use slotwise_common::time::range::DateRange;
use slotwise_domain::{
    CalendarViewConfig, EventStatus, EventSummary, HighlightRegion, Result, SlotwiseError,
    ViewMode,
};
use tracing::debug;

use super::grid::month_grid;
use super::highlight::highlight_regions;
use super::ports::EventRepository;

/// One render's worth of calendar data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub mode: ViewMode,
    pub reference: NaiveDate,
    pub days: Vec<NaiveDate>,
    pub regions: Vec<HighlightRegion>,
    pub events: Vec<EventSummary>,
}

/// Calendar view service
pub struct CalendarViewService {
    events: Arc<dyn EventRepository>,
    config: CalendarViewConfig,
}

impl CalendarViewService {
    /// Create a new view service over an event repository
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events, config: CalendarViewConfig::default() }
    }

    /// Override the default view configuration
    #[must_use]
    pub fn with_config(mut self, config: CalendarViewConfig) -> Self {
        self.config = config;
        self
    }

    /// Assemble the month view for a calendar month.
    pub async fn month_view(&self, year: i32, month: u32) -> Result<CalendarView> {
        debug!(year, month, "assembling month calendar view");
        let reference = slotwise_common::time::month::month_start(year, month)
            .map_err(|e| SlotwiseError::InvalidInput(e.to_string()))?;
        self.assemble(reference, ViewMode::Month).await
    }

    /// Assemble the week view around a reference date.
    pub async fn week_view(&self, reference: NaiveDate) -> Result<CalendarView> {
        debug!(%reference, "assembling week calendar view");
        self.assemble(reference, ViewMode::Week).await
    }

    /// Assemble a view using the configured default mode.
    pub async fn default_view(&self, reference: NaiveDate) -> Result<CalendarView> {
        self.assemble(reference, self.config.default_mode).await
    }

    async fn assemble(&self, reference: NaiveDate, mode: ViewMode) -> Result<CalendarView> {
        let grid = month_grid(reference.year(), reference.month())?;
        let visible = DateRange::new(grid.first_day(), grid.last_day())
            .map_err(|e| SlotwiseError::Internal(e.to_string()))?;

        let regions = highlight_regions(&grid, reference, mode, visible);

        let mut events = self.events.events_in_range(visible).await?;
        if !self.config.include_cancelled {
            events.retain(|event| event.status != EventStatus::Cancelled);
        }
        events.sort_by_key(|event| event.starts_at);

        Ok(CalendarView { mode, reference, days: grid.days().to_vec(), regions, events })
    }
}
