//! # Slotwise Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Calendar grid generation aligned to Monday-start weeks
//! - Highlight segmentation over a grid (the month/week active-period
//!   regions the renderer paints)
//! - Region layout helpers for absolutely positioned rendering
//! - Port/adapter interfaces (traits) for event data access
//! - The calendar view service that assembles render payloads
//!
//! ## Architecture Principles
//! - Only depends on `slotwise-common` and `slotwise-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod calendar;

// Re-export specific items to avoid ambiguity
pub use calendar::grid::month_grid;
pub use calendar::highlight::highlight_regions;
pub use calendar::layout::{region_frame, CellMetrics, RegionFrame};
pub use calendar::ports::EventRepository;
pub use calendar::service::{CalendarView, CalendarViewService};
