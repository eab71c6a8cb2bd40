//! Calendar view assembly: grid generation, highlight segmentation, layout.

pub mod grid;
pub mod highlight;
pub mod layout;
pub mod ports;
pub mod service;

pub use grid::month_grid;
pub use highlight::highlight_regions;
pub use ports::EventRepository;
pub use service::{CalendarView, CalendarViewService};
