//! Configuration structures

use serde::{Deserialize, Serialize};

use crate::types::ViewMode;

/// Calendar view configuration
///
/// Supplied by the host application; defaults match the product's initial
/// render (month view, cancelled bookings hidden).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarViewConfig {
    /// View mode used when no explicit mode is requested.
    pub default_mode: ViewMode,
    /// Whether cancelled bookings are included in view payloads.
    pub include_cancelled: bool,
}

impl Default for CalendarViewConfig {
    fn default() -> Self {
        Self { default_mode: ViewMode::Month, include_cancelled: false }
    }
}
