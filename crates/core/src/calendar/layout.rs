//! Region layout for absolutely positioned rendering.
//!
//! The segmenter emits grid coordinates; this module converts them to the
//! fractional frames the browser renderer positions blocks with. Columns are
//! percentage-based (each of the 7 columns is `100/7`% wide), rows are
//! pixel-based from the cell height and inter-row gap.

use serde::{Deserialize, Serialize};
use slotwise_domain::constants::COLUMN_WIDTH_PCT;
use slotwise_domain::HighlightRegion;

/// Pixel metrics of one grid cell as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellMetrics {
    pub cell_height: f32,
    pub row_gap: f32,
}

/// Positioned frame for one highlight region record.
///
/// `top` and `height` are pixels; `left_pct` and `width_pct` are percentages
/// of the grid width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionFrame {
    pub top: f32,
    pub height: f32,
    pub left_pct: f32,
    pub width_pct: f32,
}

/// Compute the frame for a region record.
#[must_use]
pub fn region_frame(region: &HighlightRegion, metrics: &CellMetrics) -> RegionFrame {
    let row = region.painted_row() as f32;
    let cols = (region.col_end - region.col_start + 1) as f32;

    RegionFrame {
        top: row * (metrics.cell_height + metrics.row_gap),
        height: metrics.cell_height,
        left_pct: region.col_start as f32 * COLUMN_WIDTH_PCT,
        width_pct: cols * COLUMN_WIDTH_PCT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: CellMetrics = CellMetrics { cell_height: 40.0, row_gap: 4.0 };

    #[test]
    fn first_row_sits_at_top() {
        let frame = region_frame(&HighlightRegion::single(0, 0, 6), &METRICS);
        assert!((frame.top - 0.0).abs() < f32::EPSILON);
        assert!((frame.left_pct - 0.0).abs() < f32::EPSILON);
        assert!((frame.width_pct - 100.0).abs() < 1e-4);
    }

    #[test]
    fn row_offset_includes_gap() {
        let frame = region_frame(&HighlightRegion::single(3, 2, 4), &METRICS);
        assert!((frame.top - 132.0).abs() < f32::EPSILON);
        assert!((frame.height - 40.0).abs() < f32::EPSILON);
    }

    #[test]
    fn right_cap_uses_lower_row() {
        let [left, right] = HighlightRegion::capped_pair(1, 5, 2);
        let left_frame = region_frame(&left, &METRICS);
        let right_frame = region_frame(&right, &METRICS);

        assert!((left_frame.top - 44.0).abs() < f32::EPSILON);
        assert!((right_frame.top - 88.0).abs() < f32::EPSILON);
        assert!((right_frame.left_pct - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn column_width_is_a_seventh() {
        let frame = region_frame(&HighlightRegion::single(0, 3, 3), &METRICS);
        assert!((frame.width_pct - 100.0 / 7.0).abs() < 1e-4);
        assert!((frame.left_pct - 3.0 * 100.0 / 7.0).abs() < 1e-4);
    }
}
