use serde::{Deserialize, Serialize};

use crate::layout::Point;

/// Extent of one pinned group in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrozenGroupArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The four pinned groups of a sheet. Leading and trailing groups never
/// overlap.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrozenGroupAreas {
    pub col: FrozenGroupArea,
    pub trailing_col: FrozenGroupArea,
    pub row: FrozenGroupArea,
    pub trailing_row: FrozenGroupArea,
}

impl FrozenGroupAreas {
    /// Width left for the scrollable middle of a header `total_width` wide.
    pub fn scrollable_width(&self, total_width: f64) -> f64 {
        (total_width - self.col.width - self.trailing_col.width).max(0.0)
    }
}

/// Per-pass header geometry.
///
/// Rebuilt wholesale on every layout; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderConfig {
    /// Horizontal scroll offset of the scrollable region
    pub scroll_x: f64,
    /// Vertical scroll offset of the scrollable region
    pub scroll_y: f64,
    /// Width of the pinned row-header corner
    pub corner_width: f64,
    /// Visible header width in pixels
    pub width: f64,
    /// Visible header height in pixels
    pub height: f64,
    /// Width of the whole data viewport
    pub viewport_width: f64,
    /// Origin of the header region within the canvas
    pub position: Point,
    /// Whether horizontal scroll also moves the corner region
    pub scroll_contains_row_header: bool,
    /// Width of the frame border between corner and column header
    pub frame_border_width: f64,
    /// Pinned group extents
    pub frozen: FrozenGroupAreas,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            corner_width: 0.0,
            width: 800.0,
            height: 30.0,
            viewport_width: 800.0,
            position: Point::default(),
            scroll_contains_row_header: false,
            frame_border_width: 1.0,
            frozen: FrozenGroupAreas::default(),
        }
    }
}

impl HeaderConfig {
    /// Corner width that scrolls together with the columns, or zero.
    pub fn scrolling_corner_width(&self) -> f64 {
        if self.scroll_contains_row_header {
            self.corner_width
        } else {
            0.0
        }
    }
}
