//! Header geometry in node coordinates.
//!
//! This module handles:
//! - Interval and box arithmetic shared by every header calculation
//! - Mapping the scrolled viewport into column-header coordinates
//! - The column header layout pass

mod bbox;
mod col_header;
mod range;
mod viewport;

pub use bbox::{BBox, Point};
pub use col_header::{
    layout_col_header, CellLayout, ColHeaderInput, ColHeaderLayout, MeasuredNode, SheetType,
};
pub use range::{Align, AreaRange};
pub use viewport::{
    adjust_scrolling_viewport, col_header_viewport, sticky_text_range, text_area_range,
};
