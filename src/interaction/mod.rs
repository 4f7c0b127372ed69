//! Hit regions and affordances consumed by the input-handling layer.
//!
//! - Resize hotspots for column width and header height
//! - Hidden-column divider and expand button

pub mod hidden_columns;
pub mod resize;

pub use hidden_columns::{
    expand_column_indicator, ExpandIndicator, ExpandRequest, SplitLine, EXPAND_COL_ICON,
};
pub use resize::{
    resize_area_attrs, should_add_resize_area, ResizeAreaAttrs, ResizeAreaEffect,
    ResizeAreaGroup, ResizeDirection, ResizeHotspot, ResizeLayer,
    HORIZONTAL_RESIZE_AREA_KEY_PRE, KEY_GROUP_COL_RESIZE_AREA, VERTICAL_RESIZE_AREA_KEY_PRE,
};
