//! pivot-header - header geometry for pivot and table grids
//!
//! Computes everything the column header of a canvas grid needs besides the
//! pixels themselves:
//! - Sticky label and action icon anchors that stay readable while scrolling
//! - Resize hotspots for column width and header height, frozen-column aware
//! - The divider and expand button next to hidden columns
//!
//! Text measurement, tree building, and drawing are left to the caller. Every
//! pass is a pure function of its inputs apart from the resize layer it
//! refills.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { layout_col_header_js } from 'pivot-header';
//! await init();
//! const layout = layout_col_header_js({ sheetType: 'pivot', nodes, config });
//! ```

pub mod cell;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod types;

use wasm_bindgen::prelude::*;

pub use cell::{CellContext, HeaderCell, LabelPlacement, PivotColumnCell, TableColumnCell};
pub use error::{HeaderError, Result};
pub use interaction::{ExpandIndicator, ExpandRequest, ResizeAreaGroup, ResizeHotspot, ResizeLayer};
pub use layout::{
    layout_col_header, AreaRange, BBox, CellLayout, ColHeaderInput, ColHeaderLayout, MeasuredNode,
    Point, SheetType,
};
pub use types::*;

fn init_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Lay out a column header described as JSON and return the layout as JSON
///
/// # Arguments
/// * `input` - A `ColHeaderInput` object (nodes, config, theme, options)
///
/// # Errors
/// Returns an error if the input is not a valid `ColHeaderInput`.
#[wasm_bindgen]
pub fn layout_col_header_json(input: &str) -> std::result::Result<String, JsValue> {
    init_panic_hook();
    Ok(layout_json(input)?)
}

/// Native counterpart of [`layout_col_header_json`].
///
/// # Errors
/// Returns [`HeaderError::Json`] if the input is not a valid `ColHeaderInput`.
pub fn layout_json(input: &str) -> Result<String> {
    let input = ColHeaderInput::from_json(input)?;
    Ok(serde_json::to_string(&input.layout())?)
}

/// Lay out a column header passed as a JavaScript object
///
/// This is more efficient than `layout_col_header_json` when the input
/// already lives in JavaScript.
///
/// # Errors
/// Returns an error if the value cannot be converted to or from the layout
/// types.
#[wasm_bindgen]
pub fn layout_col_header_js(input: JsValue) -> std::result::Result<JsValue, JsValue> {
    init_panic_hook();
    let input: ColHeaderInput =
        serde_wasm_bindgen::from_value(input).map_err(HeaderError::from)?;
    Ok(serde_wasm_bindgen::to_value(&input.layout()).map_err(HeaderError::from)?)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_json_round_trips_through_the_pass() {
        let out = layout_json(
            r#"{"nodes": [{"id": "a", "key": "a", "width": 80, "height": 30, "isLeaf": true}],
                "config": {"width": 400, "viewportWidth": 400, "height": 30}}"#,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["cells"][0]["nodeId"], "a");
    }

    #[test]
    fn test_layout_json_reports_malformed_input() {
        let err = layout_json(r#"{"nodes": 3}"#).unwrap_err();
        assert!(matches!(err, HeaderError::Json(_)));
        assert!(err.to_string().starts_with("JSON: "));
    }
}
