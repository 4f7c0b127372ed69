//! Column header layout pass.
//!
//! Runs every cell of the column header against one [`HeaderConfig`] and
//! collects the label anchors, backgrounds, hidden-column indicators, and
//! resize hotspots of the pass. The pass is a pure function of its input
//! apart from the resize layer it refills.

use serde::{Deserialize, Serialize};

use crate::cell::{
    BackgroundShape, CellContext, HeaderCell, LabelPlacement, PivotColumnCell, TableColumnCell,
};
use crate::error::Result;
use crate::interaction::{ExpandIndicator, ResizeHotspot, ResizeLayer, KEY_GROUP_COL_RESIZE_AREA};
use crate::types::{
    ColCellTheme, HeaderConfig, HeaderNode, HeaderOptions, HiddenColumnsDetail, SortIcon,
};

/// Flavour of sheet the header belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SheetType {
    #[default]
    Pivot,
    Table,
}

/// A header node with its label width, as measured by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasuredNode {
    #[serde(flatten)]
    pub node: HeaderNode,
    #[serde(default)]
    pub text_width: f64,
}

/// Everything one column header pass reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColHeaderInput {
    pub sheet_type: SheetType,
    pub nodes: Vec<MeasuredNode>,
    pub config: HeaderConfig,
    pub theme: ColCellTheme,
    pub options: HeaderOptions,
    pub hidden_columns: HiddenColumnsDetail,
}

impl ColHeaderInput {
    /// Parse a pass input from JSON.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Lay out the header into a fresh, mounted resize layer.
    pub fn layout(&self) -> ColHeaderLayout {
        let mut layer = ResizeLayer::mounted();
        layout_col_header(self, &mut layer)
    }
}

/// Drawing instructions for one header cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellLayout {
    pub node_id: String,
    pub background: BackgroundShape,
    pub label: LabelPlacement,
    pub font_weight: u16,
    /// Width available to the label before it must be truncated
    pub max_text_width: f64,
    pub action_icon_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_icon: Option<SortIcon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<ExpandIndicator>,
}

/// Result of a column header pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColHeaderLayout {
    pub cells: Vec<CellLayout>,
    pub resize_areas: Vec<ResizeHotspot>,
}

/// Lay out every node of `input`, refilling the column resize group of
/// `layer`. An unmounted layer yields cells without hotspots.
pub fn layout_col_header(input: &ColHeaderInput, layer: &mut ResizeLayer) -> ColHeaderLayout {
    tracing::debug!(
        sheet_type = ?input.sheet_type,
        nodes = input.nodes.len(),
        scroll_x = input.config.scroll_x,
        scroll_y = input.config.scroll_y,
        "laying out column header"
    );

    layer.clear();
    let ctx = CellContext {
        config: &input.config,
        theme: &input.theme,
        options: &input.options,
    };

    let cells = input
        .nodes
        .iter()
        .map(|measured| match input.sheet_type {
            SheetType::Pivot => lay_out_cell(
                &PivotColumnCell::new(&measured.node, ctx),
                measured.text_width,
                &input.hidden_columns,
                layer,
            ),
            SheetType::Table => lay_out_cell(
                &TableColumnCell::new(&measured.node, ctx),
                measured.text_width,
                &input.hidden_columns,
                layer,
            ),
        })
        .collect();

    let resize_areas = layer
        .group(KEY_GROUP_COL_RESIZE_AREA)
        .map(|group| group.hotspots().to_vec())
        .unwrap_or_default();

    ColHeaderLayout {
        cells,
        resize_areas,
    }
}

fn lay_out_cell<C: HeaderCell>(
    cell: &C,
    text_width: f64,
    hidden_columns: &HiddenColumnsDetail,
    layer: &mut ResizeLayer,
) -> CellLayout {
    cell.draw_resize_area(layer.get_or_create_group(KEY_GROUP_COL_RESIZE_AREA));

    CellLayout {
        node_id: cell.meta().id.clone(),
        background: cell.background(),
        label: cell.label_placement(text_width),
        font_weight: cell.text_style().font_weight,
        max_text_width: cell.max_text_width(),
        action_icon_count: cell.action_icons_count(),
        sort_icon: cell.show_sort_icon().then(|| cell.sort_icon()),
        expand: cell.expand_indicator(hidden_columns),
    }
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

    fn measured(id: &str, key: &str, x: f64, y: f64, width: f64, is_leaf: bool) -> MeasuredNode {
        MeasuredNode {
            node: HeaderNode {
                id: id.into(),
                key: key.into(),
                field: key.into(),
                label: id.into(),
                x,
                y,
                width,
                height: 30.0,
                is_leaf,
                ..HeaderNode::default()
            },
            text_width: 40.0,
        }
    }

    fn input() -> ColHeaderInput {
        ColHeaderInput {
            nodes: vec![
                measured("east", "region", 0.0, 0.0, 300.0, false),
                measured("east-a", "city", 0.0, 30.0, 150.0, true),
                measured("east-b", "city", 150.0, 30.0, 150.0, true),
            ],
            config: HeaderConfig {
                width: 400.0,
                viewport_width: 400.0,
                height: 60.0,
                ..HeaderConfig::default()
            },
            ..ColHeaderInput::default()
        }
    }

    #[test]
    fn test_one_height_hotspot_per_row_key() {
        let layout = input().layout();
        let horizontal: Vec<_> = layout
            .resize_areas
            .iter()
            .filter(|h| h.name.starts_with("horizontal-resize-area-"))
            .map(|h| h.name.as_str())
            .collect();
        assert_eq!(
            horizontal,
            vec!["horizontal-resize-area-region", "horizontal-resize-area-city"]
        );
        let vertical = layout.resize_areas.len() - horizontal.len();
        assert_eq!(vertical, 2);
    }

    #[test]
    fn test_pass_is_idempotent() {
        let input = input();
        let mut layer = ResizeLayer::mounted();
        let first = layout_col_header(&input, &mut layer);
        let second = layout_col_header(&input, &mut layer);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unmounted_layer_produces_no_hotspots() {
        let mut layer = ResizeLayer::unmounted();
        let layout = layout_col_header(&input(), &mut layer);
        assert_eq!(layout.cells.len(), 3);
        assert!(layout.resize_areas.is_empty());
    }

    #[test]
    fn test_table_names_height_hotspots_by_id() {
        let mut input = input();
        input.sheet_type = SheetType::Table;
        let layout = input.layout();
        let names: Vec<_> = layout
            .resize_areas
            .iter()
            .filter(|h| h.name.starts_with("horizontal-resize-area-"))
            .map(|h| h.name.as_str())
            .collect();
        assert_eq!(names.len(), 3);
        assert!(layout.cells.iter().all(|c| c.font_weight == 700));
    }

    #[test]
    fn test_from_json_with_defaults() {
        let json = r#"{
            "sheetType": "table",
            "nodes": [{"id": "a", "key": "a", "x": 0, "width": 80, "height": 30, "isLeaf": true, "textWidth": 24}],
            "config": {"width": 400, "viewportWidth": 400}
        }"#;
        let input = ColHeaderInput::from_json(json).unwrap();
        assert_eq!(input.sheet_type, SheetType::Table);
        assert_eq!(input.nodes[0].text_width, 24.0);
        assert!(input.nodes[0].node.is_leaf);
        assert_eq!(input.theme.resize_area.size, 3.0);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(ColHeaderInput::from_json("{\"nodes\": 3}").is_err());
    }
}
