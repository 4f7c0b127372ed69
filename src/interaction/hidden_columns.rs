//! Divider and expand button next to hidden columns.
//!
//! The indicator sits on the display sibling of a hidden run: at its leading
//! edge, or at its trailing edge when the hidden run follows the last visible
//! column. Clicking the button yields an [`ExpandRequest`] the caller
//! dispatches; nothing is expanded here.

use serde::{Deserialize, Serialize};

use crate::layout::BBox;
use crate::types::{
    HeaderNode, HeaderOptions, HiddenColumnsDetail, IconTheme, SplitLineTheme, SPLIT_LINE_WIDTH,
};

/// Icon drawn for the expand button.
pub const EXPAND_COL_ICON: &str = "ExpandColIcon";

/// Intent to reveal the columns hidden next to `node_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandRequest {
    pub node_id: String,
    pub hidden_node_ids: Vec<String>,
}

/// Vertical divider marking where columns were hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub stroke_opacity: f64,
    pub line_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandIndicator {
    pub line: SplitLine,
    pub icon_name: String,
    /// Clickable icon box, straddling the divider
    pub icon: BBox,
    pub request: ExpandRequest,
}

/// Indicator for `node`, when it displays a hidden run and the feature is on.
pub fn expand_column_indicator(
    node: &HeaderNode,
    bbox: &BBox,
    options: &HeaderOptions,
    detail: &HiddenColumnsDetail,
    icon: &IconTheme,
    split_line: &SplitLineTheme,
) -> Option<ExpandIndicator> {
    if detail.is_empty() || !options.hidden_columns_enabled() {
        return None;
    }
    let run = detail.run_displayed_by(&node.id)?;

    let is_last_column = detail.is_last_column_after_hidden(&node.id);
    let line_x = if is_last_column { bbox.right() } else { bbox.x };
    let size = icon.size.max(0.0);

    Some(ExpandIndicator {
        line: SplitLine {
            x1: line_x,
            y1: bbox.y,
            x2: line_x,
            y2: bbox.bottom(),
            stroke: split_line.horizontal_border_color.clone(),
            stroke_opacity: split_line.horizontal_border_color_opacity,
            line_width: SPLIT_LINE_WIDTH,
        },
        icon_name: EXPAND_COL_ICON.to_string(),
        icon: BBox::new(line_x - size, bbox.center_y() - size / 2.0, size * 2.0, size),
        request: ExpandRequest {
            node_id: node.id.clone(),
            hidden_node_ids: run.hide_column_node_ids.clone(),
        },
    })
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
    use crate::types::{DisplaySiblingNode, HiddenColumnsInfo};

    fn options() -> HeaderOptions {
        let mut options = HeaderOptions::default();
        options.interaction.hidden_column_fields = vec!["b".into()];
        options.tooltip.operation.hidden_columns = true;
        options
    }

    fn node(id: &str, x: f64) -> HeaderNode {
        HeaderNode {
            id: id.into(),
            x,
            width: 100.0,
            height: 30.0,
            is_leaf: true,
            ..HeaderNode::default()
        }
    }

    fn detail(prev: &str, next: Option<&str>, visible: &[&str]) -> HiddenColumnsDetail {
        HiddenColumnsDetail {
            runs: vec![HiddenColumnsInfo {
                hide_column_node_ids: vec!["b".into()],
                display_sibling_node: DisplaySiblingNode {
                    prev: Some(prev.into()),
                    next: next.map(Into::into),
                },
            }],
            column_node_ids: visible.iter().map(|s| s.to_string()).collect(),
            init_column_node_ids: vec!["a".into(), "b".into(), "c".into()],
        }
    }

    #[test]
    fn test_indicator_on_leading_edge() {
        let c = node("c", 100.0);
        let indicator = expand_column_indicator(
            &c,
            &c.bbox(),
            &options(),
            &detail("a", Some("c"), &["a", "c"]),
            &IconTheme::default(),
            &SplitLineTheme::default(),
        )
        .unwrap();

        assert_eq!(indicator.line.x1, 100.0);
        assert_eq!(indicator.line.y2, 30.0);
        assert_eq!(indicator.icon, BBox::new(90.0, 10.0, 20.0, 10.0));
        assert_eq!(indicator.request.node_id, "c");
        assert_eq!(indicator.request.hidden_node_ids, vec!["b".to_string()]);
    }

    #[test]
    fn test_indicator_on_trailing_edge_of_last_column() {
        let a = node("a", 0.0);
        let mut detail = detail("a", None, &["a"]);
        detail.init_column_node_ids = vec!["a".into(), "b".into()];
        let indicator = expand_column_indicator(
            &a,
            &a.bbox(),
            &options(),
            &detail,
            &IconTheme::default(),
            &SplitLineTheme::default(),
        )
        .unwrap();

        assert_eq!(indicator.line.x1, 100.0);
        assert_eq!(indicator.icon.x, 90.0);
    }

    #[test]
    fn test_no_indicator_when_disabled_or_unrelated() {
        let c = node("c", 100.0);
        let detail = detail("a", Some("c"), &["a", "c"]);

        let disabled = HeaderOptions::default();
        assert!(expand_column_indicator(
            &c,
            &c.bbox(),
            &disabled,
            &detail,
            &IconTheme::default(),
            &SplitLineTheme::default()
        )
        .is_none());

        let a = node("a", 0.0);
        assert!(expand_column_indicator(
            &a,
            &a.bbox(),
            &options(),
            &detail,
            &IconTheme::default(),
            &SplitLineTheme::default()
        )
        .is_none());
    }
}
