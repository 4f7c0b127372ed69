//! Text and trailing-icon anchors.
//!
//! Text and icon positions come out of one derivation and are returned
//! together, so a later icon query can never disagree with the text.

use serde::{Deserialize, Serialize};

use crate::layout::{AreaRange, BBox, Point};
use crate::types::{IconTheme, TextAlign};

/// Where to draw a cell's label and its first action icon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelPlacement {
    /// Canvas text anchor; its meaning follows `text_align`
    pub text: Point,
    pub text_align: TextAlign,
    /// Horizontal span the text occupies
    pub text_span: AreaRange,
    /// Top-left of the first action icon, when the cell has any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Point>,
}

impl LabelPlacement {
    fn new(
        text_x: f64,
        text_y: f64,
        text_align: TextAlign,
        text_width: f64,
        icon_x: f64,
        icon: &IconTheme,
        icon_count: usize,
    ) -> Self {
        let icon = (icon_count > 0).then(|| Point::new(icon_x, text_y - icon.size / 2.0));
        Self {
            text: Point::new(text_x, text_y),
            text_align,
            text_span: AreaRange::new(text_align.text_start(text_x, text_width), text_width),
            icon,
        }
    }

    /// Top-left of every action icon, laid out left to right.
    pub fn icon_positions(&self, icon: &IconTheme, icon_count: usize) -> Vec<Point> {
        let Some(first) = self.icon else {
            return Vec::new();
        };
        let step = icon.size + icon.margin.left;
        let mut x = first.x;
        let mut positions = Vec::with_capacity(icon_count);
        for _ in 0..icon_count {
            positions.push(Point::new(x, first.y));
            x += step;
        }
        positions
    }
}

/// Text followed by its icons inside a fixed content box.
///
/// Used for leaf cells: the icons always sit right after the text's trailing
/// edge, and the text gives up the icons' reserved width.
pub fn text_and_following_icon_position(
    content: &BBox,
    text_align: TextAlign,
    text_width: f64,
    icon: &IconTheme,
    icon_count: usize,
) -> LabelPlacement {
    let reserved = icon.reserved_width(icon_count);
    let range = content.x_range();

    let (text_x, icon_x) = match text_align {
        TextAlign::Left => (range.start, range.start + text_width + icon.margin.left),
        TextAlign::Center => {
            let start = range.align_span(text_width + reserved, text_align.as_align());
            (
                start + text_width / 2.0,
                start + text_width + icon.margin.left,
            )
        }
        TextAlign::Right => {
            let text_x = range.end() - reserved;
            (text_x, text_x + icon.margin.left)
        }
    };

    LabelPlacement::new(
        text_x,
        content.center_y(),
        text_align,
        text_width,
        icon_x,
        icon,
        icon_count,
    )
}

/// Label of a sticky (non-leaf) cell inside the range computed by
/// [`crate::layout::text_area_range`].
///
/// The text+icon block is aligned inside `range`, then:
/// - `left`: text at the block start, icon after the text
/// - `right`: icon at the block start, text after the icon
/// - `center`: text centered on the block, icon right of the text
///
/// A block wider than `range` is not truncated; it overflows on the side
/// opposite to the alignment edge.
pub fn sticky_label_position(
    range: &AreaRange,
    content: &BBox,
    text_align: TextAlign,
    text_width: f64,
    icon: &IconTheme,
    icon_count: usize,
) -> LabelPlacement {
    let reserved = icon.reserved_width(icon_count);
    let block_width = text_width + reserved;
    let block_start = range.align_span(block_width, text_align.as_align());

    let (text_x, icon_x) = match text_align {
        TextAlign::Left => (block_start, block_start + text_width + icon.margin.left),
        TextAlign::Right => (block_start + block_width, block_start + icon.margin.left),
        TextAlign::Center => {
            let center = block_start + block_width / 2.0;
            (center, center + text_width / 2.0 + icon.margin.left)
        }
    };

    LabelPlacement::new(
        text_x,
        content.center_y(),
        text_align,
        text_width,
        icon_x,
        icon,
        icon_count,
    )
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
    use crate::types::IconMargin;

    fn icon_16() -> IconTheme {
        IconTheme {
            size: 16.0,
            margin: IconMargin {
                left: 4.0,
                right: 0.0,
            },
        }
    }

    fn content() -> BBox {
        BBox::new(0.0, 0.0, 300.0, 30.0)
    }

    #[test]
    fn test_sticky_left_text_then_icon() {
        let range = AreaRange::new(0.0, 300.0);
        let placement =
            sticky_label_position(&range, &content(), TextAlign::Left, 40.0, &icon_16(), 1);
        assert_eq!(placement.text.x, 0.0);
        assert_eq!(placement.icon.unwrap().x, 44.0);
        assert_eq!(placement.text.y, 15.0);
        assert_eq!(placement.icon.unwrap().y, 7.0);
    }

    #[test]
    fn test_sticky_right_icon_then_text() {
        let range = AreaRange::new(0.0, 300.0);
        let placement =
            sticky_label_position(&range, &content(), TextAlign::Right, 40.0, &icon_16(), 1);
        // block = 60px at [240, 300]
        assert_eq!(placement.icon.unwrap().x, 244.0);
        assert_eq!(placement.text_span, AreaRange::new(260.0, 40.0));
        assert_eq!(placement.text.x, 300.0);
    }

    #[test]
    fn test_sticky_center() {
        let range = AreaRange::new(0.0, 300.0);
        let placement =
            sticky_label_position(&range, &content(), TextAlign::Center, 40.0, &icon_16(), 1);
        // block = 60px at [120, 180], center 150
        assert_eq!(placement.text.x, 150.0);
        assert_eq!(placement.icon.unwrap().x, 174.0);
        assert_eq!(placement.text_span, AreaRange::new(130.0, 40.0));
    }

    #[test]
    fn test_no_icon_when_count_is_zero() {
        let range = AreaRange::new(0.0, 300.0);
        let placement =
            sticky_label_position(&range, &content(), TextAlign::Left, 40.0, &icon_16(), 0);
        assert!(placement.icon.is_none());
        assert!(placement.icon_positions(&icon_16(), 0).is_empty());
    }

    #[test]
    fn test_leaf_right_icon_follows_text() {
        let placement =
            text_and_following_icon_position(&content(), TextAlign::Right, 40.0, &icon_16(), 1);
        assert_eq!(placement.text.x, 280.0);
        assert_eq!(placement.icon.unwrap().x, 284.0);
        assert_eq!(placement.text_span, AreaRange::new(240.0, 40.0));
    }

    #[test]
    fn test_leaf_left_and_center() {
        let left =
            text_and_following_icon_position(&content(), TextAlign::Left, 40.0, &icon_16(), 1);
        assert_eq!(left.text.x, 0.0);
        assert_eq!(left.icon.unwrap().x, 44.0);

        let center =
            text_and_following_icon_position(&content(), TextAlign::Center, 40.0, &icon_16(), 1);
        assert_eq!(center.text.x, 140.0);
        assert_eq!(center.icon.unwrap().x, 164.0);
    }

    #[test]
    fn test_icon_positions_step_by_size_and_margin() {
        let range = AreaRange::new(0.0, 300.0);
        let placement =
            sticky_label_position(&range, &content(), TextAlign::Left, 40.0, &icon_16(), 2);
        let xs: Vec<f64> = placement
            .icon_positions(&icon_16(), 2)
            .iter()
            .map(|p| p.x)
            .collect();
        assert_eq!(xs, vec![44.0, 64.0]);
    }

    #[test]
    fn test_oversized_block_keeps_alignment_edge() {
        let range = AreaRange::new(100.0, 30.0);
        let placement =
            sticky_label_position(&range, &content(), TextAlign::Left, 80.0, &icon_16(), 0);
        assert_eq!(placement.text.x, 100.0);
        assert_eq!(placement.text_span.width, 80.0);
    }
}
