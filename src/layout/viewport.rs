//! Maps the scrolled viewport into column-header coordinates.
//!
//! ```text
//!  p(x, y)
//!  +----------------------+            x
//!  |                    +--------------->
//!  | viewport           | |ColCell  |
//!  |                    |-|---------+
//!  +--------------------|-+
//!                       |
//!                     y v
//! ```
//!
//! Expressing the viewport in the same space as the node boxes turns sticky
//! label placement into plain interval arithmetic.

use super::AreaRange;
use crate::types::{HeaderConfig, Padding, TextAlign};

/// Visible window of the column header, in node coordinates.
pub fn col_header_viewport(config: &HeaderConfig) -> AreaRange {
    let corner = config.scrolling_corner_width();
    AreaRange::new(config.scroll_x - corner, config.width + corner)
}

/// Pull the viewport edges inward by the cell padding on the side(s) the
/// text is aligned to, so sticky text keeps the same inset it has inside a
/// cell.
pub fn adjust_scrolling_viewport(
    viewport: AreaRange,
    text_align: TextAlign,
    padding: &Padding,
) -> AreaRange {
    match text_align {
        TextAlign::Left => AreaRange::new(viewport.start + padding.left, viewport.width - padding.left),
        TextAlign::Right => AreaRange::new(viewport.start, viewport.width - padding.right),
        TextAlign::Center => AreaRange::new(
            viewport.start + padding.left,
            viewport.width - padding.left - padding.right,
        ),
    }
}

/// Range a text+icon block of `block_width` pixels may occupy.
///
/// This is the visible slice of `content`; when that slice is narrower than
/// the block it is widened toward the inside of `content`, so the label
/// sticks to the viewport edge without leaving its own cell.
pub fn text_area_range(viewport: &AreaRange, content: &AreaRange, block_width: f64) -> AreaRange {
    content.clip(viewport).fit_within(block_width, content)
}

/// Sticky text range of a non-leaf cell whose content spans `content`.
pub fn sticky_text_range(
    config: &HeaderConfig,
    content: &AreaRange,
    text_align: TextAlign,
    padding: &Padding,
    block_width: f64,
) -> AreaRange {
    let viewport = adjust_scrolling_viewport(col_header_viewport(config), text_align, padding);
    text_area_range(&viewport, content, block_width)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn config(scroll_x: f64, width: f64) -> HeaderConfig {
        HeaderConfig {
            scroll_x,
            width,
            corner_width: 100.0,
            ..HeaderConfig::default()
        }
    }

    #[test]
    fn test_viewport_without_corner() {
        let viewport = col_header_viewport(&config(250.0, 400.0));
        assert_eq!(viewport, AreaRange::new(250.0, 400.0));
    }

    #[test]
    fn test_viewport_with_scrolling_corner() {
        let mut cfg = config(250.0, 400.0);
        cfg.scroll_contains_row_header = true;
        assert_eq!(col_header_viewport(&cfg), AreaRange::new(150.0, 500.0));
    }

    #[test]
    fn test_adjust_viewport_by_alignment() {
        let viewport = AreaRange::new(0.0, 300.0);
        let padding = Padding {
            top: 0.0,
            right: 6.0,
            bottom: 0.0,
            left: 8.0,
        };
        assert_eq!(
            adjust_scrolling_viewport(viewport, TextAlign::Left, &padding),
            AreaRange::new(8.0, 292.0)
        );
        assert_eq!(
            adjust_scrolling_viewport(viewport, TextAlign::Right, &padding),
            AreaRange::new(0.0, 294.0)
        );
        assert_eq!(
            adjust_scrolling_viewport(viewport, TextAlign::Center, &padding),
            AreaRange::new(8.0, 286.0)
        );
    }

    #[test]
    fn test_text_area_content_covers_viewport() {
        let range = text_area_range(
            &AreaRange::new(200.0, 300.0),
            &AreaRange::new(0.0, 1000.0),
            60.0,
        );
        assert_eq!(range, AreaRange::new(200.0, 300.0));
    }

    #[test]
    fn test_text_area_content_inside_viewport() {
        let range = text_area_range(
            &AreaRange::new(0.0, 1000.0),
            &AreaRange::new(100.0, 200.0),
            60.0,
        );
        assert_eq!(range, AreaRange::new(100.0, 200.0));
    }

    #[test]
    fn test_text_area_sticks_to_content_end_when_scrolled_past() {
        // Only 20px of the cell is still visible on the left edge.
        let range = text_area_range(
            &AreaRange::new(280.0, 300.0),
            &AreaRange::new(0.0, 300.0),
            60.0,
        );
        assert_eq!(range, AreaRange::new(240.0, 60.0));
    }

    #[test]
    fn test_text_area_sticks_to_content_start_when_entering() {
        // Cell is just scrolling in from the right.
        let range = text_area_range(
            &AreaRange::new(0.0, 300.0),
            &AreaRange::new(290.0, 400.0),
            60.0,
        );
        assert_eq!(range, AreaRange::new(290.0, 60.0));
    }

    #[test]
    fn test_text_area_off_screen_stays_in_content() {
        let content = AreaRange::new(0.0, 100.0);
        let range = text_area_range(&AreaRange::new(500.0, 300.0), &content, 40.0);
        assert!(content.contains(&range));
        assert_eq!(range, AreaRange::new(60.0, 40.0));
    }
}
