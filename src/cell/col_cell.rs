use super::{CellContext, HeaderCell};
use crate::types::HeaderNode;

/// Column header cell of a pivot sheet.
///
/// Uses the shared geometry unchanged: every hotspot is offset by the scroll
/// position, whatever group the node belongs to.
#[derive(Debug, Clone, Copy)]
pub struct PivotColumnCell<'a> {
    meta: &'a HeaderNode,
    ctx: CellContext<'a>,
}

impl<'a> PivotColumnCell<'a> {
    pub fn new(meta: &'a HeaderNode, ctx: CellContext<'a>) -> Self {
        Self { meta, ctx }
    }
}

impl HeaderCell for PivotColumnCell<'_> {
    fn meta(&self) -> &HeaderNode {
        self.meta
    }

    fn ctx(&self) -> CellContext<'_> {
        self.ctx
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
    use crate::cell::test_support::{config, node, options, theme};
    use crate::interaction::{ResizeAreaEffect, ResizeAreaGroup, ResizeDirection};
    use crate::types::{FrozenPosition, SortMethod, SortParam, TextAlign};

    #[test]
    fn test_leaf_vertical_hotspot_visible_after_scroll() {
        let meta = node("a", 500.0, 100.0, true);
        let cfg = config(450.0, 200.0);
        let theme = theme();
        let options = options();
        let cell = PivotColumnCell::new(
            &meta,
            CellContext {
                config: &cfg,
                theme: &theme,
                options: &options,
            },
        );

        let mut group = ResizeAreaGroup::new("g");
        cell.draw_vertical_resize_area(Some(&mut group));

        let hotspot = &group.hotspots()[0];
        // position.x + x - scroll_x + width - size
        assert_eq!(hotspot.x, 500.0 - 450.0 + 100.0 - 3.0);
        assert_eq!(hotspot.width, 3.0);
        assert_eq!(hotspot.height, 30.0);
        assert_eq!(hotspot.effect, ResizeAreaEffect::Cell);
        assert_eq!(hotspot.direction, ResizeDirection::Horizontal);
        assert_eq!(hotspot.id, "a");
    }

    #[test]
    fn test_leaf_vertical_hotspot_suppressed_off_screen() {
        let meta = node("a", 500.0, 100.0, true);
        let cfg = config(0.0, 200.0);
        let theme = theme();
        let options = options();
        let cell = PivotColumnCell::new(
            &meta,
            CellContext {
                config: &cfg,
                theme: &theme,
                options: &options,
            },
        );

        let mut group = ResizeAreaGroup::new("g");
        cell.draw_vertical_resize_area(Some(&mut group));
        assert!(group.is_empty());
    }

    #[test]
    fn test_scrolling_corner_widens_clip() {
        // Hotspot at [-60, -57] only becomes visible once the corner scrolls too.
        let meta = node("a", -60.0, 3.0, true);
        let mut cfg = config(0.0, 200.0);
        cfg.corner_width = 100.0;
        let theme = theme();
        let options = options();
        let ctx = CellContext {
            config: &cfg,
            theme: &theme,
            options: &options,
        };
        assert!(!PivotColumnCell::new(&meta, ctx).should_add_vertical_resize_area());

        let mut scrolling = cfg.clone();
        scrolling.scroll_contains_row_header = true;
        let ctx = CellContext {
            config: &scrolling,
            ..ctx
        };
        assert!(PivotColumnCell::new(&meta, ctx).should_add_vertical_resize_area());
    }

    #[test]
    fn test_pivot_offset_ignores_frozen_membership() {
        let mut meta = node("a", 100.0, 100.0, true);
        meta.frozen = FrozenPosition::Head;
        let cfg = config(50.0, 400.0);
        let theme = theme();
        let options = options();
        let cell = PivotColumnCell::new(
            &meta,
            CellContext {
                config: &cfg,
                theme: &theme,
                options: &options,
            },
        );
        assert_eq!(cell.vertical_resize_area_offset().x, 50.0);
    }

    #[test]
    fn test_non_leaf_gets_no_vertical_hotspot() {
        let meta = node("group", 0.0, 300.0, false);
        let cfg = config(0.0, 400.0);
        let theme = theme();
        let options = options();
        let cell = PivotColumnCell::new(
            &meta,
            CellContext {
                config: &cfg,
                theme: &theme,
                options: &options,
            },
        );
        let mut group = ResizeAreaGroup::new("g");
        cell.draw_vertical_resize_area(Some(&mut group));
        assert!(group.is_empty());
    }

    #[test]
    fn test_horizontal_hotspot_spans_corner_and_viewport() {
        let meta = node("a", 0.0, 100.0, true);
        let mut cfg = config(0.0, 400.0);
        cfg.corner_width = 120.0;
        cfg.viewport_width = 600.0;
        let theme = theme();
        let options = options();
        let cell = PivotColumnCell::new(
            &meta,
            CellContext {
                config: &cfg,
                theme: &theme,
                options: &options,
            },
        );

        let mut group = ResizeAreaGroup::new("g");
        cell.draw_horizontal_resize_area(Some(&mut group));
        let hotspot = &group.hotspots()[0];
        assert_eq!(hotspot.name, "horizontal-resize-area-key-a");
        assert_eq!(hotspot.x, 0.0);
        assert_eq!(hotspot.y, 27.0);
        assert_eq!(hotspot.width, 120.0 + 1.0 + 600.0);
        assert_eq!(hotspot.height, 3.0);
        assert_eq!(hotspot.effect, ResizeAreaEffect::Field);
        assert_eq!(hotspot.id, "key-a");
    }

    #[test]
    fn test_bold_for_group_and_totals() {
        let theme = theme();
        let options = options();
        let cfg = config(0.0, 400.0);
        let ctx = CellContext {
            config: &cfg,
            theme: &theme,
            options: &options,
        };

        let leaf = node("a", 0.0, 100.0, true);
        assert!(!PivotColumnCell::new(&leaf, ctx).is_bolder_text());
        assert_eq!(PivotColumnCell::new(&leaf, ctx).text_style().font_weight, 400);

        let group = node("g", 0.0, 100.0, false);
        assert!(PivotColumnCell::new(&group, ctx).is_bolder_text());

        let mut totals = node("t", 0.0, 100.0, true);
        totals.is_totals = true;
        assert_eq!(PivotColumnCell::new(&totals, ctx).text_style().font_weight, 700);
    }

    #[test]
    fn test_sort_icon_requires_sorted_field() {
        let meta = node("a", 0.0, 200.0, true);
        let cfg = config(0.0, 400.0);
        let theme = theme();
        let mut options = options();
        options.show_default_header_action_icon = true;
        let ctx = CellContext {
            config: &cfg,
            theme: &theme,
            options: &options,
        };
        assert!(!PivotColumnCell::new(&meta, ctx).show_sort_icon());

        let mut sorted = options.clone();
        sorted.sort_params = vec![SortParam {
            sort_field_id: "city".into(),
            sort_method: Some(SortMethod::Asc),
        }];
        let ctx = CellContext {
            options: &sorted,
            ..ctx
        };
        let cell = PivotColumnCell::new(&meta, ctx);
        assert!(cell.show_sort_icon());
        assert_eq!(cell.action_icons_count(), 1);
        // content 200 - (10 + 4) - 4
        assert_eq!(cell.max_text_width(), 182.0);
    }

    #[test]
    fn test_leaf_label_uses_content_box() {
        let meta = node("a", 100.0, 200.0, true);
        let cfg = config(5000.0, 400.0);
        let mut theme = theme();
        theme.text.text_align = TextAlign::Left;
        let options = options();
        let cell = PivotColumnCell::new(
            &meta,
            CellContext {
                config: &cfg,
                theme: &theme,
                options: &options,
            },
        );
        // leaf cells ignore the scroll position entirely
        let placement = cell.label_placement(40.0);
        assert_eq!(placement.text.x, 100.0);
        assert_eq!(placement.text.y, 15.0);
    }
}
