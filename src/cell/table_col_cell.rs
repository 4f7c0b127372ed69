use super::{CellContext, HeaderCell};
use crate::interaction::{should_add_resize_area, HORIZONTAL_RESIZE_AREA_KEY_PRE};
use crate::layout::{BBox, Point};
use crate::types::{HeaderNode, SortIcon, SortParam, TextTheme};

/// Column header cell of a flat table sheet.
///
/// Table headers support pinned leading and trailing columns, so hotspot
/// placement branches on frozen membership. Labels are always bold and the
/// sort icon is always offered.
#[derive(Debug, Clone, Copy)]
pub struct TableColumnCell<'a> {
    meta: &'a HeaderNode,
    ctx: CellContext<'a>,
    sort_param: Option<&'a SortParam>,
}

impl<'a> TableColumnCell<'a> {
    pub fn new(meta: &'a HeaderNode, ctx: CellContext<'a>) -> Self {
        let sort_param = ctx.options.sort_param_for(&meta.field);
        Self {
            meta,
            ctx,
            sort_param,
        }
    }
}

impl HeaderCell for TableColumnCell<'_> {
    fn meta(&self) -> &HeaderNode {
        self.meta
    }

    fn ctx(&self) -> CellContext<'_> {
        self.ctx
    }

    fn is_bolder_text(&self) -> bool {
        true
    }

    fn text_style(&self) -> &TextTheme {
        &self.ctx.theme.bolder_text
    }

    fn show_sort_icon(&self) -> bool {
        self.ctx.options.show_default_header_action_icon
    }

    fn sort_icon(&self) -> SortIcon {
        SortIcon::from_param(self.sort_param)
    }

    fn horizontal_resize_area_name(&self) -> String {
        format!("{HORIZONTAL_RESIZE_AREA_KEY_PRE}{}", self.meta.id)
    }

    /// Pinned columns are always on screen. Scrollable ones must fall inside
    /// the window left between the pinned groups.
    fn should_add_vertical_resize_area(&self) -> bool {
        if self.meta.is_frozen() {
            return true;
        }

        let config = self.ctx.config;
        let bbox = self.bbox();
        let size = self.resize_area_theme().size;
        let frozen = &config.frozen;

        let resize_area = BBox::new(bbox.right() - size, bbox.y, size, bbox.height);
        let clip = BBox::new(
            frozen.col.width,
            0.0,
            frozen.scrollable_width(config.width),
            config.height,
        );

        should_add_resize_area(&resize_area, &clip, config.scroll_x, config.scroll_y)
    }

    fn vertical_resize_area_offset(&self) -> Point {
        let config = self.ctx.config;
        let frozen_col = &config.frozen.col;
        let frozen_trailing_col = &config.frozen.trailing_col;
        let x = self.meta.x;

        let offset_x = if self.meta.is_frozen_head() {
            config.position.x + x - frozen_col.x
        } else if self.meta.is_frozen_trailing() {
            config.position.x + x - frozen_trailing_col.x + config.viewport_width
                - frozen_trailing_col.width
        } else {
            config.position.x + x - config.scroll_x
        };

        Point::new(offset_x, config.position.y + self.meta.y)
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
    use crate::interaction::ResizeAreaGroup;
    use crate::types::{FrozenGroupArea, FrozenPosition, HeaderConfig, SortMethod};

    fn frozen_config(scroll_x: f64) -> HeaderConfig {
        let mut cfg = config(scroll_x, 600.0);
        cfg.position = Point::new(40.0, 0.0);
        cfg.frozen.col = FrozenGroupArea {
            x: 0.0,
            width: 100.0,
            ..FrozenGroupArea::default()
        };
        cfg.frozen.trailing_col = FrozenGroupArea {
            x: 900.0,
            width: 80.0,
            ..FrozenGroupArea::default()
        };
        cfg
    }

    fn offset_x(meta: &HeaderNode, cfg: &HeaderConfig) -> f64 {
        let theme = theme();
        let options = options();
        TableColumnCell::new(
            meta,
            CellContext {
                config: cfg,
                theme: &theme,
                options: &options,
            },
        )
        .vertical_resize_area_offset()
        .x
    }

    #[test]
    fn test_frozen_head_offset_ignores_scroll() {
        let mut meta = node("a", 20.0, 80.0, true);
        meta.frozen = FrozenPosition::Head;
        assert_eq!(offset_x(&meta, &frozen_config(0.0)), 60.0);
        assert_eq!(offset_x(&meta, &frozen_config(750.0)), 60.0);
    }

    #[test]
    fn test_frozen_trailing_offset_anchors_to_viewport_end() {
        let mut meta = node("z", 900.0, 80.0, true);
        meta.frozen = FrozenPosition::Trailing;
        // 40 + 900 - 900 + 600 - 80
        assert_eq!(offset_x(&meta, &frozen_config(0.0)), 560.0);
        assert_eq!(offset_x(&meta, &frozen_config(300.0)), 560.0);
    }

    #[test]
    fn test_scrollable_offset_tracks_scroll() {
        let meta = node("m", 300.0, 80.0, true);
        let before = offset_x(&meta, &frozen_config(100.0));
        let after = offset_x(&meta, &frozen_config(130.0));
        assert_eq!(before, 240.0);
        assert_eq!(after - before, -30.0);
    }

    #[test]
    fn test_frozen_cells_always_get_hotspot() {
        let theme = theme();
        let options = options();
        let cfg = frozen_config(5000.0);
        let mut meta = node("a", 20.0, 80.0, true);
        meta.frozen = FrozenPosition::Head;

        let cell = TableColumnCell::new(
            &meta,
            CellContext {
                config: &cfg,
                theme: &theme,
                options: &options,
            },
        );
        let mut group = ResizeAreaGroup::new("g");
        cell.draw_vertical_resize_area(Some(&mut group));
        assert_eq!(group.len(), 1);
        assert_eq!(group.hotspots()[0].x, 60.0 + 80.0 - 3.0);
    }

    #[test]
    fn test_scrollable_cell_clipped_by_frozen_groups() {
        let theme = theme();
        let options = options();
        let meta = node("m", 300.0, 80.0, true);

        // clip window is [100, 520]; hotspot right edge at 380 - scroll
        let visible = frozen_config(0.0);
        let hidden_behind_head = frozen_config(290.0);
        let hidden_past_end = frozen_config(-200.0);

        for (cfg, expected) in [
            (&visible, true),
            (&hidden_behind_head, false),
            (&hidden_past_end, false),
        ] {
            let cell = TableColumnCell::new(
                &meta,
                CellContext {
                    config: cfg,
                    theme: &theme,
                    options: &options,
                },
            );
            assert_eq!(cell.should_add_vertical_resize_area(), expected);
        }
    }

    #[test]
    fn test_table_naming_style_and_sort() {
        let theme = theme();
        let mut options = options();
        options.show_default_header_action_icon = true;
        options.sort_params = vec![SortParam {
            sort_field_id: "city".into(),
            sort_method: Some(SortMethod::Asc),
        }];
        let cfg = config(0.0, 400.0);
        let meta = node("a", 0.0, 100.0, true);
        let cell = TableColumnCell::new(
            &meta,
            CellContext {
                config: &cfg,
                theme: &theme,
                options: &options,
            },
        );

        assert_eq!(cell.horizontal_resize_area_name(), "horizontal-resize-area-a");
        assert!(cell.is_bolder_text());
        assert_eq!(cell.text_style().font_weight, 700);
        assert!(cell.show_sort_icon());
        assert_eq!(cell.sort_icon(), SortIcon::SortUp);
    }

    #[test]
    fn test_table_shows_sort_icon_without_sort_param() {
        let theme = theme();
        let mut options = options();
        options.show_default_header_action_icon = true;
        let cfg = config(0.0, 400.0);
        let meta = node("a", 0.0, 100.0, true);
        let cell = TableColumnCell::new(
            &meta,
            CellContext {
                config: &cfg,
                theme: &theme,
                options: &options,
            },
        );
        assert!(cell.show_sort_icon());
        assert_eq!(cell.sort_icon(), SortIcon::SortNone);
    }
}
