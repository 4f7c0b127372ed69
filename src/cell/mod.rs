//! Column header cells.
//!
//! [`HeaderCell`] carries the shared geometry (content box, label and icon
//! anchors, resize hotspots, hidden-column indicator). The pivot and table
//! flavours only override the capabilities that differ between sheet types:
//! text weight, sort icon visibility, hotspot naming, and the frozen-aware
//! hotspot placement.

pub mod anchor;
mod col_cell;
mod table_col_cell;

pub use anchor::{sticky_label_position, text_and_following_icon_position, LabelPlacement};
pub use col_cell::PivotColumnCell;
pub use table_col_cell::TableColumnCell;

use serde::{Deserialize, Serialize};

use crate::interaction::{
    expand_column_indicator, resize_area_attrs, should_add_resize_area, ExpandIndicator,
    ResizeAreaAttrs, ResizeAreaEffect, ResizeAreaGroup, ResizeDirection, ResizeHotspot,
    HORIZONTAL_RESIZE_AREA_KEY_PRE, VERTICAL_RESIZE_AREA_KEY_PRE,
};
use crate::layout::{sticky_text_range, BBox, Point};
use crate::types::{
    ColCellTheme, HeaderConfig, HeaderNode, HeaderOptions, HiddenColumnsDetail, ResizeAreaType,
    ResizeAreaTheme, SortIcon, TextTheme,
};

/// Read-only inputs shared by every cell of one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    pub config: &'a HeaderConfig,
    pub theme: &'a ColCellTheme,
    pub options: &'a HeaderOptions,
}

/// Background rectangle of a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundShape {
    pub bbox: BBox,
    pub fill: String,
    pub fill_opacity: f64,
}

/// Geometry of a column header cell.
pub trait HeaderCell {
    fn meta(&self) -> &HeaderNode;

    fn ctx(&self) -> CellContext<'_>;

    /// Non-leaf and totals cells are drawn bold.
    fn is_bolder_text(&self) -> bool {
        let meta = self.meta();
        meta.is_totals || !meta.is_leaf
    }

    fn text_style(&self) -> &TextTheme {
        let theme = self.ctx().theme;
        if self.is_bolder_text() {
            &theme.bolder_text
        } else {
            &theme.text
        }
    }

    fn show_sort_icon(&self) -> bool {
        let options = self.ctx().options;
        options.show_default_header_action_icon
            && options
                .sort_param_for(&self.meta().field)
                .is_some_and(|param| param.sort_method.is_some())
    }

    fn sort_icon(&self) -> SortIcon {
        SortIcon::from_param(self.ctx().options.sort_param_for(&self.meta().field))
    }

    fn horizontal_resize_area_name(&self) -> String {
        format!("{HORIZONTAL_RESIZE_AREA_KEY_PRE}{}", self.meta().key)
    }

    /// Whether the column-width hotspot is inside the visible clip region.
    fn should_add_vertical_resize_area(&self) -> bool {
        let meta = self.meta();
        let config = self.ctx().config;
        let size = self.resize_area_theme().size;
        let corner = config.scrolling_corner_width();

        let resize_area = BBox::new(meta.x + meta.width - size, meta.y, size, meta.height);
        let clip = BBox::new(-corner, 0.0, corner + config.width, config.height);

        should_add_resize_area(&resize_area, &clip, config.scroll_x, config.scroll_y)
    }

    /// Canvas origin of the cell for its column-width hotspot.
    fn vertical_resize_area_offset(&self) -> Point {
        let meta = self.meta();
        let config = self.ctx().config;
        Point::new(
            config.position.x + meta.x - config.scroll_x,
            config.position.y + meta.y,
        )
    }

    fn background(&self) -> BackgroundShape {
        let cell = &self.ctx().theme.cell;
        BackgroundShape {
            bbox: self.bbox(),
            fill: cell.background_color.clone(),
            fill_opacity: cell.background_color_opacity,
        }
    }

    fn bbox(&self) -> BBox {
        self.meta().bbox()
    }

    fn content_box(&self) -> BBox {
        self.bbox().inset(&self.ctx().theme.cell.padding)
    }

    fn resize_area_theme(&self) -> &ResizeAreaTheme {
        &self.ctx().theme.resize_area
    }

    fn action_icons_count(&self) -> usize {
        let custom = self.ctx().options.action_icon_count(&self.meta().field);
        custom + usize::from(self.show_sort_icon())
    }

    fn action_icons_width(&self) -> f64 {
        self.ctx().theme.icon.reserved_width(self.action_icons_count())
    }

    /// Width the text measurement collaborator may use before ellipsis.
    fn max_text_width(&self) -> f64 {
        (self.content_box().width - self.action_icons_width()).max(0.0)
    }

    /// Label and icon anchors for a text measured at `text_width` pixels.
    ///
    /// Leaf cells anchor to their content box. Wider group cells keep their
    /// label inside the visible slice of the cell while scrolling.
    fn label_placement(&self, text_width: f64) -> LabelPlacement {
        let ctx = self.ctx();
        let text_align = self.text_style().text_align;
        let content = self.content_box();
        let icon = &ctx.theme.icon;
        let icon_count = self.action_icons_count();

        if self.meta().is_leaf {
            return text_and_following_icon_position(
                &content,
                text_align,
                text_width,
                icon,
                icon_count,
            );
        }

        let range = sticky_text_range(
            ctx.config,
            &content.x_range(),
            text_align,
            &ctx.theme.cell.padding,
            text_width + icon.reserved_width(icon_count),
        );
        sticky_label_position(&range, &content, text_align, text_width, icon, icon_count)
    }

    /// Header-height hotspot spanning corner and viewport, once per row key.
    fn draw_horizontal_resize_area(&self, group: Option<&mut ResizeAreaGroup>) {
        let ctx = self.ctx();
        if ctx.options.col_cfg.hides_header()
            || !ctx
                .options
                .interaction
                .resize
                .allows(ResizeAreaType::ColCellVertical)
        {
            return;
        }
        let Some(group) = group else {
            return;
        };

        // one hotspot per row key, however many cells share the boundary
        let name = self.horizontal_resize_area_name();
        if group.find(&name).is_some() {
            tracing::trace!(name = %name, "resize area already drawn");
            return;
        }

        let meta = self.meta();
        let config = ctx.config;
        let theme = self.resize_area_theme();
        let width = config.corner_width + config.frame_border_width + config.viewport_width;

        group.add(ResizeHotspot {
            name,
            x: 0.0,
            y: meta.y + meta.height - theme.size,
            width: width.max(0.0),
            ..resize_area_attrs(
                theme,
                ResizeAreaAttrs {
                    direction: ResizeDirection::Vertical,
                    effect: ResizeAreaEffect::Field,
                    id: &meta.key,
                    node_id: &meta.id,
                    offset: Point::new(0.0, meta.y),
                    width,
                    height: meta.height,
                },
            )
        });
    }

    /// Column-width hotspot at the trailing edge of a visible leaf cell.
    fn draw_vertical_resize_area(&self, group: Option<&mut ResizeAreaGroup>) {
        let meta = self.meta();
        if !meta.is_leaf
            || !self
                .ctx()
                .options
                .interaction
                .resize
                .allows(ResizeAreaType::ColCellHorizontal)
        {
            return;
        }
        let Some(group) = group else {
            return;
        };
        if !self.should_add_vertical_resize_area() {
            tracing::trace!(node = %meta.id, "column resize area outside clip region");
            return;
        }

        let theme = self.resize_area_theme();
        let offset = self.vertical_resize_area_offset();

        group.add(ResizeHotspot {
            name: format!("{VERTICAL_RESIZE_AREA_KEY_PRE}{}", meta.id),
            x: offset.x + meta.width - theme.size,
            y: offset.y,
            height: meta.height.max(0.0),
            ..resize_area_attrs(
                theme,
                ResizeAreaAttrs {
                    direction: ResizeDirection::Horizontal,
                    effect: ResizeAreaEffect::Cell,
                    id: &meta.label,
                    node_id: &meta.id,
                    offset,
                    width: meta.width,
                    height: meta.height,
                },
            )
        });
    }

    fn draw_resize_area(&self, mut group: Option<&mut ResizeAreaGroup>) {
        self.draw_horizontal_resize_area(group.as_deref_mut());
        self.draw_vertical_resize_area(group);
    }

    fn expand_indicator(&self, detail: &HiddenColumnsDetail) -> Option<ExpandIndicator> {
        let theme = self.ctx().theme;
        expand_column_indicator(
            self.meta(),
            &self.bbox(),
            self.ctx().options,
            detail,
            &theme.icon,
            &theme.split_line,
        )
    }
}
