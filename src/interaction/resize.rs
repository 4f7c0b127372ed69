//! Resize hotspots: hit regions for dragging column widths and header
//! heights.
//!
//! Hotspots are recreated on every layout pass. They live in named groups
//! owned by a [`ResizeLayer`]; a layer that is not mounted hands out no
//! groups, which turns hotspot creation into a no-op.

use serde::{Deserialize, Serialize};

use crate::layout::{BBox, Point};
use crate::types::ResizeAreaTheme;

/// Group holding the column header's hotspots.
pub const KEY_GROUP_COL_RESIZE_AREA: &str = "colResizeArea";
/// Name prefix of header-height hotspots (one per row key).
pub const HORIZONTAL_RESIZE_AREA_KEY_PRE: &str = "horizontal-resize-area-";
/// Name prefix of column-width hotspots (one per leaf cell).
pub const VERTICAL_RESIZE_AREA_KEY_PRE: &str = "vertical-resize-area-";

/// Axis a drag on the hotspot changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeDirection {
    /// Dragging changes a width; the hotspot is a thin vertical strip
    Horizontal,
    /// Dragging changes a height; the hotspot is a thin horizontal strip
    Vertical,
}

/// How far a resize spreads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeAreaEffect {
    /// Every cell sharing the field
    Field,
    /// Only the owning cell
    Cell,
}

/// A named, axis-aligned hit region in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeHotspot {
    /// Deduplication key within a pass
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub direction: ResizeDirection,
    pub effect: ResizeAreaEffect,
    /// Opaque id telling the input layer what to resize
    pub id: String,
    /// Node that produced the hotspot
    pub node_id: String,
    /// Canvas origin of the owning cell
    pub offset: Point,
    /// Size of the owning cell (or header strip) being resized
    pub cell_width: f64,
    pub cell_height: f64,
}

impl ResizeHotspot {
    pub fn bbox(&self) -> BBox {
        BBox::new(self.x, self.y, self.width, self.height)
    }
}

/// Arguments for [`resize_area_attrs`].
#[derive(Debug, Clone, Copy)]
pub struct ResizeAreaAttrs<'a> {
    pub direction: ResizeDirection,
    pub effect: ResizeAreaEffect,
    pub id: &'a str,
    pub node_id: &'a str,
    pub offset: Point,
    pub width: f64,
    pub height: f64,
}

/// Base hotspot at the origin: `size` thick across the resized axis and as
/// long as the cell along the other one. Callers move it into place.
pub fn resize_area_attrs(theme: &ResizeAreaTheme, attrs: ResizeAreaAttrs<'_>) -> ResizeHotspot {
    let size = theme.size.max(0.0);
    let (width, height) = match attrs.direction {
        ResizeDirection::Horizontal => (size, attrs.height),
        ResizeDirection::Vertical => (attrs.width, size),
    };
    ResizeHotspot {
        name: String::new(),
        x: 0.0,
        y: 0.0,
        width: width.max(0.0),
        height: height.max(0.0),
        direction: attrs.direction,
        effect: attrs.effect,
        id: attrs.id.to_string(),
        node_id: attrs.node_id.to_string(),
        offset: attrs.offset,
        cell_width: attrs.width,
        cell_height: attrs.height,
    }
}

/// Whether `area` still intersects `clip` once the scroll offset is applied.
///
/// Touching edges count as intersecting.
pub fn should_add_resize_area(area: &BBox, clip: &BBox, scroll_x: f64, scroll_y: f64) -> bool {
    let overlap_x =
        !(area.x - scroll_x > clip.right() || area.right() - scroll_x < clip.x);
    let overlap_y =
        !(area.y - scroll_y > clip.bottom() || area.bottom() - scroll_y < clip.y);
    overlap_x && overlap_y
}

/// A named collection of hotspots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResizeAreaGroup {
    id: String,
    hotspots: Vec<ResizeHotspot>,
}

impl ResizeAreaGroup {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hotspots: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn find(&self, name: &str) -> Option<&ResizeHotspot> {
        self.hotspots.iter().find(|h| h.name == name)
    }

    pub fn add(&mut self, hotspot: ResizeHotspot) {
        self.hotspots.push(hotspot);
    }

    pub fn hotspots(&self) -> &[ResizeHotspot] {
        &self.hotspots
    }

    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    pub fn clear(&mut self) {
        self.hotspots.clear();
    }

    /// Topmost hotspot containing `(x, y)`; later hotspots sit on top.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&ResizeHotspot> {
        self.hotspots
            .iter()
            .rev()
            .find(|h| h.bbox().contains_point(x, y))
    }
}

/// The interactive foreground that owns the resize groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResizeLayer {
    mounted: bool,
    groups: Vec<ResizeAreaGroup>,
}

impl ResizeLayer {
    /// A layer ready to receive hotspots.
    pub fn mounted() -> Self {
        Self {
            mounted: true,
            groups: Vec::new(),
        }
    }

    /// A layer whose interactive foreground is not initialized yet.
    pub fn unmounted() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    pub fn group(&self, id: &str) -> Option<&ResizeAreaGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// The group named `id`, created on first use. `None` while unmounted.
    pub fn get_or_create_group(&mut self, id: &str) -> Option<&mut ResizeAreaGroup> {
        if !self.mounted {
            tracing::debug!(group = id, "resize layer not mounted, skipping");
            return None;
        }
        let index = match self.groups.iter().position(|g| g.id == id) {
            Some(index) => index,
            None => {
                self.groups.push(ResizeAreaGroup::new(id));
                self.groups.len() - 1
            }
        };
        self.groups.get_mut(index)
    }

    /// Drop the hotspots of every group, keeping the groups.
    pub fn clear(&mut self) {
        for group in &mut self.groups {
            group.clear();
        }
    }

    /// Topmost hotspot at `(x, y)` across all groups.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&ResizeHotspot> {
        self.groups.iter().rev().find_map(|g| g.hit_test(x, y))
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

    fn hotspot(name: &str, x: f64) -> ResizeHotspot {
        ResizeHotspot {
            name: name.to_string(),
            x,
            ..resize_area_attrs(
                &ResizeAreaTheme::default(),
                ResizeAreaAttrs {
                    direction: ResizeDirection::Horizontal,
                    effect: ResizeAreaEffect::Cell,
                    id: "id",
                    node_id: "node",
                    offset: Point::default(),
                    width: 100.0,
                    height: 30.0,
                },
            )
        }
    }

    #[test]
    fn test_attrs_thickness_follows_direction() {
        let theme = ResizeAreaTheme::default();
        let attrs = ResizeAreaAttrs {
            direction: ResizeDirection::Vertical,
            effect: ResizeAreaEffect::Field,
            id: "k",
            node_id: "n",
            offset: Point::default(),
            width: 500.0,
            height: 30.0,
        };
        let vertical = resize_area_attrs(&theme, attrs);
        assert_eq!((vertical.width, vertical.height), (500.0, 3.0));

        let horizontal = resize_area_attrs(
            &theme,
            ResizeAreaAttrs {
                direction: ResizeDirection::Horizontal,
                ..attrs
            },
        );
        assert_eq!((horizontal.width, horizontal.height), (3.0, 30.0));
    }

    #[test]
    fn test_should_add_resize_area() {
        let clip = BBox::new(0.0, 0.0, 200.0, 30.0);
        let area = BBox::new(597.0, 0.0, 3.0, 30.0);
        assert!(should_add_resize_area(&area, &clip, 450.0, 0.0));
        assert!(!should_add_resize_area(&area, &clip, 0.0, 0.0));
        assert!(!should_add_resize_area(&area, &clip, 700.0, 0.0));
        // touching the clip edge still counts
        assert!(should_add_resize_area(&area, &clip, 397.0, 0.0));
    }

    #[test]
    fn test_find_by_name() {
        let mut group = ResizeAreaGroup::new(KEY_GROUP_COL_RESIZE_AREA);
        group.add(hotspot("a", 0.0));
        group.add(hotspot("b", 20.0));
        assert_eq!(group.id(), KEY_GROUP_COL_RESIZE_AREA);
        assert_eq!(group.find("b").unwrap().x, 20.0);
        assert!(group.find("c").is_none());
    }

    #[test]
    fn test_hit_test_prefers_last_added() {
        let mut group = ResizeAreaGroup::new("g");
        group.add(hotspot("first", 10.0));
        group.add(hotspot("second", 11.0));
        assert_eq!(group.hit_test(12.0, 5.0).unwrap().name, "second");
        assert_eq!(group.hit_test(10.5, 5.0).unwrap().name, "first");
        assert!(group.hit_test(50.0, 5.0).is_none());
    }

    #[test]
    fn test_unmounted_layer_hands_out_nothing() {
        let mut layer = ResizeLayer::unmounted();
        assert!(layer.get_or_create_group(KEY_GROUP_COL_RESIZE_AREA).is_none());

        layer.mount();
        let group = layer.get_or_create_group(KEY_GROUP_COL_RESIZE_AREA).unwrap();
        group.add(hotspot("a", 0.0));
        assert_eq!(layer.group(KEY_GROUP_COL_RESIZE_AREA).unwrap().len(), 1);

        layer.clear();
        assert!(layer.group(KEY_GROUP_COL_RESIZE_AREA).unwrap().is_empty());
    }
}
