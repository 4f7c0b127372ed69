//! Axis-aligned boxes and points in header space.

use serde::{Deserialize, Serialize};

use super::AreaRange;
use crate::types::Padding;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle. Width and height are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Horizontal extent as an [`AreaRange`].
    pub fn x_range(&self) -> AreaRange {
        AreaRange::new(self.x, self.width)
    }

    /// Box shrunk by `padding` on every side.
    pub fn inset(&self, padding: &Padding) -> Self {
        Self::new(
            self.x + padding.left,
            self.y + padding.top,
            self.width - padding.left - padding.right,
            self.height - padding.top - padding.bottom,
        )
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_clamps_to_zero() {
        let bbox = BBox::new(0.0, 0.0, 10.0, 6.0);
        let padding = Padding {
            top: 4.0,
            right: 8.0,
            bottom: 4.0,
            left: 8.0,
        };
        let content = bbox.inset(&padding);
        assert_eq!(content.x, 8.0);
        assert_eq!(content.y, 4.0);
        assert_eq!(content.width, 0.0);
        assert_eq!(content.height, 0.0);
    }

    #[test]
    fn test_contains_point_is_inclusive() {
        let bbox = BBox::new(10.0, 10.0, 5.0, 5.0);
        assert!(bbox.contains_point(10.0, 15.0));
        assert!(!bbox.contains_point(15.1, 12.0));
    }
}
