//! One-dimensional interval arithmetic.
//!
//! Every horizontal computation in the header engine (viewport slices,
//! content boxes, text and icon spans) is expressed as an [`AreaRange`].

use serde::{Deserialize, Serialize};

/// Placement policy for a span inside a containing range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// Closed interval `[start, start + width]`.
///
/// Constructors clamp negative widths to zero, so an `AreaRange` is never
/// inverted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaRange {
    pub start: f64,
    pub width: f64,
}

impl AreaRange {
    pub fn new(start: f64, width: f64) -> Self {
        Self {
            start,
            width: width.max(0.0),
        }
    }

    /// Range spanning `start..end` (empty when `end < start`).
    pub fn from_bounds(start: f64, end: f64) -> Self {
        Self::new(start, end - start)
    }

    pub fn end(&self) -> f64 {
        self.start + self.width
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0
    }

    /// True when the two ranges share at least one point.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end() && other.start <= self.end()
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Self) -> bool {
        other.start >= self.start && other.end() <= self.end()
    }

    pub fn contains_point(&self, value: f64) -> bool {
        value >= self.start && value <= self.end()
    }

    /// Sub-range of `self` bounded by `bounds`.
    ///
    /// Disjoint ranges produce an empty range sitting on the edge of `self`
    /// closest to `bounds`.
    pub fn clip(&self, bounds: &Self) -> Self {
        let lo = self.start.max(bounds.start);
        let hi = self.end().min(bounds.end());
        if hi <= lo {
            return Self::new(lo.min(self.end()), 0.0);
        }
        Self::from_bounds(lo, hi)
    }

    /// Start coordinate of a span of `span` pixels placed inside `self`.
    ///
    /// Centering rounds the half slack toward zero, so odd slack lands on the
    /// pixel nearest `self.start` whether the span fits or overflows. Spans
    /// wider than `self` overflow on the side opposite to the alignment edge.
    pub fn align_span(&self, span: f64, align: Align) -> f64 {
        let span = span.max(0.0);
        match align {
            Align::Start => self.start,
            Align::Center => self.start + ((self.width - span) / 2.0).trunc(),
            Align::End => self.end() - span,
        }
    }

    /// Grow `self` to at least `span` pixels, then slide it so it stays
    /// inside `bounds`. When `span` exceeds `bounds` the result is pinned to
    /// `bounds.start`.
    pub fn fit_within(&self, span: f64, bounds: &Self) -> Self {
        let width = self.width.max(span);
        let max_start = bounds.end() - width;
        let start = self.start.min(max_start).max(bounds.start);
        Self::new(start, width)
    }

    /// Mirror the range around `axis`.
    pub fn reflect(&self, axis: f64) -> Self {
        Self::new(2.0 * axis - self.end(), self.width)
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
    use test_case::test_case;

    #[test]
    fn test_negative_width_clamped() {
        let range = AreaRange::new(10.0, -5.0);
        assert_eq!(range.width, 0.0);
        assert!(range.is_empty());
        assert_eq!(AreaRange::from_bounds(20.0, 10.0).width, 0.0);
    }

    #[test]
    fn test_overlap_and_containment() {
        let outer = AreaRange::new(0.0, 100.0);
        let inner = AreaRange::new(20.0, 30.0);
        let straddling = AreaRange::new(90.0, 30.0);
        let outside = AreaRange::new(150.0, 10.0);

        assert!(outer.overlaps(&inner));
        assert!(outer.contains(&inner));
        assert!(outer.overlaps(&straddling));
        assert!(!outer.contains(&straddling));
        assert!(!outer.overlaps(&outside));
        assert!(outer.contains_point(100.0));
    }

    #[test]
    fn test_clip_partial() {
        let a = AreaRange::new(50.0, 100.0);
        let b = AreaRange::new(0.0, 120.0);
        assert_eq!(a.clip(&b), AreaRange::new(50.0, 70.0));
        assert_eq!(b.clip(&a), AreaRange::new(50.0, 70.0));
    }

    #[test]
    fn test_clip_disjoint_is_empty_on_nearest_edge() {
        let left = AreaRange::new(0.0, 10.0);
        let right = AreaRange::new(50.0, 10.0);

        let clipped = left.clip(&right);
        assert!(clipped.is_empty());
        assert_eq!(clipped.start, 10.0);

        let clipped = right.clip(&left);
        assert!(clipped.is_empty());
        assert_eq!(clipped.start, 50.0);
    }

    #[test_case(Align::Start, 10.0 ; "start")]
    #[test_case(Align::Center, 37.0 ; "center rounds toward start")]
    #[test_case(Align::End, 65.0 ; "end")]
    fn test_align_span(align: Align, expected: f64) {
        // slack = 55, half = 27.5 -> 27
        let range = AreaRange::new(10.0, 100.0);
        assert_eq!(range.align_span(45.0, align), expected);
    }

    #[test_case(30.0, 81.0, -25.0 ; "oversized odd slack")]
    #[test_case(30.0, 80.0, -25.0 ; "oversized even slack")]
    #[test_case(30.0, 31.0, 0.0 ; "one pixel over")]
    fn test_align_span_center_overflow(width: f64, span: f64, offset: f64) {
        let range = AreaRange::new(100.0, width);
        assert_eq!(range.align_span(span, Align::Center), 100.0 + offset);
    }

    #[test]
    fn test_align_span_is_exact_for_even_slack() {
        let range = AreaRange::new(0.0, 300.0);
        assert_eq!(range.align_span(60.0, Align::Center), 120.0);
    }

    #[test]
    fn test_fit_within_slides_into_bounds() {
        let bounds = AreaRange::new(0.0, 200.0);

        let narrow = AreaRange::new(180.0, 10.0);
        assert_eq!(narrow.fit_within(50.0, &bounds), AreaRange::new(150.0, 50.0));

        let wide_enough = AreaRange::new(20.0, 80.0);
        assert_eq!(wide_enough.fit_within(50.0, &bounds), wide_enough);

        let too_big = AreaRange::new(10.0, 10.0);
        assert_eq!(too_big.fit_within(300.0, &bounds).start, 0.0);
    }

    #[test]
    fn test_reflect() {
        let range = AreaRange::new(10.0, 20.0);
        assert_eq!(range.reflect(50.0), AreaRange::new(70.0, 20.0));
    }
}
