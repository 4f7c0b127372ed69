//! Common test utilities and assertion helpers.
//!
//! Builders for header nodes, configs, and themes, plus float assertions
//! with an explicit tolerance.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use pivot_header::{
    CellContext, ColCellTheme, FrozenGroupArea, FrozenPosition, HeaderConfig, HeaderNode,
    HeaderOptions, IconMargin, IconTheme, Padding,
};

/// Tolerance for pixel comparisons.
pub const EPSILON: f64 = 1e-9;

/// Assert two pixel values are equal within [`EPSILON`].
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Assert two pixel values are within `tolerance` of each other.
pub fn assert_within(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

// ============================================================================
// Node Builders
// ============================================================================

/// Leaf column node on the second header row.
pub fn leaf(id: &str, x: f64, width: f64) -> HeaderNode {
    HeaderNode {
        id: id.to_string(),
        key: "city".to_string(),
        field: "city".to_string(),
        label: id.to_string(),
        x,
        y: 30.0,
        width,
        height: 30.0,
        is_leaf: true,
        ..HeaderNode::default()
    }
}

/// Group column node on the first header row.
pub fn group(id: &str, x: f64, width: f64) -> HeaderNode {
    HeaderNode {
        id: id.to_string(),
        key: "region".to_string(),
        field: "region".to_string(),
        label: id.to_string(),
        x,
        y: 0.0,
        width,
        height: 30.0,
        is_leaf: false,
        ..HeaderNode::default()
    }
}

pub fn frozen(mut node: HeaderNode, position: FrozenPosition) -> HeaderNode {
    node.frozen = position;
    node
}

// ============================================================================
// Config Builders
// ============================================================================

/// Header `width` wide, scrolled to `scroll_x`, two rows tall.
pub fn config(scroll_x: f64, width: f64) -> HeaderConfig {
    HeaderConfig {
        scroll_x,
        width,
        viewport_width: width,
        height: 60.0,
        ..HeaderConfig::default()
    }
}

/// Table header with pinned leading and trailing groups.
pub fn pinned_config(
    scroll_x: f64,
    width: f64,
    lead: f64,
    trail_x: f64,
    trail: f64,
) -> HeaderConfig {
    let mut config = config(scroll_x, width);
    config.frozen.col = FrozenGroupArea {
        width: lead,
        ..FrozenGroupArea::default()
    };
    config.frozen.trailing_col = FrozenGroupArea {
        x: trail_x,
        width: trail,
        ..FrozenGroupArea::default()
    };
    config
}

// ============================================================================
// Theme Builders
// ============================================================================

/// Stock theme without cell padding, so content box equals node box.
pub fn flat_theme() -> ColCellTheme {
    let mut theme = ColCellTheme::default();
    theme.cell.padding = Padding::default();
    theme
}

pub fn icon(size: f64, left: f64, right: f64) -> IconTheme {
    IconTheme {
        size,
        margin: IconMargin { left, right },
    }
}

pub fn ctx<'a>(
    config: &'a HeaderConfig,
    theme: &'a ColCellTheme,
    options: &'a HeaderOptions,
) -> CellContext<'a> {
    CellContext {
        config,
        theme,
        options,
    }
}
