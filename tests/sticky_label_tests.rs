//! Sticky label and icon anchor tests
//!
//! Tests for label placement of group cells while the header scrolls, and of
//! leaf cells inside their own content box.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{assert_close, assert_within, config, ctx, flat_theme, group, icon, leaf};
use pivot_header::cell::{sticky_label_position, text_and_following_icon_position};
use pivot_header::layout::sticky_text_range;
use pivot_header::{
    AreaRange, BBox, ColCellTheme, HeaderCell, HeaderOptions, PivotColumnCell, TextAlign,
};
use test_case::test_case;

fn themed(align: TextAlign) -> ColCellTheme {
    let mut theme = flat_theme();
    theme.text.text_align = align;
    theme.bolder_text.text_align = align;
    theme
}

// ============================================================================
// Anchor Resolver
// ============================================================================

#[test]
fn test_left_text_then_icon_in_full_range() {
    let range = AreaRange::new(0.0, 300.0);
    let content = BBox::new(0.0, 0.0, 300.0, 30.0);
    let placement =
        sticky_label_position(&range, &content, TextAlign::Left, 40.0, &icon(16.0, 4.0, 0.0), 1);

    assert_close(placement.text.x, 0.0);
    assert_close(placement.icon.unwrap().x, 44.0);
}

#[test]
fn test_right_icon_then_text() {
    let range = AreaRange::new(0.0, 300.0);
    let content = BBox::new(0.0, 0.0, 300.0, 30.0);
    let icon = icon(16.0, 4.0, 0.0);
    let placement = sticky_label_position(&range, &content, TextAlign::Right, 40.0, &icon, 1);

    let icon_x = placement.icon.unwrap().x;
    // the icon box ends before the text starts
    assert!(icon_x + icon.size <= placement.text_span.start);
    assert_close(placement.text_span.start, 240.0 + 20.0);
    assert_close(placement.text_span.end(), 300.0);
}

#[test_case(TextAlign::Left ; "left")]
#[test_case(TextAlign::Center ; "center")]
#[test_case(TextAlign::Right ; "right")]
fn test_text_never_overlaps_icon(align: TextAlign) {
    let range = AreaRange::new(13.0, 271.0);
    let content = BBox::new(0.0, 0.0, 400.0, 30.0);
    let icon = icon(12.0, 3.0, 5.0);
    let placement = sticky_label_position(&range, &content, align, 57.0, &icon, 2);

    let span = placement.text_span;
    for p in placement.icon_positions(&icon, 2) {
        let icon_span = AreaRange::new(p.x, icon.size);
        assert!(
            !(icon_span.start < span.end() && icon_span.end() > span.start),
            "{align:?}: icon {icon_span:?} overlaps text {span:?}"
        );
    }
}

#[test_case(TextAlign::Left, TextAlign::Right ; "left mirrors right")]
#[test_case(TextAlign::Center, TextAlign::Center ; "center mirrors center")]
fn test_mirrored_range_reflects_text(align: TextAlign, mirrored: TextAlign) {
    let axis = 500.0;
    let range = AreaRange::new(37.0, 214.0);
    let content = BBox::new(0.0, 0.0, 1000.0, 30.0);
    let icon = icon(16.0, 4.0, 0.0);

    let placement = sticky_label_position(&range, &content, align, 40.0, &icon, 1);
    let reflected = sticky_label_position(
        &range.reflect(axis),
        &content,
        mirrored,
        40.0,
        &icon,
        1,
    );

    let expected = placement.text_span.reflect(axis);
    assert_within(reflected.text_span.start, expected.start, 1.0);
    assert_within(reflected.text_span.end(), expected.end(), 1.0);
}

#[test]
fn test_overflowing_block_is_not_truncated() {
    let range = AreaRange::new(100.0, 30.0);
    let content = BBox::new(0.0, 0.0, 400.0, 30.0);
    let icon = icon(16.0, 4.0, 0.0);

    let left = sticky_label_position(&range, &content, TextAlign::Left, 40.0, &icon, 1);
    assert_close(left.text.x, 100.0);
    assert_close(left.text_span.width, 40.0);

    let right = sticky_label_position(&range, &content, TextAlign::Right, 40.0, &icon, 1);
    assert_close(right.text.x, range.end());
    assert_close(right.text_span.width, 40.0);
}

#[test]
fn test_leaf_right_aligned_text_gives_up_icon_width() {
    let content = BBox::new(100.0, 30.0, 200.0, 30.0);
    let icon = icon(10.0, 4.0, 4.0);
    let placement = text_and_following_icon_position(&content, TextAlign::Right, 40.0, &icon, 1);

    // reserved width 10 + 4 + 4
    assert_close(placement.text.x, 282.0);
    assert_close(placement.text_span.start, 242.0);
    assert_close(placement.icon.unwrap().x, 286.0);
    assert_close(placement.icon.unwrap().y, 45.0 - 5.0);
}

#[test]
fn test_leaf_icons_follow_text() {
    let content = BBox::new(100.0, 0.0, 200.0, 30.0);
    let icon = icon(10.0, 4.0, 4.0);
    let placement = text_and_following_icon_position(&content, TextAlign::Left, 40.0, &icon, 2);

    let xs: Vec<f64> = placement.icon_positions(&icon, 2).iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![144.0, 158.0]);
}

#[test]
fn test_no_icons_no_icon_anchor() {
    let content = BBox::new(0.0, 0.0, 200.0, 30.0);
    let placement = text_and_following_icon_position(
        &content,
        TextAlign::Center,
        40.0,
        &icon(10.0, 4.0, 4.0),
        0,
    );
    assert!(placement.icon.is_none());
    assert_close(placement.text.x, 100.0);
}

// ============================================================================
// Sticky Group Cells
// ============================================================================

#[test_case(TextAlign::Left ; "left")]
#[test_case(TextAlign::Center ; "center")]
#[test_case(TextAlign::Right ; "right")]
fn test_group_label_stays_inside_its_cell(align: TextAlign) {
    let node = group("east", 0.0, 900.0);
    let theme = themed(align);
    let options = HeaderOptions::default();

    for scroll_x in [-200.0, 0.0, 150.0, 420.0, 700.0, 850.0, 880.0, 1200.0] {
        let cfg = config(scroll_x, 400.0);
        let cell = PivotColumnCell::new(&node, ctx(&cfg, &theme, &options));
        let span = cell.label_placement(60.0).text_span;
        assert!(
            span.start >= 0.0 && span.end() <= 900.0,
            "{align:?} at scroll {scroll_x}: {span:?} escapes the cell"
        );
    }
}

#[test_case(TextAlign::Left, 300.0 ; "left sticks to viewport start")]
#[test_case(TextAlign::Center, 500.0 ; "center sticks to viewport center")]
#[test_case(TextAlign::Right, 700.0 ; "right sticks to viewport end")]
fn test_group_label_follows_viewport(align: TextAlign, expected_x: f64) {
    let node = group("east", 0.0, 900.0);
    let theme = themed(align);
    let options = HeaderOptions::default();
    let cfg = config(300.0, 400.0);

    let cell = PivotColumnCell::new(&node, ctx(&cfg, &theme, &options));
    assert_close(cell.label_placement(60.0).text.x, expected_x);
}

#[test]
fn test_group_label_keeps_padding_inset_at_viewport_edge() {
    let node = group("east", 0.0, 900.0);
    let mut theme = ColCellTheme::default();
    theme.bolder_text.text_align = TextAlign::Left;
    let options = HeaderOptions::default();
    let cfg = config(300.0, 400.0);

    let cell = PivotColumnCell::new(&node, ctx(&cfg, &theme, &options));
    assert_close(
        cell.label_placement(60.0).text.x,
        300.0 + theme.cell.padding.left,
    );
}

#[test]
fn test_group_label_pushed_back_at_cell_end() {
    let node = group("east", 0.0, 900.0);
    let theme = themed(TextAlign::Left);
    let options = HeaderOptions::default();
    let cfg = config(850.0, 400.0);

    // only 50px of the cell are visible; the 60px label slides back inside
    let cell = PivotColumnCell::new(&node, ctx(&cfg, &theme, &options));
    let placement = cell.label_placement(60.0);
    assert_close(placement.text.x, 840.0);
    assert_close(placement.text_span.end(), 900.0);
}

#[test]
fn test_corner_scrolls_with_cells() {
    let node = group("east", 0.0, 900.0);
    let theme = themed(TextAlign::Left);
    let mut cfg = config(300.0, 400.0);
    cfg.corner_width = 120.0;
    cfg.scroll_contains_row_header = true;

    let range = sticky_text_range(
        &cfg,
        &node.bbox().x_range(),
        TextAlign::Left,
        &theme.cell.padding,
        60.0,
    );
    assert_close(range.start, 180.0);
}

#[test]
fn test_label_placement_is_idempotent() {
    let node = group("east", 0.0, 900.0);
    let leaf_node = leaf("a", 0.0, 150.0);
    let theme = ColCellTheme::default();
    let mut options = HeaderOptions::default();
    options.show_default_header_action_icon = true;
    let cfg = config(417.0, 333.0);

    for node in [&node, &leaf_node] {
        let cell = PivotColumnCell::new(node, ctx(&cfg, &theme, &options));
        assert_eq!(cell.label_placement(73.0), cell.label_placement(73.0));
    }
}
