//! Benchmarks for column header layout passes.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pivot_header::{
    layout_col_header, ColHeaderInput, FrozenGroupArea, FrozenPosition, HeaderConfig, HeaderNode,
    MeasuredNode, ResizeLayer, SheetType,
};

const LEAF_WIDTH: f64 = 96.0;
const ROW_HEIGHT: f64 = 30.0;

/// Two-level header: one group per `group_size` leaves.
fn wide_header(leaves: usize, group_size: usize, sheet_type: SheetType) -> ColHeaderInput {
    let mut nodes = Vec::with_capacity(leaves + leaves / group_size + 1);

    for (g, start) in (0..leaves).step_by(group_size).enumerate() {
        let count = group_size.min(leaves - start);
        nodes.push(MeasuredNode {
            node: HeaderNode {
                id: format!("group-{g}"),
                key: "region".into(),
                field: "region".into(),
                label: format!("Region {g}"),
                x: start as f64 * LEAF_WIDTH,
                y: 0.0,
                width: count as f64 * LEAF_WIDTH,
                height: ROW_HEIGHT,
                ..HeaderNode::default()
            },
            text_width: 64.0,
        });
    }

    for i in 0..leaves {
        let frozen = match sheet_type {
            SheetType::Table if i < 2 => FrozenPosition::Head,
            SheetType::Table if i + 2 >= leaves => FrozenPosition::Trailing,
            _ => FrozenPosition::Scrollable,
        };
        nodes.push(MeasuredNode {
            node: HeaderNode {
                id: format!("leaf-{i}"),
                key: "city".into(),
                field: format!("city-{i}"),
                label: format!("City {i}"),
                x: i as f64 * LEAF_WIDTH,
                y: ROW_HEIGHT,
                width: LEAF_WIDTH,
                height: ROW_HEIGHT,
                is_leaf: true,
                frozen,
                ..HeaderNode::default()
            },
            text_width: 48.0,
        });
    }

    let mut config = HeaderConfig {
        scroll_x: leaves as f64 * LEAF_WIDTH / 3.0,
        width: 1280.0,
        viewport_width: 1280.0,
        height: ROW_HEIGHT * 2.0,
        corner_width: 160.0,
        ..HeaderConfig::default()
    };
    if sheet_type == SheetType::Table {
        config.frozen.col = FrozenGroupArea {
            width: LEAF_WIDTH * 2.0,
            ..FrozenGroupArea::default()
        };
        config.frozen.trailing_col = FrozenGroupArea {
            x: (leaves - 2) as f64 * LEAF_WIDTH,
            width: LEAF_WIDTH * 2.0,
            ..FrozenGroupArea::default()
        };
    }

    ColHeaderInput {
        sheet_type,
        nodes,
        config,
        ..ColHeaderInput::default()
    }
}

/// Benchmark a single pass over a typical screenful of columns
fn bench_screenful(c: &mut Criterion) {
    let input = wide_header(40, 4, SheetType::Pivot);
    let mut layer = ResizeLayer::mounted();

    c.bench_function("layout_pivot_40", |b| {
        b.iter(|| layout_col_header(black_box(&input), &mut layer))
    });
}

/// Compare pivot and table passes across header widths
fn bench_header_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("header_width_comparison");

    for leaves in [100, 1_000, 10_000] {
        for (name, sheet_type) in [("pivot", SheetType::Pivot), ("table", SheetType::Table)] {
            let input = wide_header(leaves, 8, sheet_type);
            let mut layer = ResizeLayer::mounted();

            group.throughput(Throughput::Elements(input.nodes.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, leaves), &input, |b, input| {
                b.iter(|| layout_col_header(black_box(input), &mut layer))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_screenful, bench_header_widths);

criterion_main!(benches);
