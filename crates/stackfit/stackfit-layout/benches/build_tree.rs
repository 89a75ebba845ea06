//! Criterion benchmarks for layout tree building.
//!
//! Run: cargo bench -p stackfit-layout --bench build_tree
//!
//! Results show:
//!   classify_*       - single sibling set, flow vs overlay fallback
//!   build_grid_*     - full recursive build for growing tree sizes
//!   build_screen     - mobile screen with header, scrolling feed and tab bar

#![allow(
    clippy::unwrap_used,              // benchmark helpers use unwrap for brevity
    clippy::arithmetic_side_effects,
    clippy::cast_precision_loss,      // small loop counters into f64 coordinates
    clippy::cast_possible_wrap,
    missing_docs,                     // criterion_group! macro generates undocumented items
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stackfit_layout::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Square tree: every container has `fanout` rows, `depth` levels deep.
fn grid(id: &str, y: f64, depth: u32, fanout: u32) -> SourceNode {
    let row_height = 10.0_f64.powi(depth as i32);
    if depth == 0 {
        return SourceNode::new(id, "Label", NodeKind::Text, BoundingBox::new(0.0, y, 100.0, 8.0));
    }
    let children = (0..fanout).map(|i| {
        let child_y = y + f64::from(i) * (row_height + 4.0);
        grid(&format!("{}.{}", id, i), child_y, depth - 1, fanout)
    });
    let height = f64::from(fanout) * (row_height + 4.0);
    SourceNode::container(id, "Section", BoundingBox::new(0.0, y, 100.0, height))
        .with_children(children)
}

fn overlapping(count: u32) -> Vec<SourceNode> {
    (0..count)
        .map(|i| {
            let o = f64::from(i) * 3.0;
            SourceNode::container(format!("l{}", i), "Layer", BoundingBox::new(o, o, 100.0, 100.0))
        })
        .collect()
}

fn feed_screen(cards: u32) -> SourceNode {
    let feed_box = BoundingBox::new(0.0, 60.0, 390.0, f64::from(cards) * 216.0);
    let feed = SourceNode::container("feed", "Feed", feed_box).with_children(
        (0..cards).map(|i| grid(&format!("card{}", i), 60.0 + f64::from(i) * 216.0, 1, 3)),
    );
    SourceNode::container("screen", "Home", BoundingBox::new(0.0, 0.0, 390.0, 844.0))
        .with_children([
            SourceNode::container("head", "Header", BoundingBox::new(0.0, 0.0, 390.0, 56.0)),
            feed,
            SourceNode::container("tabs", "Tab Bar", BoundingBox::new(0.0, 780.0, 390.0, 64.0)),
        ])
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_classify(c: &mut Criterion) {
    let column = grid("col", 0.0, 1, 15);
    c.bench_function("classify_vertical_15", |b| {
        b.iter(|| classify(black_box(&column.children), 1.0));
    });

    let layers = overlapping(15);
    c.bench_function("classify_overlay_15", |b| {
        b.iter(|| classify(black_box(&layers), 1.0));
    });
}

fn bench_build_grid(c: &mut Criterion) {
    let builder = LayoutBuilder::default();
    let mut group = c.benchmark_group("build_grid");

    for depth in [2u32, 3, 4] {
        let root = grid("root", 0.0, depth, 6);
        group.bench_with_input(BenchmarkId::new("depth", depth), &root, |b, root| {
            b.iter(|| builder.build_tree(black_box(root)));
        });
    }
    group.finish();
}

fn bench_build_screen(c: &mut Criterion) {
    let builder = LayoutBuilder::default();
    let root = feed_screen(12);
    assert!(builder.build_tree(&root).root.screen().is_some());

    c.bench_function("build_screen", |b| {
        b.iter(|| builder.build_tree(black_box(&root)));
    });
}

criterion_group!(benches, bench_classify, bench_build_grid, bench_build_screen);
criterion_main!(benches);
