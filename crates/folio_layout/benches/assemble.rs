//! Render plan assembly benchmarks
//!
//! Run with:
//!   cargo bench -p folio_layout --bench assemble

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use folio_layout::{assemble, BackgroundSpec, ColumnSlot, ContentBlock, FloatDirection, GridSpan, Layout, LayoutConfig};
use std::hint::black_box;

fn section(count: usize) -> Vec<ContentBlock> {
    (0..count)
        .map(|i| {
            let mut block = ContentBlock::new(format!("block-{i}"), "text", "paragraph").with_order((count - i) as i64 % 7);
            block.grid_span = match i % 4 {
                0 => GridSpan::Two,
                1 => GridSpan::Full,
                _ => GridSpan::One,
            };
            block.float_direction = if i % 3 == 0 { FloatDirection::Right } else { FloatDirection::None };
            block.column_assignment = ColumnSlot::ALL[i % 3];
            block.background_color = BackgroundSpec::classify(if i % 2 == 0 { "#f5f5f5" } else { "accent-panel" });
            block.enabled = i % 11 != 0;
            block
        })
        .collect()
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    for &count in &[10usize, 100, 1000] {
        let blocks = section(count);
        group.throughput(Throughput::Elements(count as u64));
        for layout in [Layout::Grid, Layout::FlexColumns, Layout::FloatColumns] {
            let config = LayoutConfig::new(layout);
            group.bench_with_input(BenchmarkId::new(layout.as_str(), count), &blocks, |b, blocks| {
                b.iter(|| assemble(black_box(blocks), black_box(&config)))
            });
        }
    }
    group.finish();
}

fn bench_rows(c: &mut Criterion) {
    let plan = assemble(&section(1000), &LayoutConfig::new(Layout::Grid));
    c.bench_function("rows/grid/1000", |b| b.iter(|| black_box(&plan).rows().len()));
}

criterion_group!(benches, bench_assemble, bench_rows);
criterion_main!(benches);
