//! Criterion benches for maze tracing (group "trace").
//!
//! - Validation of a generated grid into a `PositionMap`.
//! - Full trace with the stack engine and the recursive reference engine.
//!
//! Grids come from fixed replay tokens so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pathtrace::api::*;

fn workset(rows: usize, cols: usize, max_len: usize) -> Vec<Grid> {
    let cfg = WalkCfg {
        rows,
        cols,
        max_len,
        letter_prob: 0.1,
    };
    (0..16)
        .map(|index| draw_walk_grid(cfg, ReplayToken { seed: 2024, index }))
        .collect()
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace");
    let grids = workset(32, 32, 256);
    group.throughput(Throughput::Elements(grids.len() as u64));
    group.bench_function("validate_32x32", |b| {
        b.iter(|| {
            let mut cells = 0usize;
            for g in &grids {
                if let Ok(map) = validate(black_box(g), RowWidth::FirstRow) {
                    cells = cells.wrapping_add(map.len());
                }
            }
            cells
        })
    });
    group.finish();
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace");
    for &(side, len) in &[(16usize, 64usize), (32, 256)] {
        let grids = workset(side, side, len);
        group.throughput(Throughput::Elements(grids.len() as u64));
        for engine in [Engine::Stack, Engine::Recursive] {
            let cfg = TraceCfg {
                engine,
                ..TraceCfg::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{engine:?}"), side),
                &grids,
                |b, grids| {
                    b.iter(|| {
                        let mut steps = 0usize;
                        for g in grids {
                            if let Ok(t) = trace_path_with(black_box(g), cfg) {
                                steps = steps.wrapping_add(t.positions.len());
                            }
                        }
                        steps
                    })
                },
            );
        }
    }
    group.finish();
}

fn trace_benches(c: &mut Criterion) {
    bench_validate(c);
    bench_engines(c);
}

criterion_group!(benches, trace_benches);
criterion_main!(benches);
