use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use othello_core::board::Board;
use othello_core::perft::{perft, perft_root};
use othello_core::side::Side;

/// Known leaf counts from the 8×8 start position.
const START_8X8_NODES: [(u32, u64); 3] = [(4, 244), (5, 1_396), (6, 8_200)];

/// Board size and the depth benchmarked on it.
const SIZED_RUNS: [(usize, u32); 3] = [(4, 8), (6, 6), (8, 5)];

fn perft_start_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_start_8x8");
    group.sample_size(10);

    for (depth, nodes) in START_8X8_NODES {
        assert_eq!(perft_root(depth), nodes, "leaf count drifted at depth {depth}");
        group.bench_function(BenchmarkId::from_parameter(depth), |b| {
            b.iter(|| black_box(perft_root(black_box(depth))));
        });
    }

    group.finish();
}

fn perft_size_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_by_size");
    group.sample_size(10);

    for (size, depth) in SIZED_RUNS {
        let Ok(board) = Board::new(size, size) else {
            continue;
        };
        group.bench_with_input(
            BenchmarkId::new(format!("{size}x{size}"), depth),
            &board,
            |b, board| b.iter(|| black_box(perft(black_box(board), Side::White, depth))),
        );
    }

    group.finish();
}

criterion_group!(benches, perft_start_benchmark, perft_size_benchmark);
criterion_main!(benches);
