// Copyright 2026 the Carte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use carte_flow::{Direction, DivisionPaths, MergePolicy, Movement, merge_nearby};
use carte_ribbon::{FlowProjection, RibbonConfig, build_ribbon};
use carte_scale::FactorScale;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Two divisions marching east on shared longitude checkpoints, close
/// enough to merge at every stop.
fn synthetic_path(waypoints: usize) -> Vec<Movement> {
    let mut movements = Vec::with_capacity(waypoints * 2);
    for i in 0..waypoints {
        let lng = 23.0 + (i as f64) * (16.0 / waypoints as f64);
        let survivors = 422_000_u64.saturating_sub(i as u64 * 3_000);
        movements.push(Movement::waypoint(
            lng,
            54.6,
            1,
            Direction::Advance,
            survivors,
        ));
        movements.push(Movement::waypoint(
            lng,
            54.8,
            2,
            Direction::Advance,
            survivors / 4,
        ));
    }
    movements
}

fn bench_merge_nearby(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow/merge_nearby");

    // Merge resolution scans the full record set per call; this tracks how
    // that scan scales with campaign size.
    for len in [64_usize, 256, 1024] {
        let movements = synthetic_path(len);
        let policy = MergePolicy::default();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(len),
            &movements,
            |b, movements| {
                let target = &movements[movements.len() / 2];
                b.iter(|| black_box(merge_nearby(movements, target, false, &policy).unwrap()));
            },
        );
    }
    group.finish();
}

fn bench_build_ribbon(c: &mut Criterion) {
    let mut group = c.benchmark_group("ribbon/build");

    for len in [64_usize, 256, 1024] {
        let paths = DivisionPaths::new(&synthetic_path(len));
        let cfg = RibbonConfig {
            merge: MergePolicy::default(),
            width: FactorScale::new([0.0, 422_000.0], [0.0, 7.0]).unwrap(),
        };
        let projection = FlowProjection::default();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &paths, |b, paths| {
            b.iter(|| {
                black_box(build_ribbon(paths, 1, Direction::Advance, &cfg, &projection).unwrap());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_merge_nearby, bench_build_ribbon);
criterion_main!(benches);
