//! Benchmarks for the per-frame CPU work.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use driftfield::links::links;
use driftfield::prelude::*;

fn bench_link_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("link_scan");

    // The scan is quadratic; these show how fast it grows past the default 100.
    for count in [100usize, 250, 500, 1000] {
        let mut spawn = SpawnContext::seeded(count as u64);
        let config = Config::default().with_particle_count(count);
        let sim = Simulation::new(config, SurfaceDimensions::new(1920, 1080), &mut spawn);

        group.bench_with_input(BenchmarkId::from_parameter(count), &sim, |b, sim| {
            b.iter(|| black_box(links(sim.particles().as_slice(), 120.0).count()))
        });
    }

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut spawn = SpawnContext::seeded(1);
    let mut sim = Simulation::new(Config::default(), SurfaceDimensions::new(1920, 1080), &mut spawn);
    sim.field_mut().pointer_moved(Vec2::new(960.0, 540.0));
    let mut batch = FrameBatch::new();

    c.bench_function("tick_default", |b| b.iter(|| black_box(sim.tick(&mut batch))));
}

criterion_group!(benches, bench_link_scan, bench_tick);
criterion_main!(benches);
