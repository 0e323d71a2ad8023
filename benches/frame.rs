//! Per-frame cost at each tier's particle count.
//!
//! Run with: cargo bench --bench frame

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glowmesh::config::PhysicsConfig;
use glowmesh::render::{draw_connections, draw_nodes, Canvas, DiscFill, FrameBatch, LineStroke};
use glowmesh::{ConnectionStyle, MeshConfig, MeshSimulation, NodeStyle, ParticleField, Rgb, Vec2, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;

const COUNTS: [usize; 4] = [50, 80, 120, 160];

/// Discards everything, so only the mesh math is measured.
struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear(&mut self, _color: Rgb) {}
    fn stroke_line(&mut self, line: &LineStroke) {
        black_box(line);
    }
    fn fill_disc(&mut self, disc: &DiscFill) {
        black_box(disc);
    }
}

fn field(count: usize) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(42);
    ParticleField::scatter(count, Vec2::new(1600.0, 900.0), &mut rng)
}

fn bench_integrate(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate");
    let config = PhysicsConfig::default();

    for count in COUNTS {
        let mut field = field(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                glowmesh::physics::integrate(
                    field.particles_mut(),
                    black_box(Vec2::new(800.0, 450.0)),
                    &config,
                )
            })
        });
    }

    group.finish();
}

fn bench_connections(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_connections");
    let style = ConnectionStyle::default();

    for count in COUNTS {
        let field = field(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| draw_connections(black_box(field.particles()), &style, &mut NullCanvas))
        });
    }

    group.finish();
}

fn bench_nodes(c: &mut Criterion) {
    let field = field(160);
    let style = NodeStyle::default();
    c.bench_function("draw_nodes/160", |b| {
        b.iter(|| draw_nodes(black_box(field.particles()), &style, &mut NullCanvas))
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_batch");

    for (width, count) in [(600.0, 50), (800.0, 80), (1200.0, 120), (1600.0, 160)] {
        let mut sim =
            MeshSimulation::with_seed(MeshConfig::default(), Viewport::new(width, 900.0, 1.0), 42);
        sim.pointer_mut().move_to(Vec2::new(width / 2.0, 450.0));
        let mut batch = FrameBatch::new();

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                batch.reset();
                sim.frame(&mut batch)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_integrate,
    bench_connections,
    bench_nodes,
    bench_full_frame
);
criterion_main!(benches);
