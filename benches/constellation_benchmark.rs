/*
 * Constellation Benchmark
 *
 * Measures the per-frame cost of the link scan (brute force against the
 * spatial grid) and of a full scene frame, for growing particle counts.
 */

use std::time::Duration;

use constellations::{
    ConnectionGraph, DisplayList, LinkStrategy, Particle, ParticleField, Scene, SimulationParams, Surface,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WIDTH: f32 = 1920.0;
const HEIGHT: f32 = 1080.0;

fn random_particles(n: usize) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(n as u64);
    let color = SimulationParams::default().particle_color;
    (0..n)
        .map(|_| {
            Particle::new(
                vec2(rng.gen_range(0.0..WIDTH), rng.gen_range(0.0..HEIGHT)),
                vec2(rng.gen_range(0.0..0.25), rng.gen_range(0.0..0.7)),
                0.0,
                color,
            )
        })
        .collect()
}

// Benchmark the pairwise link scan with both strategies
fn bench_links(c: &mut Criterion) {
    let mut group = c.benchmark_group("links");
    let surface = Surface::new(WIDTH, HEIGHT).unwrap();
    let params = SimulationParams::default();

    for num_particles in [100, 230, 500, 1000].iter() {
        let particles = random_particles(*num_particles);

        for strategy in [LinkStrategy::BruteForce, LinkStrategy::SpatialGrid] {
            let graph = ConnectionGraph::new(params.particle_color, params.accent_color)
                .with_strategy(strategy);
            let id = BenchmarkId::new(format!("{:?}", strategy), num_particles);

            group.bench_with_input(id, &particles, |b, particles| {
                let mut list = DisplayList::new();
                b.iter(|| {
                    list.clear();
                    black_box(graph.evaluate(particles, &surface, &mut list));
                });
            });
        }
    }

    group.finish();
}

// Benchmark a full frame: update, draw and connect
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let surface = Surface::new(WIDTH, HEIGHT).unwrap();
    let params = SimulationParams::default();

    for num_particles in [100, 230, 500].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_particles),
            num_particles,
            |b, &n| {
                let field = ParticleField::from_particles(random_particles(n), params.particle_color);
                let graph = ConnectionGraph::new(params.particle_color, params.accent_color);
                let mut scene = Scene::with_field(surface, field, graph);
                scene.pointer_moved(vec2(WIDTH / 2.0, HEIGHT / 2.0));

                b.iter(|| black_box(scene.frame()));
            },
        );
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_links, bench_frame
}

criterion_main!(benches);
