//! Benchmarks for field spawning and the per-frame step.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use neural_field::{DrawList, ParticleField, Vec2};
use rand::{rngs::SmallRng, SeedableRng};

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

fn bench_spawn(c: &mut Criterion) {
    let mut group = c.benchmark_group("spawn");

    for count in [80usize, 400, 2000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut rng = SmallRng::seed_from_u64(1);
            b.iter(|| black_box(ParticleField::new(WIDTH, HEIGHT, count, &mut rng)))
        });
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let pointer = Some(Vec2::new(WIDTH * 0.5, HEIGHT * 0.5));

    for count in [80usize, 400, 2000] {
        group.bench_with_input(BenchmarkId::new("advance", count), &count, |b, &count| {
            let mut rng = SmallRng::seed_from_u64(2);
            let mut field = ParticleField::new(WIDTH, HEIGHT, count, &mut rng);
            b.iter(|| field.advance(black_box(pointer)))
        });

        group.bench_with_input(BenchmarkId::new("draw_list", count), &count, |b, &count| {
            let mut rng = SmallRng::seed_from_u64(2);
            let mut field = ParticleField::new(WIDTH, HEIGHT, count, &mut rng);
            let mut list = DrawList::new();
            b.iter(|| {
                field.frame(black_box(pointer), &mut list);
                black_box(list.batches().len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spawn, bench_frame);
criterion_main!(benches);
