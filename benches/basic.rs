use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ndarray::prelude::*;
use ndarray_mirror_pad::*;
use ndarray_rand::{rand_distr::Uniform, RandomExt};

fn criterion_benchmark(c: &mut Criterion) {
    let x = Array::random((1300, 4000), Uniform::new(0f32, 1.));
    let padding = [[20, 20], [40, 40]];

    c.bench_function("reflect", |b| {
        b.iter(|| x.mirror_pad(MirrorPadMode::Reflect, black_box(&padding)))
    });

    c.bench_function("symmetric", |b| {
        b.iter(|| x.mirror_pad(MirrorPadMode::Symmetric, black_box(&padding)))
    });

    let mut context = MirrorPadContext::new(MirrorPadMode::Reflect);
    let spec = PadSpec::from_pairs(&padding);
    let flat = x.as_slice().unwrap();
    c.bench_function("reflect_reused_context", |b| {
        b.iter(|| context.pad(black_box(flat), &[1300, 4000], &spec))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
