//! Benchmarks for vector arithmetic and buffer marshaling.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use boundum::buffer::write_all;
use boundum::{ComponentBuffer, Vec3};

/// Generates random vectors with components in `[-1, 1)`.
fn generate_random_vectors(count: usize, seed: u64) -> Vec<Vec3<f32>> {
    let mut vectors = Vec::with_capacity(count);
    let mut state = seed;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state as f64 / u64::MAX as f64 * 2.0 - 1.0) as f32
    };

    for _ in 0..count {
        vectors.push(Vec3::new(next(), next(), next()));
    }

    vectors
}

fn bench_vector_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_ops");
    let vectors = generate_random_vectors(10000, 12345);
    group.throughput(Throughput::Elements(vectors.len() as u64));

    group.bench_function("normalize", |b| {
        b.iter(|| {
            let mut vs = vectors.clone();
            for v in &mut vs {
                v.normalize();
            }
            black_box(vs)
        })
    });

    group.bench_function("cross_dot", |b| {
        b.iter(|| {
            vectors
                .windows(2)
                .map(|w| w[0].cross(w[1]).dot(w[0]))
                .sum::<f32>()
        })
    });

    group.finish();
}

fn bench_marshal(c: &mut Criterion) {
    let mut group = c.benchmark_group("marshal");
    let vectors = generate_random_vectors(10000, 54321);
    let mut storage = vec![0.0f32; vectors.len() * 3];
    group.throughput(Throughput::Elements(vectors.len() as u64));

    group.bench_function("write_all_vec3", |b| {
        b.iter(|| {
            let mut buffer = ComponentBuffer::new(&mut storage);
            write_all(black_box(&vectors), &mut buffer)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_vector_ops, bench_marshal);
criterion_main!(benches);
