//! Benchmarks for generic-ring matrix multiplication and LU reduction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use quintus_linalg::{lu_classical, Mat};
use quintus_rings::PrimeField;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn random_mat(n: usize, ctx: &PrimeField, rng: &mut ChaCha8Rng) -> Mat<u64> {
    let mut m = Mat::init(n, n, ctx);
    assert!(m.randomize(rng, ctx).is_ok());
    m
}

fn bench_mul_classical(c: &mut Criterion) {
    let f97 = PrimeField::new(97);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut group = c.benchmark_group("mat_mul");

    for size in [8, 16, 32, 64] {
        let a = random_mat(size, &f97, &mut rng);
        let b = random_mat(size, &f97, &mut rng);

        group.bench_with_input(BenchmarkId::new("classical", size), &size, |bench, _| {
            bench.iter(|| {
                let mut res = Mat::init(size, size, &f97);
                black_box(res.mul_classical(&a, &b, &f97))
            });
        });
    }

    group.finish();
}

fn bench_lu_classical(c: &mut Criterion) {
    let f97 = PrimeField::new(97);
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut group = c.benchmark_group("mat_lu");

    for size in [8, 16, 32, 64] {
        let a = random_mat(size, &f97, &mut rng);

        group.bench_with_input(BenchmarkId::new("classical", size), &size, |bench, _| {
            bench.iter(|| {
                let mut lu = Mat::init(size, size, &f97);
                black_box(lu_classical(&mut lu, &a, false, &f97))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mul_classical, bench_lu_classical);
criterion_main!(benches);
