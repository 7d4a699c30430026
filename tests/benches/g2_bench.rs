use blscore_algorithms::{Fp12, Fp2, G2Point, G2};
use blscore_tests::{random_points, random_scalar, seeded_rng};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigUint;

fn bench_field(c: &mut Criterion) {
    let mut rng = seeded_rng(1);
    let a = Fp2::random(&mut rng);
    let b = Fp2::random(&mut rng);
    let x = Fp12::random(&mut rng);
    let y = Fp12::random(&mut rng);

    let mut group = c.benchmark_group("field");
    group.bench_function("Fp2 mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    group.bench_function("Fp2 sqrt", |bench| bench.iter(|| black_box(a).sqrt()));
    group.bench_function("Fp12 mul", |bench| bench.iter(|| black_box(x) * black_box(y)));
    group.bench_function("Fp12 inverse", |bench| bench.iter(|| black_box(x).inverse()));
    group.finish();
}

fn bench_scalar_mul(c: &mut Criterion) {
    let mut rng = seeded_rng(2);
    let mut g2 = G2::new();
    let p = G2Point::random(&mut rng);
    let e = random_scalar(&mut rng, 32);
    let h_eff = g2.params().h_eff.clone();

    let mut group = c.benchmark_group("G2 scalar multiplication");
    group.bench_function("double-and-add", |b| b.iter(|| g2.mul_scalar(&p, &e)));
    group.bench_function("wNAF", |b| b.iter(|| g2.wnaf_mul(&p, &e)));
    group.bench_function("clear cofactor (wNAF)", |b| b.iter(|| g2.wnaf_mul(&p, &h_eff)));
    group.finish();
}

fn bench_multi_exp(c: &mut Criterion) {
    let mut rng = seeded_rng(3);
    let mut g2 = G2::new();

    let mut group = c.benchmark_group("G2 multi-exponentiation");
    group.sample_size(10);
    for size in [4usize, 16, 64].iter() {
        let points = random_points(&mut rng, *size);
        let scalars: Vec<BigUint> = (0..*size).map(|_| random_scalar(&mut rng, 32)).collect();

        group.bench_with_input(BenchmarkId::new("Pippenger", size), size, |b, _| {
            b.iter(|| g2.multi_exp(&points, &scalars))
        });
        group.bench_with_input(BenchmarkId::new("naive", size), size, |b, _| {
            b.iter(|| {
                points
                    .iter()
                    .zip(scalars.iter())
                    .map(|(p, s)| p.mul_scalar(s))
                    .sum::<G2Point>()
            })
        });
    }
    group.finish();
}

fn bench_hash_and_encoding(c: &mut Criterion) {
    let mut rng = seeded_rng(4);
    let mut g2 = G2::new();
    let input = Fp2::random(&mut rng).to_bytes();
    let p = G2Point::random(&mut rng);
    let compressed = p.to_compressed();

    let mut group = c.benchmark_group("G2 hash and encoding");
    group.sample_size(10);
    group.bench_function("map_to_point_swu", |b| b.iter(|| g2.map_to_point_swu(&input)));
    group.bench_function("map_to_point_ti", |b| b.iter(|| g2.map_to_point_ti(&input)));
    group.bench_function("to_compressed", |b| b.iter(|| p.to_compressed()));
    group.bench_function("from_compressed", |b| {
        b.iter(|| G2Point::from_compressed(&compressed))
    });
    group.bench_function("from_compressed_unchecked", |b| {
        b.iter(|| G2Point::from_compressed_unchecked(&compressed))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_field,
    bench_scalar_mul,
    bench_multi_exp,
    bench_hash_and_encoding
);
criterion_main!(benches);
