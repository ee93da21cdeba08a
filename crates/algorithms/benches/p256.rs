// Benchmarks for P-256 big integer and point arithmetic

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use meshbus_algorithms::ec::p256::{
    self, AffinePoint, BigVal, Modulus, Scalar, P256_SCALAR_SIZE,
};
use rand::{rngs::OsRng, RngCore};

/// Random value below 2^256, good enough as a field operand
fn random_bigval() -> BigVal {
    let mut bytes = [0u8; P256_SCALAR_SIZE];
    OsRng.fill_bytes(&mut bytes);
    BigVal::from_binary(&bytes)
}

fn random_scalar() -> Scalar {
    let mut bytes = [0u8; P256_SCALAR_SIZE];
    loop {
        OsRng.fill_bytes(&mut bytes);
        if let Ok(scalar) = Scalar::new(bytes) {
            return scalar;
        }
    }
}

fn random_point() -> AffinePoint {
    p256::scalar_mult_base_g(&random_scalar())
}

fn bench_field_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("p256-field");

    group.bench_function("add_p", |b| {
        b.iter_batched(
            || (random_bigval(), random_bigval()),
            |(x, y)| black_box(x.add_p(&y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("mul_mod_p", |b| {
        b.iter_batched(
            || (random_bigval(), random_bigval()),
            |(x, y)| black_box(x.mul_mod(&y, Modulus::Field)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("square_mod_p", |b| {
        b.iter_batched(
            random_bigval,
            |x| black_box(x.square(Modulus::Field)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("mul_mod_n", |b| {
        b.iter_batched(
            || (random_bigval(), random_bigval()),
            |(x, y)| black_box(x.mul_mod(&y, Modulus::Order)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("precise_reduce", |b| {
        b.iter_batched(
            random_bigval,
            |x| black_box(x.precise_reduce(Modulus::Field)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("invert", |b| {
        b.iter_batched(
            || random_bigval().precise_reduce(Modulus::Field),
            |x| black_box(x.invert(Modulus::Field)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sqrt", |b| {
        b.iter_batched(
            || {
                random_bigval()
                    .square(Modulus::Field)
                    .precise_reduce(Modulus::Field)
            },
            |x| black_box(x.sqrt_mod_p()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_point_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("p256-point");

    group.bench_function("add_affine", |b| {
        b.iter_batched(
            || (random_point().to_jacobian(), random_point()),
            |(p, q)| black_box(p.add_affine(&q)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("double", |b| {
        b.iter_batched(
            || random_point().to_jacobian(),
            |p| black_box(p.double()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("to_affine", |b| {
        b.iter_batched(
            || random_point().to_jacobian().double(),
            |p| black_box(p.to_affine()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("validate", |b| {
        b.iter_batched(
            random_point,
            |p| black_box(p.validate().is_ok()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_scalar_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("p256-scalar-mult");

    group.bench_function("base_point", |b| {
        b.iter_batched(
            random_scalar,
            |k| black_box(p256::scalar_mult_base_g(&k)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("variable_point", |b| {
        b.iter_batched(
            || (random_scalar(), random_point()),
            |(k, p)| black_box(p256::scalar_mult(&k, &p)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("keypair", |b| {
        b.iter(|| black_box(p256::generate_keypair(&mut OsRng)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_field_operations,
    bench_point_operations,
    bench_scalar_multiplication
);
criterion_main!(benches);
