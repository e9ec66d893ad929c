// Copyright 2025 Irreducible Inc.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use decnum::BigInt;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Generates a random decimal literal of exactly `digits` digits, nonzero leading digit.
fn random_literal(rng: &mut StdRng, digits: usize) -> String {
	let mut literal = String::with_capacity(digits);
	literal.push(char::from(b'0' + rng.random_range(1..10u8)));
	for _ in 1..digits {
		literal.push(char::from(b'0' + rng.random_range(0..10u8)));
	}
	literal
}

fn bench_mul(c: &mut Criterion) {
	let mut group = c.benchmark_group("mul");

	// Doubling digit sizes, so the ratio between consecutive measurements exposes the
	// growth order of each algorithm.
	for digits in [64, 128, 256, 512, 1024, 2048, 4096] {
		let mut rng = StdRng::seed_from_u64(0);
		let a: BigInt = random_literal(&mut rng, digits).parse().unwrap();
		let b: BigInt = random_literal(&mut rng, digits).parse().unwrap();

		group.throughput(Throughput::Elements(digits as u64));

		group.bench_function(BenchmarkId::new("schoolbook", digits), |bench| {
			bench.iter(|| a.mul(&b))
		});
		group.bench_function(BenchmarkId::new("karatsuba", digits), |bench| {
			bench.iter(|| a.mul_fast(&b))
		});
	}

	group.finish();
}

fn bench_addsub(c: &mut Criterion) {
	let mut group = c.benchmark_group("addsub");

	for digits in [256, 4096] {
		let mut rng = StdRng::seed_from_u64(0);
		let a: BigInt = random_literal(&mut rng, digits).parse().unwrap();
		let b: BigInt = random_literal(&mut rng, digits).parse().unwrap();

		group.throughput(Throughput::Elements(digits as u64));

		group.bench_function(BenchmarkId::new("add", digits), |bench| bench.iter(|| a.add(&b)));
		group.bench_function(BenchmarkId::new("sub", digits), |bench| bench.iter(|| a.sub(&b)));
	}

	group.finish();
}

criterion_group! {
	name = default;
	config = Criterion::default().sample_size(20).significance_level(0.01);
	targets = bench_mul, bench_addsub
}
criterion_main!(default);
