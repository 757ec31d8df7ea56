//! Criterion benchmarks for the engine and BRKGA.
//!
//! Uses synthetic problems (Sphere, Rastrigin, OneMax) to measure pure
//! algorithm overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rkopt::brkga::{Brkga, BrkgaConfig};
use rkopt::engine::{Engine, EngineConfig};
use rkopt::error::ProblemError;
use rkopt::problem::{Goal, Problem};
use rkopt::termination::MaxIterations;

// ===========================================================================
// Sphere: minimize sum(x_i^2) on [-5, 5]^n
// ===========================================================================

struct Sphere;

impl Problem for Sphere {
    type Candidate = Vec<f64>;

    fn decode(&self, keys: &[f64]) -> Result<Vec<f64>, ProblemError> {
        Ok(keys.iter().map(|k| -5.0 + 10.0 * k).collect())
    }

    fn objective(&self, x: &Vec<f64>) -> Result<f64, ProblemError> {
        Ok(x.iter().map(|v| v * v).sum())
    }
}

// ===========================================================================
// Rastrigin on [-5.12, 5.12]^n
// ===========================================================================

struct Rastrigin {
    dim: usize,
}

impl Problem for Rastrigin {
    type Candidate = Vec<f64>;

    fn decode(&self, keys: &[f64]) -> Result<Vec<f64>, ProblemError> {
        Ok(keys.iter().map(|k| -5.12 + k * 10.24).collect())
    }

    fn objective(&self, x: &Vec<f64>) -> Result<f64, ProblemError> {
        let sum: f64 = x
            .iter()
            .map(|v| v * v - 10.0 * (2.0 * std::f64::consts::PI * v).cos())
            .sum();
        Ok(10.0 * self.dim as f64 + sum)
    }
}

// ===========================================================================
// OneMax: maximize number of keys above 0.5
// ===========================================================================

struct OneMax;

impl Problem for OneMax {
    type Candidate = usize;

    fn decode(&self, keys: &[f64]) -> Result<usize, ProblemError> {
        Ok(keys.iter().filter(|&&k| k > 0.5).count())
    }

    fn objective(&self, ones: &usize) -> Result<f64, ProblemError> {
        Ok(*ones as f64)
    }
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn engine() -> Engine {
    Engine::new(EngineConfig::default().with_seed(42))
}

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("brkga_sphere");
    group.sample_size(10);

    for (dim, pop, gen) in [(10usize, 50usize, 50u64), (50, 100, 30), (100, 100, 20)] {
        let optimizer = Brkga::new(dim, pop);
        group.bench_with_input(
            BenchmarkId::new(format!("d{}_p{}_g{}", dim, pop, gen), dim),
            &optimizer,
            |b, o| {
                b.iter(|| {
                    let info = engine()
                        .optimize(black_box(&Sphere), Goal::Minimize, o, &MaxIterations(gen))
                        .unwrap();
                    black_box(info)
                })
            },
        );
    }
    group.finish();
}

fn bench_rastrigin(c: &mut Criterion) {
    let mut group = c.benchmark_group("brkga_rastrigin");
    group.sample_size(10);

    for &dim in &[10usize, 30] {
        let problem = Rastrigin { dim };
        let optimizer = Brkga::with_config(BrkgaConfig::new(dim, 200).with_bias(0.8));
        group.bench_with_input(
            BenchmarkId::from_parameter(dim),
            &(problem, optimizer),
            |b, (p, o)| {
                b.iter(|| {
                    let info = engine()
                        .optimize(black_box(p), Goal::Minimize, o, &MaxIterations(30))
                        .unwrap();
                    black_box(info)
                })
            },
        );
    }
    group.finish();
}

fn bench_onemax(c: &mut Criterion) {
    let mut group = c.benchmark_group("brkga_onemax");
    group.sample_size(10);

    for &n in &[20usize, 50, 100] {
        let optimizer = Brkga::new(n, 100);
        group.bench_with_input(BenchmarkId::from_parameter(n), &optimizer, |b, o| {
            b.iter(|| {
                let info = engine()
                    .optimize(black_box(&OneMax), Goal::Maximize, o, &MaxIterations(50))
                    .unwrap();
                black_box(info)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sphere, bench_rastrigin, bench_onemax);
criterion_main!(benches);
