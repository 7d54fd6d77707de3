//! Criterion benchmarks for the compound GA.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use compound_ga::ga::operators::{mutate, one_point_crossover, two_point_crossover};
use compound_ga::ga::population::random_population;
use compound_ga::ga::{rank, FitnessScheme, GaConfig, GaRunner};
use compound_ga::random::create_rng;

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    for size in [20, 100, 500] {
        let pop = random_population(size, 10, 3, &mut create_rng(42));
        group.bench_with_input(BenchmarkId::from_parameter(size), &pop, |b, pop| {
            b.iter(|| rank(black_box(pop.clone()), &FitnessScheme::default()))
        });
    }
    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let mut rng = create_rng(42);
    let pop = random_population(2, 10, 3, &mut rng);
    let (p1, p2) = (&pop[0], &pop[1]);

    c.bench_function("two_point_crossover", |b| {
        b.iter(|| two_point_crossover(black_box(p1), black_box(p2), &mut rng))
    });
    c.bench_function("one_point_crossover", |b| {
        b.iter(|| one_point_crossover(black_box(p1), black_box(p2), &mut rng))
    });
    c.bench_function("mutate", |b| {
        b.iter(|| {
            let mut child = p1.clone();
            mutate(&mut child, 0.2, &mut rng)
        })
    });
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run");
    for elitism in [false, true] {
        let config = GaConfig::default().with_elitism(elitism).with_seed(42);
        group.bench_with_input(
            BenchmarkId::new("reference", if elitism { "elitism" } else { "plain" }),
            &config,
            |b, config| b.iter(|| GaRunner::new(config.clone()).map(|r| r.run())),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_ranking, bench_operators, bench_full_run);
criterion_main!(benches);
