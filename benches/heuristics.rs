use cdcl::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};

/// Random 3-SAT near the satisfiability threshold, once per heuristic
pub fn heuristics(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let formula = generator::random_k_cnf(3, 40, 170, &mut rng).unwrap();

    let mut group = c.benchmark_group("uf40 threshold");
    for heuristic in Heuristic::ALL.iter() {
        let options = SolverOptions {
            heuristic: *heuristic,
            ..SolverOptions::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(heuristic), &options, |b, options| {
            b.iter(|| formula.clone().solve(options.clone()))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = heuristics
}
criterion_main!(benches);
