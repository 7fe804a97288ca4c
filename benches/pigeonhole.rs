use cdcl::*;
use criterion::{criterion_group, criterion_main, Criterion};

pub fn pigeonhole(c: &mut Criterion) {
    let formula = Formula::parse_file("inputs/php-6-5.cnf").unwrap();
    c.bench_function("php-6-5 solve", |b| {
        b.iter(|| formula.clone().solve(SolverOptions::default()))
    });
}

pub fn restarts(c: &mut Criterion) {
    let formula = generator::pigeonhole(6, 5);
    let options = SolverOptions {
        conflicts_limit: 10,
        lbd_limit: 2.0,
        ..SolverOptions::default()
    };
    c.bench_function("php-6-5 eager restarts", |b| {
        b.iter(|| formula.clone().solve(options.clone()))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = pigeonhole, restarts
}
criterion_main!(benches);
