use cdcl::*;
use criterion::{criterion_group, criterion_main, Criterion};
use std::{
    fs::File,
    io::{BufRead, BufReader},
};

pub fn planted(c: &mut Criterion) {
    let lines = BufReader::new(File::open("inputs/planted-uf50.cnf").unwrap())
        .lines()
        .map(Result::unwrap)
        .collect::<Vec<_>>();
    c.bench_function("planted-uf50 parse and solve", |b| {
        b.iter(|| {
            Formula::parse(&lines)
                .unwrap()
                .solve(SolverOptions::default())
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = planted
}
criterion_main!(benches);
