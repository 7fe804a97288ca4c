use cdcl::*;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

const MAX_VARIABLES: usize = 8;

/// A formula small enough to decide by enumerating every assignment
#[derive(Clone, Debug)]
struct SmallFormula(Formula);

impl Arbitrary for SmallFormula {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_variables = usize::arbitrary(g) % MAX_VARIABLES + 1;
        let num_clauses = usize::arbitrary(g) % 40;

        let mut formula = Formula::new(num_variables);
        for _ in 0..num_clauses {
            let len = usize::arbitrary(g) % 4 + 1;
            let clause = (0..len)
                .map(|_| Literal::new(usize::arbitrary(g) % num_variables, bool::arbitrary(g)))
                .collect::<Vec<_>>();
            formula.add_clause(clause);
        }
        SmallFormula(formula)
    }
}

fn brute_force(formula: &Formula) -> bool {
    let n = formula.num_variables();
    (0u32..1 << n).any(|bits| {
        formula.clauses().iter().all(|clause| {
            clause
                .iter()
                .any(|literal| (bits & (1 << literal.var()) != 0) == literal.sign().is_positive())
        })
    })
}

fn check(formula: &Formula, options: SolverOptions) -> bool {
    let outcome = formula.clone().solve(options);
    match &outcome.solution {
        Solution::Sat(model) => {
            model.literals().len() == formula.num_variables() && model.satisfies(formula)
        }
        Solution::Unsat => !brute_force(formula),
    }
}

#[quickcheck]
fn every_heuristic_agrees_with_enumeration(formula: SmallFormula) -> bool {
    Heuristic::ALL.iter().all(|heuristic| {
        let options = SolverOptions {
            heuristic: *heuristic,
            ..SolverOptions::default()
        };
        check(&formula.0, options)
    })
}

#[quickcheck]
fn eager_restarts_stay_sound(formula: SmallFormula, seed: u64) -> bool {
    let options = SolverOptions {
        conflicts_limit: 1,
        lbd_limit: 1.0,
        seed,
        ..SolverOptions::default()
    };
    check(&formula.0, options)
}

#[quickcheck]
fn assumptions_restrict_models(formula: SmallFormula, var: usize, positive: bool) -> bool {
    let formula = formula.0;
    let assumed = Literal::new(var % formula.num_variables(), positive);

    let mut restricted = formula.clone();
    restricted.add_clause(vec![assumed]);

    let outcome = match solve(formula, SolverOptions::default(), &[assumed.to_dimacs()]) {
        Ok(outcome) => outcome,
        Err(_) => return false,
    };
    match outcome.solution {
        Solution::Sat(model) => model.contains(assumed) && model.satisfies(&restricted),
        Solution::Unsat => !brute_force(&restricted),
    }
}

#[test]
fn pigeonhole_input() {
    let formula = Formula::parse_file("inputs/php-6-5.cnf").unwrap();
    assert_eq!(formula.num_variables(), 30);
    assert_eq!(formula.num_clauses(), 81);

    let outcome = formula.solve(SolverOptions::default());
    assert_eq!(outcome.solution, Solution::Unsat);
    assert!(outcome.statistics.conflicts > 0);
    assert!(outcome.statistics.learned_clauses > 0);
}

#[test]
fn planted_input() {
    let formula = Formula::parse_file("inputs/planted-uf50.cnf").unwrap();
    assert_eq!(formula.num_variables(), 50);
    assert_eq!(formula.num_clauses(), 210);

    for heuristic in Heuristic::ALL.iter() {
        let options = SolverOptions {
            heuristic: *heuristic,
            ..SolverOptions::default()
        };
        let outcome = formula.clone().solve(options);
        let model = outcome.solution.model().unwrap();
        assert!(model.satisfies(&formula), "{} returned a bad model", heuristic);
    }
}

#[test]
fn missing_input() {
    assert!(matches!(
        Formula::parse_file("inputs/does-not-exist.cnf"),
        Err(Error::Io { .. })
    ));
}
