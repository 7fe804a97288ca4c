//! Formula generators: uniform random k-CNF, the phase-transition experiment
//! built on it, and pigeonhole instances.

use crate::{error::Error, Formula, Literal, SolverOptions, Variable};
use log::debug;
use rand::{seq::index, Rng};

/// Draws `num_clauses` clauses, each over `k` distinct variables with
/// independent uniformly random polarities
pub fn random_k_cnf(
    k: usize,
    num_variables: Variable,
    num_clauses: usize,
    rng: &mut impl Rng,
) -> Result<Formula, Error> {
    if k == 0 || k > num_variables {
        return Err(Error::InvalidGenerator { k, num_variables });
    }

    let mut formula = Formula::new(num_variables);
    for _ in 0..num_clauses {
        let clause = index::sample(rng, num_variables, k)
            .into_iter()
            .map(|var| Literal::new(var, rng.gen_bool(0.5)))
            .collect::<Vec<_>>();
        formula.add_clause(clause);
    }
    Ok(formula)
}

/// `pigeons` pigeons in `holes` holes, each hole holding at most one pigeon.
/// Unsatisfiable iff `pigeons > holes`.
pub fn pigeonhole(pigeons: usize, holes: usize) -> Formula {
    let var = |pigeon: usize, hole: usize| pigeon * holes + hole;
    let mut formula = Formula::new(pigeons * holes);

    for pigeon in 0..pigeons {
        formula.add_clause((0..holes).map(|hole| Literal::new(var(pigeon, hole), true)));
    }
    for hole in 0..holes {
        for first in 0..pigeons {
            for second in first + 1..pigeons {
                formula.add_clause(vec![
                    Literal::new(var(first, hole), false),
                    Literal::new(var(second, hole), false),
                ]);
            }
        }
    }
    formula
}

/// Estimates how likely random k-CNF formulas of a given clause density are
/// to be satisfiable
#[derive(Clone, Debug)]
pub struct PhaseTransition {
    pub k: usize,
    pub num_variables: Variable,
    /// Formulas solved per ratio
    pub samples: usize,
    pub options: SolverOptions,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhasePoint {
    /// Clauses per variable
    pub ratio: f64,
    pub sat_probability: f64,
    pub mean_decisions: f64,
}

impl PhaseTransition {
    /// Solves `samples` formulas with `ceil(ratio * num_variables)` clauses
    pub fn probe(&self, ratio: f64, rng: &mut impl Rng) -> Result<PhasePoint, Error> {
        if self.samples == 0 {
            return Err(Error::InvalidOptions("at least one sample is needed".into()));
        }
        if !(ratio >= 0.0) {
            return Err(Error::InvalidOptions(format!("ratio {} is negative", ratio)));
        }
        self.options.validate()?;

        let num_clauses = (ratio * self.num_variables as f64).ceil() as usize;
        let (mut satisfiable, mut decisions) = (0, 0);
        for _ in 0..self.samples {
            let formula = random_k_cnf(self.k, self.num_variables, num_clauses, rng)?;
            let outcome = formula.solve(self.options.clone());
            if outcome.solution.is_sat() {
                satisfiable += 1;
            }
            decisions += outcome.statistics.decisions;
        }

        let point = PhasePoint {
            ratio,
            sat_probability: satisfiable as f64 / self.samples as f64,
            mean_decisions: decisions as f64 / self.samples as f64,
        };
        debug!("{:?}", point);
        Ok(point)
    }
}

#[cfg(test)]
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn random_clauses_have_distinct_variables() {
    let mut rng = StdRng::seed_from_u64(1);
    let formula = random_k_cnf(3, 5, 200, &mut rng).unwrap();

    assert_eq!(formula.num_variables(), 5);
    assert_eq!(formula.num_clauses(), 200);
    for clause in formula.clauses() {
        assert_eq!(clause.len(), 3);
        let mut vars = clause.iter().map(|literal| literal.var()).collect::<Vec<_>>();
        vars.sort_unstable();
        vars.dedup();
        assert_eq!(vars.len(), 3);
        assert!(vars.iter().all(|var| *var < 5));
    }

    // Both polarities show up
    let positive = formula
        .clauses()
        .iter()
        .flatten()
        .filter(|literal| literal.sign().is_positive())
        .count();
    assert!(positive > 0 && positive < 600);
}

#[test]
fn impossible_clause_width() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        random_k_cnf(4, 3, 1, &mut rng),
        Err(Error::InvalidGenerator {
            k: 4,
            num_variables: 3
        })
    ));
    assert!(random_k_cnf(0, 3, 1, &mut rng).is_err());
}

#[test]
fn pigeonhole_instances() {
    let formula = pigeonhole(3, 2);
    assert_eq!(formula.num_variables(), 6);
    assert_eq!(formula.num_clauses(), 9);
    assert!(!formula.solve(SolverOptions::default()).solution.is_sat());

    let formula = pigeonhole(3, 3);
    let outcome = formula.clone().solve(SolverOptions::default());
    assert!(outcome.solution.model().unwrap().satisfies(&formula));
}

#[test]
fn phase_transition_extremes() {
    let mut rng = StdRng::seed_from_u64(5);
    let experiment = PhaseTransition {
        k: 3,
        num_variables: 10,
        samples: 5,
        options: SolverOptions::default(),
    };

    let empty = experiment.probe(0.0, &mut rng).unwrap();
    assert_eq!(empty.sat_probability, 1.0);

    let dense = experiment.probe(10.0, &mut rng).unwrap();
    assert_eq!(dense.ratio, 10.0);
    assert!(dense.sat_probability < 0.5);

    assert!(experiment.probe(-1.0, &mut rng).is_err());
}
