use crate::{
    assignments::{Assignment, Assignments},
    clause_db::{clause, Clause, ClauseDatabase},
    conflict::{Conflict, Learned},
    error::Error,
    heuristics::{Brancher, Heuristic},
    restart::Restarts,
    trail::Trail,
    watched::Watched,
    ClauseIdx, DecisionLevel, Evaluate, Formula, Literal, Variable,
};
use fixedbitset::FixedBitSet;
use log::{debug, info, trace};
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub struct SolverOptions {
    pub heuristic: Heuristic,
    /// Conflicts before the first restart
    pub conflicts_limit: usize,
    /// Learned clauses with a higher LBD are deleted on restart
    pub lbd_limit: f64,
    /// Applied to both limits after every restart
    pub growth: f64,
    pub vsids_decay: f64,
    /// Seeds the random choices of the heuristics
    pub seed: u64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Vsids,
            conflicts_limit: 100,
            lbd_limit: 3.0,
            growth: 1.1,
            vsids_decay: 0.9,
            seed: 91_648_253,
        }
    }
}

impl SolverOptions {
    pub fn validate(&self) -> Result<(), Error> {
        let problem = if self.conflicts_limit == 0 {
            "conflicts_limit must be at least 1"
        } else if !(self.lbd_limit >= 1.0) {
            "lbd_limit must be at least 1"
        } else if !(self.growth > 1.0) {
            "growth must be greater than 1"
        } else if !(self.vsids_decay > 0.0 && self.vsids_decay <= 1.0) {
            "vsids_decay must be in (0, 1]"
        } else {
            return Ok(());
        };
        Err(Error::InvalidOptions(problem.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub decisions: usize,
    /// Literals assigned by unit propagation
    pub unit_propagations: usize,
    pub conflicts: usize,
    /// Non-restart backtracks after a conflict
    pub backjumps: usize,
    pub restarts: usize,
    pub learned_clauses: usize,
    pub deleted_clauses: usize,
}

/// A total assignment, one literal per variable in variable order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    literals: Vec<Literal>,
}

impl Model {
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn value(&self, var: Variable) -> Option<bool> {
        self.literals
            .get(var)
            .map(|literal| literal.sign().is_positive())
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.literals.get(literal.var()) == Some(&literal)
    }

    /// True iff every clause of `formula` has a literal in the model
    pub fn satisfies(&self, formula: &Formula) -> bool {
        formula
            .clauses()
            .iter()
            .all(|clause| clause.iter().any(|literal| self.contains(*literal)))
    }

    pub fn to_dimacs(&self) -> Vec<isize> {
        self.literals.iter().map(|literal| literal.to_dimacs()).collect()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut literals = self.literals.iter();
        if let Some(first) = literals.next() {
            write!(f, "{}", first)?;
        }
        for literal in literals {
            write!(f, " {}", literal)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    Sat(Model),
    Unsat,
}

impl Solution {
    pub fn is_sat(&self) -> bool {
        matches!(self, Solution::Sat(_))
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            Solution::Sat(model) => Some(model),
            Solution::Unsat => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Outcome {
    pub solution: Solution,
    pub statistics: Statistics,
}

#[must_use]
#[derive(Debug, PartialEq)]
enum Status {
    Ok,
    Conflict(ClauseIdx),
}

enum State {
    Propagating,
    Deciding,
    AnalyzingConflict(ClauseIdx),
    Backtracking(Learned),
    Restarting(Learned),
    Sat,
    Unsat,
}

pub struct Solver {
    num_vars: Variable,
    contains_empty_clause: bool,
    assumptions: Vec<Literal>,
    assignments: Assignments,
    trail: Trail,
    watched: Watched,
    clauses: ClauseDatabase,
    /// Implied literals waiting to be assigned, with the clause implying each
    units: VecDeque<(ClauseIdx, Literal)>,
    conflict: Conflict,
    brancher: Brancher,
    restarts: Restarts,
    stats: Statistics,
}

impl Solver {
    pub fn new(formula: impl Into<Formula>, options: SolverOptions) -> Self {
        let formula = formula.into();
        let num_vars = formula.num_variables();
        debug_assert!(options.validate().is_ok(), "{:?}", options);

        let mut watched = Watched::new(num_vars);
        let mut clauses = ClauseDatabase::new(formula.num_clauses());
        let mut units = VecDeque::new();
        let mut contains_empty_clause = false;

        for literals in formula.clauses() {
            let mut literals = literals.clone();
            literals.sort_unstable();
            literals.dedup();

            // x and !x sort next to each other; such a clause constrains nothing
            if literals.windows(2).any(|pair| pair[0] == !pair[1]) {
                continue;
            }
            if literals.is_empty() {
                contains_empty_clause = true;
                continue;
            }

            let unit = if literals.len() == 1 {
                Some(literals[0])
            } else {
                None
            };
            let idx = clauses.insert(Clause::original(literals), &mut watched);
            if let Some(literal) = unit {
                units.push_back((idx, literal));
            }
        }

        let brancher = Brancher::new(
            options.heuristic,
            num_vars,
            &clauses,
            options.vsids_decay,
            options.seed,
        );

        Self {
            num_vars,
            contains_empty_clause,
            assumptions: Vec::new(),
            assignments: Assignments::new(num_vars),
            trail: Trail::new(num_vars),
            watched,
            clauses,
            units,
            conflict: Conflict::new(num_vars),
            brancher,
            restarts: Restarts::new(options.conflicts_limit, options.lbd_limit, options.growth),
            stats: Statistics::default(),
        }
    }

    /// Forces the given DIMACS literals to hold at decision level 0
    pub fn with_assumptions(mut self, assumptions: &[isize]) -> Result<Self, Error> {
        for x in assumptions {
            if *x == 0 || x.unsigned_abs() > self.num_vars {
                return Err(Error::InvalidAssumption(*x));
            }
            self.assumptions.push(Literal::from(*x));
        }
        Ok(self)
    }

    pub fn solve(mut self) -> Outcome {
        info!(
            "solving {} variables, {} clauses with {}",
            self.num_vars,
            self.clauses.len(),
            self.brancher.heuristic()
        );

        let solution = self.run();

        info!(
            "{} after {} decisions, {} conflicts, {} restarts",
            if solution.is_sat() { "SAT" } else { "UNSAT" },
            self.stats.decisions,
            self.stats.conflicts,
            self.stats.restarts
        );
        Outcome {
            solution,
            statistics: self.stats,
        }
    }

    fn run(&mut self) -> Solution {
        if self.contains_empty_clause {
            debug!("the formula contains an empty clause");
            return Solution::Unsat;
        }
        if !self.assume() {
            return Solution::Unsat;
        }

        let mut state = State::Propagating;
        loop {
            state = match state {
                State::Propagating => match self.propagate() {
                    Status::Conflict(idx) => State::AnalyzingConflict(idx),
                    Status::Ok if self.all_variables_assigned() => State::Sat,
                    Status::Ok => State::Deciding,
                },
                State::Deciding => match self.brancher.pick(&self.assignments, &self.clauses) {
                    Some(literal) => match self.decide(literal) {
                        Status::Conflict(idx) => State::AnalyzingConflict(idx),
                        Status::Ok => State::Propagating,
                    },
                    None => State::Sat,
                },
                State::AnalyzingConflict(idx) => {
                    self.stats.conflicts += 1;
                    let learned =
                        self.conflict
                            .analyze(idx, &self.clauses, &self.assignments, &self.trail);
                    match learned {
                        None => {
                            debug!("conflict at level 0");
                            State::Unsat
                        }
                        Some(learned) if self.restarts.on_conflict() => State::Restarting(learned),
                        Some(learned) => State::Backtracking(learned),
                    }
                }
                State::Backtracking(learned) => {
                    self.stats.backjumps += 1;
                    self.backtrack(learned.backtrack_level);
                    let asserting = learned.asserting();
                    let idx = self.learn(learned);
                    self.units.push_back((idx, asserting));
                    State::Propagating
                }
                State::Restarting(learned) => {
                    let (asserting, level) = (learned.asserting(), learned.backtrack_level);
                    let idx = self.learn(learned);
                    self.restart();
                    // A learned unit must still be propagated if it survived deletion
                    if level == 0 && self.clauses.contains(idx) {
                        self.units.push_back((idx, asserting));
                    }
                    State::Propagating
                }
                State::Sat => return Solution::Sat(self.model()),
                State::Unsat => return Solution::Unsat,
            }
        }
    }

    /// Assigns the assumptions as level-0 facts; false if they cannot all hold
    fn assume(&mut self) -> bool {
        for literal in std::mem::take(&mut self.assumptions) {
            match literal.evaluate(&self.assignments) {
                Some(true) => (),
                Some(false) => {
                    debug!("assumption {} contradicts an earlier one", literal);
                    return false;
                }
                None => {
                    if let Status::Conflict(idx) = self.assign(literal, None) {
                        debug!("assumption {} falsifies clause {}", literal, idx);
                        return false;
                    }
                }
            }
        }
        true
    }

    fn decide(&mut self, literal: Literal) -> Status {
        self.trail.new_decision_level();
        self.stats.decisions += 1;
        trace!("decide {} at level {}", literal, self.decision_level());
        self.assign(literal, None)
    }

    /// Records `literal` and revisits every clause watching its negation.
    ///
    /// Clauses that become unit are queued; the first falsified clause is
    /// returned as a conflict.
    fn assign(&mut self, literal: Literal, antecedent: Option<ClauseIdx>) -> Status {
        let level = self.decision_level();
        self.assignments.set(
            literal.var(),
            Assignment::new(literal.sign(), level, antecedent),
        );
        self.trail.push(literal);

        let falsified = !literal;
        let mut watchers = self.watched.take(falsified);
        let mut status = Status::Ok;
        let mut kept = 0;

        for i in 0..watchers.len() {
            let idx = watchers[i];
            if let Status::Ok = status {
                match self.clauses[idx].update(falsified, &self.assignments) {
                    clause::Status::Rewatched(other) => {
                        self.watched[other].push(idx);
                        continue;
                    }
                    clause::Status::Ok => (),
                    clause::Status::Implied(unit) => self.units.push_back((idx, unit)),
                    clause::Status::Conflict => status = Status::Conflict(idx),
                }
            }
            watchers[kept] = idx;
            kept += 1;
        }

        watchers.truncate(kept);
        self.watched[falsified] = watchers;
        status
    }

    /// Assigns queued units until the queue is empty or a clause is falsified
    fn propagate(&mut self) -> Status {
        while let Some((idx, literal)) = self.units.pop_front() {
            match literal.evaluate(&self.assignments) {
                Some(true) => continue,
                Some(false) => return Status::Conflict(idx),
                None => (),
            }

            self.stats.unit_propagations += 1;
            let antecedent = if self.clauses[idx].len() > 1 {
                Some(idx)
            } else {
                None
            };
            if let conflict @ Status::Conflict(_) = self.assign(literal, antecedent) {
                return conflict;
            }
        }
        Status::Ok
    }

    fn learn(&mut self, learned: Learned) -> ClauseIdx {
        trace!(
            "learned {:?} with lbd {}, asserting at level {}",
            learned.literals,
            learned.lbd,
            learned.backtrack_level
        );
        self.stats.learned_clauses += 1;
        self.brancher.on_learned(&learned.literals);
        self.clauses.insert(learned.into_clause(), &mut self.watched)
    }

    fn backtrack(&mut self, level: DecisionLevel) {
        self.units.clear();
        let _ = self.trail.revert_to(level, &mut self.assignments);
    }

    /// Returns to level 0, deletes learned clauses above the LBD limit and
    /// relaxes both limits
    fn restart(&mut self) {
        self.stats.restarts += 1;
        self.backtrack(0);

        let limit = self.restarts.lbd_limit();
        let deleted = self
            .clauses
            .retain_learned(|clause| clause.lbd() as f64 <= limit, &mut self.watched);
        if !deleted.is_empty() {
            let mut doomed = FixedBitSet::with_capacity(self.clauses.capacity());
            doomed.extend(deleted.iter().copied());
            self.assignments.forget_antecedents(&doomed);
        }
        self.stats.deleted_clauses += deleted.len();
        self.restarts.grow();

        debug!(
            "restart {}: deleted {} learned clauses, {} remain, next after {} conflicts with lbd limit {:.2}",
            self.stats.restarts,
            deleted.len(),
            self.clauses.learned().len(),
            self.restarts.conflicts_limit(),
            self.restarts.lbd_limit()
        );
        debug_assert!(self.units.is_empty());
        debug_assert!(self
            .clauses
            .learned()
            .iter()
            .all(|idx| self.clauses[*idx].lbd() as f64 <= limit));
    }

    fn decision_level(&self) -> DecisionLevel {
        self.trail.decision_level()
    }

    fn all_variables_assigned(&self) -> bool {
        self.trail.len() == self.num_vars
    }

    fn model(&self) -> Model {
        let literals = (0..self.num_vars)
            .filter_map(|var| {
                self.assignments
                    .get(var)
                    .map(|assignment| assignment.literal(var))
            })
            .collect::<Vec<_>>();
        debug_assert_eq!(literals.len(), self.num_vars);
        Model { literals }
    }
}

/// Solves `formula` under the given DIMACS assumption literals
pub fn solve(
    formula: impl Into<Formula>,
    options: SolverOptions,
    assumptions: &[isize],
) -> Result<Outcome, Error> {
    options.validate()?;
    Ok(Solver::new(formula, options)
        .with_assumptions(assumptions)?
        .solve())
}

#[cfg(test)]
fn solver(clauses: Vec<Vec<isize>>, options: SolverOptions) -> Solver {
    Solver::new(Formula::from(clauses), options)
}

#[test]
fn forced_variable() {
    let formula = Formula::from(vec![vec![1isize, 2], vec![-1, 2], vec![1, -2]]);
    let outcome = formula.clone().solve(SolverOptions::default());
    let model = outcome.solution.model().unwrap();

    assert_eq!(model.value(1), Some(true));
    assert!(model.satisfies(&formula));
    assert_eq!(model.to_string(), "1 2");
}

#[test]
fn contradicting_units() {
    let outcome = solver(vec![vec![1], vec![-1]], SolverOptions::default()).solve();
    assert_eq!(outcome.solution, Solution::Unsat);
    assert_eq!(outcome.statistics.decisions, 0);
    assert_eq!(outcome.statistics.conflicts, 1);
}

#[test]
fn every_sign_combination_excluded() {
    let clauses = vec![vec![1, 2], vec![1, -2], vec![-1, 2], vec![-1, -2]];
    for heuristic in Heuristic::ALL.iter() {
        let options = SolverOptions {
            heuristic: *heuristic,
            ..SolverOptions::default()
        };
        let mut solver = solver(clauses.clone(), options);
        assert_eq!(solver.run(), Solution::Unsat);
        assert_eq!(solver.stats.restarts, 0);
        assert_eq!(solver.stats.backjumps, 1);
        assert_eq!(solver.stats.learned_clauses, 1);
        assert!(solver
            .clauses
            .learned()
            .iter()
            .all(|idx| solver.clauses[*idx].len() <= 2));
    }
}

#[test]
fn unsat_by_propagation_alone() {
    let outcome = solver(
        vec![vec![1, 2, 3], vec![-1], vec![-2], vec![-3]],
        SolverOptions::default(),
    )
    .solve();
    assert_eq!(outcome.solution, Solution::Unsat);
    assert_eq!(outcome.statistics.decisions, 0);
}

#[test]
fn empty_and_trivial_formulas() {
    let outcome = Formula::new(0).solve(SolverOptions::default());
    assert_eq!(outcome.solution.model().map(Model::literals), Some(&[][..]));

    let outcome = solver(vec![vec![1, -1], vec![]], SolverOptions::default()).solve();
    assert_eq!(outcome.solution, Solution::Unsat);

    // Tautologies and duplicate literals are harmless
    let outcome = solver(vec![vec![1, -1], vec![2, 2, 2]], SolverOptions::default()).solve();
    assert!(outcome.solution.model().unwrap().contains(Literal::from(2)));
}

#[test]
fn assumptions_are_level_zero_facts() {
    let clauses = vec![vec![1isize, 2], vec![-2, 3]];

    let outcome = solve(clauses.clone(), SolverOptions::default(), &[-1]).unwrap();
    let model = outcome.solution.model().unwrap();
    assert_eq!(model.to_dimacs(), vec![-1, 2, 3]);
    assert_eq!(outcome.statistics.decisions, 0);

    let outcome = solve(vec![vec![1isize]], SolverOptions::default(), &[-1]).unwrap();
    assert_eq!(outcome.solution, Solution::Unsat);

    let outcome = solve(clauses.clone(), SolverOptions::default(), &[2, -2]).unwrap();
    assert_eq!(outcome.solution, Solution::Unsat);

    assert!(matches!(
        solve(clauses.clone(), SolverOptions::default(), &[4]),
        Err(Error::InvalidAssumption(4))
    ));
    assert!(matches!(
        solve(clauses.clone(), SolverOptions::default(), &[0]),
        Err(Error::InvalidAssumption(0))
    ));
    assert!(matches!(
        solve(clauses, SolverOptions::default(), &[isize::MIN]),
        Err(Error::InvalidAssumption(isize::MIN))
    ));
}

#[test]
fn contradicting_assumptions_stop_before_search() {
    let mut assuming = solver(vec![vec![1, 2], vec![-2, 3]], SolverOptions::default())
        .with_assumptions(&[3, 1, -3])
        .unwrap();
    assert!(!assuming.assume());
    assert_eq!(assuming.decision_level(), 0);

    // -2 leaves -1 queued, then 1 falsifies the clause outright
    let mut assuming = solver(vec![vec![-1, 2]], SolverOptions::default())
        .with_assumptions(&[-2, 1])
        .unwrap();
    assert!(!assuming.assume());

    let mut assuming = solver(vec![vec![-1, 2]], SolverOptions::default())
        .with_assumptions(&[1, 1])
        .unwrap();
    assert!(assuming.assume());
    assert_eq!(assuming.propagate(), Status::Ok);
    assert_eq!(assuming.trail.len(), 2);
}

#[test]
fn invalid_options() {
    let options = SolverOptions {
        conflicts_limit: 0,
        ..SolverOptions::default()
    };
    assert!(matches!(
        solve(vec![vec![1isize]], options, &[]),
        Err(Error::InvalidOptions(_))
    ));
    let options = SolverOptions {
        vsids_decay: 0.0,
        ..SolverOptions::default()
    };
    assert!(options.validate().is_err());
    assert!(SolverOptions::default().validate().is_ok());

    // Limits that never grow would restart forever on hard formulas
    for growth in [1.0, 0.5, f64::NAN] {
        let options = SolverOptions {
            conflicts_limit: 1,
            lbd_limit: 1.0,
            growth,
            ..SolverOptions::default()
        };
        assert!(matches!(
            solve(crate::generator::pigeonhole(6, 5), options, &[]),
            Err(Error::InvalidOptions(_))
        ));
    }
}

#[test]
fn backtracking_restores_state() {
    let mut solver = solver(
        vec![vec![-1, 2], vec![-2, 3], vec![-4, 5], vec![4, 6, 7], vec![-5, -6]],
        SolverOptions::default(),
    );
    assert_eq!(solver.propagate(), Status::Ok);

    assert_eq!(solver.decide(Literal::from(1)), Status::Ok);
    assert_eq!(solver.propagate(), Status::Ok);
    let (trail, assignments) = (solver.trail.literals().to_vec(), solver.assignments.clone());
    assert_eq!(
        trail,
        vec![Literal::from(1), Literal::from(2), Literal::from(3)]
    );

    assert_eq!(solver.decide(Literal::from(4)), Status::Ok);
    assert_eq!(solver.propagate(), Status::Ok);
    assert_eq!(solver.decision_level(), 2);
    assert!(solver.assignments.get(5).is_some());

    solver.backtrack(1);
    assert_eq!(solver.decision_level(), 1);
    assert_eq!(solver.trail.literals(), &trail[..]);
    assert_eq!(solver.assignments, assignments);
    for var in 3..7 {
        assert!(solver.assignments.get(var).is_none());
    }
}

#[test]
fn propagation_is_idempotent() {
    let mut solver = solver(
        vec![vec![1], vec![-1, 2], vec![-2, 3, 4], vec![-3, -2]],
        SolverOptions::default(),
    );
    assert_eq!(solver.propagate(), Status::Ok);
    let (assigned, propagations) = (solver.trail.len(), solver.stats.unit_propagations);
    assert_eq!(assigned, 4);

    assert_eq!(solver.propagate(), Status::Ok);
    assert_eq!(solver.trail.len(), assigned);
    assert_eq!(solver.stats.unit_propagations, propagations);
}

#[test]
fn restart_clears_search_state() {
    let mut solver = solver(
        vec![vec![-1, -2, 3], vec![-1, -2, -3]],
        SolverOptions {
            lbd_limit: 1.0,
            ..SolverOptions::default()
        },
    );
    assert_eq!(solver.propagate(), Status::Ok);
    assert_eq!(solver.decide(Literal::from(1)), Status::Ok);
    assert_eq!(solver.propagate(), Status::Ok);
    assert_eq!(solver.decide(Literal::from(2)), Status::Ok);
    let conflict = match solver.propagate() {
        Status::Conflict(idx) => idx,
        Status::Ok => panic!("1 and 2 force both 3 and -3"),
    };
    let learned = solver
        .conflict
        .analyze(conflict, &solver.clauses, &solver.assignments, &solver.trail)
        .unwrap();
    assert_eq!(learned.lbd, 2);
    assert_eq!(learned.backtrack_level, 1);
    let idx = solver.learn(learned);

    solver.restart();
    assert_eq!(solver.decision_level(), 0);
    assert!(solver.units.is_empty());
    assert!(solver.trail.is_empty());
    assert!(!solver.clauses.contains(idx));
    assert!(solver.clauses.learned().is_empty());
    assert_eq!(solver.stats.restarts, 1);
    assert_eq!(solver.stats.deleted_clauses, 1);
    assert_eq!(solver.restarts.conflicts_limit(), 110);
}

#[test]
fn level_zero_literals_are_left_out_of_learned_clauses() {
    let mut solver = solver(
        vec![vec![1], vec![-1, -2, 3], vec![-1, -2, -3]],
        SolverOptions {
            lbd_limit: 1.0,
            ..SolverOptions::default()
        },
    );
    assert_eq!(solver.propagate(), Status::Ok);
    assert_eq!(solver.decide(Literal::from(2)), Status::Ok);
    let conflict = match solver.propagate() {
        Status::Conflict(idx) => idx,
        Status::Ok => panic!("2 forces both 3 and -3"),
    };
    let learned = solver
        .conflict
        .analyze(conflict, &solver.clauses, &solver.assignments, &solver.trail)
        .unwrap();
    assert_eq!(learned.literals, vec![Literal::from(-2)]);
    assert_eq!(learned.backtrack_level, 0);
    assert_eq!(learned.lbd, 1);

    // A clause of LBD 1 survives the strictest deletion
    let idx = solver.learn(learned);
    solver.restart();
    assert!(solver.clauses.contains(idx));
}

#[test]
fn frequent_restarts_stay_sound() {
    let options = SolverOptions {
        conflicts_limit: 1,
        lbd_limit: 1.0,
        ..SolverOptions::default()
    };
    let pigeons = crate::generator::pigeonhole(4, 3);
    let outcome = pigeons.solve(options);
    assert_eq!(outcome.solution, Solution::Unsat);
    assert!(outcome.statistics.restarts > 0);
}

#[test]
fn learned_clauses_are_entailed() {
    use rand::{rngs::StdRng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(17);
    for round in 0..20 {
        let formula = crate::generator::random_k_cnf(3, 8, 40, &mut rng).unwrap();
        let options = SolverOptions {
            heuristic: Heuristic::ALL[round % 5],
            conflicts_limit: 3,
            ..SolverOptions::default()
        };
        let mut solver = Solver::new(formula.clone(), options);
        let solution = solver.run();

        let models = (0u32..1 << 8)
            .map(|bits| {
                (0..8)
                    .map(|var| Literal::new(var, bits & (1 << var) != 0))
                    .collect::<Vec<_>>()
            })
            .map(|literals| Model { literals })
            .filter(|model| model.satisfies(&formula))
            .collect::<Vec<_>>();

        assert_eq!(solution.is_sat(), !models.is_empty());
        if let Solution::Sat(model) = &solution {
            assert!(model.satisfies(&formula));
        }
        for idx in solver.clauses.learned() {
            let learned = solver.clauses[*idx].literals();
            assert!(models
                .iter()
                .all(|model| learned.iter().any(|literal| model.contains(*literal))));
        }
    }
}
