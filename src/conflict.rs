use crate::{
    clause_db::{Clause, ClauseDatabase},
    Assignments, ClauseIdx, DecisionLevel, Evaluate, Literal, Trail, Variable,
};
use fixedbitset::FixedBitSet;

/// The working clause of conflict analysis
pub struct Conflict {
    level: DecisionLevel,
    literals: FixedBitSet,
    assigned_at_level: usize,
}

/// A clause derived from a conflict, ready to be added to the database
#[derive(Clone, Debug, PartialEq)]
pub struct Learned {
    /// The asserting literal first, then a literal from the backtrack level
    pub literals: Vec<Literal>,
    pub backtrack_level: DecisionLevel,
    pub lbd: usize,
}

impl Learned {
    pub fn asserting(&self) -> Literal {
        self.literals[0]
    }

    pub fn into_clause(self) -> Clause {
        Clause::learned(self.literals, self.lbd)
    }
}

impl Conflict {
    pub fn new(num_vars: Variable) -> Self {
        Self {
            level: 0,
            literals: FixedBitSet::with_capacity(num_vars * 2),
            assigned_at_level: 0,
        }
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.literals.contains(literal.code())
    }

    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.ones().map(Literal::from_code)
    }

    fn add(&mut self, literal: Literal, assignments: &Assignments) {
        // Level-0 literals are false for good
        if assignments.assigned_at_level(literal.var(), 0) {
            return;
        }
        if !self.literals.put(literal.code())
            && assignments.assigned_at_level(literal.var(), self.level)
        {
            self.assigned_at_level += 1;
        }
    }

    fn initialize(&mut self, level: DecisionLevel, clause: &Clause, assignments: &Assignments) {
        self.literals.clear();
        self.level = level;
        self.assigned_at_level = 0;

        for literal in clause.literals() {
            self.add(*literal, assignments);
        }

        debug_assert_ne!(
            self.assigned_at_level, 0,
            "the conflict clause has no literal assigned at the conflict level"
        );
    }

    /// Resolves the working clause with `antecedent` on `pivot`, which must
    /// be in the working clause while `!pivot` is in the antecedent
    fn resolve(&mut self, pivot: Literal, antecedent: &Clause, assignments: &Assignments) {
        debug_assert!(self.contains(pivot));
        debug_assert!(antecedent.contains(!pivot), "antecedent does not imply {}", !pivot);

        self.literals.set(pivot.code(), false);
        self.assigned_at_level -= 1;

        for literal in antecedent.literals().iter().filter(|x| **x != !pivot) {
            self.add(*literal, assignments);
        }
    }

    /// Derives the first-UIP clause of `conflicting`.
    ///
    /// Returns `None` when the conflict happened at level 0, which proves the
    /// formula unsatisfiable.
    pub fn analyze(
        &mut self,
        conflicting: ClauseIdx,
        clauses: &ClauseDatabase,
        assignments: &Assignments,
        trail: &Trail,
    ) -> Option<Learned> {
        let level = trail.decision_level();
        if level == 0 {
            return None;
        }

        self.initialize(level, &clauses[conflicting], assignments);

        // Walk the trail backwards, resolving away current-level literals
        // until only one of them is left
        for literal in trail.literals().iter().rev() {
            if self.assigned_at_level <= 1 {
                break;
            }
            if !self.contains(!*literal) || !assignments.assigned_at_level(literal.var(), level) {
                continue;
            }
            let antecedent = match assignments.get(literal.var()).and_then(|a| a.antecedent()) {
                Some(antecedent) => antecedent,
                None => unreachable!(
                    "{} was resolved past the decision of level {}",
                    literal, level
                ),
            };
            self.resolve(!*literal, &clauses[antecedent], assignments);
        }

        debug_assert_eq!(self.assigned_at_level, 1);
        debug_assert!(self
            .literals()
            .all(|literal| matches!(literal.evaluate(assignments), Some(false))));

        Some(self.learned(assignments))
    }

    fn learned(&self, assignments: &Assignments) -> Learned {
        let level_of = |literal: &Literal| assignments.decision_level(literal.var()).unwrap_or(0);

        let mut literals = self.literals().collect::<Vec<_>>();

        // Asserting literal first, then the deepest remaining literal so that
        // both watches become unassigned together on backtracking
        literals.sort_by_key(|literal| std::cmp::Reverse(level_of(literal)));
        debug_assert_eq!(level_of(&literals[0]), self.level);

        let backtrack_level = literals.get(1).map_or(0, level_of);

        let mut levels = FixedBitSet::with_capacity(self.level + 1);
        for literal in literals.iter() {
            levels.insert(level_of(literal));
        }

        Learned {
            literals,
            backtrack_level,
            lbd: levels.count_ones(..),
        }
    }
}
