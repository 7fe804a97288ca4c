use crate::{DecisionLevel, Variable};
use fixedbitset::FixedBitSet;

pub mod assignment;
pub use assignment::Assignment;

/// Value, decision level and antecedent of every variable
#[derive(Clone, Debug, PartialEq)]
pub struct Assignments {
    assignments: Vec<Option<Assignment>>,
}

impl Assignments {
    pub fn new(num_vars: Variable) -> Self {
        Self {
            assignments: vec![None; num_vars],
        }
    }

    #[cfg(test)]
    pub fn new_with(signs: Vec<Option<crate::Sign>>) -> Self {
        let mut x = Self::new(signs.len());
        for (i, sign) in signs.into_iter().enumerate() {
            if let Some(sign) = sign {
                x.set(i, Assignment::new(sign, 0, None));
            }
        }
        x
    }

    pub fn num_variables(&self) -> Variable {
        self.assignments.len()
    }

    #[inline]
    pub fn get(&self, var: Variable) -> Option<&Assignment> {
        self.assignments[var].as_ref()
    }

    #[inline]
    pub fn is_assigned(&self, var: Variable) -> bool {
        self.assignments[var].is_some()
    }

    pub fn decision_level(&self, var: Variable) -> Option<DecisionLevel> {
        self.get(var).map(Assignment::level)
    }

    pub fn assigned_at_level(&self, var: Variable, level: DecisionLevel) -> bool {
        self.decision_level(var) == Some(level)
    }

    pub fn set(&mut self, var: Variable, assignment: Assignment) {
        debug_assert!(
            self.assignments[var].is_none(),
            "variable {} is already assigned",
            var + 1
        );
        self.assignments[var] = Some(assignment);
    }

    pub fn remove(&mut self, var: Variable) {
        self.assignments[var] = None;
    }

    /// Clears every antecedent pointing at one of the `deleted` clauses
    pub fn forget_antecedents(&mut self, deleted: &FixedBitSet) {
        for assignment in self.assignments.iter_mut().flatten() {
            if matches!(assignment.antecedent(), Some(idx) if deleted.contains(idx)) {
                assignment.forget_antecedent();
            }
        }
    }

    pub fn unassigned(&self) -> impl Iterator<Item = Variable> + '_ {
        self.assignments
            .iter()
            .enumerate()
            .filter(|(_, assignment)| assignment.is_none())
            .map(|(var, _)| var)
    }
}
