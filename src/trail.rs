use crate::{Assignments, DecisionLevel, Literal, Variable};

/// Every assigned literal in the order it was assigned
#[derive(Clone, Debug)]
pub struct Trail {
    literals: Vec<Literal>,
    /// Trail index of the decision that opened each level above 0
    level_starts: Vec<usize>,
}

impl Trail {
    pub fn new(num_vars: Variable) -> Self {
        Self {
            literals: Vec::with_capacity(num_vars),
            level_starts: Vec::new(),
        }
    }

    pub fn push(&mut self, literal: Literal) {
        self.literals.push(literal);
    }

    /// Opens a new decision level; the next pushed literal is its decision
    pub fn new_decision_level(&mut self) {
        self.level_starts.push(self.literals.len());
    }

    pub fn decision_level(&self) -> DecisionLevel {
        self.level_starts.len()
    }

    /// Unassigns everything above `level`, returning how many literals were removed
    pub fn revert_to(&mut self, level: DecisionLevel, assignments: &mut Assignments) -> usize {
        if level >= self.level_starts.len() {
            return 0;
        }
        let new_end = self.level_starts[level];
        let removed = self.literals.len() - new_end;
        for literal in self.literals.drain(new_end..) {
            assignments.remove(literal.var());
        }
        self.level_starts.truncate(level);
        removed
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The decision literal of `level`, if that level is open
    #[cfg(test)]
    pub fn decision(&self, level: DecisionLevel) -> Option<Literal> {
        level
            .checked_sub(1)
            .and_then(|idx| self.level_starts.get(idx))
            .map(|start| self.literals[*start])
    }
}

#[test]
fn rewriting_history() {
    use crate::{assignments::Assignment, sign::Sign::Positive};

    let mut trail = Trail::new(6);
    let mut assignments = Assignments::new(6);

    let mut set = |trail: &mut Trail, level, var| {
        assignments.set(var, Assignment::new(Positive, level, None));
        trail.push(Literal::new(var, Positive));
    };

    // Decision level 0
    set(&mut trail, 0, 0);

    // Decision level 1
    trail.new_decision_level();
    set(&mut trail, 1, 1);
    set(&mut trail, 1, 2);

    // Decision level 2
    trail.new_decision_level();
    set(&mut trail, 2, 3);
    set(&mut trail, 2, 4);
    set(&mut trail, 2, 5);

    assert_eq!(trail.decision_level(), 2);
    assert_eq!(trail.decision(1), Some(Literal::new(1, Positive)));
    assert_eq!(trail.decision(2), Some(Literal::new(3, Positive)));
    assert_eq!(trail.decision(0), None);

    {
        let (mut trail, mut assignments) = (trail.clone(), assignments.clone());
        assert_eq!(trail.revert_to(0, &mut assignments), 5);
        assert_eq!(trail.literals, vec![Literal::new(0, Positive)]);
        assert!(trail.level_starts.is_empty());
        assert!(assignments.get(1).is_none());
        assert!(assignments.get(0).is_some());
    }

    {
        let (mut trail, mut assignments) = (trail.clone(), assignments.clone());
        trail.revert_to(1, &mut assignments);
        assert_eq!(
            trail.literals,
            vec![
                Literal::new(0, Positive),
                Literal::new(1, Positive),
                Literal::new(2, Positive)
            ]
        );
        assert_eq!(trail.level_starts, vec![1]);
        assert_eq!(assignments.unassigned().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    // Reverting to the current level is a no-op
    assert_eq!(trail.revert_to(2, &mut assignments), 0);
    assert_eq!(trail.len(), 6);
    assert_eq!(trail.level_starts, vec![1, 3]);
}
