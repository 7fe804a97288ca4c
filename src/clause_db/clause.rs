use crate::{Assignments, Evaluate, Literal};

/// A disjunction of literals.
///
/// The first two literals are the watched ones; a unit clause watches its
/// only literal.
#[derive(Clone, Debug)]
pub struct Clause {
    literals: Vec<Literal>,
    learned: bool,
    lbd: usize,
}

/// Outcome of re-examining a clause after one of its watched literals was falsified
#[must_use]
#[derive(Debug, PartialEq)]
pub enum Status {
    /// The other watch is true, or the clause is otherwise undecided
    Ok,
    /// The falsified watch moved to this literal
    Rewatched(Literal),
    /// Every literal but this one is false
    Implied(Literal),
    Conflict,
}

impl Clause {
    /// An input clause, with its watches on the first two literals
    pub fn original(literals: Vec<Literal>) -> Self {
        debug_assert!(!literals.is_empty(), "empty clauses are never stored");
        Self {
            literals,
            learned: false,
            lbd: 0,
        }
    }

    /// A learned clause; `literals[0]` must be its asserting literal
    pub fn learned(literals: Vec<Literal>, lbd: usize) -> Self {
        debug_assert!(!literals.is_empty(), "empty clauses are never learned");
        Self {
            literals,
            learned: true,
            lbd,
        }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn watched(&self) -> &[Literal] {
        &self.literals[..self.literals.len().min(2)]
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_learned(&self) -> bool {
        self.learned
    }

    pub fn lbd(&self) -> usize {
        self.lbd
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.literals.contains(&literal)
    }

    /// True iff a watched literal is true
    pub fn is_satisfied(&self, assignments: &Assignments) -> bool {
        self.watched()
            .iter()
            .any(|literal| matches!(literal.evaluate(assignments), Some(true)))
    }

    /// Restores the 2-watched-literal invariant after `falsified` became false
    /// and produces a new implied literal if one exists
    pub fn update(&mut self, falsified: Literal, assignments: &Assignments) -> Status {
        let literals = &mut self.literals;

        if literals.len() == 1 {
            debug_assert_eq!(literals[0], falsified);
            return Status::Conflict;
        }

        // Keep the falsified watch in slot 1
        if literals[0] == falsified {
            literals.swap(0, 1);
        }
        debug_assert_eq!(literals[1], falsified, "clause does not watch {}", falsified);

        let first = literals[0].evaluate(assignments);
        if first == Some(true) {
            return Status::Ok;
        }

        // Look for any non-false literal to take over the watch
        let replacement = (2..literals.len())
            .find(|idx| !matches!(literals[*idx].evaluate(assignments), Some(false)));

        match (replacement, first) {
            (Some(idx), _) => {
                literals.swap(1, idx);
                Status::Rewatched(literals[1])
            }
            (None, None) => Status::Implied(literals[0]),
            (None, _) => Status::Conflict,
        }
    }
}

impl Evaluate for Clause {
    fn evaluate(&self, assignments: &Assignments) -> Option<bool> {
        let mut undecided = false;
        for literal in self.literals.iter() {
            match literal.evaluate(assignments) {
                Some(true) => return Some(true),
                Some(false) => (),
                None => undecided = true,
            }
        }
        if undecided {
            None
        } else {
            Some(false)
        }
    }
}

#[test]
fn update_binary() {
    use crate::sign::Sign::{Negative, Positive};

    let (l0, l1) = (Literal::new(0, true), Literal::new(1, true));
    let clause = &mut Clause::original(vec![l0, l1]);

    // l0 falsified, l1 unassigned
    assert_eq!(
        clause.update(l0, &Assignments::new_with(vec![Some(Negative), None])),
        Status::Implied(l1)
    );
    assert_eq!(clause.watched(), &[l1, l0]);

    // l0 falsified, l1 already true
    assert_eq!(
        clause.update(
            l0,
            &Assignments::new_with(vec![Some(Negative), Some(Positive)])
        ),
        Status::Ok
    );

    // Both false
    assert_eq!(
        clause.update(
            l1,
            &Assignments::new_with(vec![Some(Negative), Some(Negative)])
        ),
        Status::Conflict
    );
}

#[test]
fn update_ternary() {
    use crate::sign::Sign::{Negative, Positive};

    let (l0, l1, l2) = (
        Literal::new(0, true),
        Literal::new(1, true),
        Literal::new(2, true),
    );
    let clause = &mut Clause::original(vec![l0, !l1, l2]);

    // l0 falsified: the watch moves to l2
    assert_eq!(
        clause.update(l0, &Assignments::new_with(vec![Some(Negative), None, None])),
        Status::Rewatched(l2)
    );
    assert_eq!(clause.watched(), &[!l1, l2]);

    // !l1 falsified while l0 is false: l2 is implied
    assert_eq!(
        clause.update(
            !l1,
            &Assignments::new_with(vec![Some(Negative), Some(Positive), None])
        ),
        Status::Implied(l2)
    );
    assert_eq!(clause.watched(), &[l2, !l1]);

    // l2 falsified too: conflict
    assert_eq!(
        clause.update(
            l2,
            &Assignments::new_with(vec![Some(Negative), Some(Positive), Some(Negative)])
        ),
        Status::Conflict
    );

    // A true non-watched literal takes over the watch
    let clause = &mut Clause::original(vec![l0, l1, l2]);
    assert_eq!(
        clause.update(
            l1,
            &Assignments::new_with(vec![None, Some(Negative), Some(Positive)])
        ),
        Status::Rewatched(l2)
    );
    assert!(clause.is_satisfied(&Assignments::new_with(vec![
        None,
        Some(Negative),
        Some(Positive)
    ])));
}

#[test]
fn unit_clause_watches_itself() {
    use crate::sign::Sign::Negative;

    let l0 = Literal::new(0, true);
    let clause = &mut Clause::original(vec![l0]);
    assert_eq!(clause.watched(), &[l0]);
    assert_eq!(
        clause.update(l0, &Assignments::new_with(vec![Some(Negative)])),
        Status::Conflict
    );
    assert_eq!(
        clause.evaluate(&Assignments::new_with(vec![Some(Negative)])),
        Some(false)
    );
}
