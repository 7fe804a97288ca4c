use crate::{Assignments, Literal, Variable};
use ordered_float::OrderedFloat;
use std::ops::Index;

pub type Score = OrderedFloat<f64>;

const RESCALE_ABOVE: f64 = 1e100;

/// VSIDS activity of every literal.
///
/// Decay is applied lazily: instead of shrinking every score after a
/// conflict, later bumps grow by `1 / decay`, which preserves the order.
pub struct Activity {
    /// Score of each literal (where each literal's code corresponds to its index)
    scores: Vec<Score>,
    /// Position of each literal in the ordered vec
    positions: Vec<usize>,
    /// Literals sorted in increasing order by score
    ordered: Vec<Literal>,
    increment: f64,
    decay: f64,
}

impl Activity {
    #[cfg(test)]
    pub fn new(num_vars: Variable, decay: f64) -> Self {
        Self::with_scores(vec![0.0; num_vars * 2], decay)
    }

    /// Starts from the given per-literal scores, indexed by literal code
    pub fn with_scores(scores: Vec<f64>, decay: f64) -> Self {
        let scores = scores.into_iter().map(OrderedFloat).collect::<Vec<_>>();
        let mut ordered = (0..scores.len()).map(Literal::from_code).collect::<Vec<_>>();
        ordered.sort_by_key(|literal| scores[literal.code()]);

        let mut positions = vec![0; scores.len()];
        for (pos, literal) in ordered.iter().enumerate() {
            positions[literal.code()] = pos;
        }

        Self {
            scores,
            positions,
            ordered,
            increment: 1.0,
            decay,
        }
    }

    /// The unassigned literal with the highest score
    pub fn next_decision(&self, assignments: &Assignments) -> Option<Literal> {
        self.ordered
            .iter()
            .rev()
            .find(|lit| !assignments.is_assigned(lit.var()))
            .copied()
    }

    pub fn bump(&mut self, literal: Literal) {
        let idx = literal.code();
        let score = OrderedFloat(self.scores[idx].0 + self.increment);
        self.scores[idx] = score;

        // Move the literal up past every literal it now outscores (or ties)
        let mut pos = self.positions[idx];
        while let Some(next) = self.ordered.get(pos + 1).copied() {
            if self.scores[next.code()] > score {
                break;
            }
            self.ordered.swap(pos, pos + 1);
            self.positions[next.code()] = pos;
            pos += 1;
        }
        self.positions[idx] = pos;

        debug_assert_eq!(self.ordered[self.positions[idx]], literal);
        debug_assert!(self
            .ordered
            .windows(2)
            .all(|pair| self.scores[pair[0].code()] <= self.scores[pair[1].code()]));
    }

    /// Called once per conflict
    pub fn decay(&mut self) {
        self.increment /= self.decay;
        if self.increment > RESCALE_ABOVE {
            for score in self.scores.iter_mut() {
                *score = OrderedFloat(score.0 / RESCALE_ABOVE);
            }
            self.increment /= RESCALE_ABOVE;
        }
    }
}

impl Index<Literal> for Activity {
    type Output = Score;

    #[inline]
    fn index(&self, literal: Literal) -> &Self::Output {
        &self.scores[literal.code()]
    }
}

#[test]
fn bumped_literals_come_first() {
    use crate::sign::Sign::Positive;

    let mut activity = Activity::new(3, 0.5);
    let (a, b, c) = (Literal::from(1), Literal::from(-2), Literal::from(3));

    activity.bump(a);
    activity.bump(b);
    activity.bump(b);
    assert_eq!(activity.next_decision(&Assignments::new(3)), Some(b));

    // Decayed bumps are worth more than earlier ones
    activity.decay();
    activity.decay();
    activity.bump(c);
    assert_eq!(activity[c], OrderedFloat(4.0));
    assert_eq!(activity.next_decision(&Assignments::new(3)), Some(c));

    // Assigned variables are skipped
    let assigned = Assignments::new_with(vec![None, None, Some(Positive)]);
    assert_eq!(activity.next_decision(&assigned), Some(b));
}

#[test]
fn rescaling_keeps_order() {
    let mut activity = Activity::with_scores(vec![3.0, 1.0, 2.0, 0.0], 1e-60);
    let top = Literal::from_code(0);
    assert_eq!(activity.next_decision(&Assignments::new(2)), Some(top));

    activity.decay();
    activity.decay();
    assert!(activity.increment < RESCALE_ABOVE);
    activity.bump(Literal::from_code(3));
    assert_eq!(
        activity.next_decision(&Assignments::new(2)),
        Some(Literal::from_code(3))
    );
}
