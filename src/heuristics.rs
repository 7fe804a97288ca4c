use crate::{
    activity::Activity,
    clause_db::{Clause, ClauseDatabase},
    error::Error,
    Assignments, Evaluate, Literal, Variable,
};
use ordered_float::OrderedFloat;
use rand::{rngs::StdRng, seq::IteratorRandom, Rng, SeedableRng};
use std::cmp::Reverse;

/// Branching strategy, chosen once per solver run.
///
/// The numeric codes are the ones accepted on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Most occurrences in unsatisfied binary clauses, random otherwise
    TwoClause,
    /// Highest decaying activity from learned clauses
    #[default]
    Vsids,
    /// Most occurrences in unsatisfied clauses
    UnassignedOccurrence,
    Random,
    /// Highest sum of 2^-|clause| over the clauses containing the variable
    JeroslowWang,
}

impl Heuristic {
    /// Every heuristic, indexed by its code
    pub const ALL: [Heuristic; 5] = [
        Heuristic::TwoClause,
        Heuristic::Vsids,
        Heuristic::UnassignedOccurrence,
        Heuristic::Random,
        Heuristic::JeroslowWang,
    ];

    pub fn code(self) -> u8 {
        match self {
            Heuristic::TwoClause => 0,
            Heuristic::Vsids => 1,
            Heuristic::UnassignedOccurrence => 2,
            Heuristic::Random => 3,
            Heuristic::JeroslowWang => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::TwoClause => "2-clause",
            Heuristic::Vsids => "vsids",
            Heuristic::UnassignedOccurrence => "unassigned-occurrence",
            Heuristic::Random => "random",
            Heuristic::JeroslowWang => "jeroslow-wang",
        }
    }
}

impl TryFrom<u8> for Heuristic {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(Error::UnknownHeuristic(code))
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Picks decision literals according to one `Heuristic`
pub(crate) struct Brancher {
    heuristic: Heuristic,
    activity: Option<Activity>,
    rng: StdRng,
}

impl Brancher {
    pub fn new(
        heuristic: Heuristic,
        num_vars: Variable,
        clauses: &ClauseDatabase,
        decay: f64,
        seed: u64,
    ) -> Self {
        // VSIDS starts from the literal occurrence counts of the input
        let activity = match heuristic {
            Heuristic::Vsids => {
                let mut scores = vec![0.0; num_vars * 2];
                for literal in clauses.clauses().flat_map(Clause::literals) {
                    scores[literal.code()] += 1.0;
                }
                Some(Activity::with_scores(scores, decay))
            }
            _ => None,
        };

        Self {
            heuristic,
            activity,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Chooses an unassigned literal, or `None` if every variable is assigned
    pub fn pick(&mut self, assignments: &Assignments, clauses: &ClauseDatabase) -> Option<Literal> {
        let literal = match self.heuristic {
            Heuristic::Vsids => self
                .activity
                .as_ref()
                .and_then(|activity| activity.next_decision(assignments)),
            Heuristic::UnassignedOccurrence => most_frequent(assignments, clauses, |_| true)
                .or_else(|| self.random(assignments)),
            Heuristic::TwoClause => {
                most_frequent(assignments, clauses, |clause| clause.len() == 2)
                    .or_else(|| self.random(assignments))
            }
            Heuristic::JeroslowWang => jeroslow_wang(assignments, clauses),
            Heuristic::Random => self.random(assignments),
        };

        debug_assert!(
            literal.map_or(true, |literal| !assignments.is_assigned(literal.var())),
            "{} picked the assigned literal {:?}",
            self.heuristic,
            literal
        );
        literal
    }

    /// Rewards the literals of a freshly learned clause
    pub fn on_learned(&mut self, literals: &[Literal]) {
        if let Some(activity) = self.activity.as_mut() {
            activity.decay();
            for literal in literals {
                activity.bump(*literal);
            }
        }
    }

    fn random(&mut self, assignments: &Assignments) -> Option<Literal> {
        let var = assignments.unassigned().choose(&mut self.rng)?;
        Some(Literal::new(var, self.rng.gen_bool(0.5)))
    }
}

/// The unassigned literal occurring in the most unsatisfied `counted` clauses
fn most_frequent(
    assignments: &Assignments,
    clauses: &ClauseDatabase,
    counted: impl Fn(&Clause) -> bool,
) -> Option<Literal> {
    let mut counts = vec![0usize; assignments.num_variables() * 2];

    for clause in clauses.clauses().filter(|clause| counted(clause)) {
        if clause.evaluate(assignments) == Some(true) {
            continue;
        }
        for literal in clause.literals() {
            if !assignments.is_assigned(literal.var()) {
                counts[literal.code()] += 1;
            }
        }
    }

    counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .max_by_key(|(code, count)| (**count, Reverse(*code)))
        .map(|(code, _)| Literal::from_code(code))
}

fn jeroslow_wang(assignments: &Assignments, clauses: &ClauseDatabase) -> Option<Literal> {
    let mut scores = vec![0.0f64; assignments.num_variables() * 2];
    for clause in clauses.clauses() {
        let weight = 0.5f64.powi(clause.len().min(i32::MAX as usize) as i32);
        for literal in clause.literals() {
            scores[literal.code()] += weight;
        }
    }

    let polarities = |var: Variable| {
        (
            scores[Literal::new(var, true).code()],
            scores[Literal::new(var, false).code()],
        )
    };

    assignments
        .unassigned()
        .max_by_key(|var| {
            let (positive, negative) = polarities(*var);
            (OrderedFloat(positive + negative), Reverse(*var))
        })
        .map(|var| {
            let (positive, negative) = polarities(var);
            Literal::new(var, positive >= negative)
        })
}

#[cfg(test)]
fn database(clauses: &[&[isize]]) -> ClauseDatabase {
    let mut watched = crate::Watched::new(8);
    let mut db = ClauseDatabase::new(clauses.len());
    for clause in clauses {
        let literals = clause.iter().map(|x| Literal::from(*x)).collect();
        let _ = db.insert(Clause::original(literals), &mut watched);
    }
    db
}

#[test]
fn heuristic_codes() {
    for heuristic in Heuristic::ALL.iter() {
        assert_eq!(Heuristic::try_from(heuristic.code()).ok(), Some(*heuristic));
    }
    assert!(matches!(
        Heuristic::try_from(5),
        Err(Error::UnknownHeuristic(5))
    ));
    assert_eq!(Heuristic::default().code(), 1);
}

#[test]
fn never_picks_assigned_variables() {
    use crate::sign::Sign::{Negative, Positive};

    let db = database(&[&[1, 2, 3], &[-1, 2], &[-2, -3, 4], &[3, 4]]);
    let assignments = Assignments::new_with(vec![Some(Positive), None, Some(Negative), None]);

    for heuristic in Heuristic::ALL.iter() {
        let mut brancher = Brancher::new(*heuristic, 4, &db, 0.9, 7);
        for _ in 0..10 {
            let literal = brancher.pick(&assignments, &db).unwrap();
            assert!(
                literal.var() == 1 || literal.var() == 3,
                "{} picked {:?}",
                heuristic,
                literal
            );
        }
    }

    let full = Assignments::new_with(vec![Some(Positive); 4]);
    for heuristic in Heuristic::ALL.iter() {
        let mut brancher = Brancher::new(*heuristic, 4, &db, 0.9, 7);
        assert_eq!(brancher.pick(&full, &db), None);
    }
}

#[test]
fn occurrence_counts() {
    use crate::sign::Sign::Positive;

    let db = database(&[&[1, -2, 3], &[-2, 4], &[-2, -4], &[4, 3, 1]]);
    let assignments = Assignments::new(4);

    let mut brancher = Brancher::new(Heuristic::UnassignedOccurrence, 4, &db, 0.9, 0);
    assert_eq!(brancher.pick(&assignments, &db), Some(Literal::from(-2)));

    // Only the binary clauses count: -2 appears in both
    let mut brancher = Brancher::new(Heuristic::TwoClause, 4, &db, 0.9, 0);
    assert_eq!(brancher.pick(&assignments, &db), Some(Literal::from(-2)));

    // Satisfied clauses are ignored
    let assignments = Assignments::new_with(vec![Some(Positive), None, None, None]);
    let mut brancher = Brancher::new(Heuristic::UnassignedOccurrence, 4, &db, 0.9, 0);
    assert_eq!(brancher.pick(&assignments, &db), Some(Literal::from(-2)));
}

#[test]
fn two_clause_falls_back_to_random() {
    let db = database(&[&[1, 2, 3], &[-1, -2, -3]]);
    let mut brancher = Brancher::new(Heuristic::TwoClause, 3, &db, 0.9, 3);
    assert!(brancher.pick(&Assignments::new(3), &db).is_some());
}

#[test]
fn jeroslow_wang_prefers_short_clauses() {
    let db = database(&[&[1, 2, 3, 4], &[-3, 1, 2, 4], &[-4, 2], &[-4, 3]]);
    let mut brancher = Brancher::new(Heuristic::JeroslowWang, 4, &db, 0.9, 0);
    assert_eq!(brancher.pick(&Assignments::new(4), &db), Some(Literal::from(-4)));
}

#[test]
fn vsids_follows_learned_clauses() {
    let db = database(&[&[1, 2], &[-1, 2], &[3, -2]]);
    let mut brancher = Brancher::new(Heuristic::Vsids, 3, &db, 0.9, 0);

    // 2 occurs most often in the input
    assert_eq!(brancher.pick(&Assignments::new(3), &db), Some(Literal::from(2)));

    brancher.on_learned(&[Literal::from(-3)]);
    brancher.on_learned(&[Literal::from(-3), Literal::from(1)]);
    assert_eq!(brancher.pick(&Assignments::new(3), &db), Some(Literal::from(-3)));
}
