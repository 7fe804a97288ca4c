use crate::{ClauseIdx, Watched};
use std::ops::{Index, IndexMut};

pub mod clause;

pub use clause::Clause;

/// Owns every original and learned clause.
///
/// Deleted clauses leave an empty slot that a later insertion reuses, so a
/// `ClauseIdx` stays valid exactly as long as its clause is alive.
#[derive(Clone, Debug, Default)]
pub struct ClauseDatabase {
    clauses: Vec<Option<Clause>>,
    free: Vec<ClauseIdx>,
    learned: Vec<ClauseIdx>,
}

impl ClauseDatabase {
    pub fn new(num_clauses: usize) -> Self {
        Self {
            clauses: Vec::with_capacity(num_clauses),
            free: Vec::new(),
            learned: Vec::new(),
        }
    }

    /// Stores `clause` and registers its watched literals
    pub fn insert(&mut self, clause: Clause, watched: &mut Watched) -> ClauseIdx {
        let learned = clause.is_learned();
        let literals = clause.watched().to_vec();

        let idx = match self.free.pop() {
            Some(idx) => {
                self.clauses[idx] = Some(clause);
                idx
            }
            None => {
                self.clauses.push(Some(clause));
                self.clauses.len() - 1
            }
        };

        for literal in literals {
            watched.watch(literal, idx);
        }
        if learned {
            self.learned.push(idx);
        }
        idx
    }

    /// Empties the slot at `idx` and drops its watches, leaving `learned` as is
    fn release(&mut self, idx: ClauseIdx, watched: &mut Watched) -> Option<Clause> {
        let clause = self.clauses.get_mut(idx)?.take()?;
        for literal in clause.watched() {
            watched.unwatch(*literal, idx);
        }
        self.free.push(idx);
        Some(clause)
    }

    /// Deletes every learned clause for which `keep` is false, returning their indices
    pub fn retain_learned(
        &mut self,
        mut keep: impl FnMut(&Clause) -> bool,
        watched: &mut Watched,
    ) -> Vec<ClauseIdx> {
        let mut doomed = Vec::new();
        let clauses = &self.clauses;
        self.learned.retain(|idx| match &clauses[*idx] {
            Some(clause) if keep(clause) => true,
            Some(_) => {
                doomed.push(*idx);
                false
            }
            None => false,
        });

        for idx in doomed.iter() {
            let _ = self.release(*idx, watched);
        }
        doomed
    }

    pub fn contains(&self, idx: ClauseIdx) -> bool {
        matches!(self.clauses.get(idx), Some(Some(_)))
    }

    /// Number of slots ever allocated, live or not
    pub fn capacity(&self) -> usize {
        self.clauses.len()
    }

    pub fn len(&self) -> usize {
        self.clauses.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn learned(&self) -> &[ClauseIdx] {
        &self.learned
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> + '_ {
        self.clauses.iter().flatten()
    }
}

impl Index<ClauseIdx> for ClauseDatabase {
    type Output = Clause;

    fn index(&self, idx: ClauseIdx) -> &Self::Output {
        match &self.clauses[idx] {
            Some(clause) => clause,
            None => panic!("clause {} was deleted", idx),
        }
    }
}

impl IndexMut<ClauseIdx> for ClauseDatabase {
    fn index_mut(&mut self, idx: ClauseIdx) -> &mut Self::Output {
        match &mut self.clauses[idx] {
            Some(clause) => clause,
            None => panic!("clause {} was deleted", idx),
        }
    }
}

#[test]
fn deleting_learned_clauses() {
    use crate::Literal;

    let mut watched = Watched::new(3);
    let mut db = ClauseDatabase::new(3);
    let (a, b, c) = (Literal::from(1), Literal::from(2), Literal::from(-3));

    let original = db.insert(Clause::original(vec![a, b, c]), &mut watched);
    let short = db.insert(Clause::learned(vec![!a, b], 2), &mut watched);
    let long = db.insert(Clause::learned(vec![!b, c, !a], 3), &mut watched);

    assert_eq!(watched[a], vec![original]);
    assert_eq!(watched[!a], vec![short]);
    assert_eq!(watched[b], vec![original, short]);
    assert_eq!(db.learned(), &[short, long]);

    let deleted = db.retain_learned(|clause| clause.lbd() <= 2, &mut watched);
    assert_eq!(deleted, vec![long]);
    assert!(!db.contains(long));
    assert!(watched[!b].is_empty());
    assert!(watched[c].is_empty());
    assert_eq!(db.len(), 2);
    assert_eq!(db.learned(), &[short]);

    // The freed slot is reused
    let reused = db.insert(Clause::learned(vec![c], 1), &mut watched);
    assert_eq!(reused, long);
    assert_eq!(watched[c], vec![reused]);
    assert_eq!(db.clauses().count(), 3);
}

#[test]
fn deleting_many_learned_clauses_at_once() {
    use crate::Literal;

    let mut watched = Watched::new(4);
    let mut db = ClauseDatabase::new(0);
    let lbds = [4, 1, 5, 2, 6, 1];
    let learned = lbds
        .iter()
        .enumerate()
        .map(|(i, lbd)| {
            let first = Literal::new(i % 4, true);
            let second = Literal::new((i + 1) % 4, false);
            db.insert(Clause::learned(vec![first, second], *lbd), &mut watched)
        })
        .collect::<Vec<_>>();

    let deleted = db.retain_learned(|clause| clause.lbd() <= 2, &mut watched);
    assert_eq!(deleted, vec![learned[0], learned[2], learned[4]]);
    assert_eq!(db.learned(), &[learned[1], learned[3], learned[5]]);
    assert_eq!(db.len(), 3);

    for code in 0..8 {
        let watchers = &watched[Literal::from_code(code)];
        assert!(watchers.iter().all(|idx| db.contains(*idx)));
    }
    let watches = (0..8)
        .map(|code| watched[Literal::from_code(code)].len())
        .sum::<usize>();
    assert_eq!(watches, 6);
}
