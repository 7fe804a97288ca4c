use crate::{ClauseIdx, Literal, Variable};
use std::ops::{Index, IndexMut};

/// For each literal, the clauses currently watching it.
///
/// Holds indices only; the clause database owns the clauses and must keep
/// this index in step when it inserts or deletes one.
#[derive(Clone, Debug)]
pub struct Watched {
    watched: Vec<Vec<ClauseIdx>>,
}

impl Watched {
    pub fn new(num_vars: Variable) -> Self {
        Self {
            watched: vec![Vec::new(); num_vars * 2],
        }
    }

    pub fn watch(&mut self, literal: Literal, clause: ClauseIdx) {
        debug_assert!(!self[literal].contains(&clause));
        self[literal].push(clause);
    }

    pub fn unwatch(&mut self, literal: Literal, clause: ClauseIdx) {
        let watchers = &mut self[literal];
        if let Some(pos) = watchers.iter().position(|idx| *idx == clause) {
            watchers.swap_remove(pos);
        }
    }

    /// Takes the watchers of `literal`, leaving its list empty until it is put back
    pub fn take(&mut self, literal: Literal) -> Vec<ClauseIdx> {
        std::mem::take(&mut self[literal])
    }
}

impl Index<Literal> for Watched {
    type Output = Vec<ClauseIdx>;

    #[inline]
    fn index(&self, literal: Literal) -> &Self::Output {
        &self.watched[literal.code()]
    }
}

impl IndexMut<Literal> for Watched {
    #[inline]
    fn index_mut(&mut self, literal: Literal) -> &mut Self::Output {
        &mut self.watched[literal.code()]
    }
}
