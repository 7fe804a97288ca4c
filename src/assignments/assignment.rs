use crate::{ClauseIdx, DecisionLevel, Literal, Sign, Variable};

/// The value of one variable together with where it came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    sign: Sign,
    level: DecisionLevel,
    /// `None` for decisions, assumptions and input unit clauses
    antecedent: Option<ClauseIdx>,
}

impl Assignment {
    pub fn new(sign: Sign, level: DecisionLevel, antecedent: Option<ClauseIdx>) -> Self {
        Self {
            sign,
            level,
            antecedent,
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn level(&self) -> DecisionLevel {
        self.level
    }

    pub fn antecedent(&self) -> Option<ClauseIdx> {
        self.antecedent
    }

    /// The literal this assignment makes true
    pub fn literal(&self, var: Variable) -> Literal {
        Literal::new(var, self.sign)
    }

    pub(crate) fn forget_antecedent(&mut self) {
        self.antecedent = None;
    }
}
