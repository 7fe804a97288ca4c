use crate::{Assignments, Evaluate, Sign, Variable};

/// Exclusive bound on variable indices, so that every literal code fits a `usize`
pub const MAX_VARIABLES: Variable = Variable::MAX >> 1;

/// A variable together with a polarity.
///
/// Variables are 0-indexed internally; the DIMACS form (`to_dimacs`,
/// `Display`) is 1-indexed and signed.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Literal {
    code: Variable,
}

impl Literal {
    #[inline]
    pub fn new(var: Variable, sign: impl Into<Sign>) -> Self {
        assert!(var < MAX_VARIABLES);
        let sign = sign.into();
        Literal {
            code: (var << 1) | sign.is_positive() as Variable,
        }
    }

    #[inline]
    pub(crate) fn from_code(code: usize) -> Literal {
        Self { code }
    }

    #[inline]
    pub(crate) fn code(self) -> usize {
        self.code
    }

    #[inline]
    pub fn var(self) -> Variable {
        self.code >> 1
    }

    #[inline]
    pub fn sign(self) -> Sign {
        ((self.code & 1) == 1).into()
    }

    /// Reads a signed DIMACS literal. Returns `None` for the terminator `0`.
    ///
    /// Callers bound `x` by the declared variable count first; a magnitude
    /// above `MAX_VARIABLES` panics.
    pub fn from_dimacs(x: isize) -> Option<Self> {
        match x {
            0 => None,
            _ => Some(Self::new(x.unsigned_abs() - 1, x > 0)),
        }
    }

    pub fn to_dimacs(self) -> isize {
        let var = self.var() as isize + 1;
        if self.sign().is_positive() {
            var
        } else {
            -var
        }
    }
}

impl Evaluate for Literal {
    #[inline]
    fn evaluate(&self, assignments: &Assignments) -> Option<bool> {
        assignments
            .get(self.var())
            .map(|assignment| assignment.sign() == self.sign())
    }
}

impl std::ops::Not for Literal {
    type Output = Literal;

    #[inline]
    fn not(self) -> Self::Output {
        Literal {
            code: self.code ^ 1,
        }
    }
}

impl From<isize> for Literal {
    fn from(x: isize) -> Self {
        assert_ne!(x, 0, "literals can only be parsed from non-zero inputs");
        Self::new(x.unsigned_abs() - 1, x > 0)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}

impl std::fmt::Debug for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.sign(), self.var() + 1)
    }
}

#[test]
fn dimacs_literals() {
    let lit = Literal::from(-3);
    assert_eq!(lit.var(), 2);
    assert_eq!(lit.sign(), Sign::Negative);
    assert_eq!(lit.to_dimacs(), -3);
    assert_eq!((!lit).to_dimacs(), 3);
    assert_eq!(!!lit, lit);
    assert_eq!(Literal::from_dimacs(0), None);
    assert_eq!(format!("{}", Literal::new(0, true)), "1");
}
