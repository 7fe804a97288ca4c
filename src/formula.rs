use crate::{
    error::{Error, ParseError},
    solver::{Outcome, Solver, SolverOptions},
    Literal, Variable, MAX_VARIABLES,
};
use log::warn;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

/// A CNF formula: a conjunction of clauses over `num_variables` variables
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    num_variables: Variable,
    clauses: Vec<Vec<Literal>>,
}

impl Formula {
    pub fn new(num_variables: Variable) -> Self {
        Self {
            num_variables,
            clauses: Vec::new(),
        }
    }

    /// Adds a clause, growing the variable count if it mentions a new variable
    pub fn add_clause(&mut self, literals: impl IntoIterator<Item = Literal>) {
        let clause = literals.into_iter().collect::<Vec<_>>();
        if let Some(max) = clause.iter().map(|literal| literal.var() + 1).max() {
            self.num_variables = self.num_variables.max(max);
        }
        self.clauses.push(clause);
    }

    pub fn num_variables(&self) -> Variable {
        self.num_variables
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> &[Vec<Literal>] {
        &self.clauses
    }

    /// Parses DIMACS CNF.
    ///
    /// Lines starting with `c` are comments and a line starting with `%`
    /// ends the formula. Every clause line must end with `0`.
    pub fn parse(lines: impl IntoIterator<Item = impl AsRef<str>>) -> Result<Self, ParseError> {
        let mut header = None;
        let mut formula = Formula::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let (line, text) = (idx + 1, line.as_ref().trim());

            if text.is_empty() || text.starts_with('c') {
                continue;
            }
            if text.starts_with('%') {
                break;
            }
            if text.starts_with('p') {
                if header.is_some() {
                    return Err(ParseError::DuplicateHeader { line });
                }
                let (num_variables, num_clauses) =
                    parse_header(text).ok_or(ParseError::MalformedHeader { line })?;
                formula.num_variables = num_variables;
                formula.clauses.reserve(num_clauses);
                header = Some(num_clauses);
                continue;
            }
            if header.is_none() {
                return Err(ParseError::MissingHeader { line });
            }

            let declared = formula.num_variables;
            let mut clause = Vec::new();
            for token in text.split_whitespace() {
                let x = token
                    .parse::<isize>()
                    .map_err(|_| ParseError::InvalidLiteral {
                        line,
                        token: token.to_string(),
                    })?;
                if x.unsigned_abs() > declared {
                    return Err(ParseError::VariableOutOfRange {
                        line,
                        literal: x,
                        declared,
                    });
                }
                match Literal::from_dimacs(x) {
                    None => formula.clauses.push(std::mem::take(&mut clause)),
                    Some(literal) => clause.push(literal),
                }
            }
            if !clause.is_empty() {
                return Err(ParseError::UnterminatedClause { line });
            }
        }

        let declared_clauses = header.ok_or(ParseError::NoHeader)?;
        if formula.clauses.len() != declared_clauses {
            warn!(
                "header declares {} clauses but {} were read",
                declared_clauses,
                formula.clauses.len()
            );
        }
        Ok(formula)
    }

    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(io_error)?;
        Ok(Self::parse(lines)?)
    }

    pub fn solve(self, options: SolverOptions) -> Outcome {
        Solver::new(self, options).solve()
    }
}

fn parse_header(line: &str) -> Option<(Variable, usize)> {
    let mut tokens = line.split_whitespace();
    match (
        tokens.next(),
        tokens.next(),
        tokens.next(),
        tokens.next(),
        tokens.next(),
    ) {
        (Some("p"), Some("cnf"), Some(variables), Some(clauses), None) => {
            let variables = variables.parse().ok().filter(|n| *n < MAX_VARIABLES)?;
            Some((variables, clauses.parse().ok()?))
        }
        _ => None,
    }
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.lines())
    }
}

impl From<Vec<Vec<Literal>>> for Formula {
    fn from(clauses: Vec<Vec<Literal>>) -> Self {
        let mut formula = Formula::default();
        for clause in clauses {
            formula.add_clause(clause);
        }
        formula
    }
}

impl From<Vec<Vec<isize>>> for Formula {
    fn from(clauses: Vec<Vec<isize>>) -> Self {
        clauses
            .into_iter()
            .map(|clause| clause.into_iter().map(Literal::from).collect::<Vec<_>>())
            .collect::<Vec<_>>()
            .into()
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "p cnf {} {}", self.num_variables, self.clauses.len())?;
        for clause in self.clauses.iter() {
            for literal in clause {
                write!(f, "{} ", literal)?;
            }
            writeln!(f, "0")?;
        }
        Ok(())
    }
}

#[test]
fn parse_dimacs() {
    let formula = "c a comment\n\
                   p cnf 3 3\n\
                   1 -2 0\n\
                   \n\
                   -1 2 3 0\n\
                   2 0 -3 0\n"
        .parse::<Formula>()
        .unwrap();

    assert_eq!(formula.num_variables(), 3);
    assert_eq!(
        formula,
        Formula::from(vec![vec![1isize, -2], vec![-1, 2, 3], vec![2], vec![-3]])
    );
    assert_eq!(formula.to_string().parse::<Formula>(), Ok(formula));
}

#[test]
fn declared_variables_survive_without_occurrences() {
    let formula = "p cnf 5 1\n1 0\n%\n0\n".parse::<Formula>().unwrap();
    assert_eq!(formula.num_variables(), 5);
    assert_eq!(formula.num_clauses(), 1);
}

#[test]
fn malformed_dimacs() {
    let parse = |text: &str| text.parse::<Formula>().unwrap_err();

    assert_eq!(parse("1 2 0\n"), ParseError::MissingHeader { line: 1 });
    assert_eq!(parse("c nothing\n"), ParseError::NoHeader);
    assert_eq!(parse("p cnf x 2\n"), ParseError::MalformedHeader { line: 1 });
    assert_eq!(parse("p dnf 2 2\n"), ParseError::MalformedHeader { line: 1 });
    assert_eq!(
        parse(&format!("p cnf {} 0\n", usize::MAX)),
        ParseError::MalformedHeader { line: 1 }
    );
    assert_eq!(
        parse(&format!("p cnf {} 0\n", MAX_VARIABLES)),
        ParseError::MalformedHeader { line: 1 }
    );
    assert_eq!(
        parse("p cnf 2 1\np cnf 2 1\n"),
        ParseError::DuplicateHeader { line: 2 }
    );
    assert_eq!(
        parse("p cnf 2 1\n1 -2\n"),
        ParseError::UnterminatedClause { line: 2 }
    );
    assert_eq!(
        parse("p cnf 2 1\n1 -3 0\n"),
        ParseError::VariableOutOfRange {
            line: 2,
            literal: -3,
            declared: 2
        }
    );
    assert_eq!(
        parse(&format!("p cnf 3 1\n{} 0\n", isize::MIN)),
        ParseError::VariableOutOfRange {
            line: 2,
            literal: isize::MIN,
            declared: 3
        }
    );
    assert_eq!(
        parse("p cnf 2 1\n1 b 0\n"),
        ParseError::InvalidLiteral {
            line: 2,
            token: "b".to_string()
        }
    );
}
