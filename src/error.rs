use std::{io, path::PathBuf};
use thiserror::Error;

/// Malformed DIMACS input. Lines are counted from 1.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: clause appears before the `p cnf` header")]
    MissingHeader { line: usize },

    #[error("line {line}: expected `p cnf <variables> <clauses>`")]
    MalformedHeader { line: usize },

    #[error("line {line}: second `p cnf` header")]
    DuplicateHeader { line: usize },

    #[error("line {line}: `{token}` is not a literal")]
    InvalidLiteral { line: usize, token: String },

    #[error("line {line}: literal {literal} is outside the {declared} declared variables")]
    VariableOutOfRange {
        line: usize,
        literal: isize,
        declared: usize,
    },

    #[error("line {line}: clause is not terminated by 0")]
    UnterminatedClause { line: usize },

    #[error("no `p cnf` header found")]
    NoHeader,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("unknown heuristic {0}, expected a code from 0 to 4")]
    UnknownHeuristic(u8),

    #[error("invalid solver options: {0}")]
    InvalidOptions(String),

    #[error("assumption {0} does not name a variable of the formula")]
    InvalidAssumption(isize),

    #[error("cannot draw clauses of {k} distinct literals over {num_variables} variables")]
    InvalidGenerator { k: usize, num_variables: usize },
}
