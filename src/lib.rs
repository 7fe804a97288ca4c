mod activity;
mod assignments;
mod clause_db;
mod conflict;
mod error;
mod formula;
pub mod generator;
mod heuristics;
mod literal;
mod restart;
mod sign;
mod solver;
mod trail;
mod watched;

pub use assignments::{Assignment, Assignments};
pub use clause_db::{Clause, ClauseDatabase};
pub use error::{Error, ParseError};
pub use formula::Formula;
pub use heuristics::Heuristic;
pub use literal::{Literal, MAX_VARIABLES};
pub use restart::Restarts;
pub use sign::Sign;
pub use solver::{solve, Model, Outcome, Solution, Solver, SolverOptions, Statistics};
pub use trail::Trail;
pub use watched::Watched;

pub type Variable = usize;
pub type ClauseIdx = usize;
pub type DecisionLevel = Variable;

pub trait Evaluate {
    fn evaluate(&self, assignments: &Assignments) -> Option<bool>;
}
