use std::{path::PathBuf, process::ExitCode, time::Instant};

use cdcl::*;
use clap::Parser;

/// Decides a DIMACS CNF formula
#[derive(Parser, Debug)]
#[command(name = "sat", version, about)]
struct Args {
    /// DIMACS CNF file
    input: PathBuf,

    /// 0 = 2-clause, 1 = VSIDS, 2 = unassigned occurrence, 3 = random, 4 = Jeroslow-Wang
    #[arg(long, default_value_t = 1)]
    heuristic: u8,

    /// Conflicts before the first restart
    #[arg(long = "conflicts_limit", default_value_t = 100)]
    conflicts_limit: usize,

    /// Initial LBD threshold for keeping learned clauses across restarts
    #[arg(long = "lbd_limit", default_value_t = 3.0)]
    lbd_limit: f64,

    /// DIMACS literals forced to hold
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    assumption: Vec<isize>,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(Solution::Sat(_)) => ExitCode::from(10),
        Ok(Solution::Unsat) => ExitCode::from(20),
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Solution, Error> {
    let defaults = SolverOptions::default();
    let options = SolverOptions {
        heuristic: Heuristic::try_from(args.heuristic)?,
        conflicts_limit: args.conflicts_limit,
        lbd_limit: args.lbd_limit,
        seed: args.seed.unwrap_or(defaults.seed),
        ..defaults
    };

    let start = Instant::now();
    let formula = Formula::parse_file(&args.input)?;
    let outcome = solve(formula, options, &args.assumption)?;

    print_solution(&outcome.solution);
    print_statistics(&outcome.statistics);
    println!("c solved in {}ms", start.elapsed().as_millis());
    Ok(outcome.solution)
}

fn print_solution(solution: &Solution) {
    match solution {
        Solution::Unsat => println!("s UNSATISFIABLE"),
        Solution::Sat(model) => {
            println!("s SATISFIABLE");
            print!("v");
            for literal in model.literals() {
                print!(" {}", literal);
            }
            println!(" 0");
        }
    }
}

fn print_statistics(stats: &Statistics) {
    println!("c decisions:          {}", stats.decisions);
    println!("c unit propagations:  {}", stats.unit_propagations);
    println!("c conflicts:          {}", stats.conflicts);
    println!("c restarts:           {}", stats.restarts);
    println!("c learned clauses:    {}", stats.learned_clauses);
    println!("c deleted clauses:    {}", stats.deleted_clauses);
}
