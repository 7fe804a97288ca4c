use std::process::ExitCode;

use cdcl::{generator::PhaseTransition, Error, Heuristic, SolverOptions};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

/// Sweeps the clause/variable ratio of random k-CNF formulas and prints the
/// fraction of satisfiable ones as CSV
#[derive(Parser, Debug)]
#[command(name = "phase", version, about)]
struct Args {
    /// Literals per clause
    #[arg(short, default_value_t = 3)]
    k: usize,

    /// Variables per formula
    #[arg(short, default_value_t = 150)]
    n: usize,

    #[arg(long, default_value_t = 0.0)]
    rstart: f64,

    #[arg(long, default_value_t = 5.0)]
    rend: f64,

    #[arg(long, default_value_t = 0.2)]
    rinterval: f64,

    /// Formulas solved per ratio
    #[arg(long, default_value_t = 50)]
    samples: usize,

    #[arg(long, default_value_t = 1)]
    heuristic: u8,

    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> ExitCode {
    env_logger::init();
    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    if !(args.rinterval > 0.0) {
        return Err(Error::InvalidOptions("rinterval must be positive".into()));
    }

    let experiment = PhaseTransition {
        k: args.k,
        num_variables: args.n,
        samples: args.samples,
        options: SolverOptions {
            heuristic: Heuristic::try_from(args.heuristic)?,
            ..SolverOptions::default()
        },
    };
    let mut rng = StdRng::seed_from_u64(args.seed);

    println!("ratio,sat_probability,mean_decisions");
    let steps = ((args.rend.max(args.rstart) - args.rstart) / args.rinterval).round() as usize;
    for step in 0..=steps {
        let ratio = args.rstart + step as f64 * args.rinterval;
        let point = experiment.probe(ratio, &mut rng)?;
        println!(
            "{:.3},{:.3},{:.1}",
            point.ratio, point.sat_probability, point.mean_decisions
        );
    }
    Ok(())
}
