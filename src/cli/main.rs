use std::time::Instant;

use rand::SeedableRng;

use trisat::{
    generic::random::MinimalPCG32,
    procedures::{evaluate::formula_satisfied, solve::solve},
    reports::Report,
    types::err::{self},
};

mod config_io;
mod misc;
mod parse;
mod read;

use config_io::ConfigIO;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = match parse::config::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            println!("c Configuration error: {e}");
            std::process::exit(1);
        }
    };
    let config_io = ConfigIO::from_args(&matches);

    let paths = match read::collect_paths(&config_io.paths) {
        Ok(paths) => paths,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    for path in paths {
        let formula = match read::load_dimacs(&path) {
            Ok(formula) => formula,
            Err(e) => {
                println!("c {e}");
                std::process::exit(1);
            }
        };

        for solver in &config_io.solvers {
            println!("c {} {solver}", path.display());

            // Each solve is seeded afresh, so an outcome does not depend on the solves before.
            let mut rng = MinimalPCG32::seed_from_u64(config.seed);

            let start = Instant::now();
            let outcome = match solve(&formula, *solver, &config, &mut rng) {
                Ok(outcome) => outcome,

                Err(err::ErrorKind::Config(e)) => {
                    println!("c Configuration error: {e}");
                    std::process::exit(1);
                }

                Err(e) => {
                    println!("c Solve error: {e}");
                    std::process::exit(2);
                }
            };
            let time = start.elapsed();

            if let Some(model) = outcome.model() {
                if !formula_satisfied(&formula, model) {
                    println!("c {solver} returned a valuation which is not a model");
                    std::process::exit(2);
                }
            }

            if solver.is_complete() && outcome.report() == Report::Unknown {
                println!("c {solver} made no decision");
                std::process::exit(2);
            }

            misc::write_outcome(&formula, &outcome, time, config_io.show_model);
        }
    }
}
