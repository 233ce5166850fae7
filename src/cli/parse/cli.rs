use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use trisat::config::{GSATConfig, Noise, Solver, WalkSATConfig};

pub fn cli() -> Command {
    let gsat = GSATConfig::default();
    let walksat = WalkSATConfig::default();
    let (noise_min, noise_max) = walksat.noise.min_max();

    Command::new("trisat")
        .about("Determines whether formulas are satisfiable, with GSAT, WalkSAT, and DPLL")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("paths")
            .required(true)
            .trailing_var_arg(true)
            .num_args(1..)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF files to solve, or directories of such files.")
            .long_help("The DIMACS form CNF files to solve, or directories of such files.

Each file is solved as a separate formula.
For a directory, each file with a 'cnf' extension is solved, in order of name."))

        .arg(Arg::new("solver")
            .long("solver")
            .short('s')
            .value_name("SOLVER")
            .value_parser(clap::builder::ValueParser::new(solver_parser))
            .required(false)
            .num_args(1)
            .action(ArgAction::Append)
            .help("A solver to use, may be given multiple times.
Default: gsat, walksat, and dpll")
            .long_help("A solver to use, may be given multiple times.
Default: gsat, walksat, and dpll

  - gsat   : Greedy hill-climbing from random models, with restarts.
  - walksat: Repair of a random falsified clause, with random walks.
  - dpll   : Backtracking search, which also proves unsatisfiability."))

        .arg(Arg::new("max_restarts")
            .long("max-restarts")
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The number of random models GSAT climbs from.
Default: {}", gsat.max_restarts.value)))

        .arg(Arg::new("max_climbs")
            .long("max-climbs")
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The number of flips GSAT makes from each random model.
Default: {}", gsat.max_climbs.value)))

        .arg(Arg::new("noise")
            .long("noise")
            .short('p')
            .value_name("PROBABILITY")
            .value_parser(value_parser!(Noise))
            .required(false)
            .num_args(1)
            .help(format!("The chance WalkSAT flips a random atom of a falsified clause, rather than the best atom.
Default: {}, Bounds: [{}, {}]", walksat.noise.value, noise_min, noise_max)))

        .arg(Arg::new("max_flips")
            .long("max-flips")
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The number of flips WalkSAT makes.
Default: {}", walksat.max_flips.value)))

        .arg(Arg::new("seed")
            .long("seed")
            .value_name("SEED")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("The seed for random choices, applied afresh to each solve.
Default: 0"))

        // CLI specific arguments

        .arg(Arg::new("model")
            .long("model")
            .short('m')
            .action(ArgAction::SetTrue)
            .help("Display a model, if one is found."))
}

fn solver_parser(arg: &str) -> Result<Solver, std::io::Error> {
    match arg.parse::<Solver>() {
        Ok(solver) => Ok(solver),
        Err(_) => Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Unknown solver",
        )),
    }
}
