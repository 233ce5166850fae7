use std::path::PathBuf;

use clap::ArgMatches;

use trisat::config::Solver;

/// Options of the binary, rather than of a solve.
#[derive(Clone)]
pub struct ConfigIO {
    /// Paths to files or directories of files, as given.
    pub paths: Vec<PathBuf>,

    /// Solvers to use on each formula, in order and without repetition.
    pub solvers: Vec<Solver>,

    pub show_model: bool,
}

impl ConfigIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        let paths = match args.get_many::<PathBuf>("paths") {
            Some(paths) => paths.cloned().collect(),
            None => Vec::default(),
        };

        let solvers = match args.get_many::<Solver>("solver") {
            Some(requested) => {
                let mut solvers = Vec::default();
                for solver in requested {
                    if !solvers.contains(solver) {
                        solvers.push(*solver);
                    }
                }
                solvers
            }
            None => Solver::ALL.to_vec(),
        };

        ConfigIO {
            paths,
            solvers,
            show_model: args.get_flag("model"),
        }
    }
}
