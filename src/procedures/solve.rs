//! Dispatch of a formula to a named [solver](Solver).
//!
//! ```rust
//! # use rand::SeedableRng;
//! # use trisat::config::{Config, Solver};
//! # use trisat::generic::random::MinimalPCG32;
//! # use trisat::procedures::solve::solve;
//! # use trisat::reports::Report;
//! # use trisat::structures::formula::Formula;
//! let formula = Formula::new(3, vec![vec![1, 2, 3], vec![-1, 2, -3], vec![1, -2, 3]]).unwrap();
//! let config = Config::default();
//! let mut rng = MinimalPCG32::seed_from_u64(config.seed);
//!
//! for solver in Solver::ALL {
//!     let outcome = solve(&formula, solver, &config, &mut rng).unwrap();
//!     assert_eq!(outcome.report(), Report::Satisfiable);
//! }
//! ```

use rand::Rng;

use crate::{
    config::{Config, Solver},
    procedures::{dpll::dpll, gsat::gsat, walksat::walksat},
    reports::Outcome,
    structures::formula::Formula,
    types::err::{self},
};

/// Determines the satisfiability of the formula with the given solver, configuration, and source of rng.
pub fn solve(
    formula: &Formula,
    solver: Solver,
    config: &Config,
    rng: &mut impl Rng,
) -> Result<Outcome, err::ErrorKind> {
    match solver {
        Solver::GSAT => gsat(formula, &config.gsat, rng),
        Solver::WalkSAT => walksat(formula, &config.walksat, rng),
        Solver::DPLL => dpll(formula),
    }
}
