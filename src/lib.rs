//! A library for benchmarking procedures which determine the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! trisat implements three classic procedures, intended for small formulas with (at most) three literals per clause, such as the uniform random 3-SAT problems of SATLIB:
//! - [GSAT](crate::procedures::gsat), a greedy local search with restarts.
//! - [WalkSAT](crate::procedures::walksat), a local search which mixes random walks with greedy repair of a falsified clause.
//! - [DPLL](crate::procedures::dpll), a backtracking search with pure literal elimination and unit propagation.
//!
//! The local search procedures are incomplete.
//! Each either finds a model of a formula, or exhausts a budget and makes [no decision](crate::reports::Outcome::NoDecision).
//! DPLL is complete, and either finds a model or proves the formula is [unsatisfiable](crate::reports::Outcome::Unsatisfiable).
//!
//! # Orientation
//!
//! - A [formula](crate::structures::formula) is a count of atoms together with a collection of [clauses](crate::structures::clause), each of which is a collection of [literals](crate::structures::literal).
//! - Formulas are built directly, or read from the [DIMACS](crate::builder::dimacs) representation.
//! - Each procedure borrows a formula, together with a [configuration](crate::config) and a source of rng where relevant, and returns an [outcome](crate::reports::Outcome).
//! - [Valuations](crate::structures::valuation) are either complete models, used by local search, or partial trails, used by DPLL.
//!
//! The `trisat` binary reads formulas from files or directories and reports the outcome and time of each procedure.
//!
//! If you're in search of cnf formulas consider:
//! - The SATLIB benchmark problems at [www.cs.ubc.ca/~hoos/SATLIB/benchm.html](https://www.cs.ubc.ca/~hoos/SATLIB/benchm.html)
//!
//! # Examples
//!
//! + Parse and decide a DIMACS formula.
//!
//! ```rust
//! # use trisat::builder::dimacs::read_dimacs;
//! # use trisat::procedures::dpll::dpll;
//! # use trisat::reports::Report;
//! let dimacs = b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! let formula = read_dimacs(dimacs.as_slice()).unwrap();
//! assert_eq!(dpll(&formula).unwrap().report(), Report::Unsatisfiable);
//! ```
//!
//! + Search for a model with a seeded source of rng, and check the model.
//!
//! ```rust
//! # use rand::SeedableRng;
//! # use trisat::config::WalkSATConfig;
//! # use trisat::generic::random::MinimalPCG32;
//! # use trisat::procedures::{evaluate::formula_satisfied, walksat::walksat};
//! # use trisat::structures::formula::Formula;
//! let formula = Formula::new(3, vec![vec![1, 2, 3], vec![-1, 2, -3], vec![1, -2, 3]]).unwrap();
//! let config = WalkSATConfig::with_budget(0.5, 1000).unwrap();
//! let mut rng = MinimalPCG32::seed_from_u64(7);
//!
//! let outcome = walksat(&formula, &config, &mut rng).unwrap();
//! let model = outcome.model().unwrap();
//! assert!(formula_satisfied(&formula, model));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets to help narrow output to relevant parts of the library.
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Each restart of GSAT can be found with `RUST_LOG=gsat=debug …`
//! - Each branch of DPLL, together with propagation, can be found with `RUST_LOG=dpll=trace,propagation=trace …`
//!

#![allow(clippy::single_match)]
#![allow(clippy::upper_case_acronyms)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod reports;
pub mod structures;
pub mod types;

pub mod generic;
pub mod misc;
