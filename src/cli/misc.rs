use std::time::Duration;

use trisat::{reports::Outcome, structures::formula::Formula};

/// Writes the solution and time lines for an outcome, and the model if requested.
///
/// The flag is `1` for satisfiable, `0` for unsatisfiable, and `-1` for no decision.
pub fn write_outcome(formula: &Formula, outcome: &Outcome, time: Duration, show_model: bool) {
    let flag = outcome.report().flag();
    let atoms = formula.atom_count();
    let clauses = formula.clause_count();

    println!("s cnf {flag} {atoms} {clauses}");
    println!("t cnf {flag} {atoms} {clauses} {:.6}", time.as_secs_f64());

    if show_model {
        if let Some(model) = outcome.model() {
            for literal in model.literals() {
                println!("v {literal}");
            }
        }
    }
}
