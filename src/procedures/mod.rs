/*!
Procedures for determining the satisfiability of a formula.

- [evaluate] clauses and formulas on models.
- Choose a [successor] of a model during local search.
- Search for a model with [gsat] or [walksat].
- Decide satisfiability with [dpll], using [pure] literal elimination and unit [propagate]ion.
- [solve] with a named solver.

Each procedure borrows a formula, and owns any model or trail used during the search.
So, a formula may be given to any number of procedures in turn.
*/

pub mod dpll;
pub mod evaluate;
pub mod gsat;
pub mod propagate;
pub mod pure;
pub mod solve;
pub mod successor;
pub mod walksat;
