/*!
Unit propagation, relative to a trail.

A clause is unit on a trail if the clause is not satisfied on the trail, and every literal of the clause but one is false on the trail.
The remaining literal is then asserted by the clause, as any model extending the trail must make the literal true.

A pass collects the literal asserted by each unit clause, and then asserts each collected literal.
As the units are collected against the trail at the start of the pass, two unit clauses may assert a literal and its negation.
Asserting the second literal is then a [conflict](err::TrailError::Conflict), and no model extends the trail.

```rust
# use trisat::procedures::propagate::unit_propagation;
# use trisat::structures::{formula::Formula, valuation::Trail};
let formula = Formula::new(1, vec![vec![1], vec![-1]]).unwrap();
let mut trail = Trail::new(1);

assert!(unit_propagation(&formula, &mut trail).is_err());
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        formula::Formula,
        literal::CLiteral,
        valuation::{Trail, TrailOk},
    },
    types::err::{self},
};

/// The literals asserted by unit clauses of the formula on the trail, in clause order.
pub fn unit_literals(formula: &Formula, trail: &Trail) -> Vec<CLiteral> {
    formula
        .clauses()
        .iter()
        .filter_map(|clause| clause.asserts(trail))
        .collect()
}

/// A single pass of unit propagation.
///
/// Returns a count of the literals added to the trail, or the conflict found when asserting some unit literal.
pub fn unit_propagation(formula: &Formula, trail: &mut Trail) -> Result<usize, err::TrailError> {
    let mut count = 0;
    for literal in unit_literals(formula, trail) {
        match trail.assert_literal(literal) {
            Ok(TrailOk::Asserted) => {
                log::trace!(target: targets::PROPAGATION, "Unit {literal}");
                count += 1;
            }
            Ok(TrailOk::Skip) => {}
            Err(e) => {
                log::trace!(target: targets::PROPAGATION, "Conflict on unit {literal}");
                return Err(e);
            }
        }
    }
    Ok(count)
}
