/*!
Evaluation of clauses and formulas on a model.

Each function is pure, and reads the formula and model without revision.
The model is required to value exactly the atoms of the formula, which is guaranteed for any model built through [Formula::model] or by a procedure of the library.

- [clause_satisfied] is true if and only if some literal of the clause is true on the model.
- [formula_satisfied] is true if and only if every clause is satisfied, and stops at the first falsified clause.
- [count_satisfied] counts the satisfied clauses, and so visits every clause.
  The count is what local search seeks to maximise.

```rust
# use trisat::structures::formula::Formula;
# use trisat::procedures::evaluate::{count_satisfied, formula_satisfied};
let formula = Formula::new(3, vec![vec![1, 2, 3], vec![-1, 2, -3], vec![1, -2, 3]]).unwrap();
let model = formula.model(vec![true, false, true]).unwrap();

assert_eq!(count_satisfied(&formula, &model), 2);
assert!(!formula_satisfied(&formula, &model));
```
*/

use crate::structures::{clause::Clause, formula::Formula, literal::CLiteral, valuation::Model};

/// Whether some literal of the clause is true on the model.
pub fn clause_satisfied(clause: &[CLiteral], model: &Model) -> bool {
    clause.satisfied_on(model)
}

/// Whether every clause of the formula is satisfied on the model.
pub fn formula_satisfied(formula: &Formula, model: &Model) -> bool {
    formula
        .clauses()
        .iter()
        .all(|clause| clause_satisfied(clause, model))
}

/// A count of the clauses of the formula satisfied on the model.
pub fn count_satisfied(formula: &Formula, model: &Model) -> usize {
    formula
        .clauses()
        .iter()
        .filter(|clause| clause_satisfied(clause, model))
        .count()
}

/// The indicies of clauses of the formula falsified on the model, in order.
pub fn falsified_clauses(formula: &Formula, model: &Model) -> Vec<usize> {
    formula
        .clauses()
        .iter()
        .enumerate()
        .filter_map(|(index, clause)| match clause_satisfied(clause, model) {
            true => None,
            false => Some(index),
        })
        .collect()
}
