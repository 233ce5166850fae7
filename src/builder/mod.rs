/*!
Tools for building a formula.

A formula may be built directly, from a count of atoms and a collection of clauses:

```rust
# use trisat::structures::{clause::CClause, formula::Formula};
let clauses: Vec<CClause> = vec![vec![1, 2, 3], vec![-1, 2, -3], vec![1, -2, 3]];
let formula = Formula::new(3, clauses).unwrap();
assert_eq!(formula.clause_count(), 3);
```

Or, a formula may be read from a file in the [DIMACS](dimacs) format.
In either case, each clause is checked against the count of atoms of the formula.
*/

pub mod dimacs;
