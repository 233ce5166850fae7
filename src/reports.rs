/*!
Details on the result of a solve.

Each procedure returns an [Outcome]:
- A [model](Outcome::Model) of the formula, if one was found.
- [No decision](Outcome::NoDecision), if a local search exhausted its budget.
  This says nothing about the satisfiability of the formula.
- [Unsatisfiable](Outcome::Unsatisfiable), if backtracking search closed every branch.
  This is a proof that the formula has no model.

A high-level [Report] of an outcome is used when writing results.

```rust
# use trisat::reports::{Outcome, Report};
# use trisat::structures::valuation::Model;
let outcome = Outcome::Model(Model::from(vec![true, false]));
assert_eq!(outcome.report(), Report::Satisfiable);
assert_eq!(Outcome::NoDecision.report().flag(), -1);
```
*/

use crate::structures::valuation::Model;

/// The outcome of a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A model of the formula.
    Model(Model),

    /// The budget of a local search was exhausted without finding a model.
    NoDecision,

    /// The formula has no model.
    Unsatisfiable,
}

impl Outcome {
    /// The high-level report of the outcome.
    pub fn report(&self) -> Report {
        match self {
            Self::Model(_) => Report::Satisfiable,
            Self::NoDecision => Report::Unknown,
            Self::Unsatisfiable => Report::Unsatisfiable,
        }
    }

    /// The model of the outcome, if there is one.
    pub fn model(&self) -> Option<&Model> {
        match self {
            Self::Model(model) => Some(model),
            _ => None,
        }
    }
}

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula is satisfiable.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula is unknown.
    Unknown,
}

impl Report {
    /// The flag of the report in the `s` and `t` lines of a result.
    pub fn flag(&self) -> i8 {
        match self {
            Self::Satisfiable => 1,
            Self::Unsatisfiable => 0,
            Self::Unknown => -1,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
