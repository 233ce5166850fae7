/*!
DPLL, backtracking search over trails.

# Overview

The search examines a trail, and either decides the formula relative to the trail or extends the trail:

1. If every clause has some literal on the trail, the formula is satisfied, and the search ends with the trail.
2. If some clause has the negation of each of its literals on the trail, the formula is falsified, and the branch of the search ends.
3. If there are [pure literals](crate::procedures::pure), each is asserted and the trail is examined again.
4. If there are [unit clauses](crate::procedures::propagate), each unit literal is asserted and the trail is examined again.
   If the unit literals conflict with each other, or with the trail, the branch of the search ends.
5. Otherwise, the lowest atom without a value is chosen, and the search branches:
   First on the trail extended with the atom valued true, and if that branch ends without a model on the trail extended with the atom valued false.

If every branch ends without a model the formula is unsatisfiable.

```rust
# use trisat::procedures::dpll::dpll;
# use trisat::reports::Outcome;
# use trisat::structures::formula::Formula;
let formula = Formula::new(2, vec![vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]]).unwrap();
assert_eq!(dpll(&formula), Ok(Outcome::Unsatisfiable));
```

# Branches

Each branch owns a trail, and an alternative to a branch begins from a copy of the trail made before the branch.
So, no trail is ever unwound.

Rather than recursion, the branches yet to be examined are kept on a stack, with the true branch above the false branch.
As each step of examination strictly extends a trail, the depth of the stack is bounded by the count of atoms.

# Exhaustion

A trail on which every atom has a value satisfies or falsifies every clause, and so is decided by steps 1 or 2.
If a trail reaches step 5 without an atom to choose, an [invalid state](err::ErrorKind::InvalidState) is returned.
*/

use crate::{
    misc::log::targets::{self},
    procedures::{propagate::unit_propagation, pure::pure_literals},
    reports::Outcome,
    structures::{
        atom::Atom,
        clause::Clause,
        formula::Formula,
        literal::{CLiteral, Literal},
        valuation::Trail,
    },
    types::err::{self},
};

/// The status of a formula relative to some trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Every clause has some literal on the trail.
    Satisfied,

    /// Some clause has the negation of each literal on the trail.
    Falsified,

    /// Neither satisfied nor falsified.
    Undecided,
}

/// Possible 'Ok' results from examining a trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchOk {
    /// The trail satisfies the formula.
    Satisfied,

    /// No model of the formula extends the trail.
    Falsified,

    /// The trail is undecided and cannot be simplified, so the search should branch on the atom.
    Branch(Atom),
}

/// A branch of the search.
struct Frame {
    trail: Trail,

    /// A count of the branches taken to reach the trail.
    depth: usize,
}

/// Decides the satisfiability of the formula with DPLL.
///
/// The model of a satisfiable formula is the trail of the search, with any atom not on the trail valued false.
///
/// Returns an error only if the search reaches an invalid state.
pub fn dpll(formula: &Formula) -> Result<Outcome, err::ErrorKind> {
    match search(formula)? {
        Some(trail) => {
            log::info!(target: targets::DPLL, "Satisfied with {} literals on the trail", trail.len());
            Ok(Outcome::Model(trail.complete()))
        }
        None => {
            log::info!(target: targets::DPLL, "Unsatisfiable");
            Ok(Outcome::Unsatisfiable)
        }
    }
}

/// Searches for a trail which satisfies the formula, returning the first trail found or None if the formula is unsatisfiable.
pub fn search(formula: &Formula) -> Result<Option<Trail>, err::ErrorKind> {
    let mut frames = vec![Frame {
        trail: Trail::new(formula.atom_count()),
        depth: 0,
    }];
    let mut decisions: usize = 0;

    while let Some(Frame { mut trail, depth }) = frames.pop() {
        match examine(formula, &mut trail)? {
            BranchOk::Satisfied => {
                log::debug!(target: targets::DPLL, "Satisfied at depth {depth} after {decisions} decisions");
                return Ok(Some(trail));
            }

            BranchOk::Falsified => {
                log::trace!(target: targets::DPLL, "Falsified at depth {depth}");
            }

            BranchOk::Branch(atom) => {
                decisions += 1;
                log::trace!(target: targets::DPLL, "Branch on {atom} at depth {depth}");

                let literal = CLiteral::new(atom, true);
                let negative = decide(trail.clone(), literal.negate())?;
                let positive = decide(trail, literal)?;

                frames.push(Frame {
                    trail: negative,
                    depth: depth + 1,
                });
                frames.push(Frame {
                    trail: positive,
                    depth: depth + 1,
                });
            }
        }
    }

    log::debug!(target: targets::DPLL, "Every branch falsified after {decisions} decisions");
    Ok(None)
}

/// Examines the trail, simplifying until the trail is decided or the search should branch.
pub fn examine(formula: &Formula, trail: &mut Trail) -> Result<BranchOk, err::ErrorKind> {
    loop {
        match status(formula, trail) {
            Status::Satisfied => return Ok(BranchOk::Satisfied),
            Status::Falsified => return Ok(BranchOk::Falsified),
            Status::Undecided => {}
        }

        let pure = pure_literals(formula, trail);
        if !pure.is_empty() {
            for literal in pure {
                log::trace!(target: targets::PROPAGATION, "Pure {literal}");
                if trail.assert_literal(literal).is_err() {
                    return Ok(BranchOk::Falsified);
                }
            }
            continue;
        }

        match unit_propagation(formula, trail) {
            Ok(0) => {}
            Ok(_) => continue,
            Err(_) => return Ok(BranchOk::Falsified),
        }

        match trail.lowest_unvalued_atom() {
            Some(atom) => return Ok(BranchOk::Branch(atom)),
            None => {
                log::error!(target: targets::DPLL, "Every atom valued without a decision");
                return Err(err::ErrorKind::InvalidState);
            }
        }
    }
}

/// The status of the formula relative to the trail.
pub fn status(formula: &Formula, trail: &Trail) -> Status {
    let mut satisfied = true;
    for clause in formula.clauses() {
        if clause.falsified_on(trail) {
            return Status::Falsified;
        }
        if satisfied && !clause.satisfied_on(trail) {
            satisfied = false;
        }
    }
    match satisfied {
        true => Status::Satisfied,
        false => Status::Undecided,
    }
}

/// Extends the trail with a decision on an atom without a value.
fn decide(mut trail: Trail, literal: CLiteral) -> Result<Trail, err::ErrorKind> {
    match trail.assert_literal(literal) {
        Ok(_) => Ok(trail),
        Err(_) => {
            log::error!(target: targets::DPLL, "Decision on {} which has a value", literal.atom());
            Err(err::ErrorKind::InvalidState)
        }
    }
}

#[cfg(test)]
mod dpll_tests {
    use super::*;
    use crate::procedures::evaluate::formula_satisfied;

    #[test]
    fn status_on_trail() {
        let formula = Formula::new(2, vec![vec![1, 2], vec![-1]]).unwrap();
        let mut trail = Trail::new(2);
        assert_eq!(status(&formula, &trail), Status::Undecided);

        assert!(trail.assert_literal(1).is_ok());
        assert_eq!(status(&formula, &trail), Status::Falsified);

        let mut trail = Trail::new(2);
        assert!(trail.assert_literal(-1).is_ok());
        assert!(trail.assert_literal(2).is_ok());
        assert_eq!(status(&formula, &trail), Status::Satisfied);
    }

    #[test]
    fn contradictory_units() {
        let formula = Formula::new(1, vec![vec![1], vec![-1]]).unwrap();
        let mut trail = Trail::new(1);
        assert_eq!(examine(&formula, &mut trail), Ok(BranchOk::Falsified));
        assert_eq!(dpll(&formula), Ok(Outcome::Unsatisfiable));
    }

    #[test]
    fn pure_before_branch() {
        // Each atom occurs with a single polarity, so no branch is needed.
        let formula = Formula::new(3, vec![vec![1, -2, 3], vec![1, -2], vec![-2, 3]]).unwrap();
        let mut trail = Trail::new(3);
        assert_eq!(examine(&formula, &mut trail), Ok(BranchOk::Satisfied));
        assert_eq!(trail.literals(), &[-2, 1, 3]);
    }

    #[test]
    fn branch_on_lowest_atom() {
        let formula = Formula::new(
            3,
            vec![vec![1, 2, 3], vec![-1, -2, -3], vec![1, -2, 3], vec![-1, 2, -3]],
        )
        .unwrap();
        let mut trail = Trail::new(3);
        assert_eq!(examine(&formula, &mut trail), Ok(BranchOk::Branch(1)));
        assert!(trail.is_empty());
    }

    #[test]
    fn true_branch_first() {
        let formula = Formula::new(
            3,
            vec![vec![1, 2, 3], vec![-1, -2, -3], vec![1, -2, 3], vec![-1, 2, -3]],
        )
        .unwrap();
        let trail = search(&formula).unwrap().unwrap();
        assert_eq!(trail.literals()[0], 1);
        assert!(formula_satisfied(&formula, &trail.complete()));
    }

    #[test]
    fn backtrack_to_false_branch() {
        // Valuing 1 as true falsifies the formula by propagation.
        let formula = Formula::new(
            3,
            vec![vec![-1, 2], vec![-1, -2], vec![1, 3], vec![1, -3, 2], vec![2, -2, 3]],
        )
        .unwrap();
        let trail = search(&formula).unwrap().unwrap();
        assert!(trail.literals().contains(&-1));
        assert!(formula_satisfied(&formula, &trail.complete()));
    }
}
