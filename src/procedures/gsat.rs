/*!
GSAT, hill-climbing over models with restarts.

# Overview

Each attempt starts from a fresh random model, where each atom is independently true with probability one half.
From the model, the search climbs:
- If the model satisfies the formula, the model is returned.
- Otherwise, the model is revised to a successor which satisfies as many clauses as possible, breaking ties uniformly at random (see [successor](crate::procedures::successor)).

```rust,ignore
for restart in 0..max_restarts {
    let mut model = Model::random(formula.atom_count(), rng);
    if climb(formula, &mut model, max_climbs, rng)? {
        return Outcome::Model(model);
    }
}
Outcome::NoDecision
```

An attempt ends after `max_climbs` flips, and the search ends after `max_restarts` attempts, with [no decision](Outcome::NoDecision).
No decision is not a claim that the formula is unsatisfiable.

The model is checked after the final flip of an attempt, and so a single flip may complete an attempt.

# Notes
- Every atom is scored at every climb, so a climb visits each clause once for each atom.
- The greedy step may decrease the count of satisfied clauses, if every successor of a model does. This is how GSAT leaves a local maximum.
*/

use rand::Rng;

use crate::{
    config::GSATConfig,
    misc::log::targets::{self},
    procedures::{evaluate::formula_satisfied, successor::rand_best_successor},
    reports::Outcome,
    structures::{formula::Formula, valuation::Model},
    types::err::{self},
};

/// Searches for a model of the formula with GSAT.
///
/// Returns an error only if the configuration is out of bounds.
pub fn gsat(
    formula: &Formula,
    config: &GSATConfig,
    rng: &mut impl Rng,
) -> Result<Outcome, err::ErrorKind> {
    config.check()?;

    let max_restarts = config.max_restarts.value;
    let max_climbs = config.max_climbs.value;

    for restart in 0..max_restarts {
        let mut model = Model::random(formula.atom_count(), rng);
        log::debug!(target: targets::GSAT, "Attempt {restart} from {}", model.as_dimacs());

        if climb(formula, &mut model, max_climbs, rng)? {
            log::info!(target: targets::GSAT, "Model found on attempt {restart}");
            return Ok(Outcome::Model(model));
        }
    }

    log::info!(target: targets::GSAT, "No decision after {max_restarts} attempts");
    Ok(Outcome::NoDecision)
}

/// Climbs from the given model for at most `max_climbs` flips, and returns whether the model satisfies the formula.
///
/// If so, the model is a model of the formula.
/// Otherwise, the model is the last model of the climb.
///
/// Returns an error if the model does not value exactly the atoms of the formula.
pub fn climb(
    formula: &Formula,
    model: &mut Model,
    max_climbs: usize,
    rng: &mut impl Rng,
) -> Result<bool, err::ErrorKind> {
    formula.check_model(model)?;

    for flips in 0..max_climbs {
        if formula_satisfied(formula, model) {
            log::trace!(target: targets::GSAT, "Satisfied after {flips} flips");
            return Ok(true);
        }

        match rand_best_successor(formula, model, formula.atoms(), rng) {
            Some(atom) => {
                log::trace!(target: targets::GSAT, "Flip {atom}");
                model.flip(atom);
            }
            None => return Ok(false),
        }
    }

    Ok(formula_satisfied(formula, model))
}

#[cfg(test)]
mod gsat_tests {
    use super::*;
    use crate::generic::random::MinimalPCG32;
    use rand::SeedableRng;

    #[test]
    fn single_flip() {
        let formula = Formula::new(2, vec![vec![1, 2]]).unwrap();
        let mut model = Model::from(vec![false, false]);
        let mut rng = MinimalPCG32::seed_from_u64(0);

        assert_eq!(climb(&formula, &mut model, 1, &mut rng), Ok(true));
        assert_eq!(model.values().iter().filter(|v| **v).count(), 1);
    }

    #[test]
    fn satisfied_start_is_kept() {
        let formula = Formula::new(2, vec![vec![1, 2]]).unwrap();
        let mut model = Model::from(vec![true, false]);
        let mut rng = MinimalPCG32::seed_from_u64(0);

        assert_eq!(climb(&formula, &mut model, 5, &mut rng), Ok(true));
        assert_eq!(model.values(), &[true, false]);
    }

    #[test]
    fn unsatisfiable_is_no_decision() {
        let formula = Formula::new(1, vec![vec![1], vec![-1]]).unwrap();
        let config = GSATConfig::with_budgets(3, 4).unwrap();
        let mut rng = MinimalPCG32::seed_from_u64(0);

        assert_eq!(gsat(&formula, &config, &mut rng), Ok(Outcome::NoDecision));
    }

    #[test]
    fn zero_budget() {
        let formula = Formula::new(1, vec![vec![1]]).unwrap();
        let mut config = GSATConfig::default();
        config.max_climbs.value = 0;
        let mut rng = MinimalPCG32::seed_from_u64(0);

        assert_eq!(
            gsat(&formula, &config, &mut rng),
            Err(err::ErrorKind::Config(err::ConfigError::OutOfBounds {
                name: "max_climbs"
            }))
        );
    }

    #[test]
    fn short_model() {
        let formula = Formula::new(3, vec![vec![3]]).unwrap();
        let mut model = Model::from(vec![false]);
        let mut rng = MinimalPCG32::seed_from_u64(0);

        assert_eq!(
            climb(&formula, &mut model, 5, &mut rng),
            Err(err::ErrorKind::Formula(err::FormulaError::ModelLength {
                expected: 3,
                found: 1
            }))
        );
        assert_eq!(model.values(), &[false]);
    }
}
