/*!
WalkSAT, noisy local search guided by falsified clauses.

# Overview

The search starts from a random model and makes at most `max_flips` flips.
Before each flip, if the model satisfies the formula the model is returned.
Otherwise, some clause falsified by the model is chosen uniformly at random, and an atom of the clause is flipped:
- With probability *p* (the noise), an atom of the clause chosen uniformly at random.
- Otherwise, an atom of the clause whose flip maximises the count of satisfied clauses, with ties broken uniformly at random.

Flipping any atom of a falsified clause satisfies the clause, so each step repairs some clause at the cost of perhaps falsifying others.
And, as only the atoms of a clause are scored, a step is much cheaper than a climb of [GSAT](crate::procedures::gsat).

If the budget is exhausted the result is [no decision](Outcome::NoDecision), which is not a claim that the formula is unsatisfiable.

# Noise

Here *p* is the probability of a random walk, and 1 - *p* the probability of a greedy step.
So, a noise of 0 is greedy local search restricted to falsified clauses, and a noise of 1 is a random walk.
*/

use rand::{seq::IndexedRandom, Rng};

use crate::{
    config::WalkSATConfig,
    misc::log::targets::{self},
    procedures::{
        evaluate::{falsified_clauses, formula_satisfied},
        successor::rand_best_successor,
    },
    reports::Outcome,
    structures::{
        atom::Atom,
        clause::Clause,
        formula::Formula,
        literal::CLiteral,
        valuation::Model,
    },
    types::err::{self},
};

/// Searches for a model of the formula with WalkSAT.
///
/// Returns an error only if the configuration is out of bounds.
pub fn walksat(
    formula: &Formula,
    config: &WalkSATConfig,
    rng: &mut impl Rng,
) -> Result<Outcome, err::ErrorKind> {
    config.check()?;

    let mut model = Model::random(formula.atom_count(), rng);
    log::debug!(target: targets::WALKSAT, "Start from {}", model.as_dimacs());

    if walk(formula, &mut model, config, rng)? {
        log::info!(target: targets::WALKSAT, "Model found");
        Ok(Outcome::Model(model))
    } else {
        log::info!(target: targets::WALKSAT, "No decision after {} flips", config.max_flips.value);
        Ok(Outcome::NoDecision)
    }
}

/// Walks from the given model for at most `max_flips` flips, and returns whether the model satisfies the formula.
///
/// If so, the model is a model of the formula.
/// Otherwise, the model is the last model of the walk.
///
/// Returns an error if the configuration is out of bounds, or the model does not value exactly the atoms of the formula.
pub fn walk(
    formula: &Formula,
    model: &mut Model,
    config: &WalkSATConfig,
    rng: &mut impl Rng,
) -> Result<bool, err::ErrorKind> {
    config.check()?;
    formula.check_model(model)?;

    for flips in 0..config.max_flips.value {
        let falsified = falsified_clauses(formula, model);

        let Some(index) = falsified.choose(rng) else {
            log::trace!(target: targets::WALKSAT, "Satisfied after {flips} flips");
            return Ok(true);
        };
        let clause = &formula.clauses()[*index];

        let chosen = match rng.random_bool(config.noise.value) {
            true => random_atom(clause, rng),
            false => rand_best_successor(formula, model, clause.atoms(), rng),
        };

        match chosen {
            Some(atom) => {
                log::trace!(target: targets::WALKSAT, "Flip {atom} of {}", clause.as_dimacs(false));
                model.flip(atom);
            }
            None => return Ok(false),
        }
    }

    Ok(formula_satisfied(formula, model))
}

/// An atom of the clause, chosen uniformly at random.
fn random_atom(clause: &[CLiteral], rng: &mut impl Rng) -> Option<Atom> {
    let atoms = clause.atoms().collect::<Vec<_>>();
    atoms.choose(rng).copied()
}

#[cfg(test)]
mod walksat_tests {
    use super::*;
    use crate::generic::random::MinimalPCG32;
    use rand::SeedableRng;

    #[test]
    fn greedy_repair() {
        // Flipping 2 satisfies each clause, while flipping 1 falsifies the second.
        let formula = Formula::new(2, vec![vec![1, 2], vec![1, -2], vec![-1, 2]]).unwrap();
        let config = WalkSATConfig::with_budget(0.0, 1).unwrap();
        let mut model = Model::from(vec![true, false]);
        let mut rng = MinimalPCG32::seed_from_u64(1);

        assert_eq!(walk(&formula, &mut model, &config, &mut rng), Ok(true));
        assert_eq!(model.values(), &[true, true]);
    }

    #[test]
    fn random_walk_stays_in_clause() {
        let formula = Formula::new(4, vec![vec![1, 2], vec![3, 4]]).unwrap();
        let config = WalkSATConfig::with_budget(1.0, 1).unwrap();
        let mut rng = MinimalPCG32::seed_from_u64(9);

        for _ in 0..20 {
            let mut model = Model::from(vec![false, false, true, true]);
            assert_eq!(walk(&formula, &mut model, &config, &mut rng), Ok(true));
            assert!(model.values()[2] && model.values()[3]);
        }
    }

    #[test]
    fn unsatisfiable_is_no_decision() {
        let formula = Formula::new(1, vec![vec![1], vec![-1]]).unwrap();
        let config = WalkSATConfig::with_budget(0.5, 10).unwrap();
        let mut rng = MinimalPCG32::seed_from_u64(0);

        assert_eq!(walksat(&formula, &config, &mut rng), Ok(Outcome::NoDecision));
    }

    #[test]
    fn noise_out_of_bounds() {
        let formula = Formula::new(1, vec![vec![1]]).unwrap();
        let mut config = WalkSATConfig::default();
        config.noise.value = -0.1;
        let mut rng = MinimalPCG32::seed_from_u64(0);

        assert!(walksat(&formula, &config, &mut rng).is_err());
    }

    #[test]
    fn short_model() {
        let formula = Formula::new(3, vec![vec![3]]).unwrap();
        let config = WalkSATConfig::default();
        let mut model = Model::from(vec![false]);
        let mut rng = MinimalPCG32::seed_from_u64(0);

        assert_eq!(
            walk(&formula, &mut model, &config, &mut rng),
            Err(err::ErrorKind::Formula(err::FormulaError::ModelLength {
                expected: 3,
                found: 1
            }))
        );
        assert_eq!(model.values(), &[false]);
    }
}
