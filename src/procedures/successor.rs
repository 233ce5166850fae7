/*!
The choice of a successor model during local search.

The successors of a model are those models obtained by flipping the value of a single atom, and so each successor may be identified with the atom flipped.
Both [GSAT](crate::procedures::gsat) and [WalkSAT](crate::procedures::walksat) take a greedy step to a successor which satisfies as many clauses as possible:
- GSAT considers every atom of the formula.
- WalkSAT considers the atoms of a single falsified clause.

Ties are broken uniformly at random.

The model given is used as scratch space, with each candidate flipped, scored, and flipped back.
So, the model is unchanged when a function returns, and no copy of the model (or the formula) is made.

```rust
# use rand::SeedableRng;
# use trisat::generic::random::MinimalPCG32;
# use trisat::procedures::successor::rand_best_successor;
# use trisat::structures::{formula::Formula, valuation::Model};
let formula = Formula::new(2, vec![vec![1, 2], vec![-1, 2]]).unwrap();
let mut model = Model::from(vec![false, false]);
let mut rng = MinimalPCG32::seed_from_u64(0);

// Flipping 2 satisfies both clauses, while flipping 1 satisfies one.
assert_eq!(rand_best_successor(&formula, &mut model, formula.atoms(), &mut rng), Some(2));
assert_eq!(model.values(), &[false, false]);
```
*/

use rand::{seq::IndexedRandom, Rng};

use crate::{
    misc::log::targets::{self},
    procedures::evaluate::count_satisfied,
    structures::{atom::Atom, formula::Formula, valuation::Model},
};

/// A count of the clauses of the formula satisfied after flipping the atom.
///
/// The model is unchanged on return.
pub fn count_on_flip(formula: &Formula, model: &mut Model, atom: Atom) -> usize {
    model.flip(atom);
    let count = count_satisfied(formula, model);
    model.flip(atom);
    count
}

/// The greatest count of satisfied clauses among flips of the candidate atoms, together with each candidate achieving the count.
///
/// If there are no candidates the count is zero and no atom is returned.
pub fn best_flips(
    formula: &Formula,
    model: &mut Model,
    candidates: impl IntoIterator<Item = Atom>,
) -> (usize, Vec<Atom>) {
    let mut best_count = 0;
    let mut best_atoms = Vec::default();

    for atom in candidates {
        let count = count_on_flip(formula, model, atom);
        match count.cmp(&best_count) {
            std::cmp::Ordering::Greater => {
                best_count = count;
                best_atoms.clear();
                best_atoms.push(atom);
            }
            std::cmp::Ordering::Equal => best_atoms.push(atom),
            std::cmp::Ordering::Less => {}
        }
    }

    (best_count, best_atoms)
}

/// An atom whose flip maximises the count of satisfied clauses among the candidates, chosen uniformly at random from all such atoms.
///
/// Returns None only if there are no candidates.
pub fn rand_best_successor(
    formula: &Formula,
    model: &mut Model,
    candidates: impl IntoIterator<Item = Atom>,
    rng: &mut impl Rng,
) -> Option<Atom> {
    let (best_count, best_atoms) = best_flips(formula, model, candidates);
    let chosen = best_atoms.choose(rng).copied();
    log::trace!(target: targets::SUCCESSOR, "Best count {best_count} from {} atoms, chose {chosen:?}", best_atoms.len());
    chosen
}

#[cfg(test)]
mod successor_tests {
    use super::*;
    use crate::generic::random::MinimalPCG32;
    use rand::SeedableRng;

    #[test]
    fn model_is_restored() {
        let formula = Formula::new(3, vec![vec![1, 2, 3], vec![-1, -2, -3]]).unwrap();
        let mut model = Model::from(vec![true, false, true]);
        let _ = best_flips(&formula, &mut model, formula.atoms());
        assert_eq!(model.values(), &[true, false, true]);
    }

    #[test]
    fn every_maximiser() {
        // From the all false model, any single flip satisfies the clause.
        let formula = Formula::new(3, vec![vec![1, 2, 3]]).unwrap();
        let mut model = Model::from(vec![false, false, false]);
        assert_eq!(best_flips(&formula, &mut model, formula.atoms()), (1, vec![1, 2, 3]));
    }

    #[test]
    fn ties_are_broken_across_maximisers() {
        let formula = Formula::new(3, vec![vec![1, 2, 3]]).unwrap();
        let mut model = Model::from(vec![false, false, false]);
        let mut rng = MinimalPCG32::seed_from_u64(3);

        let mut seen = [false; 3];
        for _ in 0..200 {
            let atom = rand_best_successor(&formula, &mut model, formula.atoms(), &mut rng).unwrap();
            seen[atom as usize - 1] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn no_candidates() {
        let formula = Formula::new(1, vec![vec![1]]).unwrap();
        let mut model = Model::from(vec![false]);
        let mut rng = MinimalPCG32::seed_from_u64(0);
        assert_eq!(rand_best_successor(&formula, &mut model, Vec::new(), &mut rng), None);
    }
}
