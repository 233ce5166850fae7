/*!
(Partial) functions from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

Two valuations are used:
- A [Model] is full. Every atom has a value, and so a model is a vector of booleans where the value of atom *a* is at index *a - 1*.
  Models are the states of local search.
- A [Trail] is partial, and records the order in which literals were asserted.
  Trails are the states of backtracking search.

Both implement the [Valuation] trait, and so clauses may be [evaluated](crate::structures::clause::Clause) on either.

```rust
# use trisat::structures::valuation::{Model, Trail, Valuation};
let model = Model::from(vec![true, false, true]);
assert_eq!(model.value_of(2), Some(false));
assert_eq!(model.value_of(4), None);

let mut trail = Trail::new(3);
assert!(trail.assert_literal(-2).is_ok());
assert!(trail.assert_literal(2).is_err());
assert_eq!(trail.value_of(2), Some(false));
assert_eq!(trail.value_of(1), None);
```

# Trails

A trail never contains both a literal and its negation.
An attempt to assert the negation of a literal on the trail is returned as a [conflict](err::TrailError::Conflict) and the trail is left unchanged.

Trails are never unwound.
Instead, a search which considers alternatives clones the trail for each alternative.
*/

use rand::Rng;

use crate::{
    structures::{
        atom::{atom_index, Atom},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Something which stores the value of an atom, or perhaps the information that the atom has no value.
pub trait Valuation {
    /// The value of an atom under the valuation, or otherwise nothing.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// A count of all the atoms in the valuation.
    fn atom_count(&self) -> usize;

    /// Whether the literal is true or false on the valuation, or otherwise nothing.
    fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }
}

/// A complete assignment of truth values to atoms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    values: Vec<bool>,
}

impl Model {
    /// A model on the given number of atoms, where each atom is independently valued true with probability one half.
    pub fn random(atom_count: usize, rng: &mut impl Rng) -> Self {
        Model {
            values: (0..atom_count).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// Flips the value of the atom.
    ///
    /// # Panics
    /// If the atom is not part of the model.
    pub fn flip(&mut self, atom: Atom) {
        let value = &mut self.values[atom_index(atom)];
        *value = !*value;
    }

    /// The values of the model, in atom order.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// The model as a sequence of literals, one for each atom, in atom order.
    pub fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| CLiteral::new(index as Atom + 1, *value))
    }

    /// The model as a string of literals, in DIMACS style.
    pub fn as_dimacs(&self) -> String {
        self.literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Vec<bool>> for Model {
    fn from(values: Vec<bool>) -> Self {
        Model { values }
    }
}

impl Valuation for Model {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        let index = atom.checked_sub(1)?;
        self.values.get(index as usize).copied()
    }

    fn atom_count(&self) -> usize {
        self.values.len()
    }
}

/// Possible 'Ok' results from asserting a literal on a trail.
#[derive(Debug, PartialEq, Eq)]
pub enum TrailOk {
    /// The literal was added to the trail.
    Asserted,

    /// The literal was already on the trail.
    Skip,
}

/// An ordered partial assignment, built by asserting literals.
#[derive(Clone, Debug)]
pub struct Trail {
    /// The asserted literals, in order of assertion.
    literals: Vec<CLiteral>,

    /// The value of each atom, indexed as a model.
    valuation: Vec<Option<bool>>,
}

impl Trail {
    /// An empty trail over the given number of atoms.
    pub fn new(atom_count: usize) -> Self {
        Trail {
            literals: Vec::default(),
            valuation: vec![None; atom_count],
        }
    }

    /// Asserts the literal, unless the negation of the literal is already on the trail.
    ///
    /// # Panics
    /// If the atom of the literal is not part of the trail.
    pub fn assert_literal(&mut self, literal: CLiteral) -> Result<TrailOk, err::TrailError> {
        let value = &mut self.valuation[atom_index(literal.atom())];
        match value {
            None => {
                *value = Some(literal.polarity());
                self.literals.push(literal);
                Ok(TrailOk::Asserted)
            }
            Some(existing) if *existing == literal.polarity() => Ok(TrailOk::Skip),
            Some(_) => Err(err::TrailError::Conflict(literal)),
        }
    }

    /// The asserted literals, in order of assertion.
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    /// A count of the asserted literals.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether no literals have been asserted.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The lowest atom without a value, if one exists.
    pub fn lowest_unvalued_atom(&self) -> Option<Atom> {
        self.valuation
            .iter()
            .position(|value| value.is_none())
            .map(|index| index as Atom + 1)
    }

    /// Completes the trail to a model, valuing any atom without a value as false.
    pub fn complete(&self) -> Model {
        Model {
            values: self
                .valuation
                .iter()
                .map(|value| value.unwrap_or(false))
                .collect(),
        }
    }
}

impl Valuation for Trail {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        let index = atom.checked_sub(1)?;
        self.valuation.get(index as usize).copied().flatten()
    }

    fn atom_count(&self) -> usize {
        self.valuation.len()
    }
}

#[cfg(test)]
mod valuation_tests {
    use super::*;
    use crate::generic::random::MinimalPCG32;
    use rand::SeedableRng;

    #[test]
    fn model_flip() {
        let mut model = Model::from(vec![false, false]);
        model.flip(2);
        assert_eq!(model.values(), &[false, true]);
        assert_eq!(model.literals().collect::<Vec<_>>(), vec![-1, 2]);
    }

    #[test]
    fn random_model_length() {
        let mut rng = MinimalPCG32::seed_from_u64(7);
        let model = Model::random(31, &mut rng);
        assert_eq!(model.atom_count(), 31);
    }

    #[test]
    fn trail_skip_and_conflict() {
        let mut trail = Trail::new(3);
        assert_eq!(trail.assert_literal(3), Ok(TrailOk::Asserted));
        assert_eq!(trail.assert_literal(3), Ok(TrailOk::Skip));
        assert_eq!(trail.assert_literal(-3), Err(err::TrailError::Conflict(-3)));
        assert_eq!(trail.literals(), &[3]);
        assert_eq!(trail.lowest_unvalued_atom(), Some(1));
    }

    #[test]
    fn trail_completion() {
        let mut trail = Trail::new(3);
        assert!(trail.assert_literal(2).is_ok());
        assert_eq!(trail.complete().values(), &[false, true, false]);
        assert_eq!(trail.value_of_literal(-2), Some(false));
        assert_eq!(trail.value_of_literal(1), None);
    }
}
