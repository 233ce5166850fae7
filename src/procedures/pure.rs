//! Procedures to identify pure literals.
//!
//! A literal is pure, relative to a trail, if the literal has no value on the trail and occurs in some clause not satisfied on the trail, while the negation of the literal occurs in no such clause.
//!
//! Asserting a pure literal never falsifies a clause, and so a pure literal may be asserted without considering the alternative.

use std::collections::BTreeSet;

use crate::structures::{
    atom::Atom,
    clause::Clause,
    formula::Formula,
    literal::{CLiteral, Literal},
    valuation::{Trail, Valuation},
};

// General order for pairs related to booleans is 0 is false, 1 is true
/// Given an interator over clauses returns a pair of vectors of the atoms of pure literals relative to those clauses.
///
/// In other words, returns a pair where the first element contains all the atoms which occur only with negative polarity and the second element contains all the atoms which occur only with positive polarity.
pub fn pure_atoms<'l>(
    clauses: impl Iterator<Item = impl Iterator<Item = &'l CLiteral>>,
) -> (Vec<Atom>, Vec<Atom>) {
    let mut the_true: BTreeSet<Atom> = BTreeSet::new();
    let mut the_false: BTreeSet<Atom> = BTreeSet::new();

    clauses.for_each(|literals| {
        for literal in literals {
            match literal.polarity() {
                true => the_true.insert(literal.atom()),
                false => the_false.insert(literal.atom()),
            };
        }
    });

    let pure_false: Vec<_> = the_false.difference(&the_true).copied().collect();
    let pure_true: Vec<_> = the_true.difference(&the_false).copied().collect();
    (pure_false, pure_true)
}

/// The pure literals of the formula relative to the trail, ordered by polarity (false first) and then by atom.
pub fn pure_literals(formula: &Formula, trail: &Trail) -> Vec<CLiteral> {
    let (f, t) = pure_atoms(
        formula
            .clauses()
            .iter()
            .filter(|clause| !clause.satisfied_on(trail))
            .map(|clause| {
                clause
                    .literals()
                    .filter(|literal| trail.value_of(literal.atom()).is_none())
            }),
    );

    f.into_iter()
        .map(|atom| CLiteral::new(atom, false))
        .chain(t.into_iter().map(|atom| CLiteral::new(atom, true)))
        .collect()
}

#[cfg(test)]
mod pure_tests {
    use super::*;

    #[test]
    fn pure_on_empty_trail() {
        let formula = Formula::new(3, vec![vec![1, -2], vec![1, 3], vec![-2, -3]]).unwrap();
        let trail = Trail::new(3);
        assert_eq!(pure_literals(&formula, &trail), vec![-2, 1]);
    }

    #[test]
    fn satisfied_clauses_are_ignored() {
        // Once 1 is true only the last clause remains, and both its literals are pure.
        let formula = Formula::new(3, vec![vec![1, -2], vec![1, 3], vec![-2, -3]]).unwrap();
        let mut trail = Trail::new(3);
        assert!(trail.assert_literal(1).is_ok());
        assert_eq!(pure_literals(&formula, &trail), vec![-2, -3]);
    }

    #[test]
    fn valued_atoms_are_ignored() {
        let formula = Formula::new(2, vec![vec![1, 2], vec![-1, 2]]).unwrap();
        let mut trail = Trail::new(2);
        assert!(trail.assert_literal(-2).is_ok());
        assert!(pure_literals(&formula, &trail).is_empty());
    }
}
