//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals, and the clause trait is implemented for any slice of literals.
//!
//! ```rust
//! # use trisat::structures::clause::{CClause, Clause};
//! # use trisat::structures::valuation::{Model, Trail};
//! let clause: CClause = vec![1, -2, 3];
//!
//! assert_eq!(clause.size(), 3);
//! assert!(clause.satisfied_on(&Model::from(vec![false, false, false])));
//! assert!(!clause.satisfied_on(&Model::from(vec![false, true, false])));
//!
//! let mut trail = Trail::new(3);
//! let _ = trail.assert_literal(-1);
//! let _ = trail.assert_literal(2);
//! assert_eq!(clause.asserts(&trail), Some(3));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Though the clauses of interest have three literals, nothing here depends on the size of a clause.

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in the order given.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in the order given and without duplicates.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether some literal in the clause is true on the valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;

    /// Whether every literal in the clause is false on the valuation.
    ///
    /// On a full valuation this is the negation of [satisfied_on](Clause::satisfied_on), while on a partial valuation a clause may be neither.
    fn falsified_on(&self, valuation: &impl Valuation) -> bool;

    /// The literal asserted by the clause on a given valuation, if one such literal exists. \
    /// In detail, returns:
    /// - Some(*l*), if *l* has no value on the given valuation and every other literal in the clause is false on the valuation.
    /// - None, otherwise.
    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral>;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        if zero {
            the_string += "0";
        } else {
            the_string.pop();
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .filter(|(index, literal)| {
                !self[..*index]
                    .iter()
                    .any(|earlier| earlier.atom() == literal.atom())
            })
            .map(|(_, literal)| literal.atom())
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.value_of_literal(*literal) == Some(true))
    }

    fn falsified_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .all(|literal| valuation.value_of_literal(*literal) == Some(false))
    }

    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        let mut the_literal = None;
        for literal in self {
            match valuation.value_of_literal(*literal) {
                Some(true) => return None,
                Some(false) => continue,
                None if the_literal.is_none() => the_literal = Some(*literal),
                None if the_literal == Some(*literal) => continue,
                None => return None,
            }
        }
        the_literal
    }
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

#[cfg(test)]
mod clause_tests {
    use super::*;
    use crate::structures::valuation::Trail;

    #[test]
    fn dimacs_representation() {
        let clause: CClause = vec![1, -2, 3];
        assert_eq!(clause.as_dimacs(true), "1 -2 3 0");
        assert_eq!(clause.as_dimacs(false), "1 -2 3");
    }

    #[test]
    fn atoms_without_duplicates() {
        let clause: CClause = vec![2, -2, 5, 2];
        assert_eq!(clause.atoms().collect::<Vec<_>>(), vec![2, 5]);
    }

    #[test]
    fn partial_evaluation() {
        let clause: CClause = vec![1, 2, 3];
        let mut trail = Trail::new(3);

        assert!(!clause.satisfied_on(&trail));
        assert!(!clause.falsified_on(&trail));
        assert_eq!(clause.asserts(&trail), None);

        let _ = trail.assert_literal(-1);
        let _ = trail.assert_literal(-3);
        assert_eq!(clause.asserts(&trail), Some(2));

        let _ = trail.assert_literal(-2);
        assert!(clause.falsified_on(&trail));
        assert_eq!(clause.asserts(&trail), None);
    }

    #[test]
    fn repeated_literal_asserts() {
        let clause: CClause = vec![-1, 2, -1];
        let mut trail = Trail::new(2);
        let _ = trail.assert_literal(-2);
        assert_eq!(clause.asserts(&trail), Some(-1));
    }

    #[test]
    fn empty_clause_is_false() {
        let clause: CClause = vec![];
        let trail = Trail::new(1);
        assert!(!clause.satisfied_on(&trail));
        assert!(clause.falsified_on(&trail));
    }
}
