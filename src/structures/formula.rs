//! Formulas, aka. a collection of clauses, interpreted as the conjunction of those clauses.
//!
//! A formula is fixed when built, and every solve borrows the formula without revising it.
//! Building a formula checks each literal against the declared count of atoms, and so every literal of a formula is a non-zero integer whose absolute value is an atom of the formula.
//!
//! ```rust
//! # use trisat::structures::formula::Formula;
//! # use trisat::types::err::FormulaError;
//! let formula = Formula::new(3, vec![vec![1, 2, 3], vec![-1, 2, -3]]);
//! assert!(formula.is_ok());
//!
//! let formula = Formula::new(2, vec![vec![1, 2, 3]]);
//! assert_eq!(formula, Err(FormulaError::AtomOutOfRange { clause: 0, literal: 3 }));
//! ```

use crate::{
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
        literal::Literal,
        valuation::{Model, Valuation},
    },
    types::err::{self},
};

/// A formula in conjunctive normal form, together with the count of atoms the formula is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula {
    atom_count: Atom,
    clauses: Vec<CClause>,
}

impl Formula {
    /// Builds a formula from a count of atoms and a collection of clauses.
    ///
    /// Returns an error if the count of atoms is zero, or some clause is empty, contains zero, or contains a literal whose atom exceeds the count of atoms.
    pub fn new(atom_count: Atom, clauses: Vec<CClause>) -> Result<Self, err::FormulaError> {
        if atom_count == 0 {
            return Err(err::FormulaError::NoAtoms);
        }
        if atom_count > ATOM_MAX {
            return Err(err::FormulaError::TooManyAtoms { atom_count });
        }

        for (index, clause) in clauses.iter().enumerate() {
            if clause.is_empty() {
                return Err(err::FormulaError::EmptyClause { clause: index });
            }
            for literal in clause {
                if *literal == 0 {
                    return Err(err::FormulaError::ZeroLiteral { clause: index });
                }
                if literal.atom() > atom_count {
                    return Err(err::FormulaError::AtomOutOfRange {
                        clause: index,
                        literal: *literal,
                    });
                }
            }
        }

        Ok(Formula {
            atom_count,
            clauses,
        })
    }

    /// The count of atoms the formula is over.
    pub fn atom_count(&self) -> usize {
        self.atom_count as usize
    }

    /// An iterator over the atoms of the formula, in order.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> {
        1..=self.atom_count
    }

    /// The clauses of the formula, in the order given.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The count of clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Builds a model of the formula from a sequence of values, one for each atom.
    pub fn model(&self, values: Vec<bool>) -> Result<Model, err::FormulaError> {
        let model = Model::from(values);
        self.check_model(&model)?;
        Ok(model)
    }

    /// Checks the model has exactly one value for each atom of the formula.
    pub fn check_model(&self, model: &Model) -> Result<(), err::FormulaError> {
        match model.atom_count() == self.atom_count() {
            true => Ok(()),
            false => Err(err::FormulaError::ModelLength {
                expected: self.atom_count(),
                found: model.atom_count(),
            }),
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::structures::clause::Clause;

        writeln!(f, "p cnf {} {}", self.atom_count, self.clauses.len())?;
        for clause in &self.clauses {
            writeln!(f, "{}", clause.as_dimacs(true))?;
        }
        Ok(())
    }
}
