//! Error types used in the library.
//!
//! - Some of these are violations of the contract on input: a malformed formula, model, or configuration. These are returned before any search begins.
//! - Some of these are internally expected --- e.g. trail conflicts are used to control the flow of backtracking search, and never reach the caller.
//! - An invalid state is a defect, and should never be observed.
//!
//! Exhausting the budget of a local search, or proving a formula unsatisfiable, are not errors.
//! Instead, these are [outcomes](crate::reports::Outcome).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{atom::Atom, literal::CLiteral};

/// The general error type, wrapping specific errors.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    /// Some issue with a formula or model.
    Formula(FormulaError),

    /// Some issue with a configuration.
    Config(ConfigError),

    /// Some issue when parsing a formula.
    Parse(ParseError),

    /// A search reached a state which should be impossible.
    InvalidState,
}

/// Violations of the contract on a formula or a model of a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// A formula must be over at least one atom.
    NoAtoms,

    /// A formula must be over at most [ATOM_MAX](crate::structures::atom::ATOM_MAX) atoms.
    TooManyAtoms {
        /// The count of atoms requested.
        atom_count: Atom,
    },

    /// Zero is not a literal.
    ZeroLiteral {
        /// The index of the clause containing zero.
        clause: usize,
    },

    /// The atom of some literal exceeds the count of atoms of the formula.
    AtomOutOfRange {
        /// The index of the clause containing the literal.
        clause: usize,

        /// The literal.
        literal: CLiteral,
    },

    /// A clause without literals.
    EmptyClause {
        /// The index of the empty clause.
        clause: usize,
    },

    /// A model does not value exactly the atoms of the formula.
    ModelLength {
        /// The count of atoms of the formula.
        expected: usize,

        /// The count of values in the model.
        found: usize,
    },
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}

/// Violations of the bounds on a configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The value of the named option is outside the bounds of the option.
    OutOfBounds {
        /// The name of the option.
        name: &'static str,
    },
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input, or no problem specification.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors when asserting a literal on a trail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrailError {
    /// The negation of the literal is on the trail.
    /// This is expected from time to time, and closes a branch of the search.
    Conflict(CLiteral),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Formula(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::InvalidState => write!(f, "Search reached an invalid state"),
        }
    }
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoAtoms => write!(f, "A formula requires at least one atom"),
            Self::TooManyAtoms { atom_count } => write!(
                f,
                "A formula of {atom_count} atoms exceeds the limit of {} atoms",
                crate::structures::atom::ATOM_MAX
            ),
            Self::ZeroLiteral { clause } => write!(f, "Clause {clause} contains 0"),
            Self::AtomOutOfRange { clause, literal } => {
                write!(f, "Clause {clause} contains {literal}, outside the atoms of the formula")
            }
            Self::EmptyClause { clause } => write!(f, "Clause {clause} is empty"),
            Self::ModelLength { expected, found } => {
                write!(f, "Expected a model of {expected} atoms, found {found}")
            }
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds { name } => write!(f, "{name} is outside the permitted bounds"),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification => write!(f, "Missing or malformed problem specification"),
            Self::Line(line) => write!(f, "Failed to parse line {line}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
