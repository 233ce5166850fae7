//! Key structures, such as literals, clauses, and formulas.
//!
//! Literals and clauses are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! ## Formulas
//!
//! A [formula] is a set of [clauses](clause), interpreted as the conjunction of those clauses, together with a count of the atoms the formula is over.
//!
//! ## Valuations
//!
//! A [valuation] is a (partial) function from atoms to boolean values.
//! Local search moves between full valuations (models), while backtracking search extends partial valuations (trails).

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod valuation;
