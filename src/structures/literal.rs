//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity.
//!
//! The canonical implementation of the literal trait is a signed integer, with the sign of the integer indicating the polarity of the literal.
//! As in DIMACS, zero is never a literal.
//!
//! ```rust
//! # use trisat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, false);
//!
//! assert!(!literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(literal.negate().polarity());
//! assert_eq!(literal.negate(), 79);
//! ```

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn negation_is_involutive() {
        let p = CLiteral::new(4, true);
        assert_eq!(p.negate().negate(), p);
        assert_eq!(p.negate().atom(), p.atom());
        assert_ne!(p.negate().polarity(), p.polarity());
    }
}
