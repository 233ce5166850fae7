/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom of a formula with *N* atoms is a u32 in [1..*N*].
Unlike a valuation built on a 'top' element, atoms index complete models with an offset of one, so the value of atom *a* in a [model](crate::structures::valuation::Model) is found at index *a - 1*.

```rust
# use trisat::structures::atom::{Atom, atom_index};
let atom: Atom = 3;
assert_eq!(atom_index(atom), 2);
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, as literals are signed 32 bit integers.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();

/// The index of an atom in a complete model.
#[inline(always)]
pub fn atom_index(atom: Atom) -> usize {
    atom as usize - 1
}
