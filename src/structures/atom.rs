/*!
(The internal representation of) an atom, aka. a 'variable'.

An atom is a thing to which assigning a (boolean) value is of interest.

Each atom is a u32 *u* such that either *u* is 0 or *u - 1* is an atom.
That is, the atoms of a context are [0..*m*) for some *m*, and so an atom may
be used as the index of a structure, e.g. `valuation[atom]`.

# Notes
- The external (display) name of an atom is stored in the atom database.
- In the SAT literature these are often called 'variables' while in the logic
  literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
