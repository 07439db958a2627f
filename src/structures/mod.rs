/*!
The abstract elements of a solve and their representation.

- [Atoms](atom) are the things valued during a solve.
- [Literals](literal) pair an atom with a polarity.
- [Clauses](clause) are disjunctions of literals.
*/

pub mod atom;
pub mod clause;
pub mod literal;
